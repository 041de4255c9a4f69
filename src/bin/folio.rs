use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io::Write as _;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use folio::{
    ContactForm, CounterBoard, CounterState, LoadingState, Millis, RainState, SequenceHandle,
    SiteConfig, TerminalState, Theme, Timeline, TypewriterState,
};

#[derive(Parser, Debug)]
#[command(name = "folio", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a preset in real time on the terminal (Ctrl-C to stop).
    Play(PlayArgs),
    /// Run a preset on the virtual clock and print one JSON line per tick.
    Trace(TraceArgs),
    /// Load and validate a site config.
    Validate(ValidateArgs),
    /// Write the default site config as JSON.
    Init(InitArgs),
    /// Toggle the theme through the process-wide UI state.
    Theme(ThemeArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Preset {
    Typewriter,
    Loading,
    Counter,
    Terminal,
    Contact,
    Rain,
}

#[derive(Parser, Debug)]
struct PresetArgs {
    /// Which animation to run.
    #[arg(value_enum)]
    preset: Preset,

    /// Site config JSON (defaults are used when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the randomized presets (loading, rain).
    #[arg(long)]
    seed: Option<u64>,

    /// Contact form name (contact preset).
    #[arg(long, default_value = "Visitor")]
    name: String,

    /// Contact form e-mail (contact preset).
    #[arg(long, default_value = "visitor@example.com")]
    email: String,

    /// Contact form message (contact preset).
    #[arg(long, default_value = "Hello!")]
    message: String,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    #[command(flatten)]
    preset: PresetArgs,

    /// Stop after this many seconds (infinite presets run until Ctrl-C otherwise).
    #[arg(long)]
    seconds: Option<u64>,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    #[command(flatten)]
    preset: PresetArgs,

    /// Virtual milliseconds to simulate.
    #[arg(long, default_value_t = 5_000)]
    for_ms: u64,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Site config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct InitArgs {
    /// Output path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ThemeArgs {
    /// Theme before the toggle.
    #[arg(long, default_value = "light")]
    from: Theme,
}

/// One observable effect of a tick, as seen by the renderers below.
#[derive(Debug, serde::Serialize)]
#[serde(tag = "preset", rename_all = "snake_case")]
enum Frame {
    Typewriter(TypewriterState),
    Loading(LoadingState),
    LoadingHidden,
    Counter { id: String, state: CounterState },
    Terminal(TerminalState),
    TerminalReady { transcript: String },
    Rain(RainState),
}

type Sink = Rc<RefCell<Vec<Frame>>>;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Play(args) => cmd_play(args),
        Command::Trace(args) => cmd_trace(args),
        Command::Validate(args) => cmd_validate(args),
        Command::Init(args) => cmd_init(args),
        Command::Theme(args) => cmd_theme(args),
    }
}

fn load_config(args: &PresetArgs) -> anyhow::Result<SiteConfig> {
    let mut cfg = match &args.config {
        Some(path) => SiteConfig::from_path(path)
            .with_context(|| format!("load site config '{}'", path.display()))?,
        None => SiteConfig::default(),
    };
    if args.seed.is_some() {
        cfg.loading.seed = args.seed;
        cfg.rain.seed = args.seed;
    }
    cfg.validate().context("validate site config")?;
    Ok(cfg)
}

/// Start `args.preset` on `timeline`, pushing every observable effect into `sink`.
fn start_preset(
    timeline: &mut Timeline,
    cfg: &SiteConfig,
    args: &PresetArgs,
    sink: &Sink,
) -> anyhow::Result<Vec<SequenceHandle>> {
    let out = Rc::clone(sink);
    let handles = match args.preset {
        Preset::Typewriter => {
            let seq = cfg
                .typewriter()?
                .into_sequence(move |s| out.borrow_mut().push(Frame::Typewriter(s.clone())));
            vec![timeline.start(seq)]
        }
        Preset::Loading => {
            let hidden = Rc::clone(sink);
            let seq = cfg.loading_bar()?.into_sequence(
                move |s| out.borrow_mut().push(Frame::Loading(*s)),
                move |_| hidden.borrow_mut().push(Frame::LoadingHidden),
            );
            vec![timeline.start(seq)]
        }
        Preset::Counter => {
            let mut board = CounterBoard::new(cfg.counter_threshold);
            for spec in &cfg.counters {
                board.register(spec.id.clone(), &spec.target, spec.config)?;
            }
            let mut handles = Vec::new();
            for spec in &cfg.counters {
                let out = Rc::clone(sink);
                let id = spec.id.clone();
                let render = move |s: &CounterState| {
                    out.borrow_mut().push(Frame::Counter {
                        id: id.clone(),
                        state: *s,
                    })
                };
                handles.extend(board.on_visible(&spec.id, 1.0, timeline, render));
            }
            handles
        }
        Preset::Terminal | Preset::Contact => {
            let script = if args.preset == Preset::Contact {
                ContactForm::new(&args.name, &args.email, &args.message)
                    .into_script(cfg.terminal)?
            } else {
                cfg.terminal_script()?
            };
            let ready = Rc::clone(sink);
            let seq = script.into_sequence(
                move |s| out.borrow_mut().push(Frame::Terminal(s.clone())),
                move |dismiss| {
                    ready.borrow_mut().push(Frame::TerminalReady {
                        transcript: dismiss.dismiss(),
                    })
                },
            );
            vec![timeline.start(seq)]
        }
        Preset::Rain => {
            let seq = cfg
                .rain()?
                .into_sequence(move |s| out.borrow_mut().push(Frame::Rain(s.clone())));
            vec![timeline.start(seq)]
        }
    };
    Ok(handles)
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.preset)?;
    let sink = Sink::default();
    let mut timeline = Timeline::new();
    start_preset(&mut timeline, &cfg, &args.preset, &sink)?;

    let horizon = Millis(args.for_ms);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    while let Some(due) = timeline.next_due() {
        if due > horizon {
            break;
        }
        timeline.advance_to(due);
        for frame in sink.borrow_mut().drain(..) {
            let line = serde_json::json!({ "at_ms": due, "frame": frame });
            writeln!(out, "{line}").context("write trace line")?;
        }
    }
    let cancelled = timeline.cancel_all();
    tracing::debug!(cancelled, at = %timeline.now(), "trace finished");
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.preset)?;
    let sink = Sink::default();
    let mut timeline = Timeline::new();
    start_preset(&mut timeline, &cfg, &args.preset, &sink)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .enable_io()
        .build()
        .context("build tokio runtime")?;

    let horizon = args.seconds.map(|s| Millis(s.saturating_mul(1000)));
    let mut screen = Screen::default();
    runtime.block_on(async {
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);
        loop {
            let Some(due) = timeline.next_due() else {
                break;
            };
            if horizon.is_some_and(|h| due > h) {
                break;
            }
            let step = folio::drive(&mut timeline, Some(due));
            tokio::select! {
                _ = step => {}
                _ = &mut ctrl_c => break,
            }
            for frame in sink.borrow_mut().drain(..) {
                screen.render(&frame)?;
            }
        }
        anyhow::Ok(())
    })?;

    timeline.cancel_all();
    println!();
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let cfg = SiteConfig::from_path(&args.in_path)?;
    cfg.validate()
        .with_context(|| format!("validate '{}'", args.in_path.display()))?;
    println!(
        "ok: {} ({} typewriter texts, {} counters, {} terminal lines)",
        args.in_path.display(),
        cfg.typewriter.texts.len(),
        cfg.counters.len(),
        cfg.terminal_lines.len()
    );
    Ok(())
}

fn cmd_init(args: InitArgs) -> anyhow::Result<()> {
    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let json = SiteConfig::default().to_json_pretty()?;
    std::fs::write(&args.out, json)
        .with_context(|| format!("write site config '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_theme(args: ThemeArgs) -> anyhow::Result<()> {
    folio::init_ui_state(args.from)?;
    let theme = folio::toggle_theme()?;
    let line = serde_json::json!({
        "theme": theme,
        "icon": theme.icon(),
        "body_class": theme.body_class(),
    });
    println!("{line}");
    Ok(())
}

/// Terminal renderer for `play`.
#[derive(Default)]
struct Screen {
    counters: BTreeMap<String, u64>,
}

impl Screen {
    fn render(&mut self, frame: &Frame) -> anyhow::Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        match frame {
            Frame::Typewriter(s) => write!(out, "\r\x1b[2K{}|", s.display)?,
            Frame::Loading(s) => {
                let filled = usize::from(s.percent()) / 5;
                write!(
                    out,
                    "\r[{}{}] {:>3}%",
                    "#".repeat(filled),
                    ".".repeat(20 - filled),
                    s.percent()
                )?;
            }
            Frame::LoadingHidden => writeln!(out, "\nloaded")?,
            Frame::Counter { id, state } => {
                self.counters.insert(id.clone(), state.value);
                let line: Vec<String> = self
                    .counters
                    .iter()
                    .map(|(id, v)| format!("{id}: {v}"))
                    .collect();
                write!(out, "\r\x1b[2K{}", line.join("   "))?;
            }
            Frame::Terminal(s) => {
                if let Some(ev) = s.last {
                    match ev {
                        folio::TerminalEvent::Char(c) => write!(out, "{c}")?,
                        folio::TerminalEvent::LineBreak => writeln!(out)?,
                    }
                }
            }
            Frame::TerminalReady { .. } => writeln!(out, "[dismissed]")?,
            Frame::Rain(s) => {
                let row: String = s.heads.iter().map(|g| g.ch).collect();
                writeln!(out, "{row}")?;
            }
        }
        out.flush().context("flush stdout")?;
        Ok(())
    }
}
