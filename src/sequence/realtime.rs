use crate::foundation::core::Millis;
use crate::sequence::timeline::Timeline;

/// Play `timeline` against the wall clock until it is idle or its clock reaches `horizon`.
///
/// Each pending tick is awaited with a tokio timer anchored to the instant `drive` was called,
/// so slow ticks do not accumulate drift. The timeline is `!Send`; run this on a current-thread
/// runtime (or inside a `LocalSet`). Returns the number of ticks run.
#[tracing::instrument(skip(timeline), fields(start = %timeline.now()))]
pub async fn drive(timeline: &mut Timeline, horizon: Option<Millis>) -> usize {
    let origin = tokio::time::Instant::now();
    let base = timeline.now();
    let mut ran = 0;

    while let Some(due) = timeline.next_due() {
        if horizon.is_some_and(|h| due > h) {
            break;
        }
        let wait = due.saturating_sub(base);
        tokio::time::sleep_until(origin + wait.as_duration()).await;
        ran += timeline.advance_to(due);
    }

    if let Some(h) = horizon {
        if h > timeline.now() {
            tokio::time::sleep_until(origin + h.saturating_sub(base).as_duration()).await;
            timeline.advance_to(h);
        }
    }
    tracing::debug!(ran, at = %timeline.now(), "drive finished");
    ran
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/realtime.rs"]
mod tests;
