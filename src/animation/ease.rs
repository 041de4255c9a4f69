use crate::foundation::core::Millis;

/// Easing curves mapping normalized progress in `[0, 1]` to normalized output in `[0, 1]`.
///
/// Every curve is monotonic and pins both endpoints, so an eased counter never overshoots its
/// target and always lands on it exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    Linear,
    InQuad,
    #[default]
    OutQuad,
    InOutQuad,
    OutCubic,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => ease_out_quad(t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }

    /// Ease the progress of `elapsed` through `duration`.
    pub fn at(self, elapsed: Millis, duration: Millis) -> f64 {
        self.apply(normalized_progress(elapsed, duration))
    }
}

/// `p * (2 - p)`: fast start, gentle landing.
pub fn ease_out_quad(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    p * (2.0 - p)
}

/// `elapsed / duration`, clamped to `[0, 1]`.
pub fn normalized_progress(elapsed: Millis, duration: Millis) -> f64 {
    elapsed.ratio_of(duration).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
