pub const MAX_STARS: usize = 5;

/// How a star value is drawn, at half-star resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarFill {
    pub full: usize,
    pub half: bool,
    pub empty: usize,
}

impl StarFill {
    /// Round to the nearest half star and clamp into `0..=5`
    pub fn from_value(value: f64) -> Self {
        let halves = if value.is_finite() {
            (value * 2.0).round().clamp(0.0, (MAX_STARS * 2) as f64) as usize
        } else {
            0
        };
        let full = halves / 2;
        let half = halves % 2 == 1;
        StarFill {
            full,
            half,
            empty: MAX_STARS - full - usize::from(half),
        }
    }
}
