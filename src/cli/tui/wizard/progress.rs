//! Timer-driven completion ratio shown while the project is being created
//!
//! The ratio only moves on ticks; it knows nothing about the real task.

/// Ratio added per tick: four ticks fill the bar
pub const DEFAULT_QUANTUM: f64 = 0.25;

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressTracker {
    ratio: f64,
    quantum: f64,
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new(DEFAULT_QUANTUM)
    }
}

impl ProgressTracker {
    /// Non-positive or non-finite quanta fall back to [`DEFAULT_QUANTUM`]
    pub fn new(quantum: f64) -> Self {
        let quantum = if quantum.is_finite() && quantum > 0.0 {
            quantum.min(1.0)
        } else {
            DEFAULT_QUANTUM
        };
        Self { ratio: 0.0, quantum }
    }

    pub fn arm(&mut self) {
        self.ratio = 0.0;
    }

    /// Advance by one quantum, capped at 1.0. Returns the new ratio.
    pub fn tick(&mut self) -> f64 {
        self.ratio = (self.ratio + self.quantum).min(1.0);
        self.ratio
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn quantum(&self) -> f64 {
        self.quantum
    }

    pub fn is_complete(&self) -> bool {
        self.ratio >= 1.0
    }

    /// Whole percent, for labels
    pub fn percent(&self) -> u16 {
        (self.ratio * 100.0).round() as u16
    }
}
