use super::model::{Confidence, Model};
use crate::utils::limits::DEFAULT_WINDOW;

/// The fixed confidence pairs for an average above and under the threshold.
/// These are not derived from the variance of the window.
const LEAN_ABOVE: Confidence = Confidence {
    above: 0.7,
    under: 0.3,
};
const LEAN_UNDER: Confidence = Confidence {
    above: 0.3,
    under: 0.7,
};

/// Predicts using the mean of the last 'window' rounds.
#[derive(Debug, Copy, Clone)]
pub struct MovingAverageModel {
    window: usize,
}

impl MovingAverageModel {
    pub fn new(window: usize) -> Self {
        Self { window }
    }

    pub fn window(&self) -> usize {
        self.window
    }
}

impl Default for MovingAverageModel {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl Model for MovingAverageModel {
    fn predict(&self, data: &[f64], threshold: f64) -> Confidence {
        if self.window == 0 || data.len() < self.window {
            return Confidence::UNINFORMED;
        }
        let recent = &data[data.len() - self.window..];
        let mean = recent.iter().sum::<f64>() / self.window as f64;

        if mean > threshold {
            LEAN_ABOVE
        } else if mean < threshold {
            LEAN_UNDER
        } else {
            Confidence::UNINFORMED
        }
    }
}
