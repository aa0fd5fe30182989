//! Tracks how well the displayed predictions matched the rounds that followed.

use crate::Prediction;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Tracker {
    last_prediction: Option<Prediction>,
    correct: u64,
    total: u64,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score the last prediction against the round 'value'. This must be called
    /// before the prediction for the next round is stored. Does nothing if no
    /// prediction was made yet.
    pub fn record_outcome(&mut self, value: f64, threshold: f64) {
        let Some(predicted) = self.last_prediction else {
            return;
        };
        let actual = Prediction::of(value, threshold);
        self.total += 1;
        if actual == predicted {
            self.correct += 1;
        }
        log::debug!(
            "Predicted {}, got {} ({}/{})",
            predicted,
            actual,
            self.correct,
            self.total
        );
    }

    pub fn set_prediction(&mut self, prediction: Prediction) {
        self.last_prediction = Some(prediction);
    }

    pub fn last_prediction(&self) -> Option<Prediction> {
        self.last_prediction
    }

    pub fn correct(&self) -> u64 {
        self.correct
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Return the percentage of correct predictions, or zero if nothing was
    /// scored yet.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64 * 100.0
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for Tracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Correct Predictions: {}/{}", self.correct, self.total)?;
        write!(f, "Accuracy: {:.1}%", self.accuracy())
    }
}
