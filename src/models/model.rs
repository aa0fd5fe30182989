use crate::Prediction;

/// The probabilities that a model assigns to the next round being above or
/// under the threshold.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Confidence {
    pub above: f64,
    pub under: f64,
}

impl Confidence {
    /// The prior that is used when a model does not have enough data.
    pub const UNINFORMED: Confidence = Confidence {
        above: 0.5,
        under: 0.5,
    };

    pub fn new(above: f64, under: f64) -> Self {
        Self { above, under }
    }

    /// Return the side that this pair prefers. Ties go to 'Under'.
    #[must_use]
    pub fn prediction(&self) -> Prediction {
        Prediction::from_probabilities(self.above, self.under)
    }
}

/// A trait that defines the interface for making predictions. Models are
/// stateless and only read the observations that they are given.
pub trait Model {
    /// Return the probability pair for the round that follows 'data', where
    /// rounds are split by 'threshold'.
    #[must_use]
    fn predict(&self, data: &[f64], threshold: f64) -> Confidence;
}
