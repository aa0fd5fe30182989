pub mod error;
pub mod history;
pub mod models;
pub mod session;
pub mod simulate;
pub mod tracker;
pub mod utils;

pub use error::{PredictorError, Result};
pub use session::{Forecast, ModelConfig, ModelKind, Session};

/// The side of the threshold that a round lands on, or is predicted to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Prediction {
    Above,
    Under,
}

impl Prediction {
    /// Return the side of 'threshold' that 'value' falls on. Values equal to
    /// the threshold count as 'Under'.
    pub fn of(value: f64, threshold: f64) -> Prediction {
        if value > threshold {
            Prediction::Above
        } else {
            Prediction::Under
        }
    }

    /// Pick the side with the higher probability. Ties go to 'Under'.
    pub fn from_probabilities(above: f64, under: f64) -> Prediction {
        if above > under {
            Prediction::Above
        } else {
            Prediction::Under
        }
    }
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Prediction::Above => write!(f, "Above"),
            Prediction::Under => write!(f, "Under"),
        }
    }
}

#[test]
fn test_prediction_sides() {
    assert_eq!(Prediction::of(2.01, 2.0), Prediction::Above);
    assert_eq!(Prediction::of(2.0, 2.0), Prediction::Under);
    assert_eq!(Prediction::of(2.5, 3.0), Prediction::Under);
    assert_eq!(Prediction::from_probabilities(0.6, 0.4), Prediction::Above);
    assert_eq!(Prediction::from_probabilities(0.5, 0.5), Prediction::Under);
    assert_eq!(Prediction::from_probabilities(0.0, 0.0), Prediction::Under);
}
