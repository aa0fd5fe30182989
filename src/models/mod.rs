//! This module contains models that predict which side of the threshold the
//! next round lands on.

pub mod frequency;
pub mod markov;
pub mod model;
pub mod moving_average;

pub use frequency::FrequencyModel;
pub use markov::MarkovModel;
pub use model::{Confidence, Model};
pub use moving_average::MovingAverageModel;
