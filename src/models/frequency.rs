use super::model::{Confidence, Model};

/// Predicts using the share of all observed rounds that landed above the
/// threshold.
#[derive(Debug, Default, Copy, Clone)]
pub struct FrequencyModel;

impl Model for FrequencyModel {
    fn predict(&self, data: &[f64], threshold: f64) -> Confidence {
        if data.is_empty() {
            return Confidence::UNINFORMED;
        }
        let above = data.iter().filter(|&&x| x > threshold).count();
        let under = data.len() - above;
        let total = data.len() as f64;
        Confidence::new(above as f64 / total, under as f64 / total)
    }
}
