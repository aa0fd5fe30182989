//! An append-only log of observed round outcomes.

use crate::utils::limits::RECENT_LEN;

#[derive(Debug, Default, Clone)]
pub struct History {
    values: Vec<f64>,
}

impl History {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Add 'value' to the end of the log. The caller must make sure that the
    /// value is finite.
    pub fn append(&mut self, value: f64) {
        debug_assert!(value.is_finite());
        self.values.push(value);
    }

    pub fn reset(&mut self) {
        self.values.clear();
    }

    /// Return the last 'n' values in insertion order, or all of them if the log
    /// is shorter.
    pub fn recent(&self, n: usize) -> &[f64] {
        let start = self.values.len().saturating_sub(n);
        &self.values[start..]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl std::fmt::Display for History {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "No data available.");
        }
        write!(f, "{:?}", self.recent(RECENT_LEN))
    }
}
