use super::model::{Confidence, Model};
use crate::Prediction;

/// Maps a side to its row/column in the transition table.
fn state_index(state: Prediction) -> usize {
    match state {
        Prediction::Under => 0,
        Prediction::Above => 1,
    }
}

/// A table of transition probabilities between the two states. Each row is
/// indexed by the source state and holds [P(next=Under), P(next=Above)].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TransitionTable {
    rows: [[f64; 2]; 2],
}

impl TransitionTable {
    /// Count every consecutive pair of states in 'data' and normalize each row
    /// by its total. Rows without any outgoing transition stay at zero.
    pub fn from_data(data: &[f64], threshold: f64) -> Self {
        let mut counts = [[0u64; 2]; 2];
        for pair in data.windows(2) {
            let from = state_index(Prediction::of(pair[0], threshold));
            let to = state_index(Prediction::of(pair[1], threshold));
            counts[from][to] += 1;
        }

        let mut rows = [[0.0; 2]; 2];
        for (row, count) in rows.iter_mut().zip(counts.iter()) {
            let total = count[0] + count[1];
            if total > 0 {
                row[0] = count[0] as f64 / total as f64;
                row[1] = count[1] as f64 / total as f64;
            }
        }
        Self { rows }
    }

    /// Return the probability of moving from 'from' to 'to'.
    pub fn probability(&self, from: Prediction, to: Prediction) -> f64 {
        self.rows[state_index(from)][state_index(to)]
    }

    /// Return the outgoing row of 'from' as an (above, under) pair.
    pub fn row(&self, from: Prediction) -> Confidence {
        Confidence::new(
            self.probability(from, Prediction::Above),
            self.probability(from, Prediction::Under),
        )
    }
}

/// A first-order Markov chain over the Above/Under states.
#[derive(Debug, Default, Copy, Clone)]
pub struct MarkovModel;

impl Model for MarkovModel {
    fn predict(&self, data: &[f64], threshold: f64) -> Confidence {
        if data.len() < 2 {
            return Confidence::UNINFORMED;
        }
        let table = TransitionTable::from_data(data, threshold);
        let last = Prediction::of(data[data.len() - 1], threshold);
        table.row(last)
    }
}

#[test]
fn test_unvisited_state() {
    // The only transition is Under -> Above, so nothing leaves 'Above'.
    let table = TransitionTable::from_data(&[1.0, 3.0], 2.0);
    assert_eq!(table.probability(Prediction::Under, Prediction::Above), 1.0);
    assert_eq!(table.row(Prediction::Above), Confidence::new(0.0, 0.0));
    assert_eq!(table.row(Prediction::Above).prediction(), Prediction::Under);
}
