//! Selects a model, runs it over the session history and keeps the tracker in
//! sync with what was last predicted.

use std::str::FromStr;

use crate::error::{PredictorError, Result};
use crate::history::History;
use crate::models::{Confidence, FrequencyModel, MarkovModel, Model, MovingAverageModel};
use crate::simulate::CrashRounds;
use crate::tracker::Tracker;
use crate::utils::limits::{DEFAULT_THRESHOLD, DEFAULT_WINDOW, MAX_WINDOW, MIN_WINDOW};
use crate::utils::{parse_observation, threshold_percent};
use crate::Prediction;

/// The three available models.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ModelKind {
    Frequency,
    MovingAverage,
    Markov,
}

impl ModelKind {
    pub const ALL: [ModelKind; 3] = [
        ModelKind::Frequency,
        ModelKind::MovingAverage,
        ModelKind::Markov,
    ];

    /// Return the name that is accepted by the parser.
    pub fn name(&self) -> &'static str {
        match self {
            ModelKind::Frequency => "frequency",
            ModelKind::MovingAverage => "moving-average",
            ModelKind::Markov => "markov",
        }
    }
}

impl FromStr for ModelKind {
    type Err = PredictorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "frequency" | "freq" => Ok(ModelKind::Frequency),
            "moving-average" | "moving_average" | "ma" => Ok(ModelKind::MovingAverage),
            "markov" | "markov-chain" => Ok(ModelKind::Markov),
            _ => Err(PredictorError::UnknownModel(s.trim().to_string())),
        }
    }
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelKind::Frequency => write!(f, "Frequency"),
            ModelKind::MovingAverage => write!(f, "Moving Average"),
            ModelKind::Markov => write!(f, "Markov Chain"),
        }
    }
}

/// Stores the model selection and its parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ModelConfig {
    /// Specifies the model that runs.
    kind: ModelKind,
    /// Specifies the moving average window. Ignored by the other models.
    window: usize,
    /// Specifies the value that separates 'Under' from 'Above'.
    threshold: f64,
}

impl ModelConfig {
    pub fn new(kind: ModelKind, window: usize, threshold: f64) -> Result<Self> {
        if !(MIN_WINDOW..=MAX_WINDOW).contains(&window) {
            return Err(PredictorError::InvalidWindow(window));
        }
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(PredictorError::InvalidThreshold(threshold));
        }
        Ok(Self {
            kind,
            window,
            threshold,
        })
    }

    pub fn with_kind(kind: ModelKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Run the selected model over 'data'.
    pub fn evaluate(&self, data: &[f64]) -> Confidence {
        match self.kind {
            ModelKind::Frequency => FrequencyModel.predict(data, self.threshold),
            ModelKind::MovingAverage => {
                MovingAverageModel::new(self.window).predict(data, self.threshold)
            }
            ModelKind::Markov => MarkovModel.predict(data, self.threshold),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            kind: ModelKind::Frequency,
            window: DEFAULT_WINDOW,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// The outcome of one evaluation: the probability pair and the side it picks.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Forecast {
    pub confidence: Confidence,
    pub prediction: Prediction,
    pub threshold: f64,
}

impl std::fmt::Display for Forecast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pct = threshold_percent(self.threshold);
        writeln!(f, "Prediction: {} {}", self.prediction, self.threshold)?;
        write!(
            f,
            "Above {}: {:.1}% | Under {}: {:.1}%",
            pct,
            self.confidence.above * 100.0,
            pct,
            self.confidence.under * 100.0
        )
    }
}

/// One user session. Owns the history and the tracker exclusively, so separate
/// sessions never share state.
#[derive(Debug, Default, Clone)]
pub struct Session {
    config: ModelConfig,
    history: History,
    tracker: Tracker,
}

impl Session {
    pub fn new(config: ModelConfig) -> Self {
        Self {
            config,
            history: History::new(),
            tracker: Tracker::new(),
        }
    }

    /// Parse 'text' and add it as the next observation. On failure nothing is
    /// changed.
    pub fn add_observation(&mut self, text: &str) -> Result<Forecast> {
        match parse_observation(text) {
            Ok(value) => self.add_value(value),
            Err(err) => {
                log::warn!("Rejected input: {}", err);
                Err(err)
            }
        }
    }

    /// Add the observation 'value', score the previous prediction against it
    /// and compute the prediction for the next round.
    pub fn add_value(&mut self, value: f64) -> Result<Forecast> {
        if !value.is_finite() {
            return Err(PredictorError::InvalidInput(value.to_string()));
        }
        self.tracker.record_outcome(value, self.config.threshold);
        self.history.append(value);
        log::info!("Added {} to history", value);
        Ok(self.predict())
    }

    /// Run the selected model and store its prediction as the one that the next
    /// observation is scored against.
    pub fn predict(&mut self) -> Forecast {
        let forecast = self.forecast();
        self.tracker.set_prediction(forecast.prediction);
        forecast
    }

    /// Run the selected model without touching the tracker.
    pub fn forecast(&self) -> Forecast {
        let confidence = self.config.evaluate(self.history.as_slice());
        Forecast {
            confidence,
            prediction: confidence.prediction(),
            threshold: self.config.threshold,
        }
    }

    /// Switch to 'config' and recompute the prediction.
    pub fn select_model(&mut self, config: ModelConfig) -> Forecast {
        if config != self.config {
            log::info!(
                "Switching to the {} model (window {})",
                config.kind,
                config.window
            );
        }
        self.config = config;
        self.predict()
    }

    /// Feed every whitespace separated token in 'text' into the session, in
    /// order. Tokens that don't parse are skipped and returned, and the number
    /// of accepted observations is returned with them.
    pub fn replay(&mut self, text: &str) -> (usize, Vec<PredictorError>) {
        let mut accepted = 0;
        let mut skipped = Vec::new();
        for token in text.split_whitespace() {
            match self.add_observation(token) {
                Ok(_) => accepted += 1,
                Err(err) => skipped.push(err),
            }
        }
        log::info!(
            "Replayed {} observations, skipped {}",
            accepted,
            skipped.len()
        );
        (accepted, skipped)
    }

    /// Feed 'rounds' synthetic crash multipliers drawn with 'seed' into the
    /// session.
    pub fn simulate(&mut self, rounds: usize, seed: u64) -> Result<()> {
        for value in CrashRounds::new(seed)?.take(rounds) {
            self.add_value(value)?;
        }
        log::info!("Simulated {} rounds with seed {}", rounds, seed);
        Ok(())
    }

    /// Clear the history and the tracker. The model selection stays.
    pub fn reset(&mut self) {
        self.history.reset();
        self.tracker.reset();
        log::info!("History and stats reset");
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }
}
