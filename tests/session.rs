use crashpredict::models::Confidence;
use crashpredict::{ModelConfig, ModelKind, Prediction, PredictorError, Session};

fn session_with(kind: ModelKind, values: &[f64]) -> Session {
    let mut session = Session::new(ModelConfig::with_kind(kind));
    for v in values {
        session.add_value(*v).unwrap();
    }
    session
}

#[test]
fn test_empty_frequency() {
    let mut session = Session::default();
    let forecast = session.predict();
    assert_eq!(forecast.confidence, Confidence::UNINFORMED);
    assert_eq!(forecast.prediction, Prediction::Under);
    assert_eq!(session.tracker().last_prediction(), Some(Prediction::Under));
}

#[test]
fn test_scenarios() {
    let mut session = session_with(ModelKind::Frequency, &[1.5, 2.5, 3.0, 0.9, 2.1]);
    let forecast = session.predict();
    assert_eq!(forecast.confidence, Confidence::new(0.6, 0.4));
    assert_eq!(forecast.prediction, Prediction::Above);

    let mut session = session_with(ModelKind::MovingAverage, &[1.0; 5]);
    let forecast = session.predict();
    assert_eq!(forecast.confidence, Confidence::new(0.3, 0.7));
    assert_eq!(forecast.prediction, Prediction::Under);

    let mut session = session_with(ModelKind::Markov, &[1.0, 3.0, 1.0, 3.0]);
    let forecast = session.predict();
    assert_eq!(forecast.confidence, Confidence::new(0.0, 1.0));
    assert_eq!(forecast.prediction, Prediction::Under);
}

#[test]
fn test_predict_is_idempotent() {
    for kind in ModelKind::ALL {
        let mut session = session_with(kind, &[1.2, 3.4, 2.0, 5.5, 1.1, 2.2]);
        let first = session.predict();
        let second = session.predict();
        assert_eq!(first, second);
        assert_eq!(session.tracker().total(), 5);
    }
}

#[test]
fn test_accuracy_uses_previous_prediction() {
    let mut session = Session::default();
    session.add_value(3.0).unwrap();
    // No prediction was shown yet, so nothing is scored.
    assert_eq!(session.tracker().total(), 0);
    assert_eq!(session.tracker().last_prediction(), Some(Prediction::Above));

    session.add_observation("2.5").unwrap();
    assert_eq!((session.tracker().correct(), session.tracker().total()), (1, 1));

    // The history is now all 'Above', so the prediction stays 'Above'.
    session.add_observation("1.5").unwrap();
    assert_eq!((session.tracker().correct(), session.tracker().total()), (1, 2));
    assert_eq!(session.tracker().accuracy(), 50.0);
}

#[test]
fn test_invalid_input_changes_nothing() {
    let mut session = session_with(ModelKind::Frequency, &[1.5, 2.5]);
    let before = *session.tracker();

    for text in ["", "abc", "1.2.3", "NaN", "inf"] {
        let res = session.add_observation(text);
        assert!(matches!(res, Err(PredictorError::InvalidInput(_))));
    }
    assert!(session.add_value(f64::NAN).is_err());

    assert_eq!(session.history().as_slice(), &[1.5, 2.5]);
    assert_eq!(session.tracker(), &before);
}

#[test]
fn test_select_model_recomputes() {
    let mut session = session_with(ModelKind::Frequency, &[3.0, 3.0, 3.0, 1.0, 1.0]);
    assert_eq!(session.tracker().last_prediction(), Some(Prediction::Above));

    let config = ModelConfig::new(ModelKind::MovingAverage, 3, 2.0).unwrap();
    let forecast = session.select_model(config);
    // The mean of [3, 1, 1] is under the threshold.
    assert_eq!(forecast.prediction, Prediction::Under);
    assert_eq!(session.tracker().last_prediction(), Some(Prediction::Under));
    assert_eq!(session.config().window(), 3);
}

#[test]
fn test_reset() {
    let mut session = session_with(ModelKind::Markov, &[1.0, 3.0, 1.0]);
    session.reset();
    assert!(session.history().is_empty());
    assert_eq!(session.tracker().total(), 0);
    assert_eq!(session.tracker().last_prediction(), None);
    assert_eq!(session.config().kind(), ModelKind::Markov);
}

#[test]
fn test_sessions_are_isolated() {
    let mut a = Session::default();
    let b = Session::default();
    a.add_value(1.0).unwrap();
    a.add_value(1.0).unwrap();
    assert_eq!(a.history().len(), 2);
    assert!(b.history().is_empty());
    assert_eq!(b.tracker().total(), 0);
}

#[test]
fn test_config() {
    assert_eq!(
        ModelConfig::new(ModelKind::MovingAverage, 2, 2.0),
        Err(PredictorError::InvalidWindow(2))
    );
    assert!(ModelConfig::new(ModelKind::MovingAverage, 16, 2.0).is_err());
    assert!(ModelConfig::new(ModelKind::MovingAverage, 15, 2.0).is_ok());
    assert!(ModelConfig::new(ModelKind::Frequency, 5, 0.0).is_err());
    assert!(ModelConfig::new(ModelKind::Frequency, 5, f64::INFINITY).is_err());

    let config = ModelConfig::default();
    assert_eq!(config.kind(), ModelKind::Frequency);
    assert_eq!(config.window(), 5);
    assert_eq!(config.threshold(), 2.0);
}

#[test]
fn test_model_names() {
    for kind in ModelKind::ALL {
        assert_eq!(kind.name().parse::<ModelKind>(), Ok(kind));
    }
    assert_eq!("MA".parse::<ModelKind>(), Ok(ModelKind::MovingAverage));
    assert!(matches!(
        "lstm".parse::<ModelKind>(),
        Err(PredictorError::UnknownModel(_))
    ));
}

#[test]
fn test_forecast_display() {
    let mut session = session_with(ModelKind::Frequency, &[1.5, 2.5, 3.0, 0.9, 2.1]);
    assert_eq!(
        session.predict().to_string(),
        "Prediction: Above 2\nAbove 200%: 60.0% | Under 200%: 40.0%"
    );
}

#[test]
fn test_custom_threshold() {
    let config = ModelConfig::new(ModelKind::Frequency, 5, 3.0).unwrap();
    let mut session = Session::new(config);

    session.add_value(3.5).unwrap();
    assert_eq!(session.tracker().last_prediction(), Some(Prediction::Above));

    // 2.5 is 'Above' 2.0 but 'Under' 3.0, so the prediction missed.
    session.add_value(2.5).unwrap();
    assert_eq!((session.tracker().correct(), session.tracker().total()), (0, 1));

    session.add_value(2.9).unwrap();
    assert_eq!((session.tracker().correct(), session.tracker().total()), (1, 2));

    let forecast = session.predict();
    assert_eq!(forecast.prediction, Prediction::Under);
    assert_eq!(
        forecast.to_string(),
        "Prediction: Under 3\nAbove 300%: 33.3% | Under 300%: 66.7%"
    );
}

#[test]
fn test_replay_skips_invalid_tokens() {
    let mut session = Session::default();
    let (accepted, skipped) = session.replay("1.5 abc 2.5\n3.0\tNaN\n");
    assert_eq!(accepted, 3);
    assert_eq!(
        skipped,
        vec![
            PredictorError::InvalidInput("abc".to_string()),
            PredictorError::InvalidInput("NaN".to_string()),
        ]
    );
    assert_eq!(session.history().as_slice(), &[1.5, 2.5, 3.0]);
    assert_eq!(session.tracker().total(), 2);

    let (accepted, skipped) = session.replay("   ");
    assert_eq!(accepted, 0);
    assert!(skipped.is_empty());
}

#[test]
fn test_simulate() {
    let mut a = Session::default();
    let mut b = Session::default();
    a.simulate(200, 42).unwrap();
    b.simulate(200, 42).unwrap();

    assert_eq!(a.history().len(), 200);
    assert_eq!(a.history().as_slice(), b.history().as_slice());
    assert_eq!(a.tracker(), b.tracker());
    assert_eq!(a.tracker().total(), 199);
    assert!(a.history().as_slice().iter().all(|&x| x >= 1.0));

    let mut c = Session::default();
    c.simulate(200, 7).unwrap();
    assert_ne!(a.history().as_slice(), c.history().as_slice());
}

#[test]
fn test_history_keeps_parsed_value() {
    let mut session = Session::default();
    session.add_observation(" 1.870 ").unwrap();
    let last = session.history().recent(1);
    assert_eq!(last, &[1.87]);
    assert_eq!(format!("Added {} to history", last[0]), "Added 1.87 to history");
}
