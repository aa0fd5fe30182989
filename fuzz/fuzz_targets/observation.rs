#![no_main]

use crashpredict::{ModelKind, ModelConfig, Session};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    for kind in ModelKind::ALL {
        let mut session = Session::new(ModelConfig::with_kind(kind));
        session.predict();
        for token in text.split_whitespace() {
            let len = session.history().len();
            let total = session.tracker().total();
            match session.add_observation(token) {
                Ok(forecast) => {
                    assert_eq!(session.history().len(), len + 1);
                    assert_eq!(session.tracker().total(), total + 1);
                    assert!(forecast.confidence.above >= 0.0);
                    assert!(forecast.confidence.under >= 0.0);
                }
                Err(_) => {
                    assert_eq!(session.history().len(), len);
                    assert_eq!(session.tracker().total(), total);
                }
            }
            assert!(session.tracker().correct() <= session.tracker().total());
        }
    }
});
