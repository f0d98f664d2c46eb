use cruscotto_mock::MockApi;
use cruscotto_types::{CruscottoError, IndicatorSet, ObservedPoint, PredictedPoint};
use serde_json::Value;

fn rows<T: serde::de::DeserializeOwned>(body: &str, key: &str) -> Vec<T> {
    let v: Value = serde_json::from_str(body).expect("fixture is valid JSON");
    serde_json::from_value(v[key].clone()).expect("rows decode")
}

#[test]
fn every_fixture_decodes() {
    let api = MockApi::new();
    for t in ["AAPL", "MSFT", "NEWCO"] {
        let _: Vec<ObservedPoint> = rows(api.history(t).unwrap(), "history");
        let _: Vec<PredictedPoint> = rows(api.prediction(t, "linear").unwrap(), "predictions");
        let _: Vec<PredictedPoint> = rows(api.prediction(t, "lstm").unwrap(), "predictions");
        let v: Value = serde_json::from_str(api.indicators(t).unwrap()).unwrap();
        let _: IndicatorSet = serde_json::from_value(v["indicators"].clone()).unwrap();
    }
}

#[test]
fn msft_history_carries_partial_rows() {
    let api = MockApi::new();
    let h: Vec<ObservedPoint> = rows(api.history("MSFT").unwrap(), "history");
    assert_eq!(h.len(), 5);
    assert_eq!(h[3].value, None);
}

#[test]
fn failures_and_unknowns() {
    let api = MockApi::new();
    assert!(matches!(api.history("FAIL"), Err(CruscottoError::Other(_))));
    assert!(matches!(
        api.indicators("ZZZZ"),
        Err(CruscottoError::NotFound { .. })
    ));
    assert!(matches!(
        api.prediction("AAPL", "arima"),
        Err(CruscottoError::InvalidArg(_))
    ));
}
