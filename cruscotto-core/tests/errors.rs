use cruscotto_core::{CruscottoError, ObservedPoint, merge_series};

#[test]
fn missing_history_propagates_with_question_mark() {
    fn chart(observed: &[ObservedPoint]) -> Result<usize, CruscottoError> {
        let series = merge_series(observed, &[])?;
        Ok(series.len())
    }

    let err = chart(&[]).unwrap_err();
    assert_eq!(err, CruscottoError::MissingHistoricalData);
    assert!(err.is_missing_data());
    assert_eq!(chart(&[ObservedPoint::new("2024-03-01", 1.0)]), Ok(1));
}
