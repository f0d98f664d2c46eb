use chrono::NaiveDate;
use cruscotto_core::{
    BlockOrdering, CruscottoError, MergeConfig, MissingHistoryPolicy, ObservedPoint,
    PredictedPoint, merge_series, merge_series_with,
};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn history_and_forecast_are_concatenated_with_boundary() {
    let observed = [
        ObservedPoint::new("2024-03-01", 150.23),
        ObservedPoint::new("2024-03-02", 152.45),
    ];
    let predicted = [PredictedPoint::new("2024-03-15", 158.34)];

    let s = merge_series(&observed, &predicted).unwrap();
    let p = s.points();

    assert_eq!(p.len(), 3);
    assert_eq!((p[0].actual(), p[0].predicted()), (Some(150.23), None));
    assert_eq!((p[1].actual(), p[1].predicted()), (Some(152.45), None));
    assert_eq!((p[2].actual(), p[2].predicted()), (None, Some(158.34)));
    assert_eq!(s.boundary(), Some(1));
    assert_eq!(s.boundary_point().unwrap().timestamp(), d("2024-03-02"));
}

#[test]
fn empty_history_is_missing_data() {
    let predicted = [PredictedPoint::new("2024-03-15", 158.34)];
    assert_eq!(
        merge_series(&[], &predicted),
        Err(CruscottoError::MissingHistoricalData)
    );
}

#[test]
fn history_without_well_formed_points_is_missing_data() {
    let observed = [
        ObservedPoint::new("garbage", 1.0),
        ObservedPoint {
            timestamp: Some("2024-03-01".into()),
            value: None,
        },
        ObservedPoint {
            timestamp: None,
            value: Some(1.0),
        },
    ];
    assert_eq!(
        merge_series(&observed, &[]),
        Err(CruscottoError::MissingHistoricalData)
    );
}

#[test]
fn malformed_date_is_dropped_and_order_kept() {
    let observed = [
        ObservedPoint::new("2024-03-04", 10.0),
        ObservedPoint::new("2024-13-01", 11.0),
        ObservedPoint::new("2024-03-01", 12.0),
        ObservedPoint::new("2024-03-05", 13.0),
    ];

    let s = merge_series(&observed, &[]).unwrap();
    let dates: Vec<NaiveDate> = s.points().iter().map(|p| p.timestamp()).collect();

    assert_eq!(dates, vec![d("2024-03-04"), d("2024-03-01"), d("2024-03-05")]);
    assert_eq!(s.boundary(), Some(2));
    assert!(s.predicted().is_empty());
}

#[test]
fn non_finite_values_are_skipped() {
    let observed = [
        ObservedPoint::new("2024-03-01", f64::NAN),
        ObservedPoint::new("2024-03-02", 100.0),
    ];
    let predicted = [
        PredictedPoint::new("2024-03-10", f64::NEG_INFINITY),
        PredictedPoint::new("2024-03-11", 101.0),
    ];

    let s = merge_series(&observed, &predicted).unwrap();
    assert_eq!(s.len(), 2);
    assert_eq!(s.points()[1].sequence_index(), 1);
    assert_eq!(s.points()[1].predicted(), Some(101.0));
}

#[test]
fn early_forecast_still_follows_history() {
    let observed = [ObservedPoint::new("2024-03-10", 100.0)];
    let predicted = [PredictedPoint::new("2024-03-01", 90.0)];

    let s = merge_series(&observed, &predicted).unwrap();
    assert_eq!(s.points()[0].actual(), Some(100.0));
    assert_eq!(s.points()[1].timestamp(), d("2024-03-01"));
    assert_eq!(s.boundary(), Some(0));
}

#[test]
fn timestamps_with_time_parts_are_accepted() {
    let observed = [
        ObservedPoint::new("2024-03-01T00:00:00-05:00", 1.0),
        ObservedPoint::new("2024-03-02 00:00:00", 2.0),
    ];
    let s = merge_series(&observed, &[]).unwrap();
    assert_eq!(s.points()[0].timestamp(), d("2024-03-01"));
    assert_eq!(s.points()[1].timestamp(), d("2024-03-02"));
}

#[test]
fn prediction_only_policy_returns_forecast_without_boundary() {
    let cfg = MergeConfig {
        missing_history: MissingHistoryPolicy::PredictionOnly,
        ..MergeConfig::default()
    };
    let predicted = [
        PredictedPoint::new("2024-03-15", 158.34),
        PredictedPoint::new("2024-03-16", 160.02),
    ];

    let s = merge_series_with(&[], &predicted, &cfg).unwrap();
    assert_eq!(s.boundary(), None);
    assert!(s.boundary_point().is_none());
    assert_eq!(s.len(), 2);
    assert_eq!(s.points()[1].sequence_index(), 1);
}

#[test]
fn history_window_applies_after_sorting() {
    let cfg = MergeConfig {
        history_window: Some(2),
        ordering: BlockOrdering::SortWithinBlocks,
        ..MergeConfig::default()
    };
    let observed = [
        ObservedPoint::new("2024-03-03", 3.0),
        ObservedPoint::new("2024-03-01", 1.0),
        ObservedPoint::new("2024-03-04", 4.0),
        ObservedPoint::new("2024-03-02", 2.0),
    ];
    let predicted = [
        PredictedPoint::new("2024-03-06", 6.0),
        PredictedPoint::new("2024-03-05", 5.0),
    ];

    let s = merge_series_with(&observed, &predicted, &cfg).unwrap();
    let values: Vec<Option<f64>> = s
        .points()
        .iter()
        .map(|p| p.actual().or(p.predicted()))
        .collect();

    assert_eq!(values, vec![Some(3.0), Some(4.0), Some(5.0), Some(6.0)]);
    assert_eq!(s.boundary(), Some(1));
}
