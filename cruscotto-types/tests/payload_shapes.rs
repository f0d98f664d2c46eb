use chrono::NaiveDate;
use cruscotto_types::{
    IndicatorSet, LongTermTrend, MergedSeries, ObservedPoint, PredictedPoint, Signal, Verdict,
    Vote, Votes,
};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn observed_point_decodes_history_row() {
    let row = r#"{ "date": "2024-03-01", "open": 149.0, "high": 151.0, "low": 148.5,
                  "close": 150.23, "volume": 1200000 }"#;
    let p: ObservedPoint = serde_json::from_str(row).unwrap();
    assert_eq!(p, ObservedPoint::new("2024-03-01", 150.23));
}

#[test]
fn null_values_decode_as_absent() {
    let p: ObservedPoint = serde_json::from_str(r#"{ "date": "2024-03-01", "close": null }"#).unwrap();
    assert_eq!(p.value, None);
    let q: PredictedPoint = serde_json::from_str(r#"{ "date": "2024-03-15" }"#).unwrap();
    assert_eq!(q.value, None);
}

#[test]
fn null_or_missing_dates_decode_as_absent() {
    let p: ObservedPoint = serde_json::from_str(r#"{ "date": null, "close": 151.0 }"#).unwrap();
    assert_eq!(p.timestamp, None);
    assert_eq!(p.value, Some(151.0));
    let q: PredictedPoint = serde_json::from_str(r#"{ "price": 158.34 }"#).unwrap();
    assert_eq!(q.timestamp, None);
}

#[test]
fn every_known_key_round_trips_through_set_and_get() {
    let mut set = IndicatorSet::default();
    for (i, key) in IndicatorSet::KEYS.iter().enumerate() {
        assert!(set.set(key, i as f64));
    }
    for (i, key) in IndicatorSet::KEYS.iter().enumerate() {
        assert_eq!(set.get(key), Some(i as f64), "{key}");
    }
    assert!(!set.set("vwap", 1.0));
}

#[test]
fn indicator_set_tolerates_nulls_and_missing_keys() {
    let set: IndicatorSet =
        serde_json::from_str(r#"{ "rsi": 41.2, "macd": null, "price": 180.0 }"#).unwrap();
    assert_eq!(set.rsi(), Some(41.2));
    assert_eq!(set.macd(), None);
    assert_eq!(set.signal(), None);
    assert_eq!(set.price(), Some(180.0));
}

#[test]
fn indicator_set_from_pairs_ignores_unknown_names() {
    let set: IndicatorSet = [("rsi", 25.0), ("ma20", 100.0), ("vwap", 3.0)]
        .into_iter()
        .collect();
    assert_eq!(set.get("rsi"), Some(25.0));
    assert_eq!(set.get("ma20"), Some(100.0));
    assert_eq!(set.get("vwap"), None);
    assert_eq!(set.ma50, None);
}

#[test]
fn non_finite_readings_are_treated_as_absent() {
    let set = IndicatorSet {
        rsi: Some(f64::NAN),
        ma200: Some(f64::INFINITY),
        ..IndicatorSet::default()
    };
    assert_eq!(set.rsi(), None);
    assert_eq!(set.ma200(), None);
}

#[test]
fn series_from_blocks_assigns_indices_and_boundary() {
    let s = MergedSeries::from_blocks(
        vec![(d("2024-03-01"), 150.23), (d("2024-03-02"), 152.45)],
        vec![(d("2024-03-15"), 158.34)],
    );
    let idx: Vec<usize> = s.points().iter().map(|p| p.sequence_index()).collect();
    assert_eq!(idx, vec![0, 1, 2]);
    assert_eq!(s.boundary(), Some(1));
    assert_eq!(s.observed().len(), 2);
    assert_eq!(s.predicted().len(), 1);
    assert_eq!(s.boundary_point().map(|p| p.timestamp()), Some(d("2024-03-02")));
}

#[test]
fn series_from_blocks_drops_non_finite_values() {
    let s = MergedSeries::from_blocks(
        vec![(d("2024-03-01"), 150.23), (d("2024-03-02"), f64::NAN)],
        vec![(d("2024-03-15"), f64::INFINITY), (d("2024-03-16"), 160.02)],
    );
    assert_eq!(s.len(), 2);
    assert_eq!(s.boundary(), Some(0));
    assert_eq!(s.boundary_point().map(|p| p.timestamp()), Some(d("2024-03-01")));

    let points = s.into_points();
    assert!(points[0].is_observed());
    assert!(!points[1].is_observed());
    assert_eq!(points[1].predicted(), Some(160.02));
    assert_eq!(points[1].sequence_index(), 1);
}

#[test]
fn prediction_only_series_has_no_boundary() {
    let s = MergedSeries::from_blocks(vec![], vec![(d("2024-03-15"), 158.34)]);
    assert_eq!(s.boundary(), None);
    assert!(s.observed().is_empty());
    assert_eq!(s.predicted().len(), 1);
}

#[test]
fn merged_series_serializes_chart_rows() {
    let s = MergedSeries::from_blocks(
        vec![(d("2024-03-02"), 152.45)],
        vec![(d("2024-03-15"), 158.34)],
    );
    let v = serde_json::to_value(&s).unwrap();
    assert_eq!(v["boundary"], 0);
    assert_eq!(v["points"][0]["date"], "2024-03-02");
    assert_eq!(v["points"][0]["actual"], 152.45);
    assert!(v["points"][0]["predicted"].is_null());
    assert!(v["points"][1]["actual"].is_null());
    assert_eq!(v["points"][1]["sequence_index"], 1);
}

#[test]
fn verdict_summary_sentences() {
    assert_eq!(
        Verdict::from_tally(2, 1).to_string(),
        "Bullish: 2 bullish signals vs 1 bearish signals"
    );
    assert_eq!(
        Verdict::from_tally(0, 3).to_string(),
        "Bearish: 3 bearish signals vs 0 bullish signals"
    );
    assert_eq!(
        Verdict::from_tally(1, 1).to_string(),
        "Neutral: Equal bullish and bearish signals"
    );
    assert_eq!(
        LongTermTrend::Above.to_string(),
        "Price is above 200-day MA (Bullish)"
    );
}

#[test]
fn verdict_tally_is_capped_at_three_votes() {
    let v = Verdict::from_tally(7, 2);
    assert_eq!(v.tally(), (3, 2));
    assert_eq!(v.signal, Signal::Bullish);

    let v = Verdict::from_tally(u8::MAX, 9);
    assert_eq!(v.tally(), (3, 3));
    assert_eq!(v.signal, Signal::Neutral);
}

#[test]
fn votes_tally_into_verdict() {
    let votes = Votes {
        rsi: None,
        momentum: Some(Vote::Bearish),
        trend: Some(Vote::Bullish),
    };
    let v = Verdict::from(votes);
    assert_eq!(v.signal, Signal::Neutral);
    assert_eq!(v.tally(), (1, 1));
}
