use cruscotto::{
    BlockOrdering, Cruscotto, CruscottoConfig, CruscottoError, IndicatorSet, MergeConfig,
    MissingHistoryPolicy, RsiZone, Signal,
};

#[test]
fn defaults_match_the_dashboard() {
    let dash = Cruscotto::builder().build().unwrap();
    let cfg = dash.config();
    assert_eq!(cfg.merge, MergeConfig::default());
    assert_eq!(cfg.merge.ordering, BlockOrdering::Structural);
    assert_eq!(cfg.merge.missing_history, MissingHistoryPolicy::Error);
    assert_eq!(cfg.classifier.rsi_oversold, 30.0);
    assert_eq!(cfg.classifier.rsi_overbought, 70.0);
}

#[test]
fn invalid_thresholds_are_rejected_at_build() {
    let err = Cruscotto::builder().rsi_thresholds(80.0, 20.0).build().unwrap_err();
    assert!(matches!(err, CruscottoError::InvalidArg(_)));

    let err = Cruscotto::builder().rsi_thresholds(10.0, 120.0).build().unwrap_err();
    assert!(matches!(err, CruscottoError::InvalidArg(_)));
}

#[test]
fn thresholds_flow_into_classification() {
    let dash = Cruscotto::builder().rsi_thresholds(20.0, 60.0).build().unwrap();
    let set: IndicatorSet = [("rsi", 65.0)].into_iter().collect();
    assert_eq!(dash.classify(&set).signal, Signal::Bearish);
    assert_eq!(dash.rsi_zone(&set), Some(RsiZone::Overbought));
    assert_eq!(Cruscotto::default().classify(&set).signal, Signal::Neutral);
}

#[test]
fn whole_config_can_be_supplied() {
    let cfg: CruscottoConfig = serde_json::from_str(
        r#"{ "merge": { "history_window": 30, "ordering": "SortWithinBlocks" } }"#,
    )
    .unwrap();
    let dash = Cruscotto::builder().config(cfg).build().unwrap();
    assert_eq!(dash.config().merge.history_window, Some(30));
    assert_eq!(dash.config().merge.ordering, BlockOrdering::SortWithinBlocks);
}
