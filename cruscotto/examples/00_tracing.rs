use cruscotto::Cruscotto;
use cruscotto_mock::MockApi;
use tracing_subscriber::fmt::format::FmtSpan;

// Run with: RUST_LOG=debug cargo run -p cruscotto --features tracing --example 00_tracing
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let api = MockApi::new();
    let dash = Cruscotto::builder().history_window(30).build()?;

    // MSFT carries a broken date and null values; skipped rows show up as debug events
    for ticker in ["AAPL", "MSFT", "NEWCO"] {
        let _ = dash.snapshot_from_json(
            api.history(ticker)?,
            api.prediction(ticker, "linear")?,
            api.indicators(ticker)?,
        )?;
    }

    Ok(())
}
