use cruscotto::{ChartState, Cruscotto};
use cruscotto_mock::MockApi;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let ticker = std::env::args().nth(1).unwrap_or_else(|| "AAPL".to_string());
    let method = std::env::args().nth(2).unwrap_or_else(|| "linear".to_string());

    let api = MockApi::new();
    let dash = Cruscotto::builder().history_window(30).build()?;
    let snap = dash.snapshot_from_json(
        api.history(&ticker)?,
        api.prediction(&ticker, &method)?,
        api.indicators(&ticker)?,
    )?;

    println!("== {} ({method}) ==", snap.ticker);
    match &snap.chart {
        ChartState::Ready(series) => {
            for p in series.points() {
                let marker = if Some(p.sequence_index()) == series.boundary() {
                    "  <- today"
                } else {
                    ""
                };
                match (p.actual(), p.predicted()) {
                    (Some(v), _) => println!("{}  actual    {v:>10.2}{marker}", p.timestamp()),
                    (_, Some(v)) => println!("{}  predicted {v:>10.2}", p.timestamp()),
                    (None, None) => {}
                }
            }
        }
        ChartState::MissingData => println!("No historical data available"),
    }
    if let Some(c) = snap.confidence {
        println!("Model confidence: {c}%");
    }

    if let Some(zone) = snap.rsi_zone {
        println!("RSI: {zone}");
    }
    if let Some(trend) = snap.long_term_trend {
        println!("{trend}");
    }
    println!("{}", snap.verdict);

    Ok(())
}
