pub fn by_symbol(s: &str) -> Option<&'static str> {
    match s {
        "AAPL" => Some(
            r#"{
  "ticker": "AAPL",
  "date": "2024-03-01",
  "indicators": {
    "price": 179.66, "ma20": 183.41, "ma50": 186.72, "ma200": 181.05,
    "rsi": 28.9, "macd": -1.84, "signal": -1.52
  }
}"#,
        ),
        "MSFT" => Some(
            r#"{
  "ticker": "MSFT",
  "date": "2024-03-01",
  "indicators": {
    "price": 415.5, "ma20": 408.3, "ma50": 396.1, "ma200": 355.2,
    "rsi": 64.2, "macd": 6.41, "signal": 5.97
  }
}"#,
        ),
        // too little history for the long averages
        "NEWCO" => Some(
            r#"{
  "ticker": "NEWCO",
  "date": "2024-03-01",
  "indicators": {
    "price": 12.1, "ma20": null, "ma50": null, "ma200": null,
    "rsi": null, "macd": 0.12, "signal": 0.12
  }
}"#,
        ),
        _ => None,
    }
}
