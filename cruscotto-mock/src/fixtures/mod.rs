pub mod history;
pub mod indicators;
pub mod prediction;
