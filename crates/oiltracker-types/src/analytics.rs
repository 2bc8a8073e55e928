//! Per-grade technical indicators and the buying score built on them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Indicators {
    /// Last observed price.
    pub p_today: f64,
    pub ma_20: f64,
    /// `ma_20 - 2 * std_20`
    pub bollinger_low: f64,
    pub forecast_min: f64,
    pub forecast_max: f64,
    /// Std of daily returns over the last 30 returns (0.021 = 2.1%).
    pub volatility: f64,
    /// USD/day, least squares over the last 10 prices.
    pub trend_slope: f64,
    pub forecast_1d: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    StrongBuy,
    Buy,
    Watch,
    Avoid,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuyingScore {
    pub indicators: Indicators,
    /// 0..=100
    pub score: u8,
    pub bucket: Bucket,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeScore {
    pub grade_id: u32,
    pub grade_name: String,
    #[serde(flatten)]
    pub score: BuyingScore,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notes {
    pub bollinger: &'static str,
    pub volatility: &'static str,
    pub trend: &'static str,
    pub forecast: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeInterpretation {
    pub grade_id: u32,
    pub grade_name: String,
    pub indicators: Indicators,
    pub notes: Notes,
}
