//! Indicators, buying score and plain-language notes for one price series.
//!
//! Every function takes prices oldest first. Statistics use the population
//! standard deviation; an empty input yields zeros rather than NaN.

use oiltracker_types::analytics::{Bucket, BuyingScore, Indicators, Notes};

const MA_WINDOW: usize = 20;
const VOLATILITY_WINDOW: usize = 30;
const TREND_WINDOW: usize = 10;
const FORECAST_DAYS: u32 = 7;

/// Daily-return std above which the score is penalised (2.5%).
const VOLATILITY_THRESHOLD: f64 = 0.025;
/// A downtrend of 0.15% of MA20 per day earns the full trend bonus.
const FULL_TREND_REL: f64 = 0.0015;

fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

fn std_dev(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    let m = mean(xs);
    mean(&xs.iter().map(|x| (x - m) * (x - m)).collect::<Vec<_>>()).sqrt()
}

fn tail(xs: &[f64], n: usize) -> &[f64] {
    &xs[xs.len().saturating_sub(n)..]
}

/// Least-squares slope of `ys` against x = 1..=n. Zero below two points.
pub fn regression_slope(ys: &[f64]) -> f64 {
    let n = ys.len();
    if n < 2 {
        return 0.0;
    }
    let x_mean = (n as f64 + 1.0) / 2.0;
    let y_mean = mean(ys);
    let (num, den) = ys.iter().enumerate().fold((0.0, 0.0), |(num, den), (i, y)| {
        let dx = (i + 1) as f64 - x_mean;
        (num + dx * (y - y_mean), den + dx * dx)
    });
    if den == 0.0 { 0.0 } else { num / den }
}

pub fn compute_indicators(prices: &[f64]) -> Indicators {
    let last = prices.last().copied().unwrap_or(0.0);

    let window = tail(prices, MA_WINDOW);
    let ma_20 = mean(window);
    let bollinger_low = ma_20 - 2.0 * std_dev(window);

    let returns: Vec<f64> = prices
        .windows(2)
        .filter(|w| w[0] > 0.0)
        .map(|w| (w[1] - w[0]) / w[0])
        .collect();
    let volatility = std_dev(tail(&returns, VOLATILITY_WINDOW));

    let recent = tail(prices, TREND_WINDOW);
    let trend_slope = regression_slope(recent);

    // spread of the recent prices around the line anchored at their first point
    let residuals: Vec<f64> = recent
        .iter()
        .enumerate()
        .map(|(i, p)| p - (recent[0] + trend_slope * i as f64))
        .collect();
    let band = std_dev(&residuals);

    let forecasts = (1..=FORECAST_DAYS).map(|h| last + trend_slope * f64::from(h));
    let (lo, hi) = forecasts.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), f| {
        (lo.min(f), hi.max(f))
    });

    Indicators {
        p_today: last,
        ma_20,
        bollinger_low,
        forecast_min: lo - band,
        forecast_max: hi + band,
        volatility,
        trend_slope,
        forecast_1d: last + trend_slope,
    }
}

pub fn buying_score(ind: &Indicators) -> BuyingScore {
    let mut reasons = Vec::new();

    let mut bollinger_bonus = 0.0;
    if ind.p_today < ind.bollinger_low {
        let width = (ind.ma_20 - ind.bollinger_low).max(1e-9);
        let proximity = ((ind.bollinger_low - ind.p_today) / width).min(1.0);
        bollinger_bonus = 10.0 + 5.0 * proximity;
        reasons.push("price below lower Bollinger band");
    }

    let forecast_bonus = if ind.p_today <= ind.forecast_min {
        reasons.push("at or below 7-day forecast minimum");
        20.0
    } else if ind.p_today <= ind.ma_20 {
        reasons.push("at or below MA20");
        10.0
    } else {
        0.0
    };

    let mut trend_bonus = 0.0;
    if ind.trend_slope < 0.0 {
        let rel = (ind.trend_slope.abs() / ind.ma_20.max(1.0) / FULL_TREND_REL).min(1.0);
        trend_bonus = 5.0 + 5.0 * rel;
        reasons.push("recent downtrend");
    }

    let mut volatility_malus = 0.0;
    if ind.volatility > VOLATILITY_THRESHOLD {
        let over = ((ind.volatility - VOLATILITY_THRESHOLD) / VOLATILITY_THRESHOLD).min(1.0);
        volatility_malus = 10.0 + 10.0 * over;
        reasons.push("high volatility");
    }

    let raw = 50.0 + bollinger_bonus + forecast_bonus + trend_bonus - volatility_malus;
    let score = raw.round().clamp(0.0, 100.0) as u8;

    let comment = if reasons.is_empty() {
        "neutral situation".to_string()
    } else {
        format!("{} = opportunity", reasons.join(" + "))
    };

    BuyingScore {
        indicators: *ind,
        score,
        bucket: bucket_for(score),
        comment,
    }
}

pub fn bucket_for(score: u8) -> Bucket {
    match score {
        85.. => Bucket::StrongBuy,
        65..=84 => Bucket::Buy,
        50..=64 => Bucket::Watch,
        _ => Bucket::Avoid,
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tone {
    Positive,
    Neutral,
    Negative,
}

pub fn interpret(ind: &Indicators) -> Notes {
    let width = ind.ma_20 - ind.bollinger_low;
    let pct = if width != 0.0 { (ind.ma_20 - ind.p_today) / width } else { 0.0 };
    let bollinger = if pct > 1.1 {
        ("Price well below the lower band: possibly oversold, contrarian buying opportunity", Tone::Positive)
    } else if pct > 0.6 {
        ("Price near the lower band: short-term upside bias on a rebound", Tone::Positive)
    } else if pct < -0.1 {
        ("Price above the moving average: positive momentum", Tone::Positive)
    } else {
        ("Price around MA20: neutral", Tone::Neutral)
    };

    let volatility = if ind.volatility >= 0.03 {
        ("Volatility above 3% (30d): high risk, size positions accordingly", Tone::Negative)
    } else if ind.volatility >= 0.02 {
        ("Moderate volatility (2-3%)", Tone::Neutral)
    } else {
        ("Low volatility (<2%): calm conditions", Tone::Neutral)
    };

    let trend = if ind.trend_slope < -2.0 {
        ("Marked downtrend (10d regression)", Tone::Negative)
    } else if ind.trend_slope < 0.0 {
        ("Slight downtrend", Tone::Negative)
    } else if ind.trend_slope > 2.0 {
        ("Marked uptrend", Tone::Positive)
    } else {
        ("Sideways trend", Tone::Neutral)
    };

    let diff = ind.forecast_1d - ind.p_today;
    let forecast = if diff > 5.0 {
        ("1-day projection up (> +$5)", Tone::Positive)
    } else if diff > 0.0 {
        ("1-day projection slightly up", Tone::Positive)
    } else if diff < -5.0 {
        ("1-day projection down (< -$5)", Tone::Negative)
    } else {
        ("1-day projection flat", Tone::Neutral)
    };

    let tones = [bollinger.1, volatility.1, trend.1, forecast.1];
    let positives = tones.iter().filter(|t| **t == Tone::Positive).count();
    let negatives = tones.iter().filter(|t| **t == Tone::Negative).count();
    let summary = if positives >= 2 && negatives == 0 {
        "Favourable context"
    } else if negatives >= 2 && positives == 0 {
        "Unfavourable context"
    } else if positives > negatives {
        "Slight preference to buy"
    } else if negatives > positives {
        "Slight preference for caution"
    } else {
        "Neutral signal"
    };

    Notes {
        bollinger: bollinger.0,
        volatility: volatility.0,
        trend: trend.0,
        forecast: forecast.0,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indicators(p_today: f64, trend_slope: f64, volatility: f64) -> Indicators {
        Indicators {
            p_today,
            ma_20: 1000.0,
            bollinger_low: 980.0,
            forecast_min: 970.0,
            forecast_max: 1030.0,
            volatility,
            trend_slope,
            forecast_1d: p_today + trend_slope,
        }
    }

    #[test]
    fn slope_needs_two_points() {
        assert_eq!(regression_slope(&[]), 0.0);
        assert_eq!(regression_slope(&[950.0]), 0.0);
        assert!((regression_slope(&[1.0, 3.0]) - 2.0).abs() < 1e-12);
        assert!((regression_slope(&[10.0, 8.0, 6.0, 4.0]) + 2.0).abs() < 1e-12);
    }

    #[test]
    fn single_point_series() {
        let ind = compute_indicators(&[950.0]);
        assert_eq!(ind.p_today, 950.0);
        assert_eq!(ind.ma_20, 950.0);
        assert_eq!(ind.bollinger_low, 950.0);
        assert_eq!(ind.trend_slope, 0.0);
        assert_eq!(ind.volatility, 0.0);
        assert_eq!((ind.forecast_min, ind.forecast_max, ind.forecast_1d), (950.0, 950.0, 950.0));
    }

    #[test]
    fn empty_series_is_all_zero() {
        let ind = compute_indicators(&[]);
        assert_eq!(ind.p_today, 0.0);
        assert_eq!(ind.ma_20, 0.0);
        assert!(ind.forecast_min.is_finite());
    }

    #[test]
    fn linear_series() {
        // 30 prices rising by 2/day from 900
        let prices: Vec<f64> = (0..30).map(|i| 900.0 + 2.0 * i as f64).collect();
        let ind = compute_indicators(&prices);
        assert_eq!(ind.p_today, 958.0);
        // mean of 920..=958 step 2
        assert!((ind.ma_20 - 939.0).abs() < 1e-9);
        assert!((ind.trend_slope - 2.0).abs() < 1e-9);
        assert!((ind.forecast_1d - 960.0).abs() < 1e-9);
        // perfect fit, no residual band
        assert!((ind.forecast_min - 960.0).abs() < 1e-9);
        assert!((ind.forecast_max - 972.0).abs() < 1e-9);
        assert!(ind.volatility > 0.0 && ind.volatility < 0.001);
    }

    #[test]
    fn neutral_is_watch() {
        let s = buying_score(&indicators(1010.0, 1.0, 0.01));
        assert_eq!(s.score, 50);
        assert_eq!(s.bucket, Bucket::Watch);
        assert_eq!(s.comment, "neutral situation");
    }

    #[test]
    fn deep_dip_is_strong_buy() {
        // below band by a full width, below forecast min, steep downtrend
        let s = buying_score(&indicators(960.0, -5.0, 0.01));
        assert_eq!(s.score, 95);
        assert_eq!(s.bucket, Bucket::StrongBuy);
        assert!(s.comment.starts_with("price below lower Bollinger band"));
        assert!(s.comment.ends_with("= opportunity"));
    }

    #[test]
    fn mild_dip_is_buy() {
        // under MA20 only, slope at 60% of the full-bonus rate: 50 + 10 + 8
        let s = buying_score(&indicators(990.0, -0.9, 0.01));
        assert_eq!(s.score, 68);
        assert_eq!(s.bucket, Bucket::Buy);
    }

    #[test]
    fn volatile_rally_is_avoid() {
        let s = buying_score(&indicators(1010.0, 1.0, 0.1));
        assert_eq!(s.score, 30);
        assert_eq!(s.bucket, Bucket::Avoid);
        assert_eq!(s.comment, "high volatility = opportunity");
    }

    #[test]
    fn bucket_edges() {
        assert_eq!(bucket_for(100), Bucket::StrongBuy);
        assert_eq!(bucket_for(85), Bucket::StrongBuy);
        assert_eq!(bucket_for(84), Bucket::Buy);
        assert_eq!(bucket_for(65), Bucket::Buy);
        assert_eq!(bucket_for(64), Bucket::Watch);
        assert_eq!(bucket_for(50), Bucket::Watch);
        assert_eq!(bucket_for(49), Bucket::Avoid);
        assert_eq!(bucket_for(0), Bucket::Avoid);
    }

    #[test]
    fn notes_summary() {
        // above MA (positive), calm, sharp uptrend (positive), projection up (positive)
        let up = interpret(&indicators(1010.0, 6.0, 0.01));
        assert_eq!(up.trend, "Marked uptrend");
        assert_eq!(up.summary, "Favourable context");

        // around MA, risky, falling, projection down
        let down = interpret(&indicators(1000.0, -6.0, 0.05));
        assert_eq!(down.bollinger, "Price around MA20: neutral");
        assert_eq!(down.summary, "Unfavourable context");

        let flat = interpret(&indicators(1000.0, 0.0, 0.025));
        assert_eq!(flat.volatility, "Moderate volatility (2-3%)");
        assert_eq!(flat.summary, "Neutral signal");
    }
}
