//! Synthetic price history.
//!
//! Each grade gets a fixed baseline, uniform noise and a 12-day saw-tooth
//! drift. The random source is passed in so callers can seed it.

use anyhow::{Result, anyhow};
use chrono::{Days, NaiveDate};
use rand::Rng;

use oiltracker_types::models::{Grade, PriceObservation};

/// Length of the drift cycle, in days.
const DRIFT_PERIOD: u32 = 12;

/// Half-width of the uniform noise added to each price.
const NOISE_AMPLITUDE: f64 = 15.0;

/// Exchange rates are drawn in thousandths from `[3.100, 3.500)`.
const USD_TND_MILLIS: std::ops::Range<u32> = 3100..3500;

/// Baseline price for a grade: `930 + 12 * id`.
pub fn base_level(grade_id: u32) -> f64 {
    930.0 + 12.0 * f64::from(grade_id)
}

/// One observation per (grade, day), grade-major and oldest first, with the
/// last day of every run equal to `today`. Fails if the window reaches
/// before the earliest representable date.
pub fn generate_prices<R: Rng>(
    rng: &mut R,
    grades: &[Grade],
    today: NaiveDate,
    window_days: u32,
) -> Result<Vec<PriceObservation>> {
    if window_days > 0 {
        today
            .checked_sub_days(Days::new(u64::from(window_days - 1)))
            .ok_or_else(|| anyhow!("{} days before {} is out of range", window_days, today))?;
    }

    let mut out = Vec::with_capacity(grades.len() * window_days as usize);

    for grade in grades {
        let base = base_level(grade.id);
        for day in 0..window_days {
            let date = today
                .checked_sub_days(Days::new(u64::from(window_days - 1 - day)))
                .ok_or_else(|| anyhow!("date before {} is out of range", today))?;
            let noise = rng.random::<f64>() * 2.0 * NOISE_AMPLITUDE - NOISE_AMPLITUDE;
            let drift = f64::from(day % DRIFT_PERIOD) - 6.0;
            let usd_tnd = f64::from(rng.random_range(USD_TND_MILLIS)) / 1000.0;

            out.push(PriceObservation {
                grade_id: grade.id,
                grade_name: grade.name.clone(),
                date,
                price_usd: round2(base + noise + drift),
                usd_tnd,
            });
        }
    }

    Ok(out)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[test]
    fn one_row_per_grade_and_day() {
        let grades = seed::grades();
        let rows = generate_prices(&mut StdRng::seed_from_u64(1), &grades, today(), 60).unwrap();
        assert_eq!(rows.len(), grades.len() * 60);

        for (g, chunk) in grades.iter().zip(rows.chunks(60)) {
            assert!(chunk.iter().all(|r| r.grade_id == g.id && r.grade_name == g.name));
            assert_eq!(chunk[0].date, NaiveDate::from_ymd_opt(2026, 8, 19).unwrap());
            assert_eq!(chunk[59].date, today());
            for pair in chunk.windows(2) {
                assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
            }
        }
    }

    #[test]
    fn prices_stay_near_baseline() {
        let grades = seed::grades();
        let rows = generate_prices(&mut StdRng::seed_from_u64(2), &grades, today(), 60).unwrap();
        for row in &rows {
            let base = base_level(row.grade_id);
            assert!(row.price_usd.is_finite());
            // noise in [-15, 15) plus drift in [-6, 5]
            assert!(row.price_usd >= base - 21.0 && row.price_usd <= base + 20.0, "{row:?}");
            assert_eq!(round2(row.price_usd), row.price_usd);
        }
    }

    #[test]
    fn exchange_rate_in_range_with_three_decimals() {
        let grades = seed::grades();
        let rows = generate_prices(&mut StdRng::seed_from_u64(3), &grades, today(), 90).unwrap();
        for row in &rows {
            assert!((3.1..3.5).contains(&row.usd_tnd), "{}", row.usd_tnd);
            let millis = row.usd_tnd * 1000.0;
            assert!((millis - millis.round()).abs() < 1e-6);
        }
    }

    #[test]
    fn same_seed_same_series() {
        let grades = seed::grades();
        let a = generate_prices(&mut StdRng::seed_from_u64(42), &grades, today(), 10).unwrap();
        let b = generate_prices(&mut StdRng::seed_from_u64(42), &grades, today(), 10).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_window() {
        let rows = generate_prices(&mut StdRng::seed_from_u64(0), &seed::grades(), today(), 0).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn window_before_min_date_is_an_error() {
        let grades = seed::grades();
        let near_min = NaiveDate::MIN + Days::new(5);
        assert!(generate_prices(&mut StdRng::seed_from_u64(0), &grades, near_min, 6).is_ok());
        assert!(generate_prices(&mut StdRng::seed_from_u64(0), &grades, near_min, 7).is_err());
        assert!(generate_prices(&mut StdRng::seed_from_u64(0), &grades, today(), 200_000_000).is_err());
    }

    #[test]
    fn base_level_per_grade() {
        assert_eq!(base_level(1), 942.0);
        assert_eq!(base_level(7), 1014.0);
    }
}
