use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::predictor::{average_cycle_length, cycle_gaps};

/// How the latest cycle compares to the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleTrend {
    Longer(i64),
    Shorter(i64),
    Same,
}

impl fmt::Display for CycleTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = |n: i64| if n > 1 { "s" } else { "" };
        match *self {
            CycleTrend::Longer(n) => write!(f, "+{} day{} from last cycle", n, plural(n)),
            CycleTrend::Shorter(n) => write!(f, "-{} day{} from last cycle", n, plural(n)),
            CycleTrend::Same => write!(f, "Same as last cycle"),
        }
    }
}

impl Serialize for CycleTrend {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleStat {
    pub cycle_number: usize,
    pub start_date: NaiveDate,
    pub cycle_length: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureStats {
    pub average: f64,
    pub average_follicular: Option<f64>,
    pub average_luteal: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsSummary {
    pub average_cycle_length: Option<i64>,
    pub trend: Option<CycleTrend>,
    pub average_period_length: Option<i64>,
    pub cycles: Vec<CycleStat>,
    pub temperature: Option<TemperatureStats>,
}

/// Needs three starts, i.e. two complete cycles to compare.
pub fn cycle_trend(history: &[NaiveDate]) -> Option<CycleTrend> {
    if history.len() < 3 {
        return None;
    }
    let gaps = cycle_gaps(&history[history.len() - 3..]);
    let delta = gaps[1] - gaps[0];
    Some(match delta {
        d if d > 0 => CycleTrend::Longer(d),
        d if d < 0 => CycleTrend::Shorter(-d),
        _ => CycleTrend::Same,
    })
}

/// One entry per completed cycle, numbered from the oldest.
pub fn cycle_stats(history: &[NaiveDate]) -> Vec<CycleStat> {
    history
        .windows(2)
        .enumerate()
        .map(|(i, pair)| CycleStat {
            cycle_number: i + 1,
            start_date: pair[0],
            cycle_length: (pair[1] - pair[0]).num_days(),
        })
        .collect()
}

/// Readings are split in half by date order: the first half counts as
/// follicular and the rest as luteal, whatever the actual cycle days were.
pub fn temperature_stats(readings: &BTreeMap<NaiveDate, f64>) -> Option<TemperatureStats> {
    if readings.is_empty() {
        return None;
    }
    let temps: Vec<f64> = readings.values().copied().collect();
    let (follicular, luteal) = temps.split_at(temps.len() / 2);

    Some(TemperatureStats {
        average: mean(&temps).map(round_tenth)?,
        average_follicular: mean(follicular).map(round_tenth),
        average_luteal: mean(luteal).map(round_tenth),
    })
}

pub fn summarize(
    history: &[NaiveDate],
    declared_cycle_length: Option<i64>,
    period_length: Option<i64>,
    readings: &BTreeMap<NaiveDate, f64>,
) -> AnalyticsSummary {
    let average_cycle_length = (history.len() >= 2)
        .then(|| average_cycle_length(history, declared_cycle_length));

    AnalyticsSummary {
        average_cycle_length,
        trend: cycle_trend(history),
        average_period_length: period_length,
        cycles: cycle_stats(history),
        temperature: temperature_stats(readings),
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

pub(crate) fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
