//! Series behind the analytics and health charts.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{DailyLog, WeightSample};
use crate::predictor::{current_cycle_day, CyclePhase};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BbtPoint {
    pub date: NaiveDate,
    pub label: String,
    pub temperature: f64,
    pub phase: CyclePhase,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymptomCount {
    pub symptom: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightPoint {
    pub date: NaiveDate,
    pub label: String,
    pub weight: f64,
}

/// Coarse phase for colouring temperature points. There is no late class
/// here, everything after day 14 is drawn as luteal.
pub fn chart_phase(cycle_day: i64) -> CyclePhase {
    if cycle_day <= 5 {
        CyclePhase::Menstrual
    } else if cycle_day <= 13 {
        CyclePhase::Follicular
    } else if cycle_day == 14 {
        CyclePhase::Ovulation
    } else {
        CyclePhase::Luteal
    }
}

pub fn phase_color(phase: CyclePhase) -> &'static str {
    match phase {
        CyclePhase::Menstrual => "#dc143c",
        CyclePhase::Follicular => "#4e9efd",
        CyclePhase::Ovulation => "#ff8c00",
        CyclePhase::Luteal | CyclePhase::Late => "#8a2be2",
    }
}

/// Cycle days are counted from the last logged period start, or from the
/// earliest reading when no period has been logged.
pub fn bbt_series(
    readings: &BTreeMap<NaiveDate, f64>,
    history: &[NaiveDate],
) -> Option<Vec<BbtPoint>> {
    let first_reading = *readings.keys().next()?;
    let anchor = history.last().copied().unwrap_or(first_reading);

    Some(
        readings
            .iter()
            .map(|(&date, &temperature)| {
                let cycle_day = current_cycle_day(anchor, date);
                let phase = chart_phase(cycle_day);
                BbtPoint {
                    date,
                    label: format!("Day {}", cycle_day),
                    temperature,
                    phase,
                    color: phase_color(phase),
                }
            })
            .collect(),
    )
}

pub fn symptom_frequency(logs: &[DailyLog]) -> Option<Vec<SymptomCount>> {
    let mut counts = BTreeMap::<&str, u32>::new();
    for log in logs {
        for symptom in &log.symptoms {
            *counts.entry(symptom.as_str()).or_default() += 1;
        }
    }
    if counts.is_empty() {
        return None;
    }

    Some(
        counts
            .into_iter()
            .map(|(symptom, count)| SymptomCount {
                symptom: symptom.to_string(),
                count,
            })
            .collect(),
    )
}

pub fn weight_series(samples: &[WeightSample]) -> Option<Vec<WeightPoint>> {
    if samples.is_empty() {
        return None;
    }
    Some(
        samples
            .iter()
            .map(|s| WeightPoint {
                date: s.date,
                label: s.date.format("%b %-d").to_string(),
                weight: s.weight,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn bbt_points_are_labelled_by_cycle_day() {
        let readings: BTreeMap<NaiveDate, f64> = [
            (date(2024, 3, 14), 36.9),
            (date(2024, 3, 2), 36.3),
            (date(2024, 3, 20), 36.8),
        ]
        .into_iter()
        .collect();
        let history = [date(2024, 3, 1)];

        let series = bbt_series(&readings, &history).unwrap();
        let labels: Vec<&str> = series.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Day 2", "Day 14", "Day 20"]);
        assert_eq!(series[0].color, "#dc143c");
        assert_eq!(series[1].phase, CyclePhase::Ovulation);
        assert_eq!(series[2].color, "#8a2be2");
    }

    #[test]
    fn bbt_without_history_anchors_on_first_reading() {
        let readings: BTreeMap<NaiveDate, f64> =
            [(date(2024, 3, 10), 36.4), (date(2024, 3, 16), 36.5)].into_iter().collect();
        let series = bbt_series(&readings, &[]).unwrap();
        assert_eq!(series[0].label, "Day 1");
        assert_eq!(series[1].label, "Day 7");
        assert!(bbt_series(&BTreeMap::new(), &[]).is_none());
    }

    #[test]
    fn symptoms_are_counted_across_logs() {
        let mut a = DailyLog::empty(date(2024, 3, 1));
        a.symptoms.insert("cramps".into());
        a.symptoms.insert("fatigue".into());
        let mut b = DailyLog::empty(date(2024, 3, 2));
        b.symptoms.insert("cramps".into());

        let counts = symptom_frequency(&[a, b]).unwrap();
        assert_eq!(
            counts,
            vec![
                SymptomCount { symptom: "cramps".into(), count: 2 },
                SymptomCount { symptom: "fatigue".into(), count: 1 },
            ]
        );
        assert!(symptom_frequency(&[DailyLog::empty(date(2024, 3, 3))]).is_none());
    }

    #[test]
    fn weight_labels() {
        let samples = [WeightSample { date: date(2024, 3, 5), weight: 61.5, height: 165.0 }];
        let series = weight_series(&samples).unwrap();
        assert_eq!(series[0].label, "Mar 5");
        assert!(weight_series(&[]).is_none());
    }
}
