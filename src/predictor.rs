use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// Cycle length assumed when the user never declared one.
pub const DEFAULT_CYCLE_LENGTH: i64 = 28;

/// Longest cycle a user may declare at onboarding.
pub const MAX_DECLARED_CYCLE_LENGTH: i64 = 365;

/// Days between ovulation and the next period start. Fixed, not derived from
/// the user's luteal phase.
pub const OVULATION_OFFSET_DAYS: i64 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CyclePhase {
    Menstrual,
    Follicular,
    Ovulation,
    Luteal,
    Late,
}

impl CyclePhase {
    pub fn description(self) -> &'static str {
        match self {
            CyclePhase::Menstrual => "Your period is active",
            CyclePhase::Follicular => "Follicles are developing",
            CyclePhase::Ovulation => "You're likely ovulating today",
            CyclePhase::Luteal => "Post-ovulation phase",
            CyclePhase::Late => "Your period is overdue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FertilityStatus {
    High,
    Medium,
    Low,
}

impl FertilityStatus {
    pub fn description(self) -> &'static str {
        match self {
            FertilityStatus::High => "Best time for conception!",
            FertilityStatus::Medium => "Good chance for conception",
            FertilityStatus::Low => "Less likely to conceive",
        }
    }
}

/// Inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.start..=self.end).contains(&date)
    }
}

/// Everything the predictor can say about the current cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleForecast {
    pub last_period: NaiveDate,
    pub cycle_day: i64,
    pub phase: CyclePhase,
    pub average_cycle_length: i64,
    pub next_period: NaiveDate,
    pub ovulation: NaiveDate,
    pub fertile_window: DateWindow,
    pub best_conception_window: DateWindow,
    pub fertility_status: FertilityStatus,
}

/// Mean gap between consecutive period starts, rounded to the nearest day.
///
/// With fewer than two starts there is no gap to measure, so the declared
/// length is returned instead (28 when missing or non-positive).
pub fn average_cycle_length(history: &[NaiveDate], declared: Option<i64>) -> i64 {
    if history.len() < 2 {
        return declared.filter(|len| *len > 0).unwrap_or(DEFAULT_CYCLE_LENGTH);
    }

    let gaps = cycle_gaps(history);
    let mean = gaps.iter().sum::<i64>() as f64 / gaps.len() as f64;
    (mean + 0.5).floor() as i64
}

/// Day differences between consecutive entries, in history order.
pub fn cycle_gaps(history: &[NaiveDate]) -> Vec<i64> {
    history
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).num_days())
        .collect()
}

/// 1-indexed: the period start itself is cycle day 1.
pub fn current_cycle_day(last_period: NaiveDate, today: NaiveDate) -> i64 {
    (today - last_period).num_days() + 1
}

pub fn cycle_phase(cycle_day: i64, cycle_length: i64) -> CyclePhase {
    if cycle_day <= 5 {
        CyclePhase::Menstrual
    } else if cycle_day <= 13 {
        CyclePhase::Follicular
    } else if cycle_day == 14 {
        CyclePhase::Ovulation
    } else if cycle_day <= cycle_length {
        CyclePhase::Luteal
    } else {
        CyclePhase::Late
    }
}

/// Moves `date` by `days`, or `None` when the result leaves chrono's range.
fn shift(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::try_days(days)?)
}

pub fn predict_next_period(last_period: NaiveDate, average_cycle_length: i64) -> Option<NaiveDate> {
    shift(last_period, average_cycle_length)
}

pub fn predict_ovulation(next_period: NaiveDate) -> Option<NaiveDate> {
    shift(next_period, -OVULATION_OFFSET_DAYS)
}

pub fn fertile_window(ovulation: NaiveDate) -> Option<DateWindow> {
    Some(DateWindow {
        start: shift(ovulation, -5)?,
        end: shift(ovulation, 1)?,
    })
}

pub fn best_conception_window(ovulation: NaiveDate) -> Option<DateWindow> {
    Some(DateWindow {
        start: shift(ovulation, -2)?,
        end: ovulation,
    })
}

pub fn fertility_status(
    today: NaiveDate,
    fertile: &DateWindow,
    best: &DateWindow,
) -> FertilityStatus {
    if best.contains(today) {
        FertilityStatus::High
    } else if fertile.contains(today) {
        FertilityStatus::Medium
    } else {
        FertilityStatus::Low
    }
}

/// Runs the whole model against the last logged period start.
///
/// Returns `None` when nothing has been logged yet, or when the projected
/// dates fall outside the representable calendar. The phase is judged
/// against the declared cycle length, while dates are projected from the
/// averaged one.
pub fn forecast(
    history: &[NaiveDate],
    declared_cycle_length: Option<i64>,
    today: NaiveDate,
) -> Option<CycleForecast> {
    let last_period = *history.last()?;
    let declared = declared_cycle_length
        .filter(|len| *len > 0)
        .unwrap_or(DEFAULT_CYCLE_LENGTH);

    let cycle_day = current_cycle_day(last_period, today);
    let average = average_cycle_length(history, declared_cycle_length);
    let next_period = predict_next_period(last_period, average)?;
    let ovulation = predict_ovulation(next_period)?;
    let fertile = fertile_window(ovulation)?;
    let best = best_conception_window(ovulation)?;

    Some(CycleForecast {
        last_period,
        cycle_day,
        phase: cycle_phase(cycle_day, declared),
        average_cycle_length: average,
        next_period,
        ovulation,
        fertile_window: fertile,
        best_conception_window: best,
        fertility_status: fertility_status(today, &fertile, &best),
    })
}
