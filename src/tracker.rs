//! The tracker context: every user-facing operation over the key-value store.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use serde::Serialize;

use crate::analytics::{self, AnalyticsSummary};
use crate::calendar::{Calendar, CalendarMonth};
use crate::charts::{self, BbtPoint, SymptomCount, WeightPoint};
use crate::error::{TrackerError, TrackerResult};
use crate::health::{self, BmiReading};
use crate::models::{DailyLog, DarkMode, UserProfile, WeightSample};
use crate::predictor::{self, CyclePhase, DateWindow, FertilityStatus};
use crate::store::{self, Store};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleOverview {
    pub cycle_day: i64,
    pub phase: CyclePhase,
    pub phase_description: &'static str,
    pub average_cycle_length: i64,
    pub next_period: NaiveDate,
    pub days_until_next_period: i64,
    pub ovulation: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FertilityOverview {
    pub ovulation: NaiveDate,
    pub fertile_window: DateWindow,
    pub best_conception_window: DateWindow,
    pub status: FertilityStatus,
    pub status_description: &'static str,
}

#[derive(Clone)]
pub struct Tracker {
    store: Store,
}

impl Tracker {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Saves the profile and seeds the period history and temperature series
    /// if they do not exist yet. Existing history survives re-onboarding.
    ///
    /// A missing or non-positive cycle length is accepted and later read as
    /// the default; one longer than a year is rejected.
    pub async fn onboard(&self, profile: &UserProfile) -> TrackerResult<()> {
        if let Some(len) = profile
            .cycle_length
            .filter(|len| *len > predictor::MAX_DECLARED_CYCLE_LENGTH)
        {
            return Err(TrackerError::InvalidCycleLength(len));
        }

        self.store.set_json(store::USER_DATA, profile).await?;

        if !self.store.contains(store::PERIOD_HISTORY).await? {
            self.store
                .set_json(store::PERIOD_HISTORY, &vec![profile.last_period])
                .await?;
        }
        if !self.store.contains(store::TEMPERATURE_DATA).await? {
            self.store
                .set_json(store::TEMPERATURE_DATA, &BTreeMap::<NaiveDate, f64>::new())
                .await?;
        }

        tracing::info!("🌸 Onboarded {}", profile.name);
        Ok(())
    }

    pub async fn profile(&self) -> TrackerResult<UserProfile> {
        self.store
            .get_json(store::USER_DATA)
            .await?
            .ok_or(TrackerError::NotOnboarded)
    }

    pub async fn period_history(&self) -> TrackerResult<Vec<NaiveDate>> {
        Ok(self
            .store
            .get_json(store::PERIOD_HISTORY)
            .await?
            .unwrap_or_default())
    }

    pub async fn temperatures(&self) -> TrackerResult<BTreeMap<NaiveDate, f64>> {
        Ok(self
            .store
            .get_json(store::TEMPERATURE_DATA)
            .await?
            .unwrap_or_default())
    }

    pub async fn weight_samples(&self) -> TrackerResult<Vec<WeightSample>> {
        Ok(self
            .store
            .get_json(store::WEIGHT_DATA)
            .await?
            .unwrap_or_default())
    }

    /// Appends `today` as a new period start. Only a repeat of today is
    /// rejected; older duplicates are not looked for.
    pub async fn log_period_start(&self, today: NaiveDate) -> TrackerResult<Vec<NaiveDate>> {
        let mut history = self.period_history().await?;
        if history.contains(&today) {
            return Err(TrackerError::PeriodAlreadyLogged(today));
        }
        history.push(today);
        self.store.set_json(store::PERIOD_HISTORY, &history).await?;

        if let Some(mut profile) = self.store.get_json::<UserProfile>(store::USER_DATA).await? {
            profile.last_period = today;
            self.store.set_json(store::USER_DATA, &profile).await?;
        }

        tracing::info!("🩸 Period start logged for {}", today);
        Ok(history)
    }

    pub async fn daily_log(&self, date: NaiveDate) -> TrackerResult<DailyLog> {
        Ok(self
            .store
            .get_json(&store::daily_log_key(date))
            .await?
            .unwrap_or_else(|| DailyLog::empty(date)))
    }

    /// Replaces the log for its date. A BBT reading is mirrored into the
    /// temperature series.
    pub async fn save_daily_log(&self, log: &DailyLog) -> TrackerResult<()> {
        self.store
            .set_json(&store::daily_log_key(log.date), log)
            .await?;

        if let Some(bbt) = log.bbt {
            let mut temps = self.temperatures().await?;
            temps.insert(log.date, bbt);
            self.store.set_json(store::TEMPERATURE_DATA, &temps).await?;
        }

        tracing::debug!("📝 Daily log saved for {}", log.date);
        Ok(())
    }

    pub async fn daily_logs(&self) -> TrackerResult<Vec<DailyLog>> {
        self.store
            .scan_prefix(store::DAILY_LOG_PREFIX)
            .await?
            .into_iter()
            .map(|(_, raw)| serde_json::from_str(&raw).map_err(TrackerError::from))
            .collect()
    }

    async fn declared_cycle_length(&self) -> TrackerResult<Option<i64>> {
        Ok(self
            .store
            .get_json::<UserProfile>(store::USER_DATA)
            .await?
            .and_then(|p| p.declared_cycle_length()))
    }

    /// `None` until a period start has been logged.
    pub async fn predictions(&self, today: NaiveDate) -> TrackerResult<Option<CycleOverview>> {
        let history = self.period_history().await?;
        let declared = self.declared_cycle_length().await?;

        Ok(predictor::forecast(&history, declared, today).map(|f| CycleOverview {
            cycle_day: f.cycle_day,
            phase: f.phase,
            phase_description: f.phase.description(),
            average_cycle_length: f.average_cycle_length,
            next_period: f.next_period,
            days_until_next_period: (f.next_period - today).num_days(),
            ovulation: f.ovulation,
        }))
    }

    pub async fn fertility(&self, today: NaiveDate) -> TrackerResult<Option<FertilityOverview>> {
        let history = self.period_history().await?;
        let declared = self.declared_cycle_length().await?;

        Ok(predictor::forecast(&history, declared, today).map(|f| FertilityOverview {
            ovulation: f.ovulation,
            fertile_window: f.fertile_window,
            best_conception_window: f.best_conception_window,
            status: f.fertility_status,
            status_description: f.fertility_status.description(),
        }))
    }

    pub async fn analytics(&self) -> TrackerResult<AnalyticsSummary> {
        let profile = self.profile().await?;
        let history = self.period_history().await?;
        let temps = self.temperatures().await?;

        Ok(analytics::summarize(
            &history,
            profile.declared_cycle_length(),
            profile.period_length,
            &temps,
        ))
    }

    pub async fn bbt_chart(&self) -> TrackerResult<Option<Vec<BbtPoint>>> {
        let temps = self.temperatures().await?;
        let history = self.period_history().await?;
        Ok(charts::bbt_series(&temps, &history))
    }

    pub async fn symptom_chart(&self) -> TrackerResult<Option<Vec<SymptomCount>>> {
        let logs = self.daily_logs().await?;
        Ok(charts::symptom_frequency(&logs))
    }

    pub async fn weight_chart(&self) -> TrackerResult<Option<Vec<WeightPoint>>> {
        let samples = self.weight_samples().await?;
        Ok(charts::weight_series(&samples))
    }

    /// Both measurements are required; a missing or zero value rejects the
    /// sample without touching the series.
    pub async fn save_weight(
        &self,
        weight: Option<f64>,
        height: Option<f64>,
        today: NaiveDate,
    ) -> TrackerResult<WeightSample> {
        let (Some(weight), Some(height)) = (
            weight.filter(|w| *w > 0.0),
            height.filter(|h| *h > 0.0),
        ) else {
            return Err(TrackerError::MissingMeasurement);
        };

        let sample = WeightSample {
            date: today,
            weight,
            height,
        };
        let mut samples = self.weight_samples().await?;
        samples.push(sample.clone());
        self.store.set_json(store::WEIGHT_DATA, &samples).await?;

        Ok(sample)
    }

    pub async fn bmi(&self) -> TrackerResult<Option<BmiReading>> {
        let samples = self.weight_samples().await?;
        Ok(health::latest_bmi(&samples))
    }

    pub async fn dark_mode(&self) -> TrackerResult<DarkMode> {
        Ok(self
            .store
            .get_raw(store::DARK_MODE)
            .await?
            .map(|raw| DarkMode::parse(&raw))
            .unwrap_or_default())
    }

    pub async fn set_dark_mode(&self, mode: DarkMode) -> TrackerResult<DarkMode> {
        self.store.set_raw(store::DARK_MODE, mode.as_str()).await?;
        Ok(mode)
    }

    pub async fn toggle_dark_mode(&self) -> TrackerResult<DarkMode> {
        let mode = self.dark_mode().await?.toggled();
        self.set_dark_mode(mode).await
    }

    pub async fn calendar(
        &self,
        calendar: Calendar,
        today: NaiveDate,
    ) -> TrackerResult<CalendarMonth> {
        let period_starts: HashSet<NaiveDate> =
            self.period_history().await?.into_iter().collect();

        let first = calendar.first_day();
        let last = calendar.end();
        let symptom_counts: BTreeMap<NaiveDate, usize> = self
            .daily_logs()
            .await?
            .into_iter()
            .filter(|log| log.date >= first && log.date < last && !log.symptoms.is_empty())
            .map(|log| (log.date, log.symptoms.len()))
            .collect();

        Ok(calendar.grid(&period_starts, &symptom_counts, today))
    }
}
