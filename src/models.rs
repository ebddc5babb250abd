use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowLevel {
    Light,
    Medium,
    Heavy,
}

/// Stored under `userData`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub last_period: NaiveDate,
    /// `null` or missing when the form value was not a number.
    #[serde(default)]
    pub cycle_length: Option<i64>,
    #[serde(default)]
    pub period_length: Option<i64>,
    pub flow_level: FlowLevel,
    #[serde(rename = "hasPCOS", default)]
    pub has_pcos: bool,
}

impl UserProfile {
    /// Declared cycle length, if the user gave a usable one.
    pub fn declared_cycle_length(&self) -> Option<i64> {
        self.cycle_length.filter(|len| *len > 0)
    }
}

/// Stored under `dailyLog-<date>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    pub date: NaiveDate,
    #[serde(default)]
    pub symptoms: BTreeSet<String>,
    #[serde(default)]
    pub bbt: Option<f64>,
    #[serde(default)]
    pub cm: String,
    #[serde(default)]
    pub notes: String,
}

impl DailyLog {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            symptoms: BTreeSet::new(),
            bbt: None,
            cm: String::new(),
            notes: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightSample {
    pub date: NaiveDate,
    /// Kilograms.
    pub weight: f64,
    /// Centimetres.
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
    Enabled,
    #[default]
    Disabled,
}

impl DarkMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DarkMode::Enabled => "enabled",
            DarkMode::Disabled => "disabled",
        }
    }

    /// Anything other than `enabled` reads as disabled.
    pub fn parse(raw: &str) -> Self {
        if raw == "enabled" {
            DarkMode::Enabled
        } else {
            DarkMode::Disabled
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DarkMode::Enabled => DarkMode::Disabled,
            DarkMode::Disabled => DarkMode::Enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_uses_stored_key_names() {
        let raw = r#"{
            "name": "Ada",
            "lastPeriod": "2024-03-01",
            "cycleLength": 30,
            "periodLength": 5,
            "flowLevel": "medium",
            "hasPCOS": true
        }"#;
        let profile: UserProfile = serde_json::from_str(raw).unwrap();
        assert_eq!(profile.cycle_length, Some(30));
        assert!(profile.has_pcos);
        assert_eq!(profile.flow_level, FlowLevel::Medium);

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["hasPCOS"], true);
        assert_eq!(json["lastPeriod"], "2024-03-01");
    }

    #[test]
    fn missing_cycle_length_is_not_declared() {
        let raw = r#"{"name":"Ada","lastPeriod":"2024-03-01","flowLevel":"light"}"#;
        let profile: UserProfile = serde_json::from_str(raw).unwrap();
        assert_eq!(profile.declared_cycle_length(), None);
    }

    #[test]
    fn null_lengths_fall_back_to_default() {
        let raw = r#"{
            "name": "Ada",
            "lastPeriod": "2024-03-01",
            "cycleLength": null,
            "periodLength": null,
            "flowLevel": "heavy",
            "hasPCOS": false
        }"#;
        let profile: UserProfile = serde_json::from_str(raw).unwrap();
        assert_eq!(profile.declared_cycle_length(), None);
        assert_eq!(profile.period_length, None);
    }

    #[test]
    fn dark_mode_strings() {
        assert_eq!(DarkMode::parse("enabled"), DarkMode::Enabled);
        assert_eq!(DarkMode::parse("bogus"), DarkMode::Disabled);
        assert_eq!(DarkMode::Enabled.toggled().as_str(), "disabled");
    }
}
