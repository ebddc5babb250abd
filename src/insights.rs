use chrono::{Datelike, NaiveDate};

const PCOS_TIPS: [&str; 5] = [
    "Try adding 1 tbsp of flaxseeds to your breakfast - they help regulate hormones and improve insulin sensitivity!",
    "Incorporate cinnamon in your meals - studies show it can help regulate menstrual cycles in PCOS.",
    "Opt for complex carbs like whole grains instead of refined carbs to manage insulin levels.",
    "Practice stress-reducing activities like yoga or meditation - stress worsens PCOS symptoms.",
    "Include protein with every meal to help balance blood sugar levels.",
];

pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 18 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

/// Rotates through the tips one per day.
pub fn pcos_tip(date: NaiveDate) -> &'static str {
    PCOS_TIPS[date.ordinal0() as usize % PCOS_TIPS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_by_hour() {
        assert_eq!(greeting(0), "Good morning");
        assert_eq!(greeting(11), "Good morning");
        assert_eq!(greeting(12), "Good afternoon");
        assert_eq!(greeting(18), "Good evening");
    }

    #[test]
    fn tip_changes_daily_and_repeats() {
        let d1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let d6 = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
        assert_ne!(pcos_tip(d1), pcos_tip(d2));
        assert_eq!(pcos_tip(d1), pcos_tip(d6));
    }
}
