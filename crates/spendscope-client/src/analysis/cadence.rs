use chrono::NaiveDateTime;

use crate::analysis::date::whole_days_between;
use crate::analysis::policy::{FREQUENCY_PROFILES, Frequency, FrequencyProfile};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CadenceDetection {
    pub frequency: Option<Frequency>,
    /// Mean whole-day gap between consecutive dates; `0.0` below two dates.
    pub mean_interval_days: f64,
}

impl CadenceDetection {
    const fn no_pattern(mean_interval_days: f64) -> Self {
        Self {
            frequency: None,
            mean_interval_days,
        }
    }
}

pub fn detect_cadence(dates: &[NaiveDateTime]) -> CadenceDetection {
    detect_cadence_with_profiles(dates, &FREQUENCY_PROFILES)
}

fn detect_cadence_with_profiles(
    dates: &[NaiveDateTime],
    profiles: &[FrequencyProfile],
) -> CadenceDetection {
    if dates.len() < 2 {
        return CadenceDetection::no_pattern(0.0);
    }

    let mut sorted = dates.to_vec();
    sorted.sort();

    let gaps = sorted
        .windows(2)
        .map(|pair| whole_days_between(&pair[0], &pair[1]))
        .collect::<Vec<i64>>();
    let mean_interval_days = gaps.iter().sum::<i64>() as f64 / gaps.len() as f64;

    let matched = profiles
        .iter()
        .find(|profile| profile.matches(dates.len(), mean_interval_days));

    match matched {
        Some(profile) => CadenceDetection {
            frequency: Some(profile.frequency),
            mean_interval_days,
        },
        None => CadenceDetection::no_pattern(mean_interval_days),
    }
}
