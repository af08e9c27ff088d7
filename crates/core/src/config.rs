//! Engine configuration.
//!
//! The engine exists in two policy flavours that historically lived as two
//! near-identical generator services. The differences are captured here as a
//! configuration resolved once and passed into the generator, so request
//! handling never consults ambient state.

use chrono::NaiveDate;

/// How the anchor date for curriculum validity checks is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorPolicy {
    /// Anchor on the current date.
    Today,
    /// Anchor on the programme start date, or today if the programme has
    /// already started. A membership with no start date anchors on today.
    LatestOfTodayAndStart,
}

impl AnchorPolicy {
    /// Resolve the anchor date for a programme membership.
    pub fn anchor_date(self, today: NaiveDate, start_date: Option<NaiveDate>) -> NaiveDate {
        match self {
            AnchorPolicy::Today => today,
            AnchorPolicy::LatestOfTodayAndStart => match start_date {
                Some(start) if start > today => start,
                _ => today,
            },
        }
    }
}

/// How a curriculum's validity window is compared against the anchor date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidityPolicy {
    /// `start < anchor < end`, both bounds exclusive.
    StrictOpen,
    /// `start <= anchor <= end`, both bounds inclusive.
    InclusiveClosed,
}

/// Policy parameters for a [`crate::TrainingNumberGenerator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Anchor-date selection for curriculum filtering.
    pub anchor: AnchorPolicy,
    /// Validity-window comparison for curriculum filtering.
    pub validity: ValidityPolicy,
    /// Collapse curricula sharing a specialty code to the first occurrence.
    pub dedupe: bool,
    /// Force the "TSD" parent organization for military memberships,
    /// regardless of managing deanery.
    pub military_override: bool,
    /// Re-sign memberships that carried a signature before their training
    /// number was set.
    pub resign: bool,
}

impl GeneratorConfig {
    /// Configuration for numbering against the curricula in effect right
    /// now: strict validity bounds, duplicates kept, no signing side effect.
    pub fn current() -> Self {
        Self {
            anchor: AnchorPolicy::Today,
            validity: ValidityPolicy::StrictOpen,
            dedupe: false,
            military_override: false,
            resign: false,
        }
    }

    /// Configuration for numbering a profile as presented to the trainee:
    /// anchored on the later of today and the programme start, inclusive
    /// validity bounds, duplicate specialties collapsed, military programmes
    /// forced to "TSD", and previously-signed memberships re-signed.
    pub fn prospective() -> Self {
        Self {
            anchor: AnchorPolicy::LatestOfTodayAndStart,
            validity: ValidityPolicy::InclusiveClosed,
            dedupe: true,
            military_override: true,
            resign: true,
        }
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn today_policy_ignores_start_date() {
        let today = date(2024, 6, 1);
        let anchor = AnchorPolicy::Today.anchor_date(today, Some(date(2025, 1, 1)));
        assert_eq!(anchor, today);
    }

    #[test]
    fn latest_policy_uses_future_start_date() {
        let today = date(2024, 6, 1);
        let start = date(2025, 1, 1);
        let anchor = AnchorPolicy::LatestOfTodayAndStart.anchor_date(today, Some(start));
        assert_eq!(anchor, start);
    }

    #[test]
    fn latest_policy_uses_today_when_programme_started() {
        let today = date(2024, 6, 1);
        let anchor = AnchorPolicy::LatestOfTodayAndStart.anchor_date(today, Some(date(2020, 1, 1)));
        assert_eq!(anchor, today);
    }

    #[test]
    fn latest_policy_falls_back_to_today_without_start_date() {
        let today = date(2024, 6, 1);
        let anchor = AnchorPolicy::LatestOfTodayAndStart.anchor_date(today, None);
        assert_eq!(anchor, today);
    }
}
