//! The eligibility gate.
//!
//! An ordered chain of precondition checks run for every (personal details,
//! programme membership) pair before any training number work happens. The
//! first failing check wins, so a membership missing several prerequisites
//! always reports the same reason. A rejection is an expected outcome, not
//! an error.

use std::fmt;

use chrono::NaiveDate;
use ntn_types::{PersonalDetails, ProgrammeMembership};

use crate::config::ValidityPolicy;
use crate::curricula::filter_and_sort;
use crate::reference::has_valid_reference_number;

/// Why training number generation was skipped for a programme membership.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// No personal details on the profile.
    PersonalDetailsNotAvailable,
    /// Neither the GMC nor the GDC number is valid.
    InvalidReferenceNumber,
    /// The programme number is missing or blank.
    BlankProgrammeNumber,
    /// The programme name is missing or blank.
    BlankProgrammeName,
    /// The programme name marks an excluded (foundation) programme.
    ExcludedProgrammeName,
    /// No curriculum is valid at the anchor date.
    NoValidCurricula,
    /// The training pathway is missing.
    MissingTrainingPathway,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SkipReason::PersonalDetailsNotAvailable => "personal details not available",
            SkipReason::InvalidReferenceNumber => "reference number not valid",
            SkipReason::BlankProgrammeNumber => "programme number is blank",
            SkipReason::BlankProgrammeName => "programme name is blank",
            SkipReason::ExcludedProgrammeName => "programme name is excluded",
            SkipReason::NoValidCurricula => "there are no valid curricula",
            SkipReason::MissingTrainingPathway => "training pathway was null",
        };
        f.write_str(reason)
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Run the gate for one (personal details, programme membership) pair.
///
/// `anchor` is the date curricula validity is evaluated against, already
/// resolved by the caller's anchor policy.
pub fn check(
    personal_details: Option<&PersonalDetails>,
    membership: &ProgrammeMembership,
    anchor: NaiveDate,
    validity: ValidityPolicy,
) -> Result<(), SkipReason> {
    let Some(details) = personal_details else {
        return Err(SkipReason::PersonalDetailsNotAvailable);
    };

    if !has_valid_reference_number(details) {
        return Err(SkipReason::InvalidReferenceNumber);
    }

    if is_blank(membership.programme_number.as_deref()) {
        return Err(SkipReason::BlankProgrammeNumber);
    }

    let Some(programme_name) = membership
        .programme_name
        .as_deref()
        .filter(|name| !name.trim().is_empty())
    else {
        return Err(SkipReason::BlankProgrammeName);
    };

    if programme_name.to_lowercase().contains("foundation") {
        return Err(SkipReason::ExcludedProgrammeName);
    }

    if filter_and_sort(&membership.curricula, anchor, validity, false).is_empty() {
        return Err(SkipReason::NoValidCurricula);
    }

    if membership.training_pathway.is_none() {
        return Err(SkipReason::MissingTrainingPathway);
    }

    Ok(())
}

#[cfg(test)]
mod eligibility_tests {
    use super::*;
    use ntn_types::Curriculum;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn anchor() -> NaiveDate {
        date(2024, 6, 1)
    }

    fn details() -> PersonalDetails {
        PersonalDetails {
            gmc_number: Some("1234567".into()),
            gdc_number: None,
        }
    }

    fn eligible_membership() -> ProgrammeMembership {
        ProgrammeMembership {
            programme_number: Some("PROG123".into()),
            programme_name: Some("Programme Name".into()),
            training_pathway: Some("N/A".into()),
            curricula: vec![Curriculum {
                curriculum_specialty_code: Some("ABC".into()),
                curriculum_sub_type: Some("MEDICAL_CURRICULUM".into()),
                curriculum_start_date: Some(date(2023, 1, 1)),
                curriculum_end_date: Some(date(2025, 1, 1)),
                ..Curriculum::default()
            }],
            ..ProgrammeMembership::default()
        }
    }

    fn run(details: Option<&PersonalDetails>, membership: &ProgrammeMembership) -> Result<(), SkipReason> {
        check(details, membership, anchor(), ValidityPolicy::StrictOpen)
    }

    #[test]
    fn accepts_an_eligible_pair() {
        let d = details();
        run(Some(&d), &eligible_membership()).expect("expected eligible membership");
    }

    #[test]
    fn rejects_missing_personal_details() {
        let err = run(None, &eligible_membership()).expect_err("expected rejection");
        assert_eq!(err, SkipReason::PersonalDetailsNotAvailable);
    }

    #[test]
    fn rejects_invalid_reference_numbers() {
        let d = PersonalDetails {
            gmc_number: Some("12345678".into()),
            gdc_number: Some("1234".into()),
        };
        let err = run(Some(&d), &eligible_membership()).expect_err("expected rejection");
        assert_eq!(err, SkipReason::InvalidReferenceNumber);
    }

    #[test]
    fn rejects_blank_programme_number() {
        let d = details();
        let mut membership = eligible_membership();
        membership.programme_number = Some("  ".into());
        let err = run(Some(&d), &membership).expect_err("expected rejection");
        assert_eq!(err, SkipReason::BlankProgrammeNumber);
    }

    #[test]
    fn rejects_blank_programme_name() {
        let d = details();
        let mut membership = eligible_membership();
        membership.programme_name = None;
        let err = run(Some(&d), &membership).expect_err("expected rejection");
        assert_eq!(err, SkipReason::BlankProgrammeName);
    }

    #[test]
    fn rejects_foundation_programmes_case_insensitively() {
        let d = details();
        for name in ["Foundation Programme", "POST-FOUNDATION", "foundation"] {
            let mut membership = eligible_membership();
            membership.programme_name = Some(name.into());
            let err = run(Some(&d), &membership).expect_err("expected rejection");
            assert_eq!(err, SkipReason::ExcludedProgrammeName, "name: {name}");
        }
    }

    #[test]
    fn rejects_memberships_with_no_valid_curricula() {
        let d = details();
        let mut membership = eligible_membership();
        membership.curricula.clear();
        let err = run(Some(&d), &membership).expect_err("expected rejection");
        assert_eq!(err, SkipReason::NoValidCurricula);
    }

    #[test]
    fn rejects_missing_training_pathway() {
        let d = details();
        let mut membership = eligible_membership();
        membership.training_pathway = None;
        let err = run(Some(&d), &membership).expect_err("expected rejection");
        assert_eq!(err, SkipReason::MissingTrainingPathway);
    }

    #[test]
    fn first_failing_check_wins() {
        let d = details();
        let mut membership = eligible_membership();
        membership.programme_number = None;
        membership.training_pathway = None;
        let err = run(Some(&d), &membership).expect_err("expected rejection");
        assert_eq!(err, SkipReason::BlankProgrammeNumber);
    }
}
