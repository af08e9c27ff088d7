//! # NTN Types
//!
//! Shared data model for the training number (NTN/DRN) generation engine.
//!
//! These records mirror the trainee profile documents owned by the
//! surrounding profile service: the engine reads them, computes a training
//! number and writes it back onto the same [`ProgrammeMembership`] it was
//! given. Every field that can be absent upstream is an `Option`; the
//! eligibility gate in `ntn-core` decides what absence means.
//!
//! **No engine concerns**: filtering, sorting and number assembly live in
//! `ntn-core`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A trainee's professional registration details.
///
/// The GMC number is the primary reference number, the GDC number the
/// secondary; which one ends up in a training number depends on which is
/// valid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDetails {
    pub gmc_number: Option<String>,
    pub gdc_number: Option<String>,
}

/// A time-bounded specialty or sub-specialty attachment on a programme
/// membership.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Curriculum {
    pub curriculum_specialty_code: Option<String>,
    pub curriculum_sub_type: Option<String>,
    pub curriculum_name: Option<String>,
    pub curriculum_start_date: Option<NaiveDate>,
    pub curriculum_end_date: Option<NaiveDate>,
}

/// A signature artifact previously attached to a record by the signing
/// service.
///
/// The engine never creates or verifies these; it only checks for their
/// presence to decide whether a record must be re-signed after its training
/// number changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signature {
    pub signed_at: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hmac: Option<String>,
}

/// A trainee's membership of a training programme.
///
/// `training_number` is the engine's output field: unset until generation
/// succeeds, and left untouched when the membership is ineligible.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgrammeMembership {
    pub tis_id: Option<String>,
    pub programme_name: Option<String>,
    pub programme_number: Option<String>,
    pub managing_deanery: Option<String>,
    pub programme_membership_type: Option<String>,
    pub training_pathway: Option<String>,
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub curricula: Vec<Curriculum>,
    pub training_number: Option<String>,
    pub signature: Option<Signature>,
}

/// The profile slice the engine operates on: registration details plus the
/// trainee's programme memberships.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraineeProfile {
    pub personal_details: Option<PersonalDetails>,
    #[serde(default)]
    pub programme_memberships: Vec<ProgrammeMembership>,
}
