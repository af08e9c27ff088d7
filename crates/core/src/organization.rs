//! Managing deanery to parent organization mapping.
//!
//! Deanery names map to 3-letter organization codes through an exact-match
//! table, with two exceptions evaluated before it: military programme
//! memberships are always "TSD", and South West programmes derive their code
//! from the programme number.

use ntn_types::ProgrammeMembership;

use crate::error::{GenerationError, GenerationResult};

/// Exact deanery-name-to-code table. Both spellings of Yorkshire and the
/// Humber appear in upstream data.
const DEANERY_CODES: &[(&str, &str)] = &[
    ("Defence Postgraduate Medical Deanery", "TSD"),
    ("Health Education England East Midlands", "EMD"),
    ("Health Education England East of England", "EAN"),
    ("Health Education England Kent, Surrey and Sussex", "KSS"),
    ("Health Education England North Central and East London", "LDN"),
    ("Health Education England South London", "LDN"),
    ("Health Education England North West London", "LDN"),
    ("London LETBs", "LDN"),
    ("Health Education England North East", "NTH"),
    ("Health Education England North West", "NWE"),
    ("Health Education England Thames Valley", "OXF"),
    ("Health Education England Wessex", "WES"),
    ("Health Education England West Midlands", "WMD"),
    ("Health Education England Yorkshire and the Humber", "YHD"),
    ("Health Education England Yorkshire and The Humber", "YHD"),
    ("Severn Deanery", "SEV"),
    ("South West Peninsula Deanery", "PEN"),
];

const SOUTH_WEST_DEANERIES: &[&str] = &["Health Education England South West", "South West"];

/// Resolve the parent organization code for a programme membership.
///
/// # Errors
///
/// Returns [`GenerationError::UnmappedDeanery`] when the managing deanery is
/// missing or not in the table. This is a data defect, not a routine skip.
pub fn parent_organization(
    membership: &ProgrammeMembership,
    military_override: bool,
) -> GenerationResult<String> {
    if military_override && membership.programme_membership_type.as_deref() == Some("MILITARY") {
        tracing::info!("Using military parent organization.");
        return Ok("TSD".to_string());
    }

    let managing_deanery = membership.managing_deanery.as_deref().unwrap_or_default();
    tracing::info!("Calculating parent organization for managing deanery '{managing_deanery}'.");

    if SOUTH_WEST_DEANERIES.contains(&managing_deanery) {
        return Ok(south_west_parent_organization(membership));
    }

    let parent_organization = DEANERY_CODES
        .iter()
        .find(|(deanery, _)| *deanery == managing_deanery)
        .map(|(_, code)| (*code).to_string())
        .ok_or_else(|| GenerationError::UnmappedDeanery {
            managing_deanery: managing_deanery.to_string(),
        })?;

    tracing::info!("Calculated parent organization: '{parent_organization}'.");
    Ok(parent_organization)
}

/// Parent organization for a South West programme: peninsula programmes are
/// "PEN", all others take the programme number's first three characters.
fn south_west_parent_organization(membership: &ProgrammeMembership) -> String {
    let programme_number = membership.programme_number.as_deref().unwrap_or_default();
    tracing::info!("Using programme number '{programme_number}' to calculate parent organization.");

    if programme_number.starts_with("SWP") {
        "PEN".to_string()
    } else {
        programme_number.chars().take(3).collect()
    }
}
