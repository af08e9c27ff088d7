//! GMC/GDC reference number validation and selection.
//!
//! A GMC number is valid when it is exactly seven ASCII digits; a GDC number
//! when its first five characters are ASCII digits (anything may follow).
//! The checks are byte-level on purpose: the upstream values are plain ASCII
//! registration numbers, never localised text.

use ntn_types::PersonalDetails;

/// Whether the given value is a valid GMC number (exactly 7 digits).
pub fn is_valid_gmc_number(value: &str) -> bool {
    value.len() == 7 && value.bytes().all(|b| b.is_ascii_digit())
}

/// Whether the given value is a valid GDC number (5 digits, then anything).
pub fn is_valid_gdc_number(value: &str) -> bool {
    value.len() >= 5 && value.bytes().take(5).all(|b| b.is_ascii_digit())
}

/// Whether the personal details hold at least one valid reference number.
pub fn has_valid_reference_number(details: &PersonalDetails) -> bool {
    details
        .gmc_number
        .as_deref()
        .is_some_and(is_valid_gmc_number)
        || details
            .gdc_number
            .as_deref()
            .is_some_and(is_valid_gdc_number)
}

/// Pick the reference number for a training number: the GMC number when
/// valid, otherwise the GDC number.
///
/// The eligibility gate has already established that one of the two is
/// valid, so a `None` here means the gate was bypassed.
pub fn reference_number(details: &PersonalDetails) -> Option<&str> {
    match details.gmc_number.as_deref() {
        Some(gmc) if is_valid_gmc_number(gmc) => Some(gmc),
        _ => details.gdc_number.as_deref(),
    }
}
