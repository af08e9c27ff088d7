//! Training number suffix resolution.

use ntn_types::Curriculum;

/// Resolve the suffix from the training pathway, falling back to the first
/// sorted curriculum for unrecognised pathways.
///
/// The caller guarantees `sorted_curricula` is non-empty (the eligibility
/// gate rejects memberships with no valid curricula).
pub fn suffix(training_pathway: &str, sorted_curricula: &[&Curriculum]) -> &'static str {
    tracing::info!("Using training pathway '{training_pathway}' to calculate suffix.");

    match training_pathway {
        "CCT" => "C",
        "CESR" => "CP",
        _ => {
            let first_specialty_code = sorted_curricula
                .first()
                .and_then(|c| c.curriculum_specialty_code.as_deref());

            if first_specialty_code == Some("ACA") {
                "C"
            } else {
                "D"
            }
        }
    }
}
