//! Specialty segment construction.

use ntn_types::Curriculum;

/// Render the sorted, filtered curricula into the training number's
/// specialty segment.
///
/// The first curriculum's code is emitted verbatim; each later curriculum is
/// joined with "." when it is a sub-specialty and "-" otherwise. A first
/// curriculum named "AFT" short-circuits to `<code>-FND`, ignoring the rest.
pub fn specialty_concat(sorted_curricula: &[&Curriculum]) -> String {
    let mut concat = String::new();

    for (index, curriculum) in sorted_curricula.iter().enumerate() {
        let specialty_code = curriculum.curriculum_specialty_code.as_deref().unwrap_or("");

        if index > 0 {
            if curriculum.curriculum_sub_type.as_deref() == Some("SUB_SPECIALTY") {
                tracing::debug!("Appending sub-specialty '{specialty_code}'.");
                concat.push('.');
            } else {
                tracing::debug!("Appending specialty '{specialty_code}'.");
                concat.push('-');
            }
        } else {
            tracing::debug!("Using '{specialty_code}' as first specialty.");
        }

        concat.push_str(specialty_code);

        if index == 0 && curriculum.curriculum_name.as_deref() == Some("AFT") {
            concat.push_str("-FND");
            break;
        }
    }

    concat
}
