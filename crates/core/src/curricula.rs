//! Curriculum filtering and ordering.
//!
//! A curriculum only contributes to a training number while it has a
//! non-blank specialty code and its validity window contains the anchor
//! date. The surviving records are ordered so the specialty concatenation
//! reads from the most general curriculum to the most specific: sub-type
//! ascending, and within a sub-type specialty code descending.

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::NaiveDate;
use ntn_types::Curriculum;

use crate::config::ValidityPolicy;

/// Whether the curriculum's validity window contains the anchor date.
///
/// A curriculum missing either window date is never valid.
fn is_valid_at(curriculum: &Curriculum, anchor: NaiveDate, validity: ValidityPolicy) -> bool {
    let (Some(start), Some(end)) = (
        curriculum.curriculum_start_date,
        curriculum.curriculum_end_date,
    ) else {
        return false;
    };

    match validity {
        ValidityPolicy::StrictOpen => start < anchor && anchor < end,
        ValidityPolicy::InclusiveClosed => start <= anchor && anchor <= end,
    }
}

fn has_specialty_code(curriculum: &Curriculum) -> bool {
    curriculum
        .curriculum_specialty_code
        .as_deref()
        .is_some_and(|code| !code.trim().is_empty())
}

/// Filter the curricula to those valid at `anchor` and sort them for
/// concatenation.
///
/// With `dedupe` set, only the first occurrence of each specialty code
/// survives, in sorted order. The sort is stable, so fully tied records keep
/// their input order.
pub fn filter_and_sort(
    curricula: &[Curriculum],
    anchor: NaiveDate,
    validity: ValidityPolicy,
    dedupe: bool,
) -> Vec<&Curriculum> {
    let mut valid: Vec<&Curriculum> = curricula
        .iter()
        .filter(|c| has_specialty_code(c))
        .filter(|c| is_valid_at(c, anchor, validity))
        .collect();

    valid.sort_by(
        |a, b| match a.curriculum_sub_type.cmp(&b.curriculum_sub_type) {
            Ordering::Equal => b.curriculum_specialty_code.cmp(&a.curriculum_specialty_code),
            ordering => ordering,
        },
    );

    if dedupe {
        let mut seen = HashSet::new();
        valid.retain(|c| seen.insert(c.curriculum_specialty_code.as_deref()));
    }

    valid
}
