/// Fatal errors raised while computing a training number.
///
/// These are distinct from eligibility skips: a skip is an expected
/// non-generation outcome recorded as a [`crate::SkipReason`], while these
/// errors indicate a data or configuration defect that aborts processing of
/// the affected programme membership.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error(
        "unable to calculate the parent organization for managing deanery '{managing_deanery}'"
    )]
    UnmappedDeanery { managing_deanery: String },
    #[error("failed to re-sign programme membership: {0}")]
    Signing(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type GenerationResult<T> = std::result::Result<T, GenerationError>;
