//! Signing collaborator interface.
//!
//! The engine does not sign anything itself. When a programme membership
//! that already carried a signature has its training number changed, the
//! surrounding service's signing collaborator must refresh that signature;
//! this trait is that boundary.

use ntn_types::ProgrammeMembership;

/// Error type surfaced by a signing collaborator.
pub type SigningError = Box<dyn std::error::Error + Send + Sync>;

/// A collaborator that signs programme membership records.
pub trait SignatureService {
    /// Sign the membership, replacing any existing signature artifact.
    ///
    /// # Errors
    ///
    /// Any error is treated by the engine as fatal for the membership being
    /// processed; the engine never retries.
    fn sign(&self, membership: &mut ProgrammeMembership) -> Result<(), SigningError>;
}
