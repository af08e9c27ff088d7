//! # NTN Core
//!
//! The training number generation engine for trainee profiles.
//!
//! A training number is the structured identifier
//! `ORG/SPECIALTY/REFERENCE/SUFFIX` attached to an eligible programme
//! membership: the managing deanery's organization code, the concatenated
//! valid specialty codes, the trainee's GMC or GDC number, and a pathway
//! suffix. The engine is a pure, synchronous computation over the records it
//! is lent; it writes back exactly one field (`training_number`) and owns no
//! state across invocations.
//!
//! Two policy flavours exist, captured by [`GeneratorConfig`] presets:
//! [`GeneratorConfig::current`] numbers against the curricula valid today,
//! while [`GeneratorConfig::prospective`] anchors on the programme start for
//! future programmes, collapses duplicate specialties, honours the military
//! organization override and re-signs previously-signed memberships.
//!
//! **No service concerns**: profile retrieval, persistence, HTTP surfaces
//! and the signing implementation belong to the surrounding profile service;
//! the signing boundary here is the [`SignatureService`] trait.

pub mod config;
pub mod curricula;
pub mod eligibility;
pub mod error;
pub mod generator;
pub mod organization;
pub mod reference;
pub mod signing;
pub mod specialty;
pub mod suffix;

pub use config::{AnchorPolicy, GeneratorConfig, ValidityPolicy};
pub use eligibility::SkipReason;
pub use error::{GenerationError, GenerationResult};
pub use generator::{PopulationOutcome, TrainingNumberGenerator};
pub use signing::{SignatureService, SigningError};
