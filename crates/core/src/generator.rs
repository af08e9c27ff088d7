//! Training number population.
//!
//! The generator walks a trainee profile's programme memberships, runs the
//! eligibility gate for each, and writes the assembled training number back
//! onto the memberships that pass. Memberships are processed independently:
//! a skip or failure on one never affects the others.

use chrono::NaiveDate;
use ntn_types::{PersonalDetails, ProgrammeMembership, TraineeProfile};

use crate::config::GeneratorConfig;
use crate::eligibility::{self, SkipReason};
use crate::error::GenerationError;
use crate::signing::SignatureService;
use crate::{curricula, organization, reference, specialty, suffix};

/// The per-membership result of a population run.
#[derive(Debug)]
pub enum PopulationOutcome {
    /// The training number was computed and written onto the membership.
    Populated { training_number: String },
    /// The eligibility gate rejected the membership; it was left untouched.
    Skipped(SkipReason),
    /// Computation or re-signing failed for this membership.
    Failed(GenerationError),
}

/// A service for handling trainee training numbers (NTNs/DRNs).
pub struct TrainingNumberGenerator {
    config: GeneratorConfig,
    signature_service: Option<Box<dyn SignatureService>>,
}

impl TrainingNumberGenerator {
    /// Create a generator with no signing collaborator.
    ///
    /// Suitable for configurations that never re-sign; a resigning
    /// configuration without a collaborator fails any membership that needs
    /// its signature refreshed.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            signature_service: None,
        }
    }

    /// Create a generator that re-signs previously-signed memberships
    /// through the given collaborator.
    pub fn with_signature_service(
        config: GeneratorConfig,
        signature_service: Box<dyn SignatureService>,
    ) -> Self {
        Self {
            config,
            signature_service: Some(signature_service),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Populate the training numbers for all programme memberships in the
    /// trainee profile.
    ///
    /// `today` is the caller's current date; passing it in keeps the engine
    /// deterministic. Returns one outcome per membership, in membership
    /// order.
    pub fn populate_training_numbers(
        &self,
        profile: &mut TraineeProfile,
        today: NaiveDate,
    ) -> Vec<PopulationOutcome> {
        let TraineeProfile {
            personal_details,
            programme_memberships,
        } = profile;

        programme_memberships
            .iter_mut()
            .map(|membership| {
                self.populate_training_number(personal_details.as_ref(), membership, today)
            })
            .collect()
    }

    /// Populate the training number for a single programme membership.
    fn populate_training_number(
        &self,
        personal_details: Option<&PersonalDetails>,
        membership: &mut ProgrammeMembership,
        today: NaiveDate,
    ) -> PopulationOutcome {
        let tis_id = membership.tis_id.clone().unwrap_or_default();
        tracing::info!("Populating training number for programme membership '{tis_id}'.");

        let anchor = self.config.anchor.anchor_date(today, membership.start_date);

        if let Err(reason) =
            eligibility::check(personal_details, membership, anchor, self.config.validity)
        {
            match reason {
                SkipReason::MissingTrainingPathway => {
                    tracing::error!(%tis_id, "Unable to generate training number as {reason}.");
                }
                _ => {
                    tracing::info!(%tis_id, "Skipping training number population as {reason}.");
                }
            }
            return PopulationOutcome::Skipped(reason);
        }

        // The gate vouched for these; the fallbacks are unreachable.
        let Some(details) = personal_details else {
            return PopulationOutcome::Skipped(SkipReason::PersonalDetailsNotAvailable);
        };
        let Some(reference_number) = reference::reference_number(details) else {
            return PopulationOutcome::Skipped(SkipReason::InvalidReferenceNumber);
        };

        let parent_organization =
            match organization::parent_organization(membership, self.config.military_override) {
                Ok(code) => code,
                Err(error) => {
                    tracing::error!(%tis_id, "Training number generation failed: {error}.");
                    return PopulationOutcome::Failed(error);
                }
            };

        let (specialty_concat, suffix) = {
            let sorted_curricula = curricula::filter_and_sort(
                &membership.curricula,
                anchor,
                self.config.validity,
                self.config.dedupe,
            );
            let training_pathway = membership.training_pathway.as_deref().unwrap_or_default();

            (
                specialty::specialty_concat(&sorted_curricula),
                suffix::suffix(training_pathway, &sorted_curricula),
            )
        };

        let training_number = assemble(
            &parent_organization,
            &specialty_concat,
            reference_number,
            suffix,
        );
        membership.training_number = Some(training_number.clone());
        tracing::info!("Populated training number: {training_number}.");

        if let Err(error) = self.resign(membership) {
            tracing::error!(%tis_id, "Training number generation failed: {error}.");
            return PopulationOutcome::Failed(error);
        }

        PopulationOutcome::Populated { training_number }
    }

    /// Re-sign the membership when the configuration asks for it and a prior
    /// signature exists. Memberships that were never signed are left alone.
    fn resign(&self, membership: &mut ProgrammeMembership) -> Result<(), GenerationError> {
        if !self.config.resign || membership.signature.is_none() {
            return Ok(());
        }

        let Some(signature_service) = &self.signature_service else {
            return Err(GenerationError::Signing(
                "no signature service configured".into(),
            ));
        };

        signature_service
            .sign(membership)
            .map_err(GenerationError::Signing)
    }
}

/// Compose the four training number segments. Pure formatting; the segments
/// are validated upstream.
fn assemble(org: &str, specialty: &str, reference: &str, suffix: &str) -> String {
    format!("{org}/{specialty}/{reference}/{suffix}")
}
