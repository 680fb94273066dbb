//! Voucher update and delete on a server with create and delete only.
//!
//! An update runs as a saga of remote calls awaited strictly in sequence:
//!
//! 1. **Resolve** the old voucher to exactly one record.
//! 2. **DeleteOld** by its remote id.
//! 3. **CreateNew** from the resolved record overlaid with the patch.
//! 4. **Restore** the old record if step 3 did not succeed.
//!
//! A delete is steps 1 and 2 only. No step is retried.
//!
//! Step 2 counts as done only when the server reports a non-zero `DELETED`
//! counter. A reply without that counter is treated like a refusal and
//! reported as failed before mutation, with a message saying the delete is
//! unconfirmed. The old record may in fact be gone in that case.
//!
//! Nothing here coordinates concurrent reconciliations. Two updates against
//! the same company can both resolve the same voucher before either deletes
//! it; the second delete then reports nothing deleted and that update fails
//! before mutating. Callers that need stronger guarantees must serialise
//! updates per company themselves.

use std::fmt;
use std::sync::Arc;

use ledgerlink_domain::{LedgerLinkError, VoucherCriteria, VoucherDescriptor};
use serde::Serialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::ports::VoucherGateway;
use super::resolver::VoucherResolver;

/// Saga step reached when a reconciliation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconcileStage {
    Resolve,
    DeleteOld,
    CreateNew,
    Restore,
}

impl ReconcileStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Resolve => "resolve",
            Self::DeleteOld => "delete_old",
            Self::CreateNew => "create_new",
            Self::Restore => "restore",
        }
    }
}

impl fmt::Display for ReconcileStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal state of one reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalState {
    Success,
    FailedBeforeMutation,
    FailedAfterRestore,
    FailedUnrecoverable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReconcileOutcome {
    Updated { previous: VoucherDescriptor, current: VoucherDescriptor },
    Deleted { previous: VoucherDescriptor },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileFailure {
    /// Nothing on the ledger server was changed.
    BeforeMutation { stage: ReconcileStage, error: LedgerLinkError },
    /// The replacement failed and the original voucher was recreated.
    AfterRestore { restored: VoucherDescriptor, error: LedgerLinkError },
    /// The replacement failed and recreating the original was not confirmed.
    /// `lost` is everything needed to recreate it by hand.
    Unrecoverable {
        lost: VoucherDescriptor,
        error: LedgerLinkError,
        restore_error: LedgerLinkError,
    },
}

impl ReconcileFailure {
    pub fn stage(&self) -> ReconcileStage {
        match self {
            Self::BeforeMutation { stage, .. } => *stage,
            Self::AfterRestore { .. } | Self::Unrecoverable { .. } => ReconcileStage::Restore,
        }
    }

    pub fn terminal_state(&self) -> TerminalState {
        match self {
            Self::BeforeMutation { .. } => TerminalState::FailedBeforeMutation,
            Self::AfterRestore { .. } => TerminalState::FailedAfterRestore,
            Self::Unrecoverable { .. } => TerminalState::FailedUnrecoverable,
        }
    }

    /// The voucher that may no longer exist on the ledger server.
    pub fn lost_voucher(&self) -> Option<&VoucherDescriptor> {
        match self {
            Self::Unrecoverable { lost, .. } => Some(lost),
            _ => None,
        }
    }
}

impl fmt::Display for ReconcileFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BeforeMutation { stage, error } => write!(f, "{stage} failed: {error}"),
            Self::AfterRestore { restored, error } => write!(
                f,
                "Updated voucher creation failed ({error}); original voucher {} restored",
                restored.remote_id_or_derived()
            ),
            Self::Unrecoverable { lost, error, restore_error } => write!(
                f,
                "Updated voucher creation failed ({error}) and restoring original voucher {} \
                 failed ({restore_error}); it must be recreated manually",
                lost.remote_id_or_derived()
            ),
        }
    }
}

impl std::error::Error for ReconcileFailure {}

impl From<ReconcileFailure> for LedgerLinkError {
    fn from(failure: ReconcileFailure) -> Self {
        let message = failure.to_string();
        match failure {
            ReconcileFailure::BeforeMutation { error, .. } => error,
            ReconcileFailure::AfterRestore { .. } => Self::RolledBack(message),
            ReconcileFailure::Unrecoverable { .. } => Self::Unrecoverable(message),
        }
    }
}

pub type ReconcileResult = std::result::Result<ReconcileOutcome, ReconcileFailure>;

/// Runs voucher update and delete sagas against a [`VoucherGateway`].
pub struct ReconciliationService {
    gateway: Arc<dyn VoucherGateway>,
    resolver: VoucherResolver,
}

impl ReconciliationService {
    pub fn new(gateway: Arc<dyn VoucherGateway>) -> Self {
        let resolver = VoucherResolver::new(Arc::clone(&gateway));
        Self { gateway, resolver }
    }

    /// Replace the voucher matching `old` with that voucher overlaid by
    /// `patch`.
    pub async fn update(&self, old: &VoucherCriteria, patch: &VoucherCriteria) -> ReconcileResult {
        let saga_id = Uuid::new_v4();
        let previous = self.resolve_stage(saga_id, old).await?;
        let mut current = patch
            .apply_to(&previous)
            .map_err(|error| before_mutation(saga_id, ReconcileStage::Resolve, error))?;
        current.remote_id = Some(current.derived_remote_id());

        self.delete_stage(saga_id, &previous).await?;

        let created = match self.gateway.create_voucher(&current).await {
            Ok(outcome) if outcome.confirms_create() => Ok(()),
            Ok(outcome) => Err(LedgerLinkError::Rejected(format!(
                "Updated voucher was not created ({})",
                outcome.describe()
            ))),
            Err(err) => Err(err),
        };

        match created {
            Ok(()) => {
                info!(
                    %saga_id,
                    company = %current.company_name,
                    previous_id = %previous.remote_id_or_derived(),
                    remote_id = %current.remote_id_or_derived(),
                    "Voucher updated"
                );
                Ok(ReconcileOutcome::Updated { previous, current })
            }
            Err(error) => {
                warn!(
                    %saga_id,
                    stage = %ReconcileStage::CreateNew,
                    error = %error,
                    "Replacement voucher failed; restoring original"
                );
                Err(self.restore(saga_id, previous, error).await)
            }
        }
    }

    /// Delete the single voucher matching `criteria`.
    pub async fn remove(&self, criteria: &VoucherCriteria) -> ReconcileResult {
        let saga_id = Uuid::new_v4();
        let previous = self.resolve_stage(saga_id, criteria).await?;
        self.delete_stage(saga_id, &previous).await?;
        info!(
            %saga_id,
            company = %previous.company_name,
            remote_id = %previous.remote_id_or_derived(),
            "Voucher deleted"
        );
        Ok(ReconcileOutcome::Deleted { previous })
    }

    async fn resolve_stage(
        &self,
        saga_id: Uuid,
        criteria: &VoucherCriteria,
    ) -> Result<VoucherDescriptor, ReconcileFailure> {
        let stage = ReconcileStage::Resolve;
        criteria.validate_lookup().map_err(|error| before_mutation(saga_id, stage, error))?;
        let company = criteria.company().map_err(|error| before_mutation(saga_id, stage, error))?;

        let resolved = self
            .resolver
            .resolve(company, criteria)
            .await
            .map_err(|error| before_mutation(saga_id, stage, error))?;
        info!(
            %saga_id,
            company,
            remote_id = %resolved.remote_id_or_derived(),
            stage = %stage,
            "Resolved voucher"
        );
        Ok(resolved)
    }

    async fn delete_stage(
        &self,
        saga_id: Uuid,
        previous: &VoucherDescriptor,
    ) -> Result<(), ReconcileFailure> {
        let stage = ReconcileStage::DeleteOld;
        let remote_id = previous.remote_id_or_derived();

        let outcome = self
            .gateway
            .delete_voucher(&previous.company_name, &remote_id, &previous.voucher_type)
            .await
            .map_err(|error| before_mutation(saga_id, stage, error))?;

        if !outcome.confirms_delete() {
            let reason = match outcome.deleted {
                Some(_) => format!("Voucher {remote_id} not found or undeletable"),
                None => format!(
                    "Delete of voucher {remote_id} unconfirmed: \
                     ledger server reported no DELETED counter"
                ),
            };
            let error = LedgerLinkError::Rejected(format!("{reason} ({})", outcome.describe()));
            return Err(before_mutation(saga_id, stage, error));
        }
        info!(%saga_id, remote_id = %remote_id, stage = %stage, "Deleted old voucher");
        Ok(())
    }

    /// Recreate `previous` once. Never retried.
    async fn restore(
        &self,
        saga_id: Uuid,
        previous: VoucherDescriptor,
        error: LedgerLinkError,
    ) -> ReconcileFailure {
        let restore_error = match self.gateway.create_voucher(&previous).await {
            Ok(outcome) if outcome.confirms_create() => {
                info!(
                    %saga_id,
                    remote_id = %previous.remote_id_or_derived(),
                    stage = %ReconcileStage::Restore,
                    "Original voucher restored"
                );
                return ReconcileFailure::AfterRestore { restored: previous, error };
            }
            Ok(outcome) => LedgerLinkError::Rejected(format!(
                "Original voucher was not recreated ({})",
                outcome.describe()
            )),
            Err(err) => err,
        };

        error!(
            %saga_id,
            company = %previous.company_name,
            remote_id = %previous.remote_id_or_derived(),
            from_ledger = %previous.from_ledger,
            to_ledger = %previous.to_ledger,
            amount = %previous.amount,
            date = %previous.date,
            voucher_type = %previous.voucher_type,
            error = %restore_error,
            "Restore failed; voucher may be lost"
        );
        ReconcileFailure::Unrecoverable { lost: previous, error, restore_error }
    }
}

fn before_mutation(
    saga_id: Uuid,
    stage: ReconcileStage,
    error: LedgerLinkError,
) -> ReconcileFailure {
    warn!(%saga_id, stage = %stage, error = %error, "Reconciliation stopped before mutation");
    ReconcileFailure::BeforeMutation { stage, error }
}
