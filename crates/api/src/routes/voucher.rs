//! Voucher routes.
//!
//! Update and delete run the reconciliation saga; on failure the response
//! carries the stage reached and, if the original voucher could not be
//! restored, the voucher itself.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use ledgerlink_core::ReconcileOutcome;
use ledgerlink_domain::validation::require;
use ledgerlink_domain::{
    LedgerTransaction, PurchaseVoucherInput, SalesVoucherInput, VoucherCriteria, VoucherDraft,
};
use ledgerlink_infra::WriteReceipt;
use serde::Deserialize;

use crate::context::AppContext;
use crate::error::ApiError;
use crate::routes::{MessageResponse, ServerRequest, StatusResponse};
use crate::utils::route_helpers::execute_logged;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VoucherUpdate {
    pub old_voucher: VoucherCriteria,
    pub new_voucher: VoucherCriteria,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VoucherRemoval {
    pub old_voucher: VoucherCriteria,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LedgerQuery {
    pub company_name: String,
    pub ledger_name: String,
}

pub async fn create_voucher(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<ServerRequest<VoucherDraft>>,
) -> Result<Json<MessageResponse<WriteReceipt>>, ApiError> {
    execute_logged("voucher::create", || async {
        let receipt = ctx.service(request.tally_url())?.create_voucher(&request.body).await?;
        Ok::<_, ApiError>(Json(MessageResponse::new("Voucher processed successfully", receipt)))
    })
    .await
}

pub async fn update_voucher(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<ServerRequest<VoucherUpdate>>,
) -> Result<Json<StatusResponse<ReconcileOutcome>>, ApiError> {
    execute_logged("voucher::update", || async {
        let VoucherUpdate { old_voucher, new_voucher } = &request.body;
        let outcome = ctx.reconciler(request.tally_url())?.update(old_voucher, new_voucher).await?;
        Ok::<_, ApiError>(Json(StatusResponse::success(outcome)))
    })
    .await
}

pub async fn delete_voucher(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<ServerRequest<VoucherRemoval>>,
) -> Result<Json<StatusResponse<ReconcileOutcome>>, ApiError> {
    execute_logged("voucher::delete", || async {
        let outcome =
            ctx.reconciler(request.tally_url())?.remove(&request.body.old_voucher).await?;
        Ok::<_, ApiError>(Json(StatusResponse::success(outcome)))
    })
    .await
}

pub async fn voucher_transactions(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<ServerRequest<LedgerQuery>>,
) -> Result<Json<StatusResponse<Vec<LedgerTransaction>>>, ApiError> {
    execute_logged("voucher::transactions", || async {
        let company = require("company_name", &request.body.company_name)?;
        let ledger = require("ledger_name", &request.body.ledger_name)?;
        let rows = ctx.service(request.tally_url())?.ledger_transactions(company, ledger).await?;
        Ok::<_, ApiError>(Json(StatusResponse::success(rows)))
    })
    .await
}

pub async fn create_sales_voucher(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<ServerRequest<SalesVoucherInput>>,
) -> Result<Json<MessageResponse<WriteReceipt>>, ApiError> {
    execute_logged("voucher::sales_create", || async {
        let receipt = ctx.service(request.tally_url())?.create_sales_voucher(&request.body).await?;
        Ok::<_, ApiError>(Json(MessageResponse::new("Sales voucher created successfully", receipt)))
    })
    .await
}

pub async fn create_purchase_voucher(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<ServerRequest<PurchaseVoucherInput>>,
) -> Result<Json<MessageResponse<WriteReceipt>>, ApiError> {
    execute_logged("voucher::purchase_create", || async {
        let receipt =
            ctx.service(request.tally_url())?.create_purchase_voucher(&request.body).await?;
        Ok::<_, ApiError>(Json(MessageResponse::new(
            "Purchase voucher created successfully",
            receipt,
        )))
    })
    .await
}
