use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use ledgerlink_domain::validation::require;
use ledgerlink_domain::{BalanceSheetRow, TrialBalanceRow};

use crate::context::AppContext;
use crate::error::ApiError;
use crate::routes::{CompanyQuery, MessageResponse, ServerRequest};
use crate::utils::route_helpers::execute_logged;

/// Unreadable report exports come back as an empty `data` list.
pub async fn trial_balance(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<ServerRequest<CompanyQuery>>,
) -> Result<Json<MessageResponse<Vec<TrialBalanceRow>>>, ApiError> {
    execute_logged("reports::trial_balance", || async {
        let company = require("company_name", &request.body.company_name)?;
        let rows = ctx.service(request.tally_url())?.trial_balance(company).await?;
        Ok::<_, ApiError>(Json(MessageResponse::new("Trial balance fetched successfully", rows)))
    })
    .await
}

pub async fn balance_sheet(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<ServerRequest<CompanyQuery>>,
) -> Result<Json<MessageResponse<Vec<BalanceSheetRow>>>, ApiError> {
    execute_logged("reports::balance_sheet", || async {
        let company = require("company_name", &request.body.company_name)?;
        let rows = ctx.service(request.tally_url())?.balance_sheet(company).await?;
        Ok::<_, ApiError>(Json(MessageResponse::new("Balance Sheet fetched successfully", rows)))
    })
    .await
}
