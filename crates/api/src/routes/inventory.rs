//! Stock item and stock journal routes

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use ledgerlink_domain::validation::require;
use ledgerlink_domain::{StockItemBalance, StockItemInput, StockJournalInput, StockWriteResult};

use crate::context::AppContext;
use crate::error::ApiError;
use crate::routes::{CompanyQuery, MessageResponse, ServerRequest};
use crate::utils::route_helpers::execute_logged;

/// Creates a stock item; `data.closing_balance` is read back afterwards and
/// is null when that lookup fails.
pub async fn create_stock_item(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<ServerRequest<StockItemInput>>,
) -> Result<Json<MessageResponse<StockWriteResult>>, ApiError> {
    execute_logged("inventory::item_create", || async {
        let result = ctx.service(request.tally_url())?.create_stock_item(&request.body).await?;
        Ok::<_, ApiError>(Json(MessageResponse::new("Stock Item created successfully", result)))
    })
    .await
}

pub async fn create_stock_journal(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<ServerRequest<StockJournalInput>>,
) -> Result<Json<MessageResponse<StockWriteResult>>, ApiError> {
    execute_logged("inventory::journal_create", || async {
        let result = ctx.service(request.tally_url())?.create_stock_journal(&request.body).await?;
        Ok::<_, ApiError>(Json(MessageResponse::new("Stock Journal created successfully", result)))
    })
    .await
}

pub async fn stock_items(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<ServerRequest<CompanyQuery>>,
) -> Result<Json<MessageResponse<Vec<StockItemBalance>>>, ApiError> {
    execute_logged("inventory::items", || async {
        let company = require("company_name", &request.body.company_name)?;
        let items = ctx.service(request.tally_url())?.stock_items(company).await?;
        Ok::<_, ApiError>(Json(MessageResponse::new("Stock items fetched successfully", items)))
    })
    .await
}
