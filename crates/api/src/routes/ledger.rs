use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use ledgerlink_domain::{LedgerInput, WriteAction};
use ledgerlink_infra::WriteReceipt;

use crate::context::AppContext;
use crate::error::ApiError;
use crate::routes::{MessageResponse, ServerRequest};
use crate::utils::route_helpers::execute_logged;

pub async fn create_ledger(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<ServerRequest<LedgerInput>>,
) -> Result<Json<MessageResponse<WriteReceipt>>, ApiError> {
    execute_logged("ledger::create", || async {
        let service = ctx.service(request.tally_url())?;
        let receipt = service.save_ledger(&request.body, WriteAction::Create).await?;
        Ok::<_, ApiError>(Json(MessageResponse::new("Ledger processed successfully", receipt)))
    })
    .await
}
