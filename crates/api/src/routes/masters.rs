//! Account group routes

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use ledgerlink_domain::GroupInput;
use ledgerlink_infra::WriteReceipt;

use crate::context::AppContext;
use crate::error::ApiError;
use crate::routes::{MessageResponse, ServerRequest};
use crate::utils::route_helpers::execute_logged;

pub async fn create_group(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<ServerRequest<GroupInput>>,
) -> Result<Json<MessageResponse<WriteReceipt>>, ApiError> {
    execute_logged("group::create", || async {
        let receipt = ctx.service(request.tally_url())?.create_group(&request.body).await?;
        Ok::<_, ApiError>(Json(MessageResponse::new("Group created successfully", receipt)))
    })
    .await
}

pub async fn delete_group(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<ServerRequest<GroupInput>>,
) -> Result<Json<MessageResponse<WriteReceipt>>, ApiError> {
    execute_logged("group::delete", || async {
        let receipt = ctx.service(request.tally_url())?.delete_group(&request.body).await?;
        Ok::<_, ApiError>(Json(MessageResponse::new("Group deleted successfully", receipt)))
    })
    .await
}
