//! Handler execution helpers.

use std::future::Future;
use std::time::Instant;

use crate::error::ApiError;
use crate::utils::logging::log_request_outcome;

/// Run a handler body, timing it and logging its outcome.
///
/// # Example
///
/// ```rust,ignore
/// pub async fn trial_balance(
///     State(ctx): State<Arc<AppContext>>,
///     Json(request): Json<ServerRequest<CompanyQuery>>,
/// ) -> Result<Json<MessageResponse<Vec<TrialBalanceRow>>>, ApiError> {
///     execute_logged("trial_balance", || async {
///         let service = ctx.service(request.tally_url())?;
///         let rows = service.trial_balance(&request.body.company_name).await?;
///         let message = "Trial balance fetched successfully";
///         Ok::<_, ApiError>(Json(MessageResponse::new(message, rows)))
///     })
///     .await
/// }
/// ```
pub async fn execute_logged<F, Fut, T>(route: &str, handler_fn: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let start = Instant::now();
    let result = handler_fn().await;
    log_request_outcome(route, start.elapsed(), &result);
    result
}
