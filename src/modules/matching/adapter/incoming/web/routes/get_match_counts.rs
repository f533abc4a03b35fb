use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::matching::application::use_cases::count_matches::CountMatchesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/matches/counts")]
pub async fn get_match_counts_handler(
    _admin: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.count_matches_use_case.execute().await {
        Ok(summary) => ApiResponse::success(summary),

        Err(CountMatchesError::RepositoryError(ref e)) => {
            error!(error = %e, "Match count scan failed");
            ApiResponse::internal_error()
        }
    }
}
