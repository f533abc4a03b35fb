use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::Session;
use crate::matching::application::use_cases::find_matches::FindMatchesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/profiles/{profile_id}/matches")]
pub async fn get_matches_handler(
    session: Session,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let profile_id = path.into_inner();

    if !session.can_access_profile(profile_id) {
        return ApiResponse::forbidden("FORBIDDEN", "Not allowed to view these matches");
    }

    match data.find_matches_use_case.execute(profile_id).await {
        Ok(results) => ApiResponse::success(results),

        Err(FindMatchesError::ProfileNotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }

        Err(FindMatchesError::RepositoryError(ref e)) => {
            error!(error = %e, profile_id = %profile_id, "Match scan failed");
            ApiResponse::internal_error()
        }
    }
}
