use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::profile::application::use_cases::share_profile::ShareProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
pub struct ShareResponse {
    pub profile_id: Uuid,
    pub share_count: i32,
}

/// Public endpoint: sharing a profile card bumps its counter, no auth.
#[post("/api/profiles/{profile_id}/share")]
pub async fn share_profile_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let profile_id = path.into_inner();

    match data.share_profile_use_case.execute(profile_id).await {
        Ok(share_count) => ApiResponse::success(ShareResponse {
            profile_id,
            share_count,
        }),

        Err(ShareProfileError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }

        Err(ShareProfileError::RepositoryError(ref e)) => {
            error!(error = %e, profile_id = %profile_id, "Share count update failed");
            ApiResponse::internal_error()
        }
    }
}
