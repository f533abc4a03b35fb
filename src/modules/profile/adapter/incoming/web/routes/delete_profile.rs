use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::profile::application::use_cases::delete_profile::DeleteProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/profiles/{profile_id}")]
pub async fn delete_profile_handler(
    admin: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let profile_id = path.into_inner();

    match data.delete_profile_use_case.execute(profile_id).await {
        Ok(()) => {
            info!(profile_id = %profile_id, admin_id = %admin.admin_id, "Profile deleted");
            ApiResponse::<()>::no_content()
        }

        Err(DeleteProfileError::NotFound) => {
            ApiResponse::<()>::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }

        Err(DeleteProfileError::RepositoryError(ref e)) => {
            error!(error = %e, profile_id = %profile_id, "Profile delete failed");
            ApiResponse::<()>::internal_error()
        }
    }
}
