use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::Session;
use crate::profile::application::ports::outgoing::Provenance;
use crate::profile::application::use_cases::fetch_profile_by_id::FetchProfileError;
use crate::profile::domain::entities::Profile;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
pub struct ProfileResponse {
    pub profile: Profile,
    pub provenance: Provenance,
}

#[get("/api/profiles/{profile_id}")]
pub async fn get_single_profile_handler(
    session: Session,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let profile_id = path.into_inner();

    if !session.can_access_profile(profile_id) {
        return ApiResponse::forbidden("FORBIDDEN", "Not allowed to view this profile");
    }

    match data.fetch_profile_by_id_use_case.execute(profile_id).await {
        Ok((profile, provenance)) => ApiResponse::success(ProfileResponse {
            profile,
            provenance,
        }),

        Err(FetchProfileError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }

        Err(FetchProfileError::RepositoryError(ref e)) => {
            error!(error = %e, profile_id = %profile_id, "Profile fetch failed");
            ApiResponse::internal_error()
        }
    }
}
