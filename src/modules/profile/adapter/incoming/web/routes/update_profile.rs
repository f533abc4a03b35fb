use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::create_profile::RequirementsDto;
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::profile::application::ports::outgoing::ProfilePatch;
use crate::profile::application::use_cases::update_profile::UpdateProfileError;
use crate::profile::domain::entities::ProfileStatus;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Absent fields are left untouched. `matched_with: null` is
/// indistinguishable from an absent field in JSON, so unlinking goes
/// through `clear_match: true` instead. A `requirements` object replaces
/// the stored requirements wholesale.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfileRequestDto {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub height: Option<String>,
    pub education: Option<String>,
    pub occupation: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub family_details: Option<String>,
    pub status: Option<ProfileStatus>,
    pub matched_with: Option<Uuid>,
    #[serde(default)]
    pub clear_match: bool,
    pub requirements: Option<RequirementsDto>,
}

impl UpdateProfileRequestDto {
    fn into_patch(self) -> Result<ProfilePatch, String> {
        let matched_with = if self.clear_match {
            Some(None)
        } else {
            self.matched_with.map(Some)
        };

        let requirements = match self.requirements {
            Some(dto) => Some(dto.into_requirements()?),
            None => None,
        };

        Ok(ProfilePatch {
            name: self.name,
            age: self.age,
            height: self.height,
            education: self.education,
            occupation: self.occupation,
            address: self.address,
            city: self.city,
            country: self.country,
            family_details: self.family_details,
            status: self.status,
            matched_with,
            requirements,
        })
    }
}

#[patch("/api/profiles/{profile_id}")]
pub async fn update_profile_handler(
    admin: AdminSession,
    path: web::Path<Uuid>,
    req: web::Json<UpdateProfileRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let profile_id = path.into_inner();
    let patch = match req.into_inner().into_patch() {
        Ok(p) => p,
        Err(msg) => return ApiResponse::bad_request("VALIDATION_ERROR", &msg),
    };

    match data
        .update_profile_use_case
        .execute(profile_id, patch)
        .await
    {
        Ok(profile) => {
            info!(profile_id = %profile.id, admin_id = %admin.admin_id, "Profile updated");
            ApiResponse::success(profile)
        }

        Err(UpdateProfileError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }

        Err(UpdateProfileError::Validation(e)) => {
            warn!(error = %e, "Profile update rejected");
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(UpdateProfileError::RepositoryError(ref e)) => {
            error!(error = %e, profile_id = %profile_id, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}
