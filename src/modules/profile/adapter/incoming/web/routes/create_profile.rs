use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::profile::application::ports::outgoing::CreateProfileData;
use crate::profile::application::use_cases::create_profile::{
    CreateProfileError, ProfileSubmission,
};
use crate::profile::domain::entities::{
    Gender, ListReq, RangeReq, Requirements, TextReq,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequirementsDto {
    pub age_min: Option<i32>,
    pub age_max: Option<i32>,
    #[serde(default)]
    pub height_min: String,
    #[serde(default)]
    pub height_max: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub occupation: String,
    #[serde(default)]
    pub family_type: String,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub casts: Vec<String>,
    #[serde(default)]
    pub sects: Vec<String>,
    #[serde(default)]
    pub marital_statuses: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub origins: Vec<String>,
    #[serde(default)]
    pub house_types: Vec<String>,
}

impl RequirementsDto {
    pub(crate) fn into_requirements(self) -> Result<Requirements, String> {
        let age = match (self.age_min, self.age_max) {
            (Some(min), Some(max)) => {
                RangeReq::new(min, max).map_err(|e| e.to_string())?
            }
            _ => RangeReq::Unset,
        };

        Ok(Requirements {
            age,
            height: RangeReq::parse(&self.height_min, &self.height_max),
            education: TextReq::from_input(&self.education),
            occupation: TextReq::from_input(&self.occupation),
            family_type: TextReq::from_input(&self.family_type),
            locations: ListReq::from_input(self.locations),
            casts: ListReq::from_input(self.casts),
            sects: ListReq::from_input(self.sects),
            marital_statuses: ListReq::from_input(self.marital_statuses),
            languages: ListReq::from_input(self.languages),
            origins: ListReq::from_input(self.origins),
            house_types: ListReq::from_input(self.house_types),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateProfileRequestDto {
    pub name: String,
    #[serde(default)]
    pub father_name: String,
    pub gender: Gender,
    pub age: i32,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub complexion: String,
    #[serde(default)]
    pub cast: String,
    #[serde(default)]
    pub sect: String,
    #[serde(default)]
    pub marital_status: String,
    #[serde(default)]
    pub mother_tongue: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub occupation: String,
    #[serde(default)]
    pub income: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub brothers: i32,
    #[serde(default)]
    pub married_brothers: i32,
    #[serde(default)]
    pub sisters: i32,
    #[serde(default)]
    pub married_sisters: i32,
    #[serde(default)]
    pub family_details: String,
    #[serde(default)]
    pub house_type: String,
    /// Inline photo as a `data:image/...;base64,` URI.
    pub photo: Option<String>,
    #[serde(default)]
    pub requirements: RequirementsDto,
}

#[post("/api/profiles")]
pub async fn create_profile_handler(
    req: web::Json<CreateProfileRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let requirements = match dto.requirements.into_requirements() {
        Ok(r) => r,
        Err(msg) => return ApiResponse::bad_request("VALIDATION_ERROR", &msg),
    };

    let submission = ProfileSubmission {
        data: CreateProfileData {
            name: dto.name,
            father_name: dto.father_name,
            gender: dto.gender,
            age: dto.age,
            height: dto.height,
            weight: dto.weight,
            complexion: dto.complexion,
            cast: dto.cast,
            sect: dto.sect,
            marital_status: dto.marital_status,
            mother_tongue: dto.mother_tongue,
            origin: dto.origin,
            education: dto.education,
            occupation: dto.occupation,
            income: dto.income,
            address: dto.address,
            city: dto.city,
            country: dto.country,
            brothers: dto.brothers,
            married_brothers: dto.married_brothers,
            sisters: dto.sisters,
            married_sisters: dto.married_sisters,
            family_details: dto.family_details,
            house_type: dto.house_type,
            photo: None,
            requirements,
        },
        photo_data_uri: dto.photo,
    };

    match data.create_profile_use_case.execute(submission).await {
        Ok(profile) => {
            info!(profile_id = %profile.id, "Profile created");
            ApiResponse::created(profile)
        }

        Err(CreateProfileError::Validation(e)) => {
            warn!(error = %e, "Profile submission rejected");
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(CreateProfileError::PhotoUpload(ref msg)) => {
            warn!(error = %msg, "Photo upload rejected");
            ApiResponse::bad_request("VALIDATION_ERROR", msg)
        }

        Err(CreateProfileError::RepositoryError(ref e)) => {
            error!(error = %e, "Profile create failed");
            ApiResponse::internal_error()
        }
    }
}
