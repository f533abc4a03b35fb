use chrono::Utc;
use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::profile::application::ports::outgoing::CreateProfileData;
use crate::profile::domain::entities::{
    Gender, MatchLink, PhotoRef, Profile, ProfileStatus, Requirements,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub name: String,
    pub father_name: String,
    pub gender: String,
    pub age: i32,
    pub height: String,
    pub weight: String,
    pub complexion: String,
    pub cast: String,
    pub sect: String,
    pub marital_status: String,
    pub mother_tongue: String,
    pub origin: String,
    pub education: String,
    pub occupation: String,
    pub income: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub brothers: i32,
    pub married_brothers: i32,
    pub sisters: i32,
    pub married_sisters: i32,
    pub family_details: String,
    pub house_type: String,
    pub photo_url: Option<String>,
    pub photo_object_key: Option<String>,
    pub status: String,
    pub matched_with: Option<Uuid>,
    pub matched_on: Option<DateTimeWithTimeZone>,
    pub share_count: i32,
    /// Partner requirements, stored as JSONB.
    pub requirements: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn gender_to_db(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "male",
        Gender::Female => "female",
    }
}

pub fn gender_from_db(value: &str) -> Result<Gender, String> {
    match value {
        "male" => Ok(Gender::Male),
        "female" => Ok(Gender::Female),
        other => Err(format!("unknown gender value in store: {other}")),
    }
}

pub fn status_to_db(status: ProfileStatus) -> &'static str {
    match status {
        ProfileStatus::Active => "active",
        ProfileStatus::Matched => "matched",
        ProfileStatus::Engaged => "engaged",
        ProfileStatus::Married => "married",
        ProfileStatus::Inactive => "inactive",
    }
}

pub fn status_from_db(value: &str) -> Result<ProfileStatus, String> {
    match value {
        "active" => Ok(ProfileStatus::Active),
        "matched" => Ok(ProfileStatus::Matched),
        "engaged" => Ok(ProfileStatus::Engaged),
        "married" => Ok(ProfileStatus::Married),
        "inactive" => Ok(ProfileStatus::Inactive),
        other => Err(format!("unknown status value in store: {other}")),
    }
}

impl Model {
    pub fn to_domain(self) -> Result<Profile, String> {
        let gender = gender_from_db(&self.gender)?;
        let status = status_from_db(&self.status)?;

        let requirements: Requirements = serde_json::from_value(self.requirements)
            .map_err(|e| format!("corrupt requirements payload: {e}"))?;

        let photo = match (self.photo_url, self.photo_object_key) {
            (Some(url), Some(object_key)) => Some(PhotoRef { url, object_key }),
            _ => None,
        };

        let match_link = match (self.matched_with, self.matched_on) {
            (Some(profile_id), Some(matched_on)) => Some(MatchLink {
                profile_id,
                matched_on: matched_on.with_timezone(&Utc),
            }),
            _ => None,
        };

        Ok(Profile {
            id: self.id,
            name: self.name,
            father_name: self.father_name,
            gender,
            age: self.age,
            height: self.height,
            weight: self.weight,
            complexion: self.complexion,
            cast: self.cast,
            sect: self.sect,
            marital_status: self.marital_status,
            mother_tongue: self.mother_tongue,
            origin: self.origin,
            education: self.education,
            occupation: self.occupation,
            income: self.income,
            address: self.address,
            city: self.city,
            country: self.country,
            brothers: self.brothers,
            married_brothers: self.married_brothers,
            sisters: self.sisters,
            married_sisters: self.married_sisters,
            family_details: self.family_details,
            house_type: self.house_type,
            photo,
            status,
            match_link,
            share_count: self.share_count,
            requirements,
            created_at: self.created_at.with_timezone(&Utc),
            updated_at: self.updated_at.with_timezone(&Utc),
        })
    }

    pub fn from_create_data(data: &CreateProfileData) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            father_name: data.father_name.clone(),
            gender: gender_to_db(data.gender).to_string(),
            age: data.age,
            height: data.height.clone(),
            weight: data.weight.clone(),
            complexion: data.complexion.clone(),
            cast: data.cast.clone(),
            sect: data.sect.clone(),
            marital_status: data.marital_status.clone(),
            mother_tongue: data.mother_tongue.clone(),
            origin: data.origin.clone(),
            education: data.education.clone(),
            occupation: data.occupation.clone(),
            income: data.income.clone(),
            address: data.address.clone(),
            city: data.city.clone(),
            country: data.country.clone(),
            brothers: data.brothers,
            married_brothers: data.married_brothers,
            sisters: data.sisters,
            married_sisters: data.married_sisters,
            family_details: data.family_details.clone(),
            house_type: data.house_type.clone(),
            photo_url: data.photo.as_ref().map(|p| p.url.clone()),
            photo_object_key: data.photo.as_ref().map(|p| p.object_key.clone()),
            status: status_to_db(ProfileStatus::Active).to_string(),
            matched_with: None,
            matched_on: None,
            share_count: 0,
            requirements: serde_json::to_value(&data.requirements)
                .unwrap_or(serde_json::Value::Null),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }
}
