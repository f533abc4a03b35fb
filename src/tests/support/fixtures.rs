use chrono::Utc;
use uuid::Uuid;

use crate::profile::application::ports::outgoing::CreateProfileData;
use crate::profile::domain::entities::{Gender, Profile, ProfileStatus, Requirements};

/// Baseline male applicant. Tests override the fields they exercise.
pub fn male_profile() -> Profile {
    Profile {
        id: Uuid::new_v4(),
        name: "Ahmed Khan".to_string(),
        father_name: "Rashid Khan".to_string(),
        gender: Gender::Male,
        age: 28,
        height: "5.8".to_string(),
        weight: "75kg".to_string(),
        complexion: "Fair".to_string(),
        cast: "Rajput".to_string(),
        sect: "Sunni".to_string(),
        marital_status: "Single".to_string(),
        mother_tongue: "Urdu".to_string(),
        origin: "Punjab".to_string(),
        education: "Bachelor's".to_string(),
        occupation: "Engineer".to_string(),
        income: "150000".to_string(),
        address: "House 12, Street 4".to_string(),
        city: "Lahore".to_string(),
        country: "Pakistan".to_string(),
        brothers: 2,
        married_brothers: 1,
        sisters: 1,
        married_sisters: 0,
        family_details: "Joint family".to_string(),
        house_type: "Own house".to_string(),
        photo: None,
        status: ProfileStatus::Active,
        match_link: None,
        share_count: 0,
        requirements: Requirements::default(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn female_profile() -> Profile {
    Profile {
        id: Uuid::new_v4(),
        name: "Sana Malik".to_string(),
        father_name: "Tariq Malik".to_string(),
        gender: Gender::Female,
        age: 24,
        height: "5.4".to_string(),
        weight: "55kg".to_string(),
        complexion: "Fair".to_string(),
        cast: "Jutt".to_string(),
        sect: "Sunni".to_string(),
        marital_status: "Single".to_string(),
        mother_tongue: "Urdu".to_string(),
        origin: "Punjab".to_string(),
        education: "Bachelor's".to_string(),
        occupation: "Teacher".to_string(),
        income: "".to_string(),
        address: "Flat 3B, Garden Town".to_string(),
        city: "Lahore".to_string(),
        country: "Pakistan".to_string(),
        brothers: 1,
        married_brothers: 0,
        sisters: 2,
        married_sisters: 1,
        family_details: "Nuclear family".to_string(),
        house_type: "Rented".to_string(),
        photo: None,
        status: ProfileStatus::Active,
        match_link: None,
        share_count: 0,
        requirements: Requirements::default(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// A valid public form submission.
pub fn create_profile_data() -> CreateProfileData {
    let p = male_profile();
    CreateProfileData {
        name: p.name,
        father_name: p.father_name,
        gender: p.gender,
        age: p.age,
        height: p.height,
        weight: p.weight,
        complexion: p.complexion,
        cast: p.cast,
        sect: p.sect,
        marital_status: p.marital_status,
        mother_tongue: p.mother_tongue,
        origin: p.origin,
        education: p.education,
        occupation: p.occupation,
        income: p.income,
        address: p.address,
        city: p.city,
        country: p.country,
        brothers: p.brothers,
        married_brothers: p.married_brothers,
        sisters: p.sisters,
        married_sisters: p.married_sisters,
        family_details: p.family_details,
        house_type: p.house_type,
        photo: None,
        requirements: Requirements::default(),
    }
}
