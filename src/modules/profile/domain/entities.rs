use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Free-text values an applicant can submit that mean "no preference".
/// They are normalized away once, here, so nothing downstream has to
/// re-derive placeholder-ness from strings.
const PLACEHOLDERS: &[&str] = &["", "any", "not specified", "n/a", "none"];

pub fn is_placeholder(value: &str) -> bool {
    let v = value.trim().to_lowercase();
    PLACEHOLDERS.contains(&v.as_str())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn opposite(&self) -> Gender {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileStatus {
    Active,
    Matched,
    Engaged,
    Married,
    Inactive,
}

impl ProfileStatus {
    /// Statuses that may carry a match link.
    pub fn allows_match_link(&self) -> bool {
        matches!(
            self,
            ProfileStatus::Matched | ProfileStatus::Engaged | ProfileStatus::Married
        )
    }
}

/// Externally hosted photo. `object_key` is what the photo host needs
/// to delete the object again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRef {
    pub url: String,
    pub object_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchLink {
    pub profile_id: Uuid,
    pub matched_on: DateTime<Utc>,
}

/// A min/max requirement. Degenerate ranges (min == max) are treated as
/// "not specified" by the source data, so they normalize to Unset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeReq<T> {
    Unset,
    Between { min: T, max: T },
}

impl<T: PartialOrd + Copy> RangeReq<T> {
    pub fn new(min: T, max: T) -> Result<Self, ProfileValidationError> {
        if min > max {
            return Err(ProfileValidationError::InvertedRange);
        }
        if min == max {
            return Ok(RangeReq::Unset);
        }
        Ok(RangeReq::Between { min, max })
    }

    pub fn is_set(&self) -> bool {
        matches!(self, RangeReq::Between { .. })
    }

    pub fn contains(&self, value: T) -> bool {
        match self {
            RangeReq::Unset => false,
            RangeReq::Between { min, max } => value >= *min && value <= *max,
        }
    }
}

impl RangeReq<f32> {
    /// Parse a textual height range ("5.2".."5.9"). Unparseable input is
    /// indistinguishable from "no preference".
    pub fn parse(min: &str, max: &str) -> Self {
        match (min.trim().parse::<f32>(), max.trim().parse::<f32>()) {
            (Ok(lo), Ok(hi)) if lo < hi => RangeReq::Between { min: lo, max: hi },
            _ => RangeReq::Unset,
        }
    }
}

/// A single-value textual requirement (education, occupation, family type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextReq {
    Unset,
    Value(String),
}

impl TextReq {
    pub fn from_input(value: &str) -> Self {
        if is_placeholder(value) {
            TextReq::Unset
        } else {
            TextReq::Value(value.trim().to_string())
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, TextReq::Value(_))
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            TextReq::Unset => None,
            TextReq::Value(v) => Some(v.as_str()),
        }
    }
}

/// An accepted-values requirement (locations, casts, sects, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListReq {
    Unset,
    AnyOf(Vec<String>),
}

impl ListReq {
    pub fn from_input(values: Vec<String>) -> Self {
        let kept: Vec<String> = values
            .into_iter()
            .filter(|v| !is_placeholder(v))
            .map(|v| v.trim().to_string())
            .collect();

        if kept.is_empty() {
            ListReq::Unset
        } else {
            ListReq::AnyOf(kept)
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, ListReq::AnyOf(_))
    }

    pub fn entries(&self) -> &[String] {
        match self {
            ListReq::Unset => &[],
            ListReq::AnyOf(v) => v.as_slice(),
        }
    }
}

/// Desired-partner requirements. Every dimension has an explicit Unset
/// variant; an unset dimension is skipped entirely by the scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirements {
    pub age: RangeReq<i32>,
    pub height: RangeReq<f32>,
    pub education: TextReq,
    pub occupation: TextReq,
    pub family_type: TextReq,
    pub locations: ListReq,
    pub casts: ListReq,
    pub sects: ListReq,
    pub marital_statuses: ListReq,
    pub languages: ListReq,
    pub origins: ListReq,
    pub house_types: ListReq,
}

impl Default for Requirements {
    fn default() -> Self {
        Self {
            age: RangeReq::Unset,
            height: RangeReq::Unset,
            education: TextReq::Unset,
            occupation: TextReq::Unset,
            family_type: TextReq::Unset,
            locations: ListReq::Unset,
            casts: ListReq::Unset,
            sects: ListReq::Unset,
            marital_statuses: ListReq::Unset,
            languages: ListReq::Unset,
            origins: ListReq::Unset,
            house_types: ListReq::Unset,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub father_name: String,
    pub gender: Gender,
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
    pub photo: Option<PhotoRef>,
    pub status: ProfileStatus,
    pub match_link: Option<MatchLink>,
    pub share_count: i32,
    pub requirements: Requirements,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileValidationError {
    #[error("age must be between 18 and 100")]
    AgeOutOfRange,
    #[error("requirement range has min greater than max")]
    InvertedRange,
    #[error("married brothers cannot exceed total brothers")]
    MarriedBrothersExceedTotal,
    #[error("married sisters cannot exceed total sisters")]
    MarriedSistersExceedTotal,
    #[error("{0} must not be empty")]
    MissingField(&'static str),
}

pub const MIN_AGE: i32 = 18;
pub const MAX_AGE: i32 = 100;

pub fn validate_age(age: i32) -> Result<(), ProfileValidationError> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(ProfileValidationError::AgeOutOfRange);
    }
    Ok(())
}

pub fn validate_siblings(
    brothers: i32,
    married_brothers: i32,
    sisters: i32,
    married_sisters: i32,
) -> Result<(), ProfileValidationError> {
    if married_brothers > brothers {
        return Err(ProfileValidationError::MarriedBrothersExceedTotal);
    }
    if married_sisters > sisters {
        return Err(ProfileValidationError::MarriedSistersExceedTotal);
    }
    Ok(())
}

impl Profile {
    /// Link this profile to a matched partner. Forces status Matched.
    pub fn link_match(&mut self, partner_id: Uuid) {
        self.match_link = Some(MatchLink {
            profile_id: partner_id,
            matched_on: Utc::now(),
        });
        self.status = ProfileStatus::Matched;
    }

    /// Apply a status change, clearing the match link when the new
    /// status cannot carry one.
    pub fn set_status(&mut self, status: ProfileStatus) {
        self.status = status;
        if !status.allows_match_link() {
            self.match_link = None;
        }
    }

    /// Candidates are only scanned while Active.
    pub fn is_available(&self) -> bool {
        self.status == ProfileStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_normalize_to_unset() {
        assert_eq!(TextReq::from_input("Any"), TextReq::Unset);
        assert_eq!(TextReq::from_input("not specified"), TextReq::Unset);
        assert_eq!(TextReq::from_input("N/A"), TextReq::Unset);
        assert_eq!(TextReq::from_input("  none "), TextReq::Unset);
        assert_eq!(TextReq::from_input(""), TextReq::Unset);
        assert_eq!(
            TextReq::from_input("Master's"),
            TextReq::Value("Master's".to_string())
        );
    }

    #[test]
    fn test_list_req_drops_placeholder_entries() {
        let req = ListReq::from_input(vec![
            "Lahore".to_string(),
            "any".to_string(),
            " Karachi ".to_string(),
        ]);
        assert_eq!(
            req,
            ListReq::AnyOf(vec!["Lahore".to_string(), "Karachi".to_string()])
        );

        let all_placeholders = ListReq::from_input(vec!["any".to_string(), "".to_string()]);
        assert_eq!(all_placeholders, ListReq::Unset);
    }

    #[test]
    fn test_degenerate_range_is_unset() {
        assert_eq!(RangeReq::new(25, 25).unwrap(), RangeReq::Unset);
        assert!(RangeReq::new(25, 24).is_err());
        assert_eq!(
            RangeReq::new(22, 26).unwrap(),
            RangeReq::Between { min: 22, max: 26 }
        );
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let req = RangeReq::new(22, 26).unwrap();
        assert!(req.contains(22));
        assert!(req.contains(26));
        assert!(!req.contains(21));
        assert!(!req.contains(27));
    }

    #[test]
    fn test_height_range_parse_failure_is_unset() {
        assert_eq!(RangeReq::parse("5.2", "5.9"), RangeReq::Between { min: 5.2, max: 5.9 });
        assert_eq!(RangeReq::parse("five", "5.9"), RangeReq::Unset);
        assert_eq!(RangeReq::parse("5.5", "5.5"), RangeReq::Unset);
    }

    #[test]
    fn test_age_validation() {
        assert!(validate_age(18).is_ok());
        assert!(validate_age(100).is_ok());
        assert_eq!(
            validate_age(17),
            Err(ProfileValidationError::AgeOutOfRange)
        );
        assert_eq!(
            validate_age(101),
            Err(ProfileValidationError::AgeOutOfRange)
        );
    }

    #[test]
    fn test_sibling_counts() {
        assert!(validate_siblings(2, 1, 3, 3).is_ok());
        assert_eq!(
            validate_siblings(1, 2, 0, 0),
            Err(ProfileValidationError::MarriedBrothersExceedTotal)
        );
        assert_eq!(
            validate_siblings(0, 0, 2, 3),
            Err(ProfileValidationError::MarriedSistersExceedTotal)
        );
    }

    #[test]
    fn test_non_active_status_clears_match_link() {
        let mut profile = crate::tests::support::fixtures::male_profile();
        profile.link_match(Uuid::new_v4());
        assert_eq!(profile.status, ProfileStatus::Matched);
        assert!(profile.match_link.is_some());

        profile.set_status(ProfileStatus::Engaged);
        assert!(profile.match_link.is_some());

        profile.set_status(ProfileStatus::Inactive);
        assert!(profile.match_link.is_none());
    }
}
