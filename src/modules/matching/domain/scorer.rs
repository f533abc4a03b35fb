use serde::Serialize;

use crate::profile::domain::entities::{ListReq, Profile, RangeReq, Requirements, TextReq};

/// Minimum number of requirement dimensions that must be evaluated
/// before a match verdict is meaningful.
pub const MIN_VALID_DIMENSIONS: u32 = 3;

/// Minimum match percentage for a positive verdict.
pub const MATCH_THRESHOLD_PERCENT: i32 = 70;

/// Occupation categories accepted for a "professional" requirement.
const PROFESSIONAL_OCCUPATIONS: &[&str] = &["engineer", "doctor", "teacher", "manager", "officer"];

/// Occupation categories accepted for a "business" requirement.
const BUSINESS_OCCUPATIONS: &[&str] = &["business", "entrepreneur"];

/// Candidate values that can never satisfy a categorical dimension.
const NON_MATCHING_VALUES: &[&str] = &["", "other", "not specified"];

/// Outcome of scoring one candidate against one requester's requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    pub is_match: bool,
    /// Matched dimensions.
    pub score: u32,
    /// Valid (evaluated) dimensions, the denominator.
    pub total: u32,
    /// round(score / total * 100); 0 when total is 0.
    pub percentage: i32,
    pub matched_fields: Vec<&'static str>,
}

impl MatchReport {
    fn no_requirements() -> Self {
        Self {
            is_match: false,
            score: 0,
            total: 0,
            percentage: 0,
            matched_fields: Vec::new(),
        }
    }
}

/// Score `candidate` against `requester`'s requirements.
///
/// Never fails: missing or malformed fields on either side make a
/// dimension invalid (skipped) or unmatched, never an error. An unset
/// dimension is skipped entirely, so it neither helps nor hurts; profiles
/// with very few specified requirements tend to fail the dimension floor.
pub fn score_profiles(requester: &Profile, candidate: &Profile) -> MatchReport {
    let req = &requester.requirements;

    let mut score = 0u32;
    let mut total = 0u32;
    let mut matched_fields = Vec::new();

    for (name, validity) in dimensions(req, candidate) {
        if let Some(matched) = validity {
            total += 1;
            if matched {
                score += 1;
                matched_fields.push(name);
            }
        }
    }

    if total == 0 {
        return MatchReport::no_requirements();
    }

    let percentage = (f64::from(score) / f64::from(total) * 100.0).round() as i32;
    let is_match = total >= MIN_VALID_DIMENSIONS && percentage >= MATCH_THRESHOLD_PERCENT;

    MatchReport {
        is_match,
        score,
        total,
        percentage,
        matched_fields,
    }
}

/// The fixed, ordered dimension list. `None` means the dimension is not
/// valid (requirement unset); `Some(matched)` means it was evaluated.
fn dimensions(req: &Requirements, c: &Profile) -> [(&'static str, Option<bool>); 11] {
    [
        ("age", range_dim(&req.age, Some(c.age))),
        ("height", range_dim(&req.height, parse_height(&c.height))),
        ("education", text_dim(&req.education, education_matches, &c.education)),
        ("occupation", text_dim(&req.occupation, occupation_matches, &c.occupation)),
        ("location", location_dim(&req.locations, c)),
        ("cast", list_dim(&req.casts, &c.cast)),
        ("sect", list_dim(&req.sects, &c.sect)),
        ("marital_status", list_dim(&req.marital_statuses, &c.marital_status)),
        ("language", list_dim(&req.languages, &c.mother_tongue)),
        ("origin", list_dim(&req.origins, &c.origin)),
        ("house_type", list_dim(&req.house_types, &c.house_type)),
    ]
}

fn range_dim<T: PartialOrd + Copy>(req: &RangeReq<T>, value: Option<T>) -> Option<bool> {
    if !req.is_set() {
        return None;
    }
    Some(value.map(|v| req.contains(v)).unwrap_or(false))
}

fn text_dim(req: &TextReq, cmp: fn(&str, &str) -> bool, candidate: &str) -> Option<bool> {
    req.value().map(|r| cmp(r, candidate))
}

fn location_dim(req: &ListReq, c: &Profile) -> Option<bool> {
    if !req.is_set() {
        return None;
    }
    let matched = req
        .entries()
        .iter()
        .any(|loc| contains_either(loc, &c.city) || contains_either(loc, &c.address));
    Some(matched)
}

fn list_dim(req: &ListReq, candidate: &str) -> Option<bool> {
    if !req.is_set() {
        return None;
    }
    if never_matches(candidate) {
        return Some(false);
    }
    Some(req.entries().iter().any(|e| contains_either(e, candidate)))
}

pub(crate) fn parse_height(height: &str) -> Option<f32> {
    height.trim().parse::<f32>().ok()
}

fn never_matches(candidate: &str) -> bool {
    let c = candidate.trim().to_lowercase();
    NON_MATCHING_VALUES.contains(&c.as_str())
}

/// Case-insensitive substring containment in either direction. Empty
/// strings never match anything.
pub(crate) fn contains_either(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(&b) || b.contains(&a)
}

/// Hierarchical education comparison. Deliberately non-symmetric: a
/// "bachelor" requirement accepts a master's candidate, a "master"
/// requirement rejects a bachelor's candidate.
pub(crate) fn education_matches(requirement: &str, candidate: &str) -> bool {
    let req = requirement.trim().to_lowercase();
    let cand = candidate.trim().to_lowercase();

    if cand.is_empty() {
        return false;
    }

    let accepted: Option<&[&str]> = if req.contains("graduate") {
        Some(&["bachelor", "graduate", "master"])
    } else if req.contains("bachelor") {
        Some(&["bachelor", "master", "phd"])
    } else if req.contains("master") {
        Some(&["master", "phd"])
    } else {
        None
    };

    match accepted {
        Some(levels) => levels.iter().any(|level| cand.contains(level)),
        None => contains_either(&req, &cand),
    }
}

pub(crate) fn occupation_matches(requirement: &str, candidate: &str) -> bool {
    if never_matches(candidate) {
        return false;
    }

    let req = requirement.trim().to_lowercase();
    let cand = candidate.trim().to_lowercase();

    if req.contains("profession") {
        PROFESSIONAL_OCCUPATIONS.iter().any(|o| cand.contains(o))
    } else if req.contains("business") {
        BUSINESS_OCCUPATIONS.iter().any(|o| cand.contains(o))
    } else {
        contains_either(&req, &cand)
    }
}
