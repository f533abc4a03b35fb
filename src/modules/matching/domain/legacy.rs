use crate::profile::domain::entities::{Profile, Requirements};

use super::scorer::{contains_either, education_matches, occupation_matches};

/// Fraction of the evaluated primary dimensions that must match.
const PRIMARY_THRESHOLD: f64 = 0.6;

/// The legacy primary-criteria rule, kept as a versioned strategy.
///
/// Unlike [`super::scorer::score_profiles`] this rule hard-gates on age:
/// an unmet (or unset) age requirement is an immediate rejection. The
/// remaining primary dimensions (education, occupation, location) use the
/// looser containment comparison with no dimension-count floor. It only
/// ever runs against the in-memory fallback store, preserving the
/// degraded-availability behavior of the original system.
pub fn legacy_primary_match(requester: &Profile, candidate: &Profile) -> bool {
    let req: &Requirements = &requester.requirements;

    // Age is mandatory here.
    if !req.age.contains(candidate.age) {
        return false;
    }

    let mut matched = 1u32; // age
    let mut total = 1u32;

    if let Some(education) = req.education.value() {
        total += 1;
        if education_matches(education, &candidate.education) {
            matched += 1;
        }
    }

    if let Some(occupation) = req.occupation.value() {
        total += 1;
        if occupation_matches(occupation, &candidate.occupation) {
            matched += 1;
        }
    }

    if req.locations.is_set() {
        total += 1;
        let found = req.locations.entries().iter().any(|loc| {
            contains_either(loc, &candidate.city) || contains_either(loc, &candidate.address)
        });
        if found {
            matched += 1;
        }
    }

    f64::from(matched) / f64::from(total) >= PRIMARY_THRESHOLD
}
