use serde::Serialize;

use super::scorer::{contains_either, parse_height};
use crate::profile::domain::entities::Profile;

/// Age gap tolerated by the direct comparison.
const AGE_TOLERANCE_YEARS: i32 = 5;

/// Height gap tolerated by the direct comparison.
const HEIGHT_TOLERANCE: f32 = 0.3;

/// Number of fields the direct comparison always divides by.
const FIELD_COUNT: u32 = 11;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectSimilarity {
    pub shared_fields: Vec<&'static str>,
    pub percentage: i32,
}

/// Symmetric field-by-field comparison of two arbitrary profiles.
///
/// Used for analytics summaries only; the accept/reject gate is
/// [`super::scorer::score_profiles`]. The denominator is fixed at the
/// full field count, so sparse profiles report low overlap rather than
/// being skipped.
pub fn direct_similarity(a: &Profile, b: &Profile) -> DirectSimilarity {
    let mut shared_fields = Vec::new();

    let pairs: [(&'static str, &str, &str); 8] = [
        ("cast", &a.cast, &b.cast),
        ("sect", &a.sect, &b.sect),
        ("language", &a.mother_tongue, &b.mother_tongue),
        ("education", &a.education, &b.education),
        ("occupation", &a.occupation, &b.occupation),
        ("city", &a.city, &b.city),
        ("country", &a.country, &b.country),
        ("marital_status", &a.marital_status, &b.marital_status),
    ];

    for (name, left, right) in pairs {
        if contains_either(left, right) {
            shared_fields.push(name);
        }
    }

    if contains_either(&a.complexion, &b.complexion) {
        shared_fields.push("complexion");
    }

    if (a.age - b.age).abs() <= AGE_TOLERANCE_YEARS {
        shared_fields.push("age");
    }

    if let (Some(ha), Some(hb)) = (parse_height(&a.height), parse_height(&b.height)) {
        if (ha - hb).abs() <= HEIGHT_TOLERANCE {
            shared_fields.push("height");
        }
    }

    let percentage =
        (shared_fields.len() as f64 / f64::from(FIELD_COUNT) * 100.0).round() as i32;

    DirectSimilarity {
        shared_fields,
        percentage,
    }
}
