pub mod count_matches;
pub mod find_matches;
