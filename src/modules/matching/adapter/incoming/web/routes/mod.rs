pub mod get_match_counts;
pub mod get_matches;

pub use get_match_counts::get_match_counts_handler;
pub use get_matches::get_matches_handler;
