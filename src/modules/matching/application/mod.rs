pub mod match_count_cache;
pub mod use_cases;
