pub mod create_profile;
pub mod delete_profile;
pub mod fetch_profile_by_id;
pub mod fetch_profiles;
pub mod share_profile;
pub mod update_profile;
