pub mod create_profile;
pub mod delete_profile;
pub mod get_profiles;
pub mod get_single_profile;
pub mod share_profile;
pub mod update_profile;

pub use create_profile::create_profile_handler;
pub use delete_profile::delete_profile_handler;
pub use get_profiles::get_profiles_handler;
pub use get_single_profile::get_single_profile_handler;
pub use share_profile::share_profile_handler;
pub use update_profile::update_profile_handler;
