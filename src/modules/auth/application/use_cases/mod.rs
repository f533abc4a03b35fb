pub mod bootstrap_admin;
pub mod login_admin;
pub mod login_client;
