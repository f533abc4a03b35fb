pub mod admin_login;
pub mod client_login;

pub use admin_login::admin_login_handler;
pub use client_login::client_login_handler;
