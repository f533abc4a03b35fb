pub mod admins;
pub mod clients;
