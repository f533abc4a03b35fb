pub mod account_repo_postgres;
pub mod jwt;
pub mod sea_orm_entity;
pub mod security;
