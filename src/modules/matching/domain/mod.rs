pub mod direct;
pub mod legacy;
pub mod scorer;
