pub use sea_orm_migration::prelude::*;

mod m20260810_120000_create_profiles_table;
mod m20260810_121000_create_admin_accounts_table;
mod m20260810_122000_create_client_accounts_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_120000_create_profiles_table::Migration),
            Box::new(m20260810_121000_create_admin_accounts_table::Migration),
            Box::new(m20260810_122000_create_client_accounts_table::Migration),
        ]
    }
}
