mod sea_orm_entity;

mod profile_repo_postgres;
pub use profile_repo_postgres::ProfileRepoPostgres;

mod profile_repo_memory;
pub use profile_repo_memory::InMemoryProfileRepo;

mod profile_repo_failover;
pub use profile_repo_failover::FailoverProfileRepo;

mod photo_host_gcs;
pub use photo_host_gcs::GcsPhotoHost;
