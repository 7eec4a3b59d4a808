pub mod app_config;
pub mod catalog_repo;
pub mod database;
pub mod subscription_repo;

pub use catalog_repo::PgCatalog;
pub use database::DbClient;
pub use subscription_repo::{PgNewsletter, PgSubscriptions};
