use async_trait::async_trait;

use crate::catalog::VacationPackage;
use crate::subscription::{NewsletterSignup, SeasonSubscription};

/// Store-level failures. `NotFound` and `Unavailable` are expected,
/// recoverable conditions; `Persistence` is logged and reduced to a generic
/// user-facing message.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no record matches the given key")]
    NotFound,

    #[error("package is not available for purchase")]
    Unavailable,

    #[error("store operation failed: {0}")]
    Persistence(String),
}

/// Data access for vacation packages.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn find_available(&self) -> Result<Vec<VacationPackage>, StoreError>;

    async fn find_by_slug(&self, slug: &str) -> Result<VacationPackage, StoreError>;

    async fn find_by_sku(&self, sku: &str) -> Result<VacationPackage, StoreError>;

    /// Increments `packages_sold` by one, only while the package is
    /// available. Must be a single store-level conditional update:
    /// concurrent purchases of the same sku serialize without lost
    /// increments.
    async fn record_purchase(&self, sku: &str) -> Result<(), StoreError>;

    /// Inserts `packages` only when the store holds zero records, so a
    /// restart never duplicates the catalog.
    async fn seed_if_empty(&self, packages: &[VacationPackage]) -> Result<(), StoreError>;
}

/// Data access for season subscriptions.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Upsert: the first call for `email` creates the subscription, later
    /// calls append `sku` to its set. Repeating the same (email, sku) pair
    /// is a no-op.
    async fn add_interest(&self, email: &str, sku: &str) -> Result<(), StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<SeasonSubscription, StoreError>;
}

/// Data access for newsletter signups.
#[async_trait]
pub trait NewsletterRepository: Send + Sync {
    async fn create_signup(&self, signup: &NewsletterSignup) -> Result<(), StoreError>;
}
