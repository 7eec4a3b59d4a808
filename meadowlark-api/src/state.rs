use std::sync::Arc;

use meadowlark_core::repository::{
    CatalogRepository, NewsletterRepository, SubscriptionRepository,
};

/// Shared handler state. Repositories are injected behind trait objects so
/// the tests can swap the Postgres implementations for in-memory ones.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogRepository>,
    pub subscriptions: Arc<dyn SubscriptionRepository>,
    pub newsletter: Arc<dyn NewsletterRepository>,
}
