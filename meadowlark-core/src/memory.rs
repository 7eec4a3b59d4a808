//! In-memory repositories. They back the test suites and serve as a
//! database-free stand-in; every invariant matches the Postgres
//! implementations. Mutations hold the collection lock for their full
//! duration, so the conditional purchase increment and the watch-list
//! upsert behave like their single-statement SQL counterparts.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::catalog::VacationPackage;
use crate::repository::{
    CatalogRepository, NewsletterRepository, StoreError, SubscriptionRepository,
};
use crate::subscription::{NewsletterSignup, SeasonSubscription};

#[derive(Default)]
pub struct InMemoryCatalog {
    packages: Mutex<Vec<VacationPackage>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Test hook: flip a package's availability.
    pub async fn set_available(&self, sku: &str, available: bool) {
        let mut packages = self.packages.lock().await;
        if let Some(pkg) = packages.iter_mut().find(|p| p.sku == sku) {
            pkg.available = available;
        }
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn find_available(&self) -> Result<Vec<VacationPackage>, StoreError> {
        let packages = self.packages.lock().await;
        Ok(packages.iter().filter(|p| p.available).cloned().collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<VacationPackage, StoreError> {
        let packages = self.packages.lock().await;
        packages
            .iter()
            .find(|p| p.slug == slug)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn find_by_sku(&self, sku: &str) -> Result<VacationPackage, StoreError> {
        let packages = self.packages.lock().await;
        packages
            .iter()
            .find(|p| p.sku == sku)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn record_purchase(&self, sku: &str) -> Result<(), StoreError> {
        let mut packages = self.packages.lock().await;
        let pkg = packages
            .iter_mut()
            .find(|p| p.sku == sku)
            .ok_or(StoreError::NotFound)?;
        if !pkg.available {
            return Err(StoreError::Unavailable);
        }
        pkg.packages_sold += 1;
        Ok(())
    }

    async fn seed_if_empty(&self, seed: &[VacationPackage]) -> Result<(), StoreError> {
        let mut packages = self.packages.lock().await;
        if packages.is_empty() {
            packages.extend_from_slice(seed);
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemorySubscriptions {
    subscriptions: Mutex<HashMap<String, Vec<String>>>,
}

impl InMemorySubscriptions {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptions {
    async fn add_interest(&self, email: &str, sku: &str) -> Result<(), StoreError> {
        let mut subscriptions = self.subscriptions.lock().await;
        let skus = subscriptions.entry(email.to_string()).or_default();
        if !skus.iter().any(|s| s == sku) {
            skus.push(sku.to_string());
        }
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<SeasonSubscription, StoreError> {
        let subscriptions = self.subscriptions.lock().await;
        subscriptions
            .get(email)
            .map(|skus| SeasonSubscription {
                email: email.to_string(),
                skus: skus.clone(),
            })
            .ok_or(StoreError::NotFound)
    }
}

#[derive(Default)]
pub struct InMemoryNewsletter {
    signups: Mutex<Vec<NewsletterSignup>>,
}

impl InMemoryNewsletter {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn all(&self) -> Vec<NewsletterSignup> {
        self.signups.lock().await.clone()
    }
}

#[async_trait]
impl NewsletterRepository for InMemoryNewsletter {
    async fn create_signup(&self, signup: &NewsletterSignup) -> Result<(), StoreError> {
        let mut signups = self.signups.lock().await;
        signups.push(signup.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_packages;

    #[tokio::test]
    async fn seeding_twice_inserts_once() {
        let catalog = InMemoryCatalog::new();

        catalog.seed_if_empty(&seed_packages()).await.unwrap();
        catalog.seed_if_empty(&seed_packages()).await.unwrap();

        assert_eq!(catalog.find_available().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn unavailable_packages_are_filtered_from_the_listing() {
        let catalog = InMemoryCatalog::new();
        catalog.seed_if_empty(&seed_packages()).await.unwrap();
        catalog.set_available("B99", false).await;

        let listed = catalog.find_available().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|p| p.sku != "B99"));

        // Still reachable by direct lookup.
        assert!(catalog.find_by_slug("rock-climbing-in-bend").await.is_ok());
    }

    #[tokio::test]
    async fn purchase_of_unavailable_package_is_rejected() {
        let catalog = InMemoryCatalog::new();
        catalog.seed_if_empty(&seed_packages()).await.unwrap();
        catalog.set_available("B99", false).await;

        assert!(matches!(
            catalog.record_purchase("B99").await,
            Err(StoreError::Unavailable)
        ));
        assert!(matches!(
            catalog.record_purchase("XX00").await,
            Err(StoreError::NotFound)
        ));
        assert_eq!(catalog.find_by_sku("B99").await.unwrap().packages_sold, 0);
    }
}
