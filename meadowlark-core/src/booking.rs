use crate::repository::CatalogRepository;

/// Terminal outcomes of a purchase attempt. The handler maps these onto a
/// flash message and a redirect back to the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Booked,
    Failed,
}

/// Purchase workflow: look the package up by sku, then apply the store's
/// conditional increment. Every failure collapses to `Failed` for the user;
/// the distinction only matters to the log.
pub async fn purchase(catalog: &dyn CatalogRepository, sku: &str) -> PurchaseOutcome {
    if let Err(err) = catalog.find_by_sku(sku).await {
        tracing::warn!(sku, error = %err, "purchase lookup failed");
        return PurchaseOutcome::Failed;
    }

    match catalog.record_purchase(sku).await {
        Ok(()) => PurchaseOutcome::Booked,
        Err(err) => {
            tracing::warn!(sku, error = %err, "purchase was not recorded");
            PurchaseOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::catalog::seed_packages;
    use crate::memory::InMemoryCatalog;

    async fn seeded_catalog() -> InMemoryCatalog {
        let catalog = InMemoryCatalog::new();
        catalog.seed_if_empty(&seed_packages()).await.unwrap();
        catalog
    }

    #[tokio::test]
    async fn booking_increments_sold_count() {
        let catalog = seeded_catalog().await;

        assert_eq!(purchase(&catalog, "HR199").await, PurchaseOutcome::Booked);

        let pkg = catalog.find_by_sku("HR199").await.unwrap();
        assert_eq!(pkg.packages_sold, 1);
    }

    #[tokio::test]
    async fn unknown_sku_fails_without_mutation() {
        let catalog = seeded_catalog().await;

        assert_eq!(purchase(&catalog, "NOPE").await, PurchaseOutcome::Failed);

        for pkg in catalog.find_available().await.unwrap() {
            assert_eq!(pkg.packages_sold, 0);
        }
    }

    #[tokio::test]
    async fn sold_out_package_never_increments() {
        let catalog = seeded_catalog().await;
        catalog.set_available("OC39", false).await;

        assert_eq!(purchase(&catalog, "OC39").await, PurchaseOutcome::Failed);

        let pkg = catalog.find_by_sku("OC39").await.unwrap();
        assert_eq!(pkg.packages_sold, 0);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_purchases_lose_no_updates() {
        let catalog = Arc::new(seeded_catalog().await);

        let mut handles = Vec::new();
        for _ in 0..32 {
            let catalog = catalog.clone();
            handles.push(tokio::spawn(async move {
                purchase(catalog.as_ref(), "HR199").await
            }));
        }
        for handle in handles {
            assert_eq!(handle.await.unwrap(), PurchaseOutcome::Booked);
        }

        let pkg = catalog.find_by_sku("HR199").await.unwrap();
        assert_eq!(pkg.packages_sold, 32);
    }
}
