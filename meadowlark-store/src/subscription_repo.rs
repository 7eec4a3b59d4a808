use async_trait::async_trait;
use sqlx::PgPool;

use meadowlark_core::repository::{NewsletterRepository, StoreError, SubscriptionRepository};
use meadowlark_core::subscription::{NewsletterSignup, SeasonSubscription};

pub struct PgSubscriptions {
    pool: PgPool,
}

impl PgSubscriptions {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn persistence(err: sqlx::Error) -> StoreError {
    StoreError::Persistence(err.to_string())
}

#[async_trait]
impl SubscriptionRepository for PgSubscriptions {
    async fn add_interest(&self, email: &str, sku: &str) -> Result<(), StoreError> {
        // One upsert statement: insert on first contact, append on repeat,
        // no-op when the sku is already on the watch list.
        sqlx::query(
            "INSERT INTO season_subscriptions (email, skus) \
             VALUES ($1, ARRAY[$2]::TEXT[]) \
             ON CONFLICT (email) DO UPDATE \
             SET skus = array_append(season_subscriptions.skus, $2) \
             WHERE NOT ($2 = ANY (season_subscriptions.skus))",
        )
        .bind(email)
        .bind(sku)
        .execute(&self.pool)
        .await
        .map_err(persistence)?;

        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<SeasonSubscription, StoreError> {
        let row: Option<(String, Vec<String>)> =
            sqlx::query_as("SELECT email, skus FROM season_subscriptions WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await
                .map_err(persistence)?;

        row.map(|(email, skus)| SeasonSubscription { email, skus })
            .ok_or(StoreError::NotFound)
    }
}

pub struct PgNewsletter {
    pool: PgPool,
}

impl PgNewsletter {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NewsletterRepository for PgNewsletter {
    async fn create_signup(&self, signup: &NewsletterSignup) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO newsletter_signups (name, email) VALUES ($1, $2)")
            .bind(&signup.name)
            .bind(&signup.email)
            .execute(&self.pool)
            .await
            .map_err(persistence)?;

        Ok(())
    }
}
