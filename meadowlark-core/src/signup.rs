use crate::email::is_valid_email;
use crate::repository::{NewsletterRepository, StoreError, SubscriptionRepository};
use crate::subscription::NewsletterSignup;

/// Failures of the subscription and newsletter workflows. `InvalidEmail`
/// is rejected before any store call happens.
#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    #[error("the email address is not valid")]
    InvalidEmail,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// "Notify me when in season" workflow: validate the address, then upsert
/// the sku into the subscriber's watch list.
pub async fn subscribe_to_season(
    subscriptions: &dyn SubscriptionRepository,
    email: &str,
    sku: &str,
) -> Result<(), SignupError> {
    if !is_valid_email(email) {
        return Err(SignupError::InvalidEmail);
    }
    subscriptions.add_interest(email, sku).await?;
    Ok(())
}

/// Newsletter workflow: validate the address, then persist a signup record.
pub async fn newsletter_signup(
    newsletter: &dyn NewsletterRepository,
    name: &str,
    email: &str,
) -> Result<(), SignupError> {
    if !is_valid_email(email) {
        return Err(SignupError::InvalidEmail);
    }
    newsletter
        .create_signup(&NewsletterSignup {
            name: name.to_string(),
            email: email.to_string(),
        })
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{InMemoryNewsletter, InMemorySubscriptions};
    use crate::repository::StoreError;

    #[tokio::test]
    async fn subscribing_twice_keeps_one_occurrence() {
        let subs = InMemorySubscriptions::new();

        subscribe_to_season(&subs, "joe@example.com", "B99").await.unwrap();
        subscribe_to_season(&subs, "joe@example.com", "B99").await.unwrap();

        let record = subs.find_by_email("joe@example.com").await.unwrap();
        assert_eq!(record.skus, vec!["B99".to_string()]);
    }

    #[tokio::test]
    async fn skus_accumulate_per_email() {
        let subs = InMemorySubscriptions::new();

        subscribe_to_season(&subs, "joe@example.com", "B99").await.unwrap();
        subscribe_to_season(&subs, "joe@example.com", "OC39").await.unwrap();

        let record = subs.find_by_email("joe@example.com").await.unwrap();
        assert_eq!(record.skus, vec!["B99".to_string(), "OC39".to_string()]);
    }

    #[tokio::test]
    async fn invalid_email_never_reaches_the_store() {
        let subs = InMemorySubscriptions::new();

        let err = subscribe_to_season(&subs, "not-an-email", "B99")
            .await
            .unwrap_err();
        assert!(matches!(err, SignupError::InvalidEmail));
        assert!(matches!(
            subs.find_by_email("not-an-email").await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn newsletter_signup_creates_a_record() {
        let newsletter = InMemoryNewsletter::new();

        newsletter_signup(&newsletter, "Joe", "joe@example.com").await.unwrap();
        newsletter_signup(&newsletter, "Joe", "joe@example.com").await.unwrap();

        // Create-only semantics: no dedup is promised.
        assert_eq!(newsletter.all().await.len(), 2);
    }

    #[tokio::test]
    async fn newsletter_rejects_invalid_email() {
        let newsletter = InMemoryNewsletter::new();

        let err = newsletter_signup(&newsletter, "Joe", "joe@").await.unwrap_err();
        assert!(matches!(err, SignupError::InvalidEmail));
        assert!(newsletter.all().await.is_empty());
    }
}
