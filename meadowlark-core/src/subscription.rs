use serde::{Deserialize, Serialize};

/// "Notify me when in season" record, keyed by email. `skus` accumulates
/// across requests and holds no duplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonSubscription {
    pub email: String,
    pub skus: Vec<String>,
}

/// Newsletter signup. Create-only; dedup is not a requirement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterSignup {
    pub name: String,
    pub email: String,
}
