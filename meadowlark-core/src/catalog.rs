use serde::{Deserialize, Serialize};

/// A bookable catalog item. `slug` addresses the detail page, `sku` is the
/// purchase-time identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacationPackage {
    pub name: String,
    pub slug: String,
    pub category: String,
    pub sku: String,
    pub description: String,
    pub price_in_cents: i64,
    pub tags: Vec<String>,
    pub in_season: bool,
    pub maximum_guests: i32,
    pub available: bool,
    pub packages_sold: i64,
    pub requires_waiver: Option<bool>,
    pub notes: Option<String>,
}

impl VacationPackage {
    /// Display price in the base currency.
    pub fn price_usd(&self) -> f64 {
        self.price_in_cents as f64 / 100.0
    }
}

/// The launch catalog. Inserted once, against an empty store.
pub fn seed_packages() -> Vec<VacationPackage> {
    vec![
        VacationPackage {
            name: "Hood River Day Trip".to_string(),
            slug: "hood-river-day-trip".to_string(),
            category: "Day Trip".to_string(),
            sku: "HR199".to_string(),
            description: "Spend a day sailing on the Columbia and enjoying craft beers in Hood River!"
                .to_string(),
            price_in_cents: 9995,
            tags: ["day trip", "hood river", "sailing", "windsurfing", "breweries"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            in_season: true,
            maximum_guests: 16,
            available: true,
            packages_sold: 0,
            requires_waiver: None,
            notes: None,
        },
        VacationPackage {
            name: "Oregon Coast Getaway".to_string(),
            slug: "oregon-coast-getaway".to_string(),
            category: "Weekend Getaway".to_string(),
            sku: "OC39".to_string(),
            description: "Enjoy the ocean air and quaint coastal towns!".to_string(),
            price_in_cents: 26995,
            tags: ["weekend getaway", "oregon coast", "beachcombing"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            in_season: true,
            maximum_guests: 8,
            available: true,
            packages_sold: 0,
            requires_waiver: None,
            notes: None,
        },
        VacationPackage {
            name: "Rock Climbing in Bend".to_string(),
            slug: "rock-climbing-in-bend".to_string(),
            category: "Adventure".to_string(),
            sku: "B99".to_string(),
            description: "Experience the thrill of climbing in the high desert.".to_string(),
            price_in_cents: 28995,
            tags: ["weekend getaway", "bend", "high desert", "rock climbing"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            in_season: false,
            maximum_guests: 4,
            available: true,
            packages_sold: 0,
            requires_waiver: Some(true),
            notes: Some("The tour guide is currently recovering from a skiing accident.".to_string()),
        },
    ]
}
