use async_trait::async_trait;
use sqlx::PgPool;

use meadowlark_core::catalog::VacationPackage;
use meadowlark_core::repository::{CatalogRepository, StoreError};

pub struct PgCatalog {
    pool: PgPool,
}

impl PgCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal struct for type-safe querying
#[derive(sqlx::FromRow)]
struct PackageRow {
    name: String,
    slug: String,
    category: String,
    sku: String,
    description: String,
    price_in_cents: i64,
    tags: Vec<String>,
    in_season: bool,
    maximum_guests: i32,
    available: bool,
    packages_sold: i64,
    requires_waiver: Option<bool>,
    notes: Option<String>,
}

impl From<PackageRow> for VacationPackage {
    fn from(row: PackageRow) -> Self {
        VacationPackage {
            name: row.name,
            slug: row.slug,
            category: row.category,
            sku: row.sku,
            description: row.description,
            price_in_cents: row.price_in_cents,
            tags: row.tags,
            in_season: row.in_season,
            maximum_guests: row.maximum_guests,
            available: row.available,
            packages_sold: row.packages_sold,
            requires_waiver: row.requires_waiver,
            notes: row.notes,
        }
    }
}

fn persistence(err: sqlx::Error) -> StoreError {
    StoreError::Persistence(err.to_string())
}

const PACKAGE_COLUMNS: &str = "name, slug, category, sku, description, price_in_cents, tags, \
     in_season, maximum_guests, available, packages_sold, requires_waiver, notes";

#[async_trait]
impl CatalogRepository for PgCatalog {
    async fn find_available(&self) -> Result<Vec<VacationPackage>, StoreError> {
        let sql = format!(
            "SELECT {PACKAGE_COLUMNS} FROM vacation_packages WHERE available ORDER BY name"
        );
        let rows: Vec<PackageRow> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(persistence)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<VacationPackage, StoreError> {
        let sql = format!("SELECT {PACKAGE_COLUMNS} FROM vacation_packages WHERE slug = $1");
        let row: Option<PackageRow> = sqlx::query_as(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(persistence)?;

        row.map(Into::into).ok_or(StoreError::NotFound)
    }

    async fn find_by_sku(&self, sku: &str) -> Result<VacationPackage, StoreError> {
        let sql = format!("SELECT {PACKAGE_COLUMNS} FROM vacation_packages WHERE sku = $1");
        let row: Option<PackageRow> = sqlx::query_as(&sql)
            .bind(sku)
            .fetch_optional(&self.pool)
            .await
            .map_err(persistence)?;

        row.map(Into::into).ok_or(StoreError::NotFound)
    }

    async fn record_purchase(&self, sku: &str) -> Result<(), StoreError> {
        // Read-check-then-write folded into one conditional UPDATE, so
        // concurrent purchases of the same sku serialize on the row.
        let result = sqlx::query(
            "UPDATE vacation_packages \
             SET packages_sold = packages_sold + 1 \
             WHERE sku = $1 AND available",
        )
        .bind(sku)
        .execute(&self.pool)
        .await
        .map_err(persistence)?;

        if result.rows_affected() == 1 {
            return Ok(());
        }

        // Zero rows: disambiguate unknown sku from sold-out. Read-only, so
        // the atomicity of the increment above is unaffected.
        let row: Option<(bool,)> =
            sqlx::query_as("SELECT available FROM vacation_packages WHERE sku = $1")
                .bind(sku)
                .fetch_optional(&self.pool)
                .await
                .map_err(persistence)?;

        match row {
            Some(_) => Err(StoreError::Unavailable),
            None => Err(StoreError::NotFound),
        }
    }

    async fn seed_if_empty(&self, packages: &[VacationPackage]) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await.map_err(persistence)?;

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM vacation_packages")
            .fetch_one(&mut *tx)
            .await
            .map_err(persistence)?;
        if count > 0 {
            // Nothing written; the dropped transaction rolls back the read.
            return Ok(());
        }

        for pkg in packages {
            sqlx::query(
                "INSERT INTO vacation_packages \
                 (name, slug, category, sku, description, price_in_cents, tags, in_season, \
                  maximum_guests, available, packages_sold, requires_waiver, notes) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)",
            )
            .bind(&pkg.name)
            .bind(&pkg.slug)
            .bind(&pkg.category)
            .bind(&pkg.sku)
            .bind(&pkg.description)
            .bind(pkg.price_in_cents)
            .bind(&pkg.tags)
            .bind(pkg.in_season)
            .bind(pkg.maximum_guests)
            .bind(pkg.available)
            .bind(pkg.packages_sold)
            .bind(pkg.requires_waiver)
            .bind(&pkg.notes)
            .execute(&mut *tx)
            .await
            .map_err(persistence)?;
        }

        tx.commit().await.map_err(persistence)?;
        tracing::info!(count = packages.len(), "seeded the vacation catalog");
        Ok(())
    }
}
