use anyhow::{Context, Result, bail};
use model::CatalogError;
use model::entities::{category, product, product_variant};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set, TransactionTrait};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument, trace};
use validator::Validate;

use super::run_migrations;
use crate::config::connect_database;

/// Catalog file accepted by the `seed` command
#[derive(Debug, Deserialize, Validate)]
pub struct CatalogFile {
    #[validate(nested)]
    pub categories: Vec<SeedCategory>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SeedCategory {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub slug: String,
    #[serde(default)]
    #[validate(nested)]
    pub products: Vec<SeedProduct>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SeedProduct {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    #[validate(nested)]
    pub variants: Vec<SeedVariant>,
}

/// Variant names may be blank; cards then fall back to the product name.
#[derive(Debug, Deserialize, Validate)]
pub struct SeedVariant {
    #[serde(default)]
    pub name: String,
    #[validate(length(min = 1))]
    pub slug: String,
    #[serde(default)]
    pub color: String,
    #[validate(range(min = 0))]
    pub price_in_cents: i32,
    #[serde(default)]
    pub image_url: String,
}

/// Row counts written by [`seed_catalog`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories: usize,
    pub products: usize,
    pub variants: usize,
}

/// Parse and validate a catalog, picking the format from the file extension.
pub fn parse_catalog(contents: &str, extension: &str) -> Result<CatalogFile> {
    let catalog: CatalogFile = match extension.to_ascii_lowercase().as_str() {
        "json" => serde_json::from_str(contents).context("Failed to parse JSON catalog")?,
        "yaml" | "yml" => serde_yaml::from_str(contents).context("Failed to parse YAML catalog")?,
        other => bail!("Unsupported catalog format '{}', expected json, yaml or yml", other),
    };

    catalog.validate().context("Catalog file failed validation")?;
    Ok(catalog)
}

/// Insert every category, product and variant of `catalog` in one transaction.
#[instrument(skip(db, catalog))]
pub async fn seed_catalog(
    db: &DatabaseConnection,
    catalog: &CatalogFile,
) -> Result<SeedSummary, CatalogError> {
    let txn = db.begin().await?;
    let mut summary = SeedSummary::default();

    for seed_category in &catalog.categories {
        trace!("Inserting category '{}'", seed_category.slug);
        let category = category::ActiveModel {
            name: Set(seed_category.name.clone()),
            slug: Set(seed_category.slug.clone()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        summary.categories += 1;

        for seed_product in &seed_category.products {
            trace!("Inserting product '{}'", seed_product.slug);
            let product = product::ActiveModel {
                category_id: Set(category.id),
                name: Set(seed_product.name.clone()),
                slug: Set(seed_product.slug.clone()),
                description: Set(seed_product.description.clone()),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            summary.products += 1;

            for seed_variant in &seed_product.variants {
                product_variant::ActiveModel {
                    product_id: Set(product.id),
                    name: Set(seed_variant.name.clone()),
                    slug: Set(seed_variant.slug.clone()),
                    color: Set(seed_variant.color.clone()),
                    price_in_cents: Set(seed_variant.price_in_cents),
                    image_url: Set(seed_variant.image_url.clone()),
                    ..Default::default()
                }
                .insert(&txn)
                .await?;
                summary.variants += 1;
            }
        }
    }

    txn.commit().await?;
    debug!("Seed transaction committed: {:?}", summary);
    Ok(summary)
}

pub async fn seed(file: &str, database_url: &str) -> Result<()> {
    trace!("Entering seed function");
    info!("Seeding catalog from {}", file);

    let path = Path::new(file);
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", file))?;
    let catalog = parse_catalog(&contents, extension)?;
    debug!("Loaded {} categories from {}", catalog.categories.len(), file);

    let db = connect_database(database_url).await?;
    run_migrations(&db).await?;

    let summary = seed_catalog(&db, &catalog)
        .await
        .context("Failed to seed catalog")?;
    info!(
        "Seeded {} categories, {} products and {} variants",
        summary.categories, summary.products, summary.variants
    );
    Ok(())
}
