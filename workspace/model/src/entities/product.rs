use std::collections::HashMap;

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Select, Set};
use tracing::{debug, instrument};

use super::product_variant;

/// A catalog product. The purchasable configurations (size, color, price,
/// picture) live in its variants.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub description: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_update = "Cascade",
        on_delete = "NoAction"
    )]
    Category,
    #[sea_orm(has_many = "super::product_variant::Entity")]
    ProductVariant,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::product_variant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductVariant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            id: Set(Uuid::new_v4()),
            created_at: Set(Utc::now()),
            ..ActiveModelTrait::default()
        }
    }
}

/// A product together with its variants, in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductWithVariants {
    pub product: Model,
    pub variants: Vec<product_variant::Model>,
}

impl ProductWithVariants {
    /// The variant shown first on cards and listings.
    pub fn first_variant(&self) -> Option<&product_variant::Model> {
        self.variants.first()
    }
}

impl Entity {
    pub fn find_by_slug(slug: &str) -> Select<Entity> {
        Self::find().filter(Column::Slug.eq(slug))
    }

    /// All products, oldest first.
    pub fn find_in_catalog_order() -> Select<Entity> {
        Self::find()
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
    }
}

impl Model {
    /// Variants of this product in display order (creation time, then id).
    pub async fn variants<C>(&self, db: &C) -> Result<Vec<product_variant::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        self.find_related(product_variant::Entity)
            .order_by_asc(product_variant::Column::CreatedAt)
            .order_by_asc(product_variant::Column::Id)
            .all(db)
            .await
    }
}

/// Attaches ordered variants to a batch of products with a single query.
/// Products keep their input order; products without variants get an
/// empty list.
#[instrument(skip(db, products), fields(products = products.len()))]
pub async fn load_with_variants<C>(
    db: &C,
    products: Vec<Model>,
) -> Result<Vec<ProductWithVariants>, DbErr>
where
    C: ConnectionTrait,
{
    if products.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<Uuid> = products.iter().map(|p| p.id).collect();
    let variants = product_variant::Entity::find()
        .filter(product_variant::Column::ProductId.is_in(ids))
        .order_by_asc(product_variant::Column::CreatedAt)
        .order_by_asc(product_variant::Column::Id)
        .all(db)
        .await?;
    debug!("Loaded {} variants", variants.len());

    let mut grouped: HashMap<Uuid, Vec<product_variant::Model>> = HashMap::new();
    for variant in variants {
        grouped.entry(variant.product_id).or_default().push(variant);
    }

    Ok(products
        .into_iter()
        .map(|product| {
            let variants = grouped.remove(&product.id).unwrap_or_default();
            ProductWithVariants { product, variants }
        })
        .collect())
}
