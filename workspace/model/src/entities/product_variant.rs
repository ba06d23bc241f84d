use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{Select, Set};

/// A purchasable configuration of a product (color, size) with its own
/// price and picture. Removed together with its product.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "product_variant")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub product_id: Uuid,
    /// e.g. "Tamanho M"
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub color: String,
    /// Price in centavos. Stored as an integer to avoid rounding.
    pub price_in_cents: i32,
    /// Not guaranteed to be a valid URL; display code falls back to a
    /// placeholder.
    pub image_url: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Product,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
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

impl Entity {
    pub fn find_by_slug(slug: &str) -> Select<Entity> {
        Self::find().filter(Column::Slug.eq(slug))
    }
}
