use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Select, Set};

/// A storefront category, e.g. "Camisetas".
/// Products cannot outlive their category: deleting a category that still
/// has products is rejected by the store.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    /// URL-safe identifier, unique across all categories.
    #[sea_orm(unique)]
    pub slug: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product::Entity")]
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

impl Model {
    /// Products filed under this category, oldest first.
    pub async fn products<C>(&self, db: &C) -> Result<Vec<super::product::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        self.find_related(super::product::Entity)
            .order_by_asc(super::product::Column::CreatedAt)
            .order_by_asc(super::product::Column::Id)
            .all(db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::product;
    use crate::testing::setup_db;
    use chrono::{Duration, TimeZone};

    #[tokio::test]
    async fn test_find_by_slug() {
        let db = setup_db().await;

        ActiveModel {
            name: Set("Camisetas".to_string()),
            slug: Set("camisetas".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let found = Entity::find_by_slug("camisetas").one(&db).await.unwrap();
        assert_eq!(found.map(|c| c.name), Some("Camisetas".to_string()));

        let missing = Entity::find_by_slug("bermudas").one(&db).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_products_are_listed_oldest_first() {
        let db = setup_db().await;

        let category = ActiveModel {
            name: Set("Tênis".to_string()),
            slug: Set("tenis".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let base = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        for (offset, slug) in [(2, "tenis-c"), (0, "tenis-a"), (1, "tenis-b")] {
            product::ActiveModel {
                category_id: Set(category.id),
                name: Set(slug.to_uppercase()),
                slug: Set(slug.to_string()),
                description: Set(String::new()),
                created_at: Set(base + Duration::seconds(offset)),
                ..Default::default()
            }
            .insert(&db)
            .await
            .unwrap();
        }

        let products = category.products(&db).await.unwrap();
        let slugs: Vec<_> = products.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["tenis-a", "tenis-b", "tenis-c"]);
    }
}
