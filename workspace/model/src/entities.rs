//! SeaORM entities for the storefront.
//!
//! Identity tables (`user`, `session`, `account`) hold the data shape used by
//! the auth provider; catalog tables (`category`, `product`,
//! `product_variant`) hold what the shop sells.

pub mod account;
pub mod category;
pub mod product;
pub mod product_variant;
pub mod session;
pub mod user;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::account::Entity as Account;
    pub use super::category::Entity as Category;
    pub use super::product::Entity as Product;
    pub use super::product_variant::Entity as ProductVariant;
    pub use super::session::Entity as Session;
    pub use super::user::Entity as User;
}
