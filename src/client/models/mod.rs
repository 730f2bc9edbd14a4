//! Wire types for the storefront platform API

mod auth;
mod category;
mod common;
mod product;
mod product_item;
mod promotion;
mod user;
mod variation;

pub use auth::{decode_claims, CredentialBundle, TokenClaims};
pub use category::{Category, CategoryRef, CreateCategory};
pub use common::{ListQuery, Page};
pub use product::{CreateProduct, Product, ProductRef};
pub use product_item::{CreateProductItem, ProductItem};
pub use promotion::{
    CreatePromotion, CreatePromotionCategory, CreatePromotionProduct, DiscountType, Promotion,
    PromotionCategory, PromotionProduct, PromotionRef, UpdatePromotion, UpdatePromotionCategory,
    UpdatePromotionProduct,
};
pub use user::User;
pub use variation::{
    CategoryVariation, CreateCategoryVariation, CreateVariation, CreateVariationOption,
    UpdateCategoryVariation, UpdateVariation, UpdateVariationOption, Variation, VariationOption,
    VariationRef,
};
