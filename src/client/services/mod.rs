//! Per-resource endpoint services
//!
//! One service per backend collection, each implementing only the
//! capability traits its endpoint actually supports. Paths mirror the
//! platform API routes.

mod category;
mod category_variation;
mod product;
mod product_item;
mod promotion;
mod promotion_category;
mod promotion_product;
mod variation;
mod variation_option;

pub use category::CategoryService;
pub use category_variation::CategoryVariationService;
pub use product::ProductService;
pub use product_item::ProductItemService;
pub use promotion::PromotionService;
pub use promotion_category::PromotionCategoryService;
pub use promotion_product::PromotionProductService;
pub use variation::VariationService;
pub use variation_option::VariationOptionService;
