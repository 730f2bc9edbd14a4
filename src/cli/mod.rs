//! CLI command definitions and handlers

use clap::{Parser, Subcommand, ValueEnum};

pub mod args;
pub mod auth;
pub mod cache;
pub mod cat_variation;
pub mod category;
pub mod config;
pub mod context;
pub mod item;
pub mod option;
pub mod product;
pub mod promo_category;
pub mod promo_product;
pub mod promotion;
pub mod variation;

pub use args::ListArgs;
pub use context::CommandContext;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// storeops - CLI companion for the storefront commerce platform
#[derive(Parser, Debug)]
#[command(name = "storeops")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to the config file (defaults to ~/.storeops/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Bypass the response cache
    #[arg(long, global = true)]
    pub no_cache: bool,

    /// Suppress success/error notifications
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and persist credentials
    Login {
        /// Username (prompted when omitted)
        #[arg(long)]
        username: Option<String>,
    },

    /// Clear persisted credentials
    Logout,

    /// Show connection and session state
    Status,

    /// Fetch the signed-in user from the platform
    Whoami,

    /// Manage product categories
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Manage products
    #[command(subcommand)]
    Product(ProductCommands),

    /// Manage product items (SKUs)
    #[command(subcommand)]
    Item(ItemCommands),

    /// Manage variation axes
    #[command(subcommand)]
    Variation(VariationCommands),

    /// Manage variation options
    #[command(subcommand)]
    Option(OptionCommands),

    /// Manage category-variation links
    #[command(subcommand, name = "cat-variation")]
    CatVariation(CatVariationCommands),

    /// Manage promotions
    #[command(subcommand)]
    Promotion(PromotionCommands),

    /// Manage promotion-category links
    #[command(subcommand, name = "promo-category")]
    PromoCategory(PromoCategoryCommands),

    /// Manage promotion-product links
    #[command(subcommand, name = "promo-product")]
    PromoProduct(PromoProductCommands),

    /// Inspect or clear the response cache
    #[command(subcommand)]
    Cache(CacheCommands),

    /// Show or edit the configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the resolved configuration
    Show,

    /// Set the API origin in the config file
    SetUrl {
        /// API origin, e.g. https://api.shop.example.com/api/v1
        url: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List categories
    List(ListArgs),

    /// Create a category
    Create {
        /// Category name
        #[arg(long)]
        name: String,

        /// Parent category id
        #[arg(long)]
        parent: Option<String>,

        /// Create in the pending state instead of active
        #[arg(long)]
        pending: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProductCommands {
    /// List products
    List(ListArgs),

    /// Create a product
    Create {
        /// Product name
        #[arg(long)]
        name: String,

        /// Owning category id
        #[arg(long)]
        category: Option<String>,

        /// Thumbnail URL (repeatable)
        #[arg(long = "thumbnail")]
        thumbnails: Vec<String>,

        /// Rich-text description, HTML
        #[arg(long)]
        content: Option<String>,
    },

    /// Delete a product
    Delete {
        /// Product id
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ItemCommands {
    /// List product items
    List {
        #[command(flatten)]
        args: ListArgs,

        /// Only items of this product
        #[arg(long)]
        product: Option<String>,
    },

    /// Create a product item
    Create {
        /// Owning product id
        #[arg(long)]
        product: String,

        /// Stock keeping unit
        #[arg(long)]
        sku: String,

        /// Unit price
        #[arg(long)]
        price: f64,

        /// Quantity in stock
        #[arg(long, default_value_t = 0)]
        qty: i64,

        /// Image URL (repeatable)
        #[arg(long = "image")]
        images: Vec<String>,
    },

    /// Delete a product item
    Delete {
        /// Product item id
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum VariationCommands {
    /// List variation axes
    List(ListArgs),

    /// Create a variation axis
    Create {
        /// Variation name, e.g. Size
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: Option<String>,

        /// Create in the inactive state
        #[arg(long)]
        inactive: bool,
    },

    /// Update a variation axis
    Update {
        /// Variation id
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Set the active flag
        #[arg(long)]
        active: Option<bool>,
    },

    /// Delete a variation axis
    Delete {
        /// Variation id
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum OptionCommands {
    /// List variation options
    List {
        #[command(flatten)]
        args: ListArgs,

        /// Only options of this variation axis
        #[arg(long)]
        variation: Option<String>,
    },

    /// List options applicable to a category
    ByCategory {
        /// Category id
        category: String,
    },

    /// Create a variation option
    Create {
        /// Owning variation axis id
        #[arg(long)]
        variation: String,

        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Option value, e.g. 42 or Black
        #[arg(long)]
        value: String,
    },

    /// Update a variation option
    Update {
        /// Option id
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        value: Option<String>,
    },

    /// Delete a variation option
    Delete {
        /// Option id
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum PromotionCommands {
    /// List promotions
    List(ListArgs),

    /// Create a promotion
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: Option<String>,

        /// percentage or fixed
        #[arg(long, value_enum)]
        discount_type: DiscountTypeArg,

        /// Percent (0-100) or absolute amount, per discount type
        #[arg(long)]
        discount_value: f64,

        /// Cap on the discount amount
        #[arg(long)]
        max_discount: Option<f64>,

        /// Minimum order value to qualify
        #[arg(long, default_value_t = 0.0)]
        min_order: f64,

        /// Start of the promotion window (RFC 3339)
        #[arg(long)]
        start: chrono::DateTime<chrono::Utc>,

        /// End of the promotion window (RFC 3339)
        #[arg(long)]
        end: chrono::DateTime<chrono::Utc>,

        /// Total number of redemptions allowed
        #[arg(long, default_value_t = 0)]
        usage_limit: u64,

        /// Create in the inactive state
        #[arg(long)]
        inactive: bool,
    },

    /// Update a promotion
    Update {
        /// Promotion id
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long, value_enum)]
        discount_type: Option<DiscountTypeArg>,

        #[arg(long)]
        discount_value: Option<f64>,

        #[arg(long)]
        max_discount: Option<f64>,

        #[arg(long)]
        min_order: Option<f64>,

        #[arg(long)]
        start: Option<chrono::DateTime<chrono::Utc>>,

        #[arg(long)]
        end: Option<chrono::DateTime<chrono::Utc>>,

        #[arg(long)]
        usage_limit: Option<u64>,

        /// Set the active flag
        #[arg(long)]
        active: Option<bool>,
    },

    /// Delete a promotion
    Delete {
        /// Promotion id
        id: String,
    },
}

/// CLI spelling of the discount type
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DiscountTypeArg {
    Percentage,
    Fixed,
}

impl From<DiscountTypeArg> for crate::client::models::DiscountType {
    fn from(arg: DiscountTypeArg) -> Self {
        match arg {
            DiscountTypeArg::Percentage => Self::Percentage,
            DiscountTypeArg::Fixed => Self::Fixed,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum CatVariationCommands {
    /// List category-variation links
    List(ListArgs),

    /// Assign a variation axis to a category
    Add {
        /// Category id
        #[arg(long)]
        category: String,

        /// Variation axis id
        #[arg(long)]
        variation: String,
    },

    /// Re-point a category-variation link
    Update {
        /// Link id
        id: String,

        /// New category id
        #[arg(long)]
        category: Option<String>,

        /// New variation axis id
        #[arg(long)]
        variation: Option<String>,
    },

    /// Remove a category-variation link
    Remove {
        /// Link id
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum PromoCategoryCommands {
    /// List promotion-category links
    List(ListArgs),

    /// Apply a promotion to a category
    Add {
        /// Promotion id
        #[arg(long)]
        promotion: String,

        /// Category id
        #[arg(long)]
        category: String,
    },

    /// Re-point a promotion-category link
    Update {
        /// Link id
        id: String,

        /// New promotion id
        #[arg(long)]
        promotion: Option<String>,

        /// New category id
        #[arg(long)]
        category: Option<String>,
    },

    /// Remove a promotion-category link
    Remove {
        /// Link id
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum PromoProductCommands {
    /// List promotion-product links
    List(ListArgs),

    /// Apply a promotion to a product
    Add {
        /// Promotion id
        #[arg(long)]
        promotion: String,

        /// Product id
        #[arg(long)]
        product: String,
    },

    /// Re-point a promotion-product link
    Update {
        /// Link id
        id: String,

        /// New promotion id
        #[arg(long)]
        promotion: Option<String>,

        /// New product id
        #[arg(long)]
        product: Option<String>,
    },

    /// Remove a promotion-product link
    Remove {
        /// Link id
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Show cache statistics
    Stats,

    /// Remove every cached response
    Clear,
}
