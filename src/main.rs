//! storeops - CLI companion for the storefront commerce platform

use clap::Parser;

use storeops::cli::{
    self, CacheCommands, CatVariationCommands, CategoryCommands, Cli, CommandContext, Commands,
    ConfigCommands, ItemCommands, OptionCommands, ProductCommands, PromoCategoryCommands,
    PromoProductCommands, PromotionCommands, VariationCommands,
};
use storeops::error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Config commands must work before an API origin is configured
    let command = match cli.command {
        Commands::Config(cmd) => {
            return match cmd {
                ConfigCommands::Show => cli::config::show(cli.config.as_deref()),
                ConfigCommands::SetUrl { url } => cli::config::set_url(cli.config.as_deref(), url),
            };
        }
        command => command,
    };

    let ctx = CommandContext::new(cli.format, cli.config.as_deref(), cli.no_cache, cli.quiet)?;

    match command {
        Commands::Login { username } => cli::auth::login(&ctx, username).await,
        Commands::Logout => cli::auth::logout(&ctx),
        Commands::Status => cli::auth::status(&ctx),
        Commands::Whoami => cli::auth::whoami(&ctx).await,

        Commands::Category(cmd) => match cmd {
            CategoryCommands::List(args) => cli::category::list(&ctx, &args).await,
            CategoryCommands::Create {
                name,
                parent,
                pending,
            } => cli::category::create(&ctx, name, parent, pending).await,
        },

        Commands::Product(cmd) => match cmd {
            ProductCommands::List(args) => cli::product::list(&ctx, &args).await,
            ProductCommands::Create {
                name,
                category,
                thumbnails,
                content,
            } => cli::product::create(&ctx, name, category, thumbnails, content).await,
            ProductCommands::Delete { id } => cli::product::delete(&ctx, id).await,
        },

        Commands::Item(cmd) => match cmd {
            ItemCommands::List { args, product } => cli::item::list(&ctx, &args, product).await,
            ItemCommands::Create {
                product,
                sku,
                price,
                qty,
                images,
            } => cli::item::create(&ctx, product, sku, price, qty, images).await,
            ItemCommands::Delete { id } => cli::item::delete(&ctx, id).await,
        },

        Commands::Variation(cmd) => match cmd {
            VariationCommands::List(args) => cli::variation::list(&ctx, &args).await,
            VariationCommands::Create {
                name,
                description,
                inactive,
            } => cli::variation::create(&ctx, name, description, inactive).await,
            VariationCommands::Update {
                id,
                name,
                description,
                active,
            } => cli::variation::update(&ctx, id, name, description, active).await,
            VariationCommands::Delete { id } => cli::variation::delete(&ctx, id).await,
        },

        Commands::Option(cmd) => match cmd {
            OptionCommands::List { args, variation } => {
                cli::option::list(&ctx, &args, variation).await
            }
            OptionCommands::ByCategory { category } => {
                cli::option::by_category(&ctx, category).await
            }
            OptionCommands::Create {
                variation,
                name,
                value,
            } => cli::option::create(&ctx, variation, name, value).await,
            OptionCommands::Update { id, name, value } => {
                cli::option::update(&ctx, id, name, value).await
            }
            OptionCommands::Delete { id } => cli::option::delete(&ctx, id).await,
        },

        Commands::CatVariation(cmd) => match cmd {
            CatVariationCommands::List(args) => cli::cat_variation::list(&ctx, &args).await,
            CatVariationCommands::Add {
                category,
                variation,
            } => cli::cat_variation::add(&ctx, category, variation).await,
            CatVariationCommands::Update {
                id,
                category,
                variation,
            } => cli::cat_variation::update(&ctx, id, category, variation).await,
            CatVariationCommands::Remove { id } => cli::cat_variation::remove(&ctx, id).await,
        },

        Commands::Promotion(cmd) => match cmd {
            PromotionCommands::List(args) => cli::promotion::list(&ctx, &args).await,
            PromotionCommands::Create {
                name,
                description,
                discount_type,
                discount_value,
                max_discount,
                min_order,
                start,
                end,
                usage_limit,
                inactive,
            } => {
                cli::promotion::create(
                    &ctx,
                    name,
                    description,
                    discount_type,
                    discount_value,
                    max_discount,
                    min_order,
                    start,
                    end,
                    usage_limit,
                    inactive,
                )
                .await
            }
            PromotionCommands::Update {
                id,
                name,
                description,
                discount_type,
                discount_value,
                max_discount,
                min_order,
                start,
                end,
                usage_limit,
                active,
            } => {
                cli::promotion::update(
                    &ctx,
                    id,
                    name,
                    description,
                    discount_type,
                    discount_value,
                    max_discount,
                    min_order,
                    start,
                    end,
                    usage_limit,
                    active,
                )
                .await
            }
            PromotionCommands::Delete { id } => cli::promotion::delete(&ctx, id).await,
        },

        Commands::PromoCategory(cmd) => match cmd {
            PromoCategoryCommands::List(args) => cli::promo_category::list(&ctx, &args).await,
            PromoCategoryCommands::Add {
                promotion,
                category,
            } => cli::promo_category::add(&ctx, promotion, category).await,
            PromoCategoryCommands::Update {
                id,
                promotion,
                category,
            } => cli::promo_category::update(&ctx, id, promotion, category).await,
            PromoCategoryCommands::Remove { id } => cli::promo_category::remove(&ctx, id).await,
        },

        Commands::PromoProduct(cmd) => match cmd {
            PromoProductCommands::List(args) => cli::promo_product::list(&ctx, &args).await,
            PromoProductCommands::Add { promotion, product } => {
                cli::promo_product::add(&ctx, promotion, product).await
            }
            PromoProductCommands::Update {
                id,
                promotion,
                product,
            } => cli::promo_product::update(&ctx, id, promotion, product).await,
            PromoProductCommands::Remove { id } => cli::promo_product::remove(&ctx, id).await,
        },

        Commands::Cache(cmd) => match cmd {
            CacheCommands::Stats => cli::cache::stats(&ctx),
            CacheCommands::Clear => cli::cache::clear(&ctx),
        },

        // Handled before context construction
        Commands::Config(_) => Ok(()),
    }
}
