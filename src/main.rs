use std::fs::File;
use std::sync::Arc;

use clap::Parser;
use log::warn;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use recipe_feed::api::{HttpRecipeApi, RecipeApi};
use recipe_feed::core::config::{self, ResolvedConfig};
use recipe_feed::core::store::{Liveness, RecipeStore};
use recipe_feed::feed::FeedAggregator;
use recipe_feed::tui;

#[derive(Parser)]
#[command(name = "recipe-feed", about = "Curated recipe feed in the terminal")]
struct Args {
    /// Recipe API base URL (overrides config file and RECIPE_API_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Load both feeds once, print them as JSON, and exit
    #[arg(long)]
    dump: bool,
}

/// Activates the feeds headlessly and prints both lists.
async fn dump(api: Arc<dyn RecipeApi>, config: &ResolvedConfig) -> serde_json::Result<()> {
    let popular = RecipeStore::new();
    let newest = RecipeStore::new();
    FeedAggregator::new(
        api,
        config.feed,
        popular.clone(),
        newest.clone(),
        Liveness::new(),
    )
    .activate()
    .await;

    let out = serde_json::json!({
        "popular": popular.snapshot(),
        "newest": newest.snapshot(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to recipe-feed.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("recipe-feed.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("Ignoring config file: {}", e);
        config::RecipeFeedConfig::default()
    });
    let resolved = config::resolve(&file_config, args.base_url.as_deref());

    log::info!("Recipe feed starting up against {}", resolved.base_url);

    let api: Arc<dyn RecipeApi> = Arc::new(HttpRecipeApi::new(
        resolved.base_url.clone(),
        resolved.request_timeout,
    )?);

    if args.dump {
        dump(api, &resolved).await?;
    } else {
        tui::run(resolved, api)?;
    }
    Ok(())
}
