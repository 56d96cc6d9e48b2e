use anyhow::Result;
use recipe_importer::batch::BatchDriver;
use recipe_importer::config::AppConfig;
use recipe_importer::db;
use recipe_importer::export;
use recipe_importer::observability;
use recipe_importer::parser::IngredientParser;
use recipe_importer::tagging::LexiconTagger;
use recipe_importer::units;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file first
    dotenvy::dotenv().ok();

    // Validate configuration early; a bad environment is fatal before any work
    let config = AppConfig::from_env().map_err(anyhow::Error::new)?;
    config.validate().map_err(anyhow::Error::new)?;

    observability::init_tracing()?;
    info!(config = %config.summary(), "Configuration loaded");

    // The tagger lexicon and unit table load once at startup; a missing
    // lexicon is a startup failure, never a per-record one
    let tagger = LexiconTagger::from_json_file(&config.tagger.lexicon_path)
        .map_err(anyhow::Error::new)?;
    let unit_table = units::load_unit_table();

    info!("Initializing database connection");
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.connect_timeout_secs))
        .connect(&config.database.url)
        .await?;

    db::init_database_schema(&pool).await?;

    let parser = IngredientParser::new(&tagger, &unit_table);
    let mut driver = BatchDriver::new(parser);

    for path in &config.corpus.input_files {
        if let Err(err) = driver.process_file(path) {
            // An unreadable corpus file is logged and skipped; the rest of
            // the batch still runs
            error!(file = %path.display(), error = %err, "Failed to process corpus file");
        }
    }

    let summary = driver.summary().clone();
    let index = driver.into_index();

    let stored = db::store_index(&pool, &index).await?;

    if let Some(csv_path) = &config.export.csv_path {
        export::export_index_csv(csv_path, &index)?;
    }

    info!(
        files = summary.files_processed,
        recipes = summary.recipes_processed,
        skipped = summary.recipes_skipped,
        ingredients = summary.ingredients_parsed,
        failures = summary.parse_failures,
        stored = stored,
        "Corpus import complete"
    );

    Ok(())
}
