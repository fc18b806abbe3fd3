mod cleaner;
mod config;
mod db;
mod entities;
mod error;
mod importer;
mod mapper;
mod models;
mod pricing;
mod resolver;
mod slug;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::{config::Config, error::AppResult, importer::MovieImporter, pricing::RandomPrice};

/// Loads a movie dataset into the database and resets it.
#[derive(Parser)]
#[command(name = "moviedb", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Populate movies with dataset csv file
    Populate {
        /// CSV dataset to import (defaults to MOVIES_FILENAME)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Seed for repeatable movie prices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Clean movies by deleting all movie data
    Clean,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,moviedb=debug,sqlx=warn,sea_orm=warn".to_string()),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let db = db::connect_and_migrate(&config.database_url).await?;
    info!(database_url = %config.database_url, "connected");

    let result = match cli.command {
        Command::Populate { file, seed } => {
            let path = file.unwrap_or_else(|| config.movies_filename.clone());
            let prices = seed.map_or_else(RandomPrice::from_os_rng, RandomPrice::seeded);
            populate(&db, &path, config.csv_delimiter, prices).await
        },
        Command::Clean => clean(&db).await,
    };

    if let Err(err) = &result {
        eprintln!("{}", format!("Error occurred: {err}").red().bold());
    }
    Ok(result?)
}

async fn populate(
    db: &DatabaseConnection,
    path: &Path,
    delimiter: u8,
    prices: RandomPrice,
) -> AppResult<()> {
    let records = mapper::read_movies(path, delimiter)?;
    info!(path = %path.display(), records = records.len(), "dataset mapped");

    let report = MovieImporter::new(prices).import(db, &records).await?;
    info!(
        movies = report.movies,
        certifications = report.certifications_created,
        genres = report.genres_created,
        directors = report.directors_created,
        stars = report.stars_created,
        "import committed"
    );

    println!("{}", "Movies populated with csv data!".green().bold());
    Ok(())
}

async fn clean(db: &DatabaseConnection) -> AppResult<()> {
    let report = cleaner::clean(db).await?;
    info!(rows = report.total(), "movie tables cleaned");

    println!("{}", "Movies cleaned!".green().bold());
    Ok(())
}
