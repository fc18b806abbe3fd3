use std::path::PathBuf;

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub movies_filename: PathBuf,
    pub csv_delimiter: u8,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://movies.db?mode=rwc".to_string());

        let movies_filename = std::env::var("MOVIES_FILENAME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/movies.csv"));

        let csv_delimiter = match std::env::var("CSV_DELIMITER") {
            Ok(raw) => parse_delimiter(&raw).context("CSV_DELIMITER")?,
            Err(_) => b',',
        };

        Ok(Self { database_url, movies_filename, csv_delimiter })
    }
}

fn parse_delimiter(raw: &str) -> anyhow::Result<u8> {
    match raw.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ if raw == "\\t" => Ok(b'\t'),
        _ => anyhow::bail!("expected a single ASCII character, got {raw:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiter_accepts_single_ascii_chars() {
        assert_eq!(parse_delimiter(",").unwrap(), b',');
        assert_eq!(parse_delimiter(";").unwrap(), b';');
        assert_eq!(parse_delimiter("\\t").unwrap(), b'\t');
    }

    #[test]
    fn delimiter_rejects_everything_else() {
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter(";;").is_err());
        assert!(parse_delimiter("é").is_err());
    }
}
