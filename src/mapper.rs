use std::{fmt::Display, fs::File, io::Read, path::Path, str::FromStr};

use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Deserializer, de};
use tracing::debug;

use crate::{
    error::{AppError, AppResult},
    models::MovieRecord,
};

/// Raw dataset row. Aliases cover the header spellings of common movie dumps.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(alias = "Movie Name", alias = "movie_name", alias = "title", alias = "Title")]
    name: String,
    #[serde(alias = "Year", alias = "Year of Release")]
    year: i32,
    #[serde(alias = "time", alias = "Runtime", alias = "Run Time in minutes", alias = "Duration")]
    runtime: i32,
    #[serde(alias = "imdb", alias = "IMDB Rating", alias = "Movie Rating", alias = "Rating")]
    rating: f64,
    #[serde(alias = "Votes", deserialize_with = "grouped_number")]
    votes: i32,
    #[serde(
        default,
        alias = "MetaScore",
        alias = "Metascore",
        alias = "metascore",
        deserialize_with = "optional_number"
    )]
    meta_score: Option<f64>,
    #[serde(default, alias = "Gross", deserialize_with = "optional_number")]
    gross: Option<f64>,
    #[serde(alias = "Certification", alias = "certificate", alias = "Certificate")]
    certification: String,
    #[serde(alias = "Description", alias = "Plot")]
    description: String,
    #[serde(alias = "genre", alias = "Genre")]
    genres: String,
    #[serde(alias = "director", alias = "Director")]
    directors: String,
    #[serde(alias = "Stars", alias = "cast", alias = "Cast")]
    stars: String,
}

impl From<CsvRow> for MovieRecord {
    fn from(row: CsvRow) -> Self {
        Self {
            name: row.name,
            year: row.year,
            runtime: row.runtime,
            rating: row.rating,
            votes: row.votes,
            meta_score: row.meta_score,
            gross: row.gross,
            certification: row.certification,
            description: row.description,
            genres: split_list(&row.genres),
            directors: split_list(&row.directors),
            stars: split_list(&row.stars),
        }
    }
}

/// Maps the dataset at `path`. Any malformed row fails the whole call.
pub fn read_movies(path: &Path, delimiter: u8) -> AppResult<Vec<MovieRecord>> {
    let file = File::open(path)
        .map_err(|err| AppError::Dataset { path: path.to_path_buf(), source: err.into() })?;
    let records = map_reader(file, delimiter)?;
    debug!(path = %path.display(), records = records.len(), "mapped dataset");
    Ok(records)
}

/// Maps CSV from any reader; the first row must be the header.
pub fn map_reader<R: Read>(reader: R, delimiter: u8) -> AppResult<Vec<MovieRecord>> {
    collect(builder(delimiter).from_reader(reader))
}

fn builder(delimiter: u8) -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.delimiter(delimiter).trim(Trim::All).has_headers(true);
    builder
}

fn collect<R: Read>(mut reader: csv::Reader<R>) -> AppResult<Vec<MovieRecord>> {
    reader
        .deserialize::<CsvRow>()
        .map(|row| row.map(MovieRecord::from).map_err(AppError::from))
        .collect()
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect()
}

/// Strips thousands separators and a currency sign: `"$1,234"` → `1234`.
fn clean_number(raw: &str) -> String {
    raw.trim().chars().filter(|c| !matches!(c, ',' | '$' | '_')).collect()
}

fn grouped_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = String::deserialize(deserializer)?;
    clean_number(&raw).parse().map_err(|e| de::Error::custom(format!("{raw:?}: {e}")))
}

fn optional_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    let cleaned = clean_number(&raw);
    if cleaned.is_empty() {
        return Ok(None);
    }
    cleaned.parse().map(Some).map_err(|e| de::Error::custom(format!("{raw:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const DATASET: &str = "\
name,year,runtime,rating,votes,meta_score,gross,certification,description,genres,directors,stars
The Dark Knight,2008,152,9.0,\"2,303,232\",84,534.86,PG-13,Batman faces the Joker.,\"Action, Crime, Drama\",Christopher Nolan,\"Christian Bale, Heath Ledger\"
Pulp Fiction,1994,154,8.9,\"1,826,188\",94,$107.93,R,Lives intertwine.,\"Crime, Drama\",Quentin Tarantino,\"John Travolta, Uma Thurman\"
Mystery Reel,1950,88,6.1,1200,,,Approved,Nobody saw it.,Mystery,,
";

    fn map(csv: &str) -> AppResult<Vec<MovieRecord>> {
        map_reader(Cursor::new(csv.as_bytes()), b',')
    }

    #[test]
    fn maps_one_record_per_row_in_order() {
        let records = map(DATASET).unwrap();

        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["The Dark Knight", "Pulp Fiction", "Mystery Reel"]);

        let dark_knight = &records[0];
        assert_eq!(dark_knight.year, 2008);
        assert_eq!(dark_knight.runtime, 152);
        assert_eq!(dark_knight.votes, 2_303_232);
        assert_eq!(dark_knight.meta_score, Some(84.0));
        assert_eq!(dark_knight.certification, "PG-13");
        assert_eq!(dark_knight.genres, ["Action", "Crime", "Drama"]);
        assert_eq!(dark_knight.directors, ["Christopher Nolan"]);
        assert_eq!(dark_knight.stars, ["Christian Bale", "Heath Ledger"]);
    }

    #[test]
    fn coerces_currency_and_empty_optionals() {
        let records = map(DATASET).unwrap();
        assert_eq!(records[1].gross, Some(107.93));

        let mystery = &records[2];
        assert_eq!(mystery.meta_score, None);
        assert_eq!(mystery.gross, None);
        assert!(mystery.directors.is_empty());
        assert!(mystery.stars.is_empty());
    }

    #[test]
    fn accepts_common_header_spellings() {
        let csv = "\
Movie Name,Year of Release,Run Time in minutes,Movie Rating,Votes,MetaScore,Gross,Certification,Description,Genre,Director,Stars
Heat,1995,170,8.3,690000,76,67.44,R,Thieves and a detective.,\"Action, Crime\",Michael Mann,\"Al Pacino, Robert De Niro\"
";
        let records = map(csv).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Heat");
        assert_eq!(records[0].runtime, 170);
        assert_eq!(records[0].stars, ["Al Pacino", "Robert De Niro"]);
    }

    #[test]
    fn honours_custom_delimiter() {
        let csv = "\
name;year;runtime;rating;votes;meta_score;gross;certification;description;genres;directors;stars
Heat;1995;170;8.3;690000;76;67.44;R;Thieves.;Action, Crime;Michael Mann;Al Pacino
";
        let records = map_reader(Cursor::new(csv.as_bytes()), b';').unwrap();
        assert_eq!(records[0].genres, ["Action", "Crime"]);
    }

    #[test]
    fn malformed_number_fails_whole_mapping() {
        let csv = DATASET.replace("1994,154", "199x,154");
        let err = map(&csv).unwrap_err();
        assert!(matches!(err, AppError::Parse { line: 3, .. }), "got {err:?}");
    }

    #[test]
    fn short_row_fails_whole_mapping() {
        let csv = format!("{DATASET}Broken,2001,90\n");
        assert!(matches!(map(&csv), Err(AppError::Parse { .. })));
    }

    #[test]
    fn header_only_file_maps_to_nothing() {
        let header = DATASET.lines().next().unwrap();
        assert!(map(header).unwrap().is_empty());
    }

    #[test]
    fn reading_the_same_file_twice_is_identical() {
        let path = std::env::temp_dir().join(format!("moviedb-mapper-{}.csv", std::process::id()));
        std::fs::write(&path, DATASET).unwrap();

        let first = read_movies(&path, b',').unwrap();
        let second = read_movies(&path, b',').unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
    }

    #[test]
    fn missing_file_is_a_dataset_error() {
        let err = read_movies(Path::new("/nonexistent/movies.csv"), b',').unwrap_err();
        assert!(matches!(err, AppError::Dataset { .. }));
    }
}
