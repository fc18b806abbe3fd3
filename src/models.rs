/// One dataset row, coerced to types but not range-checked.
#[derive(Clone, Debug, PartialEq)]
pub struct MovieRecord {
    pub name: String,
    pub year: i32,
    /// Minutes.
    pub runtime: i32,
    pub rating: f64,
    pub votes: i32,
    pub meta_score: Option<f64>,
    pub gross: Option<f64>,
    pub certification: String,
    pub description: String,
    pub genres: Vec<String>,
    pub directors: Vec<String>,
    pub stars: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub movies: usize,
    pub certifications_created: usize,
    pub genres_created: usize,
    pub directors_created: usize,
    pub stars_created: usize,
    pub genre_links: usize,
    pub director_links: usize,
    pub star_links: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub movies: u64,
    pub certifications: u64,
    pub genres: u64,
    pub directors: u64,
    pub stars: u64,
    pub genre_links: u64,
    pub director_links: u64,
    pub star_links: u64,
}

impl CleanReport {
    pub fn total(&self) -> u64 {
        self.movies
            + self.certifications
            + self.genres
            + self.directors
            + self.stars
            + self.genre_links
            + self.director_links
            + self.star_links
    }
}
