use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub const SLUG_MAX_LEN: usize = 100;

/// Lowercase ASCII slug: alphanumerics and `_` are kept, runs of whitespace
/// and `-` collapse to a single `-`, everything else is dropped.
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_dash = false;
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch.to_ascii_lowercase());
        } else if ch.is_whitespace() || ch == '-' {
            pending_dash = true;
        }
    }
    out.trim_matches('_').to_string()
}

/// Slug for `source` that no row of `E` holds in `column` yet, suffixing
/// `-2`, `-3`, ... on collision. Returns whether a collision was seen.
pub async fn unique_slug<E, C>(
    conn: &C,
    column: E::Column,
    source: &str,
) -> Result<(String, bool), DbErr>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let mut base = slugify(source);
    if base.is_empty() {
        base.push_str("untitled");
    }

    let mut candidate = truncate(&base, SLUG_MAX_LEN).to_string();
    let mut attempt = 1;
    while E::find().filter(column.eq(candidate.as_str())).one(conn).await?.is_some() {
        attempt += 1;
        let suffix = format!("-{attempt}");
        candidate = format!("{}{suffix}", truncate(&base, SLUG_MAX_LEN - suffix.len()));
    }

    Ok((candidate, attempt > 1))
}

fn truncate(slug: &str, max: usize) -> &str {
    // slugs are ASCII
    &slug[..slug.len().min(max)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_dashes() {
        assert_eq!(slugify("The Dark Knight"), "the-dark-knight");
        assert_eq!(slugify("  Sci-Fi  "), "sci-fi");
        assert_eq!(slugify("PG-13"), "pg-13");
    }

    #[test]
    fn slugify_drops_punctuation() {
        assert_eq!(slugify("Schindler's List"), "schindlers-list");
        assert_eq!(slugify("Léon: The Professional"), "lon-the-professional");
        assert_eq!(slugify("Se7en -- Director's Cut"), "se7en-directors-cut");
    }

    #[test]
    fn slugify_of_symbols_is_empty() {
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn truncate_keeps_prefix() {
        let long = "a".repeat(150);
        assert_eq!(truncate(&long, SLUG_MAX_LEN).len(), SLUG_MAX_LEN);
        assert_eq!(truncate("short", SLUG_MAX_LEN), "short");
    }
}
