//! Parser for the movies CSV file.
//!
//! Each data line looks like `movieId,title,genres`:
//! - the title may be wrapped in double quotes when it contains commas:
//!   `2,"Grumpier Old Men, The",Comedy|Romance`
//! - the title usually ends with the release year: `Toy Story (1995)`
//! - genres are pipe-separated: `Adventure|Animation|Children`
//!
//! Quoting is deliberately simple. There is no `""` escape: a quoted title
//! is everything between the first and the last `"` of the line.

use crate::error::{DataLoadError, RecordError, Result};
use crate::types::*;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a dataset file into lines.
///
/// Invalid UTF-8 sequences are replaced rather than rejected so one odd byte
/// in a title does not sink the whole load.
pub fn read_lines_lossy(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    let content = String::from_utf8_lossy(&bytes);
    Ok(content.lines().map(|s| s.to_string()).collect())
}

/// Parse one raw data line into a [`Movie`].
///
/// Only the id can make a line fail (plus a quote that never closes). A bad
/// or missing year just leaves `year` as `None`, and missing title or genre
/// fields come out empty.
pub fn parse_line(raw: &str) -> std::result::Result<Movie, RecordError> {
    let line = raw.trim_end_matches(['\r', '\n']);
    let (id_field, title_field, genres_field) = split_fields(line)?;

    let id = parse_id(id_field)?;
    let (title, year) = extract_year(title_field);

    Ok(Movie {
        id,
        title,
        year,
        genres: parse_genres(genres_field),
    })
}

/// Split a line into its id, title and genre fields.
///
/// Without quotes only the first two commas are delimiters; anything after
/// the second comma belongs to the genre field.
fn split_fields(line: &str) -> std::result::Result<(&str, &str, &str), RecordError> {
    match (line.find('"'), line.rfind('"')) {
        (Some(first), Some(last)) if first < last => {
            let id = line.split_once(',').map_or(line, |(id, _)| id);
            let title = &line[first + 1..last];

            // Skip the closing quote and the one delimiter after it
            let mut rest = line[last + 1..].chars();
            rest.next();

            Ok((id, title, rest.as_str()))
        }
        (Some(_), _) => Err(RecordError::UnbalancedQuote),
        _ => {
            let mut parts = line.splitn(3, ',');
            let id = parts.next().unwrap_or_default();
            let title = parts.next().unwrap_or_default();
            let genres = parts.next().unwrap_or_default();
            Ok((id, title, genres))
        }
    }
}

fn parse_id(field: &str) -> std::result::Result<MovieId, RecordError> {
    field
        .trim()
        .parse()
        .map_err(|_| RecordError::MalformedIdentifier {
            value: field.to_string(),
        })
}

/// Extract year from movie title
///
/// Example: "Toy Story (1995)" -> ("Toy Story", Some(1995))
///          "Movie Title" -> ("Movie Title", None)
///          "Alien (Director's Cut)" -> ("Alien (Director's Cut)", None)
///          "Fawlty Towers (1975-1979)" -> ("Fawlty Towers", Some(1975))
///
/// The last `(` and last `)` delimit the candidate. Its leading integer is the
/// year and anything after it is ignored. When there is one, the title is cut
/// at the `(` and trailing whitespace dropped. A title that is nothing but the
/// year keeps its text.
pub fn extract_year(title: &str) -> (String, Option<Year>) {
    let (Some(open), Some(close)) = (title.rfind('('), title.rfind(')')) else {
        return (title.to_string(), None);
    };
    if close < open {
        return (title.to_string(), None);
    }

    match leading_integer(&title[open + 1..close]) {
        Some(year) => {
            let stripped = title[..open].trim_end();
            let kept = if stripped.is_empty() { title } else { stripped };
            (kept.to_string(), Some(year))
        }
        None => (title.to_string(), None),
    }
}

/// Integer at the start of `s`: optional whitespace, an optional sign, then
/// at least one digit. Text after the digits is ignored. Out of range is `None`.
fn leading_integer(s: &str) -> Option<Year> {
    let s = s.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits_len = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    s[..sign_len + digits_len].parse().ok()
}

/// Parse pipe-separated genres
///
/// Example: "Action|Adventure|Sci-Fi" -> ["Action", "Adventure", "Sci-Fi"]
///
/// Empty pieces are dropped, so an empty field gives no genres.
pub fn parse_genres(s: &str) -> Vec<String> {
    s.split('|')
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_line() {
        let movie = parse_line("1,Toy Story (1995),Animation|Comedy").unwrap();
        assert_eq!(
            movie,
            Movie {
                id: 1,
                title: "Toy Story".to_string(),
                year: Some(1995),
                genres: vec!["Animation".to_string(), "Comedy".to_string()],
            }
        );
    }

    #[test]
    fn test_parse_quoted_title() {
        let movie = parse_line("2,\"Grumpier Old Men, The\",Comedy|Romance").unwrap();
        assert_eq!(movie.id, 2);
        assert_eq!(movie.title, "Grumpier Old Men, The");
        assert_eq!(movie.year, None);
        assert_eq!(movie.genres, vec!["Comedy", "Romance"]);
    }

    #[test]
    fn test_parse_quoted_title_with_year() {
        let movie = parse_line("11,\"American President, The (1995)\",Comedy|Drama|Romance").unwrap();
        assert_eq!(movie.title, "American President, The");
        assert_eq!(movie.year, Some(1995));
        assert_eq!(movie.genres.len(), 3);
    }

    #[test]
    fn test_quotes_inside_title_are_kept_verbatim() {
        let movie = parse_line("3,\"Foo \"\"Bar\"\", Baz\",Drama").unwrap();
        assert_eq!(movie.title, "Foo \"\"Bar\"\", Baz");
        assert_eq!(movie.genres, vec!["Drama"]);
    }

    #[test]
    fn test_unquoted_genre_field_is_rest_of_line() {
        let lines = [
            ("5,Heat (1995),Action|Crime|Thriller", "Action|Crime|Thriller"),
            ("6,Sabrina,Comedy,Romance", "Comedy,Romance"),
            ("7,Nothing,", ""),
            ("8,Solo,Drama|", "Drama|"),
        ];

        for (line, genre_text) in lines {
            let movie = parse_line(line).unwrap();
            let expected: Vec<String> = genre_text
                .split('|')
                .filter(|g| !g.is_empty())
                .map(str::to_string)
                .collect();
            assert_eq!(movie.genres, expected, "line: {line}");
        }
    }

    #[test]
    fn test_empty_genre_field() {
        let movie = parse_line("9,Untitled (2001),").unwrap();
        assert!(movie.genres.is_empty());

        let movie = parse_line("10,Untitled (2001)").unwrap();
        assert!(movie.genres.is_empty());
    }

    #[test]
    fn test_repeated_genres_are_preserved() {
        let movie = parse_line("12,Twice (1999),Comedy|Comedy").unwrap();
        assert_eq!(movie.genres, vec!["Comedy", "Comedy"]);
    }

    #[test]
    fn test_malformed_identifier() {
        let err = parse_line("abc,Toy Story (1995),Animation").unwrap_err();
        assert_eq!(
            err,
            RecordError::MalformedIdentifier {
                value: "abc".to_string()
            }
        );

        assert!(parse_line(",Nameless,Drama").is_err());
    }

    #[test]
    fn test_negative_identifier() {
        let movie = parse_line("-1,Foo (1999),Drama").unwrap();
        assert_eq!(movie.id, -1);
        assert_eq!(movie.title, "Foo");
        assert_eq!(movie.year, Some(1999));
    }

    #[test]
    fn test_unbalanced_quote() {
        let err = parse_line("4,\"Never Closed,Drama").unwrap_err();
        assert_eq!(err, RecordError::UnbalancedQuote);
    }

    #[test]
    fn test_crlf_is_stripped() {
        let movie = parse_line("1,Toy Story (1995),Animation|Comedy\r").unwrap();
        assert_eq!(movie.genres, vec!["Animation", "Comedy"]);
    }

    #[test]
    fn test_extract_year() {
        assert_eq!(extract_year("Toy Story (1995)"), ("Toy Story".to_string(), Some(1995)));
        assert_eq!(extract_year("Movie Title"), ("Movie Title".to_string(), None));
    }

    #[test]
    fn test_extract_year_non_numeric_parens_left_alone() {
        assert_eq!(
            extract_year("Alien (Director's Cut)"),
            ("Alien (Director's Cut)".to_string(), None)
        );
        // Only the last pair counts
        assert_eq!(
            extract_year("Alien (1979) (Director's Cut)"),
            ("Alien (1979) (Director's Cut)".to_string(), None)
        );
    }

    #[test]
    fn test_extract_year_reads_leading_integer() {
        assert_eq!(
            extract_year("Fawlty Towers (1975-1979)"),
            ("Fawlty Towers".to_string(), Some(1975))
        );
        assert_eq!(extract_year("Foo (2007- )"), ("Foo".to_string(), Some(2007)));
        assert_eq!(extract_year("Bar ( 1999)"), ("Bar".to_string(), Some(1999)));
        assert_eq!(extract_year("Baz (-)"), ("Baz (-)".to_string(), None));
        assert_eq!(
            extract_year("Huge (99999999999)"),
            ("Huge (99999999999)".to_string(), None)
        );
    }

    #[test]
    fn test_extract_year_misordered_parens() {
        assert_eq!(extract_year("Odd ) title ("), ("Odd ) title (".to_string(), None));
    }

    #[test]
    fn test_extract_year_edge_spacing() {
        assert_eq!(extract_year("Heat (1995) "), ("Heat".to_string(), Some(1995)));
        assert_eq!(extract_year("(1995)"), ("(1995)".to_string(), Some(1995)));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_lines_lossy(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }
}
