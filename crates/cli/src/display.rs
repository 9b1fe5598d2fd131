//! Row formatting and genre presentation for terminal output.

use colored::Colorize;
use data_loader::Movie;
use std::collections::HashSet;
use std::io::{self, Write};

/// One movie as a single line: `id | title (year) | Genres: a b c`.
///
/// The year is left out when it is unknown.
pub fn format_row(movie: &Movie) -> String {
    let mut row = format!("{} | {}", movie.id, movie.title);
    if let Some(year) = movie.year {
        row.push_str(&format!(" ({})", year));
    }
    row.push_str(" | Genres: ");
    row.push_str(&movie.genres.join(" "));
    row
}

/// Title-case a genre for display: "sci-fi" -> "Sci-Fi", "film noir" -> "Film Noir".
///
/// Letters and digits after whitespace or `-` are upper-cased, the rest
/// lower-cased. Lowercasing the output gives back the lowercased input, so a
/// displayed genre typed back in still finds its catalog entry.
pub fn capitalize_words(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if c.is_whitespace() || c == '-' {
            capitalize_next = true;
            result.push(c);
        } else if capitalize_next && c.is_alphanumeric() {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }
    result
}

/// Print search results, or the "No matches found." line
pub fn print_results<W: Write>(out: &mut W, movies: &[&Movie]) -> io::Result<()> {
    if movies.is_empty() {
        writeln!(out, "No matches found.")?;
    }
    for movie in movies {
        writeln!(out, "{}", format_row(movie))?;
    }
    Ok(())
}

/// Print the genre vocabulary as a bulleted, title-cased list.
///
/// Spellings that differ only by case ("Sci-Fi", "SCI-FI") title-case to the
/// same text and are listed once.
pub fn print_genres<W: Write>(out: &mut W, genres: &[String]) -> io::Result<()> {
    writeln!(out, "{}", "Available genres:".bold().blue())?;
    let mut shown = HashSet::new();
    for genre in genres {
        let display = capitalize_words(genre);
        if shown.insert(display.to_lowercase()) {
            writeln!(out, " - {}", display)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(year: Option<i32>, genres: &[&str]) -> Movie {
        Movie {
            id: 1,
            title: "Toy Story".to_string(),
            year,
            genres: genres.iter().map(|g| g.to_string()).collect(),
        }
    }

    #[test]
    fn test_format_row() {
        assert_eq!(
            format_row(&movie(Some(1995), &["Animation", "Comedy"])),
            "1 | Toy Story (1995) | Genres: Animation Comedy"
        );
        assert_eq!(format_row(&movie(None, &[])), "1 | Toy Story | Genres: ");
    }

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("sci-fi"), "Sci-Fi");
        assert_eq!(capitalize_words("FILM-NOIR"), "Film-Noir");
        assert_eq!(capitalize_words("children's"), "Children's");
        assert_eq!(capitalize_words("(no genres listed)"), "(No Genres Listed)");
        assert_eq!(capitalize_words("IMAX"), "Imax");
    }

    #[test]
    fn test_capitalize_words_folds_back() {
        for genre in ["Sci-Fi", "IMAX", "Film-Noir", "(no genres listed)"] {
            assert_eq!(capitalize_words(genre).to_lowercase(), genre.to_lowercase());
        }
    }

    #[test]
    fn test_print_genres_collapses_case_variants() {
        let genres: Vec<String> = ["Action", "SCI-FI", "Romance", "Sci-Fi"]
            .iter()
            .map(|g| g.to_string())
            .collect();

        let mut out = Vec::new();
        print_genres(&mut out, &genres).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert_eq!(output.matches(" - Sci-Fi").count(), 1);
        assert!(output.contains(" - Action\n"));
        assert!(output.contains(" - Romance\n"));
    }

    #[test]
    fn test_print_results_empty() {
        let mut out = Vec::new();
        print_results(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No matches found.\n");
    }
}
