//! Line-oriented interactive session.
//!
//! Commands: `search`, `genres`, `help`, `quit`. A search asks for an id
//! first; if one is given the other prompts are skipped. Otherwise it asks
//! for a title keyword, any number of genres and a year, each of which can be
//! left blank.

use crate::display::{format_row, print_genres, print_results};
use colored::Colorize;
use data_loader::MovieId;
use query::{MovieQuery, QueryEngine};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Run the session until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(engine: &QueryEngine, input: &mut R, out: &mut W) -> io::Result<()> {
    loop {
        let Some(command) = prompt(input, out, "\nEnter command (search, genres, help, quit): ")? else {
            break;
        };

        match command.trim().to_lowercase().as_str() {
            "quit" | "exit" => {
                writeln!(out, "Exiting program.")?;
                break;
            }
            "search" => {
                if !run_search(engine, input, out)? {
                    break;
                }
            }
            "genres" => print_genres(out, engine.catalog().genres())?,
            "help" => print_help(out)?,
            "" => {}
            other => {
                debug!(command = other, "unknown command");
                writeln!(out, "Unknown command. Please try again.")?;
            }
        }
    }
    Ok(())
}

/// One search dialogue. Returns `false` when input ran out mid-dialogue.
fn run_search<R: BufRead, W: Write>(engine: &QueryEngine, input: &mut R, out: &mut W) -> io::Result<bool> {
    let Some(id_input) = prompt(input, out, "Enter movie ID (or press Enter to skip): ")? else {
        return Ok(false);
    };
    let id_input = id_input.trim();

    if !id_input.is_empty() {
        match id_input.parse::<MovieId>() {
            Ok(id) => match engine.search(&MovieQuery::by_id(id)).first() {
                Some(movie) => writeln!(out, "{}", format_row(movie))?,
                None => writeln!(out, "No movie found with ID: {}", id)?,
            },
            Err(_) => writeln!(out, "Invalid movie ID: {}", id_input)?,
        }
        // An id is exclusive, skip the other filters
        return Ok(true);
    }

    let Some(keyword) = prompt(input, out, "Enter title keyword (or press Enter to skip): ")? else {
        return Ok(false);
    };
    let mut query = MovieQuery::new().with_title(keyword.trim());

    writeln!(out)?;
    print_genres(out, engine.catalog().genres())?;
    writeln!(out, "Enter genres (type 'done' when finished, press Enter to skip):")?;
    loop {
        let Some(genre) = read_line(input)? else {
            return Ok(false);
        };
        let genre = genre.trim();
        if genre.is_empty() || genre.eq_ignore_ascii_case("done") {
            break;
        }
        query = query.with_genre(genre);
    }

    let Some(year_input) = prompt(input, out, "Enter year (or press Enter to skip): ")? else {
        return Ok(false);
    };
    // Anything that isn't a year means no year filter
    if let Ok(year) = year_input.trim().parse() {
        query = query.with_year(year);
    }

    writeln!(out, "\n{}", "Search results:".bold())?;
    print_results(out, &engine.search(&query))?;
    Ok(true)
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "search  look up a movie by id, or filter by title, genres and year")?;
    writeln!(out, "genres  list every genre in the catalog")?;
    writeln!(out, "help    show this message")?;
    writeln!(out, "quit    leave the program")
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> io::Result<Option<String>> {
    write!(out, "{}", message)?;
    out.flush()?;
    read_line(input)
}

/// Next line without its terminator, `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}
