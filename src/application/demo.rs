// src/application/demo.rs
//
// Demonstration driver
//
// Walks one movie and one actor through create → add → find → remove and
// prints every step. Validation failures stop the walk and are reported as a
// single "An error occurred" line; nothing below this layer catches errors.

use std::fmt::Display;
use std::io::Write;

use log::{error, info};
use serde::Serialize;

use crate::collections::{ActorCollection, MovieCollection, MovieQuery};
use crate::domain::{Actor, Gender, Movie};
use crate::error::{AppError, AppResult};

/// How entities are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Raw input for the walk-through, as a user would type it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub release_date: String,
    pub first_name: String,
    pub surname: String,
    pub gender: String,
    pub date_of_birth: String,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            title: "007".to_string(),
            year: 1962,
            genre: "Action".to_string(),
            release_date: "1962-10-05".to_string(),
            first_name: "James".to_string(),
            surname: "Bond".to_string(),
            gender: "Male".to_string(),
            date_of_birth: "1920-11-11".to_string(),
        }
    }
}

/// Run the walk-through, propagating the first error
pub fn run<W: Write>(out: &mut W, scenario: &Scenario, format: OutputFormat) -> AppResult<()> {
    info!("Running catalog demonstration");

    let movie = Movie::new(
        scenario.title.as_str(),
        scenario.year,
        scenario.genre.as_str(),
        scenario.release_date.as_str(),
    )?;
    writeln!(out, "Created movie: {}", render(&movie, format)?)?;

    let mut movies = MovieCollection::new();
    movies.add_movie(movie);
    writeln!(out, "Total movies in collection: {}", movies.total_movies())?;

    for found in movies.find_movies(&MovieQuery::new().title(scenario.title.as_str())) {
        writeln!(out, "Found movie: {}", render(found, format)?)?;
    }

    if movies.remove_movie(&scenario.title) {
        writeln!(out, "Movie '{}' removed successfully.", scenario.title)?;
    } else {
        writeln!(out, "Movie '{}' not found.", scenario.title)?;
    }
    writeln!(out, "Total movies after removal: {}", movies.total_movies())?;

    let gender: Gender = scenario.gender.parse()?;
    let actor = Actor::new(
        scenario.first_name.as_str(),
        scenario.surname.as_str(),
        gender,
        scenario.date_of_birth.as_str(),
    )?;
    writeln!(out, "Created actor: {}", render(&actor, format)?)?;

    let mut actors = ActorCollection::new();
    actors.add_actor(actor);
    writeln!(out, "Total actors in collection: {}", actors.count_actors())?;

    if let Some(found) = actors.find_actor(&scenario.first_name) {
        writeln!(out, "Found actor: {}", render(found, format)?)?;
    }

    if actors.remove_actor(&scenario.first_name, None).is_removed() {
        writeln!(out, "Actor '{}' removed successfully.", scenario.first_name)?;
    } else {
        writeln!(out, "Actor '{}' not found.", scenario.first_name)?;
    }
    writeln!(out, "Total actors after removal: {}", actors.count_actors())?;

    Ok(())
}

/// Run the walk-through and report any failure on `out`
///
/// Returns whether the walk completed. Only a failure to write is an error.
pub fn run_and_report<W: Write>(
    out: &mut W,
    scenario: &Scenario,
    format: OutputFormat,
) -> std::io::Result<bool> {
    match run(out, scenario, format) {
        Ok(()) => Ok(true),
        Err(AppError::Io(err)) => Err(err),
        Err(err) => {
            error!("Demonstration aborted: {}", err);
            writeln!(out, "An error occurred: {}", err)?;
            Ok(false)
        }
    }
}

fn render<T: Serialize + Display>(value: &T, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(value.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(value)?),
    }
}
