// src/collections/actor_collection.rs
//
// Ordered actor store. Duplicates are allowed; removal refuses to guess.

use log::{debug, warn};
use serde::Serialize;

use crate::domain::Actor;

/// Result of `ActorCollection::remove_actor`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActorRemoval {
    /// Exactly one actor matched and was taken out of the collection
    Removed(Actor),

    NotFound,

    /// More than one actor matched; nothing was removed
    Ambiguous(usize),
}

impl ActorRemoval {
    pub fn is_removed(&self) -> bool {
        matches!(self, ActorRemoval::Removed(_))
    }
}

/// In-memory actor catalog in insertion order
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ActorCollection {
    actors: Vec<Actor>,
}

impl ActorCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_actor(&mut self, actor: Actor) {
        debug!("Adding actor {} {}", actor.first_name(), actor.surname());
        self.actors.push(actor);
    }

    /// Remove the single actor with this first name (and surname, if given)
    ///
    /// Zero or several matches leave the collection untouched.
    pub fn remove_actor(&mut self, first_name: &str, surname: Option<&str>) -> ActorRemoval {
        let matched: Vec<usize> = self
            .actors
            .iter()
            .enumerate()
            .filter(|(_, a)| {
                a.first_name() == first_name && surname.map_or(true, |s| a.surname() == s)
            })
            .map(|(index, _)| index)
            .collect();

        match matched.as_slice() {
            [] => {
                warn!("No actor with the first name {} found.", first_name);
                ActorRemoval::NotFound
            }
            [index] => {
                let removed = self.actors.remove(*index);
                debug!("Removed actor {} {}", removed.first_name(), removed.surname());
                ActorRemoval::Removed(removed)
            }
            many => {
                warn!("Multiple actors with the first name {} found.", first_name);
                ActorRemoval::Ambiguous(many.len())
            }
        }
    }

    pub fn count_actors(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// First actor in insertion order with this first name
    pub fn find_actor(&self, first_name: &str) -> Option<&Actor> {
        self.actors.iter().find(|a| a.first_name() == first_name)
    }

    pub fn find_actor_mut(&mut self, first_name: &str) -> Option<&mut Actor> {
        self.actors.iter_mut().find(|a| a.first_name() == first_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter()
    }
}
