use super::entity::Actor;
use crate::domain::validation::{require_calendar_date, require_non_empty};
use crate::domain::DomainResult;

/// Validates all Actor invariants
pub fn validate_actor(actor: &Actor) -> DomainResult<()> {
    validate_first_name(actor.first_name())?;
    validate_surname(actor.surname())?;
    validate_date_of_birth(actor.date_of_birth())?;
    Ok(())
}

pub(crate) fn validate_first_name(first_name: &str) -> DomainResult<()> {
    require_non_empty("First name", first_name)
}

pub(crate) fn validate_surname(surname: &str) -> DomainResult<()> {
    require_non_empty("Surname", surname)
}

pub(crate) fn validate_date_of_birth(date_of_birth: &str) -> DomainResult<()> {
    require_calendar_date("Date of birth", date_of_birth)
}

/// Critical Actor Invariants:
///
/// 1. First name and surname cannot be empty
/// 2. Gender is one of Male, Female, Other (enforced by the type)
/// 3. Date of birth is a real calendar date written as YYYY-MM-DD
/// 4. Actors have no identity beyond their field values
