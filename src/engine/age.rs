use chrono::{Datelike, Local, NaiveDate};

use crate::error::{NutriError, Result};

/// Age in whole years on `today`.
///
/// Compares month and day, so the count only increments on the birthday
/// itself. A Feb 29 birthday counts from Mar 1 in non-leap years.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> Result<u32> {
    if date_of_birth > today {
        return Err(NutriError::InvalidInput(format!(
            "date of birth {} is in the future",
            date_of_birth
        )));
    }

    let mut years = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        years -= 1;
    }

    u32::try_from(years)
        .map_err(|_| NutriError::InvalidInput(format!("cannot derive age from {}", date_of_birth)))
}

/// The local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Age in whole years as of the local date.
pub fn age_today(date_of_birth: NaiveDate) -> Result<u32> {
    age_on(date_of_birth, today())
}
