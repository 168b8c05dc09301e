// src/infer/value.rs

use chrono::NaiveDate;

use crate::config::consts::DOUBLING_DATE;
use crate::types::{Location, Round};

/// Board values doubled with the show aired on this date.
pub fn doubling_date() -> NaiveDate {
    let (y, m, d) = DOUBLING_DATE;
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

/// Base stake of a row-1, round-1 clue on `date`.
pub fn multiplier(date: NaiveDate) -> u32 {
    if date >= doubling_date() { 200 } else { 100 }
}

/// Face value a daily double would have had. `None` for the final clue.
pub fn implied_value(location: Location, date: NaiveDate) -> Option<u32> {
    let row = location.row()?;
    Some(u32::from(location.round_num()) * u32::from(row) * multiplier(date))
}

/// Fill the missing face value of every daily double in the round.
/// Unrevealed clues are not daily doubles and keep `None`.
pub fn fill_values(round: &mut Round, date: NaiveDate) {
    for clue in round.clues.iter_mut().filter(|c| c.was_daily_double && c.value.is_none()) {
        clue.value = implied_value(clue.location, date);
        logd!("Value: {} daily double → {:?}", clue.location, clue.value);
    }
}
