use nom::bytes::complete::tag;
use nom::character::complete::{digit1, multispace0};
use nom::combinator::all_consuming;
use nom::multi::separated_list1;
use nom::{Finish, IResult, Parser};
use std::ops::Deref;
use tracing::{debug, warn};

use crate::analysis::Calories;
use crate::error::{AnalysisError, InputError};

//------------------------------------------

/// Validated calorie intake, one value per day in chronological order.
/// Guaranteed to be non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalorieSequence(Vec<Calories>);

impl CalorieSequence {
    pub fn days(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[Calories] {
        &self.0
    }
}

impl Deref for CalorieSequence {
    type Target = [Calories];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

//------------------------------------------

// "2000, 2500,1800": commas, each optionally followed by whitespace.
fn parse_calorie_list(input: &str) -> IResult<&str, Vec<&str>> {
    all_consuming(separated_list1((tag(","), multispace0), digit1)).parse(input)
}

pub fn parse_day_count(text: &str) -> Result<usize, InputError> {
    let trimmed = text.trim();
    let invalid = || InputError::InvalidDayCount(trimmed.to_owned());

    if trimmed.is_empty() || !trimmed.bytes().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    match trimmed.parse::<usize>() {
        Ok(days) if days >= 1 => Ok(days),
        _ => Err(invalid()),
    }
}

pub fn parse_calories(text: &str) -> Result<Vec<Calories>, InputError> {
    let trimmed = text.trim();

    let (_, digits) = parse_calorie_list(trimmed)
        .finish()
        .map_err(|_| InputError::InvalidCalories(trimmed.to_owned()))?;

    digits
        .into_iter()
        .map(|d| {
            d.parse::<Calories>()
                .map_err(|_| InputError::ValueOutOfRange(d.to_owned()))
        })
        .collect()
}

/// Parses the number of days and the calorie list, checking that there
/// is exactly one calorie value per day.
pub fn validate(days_text: &str, calories_text: &str) -> Result<CalorieSequence, InputError> {
    let result = parse_day_count(days_text).and_then(|days| {
        let calories = parse_calories(calories_text)?;

        if calories.len() != days {
            return Err(InputError::LengthMismatch {
                days,
                values: calories.len(),
            });
        }

        Ok(CalorieSequence(calories))
    });

    match &result {
        Ok(seq) => debug!(days = seq.days(), "accepted calorie input"),
        Err(e) => warn!("rejected calorie input: {}", e),
    }

    result
}

/// Both analyses only make sense over at least one pair of days.
pub fn require_multiple_days(calories: &CalorieSequence) -> Result<(), AnalysisError> {
    if calories.days() < 2 {
        warn!(days = calories.days(), "not enough days to analyze");
        return Err(AnalysisError::InsufficientData {
            len: calories.days(),
        });
    }

    Ok(())
}

//------------------------------------------
