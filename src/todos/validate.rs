use chrono::NaiveDate;

use crate::api_error::{ApiError, ApiResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn is_valid_status(value: &str) -> bool {
    matches!(value, "TO DO" | "IN PROGRESS" | "DONE")
}

pub fn is_valid_priority(value: &str) -> bool {
    matches!(value, "HIGH" | "MEDIUM" | "LOW")
}

pub fn is_valid_category(value: &str) -> bool {
    matches!(value, "HOME" | "WORK" | "LEARNING")
}

/// Validated copies of the enumerated fields of a request. A field absent
/// from the input stays `None` and is never defaulted here.
#[derive(Debug, Default)]
pub struct ValidatedFields {
    pub category: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<String>,
}

/// Checks each present field against its closed set and normalizes the
/// date. Both the query-parameter and body flavors of validation go
/// through here; the first offending field wins.
pub fn validate_fields(
    category: Option<&str>,
    status: Option<&str>,
    priority: Option<&str>,
    due_date: Option<&str>,
) -> ApiResult<ValidatedFields> {
    if let Some(category) = category {
        if !is_valid_category(category) {
            return Err(ApiError::BadRequest("Invalid Todo Category"));
        }
    }

    if let Some(status) = status {
        if !is_valid_status(status) {
            return Err(ApiError::BadRequest("Invalid Todo Status"));
        }
    }

    if let Some(priority) = priority {
        if !is_valid_priority(priority) {
            return Err(ApiError::BadRequest("Invalid Todo Priority"));
        }
    }

    let due_date = match due_date {
        Some(raw) => Some(normalize_date(raw)?),
        None => None,
    };

    Ok(ValidatedFields {
        category: category.map(str::to_string),
        status: status.map(str::to_string),
        priority: priority.map(str::to_string),
        due_date,
    })
}

/// Parses a raw date input and reformats it to zero-padded `yyyy-MM-dd`.
/// Unpadded months and days are accepted, so `2021-1-1` normalizes to
/// `2021-01-01`; anything that is not a real calendar date is rejected.
pub fn normalize_date(raw: &str) -> ApiResult<String> {
    let date = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| ApiError::BadRequest("Invalid Due Date"))?;

    Ok(date.format(DATE_FORMAT).to_string())
}
