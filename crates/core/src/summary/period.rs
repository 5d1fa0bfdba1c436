use std::fmt;
use std::str::FromStr;

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Granularity label attached to a historical summary. Recognized literals
/// are exactly `weekly`, `monthly` and `yearly`, case-sensitive.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    Weekly,
    Monthly,
    Yearly,
}

impl PeriodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodType::Weekly => "weekly",
            PeriodType::Monthly => "monthly",
            PeriodType::Yearly => "yearly",
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "weekly" => Ok(PeriodType::Weekly),
            "monthly" => Ok(PeriodType::Monthly),
            "yearly" => Ok(PeriodType::Yearly),
            other => Err(ValidationError::InvalidPeriodType(other.to_string()).into()),
        }
    }
}

/// Validated period bounds. The resolver is a parse-and-validate gate
/// only: start/end are taken exactly as supplied and never snapped to
/// week/month/year edges, whatever the period type says.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPeriod {
    pub period_type: PeriodType,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ResolvedPeriod {
    pub fn label(&self) -> String {
        format!("{} to {}", self.start, self.end)
    }
}

/// Strict `YYYY-MM-DD` parse; anything else is a validation error.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDateFormat(input.to_string()).into())
}

pub fn resolve_period(period_type: &str, start: &str, end: &str) -> Result<ResolvedPeriod> {
    let period_type = period_type.parse::<PeriodType>()?;
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    Ok(ResolvedPeriod {
        period_type,
        start,
        end,
    })
}

/// Half-open bounds of a calendar month: first instant of the month up to
/// (excluding) the first instant of the next. Rejects month outside [1,12]
/// before anything touches the store.
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate)> {
    if !(1..=12).contains(&month) {
        return Err(ValidationError::MonthOutOfRange(month).into());
    }
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| ValidationError::InvalidInput(format!("invalid year {}", year)))?;
    let end = start
        .checked_add_months(Months::new(1))
        .ok_or_else(|| ValidationError::InvalidInput(format!("invalid month {}-{}", year, month)))?;
    Ok((start, end))
}
