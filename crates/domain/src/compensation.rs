//! Compensation ledger entries.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;
use roster_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::EmployeeId;

const MINOR_UNITS_PER_MAJOR: i64 = 100;
const MAX_FRACTION_DIGITS: usize = 2;

/// Strictly positive salary amount held exactly in hundredths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Salary(i64);

impl Salary {
    /// Creates a salary from an amount in hundredths.
    pub fn from_minor_units(minor_units: i64) -> AppResult<Self> {
        if minor_units <= 0 {
            return Err(AppError::Validation(
                "salary must be greater than zero".to_owned(),
            ));
        }

        Ok(Self(minor_units))
    }

    /// Returns the amount in hundredths.
    #[must_use]
    pub fn minor_units(&self) -> i64 {
        self.0
    }
}

impl FromStr for Salary {
    type Err = AppError;

    /// Parses decimal text such as `1000`, `1000.5` or `1000.50`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let malformed = || AppError::Validation(format!("salary '{value}' is not a valid amount"));

        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if whole.is_empty() || !whole.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(malformed());
        }
        if !fraction.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(malformed());
        }
        if unsigned.ends_with('.') {
            return Err(malformed());
        }
        if fraction.len() > MAX_FRACTION_DIGITS {
            return Err(AppError::Validation(format!(
                "salary '{value}' must have at most {MAX_FRACTION_DIGITS} decimal places"
            )));
        }

        let too_large = || AppError::Validation(format!("salary '{value}' is too large"));
        let whole_units = whole.parse::<i64>().map_err(|_| too_large())?;
        let fraction_units = format!("{fraction:0<width$}", width = MAX_FRACTION_DIGITS)
            .parse::<i64>()
            .map_err(|_| malformed())?;
        let minor_units = whole_units
            .checked_mul(MINOR_UNITS_PER_MAJOR)
            .and_then(|units| units.checked_add(fraction_units))
            .ok_or_else(too_large)?;

        if negative && minor_units != 0 {
            return Err(AppError::Validation(
                "salary must be greater than zero".to_owned(),
            ));
        }

        Self::from_minor_units(minor_units)
    }
}

impl TryFrom<String> for Salary {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Salary> for String {
    fn from(value: Salary) -> Self {
        value.to_string()
    }
}

impl Display for Salary {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}.{:02}",
            self.0 / MINOR_UNITS_PER_MAJOR,
            self.0 % MINOR_UNITS_PER_MAJOR
        )
    }
}

/// Immutable compensation ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compensation {
    employee_id: EmployeeId,
    salary: Salary,
    effective_date: NaiveDate,
    sequence: i64,
}

impl Compensation {
    /// Creates a ledger entry.
    ///
    /// `sequence` is assigned by the store and increases with every append.
    #[must_use]
    pub fn new(
        employee_id: EmployeeId,
        salary: Salary,
        effective_date: NaiveDate,
        sequence: i64,
    ) -> Self {
        Self {
            employee_id,
            salary,
            effective_date,
            sequence,
        }
    }

    /// Returns the employee the entry belongs to.
    #[must_use]
    pub fn employee_id(&self) -> EmployeeId {
        self.employee_id
    }

    /// Returns the salary amount.
    #[must_use]
    pub fn salary(&self) -> Salary {
        self.salary
    }

    /// Returns the date the salary takes effect.
    #[must_use]
    pub fn effective_date(&self) -> NaiveDate {
        self.effective_date
    }

    /// Returns the store-assigned append sequence.
    #[must_use]
    pub fn sequence(&self) -> i64 {
        self.sequence
    }

    /// Ordering used to pick the current entry: latest effective date, then
    /// latest append.
    #[must_use]
    pub fn ledger_key(&self) -> (NaiveDate, i64) {
        (self.effective_date, self.sequence)
    }
}
