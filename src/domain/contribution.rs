use super::account::Money;
use super::calendar::CalendarMonth;
use crate::error::{Result, ScheduleError};
use log::debug;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::str::FromStr;

/// A one-off payment made in a specific calendar month on top of the regular
/// repayment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtraContribution {
    pub month: CalendarMonth,
    pub amount: Money,
}

impl ExtraContribution {
    pub fn new(month: CalendarMonth, amount: Money) -> Self {
        Self { month, amount }
    }
}

impl FromStr for ExtraContribution {
    type Err = ScheduleError;

    /// Parses `"<Month> <Year>=<amount>"`, e.g. `"March 2024=5000"`.
    fn from_str(s: &str) -> Result<Self> {
        let (month, amount) = s.split_once('=').ok_or_else(|| {
            ScheduleError::InvalidInput(format!(
                "expected '<Month> <Year>=<amount>', got '{s}'"
            ))
        })?;
        let month = month.parse::<CalendarMonth>()?;
        let amount = amount.trim().parse::<Decimal>().map_err(|e| {
            ScheduleError::InvalidInput(format!("invalid amount '{}': {e}", amount.trim()))
        })?;
        Ok(Self::new(month, Money::new(amount)))
    }
}

/// A contribution as it appears in a contributions CSV file.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct ContributionRecord {
    pub month: String,
    pub year: i32,
    pub amount: Decimal,
}

impl TryFrom<ContributionRecord> for ExtraContribution {
    type Error = ScheduleError;

    fn try_from(record: ContributionRecord) -> Result<Self> {
        let month = record.month.parse::<chrono::Month>().map_err(|_| {
            ScheduleError::InvalidInput(format!("unknown month name '{}'", record.month))
        })?;
        Ok(Self::new(
            CalendarMonth::from_month(record.year, month)?,
            Money::new(record.amount),
        ))
    }
}

/// Extra contributions keyed by calendar month.
///
/// Built once from an ordered list of contributions. When the same month
/// appears more than once, the later entry replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtraContributions {
    by_month: BTreeMap<CalendarMonth, Money>,
}

impl ExtraContributions {
    pub fn new() -> Self {
        Self::default()
    }

    /// The contribution for `month`, or zero if none was made.
    pub fn get(&self, month: &CalendarMonth) -> Money {
        self.by_month.get(month).copied().unwrap_or(Money::ZERO)
    }

    pub fn len(&self) -> usize {
        self.by_month.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_month.is_empty()
    }

    /// Contributions in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = ExtraContribution> + '_ {
        self.by_month
            .iter()
            .map(|(month, amount)| ExtraContribution::new(*month, *amount))
    }
}

impl FromIterator<ExtraContribution> for ExtraContributions {
    fn from_iter<I: IntoIterator<Item = ExtraContribution>>(iter: I) -> Self {
        let mut by_month = BTreeMap::new();
        for contribution in iter {
            if let Some(previous) = by_month.insert(contribution.month, contribution.amount) {
                debug!(
                    "contribution for {} replaced: {} -> {}",
                    contribution.month, previous, contribution.amount
                );
            }
        }
        Self { by_month }
    }
}
