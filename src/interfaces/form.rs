use crate::domain::account::{AccountParameters, Money};
use crate::domain::calendar::CalendarMonth;
use crate::domain::contribution::ExtraContribution;
use crate::domain::schedule::ScheduleRequest;
use crate::error::{Result, ScheduleError};
use chrono::Month;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const MIN_DURATION_MONTHS: u32 = 1;
pub const MAX_DURATION_MONTHS: u32 = 36;
pub const MAX_EXTRA_CONTRIBUTIONS: usize = 12;

/// Raw calculator settings as a user enters them.
///
/// The interest rate is a monthly percentage and the start month is a month
/// name. `build` checks the settings against the calculator's limits and
/// produces the engine's inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleForm {
    pub starting_balance: Decimal,
    pub interest_rate_percent: Decimal,
    pub admin_fee: Decimal,
    pub repayment: Decimal,
    pub start_month: Month,
    pub start_year: i32,
    pub duration_months: u32,
    /// In entry order; a later entry for the same month replaces an earlier one.
    pub contributions: Vec<ExtraContribution>,
}

impl Default for ScheduleForm {
    fn default() -> Self {
        Self {
            starting_balance: dec!(198000),
            interest_rate_percent: dec!(2.08),
            admin_fee: dec!(1200),
            repayment: dec!(7500),
            start_month: Month::January,
            start_year: 2024,
            duration_months: 18,
            contributions: Vec::new(),
        }
    }
}

impl ScheduleForm {
    pub fn build(self) -> Result<(AccountParameters, ScheduleRequest)> {
        if !(MIN_DURATION_MONTHS..=MAX_DURATION_MONTHS).contains(&self.duration_months) {
            return Err(ScheduleError::InvalidInput(format!(
                "duration must be between {MIN_DURATION_MONTHS} and {MAX_DURATION_MONTHS} months, got {}",
                self.duration_months
            )));
        }
        if self.contributions.len() > MAX_EXTRA_CONTRIBUTIONS {
            return Err(ScheduleError::InvalidInput(format!(
                "at most {MAX_EXTRA_CONTRIBUTIONS} extra contributions are allowed, got {}",
                self.contributions.len()
            )));
        }
        if let Some(negative) = self.contributions.iter().find(|c| c.amount.is_negative()) {
            return Err(ScheduleError::InvalidInput(format!(
                "contribution for {} is negative: {}",
                negative.month, negative.amount
            )));
        }

        let start = CalendarMonth::from_month(self.start_year, self.start_month)?;
        let params = AccountParameters::new(
            Money::new(self.starting_balance),
            self.interest_rate_percent,
            Money::new(self.admin_fee),
        );
        let request = ScheduleRequest::new(
            self.duration_months,
            start.month(),
            start.year(),
            Money::new(self.repayment),
        )
        .with_extra_contributions(self.contributions.into_iter().collect());

        Ok((params, request))
    }
}
