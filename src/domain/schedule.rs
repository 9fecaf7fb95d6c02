use super::account::Money;
use super::calendar::CalendarMonth;
use super::contribution::ExtraContributions;
use crate::error::{Result, ScheduleError};
use serde::Serialize;

/// What to compute: how many months, starting when, paying how much.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRequest {
    /// Number of rows to produce. Zero yields an empty schedule.
    pub duration_months: u32,
    /// Calendar month of the first row, 1-12.
    pub start_month: u32,
    /// Calendar year of the first row.
    pub start_year: i32,
    /// Subtracted from the balance every month.
    pub monthly_payment: Money,
    pub extra_contributions: ExtraContributions,
}

impl ScheduleRequest {
    pub fn new(
        duration_months: u32,
        start_month: u32,
        start_year: i32,
        monthly_payment: Money,
    ) -> Self {
        Self {
            duration_months,
            start_month,
            start_year,
            monthly_payment,
            extra_contributions: ExtraContributions::new(),
        }
    }

    pub fn with_extra_contributions(mut self, extra_contributions: ExtraContributions) -> Self {
        self.extra_contributions = extra_contributions;
        self
    }
}

/// One month of the repayment schedule.
///
/// Every amount is already rounded to cents; `ending_balance` is exactly the
/// `beginning_balance` of the following row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleRow {
    pub month: CalendarMonth,
    pub beginning_balance: Money,
    pub interest: Money,
    pub admin_fee: Money,
    pub payment: Money,
    pub extra_contribution: Money,
    pub ending_balance: Money,
    /// Starting balance minus this row's ending balance.
    pub available_credit: Money,
}

impl ScheduleRow {
    /// The "Month Year" label of this row.
    pub fn label(&self) -> String {
        self.month.label()
    }
}

/// Totals over a computed schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleSummary {
    pub months: usize,
    pub total_interest: Money,
    pub total_admin_fees: Money,
    pub total_payments: Money,
    pub total_extra_contributions: Money,
    pub final_balance: Money,
}

impl ScheduleSummary {
    /// Summarizes `rows`. An empty schedule ends where it started, so the
    /// final balance falls back to `starting_balance`.
    ///
    /// Fails with `ScheduleError::InvalidRequest` if a total overflows.
    pub fn from_rows(starting_balance: Money, rows: &[ScheduleRow]) -> Result<Self> {
        Ok(Self {
            months: rows.len(),
            total_interest: total(rows, "interest", |r| r.interest)?,
            total_admin_fees: total(rows, "admin fees", |r| r.admin_fee)?,
            total_payments: total(rows, "payments", |r| r.payment)?,
            total_extra_contributions: total(rows, "contributions", |r| r.extra_contribution)?,
            final_balance: rows
                .last()
                .map(|r| r.ending_balance)
                .unwrap_or(starting_balance),
        })
    }
}

fn total(rows: &[ScheduleRow], what: &str, field: impl Fn(&ScheduleRow) -> Money) -> Result<Money> {
    Money::checked_total(rows.iter().map(field))
        .ok_or_else(|| ScheduleError::InvalidRequest(format!("total {what} overflows")))
}
