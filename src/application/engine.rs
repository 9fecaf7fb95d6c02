use crate::domain::account::{AccountParameters, Money};
use crate::domain::calendar::CalendarMonth;
use crate::domain::schedule::{ScheduleRequest, ScheduleRow};
use crate::error::{Result, ScheduleError};
use log::{debug, trace};

/// Computes credit card repayment schedules for one set of account terms.
///
/// The engine holds only its immutable `AccountParameters`, so a single
/// instance can serve any number of requests, from any number of threads.
#[derive(Debug, Clone)]
pub struct AmortizationEngine {
    params: AccountParameters,
}

impl AmortizationEngine {
    /// Creates a new `AmortizationEngine` for the given account terms.
    pub fn new(params: AccountParameters) -> Self {
        Self { params }
    }

    /// The account terms every schedule starts from.
    pub fn params(&self) -> &AccountParameters {
        &self.params
    }

    /// Computes the month-by-month schedule for `request`.
    ///
    /// The request is validated before any row is produced: a start month
    /// outside 1-12, or a schedule running past the supported calendar range,
    /// fails with `ScheduleError::InvalidRequest`. So does any month whose
    /// amounts overflow `Decimal`; no partial schedule is returned. A zero
    /// duration yields an empty schedule.
    ///
    /// Each row's amounts are rounded to cents, and the rounded ending balance
    /// is what accrues interest in the following month.
    pub fn compute_schedule(&self, request: &ScheduleRequest) -> Result<Vec<ScheduleRow>> {
        let start = CalendarMonth::new(request.start_year, request.start_month)?;
        if request.duration_months == 0 {
            return Ok(Vec::new());
        }
        let end = start.offset(request.duration_months - 1)?;

        debug!(
            "computing {} month schedule from {} to {}",
            request.duration_months, start, end
        );

        let mut rows = Vec::with_capacity(request.duration_months as usize);
        let mut balance = self.params.starting_balance;
        for step in 0..request.duration_months {
            let row = self.month_row(start.offset(step)?, balance, request)?;
            trace!(
                "{}: interest {}, ending balance {}",
                row.month, row.interest, row.ending_balance
            );
            balance = row.ending_balance;
            rows.push(row);
        }

        for unused in request
            .extra_contributions
            .iter()
            .filter(|c| c.month < start || c.month > end)
        {
            debug!(
                "extra contribution of {} for {} falls outside the schedule",
                unused.amount, unused.month
            );
        }

        debug!("schedule complete, final balance {}", balance);
        Ok(rows)
    }

    fn month_row(
        &self,
        month: CalendarMonth,
        balance: Money,
        request: &ScheduleRequest,
    ) -> Result<ScheduleRow> {
        let overflow = || ScheduleError::InvalidRequest(format!("balance for {month} overflows"));
        let contribution = request.extra_contributions.get(&month);
        let interest = balance
            .checked_mul_rate(self.params.monthly_rate)
            .ok_or_else(overflow)?
            .round_cents();
        let ending_balance = balance
            .checked_add(interest)
            .and_then(|b| b.checked_add(self.params.admin_fee))
            .and_then(|b| b.checked_sub(request.monthly_payment))
            .and_then(|b| b.checked_sub(contribution))
            .ok_or_else(overflow)?
            .round_cents();
        let available_credit = self
            .params
            .starting_balance
            .checked_sub(ending_balance)
            .ok_or_else(overflow)?
            .round_cents();

        Ok(ScheduleRow {
            month,
            beginning_balance: balance.round_cents(),
            interest,
            admin_fee: self.params.admin_fee,
            payment: request.monthly_payment,
            extra_contribution: contribution,
            ending_balance,
            available_credit,
        })
    }
}
