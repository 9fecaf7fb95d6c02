//! Domain types for the repayment schedule: money, calendar months, account
//! terms, contributions and the rows of a computed schedule.

pub mod account;
pub mod calendar;
pub mod contribution;
pub mod ports;
pub mod schedule;
