#![allow(dead_code)]

use cardplan::domain::account::{AccountParameters, Money};
use rust_decimal_macros::dec;
use std::io::{Error, Write};
use tempfile::NamedTempFile;

/// The calculator's default card: 198000 owed at 2.08% a month with a 1200 fee.
pub fn default_card() -> AccountParameters {
    AccountParameters::new(
        Money::new(dec!(198000)),
        dec!(2.08),
        Money::new(dec!(1200)),
    )
}

/// Writes a contributions CSV with the given `(month, year, amount)` records.
pub fn contributions_file(records: &[(&str, i32, &str)]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    {
        let mut wtr = csv::WriterBuilder::new().from_writer(file.as_file_mut());
        wtr.write_record(["month", "year", "amount"])?;
        for (month, year, amount) in records {
            wtr.write_record([*month, year.to_string().as_str(), *amount])?;
        }
        wtr.flush()?;
    }
    file.flush()?;
    Ok(file)
}
