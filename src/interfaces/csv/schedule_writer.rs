use crate::domain::ports::ScheduleSink;
use crate::domain::schedule::ScheduleRow;
use crate::error::Result;
use std::io::Write;

/// Column headers of the exported schedule, in `ScheduleRow` field order.
pub const SCHEDULE_HEADERS: [&str; 8] = [
    "Month",
    "Beginning Balance",
    "Interest",
    "Admin Fees",
    "Payment",
    "Extra Contribution",
    "Account Balance",
    "Available Credit",
];

/// Writes a schedule as CSV, one record per month.
pub struct ScheduleWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ScheduleWriter<W> {
    pub fn new(sink: W) -> Self {
        // Display headers are written by `write_schedule`.
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(sink);
        Self { writer }
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| e.into_error().into())
    }
}

impl<W: Write> ScheduleSink for ScheduleWriter<W> {
    fn write_schedule(&mut self, rows: &[ScheduleRow]) -> Result<()> {
        self.writer.write_record(SCHEDULE_HEADERS)?;
        for row in rows {
            self.writer.serialize(row)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
