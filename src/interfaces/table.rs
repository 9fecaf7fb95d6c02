use super::csv::schedule_writer::SCHEDULE_HEADERS;
use crate::domain::account::Money;
use crate::domain::ports::ScheduleSink;
use crate::domain::schedule::{ScheduleRow, ScheduleSummary};
use crate::error::Result;
use std::io::Write;

const COLUMN_GAP: &str = "  ";

/// Renders a schedule as an aligned text table followed by its totals.
pub struct TableWriter<W: Write> {
    sink: W,
    starting_balance: Money,
}

impl<W: Write> TableWriter<W> {
    /// `starting_balance` is reported as the final balance of an empty schedule.
    pub fn new(sink: W, starting_balance: Money) -> Self {
        Self {
            sink,
            starting_balance,
        }
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    fn write_line<S: AsRef<str>>(&mut self, cells: &[S], widths: &[usize]) -> Result<()> {
        let line = cells
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, &width))| {
                let cell = cell.as_ref();
                // month left, amounts right
                if i == 0 {
                    format!("{cell:<width$}")
                } else {
                    format!("{cell:>width$}")
                }
            })
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        writeln!(self.sink, "{}", line.trim_end())?;
        Ok(())
    }

    fn write_summary(&mut self, summary: &ScheduleSummary) -> Result<()> {
        let lines = [
            ("Months", summary.months.to_string()),
            ("Total interest", summary.total_interest.to_string()),
            ("Total admin fees", summary.total_admin_fees.to_string()),
            ("Total payments", summary.total_payments.to_string()),
            (
                "Total extra contributions",
                summary.total_extra_contributions.to_string(),
            ),
            ("Final balance", summary.final_balance.to_string()),
        ];
        let amount_width = lines.iter().map(|(_, v)| v.len()).max().unwrap_or(0);
        writeln!(self.sink)?;
        for (label, value) in lines {
            writeln!(self.sink, "{:<26}{:>amount_width$}", format!("{label}:"), value)?;
        }
        Ok(())
    }
}

fn row_cells(row: &ScheduleRow) -> [String; 8] {
    [
        row.label(),
        row.beginning_balance.to_string(),
        row.interest.to_string(),
        row.admin_fee.to_string(),
        row.payment.to_string(),
        row.extra_contribution.to_string(),
        row.ending_balance.to_string(),
        row.available_credit.to_string(),
    ]
}

impl<W: Write> ScheduleSink for TableWriter<W> {
    fn write_schedule(&mut self, rows: &[ScheduleRow]) -> Result<()> {
        let summary = ScheduleSummary::from_rows(self.starting_balance, rows)?;
        let cells: Vec<[String; 8]> = rows.iter().map(row_cells).collect();

        let mut widths = SCHEDULE_HEADERS.map(str::len);
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        self.write_line(&SCHEDULE_HEADERS, &widths)?;
        let rule = widths.map(|w| "-".repeat(w));
        self.write_line(&rule, &widths)?;
        for row in &cells {
            self.write_line(row, &widths)?;
        }

        self.write_summary(&summary)?;
        self.sink.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calendar::CalendarMonth;
    use rust_decimal_macros::dec;

    fn render(rows: &[ScheduleRow]) -> String {
        let mut writer = TableWriter::new(Vec::new(), Money::new(dec!(198000)));
        writer.write_schedule(rows).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_table_alignment() {
        let row = ScheduleRow {
            month: CalendarMonth::new(2024, 1).unwrap(),
            beginning_balance: Money::new(dec!(198000)),
            interest: Money::new(dec!(4118.4)),
            admin_fee: Money::new(dec!(1200)),
            payment: Money::new(dec!(7500)),
            extra_contribution: Money::ZERO,
            ending_balance: Money::new(dec!(195818.4)),
            available_credit: Money::new(dec!(2181.6)),
        };
        let output = render(&[row]);
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("Month         Beginning Balance  Interest"));
        assert!(lines[1].starts_with("------------  -----------------  --------"));
        assert!(lines[2].starts_with("January 2024          198000.00   4118.40"));
        assert!(lines[2].ends_with("195818.40           2181.60"));
        // Every table line has the same width.
        assert_eq!(lines[0].len(), lines[2].len());
    }

    #[test]
    fn test_table_summary_footer() {
        let output = render(&[]);
        let months = output.lines().find(|l| l.starts_with("Months:")).unwrap();
        assert!(months.ends_with(" 0"));
        assert!(output.contains("Final balance:            198000.00"));
    }

    #[test]
    fn test_overflowing_totals_write_nothing() {
        let row = ScheduleRow {
            month: CalendarMonth::new(2024, 1).unwrap(),
            beginning_balance: Money::ZERO,
            interest: Money::ZERO,
            admin_fee: Money::ZERO,
            payment: Money::new(rust_decimal::Decimal::MAX),
            extra_contribution: Money::ZERO,
            ending_balance: Money::ZERO,
            available_credit: Money::ZERO,
        };
        let mut writer = TableWriter::new(Vec::new(), Money::ZERO);
        assert!(writer.write_schedule(&[row.clone(), row]).is_err());
        assert!(writer.into_inner().is_empty());
    }
}
