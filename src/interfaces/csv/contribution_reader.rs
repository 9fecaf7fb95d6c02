use crate::domain::contribution::{ContributionRecord, ExtraContribution};
use crate::error::{Result, ScheduleError};
use std::io::Read;

/// Reads extra contributions from a CSV source with a `month,year,amount`
/// header, e.g. `March,2024,5000`.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<ExtraContribution>`. Whitespace around fields is trimmed.
pub struct ContributionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ContributionReader<R> {
    /// Creates a new `ContributionReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and converts contributions.
    pub fn contributions(self) -> impl Iterator<Item = Result<ExtraContribution>> {
        self.reader.into_deserialize().map(|result| {
            let record: ContributionRecord = result.map_err(ScheduleError::from)?;
            ExtraContribution::try_from(record)
        })
    }
}
