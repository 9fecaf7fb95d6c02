use crate::domain::ports::ScheduleSink;
use crate::domain::schedule::ScheduleRow;
use crate::error::Result;
use std::io::Write;

/// Writes a schedule as a pretty-printed JSON array of rows.
pub struct JsonScheduleWriter<W: Write> {
    sink: W,
}

impl<W: Write> JsonScheduleWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> ScheduleSink for JsonScheduleWriter<W> {
    fn write_schedule(&mut self, rows: &[ScheduleRow]) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.sink, rows)?;
        writeln!(self.sink)?;
        self.sink.flush()?;
        Ok(())
    }
}
