use super::schedule::ScheduleRow;
use crate::error::Result;

/// Consumes a computed schedule for display or export.
pub trait ScheduleSink {
    fn write_schedule(&mut self, rows: &[ScheduleRow]) -> Result<()>;
}

pub type ScheduleSinkBox<'a> = Box<dyn ScheduleSink + 'a>;
