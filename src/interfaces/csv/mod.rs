pub mod contribution_reader;
pub mod schedule_writer;
