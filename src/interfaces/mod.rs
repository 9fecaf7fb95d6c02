//! Collaborators around the engine: the form that collects its inputs and
//! the writers that render or export its output.

pub mod csv;
pub mod form;
pub mod json;
pub mod table;
