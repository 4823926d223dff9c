//! Timetable sheet state and the write side of the grid.

mod io;
mod ops;
mod state;

pub use ops::SheetWriter;
pub use state::TimetableSheet;
