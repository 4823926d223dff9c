//! timetable-core - Sheet model, CSV storage and schedule exporters.

pub mod error;
pub mod sheet;
pub mod storage;

pub use error::{Result, SheetError};
pub use sheet::{SheetWriter, TimetableSheet};

pub use timetable_engine::engine::{
    CellRef, Grid, Schedule, ScheduleConfig, SchoolClass, SchoolDay, SheetGrid, Shift,
};
