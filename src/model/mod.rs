// File: ./src/model/mod.rs
pub mod date;
pub mod display;
pub mod item;

pub use date::{DateFormat, DateStructure, ParsedDate, parse_date};
pub use display::TaskDisplay;
pub use item::{DateClause, Task, TaskKind, TaskType};
