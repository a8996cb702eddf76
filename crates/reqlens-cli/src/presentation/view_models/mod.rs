pub mod detail;
pub mod list;

pub use detail::{
    BadgeTone, DetailViewModel, DisplayMode, FieldDescription, SummaryField,
};
pub use list::{ListEntry, ListViewModel};
