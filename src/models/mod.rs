pub mod employee;
pub mod hour_entry;
pub mod invoice;

pub use employee::{Employee, NewEmployee};
pub use hour_entry::{HourEntry, NewHourEntry};
pub use invoice::Invoice;
