pub mod employee;
pub mod hour_entry;
pub mod user;
