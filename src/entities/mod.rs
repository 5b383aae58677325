pub mod prelude;

pub mod employees;
pub mod hour_entries;
pub mod users;
