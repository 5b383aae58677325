mod admin;
mod employees;
mod invoice;

pub use admin::{cmd_create_admin, cmd_set_password};
pub use employees::{cmd_list_employees, cmd_list_periods};
pub use invoice::cmd_invoice;
