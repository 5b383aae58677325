pub use super::employees::Entity as Employees;
pub use super::hour_entries::Entity as HourEntries;
pub use super::users::Entity as Users;
