pub mod auth_service;
pub mod auth_service_impl;
pub use auth_service::{AuthError, AuthService, BootstrapOutcome};
pub use auth_service_impl::SeaOrmAuthService;

pub mod employee_service;
pub mod employee_service_impl;
pub use employee_service::{EmployeeError, EmployeeService};
pub use employee_service_impl::SeaOrmEmployeeService;

pub mod hour_service;
pub mod hour_service_impl;
pub use hour_service::{HourError, HourService};
pub use hour_service_impl::SeaOrmHourService;

pub mod invoice_service;
pub mod invoice_service_impl;
pub use invoice_service::{InvoiceError, InvoiceService};
pub use invoice_service_impl::SeaOrmInvoiceService;
