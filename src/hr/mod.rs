//! The unified HR & engineering server: employees, departments,
//! payroll, time off, performance reviews, plus the engineering
//! delivery records scoped to this company.

pub mod data;
pub mod resources;
pub mod tools;

pub use data::{seed, HrData};

use crate::registry::Registry;

/// Identity reported during initialize.
pub const SERVER_NAME: &str = "unified-hrm-engineering-server";

/// The complete tool and resource surface of the HR server.
pub fn registry() -> Registry<HrData> {
    resources::register(tools::register(Registry::new()))
}
