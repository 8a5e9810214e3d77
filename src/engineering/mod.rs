//! The engineering organization server: roster, projects, repositories,
//! deployments, incidents, code reviews, and oncall rotations.

pub mod data;
pub mod resources;
pub mod tools;

pub use data::{seed, EngineeringData};

use crate::registry::Registry;

/// Identity reported during initialize.
pub const SERVER_NAME: &str = "engineering-server";

/// The complete tool and resource surface of the engineering server.
pub fn registry() -> Registry<EngineeringData> {
    resources::register(tools::register(Registry::new()))
}
