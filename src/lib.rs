pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::app::console::Console;
pub use crate::app::http::{create_router, serve, SharedRepository};
pub use crate::config::{toml_config::ServerConfig, ConsoleConfig};
pub use crate::core::{fleet::FleetDesk, registry::InMemoryRegistry};
pub use crate::domain::{
    Animal, AnimalUpdate, HazardAlert, TransportUnit, UnitKind, UnitSpec, Vessel, Visit,
};
pub use crate::utils::error::{FleetError, Result};
