// Domain layer: cargo and registry models plus the store port. No I/O here.

pub mod animal;
pub mod ports;
pub mod unit;
pub mod vessel;

pub use animal::{Animal, AnimalUpdate, Visit};
pub use ports::AnimalRepository;
pub use unit::{HazardAlert, TransportUnit, UnitKind, UnitSpec};
pub use vessel::Vessel;
