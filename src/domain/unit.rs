//! Transport units: the three fixed cargo container variants.

use crate::utils::error::{FleetError, Result};
use crate::utils::validation::{validate_identifier, validate_quantity};
use std::fmt;

/// Share of the maximum load a non-hazardous fluid unit may be filled to.
pub const FLUID_FILL_RATIO: f64 = 0.9;
/// Share of the maximum load a hazardous fluid unit may be filled to.
pub const HAZARDOUS_FLUID_FILL_RATIO: f64 = 0.5;
/// Share of the load left behind when a gas unit is cleared.
pub const GAS_RESIDUAL_RATIO: f64 = 0.05;

#[derive(Debug, Clone, PartialEq)]
pub enum UnitKind {
    Fluid { hazardous: bool },
    Gas { pressure: f64 },
    Cool { product: String, temperature: f64 },
}

impl UnitKind {
    pub fn label(&self) -> &'static str {
        match self {
            UnitKind::Fluid { .. } => "Fluid",
            UnitKind::Gas { .. } => "Gas",
            UnitKind::Cool { .. } => "Cool",
        }
    }
}

/// Dimensions and limits shared by every unit variant. Weights are in kilograms.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitSpec {
    pub id: String,
    pub height: u32,
    pub depth: u32,
    pub base_weight: f64,
    pub maximum_load: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransportUnit {
    id: String,
    height: u32,
    depth: u32,
    base_weight: f64,
    maximum_load: f64,
    load_weight: f64,
    kind: UnitKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HazardAlert {
    pub unit_id: String,
    pub message: String,
}

impl fmt::Display for HazardAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl TransportUnit {
    pub fn new(spec: UnitSpec, kind: UnitKind) -> Result<Self> {
        validate_identifier("unit_id", &spec.id)?;
        validate_quantity("base_weight", spec.base_weight)?;
        validate_quantity("maximum_load", spec.maximum_load)?;

        Ok(Self {
            id: spec.id,
            height: spec.height,
            depth: spec.depth,
            base_weight: spec.base_weight,
            maximum_load: spec.maximum_load,
            load_weight: 0.0,
            kind,
        })
    }

    pub fn fluid(spec: UnitSpec, hazardous: bool) -> Result<Self> {
        Self::new(spec, UnitKind::Fluid { hazardous })
    }

    pub fn gas(spec: UnitSpec, pressure: f64) -> Result<Self> {
        Self::new(spec, UnitKind::Gas { pressure })
    }

    pub fn cool(spec: UnitSpec, product: impl Into<String>, temperature: f64) -> Result<Self> {
        Self::new(
            spec,
            UnitKind::Cool {
                product: product.into(),
                temperature,
            },
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn base_weight(&self) -> f64 {
        self.base_weight
    }

    pub fn maximum_load(&self) -> f64 {
        self.maximum_load
    }

    pub fn load_weight(&self) -> f64 {
        self.load_weight
    }

    pub fn kind(&self) -> &UnitKind {
        &self.kind
    }

    /// Load plus tare, in kilograms.
    pub fn gross_weight(&self) -> f64 {
        self.load_weight + self.base_weight
    }

    pub fn permissible_load(&self) -> f64 {
        match self.kind {
            UnitKind::Fluid { hazardous: true } => self.maximum_load * HAZARDOUS_FLUID_FILL_RATIO,
            UnitKind::Fluid { hazardous: false } => self.maximum_load * FLUID_FILL_RATIO,
            UnitKind::Gas { .. } | UnitKind::Cool { .. } => self.maximum_load,
        }
    }

    /// Replaces the current load. Rejected fills leave the load untouched.
    pub fn fill(&mut self, weight: f64) -> Result<()> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(FleetError::InvalidLoad {
                unit_id: self.id.clone(),
                weight,
            });
        }

        let permissible = self.permissible_load();
        if weight > permissible {
            return Err(FleetError::CapacityExceeded {
                unit_id: self.id.clone(),
                weight,
                permissible,
            });
        }

        self.load_weight = weight;
        Ok(())
    }

    pub fn clear_load(&mut self) {
        self.load_weight = match self.kind {
            UnitKind::Gas { .. } => self.load_weight * GAS_RESIDUAL_RATIO,
            UnitKind::Fluid { .. } | UnitKind::Cool { .. } => 0.0,
        };
    }

    /// Cool units and non-hazardous fluid units never raise an alert.
    pub fn hazard_alert(&self) -> Option<HazardAlert> {
        let message = match self.kind {
            UnitKind::Fluid { hazardous: true } => {
                format!("Warning: Hazardous material in unit {}", self.id)
            }
            UnitKind::Gas { .. } => {
                format!("Warning: Gas unit {} is under hazardous conditions.", self.id)
            }
            UnitKind::Fluid { hazardous: false } | UnitKind::Cool { .. } => return None,
        };

        Some(HazardAlert {
            unit_id: self.id.clone(),
            message,
        })
    }
}

#[cfg(test)]
pub(crate) fn spec(id: &str, base_weight: f64, maximum_load: f64) -> UnitSpec {
    UnitSpec {
        id: id.to_string(),
        height: 250,
        depth: 600,
        base_weight,
        maximum_load,
    }
}
