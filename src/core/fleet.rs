use crate::domain::{HazardAlert, TransportUnit, UnitKind, UnitSpec, Vessel};
use crate::utils::error::{FleetError, Result};

/// Registered ships plus the pool of cargo units not yet assigned to any ship.
///
/// Every unit lives in exactly one place: assigning moves it from the pool onto a
/// ship, removing moves it back. Positions are zero-based.
#[derive(Debug, Default)]
pub struct FleetDesk {
    vessels: Vec<Vessel>,
    pool: Vec<TransportUnit>,
}

impl FleetDesk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    pub fn pool(&self) -> &[TransportUnit] {
        &self.pool
    }

    pub fn register_vessel(&mut self, speed_limit: f64, capacity: usize, weight_limit: f64) -> Result<usize> {
        let vessel = Vessel::new(speed_limit, capacity, weight_limit)?;
        self.vessels.push(vessel);
        tracing::info!(
            "Registered ship #{} (speed {} kn, capacity {}, limit {} t)",
            self.vessels.len(),
            speed_limit,
            capacity,
            weight_limit
        );
        Ok(self.vessels.len() - 1)
    }

    pub fn create_unit(&mut self, spec: UnitSpec, kind: UnitKind) -> Result<()> {
        if self.contains_unit(&spec.id) {
            return Err(FleetError::DuplicateUnit { unit_id: spec.id });
        }

        let unit = TransportUnit::new(spec, kind)?;
        tracing::info!("Created {} unit {}", unit.kind().label(), unit.id());
        self.pool.push(unit);
        Ok(())
    }

    pub fn assign_unit(&mut self, vessel_index: usize, unit_index: usize) -> Result<()> {
        if self.vessels.is_empty() {
            return Err(FleetError::NoVessels);
        }
        if self.pool.is_empty() {
            return Err(FleetError::NoCargo);
        }

        let vessel = self
            .vessels
            .get_mut(vessel_index)
            .ok_or(FleetError::UnknownVessel { index: vessel_index })?;
        let unit = self
            .pool
            .get(unit_index)
            .ok_or(FleetError::UnknownUnit { index: unit_index })?;

        vessel.check_fit(unit)?;

        let unit = self.pool.remove(unit_index);
        if let Some(alert) = unit.hazard_alert() {
            tracing::warn!("{}", alert);
        }
        tracing::info!("Assigned unit {} to ship #{}", unit.id(), vessel_index + 1);
        vessel.add_unit(unit)
    }

    /// Returns the removed unit to the pool. A ship without that unit is left as is
    /// and `Ok(None)` is returned.
    pub fn remove_unit(&mut self, vessel_index: usize, unit_id: &str) -> Result<Option<&TransportUnit>> {
        let vessel = self
            .vessels
            .get_mut(vessel_index)
            .ok_or(FleetError::UnknownVessel { index: vessel_index })?;

        match vessel.remove_unit(unit_id) {
            Some(unit) => {
                tracing::info!("Removed unit {} from ship #{}", unit_id, vessel_index + 1);
                self.pool.push(unit);
                Ok(self.pool.last())
            }
            None => {
                tracing::debug!("Ship #{} carries no unit {}", vessel_index + 1, unit_id);
                Ok(None)
            }
        }
    }

    pub fn fill_unit(&mut self, unit_index: usize, weight: f64) -> Result<()> {
        let unit = self.pool_unit_mut(unit_index)?;
        unit.fill(weight)?;
        tracing::info!("Filled unit {} with {} kg", unit.id(), weight);
        Ok(())
    }

    pub fn clear_unit(&mut self, unit_index: usize) -> Result<f64> {
        let unit = self.pool_unit_mut(unit_index)?;
        unit.clear_load();
        tracing::info!("Cleared unit {} ({} kg left)", unit.id(), unit.load_weight());
        Ok(unit.load_weight())
    }

    /// Alerts raised by units currently aboard a ship, in fleet order.
    pub fn hazard_alerts(&self) -> Vec<HazardAlert> {
        self.vessels
            .iter()
            .flat_map(|v| v.units())
            .filter_map(TransportUnit::hazard_alert)
            .collect()
    }

    fn contains_unit(&self, unit_id: &str) -> bool {
        self.pool.iter().any(|u| u.id() == unit_id)
            || self.vessels.iter().any(|v| v.find_unit(unit_id).is_some())
    }

    fn pool_unit_mut(&mut self, unit_index: usize) -> Result<&mut TransportUnit> {
        if self.pool.is_empty() {
            return Err(FleetError::NoCargo);
        }
        self.pool
            .get_mut(unit_index)
            .ok_or(FleetError::UnknownUnit { index: unit_index })
    }
}
