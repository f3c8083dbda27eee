use crate::domain::unit::TransportUnit;
use crate::utils::error::{FleetError, Result};
use crate::utils::validation::validate_quantity;

pub const KG_PER_TON: f64 = 1000.0;

/// A ship bounded by a unit-count capacity and a total weight limit in tons.
#[derive(Debug, Clone)]
pub struct Vessel {
    speed_limit: f64,
    capacity: usize,
    weight_limit: f64,
    units: Vec<TransportUnit>,
}

impl Vessel {
    pub fn new(speed_limit: f64, capacity: usize, weight_limit: f64) -> Result<Self> {
        validate_quantity("speed_limit", speed_limit)?;
        validate_quantity("weight_limit", weight_limit)?;

        Ok(Self {
            speed_limit,
            capacity,
            weight_limit,
            units: Vec::new(),
        })
    }

    pub fn speed_limit(&self) -> f64 {
        self.speed_limit
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn weight_limit(&self) -> f64 {
        self.weight_limit
    }

    pub fn units(&self) -> &[TransportUnit] {
        &self.units
    }

    pub fn is_full(&self) -> bool {
        self.units.len() >= self.capacity
    }

    /// Current load plus tare of every unit aboard, in tons.
    pub fn total_weight_tons(&self) -> f64 {
        self.units.iter().map(TransportUnit::gross_weight).sum::<f64>() / KG_PER_TON
    }

    /// Checks whether `unit` could be added without breaking the capacity or weight limit.
    pub fn check_fit(&self, unit: &TransportUnit) -> Result<()> {
        if self.is_full() {
            return Err(FleetError::VesselFull {
                capacity: self.capacity,
            });
        }

        let total_tons = self.total_weight_tons() + unit.gross_weight() / KG_PER_TON;
        if total_tons > self.weight_limit {
            return Err(FleetError::VesselOverweight {
                total_tons,
                limit_tons: self.weight_limit,
            });
        }

        Ok(())
    }

    pub fn add_unit(&mut self, unit: TransportUnit) -> Result<()> {
        self.check_fit(&unit)?;
        self.units.push(unit);
        Ok(())
    }

    /// Takes the first unit with a matching identifier off the ship.
    /// Returns `None` and leaves the ship untouched when nothing matches.
    pub fn remove_unit(&mut self, unit_id: &str) -> Option<TransportUnit> {
        let position = self.units.iter().position(|u| u.id() == unit_id)?;
        Some(self.units.remove(position))
    }

    pub fn find_unit(&self, unit_id: &str) -> Option<&TransportUnit> {
        self.units.iter().find(|u| u.id() == unit_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::unit::spec;

    fn loaded_cool(id: &str, base_weight: f64, load: f64) -> TransportUnit {
        let mut unit = TransportUnit::cool(spec(id, base_weight, 10_000.0), "Apples", 4.0).unwrap();
        unit.fill(load).unwrap();
        unit
    }

    #[test]
    fn test_capacity_limit_ignores_weight() {
        let mut vessel = Vessel::new(20.0, 2, 1_000.0).unwrap();
        vessel.add_unit(loaded_cool("C-1", 0.0, 0.0)).unwrap();
        vessel.add_unit(loaded_cool("C-2", 0.0, 0.0)).unwrap();

        let result = vessel.add_unit(loaded_cool("C-3", 0.0, 0.0));
        assert!(matches!(result, Err(FleetError::VesselFull { capacity: 2 })));
        assert_eq!(vessel.units().len(), 2);
    }

    #[test]
    fn test_full_ship_reports_capacity_before_weight() {
        let mut vessel = Vessel::new(10.0, 1, 5.0).unwrap();
        vessel.add_unit(loaded_cool("S-1", 100.0, 0.0)).unwrap();

        let heavy = loaded_cool("H-1", 10_000.0, 0.0);
        let result = vessel.add_unit(heavy);
        assert!(matches!(result, Err(FleetError::VesselFull { capacity: 1 })));
        assert_eq!(vessel.units().len(), 1);
    }

    #[test]
    fn test_overweight_example() {
        let mut vessel = Vessel::new(18.0, 2, 5.0).unwrap();
        vessel.add_unit(loaded_cool("A", 2000.0, 1000.0)).unwrap();
        assert!((vessel.total_weight_tons() - 3.0).abs() < 1e-9);

        let result = vessel.add_unit(loaded_cool("B", 2500.0, 0.0));
        assert!(matches!(result, Err(FleetError::VesselOverweight { .. })));
        assert_eq!(vessel.units().len(), 1);
    }

    #[test]
    fn test_unit_reaching_exact_limit_is_accepted() {
        let mut vessel = Vessel::new(18.0, 5, 5.0).unwrap();
        vessel.add_unit(loaded_cool("A", 2000.0, 1000.0)).unwrap();
        vessel.add_unit(loaded_cool("B", 1500.0, 500.0)).unwrap();
        assert!((vessel.total_weight_tons() - 5.0).abs() < 1e-9);

        assert!(vessel.add_unit(loaded_cool("C", 1.0, 0.0)).is_err());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut vessel = Vessel::new(10.0, 3, 100.0).unwrap();
        for id in ["X", "A", "M"] {
            vessel.add_unit(loaded_cool(id, 100.0, 0.0)).unwrap();
        }
        let ids: Vec<&str> = vessel.units().iter().map(|u| u.id()).collect();
        assert_eq!(ids, vec!["X", "A", "M"]);
    }

    #[test]
    fn test_remove_unit() {
        let mut vessel = Vessel::new(10.0, 3, 100.0).unwrap();
        vessel.add_unit(loaded_cool("A", 100.0, 0.0)).unwrap();
        vessel.add_unit(loaded_cool("B", 100.0, 0.0)).unwrap();

        assert!(vessel.remove_unit("nonexistent-id").is_none());
        assert_eq!(vessel.units().len(), 2);

        let removed = vessel.remove_unit("A").unwrap();
        assert_eq!(removed.id(), "A");
        assert_eq!(vessel.units().len(), 1);
        assert_eq!(vessel.units()[0].id(), "B");
    }

    #[test]
    fn test_rejects_negative_limits() {
        assert!(Vessel::new(-1.0, 1, 1.0).is_err());
        assert!(Vessel::new(1.0, 1, f64::NAN).is_err());
        assert!(Vessel::new(0.0, 0, 0.0).is_ok());
    }
}
