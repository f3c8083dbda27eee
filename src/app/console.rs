use crate::core::fleet::FleetDesk;
use crate::domain::{UnitKind, UnitSpec};
use crate::utils::error::{FleetError, Result};
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

const MENU: &str = "
Vessel Management Console
1. Register a new ship
2. Create a new cargo unit
3. Assign cargo to a ship
4. Remove cargo from a ship
5. Display fleet and cargo details
6. Fill an unassigned cargo unit
7. Empty an unassigned cargo unit
8. Show hazard alerts
Type 'exit' to close the application";

/// Line-oriented menu loop over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
    desk: FleetDesk,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            desk: FleetDesk::new(),
        }
    }

    pub fn desk(&self) -> &FleetDesk {
        &self.desk
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Runs until `exit` or end of input. Only I/O failures end the loop with an error.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            write!(self.output, "Choose an operation: ")?;
            self.output.flush()?;

            let action = match self.read_line() {
                Ok(Some(action)) => action,
                Ok(None) => {
                    tracing::debug!("Input closed, leaving console");
                    break;
                }
                Err(e @ FleetError::InvalidInput { .. }) => {
                    writeln!(self.output, "Failed: {}", e)?;
                    writeln!(self.output, "Hint: {}", e.recovery_suggestion())?;
                    continue;
                }
                Err(e) => return Err(e),
            };
            if action.eq_ignore_ascii_case("exit") {
                break;
            }

            let outcome = match action.as_str() {
                "1" => self.register_vessel(),
                "2" => self.create_unit(),
                "3" => self.assign_unit(),
                "4" => self.remove_unit(),
                "5" => self.display_fleet(),
                "6" => self.fill_unit(),
                "7" => self.clear_unit(),
                "8" => self.show_hazard_alerts(),
                _ => {
                    writeln!(self.output, "Unknown command, please try again.")?;
                    continue;
                }
            };

            match outcome {
                Ok(()) => {}
                Err(FleetError::IoError(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    tracing::debug!("Input closed mid-operation: {}", e);
                    break;
                }
                Err(e @ FleetError::IoError(_)) => return Err(e),
                Err(e) => {
                    tracing::debug!("Operation {} failed: {:?}", action, e);
                    writeln!(self.output, "Failed: {}", e)?;
                    writeln!(self.output, "Hint: {}", e.recovery_suggestion())?;
                }
            }
        }

        writeln!(self.output, "Goodbye.")?;
        Ok(())
    }

    fn register_vessel(&mut self) -> Result<()> {
        let speed = self.prompt_parsed("Enter ship's maximum speed (knots): ", "speed")?;
        let capacity = self.prompt_parsed("Enter ship's cargo capacity (units): ", "capacity")?;
        let limit = self.prompt_parsed("Enter ship's weight limit (tons): ", "weight limit")?;

        let index = self.desk.register_vessel(speed, capacity, limit)?;
        writeln!(self.output, "Ship #{} registered successfully.", index + 1)?;
        Ok(())
    }

    fn create_unit(&mut self) -> Result<()> {
        let choice = self.prompt("Choose the type of cargo unit (1. Fluid, 2. Gas, 3. Cool): ", "unit type")?;
        if !matches!(choice.as_str(), "1" | "2" | "3") {
            return Err(FleetError::InvalidInput {
                field: "unit type".to_string(),
                reason: format!("'{}' is not 1, 2 or 3", choice),
            });
        }

        let height = self.prompt_parsed("Enter unit height: ", "height")?;
        let base_weight = self.prompt_parsed("Enter unit base weight (kg): ", "base weight")?;
        let depth = self.prompt_parsed("Enter unit depth: ", "depth")?;
        let id = self.prompt("Enter unit ID: ", "unit ID")?;
        let maximum_load = self.prompt_parsed("Enter unit's maximum load (kg): ", "maximum load")?;

        let kind = match choice.as_str() {
            "1" => UnitKind::Fluid {
                hazardous: self.prompt_bool("Is the material hazardous? (true/false): ", "hazardous")?,
            },
            "2" => UnitKind::Gas {
                pressure: self.prompt_parsed("Enter unit pressure: ", "pressure")?,
            },
            _ => UnitKind::Cool {
                product: self.prompt("Enter stored product type: ", "product")?,
                temperature: self.prompt_parsed("Enter temperature setting: ", "temperature")?,
            },
        };

        let spec = UnitSpec {
            id,
            height,
            depth,
            base_weight,
            maximum_load,
        };
        self.desk.create_unit(spec, kind)?;
        writeln!(self.output, "Cargo unit created successfully.")?;
        Ok(())
    }

    fn assign_unit(&mut self) -> Result<()> {
        if self.desk.vessels().is_empty() {
            return Err(FleetError::NoVessels);
        }
        if self.desk.pool().is_empty() {
            return Err(FleetError::NoCargo);
        }

        let vessel_index = self.choose_vessel("Choose a ship by number:")?;
        self.list_pool("Select a cargo unit by number:")?;
        let unit_index = self.prompt_position("cargo unit")?;

        self.desk.assign_unit(vessel_index, unit_index)?;
        writeln!(self.output, "Cargo unit assigned to the ship successfully.")?;
        Ok(())
    }

    fn remove_unit(&mut self) -> Result<()> {
        if self.desk.vessels().is_empty() {
            return Err(FleetError::NoVessels);
        }

        let vessel_index = self.choose_vessel("Choose a ship by number to remove cargo from:")?;
        let loaded = self
            .desk
            .vessels()
            .get(vessel_index)
            .map(|v| !v.units().is_empty())
            .ok_or(FleetError::UnknownVessel { index: vessel_index })?;
        if !loaded {
            writeln!(self.output, "This ship has no cargo units loaded.")?;
            return Ok(());
        }

        let unit_id = self.prompt("Enter the ID of the cargo unit to remove: ", "unit ID")?;
        match self.desk.remove_unit(vessel_index, &unit_id)? {
            Some(_) => writeln!(
                self.output,
                "Cargo unit {} removed from the ship and returned to the pool.",
                unit_id
            )?,
            None => writeln!(self.output, "No cargo unit with ID {} is on this ship.", unit_id)?,
        }
        Ok(())
    }

    fn display_fleet(&mut self) -> Result<()> {
        if self.desk.vessels().is_empty() {
            writeln!(self.output, "No ships are currently registered.")?;
        }

        for (i, vessel) in self.desk.vessels().iter().enumerate() {
            writeln!(
                self.output,
                "\nShip #{}: Maximum Speed: {} knots, Capacity: {} units, Weight Limit: {} tons, Loaded: {:.3} tons",
                i + 1,
                vessel.speed_limit(),
                vessel.capacity(),
                vessel.weight_limit(),
                vessel.total_weight_tons()
            )?;

            if vessel.units().is_empty() {
                writeln!(self.output, "No cargo units are currently loaded on this vessel.")?;
                continue;
            }

            writeln!(self.output, "Loaded Cargo Units:")?;
            for unit in vessel.units() {
                writeln!(
                    self.output,
                    "- ID: {}, Load Weight: {} kg, Type: {}",
                    unit.id(),
                    unit.load_weight(),
                    unit.kind().label()
                )?;
            }
        }

        if !self.desk.pool().is_empty() {
            self.list_pool("\nUnassigned cargo units:")?;
        }
        Ok(())
    }

    fn fill_unit(&mut self) -> Result<()> {
        if self.desk.pool().is_empty() {
            return Err(FleetError::NoCargo);
        }

        self.list_pool("Select a cargo unit to fill:")?;
        let unit_index = self.prompt_position("cargo unit")?;
        let weight = self.prompt_parsed("Enter load weight (kg): ", "load weight")?;

        self.desk.fill_unit(unit_index, weight)?;
        writeln!(self.output, "Cargo unit filled successfully.")?;
        Ok(())
    }

    fn clear_unit(&mut self) -> Result<()> {
        if self.desk.pool().is_empty() {
            return Err(FleetError::NoCargo);
        }

        self.list_pool("Select a cargo unit to empty:")?;
        let unit_index = self.prompt_position("cargo unit")?;

        let remaining = self.desk.clear_unit(unit_index)?;
        writeln!(self.output, "Cargo unit emptied, {} kg remaining.", remaining)?;
        Ok(())
    }

    fn show_hazard_alerts(&mut self) -> Result<()> {
        let alerts = self.desk.hazard_alerts();
        if alerts.is_empty() {
            writeln!(self.output, "No hazard alerts.")?;
        }
        for alert in alerts {
            writeln!(self.output, "{}", alert)?;
        }
        Ok(())
    }

    fn choose_vessel(&mut self, heading: &str) -> Result<usize> {
        writeln!(self.output, "{}", heading)?;
        for (i, vessel) in self.desk.vessels().iter().enumerate() {
            writeln!(
                self.output,
                "{}. Ship with speed limit {} and capacity for {} units",
                i + 1,
                vessel.speed_limit(),
                vessel.capacity()
            )?;
        }
        self.prompt_position("ship")
    }

    fn list_pool(&mut self, heading: &str) -> Result<()> {
        writeln!(self.output, "{}", heading)?;
        for (i, unit) in self.desk.pool().iter().enumerate() {
            writeln!(
                self.output,
                "{}. {} unit {} ({} of {} kg permitted, max {} kg, {}x{})",
                i + 1,
                unit.kind().label(),
                unit.id(),
                unit.load_weight(),
                unit.permissible_load(),
                unit.maximum_load(),
                unit.height(),
                unit.depth()
            )?;
        }
        Ok(())
    }

    /// Reads a one-based list position and returns it zero-based.
    fn prompt_position(&mut self, field: &str) -> Result<usize> {
        let position: usize = self.prompt_parsed("> ", field)?;
        position.checked_sub(1).ok_or_else(|| FleetError::InvalidInput {
            field: field.to_string(),
            reason: "positions start at 1".to_string(),
        })
    }

    fn prompt_bool(&mut self, label: &str, field: &str) -> Result<bool> {
        let raw = self.prompt(label, field)?;
        raw.to_ascii_lowercase()
            .parse()
            .map_err(|_| FleetError::InvalidInput {
                field: field.to_string(),
                reason: format!("'{}' is not true or false", raw),
            })
    }

    fn prompt_parsed<T>(&mut self, label: &str, field: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.prompt(label, field)?;
        raw.parse().map_err(|e: T::Err| FleetError::InvalidInput {
            field: field.to_string(),
            reason: format!("'{}': {}", raw, e),
        })
    }

    fn prompt(&mut self, label: &str, field: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()?.ok_or_else(|| {
            FleetError::IoError(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("input ended while reading {}", field),
            ))
        })
    }

    /// Reads one line. A line that is not UTF-8 is consumed and reported as bad input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8(buf).map_err(|_| FleetError::InvalidInput {
            field: "input".to_string(),
            reason: "line is not valid UTF-8".to_string(),
        })?;
        Ok(Some(line.trim().to_string()))
    }
}
