use thiserror::Error;

#[derive(Error, Debug)]
pub enum FleetError {
    #[error("Unit {unit_id}: {weight} kg exceeds permissible load of {permissible} kg")]
    CapacityExceeded {
        unit_id: String,
        weight: f64,
        permissible: f64,
    },

    #[error("Ship at full capacity ({capacity} units)")]
    VesselFull { capacity: usize },

    #[error("Exceeds vessel's weight limit: {total_tons} t would exceed {limit_tons} t")]
    VesselOverweight { total_tons: f64, limit_tons: f64 },

    #[error("Invalid load weight {weight} for unit {unit_id}")]
    InvalidLoad { unit_id: String, weight: f64 },

    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("A cargo unit with ID {unit_id} already exists")]
    DuplicateUnit { unit_id: String },

    #[error("No ship at position {}", .index + 1)]
    UnknownVessel { index: usize },

    #[error("No cargo unit at position {}", .index + 1)]
    UnknownUnit { index: usize },

    #[error("No ships are registered")]
    NoVessels,

    #[error("No unassigned cargo units are available")]
    NoCargo,

    #[error("Animal {id} not found")]
    AnimalNotFound { id: i32 },

    #[error("Animal {id} already exists")]
    DuplicateAnimal { id: i32 },

    #[error("Visit {id} already exists")]
    DuplicateVisit { id: i32 },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Cargo,
    Input,
    Registry,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FleetError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FleetError::CapacityExceeded { .. }
            | FleetError::VesselFull { .. }
            | FleetError::VesselOverweight { .. }
            | FleetError::InvalidLoad { .. }
            | FleetError::DuplicateUnit { .. }
            | FleetError::NoVessels
            | FleetError::NoCargo => ErrorCategory::Cargo,
            FleetError::InvalidInput { .. }
            | FleetError::UnknownVessel { .. }
            | FleetError::UnknownUnit { .. } => ErrorCategory::Input,
            FleetError::AnimalNotFound { .. }
            | FleetError::DuplicateAnimal { .. }
            | FleetError::DuplicateVisit { .. } => ErrorCategory::Registry,
            FleetError::ConfigValidationError { .. }
            | FleetError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            FleetError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Cargo | ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Registry => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FleetError::CapacityExceeded { unit_id, .. } => {
                format!("Cargo unit {} cannot take that much load", unit_id)
            }
            FleetError::VesselFull { .. } => "The ship cannot carry any more units".to_string(),
            FleetError::VesselOverweight { .. } => {
                "The ship would exceed its weight limit".to_string()
            }
            FleetError::ConfigValidationError { field, .. }
            | FleetError::InvalidConfigValueError { field, .. } => {
                format!("Configuration problem in '{}': {}", field, self)
            }
            FleetError::IoError(e) => format!("System I/O failure: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FleetError::CapacityExceeded { .. } | FleetError::InvalidLoad { .. } => {
                "Use a non-negative weight within the unit's permissible load"
            }
            FleetError::VesselFull { .. } => "Remove a unit first or choose another ship",
            FleetError::VesselOverweight { .. } => {
                "Empty the unit or choose a ship with a higher weight limit"
            }
            FleetError::InvalidInput { .. } => "Check the value and try again",
            FleetError::DuplicateUnit { .. } => "Pick an ID that is not in use",
            FleetError::UnknownVessel { .. } | FleetError::UnknownUnit { .. } => {
                "Choose a number from the list shown"
            }
            FleetError::NoVessels => "Register a ship first",
            FleetError::NoCargo => "Create a cargo unit first",
            FleetError::AnimalNotFound { .. } => "Check the animal ID",
            FleetError::DuplicateAnimal { .. } | FleetError::DuplicateVisit { .. } => {
                "Use an unused ID or update the existing record"
            }
            FleetError::ConfigValidationError { .. } | FleetError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command-line flags"
            }
            FleetError::IoError(_) => "Check file permissions and available resources",
        }
    }
}

pub type Result<T> = std::result::Result<T, FleetError>;
