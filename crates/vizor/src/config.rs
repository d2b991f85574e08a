//! Planning defaults stored in `defaults.yaml`
//!
//! These are household-wide assumptions used when a scenario document leaves
//! a value out. Only `cpi_rate` feeds the loader; the rest are starting
//! points for new models. `vizor defaults` prints the values in effect and
//! `vizor defaults --write` saves them for editing.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::loader::LoadError;

const DEFAULTS_FILE: &str = "defaults.yaml";

/// Typical annual costs offered when creating recurring expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypicalCosts {
    pub utilities: f64,
    pub household_expenses: f64,
    pub auto_insurance: f64,
    pub health_insurance: f64,
    pub homeowners_insurance: f64,
}

impl Default for TypicalCosts {
    fn default() -> Self {
        Self {
            utilities: 4_800.0,
            household_expenses: 12_000.0,
            auto_insurance: 1_800.0,
            health_insurance: 7_200.0,
            homeowners_insurance: 2_400.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlanningDefaults {
    /// Inflation reference rate in percent
    pub cpi_rate: f64,
    pub estimated_tax_rate: f64,
    pub typical_costs: TypicalCosts,
    pub retirement_growth_rate: f64,
    #[serde(rename = "socialSecurityCOLA")]
    pub social_security_cola: f64,
}

impl Default for PlanningDefaults {
    fn default() -> Self {
        Self {
            cpi_rate: 3.0,
            estimated_tax_rate: 22.0,
            typical_costs: TypicalCosts::default(),
            retirement_growth_rate: 7.0,
            social_security_cola: 2.5,
        }
    }
}

impl PlanningDefaults {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(DEFAULTS_FILE)
    }

    /// Load defaults from the data directory, falling back to built-in
    /// values when the file is missing or unreadable.
    pub fn load_or_default(data_dir: &Path) -> Self {
        let path = Self::path(data_dir);
        if !path.exists() {
            return Self::default();
        }

        let parsed: Result<Self, String> = std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|content| serde_saphyr::from_str(&content).map_err(|e| e.to_string()));

        match parsed {
            Ok(defaults) => defaults,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) -> Result<(), LoadError> {
        let yaml = serde_saphyr::to_string(self)
            .map_err(|e| LoadError::Serialize(format!("Failed to serialize defaults: {}", e)))?;

        std::fs::create_dir_all(data_dir)
            .map_err(|e| LoadError::Io(format!("Failed to create data directory: {}", e)))?;
        std::fs::write(Self::path(data_dir), yaml)
            .map_err(|e| LoadError::Io(format!("Failed to write defaults: {}", e)))
    }
}
