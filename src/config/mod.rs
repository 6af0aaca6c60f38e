use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::errors::{ResidencyError, ResidencyResult};
use crate::fiscal::FIRST_FISCAL_YEAR;
use crate::residency::RESIDENCY_THRESHOLD_DAYS;

const DEFAULT_FORWARD_BUFFER_YEARS: i32 = 4;
const MAX_FORWARD_BUFFER_YEARS: i32 = 100;

/// Tunables for the year picker and the residency threshold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub first_fiscal_year: i32,
    pub forward_buffer_years: i32,
    pub residency_threshold_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            first_fiscal_year: FIRST_FISCAL_YEAR,
            forward_buffer_years: DEFAULT_FORWARD_BUFFER_YEARS,
            residency_threshold_days: RESIDENCY_THRESHOLD_DAYS,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> ResidencyResult<Self> {
        let data = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> ResidencyResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> ResidencyResult<()> {
        if self.residency_threshold_days == 0 {
            return Err(ResidencyError::InvalidInput(
                "residency_threshold_days must be at least 1".into(),
            ));
        }
        if !(0..=MAX_FORWARD_BUFFER_YEARS).contains(&self.forward_buffer_years) {
            return Err(ResidencyError::InvalidInput(format!(
                "forward_buffer_years must be between 0 and {MAX_FORWARD_BUFFER_YEARS}"
            )));
        }
        Ok(())
    }
}
