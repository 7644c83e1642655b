//! Scoring profiles
//!
//! A profile holds every constant of the coherence index: criterion weights,
//! the step tables that turn signal counts into scores, the risk bands, and
//! the thresholds for warnings and brakes. Profiles are immutable values passed
//! into scoring, so several index versions can coexist.
//!
//! Weights are stored as basis points and must add up to exactly 10 000.
//!
//! ```
//! use coherence_engine::profile::ScoringProfile;
//!
//! let profile = ScoringProfile::from_toml_str(r#"
//!     name = "ICI v7 (strict)"
//!
//!     [bands]
//!     very_high_below = 55.0
//!     high_below = 70.0
//!     medium_below = 85.0
//! "#).unwrap();
//!
//! assert_eq!(profile.bands.medium_below, 85.0);
//! assert_eq!(profile.weights.total(), 10_000);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use shared_types::CriterionId;
use thiserror::Error;

/// Total of a valid weight table, in basis points
pub const WEIGHT_SCALE: u32 = 10_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid profile: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringProfile {
    pub name: String,
    pub weights: Weights,
    pub steps: StepTables,
    pub bands: RiskBands,
    pub warnings: WarningThresholds,
    pub brakes: BrakeThresholds,
}

/// Criterion weights in basis points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Weights {
    pub c1: u32,
    pub c2: u32,
    pub c3: u32,
    pub c4: u32,
    pub c5: u32,
    pub c6: u32,
    pub c7: u32,
    pub c13: u32,
}

/// Score assigned to each signal-count tier
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StepTables {
    /// Distinct evidentiary types: 0, 1, 2, 3, 4+
    pub c1: [f64; 5],
    pub c2_base: f64,
    /// Added per reliability signal present
    pub c2_signal: f64,
    /// Added when contradictions are acknowledged
    pub c2_contradiction: f64,
    /// Distinct logical connectors: 0, 1, 2, 3, 4+
    pub c3: [f64; 5],
    /// Not mentioned, mentioned only, mentioned and analysed
    pub c4: [f64; 3],
    /// No signals, sparse, dense, unbalanced
    pub c5: [f64; 4],
    /// Circular, not circular
    pub c6: [f64; 2],
    /// Distinct motivation sections: 0, 1, 2, 3, 4+
    pub c7: [f64; 5],
    /// Independent corroborations: 0, 1, 2-3, 4+
    pub c13: [f64; 4],
}

/// Upper (exclusive) bounds of the first three risk bands
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RiskBands {
    pub very_high_below: f64,
    pub high_below: f64,
    pub medium_below: f64,
}

/// A criterion below its threshold appends a warning to the interpretation
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WarningThresholds {
    pub c1: f64,
    pub c4: f64,
    pub c5: f64,
    pub c6: f64,
    pub c7: f64,
    pub c13: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BrakeThresholds {
    pub c4: f64,
    pub c13: f64,
    pub index: f64,
}

impl ScoringProfile {
    /// The ICI v7 profile
    pub fn ici_v7() -> Self {
        Self {
            name: "ICI v7".to_string(),
            weights: Weights::default(),
            steps: StepTables::default(),
            bands: RiskBands::default(),
            warnings: WarningThresholds::default(),
            brakes: BrakeThresholds::default(),
        }
    }

    /// Loads and validates a profile from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates a profile from a TOML string.
    ///
    /// Omitted keys keep their ICI v7 values.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let profile: Self = toml::from_str(s)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Weight of a criterion as a fraction of one
    pub fn weight(&self, id: CriterionId) -> f64 {
        self.weights.basis_points(id) as f64 / WEIGHT_SCALE as f64
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for id in CriterionId::ALL {
            let points = self.weights.basis_points(id);
            if points > WEIGHT_SCALE {
                return Err(ConfigError::Invalid(format!(
                    "weight {} of {:?} exceeds {} basis points",
                    points, id, WEIGHT_SCALE
                )));
            }
        }

        let total = self.weights.total();
        if total != u64::from(WEIGHT_SCALE) {
            return Err(ConfigError::Invalid(format!(
                "weights add up to {} basis points, expected {}",
                total, WEIGHT_SCALE
            )));
        }

        for (table, value) in self.steps.values() {
            if !(0.0..=100.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "step value {} in {} is outside [0, 100]",
                    value, table
                )));
            }
        }

        let b = &self.bands;
        if !(0.0 < b.very_high_below && b.very_high_below < b.high_below
            && b.high_below < b.medium_below && b.medium_below <= 100.0)
        {
            return Err(ConfigError::Invalid(format!(
                "risk bands must increase within (0, 100]: {} / {} / {}",
                b.very_high_below, b.high_below, b.medium_below
            )));
        }

        Ok(())
    }
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::ici_v7()
    }
}

impl Weights {
    pub fn basis_points(&self, id: CriterionId) -> u32 {
        match id {
            CriterionId::C1 => self.c1,
            CriterionId::C2 => self.c2,
            CriterionId::C3 => self.c3,
            CriterionId::C4 => self.c4,
            CriterionId::C5 => self.c5,
            CriterionId::C6 => self.c6,
            CriterionId::C7 => self.c7,
            CriterionId::C13 => self.c13,
        }
    }

    /// Sum of all weights, widened so untrusted profiles cannot overflow it
    pub fn total(&self) -> u64 {
        CriterionId::ALL
            .iter()
            .map(|id| u64::from(self.basis_points(*id)))
            .sum()
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            c1: 1500,
            c2: 1500,
            c3: 1500,
            c4: 2000,
            c5: 1000,
            c6: 1000,
            c7: 500,
            c13: 1000,
        }
    }
}

impl StepTables {
    /// Every configured value, labelled by the table it belongs to
    fn values(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        let scalars = [
            ("c2_base", self.c2_base),
            ("c2_signal", self.c2_signal),
            ("c2_contradiction", self.c2_contradiction),
        ];
        let tables: [(&'static str, &[f64]); 7] = [
            ("c1", &self.c1),
            ("c3", &self.c3),
            ("c4", &self.c4),
            ("c5", &self.c5),
            ("c6", &self.c6),
            ("c7", &self.c7),
            ("c13", &self.c13),
        ];
        scalars.into_iter().chain(
            tables
                .into_iter()
                .flat_map(|(name, values)| values.iter().map(move |v| (name, *v))),
        )
    }
}

impl Default for StepTables {
    fn default() -> Self {
        Self {
            c1: [10.0, 40.0, 60.0, 75.0, 90.0],
            c2_base: 20.0,
            c2_signal: 20.0,
            c2_contradiction: 10.0,
            c3: [30.0, 55.0, 70.0, 80.0, 90.0],
            c4: [20.0, 40.0, 75.0],
            c5: [30.0, 55.0, 70.0, 80.0],
            c6: [60.0, 80.0],
            c7: [30.0, 50.0, 65.0, 75.0, 85.0],
            c13: [10.0, 40.0, 70.0, 90.0],
        }
    }
}

impl Default for RiskBands {
    fn default() -> Self {
        Self {
            very_high_below: 50.0,
            high_below: 65.0,
            medium_below: 80.0,
        }
    }
}

impl Default for WarningThresholds {
    fn default() -> Self {
        Self {
            c1: 30.0,
            c4: 40.0,
            c5: 40.0,
            c6: 60.0,
            c7: 50.0,
            c13: 40.0,
        }
    }
}

impl Default for BrakeThresholds {
    fn default() -> Self {
        Self {
            c4: 40.0,
            c13: 40.0,
            index: 40.0,
        }
    }
}
