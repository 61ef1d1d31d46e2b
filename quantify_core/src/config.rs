//! # Engine Configuration
//!
//! [`GlobalConfig`] bundles every constant a calculation needs: cement bag
//! volume, dry-volume coefficients, the rod-weight table, and unit rates.
//!
//! The config is an explicit value passed into each calculation call, never a
//! hidden global. It is immutable for the duration of a calculation but may
//! be swapped wholesale between calls, so rate sets for different regions can
//! run side by side.
//!
//! ## Example
//!
//! ```rust
//! use quantify_core::config::GlobalConfig;
//!
//! let config = GlobalConfig::default();
//! assert_eq!(config.cement_bag_volume_cft, 1.25);
//! assert_eq!(config.rates.cement_per_bag, 550.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::materials::{Medium, RodWeightTable};

/// Unit purchase rates in the working currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rates {
    /// Price per 50 kg cement bag
    pub cement_per_bag: f64,
    /// Price per cft of sand
    pub sand_per_cft: f64,
    /// Price per cft of coarse aggregate
    pub aggregate_per_cft: f64,
    /// Price per kg of reinforcement steel
    pub steel_per_kg: f64,
}

impl Default for Rates {
    fn default() -> Self {
        Rates {
            cement_per_bag: 550.0,
            sand_per_cft: 45.0,
            aggregate_per_cft: 160.0,
            steel_per_kg: 95.0,
        }
    }
}

/// Process-wide constants for a single estimation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Loose volume of one 50 kg cement bag in cft
    pub cement_bag_volume_cft: f64,
    /// Dry-volume multiplier for concrete pours
    pub dry_coeff_concrete: f64,
    /// Dry-volume multiplier for brick-work mortar
    pub dry_coeff_mortar_brick: f64,
    /// Dry-volume multiplier for plaster mortar
    pub dry_coeff_mortar_plaster: f64,
    /// Bar diameter to kg/ft lookup
    pub rod_weights: RodWeightTable,
    /// Unit costing rates
    pub rates: Rates,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            cement_bag_volume_cft: 1.25,
            dry_coeff_concrete: 1.54,
            dry_coeff_mortar_brick: 1.33,
            dry_coeff_mortar_plaster: 1.33,
            rod_weights: RodWeightTable::default(),
            rates: Rates::default(),
        }
    }
}

impl GlobalConfig {
    /// Dry-volume coefficient for the given medium.
    pub fn dry_coefficient(&self, medium: Medium) -> f64 {
        match medium {
            Medium::Concrete => self.dry_coeff_concrete,
            Medium::BrickMortar => self.dry_coeff_mortar_brick,
            Medium::Plaster => self.dry_coeff_mortar_plaster,
        }
    }
}
