//! # Lintel Estimation
//!
//! Small door/window lintels. Stirrups here are simple perimeter rings with
//! no cover deduction and no hook allowance, which is how site crews
//! commonly measure them for members this small.

use crate::config::GlobalConfig;
use crate::inputs::FieldReader;
use crate::materials::Medium;
use crate::units::{Cft, Kilograms};

use super::Takeoff;

/// Input parameters for a batch of lintels.
#[derive(Debug, Clone, PartialEq)]
pub struct LintelInput {
    /// Number of identical lintels
    pub count: f64,
    /// Span length in feet
    pub length_ft: f64,
    /// Section width in inches
    pub width_in: f64,
    /// Section thickness in inches
    pub thickness_in: f64,
    /// Main bar diameter in mm
    pub main_bar_dia_mm: f64,
    /// Number of main bars
    pub main_bar_count: f64,
    /// Stirrup bar diameter in mm
    pub stirrup_dia_mm: f64,
    /// Stirrup spacing in inches
    pub stirrup_spacing_in: f64,
}

impl LintelInput {
    pub(crate) fn from_fields(fields: &FieldReader<'_>) -> Self {
        LintelInput {
            count: fields.num("count"),
            length_ft: fields.num("length"),
            width_in: fields.num("width"),
            thickness_in: fields.num("thickness"),
            main_bar_dia_mm: fields.num("main_rod_dia"),
            main_bar_count: fields.num("main_rod_nos"),
            stirrup_dia_mm: fields.num("stirrup_dia"),
            stirrup_spacing_in: fields.num("stirrup_spacing"),
        }
    }
}

pub(crate) fn take_off(input: &LintelInput, config: &GlobalConfig) -> Takeoff {
    let wet_volume =
        input.length_ft * (input.width_in / 12.0) * (input.thickness_in / 12.0) * input.count;

    // Steel per lintel, scaled by count at the end.
    let main_weight = config.rod_weights.weight_kg_per_ft(input.main_bar_dia_mm);
    let main_steel = input.main_bar_count * input.length_ft * main_weight;

    let perimeter_ft = 2.0 * (input.width_in + input.thickness_in) / 12.0;
    let spacing_ft = input.stirrup_spacing_in / 12.0;
    let stirrup_count = (input.length_ft / spacing_ft).ceil();
    let stirrup_weight = config.rod_weights.weight_kg_per_ft(input.stirrup_dia_mm);
    let stirrup_steel = stirrup_count * perimeter_ft * stirrup_weight;

    Takeoff {
        wet_volume: Cft(wet_volume),
        steel: Kilograms((main_steel + stirrup_steel) * input.count),
        medium: Medium::Concrete,
        details: Vec::new(),
    }
}
