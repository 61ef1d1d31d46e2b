//! # Pile Estimation
//!
//! A cast-in-place pile is a full concrete cylinder; reinforcement is the
//! longitudinal cage plus a helical spiral, approximated here as stacked
//! circular rings at the given pitch.

use std::f64::consts::PI;

use crate::config::GlobalConfig;
use crate::inputs::FieldReader;
use crate::materials::Medium;
use crate::units::{Cft, Kilograms};

use super::Takeoff;

/// Input parameters for a group of identical piles.
#[derive(Debug, Clone, PartialEq)]
pub struct PileInput {
    /// Number of piles
    pub count: f64,
    /// Shaft diameter in inches
    pub diameter_in: f64,
    /// Shaft length in feet
    pub length_ft: f64,
    /// Clear cover in inches
    pub clear_cover_in: f64,
    /// Spiral pitch in inches
    pub spiral_pitch_in: f64,
    /// Main bar diameter in mm
    pub main_bar_dia_mm: f64,
    /// Number of main bars
    pub main_bar_count: f64,
    /// Spiral bar diameter in mm
    pub spiral_dia_mm: f64,
}

impl PileInput {
    pub(crate) fn from_fields(fields: &FieldReader<'_>) -> Self {
        PileInput {
            count: fields.num("count"),
            diameter_in: fields.num("diameter"),
            length_ft: fields.num("length"),
            clear_cover_in: fields.num("clear_cover"),
            spiral_pitch_in: fields.num("spiral_pitch"),
            main_bar_dia_mm: fields.num("main_rod_dia"),
            main_bar_count: fields.num("main_rod_nos"),
            spiral_dia_mm: fields.num("spiral_dia"),
        }
    }
}

pub(crate) fn take_off(input: &PileInput, config: &GlobalConfig) -> Takeoff {
    let dia_ft = input.diameter_in / 12.0;
    let volume_per_pile = PI * dia_ft.powi(2) * input.length_ft / 4.0;
    let wet_volume = volume_per_pile * input.count;
    let dry_volume = wet_volume * config.dry_coeff_concrete;

    let main_weight = config.rod_weights.weight_kg_per_ft(input.main_bar_dia_mm);
    let main_steel = input.main_bar_count * input.length_ft * main_weight * input.count;

    let pitch_ft = input.spiral_pitch_in / 12.0;
    let rings = (input.length_ft / pitch_ft).ceil();
    let spiral_dia_ft = dia_ft - 2.0 * input.clear_cover_in / 12.0;
    let spiral_length_ft = rings * PI * spiral_dia_ft;
    let spiral_weight = config.rod_weights.weight_kg_per_ft(input.spiral_dia_mm);
    let spiral_steel = spiral_length_ft * spiral_weight * input.count;

    Takeoff {
        wet_volume: Cft(wet_volume),
        steel: Kilograms(main_steel + spiral_steel),
        medium: Medium::Concrete,
        details: vec![
            format!("Wet Vol: {:.2} cft", wet_volume),
            format!("Dry Vol: {:.2} cft", dry_volume),
        ],
    }
}
