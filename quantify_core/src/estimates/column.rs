//! # Column Estimation
//!
//! Rectangular and short columns share one formula: section in inches, clear
//! height in feet, rectangular ties bent around the main cage. Circular
//! columns swap the ties for a continuous spiral whose length uses the exact
//! helix formula per turn.

use std::f64::consts::PI;

use crate::config::GlobalConfig;
use crate::inputs::FieldReader;
use crate::materials::Medium;
use crate::units::{Cft, Kilograms};

use super::Takeoff;

/// Input parameters for rectangular (and short) columns.
#[derive(Debug, Clone, PartialEq)]
pub struct RectColumnInput {
    /// Number of identical columns
    pub count: f64,
    /// Section length in inches
    pub length_in: f64,
    /// Section width in inches
    pub width_in: f64,
    /// Clear height in feet
    pub height_ft: f64,
    /// Clear cover in inches
    pub clear_cover_in: f64,
    /// Main bar diameter in mm
    pub main_bar_dia_mm: f64,
    /// Number of main bars
    pub main_bar_count: f64,
    /// Tie bar diameter in mm
    pub tie_dia_mm: f64,
    /// Tie spacing in inches
    pub tie_spacing_in: f64,
}

impl RectColumnInput {
    pub(crate) fn from_fields(fields: &FieldReader<'_>) -> Self {
        RectColumnInput {
            count: fields.num("count"),
            length_in: fields.num("length"),
            width_in: fields.num("width"),
            height_ft: fields.num("height"),
            clear_cover_in: fields.num("clear_cover"),
            main_bar_dia_mm: fields.num("main_rod_dia"),
            main_bar_count: fields.num("main_rod_nos"),
            tie_dia_mm: fields.num("tie_dia"),
            tie_spacing_in: fields.num("tie_spacing"),
        }
    }
}

pub(crate) fn take_off_rect(input: &RectColumnInput, config: &GlobalConfig) -> Takeoff {
    let section_sft = input.length_in * input.width_in / 144.0;
    let wet_volume = section_sft * input.height_ft * input.count;

    let main_weight = config.rod_weights.weight_kg_per_ft(input.main_bar_dia_mm);
    let main_steel = input.main_bar_count * input.height_ft * main_weight * input.count;

    // Tie perimeter: section perimeter less the cover at each of the four
    // corners (two legs per corner).
    let perimeter_ft =
        ((input.length_in + input.width_in) * 2.0 - 8.0 * input.clear_cover_in) / 12.0;
    let spacing_ft = input.tie_spacing_in / 12.0;
    let tie_count = (input.height_ft / spacing_ft).ceil() + 1.0;
    let tie_weight = config.rod_weights.weight_kg_per_ft(input.tie_dia_mm);
    let tie_steel = tie_count * perimeter_ft * tie_weight * input.count;

    Takeoff {
        wet_volume: Cft(wet_volume),
        steel: Kilograms(main_steel + tie_steel),
        medium: Medium::Concrete,
        details: vec![format!("Wet Vol: {:.2} cft", wet_volume)],
    }
}

/// Input parameters for circular columns with spiral reinforcement.
#[derive(Debug, Clone, PartialEq)]
pub struct CircularColumnInput {
    /// Number of identical columns
    pub count: f64,
    /// Section diameter in inches
    pub diameter_in: f64,
    /// Clear height in feet
    pub height_ft: f64,
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

impl CircularColumnInput {
    pub(crate) fn from_fields(fields: &FieldReader<'_>) -> Self {
        CircularColumnInput {
            count: fields.num("count"),
            diameter_in: fields.num("diameter"),
            height_ft: fields.num("height"),
            clear_cover_in: fields.num("clear_cover"),
            spiral_pitch_in: fields.num("spiral_pitch"),
            main_bar_dia_mm: fields.num("main_rod_dia"),
            main_bar_count: fields.num("main_rod_nos"),
            spiral_dia_mm: fields.num("spiral_dia"),
        }
    }
}

pub(crate) fn take_off_circular(input: &CircularColumnInput, config: &GlobalConfig) -> Takeoff {
    let dia_ft = input.diameter_in / 12.0;
    let section_sft = PI * dia_ft * dia_ft / 4.0;
    let wet_volume = section_sft * input.height_ft * input.count;

    let main_weight = config.rod_weights.weight_kg_per_ft(input.main_bar_dia_mm);
    let main_steel = input.main_bar_count * input.height_ft * main_weight * input.count;

    let pitch_ft = input.spiral_pitch_in / 12.0;
    let core_dia_ft = dia_ft - 2.0 * input.clear_cover_in / 12.0;
    let turns = input.height_ft / pitch_ft;
    let circumference = PI * core_dia_ft;
    // Exact helix length per turn: sqrt((pi * D)^2 + pitch^2).
    let length_per_turn = (circumference.powi(2) + pitch_ft.powi(2)).sqrt();
    let spiral_length_ft = turns * length_per_turn;
    let spiral_weight = config.rod_weights.weight_kg_per_ft(input.spiral_dia_mm);
    let spiral_steel = spiral_length_ft * spiral_weight * input.count;

    Takeoff {
        wet_volume: Cft(wet_volume),
        steel: Kilograms(main_steel + spiral_steel),
        medium: Medium::Concrete,
        details: vec![
            format!("Vol: {:.2} cft", wet_volume),
            format!("Spiral Len: {:.1} ft", spiral_length_ft),
        ],
    }
}
