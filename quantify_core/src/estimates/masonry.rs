//! # Masonry Estimation
//!
//! Brick walls and plaster coats. Both are mortar work: the mix allocates to
//! cement and sand only, with the brick count reported alongside for walls.

use crate::config::GlobalConfig;
use crate::inputs::FieldReader;
use crate::materials::Medium;
use crate::units::{Cft, Feet, Kilograms, Millimeters, SqFt};

use super::Takeoff;

/// Share of a brick wall's volume that is mortar bedding.
const MORTAR_FRACTION: f64 = 0.30;

/// Nominal brick including its mortar joint, in inches.
const BRICK_LENGTH_IN: f64 = 9.5;
const BRICK_WIDTH_IN: f64 = 4.5;
const BRICK_HEIGHT_IN: f64 = 2.75;

/// Input parameters for a run of brick wall.
#[derive(Debug, Clone, PartialEq)]
pub struct BrickWorkInput {
    /// Gross wall area in square feet
    pub area_sft: f64,
    /// Wall thickness in inches (5 for half brick, 10 for full)
    pub thickness_in: f64,
    /// Door/window openings to deduct, in square feet
    pub opening_deduction_sft: f64,
}

impl BrickWorkInput {
    pub(crate) fn from_fields(fields: &FieldReader<'_>) -> Self {
        BrickWorkInput {
            area_sft: fields.num("area"),
            thickness_in: fields.num("thickness"),
            opening_deduction_sft: fields.num("opening_deduction"),
        }
    }
}

pub(crate) fn take_off_brick(input: &BrickWorkInput, _config: &GlobalConfig) -> Takeoff {
    let net_area_sft = input.area_sft - input.opening_deduction_sft;
    let wall_volume = SqFt(net_area_sft) * Feet(input.thickness_in / 12.0);

    let wet_mortar_volume = wall_volume.value() * MORTAR_FRACTION;

    let brick_volume_cft = BRICK_LENGTH_IN * BRICK_WIDTH_IN * BRICK_HEIGHT_IN / 1728.0;
    let brick_mass_volume = wall_volume.value() - wet_mortar_volume;
    let brick_count = brick_mass_volume / brick_volume_cft;

    Takeoff {
        wet_volume: Cft(wet_mortar_volume),
        steel: Kilograms(0.0),
        medium: Medium::BrickMortar,
        details: vec![
            format!("Wall Vol: {:.1} cft", wall_volume.value()),
            format!("Est. Bricks: {} Nos", brick_count.ceil()),
        ],
    }
}

/// Input parameters for a plaster coat.
#[derive(Debug, Clone, PartialEq)]
pub struct PlasterInput {
    /// Surface area in square feet
    pub area_sft: f64,
    /// Coat thickness in millimeters
    pub thickness_mm: f64,
}

impl PlasterInput {
    pub(crate) fn from_fields(fields: &FieldReader<'_>) -> Self {
        PlasterInput {
            area_sft: fields.num("area"),
            thickness_mm: fields.num("thickness"),
        }
    }
}

pub(crate) fn take_off_plaster(input: &PlasterInput, _config: &GlobalConfig) -> Takeoff {
    let thickness: Feet = Millimeters(input.thickness_mm).into();
    let wet_volume = SqFt(input.area_sft) * thickness;

    Takeoff {
        wet_volume,
        steel: Kilograms(0.0),
        medium: Medium::Plaster,
        details: Vec::new(),
    }
}
