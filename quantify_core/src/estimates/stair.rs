//! # Staircase Estimation
//!
//! A flight is measured as the triangular step wedges plus the inclined
//! waist slab (hypotenuse length times width times waist thickness) plus any
//! landing. Steel uses a density proxy instead of a discrete bar takeoff:
//! the field set carries no stair bar inputs, so the estimate assumes a
//! typical reinforcement percentage of the concrete volume. This is the one
//! element measured that way; see DESIGN.md before changing it, since any
//! refinement shifts costs on existing projects.

use crate::config::GlobalConfig;
use crate::inputs::FieldReader;
use crate::materials::Medium;
use crate::units::{Cft, Kilograms};

use super::Takeoff;

/// Assumed reinforcement share of the wet concrete volume.
const STEEL_VOLUME_FRACTION: f64 = 0.012;

/// Steel mass per cft of reinforced volume at that share, kg.
const STEEL_DENSITY_KG_PER_CFT: f64 = 222.0;

/// Input parameters for one stair flight.
#[derive(Debug, Clone, PartialEq)]
pub struct StairInput {
    /// Number of steps in the flight
    pub steps: f64,
    /// Step width (flight width) in feet
    pub width_ft: f64,
    /// Riser height in inches
    pub riser_in: f64,
    /// Tread depth in inches
    pub tread_in: f64,
    /// Waist slab thickness in inches
    pub waist_in: f64,
    /// Landing plan area in square feet
    pub landing_area_sft: f64,
}

impl StairInput {
    pub(crate) fn from_fields(fields: &FieldReader<'_>) -> Self {
        StairInput {
            steps: fields.num("steps"),
            width_ft: fields.num("step_length"),
            riser_in: fields.num("riser"),
            tread_in: fields.num("tread"),
            waist_in: fields.num("waist_thickness"),
            landing_area_sft: fields.num("landing_area"),
        }
    }
}

pub(crate) fn take_off(input: &StairInput, _config: &GlobalConfig) -> Takeoff {
    let riser_ft = input.riser_in / 12.0;
    let tread_ft = input.tread_in / 12.0;
    let waist_ft = input.waist_in / 12.0;

    let step_volume = 0.5 * riser_ft * tread_ft * input.width_ft;
    let steps_volume = step_volume * input.steps;

    let step_hypotenuse_ft = (riser_ft.powi(2) + tread_ft.powi(2)).sqrt();
    let waist_length_ft = step_hypotenuse_ft * input.steps;
    let waist_volume = waist_length_ft * input.width_ft * waist_ft;

    let landing_volume = input.landing_area_sft * waist_ft;

    let wet_volume = steps_volume + waist_volume + landing_volume;
    let steel = wet_volume * STEEL_VOLUME_FRACTION * STEEL_DENSITY_KG_PER_CFT;

    Takeoff {
        wet_volume: Cft(wet_volume),
        steel: Kilograms(steel),
        medium: Medium::Concrete,
        details: vec![format!("Wet Vol: {:.2} cft", wet_volume)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimates::ElementType;
    use crate::inputs::InputMap;

    fn test_stair() -> StairInput {
        StairInput {
            steps: 10.0,
            width_ft: 4.0,
            riser_in: 6.0,
            tread_in: 10.0,
            waist_in: 6.0,
            landing_area_sft: 16.0,
        }
    }

    #[test]
    fn test_flight_volume() {
        let takeoff = take_off(&test_stair(), &GlobalConfig::default());
        // Steps: 10 * 0.5 * 0.5 * (10/12) * 4 = 8.3333 cft.
        // Waist: sqrt(0.25 + 0.69444) * 10 * 4 * 0.5 = 19.4365 cft.
        // Landing: 16 * 0.5 = 8 cft.
        let steps = 10.0 * 0.5 * 0.5 * (10.0 / 12.0) * 4.0;
        let waist = (0.5f64.powi(2) + (10.0f64 / 12.0).powi(2)).sqrt() * 10.0 * 4.0 * 0.5;
        let expected = steps + waist + 8.0;
        assert!((takeoff.wet_volume.value() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_steel_is_density_proxy() {
        let takeoff = take_off(&test_stair(), &GlobalConfig::default());
        let expected = takeoff.wet_volume.value() * 0.012 * 222.0;
        assert!((takeoff.steel.value() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_from_fields_reads_step_length_as_width() {
        let mut map = InputMap::new();
        map.insert("step_length".into(), 4.0.into());
        map.insert("steps".into(), 10.0.into());
        let fields = FieldReader::new(ElementType::Stair, &map);
        let input = StairInput::from_fields(&fields);
        assert_eq!(input.width_ft, 4.0);
        assert_eq!(input.steps, 10.0);
    }
}
