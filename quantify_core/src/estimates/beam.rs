//! # Beam Estimation
//!
//! Straight rectangular beams: section in inches, run in feet. Stirrups are
//! closed rings sized from the section less cover, with a 4 inch hook
//! allowance.

use crate::config::GlobalConfig;
use crate::inputs::FieldReader;
use crate::materials::Medium;
use crate::units::{Cft, Kilograms};

use super::Takeoff;

/// Hook allowance added to every stirrup ring, in inches.
const STIRRUP_HOOK_IN: f64 = 4.0;

/// Input parameters for a run of identical beams.
#[derive(Debug, Clone, PartialEq)]
pub struct BeamInput {
    /// Number of identical beams
    pub count: f64,
    /// Section width in inches
    pub width_in: f64,
    /// Section depth in inches
    pub depth_in: f64,
    /// Total length in feet
    pub length_ft: f64,
    /// Clear cover in inches
    pub clear_cover_in: f64,
    /// Main bar diameter in mm
    pub main_bar_dia_mm: f64,
    /// Number of main bars
    pub main_bar_count: f64,
    /// Stirrup bar diameter in mm
    pub stirrup_dia_mm: f64,
    /// Stirrup spacing in inches
    pub stirrup_spacing_in: f64,
}

impl BeamInput {
    pub(crate) fn from_fields(fields: &FieldReader<'_>) -> Self {
        BeamInput {
            count: fields.num("count"),
            width_in: fields.num("width"),
            depth_in: fields.num("depth"),
            length_ft: fields.num("length"),
            clear_cover_in: fields.num("clear_cover"),
            main_bar_dia_mm: fields.num("main_rod_dia"),
            main_bar_count: fields.num("main_rod_nos"),
            // Beam stirrups share the tie diameter field with columns.
            stirrup_dia_mm: fields.num("tie_dia"),
            stirrup_spacing_in: fields.num("stirrup_spacing"),
        }
    }
}

pub(crate) fn take_off(input: &BeamInput, config: &GlobalConfig) -> Takeoff {
    let wet_volume =
        input.length_ft * (input.width_in / 12.0) * (input.depth_in / 12.0) * input.count;

    let main_weight = config.rod_weights.weight_kg_per_ft(input.main_bar_dia_mm);
    let main_steel = input.main_bar_count * input.length_ft * main_weight * input.count;

    let ring_len_in = 2.0
        * ((input.width_in - 2.0 * input.clear_cover_in)
            + (input.depth_in - 2.0 * input.clear_cover_in))
        + STIRRUP_HOOK_IN;
    let ring_len_ft = ring_len_in / 12.0;

    let spacing_ft = input.stirrup_spacing_in / 12.0;
    let stirrup_count = (input.length_ft / spacing_ft).ceil() + 1.0;
    let stirrup_weight = config.rod_weights.weight_kg_per_ft(input.stirrup_dia_mm);
    let stirrup_steel = stirrup_count * ring_len_ft * stirrup_weight * input.count;

    Takeoff {
        wet_volume: Cft(wet_volume),
        steel: Kilograms(main_steel + stirrup_steel),
        medium: Medium::Concrete,
        details: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimates::ElementType;
    use crate::inputs::{FieldValue, InputMap};

    fn test_beam() -> BeamInput {
        BeamInput {
            count: 1.0,
            width_in: 10.0,
            depth_in: 18.0,
            length_ft: 15.0,
            clear_cover_in: 1.5,
            main_bar_dia_mm: 16.0,
            main_bar_count: 4.0,
            stirrup_dia_mm: 10.0,
            stirrup_spacing_in: 6.0,
        }
    }

    #[test]
    fn test_beam_volume() {
        let takeoff = take_off(&test_beam(), &GlobalConfig::default());
        // 15 * (10/12) * (18/12) = 18.75 cft.
        assert!((takeoff.wet_volume.value() - 18.75).abs() < 1e-9);
    }

    #[test]
    fn test_beam_steel() {
        let takeoff = take_off(&test_beam(), &GlobalConfig::default());
        // Main: 4 x 15 x 0.48 = 28.8 kg.
        // Ring: 2*((10-3)+(18-3))+4 = 48 in = 4 ft; ceil(15/0.5)+1 = 31 rings.
        let expected = 28.8 + 31.0 * 4.0 * 0.19;
        assert!((takeoff.steel.value() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_stirrup_dia_comes_from_tie_field() {
        let mut map = InputMap::new();
        map.insert("width".into(), FieldValue::Number(10.0));
        map.insert("depth".into(), FieldValue::Number(18.0));
        map.insert("length".into(), FieldValue::Number(15.0));
        map.insert("tie_dia".into(), FieldValue::from("10"));
        let fields = FieldReader::new(ElementType::Beam, &map);
        let input = BeamInput::from_fields(&fields);
        assert_eq!(input.stirrup_dia_mm, 10.0);
        assert_eq!(input.stirrup_spacing_in, 6.0);
    }

    #[test]
    fn test_no_details_for_beams() {
        let takeoff = take_off(&test_beam(), &GlobalConfig::default());
        assert!(takeoff.details.is_empty());
    }
}
