//! # Slab Estimation
//!
//! Floor slabs are measured by plan area and thickness. The two-way bar grid
//! is laid out over a square of the same area, which keeps the input to a
//! single area figure instead of separate spans; a lap-and-wastage factor
//! covers cut losses.

use crate::config::GlobalConfig;
use crate::inputs::FieldReader;
use crate::materials::Medium;
use crate::units::{Feet, Kilograms, SqFt};

use super::Takeoff;

/// Lap splices and cutting wastage on slab mesh bars.
const LAP_AND_WASTAGE: f64 = 1.1;

/// Input parameters for a floor slab.
#[derive(Debug, Clone, PartialEq)]
pub struct SlabInput {
    /// Plan area in square feet
    pub area_sft: f64,
    /// Thickness in inches
    pub thickness_in: f64,
    /// Mesh bar diameter in mm
    pub bar_dia_mm: f64,
    /// Grid spacing in inches
    pub bar_spacing_in: f64,
}

impl SlabInput {
    pub(crate) fn from_fields(fields: &FieldReader<'_>) -> Self {
        SlabInput {
            area_sft: fields.num("area"),
            thickness_in: fields.num("thickness"),
            bar_dia_mm: fields.num("rod_dia"),
            bar_spacing_in: fields.num("rod_spacing"),
        }
    }
}

pub(crate) fn take_off(input: &SlabInput, config: &GlobalConfig) -> Takeoff {
    let wet_volume = SqFt(input.area_sft) * Feet(input.thickness_in / 12.0);
    let dry_volume = wet_volume.value() * config.dry_coeff_concrete;

    // Square approximation of the plan for the grid layout.
    let side_ft = input.area_sft.max(0.0).sqrt();
    let spacing_ft = input.bar_spacing_in / 12.0;
    let bars_per_side = (side_ft / spacing_ft).floor() + 1.0;
    let total_length_ft = bars_per_side * side_ft * 2.0;

    let weight = config.rod_weights.weight_kg_per_ft(input.bar_dia_mm);
    let steel = total_length_ft * LAP_AND_WASTAGE * weight;

    Takeoff {
        wet_volume,
        steel: Kilograms(steel),
        medium: Medium::Concrete,
        details: vec![
            format!("Wet Vol: {:.2} cft", wet_volume.value()),
            format!("Dry Vol: {:.2} cft", dry_volume),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimates::ElementType;
    use crate::inputs::InputMap;

    fn test_slab() -> SlabInput {
        SlabInput {
            area_sft: 1200.0,
            thickness_in: 5.0,
            bar_dia_mm: 10.0,
            bar_spacing_in: 6.0,
        }
    }

    #[test]
    fn test_slab_volume() {
        let takeoff = take_off(&test_slab(), &GlobalConfig::default());
        // 1200 * 5/12 = 500 cft.
        assert!((takeoff.wet_volume.value() - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_two_way_grid_steel() {
        let takeoff = take_off(&test_slab(), &GlobalConfig::default());
        let side = 1200.0f64.sqrt();
        let bars = (side / 0.5).floor() + 1.0;
        let expected = bars * side * 2.0 * 1.1 * 0.19;
        assert!((takeoff.steel.value() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_negative_area_stays_finite() {
        let mut input = test_slab();
        input.area_sft = -100.0;
        let takeoff = take_off(&input, &GlobalConfig::default());
        assert!(takeoff.steel.value().is_finite());
    }

    #[test]
    fn test_from_fields_defaults() {
        let map = InputMap::new();
        let fields = FieldReader::new(ElementType::Slab, &map);
        let input = SlabInput::from_fields(&fields);
        assert_eq!(input.bar_spacing_in, 6.0);
        assert_eq!(input.area_sft, 0.0);
    }
}
