//! # Sunshade Estimation
//!
//! Cantilevered window shades. Main bars run out along the projection with
//! half a foot of anchorage back into the support; distribution bars run the
//! full length of the shade.

use crate::config::GlobalConfig;
use crate::inputs::FieldReader;
use crate::materials::Medium;
use crate::units::{Cft, Kilograms};

use super::Takeoff;

/// Anchorage added to each cantilever bar, in feet.
const ANCHORAGE_FT: f64 = 0.5;

/// Input parameters for a batch of sunshades.
#[derive(Debug, Clone, PartialEq)]
pub struct SunshadeInput {
    /// Number of identical shades
    pub count: f64,
    /// Shade length along the wall in feet
    pub length_ft: f64,
    /// Projection from the wall in inches
    pub projection_in: f64,
    /// Average slab thickness in inches
    pub avg_thickness_in: f64,
    /// Cantilever bar diameter in mm
    pub main_bar_dia_mm: f64,
    /// Cantilever bar spacing in inches
    pub main_spacing_in: f64,
    /// Distribution bar diameter in mm
    pub dist_bar_dia_mm: f64,
    /// Distribution bar spacing in inches
    pub dist_spacing_in: f64,
}

impl SunshadeInput {
    pub(crate) fn from_fields(fields: &FieldReader<'_>) -> Self {
        SunshadeInput {
            count: fields.num("count"),
            length_ft: fields.num("length"),
            projection_in: fields.num("projection"),
            avg_thickness_in: fields.num("avg_thickness"),
            main_bar_dia_mm: fields.num("main_rod_dia"),
            main_spacing_in: fields.num("main_rod_spacing"),
            dist_bar_dia_mm: fields.num("dist_rod_dia"),
            dist_spacing_in: fields.num("dist_rod_spacing"),
        }
    }
}

pub(crate) fn take_off(input: &SunshadeInput, config: &GlobalConfig) -> Takeoff {
    let projection_ft = input.projection_in / 12.0;
    let thickness_ft = input.avg_thickness_in / 12.0;
    let wet_volume = input.length_ft * projection_ft * thickness_ft * input.count;

    // Steel per shade, scaled by count at the end.
    let main_spacing_ft = input.main_spacing_in / 12.0;
    let main_bars = (input.length_ft / main_spacing_ft).ceil();
    let main_bar_length_ft = projection_ft + ANCHORAGE_FT;
    let main_weight = config.rod_weights.weight_kg_per_ft(input.main_bar_dia_mm);
    let main_steel = main_bars * main_bar_length_ft * main_weight;

    let dist_spacing_ft = input.dist_spacing_in / 12.0;
    let dist_bars = (projection_ft / dist_spacing_ft).ceil();
    let dist_weight = config.rod_weights.weight_kg_per_ft(input.dist_bar_dia_mm);
    let dist_steel = dist_bars * input.length_ft * dist_weight;

    Takeoff {
        wet_volume: Cft(wet_volume),
        steel: Kilograms((main_steel + dist_steel) * input.count),
        medium: Medium::Concrete,
        details: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimates::ElementType;
    use crate::inputs::InputMap;

    fn test_sunshade() -> SunshadeInput {
        SunshadeInput {
            count: 5.0,
            length_ft: 5.0,
            projection_in: 18.0,
            avg_thickness_in: 3.0,
            main_bar_dia_mm: 10.0,
            main_spacing_in: 6.0,
            dist_bar_dia_mm: 8.0,
            dist_spacing_in: 8.0,
        }
    }

    #[test]
    fn test_sunshade_volume() {
        let takeoff = take_off(&test_sunshade(), &GlobalConfig::default());
        // 5 * 1.5 * 0.25 * 5 = 9.375 cft.
        assert!((takeoff.wet_volume.value() - 9.375).abs() < 1e-9);
    }

    #[test]
    fn test_cantilever_and_distribution_steel() {
        let takeoff = take_off(&test_sunshade(), &GlobalConfig::default());
        // Main: ceil(5/0.5) = 10 bars of 1.5 + 0.5 = 2 ft at 0.19 kg/ft.
        // Dist: ceil(1.5/(8/12)) = 3 bars of 5 ft at 0.12 kg/ft.
        let per_shade = 10.0 * 2.0 * 0.19 + 3.0 * 5.0 * 0.12;
        assert!((takeoff.steel.value() - per_shade * 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_fields_defaults() {
        let map = InputMap::new();
        let fields = FieldReader::new(ElementType::Sunshade, &map);
        let input = SunshadeInput::from_fields(&fields);
        assert_eq!(input.main_bar_dia_mm, 10.0);
        assert_eq!(input.main_spacing_in, 6.0);
        assert_eq!(input.dist_bar_dia_mm, 8.0);
        assert_eq!(input.dist_spacing_in, 8.0);
    }
}
