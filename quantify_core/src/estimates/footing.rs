//! # Footing Estimation
//!
//! Box footings are plain rectangular pads. Trapezoidal footings add a
//! sloped frustum on top of the rectangular base, measured with the
//! prismoidal formula. Both reinforce with a two-way bottom mesh; the sloped
//! portion's inclined steel is not taken off separately.

use crate::config::GlobalConfig;
use crate::inputs::FieldReader;
use crate::materials::Medium;
use crate::units::{Cft, Kilograms};

use super::Takeoff;

/// Input parameters for rectangular pad footings.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxFootingInput {
    /// Number of identical footings
    pub count: f64,
    /// Pad length in feet
    pub length_ft: f64,
    /// Pad breadth in feet
    pub breadth_ft: f64,
    /// Pad thickness in inches
    pub thickness_in: f64,
    /// Clear cover in inches
    pub clear_cover_in: f64,
    /// Long-direction bar diameter in mm
    pub long_bar_dia_mm: f64,
    /// Long-direction bar spacing in inches
    pub long_bar_spacing_in: f64,
    /// Short-direction bar diameter in mm
    pub short_bar_dia_mm: f64,
    /// Short-direction bar spacing in inches
    pub short_bar_spacing_in: f64,
}

impl BoxFootingInput {
    pub(crate) fn from_fields(fields: &FieldReader<'_>) -> Self {
        BoxFootingInput {
            count: fields.num("count"),
            length_ft: fields.num("length"),
            breadth_ft: fields.num("breadth"),
            thickness_in: fields.num("thickness"),
            clear_cover_in: fields.num("clear_cover"),
            long_bar_dia_mm: fields.num("long_rod_dia"),
            long_bar_spacing_in: fields.num("long_rod_spacing"),
            short_bar_dia_mm: fields.num("short_rod_dia"),
            short_bar_spacing_in: fields.num("short_rod_spacing"),
        }
    }
}

pub(crate) fn take_off_box(input: &BoxFootingInput, config: &GlobalConfig) -> Takeoff {
    let thickness_ft = input.thickness_in / 12.0;
    let wet_volume = input.length_ft * input.breadth_ft * thickness_ft * input.count;

    let cover_ft = input.clear_cover_in / 12.0;
    let long_span_ft = input.length_ft - 2.0 * cover_ft;
    let short_span_ft = input.breadth_ft - 2.0 * cover_ft;

    // Bars in each direction are spread across the opposite clear span.
    let long_spacing_ft = input.long_bar_spacing_in / 12.0;
    let short_spacing_ft = input.short_bar_spacing_in / 12.0;
    let long_bars = (short_span_ft / long_spacing_ft).floor() + 1.0;
    let short_bars = (long_span_ft / short_spacing_ft).floor() + 1.0;

    let long_weight = config.rod_weights.weight_kg_per_ft(input.long_bar_dia_mm);
    let short_weight = config.rod_weights.weight_kg_per_ft(input.short_bar_dia_mm);
    let long_steel = long_bars * long_span_ft * long_weight;
    let short_steel = short_bars * short_span_ft * short_weight;

    Takeoff {
        wet_volume: Cft(wet_volume),
        steel: Kilograms((long_steel + short_steel) * input.count),
        medium: Medium::Concrete,
        details: vec![
            format!(
                "Long Bars: {} nos @ {}\" c/c",
                long_bars, input.long_bar_spacing_in
            ),
            format!(
                "Short Bars: {} nos @ {}\" c/c",
                short_bars, input.short_bar_spacing_in
            ),
        ],
    }
}

/// Input parameters for trapezoidal (sloped) footings.
#[derive(Debug, Clone, PartialEq)]
pub struct TrapezoidalFootingInput {
    /// Number of identical footings
    pub count: f64,
    /// Bottom length in feet
    pub length_ft: f64,
    /// Bottom breadth in feet
    pub breadth_ft: f64,
    /// Top length in inches
    pub top_length_in: f64,
    /// Top breadth in inches
    pub top_breadth_in: f64,
    /// Height of the rectangular base in inches
    pub rect_height_in: f64,
    /// Height of the sloped portion in inches
    pub slope_height_in: f64,
    /// Mesh bar diameter in mm
    pub bar_dia_mm: f64,
    /// Mesh bar spacing in inches
    pub bar_spacing_in: f64,
    /// Clear cover in inches
    pub clear_cover_in: f64,
}

impl TrapezoidalFootingInput {
    pub(crate) fn from_fields(fields: &FieldReader<'_>) -> Self {
        TrapezoidalFootingInput {
            count: fields.num("count"),
            length_ft: fields.num("length"),
            breadth_ft: fields.num("breadth"),
            top_length_in: fields.num("top_length"),
            top_breadth_in: fields.num("top_breadth"),
            rect_height_in: fields.num("rect_height"),
            slope_height_in: fields.num("slope_height"),
            bar_dia_mm: fields.num("rod_dia"),
            bar_spacing_in: fields.num("rod_spacing"),
            clear_cover_in: fields.num("clear_cover"),
        }
    }
}

pub(crate) fn take_off_trapezoidal(
    input: &TrapezoidalFootingInput,
    config: &GlobalConfig,
) -> Takeoff {
    let top_length_ft = input.top_length_in / 12.0;
    let top_breadth_ft = input.top_breadth_in / 12.0;
    let rect_height_ft = input.rect_height_in / 12.0;
    let slope_height_ft = input.slope_height_in / 12.0;

    let rect_volume = input.length_ft * input.breadth_ft * rect_height_ft;

    // Prismoidal formula for the frustum between the two plan areas.
    let bottom_area = input.length_ft * input.breadth_ft;
    let top_area = top_length_ft * top_breadth_ft;
    let mean_area = (bottom_area * top_area).max(0.0).sqrt();
    let slope_volume = slope_height_ft / 3.0 * (bottom_area + top_area + mean_area);

    let wet_volume = (rect_volume + slope_volume) * input.count;

    // Bottom mesh only; one diameter and spacing both ways.
    let cover_ft = input.clear_cover_in / 12.0;
    let clear_length_ft = input.length_ft - 2.0 * cover_ft;
    let clear_breadth_ft = input.breadth_ft - 2.0 * cover_ft;
    let spacing_ft = input.bar_spacing_in / 12.0;
    let bars_along_length = (clear_breadth_ft / spacing_ft).floor() + 1.0;
    let bars_along_breadth = (clear_length_ft / spacing_ft).floor() + 1.0;

    let weight = config.rod_weights.weight_kg_per_ft(input.bar_dia_mm);
    let mesh_steel =
        bars_along_length * clear_length_ft * weight + bars_along_breadth * clear_breadth_ft * weight;

    Takeoff {
        wet_volume: Cft(wet_volume),
        steel: Kilograms(mesh_steel * input.count),
        medium: Medium::Concrete,
        details: vec![
            format!("Rect Vol: {:.2} cft", rect_volume),
            format!("Slope Vol: {:.2} cft", slope_volume),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimates::ElementType;
    use crate::inputs::{FieldValue, InputMap};

    fn test_box() -> BoxFootingInput {
        BoxFootingInput {
            count: 1.0,
            length_ft: 6.0,
            breadth_ft: 6.0,
            thickness_in: 18.0,
            clear_cover_in: 3.0,
            long_bar_dia_mm: 16.0,
            long_bar_spacing_in: 5.0,
            short_bar_dia_mm: 16.0,
            short_bar_spacing_in: 6.0,
        }
    }

    #[test]
    fn test_box_volume() {
        let takeoff = take_off_box(&test_box(), &GlobalConfig::default());
        // 6 x 6 x 1.5 = 54 cft.
        assert!((takeoff.wet_volume.value() - 54.0).abs() < 1e-9);
    }

    #[test]
    fn test_box_two_way_mesh() {
        let takeoff = take_off_box(&test_box(), &GlobalConfig::default());
        // Clear span both ways: 6 - 0.5 = 5.5 ft.
        // Long bars: floor(5.5 / (5/12)) + 1 = 14; short: floor(5.5 / 0.5) + 1 = 12.
        let expected = 14.0 * 5.5 * 0.48 + 12.0 * 5.5 * 0.48;
        assert!((takeoff.steel.value() - expected).abs() < 1e-9);
        assert!(takeoff.details[0].contains("14 nos"));
        assert!(takeoff.details[1].contains("12 nos"));
    }

    #[test]
    fn test_box_zero_spacing_guarded() {
        let mut map = InputMap::new();
        map.insert("length".into(), FieldValue::Number(6.0));
        map.insert("breadth".into(), FieldValue::Number(6.0));
        map.insert("thickness".into(), FieldValue::Number(18.0));
        map.insert("long_rod_spacing".into(), FieldValue::Number(0.0));
        map.insert("long_rod_dia".into(), FieldValue::from("16"));
        map.insert("short_rod_dia".into(), FieldValue::from("16"));
        let fields = FieldReader::new(ElementType::FootingBox, &map);
        let input = BoxFootingInput::from_fields(&fields);
        assert_eq!(input.long_bar_spacing_in, 5.0);

        let takeoff = take_off_box(&input, &GlobalConfig::default());
        assert!(takeoff.steel.value().is_finite());
        assert!(takeoff.steel.value() > 0.0);
    }

    fn test_trapezoidal() -> TrapezoidalFootingInput {
        TrapezoidalFootingInput {
            count: 1.0,
            length_ft: 6.0,
            breadth_ft: 6.0,
            top_length_in: 18.0,
            top_breadth_in: 18.0,
            rect_height_in: 12.0,
            slope_height_in: 12.0,
            bar_dia_mm: 16.0,
            bar_spacing_in: 5.0,
            clear_cover_in: 3.0,
        }
    }

    #[test]
    fn test_trapezoidal_volume() {
        let takeoff = take_off_trapezoidal(&test_trapezoidal(), &GlobalConfig::default());
        // Rect: 6*6*1 = 36. Frustum: (1/3)*(36 + 2.25 + sqrt(81)) = 15.75.
        assert!((takeoff.wet_volume.value() - 51.75).abs() < 1e-9);
        assert!(takeoff.details[0].starts_with("Rect Vol:"));
        assert!(takeoff.details[1].starts_with("Slope Vol:"));
    }

    #[test]
    fn test_trapezoidal_mesh_uses_single_spacing() {
        let takeoff = take_off_trapezoidal(&test_trapezoidal(), &GlobalConfig::default());
        // Clear span 5.5 ft both ways, spacing 5/12 ft: 14 bars each way.
        let expected = 2.0 * (14.0 * 5.5 * 0.48);
        assert!((takeoff.steel.value() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_plan_area_stays_finite() {
        let mut input = test_trapezoidal();
        input.top_length_in = -18.0;
        let takeoff = take_off_trapezoidal(&input, &GlobalConfig::default());
        assert!(takeoff.wet_volume.value().is_finite());
    }
}
