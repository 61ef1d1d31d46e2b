//! # Quantity Estimation
//!
//! The estimation engine: a stateless, pure mapping from a structural element
//! type plus an input map to a materials and cost breakdown.
//!
//! Each element type has its own module following the pattern:
//!
//! - `*Input` - typed parameters, built from a raw [`InputMap`] with schema
//!   fallbacks applied
//! - `take_off(input, config) -> Takeoff` - wet concrete/mortar volume plus
//!   reinforcement mass for that geometry
//!
//! A shared post-processing step then scales to dry volume, allocates the
//! mix across cement/sand/aggregate, converts cement to bags, and prices the
//! lot with ceiling rounding (materials are bought in whole units).
//!
//! ## Entry points
//!
//! - [`calculate`] - one element, one result
//! - [`grand_total`] - fold a project's saved items into a single summary
//!
//! Estimation never fails: malformed input degrades to zero quantities, and
//! every divisor that user input could zero out is floored beforehand. Given
//! identical inputs and config the output is bit-identical.
//!
//! ## Example
//!
//! ```rust
//! use quantify_core::config::GlobalConfig;
//! use quantify_core::estimates::{calculate, ElementType};
//! use quantify_core::inputs::InputMap;
//!
//! let mut inputs = InputMap::new();
//! inputs.insert("count".into(), 1.0.into());
//! inputs.insert("mix_ratio".into(), "1:2:4 (M15)".into());
//! inputs.insert("length".into(), 12.0.into());
//! inputs.insert("width".into(), 12.0.into());
//! inputs.insert("height".into(), 10.0.into());
//!
//! let result = calculate(ElementType::ColumnRectangular, &inputs, &GlobalConfig::default());
//! // 1 sft section over 10 ft is 10 cft wet, 15.4 cft dry.
//! assert!((result.cement_bags - 1.76).abs() < 0.005);
//! ```

pub mod beam;
pub mod column;
pub mod footing;
pub mod lintel;
pub mod masonry;
pub mod pile;
pub mod slab;
pub mod stair;
pub mod sunshade;

use serde::{Deserialize, Serialize};

use crate::config::GlobalConfig;
use crate::errors::{EngineError, EngineResult};
use crate::inputs::{FieldReader, InputMap};
use crate::materials::{Medium, MixRatio};
use crate::project::SavedItem;
use crate::units::{Cft, Kilograms};

pub use beam::BeamInput;
pub use column::{CircularColumnInput, RectColumnInput};
pub use footing::{BoxFootingInput, TrapezoidalFootingInput};
pub use lintel::LintelInput;
pub use masonry::{BrickWorkInput, PlasterInput};
pub use pile::PileInput;
pub use slab::SlabInput;
pub use stair::StairInput;
pub use sunshade::SunshadeInput;

/// The closed set of estimable structural elements.
///
/// Fixed by design: adding an element means adding a formula module, a field
/// table, and a dispatch arm, all checked exhaustively by the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ElementType {
    Pile,
    FootingBox,
    FootingTrapezoidal,
    ColumnRectangular,
    ColumnCircular,
    ColumnShort,
    Beam,
    Slab,
    Stair,
    Lintel,
    Sunshade,
    BrickWork,
    Plaster,
}

impl ElementType {
    /// All element types in display order.
    pub const ALL: [ElementType; 13] = [
        ElementType::Pile,
        ElementType::FootingBox,
        ElementType::FootingTrapezoidal,
        ElementType::ColumnRectangular,
        ElementType::ColumnCircular,
        ElementType::ColumnShort,
        ElementType::Beam,
        ElementType::Slab,
        ElementType::Stair,
        ElementType::Lintel,
        ElementType::Sunshade,
        ElementType::BrickWork,
        ElementType::Plaster,
    ];

    /// Short prefix used when auto-naming saved items (e.g. "C-3").
    pub fn code(&self) -> &'static str {
        match self {
            ElementType::Pile => "P",
            ElementType::FootingBox => "F",
            ElementType::FootingTrapezoidal => "TF",
            ElementType::ColumnRectangular => "C",
            ElementType::ColumnCircular => "CC",
            ElementType::ColumnShort => "SC",
            ElementType::Beam => "B",
            ElementType::Slab => "S",
            ElementType::Stair => "STR",
            ElementType::Lintel => "L",
            ElementType::Sunshade => "SS",
            ElementType::BrickWork => "BW",
            ElementType::Plaster => "PL",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ElementType::Pile => "Pile",
            ElementType::FootingBox => "Box Footing",
            ElementType::FootingTrapezoidal => "Trapezoidal Footing",
            ElementType::ColumnRectangular => "Rectangular Column",
            ElementType::ColumnCircular => "Circular Column",
            ElementType::ColumnShort => "Short Column",
            ElementType::Beam => "Beam",
            ElementType::Slab => "Slab",
            ElementType::Stair => "Staircase",
            ElementType::Lintel => "Lintel",
            ElementType::Sunshade => "Sunshade",
            ElementType::BrickWork => "Brick Work",
            ElementType::Plaster => "Plaster",
        }
    }

    /// Parse from common string representations: wire names ("FOOTING_BOX"),
    /// display names, or item codes ("TF").
    pub fn from_str_flexible(s: &str) -> EngineResult<Self> {
        let normalized = s.trim().to_uppercase().replace([' ', '-'], "_");
        for element in ElementType::ALL {
            if normalized == element.code()
                || normalized == wire_name(element)
                || normalized == element.display_name().to_uppercase().replace(' ', "_")
            {
                return Ok(element);
            }
        }
        Err(EngineError::unknown_element(s))
    }
}

fn wire_name(element: ElementType) -> &'static str {
    match element {
        ElementType::Pile => "PILE",
        ElementType::FootingBox => "FOOTING_BOX",
        ElementType::FootingTrapezoidal => "FOOTING_TRAPEZOIDAL",
        ElementType::ColumnRectangular => "COLUMN_RECTANGULAR",
        ElementType::ColumnCircular => "COLUMN_CIRCULAR",
        ElementType::ColumnShort => "COLUMN_SHORT",
        ElementType::Beam => "BEAM",
        ElementType::Slab => "SLAB",
        ElementType::Stair => "STAIR",
        ElementType::Lintel => "LINTEL",
        ElementType::Sunshade => "SUNSHADE",
        ElementType::BrickWork => "BRICK_WORK",
        ElementType::Plaster => "PLASTER",
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Materials and cost breakdown for one estimation.
///
/// All quantity fields are non-negative and rounded to 2 decimals. `details`
/// is informational text for display; nothing parses it back.
///
/// ## JSON Example
///
/// ```json
/// {
///   "cementBags": 1.76,
///   "sandCft": 4.4,
///   "aggregateCft": 8.8,
///   "steelKg": 18.36,
///   "totalCost": 4570.0,
///   "details": ["Wet Vol: 10.00 cft"]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationResult {
    /// Cement in 50 kg bags
    pub cement_bags: f64,
    /// Sand in cft
    pub sand_cft: f64,
    /// Coarse aggregate in cft
    pub aggregate_cft: f64,
    /// Reinforcement steel in kg
    pub steel_kg: f64,
    /// Purchase cost at the configured rates, whole units rounded up
    pub total_cost: f64,
    /// Human-readable computation notes
    pub details: Vec<String>,
}

/// Raw per-element takeoff before mix allocation and costing.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Takeoff {
    /// Wet concrete or mortar volume
    pub wet_volume: Cft,
    /// Total reinforcement mass
    pub steel: Kilograms,
    /// Selects the dry-volume coefficient and aggregate handling
    pub medium: Medium,
    /// Display notes accumulated while measuring
    pub details: Vec<String>,
}

/// Round to 2 decimals for display consistency.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Turn a takeoff into the final breakdown: dry-volume scaling, mix
/// allocation, bag conversion, and ceiling-priced costing.
fn finish(takeoff: Takeoff, mix: &MixRatio, config: &GlobalConfig) -> EstimationResult {
    let dry_volume = takeoff.wet_volume.value() * config.dry_coefficient(takeoff.medium);
    let ratio_sum = mix.total();

    // A zero (or negative) ratio sum allocates nothing rather than dividing.
    let (cement_cft, sand_cft, aggregate_cft) = if ratio_sum > 0.0 {
        (
            dry_volume * mix.cement / ratio_sum,
            dry_volume * mix.sand / ratio_sum,
            dry_volume * mix.aggregate / ratio_sum,
        )
    } else {
        (0.0, 0.0, 0.0)
    };

    let cement_bags = (cement_cft / config.cement_bag_volume_cft).max(0.0);
    let sand_cft = sand_cft.max(0.0);
    // Mortar media never carry coarse aggregate, whatever the mix says.
    let aggregate_cft = if takeoff.medium == Medium::Concrete {
        aggregate_cft.max(0.0)
    } else {
        0.0
    };
    let steel_kg = takeoff.steel.value().max(0.0);

    let rates = &config.rates;
    let total_cost = cement_bags.ceil() * rates.cement_per_bag
        + sand_cft.ceil() * rates.sand_per_cft
        + aggregate_cft.ceil() * rates.aggregate_per_cft
        + steel_kg.ceil() * rates.steel_per_kg;

    EstimationResult {
        cement_bags: round2(cement_bags),
        sand_cft: round2(sand_cft),
        aggregate_cft: round2(aggregate_cft),
        steel_kg: round2(steel_kg),
        total_cost: round2(total_cost),
        details: takeoff.details,
    }
}

/// Estimate materials and cost for one element.
///
/// Unrecognized keys in `inputs` are ignored; missing or unusable values
/// resolve to the field catalog's fallbacks. This function does not fail.
pub fn calculate(element: ElementType, inputs: &InputMap, config: &GlobalConfig) -> EstimationResult {
    let fields = FieldReader::new(element, inputs);
    let mix = fields.mix_ratio();

    let takeoff = match element {
        ElementType::Pile => pile::take_off(&PileInput::from_fields(&fields), config),
        ElementType::FootingBox => {
            footing::take_off_box(&BoxFootingInput::from_fields(&fields), config)
        }
        ElementType::FootingTrapezoidal => {
            footing::take_off_trapezoidal(&TrapezoidalFootingInput::from_fields(&fields), config)
        }
        ElementType::ColumnRectangular | ElementType::ColumnShort => {
            column::take_off_rect(&RectColumnInput::from_fields(&fields), config)
        }
        ElementType::ColumnCircular => {
            column::take_off_circular(&CircularColumnInput::from_fields(&fields), config)
        }
        ElementType::Beam => beam::take_off(&BeamInput::from_fields(&fields), config),
        ElementType::Slab => slab::take_off(&SlabInput::from_fields(&fields), config),
        ElementType::Stair => stair::take_off(&StairInput::from_fields(&fields), config),
        ElementType::Lintel => lintel::take_off(&LintelInput::from_fields(&fields), config),
        ElementType::Sunshade => sunshade::take_off(&SunshadeInput::from_fields(&fields), config),
        ElementType::BrickWork => {
            masonry::take_off_brick(&BrickWorkInput::from_fields(&fields), config)
        }
        ElementType::Plaster => {
            masonry::take_off_plaster(&PlasterInput::from_fields(&fields), config)
        }
    };

    finish(takeoff, &mix, config)
}

/// Fold previously computed results into a project summary.
///
/// Sums the stored, already-rounded per-item results; it never recomputes
/// from raw inputs, so rounding differences accumulate additively across
/// items. That matches how the per-item numbers were shown and saved.
pub fn grand_total(items: &[SavedItem]) -> EstimationResult {
    let mut cement_bags = 0.0;
    let mut sand_cft = 0.0;
    let mut aggregate_cft = 0.0;
    let mut steel_kg = 0.0;
    let mut total_cost = 0.0;

    for item in items {
        cement_bags += item.result.cement_bags;
        sand_cft += item.result.sand_cft;
        aggregate_cft += item.result.aggregate_cft;
        steel_kg += item.result.steel_kg;
        total_cost += item.result.total_cost;
    }

    EstimationResult {
        cement_bags: round2(cement_bags),
        sand_cft: round2(sand_cft),
        aggregate_cft: round2(aggregate_cft),
        steel_kg: round2(steel_kg),
        total_cost: round2(total_cost),
        details: vec![format!("Total Items: {}", items.len())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::FieldValue;

    fn column_inputs() -> InputMap {
        let mut inputs = InputMap::new();
        inputs.insert("count".into(), FieldValue::Number(1.0));
        inputs.insert("mix_ratio".into(), FieldValue::from("1:2:4 (M15)"));
        inputs.insert("length".into(), FieldValue::Number(12.0));
        inputs.insert("width".into(), FieldValue::Number(12.0));
        inputs.insert("height".into(), FieldValue::Number(10.0));
        inputs.insert("main_rod_nos".into(), FieldValue::Number(4.0));
        inputs.insert("main_rod_dia".into(), FieldValue::from("12"));
        inputs.insert("tie_dia".into(), FieldValue::from("8"));
        inputs.insert("tie_spacing".into(), FieldValue::Number(6.0));
        inputs.insert("clear_cover".into(), FieldValue::Number(1.5));
        inputs
    }

    #[test]
    fn test_column_scenario() {
        let config = GlobalConfig::default();
        let result = calculate(ElementType::ColumnRectangular, &column_inputs(), &config);

        // Wet 10 cft, dry 15.4 cft, cement share 15.4/7 = 2.2 cft -> 1.76 bags.
        assert!((result.cement_bags - 1.76).abs() < 0.005);
        assert!((result.sand_cft - 4.4).abs() < 0.005);
        assert!((result.aggregate_cft - 8.8).abs() < 0.005);
        assert!(result.steel_kg > 0.0);

        // Main: 4 bars x 10 ft x 0.27 = 10.8 kg.
        // Ties: perimeter (48 - 12)/12 = 3 ft, ceil(10/0.5)+1 = 21 rings x 0.12.
        assert!((result.steel_kg - (10.8 + 21.0 * 3.0 * 0.12)).abs() < 0.01);

        // ceil(1.76)*550 + ceil(4.4)*45 + ceil(8.8)*160 + ceil(18.36)*95
        assert_eq!(result.total_cost, 2.0 * 550.0 + 5.0 * 45.0 + 9.0 * 160.0 + 19.0 * 95.0);
    }

    #[test]
    fn test_determinism() {
        let config = GlobalConfig::default();
        let inputs = column_inputs();
        let a = calculate(ElementType::ColumnRectangular, &inputs, &config);
        let b = calculate(ElementType::ColumnRectangular, &inputs, &config);
        assert_eq!(a, b);
    }

    #[test]
    fn test_short_column_matches_rectangular() {
        let config = GlobalConfig::default();
        let inputs = column_inputs();
        let rect = calculate(ElementType::ColumnRectangular, &inputs, &config);
        let short = calculate(ElementType::ColumnShort, &inputs, &config);
        assert_eq!(rect, short);
    }

    #[test]
    fn test_bad_mix_string_never_poisons_result() {
        let config = GlobalConfig::default();
        for mix in ["", "abc", "0:0:0", ":::", "-1:1:0"] {
            let mut inputs = column_inputs();
            inputs.insert("mix_ratio".into(), FieldValue::from(mix));
            let result = calculate(ElementType::ColumnRectangular, &inputs, &config);
            for value in [
                result.cement_bags,
                result.sand_cft,
                result.aggregate_cft,
                result.steel_kg,
                result.total_cost,
            ] {
                assert!(value.is_finite(), "mix {:?} produced {}", mix, value);
                assert!(value >= 0.0, "mix {:?} produced {}", mix, value);
            }
        }
    }

    #[test]
    fn test_non_negative_over_all_elements_with_empty_inputs() {
        let config = GlobalConfig::default();
        let inputs = InputMap::new();
        for element in ElementType::ALL {
            let result = calculate(element, &inputs, &config);
            assert!(result.cement_bags >= 0.0);
            assert!(result.sand_cft >= 0.0);
            assert!(result.aggregate_cft >= 0.0);
            assert!(result.steel_kg >= 0.0);
            assert!(result.total_cost >= 0.0);
            assert!(result.total_cost.is_finite(), "{:?}", element);
        }
    }

    #[test]
    fn test_grand_total_sums_componentwise() {
        let config = GlobalConfig::default();
        let result = calculate(ElementType::ColumnRectangular, &column_inputs(), &config);
        let a = SavedItem::new("C-1", ElementType::ColumnRectangular, column_inputs(), result.clone());
        let b = SavedItem::new("C-2", ElementType::ColumnRectangular, column_inputs(), result.clone());

        let total = grand_total(&[a, b]);
        assert!((total.cement_bags - round2(result.cement_bags * 2.0)).abs() < 1e-9);
        assert!((total.steel_kg - round2(result.steel_kg * 2.0)).abs() < 1e-9);
        assert!((total.total_cost - round2(result.total_cost * 2.0)).abs() < 1e-9);
        assert_eq!(total.details, vec!["Total Items: 2".to_string()]);
    }

    #[test]
    fn test_grand_total_empty() {
        let total = grand_total(&[]);
        assert_eq!(total.cement_bags, 0.0);
        assert_eq!(total.sand_cft, 0.0);
        assert_eq!(total.aggregate_cft, 0.0);
        assert_eq!(total.steel_kg, 0.0);
        assert_eq!(total.total_cost, 0.0);
        assert_eq!(total.details, vec!["Total Items: 0".to_string()]);
    }

    #[test]
    fn test_element_type_wire_names() {
        let json = serde_json::to_string(&ElementType::FootingBox).unwrap();
        assert_eq!(json, "\"FOOTING_BOX\"");
        let parsed: ElementType = serde_json::from_str("\"BRICK_WORK\"").unwrap();
        assert_eq!(parsed, ElementType::BrickWork);
    }

    #[test]
    fn test_from_str_flexible() {
        assert_eq!(
            ElementType::from_str_flexible("FOOTING_BOX").unwrap(),
            ElementType::FootingBox
        );
        assert_eq!(
            ElementType::from_str_flexible("tf").unwrap(),
            ElementType::FootingTrapezoidal
        );
        assert_eq!(
            ElementType::from_str_flexible("Rectangular Column").unwrap(),
            ElementType::ColumnRectangular
        );
        assert!(ElementType::from_str_flexible("DOME").is_err());
    }

    #[test]
    fn test_result_serialization_uses_camel_case() {
        let result = EstimationResult {
            cement_bags: 1.76,
            sand_cft: 4.4,
            aggregate_cft: 8.8,
            steel_kg: 18.36,
            total_cost: 4570.0,
            details: vec![],
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"cementBags\":1.76"));
        assert!(json.contains("\"totalCost\":4570.0"));

        let roundtrip: EstimationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
