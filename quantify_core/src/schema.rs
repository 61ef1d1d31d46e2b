//! # Field Catalog
//!
//! Per-element-type input field definitions: key, display label, unit, and
//! the engine fallback used when a value is missing or unusable. Front ends
//! render forms from this catalog; the engine resolves raw input maps against
//! it (see [`crate::inputs::FieldReader`]).
//!
//! Fallbacks are the values the computation substitutes, not form prefill
//! suggestions. Most geometry fields fall back to 0 (an unfilled dimension
//! estimates as nothing); covers, spacings, and pitches fall back to common
//! site values so a blank or zeroed field can never divide by zero.

use serde::Serialize;

use crate::estimates::ElementType;

/// Concrete mix options offered for poured elements.
pub const CONCRETE_MIXES: &[&str] = &[
    "1:1:2 (M25)",
    "1:1.5:3 (M20)",
    "1:2:4 (M15)",
    "1:3:6 (M10)",
    "1:4:8 (M7.5)",
    "1:5:10 (PCC)",
];

/// Mortar mix options for brick work and plaster.
pub const MORTAR_MIXES: &[&str] = &[
    "1:3 (Rich - Ceiling/Ext)",
    "1:4 (Standard - Walls)",
    "1:5 (Medium - Partition)",
    "1:6 (Lean - Brickwork)",
];

/// Stocked deformed-bar diameters in mm.
pub const ROD_DIAMETERS: &[&str] = &["8", "10", "12", "16", "20", "22", "25", "32"];

/// How a field is entered and resolved.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "type")]
pub enum FieldKind {
    /// Free numeric entry
    Number { fallback: f64 },
    /// One of a fixed list of numeric choices (bar diameters)
    Select {
        options: &'static [&'static str],
        fallback: f64,
    },
    /// Mix-ratio selection, parsed by [`crate::materials::MixRatio`]
    Mix { options: &'static [&'static str] },
}

impl FieldKind {
    /// Numeric fallback substituted for missing or unusable values.
    pub fn fallback(&self) -> f64 {
        match self {
            FieldKind::Number { fallback } | FieldKind::Select { fallback, .. } => *fallback,
            FieldKind::Mix { .. } => 0.0,
        }
    }
}

/// One input field of an element type.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: Option<&'static str>,
    pub kind: FieldKind,
}

const fn number(key: &'static str, label: &'static str, unit: &'static str, fallback: f64) -> FieldSpec {
    FieldSpec {
        key,
        label,
        unit: Some(unit),
        kind: FieldKind::Number { fallback },
    }
}

const fn bar_dia(key: &'static str, label: &'static str, fallback: f64) -> FieldSpec {
    FieldSpec {
        key,
        label,
        unit: Some("mm"),
        kind: FieldKind::Select {
            options: ROD_DIAMETERS,
            fallback,
        },
    }
}

const fn mix(label: &'static str, options: &'static [&'static str]) -> FieldSpec {
    FieldSpec {
        key: "mix_ratio",
        label,
        unit: None,
        kind: FieldKind::Mix { options },
    }
}

const PILE_FIELDS: &[FieldSpec] = &[
    number("count", "No. of Piles", "Nos", 1.0),
    mix("Concrete Mix", CONCRETE_MIXES),
    number("diameter", "Diameter (D)", "Inch", 20.0),
    number("length", "Length (L)", "Feet", 60.0),
    number("clear_cover", "Clear Cover", "Inch", 3.0),
    number("spiral_pitch", "Spiral Spacing", "Inch", 6.0),
    bar_dia("main_rod_dia", "Main Bar Dia", 0.0),
    number("main_rod_nos", "Main Bar Nos", "Nos", 0.0),
    bar_dia("spiral_dia", "Spiral Dia", 0.0),
];

const FOOTING_BOX_FIELDS: &[FieldSpec] = &[
    number("count", "Quantity", "Nos", 1.0),
    mix("Concrete Mix", CONCRETE_MIXES),
    number("length", "Length (L)", "Feet", 0.0),
    number("breadth", "Breadth (B)", "Feet", 0.0),
    number("thickness", "Thickness (H)", "Inch", 0.0),
    number("clear_cover", "Clear Cover", "Inch", 3.0),
    bar_dia("long_rod_dia", "Long Bar Dia", 0.0),
    number("long_rod_spacing", "Long Spacing", "Inch", 5.0),
    bar_dia("short_rod_dia", "Short Bar Dia", 0.0),
    number("short_rod_spacing", "Short Spacing", "Inch", 6.0),
];

const FOOTING_TRAPEZOIDAL_FIELDS: &[FieldSpec] = &[
    number("count", "Quantity", "Nos", 1.0),
    mix("Concrete Mix", CONCRETE_MIXES),
    number("length", "Bottom Length (L)", "Feet", 0.0),
    number("breadth", "Bottom Width (B)", "Feet", 0.0),
    number("top_length", "Top Length (l)", "Inch", 0.0),
    number("top_breadth", "Top Width (b)", "Inch", 0.0),
    number("rect_height", "Rect. Height (h1)", "Inch", 0.0),
    number("slope_height", "Slope Height (h2)", "Inch", 0.0),
    bar_dia("rod_dia", "Bar Dia", 0.0),
    number("rod_spacing", "Bar Spacing", "Inch", 5.0),
    number("clear_cover", "Clear Cover", "Inch", 3.0),
];

const COLUMN_FIELDS: &[FieldSpec] = &[
    number("count", "Quantity", "Nos", 1.0),
    mix("Concrete Mix", CONCRETE_MIXES),
    number("length", "Size (L)", "Inch", 0.0),
    number("width", "Size (B)", "Inch", 0.0),
    number("height", "Clear Height", "Feet", 0.0),
    number("clear_cover", "Clear Cover", "Inch", 1.5),
    bar_dia("main_rod_dia", "Main Bar Dia", 0.0),
    number("main_rod_nos", "Main Bar Nos", "Nos", 0.0),
    bar_dia("tie_dia", "Tie Bar Dia", 0.0),
    number("tie_spacing", "Tie Spacing", "Inch", 6.0),
];

const COLUMN_CIRCULAR_FIELDS: &[FieldSpec] = &[
    number("count", "Quantity", "Nos", 1.0),
    mix("Concrete Mix", CONCRETE_MIXES),
    number("diameter", "Diameter", "Inch", 0.0),
    number("height", "Clear Height", "Feet", 0.0),
    number("clear_cover", "Clear Cover", "Inch", 1.5),
    number("spiral_pitch", "Spiral Pitch", "Inch", 6.0),
    bar_dia("main_rod_dia", "Main Bar Dia", 0.0),
    number("main_rod_nos", "Main Bar Nos", "Nos", 0.0),
    bar_dia("spiral_dia", "Spiral Dia", 0.0),
];

const BEAM_FIELDS: &[FieldSpec] = &[
    number("count", "Quantity", "Nos", 1.0),
    mix("Concrete Mix", CONCRETE_MIXES),
    number("width", "Width (B)", "Inch", 0.0),
    number("depth", "Depth (D)", "Inch", 0.0),
    number("length", "Total Length", "Feet", 0.0),
    number("clear_cover", "Clear Cover", "Inch", 1.5),
    bar_dia("main_rod_dia", "Main Bar Dia", 0.0),
    number("main_rod_nos", "Main Bar Nos", "Nos", 0.0),
    bar_dia("tie_dia", "Stirrup Dia", 0.0),
    number("stirrup_spacing", "Stirrup Spacing", "Inch", 6.0),
];

const SLAB_FIELDS: &[FieldSpec] = &[
    number("area", "Slab Area", "Sq. Ft", 0.0),
    number("thickness", "Thickness", "Inch", 0.0),
    mix("Concrete Mix", CONCRETE_MIXES),
    bar_dia("rod_dia", "Bar Dia", 0.0),
    number("rod_spacing", "Grid Spacing", "Inch", 6.0),
    number("clear_cover", "Clear Cover", "Inch", 0.75),
];

const STAIR_FIELDS: &[FieldSpec] = &[
    number("steps", "No. of Steps", "Nos", 0.0),
    mix("Concrete Mix", CONCRETE_MIXES),
    number("step_length", "Step Width", "Feet", 0.0),
    number("waist_thickness", "Waist Thick.", "Inch", 0.0),
    number("riser", "Riser (R)", "Inch", 0.0),
    number("tread", "Tread (T)", "Inch", 0.0),
    number("landing_area", "Landing Area", "Sq. Ft", 0.0),
];

const LINTEL_FIELDS: &[FieldSpec] = &[
    number("count", "Quantity", "Nos", 1.0),
    mix("Concrete Mix", CONCRETE_MIXES),
    number("length", "Length", "Feet", 0.0),
    number("width", "Width", "Inch", 0.0),
    number("thickness", "Thickness", "Inch", 0.0),
    bar_dia("main_rod_dia", "Main Bar Dia", 10.0),
    number("main_rod_nos", "Main Bar Nos", "Nos", 4.0),
    bar_dia("stirrup_dia", "Stirrup Dia", 8.0),
    number("stirrup_spacing", "Stirrup Spacing", "Inch", 6.0),
];

const SUNSHADE_FIELDS: &[FieldSpec] = &[
    number("count", "Quantity", "Nos", 1.0),
    mix("Concrete Mix", CONCRETE_MIXES),
    number("length", "Length", "Feet", 0.0),
    number("projection", "Projection", "Inch", 0.0),
    number("avg_thickness", "Avg Thickness", "Inch", 0.0),
    bar_dia("main_rod_dia", "Main Bar Dia", 10.0),
    number("main_rod_spacing", "Main Spacing", "Inch", 6.0),
    bar_dia("dist_rod_dia", "Dist. Bar Dia", 8.0),
    number("dist_rod_spacing", "Dist. Spacing", "Inch", 8.0),
];

const BRICK_WORK_FIELDS: &[FieldSpec] = &[
    number("area", "Wall Area", "Sq. Ft", 0.0),
    number("thickness", "Wall Thickness", "Inch", 0.0),
    mix("Mortar Mix", MORTAR_MIXES),
    number("opening_deduction", "Openings (Door/Win)", "Sq. Ft", 0.0),
];

const PLASTER_FIELDS: &[FieldSpec] = &[
    number("area", "Plaster Area", "Sq. Ft", 0.0),
    number("thickness", "Thickness", "mm", 0.0),
    mix("Mortar Mix", MORTAR_MIXES),
];

/// Input field definitions for the given element type.
pub fn fields_for(element: ElementType) -> &'static [FieldSpec] {
    match element {
        ElementType::Pile => PILE_FIELDS,
        ElementType::FootingBox => FOOTING_BOX_FIELDS,
        ElementType::FootingTrapezoidal => FOOTING_TRAPEZOIDAL_FIELDS,
        ElementType::ColumnRectangular | ElementType::ColumnShort => COLUMN_FIELDS,
        ElementType::ColumnCircular => COLUMN_CIRCULAR_FIELDS,
        ElementType::Beam => BEAM_FIELDS,
        ElementType::Slab => SLAB_FIELDS,
        ElementType::Stair => STAIR_FIELDS,
        ElementType::Lintel => LINTEL_FIELDS,
        ElementType::Sunshade => SUNSHADE_FIELDS,
        ElementType::BrickWork => BRICK_WORK_FIELDS,
        ElementType::Plaster => PLASTER_FIELDS,
    }
}
