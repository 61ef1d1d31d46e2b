//! # Materials
//!
//! Concrete/mortar mix ratios and reinforcement bar unit weights.
//!
//! Both helpers are deliberately total functions: estimation runs while the
//! user is still typing, so a half-edited mix string or an odd bar diameter
//! must produce a number, never an error. A bad string degrades to default or
//! zero components and shows up as a visibly wrong quantity instead of a
//! crash.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::inputs::FieldValue;

/// Proportions by volume of cement : sand : coarse aggregate.
///
/// Parsed from strings such as `"1:1.5:3 (M20)"`; the parenthesized grade
/// label is ignored. Mortar mixes simply carry a zero aggregate component.
///
/// ## Example
///
/// ```rust
/// use quantify_core::materials::MixRatio;
///
/// let mix = MixRatio::from_str_lossy("1:1.5:3 (M20)");
/// assert_eq!(mix, MixRatio { cement: 1.0, sand: 1.5, aggregate: 3.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixRatio {
    pub cement: f64,
    pub sand: f64,
    pub aggregate: f64,
}

impl Default for MixRatio {
    /// The 1:2:4 nominal mix, used whenever no ratio is supplied.
    fn default() -> Self {
        MixRatio {
            cement: 1.0,
            sand: 2.0,
            aggregate: 4.0,
        }
    }
}

impl MixRatio {
    /// Sum of all three components, used as the allocation denominator.
    pub fn total(&self) -> f64 {
        self.cement + self.sand + self.aggregate
    }

    /// Parse a raw input field into a mix ratio.
    ///
    /// A missing field falls back to [`MixRatio::default`]. A bare number `n`
    /// is treated as a legacy cement:sand ratio of `1:n`.
    pub fn parse(raw: Option<&FieldValue>) -> Self {
        match raw {
            None => MixRatio::default(),
            Some(FieldValue::Number(n)) => MixRatio {
                cement: 1.0,
                sand: *n,
                aggregate: 0.0,
            },
            Some(FieldValue::Choice(s)) => MixRatio::from_str_lossy(s),
        }
    }

    /// Parse a `"C:S:A"` string, ignoring everything after the first space.
    ///
    /// Never fails: an unparseable or zero first component becomes 1, and
    /// unparseable or missing later components become 0.
    pub fn from_str_lossy(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return MixRatio::default();
        }

        let head = trimmed.split_whitespace().next().unwrap_or("");
        let mut parts = head.split(':').map(parse_component);

        let cement = parts
            .next()
            .flatten()
            .filter(|v| *v != 0.0)
            .unwrap_or(1.0);
        let sand = parts.next().flatten().unwrap_or(0.0);
        let aggregate = parts.next().flatten().unwrap_or(0.0);

        MixRatio {
            cement,
            sand,
            aggregate,
        }
    }
}

fn parse_component(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// The medium a mix is used in, selecting the dry-volume coefficient and
/// whether a coarse-aggregate share applies at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Medium {
    /// Structural concrete pours (piles, footings, columns, beams, slabs)
    Concrete,
    /// Mortar bedding in brick masonry
    BrickMortar,
    /// Mortar for plaster coats
    Plaster,
}

/// Standard deformed-bar unit weights in kg per foot, keyed by diameter (mm).
///
/// Derived from the usual kg/m handbook values (e.g. 16 mm at 1.58 kg/m is
/// 0.48 kg/ft).
static STANDARD_ROD_WEIGHTS: Lazy<BTreeMap<u32, f64>> = Lazy::new(|| {
    BTreeMap::from([
        (8, 0.12),
        (10, 0.19),
        (12, 0.27),
        (16, 0.48),
        (20, 0.75),
        (22, 0.90),
        (25, 1.17),
        (32, 2.47),
    ])
});

/// Lookup table from nominal bar diameter to mass per linear foot.
///
/// Diameters outside the table fall back to the `d²/533` approximation of
/// the metric `d²/162` kg/m rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RodWeightTable {
    entries: BTreeMap<u32, f64>,
}

impl Default for RodWeightTable {
    fn default() -> Self {
        RodWeightTable {
            entries: STANDARD_ROD_WEIGHTS.clone(),
        }
    }
}

impl RodWeightTable {
    /// Build a table from explicit diameter/weight pairs (regional mills
    /// sometimes quote slightly different section weights).
    pub fn from_entries(entries: impl IntoIterator<Item = (u32, f64)>) -> Self {
        RodWeightTable {
            entries: entries.into_iter().collect(),
        }
    }

    /// Mass per linear foot (kg/ft) for a bar of the given diameter in mm.
    ///
    /// Exact lookup for tabulated whole-millimeter diameters, `d²/533` for
    /// everything else. A zero diameter therefore yields zero weight.
    pub fn weight_kg_per_ft(&self, dia_mm: f64) -> f64 {
        if dia_mm > 0.0 && dia_mm.fract() == 0.0 {
            if let Some(weight) = self.entries.get(&(dia_mm as u32)) {
                return *weight;
            }
        }
        (dia_mm * dia_mm) / 533.0
    }
}
