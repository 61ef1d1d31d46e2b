//! # Input Fields
//!
//! User-entered parameters arrive as a string-keyed map of loosely typed
//! values: plain numbers, or strings for the enumerated selections (mix
//! ratios, bar diameters). [`FieldValue`] makes that union explicit instead
//! of stringly typed, and [`FieldReader`] resolves a map against an element's
//! field schema.
//!
//! ## Resolution rule
//!
//! A field that is missing, unparseable, zero, or not finite resolves to the
//! schema fallback for its key. This one rule covers both "absent inputs get
//! the documented default" and the division-by-zero floor for spacing and
//! pitch fields; a genuinely zero spacing makes no physical sense, so zero
//! means "not filled in yet". Unrecognized keys in the map are ignored.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::estimates::ElementType;
use crate::materials::MixRatio;
use crate::schema;

/// Key of the mix-ratio field, shared by every element type that pours.
pub const MIX_RATIO_KEY: &str = "mix_ratio";

/// A single user-entered value: a number, or an enumerated choice string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Choice(String),
}

impl FieldValue {
    /// Numeric view of the value.
    ///
    /// Choice strings parse as numbers when they are plain numerals (bar
    /// diameters arrive as `"16"`). Strings containing `:` are mix ratios
    /// and never coerce.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Choice(s) => {
                let trimmed = s.trim();
                if trimmed.contains(':') {
                    None
                } else {
                    trimmed.parse::<f64>().ok()
                }
            }
        }
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Choice(s.to_string())
    }
}

/// Raw input parameters for one estimation: field key to value.
pub type InputMap = HashMap<String, FieldValue>;

/// Resolves raw input fields against an element type's schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldReader<'a> {
    element: ElementType,
    map: &'a InputMap,
}

impl<'a> FieldReader<'a> {
    pub fn new(element: ElementType, map: &'a InputMap) -> Self {
        FieldReader { element, map }
    }

    /// Resolved numeric value for `key`.
    ///
    /// Missing, unparseable, zero, and non-finite values all fall back to the
    /// schema default for the field (0 when the schema defines none).
    pub fn num(&self, key: &str) -> f64 {
        let fallback = schema::fields_for(self.element)
            .iter()
            .find(|spec| spec.key == key)
            .map(|spec| spec.kind.fallback())
            .unwrap_or(0.0);

        match self.map.get(key).and_then(FieldValue::as_number) {
            Some(v) if v != 0.0 && v.is_finite() => v,
            _ => fallback,
        }
    }

    /// The mix ratio for this estimation, with the usual parser fallbacks.
    pub fn mix_ratio(&self) -> MixRatio {
        MixRatio::parse(self.map.get(MIX_RATIO_KEY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_coercion() {
        assert_eq!(FieldValue::Number(12.5).as_number(), Some(12.5));
        assert_eq!(FieldValue::from("16").as_number(), Some(16.0));
        assert_eq!(FieldValue::from(" 20 ").as_number(), Some(20.0));
        assert_eq!(FieldValue::from("abc").as_number(), None);
        assert_eq!(FieldValue::from("1:2:4").as_number(), None);
    }

    #[test]
    fn test_reader_prefers_given_value() {
        let mut map = InputMap::new();
        map.insert("diameter".into(), FieldValue::Number(24.0));
        let reader = FieldReader::new(ElementType::Pile, &map);
        assert_eq!(reader.num("diameter"), 24.0);
    }

    #[test]
    fn test_reader_falls_back_for_missing_and_zero() {
        let map = InputMap::new();
        let reader = FieldReader::new(ElementType::Pile, &map);
        // Pile diameter defaults to 20 in, spiral pitch to 6 in.
        assert_eq!(reader.num("diameter"), 20.0);
        assert_eq!(reader.num("spiral_pitch"), 6.0);

        let mut zeroed = InputMap::new();
        zeroed.insert("spiral_pitch".into(), FieldValue::Number(0.0));
        let reader = FieldReader::new(ElementType::Pile, &zeroed);
        assert_eq!(reader.num("spiral_pitch"), 6.0);
    }

    #[test]
    fn test_reader_rejects_non_finite() {
        let mut map = InputMap::new();
        map.insert("diameter".into(), FieldValue::Number(f64::NAN));
        map.insert("length".into(), FieldValue::Number(f64::INFINITY));
        let reader = FieldReader::new(ElementType::Pile, &map);
        assert_eq!(reader.num("diameter"), 20.0);
        assert_eq!(reader.num("length"), 60.0);
    }

    #[test]
    fn test_unknown_key_is_zero() {
        let map = InputMap::new();
        let reader = FieldReader::new(ElementType::Pile, &map);
        assert_eq!(reader.num("no_such_field"), 0.0);
    }

    #[test]
    fn test_mix_ratio_lookup() {
        let mut map = InputMap::new();
        map.insert(MIX_RATIO_KEY.into(), FieldValue::from("1:1.5:3 (M20)"));
        let reader = FieldReader::new(ElementType::Beam, &map);
        let mix = reader.mix_ratio();
        assert_eq!(mix.sand, 1.5);

        let empty = InputMap::new();
        let reader = FieldReader::new(ElementType::Beam, &empty);
        assert_eq!(reader.mix_ratio(), MixRatio::default());
    }

    #[test]
    fn test_field_value_serde() {
        let n: FieldValue = serde_json::from_str("12.5").unwrap();
        assert_eq!(n, FieldValue::Number(12.5));
        let s: FieldValue = serde_json::from_str("\"1:2:4 (M15)\"").unwrap();
        assert_eq!(s, FieldValue::from("1:2:4 (M15)"));
    }
}
