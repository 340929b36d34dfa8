//! Tree measurement records and form-field parsing.

use serde::{Deserialize, Serialize};

use crate::core_types::units::{Centimeters, GramsPerCubicCentimeter, Meters};
use crate::error::{InputError, InputResult};

/// Upper bounds for form input, well above the largest recorded trees
const MAX_DIAMETER_CM: f64 = 2_000.0;
const MAX_HEIGHT_M: f64 = 150.0;
const MAX_WOOD_DENSITY: f64 = 2.0;

/// Field measurements for a single tree
///
/// Diameter and height are optional because registry records are often
/// incomplete; the estimator treats a missing dimension as "no biomass".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TreeMeasurement {
    /// Diameter at breast height (cm)
    pub diameter: Option<Centimeters>,
    /// Total height (m)
    pub height: Option<Meters>,
    /// Species wood density (g/cm³); `None` means unknown
    #[serde(default)]
    pub wood_density: Option<GramsPerCubicCentimeter>,
}

impl TreeMeasurement {
    /// Create a measurement with all dimensions known and the default wood density
    #[must_use]
    pub fn new(diameter: Centimeters, height: Meters) -> Self {
        Self {
            diameter: Some(diameter),
            height: Some(height),
            wood_density: None,
        }
    }

    /// Set a species-specific wood density
    #[must_use]
    pub fn with_wood_density(mut self, density: GramsPerCubicCentimeter) -> Self {
        self.wood_density = Some(density);
        self
    }

    /// Wood density to use in the allometric equation.
    ///
    /// Substitutes [`GramsPerCubicCentimeter::DEFAULT_WOOD`] (0.6 g/cm³) when the
    /// density is unknown, zero or not finite.
    #[must_use]
    pub fn effective_wood_density(&self) -> GramsPerCubicCentimeter {
        match self.wood_density {
            Some(rho) if rho.is_finite() && *rho > 0.0 => rho,
            _ => GramsPerCubicCentimeter::DEFAULT_WOOD,
        }
    }

    /// Parse raw form-field strings.
    ///
    /// Empty or whitespace-only fields are treated as missing. Zero is
    /// accepted and later yields a zero estimate.
    ///
    /// # Errors
    /// Returns [`InputError::NotANumber`] for text that is not a number,
    /// [`InputError::NonFiniteValue`] for `NaN`/`inf`,
    /// [`InputError::Negative`] for negative values and
    /// [`InputError::OutOfRange`] for values no real tree reaches.
    pub fn parse(
        diameter: &str,
        height: &str,
        wood_density: Option<&str>,
    ) -> InputResult<Self> {
        Ok(Self {
            diameter: parse_field("diameter", diameter, MAX_DIAMETER_CM)?.map(Centimeters::new),
            height: parse_field("height", height, MAX_HEIGHT_M)?.map(Meters::new),
            wood_density: match wood_density {
                Some(raw) => parse_field("wood_density", raw, MAX_WOOD_DENSITY)?
                    .map(GramsPerCubicCentimeter::new),
                None => None,
            },
        })
    }
}

fn parse_field(field: &'static str, raw: &str, max: f64) -> InputResult<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value: f64 = trimmed.parse().map_err(|_| InputError::NotANumber {
        field,
        value: raw.to_owned(),
    })?;
    if !value.is_finite() {
        return Err(InputError::NonFiniteValue { field, value });
    }
    if value < 0.0 {
        return Err(InputError::Negative { field, value });
    }
    if value > max {
        return Err(InputError::OutOfRange { field, value, max });
    }
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_density_substitution() {
        let tree = TreeMeasurement::new(Centimeters::new(30.0), Meters::new(12.0));
        assert_eq!(tree.effective_wood_density(), GramsPerCubicCentimeter::DEFAULT_WOOD);

        let zero = tree.with_wood_density(GramsPerCubicCentimeter::new(0.0));
        assert_eq!(zero.effective_wood_density(), GramsPerCubicCentimeter::DEFAULT_WOOD);

        let teak = tree.with_wood_density(GramsPerCubicCentimeter::new(0.55));
        assert_eq!(*teak.effective_wood_density(), 0.55);
    }

    #[test]
    fn test_parse_form_fields() {
        let tree = TreeMeasurement::parse(" 45.2 ", "15.5", Some("0.72")).unwrap();
        assert_eq!(tree.diameter, Some(Centimeters::new(45.2)));
        assert_eq!(tree.height, Some(Meters::new(15.5)));
        assert_eq!(tree.wood_density, Some(GramsPerCubicCentimeter::new(0.72)));
    }

    #[test]
    fn test_parse_blank_fields_are_missing() {
        let tree = TreeMeasurement::parse("", "  ", Some("")).unwrap();
        assert_eq!(tree, TreeMeasurement::default());
    }

    #[test]
    fn test_parse_rejects_text() {
        let err = TreeMeasurement::parse("forty", "15", None).unwrap_err();
        assert!(matches!(err, InputError::NotANumber { field: "diameter", .. }));
    }

    #[test]
    fn test_parse_rejects_nan_and_negative() {
        let err = TreeMeasurement::parse("30", "NaN", None).unwrap_err();
        assert!(matches!(err, InputError::NonFiniteValue { field: "height", .. }));

        let err = TreeMeasurement::parse("-3", "15", None).unwrap_err();
        assert!(matches!(err, InputError::Negative { field: "diameter", .. }));
    }

    #[test]
    fn test_parse_rejects_implausible_sizes() {
        let err = TreeMeasurement::parse("1e160", "10", None).unwrap_err();
        assert!(matches!(err, InputError::OutOfRange { field: "diameter", .. }));

        let err = TreeMeasurement::parse("30", "400", None).unwrap_err();
        assert!(matches!(err, InputError::OutOfRange { field: "height", .. }));

        let err = TreeMeasurement::parse("30", "12", Some("7.5")).unwrap_err();
        assert!(matches!(err, InputError::OutOfRange { field: "wood_density", .. }));

        let giant = TreeMeasurement::parse("1100", "115", Some("1.2")).unwrap();
        assert_eq!(giant.diameter, Some(Centimeters::new(1100.0)));
    }

    #[test]
    fn test_deserialize_without_density() {
        let tree: TreeMeasurement =
            serde_json::from_str(r#"{"diameter": 20.0, "height": 8.0}"#).unwrap();
        assert_eq!(tree.wood_density, None);
        assert_eq!(tree.height, Some(Meters::new(8.0)));
    }
}
