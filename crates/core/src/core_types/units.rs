//! Semantic unit types for type-safe agronomic quantity handling
//!
//! Newtype wrappers that keep temperatures, heat units, tree dimensions and
//! masses from being mixed up (a diameter in centimeters is not a height in
//! meters, and neither is a degree-day total).
//!
//! # Design Philosophy
//! - Every quantity is an `f64`; the biomass power law and long degree-day
//!   accumulations both benefit from double precision
//! - Total ordering via `Ord` (`f64::total_cmp`, NaN sorts above all values)
//! - `Deref` to the raw value for arithmetic-heavy formulas
//! - Serde support, serialized as the bare number
//!
//! # Usage
//! ```
//! use agro_engine_core::core_types::units::{Celsius, DegreeDays, Kilograms};
//!
//! let avg = Celsius::midpoint(Celsius::new(24.0), Celsius::new(12.0));
//! assert_eq!(*avg, 18.0);
//!
//! let gdd = DegreeDays::excess_over(avg, Celsius::new(10.0));
//! assert_eq!(*gdd, 8.0);
//!
//! let co2 = Kilograms::new(1500.0);
//! assert_eq!(*co2.to_tonnes(), 1.5);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Deref, Mul};

/// Compare f64 values with total ordering using Rust's built-in `total_cmp`
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// TEMPERATURE
// ============================================================================

/// Air temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Celsius(f64);

impl Eq for Celsius {}

impl PartialOrd for Celsius {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Celsius {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Celsius {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Celsius {
    /// Absolute zero in Celsius
    pub const ABSOLUTE_ZERO: Celsius = Celsius(-273.15);

    /// Base temperature separating heating from cooling demand
    pub const COMFORT_BASE: Celsius = Celsius(18.0);

    /// Base temperature below which crop development is negligible
    pub const GROWTH_BASE: Celsius = Celsius(10.0);

    /// Create a new Celsius temperature. Asserts value >= absolute zero (-273.15°C).
    ///
    /// # Panics
    /// Panics below absolute zero; use [`Celsius::try_new`] for untrusted input.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(
            value >= Self::ABSOLUTE_ZERO.0,
            "Celsius::new: value is below absolute zero (-273.15°C)"
        );
        Celsius(value)
    }

    /// Create a temperature if the value is finite and physically possible.
    #[inline]
    #[must_use]
    pub fn try_new(value: f64) -> Option<Self> {
        (value.is_finite() && value >= *Self::ABSOLUTE_ZERO).then_some(Celsius(value))
    }

    /// Arithmetic mean of two temperatures, `(a + b) / 2`
    #[inline]
    #[must_use]
    pub fn midpoint(a: Celsius, b: Celsius) -> Celsius {
        Celsius((a.0 + b.0) / 2.0)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<Celsius> for f64 {
    fn from(c: Celsius) -> f64 {
        c.0
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C", self.0)
    }
}

// ============================================================================
// HEAT UNITS
// ============================================================================

/// Degree-days (°C·day): accumulated temperature excess over a base
///
/// Daily values produced by the accumulator are never negative; thresholds
/// loaded from configuration are stored as given.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct DegreeDays(f64);

impl Eq for DegreeDays {}

impl PartialOrd for DegreeDays {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DegreeDays {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for DegreeDays {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DegreeDays {
    /// Zero heat units
    pub const ZERO: DegreeDays = DegreeDays(0.0);

    /// Create a degree-day value as given
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        DegreeDays(value)
    }

    /// Daily excess of `value` over `base`, clamped at zero: `max(0, value - base)`
    ///
    /// A NaN difference clamps to zero as well, so a single bad reading can
    /// never poison a running total.
    #[inline]
    #[must_use]
    pub fn excess_over(value: Celsius, base: Celsius) -> Self {
        DegreeDays((value.0 - base.0).max(0.0))
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Add for DegreeDays {
    type Output = DegreeDays;
    fn add(self, rhs: DegreeDays) -> DegreeDays {
        DegreeDays(self.0 + rhs.0)
    }
}

impl AddAssign for DegreeDays {
    fn add_assign(&mut self, rhs: DegreeDays) {
        self.0 += rhs.0;
    }
}

impl Sum for DegreeDays {
    fn sum<I: Iterator<Item = DegreeDays>>(iter: I) -> Self {
        iter.fold(DegreeDays::ZERO, Add::add)
    }
}

impl PartialEq<f64> for DegreeDays {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<f64> for DegreeDays {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }
}

impl From<f64> for DegreeDays {
    fn from(v: f64) -> Self {
        DegreeDays(v)
    }
}

impl fmt::Display for DegreeDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} °C·d", self.0)
    }
}

// ============================================================================
// TREE DIMENSIONS
// ============================================================================

/// Length in centimeters (trunk diameter at breast height)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Centimeters(f64);

impl Eq for Centimeters {}

impl PartialOrd for Centimeters {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Centimeters {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Centimeters {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Centimeters {
    /// Create a new length in centimeters
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Centimeters(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Centimeters {
    fn from(v: f64) -> Self {
        Centimeters(v)
    }
}

impl fmt::Display for Centimeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} cm", self.0)
    }
}

/// Length in meters (tree height)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Meters(f64);

impl Eq for Meters {}

impl PartialOrd for Meters {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Meters {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Meters {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Meters {
    /// Create a new length in meters
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Meters(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Meters {
    fn from(v: f64) -> Self {
        Meters(v)
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} m", self.0)
    }
}

/// Wood density (basic specific gravity) in g/cm³
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct GramsPerCubicCentimeter(f64);

impl Eq for GramsPerCubicCentimeter {}

impl PartialOrd for GramsPerCubicCentimeter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GramsPerCubicCentimeter {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for GramsPerCubicCentimeter {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl GramsPerCubicCentimeter {
    /// Generic tropical hardwood density used when a species value is unknown
    pub const DEFAULT_WOOD: GramsPerCubicCentimeter = GramsPerCubicCentimeter(0.6);

    /// Create a new density in g/cm³
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        GramsPerCubicCentimeter(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for GramsPerCubicCentimeter {
    fn from(v: f64) -> Self {
        GramsPerCubicCentimeter(v)
    }
}

impl fmt::Display for GramsPerCubicCentimeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} g/cm³", self.0)
    }
}

// ============================================================================
// MASS
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Kilograms(f64);

impl Eq for Kilograms {}

impl PartialOrd for Kilograms {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Kilograms {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Kilograms {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Kilograms {
    /// Zero mass
    pub const ZERO: Kilograms = Kilograms(0.0);

    /// Kilograms per metric tonne
    const KG_PER_TONNE: f64 = 1000.0;

    /// Create a new mass in kilograms
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Kilograms(value)
    }

    /// Convert to metric tonnes
    #[inline]
    #[must_use]
    pub fn to_tonnes(self) -> Tonnes {
        Tonnes(self.0 / Self::KG_PER_TONNE)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Add for Kilograms {
    type Output = Kilograms;
    fn add(self, rhs: Kilograms) -> Kilograms {
        Kilograms(self.0 + rhs.0)
    }
}

impl Mul<f64> for Kilograms {
    type Output = Kilograms;
    fn mul(self, rhs: f64) -> Kilograms {
        Kilograms(self.0 * rhs)
    }
}

impl Sum for Kilograms {
    fn sum<I: Iterator<Item = Kilograms>>(iter: I) -> Self {
        iter.fold(Kilograms::ZERO, Add::add)
    }
}

impl From<Kilograms> for Tonnes {
    fn from(kg: Kilograms) -> Tonnes {
        kg.to_tonnes()
    }
}

impl fmt::Display for Kilograms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} kg", self.0)
    }
}

/// Mass in metric tonnes
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Tonnes(f64);

impl Eq for Tonnes {}

impl PartialOrd for Tonnes {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tonnes {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Tonnes {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Tonnes {
    /// Zero mass
    pub const ZERO: Tonnes = Tonnes(0.0);

    /// Create a new mass in tonnes
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Tonnes(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Tonnes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} t", self.0)
    }
}
