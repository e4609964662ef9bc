use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

use super::errors::ValidationResult;
use super::parser::parse_decimal_prefix;

/// Prefix used for every rendered amount.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Which tip percentage the user has chosen.
///
/// Preset and custom percentages are mutually exclusive: choosing one
/// replaces the other.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TipSelection {
    /// No tip chosen; calculates as 0%.
    #[default]
    Unset,
    /// One of the offered quick-select percentages.
    Preset(f64),
    /// A percentage typed into the free-form field.
    Custom(f64),
}

impl TipSelection {
    /// Toggles a preset button.
    ///
    /// Pressing the already-selected preset deselects it; any other preset
    /// replaces the current selection, including a custom one.
    ///
    /// # Examples
    ///
    /// ```
    /// use tipsplit::domain::TipSelection;
    ///
    /// let mut selection = TipSelection::Unset;
    /// selection.toggle_preset(15.0);
    /// assert_eq!(selection, TipSelection::Preset(15.0));
    /// selection.toggle_preset(15.0);
    /// assert_eq!(selection, TipSelection::Unset);
    /// ```
    pub fn toggle_preset(&mut self, percent: f64) {
        *self = match *self {
            TipSelection::Preset(current) if current == percent => TipSelection::Unset,
            _ => TipSelection::Preset(percent),
        };
    }

    /// Records an edit of the free-form tip field.
    ///
    /// Any edit drops an active preset, even when the text is not yet a
    /// valid percentage.
    pub fn edit_custom(&mut self, text: &str) {
        *self = match parse_decimal_prefix(text) {
            Some(percent) if percent >= 0.0 => TipSelection::Custom(percent),
            _ => TipSelection::Unset,
        };
    }

    pub fn reset(&mut self) {
        *self = TipSelection::Unset;
    }

    /// The preset that should be drawn as selected, if any.
    pub fn active_preset(&self) -> Option<f64> {
        match *self {
            TipSelection::Preset(percent) => Some(percent),
            _ => None,
        }
    }

    pub fn percent(&self) -> Option<f64> {
        match *self {
            TipSelection::Unset => None,
            TipSelection::Preset(percent) | TipSelection::Custom(percent) => Some(percent),
        }
    }
}

/// Raw inputs for a single split calculation.
#[derive(Debug, Clone, Copy)]
pub struct TipRequest<'a> {
    pub bill: &'a str,
    pub party: &'a str,
    pub selection: TipSelection,
    pub custom_tip: &'a str,
}

/// Per-person amounts produced by a successful calculation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Split {
    pub tip_per_person: f64,
    pub total_per_person: f64,
}

impl Split {
    /// Shown at startup and whenever validation fails.
    pub const ZERO: Split = Split {
        tip_per_person: 0.0,
        total_per_person: 0.0,
    };
}

pub type CalculationResult = ValidationResult<Split>;

/// A monetary amount rendered with two decimals and the currency prefix.
///
/// Rounding is half away from zero on the exact binary value, so `0.125`
/// renders as `₹0.13` while `1.005` (stored just below) renders as `₹1.00`.
///
/// # Examples
///
/// ```
/// use tipsplit::domain::Money;
///
/// assert_eq!(Money(3.75).to_string(), "₹3.75");
/// assert_eq!(Money(40.0).to_string(), "₹40.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Money(pub f64);

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Collapse -0.0 so it never renders with a sign
        let value = if self.0 == 0.0 { 0.0 } else { self.0 };

        match Decimal::from_f64_retain(value) {
            Some(amount) => {
                let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
                write!(f, "{}{:.2}", CURRENCY_SYMBOL, rounded)
            }
            None => write!(f, "{}{:.2}", CURRENCY_SYMBOL, value),
        }
    }
}
