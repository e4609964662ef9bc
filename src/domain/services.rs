//! Split calculation for the tip form.
//!
//! Turns the raw text of the form into per-person amounts. Validation of the
//! bill and party size is the only failure mode; a missing or unusable tip
//! percentage quietly counts as no tip.

use super::errors::ValidationError;
use super::models::{CalculationResult, Split, TipRequest, TipSelection};
use super::parser::{parse_decimal_prefix, parse_integer_prefix};

/// Stateless calculator for per-person tip and total amounts.
///
/// # Examples
///
/// ```
/// use tipsplit::domain::{Money, TipCalculator, TipRequest, TipSelection};
///
/// let split = TipCalculator::calculate(&TipRequest {
///     bill: "100",
///     party: "4",
///     selection: TipSelection::Preset(15.0),
///     custom_tip: "",
/// })
/// .unwrap();
///
/// assert_eq!(Money(split.tip_per_person).to_string(), "₹3.75");
/// assert_eq!(Money(split.total_per_person).to_string(), "₹28.75");
/// ```
pub struct TipCalculator;

impl TipCalculator {
    /// Validates the request and computes the split.
    ///
    /// # Errors
    ///
    /// * [`ValidationError::InvalidBill`] when the bill has no numeric
    ///   prefix or is negative
    /// * [`ValidationError::InvalidPartySize`] when the party size has no
    ///   integer prefix or is below 1
    pub fn calculate(request: &TipRequest<'_>) -> CalculationResult {
        let bill = Self::parse_bill(request.bill)?;
        let party = Self::parse_party(request.party)?;
        let tip_percent = Self::effective_tip_percent(request.selection, request.custom_tip);

        let total_tip = bill * (tip_percent / 100.0);
        let tip_per_person = total_tip / party;
        let total_per_person = (bill / party) + tip_per_person;

        Ok(Split {
            tip_per_person,
            total_per_person,
        })
    }

    /// Resolves the percentage actually applied to the bill.
    ///
    /// The selection supplies the starting value. Custom text that reads as
    /// a non-negative number always takes precedence, whatever the selection.
    /// Anything unusable falls back to 0.
    pub fn effective_tip_percent(selection: TipSelection, custom_tip: &str) -> f64 {
        let mut percent = selection.percent();

        if let Some(custom) = parse_decimal_prefix(custom_tip) {
            if custom >= 0.0 {
                percent = Some(custom);
            }
        }

        match percent {
            Some(value) if value.is_finite() && value >= 0.0 => value,
            _ => 0.0,
        }
    }

    fn parse_bill(text: &str) -> Result<f64, ValidationError> {
        match parse_decimal_prefix(text) {
            Some(bill) if bill >= 0.0 => Ok(bill),
            _ => Err(ValidationError::InvalidBill),
        }
    }

    fn parse_party(text: &str) -> Result<f64, ValidationError> {
        match parse_integer_prefix(text) {
            Some(people) if people >= 1 => Ok(people as f64),
            _ => Err(ValidationError::InvalidPartySize),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn request<'a>(bill: &'a str, party: &'a str, selection: TipSelection, custom_tip: &'a str) -> TipRequest<'a> {
        TipRequest {
            bill,
            party,
            selection,
            custom_tip,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_preset_split() {
        let split = TipCalculator::calculate(&request("100", "4", TipSelection::Preset(15.0), "")).unwrap();
        assert_close(split.tip_per_person, 3.75);
        assert_close(split.total_per_person, 28.75);
    }

    #[test]
    fn test_negative_bill_is_rejected() {
        for selection in [TipSelection::Unset, TipSelection::Preset(10.0), TipSelection::Custom(20.0)] {
            let result = TipCalculator::calculate(&request("-5", "2", selection, ""));
            assert_eq!(result, Err(ValidationError::InvalidBill));
        }
    }

    #[test]
    fn test_missing_bill_is_rejected() {
        assert_eq!(
            TipCalculator::calculate(&request("", "2", TipSelection::Unset, "")),
            Err(ValidationError::InvalidBill)
        );
        assert_eq!(
            TipCalculator::calculate(&request("abc", "2", TipSelection::Unset, "")),
            Err(ValidationError::InvalidBill)
        );
    }

    #[test]
    fn test_zero_party_is_rejected() {
        assert_eq!(
            TipCalculator::calculate(&request("50", "0", TipSelection::Unset, "")),
            Err(ValidationError::InvalidPartySize)
        );
        assert_eq!(
            TipCalculator::calculate(&request("50", "-3", TipSelection::Unset, "")),
            Err(ValidationError::InvalidPartySize)
        );
        assert_eq!(
            TipCalculator::calculate(&request("50", "", TipSelection::Unset, "")),
            Err(ValidationError::InvalidPartySize)
        );
    }

    #[test]
    fn test_bill_checked_before_party() {
        assert_eq!(
            TipCalculator::calculate(&request("x", "0", TipSelection::Unset, "")),
            Err(ValidationError::InvalidBill)
        );
    }

    #[test]
    fn test_no_tip_defaults_to_zero() {
        for custom in ["", "abc", "-10"] {
            let split = TipCalculator::calculate(&request("80", "2", TipSelection::Unset, custom)).unwrap();
            assert_close(split.tip_per_person, 0.0);
            assert_close(split.total_per_person, 40.0);
        }
    }

    #[test]
    fn test_custom_text_overrides_preset() {
        let split = TipCalculator::calculate(&request("100", "1", TipSelection::Preset(15.0), "20")).unwrap();
        assert_close(split.tip_per_person, 20.0);
        assert_close(split.total_per_person, 120.0);
    }

    #[test]
    fn test_invalid_custom_text_keeps_preset() {
        let split = TipCalculator::calculate(&request("100", "1", TipSelection::Preset(15.0), "oops")).unwrap();
        assert_close(split.tip_per_person, 15.0);
    }

    #[test]
    fn test_fractional_party_truncates() {
        let split = TipCalculator::calculate(&request("90", "2.9", TipSelection::Unset, "")).unwrap();
        assert_close(split.total_per_person, 45.0);
    }

    #[test]
    fn test_zero_bill_is_valid() {
        let split = TipCalculator::calculate(&request("0", "3", TipSelection::Preset(50.0), "")).unwrap();
        assert_eq!(split, Split::ZERO);
    }

    #[test]
    fn test_total_matches_closed_form() {
        let bills = [0.0, 0.01, 12.34, 100.0, 999.99, 25_000.5];
        let parties = [1_i64, 2, 3, 7, 12];
        let tips = [0.0, 5.0, 12.5, 15.0, 33.3, 100.0];

        for bill in bills {
            for party in parties {
                for tip in tips {
                    let bill_text = bill.to_string();
                    let party_text = party.to_string();
                    let split = TipCalculator::calculate(&request(
                        &bill_text,
                        &party_text,
                        TipSelection::Preset(tip),
                        "",
                    ))
                    .unwrap();

                    let people = party as f64;
                    let expected = bill / people + bill * tip / (100.0 * people);
                    assert_close(split.total_per_person, expected);
                }
            }
        }
    }

    #[test]
    fn test_calculate_is_idempotent() {
        let req = request("73.40", "3", TipSelection::Custom(18.0), "18");
        let first = TipCalculator::calculate(&req);
        let second = TipCalculator::calculate(&req);
        assert_eq!(first, second);
    }

    #[test]
    fn test_effective_tip_percent() {
        assert_eq!(TipCalculator::effective_tip_percent(TipSelection::Unset, ""), 0.0);
        assert_eq!(TipCalculator::effective_tip_percent(TipSelection::Preset(10.0), ""), 10.0);
        assert_eq!(TipCalculator::effective_tip_percent(TipSelection::Custom(8.0), "8"), 8.0);
        assert_eq!(TipCalculator::effective_tip_percent(TipSelection::Preset(10.0), "0"), 0.0);
        assert_eq!(TipCalculator::effective_tip_percent(TipSelection::Unset, "-1"), 0.0);
    }
}
