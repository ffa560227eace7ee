use crate::domain::model::Amount;
use crate::domain::ports::{AmountRejection, AmountValidator};
use crate::domain::wire;
use crate::utils::validation::is_currency_code;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::OnceLock;

/// Plain decimal notation: optional minus, digits, optional fraction.
/// No exponent, no `+`, no `_` separators, no bare leading or trailing dot.
const AMOUNT_PATTERN: &str = r"^-?[0-9]+(\.[0-9]+)?$";

fn amount_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| Regex::new(AMOUNT_PATTERN).expect("amount pattern compiles"))
}

/// Default amount check: a decimal number in plain notation and an ISO
/// 4217-shaped currency code. Positivity, a fraction-digit limit and a
/// currency allow-list are opt-in.
#[derive(Debug, Clone, Default)]
pub struct DecimalAmountValidator {
    allowed_currencies: Vec<String>,
    require_positive: bool,
    max_fraction_digits: Option<u32>,
}

impl DecimalAmountValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty list accepts any well-formed code.
    pub fn with_allowed_currencies<I, S>(mut self, currencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_currencies = currencies.into_iter().map(Into::into).collect();
        self
    }

    /// Reject zero and negative amounts.
    pub fn require_positive(mut self, require: bool) -> Self {
        self.require_positive = require;
        self
    }

    pub fn with_max_fraction_digits(mut self, digits: Option<u32>) -> Self {
        self.max_fraction_digits = digits;
        self
    }

    fn check_amount(&self, raw: Option<&str>) -> Result<(), AmountRejection> {
        let raw = match raw {
            None => return Err(AmountRejection::required(wire::AMOUNT)),
            Some(v) if v.trim().is_empty() => return Err(AmountRejection::empty(wire::AMOUNT)),
            Some(v) => v,
        };

        if !amount_shape().is_match(raw) {
            return Err(AmountRejection::invalid(
                wire::AMOUNT,
                format!("'{}' is not a plain decimal number", raw),
            ));
        }

        let value = Decimal::from_str(raw).map_err(|e| {
            AmountRejection::invalid(wire::AMOUNT, format!("'{}' is out of range: {}", raw, e))
        })?;

        if self.require_positive && (value.is_zero() || value.is_sign_negative()) {
            return Err(AmountRejection::invalid(
                wire::AMOUNT,
                "must be greater than zero",
            ));
        }

        if let Some(max) = self.max_fraction_digits {
            if value.scale() > max {
                return Err(AmountRejection::invalid(
                    wire::AMOUNT,
                    format!("must have at most {} decimal places", max),
                ));
            }
        }

        Ok(())
    }

    fn check_currency(&self, raw: Option<&str>) -> Result<(), AmountRejection> {
        let code = match raw {
            None => return Err(AmountRejection::required(wire::CURRENCY)),
            Some("") => return Err(AmountRejection::empty(wire::CURRENCY)),
            Some(v) => v,
        };

        if !is_currency_code(code) {
            return Err(AmountRejection::invalid(
                wire::CURRENCY,
                format!("'{}' is not a three-letter upper-case currency code", code),
            ));
        }

        if !self.allowed_currencies.is_empty()
            && !self.allowed_currencies.iter().any(|c| c == code)
        {
            return Err(AmountRejection::invalid(
                wire::CURRENCY,
                format!(
                    "'{}' is not accepted, expected one of: {}",
                    code,
                    self.allowed_currencies.join(", ")
                ),
            ));
        }

        Ok(())
    }
}

impl AmountValidator for DecimalAmountValidator {
    fn check(&self, amount: &Amount) -> Result<(), AmountRejection> {
        self.check_amount(amount.amount.as_deref())?;
        self.check_currency(amount.currency.as_deref())
    }
}
