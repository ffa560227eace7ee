use crate::config::toml_config::CodecConfig;
use crate::core::amount::DecimalAmountValidator;
use crate::core::rules::{self, RULES};
use crate::domain::model::PaymentOrder;
use crate::domain::ports::AmountValidator;
use crate::utils::error::{CodecError, Result};
use crate::utils::validation::ValidationErrorSet;
use serde_json::Value;

/// Decodes, validates and encodes payment orders.
///
/// The codec holds no mutable state. One instance can be shared across threads
/// (for example behind an `Arc`) and all operations may run concurrently.
#[derive(Debug, Clone, Default)]
pub struct PaymentOrderCodec<V = DecimalAmountValidator> {
    amount_validator: V,
}

impl PaymentOrderCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &CodecConfig) -> Self {
        Self::with_amount_validator(config.amount_validator())
    }

    /// Names of the validation rules, in the order they run. The rule set
    /// does not depend on the amount validator.
    pub fn rules() -> impl Iterator<Item = &'static str> {
        RULES.iter().map(|rule| rule.name())
    }
}

impl<V: AmountValidator> PaymentOrderCodec<V> {
    pub fn with_amount_validator(amount_validator: V) -> Self {
        Self { amount_validator }
    }

    /// Maps raw bytes onto the model without validating it.
    ///
    /// Fails with [`CodecError::MalformedPayload`] when the bytes are not JSON,
    /// the top level is not an object, or a known field has the wrong type.
    /// Unknown fields are ignored.
    pub fn parse(&self, raw: &[u8]) -> Result<PaymentOrder> {
        let tree: Value =
            serde_json::from_slice(raw).map_err(|e| CodecError::malformed(e.to_string()))?;

        if !tree.is_object() {
            return Err(CodecError::malformed(format!(
                "expected a JSON object, found {}",
                json_kind(&tree)
            )));
        }

        serde_json::from_value(tree).map_err(|e| CodecError::malformed(e.to_string()))
    }

    /// Parses and validates. Only a fully valid order is returned.
    pub fn decode(&self, raw: &[u8]) -> Result<PaymentOrder> {
        let order = self.parse(raw).inspect_err(|e| {
            tracing::debug!(error = %e, "payment order payload rejected");
        })?;

        let violations = self.validate(&order);
        if !violations.is_empty() {
            tracing::debug!(
                violations = violations.len(),
                paths = ?violations.paths(),
                "payment order failed validation"
            );
            return Err(CodecError::ValidationFailed(violations));
        }

        tracing::debug!("payment order decoded");
        Ok(order)
    }

    /// Runs every rule and collects all violations in rule order.
    pub fn validate(&self, order: &PaymentOrder) -> ValidationErrorSet {
        rules::evaluate(order, &self.amount_validator)
    }

    /// Serializes without re-validating. Absent fields are omitted.
    pub fn encode(&self, order: &PaymentOrder) -> Result<Vec<u8>> {
        serde_json::to_vec(order).map_err(CodecError::Encode)
    }

    pub fn encode_pretty(&self, order: &PaymentOrder) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(order).map_err(CodecError::Encode)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Account, Amount};
    use crate::utils::validation::ViolationKind;

    const VALID: &str = r#"{"creditor_account":{"iban":"DE1234"},"creditor_name":"Jon","debtor_account":{"iban":"DE5678"},"instructed_amount":{"amount":"10.00","currency":"EUR"}}"#;

    #[test]
    fn test_decode_minimal_order() {
        let codec = PaymentOrderCodec::new();
        let order = codec.decode(VALID.as_bytes()).unwrap();

        assert_eq!(order.creditor_account, Some(Account::new("DE1234")));
        assert_eq!(order.creditor_name.as_deref(), Some("Jon"));
        assert_eq!(order.debtor_account, Some(Account::new("DE5678")));
        assert_eq!(order.instructed_amount, Some(Amount::new("10.00", "EUR")));
        assert!(order.end_to_end_identification.is_none());
        assert!(order.remittance_information_unstructured.is_none());
    }

    #[test]
    fn test_truncated_input_is_malformed() {
        let codec = PaymentOrderCodec::new();
        let err = codec.decode(b"{").unwrap_err();
        assert!(matches!(err, CodecError::MalformedPayload { .. }));
    }

    #[test]
    fn test_non_object_top_level_is_malformed() {
        let codec = PaymentOrderCodec::new();
        let inputs: [&[u8]; 4] = [b"[]", b"null", b"42", b"\"order\""];
        for input in inputs {
            let err = codec.parse(input).unwrap_err();
            assert!(
                matches!(err, CodecError::MalformedPayload { ref message } if message.starts_with("expected a JSON object")),
                "unexpected error for {:?}: {}",
                String::from_utf8_lossy(input),
                err
            );
        }
    }

    #[test]
    fn test_wrong_field_type_is_malformed() {
        let codec = PaymentOrderCodec::new();
        let err = codec.decode(br#"{"creditor_name": 5}"#).unwrap_err();
        assert!(matches!(err, CodecError::MalformedPayload { .. }));
    }

    #[test]
    fn test_null_fields_count_as_absent() {
        let codec = PaymentOrderCodec::new();
        let order = codec
            .parse(br#"{"creditor_name": null, "end_to_end_identification": null}"#)
            .unwrap();
        assert_eq!(order, PaymentOrder::default());
    }

    #[test]
    fn test_validation_failure_carries_full_set() {
        let codec = PaymentOrderCodec::new();
        let err = codec
            .decode(br#"{"instructed_amount":{"amount":"1.00","currency":"EUR"}}"#)
            .unwrap_err();
        let set = err.violations().unwrap();
        assert_eq!(
            set.paths(),
            vec!["creditor_account", "debtor_account", "creditor_name"]
        );
        assert!(set.iter().all(|v| v.kind == ViolationKind::Required));
    }

    #[test]
    fn test_encode_does_not_validate() {
        let codec = PaymentOrderCodec::new();
        let order = PaymentOrder {
            creditor_name: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(codec.encode(&order).unwrap(), br#"{"creditor_name":""}"#);
    }

    #[test]
    fn test_custom_amount_validator() {
        use crate::domain::ports::AmountRejection;

        struct EuroOnly;

        impl AmountValidator for EuroOnly {
            fn check(&self, amount: &Amount) -> std::result::Result<(), AmountRejection> {
                match amount.currency.as_deref() {
                    Some("EUR") => Ok(()),
                    _ => Err(AmountRejection::new("currency", ViolationKind::Invalid, "EUR only")),
                }
            }
        }

        let codec = PaymentOrderCodec::with_amount_validator(EuroOnly);
        assert!(codec.decode(VALID.as_bytes()).is_ok());

        let usd = VALID.replace("EUR", "USD");
        let err = codec.decode(usd.as_bytes()).unwrap_err();
        let set = err.violations().unwrap();
        assert_eq!(set.paths(), vec!["instructed_amount.currency"]);
        assert_eq!(set.violations()[0].message, "EUR only");
    }

    #[test]
    fn test_shared_validator_behind_arc() {
        use std::sync::Arc;

        let shared: Arc<dyn AmountValidator> =
            Arc::new(DecimalAmountValidator::new().with_allowed_currencies(["USD"]));
        let codec = PaymentOrderCodec::with_amount_validator(Arc::clone(&shared));

        let err = codec.decode(VALID.as_bytes()).unwrap_err();
        assert_eq!(
            err.violations().map(|set| set.paths()),
            Some(vec!["instructed_amount.currency"])
        );
    }

    #[test]
    fn test_rules_are_listed_in_check_order() {
        let names: Vec<&str> = PaymentOrderCodec::rules().collect();
        assert_eq!(
            names,
            vec!["creditor_account", "debtor_account", "creditor_name", "instructed_amount"]
        );
    }
}
