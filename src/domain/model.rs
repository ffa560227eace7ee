use serde::{Deserialize, Serialize};

/// A payment instruction received from (or sent back to) a third-party provider.
///
/// Every field may be absent in memory so that [`crate::PaymentOrderCodec::validate`]
/// can report what is missing. Orders returned by `decode` have passed validation,
/// so their required fields are populated. Absent fields are never written as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creditor_account: Option<Account>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub creditor_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub debtor_account: Option<Account>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructed_amount: Option<Amount>,

    /// Payment identifier on the TPP side. Opaque.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_to_end_identification: Option<String>,

    /// Free-form payment description. Opaque.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remittance_information_unstructured: Option<String>,
}

impl PaymentOrder {
    pub fn new(
        creditor_account: Account,
        creditor_name: impl Into<String>,
        debtor_account: Account,
        instructed_amount: Amount,
    ) -> Self {
        Self {
            creditor_account: Some(creditor_account),
            creditor_name: Some(creditor_name.into()),
            debtor_account: Some(debtor_account),
            instructed_amount: Some(instructed_amount),
            end_to_end_identification: None,
            remittance_information_unstructured: None,
        }
    }

    pub fn with_end_to_end_identification(mut self, id: impl Into<String>) -> Self {
        self.end_to_end_identification = Some(id.into());
        self
    }

    pub fn with_remittance_information(mut self, text: impl Into<String>) -> Self {
        self.remittance_information_unstructured = Some(text.into());
        self
    }
}

/// A payment account, identified by IBAN.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
}

impl Account {
    pub fn new(iban: impl Into<String>) -> Self {
        Self {
            iban: Some(iban.into()),
        }
    }
}

/// Amount and currency as sent on the wire.
///
/// The amount stays textual (`"10.00"`) so its exact representation survives
/// a round trip; whether it is well-formed is up to the amount validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl Amount {
    pub fn new(amount: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            amount: Some(amount.into()),
            currency: Some(currency.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::wire;

    fn full_order() -> PaymentOrder {
        PaymentOrder::new(
            Account::new("DE89370400440532013000"),
            "Jon Doe",
            Account::new("FR1420041010050500013M02606"),
            Amount::new("10.00", "EUR"),
        )
        .with_end_to_end_identification("e2e-1")
        .with_remittance_information("Invoice 42")
    }

    #[test]
    fn test_serialized_keys_follow_wire_table() {
        let value = serde_json::to_value(full_order()).unwrap();
        let mut actual: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        actual.sort_unstable();
        let mut expected = wire::PAYMENT_ORDER_FIELDS.to_vec();
        expected.sort_unstable();
        assert_eq!(actual, expected);

        let account_keys: Vec<&String> = value[wire::CREDITOR_ACCOUNT]
            .as_object()
            .unwrap()
            .keys()
            .collect();
        assert_eq!(account_keys, vec![wire::IBAN]);

        let amount = value[wire::INSTRUCTED_AMOUNT].as_object().unwrap();
        for field in wire::AMOUNT_FIELDS {
            assert!(amount.contains_key(field), "missing {}", field);
        }
    }

    #[test]
    fn test_absent_fields_are_not_serialized() {
        let order = PaymentOrder {
            creditor_name: Some("Jon".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&order).unwrap();
        assert_eq!(json, r#"{"creditor_name":"Jon"}"#);
    }

    #[test]
    fn test_builder_sets_optional_fields() {
        let order = full_order();
        assert_eq!(order.end_to_end_identification.as_deref(), Some("e2e-1"));
        assert_eq!(
            order.remittance_information_unstructured.as_deref(),
            Some("Invoice 42")
        );
    }
}
