//! Wire field names for the payment order payload.
//!
//! These names are part of the external protocol. Changing any of them needs a
//! version bump of the surrounding API.

pub const CREDITOR_ACCOUNT: &str = "creditor_account";
pub const CREDITOR_NAME: &str = "creditor_name";
pub const DEBTOR_ACCOUNT: &str = "debtor_account";
pub const INSTRUCTED_AMOUNT: &str = "instructed_amount";
pub const END_TO_END_IDENTIFICATION: &str = "end_to_end_identification";
pub const REMITTANCE_INFORMATION_UNSTRUCTURED: &str = "remittance_information_unstructured";

pub const IBAN: &str = "iban";

pub const AMOUNT: &str = "amount";
pub const CURRENCY: &str = "currency";

/// Top-level object keys, in serialization order.
pub const PAYMENT_ORDER_FIELDS: [&str; 6] = [
    CREDITOR_ACCOUNT,
    CREDITOR_NAME,
    DEBTOR_ACCOUNT,
    INSTRUCTED_AMOUNT,
    END_TO_END_IDENTIFICATION,
    REMITTANCE_INFORMATION_UNSTRUCTURED,
];

pub const AMOUNT_FIELDS: [&str; 2] = [AMOUNT, CURRENCY];

/// Dotted path used in violation reports, e.g. `creditor_account.iban`.
pub fn path(parent: &str, child: &str) -> String {
    format!("{}.{}", parent, child)
}
