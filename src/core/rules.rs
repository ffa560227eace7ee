//! Field-level rules for a payment order, evaluated in a fixed order.
//!
//! Each rule looks at one top-level field and yields at most one violation.
//! All rules always run, so a caller gets the complete list in one pass.

use crate::domain::model::{Account, PaymentOrder};
use crate::domain::ports::AmountValidator;
use crate::domain::wire;
use crate::utils::validation::{
    check_present_non_blank, check_present_non_empty, ValidationErrorSet, Violation,
};

type Check = fn(&PaymentOrder, &dyn AmountValidator) -> Option<Violation>;

#[derive(Clone, Copy)]
pub struct Rule {
    name: &'static str,
    check: Check,
}

impl Rule {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn apply(&self, order: &PaymentOrder, amounts: &dyn AmountValidator) -> Option<Violation> {
        (self.check)(order, amounts)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

pub static RULES: [Rule; 4] = [
    Rule {
        name: "creditor_account",
        check: creditor_account,
    },
    Rule {
        name: "debtor_account",
        check: debtor_account,
    },
    Rule {
        name: "creditor_name",
        check: creditor_name,
    },
    Rule {
        name: "instructed_amount",
        check: instructed_amount,
    },
];

pub fn evaluate(order: &PaymentOrder, amounts: &dyn AmountValidator) -> ValidationErrorSet {
    let mut set = ValidationErrorSet::new();
    for rule in &RULES {
        if let Some(violation) = rule.apply(order, amounts) {
            set.push(violation);
        }
    }
    set
}

fn account(field: &str, value: Option<&Account>) -> Option<Violation> {
    match value {
        None => Some(Violation::required(field)),
        Some(account) => {
            check_present_non_empty(&wire::path(field, wire::IBAN), account.iban.as_deref())
        }
    }
}

fn creditor_account(order: &PaymentOrder, _: &dyn AmountValidator) -> Option<Violation> {
    account(wire::CREDITOR_ACCOUNT, order.creditor_account.as_ref())
}

fn debtor_account(order: &PaymentOrder, _: &dyn AmountValidator) -> Option<Violation> {
    account(wire::DEBTOR_ACCOUNT, order.debtor_account.as_ref())
}

fn creditor_name(order: &PaymentOrder, _: &dyn AmountValidator) -> Option<Violation> {
    check_present_non_blank(wire::CREDITOR_NAME, order.creditor_name.as_deref())
}

fn instructed_amount(order: &PaymentOrder, amounts: &dyn AmountValidator) -> Option<Violation> {
    let amount = match &order.instructed_amount {
        None => return Some(Violation::required(wire::INSTRUCTED_AMOUNT)),
        Some(amount) => amount,
    };
    amounts.check(amount).err().map(|rejection| {
        Violation::new(
            wire::path(wire::INSTRUCTED_AMOUNT, rejection.field),
            rejection.kind,
            rejection.message,
        )
    })
}
