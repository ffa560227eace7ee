use crate::domain::model::Amount;
use crate::utils::validation::ViolationKind;

/// Why an [`Amount`] was rejected. `field` is the wire name inside the amount
/// object (`amount` or `currency`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountRejection {
    pub field: &'static str,
    pub kind: ViolationKind,
    pub message: String,
}

impl AmountRejection {
    pub fn new(field: &'static str, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }

    pub fn required(field: &'static str) -> Self {
        Self::new(field, ViolationKind::Required, "must be present")
    }

    pub fn empty(field: &'static str) -> Self {
        Self::new(field, ViolationKind::Empty, "must not be empty")
    }

    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::new(field, ViolationKind::Invalid, message)
    }
}

/// Decides whether an amount is well-formed. Implementations must be
/// shareable across threads because codecs are.
pub trait AmountValidator: Send + Sync {
    fn check(&self, amount: &Amount) -> Result<(), AmountRejection>;
}

impl<T: AmountValidator + ?Sized> AmountValidator for std::sync::Arc<T> {
    fn check(&self, amount: &Amount) -> Result<(), AmountRejection> {
        (**self).check(amount)
    }
}
