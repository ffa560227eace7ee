pub mod amount;
pub mod codec;
pub mod rules;

pub use crate::domain::model::{Account, Amount, PaymentOrder};
pub use crate::domain::ports::{AmountRejection, AmountValidator};
pub use crate::utils::error::Result;
