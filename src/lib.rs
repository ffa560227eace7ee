pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::PayloadSource, CliConfig, Command};

pub use config::toml_config::CodecConfig;
pub use core::{amount::DecimalAmountValidator, codec::PaymentOrderCodec};
pub use domain::model::{Account, Amount, PaymentOrder};
pub use domain::ports::{AmountRejection, AmountValidator};
pub use utils::error::{CodecError, Result};
pub use utils::validation::{ValidationErrorSet, Violation, ViolationKind};
