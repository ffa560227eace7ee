use crate::core::amount::DecimalAmountValidator;
use crate::utils::error::{CodecError, Result};
use crate::utils::validation::{validate_currency_code, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// rust_decimal cannot represent more fractional digits than this.
pub const MAX_DECIMAL_SCALE: u32 = 28;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    pub amount: AmountConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AmountConfig {
    /// Empty means any well-formed currency code is accepted.
    pub allowed_currencies: Vec<String>,
    /// Reject zero and negative amounts. Off by default: the codec only
    /// checks that the amount is a well-formed decimal.
    pub require_positive: bool,
    pub max_fraction_digits: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub pretty: bool,
}

impl CodecConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CodecError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML after replacing `${VAR}` placeholders from the environment.
    /// Whole-line `#` comments are left alone; a placeholder in a trailing
    /// comment after a value is still substituted.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;

        toml::from_str(&processed).map_err(|e| CodecError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CodecError::ConfigError {
            message: format!("placeholder pattern: {}", e),
        })?;

        let mut missing = Vec::new();
        let mut result = String::with_capacity(content.len());
        for line in content.split_inclusive('\n') {
            if line.trim_start().starts_with('#') {
                result.push_str(line);
                continue;
            }
            let replaced = re.replace_all(line, |caps: &regex::Captures<'_>| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| {
                    missing.push(var_name.to_string());
                    String::new()
                })
            });
            result.push_str(&replaced);
        }

        if !missing.is_empty() {
            return Err(CodecError::ConfigError {
                message: format!("environment variable(s) not set: {}", missing.join(", ")),
            });
        }

        Ok(result)
    }

    pub fn validate_config(&self) -> Result<()> {
        for code in &self.amount.allowed_currencies {
            validate_currency_code("amount.allowed_currencies", code)?;
        }

        if let Some(digits) = self.amount.max_fraction_digits {
            validate_range("amount.max_fraction_digits", digits, 0, MAX_DECIMAL_SCALE)?;
        }

        Ok(())
    }

    pub fn amount_validator(&self) -> DecimalAmountValidator {
        DecimalAmountValidator::new()
            .with_allowed_currencies(self.amount.allowed_currencies.iter().cloned())
            .require_positive(self.amount.require_positive)
            .with_max_fraction_digits(self.amount.max_fraction_digits)
    }

    pub fn pretty_output(&self) -> bool {
        self.output.pretty
    }
}

impl Validate for CodecConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
