//! Calculator configuration

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};

/// Tunables for result formatting, input limits and notifications
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Decimal places computed results are rounded to before trailing zeros are stripped
    pub decimal_places: u32,
    /// Maximum number of characters in the operand being typed (`None` = unlimited)
    pub max_operand_len: Option<usize>,
    /// Text of the notification shown on division by zero
    pub divide_by_zero_message: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            decimal_places: Self::DEFAULT_DECIMAL_PLACES,
            max_operand_len: None,
            divide_by_zero_message: "Cannot divide by zero!".to_string(),
        }
    }
}

impl CalculatorConfig {
    /// Rounding precision used by the keypad calculator
    pub const DEFAULT_DECIMAL_PLACES: u32 = 8;

    /// Upper bound for `decimal_places`; f64 carries no more significant digits
    pub const MAX_DECIMAL_PLACES: u32 = 15;

    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set result precision
    #[must_use]
    pub const fn with_decimal_places(mut self, places: u32) -> Self {
        self.decimal_places = places;
        self
    }

    /// Set operand length limit
    #[must_use]
    pub const fn with_max_operand_len(mut self, max: Option<usize>) -> Self {
        self.max_operand_len = max;
        self
    }

    /// Set divide-by-zero notification text
    #[must_use]
    pub fn with_divide_by_zero_message(mut self, message: impl Into<String>) -> Self {
        self.divide_by_zero_message = message.into();
        self
    }

    /// Parse and validate a JSON configuration; missing fields take defaults
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| CalcError::config(format!("invalid JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> CalcResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CalcError::config(e.to_string()))
    }

    /// Check field ranges
    pub fn validate(&self) -> CalcResult<()> {
        if self.decimal_places > Self::MAX_DECIMAL_PLACES {
            return Err(CalcError::config(format!(
                "decimal_places must be at most {}, got {}",
                Self::MAX_DECIMAL_PLACES,
                self.decimal_places
            )));
        }
        if self.max_operand_len == Some(0) {
            return Err(CalcError::config("max_operand_len must be greater than zero"));
        }
        Ok(())
    }
}
