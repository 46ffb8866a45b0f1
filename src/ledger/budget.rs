use serde::{Deserialize, Serialize};

use super::transaction::validate_amount;
use crate::{currency::CurrencyCode, errors::Result};

/// The spending ceiling expenses are measured against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct BudgetConfig {
    pub amount: f64,
    pub currency: CurrencyCode,
}

impl BudgetConfig {
    pub fn new(amount: f64, currency: CurrencyCode) -> Result<Self> {
        Ok(Self {
            amount: validate_amount(amount)?,
            currency,
        })
    }

    pub fn is_unset(&self) -> bool {
        self.amount == 0.0
    }
}
