//! Ledger and group master inputs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_GROUP_NATURE;
use crate::types::numeric::NumericText;
use crate::validation::{
    require, require_numeric, validate_email, validate_phone, validate_pincode,
};
use crate::{LedgerLinkError, Result};

/// Ledger master as supplied by a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerInput {
    pub company_name: String,
    pub ledger_name: String,
    pub group_name: String,
    pub mailing_name: Option<String>,
    pub address_list: Vec<String>,
    pub pincode: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub opening_balance: Option<NumericText>,
}

impl LedgerInput {
    /// Validate required fields and the format of every present optional.
    ///
    /// Returns the parsed opening balance, if one was given.
    pub fn validate(&self) -> Result<Option<Decimal>> {
        require("ledger_name", &self.ledger_name)?;
        require("group_name", &self.group_name)?;
        require("company_name", &self.company_name)?;

        if let Some(email) = present(self.email.as_deref()) {
            validate_email(email)?;
        }
        if let Some(pincode) = present(self.pincode.as_deref()) {
            validate_pincode(pincode)?;
        }
        if let Some(phone) = present(self.phone.as_deref()) {
            validate_phone(phone)?;
        }

        match &self.opening_balance {
            Some(balance) if !balance.is_blank() => {
                require_numeric("opening_balance", Some(balance)).map(Some).map_err(|_| {
                    LedgerLinkError::InvalidInput("Opening balance must be a number".into())
                })
            }
            _ => Ok(None),
        }
    }
}

/// Account group master. Creates need a parent; deletes only a name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupInput {
    pub company_name: String,
    pub group_name: String,
    pub parent_group: Option<String>,
    pub nature_of_group: Option<String>,
}

impl GroupInput {
    pub fn validate_create(&self) -> Result<()> {
        self.validate_delete()?;
        require("parent_group", self.parent_group.as_deref().unwrap_or_default())?;
        Ok(())
    }

    pub fn validate_delete(&self) -> Result<()> {
        require("company_name", &self.company_name)?;
        require("group_name", &self.group_name)?;
        Ok(())
    }

    pub fn nature_or_default(&self) -> &str {
        present(self.nature_of_group.as_deref()).unwrap_or(DEFAULT_GROUP_NATURE)
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
