//! Inventory masters, item-line vouchers and stock journals.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DATE_FORMAT, DEFAULT_GODOWN, SALES_VOUCHER_TYPE};
use crate::types::numeric::{format_amount, NumericText};
use crate::types::voucher::RemoteId;
use crate::validation::{require, require_numeric, snake_case, validate_date};
use crate::{LedgerLinkError, Result};

/// One stock line as supplied by a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryLine {
    pub name: String,
    pub qty: Option<NumericText>,
    pub rate: Option<NumericText>,
    pub unit: String,
}

/// A validated stock line with its extended amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedLine {
    pub name: String,
    pub qty: Decimal,
    pub rate: Decimal,
    pub unit: String,
    pub amount: Decimal,
}

impl InventoryLine {
    pub fn price(&self) -> Result<PricedLine> {
        let name = require("items.name", &self.name)?;
        let unit = require("items.unit", &self.unit)?;
        let qty = require_numeric("items.qty", self.qty.as_ref())?;
        let rate = require_numeric("items.rate", self.rate.as_ref())?;
        let amount = qty.checked_mul(rate).ok_or_else(|| {
            LedgerLinkError::InvalidInput(format!("items.qty x items.rate overflows for '{name}'"))
        })?;
        Ok(PricedLine { name: name.to_string(), qty, rate, unit: unit.to_string(), amount })
    }
}

fn price_all(items: &[InventoryLine]) -> Result<(Vec<PricedLine>, Decimal)> {
    if items.is_empty() {
        return Err(LedgerLinkError::InvalidInput("Items must be a non-empty list".into()));
    }
    let lines = items.iter().map(InventoryLine::price).collect::<Result<Vec<_>>>()?;
    let total = lines
        .iter()
        .try_fold(Decimal::ZERO, |total, line| total.checked_add(line.amount))
        .ok_or_else(|| LedgerLinkError::InvalidInput("items total overflows".into()))?;
    Ok((lines, total))
}

/// Which way stock moves on an item-line voucher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockDirection {
    /// Goods received from the party (purchase).
    Inward,
    /// Goods sent to the party (sales).
    Outward,
}

/// Validated item-line voucher ready for the write builders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryVoucher {
    pub company_name: String,
    pub voucher_type: String,
    pub date: String,
    /// Supplier or customer ledger.
    pub party_ledger: String,
    /// Purchase or sales ledger the lines are allocated against.
    pub counter_ledger: String,
    pub remote_id: RemoteId,
    pub narration: String,
    pub lines: Vec<PricedLine>,
    pub total: Decimal,
    pub direction: StockDirection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchaseVoucherInput {
    pub company_name: String,
    pub party_ledger: String,
    pub purchase_ledger: String,
    pub items: Vec<InventoryLine>,
    pub date: String,
    pub voucher_type: String,
    pub narration: Option<String>,
    pub voucher_guid: Option<String>,
}

impl PurchaseVoucherInput {
    pub fn to_voucher(&self) -> Result<InventoryVoucher> {
        let company_name = require("company_name", &self.company_name)?;
        let party = require("party_ledger", &self.party_ledger)?;
        let purchase = require("purchase_ledger", &self.purchase_ledger)?;
        let (lines, total) = price_all(&self.items)?;
        let date = require("date", &self.date)?;
        let voucher_type = require("voucher_type", &self.voucher_type)?;
        validate_date(date)?;

        let remote_id = supplied(self.voucher_guid.as_deref()).unwrap_or_else(|| {
            RemoteId::new(format!(
                "{}_{}_{}_{voucher_type}_{date}",
                snake_case(party).to_lowercase(),
                snake_case(purchase).to_lowercase(),
                format_amount(total),
            ))
        });

        Ok(InventoryVoucher {
            company_name: company_name.to_string(),
            voucher_type: voucher_type.to_string(),
            date: date.to_string(),
            party_ledger: party.to_string(),
            counter_ledger: purchase.to_string(),
            remote_id,
            narration: narration_or(self.narration.as_deref(), || format!("Purchase from {party}")),
            lines,
            total,
            direction: StockDirection::Inward,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalesVoucherInput {
    pub company_name: String,
    pub customer_ledger: String,
    pub sales_ledger: String,
    pub items: Vec<InventoryLine>,
    pub date: String,
    pub narration: Option<String>,
    pub voucher_guid: Option<String>,
}

impl SalesVoucherInput {
    pub fn to_voucher(&self) -> Result<InventoryVoucher> {
        let company_name = require("company_name", &self.company_name)?;
        let customer = require("customer_ledger", &self.customer_ledger)?;
        let sales = require("sales_ledger", &self.sales_ledger)?;
        let (lines, total) = price_all(&self.items)?;
        let date = require("date", &self.date)?;
        validate_date(date)?;

        let remote_id = supplied(self.voucher_guid.as_deref()).unwrap_or_else(|| {
            RemoteId::new(format!(
                "{customer}_{sales}_{}_{SALES_VOUCHER_TYPE}_{date}",
                format_amount(total)
            ))
        });

        Ok(InventoryVoucher {
            company_name: company_name.to_string(),
            voucher_type: SALES_VOUCHER_TYPE.to_string(),
            date: date.to_string(),
            party_ledger: customer.to_string(),
            counter_ledger: sales.to_string(),
            remote_id,
            narration: narration_or(self.narration.as_deref(), || format!("Sales to {customer}")),
            lines,
            total,
            direction: StockDirection::Outward,
        })
    }
}

/// Stock item master.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockItemInput {
    pub company_name: String,
    pub item_name: String,
    pub parent_group: String,
    pub unit: String,
    pub opening_balance: Option<NumericText>,
}

impl StockItemInput {
    /// Validate and return the opening balance (zero when absent).
    pub fn validate(&self) -> Result<Decimal> {
        require("company_name", &self.company_name)?;
        require("item_name", &self.item_name)?;
        require("parent_group", &self.parent_group)?;
        require("unit", &self.unit)?;
        match &self.opening_balance {
            Some(balance) if !balance.is_blank() => balance.parse("opening_balance"),
            _ => Ok(Decimal::ZERO),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockJournalInput {
    pub company_name: String,
    pub narration: String,
    pub item_name: String,
    pub qty: Option<NumericText>,
    pub unit: String,
    pub godown: Option<String>,
    pub date: Option<String>,
    pub voucher_guid: Option<String>,
}

/// Validated stock journal: one inward and one outward line of the same item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockJournal {
    pub company_name: String,
    pub narration: String,
    pub item_name: String,
    pub qty: Decimal,
    pub unit: String,
    pub godown: String,
    pub date: String,
    pub remote_id: RemoteId,
}

impl StockJournalInput {
    pub fn to_journal(&self) -> Result<StockJournal> {
        self.to_journal_on(Local::now().date_naive())
    }

    /// As [`Self::to_journal`], with `today` standing in for a missing date.
    pub fn to_journal_on(&self, today: NaiveDate) -> Result<StockJournal> {
        let company_name = require("company_name", &self.company_name)?;
        let narration = require("narration", &self.narration)?;
        let item_name = require("item_name", &self.item_name)?;
        let qty = require_numeric("qty", self.qty.as_ref())?;
        let unit = require("unit", &self.unit)?;

        let date = match self.date.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
            Some(date) => {
                validate_date(date)?;
                date.to_string()
            }
            None => today.format(DATE_FORMAT).to_string(),
        };
        let godown = self
            .godown
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .unwrap_or(DEFAULT_GODOWN)
            .to_string();
        let remote_id = supplied(self.voucher_guid.as_deref())
            .unwrap_or_else(|| RemoteId::new(format!("{}_{date}", snake_case(item_name))));

        Ok(StockJournal {
            company_name: company_name.to_string(),
            narration: narration.to_string(),
            item_name: item_name.to_string(),
            qty,
            unit: unit.to_string(),
            godown,
            date,
            remote_id,
        })
    }
}

fn supplied(guid: Option<&str>) -> Option<RemoteId> {
    guid.map(str::trim).filter(|g| !g.is_empty()).map(RemoteId::new)
}

fn narration_or(narration: Option<&str>, default: impl FnOnce() -> String) -> String {
    match narration.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => default(),
    }
}
