//! Flat-list reports.
//!
//! These formats print each record as a run of sibling elements, so a row
//! is rebuilt by position. When the groups differ in length the extra
//! elements are dropped.

use ledgerlink_domain::{BalanceSheetRow, LedgerTransaction, NumericText, TrialBalanceRow};
use rust_decimal::Decimal;
use tracing::warn;

use super::report_document;
use crate::xml::XmlNode;

pub fn parse_trial_balance(xml: &str) -> Vec<TrialBalanceRow> {
    let Some(root) = report_document("trial_balance", xml) else {
        return Vec::new();
    };

    let names: Vec<&XmlNode> = root
        .descendants("DSPACCNAME")
        .into_iter()
        .flat_map(|account| account.children_named("DSPDISPNAME"))
        .collect();
    let infos = root.descendants("DSPACCINFO");

    names
        .into_iter()
        .zip(infos)
        .map(|(name, info)| TrialBalanceRow {
            ledger_name: name.text().to_string(),
            debit: amount(info.find_text("DSPCLDRAMTA")),
            credit: amount(info.find_text("DSPCLCRAMTA")),
        })
        .collect()
}

fn amount(text: Option<&str>) -> Decimal {
    let Some(text) = text else {
        return Decimal::ZERO;
    };
    NumericText::from(text).parse("amount").unwrap_or_else(|_| {
        warn!(value = text, "non-numeric trial balance amount read as zero");
        Decimal::ZERO
    })
}

pub fn parse_balance_sheet(xml: &str) -> Vec<BalanceSheetRow> {
    let Some(root) = report_document("balance_sheet", xml) else {
        return Vec::new();
    };

    root.children_named("BSNAME")
        .zip(root.children_named("BSAMT"))
        .map(|(name, amounts)| BalanceSheetRow {
            account: name.find_text("DSPDISPNAME").unwrap_or("Unknown").to_string(),
            closing_balance: amounts
                .child_text("BSSUBAMT")
                .or_else(|| amounts.child_text("BSMAINAMT"))
                .unwrap_or("0")
                .to_string(),
        })
        .collect()
}

pub fn parse_ledger_vouchers(xml: &str) -> Vec<LedgerTransaction> {
    let Some(root) = report_document("ledger_vouchers", xml) else {
        return Vec::new();
    };

    let text = |node: &XmlNode| Some(node.text()).filter(|t| !t.is_empty()).map(str::to_string);
    let figure = |node: &XmlNode| text(node).unwrap_or_else(|| "0".to_string());

    root.children_named("DSPVCHDATE")
        .zip(root.children_named("DSPVCHLEDACCOUNT"))
        .zip(root.children_named("DSPVCHTYPE"))
        .zip(root.children_named("DSPVCHDRAMT"))
        .zip(root.children_named("DSPVCHCRAMT"))
        .map(|((((date, ledger), voucher_type), debit), credit)| LedgerTransaction {
            date: text(date),
            ledger: text(ledger),
            voucher_type: text(voucher_type),
            debit: figure(debit),
            credit: figure(credit),
        })
        .collect()
}
