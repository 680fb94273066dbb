use ledgerlink_domain::StockItemBalance;

use super::report_document;

/// One record per `STOCKITEM`. An empty envelope yields no items.
pub fn parse_stock_items(xml: &str) -> Vec<StockItemBalance> {
    let Some(root) = report_document("stock_items", xml) else {
        return Vec::new();
    };

    root.descendants("STOCKITEM")
        .into_iter()
        .map(|item| StockItemBalance {
            name: item
                .attr("NAME")
                .filter(|name| !name.trim().is_empty())
                .or_else(|| item.child_text("NAME"))
                .map(|name| name.trim().to_string()),
            parent: item.child_text("PARENT").map(str::to_string),
            unit: item.child_text("BASEUNITS").map(str::to_string),
            closing_balance: item.child_text("CLOSINGBALANCE").map(str::to_string),
        })
        .collect()
}
