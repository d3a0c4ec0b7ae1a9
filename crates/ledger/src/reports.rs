//! Report generators: pure functions over a ledger snapshot.
//!
//! None of these mutate the ledger; each folds over the current catalog
//! and sales log and returns plain report rows ready for rendering.

use serde::{Deserialize, Serialize};

use stockbook_core::{Money, ProductId};

use crate::ledger::Ledger;

/// Placeholder name when a ranked product no longer exists in the catalog.
const DELETED_PRODUCT: &str = "Deleted product";

/// One row of the best-sellers ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub product_id: ProductId,
    pub name: String,
    pub units_sold: u64,
}

/// Top `n` products by total units sold.
///
/// Sorted descending by quantity with a stable sort, so ties keep their
/// first-appearance order in the sales log. The name is a live catalog
/// lookup; deleted products get a placeholder.
pub fn top_products(ledger: &Ledger, n: usize) -> Vec<TopProduct> {
    // Accumulate in first-appearance order to make tie-breaking stable.
    let mut totals: Vec<(ProductId, u64)> = Vec::new();
    for sale in ledger.sales() {
        match totals.iter_mut().find(|(id, _)| *id == sale.product_id()) {
            Some((_, qty)) => *qty += u64::from(sale.quantity()),
            None => totals.push((sale.product_id(), u64::from(sale.quantity()))),
        }
    }

    totals.sort_by(|a, b| b.1.cmp(&a.1));
    totals.truncate(n);

    totals
        .into_iter()
        .map(|(product_id, units_sold)| TopProduct {
            product_id,
            name: ledger
                .product(product_id)
                .map(|p| p.name().to_owned())
                .unwrap_or_else(|_| DELETED_PRODUCT.to_owned()),
            units_sold,
        })
        .collect()
}

/// One row of the revenue-by-brand report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandRevenue {
    pub brand: String,
    pub net: Money,
}

/// Net revenue summed per brand, descending.
///
/// Groups by the brand **snapshot** recorded on each sale, not the live
/// catalog value: renaming a brand later does not rewrite past revenue.
pub fn revenue_by_brand(ledger: &Ledger) -> Vec<BrandRevenue> {
    let mut totals: Vec<BrandRevenue> = Vec::new();
    for sale in ledger.sales() {
        match totals.iter_mut().find(|row| row.brand == sale.brand()) {
            Some(row) => row.net += sale.net(),
            None => totals.push(BrandRevenue {
                brand: sale.brand().to_owned(),
                net: sale.net(),
            }),
        }
    }
    totals.sort_by(|a, b| b.net.cmp(&a.net));
    totals
}

/// Income totals across the whole sales log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeReport {
    pub gross: Money,
    pub net: Money,
    pub discount: Money,
}

pub fn income(ledger: &Ledger) -> IncomeReport {
    let mut gross = Money::ZERO;
    let mut net = Money::ZERO;
    for sale in ledger.sales() {
        gross += sale.gross();
        net += sale.net();
    }
    IncomeReport {
        gross,
        net,
        discount: gross.minus(net),
    }
}

/// Movement classification for a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    OutOfStock,
    FastMoving,
    SlowMoving,
    Ok,
}

impl StockStatus {
    /// Classify from remaining stock and turnover percentage.
    ///
    /// Thresholds are strict: exactly 50% and exactly 10% are `Ok`, and a
    /// product with zero sold (0% turnover) is slow-moving, not `Ok`.
    pub fn classify(remaining_stock: u32, turnover_pct: f64) -> Self {
        if remaining_stock == 0 {
            StockStatus::OutOfStock
        } else if turnover_pct > 50.0 {
            StockStatus::FastMoving
        } else if turnover_pct < 10.0 {
            StockStatus::SlowMoving
        } else {
            StockStatus::Ok
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            StockStatus::OutOfStock => "OUT_OF_STOCK",
            StockStatus::FastMoving => "FAST_MOVING",
            StockStatus::SlowMoving => "SLOW_MOVING",
            StockStatus::Ok => "OK",
        };
        f.write_str(s)
    }
}

/// One row of the inventory performance report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPerformance {
    pub product_id: ProductId,
    pub name: String,
    pub units_sold: u64,
    pub initial_stock: u32,
    pub remaining_stock: u32,
    pub turnover_pct: f64,
    pub status: StockStatus,
}

/// Turnover and movement status for every catalog product, in catalog
/// (insertion) order.
pub fn inventory_performance(ledger: &Ledger) -> Vec<ProductPerformance> {
    ledger
        .products()
        .map(|product| {
            let id = product.id_typed();
            let units_sold = ledger.units_sold(id);
            let initial = product.initial_stock();
            // Multiply before dividing so even percentages come out exact.
            let turnover_pct = if initial > 0 {
                units_sold as f64 * 100.0 / f64::from(initial)
            } else {
                0.0
            };
            ProductPerformance {
                product_id: id,
                name: product.name().to_owned(),
                units_sold,
                initial_stock: initial,
                remaining_stock: product.stock(),
                turnover_pct,
                status: StockStatus::classify(product.stock(), turnover_pct),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use stockbook_catalog::{ProductPatch, RegisterProduct};
    use stockbook_sales::{ClientCategory, RecordSale};

    fn register(ledger: &mut Ledger, name: &str, brand: &str, price_cents: u64, stock: u32) -> ProductId {
        ledger
            .register_product(RegisterProduct {
                name: name.to_string(),
                brand: brand.to_string(),
                category: String::new(),
                unit_price: stockbook_core::Money::from_cents(price_cents),
                stock,
                warranty_months: 12,
            })
            .unwrap()
    }

    fn sell(ledger: &mut Ledger, id: ProductId, category: ClientCategory, qty: u32) {
        ledger
            .record_sale(RecordSale {
                client: "Client".to_string(),
                client_category: category,
                product_id: id,
                quantity: qty,
                occurred_at: Utc::now(),
            })
            .unwrap();
    }

    #[test]
    fn top_products_ranks_by_summed_quantity_descending() {
        let mut ledger = Ledger::new();
        let quantities = [3u32, 5, 20, 1, 2];
        let mut ids = Vec::new();
        for (i, qty) in quantities.iter().enumerate() {
            let id = register(&mut ledger, &format!("P{i}"), "B", 1000, 100);
            sell(&mut ledger, id, ClientCategory::Regular, *qty);
            ids.push(id);
        }

        let top = top_products(&ledger, 5);
        let ranked: Vec<u64> = top.iter().map(|t| t.units_sold).collect();
        assert_eq!(ranked, vec![20, 5, 3, 2, 1]);
        assert_eq!(top[0].product_id, ids[2]);
        assert_eq!(top[0].name, "P2");
    }

    #[test]
    fn top_products_sums_repeat_sales_and_truncates() {
        let mut ledger = Ledger::new();
        let a = register(&mut ledger, "A", "B", 1000, 100);
        let b = register(&mut ledger, "B", "B", 1000, 100);
        sell(&mut ledger, a, ClientCategory::Regular, 2);
        sell(&mut ledger, b, ClientCategory::Regular, 1);
        sell(&mut ledger, a, ClientCategory::Regular, 4);

        let top = top_products(&ledger, 1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].product_id, a);
        assert_eq!(top[0].units_sold, 6);
    }

    #[test]
    fn top_products_preserves_sales_log_order_on_ties() {
        let mut ledger = Ledger::new();
        let a = register(&mut ledger, "A", "B", 1000, 100);
        let b = register(&mut ledger, "B", "B", 1000, 100);
        // b enters the log first; both end up with 5 units.
        sell(&mut ledger, b, ClientCategory::Regular, 5);
        sell(&mut ledger, a, ClientCategory::Regular, 5);

        let top = top_products(&ledger, 2);
        assert_eq!(top[0].product_id, b);
        assert_eq!(top[1].product_id, a);
    }

    #[test]
    fn top_products_names_missing_products_with_placeholder() {
        let mut ledger = Ledger::new();
        let a = register(&mut ledger, "A", "Soundix", 1000, 100);
        sell(&mut ledger, a, ClientCategory::Regular, 3);

        // The integrity rule blocks deleting a sold product through the
        // API, so drop it from a snapshot to exercise the lookup miss.
        let mut snapshot = serde_json::to_value(&ledger).unwrap();
        snapshot["catalog"]["products"]
            .as_object_mut()
            .unwrap()
            .clear();
        let doctored: Ledger = serde_json::from_value(snapshot).unwrap();

        let top = top_products(&doctored, 1);
        assert_eq!(top[0].product_id, a);
        assert_eq!(top[0].name, "Deleted product");
        assert_eq!(top[0].units_sold, 3);
    }

    #[test]
    fn revenue_groups_by_brand_snapshot_not_live_catalog() {
        let mut ledger = Ledger::new();
        let a = register(&mut ledger, "A", "Soundix", 1000, 100); // net 10.00 each
        let b = register(&mut ledger, "B", "Ampere", 2000, 100);
        sell(&mut ledger, a, ClientCategory::Regular, 2); // Soundix 20.00
        sell(&mut ledger, b, ClientCategory::Regular, 3); // Ampere 60.00

        // Rebrand after the fact; history must not move.
        ledger
            .update_product(
                a,
                ProductPatch {
                    brand: Some("Rebranded".to_string()),
                    ..ProductPatch::default()
                },
            )
            .unwrap();
        sell(&mut ledger, a, ClientCategory::Regular, 1); // Rebranded 10.00

        let revenue = revenue_by_brand(&ledger);
        let rows: Vec<(&str, u64)> = revenue
            .iter()
            .map(|r| (r.brand.as_str(), r.net.cents()))
            .collect();
        assert_eq!(
            rows,
            vec![("Ampere", 6000), ("Soundix", 2000), ("Rebranded", 1000)]
        );
    }

    #[test]
    fn income_totals_equal_the_sums_over_all_sales() {
        let mut ledger = Ledger::new();
        let a = register(&mut ledger, "A", "B", 1000, 100);
        sell(&mut ledger, a, ClientCategory::Vip, 3); // gross 30.00 net 27.00
        sell(&mut ledger, a, ClientCategory::Employee, 2); // gross 20.00 net 14.00
        sell(&mut ledger, a, ClientCategory::Regular, 1); // gross 10.00 net 10.00

        let report = income(&ledger);
        assert_eq!(report.gross.cents(), 6000);
        assert_eq!(report.net.cents(), 5100);
        assert_eq!(report.discount.cents(), 900);

        let gross_sum: u64 = ledger.sales().iter().map(|s| s.gross().cents()).sum();
        let net_sum: u64 = ledger.sales().iter().map(|s| s.net().cents()).sum();
        assert_eq!(report.gross.cents(), gross_sum);
        assert_eq!(report.net.cents(), net_sum);
    }

    #[test]
    fn income_on_an_empty_ledger_is_zero() {
        let report = income(&Ledger::new());
        assert_eq!(report, IncomeReport::default());
    }

    #[test]
    fn fast_moving_above_fifty_percent() {
        let mut ledger = Ledger::new();
        let id = register(&mut ledger, "A", "B", 1000, 10);
        sell(&mut ledger, id, ClientCategory::Regular, 6);

        let perf = inventory_performance(&ledger);
        assert_eq!(perf[0].turnover_pct, 60.0);
        assert_eq!(perf[0].status, StockStatus::FastMoving);
        assert_eq!(perf[0].remaining_stock, 4);
    }

    #[test]
    fn zero_sold_with_stock_on_hand_is_slow_moving() {
        let mut ledger = Ledger::new();
        register(&mut ledger, "A", "B", 1000, 10);

        let perf = inventory_performance(&ledger);
        assert_eq!(perf[0].turnover_pct, 0.0);
        assert_eq!(perf[0].status, StockStatus::SlowMoving);
    }

    #[test]
    fn boundary_turnovers_classify_ok() {
        // Exactly 10%: sold 1 of 10.
        let mut ledger = Ledger::new();
        let id = register(&mut ledger, "A", "B", 1000, 10);
        sell(&mut ledger, id, ClientCategory::Regular, 1);
        let perf = inventory_performance(&ledger);
        assert_eq!(perf[0].turnover_pct, 10.0);
        assert_eq!(perf[0].status, StockStatus::Ok);

        // Exactly 50%: sold 5 of 10.
        let mut ledger = Ledger::new();
        let id = register(&mut ledger, "A", "B", 1000, 10);
        sell(&mut ledger, id, ClientCategory::Regular, 5);
        let perf = inventory_performance(&ledger);
        assert_eq!(perf[0].turnover_pct, 50.0);
        assert_eq!(perf[0].status, StockStatus::Ok);
    }

    #[test]
    fn sold_out_product_is_out_of_stock_regardless_of_turnover() {
        let mut ledger = Ledger::new();
        let id = register(&mut ledger, "A", "B", 1000, 4);
        sell(&mut ledger, id, ClientCategory::Regular, 4);

        let perf = inventory_performance(&ledger);
        assert_eq!(perf[0].turnover_pct, 100.0);
        assert_eq!(perf[0].status, StockStatus::OutOfStock);
    }

    #[test]
    fn zero_initial_stock_has_zero_turnover() {
        let mut ledger = Ledger::new();
        register(&mut ledger, "A", "B", 1000, 0);

        let perf = inventory_performance(&ledger);
        assert_eq!(perf[0].turnover_pct, 0.0);
        // No stock on hand either, so the out-of-stock rule wins.
        assert_eq!(perf[0].status, StockStatus::OutOfStock);
    }

    #[test]
    fn performance_rows_follow_catalog_order() {
        let mut ledger = Ledger::new();
        register(&mut ledger, "First", "B", 1000, 5);
        register(&mut ledger, "Second", "B", 1000, 5);
        register(&mut ledger, "Third", "B", 1000, 5);

        let names: Vec<_> = inventory_performance(&ledger)
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn status_display_matches_report_vocabulary() {
        assert_eq!(StockStatus::OutOfStock.to_string(), "OUT_OF_STOCK");
        assert_eq!(StockStatus::FastMoving.to_string(), "FAST_MOVING");
        assert_eq!(StockStatus::SlowMoving.to_string(), "SLOW_MOVING");
        assert_eq!(StockStatus::Ok.to_string(), "OK");
    }
}
