//! Plain-text rendering of listings and reports.

use std::io::{self, Write};

use stockbook_catalog::Product;
use stockbook_ledger::{BrandRevenue, IncomeReport, Ledger, ProductPerformance, TopProduct};
use stockbook_sales::Sale;

pub fn write_inventory<W: Write>(out: &mut W, ledger: &Ledger) -> io::Result<()> {
    writeln!(out, "\n--- Inventory ---")?;
    if ledger.catalog_len() == 0 {
        writeln!(out, "No products in inventory.")?;
        return Ok(());
    }
    writeln!(
        out,
        "{:<5} {:<22} {:<12} {:<12} {:<9} {:<6} {}",
        "ID", "Name", "Brand", "Category", "Price", "Stock", "Warranty"
    )?;
    for p in ledger.products() {
        writeln!(
            out,
            "{:<5} {:<22} {:<12} {:<12} {:<9} {:<6} {}m",
            p.id_typed(),
            p.name(),
            p.brand(),
            p.category(),
            format!("${}", p.unit_price()),
            p.stock(),
            p.warranty_months()
        )?;
    }
    writeln!(out, "-----------------")
}

pub fn write_product_details<W: Write>(out: &mut W, product: &Product) -> io::Result<()> {
    writeln!(out, "\nDetails for product id {}:", product.id_typed())?;
    writeln!(out, "  name: {}", product.name())?;
    writeln!(out, "  brand: {}", product.brand())?;
    writeln!(out, "  category: {}", product.category())?;
    writeln!(out, "  unit price: ${}", product.unit_price())?;
    writeln!(out, "  stock: {}", product.stock())?;
    writeln!(out, "  initial stock: {}", product.initial_stock())?;
    writeln!(out, "  warranty: {} months", product.warranty_months())
}

pub fn write_sales_history<W: Write>(out: &mut W, sales: &[Sale]) -> io::Result<()> {
    if sales.is_empty() {
        writeln!(out, "No sales recorded yet.")?;
        return Ok(());
    }
    writeln!(out, "\n--- Sales History ---")?;
    for s in sales {
        writeln!(
            out,
            "ID:{} | {} | {} ({}) | {} x{} | Gross:${} Net:${}",
            s.id_typed(),
            s.recorded_at().format("%Y-%m-%d %H:%M:%S"),
            s.client(),
            s.client_category(),
            s.product_name(),
            s.quantity(),
            s.gross(),
            s.net()
        )?;
    }
    writeln!(out, "---------------------")
}

pub fn write_top_products<W: Write>(out: &mut W, rows: &[TopProduct]) -> io::Result<()> {
    if rows.is_empty() {
        writeln!(out, "No sales to report.")?;
        return Ok(());
    }
    writeln!(out, "\nTop {} best-selling products:", rows.len())?;
    for (rank, row) in rows.iter().enumerate() {
        writeln!(
            out,
            "{}. {} (ID {}) - {} units sold",
            rank + 1,
            row.name,
            row.product_id,
            row.units_sold
        )?;
    }
    Ok(())
}

pub fn write_brand_revenue<W: Write>(out: &mut W, rows: &[BrandRevenue]) -> io::Result<()> {
    if rows.is_empty() {
        writeln!(out, "No sales to report.")?;
        return Ok(());
    }
    writeln!(out, "\nSales (net) grouped by brand:")?;
    for row in rows {
        writeln!(out, " - {}: ${}", row.brand, row.net)?;
    }
    Ok(())
}

pub fn write_income<W: Write>(out: &mut W, report: &IncomeReport, has_sales: bool) -> io::Result<()> {
    if !has_sales {
        writeln!(out, "No sales to report.")?;
        return Ok(());
    }
    writeln!(out, "\nIncome report:")?;
    writeln!(out, " - Total gross revenue: ${}", report.gross)?;
    writeln!(out, " - Total discounts:     ${}", report.discount)?;
    writeln!(out, " - Total net revenue:   ${}", report.net)
}

pub fn write_performance<W: Write>(out: &mut W, rows: &[ProductPerformance]) -> io::Result<()> {
    if rows.is_empty() {
        writeln!(out, "No inventory.")?;
        return Ok(());
    }
    writeln!(out, "\nInventory performance:")?;
    for row in rows {
        writeln!(
            out,
            " - {} (ID {}): sold {}, init {}, left {}, turnover {:.1}% -> {}",
            row.name,
            row.product_id,
            row.units_sold,
            row.initial_stock,
            row.remaining_stock,
            row.turnover_pct,
            row.status
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use stockbook_catalog::RegisterProduct;
    use stockbook_core::Money;
    use stockbook_ledger::{income, inventory_performance, top_products};
    use stockbook_sales::{ClientCategory, RecordSale};

    fn demo() -> Ledger {
        let mut ledger = Ledger::new();
        let id = ledger
            .register_product(RegisterProduct {
                name: "Aurora Headphones".to_string(),
                brand: "Soundix".to_string(),
                category: "Audio".to_string(),
                unit_price: Money::from_cents(7999),
                stock: 25,
                warranty_months: 12,
            })
            .unwrap();
        ledger
            .record_sale(RecordSale {
                client: "Alice".to_string(),
                client_category: ClientCategory::Vip,
                product_id: id,
                quantity: 3,
                occurred_at: Utc::now(),
            })
            .unwrap();
        ledger
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn inventory_listing_shows_each_product_row() {
        let ledger = demo();
        let text = render(|out| write_inventory(out, &ledger));
        assert!(text.contains("Aurora Headphones"));
        assert!(text.contains("$79.99"));
        assert!(text.contains("Soundix"));
    }

    #[test]
    fn empty_inventory_has_a_notice() {
        let ledger = Ledger::new();
        let text = render(|out| write_inventory(out, &ledger));
        assert!(text.contains("No products in inventory."));
    }

    #[test]
    fn sales_history_shows_pricing() {
        let ledger = demo();
        let text = render(|out| write_sales_history(out, ledger.sales()));
        assert!(text.contains("Alice (vip)"));
        assert!(text.contains("Gross:$239.97"));
        assert!(text.contains("Net:$215.97"));
    }

    #[test]
    fn income_report_renders_all_three_totals() {
        let ledger = demo();
        let report = income(&ledger);
        let text = render(|out| write_income(out, &report, !ledger.sales().is_empty()));
        assert!(text.contains("Total gross revenue: $239.97"));
        assert!(text.contains("Total discounts:     $24.00"));
        assert!(text.contains("Total net revenue:   $215.97"));
    }

    #[test]
    fn reports_on_an_empty_ledger_say_so() {
        let ledger = Ledger::new();
        let text = render(|out| write_top_products(out, &top_products(&ledger, 3)));
        assert!(text.contains("No sales to report."));
        let text = render(|out| write_performance(out, &inventory_performance(&ledger)));
        assert!(text.contains("No inventory."));
    }

    #[test]
    fn performance_lines_include_status_vocabulary() {
        let ledger = demo();
        let text = render(|out| write_performance(out, &inventory_performance(&ledger)));
        // 3 of 25 sold = 12.0% -> OK
        assert!(text.contains("turnover 12.0% -> OK"));
    }
}
