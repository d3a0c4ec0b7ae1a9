//! Demo catalog and sales so reports have data right after startup.

use chrono::Utc;

use stockbook_catalog::RegisterProduct;
use stockbook_core::{DomainResult, Money};
use stockbook_ledger::Ledger;
use stockbook_sales::{ClientCategory, RecordSale};

/// A ledger preloaded with five products and five demo sales.
pub fn demo_ledger() -> DomainResult<Ledger> {
    let mut ledger = Ledger::new();

    let products = [
        ("Aurora Headphones", "Soundix", "Audio", 7999u64, 25u32, 12u32),
        ("Volt Charger 65W", "Ampere", "Power", 3950, 40, 24),
        ("Nexus 10 Tablet", "NovaTech", "Computers", 24900, 10, 12),
        ("PixelCam 4K", "OptiSight", "Cameras", 49900, 6, 24),
        ("HomeSyx SmartPlug", "HomeSyx", "SmartHome", 1999, 60, 6),
    ];
    let mut ids = Vec::with_capacity(products.len());
    for (name, brand, category, price_cents, stock, warranty_months) in products {
        let id = ledger.register_product(RegisterProduct {
            name: name.to_string(),
            brand: brand.to_string(),
            category: category.to_string(),
            unit_price: Money::from_cents(price_cents),
            stock,
            warranty_months,
        })?;
        ids.push(id);
    }

    let sales = [
        ("Alice", ClientCategory::Vip, 0usize, 3u32),
        ("Bob", ClientCategory::Regular, 1, 5),
        ("Charlie Co.", ClientCategory::Wholesale, 4, 20),
        ("Diana", ClientCategory::Employee, 2, 1),
        ("Eve", ClientCategory::Regular, 3, 2),
    ];
    for (client, client_category, idx, quantity) in sales {
        ledger.record_sale(RecordSale {
            client: client.to_string(),
            client_category,
            product_id: ids[idx],
            quantity,
            occurred_at: Utc::now(),
        })?;
    }

    Ok(ledger)
}
