use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockbook_catalog::Product;
use stockbook_core::{DomainError, DomainResult, Entity, Money, ProductId, SaleId};

use crate::client::ClientCategory;

/// Command: record a sale against a catalog product.
///
/// Carries `occurred_at` explicitly so the domain stays deterministic;
/// callers pass `Utc::now()` at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSale {
    pub client: String,
    pub client_category: ClientCategory,
    pub product_id: ProductId,
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// An immutable, recorded sale.
///
/// Product name, brand and unit price are denormalized snapshots taken at
/// sale time: later catalog edits (or the product's deletion) never rewrite
/// history. There is deliberately no mutating method on this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    id: SaleId,
    client: String,
    client_category: ClientCategory,
    product_id: ProductId,
    product_name: String,
    brand: String,
    unit_price: Money,
    quantity: u32,
    discount_pct: u8,
    gross: Money,
    net: Money,
    recorded_at: DateTime<Utc>,
}

impl Sale {
    /// Validate the command against the product and price the sale.
    ///
    /// Pure: stock is checked and decremented by the ledger, not here.
    /// Pricing: `gross = unit_price x quantity`, `net = gross - discount`
    /// with the discount rounded at the cent.
    pub fn record(id: SaleId, product: &Product, cmd: &RecordSale) -> DomainResult<Self> {
        let client = cmd.client.trim();
        if client.is_empty() {
            return Err(DomainError::validation("client name cannot be empty"));
        }
        if cmd.quantity == 0 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }

        let discount_pct = cmd.client_category.discount_pct();
        let gross = product.unit_price().times(cmd.quantity)?;
        let net = gross.minus(gross.percent(discount_pct));

        Ok(Self {
            id,
            client: client.to_owned(),
            client_category: cmd.client_category,
            product_id: product.id_typed(),
            product_name: product.name().to_owned(),
            brand: product.brand().to_owned(),
            unit_price: product.unit_price(),
            quantity: cmd.quantity,
            discount_pct,
            gross,
            net,
            recorded_at: cmd.occurred_at,
        })
    }

    pub fn id_typed(&self) -> SaleId {
        self.id
    }

    pub fn client(&self) -> &str {
        &self.client
    }

    pub fn client_category(&self) -> ClientCategory {
        self.client_category
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn discount_pct(&self) -> u8 {
        self.discount_pct
    }

    pub fn gross(&self) -> Money {
        self.gross
    }

    pub fn net(&self) -> Money {
        self.net
    }

    pub fn discount_amount(&self) -> Money {
        self.gross.minus(self.net)
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

impl Entity for Sale {
    type Id = SaleId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
