use serde::{Deserialize, Serialize};

use stockbook_catalog::{Catalog, Product, ProductPatch, RegisterProduct, UpdateOutcome};
use stockbook_core::{DomainError, DomainResult, ProductId, SaleId};
use stockbook_sales::{RecordSale, Sale};

/// The in-memory ledger: catalog + append-only sales log + id sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    catalog: Catalog,
    sales: Vec<Sale>,
    next_product_id: ProductId,
    next_sale_id: SaleId,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(),
            sales: Vec::new(),
            next_product_id: ProductId::new(1),
            next_sale_id: SaleId::new(1),
        }
    }

    // ---- Catalog manager ----

    /// Register a new product and return its freshly assigned id.
    pub fn register_product(&mut self, cmd: RegisterProduct) -> DomainResult<ProductId> {
        let id = self.next_product_id;
        let product = Product::register(id, cmd)?;
        self.catalog.insert(product);
        self.next_product_id = id.next();
        tracing::info!(product_id = %id, "product registered");
        Ok(id)
    }

    pub fn product(&self, id: ProductId) -> DomainResult<&Product> {
        self.catalog.get(id).ok_or(DomainError::NotFound)
    }

    /// Apply a partial update. Individually invalid fields are skipped
    /// while the valid ones still land; the outcome says which was which.
    pub fn update_product(
        &mut self,
        id: ProductId,
        patch: ProductPatch,
    ) -> DomainResult<UpdateOutcome> {
        let product = self.catalog.get_mut(id).ok_or(DomainError::NotFound)?;
        let outcome = product.apply_patch(patch);
        tracing::debug!(
            product_id = %id,
            applied = ?outcome.applied,
            skipped = ?outcome.skipped,
            "product updated"
        );
        Ok(outcome)
    }

    /// Delete a product. Blocked while any sale references it, so sale
    /// history always points at ids that once existed in this ledger.
    pub fn delete_product(&mut self, id: ProductId) -> DomainResult<Product> {
        if !self.catalog.contains(id) {
            return Err(DomainError::NotFound);
        }
        if self.sales.iter().any(|s| s.product_id() == id) {
            return Err(DomainError::conflict(
                "product has historical sales records",
            ));
        }
        // Checked above.
        let product = self.catalog.remove(id).ok_or(DomainError::NotFound)?;
        tracing::info!(product_id = %id, "product deleted");
        Ok(product)
    }

    /// Products in insertion order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.catalog.iter()
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    // ---- Sales register ----

    /// Record a sale: validate, price, decrement stock, append.
    ///
    /// All-or-nothing: on any failure (validation, unknown product,
    /// insufficient stock) the ledger is left untouched.
    pub fn record_sale(&mut self, cmd: RecordSale) -> DomainResult<&Sale> {
        let product = self
            .catalog
            .get(cmd.product_id)
            .ok_or(DomainError::NotFound)?;

        let sale = Sale::record(self.next_sale_id, product, &cmd)?;

        // Stock check is the last gate; nothing has been mutated yet.
        let product = self
            .catalog
            .get_mut(cmd.product_id)
            .ok_or(DomainError::NotFound)?;
        product.deduct_stock(cmd.quantity)?;

        tracing::info!(
            sale_id = %sale.id_typed(),
            product_id = %cmd.product_id,
            quantity = cmd.quantity,
            gross = %sale.gross(),
            net = %sale.net(),
            "sale recorded"
        );

        self.next_sale_id = self.next_sale_id.next();
        self.sales.push(sale);
        // Just pushed.
        self.sales.last().ok_or(DomainError::NotFound)
    }

    /// Sales in the order they were recorded.
    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    /// Total units sold for a product across the whole log.
    pub fn units_sold(&self, id: ProductId) -> u64 {
        self.sales
            .iter()
            .filter(|s| s.product_id() == id)
            .map(|s| u64::from(s.quantity()))
            .sum()
    }
}
