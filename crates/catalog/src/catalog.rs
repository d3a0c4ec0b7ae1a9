use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockbook_core::ProductId;

use crate::product::Product;

/// The product table.
///
/// Keyed by `ProductId`; ids are assigned monotonically, so iterating in
/// key order is also insertion order, which the listings and reports rely
/// on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    products: BTreeMap<ProductId, Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, product: Product) {
        self.products.insert(product.id_typed(), product);
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    pub fn get_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.get_mut(&id)
    }

    pub fn remove(&mut self, id: ProductId) -> Option<Product> {
        self.products.remove(&id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.products.contains_key(&id)
    }

    /// Products in insertion (id) order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
