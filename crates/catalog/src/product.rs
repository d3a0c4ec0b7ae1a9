use serde::{Deserialize, Serialize};

use stockbook_core::{DomainError, DomainResult, Entity, Money, ProductId};

/// Category assigned when registration leaves the field blank.
const DEFAULT_CATEGORY: &str = "General";

/// A catalog product.
///
/// `initial_stock` is fixed at registration and never changes afterwards;
/// it is the baseline for turnover reporting. `stock` moves with updates
/// and sale fulfillment but can never go negative (type-enforced).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    brand: String,
    category: String,
    unit_price: Money,
    stock: u32,
    warranty_months: u32,
    initial_stock: u32,
}

/// Command: register a new product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterProduct {
    pub name: String,
    pub brand: String,
    /// Blank falls back to `"General"`.
    pub category: String,
    pub unit_price: Money,
    pub stock: u32,
    pub warranty_months: u32,
}

/// Partial update: only supplied fields are touched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub unit_price: Option<Money>,
    pub stock: Option<u32>,
    pub warranty_months: Option<u32>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.brand.is_none()
            && self.category.is_none()
            && self.unit_price.is_none()
            && self.stock.is_none()
            && self.warranty_months.is_none()
    }
}

/// Which patch fields were applied and which were skipped as invalid.
///
/// A patch never fails as a whole: an individually invalid field (e.g. a
/// blank name) is skipped while the remaining valid fields still apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub applied: Vec<&'static str>,
    pub skipped: Vec<&'static str>,
}

impl UpdateOutcome {
    pub fn changed(&self) -> bool {
        !self.applied.is_empty()
    }
}

impl Product {
    /// Validate a registration command and build the product.
    ///
    /// Fails with `Validation` when name or brand trims to empty. The
    /// initial stock baseline is set to the registered stock.
    pub fn register(id: ProductId, cmd: RegisterProduct) -> DomainResult<Self> {
        let name = cmd.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        let brand = cmd.brand.trim();
        if brand.is_empty() {
            return Err(DomainError::validation("brand cannot be empty"));
        }
        let category = cmd.category.trim();
        let category = if category.is_empty() {
            DEFAULT_CATEGORY
        } else {
            category
        };

        Ok(Self {
            id,
            name: name.to_owned(),
            brand: brand.to_owned(),
            category: category.to_owned(),
            unit_price: cmd.unit_price,
            stock: cmd.stock,
            warranty_months: cmd.warranty_months,
            initial_stock: cmd.stock,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn warranty_months(&self) -> u32 {
        self.warranty_months
    }

    pub fn initial_stock(&self) -> u32 {
        self.initial_stock
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }

    /// Apply a partial update. Stock adjustments leave `initial_stock`
    /// untouched so the turnover baseline stays meaningful.
    pub fn apply_patch(&mut self, patch: ProductPatch) -> UpdateOutcome {
        let mut outcome = UpdateOutcome::default();

        if let Some(name) = patch.name {
            let name = name.trim();
            if name.is_empty() {
                outcome.skipped.push("name");
            } else {
                self.name = name.to_owned();
                outcome.applied.push("name");
            }
        }
        if let Some(brand) = patch.brand {
            let brand = brand.trim();
            if brand.is_empty() {
                outcome.skipped.push("brand");
            } else {
                self.brand = brand.to_owned();
                outcome.applied.push("brand");
            }
        }
        if let Some(category) = patch.category {
            let category = category.trim();
            if category.is_empty() {
                outcome.skipped.push("category");
            } else {
                self.category = category.to_owned();
                outcome.applied.push("category");
            }
        }
        if let Some(price) = patch.unit_price {
            self.unit_price = price;
            outcome.applied.push("unit_price");
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
            outcome.applied.push("stock");
        }
        if let Some(warranty) = patch.warranty_months {
            self.warranty_months = warranty;
            outcome.applied.push("warranty_months");
        }

        outcome
    }

    /// Remove sold units from stock, all-or-nothing.
    pub fn deduct_stock(&mut self, quantity: u32) -> DomainResult<()> {
        if quantity > self.stock {
            return Err(DomainError::insufficient_stock(quantity, self.stock));
        }
        self.stock -= quantity;
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_cmd() -> RegisterProduct {
        RegisterProduct {
            name: "Aurora Headphones".to_string(),
            brand: "Soundix".to_string(),
            category: "Audio".to_string(),
            unit_price: Money::from_cents(7999),
            stock: 25,
            warranty_months: 12,
        }
    }

    #[test]
    fn register_keeps_supplied_fields_and_baselines_stock() {
        let product = Product::register(ProductId::new(1), register_cmd()).unwrap();
        assert_eq!(product.name(), "Aurora Headphones");
        assert_eq!(product.brand(), "Soundix");
        assert_eq!(product.category(), "Audio");
        assert_eq!(product.unit_price(), Money::from_cents(7999));
        assert_eq!(product.stock(), 25);
        assert_eq!(product.initial_stock(), 25);
        assert_eq!(product.warranty_months(), 12);
    }

    #[test]
    fn register_rejects_blank_name() {
        let cmd = RegisterProduct {
            name: "   ".to_string(),
            ..register_cmd()
        };
        let err = Product::register(ProductId::new(1), cmd).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn register_rejects_blank_brand() {
        let cmd = RegisterProduct {
            brand: String::new(),
            ..register_cmd()
        };
        let err = Product::register(ProductId::new(1), cmd).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn register_defaults_blank_category() {
        let cmd = RegisterProduct {
            category: "  ".to_string(),
            ..register_cmd()
        };
        let product = Product::register(ProductId::new(1), cmd).unwrap();
        assert_eq!(product.category(), "General");
    }

    #[test]
    fn patch_applies_only_supplied_fields() {
        let mut product = Product::register(ProductId::new(1), register_cmd()).unwrap();
        let outcome = product.apply_patch(ProductPatch {
            unit_price: Some(Money::from_cents(6950)),
            warranty_months: Some(24),
            ..ProductPatch::default()
        });

        assert_eq!(outcome.applied, vec!["unit_price", "warranty_months"]);
        assert!(outcome.skipped.is_empty());
        assert_eq!(product.unit_price(), Money::from_cents(6950));
        assert_eq!(product.warranty_months(), 24);
        // Untouched fields keep their values.
        assert_eq!(product.name(), "Aurora Headphones");
        assert_eq!(product.stock(), 25);
    }

    #[test]
    fn patch_skips_blank_name_but_applies_valid_fields() {
        let mut product = Product::register(ProductId::new(1), register_cmd()).unwrap();
        let outcome = product.apply_patch(ProductPatch {
            name: Some("   ".to_string()),
            stock: Some(30),
            ..ProductPatch::default()
        });

        assert_eq!(outcome.skipped, vec!["name"]);
        assert_eq!(outcome.applied, vec!["stock"]);
        assert_eq!(product.name(), "Aurora Headphones");
        assert_eq!(product.stock(), 30);
    }

    #[test]
    fn patch_stock_does_not_move_initial_stock() {
        let mut product = Product::register(ProductId::new(1), register_cmd()).unwrap();
        product.apply_patch(ProductPatch {
            stock: Some(100),
            ..ProductPatch::default()
        });
        assert_eq!(product.stock(), 100);
        assert_eq!(product.initial_stock(), 25);
    }

    #[test]
    fn deduct_stock_is_all_or_nothing() {
        let mut product = Product::register(ProductId::new(1), register_cmd()).unwrap();
        product.deduct_stock(10).unwrap();
        assert_eq!(product.stock(), 15);

        let err = product.deduct_stock(16).unwrap_err();
        assert_eq!(
            err,
            DomainError::InsufficientStock {
                requested: 16,
                available: 15
            }
        );
        assert_eq!(product.stock(), 15);
    }

    #[test]
    fn deduct_to_exactly_zero_is_allowed() {
        let mut product = Product::register(ProductId::new(1), register_cmd()).unwrap();
        product.deduct_stock(25).unwrap();
        assert!(product.is_out_of_stock());
    }
}
