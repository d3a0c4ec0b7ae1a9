//! Menu-driven console session over a [`Ledger`].
//!
//! Every domain error is reported and recovered at the menu boundary; an
//! interrupted entry aborts only the current operation. The loop ends on
//! the exit option, end of input, or an unrecoverable terminal error.

use std::io::{self, BufRead, Write};

use chrono::Utc;

use stockbook_catalog::{ProductPatch, RegisterProduct};
use stockbook_core::{DomainError, ProductId};
use stockbook_ledger::{Ledger, income, inventory_performance, revenue_by_brand, top_products};
use stockbook_sales::{ClientCategory, RecordSale};

use crate::prompt::{PromptError, PromptResult, Prompter};
use crate::view;

const MAIN_MENU: &str = "\nMain Menu:\n\
    1. Show inventory\n\
    2. Register product\n\
    3. Consult product\n\
    4. Update product\n\
    5. Delete product\n\
    6. Register sale\n\
    7. Consult sales\n\
    8. Reports\n\
    9. Exit";

const REPORTS_MENU: &str = "\n--- Reports Menu ---\n\
    1. Top 3 products sold\n\
    2. Sales grouped by brand\n\
    3. Income (gross & net)\n\
    4. Inventory performance\n\
    5. Back to main menu";

/// Drive the interactive session until exit or end of input.
pub fn run<R: BufRead, W: Write>(
    ledger: &mut Ledger,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let mut prompter = Prompter::new(input, output);
    if let Err(PromptError::Io(e)) = prompter.say("\nWelcome - Inventory & Sales System") {
        return Err(e);
    }

    loop {
        let choice = match show_and_choose(&mut prompter, MAIN_MENU) {
            Ok(choice) => choice,
            Err(PromptError::Interrupted) => return Ok(()),
            Err(PromptError::Io(e)) => return Err(e),
        };

        let result = match choice.as_str() {
            "1" => view::write_inventory(prompter.output(), ledger).map_err(PromptError::from),
            "2" => register_product(ledger, &mut prompter),
            "3" => consult_product(ledger, &mut prompter),
            "4" => update_product(ledger, &mut prompter),
            "5" => delete_product(ledger, &mut prompter),
            "6" => register_sale(ledger, &mut prompter),
            "7" => {
                view::write_sales_history(prompter.output(), ledger.sales())
                    .map_err(PromptError::from)
            }
            "8" => reports_menu(ledger, &mut prompter),
            "9" => {
                prompter.say("Goodbye. System shutting down cleanly.").ok();
                return Ok(());
            }
            _ => prompter.say("Invalid choice, choose a number from the menu."),
        };

        match result {
            Ok(()) => {}
            Err(PromptError::Interrupted) => {
                if let Err(PromptError::Io(e)) = prompter.say("\nCancelled.") {
                    return Err(e);
                }
            }
            Err(PromptError::Io(e)) => return Err(e),
        }
    }
}

fn show_and_choose<R: BufRead, W: Write>(
    prompter: &mut Prompter<'_, R, W>,
    menu: &str,
) -> PromptResult<String> {
    prompter.say(menu)?;
    prompter.line("Choose an option: ")
}

/// Re-prompts until the id names an existing product.
fn choose_product<R: BufRead, W: Write>(
    ledger: &Ledger,
    prompter: &mut Prompter<'_, R, W>,
) -> PromptResult<ProductId> {
    loop {
        let id = prompter.product_id("Select product id: ")?;
        if ledger.product(id).is_ok() {
            return Ok(id);
        }
        prompter.say("Product id not found. Try again.")?;
    }
}

fn register_product<R: BufRead, W: Write>(
    ledger: &mut Ledger,
    prompter: &mut Prompter<'_, R, W>,
) -> PromptResult<()> {
    prompter.say("\nRegister new product")?;
    let name = prompter.nonempty("Name: ")?;
    let brand = prompter.nonempty("Brand: ")?;
    let category = prompter.line("Category: ")?;
    let unit_price = prompter.money("Unit price (e.g. 49.99): ")?;
    let stock = prompter.u32_min("Initial quantity in stock: ", 0)?;
    let warranty_months = prompter.u32_min("Warranty (months): ", 0)?;

    match ledger.register_product(RegisterProduct {
        name,
        brand,
        category,
        unit_price,
        stock,
        warranty_months,
    }) {
        Ok(id) => prompter.say(&format!("Product registered with id {id}.")),
        Err(err) => prompter.say(&format!("Registration failed: {err}")),
    }
}

fn consult_product<R: BufRead, W: Write>(
    ledger: &Ledger,
    prompter: &mut Prompter<'_, R, W>,
) -> PromptResult<()> {
    view::write_inventory(prompter.output(), ledger)?;
    if ledger.catalog_len() == 0 {
        return Ok(());
    }
    let id = choose_product(ledger, prompter)?;
    match ledger.product(id) {
        Ok(product) => view::write_product_details(prompter.output(), product)?,
        Err(err) => prompter.say(&format!("{err}"))?,
    }
    Ok(())
}

fn update_product<R: BufRead, W: Write>(
    ledger: &mut Ledger,
    prompter: &mut Prompter<'_, R, W>,
) -> PromptResult<()> {
    view::write_inventory(prompter.output(), ledger)?;
    if ledger.catalog_len() == 0 {
        return Ok(());
    }
    let id = choose_product(ledger, prompter)?;
    // Checked by choose_product; read the current values for the prompts.
    let (name, brand, category, price, stock, warranty) = match ledger.product(id) {
        Ok(p) => (
            p.name().to_owned(),
            p.brand().to_owned(),
            p.category().to_owned(),
            p.unit_price(),
            p.stock(),
            p.warranty_months(),
        ),
        Err(err) => return prompter.say(&format!("{err}")),
    };

    prompter.say("Leave blank to keep current value.")?;
    let patch = ProductPatch {
        name: prompter.optional_line(&format!("Name [{name}]: "))?,
        brand: prompter.optional_line(&format!("Brand [{brand}]: "))?,
        category: prompter.optional_line(&format!("Category [{category}]: "))?,
        unit_price: prompter.optional_money(&format!("Unit price [{price}]: "), "price")?,
        stock: prompter.optional_u32(&format!("Stock [{stock}]: "), "stock")?,
        warranty_months: prompter
            .optional_u32(&format!("Warranty months [{warranty}]: "), "warranty")?,
    };

    if patch.is_empty() {
        return prompter.say("Nothing to update.");
    }
    match ledger.update_product(id, patch) {
        Ok(outcome) => {
            for field in &outcome.skipped {
                prompter.say(&format!("Invalid {field}; keeping old value."))?;
            }
            if outcome.changed() {
                prompter.say("Product updated.")
            } else {
                prompter.say("Nothing to update.")
            }
        }
        Err(err) => prompter.say(&format!("Update failed: {err}")),
    }
}

fn delete_product<R: BufRead, W: Write>(
    ledger: &mut Ledger,
    prompter: &mut Prompter<'_, R, W>,
) -> PromptResult<()> {
    view::write_inventory(prompter.output(), ledger)?;
    if ledger.catalog_len() == 0 {
        return Ok(());
    }
    let id = choose_product(ledger, prompter)?;
    let name = match ledger.product(id) {
        Ok(p) => p.name().to_owned(),
        Err(err) => return prompter.say(&format!("{err}")),
    };

    let confirmed = prompter.confirm(&format!("Confirm delete product id {id} ({name})? (y/n): "))?;
    if !confirmed {
        return prompter.say("Deletion cancelled.");
    }

    match ledger.delete_product(id) {
        Ok(_) => prompter.say("Product deleted."),
        Err(DomainError::Conflict(_)) => prompter.say(
            "Cannot delete product with historical sales records. Consider marking it inactive instead.",
        ),
        Err(err) => prompter.say(&format!("Deletion failed: {err}")),
    }
}

fn register_sale<R: BufRead, W: Write>(
    ledger: &mut Ledger,
    prompter: &mut Prompter<'_, R, W>,
) -> PromptResult<()> {
    prompter.say("\nRegister a sale")?;
    let client = prompter.nonempty("Client name: ")?;
    let category_input = prompter.line("Client type (regular/vip/employee/wholesale): ")?;
    let client_category = ClientCategory::parse_lossy(&category_input);

    view::write_inventory(prompter.output(), ledger)?;
    if ledger.catalog_len() == 0 {
        return Ok(());
    }
    let product_id = choose_product(ledger, prompter)?;
    let quantity = prompter.u32_min("Quantity to sell: ", 1)?;

    match ledger.record_sale(RecordSale {
        client,
        client_category,
        product_id,
        quantity,
        occurred_at: Utc::now(),
    }) {
        Ok(sale) => {
            let line = format!(
                "Sale recorded. Sale ID: {}. Gross: ${} Discount: {}% Net: ${}",
                sale.id_typed(),
                sale.gross(),
                sale.discount_pct(),
                sale.net()
            );
            prompter.say(&line)
        }
        Err(DomainError::InsufficientStock { available, .. }) => prompter.say(&format!(
            "Insufficient stock. Available: {available}. Sale aborted."
        )),
        Err(err) => prompter.say(&format!("Sale failed: {err}")),
    }
}

fn reports_menu<R: BufRead, W: Write>(
    ledger: &Ledger,
    prompter: &mut Prompter<'_, R, W>,
) -> PromptResult<()> {
    loop {
        let choice = show_and_choose(prompter, REPORTS_MENU)?;
        match choice.as_str() {
            "1" => view::write_top_products(prompter.output(), &top_products(ledger, 3))?,
            "2" => view::write_brand_revenue(prompter.output(), &revenue_by_brand(ledger))?,
            "3" => {
                let report = income(ledger);
                view::write_income(prompter.output(), &report, !ledger.sales().is_empty())?;
            }
            "4" => view::write_performance(prompter.output(), &inventory_performance(ledger))?,
            "5" => return Ok(()),
            _ => prompter.say("Invalid option.")?,
        }
    }
}
