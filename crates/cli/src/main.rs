//! Inventory & sales console application entry point.

use std::io;

use anyhow::Result;

use stockbook_cli::{menu, seed};
use stockbook_ledger::Ledger;

fn main() -> Result<()> {
    stockbook_observability::init();

    let mut ledger = if std::env::var_os("STOCKBOOK_NO_DEMO").is_some() {
        Ledger::new()
    } else {
        seed::demo_ledger()?
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::run(&mut ledger, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
