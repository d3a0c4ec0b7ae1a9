//! Menu-driven four-operation calculator.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use stockbook_calc::Operation;
use stockbook_cli::prompt::{PromptError, Prompter};

const MENU: &str = "\n CALCULATOR\n\
    1. Add\n\
    2. Subtract\n\
    3. Multiply\n\
    4. Divide\n\
    5. Exit";

fn main() -> Result<()> {
    stockbook_observability::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<()> {
    let mut prompter = Prompter::new(input, output);
    loop {
        match one_round(&mut prompter) {
            Ok(true) => {}
            Ok(false) => return Ok(()),
            Err(PromptError::Interrupted) => return Ok(()),
            Err(PromptError::Io(e)) => return Err(e),
        }
    }
}

/// One menu round. `Ok(false)` means the user chose to exit.
fn one_round<R: BufRead, W: Write>(
    prompter: &mut Prompter<'_, R, W>,
) -> Result<bool, PromptError> {
    prompter.say(MENU)?;
    let choice = prompter.line("Choose an option: ")?;
    if choice == "5" {
        prompter.say("Exiting.")?;
        return Ok(false);
    }
    let Some(operation) = Operation::from_menu_input(&choice) else {
        prompter.say("Invalid option.")?;
        return Ok(true);
    };

    let a = prompter.number("Enter the first number: ")?;
    let b = prompter.number("Enter the second number: ")?;
    match operation.apply(a, b) {
        Ok(result) => prompter.say(&format!("The result is: {result}"))?,
        Err(err) => prompter.say(&format!("Error: {err}."))?,
    }
    Ok(true)
}
