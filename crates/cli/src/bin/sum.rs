//! Two-number addition prompt.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use stockbook_cli::prompt::{PromptError, Prompter};

fn main() -> Result<()> {
    stockbook_observability::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<()> {
    let mut prompter = Prompter::new(input, output);
    match add_two(&mut prompter) {
        Ok(()) | Err(PromptError::Interrupted) => Ok(()),
        Err(PromptError::Io(e)) => Err(e),
    }
}

fn add_two<R: BufRead, W: Write>(prompter: &mut Prompter<'_, R, W>) -> Result<(), PromptError> {
    prompter.say("Let's add two numbers")?;
    let a = prompter.number("Please enter a number: ")?;
    let b = prompter.number("Please enter the second number: ")?;
    prompter.say(&format!("The result is: {}", a + b))
}
