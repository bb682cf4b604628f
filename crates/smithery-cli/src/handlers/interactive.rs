//! Interactive command handler.
//!
//! Reads queries with rustyline and prints each execution report.
//! `exit`, `quit` and `q` leave; Ctrl+C and Ctrl+D do too.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::warn;

use crate::bootstrap::CliContext;
use crate::error::CliError;

const PROMPT: &str = "\nEnter your query: ";

/// Whether `input` asks to leave the loop.
pub fn is_exit_command(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "exit" | "quit" | "q")
}

/// Execute the interactive command.
pub async fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let agent = ctx.agent()?;
    let mut editor = DefaultEditor::new()?;

    println!("\nStarting interactive mode...");
    println!("Type 'exit' to quit");

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let query = line.trim();
                if is_exit_command(query) {
                    println!("Goodbye!");
                    break;
                }
                if query.is_empty() {
                    continue;
                }

                let _ = editor.add_history_entry(query);

                println!("\nProcessing...");
                match agent.plan_and_execute(query).await {
                    Ok(result) => println!("\nResult: {result}"),
                    Err(e) => {
                        warn!(error = %e, "Query failed");
                        eprintln!("\nError: {e}");
                    }
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                println!("\n\nGoodbye!");
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
