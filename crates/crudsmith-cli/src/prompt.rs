//! Layer prompt shown when neither `--layer` nor `defaults.layer` is set.
//!
//! With the `interactive` feature the choice is a `dialoguer` select list;
//! without it a single line is read from stdin. When stdin is not a terminal
//! nobody can answer, so the default layer is taken without asking.

use std::io::{self, IsTerminal};

use crudsmith_adapters::FixedPrompt;
use crudsmith_core::{
    application::{ApplicationError, ports::LayerPrompt},
    domain::Layer,
    error::CrudsmithResult,
};
use tracing::debug;

/// Prompt implementation for the current process.
pub fn layer_prompt() -> Box<dyn LayerPrompt> {
    if io::stdin().is_terminal() {
        Box::new(TerminalPrompt)
    } else {
        debug!("stdin is not a terminal, layer prompt answers with the default");
        Box::new(FixedPrompt::default())
    }
}

/// Asks on the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

#[cfg(feature = "interactive")]
impl LayerPrompt for TerminalPrompt {
    fn choose(&self, choices: &[Layer], default: Layer) -> CrudsmithResult<String> {
        let items: Vec<&str> = choices.iter().map(Layer::as_str).collect();
        let default_index = choices.iter().position(|l| *l == default).unwrap_or(0);

        let index = dialoguer::Select::new()
            .with_prompt("Layer")
            .items(&items)
            .default(default_index)
            .interact()
            .map_err(|e| prompt_failed(e.to_string()))?;

        Ok(items
            .get(index)
            .map_or_else(|| default.to_string(), |s| (*s).to_string()))
    }
}

#[cfg(not(feature = "interactive"))]
impl LayerPrompt for TerminalPrompt {
    fn choose(&self, choices: &[Layer], default: Layer) -> CrudsmithResult<String> {
        use std::io::Write;

        let labels: Vec<&str> = choices.iter().map(Layer::as_str).collect();
        eprint!("Layer [{}] ({default}): ", labels.join("/"));
        io::stderr()
            .flush()
            .map_err(|e| prompt_failed(e.to_string()))?;

        let mut line = String::new();
        io::stdin()
            .read_line(&mut line)
            .map_err(|e| prompt_failed(e.to_string()))?;

        Ok(answer_or_default(&line, default))
    }
}

fn prompt_failed(reason: String) -> crudsmith_core::error::CrudsmithError {
    ApplicationError::PromptFailed { reason }.into()
}

/// A blank answer means the default.
#[cfg_attr(feature = "interactive", allow(dead_code))]
fn answer_or_default(line: &str, default: Layer) -> String {
    match line.trim() {
        "" => default.to_string(),
        answer => answer.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_answer_takes_default() {
        assert_eq!(answer_or_default("\n", Layer::Backend), "backend");
        assert_eq!(answer_or_default("   ", Layer::Frontend), "frontend");
    }

    #[test]
    fn answer_is_passed_through_raw() {
        assert_eq!(answer_or_default("Frontend\n", Layer::Backend), "Frontend");
        assert_eq!(answer_or_default("api", Layer::Backend), "api");
    }
}
