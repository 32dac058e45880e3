use std::cell::Cell;

use crudsmith_core::{application::ports::LayerPrompt, domain::Layer, error::CrudsmithResult};

/// Answers every prompt with a preset value, or the default when unset.
///
/// Used when stdin is not a terminal, and in tests.
#[derive(Debug, Default)]
pub struct FixedPrompt {
    answer: Option<String>,
    asked: Cell<usize>,
}

impl FixedPrompt {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: Some(answer.into()),
            asked: Cell::new(0),
        }
    }

    /// Number of times the prompt was shown.
    pub fn asked(&self) -> usize {
        self.asked.get()
    }
}

impl LayerPrompt for FixedPrompt {
    fn choose(&self, _choices: &[Layer], default: Layer) -> CrudsmithResult<String> {
        self.asked.set(self.asked.get() + 1);
        Ok(self
            .answer
            .clone()
            .unwrap_or_else(|| default.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default() {
        let prompt = FixedPrompt::default();
        assert_eq!(prompt.choose(&Layer::ALL, Layer::Backend).unwrap(), "backend");
        assert_eq!(prompt.asked(), 1);
    }

    #[test]
    fn returns_raw_answer() {
        let prompt = FixedPrompt::new("Sideways");
        assert_eq!(prompt.choose(&Layer::ALL, Layer::Backend).unwrap(), "Sideways");
    }
}
