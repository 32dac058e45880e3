//! Backend/frontend resolution.

use tracing::debug;

use crate::{
    application::ports::LayerPrompt,
    domain::Layer,
    error::CrudsmithResult,
};

/// Resolves the layer for a run from an explicit value or a prompt.
pub struct LayerSelector;

impl LayerSelector {
    /// Preselected prompt answer.
    pub const DEFAULT: Layer = Layer::Backend;

    /// An explicit value wins; otherwise `prompt` is asked to choose between
    /// [`Layer::ALL`] with [`Self::DEFAULT`] preselected.
    ///
    /// Both sources are raw text, so an unknown value surfaces as
    /// `DomainError::InvalidLayer`.
    pub fn resolve(explicit: Option<&str>, prompt: &dyn LayerPrompt) -> CrudsmithResult<Layer> {
        let raw = match explicit {
            Some(value) => value.to_string(),
            None => {
                debug!("No layer given, prompting");
                prompt.choose(&Layer::ALL, Self::DEFAULT)?
            }
        };

        let layer = raw.parse::<Layer>()?;
        debug!(%layer, "Layer resolved");
        Ok(layer)
    }
}
