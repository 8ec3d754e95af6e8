//! Natural-language explanations of a strategy, behind a text-generation seam.
//!
//! No network client ships here. A caller supplies a [`TextGenerator`]; this
//! module owns the prompt and the failure policy. Generation failures never
//! reach the caller: they are logged and replaced by [`FALLBACK_MESSAGE`].

use std::env;

use pathlab_kernel::graph::scenario::Scenario;
use pathlab_search::strategy::Strategy;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

/// Shown in place of an explanation when generation fails.
pub const FALLBACK_MESSAGE: &str =
    "I'm sorry, I couldn't process that request right now. Please check your connection or try again.";

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";
pub const DEFAULT_MAX_WORDS: u32 = 250;

/// Overrides [`ExplainConfig::model`] when set and non-empty.
pub const MODEL_ENV: &str = "PATHLAB_EXPLAIN_MODEL";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("text generation unavailable: {detail}")]
    Unavailable { detail: String },
    #[error("text generation returned no content")]
    Empty,
    #[error("environment variable {var} is not set")]
    MissingApiKey { var: String },
}

/// Anything that turns a prompt into Markdown.
pub trait TextGenerator {
    /// # Errors
    ///
    /// Any [`GenerationError`]; [`explain`] recovers from all of them.
    fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Generator settings. The key itself is never stored, only where to find it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExplainConfig {
    pub model: String,
    pub api_key_env: String,
    pub max_words: u32,
}

impl Default for ExplainConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            max_words: DEFAULT_MAX_WORDS,
        }
    }
}

impl ExplainConfig {
    /// Defaults, with the model taken from [`MODEL_ENV`] if present.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(model) = env::var(MODEL_ENV).ok().filter(|m| !m.trim().is_empty()) {
            config.model = model.trim().to_string();
        }
        config
    }

    /// Read the API key from the configured variable.
    ///
    /// # Errors
    ///
    /// [`GenerationError::MissingApiKey`] if the variable is unset or blank.
    pub fn api_key(&self) -> Result<String, GenerationError> {
        env::var(&self.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| GenerationError::MissingApiKey {
                var: self.api_key_env.clone(),
            })
    }
}

/// Professor-style prompt for one question about one strategy.
#[must_use]
pub fn build_prompt(
    strategy: Strategy,
    topic: &str,
    scenario: Option<&Scenario>,
    max_words: u32,
) -> String {
    let mut prompt = format!(
        "As a world-class computer science professor, explain the following topic about the {} search algorithm:\n\"{}\"\n",
        strategy.display_name(),
        topic.trim()
    );
    if let Some(scenario) = scenario {
        prompt.push_str(&format!(
            "\nContext: the learner is watching it run on the \"{}\" graph ({}), from {} to {}.\n",
            scenario.name, scenario.description, scenario.start, scenario.goal
        ));
    }
    prompt.push_str(&format!(
        "\nKeep the explanation:\n\
         1. Technically accurate but accessible.\n\
         2. Focused on search theory (Completeness, Optimality, Complexity).\n\
         3. Use Markdown formatting.\n\
         4. Maximum {max_words} words.\n"
    ));
    prompt
}

/// Generated Markdown, or [`FALLBACK_MESSAGE`].
pub fn explain(
    generator: &dyn TextGenerator,
    strategy: Strategy,
    topic: &str,
    scenario: Option<&Scenario>,
    config: &ExplainConfig,
) -> String {
    if topic.trim().is_empty() {
        error!(%strategy, "explanation requested without a topic");
        return FALLBACK_MESSAGE.to_string();
    }
    let prompt = build_prompt(strategy, topic, scenario, config.max_words);
    debug!(%strategy, model = %config.model, prompt_len = prompt.len(), "requesting explanation");
    match generator.generate(&prompt) {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            error!(%strategy, model = %config.model, error = %GenerationError::Empty, "explanation failed");
            FALLBACK_MESSAGE.to_string()
        }
        Err(e) => {
            error!(%strategy, model = %config.model, error = %e, "explanation failed");
            FALLBACK_MESSAGE.to_string()
        }
    }
}
