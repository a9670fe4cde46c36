//! Event idea generation through a generative-text service.
//!
//! The adapter boundary is plain text: `IdeaGenerator::generate` always
//! returns a `String`, and failures are signalled by the reserved
//! [`ERROR_PREFIX`]. `IdeaPrompt` sits in front of it and turns that text
//! back into an [`IdeaOutcome`] for display.

mod gemini;

use std::fmt;
use std::future::Future;

use tracing::{debug, warn};

use crate::config::IdeasConfig;

pub use gemini::GeminiClient;

/// Prefix that marks a returned text as a failure.
pub const ERROR_PREFIX: &str = "Error:";

pub const SYSTEM_INSTRUCTION: &str =
    "You are a creative event planner assistant. Provide concise and inspiring ideas.";
pub const TEMPERATURE: f32 = 0.8;
pub const TOP_K: u32 = 40;

pub const EMPTY_THEME_MESSAGE: &str = "Please enter an event theme.";
const MISSING_KEY_MESSAGE: &str =
    "Error: API key is not configured. Please set the API_KEY environment variable.";
const UNKNOWN_FAILURE_MESSAGE: &str = "Error: An unknown error occurred while generating ideas.";

/// A single request to the generative-text service.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    pub system_instruction: String,
    pub temperature: f32,
    pub top_k: u32,
}

/// A failed call. The message is optional, like a thrown non-Error value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationFailure {
    pub message: Option<String>,
}

impl GenerationFailure {
    pub fn new(message: impl Into<String>) -> Self {
        GenerationFailure {
            message: Some(message.into()),
        }
    }

    pub fn unknown() -> Self {
        GenerationFailure { message: None }
    }
}

impl fmt::Display for GenerationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{message}"),
            None => write!(f, "unknown failure"),
        }
    }
}

/// Transport to a generative-text service.
pub trait TextGenerator {
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<String, GenerationFailure>> + Send;
}

fn failure_message(message: &str) -> String {
    format!("{ERROR_PREFIX} An error occurred while generating ideas: {message}")
}

pub fn build_prompt(theme: &str) -> String {
    format!(
        "Generate 3 creative and brief event ideas for the following theme: \"{theme}\". \
         Focus on decorations, activities, and a unique food idea. \
         Format the response as a simple list."
    )
}

enum Backend<G> {
    Live(G),
    MissingKey,
    /// The transport could not be built; holds the reason.
    Unavailable(String),
}

/// Stateless idea adapter.
pub struct IdeaGenerator<G> {
    backend: Backend<G>,
    model: String,
}

impl<G: TextGenerator> IdeaGenerator<G> {
    pub fn new(transport: G, model: impl Into<String>) -> Self {
        IdeaGenerator {
            backend: Backend::Live(transport),
            model: model.into(),
        }
    }

    /// An adapter with no credential. Every call returns the missing-key sentinel.
    pub fn unconfigured(model: impl Into<String>) -> Self {
        IdeaGenerator {
            backend: Backend::MissingKey,
            model: model.into(),
        }
    }

    /// An adapter whose transport failed to start. Every call reports `reason`.
    pub fn unavailable(model: impl Into<String>, reason: impl Into<String>) -> Self {
        IdeaGenerator {
            backend: Backend::Unavailable(reason.into()),
            model: model.into(),
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self.backend, Backend::Live(_))
    }

    pub fn request_for(&self, theme: &str) -> GenerationRequest {
        GenerationRequest {
            model: self.model.clone(),
            prompt: build_prompt(theme.trim()),
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            temperature: TEMPERATURE,
            top_k: TOP_K,
        }
    }

    /// Generate ideas for `theme`. Failures come back as `Error:`-prefixed text.
    pub async fn generate(&self, theme: &str) -> String {
        if theme.trim().is_empty() {
            return format!("{ERROR_PREFIX} {EMPTY_THEME_MESSAGE}");
        }

        let transport = match &self.backend {
            Backend::Live(transport) => transport,
            Backend::MissingKey => return MISSING_KEY_MESSAGE.to_string(),
            Backend::Unavailable(reason) => return failure_message(reason),
        };

        let request = self.request_for(theme);
        debug!(model = %request.model, "requesting event ideas");

        match transport.generate(&request).await {
            Ok(text) => text,
            Err(failure) => {
                warn!(error = %failure, "idea generation failed");
                match failure.message {
                    Some(message) => failure_message(&message),
                    None => UNKNOWN_FAILURE_MESSAGE.to_string(),
                }
            }
        }
    }
}

impl IdeaGenerator<GeminiClient> {
    /// Build the live adapter from configuration.
    ///
    /// A missing credential is not fatal: it is logged once here and every
    /// call returns the missing-key sentinel.
    pub fn from_config(config: &IdeasConfig) -> Self {
        let Some(api_key) = config.api_key() else {
            warn!(
                "{} environment variable not set. Idea generation calls will fail.",
                config.api_key_env
            );
            return IdeaGenerator::unconfigured(&config.model);
        };

        match GeminiClient::new(&config.base_url, api_key) {
            Ok(client) => IdeaGenerator::new(client, &config.model),
            Err(e) => {
                warn!(error = %e, "failed to build HTTP client; idea generation disabled");
                IdeaGenerator::unavailable(&config.model, format!("could not start HTTP client: {e}"))
            }
        }
    }
}

/// What the idea widget shows after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdeaOutcome {
    Ideas(String),
    /// Text returned by the adapter with the error prefix
    Failed(String),
    /// Rejected locally; no call was made
    Invalid(&'static str),
}

/// Input-side wrapper around an [`IdeaGenerator`].
pub struct IdeaPrompt<'a, G> {
    generator: &'a IdeaGenerator<G>,
}

impl<'a, G: TextGenerator> IdeaPrompt<'a, G> {
    pub fn new(generator: &'a IdeaGenerator<G>) -> Self {
        IdeaPrompt { generator }
    }

    pub async fn submit(&self, theme: &str) -> IdeaOutcome {
        if theme.trim().is_empty() {
            return IdeaOutcome::Invalid(EMPTY_THEME_MESSAGE);
        }

        let text = self.generator.generate(theme).await;
        if text.starts_with(ERROR_PREFIX) {
            IdeaOutcome::Failed(text)
        } else {
            IdeaOutcome::Ideas(text)
        }
    }
}
