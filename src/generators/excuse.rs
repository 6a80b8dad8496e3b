//! Excuse generation via prompt forwarding.

use crate::llm::GeminiClient;

/// Builds believable excuses for a scenario by forwarding a templated
/// prompt to the model.
///
/// Generation failures are deliberately converted into a placeholder text
/// payload rather than propagated: the front ends always receive something
/// they can render and record.
pub struct ExcuseGenerator {
    client: GeminiClient,
    language: String,
}

impl ExcuseGenerator {
    /// Creates a generator that answers in `language`.
    pub fn new(client: GeminiClient, language: String) -> Self {
        Self { client, language }
    }

    /// Changes the output language for subsequent calls.
    pub fn set_language(&mut self, language: String) {
        self.language = language;
    }

    /// Current output language.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Generates an excuse for the given scenario, urgency, and tone.
    ///
    /// On upstream failure the returned text describes the error instead.
    pub async fn generate_excuse(&self, scenario: &str, urgency: &str, tone: &str) -> String {
        let prompt = build_excuse_prompt(scenario, urgency, tone, &self.language);
        match self.client.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => format!("Error generating excuse: {}", e),
        }
    }
}

/// Assembles the excuse prompt.
pub fn build_excuse_prompt(scenario: &str, urgency: &str, tone: &str, language: &str) -> String {
    format!(
        "Generate a {tone}-tone excuse for a {scenario} scenario. \
         The urgency level is {urgency}. \
         The excuse should sound natural and believable. \
         Respond in {language} language."
    )
}
