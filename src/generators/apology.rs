//! Apology generation via prompt forwarding.

use crate::llm::GeminiClient;

/// Builds sincere-sounding apologies for a situation.
///
/// Shares the degraded-content policy of [`super::ExcuseGenerator`]:
/// upstream failures become a text payload, never a propagated error.
pub struct ApologyGenerator {
    client: GeminiClient,
}

impl ApologyGenerator {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    /// Generates an apology for the given situation and tone.
    ///
    /// On upstream failure the returned text describes the error instead.
    pub async fn generate_apology(&self, situation: &str, tone: &str) -> String {
        let prompt = build_apology_prompt(situation, tone);
        match self.client.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => format!("Error generating apology: {}", e),
        }
    }
}

/// Assembles the apology prompt.
pub fn build_apology_prompt(situation: &str, tone: &str) -> String {
    format!(
        "Generate a {tone} apology for the following situation: {situation}. \
         The apology should sound sincere and include elements that would \
         make the recipient more likely to forgive."
    )
}
