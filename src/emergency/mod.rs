//! Emergency-contact simulation.
//!
//! Produces a staged "incoming call" transcript with real-time pauses
//! between lines, plus the urgent text message that goes with it. The
//! pauses are a presentation effect only; the transcript content is
//! identical with delays disabled, which is how tests and the HTTP front
//! end run it.

use std::time::Duration;
use tokio::time::sleep;

/// Pause lengths between transcript beats, in order.
const CALL_BEATS: [Duration; 3] = [
    Duration::from_secs(2),
    Duration::from_secs(2),
    Duration::from_secs(1),
];

/// Simulates emergency calls and texts.
#[derive(Debug, Clone, Copy)]
pub struct EmergencySystem {
    delays_enabled: bool,
}

impl Default for EmergencySystem {
    fn default() -> Self {
        Self::new()
    }
}

impl EmergencySystem {
    /// Creates a simulator with real-time pauses enabled.
    pub fn new() -> Self {
        Self {
            delays_enabled: true,
        }
    }

    /// Creates a simulator that emits the transcript without pausing.
    pub fn without_delays() -> Self {
        Self {
            delays_enabled: false,
        }
    }

    /// Stages a fake incoming call from `contact_name`.
    ///
    /// Returns the transcript lines in order; when delays are enabled the
    /// beats are separated by sleeps so a CLI can print them as they
    /// "happen". Callers that want the staged effect print each line as it
    /// is produced via [`simulate_call_with`].
    pub async fn simulate_call(&self, contact_name: &str) -> Vec<String> {
        let mut lines = Vec::new();
        self.simulate_call_with(contact_name, |line| lines.push(line))
            .await;
        lines
    }

    /// Stages the fake call, handing each transcript line to `emit` as it
    /// occurs.
    pub async fn simulate_call_with<F>(&self, contact_name: &str, mut emit: F)
    where
        F: FnMut(String),
    {
        emit(format!("Simulating emergency call from {}...", contact_name));
        self.pause(CALL_BEATS[0]).await;
        emit("Ring... Ring...".to_string());
        self.pause(CALL_BEATS[1]).await;
        emit(format!(
            "{}: Hello? I need help with an emergency!",
            contact_name
        ));
        self.pause(CALL_BEATS[2]).await;
        emit("Call ended.".to_string());
    }

    /// Formats the urgent text message for `contact_name`.
    pub fn emergency_text(&self, contact_name: &str, situation: &str) -> String {
        format!(
            "URGENT from {}: {} Can you help?",
            contact_name, situation
        )
    }

    async fn pause(&self, duration: Duration) {
        if self.delays_enabled {
            sleep(duration).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_call_transcript_order() {
        let system = EmergencySystem::without_delays();
        let lines = system.simulate_call("Emergency Contact").await;

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "Simulating emergency call from Emergency Contact..."
        );
        assert_eq!(lines[1], "Ring... Ring...");
        assert_eq!(
            lines[2],
            "Emergency Contact: Hello? I need help with an emergency!"
        );
        assert_eq!(lines[3], "Call ended.");
    }

    #[tokio::test]
    async fn test_without_delays_returns_quickly() {
        let system = EmergencySystem::without_delays();
        let started = std::time::Instant::now();
        system.simulate_call("Contact").await;
        assert!(started.elapsed() < Duration::from_millis(500));
    }

    #[test]
    fn test_emergency_text_format() {
        let system = EmergencySystem::without_delays();
        let msg = system.emergency_text("Family Member", "Urgent work situation");
        assert_eq!(
            msg,
            "URGENT from Family Member: Urgent work situation Can you help?"
        );
    }
}
