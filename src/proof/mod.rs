//! Fabricated "supporting proof" artifacts.
//!
//! Three producers: an official-looking document, a location-verification
//! log, and a chat-screenshot bitmap. All data is sampled from embedded
//! fake tables; none of it is verified or verifiable.

pub mod document;
pub mod fakedata;
pub mod screenshot;

pub use document::{DocumentProof, LocationLog};
pub use screenshot::{chat_screenshot, CHAT_HEIGHT, CHAT_WIDTH};

use image::RgbImage;

/// Facade over the proof producers.
///
/// Stateless: each call samples from the thread-local RNG, so the facade
/// stays `Send + Sync` for the HTTP front end.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProofGenerator;

impl ProofGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Fabricates a document proof for the given excuse context.
    pub fn generate_document(&self, excuse_type: &str) -> DocumentProof {
        document::generate_document(&mut rand::thread_rng(), excuse_type)
    }

    /// Fabricates a location log stamped with the current instant.
    pub fn generate_location_log(&self) -> LocationLog {
        document::generate_location_log(&mut rand::thread_rng())
    }

    /// Renders the fake chat conversation around `excuse`.
    pub fn generate_chat_screenshot(&self, excuse: &str) -> RgbImage {
        screenshot::chat_screenshot(excuse)
    }
}
