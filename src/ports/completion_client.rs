//! Text-completion client port definition.

use crate::domain::{CompletionOutcome, CompletionRequest};

/// Port for the external text-generation service.
///
/// Implementations make exactly one request per call and never retry.
pub trait CompletionClient {
    /// Send `request` and classify the result.
    fn complete(&self, request: &CompletionRequest) -> CompletionOutcome;
}
