use crate::domain::{Completion, CompletionOutcome, CompletionRequest, ContentBlock};
use crate::ports::CompletionClient;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct FakeCompletionClient {
    pub requests: Arc<Mutex<Vec<CompletionRequest>>>,
    pub outcome: CompletionOutcome,
}

impl FakeCompletionClient {
    pub fn new(outcome: CompletionOutcome) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), outcome }
    }

    /// Client answering every request with a single text block.
    pub fn replying(text: &str) -> Self {
        Self::new(CompletionOutcome::Success(Completion {
            content: vec![ContentBlock::Text(text.to_string())],
        }))
    }

    pub fn get_requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The user message of the only request sent.
    pub fn sent_prompt(&self) -> String {
        let requests = self.get_requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests[0].messages[0].content.clone()
    }
}

impl CompletionClient for FakeCompletionClient {
    fn complete(&self, request: &CompletionRequest) -> CompletionOutcome {
        self.requests.lock().unwrap().push(request.clone());
        self.outcome.clone()
    }
}
