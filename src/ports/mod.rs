mod clock;
mod completion_client;
mod project_store;

pub use clock::Clock;
pub use completion_client::CompletionClient;
pub use project_store::ProjectStore;
