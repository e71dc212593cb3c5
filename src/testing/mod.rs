mod fake_completion_client;
mod fixed_clock;
mod memory_project_store;

pub use fake_completion_client::FakeCompletionClient;
pub use fixed_clock::FixedClock;
pub use memory_project_store::MemoryProjectStore;
