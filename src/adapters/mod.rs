pub mod claude_client_http;
pub mod project_filesystem;
pub mod system_clock;

pub use claude_client_http::HttpClaudeClient;
pub use project_filesystem::FilesystemProjectStore;
pub use system_clock::SystemClock;
