mod documents;
pub mod preview;
pub mod request;
