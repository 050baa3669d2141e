pub mod client;
pub mod prompt;

pub use client::{ContentBlock, DigestClient, MessagesResponse, extract_text};
