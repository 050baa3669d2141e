pub mod card;
pub mod client;

pub use card::{TeamsMessage, TextBlock, digest_card};
pub use client::{TeamsClient, is_accepted};
