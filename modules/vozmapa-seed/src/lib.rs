pub mod age;
pub mod config;
pub mod deck;
pub mod factory;
pub mod feed;
pub mod geo;
pub mod submission;

pub use config::SeedConfig;
pub use deck::TemplateDeck;
pub use factory::{generate_seed, SeedGenerator};
