mod base;
mod collaborators;
mod endpoint;
mod files;
mod projects;
mod runs;

pub use base::{DominoClient, DominoClientBuilder};
