pub mod embeddings;
pub mod extract;
pub mod generate;
pub mod prompt;
