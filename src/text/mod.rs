// file: src/text/mod.rs
// description: text normalization and tokenization module exports
// reference: internal module structure

pub mod html;
pub mod patterns;
pub mod tokenizer;

pub use html::{clean_text, strip_tags};
pub use tokenizer::tokenize;
