pub mod tokenizer;
pub mod vocabulary;
pub mod analyzer;
