//! Error types for keygen primitives.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("odd hex length: {0}")] OddLength(usize),
    #[error("invalid hex character {c:?} at index {index}")] InvalidCharacter { c: char, index: usize },
    #[error("invalid length: expected {expected} bytes, got {got}")] InvalidLength { expected: usize, got: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    #[error("seed must not be empty")] Empty,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StretchError {
    #[error("invalid stretch parameters: {0}")] InvalidParams(String),
    #[error("stretch failed: {0}")] Hashing(String),
}
