// File: crates/artline-core/src/error.rs
// Summary: Typed error surface for chart validation and output.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("dataset is empty: scale domains would be undefined")]
    EmptyDataset,
    #[error("record {index} has a non-finite `{field}` value")]
    NonFiniteField { field: &'static str, index: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
