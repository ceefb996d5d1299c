use thiserror::Error;

use crate::types::{Dimension, Lang};

pub type DatasetResult<T> = Result<T, DatasetError>;

/// Structural problems in a price dataset.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    #[error("malformed dataset document: {0}")]
    Malformed(String),

    #[error("{dimension} list is empty")]
    EmptyCategory { dimension: Dimension },

    #[error("duplicate {dimension} key `{key}`")]
    DuplicateKey { dimension: Dimension, key: String },

    #[error("duplicate {dimension} label `{label}` ({lang})")]
    DuplicateLabel {
        dimension: Dimension,
        lang: Lang,
        label: String,
    },

    #[error("price references unknown {dimension} key `{key}`")]
    UnknownKey { dimension: Dimension, key: String },

    #[error("invalid price {value} for {item}/{region}/{month}")]
    InvalidPrice {
        item: String,
        region: String,
        month: String,
        value: f64,
    },
}

impl From<serde_json::Error> for DatasetError {
    fn from(err: serde_json::Error) -> Self {
        DatasetError::Malformed(err.to_string())
    }
}
