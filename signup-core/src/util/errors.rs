use thiserror::Error;

/// Failure to turn a price string such as `$9/mo` into an amount.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    #[error("price {0:?} contains no digits")]
    MissingAmount(String),
    #[error("price {0:?} does not fit in a u32")]
    Overflow(String),
    #[error("total overflowed while adding {0}")]
    TotalOverflow(String),
}

/// Rejections raised while loading or checking a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("catalog has no plans")]
    NoPlans,
    #[error("duplicate plan name: {0}")]
    DuplicatePlan(String),
    #[error("duplicate add-on id: {0}")]
    DuplicateAddon(u32),
    #[error("invalid price for {item}: {source}")]
    InvalidPrice {
        item: String,
        #[source]
        source: PriceError,
    },
}
