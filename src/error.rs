use thiserror::Error;

/// Errors returned by queries that need at least one element in the tree.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The tree was empty so there is no smallest or largest element.
    #[error("cannot query an empty tree")]
    Underflow,
}

/// A `Result` defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
