use thiserror::Error;

/// Errors raised by the benchmark itself, as opposed to I/O and library
/// failures which surface through their own error types.
#[derive(Debug, Error)]
pub enum BenchError {
    /// A command-line argument did not parse or is out of range.
    #[error("invalid argument {name}: {value:?}")]
    InvalidArgument {
        /// Argument name.
        name: &'static str,
        /// The offending value as given.
        value: String,
    },

    /// No rows survived cleaning and sampling.
    #[error("dataset is empty after cleaning and sampling")]
    EmptyDataset,
}
