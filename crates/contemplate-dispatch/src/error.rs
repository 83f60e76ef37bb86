use thiserror::Error;

/// Errors from the function table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// A function name was registered twice.
    #[error("The template function name \"{name}\" is already registered.")]
    DuplicateFunction { name: String },

    /// A function name was never registered.
    #[error("The template function \"{name}\" was not found.")]
    UnknownFunction { name: String },
}
