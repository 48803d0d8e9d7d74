pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when a collection of pieces handed to validation or
/// grouping is malformed. All variants are caller-input errors; nothing at
/// this layer is transient or retried internally.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Request pieces must not be empty")]
    EmptyResponse,

    #[error("Conversation ID mismatch across request pieces")]
    ConversationIdMismatch,

    #[error("Converted prompt text is missing")]
    MissingConvertedText,
}
