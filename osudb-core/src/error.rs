use thiserror::Error;

#[derive(Error, Debug)]
pub enum OsuDbError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("truncated input at offset {offset:#x}: need {need} more bytes")]
    TruncatedInput { offset: u64, need: usize },

    #[error("malformed varuint starting at offset {offset:#x}")]
    MalformedVarint { offset: u64 },

    #[error("malformed string at offset {offset:#x}: unknown presence marker {marker:#04x}")]
    MalformedString { offset: u64, marker: u8 },

    #[error("string at offset {offset:#x} is not valid UTF-8: {source}")]
    InvalidEncoding {
        offset: u64,
        source: std::string::FromUtf8Error,
    },

    #[error("unexpected tag at offset {offset:#x}: expected {expected:#04x}, found {found:#04x}")]
    UnexpectedTag { offset: u64, expected: u8, found: u8 },

    #[error("declared counts consumed up to offset {offset:#x} but {trailing} bytes remain")]
    CountMismatch { offset: u64, trailing: usize },
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, OsuDbError>;
