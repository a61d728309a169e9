use thiserror::Error;

#[derive(Error, Debug)]
pub enum CbeError {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error("input ended in the middle of a blob")]
    EndOfInput,
    #[error("blob is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("integer blob longer than 8 bytes")]
    IntegerOverflow,
    #[error("chunk length {0} out of range")]
    ChunkLen(usize),
}
