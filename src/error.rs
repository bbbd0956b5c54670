use alloc::string::String;

/// Errors from BMP decoding, encoding, and pixel operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[error("not a BMP file: missing BM signature")]
    UnrecognizedFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("invalid pixel data: {0}")]
    InvalidData(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("dimension mismatch: background {bg_width}x{bg_height}, foreground {fg_width}x{fg_height}")]
    DimensionMismatch {
        bg_width: u32,
        bg_height: u32,
        fg_width: u32,
        fg_height: u32,
    },

    #[error("buffer size mismatch: need {needed} pixels, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("cannot encode an empty bitmap")]
    EmptyBitmap,

    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
