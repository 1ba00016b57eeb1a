use std::io;

/// Errors produced while encoding or decoding a QOI image.
#[derive(Debug, thiserror::Error)]
pub enum QoiError {
    /// The source ran out of bytes before a required field could be read.
    #[error("truncated stream: {0}")]
    Truncated(#[from] io::Error),

    /// The first four header bytes were not `qoif`.
    #[error("bad magic bytes: {found:?}")]
    BadMagic { found: [u8; 4] },

    /// The header's channel byte was not 3 or 4.
    #[error("unexpected number of color channels: {value}")]
    BadChannels { value: u8 },

    /// The header's colorspace byte was not 0 or 1.
    #[error("unexpected colorspace: {value}")]
    BadColorspace { value: u8 },

    /// Width or height in the header was zero.
    #[error("width or height is zero")]
    EmptyImage,

    /// The 8 trailing bytes did not match the required end marker.
    #[error("bad end marker: {found:?}")]
    BadEndMarker { found: [u8; 8] },

    /// A RUN opcode would have produced more pixels than `width * height`.
    #[error("run opcode overflowed pixel count")]
    Overflow,

    /// `width * height` exceeds the safe pixel budget.
    #[error("exceeded maximum safe pixel count")]
    PixelCountOverflow,

    /// The sink could not accept all bytes of a write.
    #[error("failed to write to sink: {0}")]
    WriteFailed(io::Error),

    /// The pixel buffer handed to the encoder didn't match `width * height`.
    #[error("pixel buffer length {actual} does not match expected {expected}")]
    PreconditionViolated { expected: usize, actual: usize },
}

/// Convenience alias used throughout the codec.
pub type Result<T> = std::result::Result<T, QoiError>;
