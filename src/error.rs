use thiserror::Error;

#[cfg_attr(not(test), allow(unused_macros))]
macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Only conditions a caller can act on are represented here. Violations of the writer's
/// input contract (a mandatory symbol identifier that is missing, a record kind without an
/// abbreviation, a record emitted outside the block it belongs to) are defects in the
/// producing layer and panic instead of surfacing as an `Error`.
///
/// # Error Categories
///
/// ## Output Errors
/// - [`Error::Io`] - The destination stream refused bytes during a flush
/// - [`Error::StreamPoisoned`] - A previous flush failed, the stream is abandoned
/// - [`Error::BlockTooLarge`] - A block body does not fit the 32-bit length field
///
/// ## Decoding Errors
/// - [`Error::OutOfBounds`] - Attempted to read beyond the end of a buffer
/// - [`Error::Malformed`] - Bytes that do not follow the container format
///
/// ## Other
/// - [`Error::Error`] - Miscellaneous failures, e.g. worker pool construction
///
/// # Examples
///
/// ```rust
/// use docscope::{BitcodeWriter, Error};
///
/// match BitcodeWriter::new(Vec::new()) {
///     Ok(writer) => {
///         let bytes = writer.finish()?;
///         assert_eq!(&bytes[..4], b"DOCS");
///     }
///     Err(Error::Io(io_err)) => eprintln!("I/O error: {}", io_err),
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// # Ok::<(), docscope::Error>(())
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The destination stream could not accept further bytes.
    ///
    /// Raised by the flush that ends writer construction and every top-level
    /// dispatch. The writer is poisoned afterwards.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// A previous flush failed and the stream has been abandoned.
    ///
    /// The bytes already handed to the sink are only valid up to the last
    /// completely written top-level block; no further blocks are produced.
    #[error("The output stream failed earlier and has been abandoned")]
    StreamPoisoned,

    /// A block body exceeded the range of the 32-bit block length field.
    #[error("Block {block} is too large to be encoded - {size} bytes")]
    BlockTooLarge {
        /// The raw id of the block whose body overflowed
        block: u32,
        /// The size of the block body in bytes
        size: usize,
    },

    /// An out of bound access was attempted while reading a buffer.
    #[error("Out of Bound read would have occurred!")]
    OutOfBounds,

    /// The data does not follow the container format.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// Generic error for miscellaneous failures.
    #[error("{0}")]
    Error(String),
}
