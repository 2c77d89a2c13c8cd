use pixmat::image::ImageError;
use pixmat::io::IoError;

/// An error type for the command line driver.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Error reading or writing the image file.
    #[error(transparent)]
    Io(#[from] IoError),

    /// Error applying the transform.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error talking to the terminal.
    #[error("Failed to read the answer. {0}")]
    Prompt(#[from] std::io::Error),

    /// Error when the operation selector is not known.
    #[error("Unknown operation: {0:?}. Expected 1-4 or greyscale, blur, contrast, luminosity")]
    InvalidOperation(String),

    /// Error when the input ends before all answers were read.
    #[error("Input ended before all answers were given")]
    UnexpectedEof,
}
