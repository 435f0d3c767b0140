use miette::Diagnostic;
use thiserror::Error;

/// Main error type for stampbrush operations
#[derive(Error, Diagnostic, Debug)]
pub enum StampError {
    #[error("IO error: {0}")]
    #[diagnostic(code(stampbrush::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(stampbrush::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Failed to decode image: {message}")]
    #[diagnostic(
        code(stampbrush::decode),
        help("The previous image is still loaded; try uploading a PNG, JPEG, GIF or WebP file")
    )]
    ImageDecode { message: String },

    #[error("No image loaded")]
    #[diagnostic(code(stampbrush::no_image))]
    NoImageLoaded,

    #[error("Invalid value for {field}: {message}")]
    #[diagnostic(code(stampbrush::config))]
    InvalidConfig {
        field: &'static str,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(stampbrush::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Encode error: {message}")]
    #[diagnostic(code(stampbrush::encode))]
    Encode { message: String },
}

pub type Result<T> = std::result::Result<T, StampError>;
