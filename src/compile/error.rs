// ABOUTME: Error types for template compilation
// ABOUTME: Covers encoding failures and template grammar violations

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Template {name} is not valid UTF-8: {source}")]
    InvalidEncoding {
        name: String,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("Template {name} failed to parse: {message}")]
    SyntaxError { name: String, message: String },
}

pub type Result<T> = std::result::Result<T, CompileError>;
