// Human-readable data sizes: "100MB" <-> 104857600 bytes
// All units are binary: "K", "KB" and "KiB" all mean 1024 bytes.

pub mod compiler;
pub mod error;
pub mod formatter;
pub mod grammar;
pub mod resolver;
pub mod types;

#[cfg(test)]
mod tests;

pub use compiler::{compile, compile_or_abort};
pub use error::{FormatError, ParseError};
pub use formatter::{format_bytes, format_size, ByteFormatter};
pub use grammar::{is_size_expression, validate_unit};
pub use resolver::{multiplier_for, UNIT_MULTIPLIERS};
pub use types::CompiledSize;
