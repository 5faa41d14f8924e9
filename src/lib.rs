pub mod size;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use size::{
    compile, compile_or_abort, format_bytes, format_size, is_size_expression, multiplier_for,
    validate_unit, ByteFormatter, CompiledSize, FormatError, ParseError, UNIT_MULTIPLIERS,
};
