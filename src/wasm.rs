// WebAssembly bindings for the data size API
use crate::size;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// JSON shape returned to JS for a compiled size
#[derive(Serialize)]
struct CompiledSizeJson<'a> {
    input: &'a str,
    multiplier: u64,
    // Decimal string: JS numbers lose precision past 2^53
    bytes: String,
}

#[wasm_bindgen]
pub struct HumanSizeWasm {}

impl Default for HumanSizeWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl HumanSizeWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {}
    }

    /// Compile a size expression ("100MB")
    /// Returns JSON string: {"input": "100MB", "multiplier": 1048576, "bytes": "104857600"}
    #[wasm_bindgen]
    pub fn compile_size(&self, input: &str) -> Result<String, JsValue> {
        let compiled = size::compile(input)
            .map_err(|e| JsValue::from_str(&format!("Failed to compile size: {}", e)))?;

        let json = serde_json::to_string(&CompiledSizeJson {
            input: compiled.raw_input(),
            multiplier: compiled.multiplier(),
            bytes: compiled.value().normalize().to_string(),
        })
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize size: {}", e)))?;

        Ok(json)
    }

    /// Check a standalone unit token ("KiB", "mb")
    #[wasm_bindgen]
    pub fn validate_size_unit(&self, token: &str) -> bool {
        size::validate_unit(token)
    }

    /// Format a byte count ("1.5GB")
    #[wasm_bindgen]
    pub fn format_size_bytes(&self, bytes: f64, precision: u32) -> Result<String, JsValue> {
        size::format_bytes(bytes, precision)
            .map_err(|e| JsValue::from_str(&format!("Failed to format bytes: {}", e)))
    }
}
