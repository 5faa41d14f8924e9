use crate::size::error::FormatError;
use crate::size::types::CompiledSize;
use log::trace;
use rust_decimal::prelude::ToPrimitive;

/// Units used for display, smallest first. Each step is a factor of 1024.
const UNIT_LADDER: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];

const STEP: f64 = 1024.0;

/// Renders byte counts as `<number><unit>` strings, e.g. "1.5GB"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteFormatter {
    /// Digits after the decimal point
    precision: u32,
    /// Move to the next unit when rounding reaches 1024 ("1.0GB" instead of "1024.0MB")
    promote_rounded: bool,
}

impl ByteFormatter {
    pub fn new(precision: u32) -> Self {
        Self {
            precision,
            promote_rounded: false,
        }
    }

    /// Enable or disable promotion of values that round up to 1024.
    ///
    /// Disabled by default: the unit is chosen before rounding, so 1023.96 MiB
    /// at one digit renders as "1024.0MB".
    pub fn with_unit_promotion(mut self, enabled: bool) -> Self {
        self.promote_rounded = enabled;
        self
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Format a byte count, picking the largest unit under which the
    /// magnitude stays below 1024. Zero is always "0B".
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::UnableToConvert`] for NaN and infinities, which
    /// no unit can display.
    pub fn format(&self, bytes: f64) -> Result<String, FormatError> {
        if bytes == 0.0 {
            return Ok("0B".to_string());
        }
        if !bytes.is_finite() {
            return Err(FormatError::UnableToConvert(bytes));
        }

        let mut magnitude = bytes;
        for (i, unit) in UNIT_LADDER.iter().enumerate() {
            let last = i == UNIT_LADDER.len() - 1;
            if magnitude < STEP || last {
                let rounded = self.round(magnitude);
                if self.promote_rounded && rounded >= STEP && !last {
                    magnitude /= STEP;
                    continue;
                }
                trace!("formatting {} bytes as {}", bytes, unit);
                return Ok(format!(
                    "{:.*}{}",
                    self.precision as usize,
                    rounded,
                    unit
                ));
            }
            magnitude /= STEP;
        }

        Err(FormatError::UnableToConvert(bytes))
    }

    // Half away from zero, like f64::round. Past f64's own resolution there
    // is nothing left to round, so the magnitude is returned untouched.
    fn round(&self, magnitude: f64) -> f64 {
        let exponent = i32::try_from(self.precision).unwrap_or(i32::MAX);
        let ratio = 10f64.powi(exponent);
        let scaled = magnitude * ratio;
        if !ratio.is_finite() || !scaled.is_finite() {
            return magnitude;
        }
        scaled.round() / ratio
    }
}

/// Format a byte count with `precision` digits after the decimal point.
///
/// ```
/// use humansize::format_bytes;
///
/// assert_eq!(format_bytes(0.0, 2).unwrap(), "0B");
/// assert_eq!(format_bytes(1.5 * (1u64 << 30) as f64, 1).unwrap(), "1.5GB");
/// ```
pub fn format_bytes(bytes: f64, precision: u32) -> Result<String, FormatError> {
    ByteFormatter::new(precision).format(bytes)
}

/// Format a compiled size. Goes through `f64`, so very large or fractional
/// values are approximated.
pub fn format_size(size: &CompiledSize, precision: u32) -> Result<String, FormatError> {
    let bytes = size.value().to_f64().unwrap_or(f64::NAN);
    format_bytes(bytes, precision)
}
