//! API Facades Layer
//!
//! Public entry points of the radix converter workspace. Re-exports the
//! symbol system model and the converter, and adds one-shot conversion
//! functions.
//!
//! ## Usage
//!
//! ```rust
//! use api_facades::{Digits, RadixConverter};
//!
//! let mut converter = RadixConverter::new(10, ["Ook.", "Ook!", "Ook?"]).unwrap();
//! assert_eq!(converter.convert_str("5").unwrap(), Digits::from(["Ook!", "Ook?"]));
//!
//! converter.set_output_system(16).unwrap();
//! assert_eq!(converter.convert_str("255").unwrap(), Digits::from("ff"));
//! ```

pub mod conversion_facades;

pub use conversion_facades::{convert_digits, convert_str, RadixError};

pub use entities_symbol_system::{
    AlphabetKind, ConfigError, DigitRef, Digits, NumeralSystem, SymbolSystem, SystemSpec,
    CANONICAL_DIGITS, DECIMAL_SYMBOLS, MAX_RADIX, MIN_RADIX,
};
pub use usecases_radix_conversion::{ConversionError, RadixConverter};
