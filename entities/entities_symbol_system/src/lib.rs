//! Entities Layer: Symbol Systems
//!
//! Provides the numeral system model used by the radix converter: ordered,
//! duplicate-free symbol alphabets, the specs they are built from, and the
//! digit sequences written with them.
//!
//! ## Overview
//!
//! The `entities_symbol_system` crate is the innermost layer of the radix
//! converter workspace. It has no dependencies on other crates in the
//! workspace.
//!
//! ## Modules
//!
//! - **[`symbol_system`](symbol_system/index.html)**: [`SymbolSystem`] and its two alphabet
//!   shapes, [`TextAlphabet`] and [`TokenAlphabet`], behind the [`NumeralSystem`] lookups
//! - **[`system_spec`](system_spec/index.html)**: [`SystemSpec`] and the radix limits
//! - **[`digits`](digits/index.html)**: [`Digits`], external digit sequences
//! - **[`error`](error/index.html)**: [`ConfigError`]
//!
//! ## Usage
//!
//! ```rust
//! use entities_symbol_system::{Digits, NumeralSystem, SymbolSystem};
//!
//! let binary = SymbolSystem::new(2).unwrap();
//! let values: Vec<Option<usize>> = Digits::from("101")
//!     .iter()
//!     .map(|d| binary.index_of_digit(d))
//!     .collect();
//! assert_eq!(values, vec![Some(1), Some(0), Some(1)]);
//! ```
//!
//! ## See Also
//!
//! - [`usecases_radix_conversion`](../../usecases/usecases_radix_conversion/index.html): the converter

pub mod digits;
pub mod error;
pub mod symbol_system;
pub mod system_spec;

pub use digits::{DigitIter, DigitRef, Digits};
pub use error::ConfigError;
pub use symbol_system::{AlphabetKind, NumeralSystem, SymbolSystem, TextAlphabet, TokenAlphabet};
pub use system_spec::{
    SystemSpec, CANONICAL_DIGITS, DECIMAL_SYMBOLS, MAX_CANONICAL_RADIX, MAX_RADIX, MIN_RADIX,
};
