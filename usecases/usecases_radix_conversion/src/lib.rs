//! Use Cases Layer: Radix Conversion
//!
//! Converts non-negative integers of unbounded magnitude between numeral
//! systems with arbitrary radices (2 through 32768) and arbitrary symbol
//! alphabets.
//!
//! ## Overview
//!
//! The `usecases_radix_conversion` crate is the use cases layer of the radix
//! converter workspace. It reads a digit sequence with an input
//! [`SymbolSystem`](entities_symbol_system::SymbolSystem) into an internal
//! multi-limb integer and writes that integer back out with an output symbol
//! system. The limb representation never leaves this crate.
//!
//! ## Modules
//!
//! - **[`converter`](converter/index.html)**: [`RadixConverter`], parsing and rendering
//! - **[`error`](error/index.html)**: [`ConversionError`]
//!
//! ## Logging
//!
//! Configuration changes and rejected input are reported as `tracing`
//! `debug` events, conversions as `trace` events. Nothing is emitted unless
//! the host installs a subscriber.
//!
//! ## See Also
//!
//! - [`entities_symbol_system`](../../entities/entities_symbol_system/index.html): symbol systems and digit sequences
//! - [`api_facades`](../../api_facades/index.html): one-shot conversion entry points

pub mod converter;
pub mod error;
mod limbs;

pub use converter::RadixConverter;
pub use error::ConversionError;
