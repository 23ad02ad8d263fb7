//! Configuration Error Module
//!
//! Errors raised while building a symbol system from a [`SystemSpec`](crate::SystemSpec).

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

use crate::system_spec::{MAX_CANONICAL_RADIX, MAX_RADIX, MIN_RADIX};

/// Symbol system configuration errors
///
/// Returned by [`SymbolSystem::new`](crate::SymbolSystem::new) and
/// [`SymbolSystem::configure`](crate::SymbolSystem::configure). A failed
/// `configure` leaves the previous configuration untouched.
///
/// # Examples
///
/// ```rust
/// use entities_symbol_system::{ConfigError, SymbolSystem};
///
/// let result = SymbolSystem::new("0120");
/// assert_eq!(
///     result.unwrap_err(),
///     ConfigError::DuplicateSymbol { symbol: "0".to_string(), first: 0, second: 3 }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The alphabet holds fewer than two symbols
    TooFewSymbols {
        /// Number of symbols supplied
        radix: usize,
    },
    /// The alphabet holds more than [`MAX_RADIX`] symbols
    TooManySymbols {
        /// Number of symbols supplied
        radix: usize,
    },
    /// Two positions of the alphabet hold the same symbol
    DuplicateSymbol {
        /// The repeated symbol
        symbol: String,
        /// Position of the first occurrence
        first: usize,
        /// Position of the repeated occurrence
        second: usize,
    },
    /// An integer radix has no canonical alphabet
    RadixOutOfRange {
        /// The requested radix
        radix: i64,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::TooFewSymbols { radix } => write!(
                f,
                "Alphabet has {} symbol(s), at least {} are required",
                radix, MIN_RADIX
            ),
            ConfigError::TooManySymbols { radix } => write!(
                f,
                "Alphabet has {} symbols, at most {} are allowed",
                radix, MAX_RADIX
            ),
            ConfigError::DuplicateSymbol {
                symbol,
                first,
                second,
            } => write!(
                f,
                "Duplicate symbol {:?} at positions {} and {}",
                symbol, first, second
            ),
            ConfigError::RadixOutOfRange { radix } => write!(
                f,
                "Radix {} has no canonical alphabet (expected {}..={})",
                radix, MIN_RADIX, MAX_CANONICAL_RADIX
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_offending_input() {
        let error = ConfigError::DuplicateSymbol {
            symbol: "Bob".to_string(),
            first: 1,
            second: 4,
        };
        let message = error.to_string();
        assert!(message.contains("\"Bob\""));
        assert!(message.contains("1"));
        assert!(message.contains("4"));
    }

    #[test]
    fn test_display_radix_bounds() {
        assert_eq!(
            ConfigError::RadixOutOfRange { radix: 37 }.to_string(),
            "Radix 37 has no canonical alphabet (expected 2..=36)"
        );
        assert_eq!(
            ConfigError::TooFewSymbols { radix: 1 }.to_string(),
            "Alphabet has 1 symbol(s), at least 2 are required"
        );
        assert_eq!(
            ConfigError::TooManySymbols { radix: 40000 }.to_string(),
            "Alphabet has 40000 symbols, at most 32768 are allowed"
        );
    }

    #[test]
    fn test_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(ConfigError::TooFewSymbols { radix: 0 });
        assert!(error.to_string().contains("0 symbol"));
    }
}
