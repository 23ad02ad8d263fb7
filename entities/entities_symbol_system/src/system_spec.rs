//! System Specification Module
//!
//! Describes how a numeral system is configured: an integer radix that
//! selects a canonical alphanumeric alphabet, a string whose characters are
//! the symbols, or an explicit list of symbol tokens.

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

/// Smallest accepted radix
pub const MIN_RADIX: usize = 2;

/// Largest accepted radix (number of symbols in one alphabet)
pub const MAX_RADIX: usize = 0x8000;

/// Largest radix with a canonical alphabet
pub const MAX_CANONICAL_RADIX: usize = 36;

/// Canonical digit order; radix `n` uses the first `n` characters
pub const CANONICAL_DIGITS: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// Symbols of the default (decimal) system
pub const DECIMAL_SYMBOLS: &str = "0123456789";

/// Numeral system configuration
///
/// A `SystemSpec` is not validated until it is turned into a
/// [`SymbolSystem`](crate::SymbolSystem).
///
/// # Examples
///
/// ```rust
/// use entities_symbol_system::SystemSpec;
///
/// assert_eq!(SystemSpec::from(16), SystemSpec::Radix(16));
/// assert_eq!(SystemSpec::from("01"), SystemSpec::Text("01".to_string()));
/// assert_eq!(
///     SystemSpec::from(["Ook.", "Ook!", "Ook?"]),
///     SystemSpec::Tokens(vec!["Ook.".to_string(), "Ook!".to_string(), "Ook?".to_string()])
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SystemSpec {
    /// Canonical alphabet of the given radix (2 through 36)
    Radix(i64),
    /// Each character of the string is one symbol
    Text(String),
    /// Each token is one symbol
    Tokens(Vec<String>),
}

impl SystemSpec {
    /// Decimal system, `"0123456789"`
    pub fn decimal() -> Self {
        SystemSpec::Text(DECIMAL_SYMBOLS.to_string())
    }
}

impl Default for SystemSpec {
    fn default() -> Self {
        Self::decimal()
    }
}

impl From<i32> for SystemSpec {
    fn from(radix: i32) -> Self {
        SystemSpec::Radix(i64::from(radix))
    }
}

impl From<i64> for SystemSpec {
    fn from(radix: i64) -> Self {
        SystemSpec::Radix(radix)
    }
}

impl From<u32> for SystemSpec {
    fn from(radix: u32) -> Self {
        SystemSpec::Radix(i64::from(radix))
    }
}

impl From<usize> for SystemSpec {
    fn from(radix: usize) -> Self {
        SystemSpec::Radix(i64::try_from(radix).unwrap_or(i64::MAX))
    }
}

impl From<&str> for SystemSpec {
    fn from(symbols: &str) -> Self {
        SystemSpec::Text(symbols.to_string())
    }
}

impl From<String> for SystemSpec {
    fn from(symbols: String) -> Self {
        SystemSpec::Text(symbols)
    }
}

impl From<Vec<String>> for SystemSpec {
    fn from(tokens: Vec<String>) -> Self {
        SystemSpec::Tokens(tokens)
    }
}

impl From<Vec<&str>> for SystemSpec {
    fn from(tokens: Vec<&str>) -> Self {
        SystemSpec::Tokens(tokens.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for SystemSpec {
    fn from(tokens: &[&str]) -> Self {
        SystemSpec::Tokens(tokens.iter().map(|t| t.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for SystemSpec {
    fn from(tokens: [&str; N]) -> Self {
        SystemSpec::Tokens(tokens.iter().map(|t| t.to_string()).collect())
    }
}
