//! Symbol System Module
//!
//! A symbol system is an ordered, duplicate-free alphabet. The position of a
//! symbol in the alphabet is its digit value and the alphabet length is the
//! radix of the numeral system.
//!
//! Two alphabet shapes exist:
//! - [`TextAlphabet`]: every character of a string is one symbol
//! - [`TokenAlphabet`]: every token of a list is one symbol
//!
//! [`SymbolSystem`] selects one of them from a [`SystemSpec`]. Both shapes
//! expose the same lookups through the [`NumeralSystem`] trait.

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

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::digits::DigitRef;
use crate::error::ConfigError;
use crate::system_spec::{
    SystemSpec, CANONICAL_DIGITS, DECIMAL_SYMBOLS, MAX_CANONICAL_RADIX, MAX_RADIX, MIN_RADIX,
};

/// Shape of an alphabet, and of the digit sequences rendered with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlphabetKind {
    /// Symbols are characters; sequences are strings
    String,
    /// Symbols are tokens; sequences are token lists
    List,
}

/// Lookups shared by every alphabet shape
pub trait NumeralSystem {
    /// Number of symbols
    fn radix(&self) -> usize;

    /// Symbol for digit value `index`, or `None` if `index >= radix`
    fn symbol_at(&self, index: usize) -> Option<&str>;

    /// Digit value of `symbol`; only exact matches are found
    fn index_of(&self, symbol: &str) -> Option<usize>;

    /// Shape of the alphabet
    fn alphabet_kind(&self) -> AlphabetKind;

    /// Digit value of one digit of an input sequence
    fn index_of_digit(&self, digit: DigitRef<'_>) -> Option<usize> {
        match digit {
            DigitRef::Char(c) => {
                let mut buf = [0u8; 4];
                self.index_of(c.encode_utf8(&mut buf))
            }
            DigitRef::Token(token) => self.index_of(token),
        }
    }
}

fn check_radix(radix: usize) -> Result<(), ConfigError> {
    if radix < MIN_RADIX {
        return Err(ConfigError::TooFewSymbols { radix });
    }
    if radix > MAX_RADIX {
        return Err(ConfigError::TooManySymbols { radix });
    }
    Ok(())
}

/// String-backed alphabet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextAlphabet {
    /// All symbols, in order
    text: String,
    /// Byte offset of every symbol, plus the end offset
    bounds: Vec<usize>,
    /// Reverse map from symbol to digit value
    index: HashMap<char, usize>,
}

impl TextAlphabet {
    /// Build an alphabet from the characters of `text`
    ///
    /// # Returns
    /// * `Ok(TextAlphabet)` - If `text` has 2 to 32768 distinct characters
    /// * `Err(ConfigError)` - Otherwise
    pub fn new(text: &str) -> Result<Self, ConfigError> {
        check_radix(text.chars().count())?;

        let alphabet = Self::index_symbols(text);
        // The index keeps the first position of each symbol
        for (position, c) in text.chars().enumerate() {
            let first = alphabet.index[&c];
            if first != position {
                return Err(ConfigError::DuplicateSymbol {
                    symbol: c.to_string(),
                    first,
                    second: position,
                });
            }
        }
        Ok(alphabet)
    }

    fn index_symbols(text: &str) -> Self {
        let mut bounds = Vec::with_capacity(text.len() + 1);
        let mut index = HashMap::with_capacity(text.len());
        for (position, (offset, c)) in text.char_indices().enumerate() {
            index.entry(c).or_insert(position);
            bounds.push(offset);
        }
        bounds.push(text.len());

        Self {
            text: text.to_string(),
            bounds,
            index,
        }
    }

    /// Canonical alphabet for `radix`, the first `radix` characters of
    /// [`CANONICAL_DIGITS`]
    pub fn canonical(radix: i64) -> Result<Self, ConfigError> {
        let Some(len) = usize::try_from(radix)
            .ok()
            .filter(|len| (MIN_RADIX..=MAX_CANONICAL_RADIX).contains(len))
        else {
            return Err(ConfigError::RadixOutOfRange { radix });
        };
        // ASCII, so byte length equals symbol count
        Self::new(&CANONICAL_DIGITS[..len])
    }

    /// The alphabet as a string
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Digit value of a character
    pub fn index_of_char(&self, c: char) -> Option<usize> {
        self.index.get(&c).copied()
    }
}

impl NumeralSystem for TextAlphabet {
    fn radix(&self) -> usize {
        self.bounds.len() - 1
    }

    fn symbol_at(&self, index: usize) -> Option<&str> {
        let start = *self.bounds.get(index)?;
        let end = *self.bounds.get(index + 1)?;
        Some(&self.text[start..end])
    }

    fn index_of(&self, symbol: &str) -> Option<usize> {
        let mut chars = symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.index_of_char(c),
            _ => None,
        }
    }

    fn alphabet_kind(&self) -> AlphabetKind {
        AlphabetKind::String
    }

    fn index_of_digit(&self, digit: DigitRef<'_>) -> Option<usize> {
        match digit {
            DigitRef::Char(c) => self.index_of_char(c),
            DigitRef::Token(token) => self.index_of(token),
        }
    }
}

/// Token-list-backed alphabet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenAlphabet {
    tokens: Vec<String>,
    index: HashMap<String, usize>,
}

impl TokenAlphabet {
    /// Build an alphabet from an ordered list of distinct tokens
    ///
    /// # Returns
    /// * `Ok(TokenAlphabet)` - If `tokens` holds 2 to 32768 distinct tokens
    /// * `Err(ConfigError)` - Otherwise
    pub fn new(tokens: Vec<String>) -> Result<Self, ConfigError> {
        check_radix(tokens.len())?;

        let mut index = HashMap::with_capacity(tokens.len());
        for (position, token) in tokens.iter().enumerate() {
            match index.entry(token.clone()) {
                Entry::Occupied(existing) => {
                    return Err(ConfigError::DuplicateSymbol {
                        symbol: token.clone(),
                        first: *existing.get(),
                        second: position,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
            }
        }

        Ok(Self { tokens, index })
    }

    /// The alphabet as a token list
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

impl NumeralSystem for TokenAlphabet {
    fn radix(&self) -> usize {
        self.tokens.len()
    }

    fn symbol_at(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    fn index_of(&self, symbol: &str) -> Option<usize> {
        self.index.get(symbol).copied()
    }

    fn alphabet_kind(&self) -> AlphabetKind {
        AlphabetKind::List
    }
}

/// A configured numeral system
///
/// # Examples
///
/// ```rust
/// use entities_symbol_system::{AlphabetKind, NumeralSystem, SymbolSystem};
///
/// let hex = SymbolSystem::new(16).unwrap();
/// assert_eq!(hex.radix(), 16);
/// assert_eq!(hex.symbol_at(15), Some("f"));
/// assert_eq!(hex.index_of("a"), Some(10));
/// assert_eq!(hex.alphabet_kind(), AlphabetKind::String);
///
/// let ook = SymbolSystem::new(["Ook.", "Ook!", "Ook?"]).unwrap();
/// assert_eq!(ook.index_of("Ook?"), Some(2));
/// assert_eq!(ook.index_of("Ook"), None);
/// assert_eq!(ook.alphabet_kind(), AlphabetKind::List);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolSystem {
    /// String-backed alphabet
    Text(TextAlphabet),
    /// Token-list-backed alphabet
    Tokens(TokenAlphabet),
}

impl SymbolSystem {
    /// Build a symbol system from a spec
    ///
    /// # Arguments
    /// * `spec` - Integer radix (2..=36), string of symbols, or token list
    ///
    /// # Returns
    /// * `Ok(SymbolSystem)` - The validated system
    /// * `Err(ConfigError)` - If the spec describes no valid alphabet
    pub fn new(spec: impl Into<SystemSpec>) -> Result<Self, ConfigError> {
        match spec.into() {
            SystemSpec::Radix(radix) => TextAlphabet::canonical(radix).map(SymbolSystem::Text),
            SystemSpec::Text(text) => TextAlphabet::new(&text).map(SymbolSystem::Text),
            SystemSpec::Tokens(tokens) => TokenAlphabet::new(tokens).map(SymbolSystem::Tokens),
        }
    }

    /// Decimal system, `"0123456789"`
    pub fn decimal() -> Self {
        SymbolSystem::Text(TextAlphabet::index_symbols(DECIMAL_SYMBOLS))
    }

    /// Replace this system with the one described by `spec`
    ///
    /// The new alphabet is built and validated first; on error `self` keeps
    /// its previous configuration.
    pub fn configure(&mut self, spec: impl Into<SystemSpec>) -> Result<(), ConfigError> {
        *self = Self::new(spec)?;
        Ok(())
    }

    /// Symbol of digit value zero
    pub fn zero_symbol(&self) -> &str {
        self.symbol_at(0).unwrap_or_default()
    }

    /// All symbols, in digit-value order
    pub fn symbols(&self) -> impl Iterator<Item = &str> + '_ {
        (0..self.radix()).filter_map(move |i| self.symbol_at(i))
    }

    /// The spec that rebuilds this system
    pub fn to_spec(&self) -> SystemSpec {
        match self {
            SymbolSystem::Text(alphabet) => SystemSpec::Text(alphabet.as_str().to_string()),
            SymbolSystem::Tokens(alphabet) => SystemSpec::Tokens(alphabet.tokens().to_vec()),
        }
    }
}

impl Default for SymbolSystem {
    fn default() -> Self {
        Self::decimal()
    }
}

impl NumeralSystem for SymbolSystem {
    fn radix(&self) -> usize {
        match self {
            SymbolSystem::Text(alphabet) => alphabet.radix(),
            SymbolSystem::Tokens(alphabet) => alphabet.radix(),
        }
    }

    fn symbol_at(&self, index: usize) -> Option<&str> {
        match self {
            SymbolSystem::Text(alphabet) => alphabet.symbol_at(index),
            SymbolSystem::Tokens(alphabet) => alphabet.symbol_at(index),
        }
    }

    fn index_of(&self, symbol: &str) -> Option<usize> {
        match self {
            SymbolSystem::Text(alphabet) => alphabet.index_of(symbol),
            SymbolSystem::Tokens(alphabet) => alphabet.index_of(symbol),
        }
    }

    fn alphabet_kind(&self) -> AlphabetKind {
        match self {
            SymbolSystem::Text(alphabet) => alphabet.alphabet_kind(),
            SymbolSystem::Tokens(alphabet) => alphabet.alphabet_kind(),
        }
    }

    fn index_of_digit(&self, digit: DigitRef<'_>) -> Option<usize> {
        match self {
            SymbolSystem::Text(alphabet) => alphabet.index_of_digit(digit),
            SymbolSystem::Tokens(alphabet) => alphabet.index_of_digit(digit),
        }
    }
}
