//! Digit Sequence Module
//!
//! External digit sequences, most significant digit first. A sequence is
//! either a string (every `char` is one digit) or a list of symbol tokens.

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

use crate::symbol_system::AlphabetKind;

/// A digit sequence, most significant digit first
///
/// # Examples
///
/// ```rust
/// use entities_symbol_system::Digits;
///
/// let text = Digits::from("9bd3");
/// assert_eq!(text.len(), 4);
/// assert_eq!(text.as_str(), Some("9bd3"));
///
/// let tokens = Digits::from(vec!["Ook!", "Ook."]);
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens.to_string(), "[Ook!, Ook.]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Digits {
    /// String-shaped sequence
    Text(String),
    /// List-shaped sequence
    Tokens(Vec<String>),
}

/// One digit borrowed from a [`Digits`] sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitRef<'a> {
    /// A character of a string-shaped sequence
    Char(char),
    /// A token of a list-shaped sequence
    Token(&'a str),
}

impl std::fmt::Display for DigitRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DigitRef::Char(c) => write!(f, "{}", c),
            DigitRef::Token(t) => write!(f, "{}", t),
        }
    }
}

/// Iterator over the digits of a [`Digits`] sequence
pub enum DigitIter<'a> {
    /// Characters of a string
    Chars(std::str::Chars<'a>),
    /// Tokens of a list
    Tokens(std::slice::Iter<'a, String>),
}

impl<'a> Iterator for DigitIter<'a> {
    type Item = DigitRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            DigitIter::Chars(chars) => chars.next().map(DigitRef::Char),
            DigitIter::Tokens(tokens) => tokens.next().map(|t| DigitRef::Token(t.as_str())),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            DigitIter::Chars(chars) => chars.size_hint(),
            DigitIter::Tokens(tokens) => tokens.size_hint(),
        }
    }
}

impl Digits {
    /// Number of digits (characters for strings, tokens for lists)
    pub fn len(&self) -> usize {
        match self {
            Digits::Text(text) => text.chars().count(),
            Digits::Tokens(tokens) => tokens.len(),
        }
    }

    /// Check whether the sequence has no digits
    pub fn is_empty(&self) -> bool {
        match self {
            Digits::Text(text) => text.is_empty(),
            Digits::Tokens(tokens) => tokens.is_empty(),
        }
    }

    /// Shape of the sequence
    pub fn kind(&self) -> AlphabetKind {
        match self {
            Digits::Text(_) => AlphabetKind::String,
            Digits::Tokens(_) => AlphabetKind::List,
        }
    }

    /// The string, if the sequence is string-shaped
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Digits::Text(text) => Some(text),
            Digits::Tokens(_) => None,
        }
    }

    /// The tokens, if the sequence is list-shaped
    pub fn as_tokens(&self) -> Option<&[String]> {
        match self {
            Digits::Text(_) => None,
            Digits::Tokens(tokens) => Some(tokens),
        }
    }

    /// Iterate over the digits, most significant first
    pub fn iter(&self) -> DigitIter<'_> {
        match self {
            Digits::Text(text) => DigitIter::Chars(text.chars()),
            Digits::Tokens(tokens) => DigitIter::Tokens(tokens.iter()),
        }
    }

    /// Strip superfluous leading `zero` digits
    ///
    /// At least one digit is kept, so an all-zero sequence becomes a single
    /// zero digit. An empty sequence stays empty. This is the canonical form
    /// used when comparing the result of a round trip with its input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_symbol_system::Digits;
    ///
    /// assert_eq!(Digits::from("00120").trim_leading_zeros("0"), Digits::from("120"));
    /// assert_eq!(Digits::from("0000").trim_leading_zeros("0"), Digits::from("0"));
    /// assert_eq!(
    ///     Digits::from(vec!["Alice", "Alice", "Bob"]).trim_leading_zeros("Alice"),
    ///     Digits::from(vec!["Bob"])
    /// );
    /// ```
    pub fn trim_leading_zeros(&self, zero: &str) -> Digits {
        match self {
            Digits::Text(text) => {
                let mut rest = text.as_str();
                while rest.starts_with(zero) && !zero.is_empty() && rest.len() > zero.len() {
                    rest = &rest[zero.len()..];
                }
                Digits::Text(rest.to_string())
            }
            Digits::Tokens(tokens) => {
                let skip = tokens
                    .iter()
                    .take(tokens.len().saturating_sub(1))
                    .take_while(|t| t.as_str() == zero)
                    .count();
                Digits::Tokens(tokens[skip..].to_vec())
            }
        }
    }
}

impl<'a> IntoIterator for &'a Digits {
    type Item = DigitRef<'a>;
    type IntoIter = DigitIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for Digits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Digits::Text(text) => write!(f, "{}", text),
            Digits::Tokens(tokens) => write!(f, "[{}]", tokens.join(", ")),
        }
    }
}

impl From<&str> for Digits {
    fn from(text: &str) -> Self {
        Digits::Text(text.to_string())
    }
}

impl From<String> for Digits {
    fn from(text: String) -> Self {
        Digits::Text(text)
    }
}

impl From<Vec<String>> for Digits {
    fn from(tokens: Vec<String>) -> Self {
        Digits::Tokens(tokens)
    }
}

impl From<Vec<&str>> for Digits {
    fn from(tokens: Vec<&str>) -> Self {
        Digits::Tokens(tokens.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Digits {
    fn from(tokens: [&str; N]) -> Self {
        Digits::Tokens(tokens.iter().map(|t| t.to_string()).collect())
    }
}
