//! Conversion Facades
//!
//! One-shot conversions for callers that do not keep a converter around.
//! Each call builds both symbol systems, converts once and drops them.

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

use entities_symbol_system::{ConfigError, Digits, SystemSpec};
use usecases_radix_conversion::{ConversionError, RadixConverter};

/// Errors of a one-shot conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RadixError {
    /// The input or output spec is invalid
    Config(ConfigError),
    /// The digit sequence is not valid in the input system
    Conversion(ConversionError),
}

impl std::fmt::Display for RadixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RadixError::Config(e) => write!(f, "Invalid numeral system: {}", e),
            RadixError::Conversion(e) => write!(f, "Invalid digit sequence: {}", e),
        }
    }
}

impl std::error::Error for RadixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RadixError::Config(e) => Some(e),
            RadixError::Conversion(e) => Some(e),
        }
    }
}

impl From<ConfigError> for RadixError {
    fn from(error: ConfigError) -> Self {
        RadixError::Config(error)
    }
}

impl From<ConversionError> for RadixError {
    fn from(error: ConversionError) -> Self {
        RadixError::Conversion(error)
    }
}

/// Convert `digits` from the `input` system to the `output` system
///
/// # Examples
///
/// ```rust
/// use api_facades::{convert_digits, Digits};
///
/// let digits = convert_digits(["Alice", "Bob", "Carol", "Dave"], "qp", &Digits::from(["Bob", "Dave"]));
/// assert_eq!(digits.unwrap(), Digits::from("ppp"));
/// ```
pub fn convert_digits(
    input: impl Into<SystemSpec>,
    output: impl Into<SystemSpec>,
    digits: &Digits,
) -> Result<Digits, RadixError> {
    let converter = RadixConverter::new(input, output)?;
    Ok(converter.convert(digits)?)
}

/// Convert a string-shaped digit sequence
///
/// # Examples
///
/// ```rust
/// use api_facades::{convert_str, Digits};
///
/// assert_eq!(convert_str(10, 16, "255").unwrap(), Digits::from("ff"));
/// ```
pub fn convert_str(
    input: impl Into<SystemSpec>,
    output: impl Into<SystemSpec>,
    digits: &str,
) -> Result<Digits, RadixError> {
    let converter = RadixConverter::new(input, output)?;
    Ok(converter.convert_str(digits)?)
}
