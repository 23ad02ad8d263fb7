//! Radix Converter Module
//!
//! Converts a digit sequence written in one numeral system into the digit
//! sequence of the same non-negative integer in another numeral system.
//!
//! ## Algorithm
//!
//! 1. **Parse**: walk the input most significant digit first, accumulating
//!    `value = value * input_radix + digit` over the limb array.
//! 2. **Render**: divide the limb array by the output radix until it is zero,
//!    collecting remainders least significant first, then reverse them.
//! 3. **Shape**: join the symbols into a string when the output alphabet is
//!    string-shaped, otherwise return a token list.
//!
//! Both passes are O(n·m) for n input digits and m output digits.

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

use entities_symbol_system::{
    AlphabetKind, ConfigError, DigitRef, Digits, NumeralSystem, SymbolSystem, SystemSpec,
};
use tracing::{debug, trace};

use crate::error::ConversionError;
use crate::limbs::Limbs;

/// Converter between two numeral systems
///
/// Owns one input and one output [`SymbolSystem`]. Nothing else is kept
/// between conversions.
///
/// # Examples
///
/// ```rust
/// use usecases_radix_conversion::RadixConverter;
///
/// let converter = RadixConverter::new("0123456789", "0123456789abcdef").unwrap();
/// let hex = converter.convert_str("12345678901234567890123456789012").unwrap();
/// assert_eq!(hex.as_str(), Some("9bd30a3c645943dd1690a03a14"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RadixConverter {
    input: SymbolSystem,
    output: SymbolSystem,
}

impl RadixConverter {
    /// Create a converter from an input and an output system spec
    ///
    /// # Arguments
    /// * `input` - Spec of the system digit sequences are read in
    /// * `output` - Spec of the system digit sequences are written in
    ///
    /// # Returns
    /// * `Ok(RadixConverter)` - If both specs are valid
    /// * `Err(ConfigError)` - The first invalid spec's error
    pub fn new(
        input: impl Into<SystemSpec>,
        output: impl Into<SystemSpec>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            input: SymbolSystem::new(input)?,
            output: SymbolSystem::new(output)?,
        })
    }

    /// Create a converter from two already built systems
    pub fn from_systems(input: SymbolSystem, output: SymbolSystem) -> Self {
        Self { input, output }
    }

    /// The system input digits are read in
    pub fn input_system(&self) -> &SymbolSystem {
        &self.input
    }

    /// The system output digits are written in
    pub fn output_system(&self) -> &SymbolSystem {
        &self.output
    }

    /// Replace the input system
    ///
    /// On error the current input system is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use usecases_radix_conversion::RadixConverter;
    ///
    /// let mut converter = RadixConverter::default();
    /// converter.set_input_system(2).unwrap().set_output_system("ABCDEF").unwrap();
    /// assert_eq!(converter.convert_str("00000000").unwrap().as_str(), Some("A"));
    /// ```
    pub fn set_input_system(
        &mut self,
        spec: impl Into<SystemSpec>,
    ) -> Result<&mut Self, ConfigError> {
        let system = SymbolSystem::new(spec).map_err(|e| {
            debug!(error = %e, "rejected input system");
            e
        })?;
        debug!(
            radix = system.radix(),
            kind = ?system.alphabet_kind(),
            "configured input system"
        );
        self.input = system;
        Ok(self)
    }

    /// Replace the output system
    ///
    /// On error the current output system is kept.
    pub fn set_output_system(
        &mut self,
        spec: impl Into<SystemSpec>,
    ) -> Result<&mut Self, ConfigError> {
        let system = SymbolSystem::new(spec).map_err(|e| {
            debug!(error = %e, "rejected output system");
            e
        })?;
        debug!(
            radix = system.radix(),
            kind = ?system.alphabet_kind(),
            "configured output system"
        );
        self.output = system;
        Ok(self)
    }

    /// Convert a digit sequence from the input system to the output system
    ///
    /// The input may be string- or list-shaped regardless of the input
    /// alphabet's shape. The output shape follows the output alphabet. An
    /// empty or all-zero input yields a single zero digit.
    ///
    /// # Returns
    /// * `Ok(Digits)` - The converted sequence, without leading zero digits
    /// * `Err(ConversionError::UnknownDigit)` - If a digit is not in the input alphabet
    pub fn convert(&self, input: &Digits) -> Result<Digits, ConversionError> {
        self.convert_digits(input.iter())
    }

    /// Convert a string-shaped digit sequence
    pub fn convert_str(&self, input: &str) -> Result<Digits, ConversionError> {
        self.convert_digits(input.chars().map(DigitRef::Char))
    }

    /// Convert a list-shaped digit sequence
    pub fn convert_tokens<S: AsRef<str>>(&self, input: &[S]) -> Result<Digits, ConversionError> {
        self.convert_digits(input.iter().map(|t| DigitRef::Token(t.as_ref())))
    }

    fn convert_digits<'a>(
        &self,
        digits: impl IntoIterator<Item = DigitRef<'a>>,
    ) -> Result<Digits, ConversionError> {
        let value = parse(&self.input, digits)?;
        let limbs = value.len();
        let output = render(&self.output, value);
        trace!(
            input_radix = self.input.radix(),
            output_radix = self.output.radix(),
            limbs,
            output_digits = output.len(),
            "converted digit sequence"
        );
        Ok(output)
    }
}

fn parse<'a, S>(
    system: &S,
    digits: impl IntoIterator<Item = DigitRef<'a>>,
) -> Result<Limbs, ConversionError>
where
    S: NumeralSystem + ?Sized,
{
    // Alphabets hold at most 0x8000 symbols
    let radix = system.radix() as u32;
    let mut value = Limbs::zero();
    for (position, digit) in digits.into_iter().enumerate() {
        let Some(index) = system.index_of_digit(digit) else {
            debug!(digit = %digit, position, "rejected unknown digit");
            return Err(ConversionError::UnknownDigit {
                digit: digit.to_string(),
                position,
            });
        };
        value.accumulate_digit(radix, index as u32);
    }
    Ok(value)
}

fn render<S>(system: &S, mut value: Limbs) -> Digits
where
    S: NumeralSystem + ?Sized,
{
    let radix = system.radix() as u32;
    let mut remainders = Vec::new();
    loop {
        remainders.push(value.divmod_scalar(radix) as usize);
        if value.is_zero() {
            break;
        }
    }

    let symbols = remainders
        .into_iter()
        .rev()
        .filter_map(|digit| system.symbol_at(digit));
    match system.alphabet_kind() {
        AlphabetKind::String => Digits::Text(symbols.collect()),
        AlphabetKind::List => Digits::Tokens(symbols.map(str::to_string).collect()),
    }
}
