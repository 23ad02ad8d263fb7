//! Conversion Error Module

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

/// Conversion errors
///
/// Raised by [`RadixConverter::convert`](crate::RadixConverter::convert).
/// The whole input is rejected; no partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// A digit is not a symbol of the input alphabet
    UnknownDigit {
        /// The offending digit
        digit: String,
        /// Zero-based position of the digit in the input sequence
        position: usize,
    },
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownDigit { digit, position } => write!(
                f,
                "Unknown digit {:?} at position {}",
                digit, position
            ),
        }
    }
}

impl std::error::Error for ConversionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_digit_display() {
        let error = ConversionError::UnknownDigit {
            digit: "9".to_string(),
            position: 3,
        };
        assert_eq!(error.to_string(), "Unknown digit \"9\" at position 3");
    }
}
