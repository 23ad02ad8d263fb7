//! Limb Arithmetic Module
//!
//! Non-negative arbitrary precision integer stored as `u32` limbs, least
//! significant limb first. Only the two operations radix conversion needs are
//! provided: multiply-by-radix-and-add while parsing, and in-place division
//! by a small scalar while rendering.
//!
//! Every intermediate value is computed in `u64`. With a `u32` radix,
//! `limb * radix + carry` is at most `(2^32 - 1)^2 + (2^32 - 1) < 2^64`, and
//! `(remainder << 32) | limb` is below `radix * 2^32`.

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

type Limb = u32;
type Wide = u64;

const LIMB_BITS: u32 = Limb::BITS;

/// Multi-limb unsigned integer
///
/// Invariant: the last limb is non-zero, except for zero itself, which is
/// the single limb `[0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Limbs {
    limbs: Vec<Limb>,
}

impl Limbs {
    pub(crate) fn zero() -> Self {
        Self { limbs: vec![0] }
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.limbs == [0]
    }

    /// Number of limbs in use
    pub(crate) fn len(&self) -> usize {
        self.limbs.len()
    }

    /// `self = self * radix + digit`
    pub(crate) fn accumulate_digit(&mut self, radix: u32, digit: u32) {
        debug_assert!(digit < radix);
        let mut carry = Wide::from(digit);
        for limb in self.limbs.iter_mut() {
            let acc = Wide::from(*limb) * Wide::from(radix) + carry;
            *limb = acc as Limb;
            carry = acc >> LIMB_BITS;
        }
        if carry > 0 {
            self.limbs.push(carry as Limb);
        }
    }

    /// Divide in place by `radix`, returning the remainder
    ///
    /// Long division from the most significant limb down; each limb's
    /// remainder becomes the high half of the next lower dividend.
    pub(crate) fn divmod_scalar(&mut self, radix: u32) -> u32 {
        debug_assert!(radix >= 2);
        let divisor = Wide::from(radix);
        let mut remainder: Wide = 0;
        for limb in self.limbs.iter_mut().rev() {
            let dividend = (remainder << LIMB_BITS) | Wide::from(*limb);
            *limb = (dividend / divisor) as Limb;
            remainder = dividend % divisor;
        }
        self.trim();
        remainder as u32
    }

    fn trim(&mut self) {
        while self.limbs.len() > 1 && self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }
}
