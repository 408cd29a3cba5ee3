// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional `bytemuck` trait impls.

#![allow(
    unsafe_code,
    reason = "The `bytemuck` marker traits are `unsafe` and require `unsafe impl`."
)]

use crate::{Color, Gravity, Rectangle};
use bytemuck::{Contiguous, NoUninit, Pod, Zeroable, checked::CheckedBitPattern};

// Safety: `repr(C)` struct of three `u16`s, so there is no padding and every bit pattern is valid.
unsafe impl Zeroable for Color {}

// Safety: See above.
unsafe impl Pod for Color {}

// Safety: `repr(C)` struct of four `i32`s, so there is no padding and every bit pattern is valid.
unsafe impl Zeroable for Rectangle {}

// Safety: See above.
unsafe impl Pod for Rectangle {}

// Safety: The enum is `repr(u8)` and has only fieldless variants.
unsafe impl NoUninit for Gravity {}

// Safety: The enum is `repr(u8)` and `0` is a valid value.
unsafe impl Zeroable for Gravity {}

// Safety: The enum is `repr(u8)`.
unsafe impl CheckedBitPattern for Gravity {
    type Bits = u8;

    fn is_valid_bit_pattern(bits: &u8) -> bool {
        *bits <= Self::MAX_VALUE
    }
}

// Safety: The enum is `repr(u8)`. All values are `u8` and fall within
// the min and max values.
unsafe impl Contiguous for Gravity {
    type Int = u8;
    const MIN_VALUE: u8 = Self::South as u8;
    #[allow(
        clippy::use_self,
        reason = "Using `Self::MAX_VALUE` here would refer to `Contiguous::MAX_VALUE` (self-reference)."
    )]
    const MAX_VALUE: u8 = Gravity::MAX_VALUE;
}

#[cfg(test)]
mod tests {
    use crate::{Color, Gravity, Rectangle};
    use bytemuck::{Contiguous, Zeroable, checked::try_from_bytes};

    #[test]
    fn gravity_bit_patterns() {
        let valid = bytemuck::bytes_of(&3_u8);
        let invalid = bytemuck::bytes_of(&5_u8);

        assert_eq!(Ok(&Gravity::West), try_from_bytes::<Gravity>(valid));
        assert!(try_from_bytes::<Gravity>(invalid).is_err());
        assert_eq!(Gravity::from_integer(Gravity::Auto.into_integer()), Some(Gravity::Auto));
        assert_eq!(Gravity::zeroed(), Gravity::South);
    }

    #[test]
    fn plain_data_casts() {
        let rects = [Rectangle::new(1, -2, 3, 4), Rectangle::new(0, 0, 10, 10)];
        let ints: &[i32] = bytemuck::cast_slice(&rects);
        assert_eq!(ints, &[1, -2, 3, 4, 0, 0, 10, 10]);

        let color: Color = bytemuck::cast([0xffff_u16, 0, 0x8000]);
        assert_eq!(color, Color::new(0xffff, 0, 0x8000));
        assert_eq!(Color::zeroed(), Color::BLACK);
    }
}
