/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::FftDirection;
use num_complex::Complex;
use std::ops::Neg;

mod bf16;
mod bf2;
mod bf3;
mod bf4;
mod bf5;
mod bf7;
mod bf8;
mod composite;
pub(crate) mod short_butterflies;
mod util;

pub(crate) use bf2::Butterfly2;
pub(crate) use bf3::Butterfly3;
pub(crate) use bf4::Butterfly4;
pub(crate) use bf5::Butterfly5;
pub(crate) use bf7::Butterfly7;
pub(crate) use bf8::Butterfly8;
pub(crate) use bf16::Butterfly16;
pub(crate) use composite::{CompositeButterfly, composite_split};

/// Multiplies by `-i` going forward and by `i` going backward.
#[inline(always)]
pub(crate) fn rotate_90<T: Copy + Neg<Output = T>>(
    value: Complex<T>,
    direction: FftDirection,
) -> Complex<T> {
    match direction {
        FftDirection::Forward => Complex {
            re: value.im,
            im: -value.re,
        },
        FftDirection::Inverse => Complex {
            re: -value.im,
            im: value.re,
        },
    }
}

#[cfg(test)]
macro_rules! test_butterfly {
    ($method_name: ident, $data_type: ident, $butterfly: ident, $size: expr, $tol: expr) => {
        #[test]
        fn $method_name() {
            use crate::FftKernel;
            use crate::test_support::{assert_close, naive_dft, random_signal};
            let kernel = $butterfly::<$data_type>::new();
            assert_eq!(kernel.length(), $size);
            assert_eq!(kernel.scratch_length(), 0);
            let input = random_signal::<$data_type>($size * 3);
            for direction in [FftDirection::Forward, FftDirection::Inverse] {
                let mut output = vec![Complex::<$data_type>::default(); input.len()];
                kernel
                    .execute_out_of_place(&input, &mut output, &mut [], direction)
                    .unwrap();
                for (src, dst) in input.chunks_exact($size).zip(output.chunks_exact($size)) {
                    let reference = naive_dft(src, direction);
                    assert_close(dst, &reference, $tol);
                }
            }
        }
    };
}

#[cfg(test)]
pub(crate) use test_butterfly;
