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
use crate::butterflies::util::boring_scalar_butterfly;
use crate::mla::fmla;
use crate::store::BidirectionalStore;
use crate::util::{compute_twiddle, directed};
use crate::{FftDirection, FftError, FftSample};
use num_complex::Complex;
use num_traits::AsPrimitive;

pub(crate) struct Butterfly7<T> {
    twiddle1: Complex<T>,
    twiddle2: Complex<T>,
    twiddle3: Complex<T>,
}

impl<T: FftSample> Butterfly7<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new() -> Self {
        Self {
            twiddle1: compute_twiddle(1, 7, FftDirection::Forward),
            twiddle2: compute_twiddle(2, 7, FftDirection::Forward),
            twiddle3: compute_twiddle(3, 7, FftDirection::Forward),
        }
    }
}

boring_scalar_butterfly!(Butterfly7, 7);

/// Returns `a + i*b` and `a - i*b` where `a = u0 + sum(c * sum_pair)`, `b = sum(s * diff_pair)`.
#[inline(always)]
fn mirrored_pair<T: FftSample>(
    u0: Complex<T>,
    sums: [Complex<T>; 3],
    diffs: [Complex<T>; 3],
    c: [T; 3],
    s: [T; 3],
) -> (Complex<T>, Complex<T>) {
    let a = Complex {
        re: fmla(c[2], sums[2].re, fmla(c[1], sums[1].re, fmla(c[0], sums[0].re, u0.re))),
        im: fmla(c[2], sums[2].im, fmla(c[1], sums[1].im, fmla(c[0], sums[0].im, u0.im))),
    };
    let b = Complex {
        re: fmla(s[2], diffs[2].re, fmla(s[1], diffs[1].re, s[0] * diffs[0].re)),
        im: fmla(s[2], diffs[2].im, fmla(s[1], diffs[1].im, s[0] * diffs[0].im)),
    };
    (
        Complex {
            re: a.re - b.im,
            im: a.im + b.re,
        },
        Complex {
            re: a.re + b.im,
            im: a.im - b.re,
        },
    )
}

impl<T: FftSample> Butterfly7<T>
where
    f64: AsPrimitive<T>,
{
    #[inline(always)]
    pub(crate) fn run<S: BidirectionalStore<Complex<T>>>(
        &self,
        chunk: &mut S,
        direction: FftDirection,
    ) {
        let tw1 = directed(self.twiddle1, direction);
        let tw2 = directed(self.twiddle2, direction);
        let tw3 = directed(self.twiddle3, direction);

        let u0 = chunk[0];
        let u1 = chunk[1];
        let u2 = chunk[2];
        let u3 = chunk[3];
        let u4 = chunk[4];
        let u5 = chunk[5];
        let u6 = chunk[6];

        let sums = [u1 + u6, u2 + u5, u3 + u4];
        let diffs = [u1 - u6, u2 - u5, u3 - u4];

        // w^4 = conj(w^3), w^5 = conj(w^2), w^6 = conj(w^1)
        let (y1, y6) = mirrored_pair(
            u0,
            sums,
            diffs,
            [tw1.re, tw2.re, tw3.re],
            [tw1.im, tw2.im, tw3.im],
        );
        let (y2, y5) = mirrored_pair(
            u0,
            sums,
            diffs,
            [tw2.re, tw3.re, tw1.re],
            [tw2.im, -tw3.im, -tw1.im],
        );
        let (y3, y4) = mirrored_pair(
            u0,
            sums,
            diffs,
            [tw3.re, tw1.re, tw2.re],
            [tw3.im, -tw1.im, tw2.im],
        );

        chunk[0] = u0 + sums[0] + sums[1] + sums[2];
        chunk[1] = y1;
        chunk[2] = y2;
        chunk[3] = y3;
        chunk[4] = y4;
        chunk[5] = y5;
        chunk[6] = y6;
    }
}
