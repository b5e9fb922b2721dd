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

pub(crate) struct Butterfly5<T> {
    twiddle1: Complex<T>,
    twiddle2: Complex<T>,
}

impl<T: FftSample> Butterfly5<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new() -> Self {
        Self {
            twiddle1: compute_twiddle(1, 5, FftDirection::Forward),
            twiddle2: compute_twiddle(2, 5, FftDirection::Forward),
        }
    }
}

boring_scalar_butterfly!(Butterfly5, 5);

impl<T: FftSample> Butterfly5<T>
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

        let u0 = chunk[0];
        let u1 = chunk[1];
        let u2 = chunk[2];
        let u3 = chunk[3];
        let u4 = chunk[4];

        let x14p = u1 + u4;
        let x14n = u1 - u4;
        let x23p = u2 + u3;
        let x23n = u2 - u3;
        let y0 = u0 + x14p + x23p;

        let b14re_a = fmla(tw2.re, x23p.re, fmla(tw1.re, x14p.re, u0.re));
        let b14re_b = fmla(tw1.im, x14n.im, tw2.im * x23n.im);
        let b23re_a = fmla(tw1.re, x23p.re, fmla(tw2.re, x14p.re, u0.re));
        let b23re_b = fmla(tw2.im, x14n.im, -tw1.im * x23n.im);

        let b14im_a = fmla(tw2.re, x23p.im, fmla(tw1.re, x14p.im, u0.im));
        let b14im_b = fmla(tw1.im, x14n.re, tw2.im * x23n.re);
        let b23im_a = fmla(tw1.re, x23p.im, fmla(tw2.re, x14p.im, u0.im));
        let b23im_b = fmla(tw2.im, x14n.re, -tw1.im * x23n.re);

        chunk[0] = y0;
        chunk[1] = Complex {
            re: b14re_a - b14re_b,
            im: b14im_a + b14im_b,
        };
        chunk[2] = Complex {
            re: b23re_a - b23re_b,
            im: b23im_a + b23im_b,
        };
        chunk[3] = Complex {
            re: b23re_a + b23re_b,
            im: b23im_a - b23im_b,
        };
        chunk[4] = Complex {
            re: b14re_a + b14re_b,
            im: b14im_a - b14im_b,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::butterflies::test_butterfly;

    test_butterfly!(test_butterfly5, f64, Butterfly5, 5, 1e-12);
    test_butterfly!(test_butterfly5_f32, f32, Butterfly5, 5, 1e-5);
}
