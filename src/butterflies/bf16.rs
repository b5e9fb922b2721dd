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
use crate::butterflies::short_butterflies::butterfly4;
use crate::butterflies::util::boring_scalar_butterfly;
use crate::mla::c_mul_fast;
use crate::store::BidirectionalStore;
use crate::util::{compute_twiddle, directed};
use crate::{FftDirection, FftError, FftSample};
use num_complex::Complex;
use num_traits::AsPrimitive;

/// 4x4 split: columns first, then twiddled rows.
pub(crate) struct Butterfly16<T> {
    twiddles: [Complex<T>; 10],
}

impl<T: FftSample> Butterfly16<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new() -> Self {
        Self {
            twiddles: std::array::from_fn(|i| compute_twiddle(i, 16, FftDirection::Forward)),
        }
    }
}

boring_scalar_butterfly!(Butterfly16, 16);

impl<T: FftSample> Butterfly16<T>
where
    f64: AsPrimitive<T>,
{
    #[inline(always)]
    pub(crate) fn run<S: BidirectionalStore<Complex<T>>>(
        &self,
        chunk: &mut S,
        direction: FftDirection,
    ) {
        let mut columns = [Complex::<T>::default(); 16];
        for j in 0..4 {
            let (y0, y1, y2, y3) =
                butterfly4(chunk[j], chunk[j + 4], chunk[j + 8], chunk[j + 12], direction);
            columns[j * 4] = y0;
            columns[j * 4 + 1] = y1;
            columns[j * 4 + 2] = y2;
            columns[j * 4 + 3] = y3;
        }

        for k1 in 0..4 {
            let u0 = columns[k1];
            let u1 = c_mul_fast(columns[4 + k1], directed(self.twiddles[k1], direction));
            let u2 = c_mul_fast(columns[8 + k1], directed(self.twiddles[2 * k1], direction));
            let u3 = c_mul_fast(columns[12 + k1], directed(self.twiddles[3 * k1], direction));
            let (y0, y1, y2, y3) = butterfly4(u0, u1, u2, u3, direction);
            chunk[k1] = y0;
            chunk[k1 + 4] = y1;
            chunk[k1 + 8] = y2;
            chunk[k1 + 12] = y3;
        }
    }
}
