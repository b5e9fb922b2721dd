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
use crate::mla::{c_mul_conj_fast, c_mul_fast};
use num_complex::Complex;
use num_traits::{Float, MulAdd};

/// `data[i] *= twiddles[i]`, with the twiddles conjugated going backward.
#[inline]
pub(crate) fn mul_twiddles_in_place<T: Float + MulAdd<T, Output = T>>(
    data: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    direction: FftDirection,
) {
    match direction {
        FftDirection::Forward => {
            for (dst, &twiddle) in data.iter_mut().zip(twiddles.iter()) {
                *dst = c_mul_fast(*dst, twiddle);
            }
        }
        FftDirection::Inverse => {
            for (dst, &twiddle) in data.iter_mut().zip(twiddles.iter()) {
                *dst = c_mul_conj_fast(*dst, twiddle);
            }
        }
    }
}

/// `dst[i] = a[i] * b[i]`
#[inline]
pub(crate) fn mul<T: Float + MulAdd<T, Output = T>>(
    a: &[Complex<T>],
    b: &[Complex<T>],
    dst: &mut [Complex<T>],
) {
    for ((dst, &a), &b) in dst.iter_mut().zip(a.iter()).zip(b.iter()) {
        *dst = c_mul_fast(a, b);
    }
}

/// `dst[i] = conj(dst[i] * other[i])`
#[inline]
pub(crate) fn mul_conjugate_in_place<T: Float + MulAdd<T, Output = T>>(
    dst: &mut [Complex<T>],
    other: &[Complex<T>],
) {
    for (dst, &b) in dst.iter_mut().zip(other.iter()) {
        *dst = c_mul_fast(*dst, b).conj();
    }
}

/// `dst[i] = conj(a[i]) * b[i]`
#[inline]
pub(crate) fn conjugate_mul_by_b<T: Float + MulAdd<T, Output = T>>(
    a: &[Complex<T>],
    b: &[Complex<T>],
    dst: &mut [Complex<T>],
) {
    for ((dst, &a), &b) in dst.iter_mut().zip(a.iter()).zip(b.iter()) {
        *dst = c_mul_fast(a.conj(), b);
    }
}
