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
use num_traits::{AsPrimitive, Float};

/// Returns `exp(-2πi * index / fft_len)`, conjugated for the inverse direction.
pub(crate) fn compute_twiddle<T: Float + 'static>(
    index: usize,
    fft_len: usize,
    direction: FftDirection,
) -> Complex<T>
where
    f64: AsPrimitive<T>,
{
    let reduced = index % fft_len;
    let angle = -2. * std::f64::consts::PI * reduced as f64 / fft_len as f64;
    let (v_sin, v_cos) = angle.sin_cos();

    let result = Complex {
        re: v_cos.as_(),
        im: v_sin.as_(),
    };

    match direction {
        FftDirection::Forward => result,
        FftDirection::Inverse => result.conj(),
    }
}

/// Forward table stored once, read back with the direction applied.
#[inline(always)]
pub(crate) fn directed<T: Float>(twiddle: Complex<T>, direction: FftDirection) -> Complex<T> {
    match direction {
        FftDirection::Forward => twiddle,
        FftDirection::Inverse => twiddle.conj(),
    }
}

macro_rules! validate_oof_sizes {
    ($src: expr, $dst: expr, $size: expr) => {
        if !$src.len().is_multiple_of($size) {
            return Err(crate::err::FftError::PreconditionViolation {
                expected: $size,
                actual: $src.len(),
            });
        }
        if $src.len() != $dst.len() {
            return Err(crate::err::FftError::LengthMismatch {
                expected: $src.len(),
                actual: $dst.len(),
            });
        }
    };
}

pub(crate) use validate_oof_sizes;

macro_rules! validate_scratch {
    ($scratch: expr, $size: expr) => {
        if $scratch.len() < $size {
            return Err(crate::err::FftError::PreconditionViolation {
                expected: $size,
                actual: $scratch.len(),
            });
        }
    };
}

pub(crate) use validate_scratch;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twiddle_quadrants() {
        let w: Complex<f64> = compute_twiddle(1, 4, FftDirection::Forward);
        assert!((w - Complex::new(0., -1.)).norm() < 1e-15);
        let w: Complex<f64> = compute_twiddle(1, 4, FftDirection::Inverse);
        assert!((w - Complex::new(0., 1.)).norm() < 1e-15);
        let w: Complex<f64> = compute_twiddle(6, 4, FftDirection::Forward);
        assert!((w - Complex::new(-1., 0.)).norm() < 1e-15);
    }

    #[test]
    fn test_directed_conjugates() {
        let w = Complex::new(0.5f64, -0.25);
        assert_eq!(directed(w, FftDirection::Forward), w);
        assert_eq!(directed(w, FftDirection::Inverse), w.conj());
    }
}
