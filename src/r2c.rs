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
use crate::err::try_vec;
use crate::mla::c_mul_fast;
use crate::util::{compute_twiddle, validate_scratch};
use crate::{FftDirection, FftError, FftKernel, FftSample};
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};
use std::sync::Arc;

/// Forward transform of real samples producing every one of the `real_length()` bins.
pub(crate) trait R2CFftExecutor<T>: Send + Sync {
    fn execute(
        &self,
        input: &[T],
        output: &mut [Complex<T>],
        scratch: &mut [Complex<T>],
    ) -> Result<(), FftError>;

    fn real_length(&self) -> usize;

    fn scratch_length(&self) -> usize;
}

/// Even lengths: pairs of samples packed into one complex transform of half the length.
pub(crate) struct R2CFftEvenInterceptor<T> {
    intercept: Arc<dyn FftKernel<T>>,
    /// `exp(-2πi * k / length)` for `k < length / 2`.
    twiddles: Vec<Complex<T>>,
    length: usize,
}

impl<T: FftSample> R2CFftEvenInterceptor<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn install(
        length: usize,
        intercept: Arc<dyn FftKernel<T>>,
    ) -> Result<Self, FftError> {
        if !length.is_multiple_of(2) || intercept.length() * 2 != length {
            return Err(FftError::PreconditionViolation {
                expected: length / 2,
                actual: intercept.length(),
            });
        }

        let half = length / 2;
        let mut twiddles = try_vec![Complex::<T>::zero(); half];
        for (k, twiddle) in twiddles.iter_mut().enumerate() {
            *twiddle = compute_twiddle(k, length, FftDirection::Forward);
        }

        Ok(Self {
            intercept,
            twiddles,
            length,
        })
    }
}

impl<T: FftSample> R2CFftExecutor<T> for R2CFftEvenInterceptor<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(
        &self,
        input: &[T],
        output: &mut [Complex<T>],
        scratch: &mut [Complex<T>],
    ) -> Result<(), FftError> {
        if input.len() != self.length || output.len() != self.length {
            return Err(FftError::LengthMismatch {
                expected: self.length,
                actual: if input.len() != self.length {
                    input.len()
                } else {
                    output.len()
                },
            });
        }
        validate_scratch!(scratch, self.scratch_length());

        let half = self.length / 2;
        let (packed, rest) = scratch.split_at_mut(half);
        let (spectrum, inner_scratch) = rest.split_at_mut(half);

        for (dst, pair) in packed.iter_mut().zip(input.chunks_exact(2)) {
            *dst = Complex::new(pair[0], pair[1]);
        }

        self.intercept
            .execute_out_of_place(packed, spectrum, inner_scratch, FftDirection::Forward)?;

        let half_scale: T = 0.5f64.as_();
        let (output_left, output_right) = output.split_at_mut(half);
        for (k, ((left, right), &twiddle)) in output_left
            .iter_mut()
            .zip(output_right.iter_mut())
            .zip(self.twiddles.iter())
            .enumerate()
        {
            let z = spectrum[k];
            let mirrored = spectrum[(half - k) % half].conj();
            // even part (z + conj z') / 2, odd part -i (z - conj z') / 2
            let even = (z + mirrored) * half_scale;
            let diff = z - mirrored;
            let odd = Complex::new(diff.im, -diff.re) * half_scale;
            let rotated = c_mul_fast(odd, twiddle);
            *left = even + rotated;
            *right = even - rotated;
        }
        Ok(())
    }

    fn real_length(&self) -> usize {
        self.length
    }

    fn scratch_length(&self) -> usize {
        self.length + self.intercept.scratch_length()
    }
}

/// Odd lengths: samples are embedded as complex values with zero imaginary part.
pub(crate) struct R2COddInterceptor<T> {
    intercept: Arc<dyn FftKernel<T>>,
    length: usize,
}

impl<T: FftSample> R2COddInterceptor<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn install(intercept: Arc<dyn FftKernel<T>>) -> Self {
        Self {
            length: intercept.length(),
            intercept,
        }
    }
}

impl<T: FftSample> R2CFftExecutor<T> for R2COddInterceptor<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(
        &self,
        input: &[T],
        output: &mut [Complex<T>],
        scratch: &mut [Complex<T>],
    ) -> Result<(), FftError> {
        if input.len() != self.length || output.len() != self.length {
            return Err(FftError::LengthMismatch {
                expected: self.length,
                actual: if input.len() != self.length {
                    input.len()
                } else {
                    output.len()
                },
            });
        }
        validate_scratch!(scratch, self.scratch_length());

        let (embedded, inner_scratch) = scratch.split_at_mut(self.length);
        for (dst, &x) in embedded.iter_mut().zip(input.iter()) {
            *dst = Complex::new(x, T::zero());
        }
        self.intercept
            .execute_out_of_place(embedded, output, inner_scratch, FftDirection::Forward)
    }

    fn real_length(&self) -> usize {
        self.length
    }

    fn scratch_length(&self) -> usize {
        self.length + self.intercept.scratch_length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::KernelRegistry;
    use crate::mixed_radix::MixedRadix;
    use crate::test_support::{assert_close, naive_dft};
    use rand::Rng;

    fn real_signal(len: usize) -> Vec<f64> {
        let mut rng = rand::rng();
        (0..len).map(|_| rng.random::<f64>() - 0.5).collect()
    }

    fn executor(length: usize) -> Box<dyn R2CFftExecutor<f64>> {
        let mut registry = KernelRegistry::<f64>::new();
        if length % 2 == 0 {
            let half = Arc::new(MixedRadix::new(length / 2, &mut registry).unwrap());
            Box::new(R2CFftEvenInterceptor::install(length, half).unwrap())
        } else {
            let full = Arc::new(MixedRadix::new(length, &mut registry).unwrap());
            Box::new(R2COddInterceptor::install(full))
        }
    }

    #[test]
    fn test_real_matches_complex_reference() {
        for length in [1usize, 2, 3, 4, 6, 10, 15, 16, 22, 30, 64, 98, 100, 210, 286] {
            let r2c = executor(length);
            assert_eq!(r2c.real_length(), length);
            let input = real_signal(length);
            let mut output = vec![Complex::default(); length];
            let mut scratch = vec![Complex::default(); r2c.scratch_length()];
            r2c.execute(&input, &mut output, &mut scratch).unwrap();

            let embedded: Vec<Complex<f64>> =
                input.iter().map(|&x| Complex::new(x, 0.)).collect();
            assert_close(&output, &naive_dft(&embedded, FftDirection::Forward), 1e-11);
        }
    }

    #[test]
    fn test_rejects_wrong_lengths() {
        let r2c = executor(8);
        let mut scratch = vec![Complex::default(); r2c.scratch_length()];
        let mut output = vec![Complex::default(); 8];
        assert_eq!(
            r2c.execute(&[0.; 6], &mut output, &mut scratch),
            Err(FftError::LengthMismatch {
                expected: 8,
                actual: 6
            })
        );
    }
}
