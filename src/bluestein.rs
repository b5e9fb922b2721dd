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
use crate::spectrum_arithmetic::{conjugate_mul_by_b, mul, mul_conjugate_in_place};
use crate::util::{compute_twiddle, validate_oof_sizes, validate_scratch};
use crate::{FftDirection, FftError, FftKernel, FftSample};
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};
use std::sync::Arc;

/// Chirp-z evaluation of a wide residual as a circular convolution of length `inner.length()`.
pub(crate) struct BluesteinFft<T> {
    inner: Arc<dyn FftKernel<T>>,
    inner_spectrum: Vec<Complex<T>>,
    twiddles: Vec<Complex<T>>,
    execution_length: usize,
}

/// `exp(-πi * i^2 / len)` with the squared index reduced modulo `2 * len`.
fn make_bluesteins_twiddles<T: FftSample>(destination: &mut [Complex<T>])
where
    f64: AsPrimitive<T>,
{
    let twice_len = destination.len() as u64 * 2;
    for (i, e) in destination.iter_mut().enumerate() {
        let i_squared = i as u64 * i as u64;
        let i_mod = i_squared % twice_len;
        *e = compute_twiddle(i_mod as usize, twice_len as usize, FftDirection::Forward);
    }
}

/// Smallest power of two able to hold the linear convolution of a `size` chirp.
pub(crate) fn bluestein_inner_length(size: usize) -> usize {
    (2 * size - 1).next_power_of_two()
}

impl<T: FftSample> BluesteinFft<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(size: usize, inner: Arc<dyn FftKernel<T>>) -> Result<Self, FftError> {
        let inner_len = inner.length();
        if size == 0 || inner_len < 2 * size - 1 {
            return Err(FftError::PreconditionViolation {
                expected: 2 * size.max(1) - 1,
                actual: inner_len,
            });
        }

        let mut twiddles = try_vec![Complex::zero(); size];
        make_bluesteins_twiddles(&mut twiddles);

        // Filter is conj(chirp) laid out circularly, 1/L folded in so the
        // backward pass can run as a conjugated forward pass.
        let inner_fft_scale: T = (1f64 / inner_len as f64).as_();
        let mut filter = try_vec![Complex::zero(); inner_len];
        filter[0] = twiddles[0].conj() * inner_fft_scale;
        for i in 1..size {
            let twiddle = twiddles[i].conj() * inner_fft_scale;
            filter[i] = twiddle;
            filter[inner_len - i] = twiddle;
        }

        let mut inner_spectrum = try_vec![Complex::zero(); inner_len];
        let mut scratch = try_vec![Complex::zero(); inner.scratch_length()];
        inner.execute_out_of_place(
            &filter,
            &mut inner_spectrum,
            &mut scratch,
            FftDirection::Forward,
        )?;

        Ok(Self {
            inner,
            inner_spectrum,
            twiddles,
            execution_length: size,
        })
    }
}

impl<T: FftSample> FftKernel<T> for BluesteinFft<T>
where
    f64: AsPrimitive<T>,
{
    fn execute_out_of_place(
        &self,
        src: &[Complex<T>],
        dst: &mut [Complex<T>],
        scratch: &mut [Complex<T>],
        direction: FftDirection,
    ) -> Result<(), FftError> {
        validate_oof_sizes!(src, dst, self.execution_length);
        validate_scratch!(scratch, self.scratch_length());

        let inner_len = self.inner_spectrum.len();
        let (inner_input, rest) = scratch.split_at_mut(inner_len);
        let (inner_output, inner_scratch) = rest.split_at_mut(inner_len);

        for (chunk, out) in src
            .chunks_exact(self.execution_length)
            .zip(dst.chunks_exact_mut(self.execution_length))
        {
            let (head, tail) = inner_input.split_at_mut(self.execution_length);
            match direction {
                FftDirection::Forward => mul(chunk, &self.twiddles, head),
                // inverse DFT of x is conj(forward DFT of conj(x))
                FftDirection::Inverse => {
                    for ((v, &x), &w) in head
                        .iter_mut()
                        .zip(chunk.iter())
                        .zip(self.twiddles.iter())
                    {
                        *v = c_mul_fast(x.conj(), w);
                    }
                }
            }
            for inner in tail.iter_mut() {
                *inner = Complex::zero();
            }

            self.inner.execute_out_of_place(
                inner_input,
                inner_output,
                inner_scratch,
                FftDirection::Forward,
            )?;

            mul_conjugate_in_place(inner_output, &self.inner_spectrum);

            self.inner.execute_out_of_place(
                inner_output,
                inner_input,
                inner_scratch,
                FftDirection::Forward,
            )?;

            conjugate_mul_by_b(&inner_input[..self.execution_length], &self.twiddles, out);
            if direction == FftDirection::Inverse {
                for v in out.iter_mut() {
                    *v = v.conj();
                }
            }
        }
        Ok(())
    }

    fn length(&self) -> usize {
        self.execution_length
    }

    fn scratch_length(&self) -> usize {
        2 * self.inner_spectrum.len() + self.inner.scratch_length()
    }
}
