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
use crate::mla::fmla;
use crate::util::{compute_twiddle, directed, validate_oof_sizes};
use crate::{FftDirection, FftError, FftKernel, FftSample};
use num_complex::Complex;
use num_traits::AsPrimitive;

/// Direct evaluation for a narrow residual stage.
pub(crate) struct Dft<T> {
    size: usize,
    twiddles: Vec<Complex<T>>,
}

impl<T: FftSample> Dft<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(size: usize) -> Result<Self, FftError> {
        let mut twiddles = try_vec![Complex::<T>::default(); size];
        for (k, twiddle) in twiddles.iter_mut().enumerate() {
            *twiddle = compute_twiddle(k, size, FftDirection::Forward);
        }
        Ok(Self { size, twiddles })
    }
}

impl<T: FftSample> FftKernel<T> for Dft<T>
where
    f64: AsPrimitive<T>,
{
    fn execute_out_of_place(
        &self,
        src: &[Complex<T>],
        dst: &mut [Complex<T>],
        _: &mut [Complex<T>],
        direction: FftDirection,
    ) -> Result<(), FftError> {
        validate_oof_sizes!(src, dst, self.size);

        for (src, dst) in src.chunks_exact(self.size).zip(dst.chunks_exact_mut(self.size)) {
            for (k, dst) in dst.iter_mut().enumerate() {
                let mut sum_re = T::zero();
                let mut sum_im = T::zero();
                let mut twiddle_idx = 0usize;
                for &x in src.iter() {
                    let w = directed(self.twiddles[twiddle_idx], direction);
                    sum_re = fmla(x.re, w.re, fmla(-x.im, w.im, sum_re));
                    sum_im = fmla(x.re, w.im, fmla(x.im, w.re, sum_im));
                    twiddle_idx += k;
                    if twiddle_idx >= self.size {
                        twiddle_idx -= self.size;
                    }
                }
                *dst = Complex::new(sum_re, sum_im);
            }
        }
        Ok(())
    }

    fn length(&self) -> usize {
        self.size
    }

    fn scratch_length(&self) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_close, naive_dft, random_signal};

    #[test]
    fn test_residual_dft() {
        for size in [1usize, 11, 13, 17, 49, 64] {
            let dft = Dft::<f64>::new(size).unwrap();
            let input = random_signal::<f64>(size * 2);
            for direction in [FftDirection::Forward, FftDirection::Inverse] {
                let mut output = vec![Complex::default(); input.len()];
                dft.execute_out_of_place(&input, &mut output, &mut [], direction)
                    .unwrap();
                for (src, dst) in input.chunks_exact(size).zip(output.chunks_exact(size)) {
                    assert_close(dst, &naive_dft(src, direction), 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_rejects_partial_block() {
        let dft = Dft::<f64>::new(11).unwrap();
        let input = random_signal::<f64>(12);
        let mut output = vec![Complex::default(); 12];
        assert_eq!(
            dft.execute_out_of_place(&input, &mut output, &mut [], FftDirection::Forward),
            Err(FftError::PreconditionViolation {
                expected: 11,
                actual: 12
            })
        );
    }
}
