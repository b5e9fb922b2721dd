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
use crate::transpose::{TransposeExecutor, transpose_strategy};
use crate::util::{compute_twiddle, directed, validate_oof_sizes, validate_scratch};
use crate::{FftDirection, FftError, FftKernel, FftSample};
use num_complex::Complex;
use num_traits::AsPrimitive;
use std::sync::Arc;

/// Inner sizes `(first, second)` of the fixed kernels built from smaller ones.
///
/// `first` runs over the columns, `second` over the twiddled rows.
pub(crate) fn composite_split(size: usize) -> Option<(usize, usize)> {
    match size {
        32 => Some((8, 4)),
        64 => Some((8, 8)),
        128 => Some((16, 8)),
        256 => Some((16, 16)),
        512 => Some((32, 16)),
        1024 => Some((32, 32)),
        2048 => Some((64, 32)),
        4096 => Some((256, 16)),
        _ => None,
    }
}

/// Fixed-size kernel assembled as `first x second` with an inner transpose step.
pub(crate) struct CompositeButterfly<T> {
    size: usize,
    first: Arc<dyn FftKernel<T>>,
    second: Arc<dyn FftKernel<T>>,
    twiddles: Vec<Complex<T>>,
    transpose_columns: Box<dyn TransposeExecutor<T> + Send + Sync>,
    transpose_rows: Box<dyn TransposeExecutor<T> + Send + Sync>,
    inner_scratch: usize,
}

impl<T: FftSample> CompositeButterfly<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(
        first: Arc<dyn FftKernel<T>>,
        second: Arc<dyn FftKernel<T>>,
    ) -> Result<Self, FftError> {
        let n1 = first.length();
        let n2 = second.length();
        let size = n1 * n2;

        let mut twiddles = try_vec![Complex::<T>::default(); size];
        for (m2, row) in twiddles.chunks_exact_mut(n1).enumerate() {
            for (k1, dst) in row.iter_mut().enumerate() {
                *dst = compute_twiddle(m2 * k1, size, FftDirection::Forward);
            }
        }

        let inner_scratch = first.scratch_length().max(second.scratch_length());

        Ok(Self {
            size,
            transpose_columns: transpose_strategy(n2, n1),
            transpose_rows: transpose_strategy(n1, n2),
            first,
            second,
            twiddles,
            inner_scratch,
        })
    }
}

impl<T: FftSample> FftKernel<T> for CompositeButterfly<T>
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
        validate_oof_sizes!(src, dst, self.size);
        validate_scratch!(scratch, self.scratch_length());

        let n1 = self.first.length();
        let n2 = self.second.length();

        let (t0, rest) = scratch.split_at_mut(self.size);
        let (t1, inner) = rest.split_at_mut(self.size);

        for (src, dst) in src.chunks_exact(self.size).zip(dst.chunks_exact_mut(self.size)) {
            self.transpose_columns.transpose(src, t0, n2, n1);
            self.first.execute_out_of_place(t0, t1, inner, direction)?;

            for (value, &twiddle) in t1.iter_mut().zip(self.twiddles.iter()) {
                *value = c_mul_fast(*value, directed(twiddle, direction));
            }

            self.transpose_rows.transpose(t1, t0, n1, n2);
            self.second.execute_out_of_place(t0, t1, inner, direction)?;
            self.transpose_columns.transpose(t1, dst, n2, n1);
        }
        Ok(())
    }

    fn length(&self) -> usize {
        self.size
    }

    fn scratch_length(&self) -> usize {
        2 * self.size + self.inner_scratch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::KernelRegistry;
    use crate::test_support::{assert_close, naive_dft, random_signal};

    #[test]
    fn test_composite_sizes_match_dft() {
        let mut registry = KernelRegistry::<f64>::new();
        for size in [32usize, 64, 128, 256, 512, 1024] {
            let kernel = registry.kernel(size).unwrap();
            assert_eq!(kernel.length(), size);
            let input = random_signal::<f64>(size * 2);
            let mut scratch = vec![Complex::default(); kernel.scratch_length()];
            for direction in [FftDirection::Forward, FftDirection::Inverse] {
                let mut output = vec![Complex::default(); input.len()];
                kernel
                    .execute_out_of_place(&input, &mut output, &mut scratch, direction)
                    .unwrap();
                for (src, dst) in input.chunks_exact(size).zip(output.chunks_exact(size)) {
                    assert_close(dst, &naive_dft(src, direction), 1e-11);
                }
            }
        }
    }

    #[test]
    fn test_composite_split_covers_large_kernels() {
        for size in [32usize, 64, 128, 256, 512, 1024, 2048, 4096] {
            let (first, second) = composite_split(size).unwrap();
            assert_eq!(first * second, size);
        }
        assert_eq!(composite_split(16), None);
    }

    #[test]
    fn test_rejects_short_scratch() {
        let mut registry = KernelRegistry::<f64>::new();
        let kernel = registry.kernel(32).unwrap();
        let input = random_signal::<f64>(32);
        let mut output = vec![Complex::default(); 32];
        let result =
            kernel.execute_out_of_place(&input, &mut output, &mut [], FftDirection::Forward);
        assert!(matches!(result, Err(FftError::PreconditionViolation { .. })));
    }
}
