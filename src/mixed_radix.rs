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
use crate::factorization::{Factorization, factorize};
use crate::factory::KernelRegistry;
use crate::spectrum_arithmetic::mul_twiddles_in_place;
use crate::transpose::{TransposeExecutor, transpose_strategy};
use crate::twiddles::TwiddleTable;
use crate::util::{validate_oof_sizes, validate_scratch};
use crate::{FftDirection, FftError, FftKernel, FftSample};
use num_complex::Complex;
use num_traits::AsPrimitive;
use std::sync::Arc;

/// One Cooley-Tukey stage: a `kernel`-point transform over a buffer of `kernel * rest` samples.
struct Stage<T> {
    kernel: Arc<dyn FftKernel<T>>,
    /// Width of the stage, `n1 * n2`.
    width: usize,
    /// Kernel size.
    n1: usize,
    /// Length of the sub-transforms that follow.
    n2: usize,
    /// `n2 x n1` view to `n1 x n2` view.
    transpose_columns: Box<dyn TransposeExecutor<T> + Send + Sync>,
    transpose_rows: Box<dyn TransposeExecutor<T> + Send + Sync>,
}

/// Stage chain resolved from a factorization, walked outermost stage first.
pub(crate) struct MixedRadix<T> {
    execution_length: usize,
    factorization: Factorization,
    stages: Vec<Stage<T>>,
    twiddles: TwiddleTable<T>,
    kernel_scratch: usize,
}

impl<T> MixedRadix<T> {
    pub(crate) fn factorization(&self) -> &Factorization {
        &self.factorization
    }

    pub(crate) fn twiddle_count(&self) -> usize {
        self.twiddles.len()
    }
}

impl<T: FftSample> MixedRadix<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(length: usize, registry: &mut KernelRegistry<T>) -> Result<Self, FftError> {
        Self::with_factorization(factorize(length)?, registry)
    }

    /// Chain walking the stages in the given order, residual last.
    #[cfg(test)]
    pub(crate) fn with_stages(
        factors: &[usize],
        residual: Option<usize>,
        registry: &mut KernelRegistry<T>,
    ) -> Result<Self, FftError> {
        let factorization = Factorization {
            length: factors.iter().product::<usize>() * residual.unwrap_or(1),
            factors: factors.to_vec(),
            residual,
        };
        Self::with_factorization(factorization, registry)
    }

    fn with_factorization(
        factorization: Factorization,
        registry: &mut KernelRegistry<T>,
    ) -> Result<Self, FftError> {
        let length = factorization.length;
        let sizes: Vec<usize> = factorization.stages().collect();

        let mut stages = Vec::new();
        stages
            .try_reserve_exact(sizes.len())
            .map_err(|_| FftError::OutOfMemory(sizes.len()))?;

        let mut width = length;
        for (i, &n1) in sizes.iter().enumerate() {
            let is_residual = factorization.residual.is_some() && i + 1 == sizes.len();
            let kernel = if is_residual {
                registry.residual(n1)?
            } else {
                registry.kernel(n1)?
            };
            let n2 = width / n1;
            stages.push(Stage {
                kernel,
                width,
                n1,
                n2,
                transpose_columns: transpose_strategy(n2, n1),
                transpose_rows: transpose_strategy(n1, n2),
            });
            width = n2;
        }

        let twiddles = TwiddleTable::new(length, &sizes)?;
        let kernel_scratch = stages
            .iter()
            .map(|stage| stage.kernel.scratch_length())
            .max()
            .unwrap_or(0);

        Ok(Self {
            execution_length: length,
            factorization,
            stages,
            twiddles,
            kernel_scratch,
        })
    }

    /// Transforms `src` into `dst`, `src` is used as the ping-pong partner and clobbered.
    fn process(
        &self,
        index: usize,
        src: &mut [Complex<T>],
        dst: &mut [Complex<T>],
        scratch: &mut [Complex<T>],
        direction: FftDirection,
    ) -> Result<(), FftError> {
        let stage = &self.stages[index];
        debug_assert_eq!(src.len(), stage.width);

        if index + 1 == self.stages.len() {
            return stage
                .kernel
                .execute_out_of_place(src, dst, scratch, direction);
        }

        // STEP 1: gather every n2-th sample into rows of n1
        stage
            .transpose_columns
            .transpose(src, dst, stage.n2, stage.n1);

        // STEP 2: n2 kernels of size n1
        stage
            .kernel
            .execute_out_of_place(dst, src, scratch, direction)?;

        // STEP 3: twiddles of this boundary, conjugated going backward
        mul_twiddles_in_place(src, self.twiddles.stage(index), direction);

        // STEP 4: transpose so that every sub-transform is contiguous
        stage
            .transpose_rows
            .transpose(src, dst, stage.n1, stage.n2);

        // STEP 5: n1 transforms of size n2
        for (row_src, row_dst) in dst
            .chunks_exact_mut(stage.n2)
            .zip(src.chunks_exact_mut(stage.n2))
        {
            self.process(index + 1, row_src, row_dst, scratch, direction)?;
        }

        // STEP 6: back to natural bin order
        stage
            .transpose_columns
            .transpose(src, dst, stage.n2, stage.n1);
        Ok(())
    }
}

impl<T: FftSample> FftKernel<T> for MixedRadix<T>
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

        if self.stages.is_empty() {
            dst.copy_from_slice(src);
            return Ok(());
        }

        let (work, kernel_scratch) = scratch.split_at_mut(self.execution_length);
        for (src, dst) in src
            .chunks_exact(self.execution_length)
            .zip(dst.chunks_exact_mut(self.execution_length))
        {
            work.copy_from_slice(src);
            self.process(0, work, dst, kernel_scratch, direction)?;
        }
        Ok(())
    }

    fn length(&self) -> usize {
        self.execution_length
    }

    fn scratch_length(&self) -> usize {
        if self.stages.is_empty() {
            0
        } else {
            self.execution_length + self.kernel_scratch
        }
    }
}
