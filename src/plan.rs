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
use crate::factory::KernelRegistry;
use crate::mixed_radix::MixedRadix;
use crate::r2c::{R2CFftEvenInterceptor, R2CFftExecutor, R2COddInterceptor};
use crate::{FftDirection, FftError, FftKernel, FftSample};
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};
use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Precomputed transform of one fixed length.
///
/// Owns the factorization, the twiddle table and every scratch buffer a transform needs,
/// so repeated calls allocate nothing. Buffers passed to [`FftPlan::forward`],
/// [`FftPlan::inverse`] and [`FftPlan::forward_real`] must have exactly the plan length,
/// any other length is rejected with [`FftError::LengthMismatch`] and nothing is written.
///
/// Transforms take `&mut self`: a plan serves one call at a time, distinct plans are
/// independent.
pub struct FftPlan<T: FftSample> {
    length: usize,
    chain: Arc<MixedRadix<T>>,
    real: Box<dyn R2CFftExecutor<T>>,
    scratch: Vec<Complex<T>>,
}

impl<T: FftSample> FftPlan<T>
where
    f64: AsPrimitive<T>,
{
    /// Factorizes `length` and builds every table the transforms of that length need.
    ///
    /// Fails with [`FftError::InvalidSize`] for zero and with
    /// [`FftError::UnsupportedFactorization`] when the factor left after removing
    /// 2, 3, 5 and 7 exceeds [`crate::FFT_COMPOSITE_MAX`].
    #[instrument(level = "debug", skip_all, fields(len = length))]
    pub fn new(length: usize) -> Result<Self, FftError> {
        if length < 1 {
            return Err(FftError::InvalidSize(length));
        }

        let mut registry = KernelRegistry::new();
        let chain = Arc::new(MixedRadix::new(length, &mut registry)?);

        let real: Box<dyn R2CFftExecutor<T>> = if length.is_multiple_of(2) {
            let half = MixedRadix::new(length / 2, &mut registry)?;
            Box::new(R2CFftEvenInterceptor::install(length, Arc::new(half))?)
        } else {
            Box::new(R2COddInterceptor::install(
                Arc::clone(&chain) as Arc<dyn FftKernel<T>>
            ))
        };

        let scratch_length = chain.scratch_length().max(real.scratch_length());
        let scratch = try_vec![Complex::zero(); scratch_length];

        debug!(
            factors = ?chain.factorization().factors,
            residual = ?chain.factorization().residual,
            twiddles = chain.twiddle_count(),
            real_length = real.real_length(),
            scratch_length,
            "plan created"
        );

        Ok(Self {
            length,
            chain,
            real,
            scratch,
        })
    }

    /// Transform length the plan was built for.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Closed-set kernel sizes, outermost stage first.
    pub fn factors(&self) -> &[usize] {
        &self.chain.factorization().factors
    }

    /// Factor evaluated by the generic stage, if the length needs one.
    pub fn residual(&self) -> Option<usize> {
        self.chain.factorization().residual
    }

    fn check_lengths(&self, input: usize, output: usize) -> Result<(), FftError> {
        for actual in [input, output] {
            if actual != self.length {
                return Err(FftError::LengthMismatch {
                    expected: self.length,
                    actual,
                });
            }
        }
        Ok(())
    }

    /// `output[k] = sum(input[n] * exp(-2πi * k * n / N))`
    pub fn forward(
        &mut self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
    ) -> Result<(), FftError> {
        self.check_lengths(input.len(), output.len())?;
        self.chain
            .execute_out_of_place(input, output, &mut self.scratch, FftDirection::Forward)
    }

    /// `output[n] = sum(input[k] * exp(2πi * k * n / N)) / N`
    pub fn inverse(
        &mut self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
    ) -> Result<(), FftError> {
        self.check_lengths(input.len(), output.len())?;
        self.chain
            .execute_out_of_place(input, output, &mut self.scratch, FftDirection::Inverse)?;

        let scale: T = (1f64 / self.length as f64).as_();
        for v in output.iter_mut() {
            *v = *v * scale;
        }
        Ok(())
    }

    /// All `N` bins of the transform of real samples, equal to [`FftPlan::forward`]
    /// on the same samples with a zero imaginary part.
    pub fn forward_real(&mut self, input: &[T], output: &mut [Complex<T>]) -> Result<(), FftError> {
        self.check_lengths(input.len(), output.len())?;
        self.real.execute(input, output, &mut self.scratch)
    }

    /// Releases every table and buffer the plan owns.
    pub fn destroy(self) {}
}

impl<T: FftSample> Debug for FftPlan<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FftPlan")
            .field("length", &self.length)
            .field("factors", &self.chain.factorization().factors)
            .field("residual", &self.chain.factorization().residual)
            .finish()
    }
}
