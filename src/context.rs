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
use crate::{FftError, FftPlan, FftSample};
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};
use tracing::{instrument, trace};

/// Self-managing holder of at most one plan.
///
/// Every call checks the buffer length against the held plan and rebuilds the plan when
/// they differ, releasing the old one first. Use [`FftPlan`] directly when the length is
/// fixed and the check is unwanted.
#[derive(Debug)]
pub struct FftContext<T: FftSample> {
    plan: Option<FftPlan<T>>,
}

impl<T: FftSample> Default for FftContext<T> {
    fn default() -> Self {
        Self { plan: None }
    }
}

impl<T: FftSample> FftContext<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Length of the held plan, `None` before the first call or after [`FftContext::release`].
    pub fn length(&self) -> Option<usize> {
        self.plan.as_ref().map(FftPlan::length)
    }

    /// Plan for `length`, created or re-created when needed.
    pub fn plan(&mut self, length: usize) -> Result<&mut FftPlan<T>, FftError> {
        let stale = self
            .plan
            .as_ref()
            .is_some_and(|plan| plan.length() != length);
        if stale {
            trace!(
                from = self.length(),
                to = length,
                "length changed, rebuilding plan"
            );
            self.plan = None;
        }
        match &mut self.plan {
            Some(plan) => Ok(plan),
            empty => Ok(empty.insert(FftPlan::new(length)?)),
        }
    }

    fn output_matches(input: usize, output: usize) -> Result<(), FftError> {
        if input != output {
            return Err(FftError::LengthMismatch {
                expected: input,
                actual: output,
            });
        }
        Ok(())
    }

    pub fn forward(
        &mut self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
    ) -> Result<(), FftError> {
        Self::output_matches(input.len(), output.len())?;
        self.plan(input.len())?.forward(input, output)
    }

    pub fn inverse(
        &mut self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
    ) -> Result<(), FftError> {
        Self::output_matches(input.len(), output.len())?;
        self.plan(input.len())?.inverse(input, output)
    }

    pub fn forward_real(&mut self, input: &[T], output: &mut [Complex<T>]) -> Result<(), FftError> {
        Self::output_matches(input.len(), output.len())?;
        self.plan(input.len())?.forward_real(input, output)
    }

    /// Drops the held plan. Calling it again, or on a fresh context, does nothing.
    pub fn release(&mut self) {
        self.plan = None;
    }
}

/// One-shot forward transform with a transient plan.
#[instrument(level = "debug", skip_all, fields(len = input.len()))]
pub fn fft<T: FftSample>(input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError>
where
    f64: AsPrimitive<T>,
{
    let mut output = try_vec![Complex::zero(); input.len()];
    FftPlan::new(input.len())?.forward(input, &mut output)?;
    Ok(output)
}

/// One-shot inverse transform with a transient plan, scaled by `1/N`.
#[instrument(level = "debug", skip_all, fields(len = input.len()))]
pub fn ifft<T: FftSample>(input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError>
where
    f64: AsPrimitive<T>,
{
    let mut output = try_vec![Complex::zero(); input.len()];
    FftPlan::new(input.len())?.inverse(input, &mut output)?;
    Ok(output)
}

/// One-shot transform of real samples, all `N` bins.
#[instrument(level = "debug", skip_all, fields(len = input.len()))]
pub fn fft_real<T: FftSample>(input: &[T]) -> Result<Vec<Complex<T>>, FftError>
where
    f64: AsPrimitive<T>,
{
    let mut output = try_vec![Complex::zero(); input.len()];
    FftPlan::new(input.len())?.forward_real(input, &mut output)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_close, random_signal};

    #[test]
    fn test_context_recreates_on_length_change() {
        let mut context = FftContext::<f64>::new();
        assert_eq!(context.length(), None);

        let input = random_signal::<f64>(16);
        let mut output = vec![Complex::zero(); 16];
        context.forward(&input, &mut output).unwrap();
        assert_eq!(context.length(), Some(16));

        let input = random_signal::<f64>(45);
        let mut output = vec![Complex::zero(); 45];
        context.forward(&input, &mut output).unwrap();
        assert_eq!(context.length(), Some(45));
        assert_close(&output, &fft(&input).unwrap(), 1e-13);
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut context = FftContext::<f64>::new();
        context.release();
        context.plan(8).unwrap();
        context.release();
        context.release();
        assert_eq!(context.length(), None);
    }

    #[test]
    fn test_context_debug_shows_held_plan() {
        let mut context = FftContext::<f32>::new();
        assert_eq!(format!("{context:?}"), "FftContext { plan: None }");
        context.plan(30).unwrap();
        let text = format!("{context:?}");
        assert!(text.contains("FftPlan"));
        assert!(text.contains("length: 30"));
    }

    #[test]
    fn test_context_drops_stale_plan_on_failure() {
        let mut context = FftContext::<f64>::new();
        context.plan(8).unwrap();
        assert!(context.plan(0).is_err());
        assert_eq!(context.length(), None);
        let input = random_signal::<f64>(8);
        let mut output = vec![Complex::zero(); 4];
        assert_eq!(
            context.forward(&input, &mut output),
            Err(FftError::LengthMismatch {
                expected: 8,
                actual: 4
            })
        );
    }

    #[test]
    fn test_one_shot_round_trip() {
        let input = random_signal::<f64>(84);
        let restored = ifft(&fft(&input).unwrap()).unwrap();
        assert_close(&restored, &input, 1e-12);

        let real: Vec<f64> = input.iter().map(|v| v.re).collect();
        let embedded: Vec<Complex<f64>> = real.iter().map(|&x| Complex::new(x, 0.)).collect();
        assert_close(&fft_real(&real).unwrap(), &fft(&embedded).unwrap(), 1e-12);
        assert_eq!(fft::<f64>(&[]), Err(FftError::InvalidSize(0)));
    }
}
