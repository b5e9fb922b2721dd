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
//! Mixed-radix FFT built from a closed set of specialized kernels.
//!
//! A [`FftPlan`] factorizes its length once, caches the twiddle table and its scratch
//! buffers, then transforms any number of buffers of that length. [`FftContext`] and the
//! [`fft`], [`ifft`], [`fft_real`] functions manage plans for callers that do not want to.
//!
//! ```
//! use mixfft::FftPlan;
//! use num_complex::Complex;
//!
//! let mut plan = FftPlan::<f64>::new(12).unwrap();
//! let input = vec![Complex::new(1.0, 0.0); 12];
//! let mut output = vec![Complex::default(); 12];
//! plan.forward(&input, &mut output).unwrap();
//! assert!((output[0].re - 12.0).abs() < 1e-12);
//! ```
#![forbid(unsafe_code)]
mod bluestein;
mod butterflies;
mod context;
mod dft;
mod err;
mod factorization;
mod factory;
mod mixed_radix;
mod mla;
mod plan;
mod r2c;
mod spectrum;
mod spectrum_arithmetic;
mod store;
#[cfg(test)]
mod test_support;
mod traits;
mod transpose;
mod twiddles;
mod util;

pub use context::{FftContext, fft, fft_real, ifft};
pub use err::FftError;
pub use factorization::{DIRECT_DFT_THRESHOLD, FFT_COMPOSITE_MAX, SUPPORTED_KERNELS};
pub use plan::FftPlan;
pub use spectrum::{
    Linspace, Spectrum, SpectrumFlags, fft_abs, fft_abs_cmplx, fft_mag_cmplx, fft_shift,
    fft_shift_into, ifft_shift, linspace,
};
pub use traits::FftSample;

use num_complex::Complex;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum FftDirection {
    Forward,
    Inverse,
}

impl FftDirection {
    pub fn inverse(self) -> FftDirection {
        match self {
            FftDirection::Forward => FftDirection::Inverse,
            FftDirection::Inverse => FftDirection::Forward,
        }
    }
}

/// Unnormalized transform of one fixed length, applied to every `length()` block of `src`.
pub(crate) trait FftKernel<T>: Send + Sync {
    fn execute_out_of_place(
        &self,
        src: &[Complex<T>],
        dst: &mut [Complex<T>],
        scratch: &mut [Complex<T>],
        direction: FftDirection,
    ) -> Result<(), FftError>;

    fn length(&self) -> usize;

    /// Minimum scratch, in elements, `execute_out_of_place` expects.
    fn scratch_length(&self) -> usize;
}
