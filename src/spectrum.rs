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
use crate::{FftContext, FftError, FftSample};
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};

/// Spacing rule of [`linspace`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Linspace {
    /// `n` points from `a` up to, but excluding, `b`.
    Periodic,
    /// `n` points from `a` to `b` inclusive.
    Symmetric,
}

/// Evenly spaced points over `[a, b)` or `[a, b]`.
pub fn linspace<T: FftSample>(a: T, b: T, n: usize, kind: Linspace) -> Result<Vec<T>, FftError>
where
    f64: AsPrimitive<T>,
{
    if n < 1 {
        return Err(FftError::InvalidSize(n));
    }
    if n == 1 {
        return Ok(vec![a]);
    }
    let divisions = match kind {
        Linspace::Periodic => n,
        Linspace::Symmetric => n - 1,
    };
    let step = (b - a) / (divisions as f64).as_();
    let mut out = try_vec![T::zero(); n];
    for (i, v) in out.iter_mut().enumerate() {
        *v = a + step * (i as f64).as_();
    }
    Ok(out)
}

/// Options of the magnitude spectrum helpers.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct SpectrumFlags {
    /// Move the zero frequency to the middle with [`fft_shift`].
    pub shift: bool,
    /// [`fft_mag_cmplx`] returns `20 * log10(|X| + eps)` instead of `|X|^2`.
    pub log_mag: bool,
}

impl SpectrumFlags {
    pub const SHIFT: SpectrumFlags = SpectrumFlags {
        shift: true,
        log_mag: false,
    };
    pub const LOG_MAG: SpectrumFlags = SpectrumFlags {
        shift: false,
        log_mag: true,
    };

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_log_mag(mut self) -> Self {
        self.log_mag = true;
        self
    }
}

/// Magnitude values paired with their frequency axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum<T> {
    pub mag: Vec<T>,
    pub freq: Vec<T>,
}

/// Rotates left by `ceil(n / 2)` so the zero bin lands in the middle.
pub fn fft_shift<T: Copy>(input: &[T]) -> Result<Vec<T>, FftError> {
    if input.is_empty() {
        return Err(FftError::InvalidSize(0));
    }
    let mut out = Vec::new();
    out.try_reserve_exact(input.len())
        .map_err(|_| FftError::OutOfMemory(input.len()))?;
    out.extend_from_slice(input);
    out.rotate_left(input.len().div_ceil(2));
    Ok(out)
}

/// [`fft_shift`] into a caller buffer of the same length.
pub fn fft_shift_into<T: Copy>(input: &[T], output: &mut [T]) -> Result<(), FftError> {
    if input.is_empty() {
        return Err(FftError::InvalidSize(0));
    }
    if output.len() != input.len() {
        return Err(FftError::LengthMismatch {
            expected: input.len(),
            actual: output.len(),
        });
    }
    let split = input.len().div_ceil(2);
    let (head, tail) = input.split_at(split);
    output[..tail.len()].copy_from_slice(tail);
    output[tail.len()..].copy_from_slice(head);
    Ok(())
}

/// Undoes [`fft_shift`].
pub fn ifft_shift<T: Copy>(input: &[T]) -> Result<Vec<T>, FftError> {
    if input.is_empty() {
        return Err(FftError::InvalidSize(0));
    }
    let mut out = Vec::new();
    out.try_reserve_exact(input.len())
        .map_err(|_| FftError::OutOfMemory(input.len()))?;
    out.extend_from_slice(input);
    out.rotate_left(input.len() / 2);
    Ok(out)
}

fn frequency_axis<T: FftSample>(n: usize, fs: T, shift: bool) -> Result<Vec<T>, FftError>
where
    f64: AsPrimitive<T>,
{
    let half: T = 0.5f64.as_();
    if !shift {
        return linspace(T::zero(), fs, n, Linspace::Periodic);
    }
    if n % 2 == 1 {
        let edge = fs * half / (n as f64).as_();
        linspace(-fs * half + edge, fs * half - edge, n, Linspace::Symmetric)
    } else {
        linspace(-fs * half, fs * half, n, Linspace::Periodic)
    }
}

fn magnitude<T: FftSample>(
    spectrum: Vec<Complex<T>>,
    fs: T,
    flags: SpectrumFlags,
) -> Result<Spectrum<T>, FftError>
where
    f64: AsPrimitive<T>,
{
    let n = spectrum.len();
    let mut mag = try_vec![T::zero(); n];
    for (dst, v) in mag.iter_mut().zip(spectrum.iter()) {
        *dst = v.norm();
    }
    if flags.shift {
        mag = fft_shift(&mag)?;
    }
    let freq = frequency_axis(n, fs, flags.shift)?;
    Ok(Spectrum { mag, freq })
}

/// `|X[k]|` of real samples with its frequency axis for sample rate `fs`.
pub fn fft_abs<T: FftSample>(
    context: &mut FftContext<T>,
    input: &[T],
    fs: T,
    flags: SpectrumFlags,
) -> Result<Spectrum<T>, FftError>
where
    f64: AsPrimitive<T>,
{
    if input.is_empty() {
        return Err(FftError::InvalidSize(0));
    }
    let mut spectrum = try_vec![Complex::zero(); input.len()];
    context.forward_real(input, &mut spectrum)?;
    magnitude(spectrum, fs, flags)
}

/// `|X[k]|` of complex samples with its frequency axis for sample rate `fs`.
pub fn fft_abs_cmplx<T: FftSample>(
    context: &mut FftContext<T>,
    input: &[Complex<T>],
    fs: T,
    flags: SpectrumFlags,
) -> Result<Spectrum<T>, FftError>
where
    f64: AsPrimitive<T>,
{
    if input.is_empty() {
        return Err(FftError::InvalidSize(0));
    }
    let mut spectrum = try_vec![Complex::zero(); input.len()];
    context.forward(input, &mut spectrum)?;
    magnitude(spectrum, fs, flags)
}

/// Power spectrum `|X[k]|^2`, or `20 * log10(|X[k]| + eps)` with [`SpectrumFlags::log_mag`].
pub fn fft_mag_cmplx<T: FftSample>(
    context: &mut FftContext<T>,
    input: &[Complex<T>],
    fs: T,
    flags: SpectrumFlags,
) -> Result<Spectrum<T>, FftError>
where
    f64: AsPrimitive<T>,
{
    let mut spectrum = fft_abs_cmplx(context, input, fs, flags)?;
    let twenty: T = 20f64.as_();
    for v in spectrum.mag.iter_mut() {
        *v = if flags.log_mag {
            twenty * (*v + T::EPS).log10()
        } else {
            *v * *v
        };
    }
    Ok(spectrum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_even_and_odd() {
        assert_eq!(fft_shift(&[0, 1, 2, 3]).unwrap(), vec![2, 3, 0, 1]);
        assert_eq!(fft_shift(&[0, 1, 2, 3, 4]).unwrap(), vec![3, 4, 0, 1, 2]);
        assert_eq!(ifft_shift(&[3, 4, 0, 1, 2]).unwrap(), vec![0, 1, 2, 3, 4]);
        assert_eq!(fft_shift::<u8>(&[]), Err(FftError::InvalidSize(0)));

        let mut out = [0; 5];
        fft_shift_into(&[0, 1, 2, 3, 4], &mut out).unwrap();
        assert_eq!(out, [3, 4, 0, 1, 2]);
        assert!(fft_shift_into(&[0, 1, 2], &mut out).is_err());
    }

    #[test]
    fn test_linspace_kinds() {
        let p = linspace(0f64, 1., 4, Linspace::Periodic).unwrap();
        assert_eq!(p, vec![0., 0.25, 0.5, 0.75]);
        let s = linspace(0f64, 1., 5, Linspace::Symmetric).unwrap();
        assert_eq!(s, vec![0., 0.25, 0.5, 0.75, 1.]);
        assert!(linspace(0f64, 1., 0, Linspace::Periodic).is_err());
    }

    #[test]
    fn test_abs_of_constant_signal() {
        let mut context = FftContext::<f64>::new();
        let spectrum = fft_abs(&mut context, &[1.; 8], 8., SpectrumFlags::default()).unwrap();
        assert!((spectrum.mag[0] - 8.).abs() < 1e-12);
        assert!(spectrum.mag[1..].iter().all(|v| v.abs() < 1e-12));
        assert_eq!(spectrum.freq, vec![0., 1., 2., 3., 4., 5., 6., 7.]);

        let spectrum = fft_abs(&mut context, &[1.; 8], 8., SpectrumFlags::SHIFT).unwrap();
        assert!((spectrum.mag[4] - 8.).abs() < 1e-12);
        assert_eq!(spectrum.freq, vec![-4., -3., -2., -1., 0., 1., 2., 3.]);
    }

    #[test]
    fn test_odd_shifted_axis_is_centered() {
        let mut context = FftContext::<f64>::new();
        let input = vec![Complex::new(1., 0.); 5];
        let spectrum = fft_abs_cmplx(&mut context, &input, 5., SpectrumFlags::SHIFT).unwrap();
        let expected = [-2., -1., 0., 1., 2.];
        for (f, e) in spectrum.freq.iter().zip(expected.iter()) {
            assert!((f - e).abs() < 1e-12);
        }
        assert!((spectrum.mag[2] - 5.).abs() < 1e-12);
    }

    #[test]
    fn test_power_and_log_magnitude() {
        let mut context = FftContext::<f64>::new();
        let input = vec![Complex::new(1., 0.); 4];
        let power = fft_mag_cmplx(&mut context, &input, 1., SpectrumFlags::default()).unwrap();
        assert!((power.mag[0] - 16.).abs() < 1e-12);

        let log = fft_mag_cmplx(&mut context, &input, 1., SpectrumFlags::LOG_MAG).unwrap();
        assert!((log.mag[0] - 20. * 4f64.log10()).abs() < 1e-9);
        // empty bins bottom out at the epsilon floor
        assert!(log.mag[1] < -300.);
    }
}
