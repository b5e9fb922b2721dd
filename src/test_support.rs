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
use crate::{FftDirection, FftSample};
use num_complex::Complex;
use num_traits::AsPrimitive;
use rand::Rng;

pub(crate) fn random_signal<T: FftSample>(len: usize) -> Vec<Complex<T>>
where
    f64: AsPrimitive<T>,
{
    let mut rng = rand::rng();
    (0..len)
        .map(|_| {
            let re: f64 = rng.random();
            let im: f64 = rng.random();
            Complex::new((re - 0.5).as_(), (im - 0.5).as_())
        })
        .collect()
}

/// Direct O(n^2) evaluation in f64, unnormalized in both directions.
pub(crate) fn naive_dft<T: FftSample>(
    input: &[Complex<T>],
    direction: FftDirection,
) -> Vec<Complex<T>>
where
    f64: AsPrimitive<T>,
{
    let n = input.len();
    let sign = match direction {
        FftDirection::Forward => -1.,
        FftDirection::Inverse => 1.,
    };
    (0..n)
        .map(|k| {
            let mut acc = Complex::<f64>::new(0., 0.);
            for (j, x) in input.iter().enumerate() {
                let angle = sign * 2. * std::f64::consts::PI * ((j * k) % n) as f64 / n as f64;
                let x: Complex<f64> = Complex::new(x.re.as_(), x.im.as_());
                acc += x * Complex::new(angle.cos(), angle.sin());
            }
            Complex::<T>::new(acc.re.as_(), acc.im.as_())
        })
        .collect()
}

/// Absolute error scaled by the reference peak.
pub(crate) fn assert_close<T: FftSample>(actual: &[Complex<T>], expected: &[Complex<T>], tol: f64) {
    assert_eq!(actual.len(), expected.len());
    let peak = expected
        .iter()
        .map(|v| v.norm().as_())
        .fold(1f64, f64::max);
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let err: f64 = (*a - *e).norm().as_();
        assert!(
            err <= tol * peak,
            "index {i}: {a:?} != {e:?}, error {err} exceeds {} for len {}",
            tol * peak,
            actual.len()
        );
    }
}
