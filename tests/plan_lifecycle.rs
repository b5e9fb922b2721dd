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
mod common;

use common::{max_error, random_signal};
use mixfft::{FFT_COMPOSITE_MAX, FftContext, FftError, FftPlan, fft};
use num_complex::Complex;

#[test]
fn plan_is_reusable_across_calls() {
    let mut plan = FftPlan::<f64>::new(210).unwrap();
    let first = random_signal(210);
    let second = random_signal(210);

    let mut a = vec![Complex::default(); 210];
    let mut b = vec![Complex::default(); 210];
    let mut c = vec![Complex::default(); 210];
    plan.forward(&first, &mut a).unwrap();
    plan.forward(&second, &mut b).unwrap();
    plan.forward(&first, &mut c).unwrap();

    assert_eq!(a, c);
    assert!(max_error(&b, &fft(&second).unwrap()) < 1e-12);
}

#[test]
fn independent_plans_do_not_interfere() {
    let mut small = FftPlan::<f64>::new(12).unwrap();
    let mut large = FftPlan::<f64>::new(1000).unwrap();
    let x = random_signal(12);
    let y = random_signal(1000);

    let mut before = vec![Complex::default(); 12];
    small.forward(&x, &mut before).unwrap();
    let mut spectrum = vec![Complex::default(); 1000];
    large.forward(&y, &mut spectrum).unwrap();
    let mut after = vec![Complex::default(); 12];
    small.forward(&x, &mut after).unwrap();

    assert_eq!(before, after);
    large.destroy();
    small.destroy();
}

#[test]
fn plans_move_between_threads() {
    let handles: Vec<_> = [16usize, 45, 128, 143]
        .into_iter()
        .map(|length| {
            std::thread::spawn(move || {
                let mut plan = FftPlan::<f64>::new(length).unwrap();
                let input = random_signal(length);
                let mut spectrum = vec![Complex::default(); length];
                let mut restored = vec![Complex::default(); length];
                plan.forward(&input, &mut spectrum).unwrap();
                plan.inverse(&spectrum, &mut restored).unwrap();
                max_error(&restored, &input)
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap() < 1e-12);
    }
}

#[test]
fn creation_failures() {
    assert_eq!(FftPlan::<f64>::new(0).unwrap_err(), FftError::InvalidSize(0));
    assert_eq!(
        FftPlan::<f32>::new(46349).unwrap_err(),
        FftError::UnsupportedFactorization {
            length: 46349,
            factor: 46349
        }
    );
    // 2 * 3 * 5 * 7 are stripped before the residual is compared to the ceiling
    assert_eq!(FftPlan::<f64>::new(2 * 46337).unwrap().residual(), Some(46337));
    assert!(46337 <= FFT_COMPOSITE_MAX);
}

#[test]
fn identity_for_single_sample() {
    let mut plan = FftPlan::<f64>::new(1).unwrap();
    assert!(plan.factors().is_empty());
    assert_eq!(plan.residual(), None);

    let input = [Complex::new(3., -2.)];
    let mut output = [Complex::default()];
    plan.forward(&input, &mut output).unwrap();
    assert_eq!(output, input);
    plan.inverse(&input, &mut output).unwrap();
    assert_eq!(output, input);
}

#[test]
fn mismatched_buffers_are_rejected() {
    let mut plan = FftPlan::<f64>::new(8).unwrap();
    let input = vec![Complex::default(); 8];
    let mut short = vec![Complex::default(); 7];
    assert_eq!(
        plan.forward(&input, &mut short),
        Err(FftError::LengthMismatch {
            expected: 8,
            actual: 7
        })
    );
    let real = vec![0f64; 9];
    let mut output = vec![Complex::default(); 8];
    assert_eq!(
        plan.forward_real(&real, &mut output),
        Err(FftError::LengthMismatch {
            expected: 8,
            actual: 9
        })
    );
}

#[test]
fn context_follows_buffer_length() {
    let mut context = FftContext::<f64>::new();
    for length in [8usize, 8, 30, 143, 8] {
        let input = random_signal(length);
        let mut output = vec![Complex::default(); length];
        context.forward(&input, &mut output).unwrap();
        assert_eq!(context.length(), Some(length));
        assert!(max_error(&output, &fft(&input).unwrap()) < 1e-11);
    }
    context.release();
    assert_eq!(context.length(), None);
    context.release();

    let mut output = vec![Complex::default(); 0];
    assert_eq!(
        context.forward(&[], &mut output),
        Err(FftError::InvalidSize(0))
    );
}
