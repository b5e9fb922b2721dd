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
use mixfft::{FftContext, FftPlan, SpectrumFlags, fft_abs, fft_real};
use num_complex::Complex;
use rand::Rng;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    for length in [16usize, 30030, 4096 * 3, 97 * 64] {
        let mut plan = FftPlan::<f64>::new(length).unwrap();
        let input: Vec<Complex<f64>> = (0..length)
            .map(|_| Complex::new(rand::rng().random(), rand::rng().random()))
            .collect();
        let mut spectrum = vec![Complex::default(); length];
        let mut restored = vec![Complex::default(); length];

        let start = Instant::now();
        for _ in 0..100 {
            plan.forward(&input, &mut spectrum).unwrap();
        }
        let forward_time = start.elapsed() / 100;

        plan.inverse(&spectrum, &mut restored).unwrap();
        let error = restored
            .iter()
            .zip(input.iter())
            .map(|(a, b)| (a - b).norm())
            .fold(0f64, f64::max);
        println!(
            "len {length}: factors {:?}, residual {:?}, forward {:?}, round trip error {error:e}",
            plan.factors(),
            plan.residual(),
            forward_time
        );
    }

    let ramp: Vec<f64> = (0..16).map(|k| k as f64).collect();
    println!("ramp dc bin {}", fft_real(&ramp).unwrap()[0]);

    let tone: Vec<f64> = (0..64)
        .map(|k| (2. * std::f64::consts::PI * 5. * k as f64 / 64.).sin())
        .collect();
    let mut context = FftContext::<f64>::new();
    let spectrum = fft_abs(&mut context, &tone, 64., SpectrumFlags::SHIFT).unwrap();
    for (f, m) in spectrum.freq.iter().zip(spectrum.mag.iter()) {
        if *m > 1. {
            println!("tone at {f} Hz, magnitude {m:.3}");
        }
    }
}
