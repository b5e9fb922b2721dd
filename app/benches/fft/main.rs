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
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use mixfft::{FftPlan, fft};
use num_complex::Complex;
use rand::Rng;
use std::hint::black_box;

fn random_input(n: usize) -> Vec<Complex<f64>> {
    (0..n)
        .map(|_| Complex::new(rand::rng().random(), rand::rng().random()))
        .collect()
}

fn naive_dft(input: &[Complex<f64>], output: &mut [Complex<f64>]) {
    let n = input.len();
    for (k, dst) in output.iter_mut().enumerate() {
        let mut acc = Complex::default();
        for (j, x) in input.iter().enumerate() {
            let angle = -2. * std::f64::consts::PI * ((j * k) % n) as f64 / n as f64;
            acc += x * Complex::new(angle.cos(), angle.sin());
        }
        *dst = acc;
    }
}

fn check_length_group(c: &mut Criterion, n: usize, group: &str) {
    let input = random_input(n);

    c.bench_function(format!("mixfft plan {group}").as_str(), |b| {
        let mut plan = FftPlan::<f64>::new(n).unwrap();
        let mut output = vec![Complex::default(); n];
        b.iter(|| {
            plan.forward(black_box(&input), &mut output).unwrap();
        })
    });

    c.bench_function(format!("mixfft one-shot {group}").as_str(), |b| {
        b.iter(|| black_box(fft(black_box(&input)).unwrap()))
    });

    c.bench_function(format!("mixfft f32 {group}").as_str(), |b| {
        let single = input
            .iter()
            .map(|&x| Complex::new(x.re as f32, x.im as f32))
            .collect::<Vec<_>>();
        let mut plan = FftPlan::<f32>::new(n).unwrap();
        let mut output = vec![Complex::default(); n];
        b.iter(|| {
            plan.forward(black_box(&single), &mut output).unwrap();
        })
    });

    if n <= 1024 {
        c.bench_function(format!("naive dft {group}").as_str(), |b| {
            let mut output = vec![Complex::default(); n];
            b.iter(|| naive_dft(black_box(&input), &mut output))
        });
    }
}

pub fn bench_plan_average(c: &mut Criterion) {
    c.bench_function("mixfft plan creation avg", |b| {
        b.iter_batched(
            || (500..=1500).collect::<Vec<usize>>(),
            |lengths| {
                for n in lengths {
                    black_box(FftPlan::<f64>::new(n).unwrap());
                }
            },
            BatchSize::LargeInput,
        );
    });
}

pub fn criterion_benchmark(c: &mut Criterion) {
    check_length_group(c, 16, "16");
    check_length_group(c, 60, "60");
    check_length_group(c, 143, "143");
    check_length_group(c, 1024, "1024");
    check_length_group(c, 4096, "4096");
    check_length_group(c, 30030, "30030");
    check_length_group(c, 8192 * 3, "24576");
    bench_plan_average(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
