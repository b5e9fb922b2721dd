#![no_main]

use libfuzzer_sys::fuzz_target;
use mixfft::{SpectrumFlags, fft, fft_real};
use num_complex::Complex;

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    samples: Vec<f64>,
    shift: bool,
}

fuzz_target!(|data: Target| {
    if data.samples.is_empty() || data.samples.iter().any(|x| !x.is_finite() || x.abs() > 1e6) {
        return;
    }
    let real = match fft_real(&data.samples) {
        Ok(real) => real,
        Err(_) => return,
    };
    let embedded: Vec<Complex<f64>> = data.samples.iter().map(|&x| Complex::new(x, 0.)).collect();
    let complex = fft(&embedded).unwrap();
    let peak = complex.iter().map(|v| v.norm()).fold(1f64, f64::max);
    for (a, b) in real.iter().zip(complex.iter()) {
        assert!((a - b).norm() <= 1e-9 * peak);
    }

    let mut context = mixfft::FftContext::<f64>::new();
    let flags = SpectrumFlags {
        shift: data.shift,
        log_mag: false,
    };
    let spectrum = mixfft::fft_abs(&mut context, &data.samples, 1., flags).unwrap();
    assert_eq!(spectrum.mag.len(), data.samples.len());
    assert_eq!(spectrum.freq.len(), data.samples.len());
});
