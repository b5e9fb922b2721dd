#![no_main]

use libfuzzer_sys::fuzz_target;
use mixfft::{FftError, FftPlan};
use num_complex::Complex;

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    size: u16,
    re: f64,
    im: f64,
}

fuzz_target!(|data: Target| {
    let size = data.size as usize;
    let mut plan = match FftPlan::<f64>::new(size) {
        Ok(plan) => plan,
        Err(FftError::InvalidSize(_)) | Err(FftError::UnsupportedFactorization { .. }) => return,
        Err(err) => panic!("unexpected error {err} for {size}"),
    };
    let input = vec![Complex::new(data.re, data.im); size];
    let mut spectrum = vec![Complex::default(); size];
    let mut restored = vec![Complex::default(); size];
    plan.forward(&input, &mut spectrum).unwrap();
    plan.inverse(&spectrum, &mut restored).unwrap();

    let mut wrong = vec![Complex::default(); size + 1];
    assert!(plan.forward(&input, &mut wrong).is_err());
});
