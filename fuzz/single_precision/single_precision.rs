#![no_main]

use libfuzzer_sys::fuzz_target;
use mixfft::FftContext;
use num_complex::Complex;

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    sizes: Vec<u16>,
    re: f32,
    im: f32,
}

fuzz_target!(|data: Target| {
    let mut context = FftContext::<f32>::new();
    for &size in data.sizes.iter().take(8) {
        let size = size as usize;
        let input = vec![Complex::new(data.re, data.im); size];
        let mut output = vec![Complex::default(); size];
        if context.forward(&input, &mut output).is_ok() {
            assert_eq!(context.length(), Some(size));
            context.inverse(&output, &mut input.clone()).unwrap();
        } else {
            assert_eq!(context.length(), None);
        }
    }
    context.release();
});
