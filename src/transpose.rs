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
use num_complex::Complex;
use std::marker::PhantomData;

/// Moves `input[x + y * width]` to `output[y + x * height]`.
pub(crate) trait TransposeExecutor<T> {
    fn transpose(
        &self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
        width: usize,
        height: usize,
    );
}

/// Picks a fixed-shape executor when one exists for `width x height`.
pub(crate) fn transpose_strategy<T: Copy + Send + Sync + 'static>(
    width: usize,
    height: usize,
) -> Box<dyn TransposeExecutor<T> + Send + Sync> {
    match (width, height) {
        (2, 4) => Box::new(TransposeFixed::<T, 2, 4>::new()),
        (4, 2) => Box::new(TransposeFixed::<T, 4, 2>::new()),
        (4, 4) => Box::new(TransposeFixed::<T, 4, 4>::new()),
        (8, 4) => Box::new(TransposeFixed::<T, 8, 4>::new()),
        (4, 8) => Box::new(TransposeFixed::<T, 4, 8>::new()),
        (8, 8) => Box::new(TransposeFixed::<T, 8, 8>::new()),
        (16, 16) => Box::new(TransposeFixed::<T, 16, 16>::new()),
        _ if width > 31 && height > 31 => Box::new(TransposeBlocked {
            phantom_data: PhantomData,
        }),
        _ => Box::new(TransposeTiny {
            phantom_data: PhantomData,
        }),
    }
}

struct TransposeFixed<T, const W: usize, const H: usize> {
    phantom_data: PhantomData<T>,
}

impl<T, const W: usize, const H: usize> TransposeFixed<T, W, H> {
    fn new() -> Self {
        Self {
            phantom_data: PhantomData,
        }
    }
}

impl<T: Copy, const W: usize, const H: usize> TransposeExecutor<T> for TransposeFixed<T, W, H> {
    #[inline]
    fn transpose(
        &self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
        width: usize,
        height: usize,
    ) {
        debug_assert_eq!((width, height), (W, H));
        let input = &input[..W * H];
        let output = &mut output[..W * H];
        for x in 0..W {
            for y in 0..H {
                output[y + x * H] = input[x + y * W];
            }
        }
    }
}

struct TransposeTiny<T> {
    phantom_data: PhantomData<T>,
}

impl<T: Copy> TransposeExecutor<T> for TransposeTiny<T> {
    fn transpose(
        &self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
        width: usize,
        height: usize,
    ) {
        for x in 0..width {
            for y in 0..height {
                output[y + x * height] = input[x + y * width];
            }
        }
    }
}

const BLOCK_SIZE: usize = 16;

/// Tiled walk that keeps both sides of a large transpose cache resident.
struct TransposeBlocked<T> {
    phantom_data: PhantomData<T>,
}

impl<T: Copy> TransposeExecutor<T> for TransposeBlocked<T> {
    fn transpose(
        &self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
        width: usize,
        height: usize,
    ) {
        for y0 in (0..height).step_by(BLOCK_SIZE) {
            let y1 = (y0 + BLOCK_SIZE).min(height);
            for x0 in (0..width).step_by(BLOCK_SIZE) {
                let x1 = (x0 + BLOCK_SIZE).min(width);
                for y in y0..y1 {
                    let row = &input[y * width..(y + 1) * width];
                    for x in x0..x1 {
                        output[y + x * height] = row[x];
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_shape(width: usize, height: usize) {
        let input: Vec<Complex<f64>> = (0..width * height)
            .map(|i| Complex::new(i as f64, -(i as f64)))
            .collect();
        let mut output = vec![Complex::default(); width * height];
        transpose_strategy(width, height).transpose(&input, &mut output, width, height);
        for y in 0..height {
            for x in 0..width {
                assert_eq!(
                    output[y + x * height],
                    input[x + y * width],
                    "shape {width}x{height} at ({x}, {y})"
                );
            }
        }
        let mut back = vec![Complex::default(); width * height];
        transpose_strategy(height, width).transpose(&output, &mut back, height, width);
        assert_eq!(back, input);
    }

    #[test]
    fn test_fixed_shapes() {
        for (w, h) in [(2, 4), (4, 2), (4, 4), (8, 4), (4, 8), (8, 8), (16, 16)] {
            check_shape(w, h);
        }
    }

    #[test]
    fn test_generic_shapes() {
        for (w, h) in [(1, 1), (3, 7), (7, 3), (5, 16), (64, 33), (40, 100), (256, 16)] {
            check_shape(w, h);
        }
    }
}
