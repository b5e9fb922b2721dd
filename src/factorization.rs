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
use crate::FftError;
use tracing::debug;

/// Largest residual factor a plan accepts, `floor(sqrt(2^31))`.
pub const FFT_COMPOSITE_MAX: usize = 46340;

/// Kernel sizes with a specialized implementation, in the order the factorizer tries them.
pub const SUPPORTED_KERNELS: [usize; 15] = [
    4096, 2048, 1024, 512, 256, 128, 64, 32, 16, 8, 7, 5, 4, 3, 2,
];

/// Residuals up to this width are evaluated directly, wider ones through Bluestein.
pub const DIRECT_DFT_THRESHOLD: usize = 64;

/// Ordered stage sizes whose product is the plan length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Factorization {
    pub(crate) length: usize,
    /// Closed-set kernels, outermost stage first.
    pub(crate) factors: Vec<usize>,
    /// Leftover factor outside the closed set, always the innermost stage.
    pub(crate) residual: Option<usize>,
}

impl Factorization {
    /// Every stage width, residual included.
    pub(crate) fn stages(&self) -> impl Iterator<Item = usize> + '_ {
        self.factors.iter().copied().chain(self.residual)
    }
}

/// Greedily peels the largest supported kernel dividing what is left.
pub(crate) fn factorize(length: usize) -> Result<Factorization, FftError> {
    if length < 1 {
        return Err(FftError::InvalidSize(length));
    }

    let mut factors = Vec::new();
    let mut remaining = length;
    while remaining > 1 {
        match SUPPORTED_KERNELS.iter().find(|&&k| remaining.is_multiple_of(k)) {
            Some(&kernel) => {
                factors.push(kernel);
                remaining /= kernel;
            }
            None => break,
        }
    }

    let residual = if remaining > 1 {
        if remaining > FFT_COMPOSITE_MAX {
            return Err(FftError::UnsupportedFactorization {
                length,
                factor: remaining,
            });
        }
        Some(remaining)
    } else {
        None
    };

    debug!(length, ?factors, ?residual, "factorized");

    Ok(Factorization {
        length,
        factors,
        residual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_largest_kernel_first() {
        let f = factorize(8192).unwrap();
        assert_eq!(f.factors, vec![4096, 2]);
        assert_eq!(f.residual, None);

        let f = factorize(30030).unwrap();
        assert_eq!(f.factors, vec![7, 5, 3, 2]);
        assert_eq!(f.residual, Some(143));

        let f = factorize(100).unwrap();
        assert_eq!(f.factors, vec![5, 5, 4]);
    }

    #[test]
    fn test_product_is_length() {
        for n in 1..2000usize {
            let f = factorize(n).unwrap();
            assert_eq!(f.stages().product::<usize>(), n, "length {n}");
        }
    }

    #[test]
    fn test_degenerate_and_invalid_lengths() {
        let f = factorize(1).unwrap();
        assert!(f.factors.is_empty());
        assert_eq!(f.residual, None);
        assert_eq!(factorize(0), Err(FftError::InvalidSize(0)));
    }

    #[test]
    fn test_residual_ceiling() {
        // 46337 is the largest prime under the ceiling, 46349 the smallest above it
        assert_eq!(factorize(46337).unwrap().residual, Some(46337));
        assert_eq!(
            factorize(46349),
            Err(FftError::UnsupportedFactorization {
                length: 46349,
                factor: 46349,
            })
        );
        assert_eq!(
            factorize(2 * 46349),
            Err(FftError::UnsupportedFactorization {
                length: 2 * 46349,
                factor: 46349,
            })
        );
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(factorize(210).unwrap(), factorize(210).unwrap());
    }
}
