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
use crate::bluestein::{BluesteinFft, bluestein_inner_length};
use crate::butterflies::{
    Butterfly2, Butterfly3, Butterfly4, Butterfly5, Butterfly7, Butterfly8, Butterfly16,
    CompositeButterfly, composite_split,
};
use crate::dft::Dft;
use crate::factorization::DIRECT_DFT_THRESHOLD;
use crate::mixed_radix::MixedRadix;
use crate::{FftError, FftKernel, FftSample};
use num_traits::AsPrimitive;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Size to kernel map consulted while a plan is being built.
///
/// Kernels are memoized, so a composite kernel and the stages around it share
/// the same inner instances.
pub(crate) struct KernelRegistry<T> {
    kernels: HashMap<usize, Arc<dyn FftKernel<T>>>,
}

impl<T: FftSample> KernelRegistry<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new() -> Self {
        Self {
            kernels: HashMap::new(),
        }
    }

    /// Specialized kernel for a size of the closed set.
    pub(crate) fn kernel(&mut self, size: usize) -> Result<Arc<dyn FftKernel<T>>, FftError> {
        if let Some(kernel) = self.kernels.get(&size) {
            return Ok(Arc::clone(kernel));
        }

        let kernel: Arc<dyn FftKernel<T>> = match size {
            2 => Arc::new(Butterfly2::new()),
            3 => Arc::new(Butterfly3::new()),
            4 => Arc::new(Butterfly4::new()),
            5 => Arc::new(Butterfly5::new()),
            7 => Arc::new(Butterfly7::new()),
            8 => Arc::new(Butterfly8::new()),
            16 => Arc::new(Butterfly16::new()),
            _ => match composite_split(size) {
                Some((first, second)) => {
                    let first = self.kernel(first)?;
                    let second = self.kernel(second)?;
                    Arc::new(CompositeButterfly::new(first, second)?)
                }
                None => {
                    return Err(FftError::PreconditionViolation {
                        expected: 2,
                        actual: size,
                    });
                }
            },
        };

        self.kernels.insert(size, Arc::clone(&kernel));
        Ok(kernel)
    }

    /// Generic stage for a factor outside the closed set.
    pub(crate) fn residual(&mut self, size: usize) -> Result<Arc<dyn FftKernel<T>>, FftError> {
        if let Some(kernel) = self.kernels.get(&size) {
            return Ok(Arc::clone(kernel));
        }

        let kernel: Arc<dyn FftKernel<T>> = if size <= DIRECT_DFT_THRESHOLD {
            debug!(size, "direct residual");
            Arc::new(Dft::new(size)?)
        } else {
            let inner_length = bluestein_inner_length(size);
            debug!(size, inner_length, "bluestein residual");
            let inner = MixedRadix::new(inner_length, self)?;
            Arc::new(BluesteinFft::new(size, Arc::new(inner))?)
        };

        self.kernels.insert(size, Arc::clone(&kernel));
        Ok(kernel)
    }
}
