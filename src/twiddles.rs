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
use crate::err::try_vec;
use crate::util::compute_twiddle;
use crate::{FftDirection, FftError, FftSample};
use num_complex::Complex;
use num_traits::AsPrimitive;

/// Forward roots of unity for every stage boundary of a plan, stored back to back.
///
/// A stage of width `s = n1 * n2` owns `s` entries, entry `m2 * n1 + k1` being
/// `exp(-2πi * m2 * k1 / s)`. The innermost stage has no boundary and owns nothing.
pub(crate) struct TwiddleTable<T> {
    data: Vec<Complex<T>>,
    offsets: Vec<usize>,
}

impl<T: FftSample> TwiddleTable<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(length: usize, stages: &[usize]) -> Result<Self, FftError> {
        let boundaries = stages.len().saturating_sub(1);

        let mut total = 0usize;
        let mut width = length;
        for &n1 in &stages[..boundaries] {
            total += width;
            width /= n1;
        }

        let mut data = try_vec![Complex::<T>::default(); total];
        let mut offsets = try_vec![0usize; boundaries];

        let mut offset = 0usize;
        let mut width = length;
        for (&n1, stage_offset) in stages[..boundaries].iter().zip(offsets.iter_mut()) {
            *stage_offset = offset;
            let n2 = width / n1;
            let slice = &mut data[offset..offset + width];
            for (m2, row) in slice.chunks_exact_mut(n1).enumerate() {
                for (k1, dst) in row.iter_mut().enumerate() {
                    *dst = compute_twiddle(m2 * k1, width, FftDirection::Forward);
                }
            }
            offset += width;
            width = n2;
        }

        Ok(Self { data, offsets })
    }

    /// Slice for the boundary after stage `index`, `n1 * n2` entries long.
    #[inline]
    pub(crate) fn stage(&self, index: usize) -> &[Complex<T>] {
        let start = self.offsets[index];
        let end = self
            .offsets
            .get(index + 1)
            .copied()
            .unwrap_or(self.data.len());
        &self.data[start..end]
    }
}

impl<T> TwiddleTable<T> {
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sum_of_stage_widths() {
        // 60 = 5 x 4 x 3, boundaries of width 60 and 12
        let table = TwiddleTable::<f64>::new(60, &[5, 4, 3]).unwrap();
        assert_eq!(table.len(), 72);
        assert_eq!(table.stage(0).len(), 60);
        assert_eq!(table.stage(1).len(), 12);
    }

    #[test]
    fn test_entries_are_roots_of_unity() {
        let table = TwiddleTable::<f64>::new(12, &[4, 3]).unwrap();
        let stage = table.stage(0);
        for m2 in 0..3 {
            for k1 in 0..4 {
                let angle = -2. * std::f64::consts::PI * (m2 * k1) as f64 / 12.;
                let expected = Complex::new(angle.cos(), angle.sin());
                assert!((stage[m2 * 4 + k1] - expected).norm() < 1e-15);
            }
        }
    }

    #[test]
    fn test_single_stage_has_no_table() {
        let table = TwiddleTable::<f64>::new(7, &[7]).unwrap();
        assert_eq!(table.len(), 0);
        let table = TwiddleTable::<f64>::new(1, &[]).unwrap();
        assert_eq!(table.len(), 0);
    }
}
