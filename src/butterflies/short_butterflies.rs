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
use crate::FftDirection;
use crate::butterflies::rotate_90;
use num_complex::Complex;
use num_traits::Float;

#[inline(always)]
pub(crate) fn butterfly2<T: Float>(u0: Complex<T>, u1: Complex<T>) -> (Complex<T>, Complex<T>) {
    (u0 + u1, u0 - u1)
}

/// Radix-4 network shared by the 4, 8 and 16 point kernels.
#[inline(always)]
pub(crate) fn butterfly4<T: Float>(
    u0: Complex<T>,
    u1: Complex<T>,
    u2: Complex<T>,
    u3: Complex<T>,
    direction: FftDirection,
) -> (Complex<T>, Complex<T>, Complex<T>, Complex<T>) {
    let (t0, t1) = butterfly2(u0, u2);
    let (t2, t3) = butterfly2(u1, u3);
    let t3 = rotate_90(t3, direction);

    let y0 = t0 + t2;
    let y1 = t1 + t3;
    let y2 = t0 - t2;
    let y3 = t1 - t3;
    (y0, y1, y2, y3)
}

/// Radix-8 network, `root_half` is `sqrt(1/2)`.
#[inline(always)]
pub(crate) fn butterfly8<T: Float>(
    u: [Complex<T>; 8],
    root_half: T,
    direction: FftDirection,
) -> [Complex<T>; 8] {
    let (e0, e1, e2, e3) = butterfly4(u[0], u[2], u[4], u[6], direction);
    let (o0, o1, o2, o3) = butterfly4(u[1], u[3], u[5], u[7], direction);

    let o1 = (o1 + rotate_90(o1, direction)) * root_half;
    let o2 = rotate_90(o2, direction);
    let o3 = rotate_90(o3 + rotate_90(o3, direction), direction) * root_half;

    [
        e0 + o0,
        e1 + o1,
        e2 + o2,
        e3 + o3,
        e0 - o0,
        e1 - o1,
        e2 - o2,
        e3 - o3,
    ]
}
