// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 the earclip developers
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::cmp::Ordering;

use rug::Rational;

use crate::geometry::vector::ExactVector;
use crate::kernel::predicates::point_line_distance;

/// Intersection of a ray with a segment, with the squared distance from the
/// ray origin used to rank competing hits.
#[derive(Clone, Debug)]
pub struct RayHit {
    pub point: ExactVector,
    pub distance_squared: Rational,
}

/// Intersects the ray `origin + t * dir` (t ≥ 0) with the segment `a - b`,
/// assuming both lie in the same plane.
///
/// When the ray is exactly collinear with the segment the hit is reported
/// only if the offset from `origin` to `a` equals `ref_dir` componentwise;
/// the hole merger uses that case to recognize its own bridge twin edges.
pub fn ray_segment_intersection(
    origin: &ExactVector,
    dir: &ExactVector,
    a: &ExactVector,
    b: &ExactVector,
    ref_dir: &ExactVector,
) -> Option<RayHit> {
    let seg = b - a;
    let to_a = a - origin;
    let cross_dir_seg = dir.cross(&seg);
    let cross_to_a_seg = to_a.cross(&seg);

    if point_line_distance(a, b, origin).cmp0() == Ordering::Equal {
        // ray origin on the carrier line; collinear only if a second ray
        // point is on it too
        let p = origin + dir;
        if point_line_distance(a, b, &p).cmp0() == Ordering::Equal
            && to_a.x == ref_dir.x
            && to_a.y == ref_dir.y
            && to_a.z == ref_dir.z
        {
            let distance_squared = to_a.length_squared();
            return Some(RayHit {
                point: a.clone(),
                distance_squared,
            });
        }
    }

    // coplanar and not parallel
    if cross_dir_seg.length_squared().cmp0() == Ordering::Greater {
        let s = cross_to_a_seg.dot(&cross_dir_seg) / cross_dir_seg.length_squared();
        if s.cmp0() != Ordering::Less {
            let step = dir.scaled(&s);
            let point = origin + &step;
            let within = Rational::from(
                &(&point - a).length_squared() + &(&point - b).length_squared(),
            ) <= seg.length_squared();
            if within {
                return Some(RayHit {
                    distance_squared: step.length_squared(),
                    point,
                });
            }
        }
    }
    None
}
