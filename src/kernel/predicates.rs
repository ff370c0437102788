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

#[inline]
pub(crate) fn sign(r: &Rational) -> i32 {
    match r.cmp0() {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Turn direction of `v0 -> v1 -> v2` relative to the polygon normal.
///
/// Returns `0` when the three points are exactly collinear. Otherwise the
/// cross product `(v0 - v1) × (v2 - v1)` is compared sign-per-axis against
/// `normal`: a counter-clockwise turn (the cross product opposing the
/// normal on some axis) yields `+1`, a clockwise turn yields `-1`. For a
/// CCW-wound polygon `+1` at a vertex means the vertex is convex.
///
/// The per-axis sign comparison stands in for a 2-D projection and assumes
/// all three points lie in the polygon's supporting plane.
pub fn orientation(
    v0: &ExactVector,
    v1: &ExactVector,
    v2: &ExactVector,
    normal: &ExactVector,
) -> i32 {
    let res = (v0 - v1).cross(&(v2 - v1));
    if res.is_zero() {
        return 0;
    }
    if sign(&res.x) != sign(&normal.x)
        || sign(&res.y) != sign(&normal.y)
        || sign(&res.z) != sign(&normal.z)
    {
        1
    } else {
        -1
    }
}

/// Does `test` lie inside the wedge swept counter-clockwise from ray
/// `origin -> a` to ray `origin -> b`?
///
/// Returns `+1` strictly inside, `-1` strictly outside, `0` when `test`
/// falls exactly on a bounding ray pointing the same way as that ray.
pub fn is_between(
    origin: &ExactVector,
    a: &ExactVector,
    b: &ExactVector,
    test: &ExactVector,
    normal: &ExactVector,
) -> i32 {
    let psca = orientation(origin, a, test, normal);
    let pscb = orientation(origin, b, test, normal);

    // where does b lie in relation to a? left, right or collinear?
    let psb = orientation(origin, a, b, normal);
    if psb > 0 {
        // wedge narrower than a half-plane: left of a AND right of b
        if psca > 0 && pscb < 0 {
            return 1;
        }
        if psca == 0 {
            return on_ray_tiebreak(origin, a, test, -1);
        } else if pscb == 0 {
            return on_ray_tiebreak(origin, b, test, -1);
        }
    } else if psb < 0 {
        // wedge wider than a half-plane: left of a OR right of b
        if psca > 0 || pscb < 0 {
            return 1;
        }
        if psca == 0 {
            return on_ray_tiebreak(origin, a, test, 1);
        } else if pscb == 0 {
            return on_ray_tiebreak(origin, b, test, 1);
        }
    } else {
        return match psca.cmp(&0) {
            Ordering::Greater => 1,
            Ordering::Less => -1,
            Ordering::Equal => 0,
        };
    }
    -1
}

// `test` is collinear with the bounding ray through `along`; it counts as on
// the ray only when it points the same way, compared by x/y component signs.
fn on_ray_tiebreak(
    origin: &ExactVector,
    along: &ExactVector,
    test: &ExactVector,
    mismatch: i32,
) -> i32 {
    let t = along - origin;
    let t2 = test - origin;
    if sign(&t.x) != sign(&t2.x) || sign(&t.y) != sign(&t2.y) {
        mismatch
    } else {
        0
    }
}

/// Is `test` inside or on the border of triangle `(p, c, n)`?
///
/// Three orientation tests with the inverted convention: the point is
/// outside exactly when one of them reports `+1`.
pub fn point_in_or_on_triangle(
    p: &ExactVector,
    c: &ExactVector,
    n: &ExactVector,
    test: &ExactVector,
    normal: &ExactVector,
) -> bool {
    let res0 = orientation(p, test, c, normal);
    let res1 = orientation(c, test, n, normal);
    let res2 = orientation(n, test, p, normal);
    res0 != 1 && res1 != 1 && res2 != 1
}

/// Squared doubled area of triangle `(p1, p2, p3)`: zero iff `p3` is exactly
/// collinear with the line `p1 - p2`, otherwise a monotone proxy for the
/// perpendicular distance of `p3` from that line.
pub fn point_line_distance(p1: &ExactVector, p2: &ExactVector, p3: &ExactVector) -> Rational {
    (p2 - p1).cross(&(p3 - p1)).length_squared()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: i64, y: i64, z: i64) -> ExactVector {
        ExactVector::from_ints(x, y, z)
    }

    const UP: fn() -> ExactVector = || ExactVector::from_ints(0, 0, 1);

    #[test]
    fn orientation_ccw_turn_is_positive() {
        // convex corner of a CCW triangle in the z = 0 plane
        let up = UP();
        assert_eq!(orientation(&v(0, 0, 0), &v(1, 0, 0), &v(1, 1, 0), &up), 1);
        assert_eq!(orientation(&v(1, 1, 0), &v(1, 0, 0), &v(0, 0, 0), &up), -1);
    }

    #[test]
    fn orientation_collinear_is_zero() {
        let up = UP();
        assert_eq!(orientation(&v(0, 0, 0), &v(1, 1, 0), &v(2, 2, 0), &up), 0);
        assert_eq!(orientation(&v(2, 2, 0), &v(1, 1, 0), &v(0, 0, 0), &up), 0);
    }

    #[test]
    fn orientation_is_antisymmetric() {
        let up = UP();
        let cases = [
            (v(0, 0, 0), v(2, 1, 0), v(1, 3, 0)),
            (v(-1, -1, 0), v(4, 0, 0), v(2, -5, 0)),
        ];
        for (a, b, c) in cases {
            let fwd = orientation(&a, &b, &c, &up);
            let rev = orientation(&c, &b, &a, &up);
            assert_eq!(fwd, -rev);
            assert_ne!(fwd, 0);
        }
    }

    #[test]
    fn between_inside_narrow_wedge() {
        let up = UP();
        let origin = v(0, 0, 0);
        // wedge from +x to +y, swept CCW
        assert_eq!(is_between(&origin, &v(2, 0, 0), &v(0, 2, 0), &v(1, 1, 0), &up), 1);
        assert_eq!(
            is_between(&origin, &v(2, 0, 0), &v(0, 2, 0), &v(-1, -1, 0), &up),
            -1
        );
    }

    #[test]
    fn between_inside_wide_wedge() {
        let up = UP();
        let origin = v(0, 0, 0);
        // wedge from +y to +x sweeps CCW through -x and -y
        assert_eq!(
            is_between(&origin, &v(0, 2, 0), &v(2, 0, 0), &v(-1, -1, 0), &up),
            1
        );
        assert_eq!(is_between(&origin, &v(0, 2, 0), &v(2, 0, 0), &v(1, 1, 0), &up), -1);
    }

    #[test]
    fn between_on_bounding_ray() {
        let up = UP();
        let origin = v(0, 0, 0);
        // on the first bounding ray, same direction
        assert_eq!(is_between(&origin, &v(2, 0, 0), &v(0, 2, 0), &v(5, 0, 0), &up), 0);
        // collinear with the first bounding ray but pointing away
        assert_eq!(
            is_between(&origin, &v(2, 0, 0), &v(0, 2, 0), &v(-5, 0, 0), &up),
            -1
        );
    }

    #[test]
    fn triangle_containment() {
        let up = UP();
        let (a, b, c) = (v(0, 0, 0), v(4, 0, 0), v(0, 4, 0));
        assert!(point_in_or_on_triangle(&a, &b, &c, &v(1, 1, 0), &up));
        // on an edge and on a corner both count as inside
        assert!(point_in_or_on_triangle(&a, &b, &c, &v(2, 0, 0), &up));
        assert!(point_in_or_on_triangle(&a, &b, &c, &v(0, 4, 0), &up));
        assert!(!point_in_or_on_triangle(&a, &b, &c, &v(3, 3, 0), &up));
    }

    #[test]
    fn point_line_distance_zero_iff_collinear() {
        let d = point_line_distance(&v(0, 0, 0), &v(3, 3, 0), &v(7, 7, 0));
        assert_eq!(d, Rational::from(0));
        let d = point_line_distance(&v(0, 0, 0), &v(3, 0, 0), &v(1, 2, 0));
        assert_eq!(d, Rational::from(36)); // |(3,0,0) x (1,2,0)|^2
    }
}
