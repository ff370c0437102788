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

use std::collections::HashMap;

use rug::Rational;

use crate::geometry::vector::ExactVector;

/// Polygon normal by Newell's method: the signed sum over consecutive edge
/// pairs. Exact, and defined even when the vertex sequence is not exactly
/// planar. Returns the zero vector for degenerate sequences.
pub fn newell_normal(points: &[ExactVector]) -> ExactVector {
    let mut normal = ExactVector::zero();
    for i in 0..points.len() {
        let j = (i + 1) % points.len();
        let (p, q) = (&points[i], &points[j]);
        let mut t = Rational::from(&p.y - &q.y);
        t *= Rational::from(&p.z + &q.z);
        normal.x += t;
        let mut t = Rational::from(&p.z - &q.z);
        t *= Rational::from(&p.x + &q.x);
        normal.y += t;
        let mut t = Rational::from(&p.x - &q.x);
        t *= Rational::from(&p.y + &q.y);
        normal.z += t;
    }
    normal
}

/// Projects a nearly coplanar point set exactly onto its Newell best-fit
/// plane and maps triangulated vertices back to the original points.
///
/// The triangulation core assumes exactly coplanar input; measured or
/// accumulated geometry rarely is. Fit the projection on the outer
/// boundary, run [`apply`](Self::apply) over the boundary and every hole,
/// triangulate the projected lists, then [`invert`](Self::invert) each
/// emitted vertex. The core never calls this itself.
#[derive(Clone, Debug)]
pub struct PlanarProjection {
    normal: ExactVector,
    origin: ExactVector,
    normal_len_sq: Rational,
    back: HashMap<ExactVector, ExactVector>,
}

impl PlanarProjection {
    /// Fits the plane through the centroid of `points` with their Newell
    /// normal. `None` for fewer than three points or a zero normal.
    pub fn fit(points: &[ExactVector]) -> Option<Self> {
        if points.len() < 3 {
            return None;
        }
        let normal = newell_normal(points);
        if normal.is_zero() {
            return None;
        }

        let mut origin = ExactVector::zero();
        for p in points {
            origin = &origin + p;
        }
        let count = Rational::from(points.len() as u64);
        origin = ExactVector::new(
            Rational::from(&origin.x / &count),
            Rational::from(&origin.y / &count),
            Rational::from(&origin.z / &count),
        );

        let normal_len_sq = normal.length_squared();
        Some(Self {
            normal,
            origin,
            normal_len_sq,
            back: HashMap::new(),
        })
    }

    pub fn normal(&self) -> &ExactVector {
        &self.normal
    }

    /// Exact foot of `p` on the plane, dropped along the normal.
    pub fn project(&self, p: &ExactVector) -> ExactVector {
        let offset = self.normal.dot(&(p - &self.origin)) / self.normal_len_sq.clone();
        p - &self.normal.scaled(&offset)
    }

    /// Projects every point onto the plane, remembering the original behind
    /// each image. The first original wins when two inputs project onto the
    /// same foot.
    pub fn apply(&mut self, points: &[ExactVector]) -> Vec<ExactVector> {
        points
            .iter()
            .map(|p| {
                let q = self.project(p);
                self.back.entry(q.clone()).or_insert_with(|| p.clone());
                q
            })
            .collect()
    }

    /// Original input point behind a projected vertex; identity for points
    /// this projection never produced.
    pub fn invert(&self, p: &ExactVector) -> ExactVector {
        self.back.get(p).cloned().unwrap_or_else(|| p.clone())
    }
}
