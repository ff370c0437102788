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

//! Visibility bridging: folds every hole ring into the outer boundary.
//!
//! For each hole an extreme vertex M is chosen, a ray is cast from M away
//! from the hole, and the nearest visible point P on another ring is
//! resolved. A pair of zero-area bridge edges then splices the hole into
//! P's ring. Merged holes become ordinary boundary obstacles for the holes
//! still pending.

use std::cmp::Ordering;

use log::debug;
use rug::Rational;

use crate::geometry::vector::ExactVector;
use crate::kernel::{
    is_between, orientation, point_in_or_on_triangle, point_line_distance,
    ray_segment_intersection,
};
use crate::ring::{EdgeId, RingId};

use super::{EarClipping, TriangulateError};

/// Best-so-far ray hit while scanning the open rings.
struct Candidate {
    distance_squared: Rational,
    point: ExactVector,
    edge: EdgeId,
    /// Index into the scan's polygon list, not a ring id.
    ring_index: usize,
}

impl EarClipping {
    pub(super) fn merge_holes(&mut self) -> Result<(), TriangulateError> {
        while !self.holes.is_empty() {
            // obstacles: the outer ring plus every hole still pending; the
            // hole under test is polygons[1]
            let polygons: Vec<RingId> = std::iter::once(self.outer)
                .chain(self.holes.iter().copied())
                .collect();
            let (m, p) = self.find_visible_pair(&polygons, 1)?;
            if self.rings.point(m) == self.rings.point(p) {
                return Err(TriangulateError::HoleMerge(
                    "bridge endpoints coincide; the hole touches its target ring",
                ));
            }
            debug!(
                "bridging hole at M={:?} into boundary at P={:?}",
                self.rings.point(m).to_f64_array(),
                self.rings.point(p).to_f64_array()
            );
            self.rings.splice(p, m);
            self.holes.remove(0);
        }
        Ok(())
    }

    /// Resolves the bridge pair (M, P) for `polygons[hole_index]`.
    fn find_visible_pair(
        &self,
        polygons: &[RingId],
        hole_index: usize,
    ) -> Result<(EdgeId, EdgeId), TriangulateError> {
        let hole = polygons[hole_index];
        let m = self.find_extreme_vertex(hole);

        let start = self.rings.start(hole);
        let v0 = self.rings.point(start);
        let v1 = self.rings.point(self.rings.next(start));
        let direction = (v1 - v0).cross(&self.normal);

        let candidate = self
            .find_nearest_hit(m, polygons, hole_index, &direction)
            .ok_or(TriangulateError::HoleMerge(
                "the cast ray hits no edge of any open ring",
            ))?;

        let target_ring = polygons[candidate.ring_index];
        if let Some(vid) = self.rings.find_vertex(target_ring, &candidate.point) {
            // the hit lands exactly on a vertex: exactly one incident edge
            // must open its wedge toward M
            for &e in self.rings.incident_edges(vid) {
                let o = self.rings.point(e);
                let a = self.rings.point(self.rings.next(e));
                let b = self.rings.point(self.rings.prev(e));
                if is_between(o, a, b, self.rings.point(m), &self.normal) == 1 {
                    return Ok((m, e));
                }
            }
            Err(TriangulateError::HoleMerge(
                "no edge at the hit vertex opens toward the hole",
            ))
        } else {
            Ok((m, self.find_visible_point(&candidate, target_ring, m, &direction)))
        }
    }

    /// Hole vertex farthest from the hole's first edge, restricted to the
    /// side where the orientation against that edge is negative. Falls back
    /// to the hole's start vertex.
    fn find_extreme_vertex(&self, hole: RingId) -> EdgeId {
        let start = self.rings.start(hole);
        let v0 = self.rings.point(start).clone();
        let v1 = self.rings.point(self.rings.next(start)).clone();
        let mut maximum = Rational::new();
        let mut max_edge = None;
        for e in self.rings.circulate(hole) {
            if orientation(&v0, &v1, self.rings.point(e), &self.normal) < 0 {
                let r = point_line_distance(&v0, &v1, self.rings.point(e));
                if r > maximum {
                    maximum = r;
                    max_edge = Some(e);
                }
            }
        }
        max_edge.unwrap_or(start)
    }

    /// Nearest ray/segment hit over every open ring except the hole itself.
    fn find_nearest_hit(
        &self,
        m: EdgeId,
        polygons: &[RingId],
        hole_index: usize,
        direction: &ExactVector,
    ) -> Option<Candidate> {
        let m_point = self.rings.point(m);
        let mut best: Option<Candidate> = None;
        for (idx, &ring) in polygons.iter().enumerate() {
            if idx == hole_index {
                continue; // don't test the hole against itself
            }
            for e in self.rings.circulate(ring) {
                let a = self.rings.point(e);
                let b = self.rings.point(self.rings.next(e));
                let Some(hit) = ray_segment_intersection(m_point, direction, a, b, direction)
                else {
                    continue;
                };
                let replace = match &best {
                    None => true,
                    // an M/I edge ties exactly with its twin; keep the edge
                    // that has M on its left side
                    Some(c) if hit.distance_squared == c.distance_squared => {
                        orientation(a, b, m_point, &self.normal) == 1
                    }
                    Some(c) => hit.distance_squared < c.distance_squared,
                };
                if replace {
                    best = Some(Candidate {
                        distance_squared: hit.distance_squared,
                        point: hit.point,
                        edge: e,
                        ring_index: idx,
                    });
                }
            }
        }
        best
    }

    /// The hit lies strictly inside an edge: derive the bridge vertex P
    /// from that edge, then correct it if any reflex vertex of the target
    /// ring intrudes into triangle (M, I, P).
    fn find_visible_point(
        &self,
        candidate: &Candidate,
        target_ring: RingId,
        m: EdgeId,
        direction: &ExactVector,
    ) -> EdgeId {
        let e = candidate.edge;
        let e_next = self.rings.next(e);
        // default to the endpoint with the greater x coordinate
        let p = if self.rings.point(e).x > self.rings.point(e_next).x {
            e
        } else {
            e_next
        };

        let mut reflex = self.non_convex_edges(target_ring);
        if let Some(i) = reflex.iter().position(|&r| self.directed_edge_eq(r, p)) {
            reflex.remove(i);
        }

        let m_pt = self.rings.point(m).clone();
        let mut i_pt = candidate.point.clone();
        let mut p_pt = self.rings.point(p).clone();
        // normalize the winding so the containment scan sees a CCW triangle
        if orientation(&m_pt, &i_pt, &p_pt, &self.normal) == -1 {
            std::mem::swap(&mut i_pt, &mut p_pt);
        }

        let intruders: Vec<EdgeId> = reflex
            .into_iter()
            .filter(|&r| {
                point_in_or_on_triangle(&m_pt, &i_pt, &p_pt, self.rings.point(r), &self.normal)
            })
            .collect();
        if intruders.is_empty() {
            return p;
        }
        self.closest_to_direction(&intruders, &m_pt, direction)
    }

    /// Candidate R maximizing `(d·(R−M))² / |R−M|²`, i.e. whose direction
    /// from M is angularly closest to the cast direction.
    fn closest_to_direction(
        &self,
        candidates: &[EdgeId],
        m: &ExactVector,
        direction: &ExactVector,
    ) -> EdgeId {
        let mut best = candidates[0];
        let mut best_ratio: Option<Rational> = None;
        for &r in candidates {
            let b = self.rings.point(r) - m;
            let denom = b.length_squared();
            if denom.cmp0() == Ordering::Equal {
                continue; // a candidate on top of M has no direction
            }
            let d = direction.dot(&b);
            let ratio = Rational::from(&d * &d) / denom;
            if best_ratio.as_ref().is_none_or(|cur| ratio > *cur) {
                best_ratio = Some(ratio);
                best = r;
            }
        }
        best
    }

    /// Directed-edge identity: same record, or equal origin and target
    /// coordinates.
    fn directed_edge_eq(&self, a: EdgeId, b: EdgeId) -> bool {
        a == b
            || (self.rings.point(a) == self.rings.point(b)
                && self.rings.point(self.rings.next(a)) == self.rings.point(self.rings.next(b)))
    }
}
