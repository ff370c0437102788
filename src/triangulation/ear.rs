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

use log::trace;

use crate::kernel::{orientation, point_in_or_on_triangle};
use crate::ring::{EdgeId, RingId};

use super::{EarClipping, TriangulateError};

impl EarClipping {
    /// Clips valid ears off the working ring until at most two vertices
    /// remain, emitting one triangle per clip.
    pub(super) fn clip_ears(&mut self) -> Result<(), TriangulateError> {
        let mut reflex = self.non_convex_edges(self.outer);
        // compare against the edge count, not the distinct-vertex count; a
        // merged ring carries seam duplicates
        if reflex.len() == self.rings.edge_ids(self.outer).len() {
            return Err(TriangulateError::AllReflex);
        }

        while self.rings.vertex_count(self.outer) > 2 {
            let mut clipped = false;
            for cur in self.rings.edge_ids(self.outer) {
                if !self.is_convex(cur) {
                    continue;
                }
                let prev = self.rings.prev(cur);
                let next = self.rings.next(cur);
                if self.ear_blocked(prev, cur, next, &reflex) {
                    continue;
                }

                self.result.push(self.rings.point(prev).clone());
                self.result.push(self.rings.point(cur).clone());
                self.result.push(self.rings.point(next).clone());
                trace!(
                    "clipped ear at {:?}",
                    self.rings.point(cur).to_f64_array()
                );
                if !self.rings.remove(cur) {
                    return Err(TriangulateError::Internal(
                        "incident edge missing during ear removal",
                    ));
                }

                // the clip can turn a reflex neighbor convex
                if self.is_convex(prev) {
                    if let Some(i) = reflex.iter().position(|&r| r == prev) {
                        reflex.remove(i);
                    }
                }
                if self.is_convex(next) {
                    if let Some(i) = reflex.iter().position(|&r| r == next) {
                        reflex.remove(i);
                    }
                }
                clipped = true;
                break;
            }

            if self.points_on_line(self.outer) {
                // a leftover exactly collinear chain carries no area
                break;
            }
            if !clipped {
                return Err(TriangulateError::NoProgress);
            }
        }
        Ok(())
    }

    /// An ear is blocked when any reflex vertex other than its own three
    /// corners lies inside or on the candidate triangle. Corner exclusion is
    /// by vertex identity, not by coordinates.
    fn ear_blocked(&self, prev: EdgeId, cur: EdgeId, next: EdgeId, reflex: &[EdgeId]) -> bool {
        let r = &self.rings;
        let (pv, cv, nv) = (r.origin(prev), r.origin(cur), r.origin(next));
        for &candidate in reflex {
            let rv = r.origin(candidate);
            if rv == pv || rv == cv || rv == nv {
                continue;
            }
            if point_in_or_on_triangle(
                r.point(prev),
                r.point(cur),
                r.point(next),
                r.vertex_point(rv),
                &self.normal,
            ) {
                return true;
            }
        }
        false
    }

    fn points_on_line(&self, ring: RingId) -> bool {
        let r = &self.rings;
        r.circulate(ring).all(|e| {
            orientation(
                r.point(r.prev(e)),
                r.point(e),
                r.point(r.next(e)),
                &self.normal,
            ) == 0
        })
    }
}
