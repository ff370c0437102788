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

//! Ear-clipping triangulation of a simple polygon with optional holes.
//!
//! Implementation of Triangulation by Ear Clipping by David Eberly,
//! generalized to multiply-holed polygons through visibility bridging.
//! Every geometric decision goes through the exact predicates in
//! [`crate::kernel`]; there is no tolerance anywhere.

mod ear;
mod holes;

use log::debug;
use thiserror::Error;

use crate::geometry::plane::newell_normal;
use crate::geometry::vector::ExactVector;
use crate::kernel::orientation;
use crate::ring::{EdgeId, RingId, RingSet};

/// Terminal failure of one triangulation call. No partial result survives
/// any of these.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TriangulateError {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// Every vertex classified reflex before clipping started, which means
    /// the winding contradicts the normal.
    #[error("every vertex is reflex; the polygon winding is inconsistent with the normal")]
    AllReflex,

    /// A full scan found no clippable ear and the leftover vertices are not
    /// collinear. Typical for self-intersecting input.
    #[error("no clippable ear left; the input is self-intersecting or malformed")]
    NoProgress,

    #[error("hole merge failed: {0}")]
    HoleMerge(&'static str),

    /// An internal consistency check failed. This is a defect in the
    /// library, not a property of the input.
    #[error("internal invariant violated: {0}")]
    Internal(&'static str),
}

/// One triangulation run. Build it with [`EarClipping::new`], consume it
/// with [`EarClipping::triangulate`]; nothing is shared across runs.
pub struct EarClipping {
    rings: RingSet,
    outer: RingId,
    holes: Vec<RingId>,
    normal: ExactVector,
    result: Vec<ExactVector>,
}

impl EarClipping {
    /// Validates the input and builds the rings.
    ///
    /// The outer boundary needs at least three points; holes are separate
    /// point lists wound opposite to the outer ring, each with at least
    /// three points. When `normal` is omitted it is computed with Newell's
    /// method; a zero result is only rejected once
    /// [`triangulate`](Self::triangulate) runs.
    pub fn new(
        outer: &[ExactVector],
        holes: &[Vec<ExactVector>],
        normal: Option<ExactVector>,
    ) -> Result<Self, TriangulateError> {
        if outer.len() < 3 {
            return Err(TriangulateError::InvalidInput(
                "the outer boundary needs at least 3 points",
            ));
        }
        if holes.iter().any(|h| h.len() < 3) {
            return Err(TriangulateError::InvalidInput(
                "every hole needs at least 3 points",
            ));
        }
        let normal = normal.unwrap_or_else(|| newell_normal(outer));

        let mut rings = RingSet::new();
        let outer = rings.add_ring(outer);
        let holes = holes.iter().map(|h| rings.add_ring(h)).collect();
        Ok(Self {
            rings,
            outer,
            holes,
            normal,
            result: Vec::new(),
        })
    }

    /// Merges every hole into the outer ring, then clips ears until the
    /// ring degenerates.
    ///
    /// Returns the triangles as a flat list, three consecutive vertices per
    /// triangle, each triangle wound like the source ring.
    pub fn triangulate(mut self) -> Result<Vec<ExactVector>, TriangulateError> {
        if self.normal.is_zero() {
            return Err(TriangulateError::InvalidInput(
                "the polygon normal is the zero vector",
            ));
        }
        if !self.holes.is_empty() {
            self.merge_holes()?;
        }
        self.clip_ears()?;
        debug!("emitted {} triangles", self.result.len() / 3);
        Ok(self.result)
    }

    /// `+1` orientation of the corner at `e` means convex under the ring's
    /// winding convention.
    pub(crate) fn is_convex(&self, e: EdgeId) -> bool {
        let r = &self.rings;
        orientation(
            r.point(r.prev(e)),
            r.point(e),
            r.point(r.next(e)),
            &self.normal,
        ) == 1
    }

    /// Edges whose corner is reflex or exactly straight.
    pub(crate) fn non_convex_edges(&self, ring: RingId) -> Vec<EdgeId> {
        self.rings
            .circulate(ring)
            .filter(|&e| !self.is_convex(e))
            .collect()
    }
}

/// One-shot convenience wrapper around [`EarClipping`].
pub fn triangulate(
    outer: &[ExactVector],
    holes: &[Vec<ExactVector>],
    normal: Option<ExactVector>,
) -> Result<Vec<ExactVector>, TriangulateError> {
    EarClipping::new(outer, holes, normal)?.triangulate()
}
