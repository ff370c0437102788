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

//! Exact-arithmetic ear-clipping triangulation of simple planar polygons,
//! with optional nested holes, embedded in 3-D space.
//!
//! Every predicate runs on GMP-backed rationals, so convexity, containment
//! and visibility decisions are never corrupted by floating-point error.
//! Holes are folded into the outer boundary through visibility bridges
//! before the merged ring is consumed by the classical ear-clipping loop.
//!
//! ```
//! use earclip::{ExactVector, triangulate};
//!
//! let square = vec![
//!     ExactVector::from_ints(0, 0, 0),
//!     ExactVector::from_ints(1, 0, 0),
//!     ExactVector::from_ints(1, 1, 0),
//!     ExactVector::from_ints(0, 1, 0),
//! ];
//! let triangles = triangulate(&square, &[], None).unwrap();
//! assert_eq!(triangles.len(), 6); // two triangles, three vertices each
//! ```

pub mod geometry;
pub mod kernel;
pub mod ring;
pub mod triangulation;

pub use geometry::plane::{PlanarProjection, newell_normal};
pub use geometry::vector::ExactVector;
pub use triangulation::{EarClipping, TriangulateError, triangulate};
