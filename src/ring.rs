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

//! Circular doubly-linked polygon rings backed by index arenas.
//!
//! One [`RingSet`] holds every ring of a triangulation run (the outer
//! boundary plus the holes). Edges and vertices live in flat `Vec` arenas
//! and refer to each other by `usize` index, which keeps the cyclic
//! `next`/`prev` structure free of ownership knots. Removed edges stay in
//! the arena as unlinked records; nothing outlives the run.

use std::collections::HashMap;

use smallvec::SmallVec;

use crate::geometry::vector::ExactVector;

pub type VertexId = usize;
pub type EdgeId = usize;
pub type RingId = usize;

const NONE: usize = usize::MAX;

/// One distinct coordinate inside a ring, with the edges that originate at
/// it. Duplicate input points are coalesced into one of these at build
/// time; the incident list emptying is what signals full removal of the
/// vertex from its ring.
#[derive(Clone, Debug)]
pub struct Vertex {
    pub point: ExactVector,
    pub incident: SmallVec<[EdgeId; 4]>,
}

/// Directed ring edge; `next` and `prev` are mutual inverses at all times.
#[derive(Clone, Copy, Debug)]
pub struct ConnectionEdge {
    pub origin: VertexId,
    pub next: EdgeId,
    pub prev: EdgeId,
    pub ring: RingId,
}

#[derive(Clone, Copy, Debug)]
pub struct Ring {
    pub start: EdgeId,
    pub vertex_count: usize,
}

#[derive(Clone, Debug, Default)]
pub struct RingSet {
    vertices: Vec<Vertex>,
    edges: Vec<ConnectionEdge>,
    rings: Vec<Ring>,
}

impl RingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ring from `points` in order, coalescing coincident points
    /// into a shared vertex record. Returns the ring's id; its vertex count
    /// is the number of distinct coordinates.
    pub fn add_ring(&mut self, points: &[ExactVector]) -> RingId {
        debug_assert!(!points.is_empty());
        let ring_id = self.rings.len();
        let mut seen: HashMap<ExactVector, VertexId> = HashMap::new();
        let mut vertex_count = 0;
        let mut first = NONE;
        let mut prev = NONE;
        for p in points {
            let vid = match seen.get(p) {
                Some(&v) => v,
                None => {
                    let v = self.vertices.len();
                    self.vertices.push(Vertex {
                        point: p.clone(),
                        incident: SmallVec::new(),
                    });
                    seen.insert(p.clone(), v);
                    vertex_count += 1;
                    v
                }
            };
            let e = self.new_edge(vid, ring_id);
            if first == NONE {
                first = e;
            }
            if prev != NONE {
                self.edges[prev].next = e;
            }
            self.edges[e].prev = prev;
            prev = e;
        }
        self.edges[first].prev = prev;
        self.edges[prev].next = first;
        self.rings.push(Ring {
            start: first,
            vertex_count,
        });
        ring_id
    }

    fn new_edge(&mut self, origin: VertexId, ring: RingId) -> EdgeId {
        let e = self.edges.len();
        self.edges.push(ConnectionEdge {
            origin,
            next: NONE,
            prev: NONE,
            ring,
        });
        self.vertices[origin].incident.push(e);
        e
    }

    #[inline]
    pub fn next(&self, e: EdgeId) -> EdgeId {
        self.edges[e].next
    }

    #[inline]
    pub fn prev(&self, e: EdgeId) -> EdgeId {
        self.edges[e].prev
    }

    #[inline]
    pub fn origin(&self, e: EdgeId) -> VertexId {
        self.edges[e].origin
    }

    #[inline]
    pub fn ring_of(&self, e: EdgeId) -> RingId {
        self.edges[e].ring
    }

    /// Position of the edge's origin vertex.
    #[inline]
    pub fn point(&self, e: EdgeId) -> &ExactVector {
        &self.vertices[self.edges[e].origin].point
    }

    #[inline]
    pub fn vertex_point(&self, v: VertexId) -> &ExactVector {
        &self.vertices[v].point
    }

    #[inline]
    pub fn incident_edges(&self, v: VertexId) -> &[EdgeId] {
        &self.vertices[v].incident
    }

    #[inline]
    pub fn start(&self, ring: RingId) -> EdgeId {
        self.rings[ring].start
    }

    #[inline]
    pub fn vertex_count(&self, ring: RingId) -> usize {
        self.rings[ring].vertex_count
    }

    /// Walks the ring from its start edge back to the start edge.
    pub fn circulate(&self, ring: RingId) -> Circulator<'_> {
        let start = self.rings[ring].start;
        Circulator {
            set: self,
            start,
            cur: Some(start),
        }
    }

    /// Snapshot of the ring's edge ids, for loops that mutate while
    /// scanning.
    pub fn edge_ids(&self, ring: RingId) -> Vec<EdgeId> {
        self.circulate(ring).collect()
    }

    /// First vertex of `ring` whose coordinates equal `p`.
    pub fn find_vertex(&self, ring: RingId, p: &ExactVector) -> Option<VertexId> {
        self.circulate(ring)
            .map(|e| self.edges[e].origin)
            .find(|&v| self.vertices[v].point == *p)
    }

    /// Unlinks `e` from its ring and drops it from its origin's incident
    /// list. The ring's vertex count decreases only when that list empties;
    /// the ring start is relocated if it pointed at `e`. Returns `false`
    /// when the incident list holds no matching entry, which means `e` was
    /// already removed or the structure is inconsistent.
    pub fn remove(&mut self, e: EdgeId) -> bool {
        let ConnectionEdge {
            origin,
            next,
            prev,
            ring,
        } = self.edges[e];
        self.edges[prev].next = next;
        self.edges[next].prev = prev;

        // directed-edge identity: match by target coordinates, since every
        // entry of the list already shares the origin
        let removed_target = self.edges[next].origin;
        let idx = self.vertices[origin].incident.iter().position(|&c| {
            let c_target = self.edges[self.edges[c].next].origin;
            c_target == removed_target
                || self.vertices[c_target].point == self.vertices[removed_target].point
        });
        let Some(idx) = idx else {
            return false;
        };
        self.vertices[origin].incident.remove(idx);
        if self.vertices[origin].incident.is_empty() {
            self.rings[ring].vertex_count -= 1;
        }
        if self.rings[ring].start == e {
            self.rings[ring].start = prev;
        }
        true
    }

    /// Splices the ring of `m` into the ring of `insertion`, immediately
    /// before `insertion`.
    ///
    /// Two fresh bridge edges are created, one duplicating `insertion`'s
    /// origin in front of `m` and one duplicating `m`'s origin behind the
    /// hole, so both seam vertices appear twice in the merged ring. Every
    /// spliced edge is reassigned to the host ring and the host's vertex
    /// count grows by the hole's.
    pub fn splice(&mut self, insertion: EdgeId, m: EdgeId) {
        let host = self.edges[insertion].ring;
        let hole = self.edges[m].ring;
        debug_assert_ne!(host, hole);
        self.rings[host].vertex_count += self.rings[hole].vertex_count;

        let forward = self.new_edge(self.edges[insertion].origin, host);
        let ins_prev = self.edges[insertion].prev;
        let m_origin = self.edges[m].origin;
        self.edges[forward].prev = ins_prev;
        self.edges[ins_prev].next = forward;
        self.edges[forward].next = m;
        self.edges[m].prev = forward;

        // the hole's forward chain still loops back to m; claim every edge
        // for the host and find the hole's last edge
        let mut cur = m;
        let last = loop {
            self.edges[cur].ring = host;
            let nxt = self.edges[cur].next;
            if nxt == m {
                break cur;
            }
            cur = nxt;
        };

        let back = self.new_edge(m_origin, host);
        self.edges[last].next = back;
        self.edges[back].prev = last;
        self.edges[back].next = insertion;
        self.edges[insertion].prev = back;
    }
}

pub struct Circulator<'a> {
    set: &'a RingSet,
    start: EdgeId,
    cur: Option<EdgeId>,
}

impl Iterator for Circulator<'_> {
    type Item = EdgeId;

    fn next(&mut self) -> Option<EdgeId> {
        let cur = self.cur?;
        let nxt = self.set.edges[cur].next;
        self.cur = if nxt == self.start { None } else { Some(nxt) };
        Some(cur)
    }
}
