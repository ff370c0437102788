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

use earclip::ExactVector;
use earclip::ring::{RingId, RingSet};

fn v(x: i64, y: i64, z: i64) -> ExactVector {
    ExactVector::from_ints(x, y, z)
}

fn assert_mutual_links(rs: &RingSet, ring: RingId) {
    for e in rs.circulate(ring) {
        assert_eq!(rs.prev(rs.next(e)), e);
        assert_eq!(rs.next(rs.prev(e)), e);
        assert_eq!(rs.ring_of(e), ring);
    }
}

#[test]
fn build_wires_a_closed_ring() {
    let mut rs = RingSet::new();
    let ring = rs.add_ring(&[v(0, 0, 0), v(4, 0, 0), v(4, 4, 0), v(0, 4, 0), v(2, 6, 0)]);
    assert_eq!(rs.vertex_count(ring), 5);
    assert_eq!(rs.edge_ids(ring).len(), 5);
    assert_mutual_links(&rs, ring);
}

#[test]
fn build_dedups_coincident_points() {
    let mut rs = RingSet::new();
    let ring = rs.add_ring(&[v(0, 0, 0), v(1, 0, 0), v(1, 0, 0), v(0, 1, 0)]);
    // four edges but only three distinct vertices
    let ids = rs.edge_ids(ring);
    assert_eq!(ids.len(), 4);
    assert_eq!(rs.vertex_count(ring), 3);
    assert_eq!(rs.origin(ids[1]), rs.origin(ids[2]));
    assert_eq!(rs.incident_edges(rs.origin(ids[1])).len(), 2);
}

#[test]
fn remove_unlinks_and_relocates_start() {
    let mut rs = RingSet::new();
    let ring = rs.add_ring(&[v(0, 0, 0), v(4, 0, 0), v(4, 4, 0), v(0, 4, 0)]);
    let start = rs.start(ring);
    let prev_of_start = rs.prev(start);

    assert!(rs.remove(start));
    assert_eq!(rs.vertex_count(ring), 3);
    assert_eq!(rs.start(ring), prev_of_start);
    assert_eq!(rs.edge_ids(ring).len(), 3);
    assert_mutual_links(&rs, ring);
}

#[test]
fn remove_keeps_vertex_alive_while_an_incident_edge_remains() {
    let mut rs = RingSet::new();
    // the origin appears twice, like a bridge seam does
    let ring = rs.add_ring(&[v(0, 0, 0), v(2, 0, 0), v(0, 0, 0), v(0, 2, 0)]);
    assert_eq!(rs.vertex_count(ring), 3);

    let ids = rs.edge_ids(ring);
    let shared = rs.origin(ids[0]);
    assert_eq!(shared, rs.origin(ids[2]));

    assert!(rs.remove(ids[0]));
    // the coordinate still has a live edge, so the count holds
    assert_eq!(rs.vertex_count(ring), 3);
    assert_eq!(rs.incident_edges(shared).len(), 1);

    assert!(rs.remove(ids[2]));
    assert_eq!(rs.vertex_count(ring), 2);
    assert!(rs.incident_edges(shared).is_empty());
}

#[test]
fn remove_rejects_a_stale_edge() {
    let mut rs = RingSet::new();
    let ring = rs.add_ring(&[v(0, 0, 0), v(4, 0, 0), v(4, 4, 0), v(0, 4, 0)]);
    let e = rs.next(rs.start(ring));

    assert!(rs.remove(e));
    // a second removal finds no incident entry and leaves counts untouched
    assert!(!rs.remove(e));
    assert_eq!(rs.vertex_count(ring), 3);
    assert_eq!(rs.edge_ids(ring).len(), 3);
}

#[test]
fn splice_folds_a_hole_into_its_host() {
    let mut rs = RingSet::new();
    let outer = rs.add_ring(&[v(0, 0, 0), v(8, 0, 0), v(8, 8, 0), v(0, 8, 0)]);
    let hole = rs.add_ring(&[v(3, 3, 0), v(3, 5, 0), v(5, 5, 0), v(5, 3, 0)]);

    let insertion = rs.start(outer); // bridge lands before (0,0,0)
    let m = rs.start(hole);
    let insertion_origin = rs.origin(insertion);
    let m_origin = rs.origin(m);

    rs.splice(insertion, m);
    assert_eq!(rs.vertex_count(outer), 8);

    // 4 + 4 edges plus the two bridge edges
    let ids = rs.edge_ids(outer);
    assert_eq!(ids.len(), 10);
    assert_mutual_links(&rs, outer);

    // both seam vertices appear twice in the merged ring
    let occurrences =
        |vid: usize| ids.iter().filter(|&&e| rs.origin(e) == vid).count();
    assert_eq!(occurrences(insertion_origin), 2);
    assert_eq!(occurrences(m_origin), 2);
    assert_eq!(rs.incident_edges(insertion_origin).len(), 2);
    assert_eq!(rs.incident_edges(m_origin).len(), 2);
}

#[test]
fn find_vertex_scans_one_ring_only() {
    let mut rs = RingSet::new();
    let a = rs.add_ring(&[v(0, 0, 0), v(1, 0, 0), v(0, 1, 0)]);
    let b = rs.add_ring(&[v(9, 9, 0), v(10, 9, 0), v(9, 10, 0)]);

    assert!(rs.find_vertex(a, &v(1, 0, 0)).is_some());
    assert!(rs.find_vertex(a, &v(9, 9, 0)).is_none());
    assert!(rs.find_vertex(b, &v(9, 9, 0)).is_some());
}

#[test]
fn circulator_starts_and_ends_at_start() {
    let mut rs = RingSet::new();
    let ring = rs.add_ring(&[v(0, 0, 0), v(1, 0, 0), v(1, 1, 0)]);
    let ids = rs.edge_ids(ring);
    assert_eq!(ids[0], rs.start(ring));
    assert_eq!(rs.next(*ids.last().unwrap()), rs.start(ring));
}
