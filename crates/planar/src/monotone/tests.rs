use super::*;
use crate::error::{ErrorKind, GeomError};
use crate::geom2::{orient, GeomCfg, Polygon};
use nalgebra::vector;

fn poly(raw: &[[f64; 2]]) -> Polygon {
    Polygon::from_coords(raw).unwrap()
}

fn hexagon() -> Polygon {
    poly(&[
        [0.0, 4.0],
        [-2.0, 3.0],
        [-2.0, 1.0],
        [0.0, 0.0],
        [2.0, 1.0],
        [2.0, 3.0],
    ])
}

/// Left chain reflex at vertex 1, so vertex 2 cannot see the top.
fn reflex_left() -> Polygon {
    poly(&[
        [0.0, 10.0],
        [-1.0, 8.0],
        [-4.0, 6.0],
        [-3.0, 3.0],
        [0.0, 0.0],
        [4.0, 5.0],
    ])
}

fn assert_valid_triangulation(p: &Polygon, t: &Triangulation) {
    let n = p.len();
    assert_eq!(t.diagonals.len(), n - 3);
    assert_eq!(t.triangles.len(), n - 2);
    for &(a, b) in &t.diagonals {
        assert!(!p.adjacent(a, b), "diagonal ({a}, {b}) joins neighbors");
    }
    let v = p.vertices();
    let covered: f64 = t
        .triangles
        .iter()
        .map(|[a, b, c]| 0.5 * orient(v[*a], v[*b], v[*c]).abs())
        .sum();
    assert!((covered - p.signed_area()).abs() < 1e-9);
}

#[test]
fn classify_vertex_cases() {
    let top = vector![0.0, 1.0];
    let (l, r) = (vector![-1.0, 0.0], vector![1.0, 0.0]);
    // CCW around a peak: predecessor on the right, successor on the left.
    assert_eq!(classify_vertex(r, top, l), VertexClass::Start);
    assert_eq!(classify_vertex(l, top, r), VertexClass::Split);
    let bottom = vector![0.0, -1.0];
    assert_eq!(classify_vertex(l, bottom, r), VertexClass::End);
    assert_eq!(classify_vertex(r, bottom, l), VertexClass::Merge);
    assert_eq!(
        classify_vertex(vector![0.0, 2.0], vector![0.0, 1.0], vector![0.5, 0.0]),
        VertexClass::Regular
    );
}

#[test]
fn convex_ccw_polygon_has_one_start_and_one_end() {
    for p in [
        hexagon(),
        poly(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]),
    ] {
        let c = classify_poly(&p);
        assert_eq!(c.count(VertexClass::Start), 1);
        assert_eq!(c.count(VertexClass::End), 1);
        assert_eq!(c.count(VertexClass::Split), 0);
        assert_eq!(c.count(VertexClass::Merge), 0);
        assert!(is_y_monotone(&p));
    }
}

#[test]
fn horizontal_edges_are_ordered_by_x() {
    // Unit square: (0, 1) is the top (smaller x wins), (1, 0) the bottom.
    let sq = poly(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
    let c = classify_poly(&sq);
    assert_eq!(c.indices(VertexClass::Start), vec![3]);
    assert_eq!(c.indices(VertexClass::End), vec![1]);
    assert!(vertical_cmp(&vector![0.0, 1.0], &vector![1.0, 1.0]).is_gt());
}

#[test]
fn notches_make_split_and_merge_vertices() {
    let split = poly(&[[0.0, 0.0], [2.0, 2.0], [4.0, 0.0], [4.0, 5.0], [0.0, 5.0]]);
    let c = classify_poly(&split);
    assert_eq!(c.indices(VertexClass::Split), vec![1]);
    assert!(!c.is_y_monotone());

    let merge = poly(&[[0.0, 0.0], [4.0, 0.0], [4.0, 5.0], [2.0, 3.0], [0.0, 5.0]]);
    let c = classify_poly(&merge);
    assert_eq!(c.indices(VertexClass::Merge), vec![3]);
    assert!(!is_y_monotone(&merge));
}

#[test]
fn clockwise_input_is_not_monotone_until_normalized() {
    let cw = poly(&[[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]);
    assert!(!is_y_monotone(&cw));
    assert!(is_y_monotone(&cw.to_ccw()));
}

#[test]
fn chains_run_from_start_to_end() {
    let ch = two_chains(&hexagon()).unwrap();
    assert_eq!((ch.start, ch.end), (0, 3));
    assert_eq!(ch.left, vec![0, 1, 2, 3]);
    assert_eq!(ch.right, vec![0, 5, 4, 3]);

    // Start after End in index order: the left chain wraps around.
    let rotated = poly(&[
        [0.0, 0.0],
        [2.0, 1.0],
        [2.0, 3.0],
        [0.0, 4.0],
        [-2.0, 3.0],
        [-2.0, 1.0],
    ]);
    let ch = two_chains(&rotated).unwrap();
    assert_eq!((ch.start, ch.end), (3, 0));
    assert_eq!(ch.left, vec![3, 4, 5, 0]);
    assert_eq!(ch.right, vec![3, 2, 1, 0]);
    let sides = ch.sides(6);
    assert_eq!(sides[3], Side::Left);
    assert_eq!(sides[0], Side::Right);
    assert_eq!(sides[1], Side::Right);
}

#[test]
fn hexagon_gets_three_diagonals_and_four_triangles() {
    let p = hexagon();
    let t = triangulate_monotone(&p, GeomCfg::default()).unwrap();
    assert_eq!(t.diagonals, vec![(1, 5), (5, 2), (2, 4)]);
    assert_valid_triangulation(&p, &t);
    let pts = t.diagonal_points(&p);
    assert_eq!(pts[0], (vector![-2.0, 3.0], vector![2.0, 3.0]));
}

#[test]
fn square_and_triangle() {
    let sq = poly(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
    let t = triangulate_monotone(&sq, GeomCfg::default()).unwrap();
    assert_eq!(t.diagonals, vec![(2, 0)]);
    assert_valid_triangulation(&sq, &t);

    let tri = poly(&[[0.0, 0.0], [2.0, 0.0], [1.0, 2.0]]);
    let t = triangulate_monotone(&tri, GeomCfg::default()).unwrap();
    assert!(t.diagonals.is_empty());
    assert_eq!(t.triangles.len(), 1);
}

#[test]
fn same_chain_fan_over_convex_side() {
    let p = poly(&[[0.0, 10.0], [-3.0, 7.0], [-4.0, 4.0], [-3.0, 1.0], [0.0, 0.0]]);
    let t = triangulate_monotone(&p, GeomCfg::default()).unwrap();
    assert_eq!(t.diagonals, vec![(0, 2), (0, 3)]);
    assert_valid_triangulation(&p, &t);
}

#[test]
fn reflex_chain_stays_visible_until_opposite_side() {
    let p = reflex_left();
    let t = triangulate_monotone(&p, GeomCfg::default()).unwrap();
    assert_eq!(t.diagonals, vec![(1, 5), (2, 5), (5, 3)]);
    assert_valid_triangulation(&p, &t);

    let snaps: Vec<TriangulationSnapshot> = triangulation_steps(&p, GeomCfg::default())
        .unwrap()
        .collect();
    // Before vertex 5 is swept, the whole reflex chain 0-1-2 is visible.
    assert!(snaps.iter().any(|s| s.visible == vec![0, 1, 2]));
}

#[test]
fn steps_sweep_downward_and_end_with_result() {
    let p = hexagon();
    let cfg = GeomCfg::default();
    let snaps: Vec<TriangulationSnapshot> = triangulation_steps(&p, cfg).unwrap().collect();
    // n - 3 event vertices, the closing fan, and the final state.
    assert_eq!(snaps.len(), p.len() - 1);
    assert!(snaps.windows(2).all(|w| w[0].sweep_y >= w[1].sweep_y));
    assert!(snaps[0].diagonals.is_empty());
    assert_eq!(snaps[0].visible, vec![0, 1]);
    let last = snaps.last().unwrap();
    assert_eq!(last.sweep_y, 0.0);
    assert!(last.visible.is_empty());
    assert_eq!(
        last.diagonals,
        triangulate_monotone(&p, cfg).unwrap().diagonals
    );
}

#[test]
fn non_monotone_input_is_a_precondition_failure() {
    let split = poly(&[[0.0, 0.0], [2.0, 2.0], [4.0, 0.0], [4.0, 5.0], [0.0, 5.0]]);
    let err = triangulate_monotone(&split, GeomCfg::default()).unwrap_err();
    assert_eq!(err, GeomError::NotMonotone { split: 1, merge: 0 });
    assert_eq!(err.kind(), ErrorKind::Precondition);
    assert!(triangulation_steps(&split, GeomCfg::default()).is_err());
    assert!(two_chains(&split).is_err());
}
