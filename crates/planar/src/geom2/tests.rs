use super::*;
use crate::error::GeomError;
use nalgebra::{vector, Vector2};

#[test]
fn orient_signs() {
    let a = vector![0.0, 0.0];
    let b = vector![1.0, 0.0];
    assert!(orient(a, b, vector![0.5, 1.0]) > 0.0);
    assert!(orient(a, b, vector![0.5, -1.0]) < 0.0);
    assert_eq!(orient(a, b, vector![3.0, 0.0]), 0.0);
    // twice the signed area of the unit right triangle
    assert!((orient(a, b, vector![0.0, 1.0]) - 1.0).abs() < 1e-12);
}

#[test]
fn squared_distance_axis() {
    assert_eq!(squared_distance(vector![1.0, 1.0], vector![4.0, 5.0]), 25.0);
}

#[test]
fn parametric_intersection_parameters() {
    let (t1, t2) = parametric_intersection(
        vector![0.0, 0.0],
        vector![2.0, 2.0],
        vector![0.0, 2.0],
        vector![4.0, -2.0],
    )
    .unwrap();
    assert!((t1 - 0.5).abs() < 1e-12);
    assert!((t2 - 0.25).abs() < 1e-12);
}

#[test]
fn parallel_and_coincident_lines_have_no_parameters() {
    let p = parametric_intersection(
        vector![0.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 1.0],
        vector![1.0, 2.0],
    );
    assert!(p.is_none());
    let q = parametric_intersection(
        vector![0.0, 0.0],
        vector![1.0, 1.0],
        vector![2.0, 2.0],
        vector![3.0, 3.0],
    );
    assert!(q.is_none());
}

#[test]
fn segment_segment_crossing() {
    let x = intersection(
        vector![0.0, 0.0],
        vector![2.0, 2.0],
        vector![0.0, 2.0],
        vector![2.0, 0.0],
        Restriction::Segment,
        Restriction::Segment,
    )
    .unwrap();
    assert!((x - vector![1.0, 1.0]).norm() < 1e-10);
}

#[test]
fn restrictions_cut_parameter_ranges() {
    // Lines meet at (3, 3), i.e. t1 = 1.5 on the first and t2 = 0.75 on the second.
    let (p1, p2) = (vector![0.0, 0.0], vector![2.0, 2.0]);
    let (p3, p4) = (vector![0.0, 6.0], vector![4.0, 2.0]);
    let meet = |r1, r2| intersection(p1, p2, p3, p4, r1, r2);

    assert!(meet(Restriction::Line, Restriction::Line).is_some());
    assert!(meet(Restriction::Segment, Restriction::Segment).is_none());
    assert!(meet(Restriction::Ray, Restriction::Segment).is_some());
    assert!(meet(Restriction::RayInverse, Restriction::Line).is_none());

    // Behind the start of the first ray: t1 < 0.
    let back = intersection(
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![-1.0, -1.0],
        vector![-1.0, 1.0],
        Restriction::Ray,
        Restriction::Line,
    );
    assert!(back.is_none());
    let back_inv = intersection(
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![-1.0, -1.0],
        vector![-1.0, 1.0],
        Restriction::RayInverse,
        Restriction::Line,
    );
    assert!((back_inv.unwrap() - vector![-1.0, 0.0]).norm() < 1e-12);
}

#[test]
fn touching_at_endpoint_counts_for_segments() {
    let x = intersection(
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 5.0],
        Restriction::Segment,
        Restriction::Segment,
    );
    assert_eq!(x, Some(vector![1.0, 0.0]));
}

#[test]
fn rounding_collapses_near_duplicates() {
    let a = round_point(vector![0.1 + 0.2, 1.0 / 3.0], 15);
    let b = round_point(vector![0.3, 0.333_333_333_333_333_3], 15);
    assert_eq!(a, b);
    assert_eq!(round_to(-0.0, 15).to_bits(), 0.0f64.to_bits());
    assert_eq!(round_to(1e300, 15), 1e300);
}

#[test]
fn segment_validation_and_order() {
    let err = Segment::new(vector![1.0, 1.0], vector![1.0, 1.0]).unwrap_err();
    assert_eq!(err, GeomError::DegenerateSegment { index: 0 });
    assert_eq!(
        Segment::new(vector![f64::NAN, 0.0], vector![1.0, 1.0]).unwrap_err(),
        GeomError::NonFinite
    );
    let s = Segment::new(vector![2.0, 0.0], vector![1.0, 5.0]).unwrap();
    assert_eq!(s.lower(), vector![1.0, 5.0]);
    assert_eq!(s.upper(), vector![2.0, 0.0]);
    assert!((s.y_at(1.5) - 2.5).abs() < 1e-12);

    let raw = [[[0.0, 0.0], [1.0, 1.0]], [[2.0, 2.0], [2.0, 2.0]]];
    assert_eq!(
        segments_from_coords(&raw).unwrap_err(),
        GeomError::DegenerateSegment { index: 1 }
    );
}

#[test]
fn every_segment_constructor_rejects_degenerate_input() {
    let p = vector![1.0, 1.0];
    let nan = vector![f64::NAN, 0.0];
    assert_eq!(
        Segment::new(p, p).unwrap_err(),
        GeomError::DegenerateSegment { index: 0 }
    );
    assert_eq!(Segment::new(nan, p).unwrap_err(), GeomError::NonFinite);
    assert_eq!(
        segments_from_coords(&[[[1.0, 1.0], [1.0, 1.0]]]).unwrap_err(),
        GeomError::DegenerateSegment { index: 0 }
    );
    assert_eq!(
        segments_from_coords(&[[[0.0, 0.0], [2.0, 2.0]], [[f64::INFINITY, 0.0], [1.0, 1.0]]])
            .unwrap_err(),
        GeomError::NonFinite
    );
    let s = Segment::new(vector![0.0, 0.0], vector![2.0, 2.0]).unwrap();
    assert_eq!((s.a(), s.b()), (vector![0.0, 0.0], vector![2.0, 2.0]));
    assert_ne!(s.a(), s.b());
}

#[test]
fn polygon_validation() {
    assert_eq!(
        Polygon::from_coords(&[[0.0, 0.0], [1.0, 0.0]]).unwrap_err(),
        GeomError::PolygonTooSmall { len: 2 }
    );
    assert_eq!(
        Polygon::from_coords(&[[0.0, 0.0], [1.0, 0.0], [1.0, 0.0], [0.0, 1.0]]).unwrap_err(),
        GeomError::RepeatedVertex { index: 1 }
    );
    // wrap-around repetition: last equals first
    assert_eq!(
        Polygon::from_coords(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [0.0, 0.0]]).unwrap_err(),
        GeomError::RepeatedVertex { index: 3 }
    );
}

#[test]
fn polygon_cyclic_access_and_orientation() {
    let sq = Polygon::from_coords(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]).unwrap();
    assert_eq!(sq.vertex(-1), Vector2::new(0.0, 1.0));
    assert_eq!(sq.vertex(5), Vector2::new(1.0, 0.0));
    assert_eq!(sq.prev_index(0), 3);
    assert_eq!(sq.next_index(3), 0);
    assert!(sq.adjacent(0, 3));
    assert!(!sq.adjacent(0, 2));
    assert!((sq.signed_area() - 1.0).abs() < 1e-12);
    assert!(sq.is_ccw());

    let cw = Polygon::from_coords(&[[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]).unwrap();
    assert!(!cw.is_ccw());
    assert!(cw.to_ccw().is_ccw());
}
