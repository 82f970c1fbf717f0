use claims::{assert_err, assert_ok};

use crate::{List, Point, Polygon, Triangle, TriangulationOptions};

use super::util;

fn star() -> Polygon<f64> {
    assert_ok!(Polygon::from_vertices(util::polygon::star().iter()))
}

#[test]
fn indexed_list() {
    let polygon = star();
    let mut output = Vec::<usize>::new();
    assert_eq!(assert_ok!(polygon.triangulate_indices_into(&TriangulationOptions::default(), &mut output)), 6);
    assert_eq!(output.len(), 18);
    assert_eq!(List::<usize>::len(&output), 6);
    assert!(output.iter().all(|&i| i < polygon.len()));
}

#[test]
fn indexed_arrays() {
    let polygon = star();
    let mut output = Vec::<[usize; 3]>::new();
    assert_ok!(polygon.triangulate_indices_into(&TriangulationOptions::default(), &mut output));

    let triangles = assert_ok!(polygon.triangulate());
    assert_eq!(output.len(), triangles.len());
    for ([v0, v1, v2], t) in output.iter().zip(triangles.iter()) {
        assert_eq!(*t, Triangle::new(polygon[*v0], polygon[*v1], polygon[*v2]));
    }
}

#[test]
fn indices_refer_to_input_order() {
    let ring = util::polygon::half_frame();
    let polygon = assert_ok!(Polygon::from_vertices(ring.iter()));
    let mut output = Vec::<(usize, usize, usize)>::new();
    assert_ok!(polygon.triangulate_indices_into(&TriangulationOptions::default(), &mut output));

    let triangles = assert_ok!(polygon.triangulate());
    for ((v0, v1, v2), t) in output.iter().zip(triangles.iter()) {
        assert_eq!(t.vertices(), &[Point::from(ring[*v0]), Point::from(ring[*v1]), Point::from(ring[*v2])]);
    }
}

#[test]
fn flat_points() {
    let polygon = star();
    let mut output = Vec::<Point<f64>>::new();
    assert_ok!(polygon.triangulate_into(&TriangulationOptions::default(), &mut output));
    assert_eq!(output.len(), 18);
}

#[test]
fn appends() {
    let polygon = star();
    let mut output = vec![[0usize, 0, 0]];
    assert_ok!(polygon.triangulate_indices_into(&TriangulationOptions::default(), &mut output));
    assert_eq!(output.len(), 7);
    assert_eq!(output[0], [0, 0, 0]);
}

#[test]
fn truncates_on_error() {
    let square = assert_ok!(Polygon::from_vertices(util::polygon::square().iter()));
    let bowtie = assert_ok!(Polygon::from_vertices(util::polygon::lopsided_bowtie().iter()));
    let mut output = Vec::<Triangle<f64>>::new();
    assert_ok!(square.triangulate_into(&TriangulationOptions::default(), &mut output));
    assert_err!(bowtie.triangulate_into(&TriangulationOptions::default(), &mut output));
    assert_eq!(output.len(), 2);

    // Clipping stalls partway through, after some triangles were already pushed
    let duplicate = assert_ok!(Polygon::from_flat(&[0., 0., 4., 0., 4., 4., 4., 4., 2., 6., 0., 4.]));
    let options = TriangulationOptions::new().check_simplicity(false);
    let mut indices = Vec::<usize>::new();
    assert_err!(duplicate.triangulate_indices_into(&options, &mut indices));
    assert!(indices.is_empty());
}

#[test]
fn list_trait() {
    let mut flat = Vec::<i32>::new();
    List::push(&mut flat, 1, 2, 3);
    List::push(&mut flat, 4, 5, 6);
    List::truncate(&mut flat, 1);
    assert_eq!(flat, vec![1, 2, 3]);

    let mut tuples = Vec::<(u8, u8, u8)>::new();
    {
        let mut list = &mut tuples;
        assert!(List::<u8>::is_empty(&list));
        List::push(&mut list, 1, 2, 3);
    }
    assert_eq!(tuples, vec![(1, 2, 3)]);
}
