#![allow(missing_docs)]
//! Integration tests for AABB construction, queries, and set operations.

use lattice_core::aabb::{
    center, combine, combine_overlapping, contains, contains_point, corners, difference,
    dimensions, high, intersect, is_normalized, low, make_aabb, overlaps, place, split,
    transform_aabb, translate, volume, width, DAabb2, IAabb2, IAabb3,
};
use lattice_core::affine::{rotation_2d, translation_2d};
use lattice_core::{Matrix, Vector};

fn boxi2(lx: i32, ly: i32, hx: i32, hy: i32) -> IAabb2 {
    make_aabb(&Vector::from_array([lx, ly]), &Vector::from_array([hx, hy]))
}

#[test]
fn make_aabb_normalizes_swapped_corners() {
    let b = make_aabb(&Vector::from_array([2, 0]), &Vector::from_array([0, 1]));
    assert_eq!(low(&b).to_array(), [0, 0]);
    assert_eq!(high(&b).to_array(), [2, 1]);
    assert!(is_normalized(&b));
}

#[test]
fn raw_construction_can_be_denormalized() {
    let b: IAabb2 = Matrix::from_rows([[5, 0], [0, 1]]);
    assert!(!is_normalized(&b));
}

#[test]
fn point_containment_is_half_open() {
    let b = boxi2(0, 0, 4, 4);
    assert!(contains_point(&b, &Vector::from_array([0, 0])));
    assert!(contains_point(&b, &Vector::from_array([3, 3])));
    // High bound is excluded.
    assert!(!contains_point(&b, &Vector::from_array([4, 4])));
    assert!(!contains_point(&b, &Vector::from_array([2, 4])));
    assert!(!contains_point(&b, &Vector::from_array([-1, 2])));
}

#[test]
fn center_is_always_contained() {
    let b = make_aabb(
        &Vector::from_array([-3.0, 1.0, 0.5]),
        &Vector::from_array([2.0, 4.0, 0.75]),
    );
    assert!(contains_point(&b, &center(&b)));
}

#[test]
fn box_containment_is_closed() {
    let outer = boxi2(0, 0, 10, 10);
    assert!(contains(&outer, &boxi2(2, 2, 8, 8)));
    // A box contains itself and boxes sharing its bounds.
    assert!(contains(&outer, &outer));
    assert!(contains(&outer, &boxi2(0, 0, 10, 5)));
    assert!(!contains(&outer, &boxi2(5, 5, 11, 8)));
}

#[test]
fn overlap_is_strict_so_touching_boxes_do_not_overlap() {
    let a = boxi2(0, 0, 4, 4);
    assert!(overlaps(&a, &boxi2(2, 2, 6, 6)));
    assert!(overlaps(&a, &a));
    // Shared edge only.
    assert!(!overlaps(&a, &boxi2(4, 0, 8, 4)));
    assert!(!overlaps(&a, &boxi2(5, 0, 8, 4)));
}

#[test]
fn extent_queries() {
    let b = boxi2(1, 2, 4, 10);
    assert_eq!(dimensions(&b).to_array(), [3, 8]);
    assert_eq!(width(&b, 0), 3);
    assert_eq!(width(&b, 1), 8);
    assert_eq!(volume(&b), 24);

    let c = make_aabb(
        &Vector::from_array([0.0, 0.0, 0.0]),
        &Vector::from_array([2.0, 3.0, 4.0]),
    );
    assert_eq!(volume(&c), 24.0);
}

#[test]
fn translate_and_place() {
    let b = make_aabb(&Vector::from_array([0.0, 0.0]), &Vector::from_array([2.0, 2.0]));
    let moved = translate(&b, &Vector::from_array([1.0, -1.0]));
    assert_eq!(low(&moved).to_array(), [1.0, -1.0]);
    assert_eq!(high(&moved).to_array(), [3.0, 1.0]);

    let placed = place(&b, &Vector::from_array([10.0, 10.0]));
    assert_eq!(center(&placed).to_array(), [10.0, 10.0]);
    assert_eq!(dimensions(&placed), dimensions(&b));
}

#[test]
fn corners_follow_the_bit_pattern() {
    let b = boxi2(0, 0, 1, 2);
    let cs = corners(&b);
    assert_eq!(cs.len(), 4);
    assert_eq!(cs[0].to_array(), [0, 0]);
    assert_eq!(cs[1].to_array(), [1, 0]);
    assert_eq!(cs[2].to_array(), [0, 2]);
    assert_eq!(cs[3].to_array(), [1, 2]);

    let b3: IAabb3 = make_aabb(&Vector::from_array([0, 0, 0]), &Vector::from_array([1, 1, 1]));
    assert_eq!(corners(&b3).len(), 8);
}

#[test]
fn combine_bounds_both_inputs() {
    let a = boxi2(0, 0, 2, 2);
    let b = boxi2(5, -1, 6, 1);
    let u = combine(&a, &b);
    assert_eq!(u, boxi2(0, -1, 6, 2));
    assert!(contains(&u, &a));
    assert!(contains(&u, &b));
}

#[test]
fn intersect_clips_and_degenerates_when_disjoint() {
    let a = boxi2(0, 0, 4, 4);
    assert_eq!(intersect(&a, &boxi2(2, 2, 6, 6)), boxi2(2, 2, 4, 4));
    // Disjoint inputs yield the all-zero box.
    assert_eq!(intersect(&a, &boxi2(10, 10, 12, 12)), IAabb2::uniform(0));
    // Touching counts as disjoint under strict overlap.
    assert_eq!(intersect(&a, &boxi2(4, 0, 8, 4)), IAabb2::uniform(0));
}

#[test]
fn transform_aabb_identity_and_rotation() {
    let b: DAabb2 = make_aabb(&Vector::from_array([0.0, 0.0]), &Vector::from_array([1.0, 2.0]));
    assert_eq!(transform_aabb(&b, &Matrix::<f64, 3, 3>::identity()), b);

    let shifted = transform_aabb(&b, &translation_2d(3.0, 4.0));
    assert_eq!(low(&shifted).to_array(), [3.0, 4.0]);
    assert_eq!(high(&shifted).to_array(), [4.0, 6.0]);

    // A quarter turn swaps the extents; the result re-bounds the corners.
    let turned = transform_aabb(&b, &rotation_2d(std::f64::consts::FRAC_PI_2));
    let size = dimensions(&turned);
    assert!((size[0] - 2.0).abs() < 1e-12);
    assert!((size[1] - 1.0).abs() < 1e-12);
}

#[test]
fn split_spans_the_point_and_the_corners() {
    let b = boxi2(0, 0, 4, 4);
    let parts = split(&b, &Vector::from_array([1, 1]));
    assert_eq!(parts.len(), 4);
    for part in &parts {
        assert!(is_normalized(part));
        assert!(contains(&b, part));
    }
    // The pieces tile the whole box.
    assert_eq!(parts.iter().map(volume).sum::<i32>(), volume(&b));
    // A point outside splits nothing.
    assert!(split(&b, &Vector::from_array([9, 9])).is_empty());
}

#[test]
fn difference_carves_out_the_overlap() {
    let a = boxi2(0, 0, 4, 4);
    let b = boxi2(2, 2, 6, 6);
    let parts = difference(&a, &b);
    assert!(!parts.is_empty());
    // Pieces are disjoint, inside a, outside b, and account for all the
    // leftover volume.
    for (i, p) in parts.iter().enumerate() {
        assert!(is_normalized(p));
        assert!(contains(&a, p));
        assert!(!overlaps(p, &b));
        for q in &parts[i + 1..] {
            assert!(!overlaps(p, q));
        }
    }
    let clipped = intersect(&a, &b);
    let total: i32 = parts.iter().map(volume).sum();
    assert_eq!(total, volume(&a) - volume(&clipped));
}

#[test]
fn difference_degenerate_cases() {
    let a = boxi2(0, 0, 4, 4);
    // Disjoint: a survives untouched.
    assert_eq!(difference(&a, &boxi2(10, 10, 12, 12)), vec![a]);
    // Fully covered: nothing remains.
    assert!(difference(&a, &boxi2(-1, -1, 5, 5)).is_empty());
    assert!(difference(&a, &a).is_empty());
    // Hole in the middle needs the full 2·D slabs.
    assert_eq!(difference(&a, &boxi2(1, 1, 3, 3)).len(), 4);
}

#[test]
fn combine_overlapping_merges_until_disjoint() {
    let mut boxes = vec![
        boxi2(0, 0, 2, 2),
        boxi2(1, 1, 3, 3),
        boxi2(10, 10, 12, 12),
    ];
    combine_overlapping(&mut boxes);
    assert_eq!(boxes.len(), 2);
    for (i, a) in boxes.iter().enumerate() {
        for b in &boxes[i + 1..] {
            assert!(!overlaps(a, b));
        }
    }
    assert!(boxes.contains(&boxi2(0, 0, 3, 3)));
    assert!(boxes.contains(&boxi2(10, 10, 12, 12)));

    // A chain that only merges transitively still collapses fully.
    let mut chain = vec![boxi2(0, 0, 2, 2), boxi2(4, 0, 6, 2), boxi2(1, 0, 5, 2)];
    combine_overlapping(&mut chain);
    assert_eq!(chain, vec![boxi2(0, 0, 6, 2)]);
}
