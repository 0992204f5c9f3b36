#![allow(missing_docs)]
//! Integration tests for the host marshalling surface: transform dispatch,
//! element access, display, and the type registry.

use lattice_host::{build_transform, HostError, HostMatrix, ShapeInfo, TransformKind, TypeRegistry};

#[test]
fn translation_dispatches_on_arity() {
    let m2 = build_transform(TransformKind::Translation, &[5.0, -2.0]).unwrap();
    assert_eq!((m2.height(), m2.width()), (3, 3));
    assert_eq!(m2.get_rc(0, 2).unwrap(), 5.0);

    let m3 = build_transform(TransformKind::Translation, &[3.0, 2.0, 7.0]).unwrap();
    assert_eq!((m3.height(), m3.width()), (4, 4));
    assert_eq!(m3.get_rc(2, 3).unwrap(), 7.0);
}

#[test]
fn rotation_dispatches_on_arity() {
    let m2 = build_transform(TransformKind::Rotation, &[0.0]).unwrap();
    assert_eq!((m2.height(), m2.width()), (3, 3));
    assert_eq!(m2.get_rc(0, 0).unwrap(), 1.0);

    let m3 = build_transform(TransformKind::Rotation, &[0.5, 0.0, 0.0, 1.0]).unwrap();
    assert_eq!((m3.height(), m3.width()), (4, 4));
    assert!((m3.get_rc(0, 0).unwrap() - 0.5f64.cos()).abs() < 1e-12);
}

#[test]
fn scaling_and_ortho_dispatch() {
    let s = build_transform(TransformKind::Scaling, &[2.0, 3.0, 4.0]).unwrap();
    assert_eq!(s.get_rc(1, 1).unwrap(), 3.0);

    let o = build_transform(TransformKind::Ortho, &[-1.0, 1.0, -1.0, 1.0, 0.1, 10.0]).unwrap();
    assert_eq!((o.height(), o.width()), (4, 4));
    assert_eq!(o.get_rc(0, 0).unwrap(), 1.0);
    assert_eq!(o.get_rc(3, 3).unwrap(), 1.0);
}

#[test]
fn wrong_arity_is_a_typed_error() {
    let err = build_transform(TransformKind::Translation, &[1.0]).unwrap_err();
    match err {
        HostError::ArityMismatch { op, expected, got } => {
            assert_eq!(op, "translation");
            assert_eq!(expected, "2 or 3");
            assert_eq!(got, 1);
        }
        other => panic!("unexpected error: {other}"),
    }

    assert!(build_transform(TransformKind::Rotation, &[]).is_err());
    assert!(build_transform(TransformKind::Rotation, &[1.0, 2.0]).is_err());
    assert!(build_transform(TransformKind::Ortho, &[1.0, 2.0, 3.0]).is_err());
}

#[test]
fn linear_get_set_round_trip() {
    let mut m = build_transform(TransformKind::Scaling, &[1.0, 1.0]).unwrap();
    assert_eq!(m.size(), 9);
    m.set(4, 6.5).unwrap();
    assert_eq!(m.get(4).unwrap(), 6.5);
    assert_eq!(m.get_rc(1, 1).unwrap(), 6.5);
}

#[test]
fn out_of_range_access_is_a_typed_error() {
    let mut m = build_transform(TransformKind::Scaling, &[1.0, 1.0]).unwrap();
    match m.get(9) {
        Err(HostError::IndexOutOfRange { index, len }) => {
            assert_eq!(index, 9);
            assert_eq!(len, 9);
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(m.set(100, 0.0).is_err());
    assert!(m.get_rc(3, 0).is_err());
    assert!(m.set_rc(0, 3, 0.0).is_err());
    // The failed writes left the value untouched.
    assert_eq!(m.get_rc(0, 0).unwrap(), 1.0);
}

#[test]
fn display_matches_the_bracketed_row_format() {
    let t = build_transform(TransformKind::Translation, &[3.0, 2.0, 7.0]).unwrap();
    assert_eq!(t.to_string(), "[1,0,0,3][0,1,0,2][0,0,1,7][0,0,0,1]");

    let r = build_transform(TransformKind::Rotation, &[0.0]).unwrap();
    assert_eq!(r.to_string(), "[1,-0,0][0,1,0][0,0,1]");
}

#[test]
fn host_matrix_from_core_values() {
    let v = HostMatrix::from(lattice_core::types::DVec3::from_array([1.0, 2.0, 3.0]));
    assert_eq!((v.height(), v.width()), (3, 1));
    assert_eq!(v.get(2).unwrap(), 3.0);
    assert_eq!(v.to_string(), "[1][2][3]");
}

#[test]
fn registry_lifecycle() {
    let mut reg = TypeRegistry::new();
    assert!(reg.is_empty());

    reg.register("vec3", ShapeInfo { rows: 3, cols: 1 }).unwrap();
    reg.register("mat4", ShapeInfo { rows: 4, cols: 4 }).unwrap();
    assert_eq!(reg.len(), 2);

    let shape = reg.lookup("mat4").unwrap();
    assert_eq!((shape.rows, shape.cols), (4, 4));
    assert_eq!(shape.size(), 16);
    assert!(reg.lookup("quat").is_none());

    // Re-registering an existing name is rejected and leaves the entry alone.
    let err = reg.register("vec3", ShapeInfo { rows: 9, cols: 9 }).unwrap_err();
    assert!(matches!(err, HostError::DuplicateType(name) if name == "vec3"));
    assert_eq!(reg.lookup("vec3").unwrap().rows, 3);

    match reg.expect_shape("missing") {
        Err(HostError::UnknownType(name)) => assert_eq!(name, "missing"),
        other => panic!("unexpected result: {other:?}"),
    }

    reg.clear();
    assert!(reg.is_empty());
    assert_eq!(reg.len(), 0);
}
