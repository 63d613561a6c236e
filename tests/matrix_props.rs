use approx::assert_relative_eq;
use fieldmat::{
    format_matrix, inner, matrix_equals, vec_equals, ColMajorMatrix, Field, FromShape, MatError,
    Matrix, MatrixMut, RowMajorMatrix, Vector, VectorRef,
};
use num_complex::Complex64;

/// The 5x5 tridiagonal fixture: 1 on the diagonal, +2 above, -2 below.
fn tridiagonal(i: usize, j: usize) -> f64 {
    let (i, j) = (i as i64, j as i64);
    match j - i {
        0 => 1.0,
        -1 | 1 => (2 * (j - i)) as f64,
        _ => 0.0,
    }
}

fn rm_and_cm() -> (RowMajorMatrix<f64>, ColMajorMatrix<f64>) {
    (
        RowMajorMatrix::from_fn(5, 5, tridiagonal),
        ColMajorMatrix::from_fn(5, 5, tridiagonal),
    )
}

#[test]
fn test_layouts_agree_for_any_fill() {
    let f = |i: usize, j: usize| (7 * i + j * j) as f64;
    let rm = RowMajorMatrix::from_fn(4, 6, f);
    let cm = ColMajorMatrix::from_fn(4, 6, f);

    assert!(rm.equals(&cm));
    assert!(cm.equals(&rm));
    assert!(matrix_equals(&rm, &cm));
    assert_eq!(format_matrix(&rm), format_matrix(&cm));
}

#[test]
fn test_tridiagonal_scenario() {
    let (rm, cm) = rm_and_cm();
    assert!(rm.equals(&cm));
    assert!(cm.equals(&rm));

    let expected = concat!(
        " 1 2 0 0 0\n",
        " -2 1 2 0 0\n",
        " 0 -2 1 2 0\n",
        " 0 0 -2 1 2\n",
        " 0 0 0 -2 1\n",
    );
    assert_eq!(format_matrix(&rm), expected);
    assert_eq!(format_matrix(&cm), expected);
}

#[test]
fn test_inner_product_one_to_five() {
    let v = Vector::from_fn(5, |i| (i + 1) as f64);
    assert_eq!(inner(&v, &v).unwrap(), 55.0);
}

#[test]
fn test_matvec_agrees_across_layouts() {
    let (rm, cm) = rm_and_cm();
    let v = Vector::from_fn(5, |i| (i + 1) as f64);

    let rmv = rm.times_vector(&v).unwrap();
    let cmv = cm.times_vector(&v).unwrap();
    assert!(vec_equals(&rmv, &cmv));

    let rmvl = rm.left_times_vector(&v).unwrap();
    let cmvl = cm.left_times_vector(&v).unwrap();
    assert!(vec_equals(&rmvl, &cmvl));

    // Verify against a direct row-wise evaluation.
    for i in 0..5 {
        let mut expected = 0.0;
        for j in 0..5 {
            expected += tridiagonal(i, j) * v.at(j);
        }
        assert_relative_eq!(rmv.at(i), expected, epsilon = 1e-12);
    }
}

#[test]
fn test_transpose_duality_of_products() {
    let (rm, cm) = rm_and_cm();
    let v = Vector::from_fn(5, |i| (2 * i + 1) as f64);

    let direct = rm.times_vector(&v).unwrap();
    let via_transpose = rm.transpose().left_times_vector(&v).unwrap();
    assert!(vec_equals(&direct, &via_transpose));

    let direct = cm.left_times_vector(&v).unwrap();
    let via_transpose = cm.transpose().times_vector(&v).unwrap();
    assert!(vec_equals(&direct, &via_transpose));
}

#[test]
fn test_transpose_is_self_inverse() {
    let (rm, cm) = rm_and_cm();
    assert!(std::ptr::eq(rm.transpose().transpose(), &rm));
    assert!(std::ptr::eq(cm.transpose().transpose(), &cm));
}

#[test]
fn test_binary_for_all_plus() {
    let a = RowMajorMatrix::from_fn(3, 4, |i, j| (i * 4 + j) as f64);
    let b = ColMajorMatrix::from_fn(3, 4, |i, j| (100 + i + j) as f64);

    let ab = a.binary_for_all(&b, |x, y| x.plus(y)).unwrap();
    let ba = b.binary_for_all(&a, |x, y| x.plus(y)).unwrap();

    assert!(ab.equals(&ba));
    for i in 0..3 {
        for j in 0..4 {
            assert_eq!(ab.at(i, j), a.at(i, j) + b.at(i, j));
        }
    }
}

#[test]
fn test_binary_for_all_with_transposed_operand() {
    let (rm, cm) = rm_and_cm();
    let t = cm.transpose();

    let sum = rm.binary_for_all(&t, |x, y| x + y).unwrap();
    for i in 0..5 {
        for j in 0..5 {
            assert_eq!(sum.at(i, j), tridiagonal(i, j) + tridiagonal(j, i));
        }
    }
}

#[test]
fn test_binary_for_all_shape_mismatch() {
    let a = RowMajorMatrix::<f64>::new(2, 3);
    let b = RowMajorMatrix::<f64>::new(3, 2);
    assert_eq!(
        a.binary_for_all(&b, |x, y| x + y).unwrap_err(),
        MatError::ShapeMismatch {
            left: (2, 3),
            right: (3, 2),
        }
    );
}

#[test]
fn test_scalar_times_one_is_identity() {
    let (rm, cm) = rm_and_cm();
    assert!(rm.scalar_times(1.0).equals(&rm));
    assert!(cm.scalar_times(1.0).equals(&cm));
    assert!(rm.transpose().scalar_times(1.0).equals(&rm.transpose()));
}

#[test]
fn test_unary_for_all() {
    let (rm, _) = rm_and_cm();
    let doubled = rm.unary_for_all(|x| 2.0 * x);
    for i in 0..5 {
        for j in 0..5 {
            assert_eq!(doubled.at(i, j), 2.0 * tridiagonal(i, j));
        }
    }
}

#[test]
fn test_set_copy_across_layouts() {
    let (rm, _) = rm_and_cm();
    let mut cm = ColMajorMatrix::<f64>::new(5, 5);
    cm.set_copy(&rm);
    assert!(cm.equals(&rm));
}

#[test]
fn test_mutation_through_transposed_view() {
    let mut m = RowMajorMatrix::<f64>::new(3, 2);
    let mut t = m.transpose_mut();
    t.fill_by(|i, j| (10 * i + j) as f64);
    // t[i, j] writes m[j, i].
    assert_eq!(m.at(2, 1), 12.0);
    assert_eq!(m.at(0, 0), 0.0);
}

#[test]
#[should_panic(expected = "row index out of bounds: 5 (valid 0..5)")]
fn test_at_out_of_bounds_reports_range() {
    let (rm, _) = rm_and_cm();
    let _ = rm.at(5, 0);
}

#[test]
fn test_gf2_matrices() {
    // Upper-triangular over GF(2).
    let m = RowMajorMatrix::from_fn(4, 4, |i, j| i <= j);
    let id = m.identity_like();

    // plus is XOR, so M + M vanishes.
    let sum = m.binary_for_all(&m, |a, b| a.plus(b)).unwrap();
    assert!(sum.equals(&m.zero_like()));

    // times by the identity's diagonal entries leaves M alone.
    assert!(m.scalar_times(true).equals(&m));
    assert!(id.at(2, 2));
    assert!(!id.at(2, 3));
}

#[test]
fn test_complex_matrices() {
    let f = |i: usize, j: usize| Complex64::new(i as f64, j as f64);
    let rm = RowMajorMatrix::from_fn(3, 3, f);
    let cm = ColMajorMatrix::from_fn(3, 3, f);
    assert!(rm.equals(&cm));

    let squared = rm.unary_for_all(|z| z.times(z));
    assert!(squared.at(1, 2).equals(Complex64::new(1.0, 2.0) * Complex64::new(1.0, 2.0)));

    let t = rm.transpose();
    assert!(t.at(2, 1).equals(Complex64::new(1.0, 2.0)));
}
