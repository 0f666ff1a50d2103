use approx::assert_abs_diff_eq;
use nvector::{vector, Product, Vector, VectorError};
use rand::Rng;

fn random_vector(rng: &mut impl Rng, dim: usize) -> Vector {
    Vector::new((0..dim).map(|_| rng.gen_range(-100.0..100.0_f64))).unwrap()
}

#[test]
fn test_vector_addition() {
    let a = vector![1, 2, 3].unwrap();
    let b = vector![4, 5, 6].unwrap();
    assert_eq!(a.try_add(&b).unwrap(), vector![5, 7, 9].unwrap());
}

#[test]
fn test_scalar_addition() {
    let a = vector![1, 2, 3].unwrap();
    assert_eq!(a.try_add(2).unwrap(), vector![3, 4, 5].unwrap());
    assert_eq!(a.try_add(-1).unwrap(), vector![0, 1, 2].unwrap());

    // Addition is commutative
    assert_eq!(a.try_radd(2).unwrap(), a.try_add(2).unwrap());
}

#[test]
fn test_addition_broadcasts_right_operand() {
    let a = vector![1, 2, 3].unwrap();
    assert_eq!(a.try_add(&vector![7].unwrap()).unwrap(), vector![8, 9, 10].unwrap());

    // Two length-1 vectors add element-wise
    let one = vector![1].unwrap();
    assert_eq!(one.try_add(&vector![2].unwrap()).unwrap(), vector![3].unwrap());
}

#[test]
fn test_addition_does_not_broadcast_left_operand() {
    let err = vector![7]
        .unwrap()
        .try_add(&vector![1, 2, 3].unwrap())
        .unwrap_err();
    assert!(matches!(err, VectorError::DimensionMismatch { op: "+", .. }));
}

#[test]
fn test_addition_dimension_mismatch() {
    let a = vector![1, 2].unwrap();
    let b = vector![1, 2, 3].unwrap();
    let err = a.try_add(&b).unwrap_err();

    assert!(err.is_dimension_mismatch());
    match &err {
        VectorError::DimensionMismatch { op, lhs, rhs } => {
            assert_eq!(*op, "+");
            assert_eq!(lhs, "Vector: [1, 2]");
            assert_eq!(rhs, "Vector: [1, 2, 3]");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let message = err.to_string();
    assert!(message.contains("Vector: [1, 2]"));
    assert!(message.contains("Vector: [1, 2, 3]"));
}

#[test]
fn test_addition_rejects_float_operand() {
    let err = vector![1, 2].unwrap().try_add(0.5).unwrap_err();
    assert_eq!(
        err,
        VectorError::UnsupportedOperand {
            op: "+",
            operand: "float"
        }
    );
}

#[test]
fn test_subtraction() {
    let a = vector![5, 7, 9].unwrap();
    let b = vector![4, 5, 6].unwrap();
    assert_eq!(a.try_sub(&b).unwrap(), vector![1, 2, 3].unwrap());
    assert_eq!(a.try_sub(1).unwrap(), vector![4, 6, 8].unwrap());
    assert_eq!(a.try_sub(&vector![5].unwrap()).unwrap(), vector![0, 2, 4].unwrap());

    let err = a.try_sub(&vector![1, 2].unwrap()).unwrap_err();
    assert!(matches!(err, VectorError::DimensionMismatch { op: "-", .. }));

    let err = a.try_sub(1.5).unwrap_err();
    assert!(matches!(err, VectorError::UnsupportedOperand { op: "-", .. }));
}

#[test]
fn test_reversed_subtraction() {
    let v = vector![1, 2].unwrap();

    // 10 - v, not v - 10
    assert_eq!(v.try_rsub(10).unwrap(), vector![9, 8].unwrap());
    assert_eq!(v.try_sub(10).unwrap(), vector![-9, -8].unwrap());

    let w = vector![5, 5].unwrap();
    assert_eq!(v.try_rsub(&w).unwrap(), w.try_sub(&v).unwrap());

    let err = v.try_rsub(0.5).unwrap_err();
    assert!(matches!(err, VectorError::UnsupportedOperand { op: "-", .. }));
}

#[test]
fn test_subtraction_round_trip() {
    let mut rng = rand::thread_rng();

    for dim in 1..16 {
        let v = random_vector(&mut rng, dim);
        let w = random_vector(&mut rng, dim);

        let round_trip = v.try_sub(&v.try_sub(&w).unwrap()).unwrap();
        for (got, expected) in round_trip.iter().zip(w.iter()) {
            assert_abs_diff_eq!(*got, *expected, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_negation_is_involutive() {
    let mut rng = rand::thread_rng();

    for dim in 1..16 {
        let v = random_vector(&mut rng, dim);
        assert_eq!(-(-&v), v);
    }
}

#[test]
fn test_dot_product() {
    let a = vector![1, 2, 3].unwrap();
    let b = vector![4, 5, 6].unwrap();

    let product = a.try_mul(&b).unwrap();
    assert_eq!(product, Product::Scalar(32.0));
    assert_eq!(product.as_scalar(), Some(32.0));
    assert_eq!(a.dot(&b).unwrap(), 32.0);

    // dot never broadcasts
    let err = a.dot(&vector![2].unwrap()).unwrap_err();
    assert!(matches!(err, VectorError::DimensionMismatch { op: "*", .. }));
}

#[test]
fn test_scalar_multiplication() {
    let a = vector![1, 2, 3].unwrap();

    assert_eq!(
        a.try_mul(2).unwrap(),
        Product::Vector(vector![2, 4, 6].unwrap())
    );
    assert_eq!(
        a.try_mul(0.5).unwrap(),
        Product::Vector(vector![0.5, 1, 1.5].unwrap())
    );
    assert_eq!(a.try_rmul(3).unwrap(), a.try_mul(3).unwrap());

    assert_eq!(&a * 2.0, vector![2, 4, 6].unwrap());
    assert_eq!(2.0 * &a, vector![2, 4, 6].unwrap());
    assert_eq!(&a * -1.0, -a);
}

#[test]
fn test_multiplication_broadcast_and_mismatch() {
    let a = vector![1, 2, 3].unwrap();

    let broadcast = a.try_mul(&vector![2].unwrap()).unwrap();
    assert_eq!(broadcast, Product::Vector(vector![2, 4, 6].unwrap()));
    assert_eq!(broadcast.as_scalar(), None);

    let err = a.try_mul(&vector![1, 2].unwrap()).unwrap_err();
    assert!(matches!(err, VectorError::DimensionMismatch { op: "*", .. }));
    assert!(err.to_string().contains("for *"));
}

#[test]
fn test_division() {
    let a = vector![7, -7, 3].unwrap();

    assert_eq!(a.try_div(2.0).unwrap(), vector![3.5, -3.5, 1.5].unwrap());
    assert_eq!(a.floor_div(2.0).unwrap(), vector![3, -4, 1].unwrap());
    assert_eq!(a.modulo(3.0).unwrap(), vector![1, 2, 0].unwrap());
    assert_eq!(a.modulo(-3.0).unwrap(), vector![-2, -1, 0].unwrap());
}

#[test]
fn test_division_by_zero() {
    let a = vector![1, 2].unwrap();

    assert_eq!(a.try_div(0.0).unwrap_err(), VectorError::DivisionByZero);
    assert_eq!(a.floor_div(0.0).unwrap_err(), VectorError::DivisionByZero);
    assert_eq!(a.modulo(0.0).unwrap_err(), VectorError::DivisionByZero);
}

#[test]
fn test_integer_operands_match_integer_coordinates() {
    let n: i32 = 7;

    // Any integer accepted as an operand is also accepted as a coordinate
    let from_ints = Vector::new(vec![n, -n]).unwrap();
    assert_eq!(from_ints, vector![7, -7].unwrap());

    let a = vector![1, 2].unwrap();
    assert_eq!(a.try_add(n).unwrap(), a.try_add(&vector![n].unwrap()).unwrap());
    assert_eq!(
        a.try_mul(n).unwrap(),
        Product::Vector(vector![7, 14].unwrap())
    );
}
