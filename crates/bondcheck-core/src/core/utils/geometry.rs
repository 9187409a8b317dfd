use nalgebra::{Point3, Vector3};

/// Returns the displacement `b - a`.
#[inline]
pub fn distance_vector(a: &Point3<f64>, b: &Point3<f64>) -> Vector3<f64> {
    b - a
}

/// Euclidean length of a displacement.
#[inline]
pub fn norm(v: &Vector3<f64>) -> f64 {
    v.norm()
}

/// Batched form of [`norm`]; one length per displacement, in input order.
pub fn norms(deltas: &[Vector3<f64>]) -> Vec<f64> {
    deltas.iter().map(norm).collect()
}

#[inline]
pub fn distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    norm(&distance_vector(a, b))
}

/// Angle at `center` between the arms towards `a` and `b`, in radians.
///
/// Uses `atan2(|v1 x v2|, v1 . v2)`, which keeps full precision near 0 and
/// pi where the arc-cosine form does not.
pub fn angle(a: &Point3<f64>, center: &Point3<f64>, b: &Point3<f64>) -> f64 {
    let v1 = distance_vector(center, a);
    let v2 = distance_vector(center, b);
    norm(&v1.cross(&v2)).atan2(v1.dot(&v2))
}
