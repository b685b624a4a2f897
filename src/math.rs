//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::{DMatrix, Vector2};

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for two-dimensional real vectors (positions and field vectors).
pub type R2 = Vector2<Scalar>;
/// Dense `rows × cols` matrix used for mesh-shaped data.
pub type Mesh = DMatrix<Scalar>;

/// Euclidean norm of a 2-D vector, computed without intermediate overflow.
#[inline]
#[must_use]
pub fn magnitude(vector: &R2) -> Scalar {
    vector.x.hypot(vector.y)
}

/// Converts a mesh into nested rows, outer index = row.
#[must_use]
pub fn mesh_rows(mesh: &Mesh) -> Vec<Vec<Scalar>> {
    mesh.row_iter()
        .map(|row| row.iter().copied().collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn magnitude_matches_euclidean_norm() {
        let v = R2::new(3.0, 4.0);
        assert_relative_eq!(magnitude(&v), 5.0, epsilon = 1.0e-12);
    }

    #[test]
    fn magnitude_survives_large_components() {
        let v = R2::new(1.0e200, 1.0e200);
        assert!(magnitude(&v).is_finite());
    }

    #[test]
    fn mesh_rows_are_row_major() {
        let m = Mesh::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(mesh_rows(&m), vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    }
}
