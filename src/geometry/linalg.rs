//! Dense linear algebra on small fixed size matrices
use crate::types::RealScalar;

pub(crate) fn norm<T: RealScalar>(vector: &[T]) -> T {
    vector.iter().map(|&i| i * i).sum::<T>().sqrt()
}

/// Write the normal to the columns of `mat` into `result`
///
/// `mat` is a `[gdim, tdim]` Jacobian in column-major ordering with `tdim + 1 == gdim`.
pub(crate) fn cross<T: RealScalar>(mat: &[T], result: &mut [T]) {
    match mat.len() {
        0 => {}
        2 => {
            result[0] = mat[1];
            result[1] = -mat[0];
        }
        6 => {
            result[0] = mat[1] * mat[5] - mat[2] * mat[4];
            result[1] = mat[2] * mat[3] - mat[0] * mat[5];
            result[2] = mat[0] * mat[4] - mat[1] * mat[3];
        }
        _ => {
            unimplemented!();
        }
    }
}

/// Write a transposed Jacobian into a column-major `[G, D]` Jacobian
pub(crate) fn flatten<T: RealScalar, const D: usize, const G: usize>(
    jt: &[[T; G]; D],
    jacobian: &mut [T],
) {
    debug_assert!(jacobian.len() == G * D);
    for (td, row) in jt.iter().enumerate() {
        jacobian[G * td..G * (td + 1)].copy_from_slice(row);
    }
}

/// The unit normal of a map with `D + 1 == G`
pub(crate) fn unit_normal<T: RealScalar, const D: usize, const G: usize>(
    jt: &[[T; G]; D],
) -> [T; G] {
    assert!(
        D + 1 == G,
        "Normals are only defined for maps into a space of one dimension higher"
    );
    let mut jacobian = [T::zero(); 6];
    flatten(jt, &mut jacobian[..G * D]);
    let mut normal = [T::zero(); G];
    cross(&jacobian[..G * D], &mut normal);
    let size = norm(&normal);
    for n in normal.iter_mut() {
        *n /= size;
    }
    normal
}

/// The determinant of a square matrix, computed by Gaussian elimination with partial pivoting
pub(crate) fn determinant<T: RealScalar, const N: usize>(matrix: &[[T; N]; N]) -> T {
    let mut m = *matrix;
    let mut det = T::one();
    for col in 0..N {
        let mut pivot = col;
        for row in col + 1..N {
            if m[row][col].abs() > m[pivot][col].abs() {
                pivot = row;
            }
        }
        if m[pivot][col] == T::zero() {
            return T::zero();
        }
        if pivot != col {
            m.swap(pivot, col);
            det = -det;
        }
        det *= m[col][col];
        for row in col + 1..N {
            let factor = m[row][col] / m[col][col];
            for k in col..N {
                let value = m[col][k];
                m[row][k] -= factor * value;
            }
        }
    }
    det
}

/// The inverse of a square matrix, computed by Gauss-Jordan elimination with partial pivoting
///
/// Returns `None` if the matrix is singular to working precision.
pub(crate) fn inverse<T: RealScalar, const N: usize>(matrix: &[[T; N]; N]) -> Option<[[T; N]; N]> {
    let scale = matrix
        .iter()
        .flat_map(|row| row.iter())
        .fold(T::zero(), |a, b| a.max(b.abs()));
    if N > 0 && scale == T::zero() {
        return None;
    }
    let threshold = scale * T::epsilon() * T::from(N).unwrap_or_else(T::one);

    let mut m = *matrix;
    let mut inv = [[T::zero(); N]; N];
    for (i, row) in inv.iter_mut().enumerate() {
        row[i] = T::one();
    }
    for col in 0..N {
        let mut pivot = col;
        for row in col + 1..N {
            if m[row][col].abs() > m[pivot][col].abs() {
                pivot = row;
            }
        }
        if m[pivot][col].abs() <= threshold {
            return None;
        }
        m.swap(pivot, col);
        inv.swap(pivot, col);
        let p = m[col][col];
        for k in 0..N {
            m[col][k] /= p;
            inv[col][k] /= p;
        }
        for row in 0..N {
            if row != col {
                let factor = m[row][col];
                for k in 0..N {
                    let a = m[col][k];
                    let b = inv[col][k];
                    m[row][k] -= factor * a;
                    inv[row][k] -= factor * b;
                }
            }
        }
    }
    Some(inv)
}

/// The Gram matrix `JT JT^T`
pub(crate) fn gram<T: RealScalar, const D: usize, const G: usize>(
    jt: &[[T; G]; D],
) -> [[T; D]; D] {
    let mut g = [[T::zero(); D]; D];
    for (i, row) in g.iter_mut().enumerate() {
        for (j, entry) in row.iter_mut().enumerate() {
            *entry = jt[i].iter().zip(&jt[j]).map(|(a, b)| *a * *b).sum();
        }
    }
    g
}

/// The integration element of a map with transposed Jacobian `jt`
///
/// This is `|det(J)|` if `D == G` and `sqrt(det(J^T J))` otherwise.
pub(crate) fn integration_element<T: RealScalar, const D: usize, const G: usize>(
    jt: &[[T; G]; D],
) -> T {
    if D == G {
        let mut square = [[T::zero(); D]; D];
        for (s, j) in square.iter_mut().zip(jt) {
            s.copy_from_slice(&j[..D]);
        }
        determinant(&square).abs()
    } else if D > 0 && D + 1 == G && G <= 3 {
        let mut jacobian = [T::zero(); 6];
        flatten(jt, &mut jacobian[..G * D]);
        let mut normal = [T::zero(); 3];
        cross(&jacobian[..G * D], &mut normal[..G]);
        norm(&normal[..G])
    } else {
        determinant(&gram(jt)).max(T::zero()).sqrt()
    }
}

/// The (pseudo-)inverse transposed Jacobian `JT^T (JT JT^T)^-1`
///
/// Returns `None` if the Jacobian does not have full rank.
pub(crate) fn pseudo_inverse_transposed<T: RealScalar, const D: usize, const G: usize>(
    jt: &[[T; G]; D],
) -> Option<[[T; D]; G]> {
    let gram_inverse = inverse(&gram(jt))?;
    let mut jit = [[T::zero(); D]; G];
    for (g, row) in jit.iter_mut().enumerate() {
        for (k, entry) in row.iter_mut().enumerate() {
            *entry = (0..D).map(|l| jt[l][g] * gram_inverse[l][k]).sum();
        }
    }
    Some(jit)
}
