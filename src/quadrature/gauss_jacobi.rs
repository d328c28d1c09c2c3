//! Gauss-Jacobi quadrature on the interval [0, 1]
//!
//! A rule with `m` points integrates `f(x) (1 - x)^alpha` exactly for every polynomial `f` of
//! degree at most `2m - 1`. The points are the roots of the Jacobi polynomial
//! `P_m^(alpha, 0)`, found by Newton's method with deflation of the roots already found.
use log::warn;

/// The largest number of points of a one-dimensional rule
pub const MAX_POINTS: usize = 30;

/// The highest order of a one-dimensional rule
pub const MAX_ORDER: usize = 2 * MAX_POINTS - 1;

const MAX_NEWTON_ITERATIONS: usize = 100;

/// The number of points needed to integrate polynomials of degree `order` exactly
pub fn npoints_for_order(order: usize) -> usize {
    order / 2 + 1
}

/// The order of a rule with `npoints` points
pub fn order_for_npoints(npoints: usize) -> usize {
    2 * npoints - 1
}

/// Evaluate the Jacobi polynomial `P_n^(a, 0)` and its derivative on [-1, 1]
fn jacobi_polynomial(n: usize, a: f64, x: f64) -> (f64, f64) {
    if n == 0 {
        return (1.0, 0.0);
    }
    let mut p0 = 1.0;
    let mut d0 = 0.0;
    let mut p1 = ((a + 2.0) * x + a) / 2.0;
    let mut d1 = (a + 2.0) / 2.0;
    for k in 2..=n {
        let k = k as f64;
        let s = 2.0 * k + a;
        let den = 2.0 * k * (k + a) * (s - 2.0);
        let c1 = (s - 1.0) * s * (s - 2.0) / den;
        let c2 = (s - 1.0) * a * a / den;
        let c3 = 2.0 * (k + a - 1.0) * (k - 1.0) * s / den;
        let p2 = (c1 * x + c2) * p1 - c3 * p0;
        let d2 = c1 * p1 + (c1 * x + c2) * d1 - c3 * d0;
        p0 = p1;
        p1 = p2;
        d0 = d1;
        d1 = d2;
    }
    (p1, d1)
}

/// The points and weights of the Gauss-Jacobi rule with `npoints` points for the weight
/// function `(1 - x)^alpha` on [0, 1]
///
/// The points are in increasing order.
pub fn gauss_jacobi(npoints: usize, alpha: usize) -> (Vec<f64>, Vec<f64>) {
    assert!(npoints > 0, "A quadrature rule must have at least one point");
    assert!(
        npoints <= MAX_POINTS,
        "Gauss-Jacobi rules are available with at most {MAX_POINTS} points"
    );
    let a = alpha as f64;
    let m = npoints as f64;

    let mut points = Vec::with_capacity(npoints);
    for k in 0..npoints {
        let mut x = -(std::f64::consts::PI * (2 * k + 1) as f64 / (2.0 * m)).cos();
        if let Some(previous) = points.last() {
            x = 0.5 * (x + previous);
        }
        let mut converged = false;
        for _ in 0..MAX_NEWTON_ITERATIONS {
            let deflation = points.iter().map(|p: &f64| 1.0 / (x - p)).sum::<f64>();
            let (f, df) = jacobi_polynomial(npoints, a, x);
            let delta = f / (df - f * deflation);
            x -= delta;
            if delta.abs() < 4.0 * f64::EPSILON {
                converged = true;
                break;
            }
        }
        if !converged {
            warn!("Root {k} of the Gauss-Jacobi rule with {npoints} points and alpha={alpha} did not converge");
        }
        points.push(x);
    }

    // Weights on [-1, 1] are 2^(a+1) / ((1 - x^2) P'(x)^2); mapping to [0, 1] divides them by 2^(a+1)
    let weights = points
        .iter()
        .map(|x| {
            let (_, df) = jacobi_polynomial(npoints, a, *x);
            1.0 / ((1.0 - x * x) * df * df)
        })
        .collect();
    let points = points.iter().map(|x| (1.0 + x) / 2.0).collect();
    (points, weights)
}

/// The points and weights of the Gauss-Legendre rule with `npoints` points on [0, 1]
pub fn gauss_legendre(npoints: usize) -> (Vec<f64>, Vec<f64>) {
    gauss_jacobi(npoints, 0)
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    /// The integral of x^d (1-x)^a over [0, 1]
    fn beta(d: usize, a: usize) -> f64 {
        let mut value = 1.0 / (d + a + 1) as f64;
        for i in 1..=a {
            value *= i as f64 / (d + i) as f64;
        }
        value
    }

    #[test]
    fn test_gauss_legendre_two_points() {
        let (p, w) = gauss_legendre(2);
        assert_relative_eq!(p[0], 0.5 - 0.5 / 3.0f64.sqrt(), epsilon = 1e-15);
        assert_relative_eq!(p[1], 0.5 + 0.5 / 3.0f64.sqrt(), epsilon = 1e-15);
        assert_relative_eq!(w[0], 0.5, epsilon = 1e-15);
        assert_relative_eq!(w[1], 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_weight_sums() {
        for npoints in 1..=MAX_POINTS {
            for alpha in 0..3 {
                let (_, w) = gauss_jacobi(npoints, alpha);
                assert_relative_eq!(
                    w.iter().sum::<f64>(),
                    1.0 / (alpha + 1) as f64,
                    epsilon = 1e-14
                );
            }
        }
    }

    #[test]
    fn test_exactness() {
        for npoints in [1, 2, 3, 5, 8, 15, MAX_POINTS] {
            for alpha in 0..3 {
                let (p, w) = gauss_jacobi(npoints, alpha);
                for d in 0..=order_for_npoints(npoints) {
                    let integral = p
                        .iter()
                        .zip(&w)
                        .map(|(x, wi)| wi * x.powi(d as i32))
                        .sum::<f64>();
                    assert_relative_eq!(integral, beta(d, alpha), epsilon = 1e-14);
                }
            }
        }
    }

    #[test]
    fn test_points_are_ordered_and_inside() {
        for alpha in 0..3 {
            let (p, _) = gauss_jacobi(MAX_POINTS, alpha);
            assert!(p[0] > 0.0);
            assert!(p[MAX_POINTS - 1] < 1.0);
            for i in 1..MAX_POINTS {
                assert!(p[i] > p[i - 1]);
            }
        }
    }

    #[test]
    fn test_npoints_for_order() {
        for order in 0..MAX_ORDER {
            assert!(order_for_npoints(npoints_for_order(order)) >= order);
        }
        assert_eq!(npoints_for_order(MAX_ORDER), MAX_POINTS);
    }
}
