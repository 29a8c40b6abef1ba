/// Cross-check `quad_roots` against `roots::find_roots_quadratic`, and sweep residuals.
#[cfg(test)]
mod tests {
    use itertools::iproduct;
    use log::debug;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use roots::{find_roots_quadratic, Roots};
    use test_log::test;

    use crate::math::{complex::Complex, quadratic::{quad_roots, Quadratic}};

    static VALS: [ f64; 7 ] = [ -10., -1., -0.1, 0., 0.1, 1., 10., ];

    fn reference_reals(a: f64, b: f64, c: f64) -> Vec<f64> {
        match find_roots_quadratic(a, b, c) {
            Roots::No(_) => vec![],
            Roots::One([ r ]) => vec![ r, r ],
            Roots::Two([ r0, r1 ]) => vec![ r0, r1 ],
            other => panic!("quadratic {:?} returned {:?}", (a, b, c), other),
        }
    }

    fn check_residual(eq: Quadratic, root: Complex<f64>) {
        let Quadratic { a, b, c } = eq;
        let r = root.norm();
        // Scale of the largest term evaluated at this root
        let scale = a.abs() * r * r + b.abs() * r + c.abs();
        let residual = eq.eval(root).norm();
        assert!(
            residual <= 1e-9 * scale,
            "{:?}: root {} has residual {} (scale {})", eq, root, residual, scale,
        );
    }

    #[test]
    fn sweep_reference() {
        for (a, b, c) in iproduct!(VALS, VALS, VALS) {
            if a == 0. {
                continue;
            }
            let eq = Quadratic::new(a, b, c);
            let (r1, r2) = quad_roots(a, b, c).unwrap();
            let expected = reference_reals(a, b, c);
            debug!("{:?}: ({}, {}) vs {:?}", eq, r1, r2, expected);
            if expected.is_empty() {
                assert!(eq.discriminant() < 0.);
                assert!(r1.im != 0. && r2.im != 0., "{:?}: ({}, {})", eq, r1, r2);
                assert_relative_eq!(r1.conj(), r2);
            } else {
                assert_eq!(r1.im, 0.);
                assert_eq!(r2.im, 0.);
                let mut actual = vec![ r1.re, r2.re ];
                actual.sort_by(|l, r| l.total_cmp(r));
                for (actual, expected) in actual.into_iter().zip(expected) {
                    assert_relative_eq!(actual, expected, max_relative = 1e-9, epsilon = 1e-9);
                }
            }
            check_residual(eq, r1);
            check_residual(eq, r2);
        }
    }

    #[test]
    fn sweep_random() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..1000 {
            let eq = Quadratic::new(
                rng.gen_range(-100. ..100.),
                rng.gen_range(-100. ..100.),
                rng.gen_range(-100. ..100.),
            );
            if eq.a == 0. {
                continue;
            }
            let (r1, r2) = eq.roots().unwrap();
            check_residual(eq, r1);
            check_residual(eq, r2);
        }
    }

    #[test]
    fn from_roots() {
        // (x - r0)(x - r1) = x² - (r0 + r1)x + r0·r1
        for (r0, r1) in iproduct!(VALS, VALS) {
            let (x1, x2) = quad_roots(1., -(r0 + r1), r0 * r1).unwrap();
            let (lo, hi) = if r0 < r1 { (r0, r1) } else { (r1, r0) };
            assert_relative_eq!(x1, Complex::re(hi), max_relative = 1e-9, epsilon = 1e-9);
            assert_relative_eq!(x2, Complex::re(lo), max_relative = 1e-9, epsilon = 1e-9);
        }
    }
}
