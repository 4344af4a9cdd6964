use crate::interval::Interval;

/// One-shot Simpson's rule on `interval`: `(b - a) / 6 * (f(a) + 4 f(c) + f(b))`.
///
/// Evaluates the integrand exactly three times and is exact for polynomials
/// up to degree three.
pub fn simpson<F>(f: F, interval: Interval) -> f64
where
    F: Fn(f64) -> f64,
{
    let Interval { a, b } = interval;
    let c = interval.midpoint();

    (b - a) / 6. * (f(a) + 4. * f(c) + f(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use peroxide::numerical::integral::newton_cotes_quadrature;
    use std::cell::Cell;

    #[test]
    fn test_simpson_constant() {
        assert_relative_eq!(simpson(|_| 3., Interval::new(0., 4.)), 12.);
    }

    #[test]
    fn test_simpson_exact_for_cubic() {
        let cubic = |x: f64| 2. * x.powi(3) - x.powi(2) + 4. * x - 7.;
        let antiderivative = |x: f64| x.powi(4) / 2. - x.powi(3) / 3. + 2. * x.powi(2) - 7. * x;

        let exact = antiderivative(3.) - antiderivative(-1.);

        assert_relative_eq!(simpson(cubic, Interval::new(-1., 3.)), exact, epsilon = 1e-12);
    }

    #[test]
    fn test_simpson_quartic_has_known_error() {
        // Simpson's error term for x^4 on [0, h] is h^5 / 120.
        let h = 0.5f64;
        let estimate = simpson(|x: f64| x.powi(4), Interval::new(0., h));

        assert_relative_eq!(estimate - h.powi(5) / 5., h.powi(5) / 120., epsilon = 1e-15);
    }

    #[test]
    fn test_simpson_evaluates_three_times() {
        let calls = Cell::new(0);
        simpson(
            |x: f64| {
                calls.set(calls.get() + 1);
                x.sin()
            },
            Interval::new(0., 1.),
        );

        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_simpson_close_to_newton_cotes_on_narrow_interval() {
        let reference = newton_cotes_quadrature(|x: f64| x.exp(), 6, (0., 0.1));
        let estimate = simpson(|x: f64| x.exp(), Interval::new(0., 0.1));

        assert_abs_diff_eq!(estimate, reference, epsilon = 1e-8);
    }
}
