use std::fmt;

/// A closed integration sub-domain `[a, b]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub a: f64,
    pub b: f64,
}

impl Interval {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    pub fn width(&self) -> f64 {
        self.b - self.a
    }

    pub fn midpoint(&self) -> f64 {
        (self.a + self.b) / 2.
    }

    /// Splits the interval at its midpoint.
    pub fn bisect(&self) -> (Interval, Interval) {
        let c = self.midpoint();
        (Interval::new(self.a, c), Interval::new(c, self.b))
    }

    /// Finite bounds with `a < b` whose width and midpoint are also finite.
    pub fn is_valid(&self) -> bool {
        self.a.is_finite()
            && self.b.is_finite()
            && self.a < self.b
            && self.width().is_finite()
            && self.midpoint().is_finite()
    }
}

impl From<(f64, f64)> for Interval {
    fn from((a, b): (f64, f64)) -> Self {
        Interval { a, b }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn test_bisect_shares_midpoint() {
        let (left, right) = Interval::new(1., 3.).bisect();

        assert_eq!(left, Interval::new(1., 2.));
        assert_eq!(right, Interval::new(2., 3.));
        assert_relative_eq!(left.width() + right.width(), 2.);
    }

    #[test]
    fn test_validity() {
        assert!(Interval::new(0., 1.).is_valid());
        assert!(!Interval::new(1., 1.).is_valid());
        assert!(!Interval::new(2., 1.).is_valid());
        assert!(!Interval::new(0., f64::INFINITY).is_valid());
        assert!(!Interval::new(f64::NAN, 1.).is_valid());
        assert!(!Interval::new(-1.5e308, 1.5e308).is_valid());
        assert!(!Interval::new(1e308, f64::MAX).is_valid());
    }
}
