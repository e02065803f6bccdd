//! Triangular membership: rises from 0 at `a` to 1 at `b`, falls back to 0 at `c`.

/// Parameters `(a, b, c)`, intended `a <= b <= c`. Ordering is not checked;
/// parameters are expected to be finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Triangle {
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Degree of membership of `x`, always in `[0, 1]`.
    ///
    /// Shoulders (`a == b` or `b == c`) need no special case: the zero-width
    /// edge's open interval is empty, so the shared foot scores 0 and the
    /// degree approaches 1 just inside it. NaN falls through every comparison
    /// and yields 0.
    pub fn degree(&self, x: f64) -> f64 {
        let Self { a, b, c } = *self;

        if x <= a || x >= c {
            0.0
        } else if a < x && x < b {
            ratio(x - a, b - a, || (x / 2.0 - a / 2.0) / (b / 2.0 - a / 2.0))
        } else if b <= x && x < c {
            ratio(c - x, c - b, || (c / 2.0 - x / 2.0) / (c / 2.0 - b / 2.0))
        } else {
            0.0
        }
    }
}

/// Distance over edge width. When the width overflows, `halved` recomputes
/// the same ratio from halved operands.
fn ratio(distance: f64, width: f64, halved: impl FnOnce() -> f64) -> f64 {
    if width.is_finite() {
        distance / width
    } else {
        halved()
    }
}

/// Free-standing form of [`Triangle::degree`].
pub fn triangular(x: f64, a: f64, b: f64, c: f64) -> f64 {
    Triangle::new(a, b, c).degree(x)
}
