use crate::{util::casting::usize_to_f64, ComplexPoly};

impl ComplexPoly {
    /// Derivative
    ///
    /// The derivative of a constant is the constant zero, so the result
    /// always has at least one coefficient.
    ///
    /// ```
    /// use complex_poly::poly;
    ///
    /// assert_eq!(poly![1.0, 2.0, 3.0].derivative(), poly![2.0, 6.0]);
    /// ```
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.degree() == 0 {
            return Self::with_degree(0);
        }
        let coeff = self
            .iter()
            .enumerate()
            .skip(1) // shift degrees down
            .map(|(k, c)| c.scale(usize_to_f64(k)))
            .collect();
        Self::__from_nonempty(coeff)
    }

    /// The `n`-th derivative, `n = 0` returns a copy
    #[must_use]
    pub fn nth_derivative(&self, n: usize) -> Self {
        (0..n).fold(self.clone(), |p, _| p.derivative())
    }
}
