/// A trait for types that can be stepped using their derivative.
///
/// Implementing this trait lets the explicit integrator advance the type via
/// `value + derivative * delta`, where the derivative is taken with respect to
/// `Delta`. For batch growth `Delta` is time in the same unit as the growth
/// rate's reciprocal.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Concentration(f64);

    impl StepIntegrable<f64> for Concentration {
        type Derivative = f64;

        fn step(&self, derivative: f64, delta: f64) -> Self {
            Concentration(self.0 + derivative * delta)
        }
    }

    #[test]
    fn steps_by_derivative_times_delta() {
        let c = Concentration(1.0);

        let next: Concentration = c.step(-0.5, 0.5);

        assert_eq!(next, Concentration(0.75));
    }

    #[test]
    fn alias_names_the_derivative() {
        let rate: DerivativeOf<Concentration, f64> = 2.0;

        assert_eq!(Concentration(0.0).step(rate, 0.25), Concentration(0.5));
    }
}
