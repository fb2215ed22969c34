use thiserror::Error;

/// Errors that can occur when validating a [`TimeGrid`].
///
/// Checks run in declaration order: step size, then horizon, then the
/// resulting number of points.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ArgumentError {
    #[error("step_size must be finite and strictly positive, got {step_size}")]
    StepSize { step_size: f64 },

    #[error("horizon must be finite and strictly positive, got {horizon}")]
    Horizon { horizon: f64 },

    #[error("horizon {horizon} is shorter than one step of {step_size}")]
    NoSteps { horizon: f64, step_size: f64 },

    #[error("horizon {horizon} with step_size {step_size} needs more points than can be stored")]
    TooManySteps { horizon: f64, step_size: f64 },
}

/// Evenly spaced time points starting at zero.
///
/// The number of points is `floor(horizon / step_size)`. Any trailing partial
/// interval is dropped, so the last point is `(points - 1) * step_size`, which
/// lies strictly before `horizon`. The grid never shortens the final step or
/// adjusts the step size to land on the horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    horizon: f64,
    step_size: f64,
    points: usize,
}

impl TimeGrid {
    /// Largest number of points a trajectory sequence can hold.
    const MAX_POINTS: usize = isize::MAX as usize / size_of::<f64>();

    /// Creates a validated time grid.
    ///
    /// # Errors
    ///
    /// Returns an [`ArgumentError`] if `step_size` or `horizon` is not finite
    /// and strictly positive, or if `step_size` is longer than `horizon`.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn new(horizon: f64, step_size: f64) -> Result<Self, ArgumentError> {
        if !step_size.is_finite() || step_size <= 0.0 {
            return Err(ArgumentError::StepSize { step_size });
        }
        if !horizon.is_finite() || horizon <= 0.0 {
            return Err(ArgumentError::Horizon { horizon });
        }

        let count = (horizon / step_size).floor();
        if count < 1.0 {
            return Err(ArgumentError::NoSteps { horizon, step_size });
        }
        if count > Self::MAX_POINTS as f64 {
            return Err(ArgumentError::TooManySteps { horizon, step_size });
        }

        Ok(Self {
            horizon,
            step_size,
            points: count as usize,
        })
    }

    /// Returns the requested horizon.
    #[must_use]
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Returns the step size.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Returns the number of time points, always at least one.
    #[must_use]
    pub fn points(&self) -> usize {
        self.points
    }

    /// Returns the time of point `index`, computed as `index * step_size`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn time(&self, index: usize) -> f64 {
        index as f64 * self.step_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_whole_steps() {
        let grid = TimeGrid::new(1.0, 0.1).unwrap();

        assert_eq!(grid.points(), 10);
        assert_eq!(grid.horizon(), 1.0);
        assert_eq!(grid.step_size(), 0.1);
    }

    #[test]
    fn drops_trailing_partial_interval() {
        let grid = TimeGrid::new(1.0, 0.3).unwrap();

        assert_eq!(grid.points(), 3);
        assert!(grid.time(grid.points() - 1) < grid.horizon());
    }

    #[test]
    fn truncates_inexact_quotients() {
        // 0.3 / 0.1 evaluates to 2.9999999999999996.
        let grid = TimeGrid::new(0.3, 0.1).unwrap();

        assert_eq!(grid.points(), 2);
    }

    #[test]
    fn single_point_when_step_equals_horizon() {
        let grid = TimeGrid::new(2.5, 2.5).unwrap();

        assert_eq!(grid.points(), 1);
        assert_eq!(grid.time(0), 0.0);
    }

    #[test]
    fn times_are_index_multiples() {
        let grid = TimeGrid::new(1.0, 0.1).unwrap();

        for i in 0..grid.points() {
            #[allow(clippy::cast_precision_loss)]
            let expected = i as f64 * 0.1;
            assert_eq!(grid.time(i), expected);
        }
    }

    #[test]
    fn rejects_non_positive_step_size() {
        assert_eq!(
            TimeGrid::new(1.0, 0.0),
            Err(ArgumentError::StepSize { step_size: 0.0 })
        );
        assert_eq!(
            TimeGrid::new(1.0, -0.1),
            Err(ArgumentError::StepSize { step_size: -0.1 })
        );
    }

    #[test]
    fn rejects_non_finite_step_size() {
        assert!(matches!(
            TimeGrid::new(1.0, f64::NAN),
            Err(ArgumentError::StepSize { .. })
        ));
        assert!(matches!(
            TimeGrid::new(1.0, f64::INFINITY),
            Err(ArgumentError::StepSize { .. })
        ));
    }

    #[test]
    fn rejects_non_positive_horizon() {
        assert_eq!(
            TimeGrid::new(0.0, 0.1),
            Err(ArgumentError::Horizon { horizon: 0.0 })
        );
        assert_eq!(
            TimeGrid::new(-5.0, 0.1),
            Err(ArgumentError::Horizon { horizon: -5.0 })
        );
        assert!(matches!(
            TimeGrid::new(f64::INFINITY, 0.1),
            Err(ArgumentError::Horizon { .. })
        ));
    }

    #[test]
    fn rejects_step_longer_than_horizon() {
        assert_eq!(
            TimeGrid::new(0.05, 0.1),
            Err(ArgumentError::NoSteps {
                horizon: 0.05,
                step_size: 0.1
            })
        );
    }

    #[test]
    fn step_size_is_checked_before_horizon() {
        assert!(matches!(
            TimeGrid::new(-1.0, -1.0),
            Err(ArgumentError::StepSize { .. })
        ));
        assert!(matches!(
            TimeGrid::new(0.0, 0.0),
            Err(ArgumentError::StepSize { .. })
        ));
    }

    #[test]
    fn rejects_unrepresentable_point_counts() {
        assert!(matches!(
            TimeGrid::new(1e300, 1e-300),
            Err(ArgumentError::TooManySteps { .. })
        ));
    }
}
