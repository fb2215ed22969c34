use monod_core::State;

/// Time, biomass, and substrate sequences indexed in lockstep.
///
/// Built once by an integrator and read-only afterwards. All three sequences
/// always have the same length, and a trajectory returned by a solver holds at
/// least the initial point.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    time: Vec<f64>,
    biomass: Vec<f64>,
    substrate: Vec<f64>,
}

impl Trajectory {
    /// Creates an empty trajectory with room for `points` entries.
    pub(crate) fn with_capacity(points: usize) -> Self {
        Self {
            time: Vec::with_capacity(points),
            biomass: Vec::with_capacity(points),
            substrate: Vec::with_capacity(points),
        }
    }

    /// Appends a point to all three sequences.
    pub(crate) fn push(&mut self, time: f64, state: State) {
        self.time.push(time);
        self.biomass.push(state.biomass);
        self.substrate.push(state.substrate);
    }

    /// Time points, starting at zero.
    #[must_use]
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Biomass concentration at each time point.
    #[must_use]
    pub fn biomass(&self) -> &[f64] {
        &self.biomass
    }

    /// Substrate concentration at each time point.
    #[must_use]
    pub fn substrate(&self) -> &[f64] {
        &self.substrate
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Returns the state at `index`, if present.
    #[must_use]
    pub fn state(&self, index: usize) -> Option<State> {
        Some(State::new(
            *self.biomass.get(index)?,
            *self.substrate.get(index)?,
        ))
    }

    /// Returns the final state, if any.
    #[must_use]
    pub fn last(&self) -> Option<State> {
        self.len().checked_sub(1).and_then(|index| self.state(index))
    }

    /// Iterates over `(time, state)` pairs in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, State)> + '_ {
        self.time
            .iter()
            .zip(self.biomass.iter().zip(&self.substrate))
            .map(|(&t, (&x, &s))| (t, State::new(x, s)))
    }

    /// Consumes the trajectory and returns `(time, biomass, substrate)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.time, self.biomass, self.substrate)
    }
}
