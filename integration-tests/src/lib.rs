//! Shared fixtures for cross-crate tests.

pub mod reference {
    //! Reference trajectory for `X0 = 0.1`, `S0 = 1.0`, `horizon = 1.0`,
    //! `dt = 0.1` with `mu_max = 0.5` and `k_s = 0.1`, rounded to 12 decimals.

    use monod_core::{MonodParams, State};

    pub const INITIAL: State = State {
        biomass: 0.1,
        substrate: 1.0,
    };
    pub const HORIZON: f64 = 1.0;
    pub const STEP_SIZE: f64 = 0.1;

    pub const TIME: [f64; 10] = [0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9];

    pub const BIOMASS: [f64; 10] = [
        0.1,
        0.104_545_454_545,
        0.109_295_548_849,
        0.114_259_294_373,
        0.119_446_077_777,
        0.124_865_674_044,
        0.130_528_259_73,
        0.136_444_426_298,
        0.142_625_193_468,
        0.149_082_022_501,
    ];

    pub const SUBSTRATE: [f64; 10] = [
        1.0,
        0.995_454_545_455,
        0.990_704_451_151,
        0.985_740_705_627,
        0.980_553_922_223,
        0.975_134_325_956,
        0.969_471_740_27,
        0.963_555_573_702,
        0.957_374_806_532,
        0.950_917_977_499,
    ];

    /// Parameters the reference was generated with.
    #[must_use]
    pub fn params() -> MonodParams {
        MonodParams::default()
    }
}
