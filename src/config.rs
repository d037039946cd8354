//! Runtime configuration.
//!
//! The potential kind and composition scheme are ordinary runtime values
//! rather than compile-time constants: a small enum for "which algorithm"
//! plus a plain struct of sizes for "how much", both constructed like any
//! other value and swappable between runs without a rebuild.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which potential model to evaluate the gradient and rim distance with.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PotentialKind {
    /// Closed-form 2D potential: `s = -1 / (1 - d)`.
    TwoD,
    /// Truncated series for the 3D potential, summing `n_pot` terms.
    ThreeD {
        /// Number of terms `N` in the truncated series, `N >= 1`.
        n_pot: usize,
    },
}

/// A symmetric composition scheme, parametrized by its stage coefficients
/// `gamma_1 .. gamma_s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CompositionScheme {
    /// Single-stage (order 2, the bare Strang split).
    P2S1,
    /// Triple jump (order 4, 3 stages).
    P4S3,
    /// Suzuki fractal (order 4, 5 stages).
    P4S5,
    /// Kahan & Li 1997 (order 6, 9 stages).
    P6S9,
    /// Suzuki & Umeno 1993 (order 8, 15 stages).
    P8S15,
}

/// Stage coefficients for the triple-jump scheme (Suzuki 1990), order 4.
const GAMMA_P4S3: [f64; 3] = {
    let x = 1.351_207_191_959_657_6;
    [x, -1.702_414_383_919_315_2, x]
};

/// Stage coefficients for Suzuki's fractal scheme, order 4.
const GAMMA_P4S5: [f64; 5] = {
    let x = 0.414_490_771_794_375_9;
    let y = -0.657_963_087_177_503_6;
    [x, x, y, x, x]
};

/// Stage coefficients for the Kahan & Li (1997) scheme, order 6.
const GAMMA_P6S9: [f64; 9] = [
    0.392_161_444_007_314_139_28,
    0.332_599_136_789_359_438_60,
    -0.706_246_172_557_639_359_81,
    0.082_213_596_293_550_800_230,
    0.798_543_990_934_829_963_40,
    0.082_213_596_293_550_800_230,
    -0.706_246_172_557_639_359_81,
    0.332_599_136_789_359_438_60,
    0.392_161_444_007_314_139_28,
];

/// Stage coefficients for the Suzuki & Umeno (1993) scheme, order 8.
const GAMMA_P8S15: [f64; 15] = [
    0.741_670_364_350_612_953_45,
    -0.409_100_825_800_031_594_00,
    0.190_754_710_296_238_379_95,
    -0.573_862_471_116_082_266_66,
    0.299_064_181_303_655_923_84,
    0.334_624_918_245_298_183_78,
    0.315_293_092_396_766_596_63,
    -0.796_887_939_352_916_354_02,
    0.315_293_092_396_766_596_63,
    0.334_624_918_245_298_183_78,
    0.299_064_181_303_655_923_84,
    -0.573_862_471_116_082_266_66,
    0.190_754_710_296_238_379_95,
    -0.409_100_825_800_031_594_00,
    0.741_670_364_350_612_953_45,
];

const GAMMA_P2S1: [f64; 1] = [1.0];

impl CompositionScheme {
    /// Stage coefficients `gamma_1 .. gamma_s` for this scheme, in order.
    pub fn gammas(&self) -> &'static [f64] {
        match self {
            CompositionScheme::P2S1 => &GAMMA_P2S1,
            CompositionScheme::P4S3 => &GAMMA_P4S3,
            CompositionScheme::P4S5 => &GAMMA_P4S5,
            CompositionScheme::P6S9 => &GAMMA_P6S9,
            CompositionScheme::P8S15 => &GAMMA_P8S15,
        }
    }

    /// Number of stages `s`.
    #[inline]
    pub fn n_stages(&self) -> usize {
        self.gammas().len()
    }

    /// Nominal order of accuracy of the composed step.
    pub fn order(&self) -> u32 {
        match self {
            CompositionScheme::P2S1 => 2,
            CompositionScheme::P4S3 | CompositionScheme::P4S5 => 4,
            CompositionScheme::P6S9 => 6,
            CompositionScheme::P8S15 => 8,
        }
    }
}

/// Runtime configuration consumed by the integrator, missile facade, and
/// analytic helpers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// `K`, the number of phase-space samples written per
    /// [`crate::missile::Missile::propagate`] call.
    pub trajectory_size: usize,
    /// `S`, the number of composed steps per call to
    /// [`crate::integrator::integration_loop`].
    pub int_steps: usize,
    /// `delta`, the rim radius in radians. Propagation stops once a missile
    /// comes within this angular distance of any planet.
    pub min_dist: f64,
    /// Which potential model to use.
    pub potential: PotentialKind,
    /// Which composition scheme to use.
    pub composition: CompositionScheme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trajectory_size: 64,
            int_steps: 8,
            min_dist: 0.05,
            potential: PotentialKind::TwoD,
            composition: CompositionScheme::P4S3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gamma_tables_are_symmetric() {
        for scheme in [
            CompositionScheme::P2S1,
            CompositionScheme::P4S3,
            CompositionScheme::P4S5,
            CompositionScheme::P6S9,
            CompositionScheme::P8S15,
        ] {
            let g = scheme.gammas();
            for i in 0..g.len() {
                assert!((g[i] - g[g.len() - 1 - i]).abs() < 1e-12, "{scheme:?} not symmetric at {i}");
            }
        }
    }

    #[test]
    fn gamma_tables_sum_to_one() {
        // A symmetric composition's stage weights must sum to 1 so the
        // composed step reproduces the base step's total time h.
        for scheme in [
            CompositionScheme::P2S1,
            CompositionScheme::P4S3,
            CompositionScheme::P4S5,
            CompositionScheme::P6S9,
            CompositionScheme::P8S15,
        ] {
            let sum: f64 = scheme.gammas().iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "{scheme:?} gammas sum to {sum}");
        }
    }

    #[test]
    fn order_matches_each_schemes_documented_value() {
        assert_eq!(CompositionScheme::P2S1.order(), 2);
        assert_eq!(CompositionScheme::P4S3.order(), 4);
        assert_eq!(CompositionScheme::P4S5.order(), 4);
        assert_eq!(CompositionScheme::P6S9.order(), 6);
        assert_eq!(CompositionScheme::P8S15.order(), 8);
    }

    #[test]
    fn n_stages_matches_gamma_table_length() {
        for scheme in [
            CompositionScheme::P2S1,
            CompositionScheme::P4S3,
            CompositionScheme::P4S5,
            CompositionScheme::P6S9,
            CompositionScheme::P8S15,
        ] {
            assert_eq!(scheme.n_stages(), scheme.gammas().len());
        }
    }

    #[test]
    fn default_config_is_well_formed() {
        let config = Config::default();
        assert!(config.trajectory_size >= 1);
        assert!(config.int_steps >= 1);
        assert!(config.min_dist > 0.0);
    }
}
