//! Small-signal formulas for single-transistor BJT amplifiers.
//!
//! Every formula is built on the hybrid-π input model of the transistor:
//!
//! ```text
//! r_e  = V_T / I_EQ
//! r_be = r_bb' + (β + 1) · r_e
//! ```
//!
//! where `V_T` is the thermal voltage and `r_bb'` the base spreading
//! resistance. Both constants live in [`SmallSignalModel`].
//!
//! # Topologies
//!
//! | Topology | Gain | Input | Output |
//! |---|---|---|---|
//! | Common emitter | [`common_emitter_gain`] | [`common_emitter_input_resistance`] | [`common_emitter_output_resistance`] |
//! | Common collector | [`common_collector_gain`] | [`common_collector_input_resistance`] | [`common_collector_output_resistance`] |
//! | Common base | [`common_base_gain`] | [`common_base_input_resistance`] | [`common_base_output_resistance`] |
//!
//! # Arithmetic
//!
//! Nothing here is guarded. A zero quiescent current makes `r_e` infinite
//! and a `0 ∥ 0` combination yields NaN; both propagate as IEEE-754 values.

/// Thermal voltage at room temperature, in volts.
pub const DEFAULT_THERMAL_VOLTAGE: f64 = 26e-3;

/// Base spreading resistance `r_bb'` of a typical small-signal BJT, in ohms.
pub const DEFAULT_BASE_SPREADING_RESISTANCE: f64 = 200.0;

/// Physical constants of the small-signal transistor model.
///
/// # Examples
/// ```
/// use u_labcalc::amplifier::SmallSignalModel;
/// let model = SmallSignalModel::default();
/// // r_e = 26 mV / 1 mA = 26 Ω
/// assert!((model.emitter_resistance(1e-3) - 26.0).abs() < 1e-12);
/// // r_be = 200 + 51 × 26 = 1526 Ω
/// assert!((model.base_emitter_resistance(50.0, 1e-3) - 1526.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmallSignalModel {
    /// Thermal voltage `V_T` (V). Default: 26e-3.
    pub thermal_voltage: f64,
    /// Base spreading resistance `r_bb'` (Ω). Default: 200.
    pub base_spreading_resistance: f64,
}

impl SmallSignalModel {
    /// Creates a model with the room-temperature defaults.
    pub fn new() -> Self {
        Self {
            thermal_voltage: DEFAULT_THERMAL_VOLTAGE,
            base_spreading_resistance: DEFAULT_BASE_SPREADING_RESISTANCE,
        }
    }

    pub fn with_thermal_voltage(mut self, thermal_voltage: f64) -> Self {
        self.thermal_voltage = thermal_voltage;
        self
    }

    pub fn with_base_spreading_resistance(mut self, r_bb: f64) -> Self {
        self.base_spreading_resistance = r_bb;
        self
    }

    /// Dynamic emitter resistance `r_e = V_T / I_EQ`.
    pub fn emitter_resistance(&self, i_eq: f64) -> f64 {
        self.thermal_voltage / i_eq
    }

    /// Base-emitter input resistance `r_be = r_bb' + (β + 1) · r_e`.
    pub fn base_emitter_resistance(&self, beta: f64, i_eq: f64) -> f64 {
        self.base_spreading_resistance + (beta + 1.0) * self.emitter_resistance(i_eq)
    }
}

impl Default for SmallSignalModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Two resistances in parallel, `x·y / (x + y)`.
///
/// An infinite `y` stands for an open circuit (no load, ideal source) and
/// returns `x` unchanged instead of evaluating `∞/∞`.
///
/// # Examples
/// ```
/// use u_labcalc::amplifier::parallel;
/// assert_eq!(parallel(3000.0, 6000.0), 2000.0);
/// assert_eq!(parallel(3000.0, f64::INFINITY), 3000.0);
/// ```
pub fn parallel(x: f64, y: f64) -> f64 {
    if y == f64::INFINITY {
        x
    } else {
        (x * y) / (x + y)
    }
}

// ============================================================================
// Common emitter
// ============================================================================

/// Voltage gain of a common-emitter stage.
///
/// ```text
/// A_v = −β · (R_C ∥ R_L) / r_be
/// ```
///
/// The sign is the 180° phase inversion of the stage. Pass
/// `f64::INFINITY` for `r_l` when the output is unloaded.
///
/// # Examples
/// ```
/// use u_labcalc::amplifier::{common_emitter_gain, SmallSignalModel};
/// let model = SmallSignalModel::default();
/// let a_v = common_emitter_gain(50.0, 3000.0, 3000.0, 1e-3, &model);
/// // −50 × 1500 / 1526
/// assert!((a_v + 49.148099606815203).abs() < 1e-9);
/// ```
pub fn common_emitter_gain(
    beta: f64,
    r_c: f64,
    r_l: f64,
    i_eq: f64,
    model: &SmallSignalModel,
) -> f64 {
    let r_be = model.base_emitter_resistance(beta, i_eq);
    -beta * parallel(r_c, r_l) / r_be
}

/// Input resistance of a common-emitter stage, `R_B ∥ r_be`.
pub fn common_emitter_input_resistance(
    beta: f64,
    r_b: f64,
    i_eq: f64,
    model: &SmallSignalModel,
) -> f64 {
    parallel(r_b, model.base_emitter_resistance(beta, i_eq))
}

/// Output resistance of a common-emitter stage.
///
/// The collector current source is ideal in this model, so the output
/// sees only `R_C`.
pub fn common_emitter_output_resistance(r_c: f64) -> f64 {
    r_c
}

// ============================================================================
// Common collector (emitter follower)
// ============================================================================

/// Voltage gain of a common-collector stage.
///
/// ```text
/// R'  = R_E ∥ R_L
/// A_v = (1 + β) R' / (r_be + (1 + β) R')
/// ```
///
/// Strictly between 0 and 1 for positive finite resistances.
///
/// # Examples
/// ```
/// use u_labcalc::amplifier::{common_collector_gain, SmallSignalModel};
/// let a_v = common_collector_gain(100.0, 2000.0, 2000.0, 2e-3, &SmallSignalModel::default());
/// assert!(a_v > 0.98 && a_v < 1.0);
/// ```
pub fn common_collector_gain(
    beta: f64,
    r_e: f64,
    r_l: f64,
    i_eq: f64,
    model: &SmallSignalModel,
) -> f64 {
    let r_be = model.base_emitter_resistance(beta, i_eq);
    let follower_load = (1.0 + beta) * parallel(r_e, r_l);
    follower_load / (r_be + follower_load)
}

/// Input resistance of a common-collector stage.
///
/// ```text
/// R_i = R_B ∥ (r_be + (1 + β)(R_E ∥ R_L))
/// ```
pub fn common_collector_input_resistance(
    beta: f64,
    r_e: f64,
    r_b: f64,
    r_l: f64,
    i_eq: f64,
    model: &SmallSignalModel,
) -> f64 {
    let r_be = model.base_emitter_resistance(beta, i_eq);
    let looking_into_base = r_be + (1.0 + beta) * parallel(r_e, r_l);
    parallel(r_b, looking_into_base)
}

/// Output resistance of a common-collector stage.
///
/// ```text
/// R_o = R_E ∥ ((r_be + (R_B ∥ R_S)) / (1 + β))
/// ```
///
/// Pass `f64::INFINITY` for `r_s` to drop the source resistance from the
/// base network.
pub fn common_collector_output_resistance(
    beta: f64,
    r_e: f64,
    r_b: f64,
    r_s: f64,
    i_eq: f64,
    model: &SmallSignalModel,
) -> f64 {
    let r_be = model.base_emitter_resistance(beta, i_eq);
    let looking_into_emitter = (r_be + parallel(r_b, r_s)) / (1.0 + beta);
    parallel(r_e, looking_into_emitter)
}

// ============================================================================
// Common base
// ============================================================================

/// Voltage gain of a common-base stage.
///
/// ```text
/// A_v = β · (R_C ∥ R_L) / r_be
/// ```
///
/// Same magnitude as [`common_emitter_gain`] for identical arguments, with
/// no phase inversion.
pub fn common_base_gain(
    beta: f64,
    r_c: f64,
    r_l: f64,
    i_eq: f64,
    model: &SmallSignalModel,
) -> f64 {
    let r_be = model.base_emitter_resistance(beta, i_eq);
    beta * parallel(r_c, r_l) / r_be
}

/// Input resistance of a common-base stage, `R_E ∥ (r_be / (1 + β))`.
pub fn common_base_input_resistance(
    beta: f64,
    r_e: f64,
    i_eq: f64,
    model: &SmallSignalModel,
) -> f64 {
    parallel(r_e, model.base_emitter_resistance(beta, i_eq) / (1.0 + beta))
}

/// Output resistance of a common-base stage; `R_C` for an ideal current source.
pub fn common_base_output_resistance(r_c: f64) -> f64 {
    r_c
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn common_collector_gain_in_open_unit_interval(
            beta in 1.0_f64..500.0,
            r_e in 10.0_f64..1e5,
            r_l in 10.0_f64..1e6,
            i_eq in 1e-5_f64..0.1,
        ) {
            let a_v = common_collector_gain(beta, r_e, r_l, i_eq, &SmallSignalModel::default());
            prop_assert!(a_v > 0.0 && a_v < 1.0, "A_v = {}", a_v);
        }

        #[test]
        fn common_base_and_emitter_gains_are_opposite(
            beta in 1.0_f64..500.0,
            r_c in 10.0_f64..1e5,
            r_l in 10.0_f64..1e6,
            i_eq in 1e-5_f64..0.1,
        ) {
            let m = SmallSignalModel::default();
            let ce = common_emitter_gain(beta, r_c, r_l, i_eq, &m);
            let cb = common_base_gain(beta, r_c, r_l, i_eq, &m);
            prop_assert!(ce < 0.0);
            prop_assert_eq!(cb, -ce);
        }

        #[test]
        fn parallel_is_below_both_branches(
            x in 1.0_f64..1e6,
            y in 1.0_f64..1e6,
        ) {
            let p = parallel(x, y);
            prop_assert!(p <= x && p <= y);
            prop_assert!((p - parallel(y, x)).abs() < 1e-9 * p);
        }

        #[test]
        fn loading_never_raises_common_emitter_gain(
            beta in 1.0_f64..500.0,
            r_c in 10.0_f64..1e5,
            r_l in 10.0_f64..1e6,
            i_eq in 1e-5_f64..0.1,
        ) {
            let m = SmallSignalModel::default();
            let loaded = common_emitter_gain(beta, r_c, r_l, i_eq, &m).abs();
            let open = common_emitter_gain(beta, r_c, f64::INFINITY, i_eq, &m).abs();
            prop_assert!(loaded <= open);
        }
    }
}
