//! Measurement uncertainty for directly measured quantities.
//!
//! Follows the two-component scheme used in teaching labs:
//!
//! - **Type A**: spread of repeated readings, `u_A = t · s / √n`.
//! - **Type B**: instrument limit of error `Δ` treated as a uniform
//!   distribution on `[−Δ, Δ]`, whose standard deviation is `Δ / √3`.
//! - **Combined**: root-sum-square of independent components,
//!   `u = √(u_A² + u_B²)`.

use crate::error::{LabError, Result};
use crate::stats;
use crate::t_table;

/// Type-A uncertainty of repeated readings.
///
/// ```text
/// u_A = t(n, P) · s / √n
/// ```
///
/// Returns `0.0` for fewer than two readings, where no spread exists.
///
/// # Errors
/// [`LabError::UnsupportedParameter`] if the t table has no entry for
/// `(values.len(), confidence)`.
///
/// # Examples
/// ```
/// use u_labcalc::uncertainty::type_a_uncertainty;
/// // s = 2, t(3, 0.683) = 1.32
/// let u_a = type_a_uncertainty(&[2.0, 4.0, 6.0], 4.0, 0.683).unwrap();
/// assert!((u_a - 1.32 * 2.0 / 3f64.sqrt()).abs() < 1e-12);
/// assert_eq!(type_a_uncertainty(&[4.0], 4.0, 0.683).unwrap(), 0.0);
/// ```
pub fn type_a_uncertainty(values: &[f64], mean: f64, confidence: f64) -> Result<f64> {
    let n = values.len();
    if n < 2 {
        return Ok(0.0);
    }
    let s = stats::sample_standard_deviation(values, mean)?;
    let t = t_table::t_value(n, confidence)?;
    Ok(t * s / (n as f64).sqrt())
}

/// Type-B uncertainty from an instrument's limit of error, `Δ / √3`.
pub fn type_b_uncertainty(instrument_uncertainty: f64) -> f64 {
    instrument_uncertainty / 3f64.sqrt()
}

/// Relative uncertainty `u / x`.
///
/// A zero measured value returns `0.0` rather than dividing by zero.
pub fn relative_uncertainty(value: f64, uncertainty: f64) -> f64 {
    if value == 0.0 {
        return 0.0;
    }
    uncertainty / value
}

/// Root-sum-square of two independent uncertainty components.
///
/// # Examples
/// ```
/// use u_labcalc::uncertainty::combined_uncertainty;
/// assert_eq!(combined_uncertainty(3.0, 4.0), 5.0);
/// ```
pub fn combined_uncertainty(type_a: f64, type_b: f64) -> f64 {
    type_a.hypot(type_b)
}

// ============================================================================
// Type-B source
// ============================================================================

/// Where the Type-B component of a combined uncertainty comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeBSource {
    /// An already computed Type-B uncertainty.
    Direct(f64),
    /// An instrument limit of error, converted with [`type_b_uncertainty`].
    Instrument(f64),
}

impl TypeBSource {
    /// Builds a source from two optional inputs, exactly one of which must
    /// be present. A present zero counts as given.
    ///
    /// # Errors
    /// [`LabError::ConflictingArguments`] if both or neither are present.
    ///
    /// # Examples
    /// ```
    /// use u_labcalc::uncertainty::TypeBSource;
    /// let instrument = TypeBSource::from_options(None, Some(0.02)).unwrap();
    /// assert_eq!(instrument, TypeBSource::Instrument(0.02));
    /// let zero = TypeBSource::from_options(Some(0.0), None).unwrap();
    /// assert_eq!(zero, TypeBSource::Direct(0.0));
    /// assert!(TypeBSource::from_options(Some(0.1), Some(0.02)).is_err());
    /// assert!(TypeBSource::from_options(None, None).is_err());
    /// ```
    pub fn from_options(type_b: Option<f64>, instrument_uncertainty: Option<f64>) -> Result<Self> {
        match (type_b, instrument_uncertainty) {
            (Some(u_b), None) => Ok(TypeBSource::Direct(u_b)),
            (None, Some(delta)) => Ok(TypeBSource::Instrument(delta)),
            (Some(_), Some(_)) => {
                log::debug!("rejected Type-B input: both type_b and instrument_uncertainty given");
                Err(LabError::ConflictingArguments(
                    "provide either type_b or instrument_uncertainty, not both".into(),
                ))
            }
            (None, None) => {
                log::debug!("rejected Type-B input: no type_b or instrument_uncertainty");
                Err(LabError::ConflictingArguments(
                    "either type_b or instrument_uncertainty must be provided".into(),
                ))
            }
        }
    }

    /// The Type-B standard uncertainty this source stands for.
    pub fn resolve(self) -> f64 {
        match self {
            TypeBSource::Direct(u_b) => u_b,
            TypeBSource::Instrument(delta) => type_b_uncertainty(delta),
        }
    }
}

/// Combined uncertainty of repeated readings with a typed Type-B source.
pub fn combined_uncertainty_with(
    values: &[f64],
    mean: f64,
    source: TypeBSource,
    confidence: f64,
) -> Result<f64> {
    let type_a = type_a_uncertainty(values, mean, confidence)?;
    Ok(combined_uncertainty(type_a, source.resolve()))
}

/// Combined uncertainty of a directly measured quantity.
///
/// Exactly one of `type_b` (an already computed Type-B uncertainty) or
/// `instrument_uncertainty` (a limit of error, converted with
/// [`type_b_uncertainty`]) must be given.
///
/// # Errors
/// - [`LabError::ConflictingArguments`] if zero or two Type-B inputs are given.
/// - [`LabError::UnsupportedParameter`] from the t lookup.
///
/// # Examples
/// ```
/// use u_labcalc::uncertainty::directly_calculated_combined_uncertainty;
/// let readings = [2.0, 4.0, 6.0];
/// let u = directly_calculated_combined_uncertainty(&readings, 4.0, None, Some(1.0), 0.683);
/// assert!(u.unwrap() > 0.0);
/// let both = directly_calculated_combined_uncertainty(&readings, 4.0, Some(0.5), Some(1.0), 0.683);
/// assert!(both.is_err());
/// ```
pub fn directly_calculated_combined_uncertainty(
    values: &[f64],
    mean: f64,
    type_b: Option<f64>,
    instrument_uncertainty: Option<f64>,
    confidence: f64,
) -> Result<f64> {
    let source = TypeBSource::from_options(type_b, instrument_uncertainty)?;
    combined_uncertainty_with(values, mean, source, confidence)
}

// ============================================================================
// Summary
// ============================================================================

/// Everything a lab report states about one directly measured quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasurementSummary {
    pub count: usize,
    pub mean: f64,
    pub type_a: f64,
    pub type_b: f64,
    pub combined: f64,
    /// `combined / mean`, or 0 for a zero mean.
    pub relative: f64,
}

impl MeasurementSummary {
    /// Reduces a set of readings to mean and uncertainties.
    ///
    /// # Errors
    /// - [`LabError::InsufficientSamples`] if `values` is empty.
    /// - [`LabError::UnsupportedParameter`] from the t lookup.
    ///
    /// # Examples
    /// ```
    /// use u_labcalc::uncertainty::{MeasurementSummary, TypeBSource};
    /// let readings = [1.2, 1.3, 1.4];
    /// let source = TypeBSource::Instrument(0.02);
    /// let summary = MeasurementSummary::from_samples(&readings, source, 0.683).unwrap();
    /// assert_eq!(summary.count, 3);
    /// assert!((summary.mean - 1.3).abs() < 1e-12);
    /// assert!(summary.combined > summary.type_a);
    /// ```
    pub fn from_samples(values: &[f64], source: TypeBSource, confidence: f64) -> Result<Self> {
        let mean = stats::mean(values)?;
        let type_a = type_a_uncertainty(values, mean, confidence)?;
        let type_b = source.resolve();
        let combined = combined_uncertainty(type_a, type_b);
        log::trace!("summarised {} readings: mean={mean}, u={combined}", values.len());
        Ok(Self {
            count: values.len(),
            mean,
            type_a,
            type_b,
            combined,
            relative: relative_uncertainty(mean, combined),
        })
    }
}

impl std::fmt::Display for MeasurementSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ± {} ({:.2}%)",
            self.mean,
            self.combined,
            self.relative * 100.0
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const P: f64 = t_table::DEFAULT_CONFIDENCE;

    // --- type A ---

    #[test]
    fn test_type_a_known() {
        let u_a = type_a_uncertainty(&[2.0, 4.0, 6.0], 4.0, P).unwrap();
        assert!((u_a - 1.32 * 2.0 / 3f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_type_a_higher_confidence_is_wider() {
        let v = [9.8, 9.7, 9.9, 9.8, 9.6];
        let m = stats::mean(&v).unwrap();
        let narrow = type_a_uncertainty(&v, m, 0.683).unwrap();
        let wide = type_a_uncertainty(&v, m, 0.95).unwrap();
        assert!(wide > narrow);
    }

    #[test]
    fn test_type_a_single_or_empty() {
        assert_eq!(type_a_uncertainty(&[3.0], 3.0, P), Ok(0.0));
        assert_eq!(type_a_uncertainty(&[], 0.0, P), Ok(0.0));
        // small samples short-circuit before the t lookup
        assert_eq!(type_a_uncertainty(&[3.0], 3.0, 0.5), Ok(0.0));
    }

    #[test]
    fn test_type_a_unsupported_count() {
        assert!(matches!(
            type_a_uncertainty(&[1.0, 2.0], 1.5, P),
            Err(LabError::UnsupportedParameter { sample_count: 2, .. })
        ));
    }

    // --- type B / relative / combined ---

    #[test]
    fn test_type_b() {
        assert!((type_b_uncertainty(3f64.sqrt()) - 1.0).abs() < 1e-15);
        assert_eq!(type_b_uncertainty(0.0), 0.0);
    }

    #[test]
    fn test_relative_uncertainty() {
        assert_eq!(relative_uncertainty(0.0, 5.0), 0.0);
        assert!((relative_uncertainty(200.0, 5.0) - 0.025).abs() < 1e-15);
    }

    #[test]
    fn test_combined_pythagorean() {
        assert_eq!(combined_uncertainty(3.0, 4.0), 5.0);
        assert_eq!(combined_uncertainty(0.0, 2.5), 2.5);
    }

    // --- directly_calculated_combined_uncertainty ---

    #[test]
    fn test_direct_with_instrument() {
        let v = [1.2, 1.3, 1.4];
        let m = stats::mean(&v).unwrap();
        let got = directly_calculated_combined_uncertainty(&v, m, None, Some(1.0), P).unwrap();
        let expected = combined_uncertainty(
            type_a_uncertainty(&v, m, P).unwrap(),
            1.0 / 3f64.sqrt(),
        );
        assert_eq!(got, expected);
    }

    #[test]
    fn test_direct_with_type_b() {
        let v = [2.0, 4.0, 6.0];
        let got = directly_calculated_combined_uncertainty(&v, 4.0, Some(0.5), None, P).unwrap();
        let u_a = type_a_uncertainty(&v, 4.0, P).unwrap();
        assert_eq!(got, u_a.hypot(0.5));
    }

    #[test]
    fn test_direct_zero_type_b_is_accepted() {
        let v = [2.0, 4.0, 6.0];
        let got = directly_calculated_combined_uncertainty(&v, 4.0, Some(0.0), None, P).unwrap();
        assert_eq!(got, type_a_uncertainty(&v, 4.0, P).unwrap());
    }

    #[test]
    fn test_direct_rejects_both() {
        let v = [1.0, 2.0, 3.0];
        let err = directly_calculated_combined_uncertainty(&v, 2.0, Some(0.1), Some(0.1), P).unwrap_err();
        assert!(matches!(err, LabError::ConflictingArguments(_)));
    }

    #[test]
    fn test_direct_rejects_neither() {
        let v = [1.0, 2.0, 3.0];
        let err = directly_calculated_combined_uncertainty(&v, 2.0, None, None, P).unwrap_err();
        assert!(matches!(err, LabError::ConflictingArguments(_)));
    }

    #[test]
    fn test_direct_propagates_lookup_error() {
        let v = [1.0, 2.0, 3.0];
        let err = directly_calculated_combined_uncertainty(&v, 2.0, None, Some(0.1), 0.5).unwrap_err();
        assert!(matches!(err, LabError::UnsupportedParameter { .. }));
    }

    // --- MeasurementSummary ---

    #[test]
    fn test_summary_fields_agree() {
        let v = [9.79, 9.81, 9.80, 9.83, 9.78];
        let s = MeasurementSummary::from_samples(&v, TypeBSource::Instrument(0.01), P).unwrap();
        assert_eq!(s.count, 5);
        assert_eq!(s.type_b, type_b_uncertainty(0.01));
        assert_eq!(s.combined, combined_uncertainty(s.type_a, s.type_b));
        assert_eq!(s.relative, s.combined / s.mean);
    }

    #[test]
    fn test_summary_single_reading() {
        let s = MeasurementSummary::from_samples(&[0.0], TypeBSource::Direct(0.3), P).unwrap();
        assert_eq!(s.type_a, 0.0);
        assert_eq!(s.combined, 0.3);
        assert_eq!(s.relative, 0.0);
    }

    #[test]
    fn test_summary_empty() {
        assert!(matches!(
            MeasurementSummary::from_samples(&[], TypeBSource::Direct(0.1), P),
            Err(LabError::InsufficientSamples { .. })
        ));
    }

    #[test]
    fn test_summary_display() {
        let s = MeasurementSummary::from_samples(&[2.0], TypeBSource::Direct(0.5), P).unwrap();
        assert_eq!(s.to_string(), "2 ± 0.5 (25.00%)");
    }
}
