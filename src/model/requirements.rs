//! Resource budgets, utility minima, and the scaled integer domain.

use crate::error::{Result, SelectionError};

/// Host-facing numeric type for costs, utilities, budgets, and minima.
pub type Scalar = f64;

/// Budgets and requirements shared by every strategy in a solve.
///
/// `resource_max[j]` bounds the summed cost of activated strategies on
/// resource `j`; `utility_min[k]` is the utility that activated strategies
/// must jointly deliver to class `k`. All values are converted to `i64` by
/// [`Model::scale`] before they reach the search.
///
/// A freshly created model has no dimensions and is rejected by every
/// operation that needs them until [`Model::refresh`] sizes it.
///
/// # Examples
///
/// ```
/// use u_stratsel::model::Model;
///
/// let mut model = Model::new(1000.0).unwrap();
/// model.refresh(2, 1);
/// model.set_resource_max(0, 10.0).unwrap();
/// model.set_utility_min(0, 0.5).unwrap();
/// assert_eq!(model.scale(0.5, "utility").unwrap(), 500);
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    scaling: Scalar,
    resource_max: Vec<Scalar>,
    utility_min: Vec<Scalar>,
    initialized: bool,
}

impl Model {
    /// Creates an unsized model with the given scaling factor.
    ///
    /// Fails with [`SelectionError::InvalidScaling`] unless `scaling` is
    /// finite and strictly positive.
    pub fn new(scaling: Scalar) -> Result<Self> {
        if !scaling.is_finite() || scaling <= 0.0 {
            return Err(SelectionError::InvalidScaling(scaling));
        }
        Ok(Self {
            scaling,
            resource_max: Vec::new(),
            utility_min: Vec::new(),
            initialized: false,
        })
    }

    /// Creates a model already sized to the given dimensions.
    pub fn with_dimensions(
        scaling: Scalar,
        resource_count: usize,
        class_count: usize,
    ) -> Result<Self> {
        let mut model = Self::new(scaling)?;
        model.refresh(resource_count, class_count);
        Ok(model)
    }

    /// Structural reset: all budgets and minima become zero vectors of the
    /// given lengths.
    pub fn refresh(&mut self, resource_count: usize, class_count: usize) {
        self.resource_max = vec![0.0; resource_count];
        self.utility_min = vec![0.0; class_count];
        self.initialized = true;
    }

    /// Zeroes every utility minimum, leaving budgets untouched.
    pub fn reset_requirements(&mut self) {
        self.utility_min.iter_mut().for_each(|m| *m = 0.0);
    }

    /// Sets the budget of resource `i`.
    pub fn set_resource_max(&mut self, i: usize, value: Scalar) -> Result<()> {
        self.ensure_initialized()?;
        check_finite(value, || format!("resource_max[{i}]"))?;
        let len = self.resource_max.len();
        let slot = self
            .resource_max
            .get_mut(i)
            .ok_or(SelectionError::IndexOutOfRange { what: "resource", index: i, len })?;
        *slot = value;
        Ok(())
    }

    /// Sets the utility minimum of class `i`.
    pub fn set_utility_min(&mut self, i: usize, value: Scalar) -> Result<()> {
        self.ensure_initialized()?;
        check_finite(value, || format!("utility_min[{i}]"))?;
        let len = self.utility_min.len();
        let slot = self
            .utility_min
            .get_mut(i)
            .ok_or(SelectionError::IndexOutOfRange { what: "class", index: i, len })?;
        *slot = value;
        Ok(())
    }

    /// Converts a Scalar into the exact integer domain.
    ///
    /// The product `value * scaling` is rounded to the nearest integer, so
    /// inputs such as `0.1` with a scaling of `1000` land on `100` rather
    /// than truncating to `99`.
    pub fn scale(&self, value: Scalar, what: &str) -> Result<i64> {
        check_finite(value, || what.to_string())?;
        let scaled = (value * self.scaling).round();
        if !scaled.is_finite() || scaled.abs() >= i64::MAX as f64 {
            return Err(SelectionError::CoefficientOverflow(what.to_string()));
        }
        Ok(scaled as i64)
    }

    /// Returns `Err(Uninitialized)` until the first [`Model::refresh`].
    pub fn ensure_initialized(&self) -> Result<()> {
        if self.initialized {
            Ok(())
        } else {
            Err(SelectionError::Uninitialized)
        }
    }

    /// Whether [`Model::refresh`] has sized the model.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Factor applied to every Scalar before rounding.
    pub fn scaling(&self) -> Scalar {
        self.scaling
    }

    /// Number of resource dimensions.
    pub fn resource_count(&self) -> usize {
        self.resource_max.len()
    }

    /// Number of demand classes.
    pub fn class_count(&self) -> usize {
        self.utility_min.len()
    }

    /// Unscaled budget per resource.
    pub fn resource_max(&self) -> &[Scalar] {
        &self.resource_max
    }

    /// Unscaled minimum per demand class.
    pub fn utility_min(&self) -> &[Scalar] {
        &self.utility_min
    }
}

pub(crate) fn check_finite(value: Scalar, what: impl FnOnce() -> String) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SelectionError::NonFiniteValue { what: what(), value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_bad_scaling() {
        assert_eq!(Model::new(0.0).unwrap_err(), SelectionError::InvalidScaling(0.0));
        assert!(Model::new(-1.0).is_err());
        assert!(Model::new(f64::NAN).is_err());
        assert!(Model::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_uninitialized_rejects_setters() {
        let mut model = Model::new(1000.0).unwrap();
        assert_eq!(model.set_resource_max(0, 1.0), Err(SelectionError::Uninitialized));
        assert_eq!(model.set_utility_min(0, 1.0), Err(SelectionError::Uninitialized));
        assert!(!model.is_initialized());
    }

    #[test]
    fn test_refresh_zeroes_everything() {
        let mut model = Model::with_dimensions(10.0, 2, 3).unwrap();
        model.set_resource_max(1, 4.0).unwrap();
        model.set_utility_min(2, 1.5).unwrap();

        model.refresh(1, 1);
        assert_eq!(model.resource_max(), &[0.0]);
        assert_eq!(model.utility_min(), &[0.0]);
    }

    #[test]
    fn test_reset_requirements_keeps_budgets() {
        let mut model = Model::with_dimensions(10.0, 1, 2).unwrap();
        model.set_resource_max(0, 7.0).unwrap();
        model.set_utility_min(0, 2.0).unwrap();
        model.set_utility_min(1, 3.0).unwrap();

        model.reset_requirements();
        assert_eq!(model.resource_max(), &[7.0]);
        assert_eq!(model.utility_min(), &[0.0, 0.0]);
    }

    #[test]
    fn test_index_out_of_range() {
        let mut model = Model::with_dimensions(1.0, 1, 1).unwrap();
        assert_eq!(
            model.set_resource_max(1, 1.0),
            Err(SelectionError::IndexOutOfRange { what: "resource", index: 1, len: 1 })
        );
        assert_eq!(
            model.set_utility_min(5, 1.0),
            Err(SelectionError::IndexOutOfRange { what: "class", index: 5, len: 1 })
        );
    }

    #[test]
    fn test_non_finite_setter_rejected() {
        let mut model = Model::with_dimensions(1.0, 1, 1).unwrap();
        assert!(matches!(
            model.set_resource_max(0, f64::NAN),
            Err(SelectionError::NonFiniteValue { .. })
        ));
        assert_eq!(model.resource_max(), &[0.0]);
    }

    #[test]
    fn test_scale_rounds() {
        let model = Model::new(1000.0).unwrap();
        assert_eq!(model.scale(0.1, "x").unwrap(), 100);
        assert_eq!(model.scale(-2.5004, "x").unwrap(), -2500);
        assert_eq!(model.scale(0.0004, "x").unwrap(), 0);
    }

    #[test]
    fn test_scale_overflow() {
        let model = Model::new(1e12).unwrap();
        assert!(matches!(
            model.scale(1e12, "cost"),
            Err(SelectionError::CoefficientOverflow(_))
        ));
    }
}
