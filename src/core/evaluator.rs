use crate::core::formulas::{find_formula, FORMULAS};
use crate::domain::model::{AxisPair, Evaluation, Formula};
use crate::utils::error::{EllipseError, Result};

/// Runs an ordered list of formulas against one pair of axes.
#[derive(Debug, Clone)]
pub struct Evaluator {
    formulas: Vec<&'static Formula>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            formulas: FORMULAS.iter().collect(),
        }
    }

    /// Restricts evaluation to the named formulas. The report keeps the
    /// declared order no matter how the selection is ordered.
    pub fn with_selection<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let mut selected = Vec::with_capacity(names.len());
        for name in names {
            let formula =
                find_formula(name.as_ref()).ok_or_else(|| EllipseError::UnknownFormulaError {
                    name: name.as_ref().to_string(),
                })?;
            selected.push(formula.key);
        }

        Ok(Self {
            formulas: FORMULAS
                .iter()
                .filter(|formula| selected.contains(&formula.key))
                .collect(),
        })
    }

    pub fn formulas(&self) -> &[&'static Formula] {
        &self.formulas
    }

    pub fn evaluate(&self, axes: &AxisPair) -> Vec<Evaluation> {
        self.formulas
            .iter()
            .map(|formula| {
                let value = formula.apply(axes);
                tracing::debug!("{} = {}", formula.name, value);
                if !value.is_finite() {
                    tracing::warn!("{} produced a non-finite value: {}", formula.name, value);
                }
                Evaluation {
                    name: formula.name.to_string(),
                    value,
                }
            })
            .collect()
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluates_all_formulas_in_order() {
        let results = Evaluator::new().evaluate(&AxisPair::new(5.0, 3.0));
        assert_eq!(results.len(), 6);
        assert_eq!(results[0].name, "Ramanujan's First Approximation");
        assert_eq!(results[5].name, "David Cantrell's Formula");
        assert_eq!(results[3].value, 25.526_977_5);
    }

    #[test]
    fn test_selection_keeps_declared_order() {
        let evaluator = Evaluator::with_selection(&["cantrell", "Muir's Formula", "ramanujan1"])
            .unwrap();
        let names: Vec<&str> = evaluator.formulas().iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec![
                "Ramanujan's First Approximation",
                "Muir's Formula",
                "David Cantrell's Formula",
            ]
        );
    }

    #[test]
    fn test_selection_ignores_duplicates() {
        let evaluator = Evaluator::with_selection(&["muir", "MUIR"]).unwrap();
        assert_eq!(evaluator.formulas().len(), 1);
    }

    #[test]
    fn test_unknown_formula_is_rejected() {
        let err = Evaluator::with_selection(&["muir", "kepler"]).unwrap_err();
        assert!(matches!(err, EllipseError::UnknownFormulaError { ref name } if name == "kepler"));
    }

    #[test]
    fn test_nan_axes_flow_through() {
        let results = Evaluator::new().evaluate(&AxisPair::new(f32::NAN, 3.0));
        assert!(results.iter().all(|r| r.value.is_nan()));
    }
}
