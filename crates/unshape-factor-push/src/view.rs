//! Per-cell presentation data for grid viewers.
//!
//! Viewers show each cell either as its factorization (primes as bare
//! numbers) or, in modulo mode, as its residue. Colour and layout are left to
//! the viewer; [`GridState::heat`] supplies the normalised intensity.

use crate::GridState;
use unshape_primes::PrimeCache;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How cells are labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ViewSettings {
    /// Show `value % modulus` instead of the factorization.
    pub modulo_mode: bool,
    /// Modulus for modulo mode. Values below one are treated as one.
    pub modulus: i64,
}

impl ViewSettings {
    /// Factorization labels with the given modulus kept for tooltips.
    pub fn new(modulus: i64) -> Self {
        Self {
            modulo_mode: false,
            modulus,
        }
    }

    /// Residue labels modulo `modulus`.
    pub fn modulo(modulus: i64) -> Self {
        Self {
            modulo_mode: true,
            modulus,
        }
    }

    /// Sets whether modulo mode is on.
    pub fn with_modulo_mode(mut self, on: bool) -> Self {
        self.modulo_mode = on;
        self
    }

    /// The modulus actually used.
    pub fn effective_modulus(&self) -> i64 {
        self.modulus.max(1)
    }

    /// Remainder of `value` by the modulus, carrying the sign of `value`.
    pub fn residue(&self, value: i64) -> i64 {
        value % self.effective_modulus()
    }

    /// Text shown inside the cell for `value`.
    pub fn label(&self, value: i64, primes: &PrimeCache) -> String {
        if self.modulo_mode {
            self.residue(value).to_string()
        } else if primes.is_prime(value) {
            value.to_string()
        } else {
            primes.factorize(value)
        }
    }

    /// Collects everything a viewer shows for the cell at row `t`, column `i`.
    pub fn describe(
        &self,
        grid: &GridState,
        t: usize,
        i: usize,
        primes: &PrimeCache,
    ) -> Option<CellInfo> {
        let value = grid.get(t, i)?;
        Some(CellInfo {
            row: t,
            column: i,
            value,
            prime: primes.is_prime(value),
            factors: primes.factorize(value),
            residue: self.residue(value),
            label: self.label(value, primes),
            heat: grid.heat(value),
        })
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self::new(5)
    }
}

/// Description of one grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellInfo {
    /// Time step.
    pub row: usize,
    /// Index within the row.
    pub column: usize,
    /// Raw value.
    pub value: i64,
    /// Whether the value is prime.
    pub prime: bool,
    /// Factorization string.
    pub factors: String,
    /// Residue by the view's modulus.
    pub residue: i64,
    /// Cell label under the view settings.
    pub label: String,
    /// Position between the grid bounds.
    pub heat: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SimulationParams, generate};

    #[test]
    fn test_default() {
        let view = ViewSettings::default();
        assert!(!view.modulo_mode);
        assert_eq!(view.modulus, 5);
    }

    #[test]
    fn test_labels() {
        let primes = PrimeCache::new();
        let view = ViewSettings::default();
        assert_eq!(view.label(13, &primes), "13");
        assert_eq!(view.label(12, &primes), "2²·3");
        assert_eq!(view.label(1, &primes), "1");
        assert_eq!(view.label(-6, &primes), "-6");
    }

    #[test]
    fn test_modulo_labels() {
        let primes = PrimeCache::new();
        let view = ViewSettings::modulo(5);
        assert_eq!(view.label(13, &primes), "3");
        assert_eq!(view.label(20, &primes), "0");
        assert_eq!(view.label(-7, &primes), "-2");
    }

    #[test]
    fn test_degenerate_modulus() {
        assert_eq!(ViewSettings::modulo(0).residue(17), 0);
        assert_eq!(ViewSettings::modulo(-3).residue(i64::MIN), 0);
    }

    #[test]
    fn test_describe() {
        let grid = generate(&SimulationParams::new(4, 10, 1, 2)).unwrap();
        let primes = PrimeCache::new();
        let view = ViewSettings::new(7);

        let cell = view.describe(&grid, 1, 2, &primes).unwrap();
        assert_eq!(cell.value, 20);
        assert!(!cell.prime);
        assert_eq!(cell.factors, "2²·5");
        assert_eq!(cell.residue, 6);
        assert_eq!(cell.label, "2²·5");
        assert_eq!(cell.heat, 1.0);

        let cell = view.with_modulo_mode(true).describe(&grid, 1, 1, &primes).unwrap();
        assert!(cell.prime);
        assert_eq!(cell.label, "5");

        assert!(view.describe(&grid, 2, 0, &primes).is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_field_names() {
        let json = r#"{"moduloMode":true,"modulus":9}"#;
        let view: ViewSettings = serde_json::from_str(json).unwrap();
        assert_eq!(view, ViewSettings::modulo(9));
    }
}
