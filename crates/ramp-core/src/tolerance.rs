/// Tolerance for the floating point comparisons done by the solvers.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Linear tolerance for lengths and residuals (in metres)
    pub linear: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-9;

    pub fn default_precision() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
        }
    }

    /// For checks on values that went through several solves.
    pub fn loose() -> Self {
        Self { linear: 1e-6 }
    }

    /// Check if two values are equal within linear tolerance
    pub fn linear_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.linear
    }

    /// Check if a value is zero within linear tolerance
    pub fn is_zero(self, v: f64) -> bool {
        v.abs() <= self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_default_precision() {
        assert_eq!(Tolerance::default(), Tolerance::default_precision());
        assert!(Tolerance::loose().linear > Tolerance::default().linear);
    }

    #[test]
    fn test_comparisons() {
        let tol = Tolerance { linear: 1e-3 };
        assert!(tol.linear_eq(1.0, 1.0005));
        assert!(!tol.linear_eq(1.0, 1.01));
        assert!(tol.is_zero(-5e-4));
        assert!(!tol.is_zero(2e-3));
    }
}
