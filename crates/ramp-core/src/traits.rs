use crate::error::Result;

/// Validate internal consistency of a derived geometric entity or configuration.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
