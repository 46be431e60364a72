//! Arena configuration parameters.

use crate::error::ArenaError;

/// Configuration for an [`Arena`](crate::Arena).
///
/// Validated at construction; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Alignment used by [`Arena::alloc`](crate::Arena::alloc).
    ///
    /// Default: 1 (byte-packed). Must be a non-zero power of two. Typed
    /// allocations via `alloc_slice` always use the element's own alignment.
    pub default_align: usize,

    /// Whether every granted region is zeroed before it is returned.
    ///
    /// Default: `true`. With zeroing off, a region carved after a reset may
    /// still hold bytes written in an earlier generation.
    pub zero_fill: bool,
}

impl ArenaConfig {
    /// Default alignment for untyped allocations.
    pub const DEFAULT_ALIGN: usize = 1;

    /// Default zero-fill behaviour.
    pub const DEFAULT_ZERO_FILL: bool = true;

    /// Config with default values.
    pub fn new() -> Self {
        Self {
            default_align: Self::DEFAULT_ALIGN,
            zero_fill: Self::DEFAULT_ZERO_FILL,
        }
    }

    /// Set [`default_align`](Self::default_align).
    pub fn with_default_align(mut self, align: usize) -> Self {
        self.default_align = align;
        self
    }

    /// Set [`zero_fill`](Self::zero_fill).
    pub fn with_zero_fill(mut self, zero_fill: bool) -> Self {
        self.zero_fill = zero_fill;
        self
    }

    /// Check the configuration for internal consistency.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if !self.default_align.is_power_of_two() {
            return Err(ArenaError::InvalidAlignment {
                align: self.default_align,
            });
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_byte_aligned_and_zeroing() {
        let config = ArenaConfig::default();
        assert_eq!(config.default_align, 1);
        assert!(config.zero_fill);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_alignment_rejected() {
        let config = ArenaConfig::new().with_default_align(0);
        assert_eq!(
            config.validate(),
            Err(ArenaError::InvalidAlignment { align: 0 })
        );
    }

    #[test]
    fn non_power_of_two_rejected() {
        let config = ArenaConfig::new().with_default_align(12);
        assert!(matches!(
            config.validate(),
            Err(ArenaError::InvalidAlignment { align: 12 })
        ));
    }

    #[test]
    fn builder_sets_fields() {
        let config = ArenaConfig::new().with_default_align(16).with_zero_fill(false);
        assert_eq!(config.default_align, 16);
        assert!(!config.zero_fill);
    }
}
