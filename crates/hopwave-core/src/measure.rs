use crate::geometry::Size;

/// How much room the host offers along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeConstraint {
    Exactly(f64),
    AtMost(f64),
    Unspecified,
}

impl SizeConstraint {
    pub fn reconcile(self, desired: f64) -> f64 {
        match self {
            Self::Exactly(size) => size,
            Self::AtMost(size) => size.min(desired),
            Self::Unspecified => desired,
        }
    }
}

/// Room around the row of slots in the segmented indicator.
pub const SEGMENTED_PADDING: f64 = 40.0;
/// Room around the row of dots in the wave indicator.
pub const WAVE_PADDING: f64 = 20.0;

pub fn segmented_size(radius: f64, count: usize) -> Size {
    Size::new(
        radius * 2.0 * count as f64 + SEGMENTED_PADDING * 2.0,
        radius * 2.0 + SEGMENTED_PADDING * 2.0,
    )
}

pub fn wave_size(radius: f64, count: usize, wave_height: f64) -> Size {
    Size::new(
        radius * 2.0 * count as f64 + WAVE_PADDING * 2.0,
        radius * 2.0 + wave_height + WAVE_PADDING * 2.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconcile() {
        assert_eq!(SizeConstraint::Exactly(50.0).reconcile(120.0), 50.0);
        assert_eq!(SizeConstraint::Exactly(500.0).reconcile(120.0), 500.0);
        assert_eq!(SizeConstraint::AtMost(50.0).reconcile(120.0), 50.0);
        assert_eq!(SizeConstraint::AtMost(500.0).reconcile(120.0), 120.0);
        assert_eq!(SizeConstraint::Unspecified.reconcile(120.0), 120.0);
    }

    #[test]
    fn test_preferred_sizes() {
        assert_eq!(segmented_size(15.0, 4), Size::new(200.0, 110.0));
        assert_eq!(wave_size(15.0, 4, 160.0), Size::new(160.0, 230.0));
    }
}
