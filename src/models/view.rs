//! View mode for the main screen.

/// Main view mode (Terminal or Website).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Terminal view (default)
    #[default]
    Terminal,
    /// Static personal website panel
    Website,
}

impl ViewMode {
    /// The other view.
    pub fn toggled(self) -> Self {
        match self {
            Self::Terminal => Self::Website,
            Self::Website => Self::Terminal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(ViewMode::default(), ViewMode::Terminal);
        assert_eq!(ViewMode::Terminal.toggled(), ViewMode::Website);
        assert_eq!(ViewMode::Website.toggled(), ViewMode::Terminal);
    }
}
