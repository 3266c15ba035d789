use crate::{FilterSettings, PixelFilter, PixelFilterError};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::str::FromStr;

/// User-facing controls. Each one runs exactly one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Action {
    Grayscale = 0,
    Brighten,
    Threshold,
    Reset,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Grayscale => "grayscale",
            Action::Brighten => "brighten",
            Action::Threshold => "threshold",
            Action::Reset => "reset",
        }
    }

    /// The filter behind this control with default settings. `Reset` has none.
    pub fn filter(&self) -> Option<PixelFilter> {
        FilterSettings::default().filter_for(*self)
    }

    pub fn all() -> &'static [Action] {
        &[
            Action::Grayscale,
            Action::Brighten,
            Action::Threshold,
            Action::Reset,
        ]
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = PixelFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Action::all()
            .iter()
            .find(|action| action.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| PixelFilterError::UnknownAction(s.to_string()))
    }
}
