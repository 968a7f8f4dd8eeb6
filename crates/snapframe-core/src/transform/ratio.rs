//! Target aspect ratios for captures.
//!
//! Ratios are width:height pairs of positive integers. The UI exchanges them
//! as `"N-D"` identifiers (`"4-5"`, `"1-1"`, `"9-16"`) and shows them as
//! `"N:D"` labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CaptureError;

/// A width:height aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AspectRatio {
    numerator: u32,
    denominator: u32,
}

impl AspectRatio {
    /// 4:5 portrait, the default capture ratio.
    pub const PORTRAIT: AspectRatio = AspectRatio {
        numerator: 4,
        denominator: 5,
    };

    /// 1:1 square.
    pub const SQUARE: AspectRatio = AspectRatio {
        numerator: 1,
        denominator: 1,
    };

    /// 9:16 full-screen story.
    pub const STORY: AspectRatio = AspectRatio {
        numerator: 9,
        denominator: 16,
    };

    /// Ratios offered by the capture screen, in menu order.
    pub const PRESETS: [AspectRatio; 3] = [Self::PORTRAIT, Self::SQUARE, Self::STORY];

    /// Create a ratio. Both components must be non-zero.
    pub fn new(numerator: u32, denominator: u32) -> Result<Self, CaptureError> {
        if numerator == 0 || denominator == 0 {
            return Err(CaptureError::InvalidRatio {
                numerator,
                denominator,
            });
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    #[inline]
    pub fn numerator(self) -> u32 {
        self.numerator
    }

    #[inline]
    pub fn denominator(self) -> u32 {
        self.denominator
    }

    /// Ratio value as width / height.
    #[inline]
    pub fn value(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Human-readable label, e.g. `"4:5"`.
    pub fn label(self) -> String {
        format!("{}:{}", self.numerator, self.denominator)
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::PORTRAIT
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.numerator, self.denominator)
    }
}

impl FromStr for AspectRatio {
    type Err = CaptureError;

    /// Parse an `"N-D"` identifier.
    ///
    /// Malformed identifiers fail with `UnknownRatio`; well-formed ones with a
    /// zero component fail with `InvalidRatio`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || CaptureError::UnknownRatio(s.to_string());
        let (num, den) = s.trim().split_once('-').ok_or_else(unknown)?;
        let numerator = num.parse::<u32>().map_err(|_| unknown())?;
        let denominator = den.parse::<u32>().map_err(|_| unknown())?;
        Self::new(numerator, denominator)
    }
}

impl TryFrom<String> for AspectRatio {
    type Error = CaptureError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AspectRatio> for String {
    fn from(ratio: AspectRatio) -> Self {
        ratio.to_string()
    }
}
