//! Run profiles: named bundles of engine options
//!
//! The statistics and conversion scripts this tool replaces came in two
//! families that disagree on the variance denominator, on what "mode" means
//! for all-unique data, and on how negative integers are written. Each axis
//! is an explicit option here, and the presets reproduce each family.

use crate::error::NumstatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Denominator used for the sum of squared deviations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum VarianceMode {
    /// Divide by `n`
    Population,
    /// Divide by `n - 1`
    Sample,
}

/// What to report as the mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum ModePolicy {
    /// No mode unless some value occurs more than once.
    #[default]
    RequireRepeat,
    /// Always the first most frequent value, even when every value is unique.
    FirstMostFrequent,
}

/// How negative integers are written in binary and hexadecimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum SignPolicy {
    /// Minimal-width two's complement for binary, 32-bit for hex
    TwosComplement,
    /// `-` followed by the digits of the magnitude
    SignMagnitude,
}

macro_rules! kebab_enum {
    ($ty:ty { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        // YAML values parse the same way as command line flags
        impl TryFrom<String> for $ty {
            type Error = NumstatError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl FromStr for $ty {
            type Err = NumstatError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($name => Ok(Self::$variant),)+
                    other => Err(NumstatError::Config(format!(
                        "unknown {} '{}' (expected one of: {})",
                        stringify!($ty),
                        other,
                        [$($name),+].join(", ")
                    ))),
                }
            }
        }
    };
}

kebab_enum!(VarianceMode {
    Population => "population",
    Sample => "sample",
});

kebab_enum!(ModePolicy {
    RequireRepeat => "require-repeat",
    FirstMostFrequent => "first-most-frequent",
});

kebab_enum!(SignPolicy {
    TwosComplement => "twos-complement",
    SignMagnitude => "sign-magnitude",
});

/// Named set of engine options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunProfile {
    /// Profile name (e.g. "standard", "classic")
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    pub variance: VarianceMode,

    #[serde(default)]
    pub mode_policy: ModePolicy,

    pub sign_policy: SignPolicy,
}

impl RunProfile {
    /// Population variance, no mode for all-unique data, two's complement
    pub fn standard() -> Self {
        Self {
            name: "standard".to_string(),
            description: Some("population variance, strict mode, two's complement".to_string()),
            variance: VarianceMode::Population,
            mode_policy: ModePolicy::RequireRepeat,
            sign_policy: SignPolicy::TwosComplement,
        }
    }

    /// The first script family: population variance, a mode is always
    /// reported, negative numbers in sign-magnitude form
    pub fn classic() -> Self {
        Self {
            name: "classic".to_string(),
            description: Some("population variance, permissive mode, sign-magnitude".to_string()),
            variance: VarianceMode::Population,
            mode_policy: ModePolicy::FirstMostFrequent,
            sign_policy: SignPolicy::SignMagnitude,
        }
    }

    /// The second script family: sample variance, strict mode, two's complement
    pub fn revised() -> Self {
        Self {
            name: "revised".to_string(),
            description: Some("sample variance, strict mode, two's complement".to_string()),
            variance: VarianceMode::Sample,
            mode_policy: ModePolicy::RequireRepeat,
            sign_policy: SignPolicy::TwosComplement,
        }
    }

    pub fn presets() -> Vec<Self> {
        vec![Self::standard(), Self::classic(), Self::revised()]
    }

    /// Look up a preset by name, ignoring case
    pub fn for_name(name: &str) -> Result<Self, NumstatError> {
        let wanted = name.trim().to_ascii_lowercase();
        let presets = Self::presets();
        if let Some(found) = presets.iter().find(|p| p.name == wanted) {
            return Ok(found.clone());
        }

        let names: Vec<&str> = presets.iter().map(|p| p.name.as_str()).collect();
        Err(NumstatError::Config(format!(
            "unknown profile '{}' (expected one of: {})",
            wanted,
            names.join(", ")
        )))
    }

    /// Parse a profile from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, NumstatError> {
        serde_yaml::from_str(yaml).map_err(|e| NumstatError::Config(e.to_string()))
    }

    /// Load a profile from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NumstatError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| NumstatError::io(path.display().to_string(), e))?;
        Self::from_yaml(&content)
    }

    pub fn with_variance(mut self, variance: VarianceMode) -> Self {
        self.variance = variance;
        self
    }

    pub fn with_mode_policy(mut self, mode_policy: ModePolicy) -> Self {
        self.mode_policy = mode_policy;
        self
    }

    pub fn with_sign_policy(mut self, sign_policy: SignPolicy) -> Self {
        self.sign_policy = sign_policy;
        self
    }
}

impl Default for RunProfile {
    fn default() -> Self {
        Self::standard()
    }
}
