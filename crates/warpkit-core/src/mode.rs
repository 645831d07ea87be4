//! Editor transform modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How pointer drags on a shape's handles are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformMode {
    #[default]
    Translation,
    Rotation,
    Scaling,
    Affine,
    Perspective,
}

impl TransformMode {
    pub const ALL: [TransformMode; 5] = [
        TransformMode::Translation,
        TransformMode::Rotation,
        TransformMode::Scaling,
        TransformMode::Affine,
        TransformMode::Perspective,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TransformMode::Translation => "translation",
            TransformMode::Rotation => "rotation",
            TransformMode::Scaling => "scaling",
            TransformMode::Affine => "affine",
            TransformMode::Perspective => "perspective",
        }
    }
}

impl fmt::Display for TransformMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransformMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransformMode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown transform mode '{}'", s))
    }
}
