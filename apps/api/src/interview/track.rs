use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Coarse job category. Selects which question set an interview draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    Frontend,
    Backend,
}

impl Track {
    pub const ALL: [Track; 2] = [Track::Frontend, Track::Backend];

    pub fn as_str(&self) -> &'static str {
        match self {
            Track::Frontend => "frontend",
            Track::Backend => "backend",
        }
    }

    /// Display name used when the caller leaves the role empty.
    pub fn default_role(&self) -> &'static str {
        match self {
            Track::Frontend => "Frontend Engineer",
            Track::Backend => "Backend Engineer",
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Track {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "frontend" => Ok(Track::Frontend),
            "backend" => Ok(Track::Backend),
            other => Err(format!("unknown track '{other}'")),
        }
    }
}

/// Classifies a free-text role. Total: anything unrecognised is frontend.
pub fn infer_track(role: &str) -> Track {
    let role = role.to_lowercase();
    if role.contains("front") || role.contains("react") {
        Track::Frontend
    } else if role.contains("back") || role.contains("api") {
        Track::Backend
    } else {
        Track::Frontend
    }
}
