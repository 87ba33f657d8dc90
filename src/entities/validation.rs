//! Validation records - physical samples and lab results

use serde::{Deserialize, Serialize};

use crate::core::identity::EntityId;

/// Outcome of a lab test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Verdict {
    Pass,
    Fail,
    #[default]
    Pending,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Pass => write!(f, "Pass"),
            Verdict::Fail => write!(f, "Fail"),
            Verdict::Pending => write!(f, "Pending"),
        }
    }
}

/// A sample submission (proto, fit, PP, TOP...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub id: EntityId,

    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabResult {
    pub id: EntityId,

    /// Test name
    pub test: String,

    /// Measured value
    #[serde(default)]
    pub result: f64,

    #[serde(default)]
    pub verdict: Verdict,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Validation {
    #[serde(default)]
    pub samples: Vec<Sample>,

    #[serde(default)]
    pub lab: Vec<LabResult>,
}

impl Validation {
    pub fn failed_tests(&self) -> usize {
        self.lab.iter().filter(|r| r.verdict == Verdict::Fail).count()
    }
}
