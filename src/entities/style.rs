//! Style header - lifecycle stage, gates, milestones and KPI series

use serde::{Deserialize, Serialize};

use crate::core::identity::EntityId;

/// Lifecycle stage of a style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    #[default]
    Idea,
    Definition,
    Proto,
    Quote,
    Validation,
    /// Ready to manufacture
    #[serde(rename = "RTM")]
    Rtm,
    Live,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Idea => write!(f, "Idea"),
            Stage::Definition => write!(f, "Definition"),
            Stage::Proto => write!(f, "Proto"),
            Stage::Quote => write!(f, "Quote"),
            Stage::Validation => write!(f, "Validation"),
            Stage::Rtm => write!(f, "RTM"),
            Stage::Live => write!(f, "Live"),
        }
    }
}

impl std::str::FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "idea" => Ok(Stage::Idea),
            "definition" => Ok(Stage::Definition),
            "proto" => Ok(Stage::Proto),
            "quote" => Ok(Stage::Quote),
            "validation" => Ok(Stage::Validation),
            "rtm" => Ok(Stage::Rtm),
            "live" => Ok(Stage::Live),
            _ => Err(format!(
                "Unknown stage: {}. Use idea, definition, proto, quote, validation, rtm or live",
                s
            )),
        }
    }
}

/// A stage-gate checklist item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gate {
    pub label: String,
    #[serde(default)]
    pub done: bool,
}

/// A dated milestone on the style timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub label: String,
    /// ISO date label (YYYY-MM-DD)
    pub date: String,
    #[serde(default)]
    pub done: bool,
}

/// A named KPI trend (e.g. ECR cycle days per week)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSeries {
    pub name: String,
    #[serde(default)]
    pub series: Vec<f64>,
}

/// Style header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub id: EntityId,

    pub title: String,

    #[serde(default)]
    pub stage: Stage,

    /// Product manager
    #[serde(default)]
    pub manager: String,

    #[serde(default)]
    pub season: String,

    #[serde(default)]
    pub colorway: String,

    /// Critical risks called out on the dashboard
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub risks: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gates: Vec<Gate>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub milestones: Vec<Milestone>,
}

impl Style {
    pub fn new(id: EntityId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            stage: Stage::default(),
            manager: String::new(),
            season: String::new(),
            colorway: String::new(),
            risks: Vec::new(),
            gates: Vec::new(),
            milestones: Vec::new(),
        }
    }

    /// Number of gates marked done
    pub fn gates_done(&self) -> usize {
        self.gates.iter().filter(|g| g.done).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_roundtrip_labels() {
        for stage in [
            Stage::Idea,
            Stage::Definition,
            Stage::Proto,
            Stage::Quote,
            Stage::Validation,
            Stage::Rtm,
            Stage::Live,
        ] {
            assert_eq!(stage.to_string().parse::<Stage>().unwrap(), stage);
        }
        assert!("shipping".parse::<Stage>().is_err());
    }

    #[test]
    fn test_rtm_serializes_uppercase() {
        let yaml = serde_yml::to_string(&Stage::Rtm).unwrap();
        assert_eq!(yaml.trim(), "RTM");
    }

    #[test]
    fn test_gates_done() {
        let mut style = Style::new(
            EntityId::parse("STYLE-T1").unwrap(),
            "Tee",
        );
        style.gates.push(Gate { label: "Business Case".into(), done: true });
        style.gates.push(Gate { label: "Cost Lock".into(), done: false });
        assert_eq!(style.gates_done(), 1);
    }
}
