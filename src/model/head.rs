//! Prediction heads attached to the pretrained backbone

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task a head is trained for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadTask {
    /// Scalar energy regression
    Regression,
    /// Multi-label classification
    MultiLabel,
}

/// Head type selected by name in the model configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadType {
    /// Linear regressor on the pooler output
    Pooler,
    /// One hidden-layer MLP on the first token
    Mlp,
    /// Two hidden-layer MLP on the first token
    Mlp2,
    /// Attention pooling over token states
    AttnHead,
    /// Regressor on the concatenated last four hidden layers
    ConcatLayer,
    /// Multi-label classifier
    MultiLabel,
}

impl HeadType {
    /// Every supported head.
    pub const ALL: [HeadType; 6] = [
        HeadType::Pooler,
        HeadType::Mlp,
        HeadType::Mlp2,
        HeadType::AttnHead,
        HeadType::ConcatLayer,
        HeadType::MultiLabel,
    ];

    /// Configuration name.
    pub fn name(&self) -> &'static str {
        match self {
            HeadType::Pooler => "pooler",
            HeadType::Mlp => "mlp",
            HeadType::Mlp2 => "mlp2",
            HeadType::AttnHead => "attnhead",
            HeadType::ConcatLayer => "concatlayer",
            HeadType::MultiLabel => "multilabel",
        }
    }

    /// Task the head produces outputs for.
    pub fn task(&self) -> HeadTask {
        match self {
            HeadType::MultiLabel => HeadTask::MultiLabel,
            _ => HeadTask::Regression,
        }
    }

    /// Whether the head predicts scalar energies.
    pub fn is_regression(&self) -> bool {
        self.task() == HeadTask::Regression
    }
}

impl std::str::FromStr for HeadType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HeadType::ALL
            .into_iter()
            .find(|h| h.name() == s)
            .ok_or_else(|| Error::UnknownHead(s.to_string()))
    }
}

impl fmt::Display for HeadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_head() {
        for head in HeadType::ALL {
            assert_eq!(head.name().parse::<HeadType>().unwrap(), head);
        }
    }

    #[test]
    fn test_unknown_head_is_rejected() {
        let err = "lstm".parse::<HeadType>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown model_head: lstm");
    }

    #[test]
    fn test_only_multilabel_is_classification() {
        let classifiers: Vec<_> = HeadType::ALL
            .into_iter()
            .filter(|h| !h.is_regression())
            .collect();
        assert_eq!(classifiers, vec![HeadType::MultiLabel]);
    }

    #[test]
    fn test_serde_names_match_config_names() {
        for head in HeadType::ALL {
            let yaml = serde_yaml::to_string(&head).unwrap();
            assert_eq!(yaml.trim(), head.name());
        }
    }
}
