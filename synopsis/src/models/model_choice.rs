// src/models/model_choice.rs
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of pretrained summarization models on offer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelChoice {
    #[default]
    Bart,
    #[value(name = "t5-base")]
    #[serde(rename = "t5-base")]
    T5Base,
    DistilBart,
    Pegasus,
}

impl ModelChoice {
    pub const ALL: [Self; 4] = [Self::Bart, Self::T5Base, Self::DistilBart, Self::Pegasus];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bart => "BART (Facebook)",
            Self::T5Base => "T5 Base",
            Self::DistilBart => "DistilBART",
            Self::Pegasus => "Pegasus",
        }
    }

    #[must_use]
    pub const fn model_id(self) -> &'static str {
        match self {
            Self::Bart => "facebook/bart-large-cnn",
            Self::T5Base => "t5-base",
            Self::DistilBart => "sshleifer/distilbart-cnn-12-6",
            Self::Pegasus => "google/pegasus-xsum",
        }
    }
}

impl fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
