//! Choice lists shared by the demo forms.
//!
//! Every select starts on a sentinel (`Unknown`, `None`) so "nothing chosen"
//! is a value the rules can reject.

use serde::{Deserialize, Serialize};

/// Customer industry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndustryType {
    #[default]
    Unknown,
    SaaS,
    Manufacturing,
    Retail,
    Healthcare,
    Finance,
}

/// Kind of contract being signed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractType {
    #[default]
    Unknown,
    New,
    Renewal,
    Expansion,
}

/// Radio-group option; `Other` asks for free text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SingleChoice {
    #[default]
    None,
    Alpha,
    Beta,
    Gamma,
    Other,
}

/// Checkbox-group option; `Other` asks for free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MultiChoice {
    Alpha,
    Beta,
    Gamma,
    Other,
}
