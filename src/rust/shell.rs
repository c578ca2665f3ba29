use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::panels::{BatchPanel, SinglePanel};

/// The analyzer tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Single,
    Batch,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Single, Tab::Batch];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Batch => "batch",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Single => "Single Review",
            Self::Batch => "Batch Analysis",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Self::Single),
            "batch" => Ok(Self::Batch),
            other => Err(format!("unknown tab: {}", other)),
        }
    }
}

/// Tab container for both panels. The service address lives with the
/// client the panels submit through, not here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyzerShell {
    active: Tab,
    single: SinglePanel,
    batch: BatchPanel,
}

impl AnalyzerShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// Switches tabs. Panel state is kept on both sides.
    pub fn select(&mut self, tab: Tab) {
        self.active = tab;
    }

    pub fn single(&self) -> &SinglePanel {
        &self.single
    }

    pub fn single_mut(&mut self) -> &mut SinglePanel {
        &mut self.single
    }

    pub fn batch(&self) -> &BatchPanel {
        &self.batch
    }

    pub fn batch_mut(&mut self) -> &mut BatchPanel {
        &mut self.batch
    }
}
