use core::fmt;

use serde::{Deserialize, Serialize};

/// The conformance cases shipped as guest programs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseId {
    /// Formatted output, integer arithmetic and bounded iteration.
    Basic,
    /// Everything in `Basic` plus objects, floats, a vector and strings.
    Extended,
}

impl CaseId {
    pub const ALL: [CaseId; 2] = [CaseId::Basic, CaseId::Extended];

    pub fn name(&self) -> &'static str {
        match self {
            CaseId::Basic => "basic",
            CaseId::Extended => "extended",
        }
    }

    /// Name of the guest binary that runs this case.
    pub fn binary_name(&self) -> &'static str {
        match self {
            CaseId::Basic => "hello-c",
            CaseId::Extended => "hello-cpp",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CaseId::Basic => "Basic runtime: output, integer arithmetic, iteration",
            CaseId::Extended => "Extended runtime: objects, floats, containers, strings",
        }
    }

    /// Look a case up by case name or guest binary name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        CaseId::ALL.into_iter().find(|case| {
            name.eq_ignore_ascii_case(case.name()) || name.eq_ignore_ascii_case(case.binary_name())
        })
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
