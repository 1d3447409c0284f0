//! Poverty-alleviation welfare standard table
//!
//! Annual payment standard by care setting, plus the nursing-care add-on
//! rule. The add-on is a percentage rule rather than a fixed amount, so it
//! is carried as editorial text and rendered as an annotation instead of a
//! bar.

/// Care setting for welfare recipients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CareSetting {
    /// Centralized (institutional) care
    Centralized,
    /// Dispersed (at-home) care
    Dispersed,
}

impl CareSetting {
    /// Display label used on chart axes
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Centralized => "Centralized",
            Self::Dispersed => "Dispersed",
        }
    }
}

/// One row of the welfare standard table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WelfareStandard {
    /// Care setting
    pub setting: CareSetting,
    /// Annual payment standard in CNY
    pub amount: u32,
}

/// The nursing-care add-on rule. Editorial content, not derived from any
/// table; rendered verbatim as the dashboard's only text annotation.
pub const NURSING_CARE_NOTE: &str = "NURSING CARE LOGIC (Add-on):\n\
    • Dispersed (Home): 10-50% of Monthly Min Wage\n\
    • Centralized (Inst): 10-15% of Annual Living Std";

/// The 2024 welfare standard table, in source row order
#[must_use]
pub fn welfare_standards() -> Vec<WelfareStandard> {
    vec![
        WelfareStandard {
            setting: CareSetting::Centralized,
            amount: 14778,
        },
        WelfareStandard {
            setting: CareSetting::Dispersed,
            amount: 8010,
        },
    ]
}
