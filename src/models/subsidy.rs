//! Border-resident subsidy table
//!
//! Annual per-resident subsidy by village classification.

/// Classification of a border village
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VillageType {
    /// Village directly on the border line
    Frontline,
    /// Other village inside the border county
    General,
}

impl VillageType {
    /// Display label used on chart axes
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Frontline => "Frontline Village",
            Self::General => "General Village",
        }
    }
}

/// One row of the border subsidy table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSubsidy {
    /// Village classification
    pub village: VillageType,
    /// Annual subsidy in CNY
    pub subsidy: u32,
}

/// The 2024 border subsidy table, in source row order
#[must_use]
pub fn border_subsidies() -> Vec<BorderSubsidy> {
    vec![
        BorderSubsidy {
            village: VillageType::Frontline,
            subsidy: 13800,
        },
        BorderSubsidy {
            village: VillageType::General,
            subsidy: 6800,
        },
    ]
}
