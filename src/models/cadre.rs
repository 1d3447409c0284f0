//! Village-cadre compensation table
//!
//! Annual salary by region and role. Border postings carry a higher
//! salary than the equivalent interior posting for both roles.

/// Region of a cadre posting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Interior (non-border) county
    Interior,
    /// Border county
    Border,
}

impl Region {
    /// Display label used on chart axes
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Interior => "Interior",
            Self::Border => "Border",
        }
    }
}

/// Role of a village cadre
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Village director
    Director,
    /// Ordinary village staff
    Staff,
}

impl Role {
    /// Display label used in chart legends
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Director => "Director",
            Self::Staff => "Staff",
        }
    }
}

/// One row of the cadre compensation table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CadreSalary {
    /// Region of the posting
    pub region: Region,
    /// Role within the village committee
    pub role: Role,
    /// Annual salary in CNY
    pub salary: u32,
}

/// The 2024 cadre compensation table, in source row order
#[must_use]
pub fn cadre_salaries() -> Vec<CadreSalary> {
    vec![
        CadreSalary {
            region: Region::Interior,
            role: Role::Director,
            salary: 40060,
        },
        CadreSalary {
            region: Region::Interior,
            role: Role::Staff,
            salary: 32048,
        },
        CadreSalary {
            region: Region::Border,
            role: Role::Director,
            salary: 44066,
        },
        CadreSalary {
            region: Region::Border,
            role: Role::Staff,
            salary: 35253,
        },
    ]
}
