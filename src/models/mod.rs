//! Domain models for the policy benefit tables
//!
//! This module contains the three fixed tables rendered by the dashboard:
//! village-cadre compensation, border-resident subsidies, and
//! poverty-alleviation welfare standards. All values are 2024 annual
//! figures in CNY and are literal constants; nothing here performs I/O.

// Re-export entity models
pub mod cadre;
pub mod subsidy;
pub mod welfare;

// Re-export commonly used types
pub use cadre::{CadreSalary, Region, Role, cadre_salaries};
pub use subsidy::{BorderSubsidy, VillageType, border_subsidies};
pub use welfare::{CareSetting, NURSING_CARE_NOTE, WelfareStandard, welfare_standards};
