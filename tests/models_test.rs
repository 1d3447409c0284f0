#[cfg(test)]
mod tests {
    use policy_dashboard::models::*;

    #[test]
    fn test_cadre_table_rows() {
        let rows = cadre_salaries();
        assert_eq!(rows.len(), 4);

        let salary_of = |region: Region, role: Role| {
            rows.iter()
                .find(|r| r.region == region && r.role == role)
                .map(|r| r.salary)
        };
        assert_eq!(salary_of(Region::Interior, Role::Director), Some(40060));
        assert_eq!(salary_of(Region::Interior, Role::Staff), Some(32048));
        assert_eq!(salary_of(Region::Border, Role::Director), Some(44066));
        assert_eq!(salary_of(Region::Border, Role::Staff), Some(35253));
    }

    #[test]
    fn test_border_subsidy_table_rows() {
        let rows = border_subsidies();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].village, VillageType::Frontline);
        assert_eq!(rows[0].subsidy, 13800);
        assert_eq!(rows[1].village, VillageType::General);
        assert_eq!(rows[1].subsidy, 6800);
    }

    #[test]
    fn test_welfare_table_rows() {
        let rows = welfare_standards();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].setting, CareSetting::Centralized);
        assert_eq!(rows[0].amount, 14778);
        assert_eq!(rows[1].setting, CareSetting::Dispersed);
        assert_eq!(rows[1].amount, 8010);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Region::Interior.label(), "Interior");
        assert_eq!(Region::Border.label(), "Border");
        assert_eq!(Role::Director.label(), "Director");
        assert_eq!(Role::Staff.label(), "Staff");
        assert_eq!(VillageType::Frontline.label(), "Frontline Village");
        assert_eq!(VillageType::General.label(), "General Village");
        assert_eq!(CareSetting::Centralized.label(), "Centralized");
        assert_eq!(CareSetting::Dispersed.label(), "Dispersed");
    }

    #[test]
    fn test_nursing_care_note_is_verbatim() {
        let lines: Vec<&str> = NURSING_CARE_NOTE.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "NURSING CARE LOGIC (Add-on):");
        assert_eq!(lines[1], "• Dispersed (Home): 10-50% of Monthly Min Wage");
        assert_eq!(lines[2], "• Centralized (Inst): 10-15% of Annual Living Std");
    }

    #[test]
    fn test_tables_are_stable_across_calls() {
        assert_eq!(cadre_salaries(), cadre_salaries());
        assert_eq!(border_subsidies(), border_subsidies());
        assert_eq!(welfare_standards(), welfare_standards());
    }
}
