#[cfg(test)]
mod tests {
    use policy_dashboard::models::{border_subsidies, cadre_salaries, welfare_standards};
    use policy_dashboard::render::{cadre_panel, subsidy_panel, welfare_panel};

    #[test]
    fn test_cadre_panel_bars_match_table() {
        let panel = cadre_panel(&cadre_salaries());
        assert_eq!(panel.bar_count(), 4);

        // Director series first, then Staff, each in Interior/Border order
        let labels = panel.bar_labels();
        assert_eq!(labels, vec!["40060", "44066", "32048", "35253"]);
    }

    #[test]
    fn test_cadre_panel_has_role_legend() {
        let panel = cadre_panel(&cadre_salaries());
        let names: Vec<_> = panel.series.iter().filter_map(|s| s.name).collect();
        assert_eq!(names, vec!["Director", "Staff"]);
    }

    #[test]
    fn test_subsidy_panel_has_two_annotated_bars() {
        let panel = subsidy_panel(&border_subsidies());
        assert_eq!(panel.bar_count(), 2);
        assert_eq!(panel.bar_labels(), vec!["13800", "6800"]);
        assert_eq!(panel.y_desc, "Annual Subsidy (CNY)");
    }

    #[test]
    fn test_welfare_panel_has_two_bars_and_note() {
        let panel = welfare_panel(&welfare_standards());
        assert_eq!(panel.bar_count(), 2);
        assert_eq!(panel.bar_labels(), vec!["14778", "8010"]);
        let note = panel.note.expect("welfare panel carries the nursing note");
        assert!(note.starts_with("NURSING CARE LOGIC"));
    }

    #[test]
    fn test_note_appears_in_bottom_panel_only() {
        let panels = [
            cadre_panel(&cadre_salaries()),
            subsidy_panel(&border_subsidies()),
            welfare_panel(&welfare_standards()),
        ];
        let notes = panels.iter().filter(|p| p.note.is_some()).count();
        assert_eq!(notes, 1);
        assert!(panels[2].note.is_some());
    }

    #[test]
    fn test_annotation_labels_are_exact_integers() {
        for panel in [
            cadre_panel(&cadre_salaries()),
            subsidy_panel(&border_subsidies()),
            welfare_panel(&welfare_standards()),
        ] {
            for series in &panel.series {
                for bar in &series.bars {
                    assert_eq!(bar.label, bar.value.to_string());
                }
            }
        }
    }

    #[test]
    fn test_max_values() {
        assert_eq!(cadre_panel(&cadre_salaries()).max_value(), 44066);
        assert_eq!(subsidy_panel(&border_subsidies()).max_value(), 13800);
        assert_eq!(welfare_panel(&welfare_standards()).max_value(), 14778);
    }
}
