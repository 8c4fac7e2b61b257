//! Catalog renderer: filtered module rows with membership and draft marks

use std::collections::BTreeSet;

use serde::Serialize;

use suitehub_core::format;
use suitehub_core::{Module, ModuleId, SuiteDetail};

use crate::state::FamilyFilter;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogRow {
    pub id: ModuleId,
    pub name: String,
    pub family: String,
    pub business_area: String,
    pub description: String,
    /// Formatted monthly cost, e.g. `"149.00 €/mo"`
    pub cost: String,
    pub value: i64,
    pub complexity: i64,
    pub maturity: String,
    /// Member of the active suite as last fetched
    pub selected: bool,
    /// Checked in the pending link selection
    pub checked: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CatalogView {
    pub filter_label: String,
    pub rows: Vec<CatalogRow>,
    /// Catalog size before filtering
    pub total: usize,
    /// Whether rows can be checked (a suite is active)
    pub linkable: bool,
}

pub fn render(
    modules: &[Module],
    filter: &FamilyFilter,
    detail: Option<&SuiteDetail>,
    draft: &BTreeSet<ModuleId>,
) -> CatalogView {
    let rows = modules
        .iter()
        .filter(|m| filter.matches(m))
        .map(|m| CatalogRow {
            id: m.id,
            name: m.name.clone(),
            family: m.family.clone(),
            business_area: m.business_area.clone(),
            description: m.description.clone(),
            cost: format::money(m.monthly_cost),
            value: m.value_score,
            complexity: m.complexity_score,
            maturity: m.maturity.clone(),
            selected: detail.is_some_and(|d| d.contains_module(m.id)),
            checked: draft.contains(&m.id),
        })
        .collect();

    CatalogView {
        filter_label: filter.label().to_string(),
        rows,
        total: modules.len(),
        linkable: detail.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use suitehub_core::{SuiteId, SuiteInfo, SuiteMetrics};
    use suitehub_remote::test_utils::{sample_catalog, test_module};

    fn detail_with(modules: Vec<Module>) -> SuiteDetail {
        SuiteDetail {
            suite: SuiteInfo {
                id: SuiteId(1),
                name: "Suite".into(),
                owner: "Ops".into(),
                mission: "Mission".into(),
            },
            metrics: SuiteMetrics::default(),
            modules,
        }
    }

    #[test]
    fn test_marks_exactly_members_as_selected() {
        let catalog = vec![
            test_module(1, "m1", "a"),
            test_module(2, "m2", "a"),
            test_module(3, "m3", "b"),
        ];
        let detail = detail_with(vec![test_module(2, "m2", "a")]);

        let view = render(&catalog, &FamilyFilter::All, Some(&detail), &BTreeSet::new());

        let selected: Vec<_> = view.rows.iter().map(|r| (r.id.0, r.selected)).collect();
        assert_eq!(selected, vec![(1, false), (2, true), (3, false)]);
    }

    #[test]
    fn test_all_filter_passes_everything() {
        let catalog = sample_catalog();
        let view = render(&catalog, &FamilyFilter::All, None, &BTreeSet::new());
        assert_eq!(view.rows.len(), catalog.len());
        assert_eq!(view.total, catalog.len());
        assert!(!view.linkable);
    }

    #[test]
    fn test_family_filter_keeps_only_that_family() {
        let catalog = sample_catalog();
        let filter = FamilyFilter::Family("marketing".into());
        let view = render(&catalog, &filter, None, &BTreeSet::new());

        assert_eq!(view.rows.len(), 2);
        assert!(view.rows.iter().all(|r| r.family == "marketing"));
        assert_eq!(view.filter_label, "marketing");
    }

    #[test]
    fn test_row_formats_cost_and_checks_draft() {
        let catalog = vec![test_module(1, "SEO", "marketing")];
        let draft: BTreeSet<_> = [ModuleId(1)].into_iter().collect();
        let view = render(&catalog, &FamilyFilter::All, None, &draft);

        assert_eq!(view.rows[0].cost, "100.00 €/mo");
        assert!(view.rows[0].checked);
        assert!(!view.rows[0].selected);
    }

    #[test]
    fn test_render_is_idempotent() {
        let catalog = sample_catalog();
        let detail = detail_with(vec![catalog[0].clone()]);
        let draft = BTreeSet::new();
        let first = render(&catalog, &FamilyFilter::All, Some(&detail), &draft);
        let second = render(&catalog, &FamilyFilter::All, Some(&detail), &draft);
        assert_eq!(first, second);
    }
}
