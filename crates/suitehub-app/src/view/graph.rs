//! Dependency graph between state slices and rendered surfaces

use std::collections::BTreeSet;

use serde::Serialize;

/// A part of [`AppState`](crate::state::AppState) read by renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slice {
    Overview,
    /// Modules plus family labels
    Catalog,
    FamilyFilter,
    Suites,
    /// Active suite id, detail and runs
    ActiveSuite,
    LinkSelection,
    BootError,
}

/// One rendered dashboard region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    Kpis,
    FamilyFilter,
    SuiteList,
    Detail,
    Runs,
    Catalog,
}

impl Surface {
    /// Every surface, in render order
    pub const RENDER_ORDER: [Surface; 6] = [
        Surface::Kpis,
        Surface::FamilyFilter,
        Surface::SuiteList,
        Surface::Detail,
        Surface::Runs,
        Surface::Catalog,
    ];

    /// Slices this surface's renderer reads
    pub fn reads(self) -> &'static [Slice] {
        match self {
            Surface::Kpis => &[Slice::Overview],
            Surface::FamilyFilter => &[Slice::Catalog, Slice::FamilyFilter],
            Surface::SuiteList => &[Slice::Suites, Slice::ActiveSuite],
            Surface::Detail => &[Slice::Suites, Slice::ActiveSuite, Slice::BootError],
            Surface::Runs => &[Slice::ActiveSuite],
            Surface::Catalog => &[
                Slice::Catalog,
                Slice::FamilyFilter,
                Slice::ActiveSuite,
                Slice::LinkSelection,
            ],
        }
    }
}

/// Set of slices written by one commit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changes(BTreeSet<Slice>);

impl Changes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, slice: Slice) {
        self.0.insert(slice);
    }

    pub fn contains(&self, slice: Slice) -> bool {
        self.0.contains(&slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Surfaces reading any changed slice, in render order
    pub fn affected(&self) -> Vec<Surface> {
        Surface::RENDER_ORDER
            .into_iter()
            .filter(|s| s.reads().iter().any(|slice| self.contains(*slice)))
            .collect()
    }
}

impl FromIterator<Slice> for Changes {
    fn from_iter<I: IntoIterator<Item = Slice>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_suite_cascades_into_detail_runs_and_catalog() {
        let changes: Changes = [Slice::ActiveSuite].into_iter().collect();
        assert_eq!(
            changes.affected(),
            vec![
                Surface::SuiteList,
                Surface::Detail,
                Surface::Runs,
                Surface::Catalog
            ]
        );
    }

    #[test]
    fn test_filter_change_only_touches_filter_and_catalog() {
        let changes: Changes = [Slice::FamilyFilter].into_iter().collect();
        assert_eq!(
            changes.affected(),
            vec![Surface::FamilyFilter, Surface::Catalog]
        );
    }

    #[test]
    fn test_overview_only_touches_kpis() {
        let changes: Changes = [Slice::Overview].into_iter().collect();
        assert_eq!(changes.affected(), vec![Surface::Kpis]);
    }

    #[test]
    fn test_no_changes_no_surfaces() {
        assert!(Changes::new().affected().is_empty());
    }

    #[test]
    fn test_every_slice_reaches_a_surface() {
        for slice in [
            Slice::Overview,
            Slice::Catalog,
            Slice::FamilyFilter,
            Slice::Suites,
            Slice::ActiveSuite,
            Slice::LinkSelection,
            Slice::BootError,
        ] {
            let changes: Changes = [slice].into_iter().collect();
            assert!(!changes.affected().is_empty(), "{slice:?} is never rendered");
        }
    }
}
