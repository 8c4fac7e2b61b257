//! Family filter renderer

use serde::Serialize;

use crate::state::FamilyFilter;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOption {
    pub label: String,
    pub filter: FamilyFilter,
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FamilyFilterView {
    /// The wildcard first, then every family label of the last catalog fetch
    pub options: Vec<FilterOption>,
}

impl FamilyFilterView {
    pub fn active_index(&self) -> Option<usize> {
        self.options.iter().position(|o| o.active)
    }
}

pub fn render(families: &[String], active: &FamilyFilter) -> FamilyFilterView {
    let wildcard = std::iter::once(FamilyFilter::All);
    let labels = families.iter().cloned().map(FamilyFilter::Family);

    let options = wildcard
        .chain(labels)
        .map(|filter| FilterOption {
            label: filter.label().to_string(),
            active: filter == *active,
            filter,
        })
        .collect();

    FamilyFilterView { options }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_comes_first() {
        let view = render(&["marketing".into(), "management".into()], &FamilyFilter::All);
        let labels: Vec<_> = view.options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["All families", "marketing", "management"]);
        assert_eq!(view.active_index(), Some(0));
    }

    #[test]
    fn test_marks_active_family() {
        let view = render(
            &["marketing".into(), "management".into()],
            &FamilyFilter::Family("management".into()),
        );
        assert_eq!(view.active_index(), Some(2));
        assert_eq!(view.options.iter().filter(|o| o.active).count(), 1);
    }
}
