//! Application state (Model in TEA pattern)

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use serde::Serialize;

use suitehub_core::{Module, ModuleId, Overview, Run, Suite, SuiteDetail, SuiteId};

use crate::config::Settings;
use crate::procedures::ProcedureKind;
use crate::tracker::RequestTracker;
use crate::view::{Surface, Surfaces};

/// The synchronized model of the remote data
///
/// Only replaced wholesale by committed procedure results. Writing here never
/// triggers a re-render by itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Single source of truth for the catalog
    pub modules: Vec<Module>,
    pub suites: Vec<Suite>,
    pub current_suite_id: Option<SuiteId>,
    /// Always describes `current_suite_id` when present
    pub current_detail: Option<SuiteDetail>,
    pub current_runs: Vec<Run>,
}

impl SessionState {
    pub fn is_member(&self, id: ModuleId) -> bool {
        self.current_detail
            .as_ref()
            .is_some_and(|d| d.contains_module(id))
    }

    pub fn suite_index(&self, id: SuiteId) -> Option<usize> {
        self.suites.iter().position(|s| s.id == id)
    }
}

/// Catalog family filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyFilter {
    #[default]
    All,
    Family(String),
}

impl FamilyFilter {
    pub fn matches(&self, module: &Module) -> bool {
        match self {
            FamilyFilter::All => true,
            FamilyFilter::Family(family) => module.family == *family,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            FamilyFilter::All => "All families",
            FamilyFilter::Family(family) => family,
        }
    }

    /// Parse user input: `all` (any case) or a family label
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() || input.eq_ignore_ascii_case("all") {
            FamilyFilter::All
        } else {
            FamilyFilter::Family(input.to_string())
        }
    }
}

/// Dashboard panel holding keyboard focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Panel {
    #[default]
    Suites,
    Catalog,
    Form,
}

impl Panel {
    pub fn next(self) -> Self {
        match self {
            Panel::Suites => Panel::Catalog,
            Panel::Catalog => Panel::Form,
            Panel::Form => Panel::Suites,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Panel::Suites => Panel::Form,
            Panel::Catalog => Panel::Suites,
            Panel::Form => Panel::Catalog,
        }
    }
}

/// Field of the new-suite form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Name,
    Owner,
    Mission,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Owner,
            FormField::Owner => FormField::Mission,
            FormField::Mission => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Mission,
            FormField::Owner => FormField::Name,
            FormField::Mission => FormField::Owner,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Owner => "Owner",
            FormField::Mission => "Mission",
        }
    }
}

/// New-suite form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteForm {
    pub name: String,
    pub owner: String,
    pub mission: String,
    pub field: FormField,
}

impl SuiteForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Owner => &self.owner,
            FormField::Mission => &self.mission,
        }
    }

    pub fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Owner => &mut self.owner,
            FormField::Mission => &mut self.mission,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// One-line message in the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
    pub created: Instant,
}

impl Notice {
    pub fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            created: Instant::now(),
        }
    }

    /// Errors stay until replaced; other notices expire after `ttl`
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        self.level != NoticeLevel::Error && now.saturating_duration_since(self.created) >= ttl
    }
}

/// Interactive state that never leaves the client
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focus: Panel,
    pub suite_cursor: usize,
    pub catalog_cursor: usize,
    pub family_filter: FamilyFilter,
    /// Catalog rows checked for the active suite, submitted as a whole on save
    pub link_draft: BTreeSet<ModuleId>,
    pub form: SuiteForm,
    pub notice: Option<Notice>,
    pub in_flight: Vec<ProcedureKind>,
    /// Text shown in the detail placeholder after a failed boot
    pub boot_error: Option<String>,
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Most recently completed procedure
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub procedure: ProcedureKind,
    pub error: Option<String>,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub session: SessionState,

    /// Last overview payload (KPI input)
    pub overview: Option<Overview>,

    /// Family labels of the last catalog fetch
    pub families: Vec<String>,

    pub ui: UiState,

    pub tracker: RequestTracker,

    /// Rendered view models of every dashboard region
    pub surfaces: Surfaces,

    /// Surfaces touched by the most recent render pass, in render order
    pub last_rendered: Vec<Surface>,

    /// Incremented on every render pass
    pub render_seq: u64,

    pub last_completion: Option<Completion>,

    /// Incremented whenever a procedure result is handled
    pub completion_seq: u64,

    pub settings: Settings,

    pub phase: AppPhase,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state with the given settings and a fully rendered empty view
    pub fn with_settings(settings: Settings) -> Self {
        let mut state = Self {
            session: SessionState::default(),
            overview: None,
            families: Vec::new(),
            ui: UiState::default(),
            tracker: RequestTracker::new(),
            surfaces: Surfaces::default(),
            last_rendered: Vec::new(),
            render_seq: 0,
            last_completion: None,
            completion_seq: 0,
            settings,
            phase: AppPhase::Running,
        };
        crate::view::render_all(&mut state);
        state
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn is_busy(&self) -> bool {
        !self.ui.in_flight.is_empty()
    }

    pub fn active_suite(&self) -> Option<SuiteId> {
        self.session.current_suite_id
    }

    pub fn notify(&mut self, level: NoticeLevel, text: impl Into<String>) {
        self.ui.notice = Some(Notice::new(level, text));
    }

    pub fn notice_ttl(&self) -> Duration {
        Duration::from_secs(self.settings.ui.notice_secs)
    }

    /// Keep both list cursors inside their lists
    pub fn clamp_cursors(&mut self) {
        let suites = self.session.suites.len();
        self.ui.suite_cursor = self.ui.suite_cursor.min(suites.saturating_sub(1));

        let rows = self.surfaces.catalog.rows.len();
        self.ui.catalog_cursor = self.ui.catalog_cursor.min(rows.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use suitehub_remote::test_utils::test_module;

    #[test]
    fn test_family_filter_matches() {
        let module = test_module(1, "SEO", "marketing");
        assert!(FamilyFilter::All.matches(&module));
        assert!(FamilyFilter::Family("marketing".into()).matches(&module));
        assert!(!FamilyFilter::Family("management".into()).matches(&module));
    }

    #[test]
    fn test_family_filter_parse() {
        assert_eq!(FamilyFilter::parse("ALL"), FamilyFilter::All);
        assert_eq!(FamilyFilter::parse(""), FamilyFilter::All);
        assert_eq!(
            FamilyFilter::parse(" marketing "),
            FamilyFilter::Family("marketing".into())
        );
    }

    #[test]
    fn test_panel_cycle() {
        assert_eq!(Panel::Suites.next().next().next(), Panel::Suites);
        assert_eq!(Panel::Suites.prev(), Panel::Form);
    }

    #[test]
    fn test_notice_expiry() {
        let ttl = Duration::from_secs(4);
        let info = Notice::new(NoticeLevel::Info, "saved");
        let error = Notice::new(NoticeLevel::Error, "boom");
        let later = info.created + Duration::from_secs(5);

        assert!(!info.is_expired(info.created, ttl));
        assert!(info.is_expired(later, ttl));
        assert!(!error.is_expired(error.created + Duration::from_secs(60), ttl));
    }

    #[test]
    fn test_new_state_is_rendered() {
        let state = AppState::new();
        assert!(state.session.current_suite_id.is_none());
        assert!(!state.is_busy());
        assert_eq!(state.last_rendered.len(), 6);
    }

    #[test]
    fn test_form_field_access() {
        let mut form = SuiteForm::default();
        form.value_mut(FormField::Mission).push_str("Expand");
        assert_eq!(form.value(FormField::Mission), "Expand");
        form.clear();
        assert!(form.mission.is_empty());
        assert_eq!(form.field, FormField::Name);
    }
}
