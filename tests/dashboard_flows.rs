//! Integration tests driving the engine against the in-memory server
//!
//! Every flow goes through `Engine`: messages in, spawned procedures, commits
//! and incremental renders out, exactly as the TUI and headless runners use it.

use std::time::Duration;

use suitehub_app::config::Settings;
use suitehub_app::state::{FamilyFilter, NoticeLevel};
use suitehub_app::view::detail::EMPTY_PROMPT;
use suitehub_app::view::runs::NO_RUNS_MESSAGE;
use suitehub_app::view::{self, DetailView, RunsView};
use suitehub_app::{Engine, Message, UiAction};
use suitehub_core::ModuleId;
use suitehub_remote::test_utils::{
    sample_catalog, test_module, FakeRemote, Operation, SERVER_DEFAULT_OWNER,
};

async fn booted(fake: FakeRemote) -> Engine<FakeRemote> {
    let mut engine = Engine::new(fake, Settings::default());
    engine.boot();
    engine.settle().await;
    engine
}

async fn act(engine: &mut Engine<FakeRemote>, action: UiAction) {
    engine.process_message(Message::Action(action));
    engine.settle().await;
}

fn assert_pairing(engine: &Engine<FakeRemote>) {
    let session = &engine.state.session;
    if let Some(detail) = &session.current_detail {
        assert_eq!(Some(detail.suite.id), session.current_suite_id);
    }
}

fn assert_matches_full_render(engine: &mut Engine<FakeRemote>) {
    let incremental = engine.state.surfaces.clone();
    view::render_all(&mut engine.state);
    assert_eq!(incremental, engine.state.surfaces);
}

/// Ids of catalog rows marked as members, in id order
fn selected_ids(engine: &Engine<FakeRemote>) -> Vec<i64> {
    let mut ids: Vec<i64> = engine
        .state
        .surfaces
        .catalog
        .rows
        .iter()
        .filter(|r| r.selected)
        .map(|r| r.id.0)
        .collect();
    ids.sort_unstable();
    ids
}

#[tokio::test]
async fn test_empty_server_shows_empty_prompt_only() {
    let mut engine = booted(FakeRemote::seeded()).await;

    assert_eq!(
        engine.state.surfaces.detail,
        DetailView::Placeholder {
            text: EMPTY_PROMPT.into()
        }
    );
    assert!(engine.state.surfaces.detail.panel().is_none());
    assert_eq!(engine.state.surfaces.runs, RunsView::Hidden);
    assert_eq!(engine.state.surfaces.catalog.rows.len(), 6);
    assert_matches_full_render(&mut engine);
}

#[tokio::test]
async fn test_boot_failure_is_rendered_in_detail() {
    let fake = FakeRemote::seeded();
    fake.fail_next(Operation::Catalog, Some("catalog unavailable"));

    let engine = booted(fake).await;

    assert_eq!(
        engine.state.surfaces.detail,
        DetailView::Placeholder {
            text: "Failed to load: catalog unavailable".into()
        }
    );
    assert!(engine.state.session.modules.is_empty());
}

#[tokio::test]
async fn test_catalog_reload_replaces_wholesale() {
    let mut engine = booted(FakeRemote::with_modules(vec![
        test_module(1, "A1", "alpha"),
        test_module(2, "A2", "alpha"),
        test_module(3, "A3", "beta"),
    ]))
    .await;

    engine.remote().set_modules(vec![
        test_module(7, "B7", "gamma"),
        test_module(8, "B8", "gamma"),
    ]);
    act(&mut engine, UiAction::Reload).await;

    let ids: Vec<i64> = engine
        .state
        .surfaces
        .catalog
        .rows
        .iter()
        .map(|r| r.id.0)
        .collect();
    assert_eq!(ids, vec![7, 8]);
    assert_eq!(engine.state.families, vec!["gamma".to_string()]);
    assert_matches_full_render(&mut engine);
}

#[tokio::test]
async fn test_selection_marks_exactly_members() {
    let fake = FakeRemote::seeded();
    fake.insert_suite("Core", "Ops", "Run the shop", &[2]);

    let mut engine = booted(fake).await;

    assert_pairing(&engine);
    assert_eq!(selected_ids(&engine), vec![2]);
    assert!(engine.state.surfaces.detail.panel().is_some());
    assert_matches_full_render(&mut engine);
}

#[tokio::test]
async fn test_save_links_replaces_membership() {
    let fake = FakeRemote::seeded();
    let id = fake.insert_suite("Core", "Ops", "Run the shop", &[2, 4]);
    let mut engine = booted(fake).await;

    // Draft starts at the current members {2, 4}; end up with {1, 3}
    for module in [2, 4, 1, 3] {
        act(&mut engine, UiAction::ToggleModule(ModuleId(module))).await;
    }
    act(&mut engine, UiAction::SaveLinks).await;

    assert_eq!(
        engine.remote().members(id),
        vec![ModuleId(1), ModuleId(3)]
    );
    assert_eq!(selected_ids(&engine), vec![1, 3]);
    assert_pairing(&engine);
    assert_matches_full_render(&mut engine);
}

#[tokio::test]
async fn test_family_filter_passes_through() {
    let fake = FakeRemote::seeded();
    fake.insert_suite("Core", "Ops", "Run the shop", &[]);
    let mut engine = booted(fake).await;

    act(
        &mut engine,
        UiAction::FilterFamily(FamilyFilter::Family("management".into())),
    )
    .await;
    let names: Vec<&str> = engine
        .state
        .surfaces
        .catalog
        .rows
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, vec!["ERP Core", "Invoicing"]);

    act(&mut engine, UiAction::FilterFamily(FamilyFilter::All)).await;
    assert_eq!(
        engine.state.surfaces.catalog.rows.len(),
        sample_catalog().len()
    );
    assert_matches_full_render(&mut engine);
}

#[tokio::test]
async fn test_create_with_blank_owner() {
    let mut engine = booted(FakeRemote::seeded()).await;

    act(
        &mut engine,
        UiAction::FillForm {
            name: "Growth".into(),
            owner: "".into(),
            mission: "Expand".into(),
        },
    )
    .await;
    act(&mut engine, UiAction::CreateSuite).await;

    let entries = &engine.state.surfaces.suite_list.entries;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "Growth");
    assert_eq!(entries[0].owner, SERVER_DEFAULT_OWNER);
    assert_eq!(entries[0].module_count, 0);
    assert!(entries[0].active);

    assert_eq!(
        engine.state.surfaces.runs,
        RunsView::Empty {
            message: NO_RUNS_MESSAGE.into()
        }
    );
    assert!(engine.state.ui.form.name.is_empty());
    assert_eq!(engine.state.surfaces.kpis.suites, 1);
    assert_pairing(&engine);
    assert_matches_full_render(&mut engine);
}

#[tokio::test]
async fn test_invalid_create_sends_no_request() {
    let mut engine = booted(FakeRemote::seeded()).await;

    act(
        &mut engine,
        UiAction::FillForm {
            name: "   ".into(),
            owner: "Ops".into(),
            mission: "Expand".into(),
        },
    )
    .await;
    act(&mut engine, UiAction::CreateSuite).await;

    assert_eq!(engine.remote().call_count(Operation::CreateSuite), 0);
    let notice = engine.state.ui.notice.as_ref().expect("notice expected");
    assert_eq!(notice.level, NoticeLevel::Warning);
    assert!(engine.state.surfaces.suite_list.entries.is_empty());
}

#[tokio::test]
async fn test_simulate_on_empty_suite_counts_run() {
    let fake = FakeRemote::seeded();
    fake.insert_suite("Empty", "Ops", "Nothing linked", &[]);
    let mut engine = booted(fake).await;
    assert_eq!(engine.state.surfaces.kpis.runs, 0);

    act(&mut engine, UiAction::Simulate).await;

    assert_eq!(engine.state.surfaces.kpis.runs, 1);
    assert_eq!(engine.remote().run_count(), 1);
    match &engine.state.surfaces.runs {
        RunsView::Entries(entries) => assert_eq!(entries.len(), 1),
        other => panic!("expected one run, got {:?}", other),
    }
    assert_matches_full_render(&mut engine);
}

#[tokio::test]
async fn test_late_selection_never_overrides_newer_one() {
    let fake = FakeRemote::seeded();
    let first = fake.insert_suite("First", "Ops", "One", &[1]);
    let second = fake.insert_suite("Second", "Ops", "Two", &[5]);
    let mut engine = booted(fake).await;
    // Suites are listed newest first
    assert_eq!(engine.state.active_suite(), Some(second));

    // The earlier request answers last
    engine
        .remote()
        .delay_detail(first, Duration::from_millis(150));
    engine.process_message(Message::Action(UiAction::SelectSuite(first)));
    engine.process_message(Message::Action(UiAction::SelectSuite(second)));
    engine.settle().await;

    assert_eq!(engine.state.active_suite(), Some(second));
    assert_pairing(&engine);
    assert_eq!(selected_ids(&engine), vec![5]);
    assert_matches_full_render(&mut engine);
}

#[tokio::test]
async fn test_reload_keeps_or_replaces_active_suite() {
    let fake = FakeRemote::seeded();
    let first = fake.insert_suite("First", "Ops", "One", &[]);
    let second = fake.insert_suite("Second", "Ops", "Two", &[]);
    let mut engine = booted(fake).await;

    act(&mut engine, UiAction::SelectSuite(second)).await;
    act(&mut engine, UiAction::Reload).await;
    assert_eq!(engine.state.active_suite(), Some(second));

    engine.remote().remove_suite(second);
    act(&mut engine, UiAction::Reload).await;
    assert_eq!(engine.state.active_suite(), Some(first));
    assert_pairing(&engine);
    assert_matches_full_render(&mut engine);
}

#[tokio::test]
async fn test_failed_save_keeps_state_and_reports() {
    let fake = FakeRemote::seeded();
    let id = fake.insert_suite("Core", "Ops", "Run the shop", &[2]);
    let mut engine = booted(fake).await;

    engine
        .remote()
        .fail_next(Operation::ReplaceModules, Some("Suite locked"));
    act(&mut engine, UiAction::ToggleModule(ModuleId(6))).await;
    act(&mut engine, UiAction::SaveLinks).await;

    let notice = engine.state.ui.notice.as_ref().expect("notice expected");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.text.contains("Suite locked"));
    assert_eq!(engine.remote().members(id), vec![ModuleId(2)]);
    assert_eq!(selected_ids(&engine), vec![2]);
    assert_eq!(engine.state.active_suite(), Some(id));
}
