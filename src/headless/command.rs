//! Line commands accepted on stdin in headless mode
//!
//! ```text
//! reload | r
//! select <suite-id>
//! filter <family|all>
//! toggle <module-id>
//! save
//! simulate
//! create <name>|<owner>|<mission>
//! quit | q
//! ```

use suitehub_app::state::FamilyFilter;
use suitehub_app::{Message, UiAction};
use suitehub_core::{ModuleId, SuiteId};

/// Parse one stdin line into the messages it stands for.
///
/// Blank lines yield no messages.
pub fn parse(line: &str) -> Result<Vec<Message>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Vec::new());
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let action = |a: UiAction| Ok(vec![Message::Action(a)]);

    match verb.to_ascii_lowercase().as_str() {
        "reload" | "r" => action(UiAction::Reload),
        "select" => action(UiAction::SelectSuite(SuiteId(parse_id(rest)?))),
        "filter" => action(UiAction::FilterFamily(FamilyFilter::parse(rest))),
        "toggle" => action(UiAction::ToggleModule(ModuleId(parse_id(rest)?))),
        "save" => action(UiAction::SaveLinks),
        "simulate" => action(UiAction::Simulate),
        "create" => {
            let mut parts = rest.splitn(3, '|').map(str::trim);
            let name = parts.next().unwrap_or_default().to_string();
            let owner = parts.next().unwrap_or_default().to_string();
            let mission = parts.next().unwrap_or_default().to_string();
            Ok(vec![
                Message::Action(UiAction::FillForm {
                    name,
                    owner,
                    mission,
                }),
                Message::Action(UiAction::CreateSuite),
            ])
        }
        "quit" | "q" => Ok(vec![Message::Quit]),
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn parse_id(input: &str) -> Result<i64, String> {
    input
        .parse()
        .map_err(|_| format!("Expected a numeric id, got '{}'", input))
}
