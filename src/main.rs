//! Command-line driver and entry point.
//!
//! This binary is a thin integration layer between the topten library and a
//! line-oriented terminal session. Each input line is one gesture or list
//! command; the driver translates it into a library [`Event`], executes the
//! returned actions, and prints the ranking after every re-render.
//!
//! # Usage
//!
//! ```text
//! topten [config.toml | key=value ...]
//! ```
//!
//! # Commands
//!
//! - `add ID`: Add an item to the end of the selection
//! - `remove ID`: Remove an item
//! - `clear`: Empty the selection
//! - `reorder ID ID ...`: Replace the order with a permutation
//! - `drag ID`: Start dragging an item (selected or from the catalog)
//! - `drop item ID`, `drop ranked`, `drop overflow`, `drop catalog`, `drop none`:
//!   Release the pointer over a target
//! - `cancel`: Abort the current drag
//! - `search QUERY`: List catalog items matching a fuzzy query
//! - `show`: Print the ranking
//! - `quit`: Exit

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use topten::app::Rejection;
use topten::storage::{JsonStorage, SelectionRecord, SelectionStorage};
use topten::ui::{render_catalog, render_ranking};
use topten::{handle_event, Action, Config, DropTarget, Event, InMemoryCatalog, ItemId, RankingSession, Region};

/// A parsed input line.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Event(Event),
    Search(String),
    Show,
    Quit,
}

/// Driver state wrapper.
///
/// Wraps the library's `RankingSession` with the runtime concerns the library
/// leaves to its caller: storage and the catalog.
struct Driver {
    session: RankingSession,
    storage: JsonStorage,
    catalog: InMemoryCatalog,
}

fn main() -> ExitCode {
    let config = match load_config(std::env::args().skip(1).collect()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("topten: {e}");
            return ExitCode::FAILURE;
        }
    };
    topten::observability::init_tracing(&config);

    let span = tracing::debug_span!("startup");
    let guard = span.entered();

    let catalog = match topten::load_catalog(&config) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::warn!(error = %e, "failed to load catalog");
            eprintln!("topten: catalog unavailable: {e}");
            InMemoryCatalog::default()
        }
    };

    let (session, storage) = match topten::initialize(&config) {
        Ok(parts) => parts,
        Err(e) => {
            eprintln!("topten: {e}");
            return ExitCode::FAILURE;
        }
    };
    drop(guard);

    let mut driver = Driver {
        session,
        storage,
        catalog,
    };
    driver.show();

    match driver.run(io::stdin().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("topten: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Reads a TOML file when the single argument names one, otherwise treats the
/// arguments as `key=value` pairs.
fn load_config(args: Vec<String>) -> topten::Result<Config> {
    if let [path] = args.as_slice() {
        if !path.contains('=') {
            return Config::from_toml_file(path);
        }
    }

    let mut map = BTreeMap::new();
    for arg in args {
        let (key, value) = arg
            .split_once('=')
            .ok_or_else(|| topten::TopTenError::Config(format!("expected key=value, got {arg:?}")))?;
        map.insert(key.trim().to_string(), value.to_string());
    }
    Ok(Config::from_map(&map))
}

/// Parses one input line. Blank lines and unknown commands yield `None`.
fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let verb = words.next()?;
    let rest: Vec<&str> = words.collect();
    let single = || match rest.as_slice() {
        [id] => Some(ItemId::from(*id)),
        _ => None,
    };

    Some(match verb {
        "add" => Command::Event(Event::Add(single()?)),
        "remove" => Command::Event(Event::Remove(single()?)),
        "clear" => Command::Event(Event::Clear),
        "reorder" => Command::Event(Event::Reorder(rest.iter().map(|id| ItemId::from(*id)).collect())),
        "drag" => Command::Event(Event::DragStart(single()?)),
        "drop" => Command::Event(Event::DragEnd(parse_target(&rest)?)),
        "cancel" => Command::Event(Event::DragCancel),
        "search" => Command::Search(rest.join(" ")),
        "show" => Command::Show,
        "quit" | "exit" => Command::Quit,
        _ => return None,
    })
}

/// `Some(None)` is a release over nothing.
fn parse_target(words: &[&str]) -> Option<Option<DropTarget>> {
    Some(match words {
        ["item", id] => Some(DropTarget::Item(ItemId::from(*id))),
        ["ranked"] => Some(DropTarget::Region(Region::Ranked)),
        ["overflow"] => Some(DropTarget::Region(Region::Overflow)),
        ["catalog"] => Some(DropTarget::Region(Region::Catalog)),
        ["none"] => None,
        _ => return None,
    })
}

impl Driver {
    fn run(&mut self, input: impl BufRead) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let Some(command) = parse_command(&line) else {
                if !line.trim().is_empty() {
                    println!("unrecognized command: {}", line.trim());
                }
                continue;
            };

            match command {
                Command::Event(event) => self.dispatch(&event),
                Command::Search(query) => {
                    print!("{}", render_catalog(&self.session.catalog_view(&self.catalog, &query)));
                }
                Command::Show => self.show(),
                Command::Quit => break,
            }
            io::stdout().flush()?;
        }
        Ok(())
    }

    fn dispatch(&mut self, event: &Event) {
        let _span = tracing::debug_span!("dispatch", event_type = ?event).entered();

        match handle_event(&mut self.session, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled successfully");
                for action in &actions {
                    self.execute_action(action);
                }
                if should_render {
                    self.show();
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                println!("error: {e}");
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// - `Persist`: Save the snapshot through the storage backend
    /// - `Rejected`: Tell the user the gesture had no effect
    fn execute_action(&mut self, action: &Action) {
        match action {
            Action::Persist(snapshot) => {
                if let Err(e) = self.storage.save(&SelectionRecord::from(snapshot)) {
                    tracing::warn!(error = %e, "failed to persist selection");
                    println!("warning: selection not saved: {e}");
                }
            }
            Action::Rejected(rejection) => println!("rejected: {}", describe(rejection)),
        }
    }

    fn show(&self) {
        print!("{}", render_ranking(&self.session.compute_viewmodel(&self.catalog)));
    }
}

fn describe(rejection: &Rejection) -> String {
    match rejection {
        Rejection::AlreadySelected(id) => format!("{id} is already selected"),
        Rejection::InvalidPermutation(detail) => format!("not a permutation of the selection ({detail})"),
        Rejection::InvalidMove(id) => format!("{id} is not in the selection"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_drop_targets() {
        assert_eq!(
            parse_command("drop item C"),
            Some(Command::Event(Event::DragEnd(Some(DropTarget::Item(ItemId::from("C"))))))
        );
        assert_eq!(parse_command("drop none"), Some(Command::Event(Event::DragEnd(None))));
        assert_eq!(parse_command("drop sideways"), None);
    }

    #[test]
    fn single_id_commands_reject_extra_words() {
        assert_eq!(parse_command("add A"), Some(Command::Event(Event::Add(ItemId::from("A")))));
        assert_eq!(parse_command("add A B"), None);
        assert_eq!(parse_command("   "), None);
    }

    #[test]
    fn key_value_arguments_build_config() {
        let config = load_config(vec!["autosave=false".to_string(), "trace_level=debug".to_string()]).unwrap();
        assert!(!config.autosave);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }
}
