//! End-to-end ranking flows through the public API.

use std::cell::RefCell;
use std::rc::Rc;

use topten::app::engine::apply_move;
use topten::app::{DropEffect, Rejection};
use topten::domain::{Container, MoveIntent, RANKED_CAPACITY};
use topten::storage::{JsonStorage, SelectionRecord, SelectionStorage};
use topten::{handle_event, initialize, Action, Config, DropTarget, Event, ItemId, RankingSession, Region};

fn ids(names: &[&str]) -> Vec<ItemId> {
    names.iter().map(|n| ItemId::from(*n)).collect()
}

fn session_with(names: &[&str], autosave: bool) -> RankingSession {
    let mut session = RankingSession::new(autosave);
    for name in names {
        assert!(session.add(ItemId::from(*name)));
    }
    session
}

fn drag(session: &mut RankingSession, id: &str, target: Option<DropTarget>) -> (bool, Vec<Action>) {
    handle_event(session, &Event::DragStart(ItemId::from(id))).unwrap();
    handle_event(session, &Event::DragEnd(target)).unwrap()
}

#[test]
fn dropping_overflow_item_into_full_ranked_list_spills_tail() {
    let mut session = session_with(&["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K"], false);
    assert_eq!(session.snapshot().overflow(), ids(&["K"]).as_slice());

    let (render, _) = drag(&mut session, "K", Some(DropTarget::Item(ItemId::from("C"))));

    let snapshot = session.snapshot();
    assert!(render);
    assert_eq!(snapshot.ranked(), ids(&["A", "B", "K", "C", "D", "E", "F", "G", "H", "I"]).as_slice());
    assert_eq!(snapshot.overflow(), ids(&["J"]).as_slice());
}

#[test]
fn background_drop_appends_without_spill() {
    let outcome = apply_move(
        &ids(&["A", "B"]),
        &ids(&["C"]),
        &MoveIntent::append("C", Container::Overflow, Container::Ranked),
    )
    .unwrap();

    assert_eq!(outcome.ranked, ids(&["A", "B", "C"]));
    assert!(outcome.overflow.is_empty());
    assert_eq!(outcome.spilled, None);
}

#[test]
fn demotion_shortens_ranked_and_never_spills() {
    let outcome = apply_move(
        &ids(&["A", "B", "C"]),
        &[],
        &MoveIntent::append("A", Container::Ranked, Container::Overflow),
    )
    .unwrap();

    assert_eq!(outcome.ranked, ids(&["B", "C"]));
    assert_eq!(outcome.overflow, ids(&["A"]));
    assert_eq!(outcome.spilled, None);
}

#[test]
fn duplicate_add_is_rejected_without_change() {
    let mut session = session_with(&["A", "B"], true);
    let version = session.snapshot().version();

    let (render, actions) = handle_event(&mut session, &Event::Add(ItemId::from("A"))).unwrap();

    assert!(!render);
    assert_eq!(actions, vec![Action::Rejected(Rejection::AlreadySelected(ItemId::from("A")))]);
    assert_eq!(session.snapshot().to_vec(), ids(&["A", "B"]));
    assert_eq!(session.snapshot().version(), version);
}

#[test]
fn invalid_reorder_is_rejected_and_selection_kept() {
    let mut session = session_with(&["A", "B", "C"], true);

    let (render, actions) = handle_event(&mut session, &Event::Reorder(ids(&["A", "B"]))).unwrap();

    assert!(!render);
    assert!(matches!(
        actions.as_slice(),
        [Action::Rejected(Rejection::InvalidPermutation(_))]
    ));
    assert_eq!(session.snapshot().to_vec(), ids(&["A", "B", "C"]));
}

#[test]
fn self_drop_and_outside_release_leave_selection_untouched() {
    let mut session = session_with(&["A", "B", "C"], true);
    let version = session.snapshot().version();

    let (_, actions) = drag(&mut session, "B", Some(DropTarget::Item(ItemId::from("B"))));
    assert!(actions.is_empty());

    let (_, actions) = drag(&mut session, "B", None);
    assert!(actions.is_empty());

    assert_eq!(session.snapshot().to_vec(), ids(&["A", "B", "C"]));
    assert_eq!(session.snapshot().version(), version);
    assert!(!session.drag_state().is_dragging());
}

#[test]
fn subscribers_see_one_snapshot_per_committed_drop() {
    let mut session = session_with(&["A", "B", "C"], false);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    session.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.to_vec()));

    drag(&mut session, "C", Some(DropTarget::Item(ItemId::from("A"))));
    drag(&mut session, "C", None);

    assert_eq!(*seen.borrow(), vec![ids(&["C", "A", "B"])]);
}

#[test]
fn catalog_drop_inserts_and_ranked_capacity_holds() {
    let names: Vec<String> = (0..RANKED_CAPACITY).map(|n| format!("item-{n}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let mut session = session_with(&refs, false);

    handle_event(&mut session, &Event::DragStart(ItemId::from("new"))).unwrap();
    let effect = session
        .end_drag(Some(&DropTarget::Item(ItemId::from("item-0"))))
        .unwrap();

    let snapshot = session.snapshot();
    assert_eq!(effect, DropEffect::Committed { spilled: Some(ItemId::from("item-9")) });
    assert_eq!(snapshot.ranked().len(), RANKED_CAPACITY);
    assert_eq!(snapshot.ranked()[0], ItemId::from("new"));
    assert_eq!(snapshot.overflow(), ids(&["item-9"]).as_slice());
}

#[test]
fn dropping_on_catalog_region_deselects() {
    let mut session = session_with(&["A", "B"], false);

    drag(&mut session, "A", Some(DropTarget::Region(Region::Catalog)));

    assert_eq!(session.snapshot().to_vec(), ids(&["B"]));
}

#[test]
fn persisted_order_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        data_dir: Some(dir.path().to_string_lossy().into_owned()),
        ..Default::default()
    };

    let (mut session, mut storage) = initialize(&config).unwrap();
    for id in ["A", "B", "C"] {
        let (_, actions) = handle_event(&mut session, &Event::Add(ItemId::from(id))).unwrap();
        for action in actions {
            if let Action::Persist(snapshot) = action {
                storage.save(&SelectionRecord::from(&snapshot)).unwrap();
            }
        }
    }
    let (_, actions) = drag(&mut session, "C", Some(DropTarget::Item(ItemId::from("A"))));
    for action in actions {
        if let Action::Persist(snapshot) = action {
            storage.save(&SelectionRecord::from(&snapshot)).unwrap();
        }
    }

    let (restored, _) = initialize(&config).unwrap();
    assert_eq!(restored.snapshot().to_vec(), ids(&["C", "A", "B"]));

    let reopened = JsonStorage::new(config.selection_path()).unwrap();
    assert_eq!(reopened.load().unwrap().map(|r| r.order), Some(ids(&["C", "A", "B"])));
}
