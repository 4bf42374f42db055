/// Scenario 1: delete, move across groups, then add a group
///
/// Walks `[[A,B],[],[C,D,E]]` through the edits a drag-and-drop board would
/// issue and checks the item count after every step.
mod common;

use common::{abcde, structure};
use regroup_core::{GroupEditor, History, Location, Structure};

#[test]
fn test_scenario_01_happy_path_step_by_step() {
    // GIVEN the initial fixture
    let s0 = abcde();
    assert_eq!(s0.item_count(), 5);

    // WHEN deleting B
    let s1 = regroup_core::ops::delete_item(&s0, Location::new(0, 1)).expect("delete B");
    assert_eq!(s1, structure(&[&['A'], &[], &['C', 'D', 'E']]));
    assert_eq!(s1.item_count(), 4);

    // AND moving C into the empty group
    let s2 = regroup_core::ops::move_item(&s1, Location::new(2, 0), Location::new(1, 0))
        .expect("move C");
    assert_eq!(s2, structure(&[&['A'], &['C'], &['D', 'E']]));
    assert_eq!(s2.item_count(), 4);

    // AND adding a group
    let s3 = regroup_core::ops::add_group(&s2);
    assert_eq!(s3, structure(&[&['A'], &['C'], &['D', 'E'], &[]]));
    assert_eq!(s3.item_count(), 4);

    // THEN every earlier version is still intact
    assert_eq!(s0, abcde());
    assert_eq!(s1.group_count(), 3);
    assert_eq!(s2.group_count(), 3);
}

/// Run one edit through a fresh editor and return the single delivered version
fn step<F>(current: &Structure<char>, edit: F) -> Structure<char>
where
    F: FnOnce(&mut GroupEditor<'_, char, History<char>>) -> regroup_core::Result<()>,
{
    let mut editor = GroupEditor::new(current, History::new());
    edit(&mut editor).expect("edit should succeed");

    let history = editor.into_sink();
    assert_eq!(history.len(), 1, "sink must fire exactly once");
    history.latest().cloned().expect("sink fired")
}

#[test]
fn test_scenario_01_through_editor_and_sink() {
    // GIVEN a caller holding the current version
    let mut current = abcde();
    let mut counts = Vec::new();

    // WHEN each edit is issued against the version the previous one produced
    current = step(&current, |e| e.delete_item(Location::new(0, 1)));
    counts.push(current.item_count());

    current = step(&current, |e| {
        e.move_item(Location::new(2, 0), Location::new(1, 0))
    });
    counts.push(current.item_count());

    current = step(&current, |e| e.add_group());
    counts.push(current.item_count());

    // THEN the final structure matches and the item count never moved
    assert_eq!(current, structure(&[&['A'], &['C'], &['D', 'E'], &[]]));
    assert_eq!(counts, vec![4, 4, 4]);
}

#[test]
fn test_scenario_01_single_item_moved_onto_itself() {
    // GIVEN a single group holding only X
    let s = structure(&[&['X']]);

    // WHEN moving X to its own location (group is not empty, so not the no-op path)
    let next = regroup_core::ops::move_item(&s, Location::new(0, 0), Location::new(0, 0))
        .expect("move X");

    // THEN nothing changes
    assert_eq!(next, structure(&[&['X']]));
}
