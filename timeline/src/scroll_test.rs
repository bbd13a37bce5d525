use super::*;

#[test]
fn fragment_takes_precedence_over_saved_position() {
    let saved = Some(ScrollPosition::new(0.0, 480.0));
    assert_eq!(scroll_target("#intro", saved), ScrollTarget::Element("intro".to_owned()));
}

#[test]
fn saved_position_used_without_fragment() {
    let saved = Some(ScrollPosition::new(10.0, 480.0));
    assert_eq!(scroll_target("", saved), ScrollTarget::Position(ScrollPosition::new(10.0, 480.0)));
}

#[test]
fn falls_back_to_origin() {
    assert_eq!(scroll_target("", None), ScrollTarget::Position(ScrollPosition::ORIGIN));
    assert_eq!(scroll_target("#", None), ScrollTarget::Position(ScrollPosition::ORIGIN));
}

#[test]
fn fragment_is_percent_decoded() {
    assert_eq!(scroll_target("#part%201", None), ScrollTarget::Element("part 1".to_owned()));
}

// =============================================================
// ScrollMemory
// =============================================================

#[test]
fn traversal_restores_recorded_position() {
    let mut memory = ScrollMemory::new();
    memory.record("/realms/abc", ScrollPosition::new(0.0, 300.0));

    assert_eq!(memory.saved("/realms/abc"), Some(ScrollPosition::new(0.0, 300.0)));
    assert_eq!(memory.target_for("/", "", Navigation::Traverse), ScrollTarget::Position(ScrollPosition::ORIGIN));
    assert_eq!(
        memory.target_for("/realms/abc", "", Navigation::Traverse),
        ScrollTarget::Position(ScrollPosition::new(0.0, 300.0))
    );
}

#[test]
fn link_navigation_ignores_recorded_position() {
    let mut memory = ScrollMemory::new();
    // Scrolled down on `/`, then left for a realm page.
    memory.record("/", ScrollPosition::new(0.0, 800.0));

    assert_eq!(memory.target_for("/", "", Navigation::Push), ScrollTarget::Position(ScrollPosition::ORIGIN));
}

#[test]
fn link_navigation_still_honors_fragment() {
    let mut memory = ScrollMemory::new();
    memory.record("/realms/abc", ScrollPosition::new(0.0, 300.0));

    assert_eq!(
        memory.target_for("/realms/abc", "#event-7", Navigation::Push),
        ScrollTarget::Element("event-7".to_owned())
    );
}

#[test]
fn re_recording_replaces_previous_offset() {
    let mut memory = ScrollMemory::new();
    memory.record("/", ScrollPosition::new(0.0, 100.0));
    memory.record("/", ScrollPosition::new(0.0, 200.0));

    assert_eq!(memory.len(), 1);
    assert_eq!(memory.saved("/"), Some(ScrollPosition::new(0.0, 200.0)));
}

#[test]
fn memory_is_bounded_and_evicts_oldest() {
    let mut memory = ScrollMemory::new();
    for i in 0..=MAX_SAVED_POSITIONS {
        memory.record(&format!("/realms/r{i}"), ScrollPosition::new(0.0, 1.0));
    }

    assert_eq!(memory.len(), MAX_SAVED_POSITIONS);
    assert_eq!(memory.saved("/realms/r0"), None);
    assert!(memory.saved(&format!("/realms/r{MAX_SAVED_POSITIONS}")).is_some());
}
