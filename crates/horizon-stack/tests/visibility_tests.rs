//! Tests for visibility notifications and scrolling.

mod common;

use std::time::Duration;

use common::*;
use horizon_stack::prelude::*;

/// A 100x100 viewport over a spacer 80 tall and a row 50 tall below it.
fn spacer_and_row() -> (Stack, RowId) {
    let mut stack = flush_stack(100.0, 100.0);
    stack.insert(view(80.0), InsertLocation::Bottom, false);
    let row = stack.insert(view(50.0), InsertLocation::Bottom, false).unwrap();
    (stack, row)
}

fn uniform_rows(count: usize, height: f32) -> Stack {
    let mut stack = flush_stack(100.0, 100.0);
    for _ in 0..count {
        stack.insert(view(height), InsertLocation::Bottom, false);
    }
    stack
}

fn scroll_y(stack: &mut Stack, y: f32) {
    stack.set_content_offset(Point::new(0.0, y), false);
}

// ============================================================================
// Visibility
// ============================================================================

#[test]
fn test_visibility_edge_transitions() {
    let (mut stack, row) = spacer_and_row();
    stack.set_row_hidden(row, true, false, None);
    assert_eq!(stack.last_visibility(row), Some(RowVisibility::Hidden));
    let events = Recorder::install(&mut stack);

    // hidden -> partial
    stack.set_row_hidden(row, false, false, None);
    assert_eq!(stack.visibility(row), RowVisibility::Partial);
    // partial -> entire
    scroll_y(&mut stack, 40.0);
    assert_eq!(stack.visibility(row), RowVisibility::Entire);
    // entire -> partial
    scroll_y(&mut stack, 90.0);
    assert_eq!(stack.visibility(row), RowVisibility::Partial);
    // partial -> offscreen
    scroll_y(&mut stack, 200.0);
    assert_eq!(stack.visibility(row), RowVisibility::Offscreen);

    assert_eq!(
        visibility_events(&events, row),
        vec![
            Event::Visible(row, 1, RowVisibility::Partial),
            Event::Hidden(row, 1, RowVisibility::Offscreen),
        ]
    );
}

#[test]
fn test_hiding_visible_row_reports_hidden() {
    let (mut stack, row) = spacer_and_row();
    let events = Recorder::install(&mut stack);

    stack.set_row_hidden(row, true, false, None);

    assert_eq!(
        visibility_events(&events, row),
        vec![Event::Hidden(row, 1, RowVisibility::Hidden)]
    );
}

#[test]
fn test_jumping_between_offscreen_and_entire_is_silent() {
    let mut stack = uniform_rows(10, 50.0);
    let first = stack.first_row().unwrap();
    let events = Recorder::install(&mut stack);

    scroll_y(&mut stack, 300.0);
    assert_eq!(stack.visibility(first), RowVisibility::Offscreen);
    scroll_y(&mut stack, 0.0);
    assert_eq!(stack.visibility(first), RowVisibility::Entire);

    assert!(visibility_events(&events, first).is_empty());
}

#[test]
fn test_new_and_removed_rows_are_silent() {
    let mut stack = flush_stack(100.0, 100.0);
    let events = Recorder::install(&mut stack);

    let row = stack.insert(view(40.0), InsertLocation::Bottom, false).unwrap();
    let animated = stack.insert(view(40.0), InsertLocation::Bottom, true).unwrap();
    stack.finish_animations();
    stack.remove_row(row, false);

    assert!(visibility_events(&events, row).is_empty());
    assert!(visibility_events(&events, animated).is_empty());
    assert_eq!(stack.last_visibility(animated), Some(RowVisibility::Entire));
}

#[test]
fn test_visibility_cache_updates_without_observer() {
    let mut stack = uniform_rows(4, 50.0);
    let last = stack.last_row().unwrap();
    assert_eq!(stack.last_visibility(last), Some(RowVisibility::Offscreen));

    stack.scroll_to_bottom(false);

    assert_eq!(stack.last_visibility(last), Some(RowVisibility::Entire));
}

#[test]
fn test_layout_and_content_size_notifications() {
    let mut stack = flush_stack(100.0, 100.0);
    stack.insert(view(30.0), InsertLocation::Bottom, false);
    let events = Recorder::install(&mut stack);

    stack.insert(view(20.0), InsertLocation::Bottom, false);
    stack.layout();

    let events = events.borrow();
    let sizes: Vec<&Event> = events
        .iter()
        .filter(|event| matches!(event, Event::ContentSize(..)))
        .collect();
    assert_eq!(
        sizes,
        vec![&Event::ContentSize(
            Size::new(100.0, 30.0),
            Size::new(100.0, 50.0)
        )]
    );
    let layouts = events.iter().filter(|event| **event == Event::Layout).count();
    assert_eq!(layouts, 2);
}

#[test]
fn test_observer_can_be_replaced_and_taken() {
    let mut stack = flush_stack(100.0, 100.0);
    assert!(!stack.has_observer());

    let first = Recorder::install(&mut stack);
    let previous = stack.set_observer(Box::new(Recorder::default()));
    assert!(previous.is_some());

    stack.insert(view(10.0), InsertLocation::Bottom, false);
    assert!(first.borrow().is_empty());

    assert!(stack.take_observer().is_some());
    assert!(!stack.has_observer());
}

// ============================================================================
// Scrolling
// ============================================================================

#[test]
fn test_scroll_positions() {
    let mut stack = uniform_rows(10, 50.0);

    stack.scroll_to_index(4, ScrollPosition::Initial, false);
    assert_eq!(stack.content_offset().y, 200.0);

    stack.scroll_to_index(4, ScrollPosition::Middle, false);
    assert_eq!(stack.content_offset().y, 175.0);

    stack.scroll_to_index(4, ScrollPosition::Final, false);
    assert_eq!(stack.content_offset().y, 150.0);

    // Clamped to the end of the content.
    stack.scroll_to_index(9, ScrollPosition::Initial, false);
    assert_eq!(stack.content_offset().y, 400.0);

    stack.scroll_to_index(0, ScrollPosition::Final, false);
    assert_eq!(stack.content_offset().y, 0.0);
}

#[test]
fn test_automatic_scroll_is_minimal() {
    let mut stack = uniform_rows(10, 50.0);

    stack.scroll_to_index(1, ScrollPosition::Automatic, false);
    assert_eq!(stack.content_offset().y, 0.0);

    stack.scroll_to_index(4, ScrollPosition::Automatic, false);
    assert_eq!(stack.content_offset().y, 150.0);

    stack.scroll_to_index(1, ScrollPosition::Automatic, false);
    assert_eq!(stack.content_offset().y, 50.0);
}

#[test]
fn test_scroll_to_unknown_row_is_ignored() {
    let mut stack = uniform_rows(3, 50.0);
    let row = stack.row_at(2).unwrap();
    stack.remove_row(row, false);

    stack.scroll_to_row(row, ScrollPosition::Initial, false);
    stack.scroll_to_index(7, ScrollPosition::Initial, false);

    assert_eq!(stack.content_offset(), Point::ZERO);
}

#[test]
fn test_scroll_to_top_and_bottom_with_insets() {
    let mut stack = uniform_rows(10, 50.0);
    stack.set_content_inset(EdgeInsets::new(20.0, 0.0, 30.0, 0.0));

    stack.scroll_to_bottom(false);
    assert_eq!(stack.content_offset().y, 430.0);

    stack.scroll_to_top(false);
    assert_eq!(stack.content_offset().y, -20.0);
}

#[test]
fn test_scroll_to_bottom_skips_short_content() {
    let mut stack = uniform_rows(1, 50.0);

    stack.scroll_to_bottom(false);

    assert_eq!(stack.content_offset(), Point::ZERO);
}

#[test]
fn test_animated_scroll_runs_on_timeline() {
    let mut stack = uniform_rows(10, 50.0);
    let events = Recorder::install(&mut stack);

    stack.set_content_offset(Point::new(0.0, 200.0), true);
    assert_eq!(stack.content_offset().y, 0.0);
    assert!(stack.has_running_animations());

    stack.advance(Duration::from_millis(150));
    let halfway = stack.content_offset().y;
    assert!((halfway - 100.0).abs() < 0.5, "offset was {halfway}");

    stack.advance(Duration::from_millis(150));
    assert_eq!(stack.content_offset().y, 200.0);
    assert!(!stack.has_running_animations());

    let scrolls = events
        .borrow()
        .iter()
        .filter(|event| matches!(event, Event::Scrolled(_)))
        .count();
    assert_eq!(scrolls, 2);
}

#[test]
fn test_direct_scroll_cancels_animated_scroll() {
    let mut stack = uniform_rows(10, 50.0);

    stack.set_content_offset(Point::new(0.0, 300.0), true);
    stack.advance(Duration::from_millis(100));
    scroll_y(&mut stack, 40.0);

    assert!(!stack.has_running_animations());
    stack.advance(Duration::from_millis(500));
    assert_eq!(stack.content_offset().y, 40.0);
}

#[test]
fn test_shrinking_content_pulls_offset_back() {
    let mut stack = uniform_rows(10, 50.0);
    stack.scroll_to_bottom(false);
    assert_eq!(stack.content_offset().y, 400.0);

    for _ in 0..6 {
        stack.remove(0, false);
    }

    assert_eq!(stack.content_size().height, 200.0);
    assert_eq!(stack.content_offset().y, 100.0);
}

#[test]
fn test_offset_pulled_back_by_shrinking_content_is_reported() {
    let mut stack = flush_stack(100.0, 200.0);
    for _ in 0..5 {
        stack.insert(view(100.0), InsertLocation::Bottom, false);
    }
    stack.scroll_to_bottom(false);
    assert_eq!(stack.content_offset().y, 300.0);
    let events = Recorder::install(&mut stack);

    stack.remove(0, false);
    stack.remove(0, false);

    assert_eq!(stack.content_offset().y, 100.0);
    let scrolls: Vec<Event> = events
        .borrow()
        .iter()
        .filter(|event| matches!(event, Event::Scrolled(_)))
        .cloned()
        .collect();
    assert_eq!(
        scrolls,
        vec![
            Event::Scrolled(Point::new(0.0, 200.0)),
            Event::Scrolled(Point::new(0.0, 100.0)),
        ]
    );
}

#[test]
fn test_row_at_point_skips_hidden_rows() {
    let mut stack = uniform_rows(3, 50.0);
    let middle = stack.row_at(1).unwrap();
    let last = stack.row_at(2).unwrap();

    assert_eq!(stack.row_at_point(Point::new(10.0, 60.0)), Some(middle));

    stack.set_row_hidden(middle, true, false, None);
    // The last row slid up into the hidden row's place.
    assert_eq!(stack.row_at_point(Point::new(10.0, 60.0)), Some(last));
    assert_eq!(stack.row_at_point(Point::new(10.0, 120.0)), None);
}
