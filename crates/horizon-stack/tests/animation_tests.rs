//! Tests for animated mutations and the timeline.

mod common;

use std::time::Duration;

use common::*;
use horizon_stack::prelude::*;

const ROW_TRANSITION: Duration = Duration::from_millis(250);

fn three_rows() -> (Stack, Vec<ContentId>) {
    let mut stack = flush_stack(100.0, 300.0);
    let mut ids = Vec::new();
    for _ in 0..3 {
        let label = Label::tall(50.0);
        ids.push(label.id);
        stack.insert(Content::view(label), InsertLocation::Bottom, false);
    }
    (stack, ids)
}

// ============================================================================
// Removal
// ============================================================================

#[test]
fn test_animated_remove_keeps_row_until_finished() {
    let (mut stack, ids) = three_rows();
    let middle = stack.row_at(1).unwrap();

    assert_eq!(stack.remove(1, true), Some(ids[1]));

    // Still in the order, hidden and collapsed.
    assert_eq!(stack.row_count(), 3);
    assert_eq!(stack.index_of(middle), Some(1));
    assert!(stack.is_row_hidden(middle));
    assert!(stack.row(middle).unwrap().is_removing());
    assert!(stack.is_row_animating(middle));
    assert_eq!(row_extents(&stack), vec![50.0, 0.0, 50.0]);

    stack.advance(ROW_TRANSITION / 2);
    let alpha = stack.row(middle).unwrap().alpha();
    assert!(alpha > 0.0 && alpha < 1.0, "alpha was {alpha}");
    assert_eq!(stack.row_count(), 3);

    stack.advance(ROW_TRANSITION);
    assert_eq!(stack.row_count(), 2);
    assert!(stack.row(middle).is_none());
    assert_eq!(content_order(&stack), vec![ids[0], ids[2]]);
}

#[test]
fn test_second_remove_while_pending_is_a_no_op() {
    let (mut stack, ids) = three_rows();
    let middle = stack.row_at(1).unwrap();

    stack.remove(1, true);
    assert_eq!(stack.remove_row(middle, true), Some(ids[1]));
    assert_eq!(stack.remove_row(middle, false), Some(ids[1]));
    assert_eq!(stack.row_count(), 3);

    stack.finish_animations();
    assert_eq!(stack.row_count(), 2);
}

#[test]
fn test_stalled_timeline_never_detaches() {
    let (mut stack, _) = three_rows();

    stack.remove(0, true);
    stack.layout();

    assert_eq!(stack.row_count(), 3);
    assert!(stack.has_running_animations());
}

#[test]
fn test_hide_requests_ignored_while_removing() {
    let (mut stack, _) = three_rows();
    let first = stack.row_at(0).unwrap();
    stack.remove_row(first, true);

    let (done, outcomes) = completion();
    stack.set_row_hidden(first, false, false, Some(done));

    assert!(stack.is_row_hidden(first));
    assert!(outcomes.borrow().is_empty());
}

// ============================================================================
// Insertion
// ============================================================================

#[test]
fn test_animated_insert_fades_in() {
    let (mut stack, _) = three_rows();

    let row = stack.insert(view(40.0), InsertLocation::Top, true).unwrap();

    let found = stack.row(row).unwrap();
    assert!(!found.is_hidden());
    assert_eq!(found.alpha(), 0.0);
    assert_eq!(found.frame().size.height, 40.0);

    stack.finish_animations();
    assert_eq!(stack.row(row).unwrap().alpha(), 1.0);
}

#[test]
fn test_existing_rows_slide_after_insert() {
    let (mut stack, _) = three_rows();
    let first = stack.row_at(0).unwrap();

    stack.insert(view(40.0), InsertLocation::Top, true);

    let found = stack.row(first).unwrap();
    assert_eq!(found.frame().origin.y, 40.0);
    assert_eq!(found.presentation_frame().origin.y, 0.0);

    stack.finish_animations();
    assert_eq!(stack.row(first).unwrap().presentation_frame().origin.y, 40.0);
}

// ============================================================================
// Hide / Show
// ============================================================================

#[test]
fn test_set_hidden_completion_fires_after_advance() {
    let (mut stack, _) = three_rows();
    let (done, outcomes) = completion();

    stack.set_hidden(0, true, true, Some(done));
    assert!(stack.is_hidden_at(0));
    assert!(outcomes.borrow().is_empty());

    stack.advance(ROW_TRANSITION);
    assert_eq!(*outcomes.borrow(), vec![true]);
    let row = stack.row_at(0).unwrap();
    assert_eq!(stack.row(row).unwrap().alpha(), 0.0);
}

#[test]
fn test_set_hidden_to_current_state_skips_completion() {
    let (mut stack, _) = three_rows();
    let (done, outcomes) = completion();

    stack.set_hidden(0, false, true, Some(done));

    assert!(!stack.has_running_animations());
    stack.finish_animations();
    assert!(outcomes.borrow().is_empty());
}

#[test]
fn test_non_animated_set_hidden_completes_immediately() {
    let (mut stack, _) = three_rows();
    let (done, outcomes) = completion();

    stack.set_hidden(2, true, false, Some(done));

    assert_eq!(*outcomes.borrow(), vec![true]);
    assert!(!stack.has_running_animations());
}

#[test]
fn test_interrupted_transition_completes_unfinished() {
    let (mut stack, _) = three_rows();
    let (hide_done, hide_outcomes) = completion();
    let (show_done, show_outcomes) = completion();

    stack.set_hidden(1, true, true, Some(hide_done));
    stack.advance(Duration::from_millis(50));
    stack.set_hidden(1, false, true, Some(show_done));

    assert_eq!(*hide_outcomes.borrow(), vec![false]);
    assert!(show_outcomes.borrow().is_empty());

    stack.finish_animations();
    assert_eq!(*show_outcomes.borrow(), vec![true]);
    let row = stack.row_at(1).unwrap();
    assert!(!stack.is_row_hidden(row));
    assert_eq!(stack.row(row).unwrap().alpha(), 1.0);
}

#[test]
fn test_detaching_settles_pending_completion() {
    let (mut stack, _) = three_rows();
    let (done, outcomes) = completion();

    stack.set_hidden(0, true, true, Some(done));
    stack.remove(0, false);

    assert_eq!(*outcomes.borrow(), vec![false]);
    assert_eq!(stack.row_count(), 2);

    stack.finish_animations();
    assert_eq!(*outcomes.borrow(), vec![false]);
}

#[test]
fn test_show_resumes_interrupted_hide_from_current_alpha() {
    let (mut stack, _) = three_rows();
    let row = stack.row_at(1).unwrap();

    stack.set_hidden(1, true, true, None);
    stack.advance(Duration::from_millis(60));
    let partway = stack.row(row).unwrap().alpha();
    assert!(partway > 0.0 && partway < 1.0, "alpha was {partway}");

    stack.set_hidden(1, false, true, None);
    let resumed = stack.row(row).unwrap().alpha();
    assert!((resumed - partway).abs() < f32::EPSILON, "alpha dropped to {resumed}");

    stack.advance(Duration::from_millis(16));
    assert!(stack.row(row).unwrap().alpha() >= resumed);
    stack.finish_animations();
    assert_eq!(stack.row(row).unwrap().alpha(), 1.0);
}

#[test]
fn test_unbounded_transition_timing_does_not_overflow() {
    let mut stack = flush_stack(100.0, 300.0);
    let card = Card::plain(50.0).with_transition(TransitionInfo {
        duration: Duration::MAX,
        delay: Duration::from_millis(1),
        spring_damping: 0.8,
    });
    let row = stack
        .insert(card.into_content(), InsertLocation::Bottom, false)
        .unwrap();

    stack.set_hidden(0, true, true, None);
    stack.advance(Duration::from_millis(16));
    assert!(stack.is_row_animating(row));

    stack.finish_animations();
    assert!(!stack.is_row_animating(row));
    assert_eq!(stack.row(row).unwrap().alpha(), 0.0);
}

#[test]
fn test_set_rows_hidden() {
    let (mut stack, _) = three_rows();

    stack.set_rows_hidden(&[0, 2, 9], true, false);

    assert!(stack.is_hidden_at(0));
    assert!(!stack.is_hidden_at(1));
    assert!(stack.is_hidden_at(2));
    assert_eq!(stack.content_size().height, 50.0);
}

#[test]
fn test_animatable_content_hooks_and_timing() {
    let mut stack = flush_stack(100.0, 300.0);
    let card = Card::plain(50.0).with_transition(TransitionInfo {
        duration: Duration::from_millis(100),
        delay: Duration::from_millis(50),
        spring_damping: 0.5,
    });
    let log = card.log();
    let row = stack
        .insert(card.into_content(), InsertLocation::Bottom, false)
        .unwrap();

    stack.set_row_hidden(row, true, true, None);
    assert_eq!(
        *log.borrow(),
        vec![
            Hook::WillBegin { to_hide: true },
            Hook::Animate { to_hide: true },
        ]
    );

    stack.advance(Duration::from_millis(100));
    assert!(stack.is_row_animating(row));
    assert_eq!(log.borrow().len(), 2);

    stack.advance(Duration::from_millis(50));
    assert!(!stack.is_row_animating(row));
    assert_eq!(log.borrow().last(), Some(&Hook::DidEnd { to_hide: true }));
}

// ============================================================================
// Replace
// ============================================================================

#[test]
fn test_replace_without_animation() {
    let (mut stack, ids) = three_rows();
    let label = Label::tall(30.0);
    let new_id = label.id;

    let row = stack.replace(1, Content::view(label), false).unwrap();

    assert_eq!(stack.index_of(row), Some(1));
    assert_eq!(content_order(&stack), vec![ids[0], new_id, ids[2]]);
    assert_eq!(row_extents(&stack), vec![50.0, 30.0, 50.0]);
}

#[test]
fn test_animated_replace_cross_fades() {
    let (mut stack, ids) = three_rows();
    let old = stack.row_at(1).unwrap();
    let label = Label::tall(30.0);
    let new_id = label.id;

    let new = stack.replace(1, Content::view(label), true).unwrap();

    // The replacement waits hidden right after the fading row.
    assert_eq!(content_order(&stack), vec![ids[0], ids[1], new_id, ids[2]]);
    assert!(stack.is_row_hidden(new));
    assert!(stack.is_row_hidden(old));
    assert!(!stack.is_row_animating(new));

    stack.advance(ROW_TRANSITION);
    assert!(stack.row(old).is_none());
    assert!(stack.is_row_animating(new));
    assert!(!stack.is_row_hidden(new));
    assert_eq!(content_order(&stack), vec![ids[0], new_id, ids[2]]);

    stack.finish_animations();
    assert_eq!(stack.row(new).unwrap().alpha(), 1.0);
    assert_eq!(row_extents(&stack), vec![50.0, 30.0, 50.0]);
}

#[test]
fn test_replace_never_shows_both_rows() {
    let (mut stack, _) = three_rows();
    let old = stack.row_at(1).unwrap();
    let new = stack.replace(1, view(30.0), true).unwrap();

    for _ in 0..40 {
        let old_shown = stack.row(old).is_some_and(|row| !row.is_hidden());
        let new_shown = stack.row(new).is_some_and(|row| !row.is_hidden());
        assert!(!(old_shown && new_shown));
        stack.advance(Duration::from_millis(16));
    }
    assert!(!stack.has_running_animations());
}

// ============================================================================
// Layout Transitions
// ============================================================================

#[test]
fn test_animated_move_interpolates_presentation() {
    let (mut stack, _) = three_rows();
    let first = stack.row_at(0).unwrap();

    assert!(stack.move_row(0, 2, true));

    let found = stack.row(first).unwrap();
    assert_eq!(found.frame().origin.y, 100.0);
    assert_eq!(found.presentation_frame().origin.y, 0.0);

    stack.advance(Duration::from_millis(125));
    let y = stack.row(first).unwrap().presentation_frame().origin.y;
    assert!((y - 50.0).abs() < 0.5, "presentation y was {y}");

    stack.advance(Duration::from_millis(125));
    assert_eq!(stack.row(first).unwrap().presentation_frame().origin.y, 100.0);
    assert!(!stack.has_running_animations());
}

#[test]
fn test_reload_completion() {
    let (mut stack, _) = three_rows();
    let card = Card::plain(20.0).with_reload();
    let log = card.log();
    stack.insert(card.into_content(), InsertLocation::Bottom, false);

    let (done, outcomes) = completion();
    stack.reload(&[3], true, Some(done));
    assert!(outcomes.borrow().is_empty());
    assert!(log.borrow().contains(&Hook::Reloaded { animated: true }));

    stack.advance(Duration::from_millis(250));
    assert_eq!(*outcomes.borrow(), vec![true]);

    let (done, outcomes) = completion();
    stack.reload_all(false, Some(done));
    assert_eq!(*outcomes.borrow(), vec![true]);
}

#[test]
fn test_animated_axis_change() {
    let (mut stack, _) = three_rows();
    let last = stack.row_at(2).unwrap();

    stack.set_axis(Axis::Horizontal, true);

    let found = stack.row(last).unwrap();
    assert_eq!(found.frame().origin, Point::new(200.0, 0.0));
    assert_eq!(found.presentation_frame().origin, Point::new(0.0, 100.0));

    stack.finish_animations();
    assert_eq!(
        stack.row(last).unwrap().presentation_frame(),
        stack.row(last).unwrap().frame()
    );
}
