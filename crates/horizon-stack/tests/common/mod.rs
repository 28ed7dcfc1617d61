//! Shared fixtures for the stack integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use horizon_stack::prelude::*;
use tracing_subscriber::EnvFilter;

/// Install a test-friendly subscriber. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Defaults with no row insets, so row frames equal content extents.
pub fn flush_config() -> StackConfig {
    StackConfig::new().with_row_insets(EdgeInsets::ZERO)
}

/// A stack with no row insets inside a viewport of `width` x `height`.
pub fn flush_stack(width: f32, height: f32) -> Stack {
    init_tracing();
    Stack::new(flush_config().with_viewport_size(Size::new(width, height)))
}

/// Content ids of the rows in layout order.
pub fn content_order(stack: &Stack) -> Vec<ContentId> {
    stack.rows().filter_map(Row::content_id).collect()
}

/// Extent of every row along the stack axis, in layout order.
pub fn row_extents(stack: &Stack) -> Vec<f32> {
    let axis = stack.axis();
    stack.rows().map(|row| axis.main(row.frame().size)).collect()
}

// ============================================================================
// Views
// ============================================================================

/// A bare view with a fixed natural size.
pub struct Label {
    pub id: ContentId,
    pub natural: Size,
    pub interactive: bool,
    pub highlightable: Option<Highlight>,
}

impl Label {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_id(ContentId::next(), width, height)
    }

    pub fn with_id(id: ContentId, width: f32, height: f32) -> Self {
        Self {
            id,
            natural: Size::new(width, height),
            interactive: true,
            highlightable: None,
        }
    }

    /// A 100-point wide label `height` points tall.
    pub fn tall(height: f32) -> Self {
        Self::new(100.0, height)
    }

    pub fn highlighting(mut self) -> Self {
        self.highlightable = Some(Highlight);
        self
    }
}

impl ContentView for Label {
    fn id(&self) -> ContentId {
        self.id
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::new(self.natural)
    }

    fn is_interaction_enabled(&self) -> bool {
        self.interactive
    }

    fn highlightable(&mut self) -> Option<&mut dyn RowHighlightable> {
        self.highlightable
            .as_mut()
            .map(|highlight| highlight as &mut dyn RowHighlightable)
    }
}

/// Default background-swapping highlight.
pub struct Highlight;

impl RowHighlightable for Highlight {}

pub fn view(height: f32) -> Content {
    Content::view(Label::tall(height))
}

// ============================================================================
// Controllers
// ============================================================================

/// Hook calls recorded by a [`Card`].
#[derive(Debug, Clone, PartialEq)]
pub enum Hook {
    SizeRequested(Axis),
    WillMove(Option<HostId>),
    DidMove(Option<HostId>),
    Reloaded { animated: bool },
    WillBegin { to_hide: bool },
    Animate { to_hide: bool },
    DidEnd { to_hide: bool },
}

pub type HookLog = Rc<RefCell<Vec<Hook>>>;

/// A controller with every optional capability, each switchable.
pub struct Card {
    pub id: ContentId,
    pub view: Label,
    /// `None` disables the sizing capability entirely.
    pub sizing: Option<Rc<Cell<Option<SizeSpec>>>>,
    pub reloadable: bool,
    pub animatable: Option<TransitionInfo>,
    pub log: HookLog,
}

impl Card {
    /// A card `height` points tall with no capabilities.
    pub fn plain(height: f32) -> Self {
        Self {
            id: ContentId::next(),
            view: Label::tall(height),
            sizing: None,
            reloadable: false,
            animatable: None,
            log: HookLog::default(),
        }
    }

    /// A card answering `Fixed(extent)` on every axis.
    pub fn fixed(extent: f32) -> Self {
        Self::plain(20.0).with_size_spec(Some(SizeSpec::Fixed(extent)))
    }

    /// A card answering `FitLayout` with the given natural size.
    pub fn fit(width: f32, height: f32) -> Self {
        let mut card = Self::plain(height).with_size_spec(Some(SizeSpec::FitLayout));
        card.view.natural = Size::new(width, height);
        card
    }

    pub fn with_size_spec(mut self, spec: Option<SizeSpec>) -> Self {
        self.sizing = Some(Rc::new(Cell::new(spec)));
        self
    }

    pub fn with_reload(mut self) -> Self {
        self.reloadable = true;
        self
    }

    pub fn with_transition(mut self, info: TransitionInfo) -> Self {
        self.animatable = Some(info);
        self
    }

    /// A handle to change the sizing answer after the card is inserted.
    pub fn size_spec_handle(&self) -> Option<Rc<Cell<Option<SizeSpec>>>> {
        self.sizing.clone()
    }

    pub fn log(&self) -> HookLog {
        Rc::clone(&self.log)
    }

    pub fn into_content(self) -> Content {
        Content::controller(self)
    }
}

impl RowSizing for Card {
    fn preferred_size(&self, axis: Axis, _ctx: &RowContext) -> Option<SizeSpec> {
        self.log.borrow_mut().push(Hook::SizeRequested(axis));
        self.sizing.as_ref().and_then(|spec| spec.get())
    }
}

impl ReloadableContent for Card {
    fn reload_content(&mut self, _ctx: &RowContext, animated: bool) {
        self.log.borrow_mut().push(Hook::Reloaded { animated });
    }
}

impl RowAnimatable for Card {
    fn transition_info(&self) -> TransitionInfo {
        self.animatable.unwrap_or_default()
    }

    fn will_begin_transition(&mut self, to_hide: bool) {
        self.log.borrow_mut().push(Hook::WillBegin { to_hide });
    }

    fn animate_transition(&mut self, to_hide: bool) {
        self.log.borrow_mut().push(Hook::Animate { to_hide });
    }

    fn did_end_transition(&mut self, to_hide: bool) {
        self.log.borrow_mut().push(Hook::DidEnd { to_hide });
    }
}

impl ContentController for Card {
    fn id(&self) -> ContentId {
        self.id
    }

    fn view(&self) -> &dyn ContentView {
        &self.view
    }

    fn view_mut(&mut self) -> &mut dyn ContentView {
        &mut self.view
    }

    fn sizing(&self) -> Option<&dyn RowSizing> {
        self.sizing.as_ref().map(|_| self as &dyn RowSizing)
    }

    fn reloadable(&mut self) -> Option<&mut dyn ReloadableContent> {
        if self.reloadable {
            Some(self)
        } else {
            None
        }
    }

    fn animatable(&mut self) -> Option<&mut dyn RowAnimatable> {
        if self.animatable.is_some() {
            Some(self)
        } else {
            None
        }
    }

    fn will_move_to_parent(&mut self, parent: Option<HostId>) {
        self.log.borrow_mut().push(Hook::WillMove(parent));
    }

    fn did_move_to_parent(&mut self, parent: Option<HostId>) {
        self.log.borrow_mut().push(Hook::DidMove(parent));
    }
}

// ============================================================================
// Observer
// ============================================================================

/// Notifications seen by a [`Recorder`].
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Scrolled(Point),
    Visible(RowId, usize, RowVisibility),
    Hidden(RowId, usize, RowVisibility),
    Layout,
    ContentSize(Size, Size),
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

/// An observer that records every notification.
#[derive(Default)]
pub struct Recorder {
    pub events: EventLog,
}

impl Recorder {
    /// Install a recorder on `stack` and return its log.
    pub fn install(stack: &mut Stack) -> EventLog {
        let recorder = Recorder::default();
        let events = Rc::clone(&recorder.events);
        stack.set_observer(Box::new(recorder));
        events
    }
}

impl StackObserver for Recorder {
    fn did_scroll(&mut self, _stack: &Stack, offset: Point) {
        self.events.borrow_mut().push(Event::Scrolled(offset));
    }

    fn row_became_visible(
        &mut self,
        _stack: &Stack,
        row: RowId,
        index: usize,
        state: RowVisibility,
    ) {
        self.events
            .borrow_mut()
            .push(Event::Visible(row, index, state));
    }

    fn row_became_hidden(&mut self, _stack: &Stack, row: RowId, index: usize, state: RowVisibility) {
        self.events.borrow_mut().push(Event::Hidden(row, index, state));
    }

    fn did_update_layout(&mut self, _stack: &Stack) {
        self.events.borrow_mut().push(Event::Layout);
    }

    fn content_size_changed(&mut self, _stack: &Stack, old: Size, new: Size) {
        self.events.borrow_mut().push(Event::ContentSize(old, new));
    }
}

/// Only the visibility notifications concerning `row`.
pub fn visibility_events(events: &EventLog, row: RowId) -> Vec<Event> {
    events
        .borrow()
        .iter()
        .filter(|event| {
            matches!(event, Event::Visible(id, _, _) | Event::Hidden(id, _, _) if *id == row)
        })
        .cloned()
        .collect()
}

/// Completion flags recorded by [`completion`].
pub type Outcomes = Rc<RefCell<Vec<bool>>>;

/// A completion pushing its flag into the returned log.
pub fn completion() -> (Completion, Outcomes) {
    let outcomes = Outcomes::default();
    let sink = Rc::clone(&outcomes);
    (
        Box::new(move |finished| sink.borrow_mut().push(finished)),
        outcomes,
    )
}
