//! Horizontal scrolling coordination for a row of fixed-width items wider
//! than its viewport.
//!
//! The coordinator never touches a rendering surface: geometry comes in
//! through [`ViewportGeometry`] and debounce timers go out through a
//! [`SettleScheduler`], so the offset math is unit-testable without a DOM
//! or a real clock.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::debug;

use crate::config::{SCROLL_ARROW_MARGIN_PX, SCROLL_SETTLE_DEBOUNCE};

/// Handle to one scheduled settle timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// Timer capability injected into the coordinator.
pub trait SettleScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId;
    fn cancel(&mut self, id: TimerId);
}

/// Edge coordinates of the viewport and its items, all in the same pixel
/// coordinate space.
pub trait ViewportGeometry {
    fn viewport_left(&self) -> f64;
    fn viewport_right(&self) -> f64;
    /// Current scroll offset.
    fn scroll_left(&self) -> f64;
    /// Total scrollable content width.
    fn scroll_width(&self) -> f64;
    fn item_count(&self) -> usize;
    fn item_left(&self, index: usize) -> f64;
    fn item_right(&self, index: usize) -> f64;
}

/// Tracks which off-screen items exist to the left/right of the viewport
/// and computes the scroll offsets that reveal the next or previous page.
#[derive(Debug)]
pub struct ScrollCoordinator<S: SettleScheduler> {
    scheduler: S,
    pending_settle: Option<TimerId>,
    left_available: bool,
    right_available: bool,
}

impl<S: SettleScheduler> ScrollCoordinator<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending_settle: None,
            left_available: false,
            right_available: false,
        }
    }

    /// Whether any item is hidden beyond the left viewport edge, as of the
    /// last settle.
    pub fn left_available(&self) -> bool {
        self.left_available
    }

    pub fn right_available(&self) -> bool {
        self.right_available
    }

    pub fn is_settling(&self) -> bool {
        self.pending_settle.is_some()
    }

    /// A scroll event happened: (re)start the settle timer.
    pub fn on_scroll(&mut self) {
        if let Some(id) = self.pending_settle.take() {
            self.scheduler.cancel(id);
        }
        self.pending_settle = Some(self.scheduler.schedule(SCROLL_SETTLE_DEBOUNCE));
    }

    /// A settle timer fired. Stale timer ids (already cancelled or
    /// superseded) are ignored.
    pub fn on_timer_fired<G: ViewportGeometry>(&mut self, id: TimerId, geometry: &G) {
        if self.pending_settle != Some(id) {
            debug!("ignoring stale settle timer {:?}", id);
            return;
        }
        self.pending_settle = None;
        // The timer already fired; cancelling only releases whatever handle
        // the scheduler still holds for it.
        self.scheduler.cancel(id);
        self.recompute_availability(geometry);
    }

    /// Recompute left/right availability from the current geometry.
    pub fn recompute_availability<G: ViewportGeometry>(&mut self, geometry: &G) {
        let hidden_right = hidden_to_right(geometry).count();
        let hidden_left = hidden_to_left(geometry).count();
        self.right_available = hidden_right > 0;
        self.left_available = hidden_left > 0;
        debug!(
            "{} hidden items to the right, {} to the left",
            hidden_right, hidden_left
        );
    }

    /// If the settle timer is still running, cancel it and recompute
    /// availability immediately.
    fn settle_now<G: ViewportGeometry>(&mut self, geometry: &G) {
        if let Some(id) = self.pending_settle.take() {
            self.scheduler.cancel(id);
            self.recompute_availability(geometry);
        }
    }

    /// Scroll offset that reveals the first item hidden beyond the right
    /// edge, or `None` when nothing is hidden in that direction. The caller
    /// applies the offset and reports the resulting scroll event through
    /// [`Self::on_scroll`].
    pub fn scroll_to_next_page<G: ViewportGeometry>(&mut self, geometry: &G) -> Option<f64> {
        self.settle_now(geometry);

        let first_hidden = hidden_to_right(geometry).next()?;

        let viewport_width = geometry.viewport_right() - geometry.viewport_left();
        let max_scroll_left = geometry.scroll_width() - viewport_width;
        let mut target = geometry.scroll_left() + geometry.item_left(first_hidden)
            - geometry.viewport_left()
            - SCROLL_ARROW_MARGIN_PX;

        if target > max_scroll_left {
            debug!("clamping scroll target to max scroll offset");
            target = max_scroll_left;
        }
        Some(target.max(0.0))
    }

    /// Symmetric paging towards the left: reveal the last item hidden
    /// beyond the left edge.
    pub fn scroll_to_previous_page<G: ViewportGeometry>(&mut self, geometry: &G) -> Option<f64> {
        self.settle_now(geometry);

        let last_hidden = hidden_to_left(geometry).last()?;

        let viewport_width = geometry.viewport_right() - geometry.viewport_left();
        let hidden_px = geometry.viewport_left() - geometry.item_left(last_hidden);
        let item_width = geometry.item_right(last_hidden) - geometry.item_left(last_hidden);
        let visible_px = item_width - hidden_px;
        let amount_to_reduce = viewport_width - visible_px;
        let target = geometry.scroll_left() - amount_to_reduce + SCROLL_ARROW_MARGIN_PX;

        if target < 0.0 {
            debug!("clamping scroll target to 0");
            return Some(0.0);
        }
        Some(target)
    }
}

/// Items whose right edge extends past the viewport's right edge.
fn hidden_to_right<G: ViewportGeometry>(geometry: &G) -> impl Iterator<Item = usize> + '_ {
    (0..geometry.item_count()).filter(|&i| geometry.item_right(i) > geometry.viewport_right())
}

/// Items whose left edge starts before the viewport's left edge.
fn hidden_to_left<G: ViewportGeometry>(geometry: &G) -> impl Iterator<Item = usize> + '_ {
    (0..geometry.item_count()).filter(|&i| geometry.item_left(i) < geometry.viewport_left())
}

/// Tokio-backed settle scheduler. Fired timer ids arrive on the receiver
/// returned by [`TokioSettleScheduler::new`]; the embedder forwards them to
/// [`ScrollCoordinator::on_timer_fired`].
#[derive(Debug)]
pub struct TokioSettleScheduler {
    tx: mpsc::UnboundedSender<TimerId>,
    next_id: u64,
    handles: HashMap<TimerId, tokio::task::JoinHandle<()>>,
}

impl TokioSettleScheduler {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerId>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                tx,
                next_id: 0,
                handles: HashMap::new(),
            },
            rx,
        )
    }
}

impl SettleScheduler for TokioSettleScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(id);
        });
        self.handles.insert(id, handle);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(handle) = self.handles.remove(&id) {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records scheduled and cancelled timers without any clock.
    #[derive(Debug, Default)]
    struct RecordingScheduler {
        next_id: u64,
        scheduled: Vec<(TimerId, Duration)>,
        cancelled: Vec<TimerId>,
    }

    impl SettleScheduler for RecordingScheduler {
        fn schedule(&mut self, delay: Duration) -> TimerId {
            self.next_id += 1;
            let id = TimerId(self.next_id);
            self.scheduled.push((id, delay));
            id
        }

        fn cancel(&mut self, id: TimerId) {
            self.cancelled.push(id);
        }
    }

    /// Row of fixed-width items laid out from x = 0, shifted left by the
    /// scroll offset. Viewport is pinned at [0, viewport_width].
    struct Row {
        item_width: f64,
        item_count: usize,
        viewport_width: f64,
        scroll_left: f64,
    }

    impl ViewportGeometry for Row {
        fn viewport_left(&self) -> f64 {
            0.0
        }
        fn viewport_right(&self) -> f64 {
            self.viewport_width
        }
        fn scroll_left(&self) -> f64 {
            self.scroll_left
        }
        fn scroll_width(&self) -> f64 {
            self.item_width * self.item_count as f64
        }
        fn item_count(&self) -> usize {
            self.item_count
        }
        fn item_left(&self, index: usize) -> f64 {
            index as f64 * self.item_width - self.scroll_left
        }
        fn item_right(&self, index: usize) -> f64 {
            self.item_left(index) + self.item_width
        }
    }

    fn ten_items(scroll_left: f64) -> Row {
        // 10 items of 100px, 4 visible.
        Row {
            item_width: 100.0,
            item_count: 10,
            viewport_width: 400.0,
            scroll_left,
        }
    }

    #[test]
    fn scroll_events_restart_the_settle_timer() {
        let mut coordinator = ScrollCoordinator::new(RecordingScheduler::default());

        coordinator.on_scroll();
        coordinator.on_scroll();

        let scheduler = &coordinator.scheduler;
        assert_eq!(scheduler.scheduled.len(), 2);
        assert_eq!(scheduler.cancelled, vec![scheduler.scheduled[0].0]);
        assert_eq!(scheduler.scheduled[1].1, SCROLL_SETTLE_DEBOUNCE);
        assert!(coordinator.is_settling());
    }

    #[test]
    fn settle_recomputes_availability_and_ignores_stale_timers() {
        let geometry = ten_items(0.0);
        let mut coordinator = ScrollCoordinator::new(RecordingScheduler::default());

        coordinator.on_scroll();
        let stale = coordinator.pending_settle.unwrap();
        coordinator.on_scroll();
        let current = coordinator.pending_settle.unwrap();

        coordinator.on_timer_fired(stale, &geometry);
        assert!(coordinator.is_settling());
        assert!(!coordinator.right_available());

        coordinator.on_timer_fired(current, &geometry);
        assert!(!coordinator.is_settling());
        assert!(coordinator.right_available());
        assert!(!coordinator.left_available());
        // The accepted timer is handed back to the scheduler for cleanup.
        assert!(coordinator.scheduler.cancelled.contains(&current));
    }

    #[tokio::test(start_paused = true)]
    async fn fired_timers_release_their_scheduler_handles() {
        let geometry = ten_items(0.0);
        let (scheduler, mut rx) = TokioSettleScheduler::new();
        let mut coordinator = ScrollCoordinator::new(scheduler);

        for _ in 0..5 {
            coordinator.on_scroll();
            let id = rx.recv().await.unwrap();
            coordinator.on_timer_fired(id, &geometry);
        }

        assert!(!coordinator.is_settling());
        assert!(coordinator.scheduler.handles.is_empty());
    }

    #[test]
    fn next_page_reveals_first_hidden_item() {
        let geometry = ten_items(0.0);
        let mut coordinator = ScrollCoordinator::new(RecordingScheduler::default());

        // Item 4 is the first one extending past the right edge; its left
        // offset (400) minus the arrow margin becomes the target.
        let target = coordinator.scroll_to_next_page(&geometry).unwrap();
        assert_eq!(target, 279.0);

        // At the new offset the previously-first-hidden item is visible.
        let after = ten_items(target);
        assert!(after.item_right(4) <= after.viewport_right());
    }

    #[test]
    fn next_page_is_clamped_to_max_scroll() {
        let geometry = ten_items(501.0);
        let mut coordinator = ScrollCoordinator::new(RecordingScheduler::default());

        let target = coordinator.scroll_to_next_page(&geometry).unwrap();
        assert_eq!(target, 600.0); // scroll_width 1000 - viewport 400
    }

    #[test]
    fn next_page_is_noop_when_everything_is_visible() {
        let geometry = Row {
            item_width: 100.0,
            item_count: 3,
            viewport_width: 400.0,
            scroll_left: 0.0,
        };
        let mut coordinator = ScrollCoordinator::new(RecordingScheduler::default());

        assert_eq!(coordinator.scroll_to_next_page(&geometry), None);
    }

    #[test]
    fn next_page_mid_debounce_cancels_and_settles_immediately() {
        let geometry = ten_items(0.0);
        let mut coordinator = ScrollCoordinator::new(RecordingScheduler::default());

        coordinator.on_scroll();
        let pending = coordinator.pending_settle.unwrap();

        coordinator.scroll_to_next_page(&geometry);

        assert!(!coordinator.is_settling());
        assert!(coordinator.scheduler.cancelled.contains(&pending));
        assert!(coordinator.right_available());
    }

    #[test]
    fn previous_page_reveals_last_hidden_item() {
        let geometry = ten_items(600.0);
        let mut coordinator = ScrollCoordinator::new(RecordingScheduler::default());

        // Item 5 is the last one hidden to the left (100px hidden, none
        // visible): scroll back by the viewport width minus its visible
        // part, plus the arrow margin.
        let target = coordinator.scroll_to_previous_page(&geometry).unwrap();
        assert_eq!(target, 321.0);

        let after = ten_items(target);
        assert!(after.item_left(5) >= after.viewport_left());
    }

    #[test]
    fn previous_page_is_clamped_to_zero() {
        let geometry = ten_items(50.0);
        let mut coordinator = ScrollCoordinator::new(RecordingScheduler::default());

        let target = coordinator.scroll_to_previous_page(&geometry).unwrap();
        assert_eq!(target, 0.0);
    }

    #[test]
    fn previous_page_is_noop_at_origin() {
        let geometry = ten_items(0.0);
        let mut coordinator = ScrollCoordinator::new(RecordingScheduler::default());

        assert_eq!(coordinator.scroll_to_previous_page(&geometry), None);
    }
}
