//! Shared tooltip visibility coordination.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use aria_dom::Timer;

use super::TooltipId;

/// Where the shared tooltip state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TooltipPhase {
    /// Nothing shown, nothing pending.
    #[default]
    Idle,
    /// `owner` is hovered or focused and waiting out its show delay.
    Pending { owner: TooltipId },
    /// `owner` is the one visible tooltip.
    Visible { owner: TooltipId },
    /// A tooltip just hid; the next activation shows without a delay.
    Leaving,
    /// `owner` was dismissed and stays hidden until its trigger is left.
    Dismissed { owner: TooltipId },
}

impl TooltipPhase {
    /// The tooltip that currently owns the shared state, if any.
    pub fn owner(&self) -> Option<TooltipId> {
        match self {
            TooltipPhase::Pending { owner }
            | TooltipPhase::Visible { owner }
            | TooltipPhase::Dismissed { owner } => Some(*owner),
            TooltipPhase::Idle | TooltipPhase::Leaving => None,
        }
    }
}

/// Which tooltips hid and showed as the result of one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityChange {
    pub hidden: Option<TooltipId>,
    pub shown: Option<TooltipId>,
}

impl VisibilityChange {
    fn shown(id: TooltipId) -> Self {
        Self {
            hidden: None,
            shown: Some(id),
        }
    }

    fn hidden(id: TooltipId) -> Self {
        Self {
            hidden: Some(id),
            shown: None,
        }
    }
}

#[derive(Debug, Default)]
struct CoordinatorInner {
    phase: TooltipPhase,
    /// Show delay while `Pending`, grace window while `Leaving`.
    timer: Timer,
}

impl CoordinatorInner {
    fn set_phase(&mut self, phase: TooltipPhase) {
        log::debug!("[tooltip] {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    fn activate(
        &mut self,
        id: TooltipId,
        now: Instant,
        show_delay: Duration,
    ) -> Option<VisibilityChange> {
        match self.phase {
            TooltipPhase::Pending { owner } | TooltipPhase::Visible { owner } if owner == id => {
                None
            }
            TooltipPhase::Dismissed { owner } if owner == id => None,
            TooltipPhase::Visible { owner } => {
                self.timer.cancel();
                self.set_phase(TooltipPhase::Visible { owner: id });
                Some(VisibilityChange {
                    hidden: Some(owner),
                    shown: Some(id),
                })
            }
            TooltipPhase::Leaving => {
                self.timer.cancel();
                self.set_phase(TooltipPhase::Visible { owner: id });
                Some(VisibilityChange::shown(id))
            }
            TooltipPhase::Idle | TooltipPhase::Pending { .. } | TooltipPhase::Dismissed { .. } => {
                if show_delay.is_zero() {
                    self.timer.cancel();
                    self.set_phase(TooltipPhase::Visible { owner: id });
                    return Some(VisibilityChange::shown(id));
                }
                self.timer.schedule(now, show_delay);
                self.set_phase(TooltipPhase::Pending { owner: id });
                None
            }
        }
    }

    fn deactivate(
        &mut self,
        id: TooltipId,
        now: Instant,
        leave_grace: Duration,
    ) -> Option<VisibilityChange> {
        match self.phase {
            TooltipPhase::Pending { owner } | TooltipPhase::Dismissed { owner } if owner == id => {
                self.timer.cancel();
                self.set_phase(TooltipPhase::Idle);
                None
            }
            TooltipPhase::Visible { owner } if owner == id => {
                if leave_grace.is_zero() {
                    self.timer.cancel();
                    self.set_phase(TooltipPhase::Idle);
                } else {
                    self.timer.schedule(now, leave_grace);
                    self.set_phase(TooltipPhase::Leaving);
                }
                Some(VisibilityChange::hidden(id))
            }
            // Stale events from a trigger that no longer owns the state.
            _ => None,
        }
    }

    fn dismiss(&mut self, id: TooltipId) -> Option<VisibilityChange> {
        match self.phase {
            TooltipPhase::Pending { owner } if owner == id => {
                self.timer.cancel();
                self.set_phase(TooltipPhase::Dismissed { owner: id });
                None
            }
            TooltipPhase::Visible { owner } if owner == id => {
                self.timer.cancel();
                self.set_phase(TooltipPhase::Dismissed { owner: id });
                Some(VisibilityChange::hidden(id))
            }
            _ => None,
        }
    }

    fn release(&mut self, id: TooltipId) -> Option<VisibilityChange> {
        if self.phase.owner() != Some(id) {
            return None;
        }
        let was_visible = matches!(self.phase, TooltipPhase::Visible { .. });
        self.timer.cancel();
        self.set_phase(TooltipPhase::Idle);
        was_visible.then(|| VisibilityChange::hidden(id))
    }

    fn advance(&mut self, now: Instant) -> Option<VisibilityChange> {
        if !self.timer.fire(now) {
            return None;
        }
        match self.phase {
            TooltipPhase::Pending { owner } => {
                self.set_phase(TooltipPhase::Visible { owner });
                Some(VisibilityChange::shown(owner))
            }
            TooltipPhase::Leaving => {
                self.set_phase(TooltipPhase::Idle);
                None
            }
            _ => None,
        }
    }
}

/// Shared state deciding which single tooltip may be visible.
///
/// Every [`Tooltip`](super::Tooltip) is created against a coordinator; all
/// tooltips that should exclude each other share one (clones share state).
/// Ownership of the visible slot moves only through the transitions here,
/// and only the owning tooltip can clear it.
///
/// Time never advances on its own: the host calls [`advance`](Self::advance)
/// from its event loop, using [`next_deadline`](Self::next_deadline) to know
/// when a wake-up is needed.
#[derive(Debug, Clone, Default)]
pub struct TooltipCoordinator {
    inner: Arc<RwLock<CoordinatorInner>>,
    dirty: Arc<AtomicBool>,
}

impl TooltipCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> TooltipPhase {
        self.inner
            .read()
            .map(|guard| guard.phase)
            .unwrap_or_default()
    }

    /// The tooltip currently visible, if any.
    pub fn visible(&self) -> Option<TooltipId> {
        match self.phase() {
            TooltipPhase::Visible { owner } => Some(owner),
            _ => None,
        }
    }

    /// When the pending show or grace window expires.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.inner
            .read()
            .map(|guard| guard.timer.deadline())
            .unwrap_or(None)
    }

    /// Fire an expired timer.
    pub fn advance(&self, now: Instant) -> Option<VisibilityChange> {
        self.update(|inner| inner.advance(now))
    }

    pub(super) fn activate(
        &self,
        id: TooltipId,
        now: Instant,
        show_delay: Duration,
    ) -> Option<VisibilityChange> {
        self.update(|inner| inner.activate(id, now, show_delay))
    }

    pub(super) fn deactivate(
        &self,
        id: TooltipId,
        now: Instant,
        leave_grace: Duration,
    ) -> Option<VisibilityChange> {
        self.update(|inner| inner.deactivate(id, now, leave_grace))
    }

    pub(super) fn dismiss(&self, id: TooltipId) -> Option<VisibilityChange> {
        self.update(|inner| inner.dismiss(id))
    }

    pub(super) fn release(&self, id: TooltipId) -> Option<VisibilityChange> {
        self.update(|inner| inner.release(id))
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if visibility changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    fn update(
        &self,
        f: impl FnOnce(&mut CoordinatorInner) -> Option<VisibilityChange>,
    ) -> Option<VisibilityChange> {
        let change = match self.inner.write() {
            Ok(mut guard) => f(&mut guard),
            Err(_) => None,
        };
        if change.is_some() {
            self.dirty.store(true, Ordering::SeqCst);
        }
        change
    }
}
