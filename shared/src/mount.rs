//! # Entrance Transition
//!
//! The landing card starts hidden and eases in one display frame after the
//! page mounts. [`MountTransition`] is the two-state machine behind that
//! flag; [`schedule_entrance`] and [`cancel_entrance`] wire it to a
//! [`FrameScheduler`] (`requestAnimationFrame` in the browser).
//!
//! ```text
//!  Unmounted --(frame fires, not torn down)--> Mounted
//! ```
//!
//! There is no way back to `Unmounted`. Teardown cancels a pending frame and
//! makes any late callback a no-op.

use std::cell::RefCell;
use std::rc::Rc;

/// Entrance state of the landing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MountState {
    #[default]
    Unmounted,
    Mounted,
}

impl MountState {
    pub fn is_mounted(self) -> bool {
        matches!(self, MountState::Mounted)
    }
}

/// One-shot `Unmounted -> Mounted` transition with a pending frame handle.
#[derive(Debug)]
pub struct MountTransition<H> {
    state: MountState,
    pending: Option<H>,
    torn_down: bool,
}

impl<H> Default for MountTransition<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> MountTransition<H> {
    pub fn new() -> Self {
        Self {
            state: MountState::Unmounted,
            pending: None,
            torn_down: false,
        }
    }

    pub fn state(&self) -> MountState {
        self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.state.is_mounted()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// A frame may be requested only once, before mounting and teardown.
    pub fn can_schedule(&self) -> bool {
        !self.torn_down && !self.state.is_mounted() && self.pending.is_none()
    }

    /// Remember the handle of the requested frame.
    ///
    /// Ignored once the transition has fired or the owner was torn down.
    pub fn record_pending(&mut self, handle: H) {
        if self.torn_down || self.state.is_mounted() {
            return;
        }
        self.pending = Some(handle);
    }

    /// Called from the frame callback. Returns `true` if this call mounted.
    pub fn on_frame(&mut self) -> bool {
        self.pending = None;
        if self.torn_down || self.state.is_mounted() {
            return false;
        }
        self.state = MountState::Mounted;
        true
    }

    /// Mark the owner as gone and hand back the frame to cancel, if any.
    pub fn teardown(&mut self) -> Option<H> {
        self.torn_down = true;
        self.pending.take()
    }
}

/// Display-refresh callback mechanism of the host environment.
pub trait FrameScheduler {
    type Handle;
    type Error;

    /// Run `callback` once on the next display refresh.
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<Self::Handle, Self::Error>;

    fn cancel_frame(&self, handle: Self::Handle);
}

/// Transition state shared between the owner and the frame callback.
pub type SharedTransition<H> = Rc<RefCell<MountTransition<H>>>;

/// Request the entrance frame.
///
/// `on_mounted` runs inside the frame callback, only if the transition
/// actually fires. Returns `Ok(false)` without touching the scheduler when a
/// frame is already pending, the card is already mounted, or the owner was
/// torn down.
pub fn schedule_entrance<S, F>(
    scheduler: &S,
    transition: &SharedTransition<S::Handle>,
    on_mounted: F,
) -> Result<bool, S::Error>
where
    S: FrameScheduler,
    S::Handle: 'static,
    F: FnOnce() + 'static,
{
    if !transition.borrow().can_schedule() {
        return Ok(false);
    }

    let weak = Rc::downgrade(transition);
    let handle = scheduler.request_frame(Box::new(move || {
        let Some(transition) = weak.upgrade() else {
            return;
        };
        let fired = transition.borrow_mut().on_frame();
        if fired {
            on_mounted();
        }
    }))?;

    transition.borrow_mut().record_pending(handle);
    Ok(true)
}

/// Tear down the transition, cancelling a pending frame.
///
/// Returns `true` if a frame was cancelled.
pub fn cancel_entrance<S: FrameScheduler>(
    scheduler: &S,
    transition: &SharedTransition<S::Handle>,
) -> bool {
    let pending = transition.borrow_mut().teardown();
    match pending {
        Some(handle) => {
            scheduler.cancel_frame(handle);
            true
        }
        None => false,
    }
}
