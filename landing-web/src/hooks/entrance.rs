//! Entrance flag for the landing card
//!
//! The flag starts `false` so the card's hidden state paints first, then
//! flips to `true` on the next animation frame. Unmounting before that frame
//! cancels it.

use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

use leptos::prelude::*;
use shared::{
    cancel_entrance, schedule_entrance, FrameScheduler, MountTransition, SharedTransition,
};

use crate::services::BrowserFrames;

struct EntranceState<S: FrameScheduler> {
    scheduler: S,
    transition: SharedTransition<S::Handle>,
}

/// Reactive handle over one card entrance, owned by the current reactive owner.
pub struct Entrance<S>
where
    S: FrameScheduler + 'static,
    S::Handle: 'static,
{
    mounted: ReadSignal<bool>,
    set_mounted: WriteSignal<bool>,
    state: StoredValue<Rc<EntranceState<S>>, LocalStorage>,
}

impl<S> Clone for Entrance<S>
where
    S: FrameScheduler + 'static,
    S::Handle: 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Entrance<S>
where
    S: FrameScheduler + 'static,
    S::Handle: 'static,
{
}

impl<S> Entrance<S>
where
    S: FrameScheduler + 'static,
    S::Handle: 'static,
    S::Error: Display,
{
    /// Create the entrance and cancel its frame when the owner is cleaned up.
    pub fn attach(scheduler: S) -> Self {
        let (mounted, set_mounted) = signal(false);
        let state = StoredValue::new_local(Rc::new(EntranceState {
            scheduler,
            transition: Rc::new(RefCell::new(MountTransition::new())),
        }));
        let entrance = Self {
            mounted,
            set_mounted,
            state,
        };

        on_cleanup(move || entrance.stop());
        entrance
    }

    pub fn mounted(&self) -> ReadSignal<bool> {
        self.mounted
    }

    /// Request the entrance frame. Without a frame the card is shown at once.
    pub fn start(&self) {
        let Some(state) = self.state.try_get_value() else {
            return;
        };

        let set_mounted = self.set_mounted;
        let on_mounted = move || {
            log::debug!("Entrance frame fired");
            set_mounted.set(true);
        };

        match schedule_entrance(&state.scheduler, &state.transition, on_mounted) {
            Ok(true) => log::debug!("Entrance scheduled for next frame"),
            Ok(false) => {}
            Err(err) => {
                log::warn!(
                    "Entrance frame unavailable, showing card immediately: {}",
                    err
                );
                set_mounted.set(true);
            }
        }
    }

    /// Cancel a pending frame; late callbacks become no-ops.
    pub fn stop(&self) {
        if let Some(state) = self.state.try_get_value() {
            if cancel_entrance(&state.scheduler, &state.transition) {
                log::debug!("Pending entrance frame cancelled");
            }
        }
    }
}

pub fn use_entrance() -> ReadSignal<bool> {
    use_entrance_with(BrowserFrames)
}

pub fn use_entrance_with<S>(scheduler: S) -> ReadSignal<bool>
where
    S: FrameScheduler + 'static,
    S::Handle: 'static,
    S::Error: Display,
{
    let entrance = Entrance::attach(scheduler);

    // Effects run after the view is in the DOM
    Effect::new(move || entrance.start());

    entrance.mounted()
}
