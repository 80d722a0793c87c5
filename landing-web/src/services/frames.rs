//! `requestAnimationFrame` scheduler

use shared::FrameScheduler;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::FrameError;

/// Schedules callbacks on the window's next repaint.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserFrames;

impl FrameScheduler for BrowserFrames {
    /// Request id returned by `requestAnimationFrame`
    type Handle = i32;
    type Error = FrameError;

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<i32, FrameError> {
        let window = web_sys::window().ok_or(FrameError::NoWindow)?;

        // Ownership moves to the JS side, collected once the frame has run
        let mut callback = Some(callback);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(callback) = callback.take() {
                callback();
            }
        })
        .into_js_value();
        let id = window.request_animation_frame(closure.unchecked_ref())?;
        Ok(id)
    }

    fn cancel_frame(&self, handle: i32) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.cancel_animation_frame(handle) {
            log::warn!("Failed to cancel animation frame {}: {:?}", handle, err);
        }
    }
}
