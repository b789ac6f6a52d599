//! Single-slot animation-frame coalescer.
//!
//! A burst of events between two rendering frames collapses to one run of
//! the job on the next frame; the job re-reads whatever live state it needs
//! at that point. Dropping the gate cancels any pending frame.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};

pub struct FrameGate {
    inner: Rc<GateInner>,
}

struct GateInner {
    pending: Cell<bool>,
    frame: RefCell<Option<AnimationFrame>>,
    job: Box<dyn Fn(f64)>,
}

impl FrameGate {
    pub fn new(job: impl Fn(f64) + 'static) -> Self {
        Self {
            inner: Rc::new(GateInner {
                pending: Cell::new(false),
                frame: RefCell::new(None),
                job: Box::new(job),
            }),
        }
    }

    /// Schedule the job for the next frame; no-op while one is already pending.
    pub fn schedule(&self) {
        if self.inner.pending.replace(true) {
            return;
        }
        let weak = Rc::downgrade(&self.inner);
        let handle = request_animation_frame(move |timestamp| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.pending.set(false);
            inner.frame.borrow_mut().take();
            (inner.job)(timestamp);
        });
        *self.inner.frame.borrow_mut() = Some(handle);
    }
}
