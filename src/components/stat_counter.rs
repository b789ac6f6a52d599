//! Animated stat counter: counts from 0 to its target the first time half of
//! it becomes visible, then never again.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use js_sys::Array;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::prelude::*;

use crate::motion::{CounterAnim, COUNTER_DURATION_MS};
use crate::theme;

const VISIBLE_THRESHOLD: f64 = 0.5;

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub value: f64,
    pub label: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let number_ref = use_node_ref();

    {
        let number_ref = number_ref.clone();
        let target = props.value;
        use_effect_with_deps(
            move |_| {
                let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));
                let observer = number_ref
                    .cast::<HtmlElement>()
                    .and_then(|element| observe_once(element, target, Rc::clone(&frame)));
                move || {
                    drop(observer);
                    frame.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <div class="stat-item">
            <span class="stat-number" ref={number_ref} data-count={props.value.to_string()}>
                {"0"}
            </span>
            if !props.suffix.is_empty() {
                <span class="stat-suffix">{props.suffix.clone()}</span>
            }
            <span class="stat-label">{props.label.clone()}</span>
        </div>
    }
}

struct CounterObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for CounterObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Watch the element; the first half-visible sighting starts the one and
/// only animation run and stops the watching.
fn observe_once(
    element: HtmlElement,
    target: f64,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
) -> Option<CounterObserver> {
    let started = Cell::new(false);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                observer.unobserve(&entry.target());
                if started.replace(true) {
                    continue;
                }
                let Ok(element) = entry.target().dyn_into::<HtmlElement>() else {
                    continue;
                };
                let duration = if theme::prefers_reduced_motion() {
                    0.0
                } else {
                    COUNTER_DURATION_MS
                };
                run_count(element, CounterAnim::new(target, duration), Rc::clone(&frame));
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBLE_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(&element);

    Some(CounterObserver {
        observer,
        _callback: callback,
    })
}

/// Frame chain: render the eased value, reschedule until done. The live
/// handle sits in `frame`, so dropping the slot cancels the chain.
fn run_count(element: HtmlElement, anim: CounterAnim, frame: Rc<RefCell<Option<AnimationFrame>>>) {
    let slot = Rc::clone(&frame);
    let handle = request_animation_frame(move |now| {
        let mut anim = anim;
        let (text, done) = anim.frame(now);
        element.set_text_content(Some(&text));
        if done {
            frame.borrow_mut().take();
        } else {
            run_count(element, anim, frame);
        }
    });
    *slot.borrow_mut() = Some(handle);
}
