//! App shell: owns the theme state and the per-frame scroll-state
//! coordinator, installs the page-level effects, and renders the chrome
//! around the landing page.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::navbar::Navbar;
use crate::effects::frame::FrameGate;
use crate::effects::lazy::LazyImages;
use crate::effects::loader;
use crate::effects::parallax::Parallax;
use crate::effects::reveal::Reveal;
use crate::pages::landing::Landing;
use crate::scroll::{ScrollState, SectionBounds};
use crate::theme::{self, Theme};

#[function_component(App)]
pub fn app() -> Html {
    let theme_state =
        use_state(|| theme::resolve(theme::read_stored(), theme::system_prefers_dark()));
    let scroll_state = use_state(ScrollState::default);
    let reveal_slot = use_mut_ref(|| Option::<Reveal>::None);

    // Reapply whenever the theme changes (covers the initial render too).
    {
        let current = *theme_state;
        use_effect_with_deps(
            move |theme: &Theme| {
                theme::apply(*theme);
                || ()
            },
            current,
        );
    }

    // One-time page setup: reduced-motion handling, reveal/lazy/parallax
    // installs, loader dismissal, console banner. Handles unhook on drop.
    {
        let reveal_slot = reveal_slot.clone();
        use_effect_with_deps(
            move |_| {
                theme::apply_reduced_motion();
                *reveal_slot.borrow_mut() = Reveal::install();
                let lazy_images = LazyImages::install();
                let parallax = Parallax::install();
                loader::dismiss();
                welcome_banner();
                move || {
                    reveal_slot.borrow_mut().take();
                    drop(lazy_images);
                    drop(parallax);
                }
            },
            (),
        );
    }

    // OS color-scheme changes only matter while no explicit choice is stored.
    {
        let theme_state = theme_state.clone();
        use_effect_with_deps(
            move |_| {
                let listener = theme::watch_system(move |preferred| theme_state.set(preferred));
                move || drop(listener)
            },
            (),
        );
    }

    // Scroll-state coordinator: any burst of scroll events collapses to one
    // recomputation per frame; Yew state only updates when a rendered flag
    // actually changed.
    {
        let scroll_state = scroll_state.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let shared: Rc<RefCell<ScrollState>> =
                        Rc::new(RefCell::new(ScrollState::default()));
                    let gate = Rc::new(FrameGate::new({
                        let shared = Rc::clone(&shared);
                        move |_| {
                            let Some(window) = web_sys::window() else {
                                return;
                            };
                            let Ok(scroll_y) = window.scroll_y() else {
                                return;
                            };
                            let sections = measure_sections();
                            let prev_active = shared.borrow().active_section.clone();
                            let next = ScrollState::derive(scroll_y, &sections, prev_active);
                            let changed = {
                                let prev = shared.borrow();
                                prev.is_scrolled != next.is_scrolled
                                    || prev.back_to_top_visible != next.back_to_top_visible
                                    || prev.active_section != next.active_section
                            };
                            *shared.borrow_mut() = next.clone();
                            if changed {
                                scroll_state.set(next);
                            }
                        }
                    }));
                    // Initial check before the first scroll event fires.
                    gate.schedule();
                    let listener = {
                        let gate = Rc::clone(&gate);
                        EventListener::new(&window, "scroll", move |_| gate.schedule())
                    };
                    Box::new(move || {
                        drop(listener);
                        drop(gate);
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let on_toggle_theme = {
        let theme_state = theme_state.clone();
        let reveal_slot = reveal_slot.clone();
        Callback::from(move |_| {
            let next = (*theme_state).toggled();
            theme::persist(next);
            theme::apply(next);
            theme_state.set(next);
            // Reveal colors key off the palette; rescan so pending
            // animations pick the new one up.
            if let Some(reveal) = reveal_slot.borrow().as_ref() {
                reveal.refresh();
            }
        })
    };

    html! {
        <>
            <Navbar
                scrolled={scroll_state.is_scrolled}
                active_section={scroll_state.active_section.clone()}
                theme={*theme_state}
                on_toggle_theme={on_toggle_theme}
            />
            <Landing />
            <BackToTop visible={scroll_state.back_to_top_visible} />
        </>
    }
}

/// Layout snapshot of every `section[id]`, in document order.
fn measure_sections() -> Vec<SectionBounds> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };
    let mut sections = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        let Some(node) = nodes.get(index) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        let Some(id) = element.get_attribute("id") else {
            continue;
        };
        sections.push(SectionBounds {
            id,
            top: f64::from(element.offset_top()),
            height: f64::from(element.offset_height()),
        });
    }
    sections
}

fn welcome_banner() {
    gloo_console::log!(
        "%c🎓 Attendly — automated attendance for rural schools",
        "color: #4f46e5; font-size: 16px; font-weight: bold;"
    );
    gloo_console::log!(
        "%cBuilt for modern education",
        "color: #6b7280; font-size: 12px;"
    );
}
