//! Fixed glass navbar: section links with active highlighting, smooth
//! scrolling, the theme toggle and a mobile menu.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::theme::Theme;

const NAV_LINKS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("features", "Features"),
    ("how-it-works", "How It Works"),
    ("benefits", "Benefits"),
    ("contact", "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub scrolled: bool,
    pub active_section: Option<String>,
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state(|| false);

    let onclick_link = {
        let menu_open = menu_open.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            menu_open.set(false);
            let Some(link) = event
                .current_target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            else {
                return;
            };
            if let Some(href) = link.get_attribute("href") {
                scroll_to_section(&href);
            }
        })
    };

    let onclick_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let onclick_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_| on_toggle_theme.emit(()))
    };

    let theme_icon = match props.theme {
        Theme::Dark => "☀",
        Theme::Light => "☾",
    };

    html! {
        <nav class={classes!("glass-nav", props.scrolled.then_some("scrolled"))}>
            <div class="nav-inner">
                <a class="nav-brand" href="#home" onclick={onclick_link.clone()}>
                    <span class="nav-brand-mark">{"◉"}</span>
                    {"Attendly"}
                </a>
                <div class={classes!("nav-links", (*menu_open).then_some("open"))}>
                    { for NAV_LINKS.iter().map(|(id, label)| {
                        let active = props.active_section.as_deref() == Some(*id);
                        html! {
                            <a
                                class={classes!("nav-link", active.then_some("active"))}
                                href={format!("#{id}")}
                                onclick={onclick_link.clone()}
                            >
                                {*label}
                            </a>
                        }
                    }) }
                </div>
                <button
                    class="theme-toggle"
                    id="themeToggle"
                    type="button"
                    aria-label={format!("Switch to {} theme", props.theme.toggled().as_str())}
                    aria-pressed={(props.theme == Theme::Dark).to_string()}
                    onclick={onclick_theme}
                >
                    {theme_icon}
                </button>
                <button
                    class="nav-menu-toggle"
                    type="button"
                    aria-label="Toggle navigation"
                    onclick={onclick_menu}
                >
                    {"☰"}
                </button>
            </div>
        </nav>
    }
}

/// Smooth scroll to `#section`, offset by the live navbar height. Bare `#`
/// and unknown targets are ignored.
pub fn scroll_to_section(href: &str) {
    if href.is_empty() || href == "#" {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(target) = document
        .query_selector(href)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let nav_height = document
        .query_selector(".glass-nav")
        .ok()
        .flatten()
        .and_then(|nav| nav.dyn_into::<HtmlElement>().ok())
        .map(|nav| f64::from(nav.offset_height()))
        .unwrap_or(0.0);

    let options = ScrollToOptions::new();
    options.set_top(f64::from(target.offset_top()) - nav_height);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
