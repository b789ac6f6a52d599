use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BackToTopProps {
    pub visible: bool,
}

#[function_component(BackToTop)]
pub fn back_to_top(props: &BackToTopProps) -> Html {
    let onclick = Callback::from(|_: MouseEvent| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    });

    html! {
        <button
            class={classes!("back-to-top", props.visible.then_some("visible"))}
            type="button"
            aria-label="Back to top"
            {onclick}
        >
            {"↑"}
        </button>
    }
}
