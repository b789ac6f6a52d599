//! Pointer-tracking card wrapper: a gradient hotspot follows the mouse and
//! the card tilts toward it, capped at a few degrees.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

const MAX_TILT_DEG: f64 = 5.0;
const HOVER_LIFT_PX: f64 = 10.0;

/// Rotation for a pointer at `(x, y)` inside a `width`×`height` card.
/// The pointer cannot leave the card, so the result stays within ±`MAX_TILT_DEG`.
pub(crate) fn tilt_angles(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let rotate_x = ((y - center_y) / center_y) * -MAX_TILT_DEG;
    let rotate_y = ((x - center_x) / center_x) * MAX_TILT_DEG;
    (rotate_x, rotate_y)
}

/// Pointer position as a percentage of the card, for the gradient hotspot.
pub(crate) fn gradient_percent(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (50.0, 50.0);
    }
    (x / width * 100.0, y / height * 100.0)
}

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let onmousemove = Callback::from(|event: MouseEvent| {
        let Some(card) = current_card(&event) else {
            return;
        };
        let rect = card.get_bounding_client_rect();
        let x = f64::from(event.client_x()) - rect.left();
        let y = f64::from(event.client_y()) - rect.top();
        let (hotspot_x, hotspot_y) = gradient_percent(x, y, rect.width(), rect.height());
        let (rotate_x, rotate_y) = tilt_angles(x, y, rect.width(), rect.height());

        let style = card.style();
        let _ = style.set_property("--mouse-x", &format!("{hotspot_x:.1}%"));
        let _ = style.set_property("--mouse-y", &format!("{hotspot_y:.1}%"));
        let _ = style.set_property(
            "transform",
            &format!(
                "perspective(1000px) rotateX({rotate_x:.2}deg) rotateY({rotate_y:.2}deg) translateY(-{HOVER_LIFT_PX}px)"
            ),
        );
    });

    let onmouseleave = Callback::from(|event: MouseEvent| {
        let Some(card) = current_card(&event) else {
            return;
        };
        let style = card.style();
        let _ = style.set_property("--mouse-x", "50%");
        let _ = style.set_property("--mouse-y", "50%");
        let _ = style.set_property(
            "transform",
            "perspective(1000px) rotateX(0) rotateY(0) translateY(0)",
        );
    });

    html! {
        <div class={classes!("tilt-card", props.class.clone())} {onmousemove} {onmouseleave}>
            { for props.children.iter() }
        </div>
    }
}

fn current_card(event: &MouseEvent) -> Option<HtmlElement> {
    event
        .current_target()
        .and_then(|target| target.dyn_into::<HtmlElement>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_flat() {
        let (rx, ry) = tilt_angles(100.0, 50.0, 200.0, 100.0);
        assert!(rx.abs() < 1e-9);
        assert!(ry.abs() < 1e-9);
    }

    #[test]
    fn corners_hit_the_cap() {
        // top-left: tilt up and away
        let (rx, ry) = tilt_angles(0.0, 0.0, 200.0, 100.0);
        assert!((rx - MAX_TILT_DEG).abs() < 1e-9);
        assert!((ry + MAX_TILT_DEG).abs() < 1e-9);
        // bottom-right mirrors it
        let (rx, ry) = tilt_angles(200.0, 100.0, 200.0, 100.0);
        assert!((rx + MAX_TILT_DEG).abs() < 1e-9);
        assert!((ry - MAX_TILT_DEG).abs() < 1e-9);
    }

    #[test]
    fn interior_points_stay_within_cap() {
        for (x, y) in [(10.0, 90.0), (150.0, 20.0), (199.0, 99.0)] {
            let (rx, ry) = tilt_angles(x, y, 200.0, 100.0);
            assert!(rx.abs() <= MAX_TILT_DEG);
            assert!(ry.abs() <= MAX_TILT_DEG);
        }
    }

    #[test]
    fn degenerate_card_is_inert() {
        assert_eq!(tilt_angles(5.0, 5.0, 0.0, 100.0), (0.0, 0.0));
        assert_eq!(gradient_percent(5.0, 5.0, 100.0, 0.0), (50.0, 50.0));
    }

    #[test]
    fn gradient_tracks_the_pointer() {
        assert_eq!(gradient_percent(100.0, 50.0, 200.0, 100.0), (50.0, 50.0));
        assert_eq!(gradient_percent(0.0, 100.0, 200.0, 100.0), (0.0, 100.0));
    }
}
