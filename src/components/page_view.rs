use dioxus::html::geometry::WheelDelta;
use dioxus::prelude::*;
use portfolio_core::theme::THEME_ATTRIBUTE;
use portfolio_core::{Dom, Event, Key as PageKey, NodeId};

use super::dom_node::render_node;
use crate::context::use_portfolio;

/// Pixels scrolled per wheel line when the delta is not in pixels
const LINE_HEIGHT: f64 = 40.0;

/// The whole page, rendered from the model.
///
/// Scrolling is virtual: the model owns the offset and the flowing content
/// is translated by it. Fixed elements (header, back-to-top button,
/// notifications) are rendered outside the translated layer.
#[component]
pub fn PageView() -> Element {
    let mut portfolio = use_portfolio();
    let p = portfolio.read();
    let dom = p.dom();

    let body = dom.body();
    let theme = dom.attribute(dom.document_element(), THEME_ATTRIBUTE);
    let offset = dom.scroll_y();

    let (flow, fixed): (Vec<NodeId>, Vec<NodeId>) = dom
        .children(body)
        .into_iter()
        .partition(|n| matches!(dom.tag_name(*n).as_deref(), Some("main" | "footer")));

    let on_wheel = move |evt: WheelEvent| {
        let delta = match evt.delta() {
            WheelDelta::Pixels(v) => v.y,
            WheelDelta::Lines(v) => v.y * LINE_HEIGHT,
            WheelDelta::Pages(v) => v.y * portfolio.peek().dom().viewport_height(),
        };
        let mut p = portfolio.write();
        let y = p.dom().scroll_y() + delta;
        p.dispatch(Event::Scroll(y));
    };

    let on_keydown = move |evt: KeyboardEvent| {
        let key = PageKey::from_name(&evt.key().to_string());
        portfolio.write().dispatch(Event::KeyDown(key));
    };

    // Bound first so no temporary outlives the read guard
    let view = rsx! {
        div {
            class: "page",
            "data-theme": theme,
            style: dom.style_text(body),
            tabindex: "0",
            onclick: move |_| portfolio.write().click(body),
            onwheel: on_wheel,
            onkeydown: on_keydown,

            div {
                class: "page-scroll",
                style: "transform: translateY(-{offset}px);",
                {flow.into_iter().map(|node| render_node(dom, portfolio, node))}
            }

            {fixed.into_iter().map(|node| render_node(dom, portfolio, node))}
        }
    };
    view
}
