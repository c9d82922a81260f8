//! Renders page-model elements as real elements.
//!
//! Every node carries its model id, classes and inline styles. Clicks go to
//! [`Portfolio::click`](portfolio_core::Portfolio::click), which routes them
//! to whichever controller owns the target; form controls and the profile
//! photo forward their own events.

use dioxus::prelude::*;
use portfolio_core::{Dom, Event, MemoryDom, NodeId};

use crate::context::SharedPortfolio;

/// Attributes shared by every rendered element
struct NodeView {
    key: u32,
    id: Option<String>,
    class: Option<String>,
    style: String,
    text: String,
}

impl NodeView {
    fn read(dom: &MemoryDom, node: NodeId) -> Self {
        let mut style = dom.style_text(node);
        // Sections take their laid-out height so scroll offsets line up
        if dom.tag_name(node).as_deref() == Some("section") {
            style = format!("height: {}px; {}", dom.offset_height(node), style);
        }
        Self {
            key: node.raw(),
            id: dom.attribute(node, "id"),
            class: dom.attribute(node, "class"),
            style,
            text: dom.text_content(node),
        }
    }
}

/// Render `node` and its subtree
pub fn render_node(dom: &MemoryDom, mut portfolio: SharedPortfolio, node: NodeId) -> Element {
    let Some(tag) = dom.tag_name(node) else {
        return rsx! {};
    };
    let NodeView { key, id, class, style, text } = NodeView::read(dom, node);
    let children = dom.children(node);

    let inner = rsx! {
        {text}
        {children.into_iter().map(|child| render_node(dom, portfolio, child))}
    };

    let onclick = move |evt: MouseEvent| {
        evt.stop_propagation();
        portfolio.write().click(node);
    };

    match tag.as_str() {
        "a" => {
            let href = dom.attribute(node, "href");
            rsx! {
                a {
                    key: "{key}",
                    id,
                    class,
                    style,
                    href,
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        evt.stop_propagation();
                        portfolio.write().click(node);
                    },
                    {inner}
                }
            }
        }
        "button" => {
            let icon = dom.attribute(node, "data-icon");
            let disabled = dom.attribute(node, "disabled").is_some();
            rsx! {
                button {
                    key: "{key}",
                    id,
                    class,
                    style,
                    r#type: dom.attribute(node, "type").unwrap_or_else(|| "button".to_string()),
                    disabled,
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        evt.stop_propagation();
                        portfolio.write().click(node);
                    },
                    if let Some(icon) = icon {
                        i { class: icon }
                    }
                    {inner}
                }
            }
        }
        "img" => rsx! {
            img {
                key: "{key}",
                id,
                class,
                style,
                src: dom.attribute(node, "src"),
                alt: dom.attribute(node, "alt"),
                onclick,
                onload: move |_| portfolio.write().dispatch(Event::PhotoLoaded),
                onerror: move |_| portfolio.write().dispatch(Event::PhotoFailed),
            }
        },
        "input" => rsx! {
            input {
                key: "{key}",
                id,
                class,
                style,
                r#type: dom.attribute(node, "type"),
                name: dom.attribute(node, "name"),
                value: dom.attribute(node, "value").unwrap_or_default(),
                required: dom.attribute(node, "required").is_some(),
                onclick,
                oninput: move |evt: FormEvent| {
                    portfolio.write().dispatch(Event::FieldInput {
                        field: node,
                        value: evt.value(),
                    });
                },
                onblur: move |_| portfolio.write().dispatch(Event::FieldBlur(node)),
            }
        },
        "textarea" => rsx! {
            textarea {
                key: "{key}",
                id,
                class,
                style,
                name: dom.attribute(node, "name"),
                value: dom.attribute(node, "value").unwrap_or_default(),
                required: dom.attribute(node, "required").is_some(),
                onclick,
                oninput: move |evt: FormEvent| {
                    portfolio.write().dispatch(Event::FieldInput {
                        field: node,
                        value: evt.value(),
                    });
                },
                onblur: move |_| portfolio.write().dispatch(Event::FieldBlur(node)),
            }
        },
        "form" => rsx! {
            form {
                key: "{key}",
                id,
                class,
                style,
                onclick,
                // Enter inside a field submits without a button click
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    portfolio.write().dispatch(Event::FormSubmitted);
                },
                {inner}
            }
        },
        "label" => rsx! {
            label { key: "{key}", id, class, style, r#for: dom.attribute(node, "for"), onclick, {inner} }
        },
        "header" => rsx! { header { key: "{key}", id, class, style, onclick, {inner} } },
        "nav" => rsx! { nav { key: "{key}", id, class, style, onclick, {inner} } },
        "main" => rsx! { main { key: "{key}", id, class, style, onclick, {inner} } },
        "section" => rsx! { section { key: "{key}", id, class, style, onclick, {inner} } },
        "footer" => rsx! { footer { key: "{key}", id, class, style, onclick, {inner} } },
        "ul" => rsx! { ul { key: "{key}", id, class, style, onclick, {inner} } },
        "li" => rsx! { li { key: "{key}", id, class, style, onclick, {inner} } },
        "h1" => rsx! { h1 { key: "{key}", id, class, style, onclick, {inner} } },
        "h2" => rsx! { h2 { key: "{key}", id, class, style, onclick, {inner} } },
        "h3" => rsx! { h3 { key: "{key}", id, class, style, onclick, {inner} } },
        "p" => rsx! { p { key: "{key}", id, class, style, onclick, {inner} } },
        "span" => rsx! { span { key: "{key}", id, class, style, onclick, {inner} } },
        "i" => rsx! { i { key: "{key}", id, class, style, onclick, {inner} } },
        _ => rsx! { div { key: "{key}", id, class, style, onclick, {inner} } },
    }
}
