//! Arena-backed in-memory document.

use std::collections::{BTreeMap, HashMap};

use super::{Dom, NodeId};

/// The `class` attribute is a view over the class list
const CLASS_ATTRIBUTE: &str = "class";

#[derive(Debug, Clone, Default)]
struct Node {
    tag: String,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    top: f64,
    height: f64,
}

/// In-memory [`Dom`] with explicit layout.
///
/// Layout is not computed: callers assign each element's document top and
/// height with [`MemoryDom::set_layout`]. The scroll offset is clamped to the
/// scrollable range derived from those boxes.
#[derive(Debug, Clone)]
pub struct MemoryDom {
    nodes: HashMap<NodeId, Node>,
    next_id: u32,
    html: NodeId,
    body: NodeId,
    scroll_y: f64,
    viewport_width: f64,
    viewport_height: f64,
}

impl MemoryDom {
    /// Create an empty document (`<html><body></body></html>`) with the given viewport
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        let mut dom = Self {
            nodes: HashMap::new(),
            next_id: 0,
            html: NodeId(0),
            body: NodeId(0),
            scroll_y: 0.0,
            viewport_width,
            viewport_height,
        };
        let html = dom.create_element("html");
        let body = dom.create_element("body");
        dom.html = html;
        dom.body = body;
        dom.append_child(html, body);
        dom
    }

    /// Create an element and append it to `parent`
    pub fn append_new(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let node = self.create_element(tag);
        self.append_child(parent, node);
        node
    }

    /// Assign an element's document top and height
    pub fn set_layout(&mut self, node: NodeId, top: f64, height: f64) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.top = top;
            n.height = height;
        }
    }

    /// Bottom edge of the lowest laid-out attached element
    pub fn document_height(&self) -> f64 {
        self.descendants(self.html)
            .into_iter()
            .filter_map(|id| self.nodes.get(&id))
            .map(|n| n.top + n.height)
            .fold(0.0, f64::max)
    }

    /// Classes of an element in insertion order
    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.nodes
            .get(&node)
            .map(|n| n.classes.clone())
            .unwrap_or_default()
    }

    /// Inline styles serialized as a `style` attribute value
    pub fn style_text(&self, node: NodeId) -> String {
        self.nodes
            .get(&node)
            .map(|n| {
                n.styles
                    .iter()
                    .map(|(property, value)| format!("{}: {};", property, value))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default()
    }

    /// Number of live elements, attached or not
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn detach(&mut self, node: NodeId) {
        let parent = self.nodes.get(&node).and_then(|n| n.parent);
        if let Some(parent) = parent {
            if let Some(p) = self.nodes.get_mut(&parent) {
                p.children.retain(|c| *c != node);
            }
        }
        if let Some(n) = self.nodes.get_mut(&node) {
            n.parent = None;
        }
    }
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

impl Dom for MemoryDom {
    fn document_element(&self) -> NodeId {
        self.html
    }

    fn body(&self) -> NodeId {
        self.body
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(&node).and_then(|n| n.parent)
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes
            .get(&node)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            Node {
                tag: tag.to_ascii_lowercase(),
                ..Node::default()
            },
        );
        id
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.exists(parent) || !self.exists(child) || self.contains(child, parent) {
            return;
        }
        self.detach(child);
        if let Some(n) = self.nodes.get_mut(&child) {
            n.parent = Some(parent);
        }
        if let Some(p) = self.nodes.get_mut(&parent) {
            p.children.push(child);
        }
    }

    fn remove(&mut self, node: NodeId) {
        if !self.exists(node) || node == self.html {
            return;
        }
        self.detach(node);
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            if let Some(n) = self.nodes.remove(&current) {
                stack.extend(n.children);
            }
        }
    }

    fn exists(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    fn tag_name(&self, node: NodeId) -> Option<String> {
        self.nodes.get(&node).map(|n| n.tag.clone())
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        let n = self.nodes.get(&node)?;
        if name == CLASS_ATTRIBUTE {
            return (!n.classes.is_empty()).then(|| n.classes.join(" "));
        }
        n.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(n) = self.nodes.get_mut(&node) {
            if name == CLASS_ATTRIBUTE {
                n.classes = value.split_whitespace().map(str::to_string).collect();
                n.classes.dedup();
            } else {
                n.attributes.insert(name.to_string(), value.to_string());
            }
        }
    }

    fn remove_attribute(&mut self, node: NodeId, name: &str) {
        if let Some(n) = self.nodes.get_mut(&node) {
            if name == CLASS_ATTRIBUTE {
                n.classes.clear();
            } else {
                n.attributes.remove(name);
            }
        }
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes
            .get(&node)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(n) = self.nodes.get_mut(&node) {
            if !n.classes.iter().any(|c| c == class) {
                n.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.classes.retain(|c| c != class);
        }
    }

    fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.nodes.get(&node)?.styles.get(property).cloned()
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        if let Some(n) = self.nodes.get_mut(&node) {
            // An empty value clears the property, as with `style.x = ''`
            if value.is_empty() {
                n.styles.remove(property);
            } else {
                n.styles.insert(property.to_string(), value.to_string());
            }
        }
    }

    fn remove_style(&mut self, node: NodeId, property: &str) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.styles.remove(property);
        }
    }

    fn text_content(&self, node: NodeId) -> String {
        self.nodes
            .get(&node)
            .map(|n| n.text.clone())
            .unwrap_or_default()
    }

    fn set_text_content(&mut self, node: NodeId, text: &str) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.text = text.to_string();
        }
    }

    fn offset_top(&self, node: NodeId) -> f64 {
        self.nodes.get(&node).map(|n| n.top).unwrap_or(0.0)
    }

    fn offset_height(&self, node: NodeId) -> f64 {
        self.nodes.get(&node).map(|n| n.height).unwrap_or(0.0)
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn scroll_to(&mut self, y: f64) {
        let max = (self.document_height() - self.viewport_height).max(0.0);
        self.scroll_y = y.clamp(0.0, max);
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
        let y = self.scroll_y;
        self.scroll_to(y);
    }
}
