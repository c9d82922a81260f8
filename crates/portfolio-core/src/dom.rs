//! Minimal document model the controllers operate on.
//!
//! The [`Dom`] trait exposes only the surface the page behavior needs:
//! attributes, classes, inline styles, text, child management and a few
//! layout reads. [`MemoryDom`] is the in-process implementation used both by
//! the tests and by the desktop shell as its page model.

mod memory;

pub use memory::MemoryDom;

/// Opaque handle to an element in a [`Dom`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Raw numeric value, stable for the lifetime of the element
    pub fn raw(&self) -> u32 {
        self.0
    }
}

/// Element access required by the portfolio controllers.
///
/// Operations on a node that no longer exists are silent no-ops and reads
/// return `None`/empty, mirroring how a detached browser element behaves.
pub trait Dom {
    /// The `<html>` element
    fn document_element(&self) -> NodeId;

    /// The `<body>` element
    fn body(&self) -> NodeId;

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Direct children in order
    fn children(&self, node: NodeId) -> Vec<NodeId>;

    /// Create a detached element with the given tag
    fn create_element(&mut self, tag: &str) -> NodeId;

    /// Append `child` to `parent`, detaching it from any previous parent
    fn append_child(&mut self, parent: NodeId, child: NodeId);

    /// Detach and drop the element and its whole subtree
    fn remove(&mut self, node: NodeId);

    /// Whether the handle still refers to a live element
    fn exists(&self, node: NodeId) -> bool;

    fn tag_name(&self, node: NodeId) -> Option<String>;

    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;
    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);
    fn remove_attribute(&mut self, node: NodeId, name: &str);

    fn has_class(&self, node: NodeId, class: &str) -> bool;
    fn add_class(&mut self, node: NodeId, class: &str);
    fn remove_class(&mut self, node: NodeId, class: &str);

    /// Inline style property (`"transform"`, `"--progress-width"`, ...)
    fn style(&self, node: NodeId, property: &str) -> Option<String>;
    fn set_style(&mut self, node: NodeId, property: &str, value: &str);
    fn remove_style(&mut self, node: NodeId, property: &str);

    fn text_content(&self, node: NodeId) -> String;
    fn set_text_content(&mut self, node: NodeId, text: &str);

    /// Distance from the top of the document, in logical pixels
    fn offset_top(&self, node: NodeId) -> f64;

    /// Rendered height, in logical pixels. Reading it forces layout.
    fn offset_height(&self, node: NodeId) -> f64;

    /// Current vertical scroll offset of the window
    fn scroll_y(&self) -> f64;

    fn scroll_to(&mut self, y: f64);

    fn viewport_width(&self) -> f64;
    fn viewport_height(&self) -> f64;

    /// Host window resized; re-clamps the scroll offset
    fn set_viewport(&mut self, width: f64, height: f64);

    // ═══════════════════════════════════════════════════════════════════════
    // Provided queries
    // ═══════════════════════════════════════════════════════════════════════

    /// All descendants of `node` in document order (excluding `node`)
    fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(node).into_iter().rev().collect();
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.children(current).into_iter().rev());
        }
        out
    }

    /// First attached element whose `id` attribute equals `id`
    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.document_element())
            .into_iter()
            .find(|n| self.attribute(*n, "id").as_deref() == Some(id))
    }

    /// Attached elements carrying `class`, in document order
    fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.descendants(self.document_element())
            .into_iter()
            .filter(|n| self.has_class(*n, class))
            .collect()
    }

    /// Attached elements with the given tag, in document order
    fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.descendants(self.document_element())
            .into_iter()
            .filter(|n| self.tag_name(*n).as_deref() == Some(tag))
            .collect()
    }

    /// First descendant of `node` carrying `class`
    fn find_descendant_by_class(&self, node: NodeId, class: &str) -> Option<NodeId> {
        self.descendants(node)
            .into_iter()
            .find(|n| self.has_class(*n, class))
    }

    /// First descendant of `node` with the given tag
    fn find_descendant_by_tag(&self, node: NodeId, tag: &str) -> Option<NodeId> {
        self.descendants(node)
            .into_iter()
            .find(|n| self.tag_name(*n).as_deref() == Some(tag))
    }

    /// Whether `node` is `ancestor` or lies inside it
    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == ancestor {
                return true;
            }
            current = self.parent(n);
        }
        false
    }

    /// Whether `node` is connected to the document
    fn is_attached(&self, node: NodeId) -> bool {
        self.exists(node) && self.contains(self.document_element(), node)
    }

    /// Add or remove `class`; returns whether it is present afterwards
    fn toggle_class(&mut self, node: NodeId, class: &str) -> bool {
        if self.has_class(node, class) {
            self.remove_class(node, class);
            false
        } else {
            self.add_class(node, class);
            true
        }
    }

    fn clear_children(&mut self, node: NodeId) {
        for child in self.children(node) {
            self.remove(child);
        }
    }
}
