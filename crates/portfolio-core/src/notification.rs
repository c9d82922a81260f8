//! Transient toast notifications.
//!
//! At most one notification is visible at a time: showing a new one slides
//! the current one out immediately. Each toast auto-dismisses after its
//! duration and can be dismissed early by clicking it or its close button.
//! Every dismissal path funnels into [`Notifier::dismiss`], which is
//! idempotent.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::dom::{Dom, NodeId};
use crate::portfolio::Task;
use crate::scheduler::Scheduler;
use crate::theme::Theme;

const HIDDEN_TRANSFORM: &str = "translateX(400px)";
const SHOWN_TRANSFORM: &str = "translateX(0)";

/// Identifies one shown notification
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity of a notification
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }

    /// Icon class shown before the message
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "fas fa-check-circle",
            NotificationKind::Error => "fas fa-exclamation-circle",
            NotificationKind::Warning => "fas fa-exclamation-triangle",
            NotificationKind::Info => "fas fa-info-circle",
        }
    }

    pub fn accent(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#1FB8CD",
            NotificationKind::Error => "#ef4444",
            NotificationKind::Warning => "#f59e0b",
            NotificationKind::Info => "#3b82f6",
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    id: NotificationId,
    node: NodeId,
    close: NodeId,
    dismissing: bool,
}

/// Owns the notification elements attached to `<body>`
#[derive(Debug, Clone)]
pub struct Notifier {
    next_id: u64,
    entries: Vec<Entry>,
    frame: Duration,
    slide: Duration,
}

impl Notifier {
    pub fn new(frame: Duration, slide: Duration) -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
            frame,
            slide,
        }
    }

    /// Dismiss whatever is showing and slide in a new notification
    pub fn show(
        &mut self,
        dom: &mut impl Dom,
        scheduler: &mut Scheduler<Task>,
        theme: Theme,
        message: &str,
        kind: NotificationKind,
        duration: Duration,
    ) -> NotificationId {
        let showing: Vec<NotificationId> = self
            .entries
            .iter()
            .filter(|e| !e.dismissing)
            .map(|e| e.id)
            .collect();
        for id in showing {
            self.dismiss(dom, scheduler, id);
        }

        let id = NotificationId(self.next_id);
        self.next_id += 1;

        let (background, text, border) = theme.notification_palette();
        let accent = kind.accent();

        let node = dom.create_element("div");
        dom.set_attribute(node, "class", &format!("notification notification--{}", kind.as_str()));
        dom.set_attribute(node, "data-notification-id", &id.to_string());
        dom.set_style(node, "transform", HIDDEN_TRANSFORM);
        dom.set_style(node, "background", background);
        dom.set_style(node, "color", text);
        dom.set_style(node, "border", &format!("1px solid {}", border));
        dom.set_style(node, "border-left", &format!("4px solid {}", accent));

        let icon = dom.create_element("i");
        dom.set_attribute(icon, "class", kind.icon());
        dom.set_style(icon, "color", accent);
        dom.append_child(node, icon);

        let label = dom.create_element("span");
        dom.set_text_content(label, message);
        dom.append_child(node, label);

        let close = dom.create_element("button");
        dom.add_class(close, "notification-close");
        let close_icon = dom.create_element("i");
        dom.set_attribute(close_icon, "class", "fas fa-times");
        dom.append_child(close, close_icon);
        dom.append_child(node, close);

        let body = dom.body();
        dom.append_child(body, node);

        self.entries.push(Entry {
            id,
            node,
            close,
            dismissing: false,
        });

        scheduler.schedule_after(self.frame, Task::NotificationSlideIn(id));
        scheduler.schedule_after(duration, Task::NotificationDismiss(id));

        tracing::debug!(%id, kind = kind.as_str(), "Notification shown: {}", message);
        id
    }

    /// Slide in after the element has been laid out off-screen
    pub fn slide_in(&self, dom: &mut impl Dom, id: NotificationId) {
        if let Some(entry) = self.entry(id) {
            if !entry.dismissing {
                dom.set_style(entry.node, "transform", SHOWN_TRANSFORM);
            }
        }
    }

    /// Slide out and schedule removal. Returns false if already dismissed.
    pub fn dismiss(
        &mut self,
        dom: &mut impl Dom,
        scheduler: &mut Scheduler<Task>,
        id: NotificationId,
    ) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        if entry.dismissing {
            return false;
        }
        entry.dismissing = true;
        dom.set_style(entry.node, "transform", HIDDEN_TRANSFORM);
        scheduler.schedule_after(self.slide, Task::NotificationRemove(id));
        true
    }

    /// Detach the element once the slide-out finished
    pub fn remove(&mut self, dom: &mut impl Dom, id: NotificationId) {
        if let Some(pos) = self.entries.iter().position(|e| e.id == id) {
            let entry = self.entries.remove(pos);
            if dom.exists(entry.node) {
                dom.remove(entry.node);
            }
        }
    }

    /// The notification currently on screen (not sliding out)
    pub fn visible(&self) -> Option<NotificationId> {
        self.entries.iter().find(|e| !e.dismissing).map(|e| e.id)
    }

    /// Notifications still attached, including ones sliding out
    pub fn attached(&self) -> Vec<(NotificationId, NodeId)> {
        self.entries.iter().map(|e| (e.id, e.node)).collect()
    }

    pub fn element(&self, id: NotificationId) -> Option<NodeId> {
        self.entry(id).map(|e| e.node)
    }

    pub fn close_button(&self, id: NotificationId) -> Option<NodeId> {
        self.entry(id).map(|e| e.close)
    }

    /// Message text of a notification
    pub fn message(&self, dom: &impl Dom, id: NotificationId) -> Option<String> {
        let node = self.entry(id)?.node;
        dom.find_descendant_by_tag(node, "span")
            .map(|span| dom.text_content(span))
    }

    pub fn is_dismissing(&self, id: NotificationId) -> bool {
        self.entry(id).is_some_and(|e| e.dismissing)
    }

    fn entry(&self, id: NotificationId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }
}
