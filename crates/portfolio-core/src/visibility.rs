//! Viewport-triggered entrance animations.
//!
//! [`VisibilityObserver`] emulates a one-shot intersection observer over the
//! [`Dom`] layout: elements are reported the first time enough of them lies
//! inside the (margin-shrunk) viewport and are then unobserved for good.
//! [`SkillsAnimator`] fills the skill progress bars once per page load.

use std::time::Duration;

use crate::dom::{Dom, NodeId};
use crate::portfolio::Task;
use crate::scheduler::Scheduler;

pub const SKILLS_SECTION_ID: &str = "skills";
pub const SKILL_ITEM_CLASS: &str = "skill-item";
pub const SKILL_PROGRESS_CLASS: &str = "skill-progress";
pub const PERCENTAGE_ATTRIBUTE: &str = "data-percentage";

/// Card classes that fade in alongside every `<section>`
pub const ENTRANCE_CLASSES: [&str; 5] = [
    "experience-card",
    "project-card",
    SKILL_ITEM_CLASS,
    "education-card",
    "certification-item",
];

/// Every element that gets an entrance animation, in document order
pub fn entrance_targets(dom: &impl Dom) -> Vec<NodeId> {
    dom.descendants(dom.document_element())
        .into_iter()
        .filter(|n| {
            dom.tag_name(*n).as_deref() == Some("section")
                || ENTRANCE_CLASSES.iter().any(|c| dom.has_class(*n, c))
        })
        .collect()
}

/// One-shot intersection observer over explicit layout
#[derive(Debug, Clone)]
pub struct VisibilityObserver {
    observed: Vec<NodeId>,
    root_margin: f64,
    threshold: f64,
}

impl VisibilityObserver {
    /// `root_margin` shrinks the viewport at top and bottom and `threshold`
    /// is the visible share required, both as fractions
    pub fn new(root_margin: f64, threshold: f64) -> Self {
        Self {
            observed: Vec::new(),
            root_margin,
            threshold,
        }
    }

    pub fn observe(&mut self, node: NodeId) {
        if !self.observed.contains(&node) {
            self.observed.push(node);
        }
    }

    pub fn unobserve(&mut self, node: NodeId) {
        self.observed.retain(|n| *n != node);
    }

    pub fn disconnect(&mut self) {
        self.observed.clear();
    }

    pub fn is_observing(&self, node: NodeId) -> bool {
        self.observed.contains(&node)
    }

    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    /// Whether enough of `node` lies inside the trigger region
    pub fn is_intersecting(&self, dom: &impl Dom, node: NodeId) -> bool {
        let viewport = dom.viewport_height();
        let region_top = dom.scroll_y() + viewport * self.root_margin;
        let region_bottom = dom.scroll_y() + viewport * (1.0 - self.root_margin);

        let top = dom.offset_top(node);
        let height = dom.offset_height(node);
        let bottom = top + height;

        if height <= 0.0 {
            return top >= region_top && top <= region_bottom;
        }

        let overlap = region_bottom.min(bottom) - region_top.max(top);
        overlap > 0.0 && overlap / height >= self.threshold
    }

    /// Report newly intersecting elements and stop observing them
    pub fn take_intersecting(&mut self, dom: &impl Dom) -> Vec<NodeId> {
        let (hits, rest): (Vec<NodeId>, Vec<NodeId>) = self
            .observed
            .iter()
            .copied()
            .filter(|n| dom.exists(*n))
            .partition(|n| self.is_intersecting(dom, *n));
        self.observed = rest;
        hits
    }
}

/// Staggered progress-bar fill for the skills section
#[derive(Debug, Clone)]
pub struct SkillsAnimator {
    section: Option<NodeId>,
    items: Vec<NodeId>,
    stagger: Duration,
}

impl SkillsAnimator {
    pub fn new(dom: &impl Dom, stagger: Duration) -> Self {
        Self {
            section: dom.element_by_id(SKILLS_SECTION_ID),
            items: dom.elements_by_class(SKILL_ITEM_CLASS),
            stagger,
        }
    }

    pub fn is_skills_section(&self, node: NodeId) -> bool {
        self.section == Some(node)
    }

    pub fn items(&self) -> &[NodeId] {
        &self.items
    }

    /// Schedule every bar's fill. Returns false if the animation already ran.
    pub fn start(&self, animated: &mut bool, scheduler: &mut Scheduler<Task>) -> bool {
        if *animated {
            return false;
        }
        *animated = true;

        for index in 0..self.items.len() {
            scheduler.schedule_after(self.stagger * index as u32, Task::SkillFill(index));
        }
        true
    }

    /// Fill one bar to its `data-percentage`
    pub fn fill(&self, dom: &mut impl Dom, index: usize) {
        let Some(&item) = self.items.get(index) else {
            return;
        };
        let bar = dom
            .find_descendant_by_class(item, SKILL_PROGRESS_CLASS)
            .unwrap_or(item);
        let percentage = dom
            .attribute(bar, PERCENTAGE_ATTRIBUTE)
            .or_else(|| dom.attribute(item, PERCENTAGE_ATTRIBUTE));
        let Some(percentage) = percentage else {
            tracing::warn!("Skill item {} has no {}", index, PERCENTAGE_ATTRIBUTE);
            return;
        };

        let width = format!("{}%", percentage);
        dom.set_style(bar, "--progress-width", &width);
        dom.add_class(item, "animate");
        dom.set_style(bar, "width", &width);

        tracing::debug!("Animated skill: {}", width);
    }
}
