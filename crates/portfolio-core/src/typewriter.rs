//! Typewriter effect cycling through role strings.

use std::time::Duration;

use crate::config::TimingConfig;
use crate::dom::{Dom, NodeId};

pub const TYPEWRITER_ID: &str = "typewriter";

/// Position of the animation: which role, how much of it is shown, and
/// whether characters are being added or removed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypewriterState {
    pub role_index: usize,
    pub cursor: usize,
    pub deleting: bool,
}

/// Types each role one character at a time, pauses, erases it, moves on
#[derive(Debug, Clone)]
pub struct Typewriter {
    element: Option<NodeId>,
    roles: Vec<String>,
    type_delay: Duration,
    full_pause: Duration,
    delete_delay: Duration,
    empty_pause: Duration,
}

impl Typewriter {
    pub fn new(dom: &impl Dom, roles: Vec<String>, timing: &TimingConfig) -> Self {
        let element = dom.element_by_id(TYPEWRITER_ID);
        if element.is_none() {
            tracing::warn!("Typewriter element not found");
        }
        // An empty role would cycle without ever taking a typing delay
        let roles: Vec<String> = roles.into_iter().filter(|r| !r.is_empty()).collect();
        Self {
            element,
            roles,
            type_delay: timing.type_delay,
            full_pause: timing.full_pause,
            delete_delay: timing.delete_delay,
            empty_pause: timing.empty_pause,
        }
    }

    /// Whether there is anything to animate
    pub fn is_active(&self) -> bool {
        self.element.is_some() && !self.roles.is_empty()
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    /// Advance one tick and return the delay before the next one.
    ///
    /// Returns `None` when the element or the role list is missing, which
    /// ends the loop.
    pub fn step(&self, dom: &mut impl Dom, state: &mut TypewriterState) -> Option<Duration> {
        let element = self.element?;
        if self.roles.is_empty() {
            return None;
        }
        state.role_index %= self.roles.len();
        let role = &self.roles[state.role_index];
        let len = role.chars().count();

        if !state.deleting {
            if state.cursor < len {
                state.cursor += 1;
                dom.set_text_content(element, &prefix(role, state.cursor));
                Some(self.type_delay)
            } else {
                state.deleting = true;
                Some(self.full_pause)
            }
        } else if state.cursor > 0 {
            state.cursor = state.cursor.min(len) - 1;
            dom.set_text_content(element, &prefix(role, state.cursor));
            Some(self.delete_delay)
        } else {
            state.deleting = false;
            state.role_index = (state.role_index + 1) % self.roles.len();
            Some(self.empty_pause)
        }
    }

    /// Text that should currently be displayed for `state`
    pub fn displayed(&self, state: &TypewriterState) -> String {
        self.roles
            .get(state.role_index)
            .map(|role| prefix(role, state.cursor))
            .unwrap_or_default()
    }
}

fn prefix(s: &str, chars: usize) -> String {
    s.chars().take(chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDom;

    fn page() -> MemoryDom {
        let mut dom = MemoryDom::default();
        let body = dom.body();
        let span = dom.append_new(body, "span");
        dom.set_attribute(span, "id", TYPEWRITER_ID);
        dom
    }

    fn text(dom: &MemoryDom) -> String {
        dom.text_content(dom.element_by_id(TYPEWRITER_ID).unwrap())
    }

    #[test]
    fn empty_roles_are_skipped() {
        let mut dom = page();
        let writer = Typewriter::new(&dom, vec![String::new(), "ab".into(), String::new()], &TimingConfig::default());
        assert_eq!(writer.roles(), ["ab".to_string()]);

        let only_empty = Typewriter::new(&dom, vec![String::new()], &TimingConfig::default());
        assert!(!only_empty.is_active());
        assert_eq!(only_empty.step(&mut dom, &mut TypewriterState::default()), None);
    }

    #[test]
    fn types_pauses_deletes_and_advances() {
        let mut dom = page();
        let timing = TimingConfig::default();
        let writer = Typewriter::new(&dom, vec!["ab".into(), "xyz".into()], &timing);
        let mut state = TypewriterState::default();

        assert_eq!(writer.step(&mut dom, &mut state), Some(timing.type_delay));
        assert_eq!(text(&dom), "a");
        assert_eq!(writer.step(&mut dom, &mut state), Some(timing.type_delay));
        assert_eq!(text(&dom), "ab");

        assert_eq!(writer.step(&mut dom, &mut state), Some(timing.full_pause));
        assert!(state.deleting);

        assert_eq!(writer.step(&mut dom, &mut state), Some(timing.delete_delay));
        assert_eq!(text(&dom), "a");
        assert_eq!(writer.step(&mut dom, &mut state), Some(timing.delete_delay));
        assert_eq!(text(&dom), "");

        assert_eq!(writer.step(&mut dom, &mut state), Some(timing.empty_pause));
        assert_eq!(state.role_index, 1);
        assert!(!state.deleting);

        writer.step(&mut dom, &mut state);
        assert_eq!(text(&dom), "x");
    }

    #[test]
    fn wraps_back_to_first_role() {
        let mut dom = page();
        let writer = Typewriter::new(&dom, vec!["a".into()], &TimingConfig::default());
        let mut state = TypewriterState::default();

        // type, pause, delete, advance
        for _ in 0..4 {
            writer.step(&mut dom, &mut state);
        }
        assert_eq!(state, TypewriterState::default());
    }

    #[test]
    fn multibyte_roles_step_by_character() {
        let mut dom = page();
        let writer = Typewriter::new(&dom, vec!["héllo".into()], &TimingConfig::default());
        let mut state = TypewriterState::default();

        writer.step(&mut dom, &mut state);
        writer.step(&mut dom, &mut state);
        assert_eq!(text(&dom), "hé");
        assert_eq!(writer.displayed(&state), "hé");
    }

    #[test]
    fn inactive_without_element_or_roles() {
        let mut bare = MemoryDom::default();
        let writer = Typewriter::new(&bare, vec!["a".into()], &TimingConfig::default());
        assert!(!writer.is_active());
        assert_eq!(writer.step(&mut bare, &mut TypewriterState::default()), None);

        let mut dom = page();
        let empty = Typewriter::new(&dom, vec![], &TimingConfig::default());
        assert_eq!(empty.step(&mut dom, &mut TypewriterState::default()), None);
    }
}
