//! Contact form validation and simulated submission.
//!
//! Fields validate on blur and on submit, clear their error on input, and a
//! valid submit disables the button for a fixed delay before resetting the
//! form. Nothing is sent anywhere.

use std::collections::BTreeMap;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::ValidationConfig;
use crate::dom::{Dom, NodeId};
use crate::error::PortfolioResult;

pub const CONTACT_FORM_ID: &str = "contactForm";
pub const DOWNLOAD_RESUME_ID: &str = "downloadResume";
pub const FORM_CONTROL_CLASS: &str = "form-control";
pub const FIELD_ERROR_CLASS: &str = "field-error";

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

const ERROR_COLOR: &str = "#ef4444";
const VALID_COLOR: &str = "#1FB8CD";
const SENDING_LABEL: &str = "Sending Message...";
const SPINNER_ICON: &str = "fas fa-spinner fa-spin";
const SAVED_LABEL_ATTRIBUTE: &str = "data-label";

/// Compiled validation rules
#[derive(Debug, Clone)]
pub struct ValidationRules {
    email: Regex,
    min_lengths: BTreeMap<String, usize>,
}

impl ValidationRules {
    pub fn from_config(config: &ValidationConfig) -> PortfolioResult<Self> {
        Ok(Self {
            email: Regex::new(&config.email_pattern)?,
            min_lengths: config.min_lengths.clone(),
        })
    }

    pub fn is_valid_email(&self, value: &str) -> bool {
        self.email.is_match(value)
    }

    /// Check one value. The last failing rule decides the message.
    pub fn validate_value(
        &self,
        input_type: Option<&str>,
        name: Option<&str>,
        value: &str,
        required: bool,
    ) -> Result<(), String> {
        let value = value.trim();
        if value.is_empty() {
            return if required {
                Err(REQUIRED_MESSAGE.to_string())
            } else {
                Ok(())
            };
        }

        let mut error = None;

        if input_type == Some("email") && !self.is_valid_email(value) {
            error = Some(INVALID_EMAIL_MESSAGE.to_string());
        }

        if let Some((name, min)) = name.and_then(|n| self.min_lengths.get_key_value(n)) {
            if value.chars().count() < *min {
                error = Some(format!(
                    "{} must be at least {} characters",
                    capitalize(name),
                    min
                ));
            }
        }

        match error {
            Some(message) => Err(message),
            None => Ok(()),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Field values captured at submit time, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub fields: BTreeMap<String, String>,
}

impl ContactSubmission {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one required field failed
    Invalid,
    /// A previous submission is still in flight
    Busy,
    /// Loading state entered; finish with [`ContactForm::complete_submission`]
    Started(ContactSubmission),
}

/// The contact form and its controls
#[derive(Debug, Clone)]
pub struct ContactForm {
    form: Option<NodeId>,
    submit: Option<NodeId>,
    download: Option<NodeId>,
    rules: ValidationRules,
}

impl ContactForm {
    pub fn new(dom: &impl Dom, rules: ValidationRules) -> Self {
        let form = dom.element_by_id(CONTACT_FORM_ID);
        if form.is_none() {
            tracing::warn!("Contact form not found");
        }
        let submit = form.and_then(|f| {
            dom.descendants(f).into_iter().find(|n| {
                dom.tag_name(*n).as_deref() == Some("button")
                    && dom.attribute(*n, "type").as_deref() == Some("submit")
            })
        });

        Self {
            form,
            submit,
            download: dom.element_by_id(DOWNLOAD_RESUME_ID),
            rules,
        }
    }

    pub fn form(&self) -> Option<NodeId> {
        self.form
    }

    pub fn submit_button(&self) -> Option<NodeId> {
        self.submit
    }

    pub fn download_button(&self) -> Option<NodeId> {
        self.download
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Every `.form-control` inside the form
    pub fn fields(&self, dom: &impl Dom) -> Vec<NodeId> {
        let Some(form) = self.form else {
            return Vec::new();
        };
        dom.descendants(form)
            .into_iter()
            .filter(|n| dom.has_class(*n, FORM_CONTROL_CLASS))
            .collect()
    }

    /// Field with the given `name` attribute
    pub fn field(&self, dom: &impl Dom, name: &str) -> Option<NodeId> {
        self.fields(dom)
            .into_iter()
            .find(|f| dom.attribute(*f, "name").as_deref() == Some(name))
    }

    pub fn is_field(&self, dom: &impl Dom, node: NodeId) -> bool {
        self.fields(dom).contains(&node)
    }

    /// Store typed text and clear any error on the field
    pub fn input(&self, dom: &mut impl Dom, field: NodeId, value: &str) {
        dom.set_attribute(field, "value", value);
        self.clear_error(dom, field);
    }

    /// Validate one field, updating its border and inline error
    pub fn validate_field(&self, dom: &mut impl Dom, field: NodeId) -> bool {
        let value = dom.attribute(field, "value").unwrap_or_default();
        let input_type = dom.attribute(field, "type");
        let name = dom.attribute(field, "name");
        let required = dom.attribute(field, "required").is_some();

        self.clear_error(dom, field);

        match self
            .rules
            .validate_value(input_type.as_deref(), name.as_deref(), &value, required)
        {
            Ok(()) => {
                dom.set_style(field, "border-color", VALID_COLOR);
                true
            }
            Err(message) => {
                self.show_error(dom, field, &message);
                false
            }
        }
    }

    /// Inline error currently shown for `field`
    pub fn field_error(&self, dom: &impl Dom, field: NodeId) -> Option<String> {
        error_element(dom, field).map(|e| dom.text_content(e))
    }

    pub fn show_error(&self, dom: &mut impl Dom, field: NodeId, message: &str) {
        dom.set_style(field, "border-color", ERROR_COLOR);
        let Some(parent) = dom.parent(field) else {
            return;
        };

        let error = match error_element(dom, field) {
            Some(existing) => existing,
            None => {
                let el = dom.create_element("div");
                dom.add_class(el, FIELD_ERROR_CLASS);
                dom.set_style(el, "color", ERROR_COLOR);
                dom.set_style(el, "font-size", "0.875rem");
                dom.set_style(el, "margin-top", "0.25rem");
                dom.set_style(el, "display", "block");
                dom.append_child(parent, el);
                el
            }
        };
        dom.set_text_content(error, message);
    }

    pub fn clear_error(&self, dom: &mut impl Dom, field: NodeId) {
        dom.set_style(field, "border-color", "");
        if let Some(error) = error_element(dom, field) {
            dom.remove(error);
        }
    }

    /// Validate every required field and enter the loading state if all pass
    pub fn submit(&self, dom: &mut impl Dom, submitting: &mut bool) -> SubmitOutcome {
        if *submitting {
            return SubmitOutcome::Busy;
        }

        let required: Vec<NodeId> = self
            .fields(dom)
            .into_iter()
            .filter(|f| dom.attribute(*f, "required").is_some())
            .collect();

        // Every field is checked so each one shows its own error
        let mut valid = true;
        for field in required {
            if !self.validate_field(dom, field) {
                valid = false;
            }
        }
        if !valid {
            return SubmitOutcome::Invalid;
        }

        let submission = self.values(dom);
        *submitting = true;

        if let Some(button) = self.submit {
            let label = dom.text_content(button);
            dom.set_attribute(button, SAVED_LABEL_ATTRIBUTE, &label);
            dom.set_text_content(button, SENDING_LABEL);
            dom.set_attribute(button, "data-icon", SPINNER_ICON);
            dom.set_attribute(button, "disabled", "");
            dom.add_class(button, "loading");
        }

        SubmitOutcome::Started(submission)
    }

    /// Leave the loading state, reset all fields and clear their errors
    pub fn complete_submission(&self, dom: &mut impl Dom, submitting: &mut bool) {
        *submitting = false;

        if let Some(button) = self.submit {
            let label = dom.attribute(button, SAVED_LABEL_ATTRIBUTE).unwrap_or_default();
            dom.set_text_content(button, &label);
            dom.remove_attribute(button, SAVED_LABEL_ATTRIBUTE);
            dom.remove_attribute(button, "data-icon");
            dom.remove_attribute(button, "disabled");
            dom.remove_class(button, "loading");
        }

        for field in self.fields(dom) {
            dom.set_attribute(field, "value", "");
            self.clear_error(dom, field);
        }
    }

    pub fn is_submit_disabled(&self, dom: &impl Dom) -> bool {
        self.submit
            .is_some_and(|b| dom.attribute(b, "disabled").is_some())
    }

    /// Current values of all named fields
    pub fn values(&self, dom: &impl Dom) -> ContactSubmission {
        let fields = self
            .fields(dom)
            .into_iter()
            .filter_map(|f| {
                let name = dom.attribute(f, "name")?;
                let value = dom.attribute(f, "value").unwrap_or_default();
                Some((name, value))
            })
            .collect();
        ContactSubmission { fields }
    }
}

/// The `.field-error` sibling of a field
fn error_element(dom: &impl Dom, field: NodeId) -> Option<NodeId> {
    let parent = dom.parent(field)?;
    dom.children(parent)
        .into_iter()
        .find(|c| dom.has_class(*c, FIELD_ERROR_CLASS))
}
