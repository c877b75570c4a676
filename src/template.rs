// src/template.rs  —  Message templates with {TX}/{RX} callsign placeholders
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Replaced by the operator's own callsign
pub const MY_CALLSIGN: &str = "{TX}";
/// Replaced by the other station's callsign
pub const THEIR_CALLSIGN: &str = "{RX}";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template '{template}' needs {placeholder} but that callsign is not set")]
    MissingCallsign { template: String, placeholder: &'static str },

    #[error("no template named '{0}'")]
    UnknownTemplate(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTemplate {
    pub name:    String,
    pub message: String,
    /// Append to the current message instead of replacing it
    #[serde(default)]
    pub append:  bool,
}

impl MessageTemplate {
    pub fn new(name: &str, message: &str, append: bool) -> Self {
        Self { name: name.into(), message: message.into(), append }
    }

    pub fn requires_my_callsign(&self) -> bool { find_ci(&self.message, MY_CALLSIGN).is_some() }
    pub fn requires_their_callsign(&self) -> bool { find_ci(&self.message, THEIR_CALLSIGN).is_some() }

    /// Substitute both placeholders (case-insensitive)
    pub fn expand(&self, my_call: &str, their_call: &str) -> Result<String, TemplateError> {
        let missing = |placeholder| TemplateError::MissingCallsign {
            template: self.name.clone(),
            placeholder,
        };
        if self.requires_my_callsign() && my_call.trim().is_empty() {
            return Err(missing(MY_CALLSIGN));
        }
        if self.requires_their_callsign() && their_call.trim().is_empty() {
            return Err(missing(THEIR_CALLSIGN));
        }
        let s = replace_ci(&self.message, MY_CALLSIGN, my_call.trim());
        Ok(replace_ci(&s, THEIR_CALLSIGN, their_call.trim()))
    }

    /// Apply to `current`: append templates extend it, others replace it
    pub fn apply(&self, current: &str, my_call: &str, their_call: &str) -> Result<String, TemplateError> {
        let text = self.expand(my_call, their_call)?;
        if !self.append || current.trim().is_empty() {
            return Ok(text);
        }
        Ok(format!("{} {}", current.trim_end(), text))
    }
}

/// The stock template set
pub fn default_templates() -> Vec<MessageTemplate> {
    vec![
        MessageTemplate::new("CQ",   "CQ CQ CQ DE {TX} {TX} {TX} K", false),
        MessageTemplate::new("QRZ?", "QRZ? DE {TX} K",               false),
        MessageTemplate::new("RST",  "{RX} DE {TX} UR RST 599 5NN",  false),
        MessageTemplate::new("{TX}", "{TX}",                         true),
        MessageTemplate::new("{RX}", "{RX}",                         true),
        MessageTemplate::new("73",   "73",                           true),
        MessageTemplate::new("?",    "?",                            true),
        MessageTemplate::new("NIL",  "NIL",                          true),
    ]
}

/// User templates take the default slots in order; unfilled slots keep
/// the defaults and extra user templates are kept after them.
pub fn merge_with_defaults(user: &[MessageTemplate]) -> Vec<MessageTemplate> {
    let defaults = default_templates();
    let n = defaults.len().max(user.len());
    (0..n)
        .filter_map(|i| user.get(i).or_else(|| defaults.get(i)).cloned())
        .collect()
}

/// Look a template up by name (case-insensitive)
pub fn find<'a>(templates: &'a [MessageTemplate], name: &str) -> Result<&'a MessageTemplate, TemplateError> {
    templates
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| TemplateError::UnknownTemplate(name.to_string()))
}

fn find_ci(haystack: &str, needle: &str) -> Option<usize> {
    haystack.to_ascii_uppercase().find(needle)
}

// ASCII upper-casing keeps byte offsets, so indices map back onto `s`
fn replace_ci(s: &str, needle: &str, with: &str) -> String {
    let upper = s.to_ascii_uppercase();
    let mut out = String::with_capacity(s.len());
    let mut last = 0;
    for (i, _) in upper.match_indices(needle) {
        out.push_str(&s[last..i]);
        out.push_str(with);
        last = i + needle.len();
    }
    out.push_str(&s[last..]);
    out
}
