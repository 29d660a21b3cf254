//! Email records and the text field seam.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A record the analyzer can read a subject and body from.
///
/// Absent fields are treated as empty text by the engine.
pub trait TextFields {
    /// The subject line, if any.
    fn subject(&self) -> Option<&str>;

    /// The body text, if any.
    fn body(&self) -> Option<&str>;
}

/// A single email as submitted for analysis.
///
/// Only `subject` and `body` are analyzed. The remaining fields travel with
/// the record so batch output can be traced back to its source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailRecord {
    /// Date the email was sent, in any format.
    pub date: Option<String>,
    /// Sender of the email.
    #[serde(rename = "from", alias = "sender")]
    pub sender: Option<String>,
    /// Recipient(s) of the email.
    pub to: Option<String>,
    /// Subject line.
    #[serde(deserialize_with = "text_or_none")]
    pub subject: Option<String>,
    /// Full body text.
    #[serde(deserialize_with = "text_or_none")]
    pub body: Option<String>,
    /// Whether the email carried attachments.
    pub has_attachments: bool,
    /// Where the email was loaded from.
    pub source_path: Option<String>,
}

/// Accept any JSON value for an analyzed text field; non-strings are absent.
fn text_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        _ => None,
    })
}

impl EmailRecord {
    /// Create a record with a subject and body.
    pub fn new<S: Into<String>, B: Into<String>>(subject: S, body: B) -> Self {
        EmailRecord {
            subject: Some(subject.into()),
            body: Some(body.into()),
            ..Default::default()
        }
    }

    /// Set the date.
    pub fn with_date<S: Into<String>>(mut self, date: S) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Set the sender.
    pub fn with_sender<S: Into<String>>(mut self, sender: S) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Set the recipient(s).
    pub fn with_recipient<S: Into<String>>(mut self, to: S) -> Self {
        self.to = Some(to.into());
        self
    }

    /// Set the source path.
    pub fn with_source_path<S: Into<String>>(mut self, source_path: S) -> Self {
        self.source_path = Some(source_path.into());
        self
    }
}

impl TextFields for EmailRecord {
    fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

impl TextFields for Value {
    fn subject(&self) -> Option<&str> {
        self.get("subject").and_then(Value::as_str)
    }

    fn body(&self) -> Option<&str> {
        self.get("body").and_then(Value::as_str)
    }
}

impl TextFields for HashMap<String, String> {
    fn subject(&self) -> Option<&str> {
        self.get("subject").map(String::as_str)
    }

    fn body(&self) -> Option<&str> {
        self.get("body").map(String::as_str)
    }
}

impl<T: TextFields + ?Sized> TextFields for &T {
    fn subject(&self) -> Option<&str> {
        (**self).subject()
    }

    fn body(&self) -> Option<&str> {
        (**self).body()
    }
}
