//! Chat webhook notifier.
//!
//! Posts each report as a single Discord-style embed: one coloured embed
//! with non-inline fields per report section. A long section is split over
//! several fields with the same name so every field stays within Discord's
//! limits; whatever does not fit in one message is summarised in a final
//! "More:" field.

use super::{LockReport, Notifier};
use crate::error::{LockwatchError, Result};
use chrono::{DateTime, Utc};
use reqwest::Url;
use reqwest::blocking::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Upper bound on one webhook call, connection included.
pub const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(30);

/// Longest value Discord accepts for one embed field.
pub const MAX_FIELD_VALUE_CHARS: usize = 1024;

/// Most fields Discord accepts in one embed.
pub const MAX_FIELDS: usize = 25;

/// Most characters Discord accepts across an embed's names and values.
pub const MAX_EMBED_CHARS: usize = 6000;

/// Name of the field that counts lines left out of the message.
pub const OVERFLOW_FIELD_NAME: &str = "More:";

/// Room kept free in the embed for the overflow field.
const OVERFLOW_RESERVE_CHARS: usize = 64;

/// JSON body of a webhook call.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookPayload {
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Embed {
    pub color: u32,
    pub timestamp: String,
    pub fields: Vec<EmbedField>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl WebhookPayload {
    pub fn from_report(report: &LockReport, at: DateTime<Utc>) -> Self {
        Self {
            embeds: vec![Embed {
                color: report.severity.color(),
                timestamp: at.to_rfc3339(),
                fields: build_fields(report),
            }],
        }
    }
}

/// Pack report lines into fields, in order, within the embed limits.
fn build_fields(report: &LockReport) -> Vec<EmbedField> {
    let content_budget = MAX_EMBED_CHARS - OVERFLOW_RESERVE_CHARS;
    let mut fields: Vec<EmbedField> = Vec::new();
    let mut used = 0;
    let mut omitted = 0;

    for section in &report.sections {
        let title_len = section.title.chars().count();
        let mut section_open = false;

        for line in section.body.lines() {
            if omitted > 0 {
                omitted += 1;
                continue;
            }

            let line = truncate_chars(line, MAX_FIELD_VALUE_CHARS);
            let line_len = line.chars().count();
            let extends_last = section_open
                && fields.last().is_some_and(|field| {
                    field.value.chars().count() + 1 + line_len <= MAX_FIELD_VALUE_CHARS
                });
            let cost = if extends_last {
                1 + line_len
            } else {
                title_len + line_len
            };

            let out_of_fields = !extends_last && fields.len() >= MAX_FIELDS - 1;
            if used + cost > content_budget || out_of_fields {
                omitted = 1;
                continue;
            }

            match fields.last_mut() {
                Some(field) if extends_last => {
                    field.value.push('\n');
                    field.value.push_str(&line);
                }
                _ => {
                    fields.push(EmbedField {
                        name: section.title.to_string(),
                        value: line,
                        inline: false,
                    });
                    section_open = true;
                }
            }
            used += cost;
        }
    }

    if omitted > 0 {
        fields.push(EmbedField {
            name: OVERFLOW_FIELD_NAME.to_string(),
            value: format!("...and {} more", omitted),
            inline: false,
        });
    }

    fields
}

fn truncate_chars(line: &str, max: usize) -> String {
    match line.char_indices().nth(max) {
        Some((end, _)) => line[..end].to_string(),
        None => line.to_string(),
    }
}

/// Sends reports to a webhook URL over a client reused for every call.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: Client,
    url: Url,
}

impl WebhookNotifier {
    pub fn new(url: Url) -> Result<Self> {
        let client = Client::builder()
            .timeout(WEBHOOK_TIMEOUT)
            .build()
            .map_err(|e| LockwatchError::Config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client, url })
    }
}

impl Notifier for WebhookNotifier {
    fn notify(&self, report: &LockReport) -> Result<()> {
        let payload = WebhookPayload::from_report(report, Utc::now());

        let response = self
            .client
            .post(self.url.clone())
            .json(&payload)
            .send()
            .map_err(|e| LockwatchError::Notification(format!("webhook request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LockwatchError::Notification(format!(
                "webhook returned HTTP {}",
                status
            )));
        }

        debug!(status = status.as_u16(), "webhook accepted report");
        Ok(())
    }
}
