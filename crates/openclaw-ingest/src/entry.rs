// SPDX-FileCopyrightText: 2026 OpenClaw Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The record written to the ingest log for each inbound message.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One received inbound message, as recorded in the ingest log.
///
/// Serializes to a camelCase JSON object. Absent optional fields are omitted
/// from the output and read back as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestLogEntry {
    /// ISO-8601 receive timestamp.
    pub received_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Transport the message arrived on (`"sms"`, `"telegram"`, ...).
    pub channel: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_e164: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub originating_channel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub originating_to: Option<String>,
}

macro_rules! optional_setters {
    ($($field:ident),* $(,)?) => {
        $(
            #[doc = concat!("Set `", stringify!($field), "`.")]
            pub fn $field(mut self, value: impl Into<String>) -> Self {
                self.$field = Some(value.into());
                self
            }
        )*
    };
}

impl IngestLogEntry {
    /// Create an entry for `channel` stamped with the current UTC time.
    pub fn new(channel: impl Into<String>) -> Self {
        Self::with_received_at(channel, now_iso8601())
    }

    /// Create an entry with an explicit receive timestamp.
    pub fn with_received_at(channel: impl Into<String>, received_at: impl Into<String>) -> Self {
        Self {
            received_at: received_at.into(),
            message_id: None,
            session_key: None,
            account_id: None,
            channel: channel.into(),
            chat_type: None,
            from: None,
            to: None,
            sender_id: None,
            sender_name: None,
            sender_e164: None,
            raw_body: None,
            body: None,
            media_type: None,
            correlation_id: None,
            originating_channel: None,
            originating_to: None,
        }
    }

    optional_setters! {
        message_id,
        session_key,
        account_id,
        chat_type,
        from,
        to,
        sender_id,
        sender_name,
        sender_e164,
        raw_body,
        body,
        media_type,
        correlation_id,
        originating_channel,
        originating_to,
    }

    /// Render as one JSON Lines record, newline included.
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        let mut line = serde_json::to_string(self)?;
        line.push('\n');
        Ok(line)
    }
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stamps_millisecond_utc_timestamp() {
        let entry = IngestLogEntry::new("sms");
        let ts = &entry.received_at;
        assert!(ts.ends_with('Z'), "got {ts}");
        assert_eq!(ts.len(), "2026-01-01T00:00:00.000Z".len(), "got {ts}");
        assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
    }

    #[test]
    fn absent_fields_are_omitted() {
        let entry = IngestLogEntry::with_received_at("sms", "2026-01-01T00:00:00.000Z")
            .message_id("m1");
        let json = serde_json::to_value(&entry).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), 3);
        assert_eq!(obj["channel"], "sms");
        assert_eq!(obj["messageId"], "m1");
        assert_eq!(obj["receivedAt"], "2026-01-01T00:00:00.000Z");
    }

    #[test]
    fn field_names_are_camel_case() {
        let entry = IngestLogEntry::with_received_at("whatsapp", "t")
            .session_key("s")
            .account_id("a")
            .chat_type("group")
            .from("f")
            .to("t2")
            .sender_id("sid")
            .sender_name("Ada")
            .sender_e164("+15550100")
            .raw_body("raw")
            .body("body")
            .media_type("image/png")
            .correlation_id("c")
            .originating_channel("sms")
            .originating_to("+15550101");
        let json = serde_json::to_value(&entry).unwrap();

        for key in [
            "receivedAt",
            "sessionKey",
            "accountId",
            "channel",
            "chatType",
            "from",
            "to",
            "senderId",
            "senderName",
            "senderE164",
            "rawBody",
            "body",
            "mediaType",
            "correlationId",
            "originatingChannel",
            "originatingTo",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert!(json.get("messageId").is_none());
    }

    #[test]
    fn json_line_is_single_line_and_parses_back() {
        let entry = IngestLogEntry::with_received_at("sms", "t").body("line one\nline two");
        let line = entry.to_json_line().unwrap();

        assert!(line.ends_with('\n'));
        assert_eq!(line.matches('\n').count(), 1, "embedded newlines must be escaped");

        let parsed: IngestLogEntry = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(parsed, entry);
    }

    #[test]
    fn null_fields_read_back_as_absent() {
        let parsed: IngestLogEntry =
            serde_json::from_str(r#"{"receivedAt":"t","channel":"sms","messageId":null}"#)
                .unwrap();
        assert_eq!(parsed.message_id, None);
        assert_eq!(parsed.channel, "sms");
    }
}
