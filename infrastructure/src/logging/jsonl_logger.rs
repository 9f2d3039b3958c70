//! Append-only JSONL transcript of conversation events.
//!
//! Every [`ConversationEvent`] becomes one JSON object per line. Object
//! payloads are flattened into the record next to `type` and `logged_at`;
//! any other payload is nested under `data`.

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};
use wellness_application::{ConversationEvent, ConversationLogger};

/// Transcript writer shared by the chat session and both advisors.
pub struct JsonlConversationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlConversationLogger {
    /// Open `path` for appending, creating parent directories as needed.
    ///
    /// Returns `None` (after a warning) when the file cannot be opened;
    /// the caller then runs without a transcript.
    pub fn open(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create transcript directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| warn!("Could not open transcript {}: {}", path.display(), e))
            .ok()?;

        debug!("Writing conversation transcript to {}", path.display());
        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(event: ConversationEvent) -> Value {
        let mut map = match event.payload {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("data".into(), other);
                map
            }
        };
        map.insert("type".into(), Value::from(event.event_type));
        map.insert(
            "logged_at".into(),
            Value::from(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        Value::Object(map)
    }
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let Ok(line) = serde_json::to_string(&Self::record(event)) else {
            return;
        };

        let mut writer = match self.writer.lock() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        };
        // One line per event; flushed immediately so a crash keeps the tail
        if writeln!(writer, "{}", line).and_then(|_| writer.flush()).is_err() {
            debug!("Dropped transcript event for {}", self.path.display());
        }
    }
}

impl Drop for JsonlConversationLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wellness_domain::{Conversation, MessageCategory, Topic};

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_messages_are_written_one_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.jsonl");
        let logger = JsonlConversationLogger::open(&path).unwrap();

        let now = Utc::now();
        let mut conversation = Conversation::new(now);
        logger.log(ConversationEvent::message(&conversation.messages()[0]));

        let user = conversation
            .begin_exchange("I have cramps", now)
            .unwrap()
            .clone();
        logger.log(ConversationEvent::message(&user));

        let reply = conversation
            .complete_exchange(
                Topic::Pain.response(),
                MessageCategory::Reply(Topic::Pain),
                now,
            )
            .unwrap()
            .clone();
        logger.log(ConversationEvent::message(&reply));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["type"], "assistant_message");
        assert_eq!(records[1]["type"], "user_message");
        assert_eq!(records[1]["content"], "I have cramps");
        assert_eq!(records[2]["id"], 3);
        assert!(records.iter().all(|r| r.get("logged_at").is_some()));
    }

    #[test]
    fn test_non_object_payload_is_nested() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        let logger = JsonlConversationLogger::open(&path).unwrap();

        logger.log(ConversationEvent::new(
            "response_failed",
            serde_json::json!("responder offline"),
        ));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records[0]["type"], "response_failed");
        assert_eq!(records[0]["data"], "responder offline");
    }

    #[test]
    fn test_reopening_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("transcript.jsonl");

        for occasion in ["wedding", "interview"] {
            let logger = JsonlConversationLogger::open(&path).unwrap();
            logger.log(ConversationEvent::new(
                "outfit_suggestions",
                serde_json::json!({ "occasion": occasion }),
            ));
        }

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["occasion"], "wedding");
        assert_eq!(records[1]["occasion"], "interview");
    }

    #[test]
    fn test_unopenable_path_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a file
        assert!(JsonlConversationLogger::open(dir.path()).is_none());
    }
}
