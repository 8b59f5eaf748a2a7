//! JSONL file writer for chat events.
//!
//! Each [`ChatEvent`] becomes one JSON line carrying a `type` and
//! `timestamp` field alongside its payload, appended through a buffered
//! writer.

use shopchat_application::ports::chat_log::{ChatEvent, ChatLog};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Chat transcript log writing one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Construction fails open:
/// an unwritable path yields `None` and the caller proceeds without a
/// transcript.
pub struct JsonlChatLog {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlChatLog {
    /// Create a new log writing to `path`, creating parent directories as
    /// needed. Returns `None` if the file cannot be created.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if let Err(error) = std::fs::create_dir_all(parent) {
                warn!(
                    "Could not create transcript log directory {}: {}",
                    parent.display(),
                    error
                );
                return None;
            }
        }

        let file = match File::create(path) {
            Ok(f) => f,
            Err(error) => {
                warn!(
                    "Could not create transcript log file {}: {}",
                    path.display(),
                    error
                );
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChatLog for JsonlChatLog {
    fn record(&self, event: ChatEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        // Merge the payload with the type + timestamp envelope
        let record = match event.payload {
            serde_json::Value::Object(mut map) => {
                map.insert(
                    "type".to_string(),
                    serde_json::Value::String(event.event_type),
                );
                map.insert("timestamp".to_string(), serde_json::Value::String(timestamp));
                serde_json::Value::Object(map)
            }
            payload => serde_json::json!({
                "type": event.event_type,
                "timestamp": timestamp,
                "data": payload,
            }),
        };

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            // Flush per event; the transcript is append-only and should
            // survive a crash
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlChatLog {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
