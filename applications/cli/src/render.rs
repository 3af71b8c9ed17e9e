//! Output rendering (plain text or JSON)

use crate::config::OutputFormat;
use crate::error::Result;
use mixtape_core::{Comment, PlaylistSummary, Track};
use std::sync::Arc;

pub fn summary(summary: &PlaylistSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
        OutputFormat::Text => {
            let lines = [
                format!("{} ({})", summary.name, summary.id),
                format!("  created:  {}", summary.created_at.to_rfc3339()),
                format!("  songs:    {}", summary.song_count),
                format!(
                    "  duration: {}",
                    format_duration(summary.total_duration_secs)
                ),
                format!("  likes:    {}", summary.likes),
                format!("  comments: {}", summary.comments),
            ];
            Ok(lines.join("\n"))
        }
    }
}

pub fn songs(songs: &[Arc<Track>], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let songs: Vec<&Track> = songs.iter().map(|s| s.as_ref()).collect();
            Ok(serde_json::to_string_pretty(&songs)?)
        }
        OutputFormat::Text => {
            if songs.is_empty() {
                return Ok("(no songs)".to_string());
            }
            let lines: Vec<String> = songs
                .iter()
                .enumerate()
                .map(|(i, song)| format!("{:>3}. {}", i + 1, song))
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

pub fn comments(comments: &[&Comment], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(comments)?),
        OutputFormat::Text => {
            if comments.is_empty() {
                return Ok("(no comments)".to_string());
            }
            let lines: Vec<String> = comments
                .iter()
                .map(|c| {
                    format!(
                        "[{}] {}: {}",
                        c.created_at().format("%Y-%m-%d %H:%M:%S"),
                        c.user_id(),
                        c.text()
                    )
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

/// `h:mm:ss` above an hour, `m:ss` below
pub fn format_duration(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}
