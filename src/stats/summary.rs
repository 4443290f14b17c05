//! Overall figures for a conversation.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::Conversation;

/// Headline numbers of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasicInfo {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub message_count: usize,
    pub author_count: usize,
    pub media_count: usize,
}

impl BasicInfo {
    /// The covered period, `DD/MM/YYYY - DD/MM/YYYY`.
    pub fn date_range(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%d/%m/%Y"),
            self.end.format("%d/%m/%Y")
        )
    }
}

/// Time span, message, author and media counts. `None` for an empty
/// conversation.
pub fn basic_info(conversation: &Conversation, media_placeholder: &str) -> Option<BasicInfo> {
    let (start, end) = conversation.time_span()?;
    Some(BasicInfo {
        start,
        end,
        message_count: conversation.len(),
        author_count: conversation.authors().len(),
        media_count: conversation
            .iter()
            .filter(|r| r.is_media(media_placeholder))
            .count(),
    })
}
