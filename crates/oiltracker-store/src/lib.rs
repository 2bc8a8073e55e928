pub mod analytics;
pub mod market;
pub mod queries;
pub mod seed;

use std::sync::Mutex;

use anyhow::{Result, bail};
use chrono::{NaiveDate, Utc};
use rand::Rng;
use tracing::info;

use oiltracker_types::models::{Channel, ChatMessage, Grade, PriceObservation, User};

pub const DEFAULT_WINDOW_DAYS: u32 = 60;
/// Ten years of daily history per grade.
pub const MAX_WINDOW_DAYS: u32 = 3650;
pub const MAX_SENDER_CHARS: usize = 40;
pub const MAX_MESSAGE_CHARS: usize = 500;
pub const CHAT_HISTORY_LIMIT: usize = 200;

/// Process-wide in-memory data. Users, grades and market rows are fixed once
/// opened; only the chat log grows.
pub struct Store {
    users: Vec<User>,
    grades: Vec<Grade>,
    market: Vec<PriceObservation>,
    chat: Mutex<ChatLog>,
}

/// Append-only channels and messages. Ids come from counters that never go
/// back, independent of how many records are held.
pub(crate) struct ChatLog {
    channels: Vec<Channel>,
    messages: Vec<ChatMessage>,
    next_channel_id: u64,
    next_message_id: u64,
}

impl Store {
    /// Seed everything and generate `window_days` of prices ending today.
    pub fn open(window_days: u32) -> Result<Self> {
        let today = Utc::now().date_naive();
        Self::open_with_rng(&mut rand::rng(), today, window_days)
    }

    pub fn open_with_rng<R: Rng>(rng: &mut R, today: NaiveDate, window_days: u32) -> Result<Self> {
        if window_days > MAX_WINDOW_DAYS {
            bail!("market window of {} days exceeds the maximum of {}", window_days, MAX_WINDOW_DAYS);
        }

        let users = seed::users();
        let grades = seed::grades();
        let market = market::generate_prices(rng, &grades, today, window_days)?;

        let mut chat = ChatLog::new();
        for name in seed::CHANNELS {
            chat.add_channel(name);
        }
        chat.append(seed::GENERAL_CHANNEL_ID, seed::WELCOME_SENDER, seed::WELCOME_MESSAGE);

        info!(
            "Store opened: {} users, {} grades, {} price rows ({} days to {})",
            users.len(),
            grades.len(),
            market.len(),
            window_days,
            today
        );

        Ok(Self {
            users,
            grades,
            market,
            chat: Mutex::new(chat),
        })
    }

    pub(crate) fn with_chat<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut ChatLog) -> Result<T>,
    {
        let mut chat = self.chat.lock().map_err(|e| anyhow::anyhow!("chat lock poisoned: {}", e))?;
        f(&mut chat)
    }
}

impl ChatLog {
    fn new() -> Self {
        Self {
            channels: Vec::new(),
            messages: Vec::new(),
            next_channel_id: 1,
            next_message_id: 1,
        }
    }

    pub(crate) fn add_channel(&mut self, name: &str) -> Channel {
        let channel = Channel {
            id: self.next_channel_id,
            name: name.to_string(),
            created_at: Utc::now(),
        };
        self.next_channel_id += 1;
        self.channels.push(channel.clone());
        channel
    }

    pub(crate) fn has_channel(&self, id: u64) -> bool {
        self.channels.iter().any(|c| c.id == id)
    }

    /// Channels sorted by name.
    pub(crate) fn channels(&self) -> Vec<Channel> {
        let mut out = self.channels.clone();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        out
    }

    /// Truncate, stamp and append. Returns the stored record.
    pub(crate) fn append(&mut self, channel_id: u64, sender: &str, message: &str) -> ChatMessage {
        let row = ChatMessage {
            id: self.next_message_id,
            channel_id,
            sender: truncate_chars(sender, MAX_SENDER_CHARS),
            message: truncate_chars(message, MAX_MESSAGE_CHARS),
            ts: Utc::now(),
        };
        self.next_message_id += 1;
        self.messages.push(row.clone());
        row
    }

    /// The last `limit` messages, optionally of one channel, oldest first.
    pub(crate) fn recent(&self, channel_id: Option<u64>, limit: usize) -> Vec<ChatMessage> {
        match channel_id {
            None => {
                let start = self.messages.len().saturating_sub(limit);
                self.messages[start..].to_vec()
            }
            Some(id) => {
                let mut rows: Vec<ChatMessage> = self
                    .messages
                    .iter()
                    .rev()
                    .filter(|m| m.channel_id == id)
                    .take(limit)
                    .cloned()
                    .collect();
                rows.reverse();
                rows
            }
        }
    }
}

/// Cut at a char boundary, never inside a multibyte sequence.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
