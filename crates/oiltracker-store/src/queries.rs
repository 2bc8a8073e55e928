use anyhow::Result;
use tracing::debug;

use oiltracker_types::analytics::{GradeInterpretation, GradeScore};
use oiltracker_types::models::{Channel, ChatMessage, Grade, PriceObservation, User};

use crate::{CHAT_HISTORY_LIMIT, Store, analytics, seed};

impl Store {
    // -- Users --

    /// Exact, case-sensitive match on both email and password.
    pub fn find_user_by_credentials(&self, email: &str, password: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.email == email && u.password == password)
    }

    // -- Market --

    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    pub fn market(&self) -> &[PriceObservation] {
        &self.market
    }

    pub fn market_for_grade(&self, grade_id: u32) -> Vec<PriceObservation> {
        self.market
            .iter()
            .filter(|row| row.grade_id == grade_id)
            .cloned()
            .collect()
    }

    /// Most recent observation of every grade that has any, in grade order.
    pub fn latest_market(&self) -> Vec<PriceObservation> {
        self.grades
            .iter()
            .filter_map(|g| {
                self.market
                    .iter()
                    .filter(|row| row.grade_id == g.id)
                    .max_by_key(|row| row.date)
                    .cloned()
            })
            .collect()
    }

    // -- Analytics --

    /// Date-ascending prices of one grade with its name, or `None` if the
    /// grade has no observations.
    fn price_series(&self, grade_id: u32) -> Option<(String, Vec<f64>)> {
        let mut rows = self.market_for_grade(grade_id);
        let name = rows.first()?.grade_name.clone();
        rows.sort_by_key(|row| row.date);
        Some((name, rows.into_iter().map(|row| row.price_usd).collect()))
    }

    pub fn buying_score(&self, grade_id: u32) -> Option<GradeScore> {
        let (grade_name, prices) = self.price_series(grade_id)?;
        let indicators = analytics::compute_indicators(&prices);
        Some(GradeScore {
            grade_id,
            grade_name,
            score: analytics::buying_score(&indicators),
        })
    }

    /// Scores for every grade that has data, in grade order.
    pub fn buying_scores(&self) -> Vec<GradeScore> {
        self.grades
            .iter()
            .filter_map(|g| self.buying_score(g.id))
            .collect()
    }

    pub fn interpretation(&self, grade_id: u32) -> Option<GradeInterpretation> {
        let (grade_name, prices) = self.price_series(grade_id)?;
        let indicators = analytics::compute_indicators(&prices);
        Some(GradeInterpretation {
            grade_id,
            grade_name,
            notes: analytics::interpret(&indicators),
            indicators,
        })
    }

    // -- Chat --

    pub fn channels(&self) -> Result<Vec<Channel>> {
        self.with_chat(|log| Ok(log.channels()))
    }

    pub fn create_channel(&self, name: &str) -> Result<Channel> {
        self.with_chat(|log| {
            let channel = log.add_channel(name);
            debug!("channel {} created as {}", channel.id, channel.name);
            Ok(channel)
        })
    }

    /// Latest messages across all channels, or of one channel.
    pub fn recent_chat(&self, channel_id: Option<u64>) -> Result<Vec<ChatMessage>> {
        self.with_chat(|log| Ok(log.recent(channel_id, CHAT_HISTORY_LIMIT)))
    }

    /// Posts to `general` when no channel is given. `Ok(None)` if the channel
    /// does not exist.
    pub fn post_chat(
        &self,
        channel_id: Option<u64>,
        sender: &str,
        message: &str,
    ) -> Result<Option<ChatMessage>> {
        let channel_id = channel_id.unwrap_or(seed::GENERAL_CHANNEL_ID);
        self.with_chat(|log| {
            if !log.has_channel(channel_id) {
                return Ok(None);
            }
            let row = log.append(channel_id, sender, message);
            debug!("chat message {} from {} in channel {}", row.id, row.sender, channel_id);
            Ok(Some(row))
        })
    }
}
