//! In-memory log of predictions made during a session
//!
//! Nothing here is written to disk; the log lives and dies with the
//! process.

use crate::projection::PredictionSummary;
use crate::types::CompletionModel;
use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Maximum number of predictions to keep
const MAX_HISTORY_SIZE: usize = 100;

/// One finished prediction
#[derive(Debug, Clone)]
pub struct PredictionRecord {
    pub model: CompletionModel,
    pub total_students: u32,
    pub fulfilled_students: u32,
    pub days_left: u32,
    pub total_days: u32,
    pub rounded_final: u32,
    pub is_capped: bool,
    pub made_at: DateTime<Local>,
}

impl PredictionRecord {
    pub fn from_summary(summary: &PredictionSummary) -> Self {
        Self {
            model: summary.model,
            total_students: summary.input.total_students(),
            fulfilled_students: summary.input.fulfilled_students(),
            days_left: summary.input.days_left(),
            total_days: summary.input.total_days(),
            rounded_final: summary.rounded_final,
            is_capped: summary.is_capped(),
            made_at: Local::now(),
        }
    }
}

/// Bounded FIFO of predictions
pub struct PredictionLog {
    records: VecDeque<PredictionRecord>,
    total_recorded: usize,
}

impl PredictionLog {
    pub fn new() -> Self {
        Self {
            records: VecDeque::with_capacity(16),
            total_recorded: 0,
        }
    }

    /// Record a prediction, evicting the oldest once full
    pub fn record(&mut self, summary: &PredictionSummary) {
        if self.records.len() >= MAX_HISTORY_SIZE {
            self.records.pop_front();
        }
        self.records.push_back(PredictionRecord::from_summary(summary));
        self.total_recorded += 1;
    }

    /// Up to `limit` records, newest first
    pub fn recent(&self, limit: usize) -> Vec<&PredictionRecord> {
        self.records.iter().rev().take(limit).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Predictions made this session, including evicted ones
    pub fn total_recorded(&self) -> usize {
        self.total_recorded
    }
}

impl Default for PredictionLog {
    fn default() -> Self {
        Self::new()
    }
}
