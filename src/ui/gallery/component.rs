// SPDX-License-Identifier: MPL-2.0
//! Gallery screen state and its transitions.
//!
//! `State` is the single UI record of the screen: the gallery with its
//! filtered view, the query being typed, the number of batches in flight,
//! the error banner and the drag-hover flag. Batches enter through
//! [`State::begin_batch`] and leave through [`State::finish_batch`].

use crate::application::{BatchPolicy, BatchReport};
use crate::domain::gallery::{Gallery, SearchQuery};
use crate::domain::ui::{GridColumns, KeywordPreview};
use iced::Task;

/// Failure summary shown in the error banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchError {
    /// Nothing from the batch was kept.
    Discarded,
    /// Successful files were kept; `failed` of `total` were not.
    Partial { failed: usize, total: usize },
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    Search,
    ShowAll,
    Clear,
    DismissError,
    OpenPicker,
}

/// Effects propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Open the native multi-file picker.
    OpenPicker,
    /// A search was applied.
    Searched { query_len: usize, matches: usize },
}

/// What [`State::finish_batch`] did with a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub committed: usize,
    pub error: Option<BatchError>,
}

#[derive(Debug, Clone)]
pub struct State {
    gallery: Gallery,
    query: String,
    in_flight: usize,
    error: Option<BatchError>,
    drag_active: bool,
    policy: BatchPolicy,
    columns: GridColumns,
    keyword_preview: KeywordPreview,
}

impl Default for State {
    fn default() -> Self {
        Self::new(
            BatchPolicy::default(),
            GridColumns::default(),
            KeywordPreview::default(),
        )
    }
}

impl State {
    #[must_use]
    pub fn new(policy: BatchPolicy, columns: GridColumns, keyword_preview: KeywordPreview) -> Self {
        Self {
            gallery: Gallery::new(),
            query: String::new(),
            in_flight: 0,
            error: None,
            drag_active: false,
            policy,
            columns,
            keyword_preview,
        }
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    #[must_use]
    pub fn error(&self) -> Option<BatchError> {
        self.error
    }

    #[must_use]
    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    pub fn set_drag_active(&mut self, active: bool) {
        self.drag_active = active;
    }

    #[must_use]
    pub fn policy(&self) -> BatchPolicy {
        self.policy
    }

    #[must_use]
    pub fn columns(&self) -> GridColumns {
        self.columns
    }

    #[must_use]
    pub fn keyword_preview(&self) -> KeywordPreview {
        self.keyword_preview
    }

    /// A non-empty batch was handed to the analyzer.
    pub fn begin_batch(&mut self) {
        self.error = None;
        self.in_flight += 1;
    }

    /// Applies a finished batch according to the commit policy.
    pub fn finish_batch(&mut self, report: &BatchReport) -> BatchSummary {
        self.in_flight = self.in_flight.saturating_sub(1);

        let committed = self.gallery.append(report.committable(self.policy));
        let error = match (report.failed(), self.policy) {
            (0, _) => None,
            (_, BatchPolicy::AllOrNothing) => Some(BatchError::Discarded),
            (failed, BatchPolicy::KeepSuccesses) => Some(BatchError::Partial {
                failed,
                total: report.len(),
            }),
        };
        if error.is_some() {
            self.error = error;
        }

        BatchSummary { committed, error }
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::QueryChanged(query) => {
                self.query = query;
                (Effect::None, Task::none())
            }
            Message::Search => {
                if self.is_loading() {
                    return (Effect::None, Task::none());
                }
                let query = SearchQuery::new(self.query.as_str());
                self.gallery.search(&query);
                (
                    Effect::Searched {
                        query_len: query.as_str().chars().count(),
                        matches: self.gallery.filtered_len(),
                    },
                    Task::none(),
                )
            }
            Message::ShowAll => {
                if !self.is_loading() {
                    self.query.clear();
                    self.gallery.show_all();
                }
                (Effect::None, Task::none())
            }
            Message::Clear => {
                if !self.is_loading() {
                    self.query.clear();
                    self.gallery.reset();
                    self.error = None;
                }
                (Effect::None, Task::none())
            }
            Message::DismissError => {
                self.error = None;
                (Effect::None, Task::none())
            }
            Message::OpenPicker => (Effect::OpenPicker, Task::none()),
        }
    }
}
