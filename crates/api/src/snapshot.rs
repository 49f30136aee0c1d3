// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A self-contained JSON export of the records a client holds for one club.

use crate::error::SnapshotError;
use courtside_domain::{Circle, Club, ClubEvent, RequestTemplate, Schedule, User};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything the rules need to answer questions about one club and user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubSnapshot {
    /// The club.
    pub club: Club,
    /// The current user.
    pub user: User,
    /// Sub-clubs referenced by circles and events.
    #[serde(default)]
    pub sub_clubs: Vec<Club>,
    /// Schedules of every venue.
    #[serde(default)]
    pub schedules: Vec<Schedule>,
    /// Request templates of every venue.
    #[serde(default)]
    pub templates: Vec<RequestTemplate>,
    /// Circles of the club.
    #[serde(default)]
    pub circles: Vec<Circle>,
    /// Events of the club.
    #[serde(default)]
    pub events: Vec<ClubEvent>,
}

impl ClubSnapshot {
    /// Loads a snapshot from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid snapshot.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let raw: String = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw).map_err(|source| SnapshotError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses a snapshot document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a valid snapshot.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Returns the schedules of `venue_id`.
    #[must_use]
    pub fn schedules_for(&self, venue_id: &str) -> Vec<Schedule> {
        self.schedules
            .iter()
            .filter(|schedule| schedule.venue.id() == venue_id)
            .cloned()
            .collect()
    }

    /// Looks up a template by id.
    #[must_use]
    pub fn template(&self, template_id: &str) -> Option<&RequestTemplate> {
        self.templates.iter().find(|t| t.id == template_id)
    }

    /// Looks up a circle by id.
    #[must_use]
    pub fn circle(&self, circle_id: &str) -> Option<&Circle> {
        self.circles.iter().find(|c| c.id == circle_id)
    }

    /// Looks up an event by id.
    #[must_use]
    pub fn event(&self, event_id: &str) -> Option<&ClubEvent> {
        self.events.iter().find(|e| e.id == event_id)
    }
}
