// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDate;
use courtside_domain::{SlotTime, TimeRange};
use serde::{Deserialize, Serialize};

/// The selections a user has made while composing a request.
///
/// Every field starts empty; the form fills them one by one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDraft {
    /// Selected venue.
    #[serde(default)]
    pub venue: Option<String>,
    /// Selected template.
    #[serde(default)]
    pub template: Option<String>,
    /// Selected date.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Concrete time, exclusive with `time_range`.
    #[serde(default)]
    pub time: Option<SlotTime>,
    /// Part of day, exclusive with `time`.
    #[serde(default)]
    pub time_range: Option<TimeRange>,
}

/// A command represents user intent as data only.
///
/// Commands never touch the remote platform themselves; applying one yields
/// the `Mutation` to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Submit a new request.
    CreateRequest {
        /// The composed request.
        draft: RequestDraft,
    },
    /// Replace an existing request.
    UpdateRequest {
        /// The request being replaced.
        request_id: String,
        /// The new selections.
        draft: RequestDraft,
    },
    /// Withdraw a request.
    DeleteRequest {
        /// The request being withdrawn.
        request_id: String,
    },
    /// Mark the players of a confirmed schedule as arrived.
    CheckIn {
        /// The schedule being checked in.
        schedule_id: String,
    },
}
