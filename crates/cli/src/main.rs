// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # courtside - offline rule evaluation
//!
//! Loads a club snapshot (a JSON export of the club, the current user and
//! the records the client holds) and prints what the rules decide, as
//! pretty JSON on stdout.
//!
//! ```text
//! courtside venues --snapshot club.json
//! courtside open-schedules --snapshot club.json --venue venue-a --filter any_morning
//! courtside event --snapshot club.json --event event-1 --now 2024-03-08T09:50:00Z
//! ```

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args as ClapArgs, Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    Result,
    eyre::{Context, eyre},
};
use courtside_api::{
    ActiveVenuesRequest, CircleCheckRequest, ClubSnapshot, EventCheckRequest, OpenSchedulesRequest,
    RequestableRequest, SchedulableDatesRequest, SubscriptionCheckRequest,
};
use courtside_domain::{Clock, SystemClock};
use serde::Serialize;
use serde_json::Value;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_log::AsTrace;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err:#}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "courtside", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

/// Options shared by every subcommand.
#[derive(Clone, Debug, ClapArgs)]
struct SnapshotArgs {
    /// Path to the club snapshot JSON file
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Evaluate at this instant (RFC 3339) instead of the system clock
    #[arg(long)]
    now: Option<DateTime<Utc>>,
}

impl SnapshotArgs {
    fn load(&self) -> Result<ClubSnapshot> {
        let snapshot: ClubSnapshot = ClubSnapshot::load(&self.snapshot)
            .wrap_err("Could not load the club snapshot")?;
        info!(
            club_id = %snapshot.club.id,
            user_id = %snapshot.user.id,
            schedules = snapshot.schedules.len(),
            "Loaded snapshot"
        );
        Ok(snapshot)
    }

    fn now(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(|| SystemClock.now())
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// List the active real and virtual venues
    #[command(visible_alias = "v")]
    Venues {
        #[command(flatten)]
        snapshot: SnapshotArgs,
    },

    /// List the dates of a venue's schedule cycle
    #[command(visible_alias = "d")]
    Dates {
        #[command(flatten)]
        snapshot: SnapshotArgs,

        /// Venue id
        #[arg(long)]
        venue: String,
    },

    /// List the schedules the user may book at a venue
    #[command(visible_alias = "os")]
    OpenSchedules {
        #[command(flatten)]
        snapshot: SnapshotArgs,

        /// Venue id
        #[arg(long)]
        venue: String,

        /// Time filter: `any`, `any_morning`, `any_afternoon` or `HH:mm`
        #[arg(long)]
        filter: Option<String>,
    },

    /// List a template's requestable dates, and the times of one date
    #[command(visible_alias = "r")]
    Requestable {
        #[command(flatten)]
        snapshot: SnapshotArgs,

        /// Template id
        #[arg(long)]
        template: String,

        /// Date whose times to list (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Check whether the user may register for an event
    #[command(visible_alias = "e")]
    Event {
        #[command(flatten)]
        snapshot: SnapshotArgs,

        /// Event id
        #[arg(long)]
        event: String,
    },

    /// Check whether the user may join a circle
    #[command(visible_alias = "c")]
    Circle {
        #[command(flatten)]
        snapshot: SnapshotArgs,

        /// Circle id
        #[arg(long)]
        circle: String,
    },

    /// Check the user's subscription to the club
    #[command(visible_alias = "s")]
    Subscription {
        #[command(flatten)]
        snapshot: SnapshotArgs,
    },
}

impl Command {
    fn run(self) -> Result<()> {
        let result: Value = self.evaluate()?;
        let rendered: String =
            serde_json::to_string_pretty(&result).wrap_err("Could not render the result")?;
        println!("{rendered}");
        Ok(())
    }

    fn evaluate(self) -> Result<Value> {
        match self {
            Self::Venues { snapshot } => list_venues(&snapshot),
            Self::Dates { snapshot, venue } => list_dates(&snapshot, venue),
            Self::OpenSchedules {
                snapshot,
                venue,
                filter,
            } => list_open_schedules(&snapshot, venue, filter),
            Self::Requestable {
                snapshot,
                template,
                date,
            } => list_requestable(&snapshot, &template, date),
            Self::Event { snapshot, event } => check_event(&snapshot, &event),
            Self::Circle { snapshot, circle } => check_circle(&snapshot, &circle),
            Self::Subscription { snapshot } => check_subscription(&snapshot),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).wrap_err("Could not serialize the result")
}

fn list_venues(args: &SnapshotArgs) -> Result<Value> {
    let snapshot: ClubSnapshot = args.load()?;
    let request: ActiveVenuesRequest = ActiveVenuesRequest {
        club: snapshot.club,
        user: snapshot.user,
    };
    to_json(&courtside_api::active_venues(&request))
}

fn list_dates(args: &SnapshotArgs, venue_id: String) -> Result<Value> {
    let snapshot: ClubSnapshot = args.load()?;
    let request: SchedulableDatesRequest = SchedulableDatesRequest {
        club: snapshot.club,
        venue_id,
    };
    to_json(&courtside_api::schedulable_dates_for_venue(&request, args.now())?)
}

fn list_open_schedules(
    args: &SnapshotArgs,
    venue_id: String,
    filter: Option<String>,
) -> Result<Value> {
    let snapshot: ClubSnapshot = args.load()?;
    let schedules = snapshot.schedules_for(&venue_id);
    debug!(venue_id = %venue_id, count = schedules.len(), "Selected venue schedules");
    let request: OpenSchedulesRequest = OpenSchedulesRequest {
        club: snapshot.club,
        user: snapshot.user,
        venue_id,
        schedules,
        time_filter: filter,
    };
    to_json(&courtside_api::open_schedules(&request, args.now())?)
}

fn list_requestable(
    args: &SnapshotArgs,
    template_id: &str,
    date: Option<NaiveDate>,
) -> Result<Value> {
    let snapshot: ClubSnapshot = args.load()?;
    let template = snapshot
        .template(template_id)
        .cloned()
        .ok_or_else(|| eyre!("Template '{template_id}' is not in the snapshot"))?;
    let request: RequestableRequest = RequestableRequest {
        club: snapshot.club,
        user: snapshot.user,
        template,
        date,
    };
    to_json(&courtside_api::requestable(&request, args.now()))
}

fn check_event(args: &SnapshotArgs, event_id: &str) -> Result<Value> {
    let snapshot: ClubSnapshot = args.load()?;
    let event = snapshot
        .event(event_id)
        .cloned()
        .ok_or_else(|| eyre!("Event '{event_id}' is not in the snapshot"))?;
    let request: EventCheckRequest = EventCheckRequest {
        club: snapshot.club,
        user: snapshot.user,
        event,
        sub_clubs: snapshot.sub_clubs,
    };
    to_json(&courtside_api::event_eligibility(&request, args.now()))
}

fn check_circle(args: &SnapshotArgs, circle_id: &str) -> Result<Value> {
    let snapshot: ClubSnapshot = args.load()?;
    let circle = snapshot
        .circle(circle_id)
        .cloned()
        .ok_or_else(|| eyre!("Circle '{circle_id}' is not in the snapshot"))?;
    let request: CircleCheckRequest = CircleCheckRequest {
        club: snapshot.club,
        user: snapshot.user,
        circle,
        sub_clubs: snapshot.sub_clubs,
    };
    to_json(&courtside_api::circle_eligibility(&request, args.now()))
}

fn check_subscription(args: &SnapshotArgs) -> Result<Value> {
    let snapshot: ClubSnapshot = args.load()?;
    let request: SubscriptionCheckRequest = SubscriptionCheckRequest {
        club: snapshot.club,
        user: snapshot.user,
    };
    to_json(&courtside_api::subscription_eligibility(&request, args.now()))
}
