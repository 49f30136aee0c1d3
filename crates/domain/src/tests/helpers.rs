// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fixture builders shared by the domain tests.

use crate::{
    ClockRange, Club, ClubSetting, DateTimeSetting, DayTimeRanges, MemberType, MemberTypePermission,
    RequestTemplate, Schedule, ScheduleStatus, SlotTime, Subscription, SubscriptionStatus,
    TemplateStatus, User, Venue, VenueRef, VenueRuleSettings, VenueSetting, VenueStatus, VenueType,
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn time(hour: u32, minute: u32) -> SlotTime {
    SlotTime::from_hm(hour, minute).unwrap()
}

pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

/// An activated venue with courts 1 and 2 and an hourly grid.
pub fn venue(id: &str, venue_type: VenueType) -> Venue {
    let slots: Vec<SlotTime> = vec![time(8, 0), time(9, 0), time(10, 0), time(13, 0), time(14, 0)];
    Venue {
        id: id.to_string(),
        name: format!("Venue {id}"),
        venue_type,
        status: VenueStatus::Activated,
        rs_et_date: None,
        setting: VenueSetting {
            court_count: 2,
            activated_courts: vec![1, 2],
            time_slot_interval: 60,
            time_slots: slots.clone(),
            curt_court_count: 2,
            curt_activated_courts: vec![1, 2],
            curt_time_slot_interval: 60,
            curt_time_slots: slots,
            rules: VenueRuleSettings::default(),
        },
    }
}

pub fn club(timezone: &str, venues: Vec<Venue>) -> Club {
    Club {
        id: String::from("club-1"),
        name: String::from("Riverside Tennis"),
        timezone: Some(timezone.to_string()),
        venues: venues.into_iter().map(VenueRef::from).collect(),
        setting: ClubSetting::default(),
    }
}

/// A club requiring a paid subscription.
pub fn paid_club(timezone: &str) -> Club {
    let mut club: Club = club(timezone, Vec::new());
    club.setting.is_req_subscription = true;
    club.setting.subscription_price = Some(30.0);
    club
}

/// Both flags set, no advance limit, every weekday all day.
pub fn open_permission(venue_id: &str) -> MemberTypePermission {
    MemberTypePermission {
        venue: venue_id.to_string(),
        is_allow_sched: true,
        is_allow_reserve_ots: true,
        reserve_ots_advanced_day: -1,
        allow_sched_time_ranges: (0..7)
            .map(|day| DayTimeRanges {
                day,
                time_ranges: vec![ClockRange {
                    st_time: time(0, 0),
                    et_time: time(23, 59),
                }],
            })
            .collect(),
    }
}

pub fn user(id: &str) -> User {
    User {
        id: id.to_string(),
        email: format!("{id}@example.com"),
        gender: None,
        level: None,
        age: None,
        area: None,
        preferred_venue: None,
        member_type: None,
        subscriptions: Vec::new(),
        guests: Vec::new(),
        circles: Vec::new(),
    }
}

pub fn user_with_permissions(id: &str, permissions: Vec<MemberTypePermission>) -> User {
    let mut user: User = user(id);
    user.member_type = Some(MemberType {
        id: String::from("regular"),
        name: String::from("Regular"),
        permissions,
    });
    user
}

pub fn subscription(club_id: &str, next_payment: DateTime<Utc>) -> Subscription {
    Subscription {
        club: club_id.to_string(),
        id: Some(String::from("sub-1")),
        status: SubscriptionStatus::Active,
        next_payment_date: Some(next_payment),
    }
}

pub fn schedule(id: &str, venue: &Venue, date: NaiveDate, time: SlotTime) -> Schedule {
    Schedule {
        id: id.to_string(),
        date,
        time,
        court: 1,
        venue: VenueRef::Id(venue.id.clone()),
        owner: None,
        status: ScheduleStatus::Open,
        members: Vec::new(),
        is_arrived: false,
        is_sharing: false,
    }
}

/// A published template enabling each of `dates` with the default slots.
pub fn template(
    venue_id: &str,
    st: NaiveDate,
    et: NaiveDate,
    dates: &[NaiveDate],
) -> RequestTemplate {
    RequestTemplate {
        id: String::from("tpl-1"),
        venue: venue_id.to_string(),
        st_date: st,
        et_date: et,
        time_slots: vec![time(9, 0), time(10, 0), time(14, 0)],
        date_time_settings: dates
            .iter()
            .map(|date| DateTimeSetting {
                date: *date,
                is_enabled: true,
                time_slots: None,
            })
            .collect(),
        status: TemplateStatus::Published,
    }
}
