// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::RequestDraft;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use courtside_domain::{
    ClockRange, Club, ClubSetting, DateTimeSetting, DayTimeRanges, MemberType, MemberTypePermission,
    RequestTemplate, Schedule, ScheduleMember, ScheduleStatus, SlotTime, TemplateStatus, User,
    Venue, VenueRef, VenueRuleSettings, VenueSetting, VenueStatus, VenueType,
};

pub fn create_test_date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
}

pub fn create_test_time(hour: u32) -> SlotTime {
    SlotTime::from_hm(hour, 0).unwrap()
}

/// 2024-03-08 09:50 UTC.
pub fn create_test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 8, 9, 50, 0).unwrap()
}

pub fn create_test_venue() -> Venue {
    Venue {
        id: String::from("venue-a"),
        name: String::from("Centre Courts"),
        venue_type: VenueType::Real,
        status: VenueStatus::Activated,
        rs_et_date: Some(create_test_date(31)),
        setting: VenueSetting {
            curt_activated_courts: vec![1, 2],
            curt_time_slots: vec![create_test_time(10), create_test_time(14)],
            time_slot_interval: 60,
            rules: VenueRuleSettings {
                is_require_check_in: true,
                ..VenueRuleSettings::default()
            },
            ..VenueSetting::default()
        },
    }
}

pub fn create_test_club() -> Club {
    Club {
        id: String::from("club-1"),
        name: String::from("Riverside Tennis"),
        timezone: Some(String::from("UTC")),
        venues: vec![VenueRef::from(create_test_venue())],
        setting: ClubSetting::default(),
    }
}

pub fn create_test_user() -> User {
    let window: ClockRange = ClockRange {
        st_time: SlotTime::from_hm(0, 0).unwrap(),
        et_time: SlotTime::from_hm(23, 59).unwrap(),
    };
    User {
        id: String::from("user-1"),
        email: String::from("player@example.com"),
        gender: None,
        level: None,
        age: None,
        area: None,
        preferred_venue: None,
        member_type: Some(MemberType {
            id: String::from("regular"),
            name: String::from("Regular"),
            permissions: vec![MemberTypePermission {
                venue: String::from("venue-a"),
                is_allow_sched: true,
                is_allow_reserve_ots: true,
                reserve_ots_advanced_day: -1,
                allow_sched_time_ranges: (0..7)
                    .map(|day| DayTimeRanges {
                        day,
                        time_ranges: vec![window],
                    })
                    .collect(),
            }],
        }),
        subscriptions: Vec::new(),
        guests: Vec::new(),
        circles: Vec::new(),
    }
}

pub fn create_test_template() -> RequestTemplate {
    RequestTemplate {
        id: String::from("tpl-1"),
        venue: String::from("venue-a"),
        st_date: create_test_date(1),
        et_date: create_test_date(31),
        time_slots: vec![create_test_time(9), create_test_time(15)],
        date_time_settings: vec![DateTimeSetting {
            date: create_test_date(12),
            is_enabled: true,
            time_slots: None,
        }],
        status: TemplateStatus::Published,
    }
}

/// A confirmed schedule today at 10:00 owned by `user-2`, with `user-1`
/// listed as a player.
pub fn create_test_schedule() -> Schedule {
    Schedule {
        id: String::from("sched-1"),
        date: create_test_date(8),
        time: create_test_time(10),
        court: 1,
        venue: VenueRef::Id(String::from("venue-a")),
        owner: Some(String::from("user-2")),
        status: ScheduleStatus::Confirm,
        members: vec![ScheduleMember {
            email: String::from("player@example.com"),
            name: Some(String::from("Player One")),
            is_share_user: false,
            is_arrived: false,
        }],
        is_arrived: false,
        is_sharing: false,
    }
}

pub fn create_test_draft() -> RequestDraft {
    RequestDraft {
        venue: Some(String::from("venue-a")),
        template: Some(String::from("tpl-1")),
        date: Some(create_test_date(12)),
        time: Some(create_test_time(9)),
        time_range: None,
    }
}
