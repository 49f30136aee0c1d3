// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ClubSnapshot;
use chrono::{DateTime, TimeZone, Utc};

/// A club in UTC with one real and one virtual venue, a user allowed to
/// schedule every slot at `venue-a`, two schedules, one template, one circle
/// and one event.
pub const SNAPSHOT_JSON: &str = r#"{
    "club": {
        "id": "club-1",
        "name": "Riverside Tennis",
        "timezone": "UTC",
        "venues": [
            {
                "id": "venue-a",
                "name": "Centre Courts",
                "type": "real",
                "status": "activated",
                "rsEtDate": "2024-03-10",
                "setting": {
                    "timeSlotInterval": 60,
                    "curtActivatedCourts": [1, 2],
                    "curtTimeSlots": ["10:00", "14:00"],
                    "rules": { "isRequireCheckIn": true }
                }
            },
            {
                "id": "venue-v",
                "name": "Online Coaching",
                "type": "virtual",
                "status": "activated"
            }
        ],
        "setting": { "isReqSubscription": true, "subscriptionPrice": 25 }
    },
    "user": {
        "id": "user-1",
        "email": "player@example.com",
        "gender": "female",
        "level": 3.5,
        "circles": ["circle-1"],
        "subscriptions": [
            {
                "club": "club-1",
                "id": "sub-1",
                "status": "ACTIVE",
                "nextPaymentDate": "2024-04-01T00:00:00Z"
            }
        ],
        "memberType": {
            "id": "regular",
            "name": "Regular",
            "permissions": [
                {
                    "venue": "venue-a",
                    "isAllowSched": true,
                    "isAllowReserveOTS": true,
                    "reserveOTSAdvancedDay": -1,
                    "allowSchedTimeRanges": [
                        { "day": 0, "timeRanges": [{ "stTime": "00:00", "etTime": "23:59" }] },
                        { "day": 1, "timeRanges": [{ "stTime": "00:00", "etTime": "23:59" }] },
                        { "day": 2, "timeRanges": [{ "stTime": "00:00", "etTime": "23:59" }] },
                        { "day": 3, "timeRanges": [{ "stTime": "00:00", "etTime": "23:59" }] },
                        { "day": 4, "timeRanges": [{ "stTime": "00:00", "etTime": "23:59" }] },
                        { "day": 5, "timeRanges": [{ "stTime": "00:00", "etTime": "23:59" }] },
                        { "day": 6, "timeRanges": [{ "stTime": "00:00", "etTime": "23:59" }] }
                    ]
                }
            ]
        }
    },
    "schedules": [
        {
            "id": "sched-open",
            "date": "2024-03-09",
            "time": "10:00",
            "court": 1,
            "venue": "venue-a",
            "status": "OPEN"
        },
        {
            "id": "sched-mine",
            "date": "2024-03-08",
            "time": "10:00",
            "court": 2,
            "venue": "venue-a",
            "status": "CONFIRM",
            "owner": "user-1"
        }
    ],
    "templates": [
        {
            "id": "tpl-1",
            "venue": "venue-a",
            "stDate": "2024-03-01",
            "etDate": "2024-03-31",
            "timeSlots": ["09:00", "15:00"],
            "dateTimeSettings": [
                { "date": "2024-03-05", "isEnabled": true },
                { "date": "2024-03-12", "isEnabled": true }
            ],
            "status": "published"
        }
    ],
    "circles": [
        {
            "id": "circle-1",
            "name": "Thursday Doubles",
            "eligibleGender": "female",
            "eligibleLevel": { "from": 3.0, "to": 4.0 }
        }
    ],
    "events": [
        {
            "id": "event-1",
            "title": "Spring Ladder",
            "regRestrictType": "ONLY_CIRCLE_MEMBERS",
            "invitedCircles": [{ "id": "circle-1", "name": "Thursday Doubles" }]
        }
    ]
}"#;

pub fn create_test_snapshot() -> ClubSnapshot {
    ClubSnapshot::from_json(SNAPSHOT_JSON).unwrap()
}

/// 2024-03-08 09:50 UTC, a Friday.
pub fn create_test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 8, 9, 50, 0).unwrap()
}
