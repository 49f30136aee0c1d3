// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_test_club, create_test_draft, create_test_now, create_test_schedule,
    create_test_template, create_test_time, create_test_user,
};
use crate::{Command, Context, CoreError, Mutation, RequestDraft, apply};
use chrono::{Duration, Utc};
use courtside_domain::{
    CheckInStatus, Club, DomainError, RequestTemplate, Schedule, TimeRange, User,
};

#[test]
fn test_create_request_yields_payload() {
    let club: Club = create_test_club();
    let user: User = create_test_user();
    let templates: Vec<RequestTemplate> = vec![create_test_template()];
    let context: Context<'_> = Context::new(&club, &user).with_templates(&templates);

    let result: Result<Mutation, CoreError> = apply(
        &context,
        Command::CreateRequest {
            draft: create_test_draft(),
        },
        create_test_now(),
    );

    let Mutation::CreateRequest { payload } = result.unwrap() else {
        panic!("expected CreateRequest");
    };
    assert_eq!(payload.user, "user-1");
    assert_eq!(payload.venue, "venue-a");
    assert_eq!(payload.template, "tpl-1");
    assert_eq!(payload.time, Some(create_test_time(9)));
    assert!(!payload.is_any_time);
    assert!(payload.time_range.is_none());
}

#[test]
fn test_range_request_sets_any_time() {
    let club: Club = create_test_club();
    let user: User = create_test_user();
    let templates: Vec<RequestTemplate> = vec![create_test_template()];
    let context: Context<'_> = Context::new(&club, &user).with_templates(&templates);
    let draft: RequestDraft = RequestDraft {
        time: None,
        time_range: Some(TimeRange::Afternoon),
        ..create_test_draft()
    };

    let mutation: Mutation = apply(
        &context,
        Command::CreateRequest { draft },
        create_test_now(),
    )
    .unwrap();

    let Mutation::CreateRequest { payload } = mutation else {
        panic!("expected CreateRequest");
    };
    assert!(payload.is_any_time);
    assert_eq!(payload.time_range, Some(TimeRange::Afternoon));
}

#[test]
fn test_incomplete_draft_names_missing_field() {
    let club: Club = create_test_club();
    let user: User = create_test_user();
    let context: Context<'_> = Context::new(&club, &user);

    for (draft, field) in [
        (
            RequestDraft {
                venue: None,
                ..create_test_draft()
            },
            "venue",
        ),
        (
            RequestDraft {
                template: None,
                ..create_test_draft()
            },
            "template",
        ),
        (
            RequestDraft {
                date: None,
                ..create_test_draft()
            },
            "date",
        ),
    ] {
        let result = apply(&context, Command::CreateRequest { draft }, create_test_now());
        assert_eq!(result, Err(CoreError::IncompleteDraft { field }));
    }
}

#[test]
fn test_time_exclusivity_checked_before_lookup() {
    let club: Club = create_test_club();
    let user: User = create_test_user();
    // No templates: an exclusivity failure must still surface first.
    let context: Context<'_> = Context::new(&club, &user);

    let both: RequestDraft = RequestDraft {
        time_range: Some(TimeRange::Morning),
        ..create_test_draft()
    };
    assert_eq!(
        apply(&context, Command::CreateRequest { draft: both }, create_test_now()),
        Err(CoreError::DomainViolation(DomainError::AmbiguousRequestTime))
    );

    let neither: RequestDraft = RequestDraft {
        time: None,
        ..create_test_draft()
    };
    assert_eq!(
        apply(&context, Command::CreateRequest { draft: neither }, create_test_now()),
        Err(CoreError::DomainViolation(DomainError::MissingRequestTime))
    );
}

#[test]
fn test_unknown_template_is_rejected() {
    let club: Club = create_test_club();
    let user: User = create_test_user();
    let context: Context<'_> = Context::new(&club, &user);

    let result = apply(
        &context,
        Command::CreateRequest {
            draft: create_test_draft(),
        },
        create_test_now(),
    );
    assert_eq!(result, Err(CoreError::TemplateNotFound(String::from("tpl-1"))));
}

#[test]
fn test_template_must_belong_to_venue() {
    let club: Club = create_test_club();
    let user: User = create_test_user();
    let templates: Vec<RequestTemplate> = vec![create_test_template()];
    let context: Context<'_> = Context::new(&club, &user).with_templates(&templates);
    let draft: RequestDraft = RequestDraft {
        venue: Some(String::from("venue-b")),
        ..create_test_draft()
    };

    let result = apply(&context, Command::CreateRequest { draft }, create_test_now());
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::TemplateVenueMismatch { .. }
        ))
    ));
}

#[test]
fn test_unoffered_slot_is_not_allowed() {
    let club: Club = create_test_club();
    let user: User = create_test_user();
    let templates: Vec<RequestTemplate> = vec![create_test_template()];
    let context: Context<'_> = Context::new(&club, &user).with_templates(&templates);
    let draft: RequestDraft = RequestDraft {
        time: Some(create_test_time(12)),
        ..create_test_draft()
    };

    let result = apply(&context, Command::CreateRequest { draft }, create_test_now());
    assert!(matches!(result, Err(CoreError::RequestNotAllowed { .. })));
}

#[test]
fn test_update_and_delete_require_request_id() {
    let club: Club = create_test_club();
    let user: User = create_test_user();
    let templates: Vec<RequestTemplate> = vec![create_test_template()];
    let context: Context<'_> = Context::new(&club, &user).with_templates(&templates);

    let update = apply(
        &context,
        Command::UpdateRequest {
            request_id: String::from("  "),
            draft: create_test_draft(),
        },
        create_test_now(),
    );
    assert_eq!(update, Err(CoreError::MissingRequestId));

    let delete = apply(
        &context,
        Command::DeleteRequest {
            request_id: String::new(),
        },
        create_test_now(),
    );
    assert_eq!(delete, Err(CoreError::MissingRequestId));

    let delete = apply(
        &context,
        Command::DeleteRequest {
            request_id: String::from("req-9"),
        },
        create_test_now(),
    )
    .unwrap();
    assert_eq!(
        delete,
        Mutation::DeleteRequest {
            request_id: String::from("req-9")
        }
    );

    let update = apply(
        &context,
        Command::UpdateRequest {
            request_id: String::from("req-9"),
            draft: create_test_draft(),
        },
        create_test_now(),
    )
    .unwrap();
    assert_eq!(update.name(), "UpdateRequest");
}

#[test]
fn test_member_can_check_in() {
    let club: Club = create_test_club();
    let user: User = create_test_user();
    let schedules: Vec<Schedule> = vec![create_test_schedule()];
    let context: Context<'_> = Context::new(&club, &user).with_schedules(&schedules);

    let mutation: Mutation = apply(
        &context,
        Command::CheckIn {
            schedule_id: String::from("sched-1"),
        },
        create_test_now(),
    )
    .unwrap();

    assert_eq!(
        mutation,
        Mutation::CheckIn {
            schedule_id: String::from("sched-1"),
            user: String::from("user-1"),
        }
    );
}

#[test]
fn test_check_in_after_grace_reports_no_show() {
    let club: Club = create_test_club();
    let user: User = create_test_user();
    let schedules: Vec<Schedule> = vec![create_test_schedule()];
    let context: Context<'_> = Context::new(&club, &user).with_schedules(&schedules);
    let late = create_test_now() + Duration::minutes(30);

    let result = apply(
        &context,
        Command::CheckIn {
            schedule_id: String::from("sched-1"),
        },
        late,
    );
    assert_eq!(
        result,
        Err(CoreError::CheckInNotAllowed {
            schedule_id: String::from("sched-1"),
            status: CheckInStatus::NoShow,
        })
    );
}

#[test]
fn test_check_in_unknown_schedule() {
    let club: Club = create_test_club();
    let user: User = create_test_user();
    let context: Context<'_> = Context::new(&club, &user);

    let result = apply(
        &context,
        Command::CheckIn {
            schedule_id: String::from("missing"),
        },
        Utc::now(),
    );
    assert_eq!(result, Err(CoreError::ScheduleNotFound(String::from("missing"))));
}

#[test]
fn test_mutation_wire_shape() {
    let mutation: Mutation = Mutation::DeleteRequest {
        request_id: String::from("req-9"),
    };
    let json = serde_json::to_value(&mutation).unwrap();
    assert_eq!(json["action"], "deleteRequest");
    assert_eq!(json["requestId"], "req-9");
}
