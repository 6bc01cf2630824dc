//! New viewing party scenarios.
//!
//! End-to-end creation flow against the in-memory collaborators, with the
//! clock pinned to 2021-07-10 01:00 UTC and Toy Story (81 min) seeded in
//! the catalog.

use chrono::Duration;
use pretty_assertions::assert_eq;

use watch_party::application::services::{PartyError, PartyService};
use watch_party::shared::error::ValidationReport;

use crate::common::{fixed_now, valid_request, TestApp};

fn validation_report(err: PartyError) -> ValidationReport {
    match err {
        PartyError::Validation(report) => report,
        other => panic!("expected validation failure, got {:?}", other),
    }
}

#[tokio::test]
async fn creates_a_new_viewing_party() {
    let app = TestApp::new();
    let (host, friends) = app.seed_host_with_friends(3);

    // Third friend left unchecked on the form.
    let request = valid_request(vec![friends[0].id, friends[1].id]);
    let party = app.parties.create_party(host.id, request).await.unwrap();

    assert_eq!(party.movie_title, "Toy Story");
    assert_eq!(party.duration_display.as_deref(), Some("1 hr 21 min"));
    assert_eq!(party.starts_at_date.as_deref(), Some("07/14/2021"));
    assert_eq!(party.starts_at_time.as_deref(), Some("13:00"));

    let usernames: Vec<&str> = party.invitees.iter().map(|i| i.username.as_str()).collect();
    assert_eq!(usernames, vec!["test_user2", "test_user3"]);
    assert!(!usernames.contains(&"test_user4"));

    // The party shows up on the host's dashboard.
    let hosting = app.parties.hosted_by(host.id).await.unwrap();
    assert_eq!(hosting.len(), 1);
    assert_eq!(hosting[0].id, party.id);
}

#[tokio::test]
async fn does_not_create_party_when_host_has_no_friends() {
    let app = TestApp::new();
    let (host, _) = app.seed_host_with_friends(0);

    let err = app
        .parties
        .create_party(host.id, valid_request(vec![]))
        .await
        .unwrap_err();

    let report = validation_report(err);
    assert_eq!(
        report.messages_for("base"),
        vec!["Error: Party must need friends."]
    );
    assert_eq!(app.db.party_count(), 0);
    assert_eq!(app.db.invitation_count(), 0);
}

#[tokio::test]
async fn does_not_create_party_when_no_friends_are_added() {
    let app = TestApp::new();
    let (host, _friends) = app.seed_host_with_friends(2);

    let err = app
        .parties
        .create_party(host.id, valid_request(vec![]))
        .await
        .unwrap_err();

    assert!(validation_report(err).mentions("Error: Party must need friends."));
    assert_eq!(app.db.party_count(), 0);
}

#[tokio::test]
async fn does_not_create_party_scheduled_in_the_past() {
    let app = TestApp::new();
    let (host, friends) = app.seed_host_with_friends(1);

    let mut request = valid_request(vec![friends[0].id]);
    request.starts_at = Some(fixed_now() - Duration::days(5));

    let err = app.parties.create_party(host.id, request).await.unwrap_err();

    assert!(validation_report(err).mentions("Party must be set for a future date"));
    assert_eq!(app.db.party_count(), 0);
}

#[tokio::test]
async fn does_not_create_party_starting_exactly_now() {
    // Pin the clock to the requested start itself: the boundary is invalid.
    let request = valid_request(vec![]);
    let app = TestApp::at(request.starts_at.unwrap());
    let (host, friends) = app.seed_host_with_friends(1);

    let mut request = request;
    request.friend_ids = vec![friends[0].id];

    let err = app.parties.create_party(host.id, request).await.unwrap_err();
    assert!(validation_report(err).mentions("Party must be set for a future date"));
}

#[tokio::test]
async fn duration_is_checked_against_the_selected_movie() {
    let app = TestApp::new();
    app.catalog.seed(watch_party::domain::entities::Movie {
        external_id: "603".to_string(),
        title: "The Matrix".to_string(),
        runtime_minutes: 136,
    });
    let (host, friends) = app.seed_host_with_friends(1);

    // 81 minutes covers Toy Story but not The Matrix.
    let mut request = valid_request(vec![friends[0].id]);
    request.movie_title = "The Matrix".to_string();
    request.external_movie_id = "603".to_string();

    let err = app.parties.create_party(host.id, request).await.unwrap_err();
    assert!(validation_report(err)
        .mentions("Error: Party duration must match or exceed movie runtime."));
}

#[tokio::test]
async fn does_not_create_party_shorter_than_the_movie() {
    let app = TestApp::new();
    let (host, friends) = app.seed_host_with_friends(3);

    let mut request = valid_request(vec![friends[0].id]);
    request.duration = Some(60); // movie runs 81

    let err = app.parties.create_party(host.id, request).await.unwrap_err();

    let report = validation_report(err);
    assert_eq!(
        report.messages_for("duration"),
        vec!["Error: Party duration must match or exceed movie runtime."]
    );
    assert_eq!(app.db.party_count(), 0);
}

#[tokio::test]
async fn reports_every_blank_field_at_once() {
    let app = TestApp::new();
    let (host, friends) = app.seed_host_with_friends(1);

    let mut request = valid_request(vec![friends[0].id]);
    request.movie_title = String::new();
    request.external_movie_id = "  ".to_string();
    request.duration = None;
    request.starts_at = None;

    let err = app.parties.create_party(host.id, request).await.unwrap_err();

    let report = validation_report(err);
    for field in ["movie_title", "external_movie_id", "duration", "starts_at"] {
        assert_eq!(report.messages_for(field), vec!["can't be blank"], "{field}");
    }
    // An absent start is reported once, not also as a past date.
    assert!(!report.mentions("future date"));
    assert_eq!(app.db.party_count(), 0);
}

#[tokio::test]
async fn accepts_duration_equal_to_the_movie_runtime() {
    let app = TestApp::new();
    let (host, friends) = app.seed_host_with_friends(1);

    // 81 minutes for an 81 minute movie.
    let party = app
        .parties
        .create_party(host.id, valid_request(vec![friends[0].id]))
        .await
        .unwrap();

    assert_eq!(party.duration, Some(81));
    assert_eq!(app.db.party_count(), 1);
}
