//! Dashboard and lifecycle scenarios.

use chrono::Duration;
use pretty_assertions::assert_eq;

use watch_party::application::dto::ReschedulePartyRequest;
use watch_party::application::services::{PartyError, PartyService};

use crate::common::{fixed_now, valid_request, TestApp};

#[tokio::test]
async fn invited_friend_sees_the_party() {
    let app = TestApp::new();
    let (host, friends) = app.seed_host_with_friends(2);

    let party = app
        .parties
        .create_party(host.id, valid_request(vec![friends[0].id]))
        .await
        .unwrap();

    let invited = app.parties.invited_to(friends[0].id).await.unwrap();
    assert_eq!(invited.len(), 1);
    assert_eq!(invited[0].id, party.id);
    assert_eq!(invited[0].movie_title, "Toy Story");

    // The unselected friend sees nothing.
    assert!(app.parties.invited_to(friends[1].id).await.unwrap().is_empty());
}

#[tokio::test]
async fn hosting_section_orders_newest_start_first() {
    let app = TestApp::new();
    let (host, friends) = app.seed_host_with_friends(1);

    let sooner = valid_request(vec![friends[0].id]);
    let mut later = valid_request(vec![friends[0].id]);
    later.starts_at = Some(fixed_now() + Duration::days(10));

    app.parties.create_party(host.id, sooner).await.unwrap();
    let later_dto = app.parties.create_party(host.id, later).await.unwrap();

    let hosting = app.parties.hosted_by(host.id).await.unwrap();
    assert_eq!(hosting.len(), 2);
    assert_eq!(hosting[0].id, later_dto.id);
}

#[tokio::test]
async fn destroying_a_party_removes_its_invitations() {
    let app = TestApp::new();
    let (host, friends) = app.seed_host_with_friends(2);

    let party = app
        .parties
        .create_party(host.id, valid_request(vec![friends[0].id, friends[1].id]))
        .await
        .unwrap();
    let party_id: i64 = party.id.parse().unwrap();
    assert_eq!(app.db.invitation_count(), 2);

    app.parties.destroy_party(party_id, host.id).await.unwrap();

    assert_eq!(app.db.party_count(), 0);
    assert_eq!(app.db.invitation_count(), 0);
    assert!(app.parties.invited_to(friends[0].id).await.unwrap().is_empty());
}

#[tokio::test]
async fn only_the_host_may_destroy_a_party() {
    let app = TestApp::new();
    let (host, friends) = app.seed_host_with_friends(1);

    let party = app
        .parties
        .create_party(host.id, valid_request(vec![friends[0].id]))
        .await
        .unwrap();
    let party_id: i64 = party.id.parse().unwrap();

    let err = app
        .parties
        .destroy_party(party_id, friends[0].id)
        .await
        .unwrap_err();
    assert!(matches!(err, PartyError::Forbidden));
    assert_eq!(app.db.party_count(), 1);
}

#[tokio::test]
async fn rescheduling_to_a_future_slot_updates_the_party() {
    let app = TestApp::new();
    let (host, friends) = app.seed_host_with_friends(1);

    let party = app
        .parties
        .create_party(host.id, valid_request(vec![friends[0].id]))
        .await
        .unwrap();
    let party_id: i64 = party.id.parse().unwrap();

    let updated = app
        .parties
        .reschedule_party(
            party_id,
            host.id,
            ReschedulePartyRequest {
                starts_at: Some(fixed_now() + Duration::days(9)),
                duration: Some(120),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.starts_at_date.as_deref(), Some("07/19/2021"));
    assert_eq!(updated.duration_display.as_deref(), Some("2 hr"));
}

#[tokio::test]
async fn rescheduling_into_the_past_is_rejected() {
    let app = TestApp::new();
    let (host, friends) = app.seed_host_with_friends(1);

    let party = app
        .parties
        .create_party(host.id, valid_request(vec![friends[0].id]))
        .await
        .unwrap();
    let party_id: i64 = party.id.parse().unwrap();

    let err = app
        .parties
        .reschedule_party(
            party_id,
            host.id,
            ReschedulePartyRequest {
                starts_at: Some(fixed_now() - Duration::days(1)),
                duration: None,
            },
        )
        .await
        .unwrap_err();

    match err {
        PartyError::Validation(report) => {
            assert!(report.mentions("Party must be set for a future date"))
        }
        other => panic!("expected validation failure, got {:?}", other),
    }

    // The stored record keeps its original slot.
    let stored = app.parties.get_party(party_id).await.unwrap();
    assert_eq!(stored.starts_at_date.as_deref(), Some("07/14/2021"));
}
