//! Invitation dispatch scenarios.

use pretty_assertions::assert_eq;

use watch_party::application::services::{InvitationError, InvitationService, PartyService};

use crate::common::{valid_request, TestApp};

#[tokio::test]
async fn sends_one_invite_per_invitee_and_none_to_others() {
    let app = TestApp::new();
    let (host, friends) = app.seed_host_with_friends(3);
    let (invited_a, invited_b, uninvited) = (&friends[0], &friends[1], &friends[2]);

    let party = app
        .parties
        .create_party(host.id, valid_request(vec![invited_a.id, invited_b.id]))
        .await
        .unwrap();
    let party_id: i64 = party.id.parse().unwrap();

    let summary = app.invitations.send_invitations(party_id).await.unwrap();

    assert_eq!(summary.attempted, 2);
    assert_eq!(summary.delivered, 2);
    assert!(summary.is_complete());

    let recipients = app.mailer.recipient_ids();
    assert_eq!(recipients, vec![invited_a.id, invited_b.id]);
    assert!(!recipients.contains(&uninvited.id));

    for sent in app.mailer.sent() {
        assert_eq!(sent.host_id, host.id);
        assert_eq!(sent.party_id, party_id);
    }
}

#[tokio::test]
async fn keeps_sending_after_one_delivery_fails() {
    let app = TestApp::new();
    let (host, friends) = app.seed_host_with_friends(2);

    let party = app
        .parties
        .create_party(host.id, valid_request(vec![friends[0].id, friends[1].id]))
        .await
        .unwrap();
    let party_id: i64 = party.id.parse().unwrap();

    app.mailer.fail_for(friends[0].id);

    let summary = app.invitations.send_invitations(party_id).await.unwrap();

    assert_eq!(summary.attempted, 2);
    assert_eq!(summary.delivered, 1);
    assert!(!summary.is_complete());
    assert!(!summary.deliveries[0].delivered);
    assert!(summary.deliveries[1].delivered);

    // The second invitee still got their email.
    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].friend_id, friends[1].id);
    assert_eq!(sent[0].friend_email, friends[1].email);
}

#[tokio::test]
async fn dispatch_for_unknown_party_fails() {
    let app = TestApp::new();

    let err = app.invitations.send_invitations(404).await.unwrap_err();
    assert!(matches!(err, InvitationError::PartyNotFound));
    assert!(app.mailer.sent().is_empty());
}
