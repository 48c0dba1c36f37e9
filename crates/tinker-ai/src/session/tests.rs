//! Round-trip behavior against a scripted gateway.

use std::sync::Arc;

use tokio::sync::Notify;

use super::*;
use crate::testing::ScriptedGateway;
use crate::{AiError, Completion, Credential, Role, TokenUsage, Turn};

fn reply(text: &str) -> Result<Completion, AiError> {
    Ok(Completion {
        text: text.into(),
        usage: TokenUsage {
            input_tokens: 10,
            output_tokens: 2,
        },
    })
}

fn cred(key: &str) -> Credential {
    Credential::new(key)
}

#[tokio::test]
async fn successful_round_trip_appends_user_and_reply() {
    let gateway = ScriptedGateway::new(vec![reply("Hi there")]);
    let session = Session::new(gateway.clone());

    let outcome = session.handle("Hello", &cred("k1")).await;
    assert_eq!(outcome, Some(Outcome::Reply("Hi there".into())));
    assert_eq!(
        session.history(),
        vec![Turn::user("Hello"), Turn::assistant("Hi there")]
    );
    assert_eq!(gateway.calls()[0].1, "k1");
    assert_eq!(session.state(), SessionState::Idle);
}

#[tokio::test]
async fn failed_round_trip_keeps_only_the_user_turn() {
    let gateway = ScriptedGateway::new(vec![Err(AiError::Status {
        status: 401,
        body: "invalid api key".into(),
    })]);
    let session = Session::new(gateway);

    let outcome = session.handle("Hello", &cred("bad")).await;
    assert_eq!(outcome, Some(Outcome::Failure("invalid api key".into())));
    assert_eq!(session.history(), vec![Turn::user("Hello")]);
    assert_eq!(session.state(), SessionState::Idle);
}

#[tokio::test]
async fn blank_input_is_ignored() {
    let gateway = ScriptedGateway::new(vec![reply("unused")]);
    let session = Session::new(gateway.clone());

    for blank in ["", "   ", "\n\t "] {
        assert_eq!(session.handle(blank, &cred("k")).await, None);
    }
    assert_eq!(session.turn_count(), 0);
    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn second_request_carries_prior_exchange() {
    let gateway = ScriptedGateway::new(vec![reply("reply one"), reply("reply two")]);
    let session = Session::new(gateway.clone());

    session.handle("A", &cred("k")).await;
    session.handle("B", &cred("k")).await;

    let calls = gateway.calls();
    assert_eq!(calls[0].0, vec![Turn::user("A")]);
    assert_eq!(
        calls[1].0,
        vec![
            Turn::user("A"),
            Turn::assistant("reply one"),
            Turn::user("B"),
        ]
    );
}

#[tokio::test]
async fn transcript_grows_by_two_per_success_and_never_rewrites() {
    let replies = (0..5).map(|i| reply(&format!("r{i}"))).collect();
    let gateway = ScriptedGateway::new(replies);
    let session = Session::new(gateway.clone());

    let mut previous: Vec<Turn> = Vec::new();
    for n in 1..=5 {
        session.handle(&format!("q{n}"), &cred("k")).await;

        let history = session.history();
        assert_eq!(history.len(), previous.len() + 2);
        assert_eq!(&history[..previous.len()], previous.as_slice());

        // The nth request saw exactly the first 2*(n-1)+1 turns.
        let calls = gateway.calls();
        let sent = &calls[n - 1].0;
        assert_eq!(sent.len(), 2 * (n - 1) + 1);
        assert_eq!(sent.as_slice(), &history[..sent.len()]);

        previous = history;
    }

    let roles: Vec<Role> = previous.iter().map(Turn::role).collect();
    assert!(roles
        .chunks(2)
        .all(|pair| pair == [Role::User, Role::Assistant]));
}

#[tokio::test]
async fn retry_after_failure_sends_user_turn_again() {
    let gateway = ScriptedGateway::new(vec![
        Err(AiError::Network("connection reset".into())),
        reply("ok"),
    ]);
    let session = Session::new(gateway.clone());

    let first = session.handle("Hello", &cred("k")).await.unwrap();
    assert!(first.is_failure());
    assert_eq!(first, Outcome::Failure("network error: connection reset".into()));

    session.handle("Hello", &cred("k")).await;
    assert_eq!(
        session.history(),
        vec![
            Turn::user("Hello"),
            Turn::user("Hello"),
            Turn::assistant("ok"),
        ]
    );
}

#[tokio::test]
async fn empty_reply_is_recorded_as_a_reply() {
    let gateway = ScriptedGateway::new(vec![Ok(Completion::default())]);
    let session = Session::new(gateway);

    let outcome = session.handle("Hello", &cred("k")).await;
    assert_eq!(outcome, Some(Outcome::Reply(String::new())));
    assert_eq!(session.turn_count(), 2);
}

#[tokio::test]
async fn usage_accumulates_across_round_trips() {
    let gateway = ScriptedGateway::new(vec![reply("a"), reply("b")]);
    let session = Session::new(gateway);

    session.handle("one", &cred("k")).await;
    session.handle("two", &cred("k")).await;

    let usage = session.usage();
    assert_eq!(usage.input_tokens, 20);
    assert_eq!(usage.output_tokens, 4);
}

#[tokio::test]
async fn overlapping_request_is_rejected_while_awaiting_reply() {
    let hold = Arc::new(Notify::new());
    let gateway = ScriptedGateway::held(vec![reply("first")], hold.clone());
    let session = Arc::new(Session::new(gateway.clone()));

    let pending = {
        let session = session.clone();
        tokio::spawn(async move { session.handle("first", &Credential::new("k")).await })
    };

    while session.state() != SessionState::AwaitingReply {
        tokio::task::yield_now().await;
    }

    let rejected = session.handle("second", &cred("k")).await;
    assert_eq!(
        rejected,
        Some(Outcome::Failure(
            "session is busy with another request".into()
        ))
    );
    assert_eq!(session.history(), vec![Turn::user("first")]);

    hold.notify_one();
    let outcome = pending.await.unwrap();
    assert_eq!(outcome, Some(Outcome::Reply("first".into())));
    assert_eq!(session.state(), SessionState::Idle);
    assert_eq!(gateway.calls().len(), 1);
}
