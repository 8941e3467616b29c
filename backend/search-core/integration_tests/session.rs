// Generation handling in the re-entrant search session

use crate::helpers::{TEST_KEY, VOLUMES_PATH, test_pipeline, wait_for_finish};

use search_core::pipeline::{SearchOutcome, SearchSession, SearchUpdate};

use std::time::Duration;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn single_volume_body(title: &str) -> String {
    format!(
        r#"{{"totalItems": 1, "items": [{{"volumeInfo": {{"title": "{title}"}}}}]}}"#
    )
}

/// **VALUE**: Verifies last-writer-wins by generation, not completion
/// order.
///
/// **WHY THIS MATTERS**: This is the session's entire reason to exist: a
/// user who retypes and re-submits must never have the new results
/// replaced by the old search resolving late.
///
/// **BUG THIS CATCHES**: Would catch the generation check being dropped,
/// in which case the slow generation-1 response (arriving after
/// generation 2 finished) would overwrite the newer state.
#[tokio::test]
async fn given_newer_search_when_older_finishes_late_then_stale_result_discarded() {
    let server = MockServer::start().await;

    // Generation 1 answers slowly, generation 2 immediately.
    Mock::given(method("GET"))
        .and(path(VOLUMES_PATH))
        .and(query_param("q", "slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(single_volume_body("Slow Book"))
                .set_delay(Duration::from_millis(400)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(VOLUMES_PATH))
        .and(query_param("q", "fast"))
        .respond_with(ResponseTemplate::new(200).set_body_string(single_volume_body("Fast Book")))
        .mount(&server)
        .await;

    let session = SearchSession::new(test_pipeline(&server.uri()));
    let mut rx = session.subscribe();

    let first = session.submit("slow");
    tokio::time::sleep(Duration::from_millis(50)).await;
    let second = session.submit("fast");
    assert_eq!(second, first + 1);

    let outcome = wait_for_finish(&mut rx, second).await;
    let books = match outcome {
        SearchOutcome::Found(books) => books,
        other => panic!("expected Found, got {other:?}"),
    };
    assert_eq!(books[0].title, "Fast Book");

    // Let generation 1 resolve; its result must not replace generation 2's.
    tokio::time::sleep(Duration::from_millis(500)).await;
    let update = rx.borrow().clone();
    let SearchUpdate::Finished {
        generation,
        outcome: SearchOutcome::Found(books),
    } = update
    else {
        panic!("state regressed after stale completion");
    };
    assert_eq!(generation, second);
    assert_eq!(books[0].title, "Fast Book");
}

/// **VALUE**: Verifies the session publishes Pending then Finished for a
/// plain single search.
///
/// **WHY THIS MATTERS**: The consumer drives its loading indicator off
/// Pending and its rendering off Finished; both must arrive with the
/// submitted generation.
///
/// **BUG THIS CATCHES**: Would catch the Pending update being skipped or
/// tagged with the wrong generation.
#[tokio::test]
async fn given_single_search_when_submitted_then_pending_then_finished() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(VOLUMES_PATH))
        .and(query_param("key", TEST_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_string(single_volume_body("Only Book")))
        .mount(&server)
        .await;

    let session = SearchSession::new(test_pipeline(&server.uri()));
    let mut rx = session.subscribe();
    assert!(matches!(&*rx.borrow_and_update(), SearchUpdate::Idle));

    let generation = session.submit("anything");
    assert_eq!(generation, 1);

    // The Pending update may already be superseded by Finished when we
    // look, but never by anything else.
    let saw = rx.borrow().clone();
    assert!(matches!(
        saw,
        SearchUpdate::Pending { generation: 1 } | SearchUpdate::Finished { generation: 1, .. }
    ));

    let outcome = wait_for_finish(&mut rx, generation).await;
    assert!(matches!(outcome, SearchOutcome::Found(_)));
}

/// **VALUE**: Verifies validation failures flow through the session like
/// any other outcome.
///
/// **WHY THIS MATTERS**: The consumer has one code path for outcomes; an
/// empty query must arrive as Finished/Failed on the watch channel, not
/// as a panic or a silently dead generation.
///
/// **BUG THIS CATCHES**: Would catch the spawned task short-circuiting
/// before publishing on validation errors.
#[tokio::test]
async fn given_blank_query_when_submitted_then_failure_published() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let session = SearchSession::new(test_pipeline(&server.uri()));
    let mut rx = session.subscribe();

    let generation = session.submit("  ");
    let outcome = wait_for_finish(&mut rx, generation).await;

    let message = match outcome {
        SearchOutcome::Failed { message, .. } => message,
        other => panic!("expected Failed, got {other:?}"),
    };
    assert_eq!(message, session.messages().empty_query);
}
