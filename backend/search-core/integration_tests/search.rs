// End-to-end pipeline tests against a stubbed catalog endpoint

use crate::helpers::{FREAKONOMICS_BODY, TEST_KEY, VOLUMES_PATH, test_pipeline};

use search_core::error::SearchError;
use search_core::error::fetch::FetchError;
use search_core::error::parse::ParseError;
use search_core::error::query::QueryError;
use search_core::pipeline::SearchOutcome;

use std::time::Duration;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies the whole pipeline end to end on the canonical
/// fixture: request construction, parameter passing, fetch, and parse.
///
/// **WHY THIS MATTERS**: This is the one test that exercises every core
/// component against a real HTTP exchange. If it passes, the pieces
/// compose.
///
/// **BUG THIS CATCHES**: Would catch any component change that breaks the
/// request shape (the matchers reject it) or the decoded record.
#[tokio::test]
async fn given_matching_volume_when_searched_then_found_with_exact_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(VOLUMES_PATH))
        .and(query_param("key", TEST_KEY))
        .and(query_param("maxResults", "10"))
        .and(query_param("langRestrict", "en"))
        .and(query_param("q", "economics"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FREAKONOMICS_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let pipeline = test_pipeline(&server.uri());
    let outcome = pipeline.search("economics").await;

    let books = match outcome {
        SearchOutcome::Found(books) => books,
        other => panic!("expected Found, got {other:?}"),
    };
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Freakonomics");
    assert_eq!(
        books[0].authors,
        vec!["Steven D. Levitt", "Stephen J. Dubner"]
    );
    assert_eq!(books[0].preview_url, "http://example.com/book");
}

/// **VALUE**: Verifies a non-200 answer becomes a Status failure with the
/// code preserved and surfaced in the display message.
///
/// **WHY THIS MATTERS**: Upstream outages answer 5xx; the user must see
/// the code, and the body of the error page must never reach the parser.
///
/// **BUG THIS CATCHES**: Would catch the fetcher parsing non-200 bodies
/// or dropping the code on the way to the message.
#[tokio::test]
async fn given_server_error_when_searched_then_fails_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(VOLUMES_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(1)
        .mount(&server)
        .await;

    let pipeline = test_pipeline(&server.uri());
    let outcome = pipeline.search("economics").await;

    let (error, message) = match outcome {
        SearchOutcome::Failed { error, message } => (error, message),
        other => panic!("expected Failed, got {other:?}"),
    };
    assert!(matches!(
        &*error,
        SearchError::Fetch(FetchError::Status { code, .. }) if code.0 == 500
    ));
    assert!(message.contains("500"));
}

/// **VALUE**: Verifies zero matches map to Empty, not Found(vec![]).
///
/// **WHY THIS MATTERS**: The consumer renders Empty as "No books found.";
/// an empty Found list would render a blank screen with no explanation.
///
/// **BUG THIS CATCHES**: Would catch the pipeline collapsing the parser's
/// None into an empty record list.
#[tokio::test]
async fn given_zero_total_when_searched_then_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(VOLUMES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"totalItems": 0}"#))
        .expect(1)
        .mount(&server)
        .await;

    let pipeline = test_pipeline(&server.uri());

    assert!(matches!(
        pipeline.search("economics").await,
        SearchOutcome::Empty
    ));
}

/// **VALUE**: Verifies empty input fails fast with zero HTTP traffic.
///
/// **WHY THIS MATTERS**: Validation must run before any network call;
/// the `expect(0)` assertion is the call-count proof.
///
/// **BUG THIS CATCHES**: Would catch validation moving after request
/// dispatch.
#[tokio::test]
async fn given_blank_query_when_searched_then_fails_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let pipeline = test_pipeline(&server.uri());
    let outcome = pipeline.search("   ").await;

    let (error, message) = match outcome {
        SearchOutcome::Failed { error, message } => (error, message),
        other => panic!("expected Failed, got {other:?}"),
    };
    assert!(matches!(
        &*error,
        SearchError::Query(QueryError::EmptyQuery { .. })
    ));
    assert_eq!(message, pipeline.messages().empty_query);

    // MockServer verifies expect(0) on drop.
}

/// **VALUE**: Verifies a non-JSON 200 body fails as MalformedJson.
///
/// **WHY THIS MATTERS**: Proxies and captive portals answer 200 with HTML;
/// the user must get the parse-failure message rather than a crash.
///
/// **BUG THIS CATCHES**: Would catch the parser's error path being
/// swallowed into Empty.
#[tokio::test]
async fn given_html_body_when_searched_then_fails_malformed_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(VOLUMES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>sign in</html>"))
        .mount(&server)
        .await;

    let pipeline = test_pipeline(&server.uri());
    let outcome = pipeline.search("economics").await;

    let error = match outcome {
        SearchOutcome::Failed { error, .. } => error,
        other => panic!("expected Failed, got {other:?}"),
    };
    assert!(matches!(
        &*error,
        SearchError::Parse(ParseError::MalformedJson { .. })
    ));
}

/// **VALUE**: Verifies the read deadline turns into a Timeout failure.
///
/// **WHY THIS MATTERS**: The pipeline's read timeout (1 s in this
/// fixture) is the only protection against a hung catalog; the user must
/// see the timeout message, not wait forever.
///
/// **BUG THIS CATCHES**: Would catch the timeout being dropped from the
/// client builder or misclassified as a generic network failure.
#[tokio::test]
async fn given_slow_catalog_when_searched_then_fails_with_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(VOLUMES_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"totalItems": 0}"#)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let pipeline = test_pipeline(&server.uri());
    let outcome = pipeline.search("economics").await;

    let (error, message) = match outcome {
        SearchOutcome::Failed { error, message } => (error, message),
        other => panic!("expected Failed, got {other:?}"),
    };
    assert!(matches!(
        &*error,
        SearchError::Fetch(FetchError::Timeout { .. })
    ));
    assert_eq!(message, pipeline.messages().timeout);
}
