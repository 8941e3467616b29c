// Unit tests for search term validation and request construction

use crate::config::ApiConfig;
use crate::error::query::QueryError;
use crate::query::{SearchTerm, build_request};

use common::RedactedApiKey;

const TEST_KEY: &str = "test-api-key";

fn test_config() -> ApiConfig {
    ApiConfig {
        base_url: String::from("https://www.googleapis.com/books/v1/volumes"),
        max_results: 10,
        lang_restrict: String::from("en"),
        connect_timeout_secs: 15,
        read_timeout_secs: 10,
    }
}

/// **VALUE**: Verifies trimming and rejection of blank input.
///
/// **WHY THIS MATTERS**: The pipeline's empty-query fast path depends on
/// SearchTerm's non-empty invariant. If whitespace slips through, we send
/// a pointless request to the catalog.
///
/// **BUG THIS CATCHES**: Would catch a missing trim() or an emptiness
/// check performed before trimming.
#[test]
fn given_blank_input_when_validated_then_rejected() {
    assert!(matches!(
        SearchTerm::new(""),
        Err(QueryError::EmptyQuery { .. })
    ));
    assert!(matches!(
        SearchTerm::new("   \t\n"),
        Err(QueryError::EmptyQuery { .. })
    ));

    let term = SearchTerm::new("  economics  ").expect("trimmed input should validate");
    assert_eq!(term.as_str(), "economics");
}

/// **VALUE**: Verifies the full request URL, including parameter order.
///
/// **WHY THIS MATTERS**: The descriptor is the contract with the catalog
/// API. A renamed or reordered parameter silently changes the request,
/// and stable ordering is what makes this assertion possible at all.
///
/// **BUG THIS CATCHES**: Would catch parameter renames, reordering, or a
/// dropped parameter.
#[test]
fn given_term_and_config_when_built_then_produces_canonical_url() {
    let term = SearchTerm::new("economics").unwrap();
    let key = RedactedApiKey::new(String::from(TEST_KEY));

    let request = build_request(&term, &test_config(), &key).expect("build should succeed");

    assert_eq!(
        request.url().as_str(),
        "https://www.googleapis.com/books/v1/volumes\
         ?key=test-api-key&maxResults=10&langRestrict=en&q=economics"
    );
}

/// **VALUE**: Verifies the query term is carried into `q` unaltered.
///
/// **WHY THIS MATTERS**: Users type free text; the catalog must receive
/// exactly that text. Double-encoding or lossy normalization changes what
/// is searched.
///
/// **BUG THIS CATCHES**: Would catch manual string concatenation replacing
/// the url crate's form encoding.
#[test]
fn given_multi_word_term_when_built_then_query_is_form_encoded() {
    let term = SearchTerm::new("harry potter").unwrap();
    let key = RedactedApiKey::new(String::from(TEST_KEY));

    let request = build_request(&term, &test_config(), &key).unwrap();

    let q = request
        .url()
        .query_pairs()
        .find(|(name, _)| name == "q")
        .map(|(_, value)| value.into_owned());
    assert_eq!(q.as_deref(), Some("harry potter"));
}

/// **VALUE**: Verifies determinism - same inputs, same descriptor.
///
/// **WHY THIS MATTERS**: Request construction is pure; tests
/// and logs rely on reproducible URLs.
///
/// **BUG THIS CATCHES**: Would catch nondeterministic parameter ordering
/// (e.g. a HashMap sneaking into construction).
#[test]
fn given_same_inputs_when_built_twice_then_descriptors_match() {
    let term = SearchTerm::new("economics").unwrap();
    let key = RedactedApiKey::new(String::from(TEST_KEY));
    let config = test_config();

    let first = build_request(&term, &config, &key).unwrap();
    let second = build_request(&term, &config, &key).unwrap();

    assert_eq!(first.url(), second.url());
}

/// **VALUE**: Verifies the Debug form never contains the API key.
///
/// **WHY THIS MATTERS**: Descriptors are logged at debug level before
/// every fetch. The key is a credential.
///
/// **BUG THIS CATCHES**: Would catch a `#[derive(Debug)]` replacing the
/// redacting impl.
#[test]
fn given_descriptor_when_debug_formatted_then_key_is_redacted() {
    let term = SearchTerm::new("economics").unwrap();
    let key = RedactedApiKey::new(String::from(TEST_KEY));

    let request = build_request(&term, &test_config(), &key).unwrap();
    let debug = format!("{:?}", request);

    assert!(!debug.contains(TEST_KEY), "Debug output leaked the key");
    assert!(debug.contains("REDACTED"));
    assert!(debug.contains("q=economics"), "other params should remain visible");
}

/// **VALUE**: Verifies an unparseable base URL surfaces as BaseUrl.
///
/// **WHY THIS MATTERS**: A corrupt config must fail with a typed error,
/// not a panic inside URL construction.
///
/// **BUG THIS CATCHES**: Would catch an unwrap on Url::parse.
#[test]
fn given_invalid_base_url_when_built_then_fails() {
    let term = SearchTerm::new("economics").unwrap();
    let key = RedactedApiKey::new(String::from(TEST_KEY));
    let config = ApiConfig {
        base_url: String::from("not a url"),
        ..test_config()
    };

    assert!(matches!(
        build_request(&term, &config, &key),
        Err(QueryError::BaseUrl { .. })
    ));
}
