//! End-to-end search flows driven through `handle_event`.

use std::collections::BTreeMap;

use bookworld::app::{DetailsStatus, ResultsStatus};
use bookworld::{handle_event, initialize, Action, AppState, Config, Event, InputMode, Route};

fn page_body(prefix: &str, count: usize, total: u64) -> Vec<u8> {
    let items: Vec<String> = (0..count)
        .map(|i| {
            format!(
                r#"{{"id":"{prefix}{i}","volumeInfo":{{"title":"{prefix} {i}","authors":["Author {i}"],"publishedDate":"2001-02-03"}}}}"#
            )
        })
        .collect();
    format!(r#"{{"totalItems":{total},"items":[{}]}}"#, items.join(",")).into_bytes()
}

fn params(q: &str, page: &str) -> BTreeMap<String, String> {
    BTreeMap::from([
        ("q".to_string(), q.to_string()),
        ("page".to_string(), page.to_string()),
    ])
}

fn started() -> AppState {
    let mut state = initialize(&Config::default());
    handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();
    state
}

fn search(state: &mut AppState, text: &str) -> Vec<Action> {
    if state.input_mode != InputMode::Typing {
        handle_event(state, &Event::StartTyping).unwrap();
    }
    while !state.input.is_empty() {
        handle_event(state, &Event::Backspace).unwrap();
    }
    for c in text.chars() {
        handle_event(state, &Event::Char(c)).unwrap();
    }
    handle_event(state, &Event::Submit).unwrap().1
}

/// The single fetch in `actions`, as `(url, response context)`.
fn fetch(actions: &[Action]) -> (String, BTreeMap<String, String>) {
    match actions {
        [Action::Fetch { url, context }] => (url.clone(), context.to_map().unwrap()),
        other => panic!("expected one fetch, got {other:?}"),
    }
}

fn respond(state: &mut AppState, context: BTreeMap<String, String>, body: Vec<u8>) -> bool {
    let event = Event::WebResponse {
        status: 200,
        body,
        context,
    };
    handle_event(state, &event).unwrap().0
}

fn titles(state: &AppState) -> Vec<String> {
    state
        .page()
        .map(|page| page.items.iter().map(|book| book.title.clone()).collect())
        .unwrap_or_default()
}

#[test]
fn empty_location_shows_landing() {
    let state = started();
    assert_eq!(state.route, Route::Landing);
    assert_eq!(state.input_mode, InputMode::Typing);
}

#[test]
fn configured_location_fetches_on_permission() {
    let config = Config {
        initial_params: params("dune", "3"),
        ..Config::default()
    };
    let mut state = initialize(&config);
    let (_, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();

    let (url, _) = fetch(&actions);
    assert!(url.contains("q=dune&startIndex=20&maxResults=10"), "{url}");
    assert_eq!(state.input, "dune");
    assert_eq!(state.input_mode, InputMode::Normal);
}

#[test]
fn late_response_for_old_query_is_discarded() {
    let mut state = started();
    let (_, dune) = fetch(&search(&mut state, "dune"));
    let (_, foundation) = fetch(&search(&mut state, "foundation"));

    assert!(respond(&mut state, foundation, page_body("Foundation", 2, 2)));
    assert!(!respond(&mut state, dune, page_body("Dune", 2, 2)));

    assert_eq!(titles(&state), vec!["Foundation 0", "Foundation 1"]);
}

#[test]
fn stale_page_is_served_from_cache_on_back() {
    let mut state = started();
    let (_, dune) = fetch(&search(&mut state, "dune"));
    let (_, foundation) = fetch(&search(&mut state, "foundation"));
    respond(&mut state, dune, page_body("Dune", 1, 1));
    respond(&mut state, foundation, page_body("Foundation", 1, 1));

    let (render, actions) = handle_event(&mut state, &Event::Back).unwrap();

    assert!(render);
    assert!(actions.is_empty());
    assert_eq!(titles(&state), vec!["Dune 0"]);
    assert_eq!(state.input, "dune");
}

#[test]
fn identical_request_in_flight_is_not_resent() {
    let mut state = started();
    let (_, dune) = fetch(&search(&mut state, "dune"));
    fetch(&handle_event(&mut state, &Event::Navigate(params("foundation", "1"))).unwrap().1);

    let (_, actions) = handle_event(&mut state, &Event::Navigate(params("dune", "1"))).unwrap();
    assert!(actions.is_empty());
    assert!(matches!(state.results, ResultsStatus::Loading));

    assert!(respond(&mut state, dune, page_body("Dune", 1, 1)));
    assert_eq!(titles(&state), vec!["Dune 0"]);
}

#[test]
fn paging_updates_location_and_offset() {
    let mut state = started();
    let (_, context) = fetch(&search(&mut state, "dune"));
    respond(&mut state, context, page_body("Dune", 10, 95));

    let (url, _) = fetch(&handle_event(&mut state, &Event::NextPage).unwrap().1);
    assert!(url.contains("startIndex=10"), "{url}");
    assert_eq!(state.store.location().to_query_string(), "page=2&q=dune");

    let (render, actions) = handle_event(&mut state, &Event::PrevPage).unwrap();
    assert!(render);
    assert!(actions.is_empty());
    assert_eq!(state.query().map(|q| q.page), Some(1));
}

#[test]
fn page_buttons_jump_within_window() {
    let mut state = started();
    let (_, context) = fetch(&search(&mut state, "dune"));
    respond(&mut state, context, page_body("Dune", 10, 95));

    // Window on page 1 is [1, 2, 3], so the third button is page 3.
    let (url, _) = fetch(&handle_event(&mut state, &Event::JumpToButton(3)).unwrap().1);
    assert!(url.contains("startIndex=20"), "{url}");
    assert_eq!(handle_event(&mut state, &Event::JumpToButton(9)).unwrap(), (false, vec![]));
}

#[test]
fn query_change_clears_selection() {
    let mut state = started();
    let (_, context) = fetch(&search(&mut state, "dune"));
    respond(&mut state, context, page_body("Dune", 3, 30));

    handle_event(&mut state, &Event::CursorDown).unwrap();
    let (url, _) = fetch(&handle_event(&mut state, &Event::OpenDetails).unwrap().1);
    assert!(url.ends_with("/Dune1"), "{url}");
    assert_eq!(state.selection.selected_id(), Some("Dune1"));

    handle_event(&mut state, &Event::NextPage).unwrap();
    assert_eq!(state.selection.selected_id(), None);
    assert_eq!(state.details, DetailsStatus::Closed);
}

#[test]
fn details_response_fills_panel() {
    let mut state = started();
    let (_, context) = fetch(&search(&mut state, "dune"));
    respond(&mut state, context, page_body("Dune", 1, 1));

    let (_, details) = fetch(&handle_event(&mut state, &Event::OpenDetails).unwrap().1);
    let body = br#"{"id":"Dune0","volumeInfo":{"title":"Dune","description":"<p>Arrakis</p>","pageCount":412}}"#;
    assert!(respond(&mut state, details, body.to_vec()));

    let DetailsStatus::Ready(book) = &state.details else {
        panic!("expected details, got {:?}", state.details);
    };
    assert_eq!(book.description, "Arrakis");
    assert_eq!(book.categories, vec!["unknown"]);
}

#[test]
fn blank_or_invalid_deep_links_redirect_to_landing() {
    let mut state = started();
    search(&mut state, "dune");

    handle_event(&mut state, &Event::Navigate(params("   ", "1"))).unwrap();
    assert_eq!(state.route, Route::Landing);
    assert!(state.query().is_none());

    search(&mut state, "dune");
    handle_event(&mut state, &Event::Navigate(params("dune", "two"))).unwrap();
    assert_eq!(state.route, Route::Landing);
}

#[test]
fn page_below_one_is_clamped_in_place() {
    let mut state = started();
    handle_event(&mut state, &Event::Navigate(params("dune", "-4"))).unwrap();

    assert_eq!(state.query().map(|q| q.page), Some(1));
    assert_eq!(state.store.location().to_query_string(), "page=1&q=dune");
}

#[test]
fn denied_permission_reports_failure() {
    let mut state = initialize(&Config::default());
    handle_event(&mut state, &Event::PermissionsResult { granted: false }).unwrap();

    let actions = search(&mut state, "dune");
    assert!(actions.is_empty());
    assert!(matches!(state.results, ResultsStatus::Failed(_)));
}

#[test]
fn server_error_shows_failure_and_retry_refetches() {
    let mut state = started();
    let (_, context) = fetch(&search(&mut state, "dune"));
    let event = Event::WebResponse {
        status: 503,
        body: vec![],
        context,
    };
    assert!(handle_event(&mut state, &event).unwrap().0);
    assert!(matches!(state.results, ResultsStatus::Failed(_)));

    handle_event(&mut state, &Event::Navigate(params("dune", "2"))).unwrap();
    let (_, actions) = handle_event(&mut state, &Event::Navigate(params("dune", "1"))).unwrap();
    fetch(&actions);
}
