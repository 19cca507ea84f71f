// tests/session.rs
//
// Session navigation against an in-memory site that counts fetches.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wikitable_scrape::config::options::ExtractOptions;
use wikitable_scrape::config::schema::EntitySchema;
use wikitable_scrape::core::Fetch;
use wikitable_scrape::session::{Command, Flow, PairResult, Session, SourceEntry};
use wikitable_scrape::{Error, Result};

#[derive(Default)]
struct FakeSite {
    pages: RefCell<HashMap<String, String>>,
    calls: RefCell<Vec<String>>,
}

impl FakeSite {
    fn get(&self, id: &str) -> Result<String> {
        self.calls.borrow_mut().push(id.to_string());
        self.pages
            .borrow()
            .get(id)
            .cloned()
            .ok_or_else(|| Error::fetch(id, "connection refused"))
    }

    fn put(&self, id: &str, body: String) {
        self.pages.borrow_mut().insert(id.to_string(), body);
    }

    fn fetches(&self, id: &str) -> usize {
        self.calls.borrow().iter().filter(|c| *c == id).count()
    }
}

fn table(episode: usize) -> String {
    format!(
        r#"<table class="wikitable">
             <tr><th>#</th><th>Title</th><th>Barry Weiss<br>Spent</th><th>Barry Weiss<br>Net profit/loss</th></tr>
             <tr><td>{episode}</td><td>Episode {episode}</td><td>$10</td><td>$5</td></tr>
           </table>"#
    )
}

fn page(tables: usize) -> String {
    let body: String = (0..tables).map(table).collect();
    format!("<html><body>{body}</body></html>")
}

fn session_over(
    ids: &[&str],
    site: &Rc<FakeSite>,
) -> Session<impl Fetch + use<>> {
    let site = Rc::clone(site);
    let fetcher = move |id: &str| -> Result<String> { site.get(id) };
    let sources = SourceEntry::from_ids(ids, None).unwrap();
    Session::new(sources, fetcher, ExtractOptions::default(), EntitySchema::default()).unwrap()
}

fn site_with(pages: &[(&str, String)]) -> Rc<FakeSite> {
    let site = Rc::new(FakeSite::default());
    for (id, body) in pages {
        site.put(id, body.clone());
    }
    site
}

fn episode_of(result: &PairResult) -> Option<String> {
    result.records()?.first()?.episode.clone()
}

#[test]
fn empty_source_list_is_rejected() {
    let site = Rc::new(FakeSite::default());
    let s2 = Rc::clone(&site);
    let fetcher = move |id: &str| -> Result<String> { s2.get(id) };
    let res = Session::new(Vec::new(), fetcher, ExtractOptions::default(), EntitySchema::default());
    assert!(matches!(res, Err(Error::NoSources)));
    assert!(site.calls.borrow().is_empty());
}

#[test]
fn season_list_must_match_sources() {
    let seasons = [Some(1)];
    let err = SourceEntry::from_ids(&["a", "b"], Some(&seasons[..])).unwrap_err();
    assert!(matches!(err, Error::SeasonCount { sources: 2, seasons: 1 }));
}

#[test]
fn construction_does_no_io_and_show_loads_first_pair() {
    let site = site_with(&[("a", page(3))]);
    let mut s = session_over(&["a"], &site);
    assert!(site.calls.borrow().is_empty());
    assert_eq!(*s.view().result, PairResult::NotLoaded);

    s.show();
    let v = s.view();
    assert_eq!((v.source_index, v.table_index), (0, 0));
    assert_eq!(episode_of(v.result).as_deref(), Some("0"));
    // count comes from the page, not from what has been cached so far
    assert_eq!(v.table_count, Some(3));
    assert!(!v.accepted);
}

#[test]
fn table_navigation_wraps_and_fetches_once() {
    let site = site_with(&[("a", page(3))]);
    let mut s = session_over(&["a"], &site);
    s.show();

    let mut seen = Vec::new();
    for _ in 0..3 {
        s.apply(Command::NextTable);
        seen.push(s.cursor().1);
    }
    assert_eq!(seen, vec![1, 2, 0]);

    s.apply(Command::PreviousTable);
    assert_eq!(s.cursor(), (0, 2));
    assert_eq!(episode_of(s.view().result).as_deref(), Some("2"));
    assert_eq!(site.fetches("a"), 1);
}

#[test]
fn source_navigation_wraps_and_resets_table() {
    let site = site_with(&[("a", page(2)), ("b", page(1)), ("c", page(4))]);
    let mut s = session_over(&["a", "b", "c"], &site);
    s.show();
    s.next_table();
    assert_eq!(s.cursor(), (0, 1));

    s.apply(Command::PreviousSource);
    assert_eq!(s.cursor(), (2, 0));
    assert_eq!(s.view().table_count, Some(4));

    s.apply(Command::NextSource);
    assert_eq!(s.cursor(), (0, 0));
    s.apply(Command::NextSource);
    assert_eq!(s.cursor(), (1, 0));

    // single table: next stays put
    s.apply(Command::NextTable);
    assert_eq!(s.cursor(), (1, 0));

    assert_eq!(site.fetches("a"), 1);
    assert_eq!(site.fetches("b"), 1);
    assert_eq!(site.fetches("c"), 1);
}

#[test]
fn accept_keeps_records_and_advances() {
    let site = site_with(&[("a_season_4", page(2))]);
    let mut s = session_over(&["a_season_4"], &site);
    s.show();

    s.apply(Command::Accept);
    assert_eq!(s.cursor(), (0, 1));
    assert!(s.is_accepted(0, 0));
    assert!(!s.view().accepted);

    let kept = s.accepted().get("a_season_4", 0).unwrap();
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].season, Some(4));
    assert_eq!(kept[0].entity, "Barry Weiss");

    // wrap back to table 0; it now reads as already added
    s.apply(Command::NextTable);
    assert!(s.view().accepted);

    // accepting again replaces, never duplicates
    s.apply(Command::Accept);
    assert_eq!(s.accepted().len(), 1);
    assert_eq!(s.accepted().record_count(), 1);
}

#[test]
fn accept_on_unreachable_source_changes_nothing() {
    let site = site_with(&[("b", page(1))]);
    let mut s = session_over(&["down", "b"], &site);
    s.show();
    assert!(s.view().result.error().is_some());

    s.apply(Command::Accept);
    assert_eq!(s.cursor(), (0, 0));
    assert!(s.accepted().is_empty());
    let msg = s.view().result.error().unwrap().to_string();
    assert!(msg.contains("connection refused"), "{msg}");
    assert_eq!(s.view().table_count, None);
}

#[test]
fn failed_pair_is_retried_on_revisit() {
    let site = site_with(&[("b", page(1))]);
    let mut s = session_over(&["flaky", "b"], &site);
    s.show();
    assert!(s.pair(0, 0).error().is_some());

    s.apply(Command::NextSource);
    assert!(s.view().result.is_loaded());

    site.put("flaky", page(2));
    s.apply(Command::PreviousSource);
    assert!(s.view().result.is_loaded());
    assert_eq!(site.fetches("flaky"), 2);
}

#[test]
fn show_does_not_retry_errors() {
    let site = Rc::new(FakeSite::default());
    let mut s = session_over(&["flaky"], &site);
    s.show();
    site.put("flaky", page(3));

    s.apply(Command::Show);
    assert!(s.view().result.error().is_some());
    assert_eq!(site.fetches("flaky"), 1);

    // navigation probes the page and moves on
    s.apply(Command::NextTable);
    assert_eq!(s.cursor(), (0, 1));
    assert!(s.view().result.is_loaded());
    assert_eq!(site.fetches("flaky"), 2);
}

#[test]
fn page_without_tables() {
    let site = site_with(&[("bare", s_html("<p>nothing here</p>"))]);
    let mut s = session_over(&["bare"], &site);
    s.show();
    assert_eq!(s.view().table_count, Some(0));
    let msg = s.view().result.error().unwrap().to_string();
    assert!(msg.contains("not found"), "{msg}");

    s.apply(Command::NextTable);
    assert_eq!(s.cursor(), (0, 0));
    assert_eq!(site.fetches("bare"), 1);
}

#[test]
fn malformed_table_is_an_error_pair_only() {
    let broken = r#"<table class="wikitable"><tr><th>#</th><th>Title</th></tr><tr><td>1</td></tr></table>"#;
    let body = s_html(&format!("{}{}{}", table(0), broken, table(2)));
    let site = site_with(&[("a", body)]);
    let mut s = session_over(&["a"], &site);
    s.show();

    s.apply(Command::Skip);
    let msg = s.view().result.error().unwrap().to_string();
    assert!(msg.contains("row 1"), "{msg}");

    s.apply(Command::NextTable);
    assert_eq!(episode_of(s.view().result).as_deref(), Some("2"));
}

#[test]
fn quit_leaves_state_alone() {
    let site = site_with(&[("a", page(2))]);
    let mut s = session_over(&["a"], &site);
    s.show();
    s.next_table();

    assert_eq!(s.apply(Command::Quit), Flow::Quit);
    assert_eq!(s.cursor(), (0, 1));
    assert_eq!(s.apply(Command::Show), Flow::Continue);
}

#[test]
fn loaded_pair_is_never_reloaded() {
    use std::cell::Cell;

    // first fetch succeeds, every later one fails
    let calls = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&calls);
    let fetcher = move |id: &str| -> Result<String> {
        counter.set(counter.get() + 1);
        if counter.get() == 1 { Ok(page(2)) } else { Err(Error::fetch(id, "gone")) }
    };
    let sources = SourceEntry::from_ids(&["once"], None).unwrap();
    let mut s =
        Session::new(sources, fetcher, ExtractOptions::default(), EntitySchema::default()).unwrap();

    s.show();
    assert!(s.view().result.is_loaded());

    s.apply(Command::Show);
    s.show();
    assert!(s.view().result.is_loaded());
    assert_eq!(episode_of(s.view().result).as_deref(), Some("0"));

    // round trip through the other table; both stay loaded
    s.apply(Command::NextTable);
    s.apply(Command::PreviousTable);
    assert!(s.pair(0, 1).is_loaded());
    assert!(s.view().result.is_loaded());
    assert_eq!(calls.get(), 1);
}

fn s_html(inner: &str) -> String {
    format!("<html><body>{inner}</body></html>")
}
