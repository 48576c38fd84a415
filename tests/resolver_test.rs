use cnc_launch::domain::ports::RecentStore;
use cnc_launch::{
    CannedPrompt, LaunchError, LogLevel, Logger, MemorySink, NameMissPolicy, RecentHistory,
    Selector, SelectorResolver,
};
use std::cell::RefCell;

/// Store that records every ordinal it is asked for.
struct ProbedStore {
    inner: RecentHistory,
    probes: RefCell<Vec<usize>>,
}

impl ProbedStore {
    fn new(capacity: usize, paths: &[&str]) -> Self {
        Self {
            inner: RecentHistory::new(capacity, paths.iter().map(|p| p.to_string()).collect()),
            probes: RefCell::new(Vec::new()),
        }
    }

    fn probes(&self) -> Vec<usize> {
        self.probes.borrow().clone()
    }
}

impl RecentStore for ProbedStore {
    fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    fn get(&self, ordinal: usize) -> cnc_launch::Result<Option<String>> {
        self.probes.borrow_mut().push(ordinal);
        self.inner.get(ordinal)
    }
}

/// Store whose backing file cannot be read.
struct BrokenStore;

impl RecentStore for BrokenStore {
    fn capacity(&self) -> usize {
        5
    }

    fn get(&self, _ordinal: usize) -> cnc_launch::Result<Option<String>> {
        Err(LaunchError::ConfigError {
            message: "history unavailable".to_string(),
        })
    }
}

fn scenario_store() -> RecentHistory {
    RecentHistory::new(5, vec!["/a/foo.nc".to_string(), "/a/bar.nc".to_string()])
}

fn quiet_logger() -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    (Logger::with_sink(LogLevel::WARNING, sink.clone()), sink)
}

fn resolve_with(
    selector: Selector,
    store: &dyn RecentStore,
    prompt: &mut CannedPrompt,
) -> (Option<String>, MemorySink) {
    let (mut logger, sink) = quiet_logger();
    let resolved = SelectorResolver::default().resolve(&selector, store, prompt, &mut logger);
    (resolved, sink)
}

#[test]
fn test_by_ordinal_converts_to_zero_based() {
    let store = RecentHistory::new(
        5,
        vec!["/a/one.nc".into(), "/a/two.nc".into(), "/a/three.nc".into()],
    );
    let (resolved, _) = resolve_with(
        Selector::from_value("3"),
        &store,
        &mut CannedPrompt::unanswered(),
    );
    assert_eq!(resolved.as_deref(), Some("/a/three.nc"));
}

#[test]
fn test_name_match_takes_first_matching_ordinal() {
    let store = RecentHistory::new(
        5,
        vec!["/a/foo.nc".into(), "/b/bar.nc".into(), "/c/baz.nc".into(), "/d/bar.gcode".into()],
    );
    let (resolved, _) = resolve_with(
        Selector::ByName("bar".to_string()),
        &store,
        &mut CannedPrompt::unanswered(),
    );
    assert_eq!(resolved.as_deref(), Some("/b/bar.nc"));
}

#[test]
fn test_name_miss_defaults_to_latest() {
    let (resolved, sink) = resolve_with(
        Selector::ByName("nonexistent".to_string()),
        &scenario_store(),
        &mut CannedPrompt::unanswered(),
    );
    assert_eq!(resolved.as_deref(), Some("/a/foo.nc"));
    assert!(sink.is_empty());
}

#[test]
fn test_name_miss_with_no_selection_policy() {
    let (mut logger, _) = quiet_logger();
    let resolver = SelectorResolver::new(NameMissPolicy::NoSelection);
    let resolved = resolver.resolve(
        &Selector::ByName("nonexistent".to_string()),
        &scenario_store(),
        &mut CannedPrompt::unanswered(),
        &mut logger,
    );
    assert_eq!(resolved, None);
}

#[test]
fn test_name_scan_stops_at_first_empty_ordinal() {
    let store = ProbedStore::new(10, &["/a/foo.nc", "/a/bar.nc"]);
    let resolver = SelectorResolver::new(NameMissPolicy::NoSelection);
    let (mut logger, _) = quiet_logger();

    let resolved = resolver.resolve(
        &Selector::ByName("xyz".to_string()),
        &store,
        &mut CannedPrompt::unanswered(),
        &mut logger,
    );

    assert_eq!(resolved, None);
    assert_eq!(store.probes(), vec![0, 1, 2]);
}

#[test]
fn test_scenario_from_command_line_values() {
    let store = scenario_store();

    let (by_index, _) = resolve_with(
        Selector::from_value("2"),
        &store,
        &mut CannedPrompt::unanswered(),
    );
    assert_eq!(by_index.as_deref(), Some("/a/bar.nc"));

    let (by_name, _) = resolve_with(
        Selector::from_value("xyz"),
        &store,
        &mut CannedPrompt::unanswered(),
    );
    assert_eq!(by_name.as_deref(), Some("/a/foo.nc"));

    let (latest, _) = resolve_with(Selector::Latest, &store, &mut CannedPrompt::unanswered());
    assert_eq!(latest.as_deref(), Some("/a/foo.nc"));
}

#[test]
fn test_list_renders_populated_entries_then_prompts() {
    let store = scenario_store();
    let mut prompt = CannedPrompt::new([Some(2)]);
    let (resolved, sink) = resolve_with(Selector::ListAll, &store, &mut prompt);

    assert_eq!(resolved.as_deref(), Some("/a/bar.nc"));
    assert_eq!(prompt.times_asked(), 1);
    assert_eq!(
        sink.messages(),
        vec![
            "Recent files:".to_string(),
            "   1: foo.nc      /a".to_string(),
            "   2: bar.nc      /a".to_string(),
            "Select one:".to_string(),
        ]
    );
}

#[test]
fn test_list_width_follows_longest_name() {
    let store = RecentHistory::new(5, vec!["/x/a.nc".into(), "/y/longname.nc".into()]);
    let (mut logger, sink) = quiet_logger();
    let listed = cnc_launch::core::resolver::render_list(&store, &mut logger);

    assert_eq!(listed, 2);
    let width = "longname.nc".len().max(10);
    let lines = sink.messages();
    assert_eq!(lines[1], format!("   1: {:<width$}  /x", "a.nc", width = width));
    assert_eq!(lines[2], format!("   2: {:<width$}  /y", "longname.nc", width = width));
}

#[test]
fn test_list_with_failed_prompt_uses_latest() {
    let mut prompt = CannedPrompt::unanswered();
    let (resolved, _) = resolve_with(Selector::ListAll, &scenario_store(), &mut prompt);
    assert_eq!(resolved.as_deref(), Some("/a/foo.nc"));
    assert_eq!(prompt.times_asked(), 1);
}

#[test]
fn test_list_mode_through_non_positive_ordinal() {
    let mut prompt = CannedPrompt::new([Some(1)]);
    let (resolved, sink) = resolve_with(Selector::ByOrdinal(0), &scenario_store(), &mut prompt);
    assert_eq!(resolved.as_deref(), Some("/a/foo.nc"));
    assert_eq!(sink.messages()[0], "Recent files:");
}

#[test]
fn test_out_of_range_prompt_answer_selects_nothing() {
    let mut prompt = CannedPrompt::new([Some(9)]);
    let (resolved, _) = resolve_with(Selector::ListAll, &scenario_store(), &mut prompt);
    assert_eq!(resolved, None);
}

#[test]
fn test_empty_store_is_no_selection() {
    let store = RecentHistory::default();
    for selector in [
        Selector::Latest,
        Selector::ByOrdinal(4),
        Selector::ByName("foo".to_string()),
    ] {
        let (resolved, sink) = resolve_with(selector, &store, &mut CannedPrompt::unanswered());
        assert_eq!(resolved, None);
        assert!(sink.is_empty());
    }
}

#[test]
fn test_broken_store_never_fails() {
    let mut prompt = CannedPrompt::new([Some(1)]);
    let (listed, sink) = resolve_with(Selector::ListAll, &BrokenStore, &mut prompt);
    assert_eq!(listed, None);
    assert_eq!(
        sink.messages(),
        vec!["Recent files:".to_string(), "Select one:".to_string()]
    );

    let (by_name, _) = resolve_with(
        Selector::ByName("foo".to_string()),
        &BrokenStore,
        &mut CannedPrompt::unanswered(),
    );
    assert_eq!(by_name, None);
}
