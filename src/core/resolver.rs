use crate::core::logger::Logger;
use crate::domain::model::{NameLookup, NameMissPolicy, ResolvedRecent, Selector};
use crate::domain::ports::{Prompt, RecentStore};
use std::path::Path;

/// Narrowest column used for file names in the recent list.
pub const MIN_NAME_WIDTH: usize = 10;

/// Turns a [`Selector`] into a path from the recent history.
///
/// Resolution never fails: a missing entry, an unreadable store or an
/// unanswered prompt all end in "no selection" or in the most recent file.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectorResolver {
    miss_policy: NameMissPolicy,
}

impl SelectorResolver {
    pub fn new(miss_policy: NameMissPolicy) -> Self {
        Self { miss_policy }
    }

    pub fn miss_policy(&self) -> NameMissPolicy {
        self.miss_policy
    }

    pub fn resolve<S, P>(
        &self,
        selector: &Selector,
        store: &S,
        prompt: &mut P,
        logger: &mut Logger,
    ) -> ResolvedRecent
    where
        S: RecentStore + ?Sized,
        P: Prompt + ?Sized,
    {
        let Some(mut ordinal) = self.ordinal_for(selector, store) else {
            tracing::debug!("No recent file matches {:?}", selector);
            return None;
        };

        if ordinal < 0 {
            render_list(store, logger);
            logger.always(&[&"Select one:"]);
            ordinal = match prompt.read_index() {
                Some(choice) => choice.saturating_sub(1),
                None => {
                    tracing::debug!("No usable answer, falling back to the most recent file");
                    0
                }
            };
        }

        fetch(store, ordinal)
    }

    /// Zero-based ordinal a selector points at before any prompting.
    /// Negative means list mode. `None` only when a name misses under
    /// [`NameMissPolicy::NoSelection`].
    pub fn ordinal_for<S>(&self, selector: &Selector, store: &S) -> Option<i64>
    where
        S: RecentStore + ?Sized,
    {
        match selector {
            Selector::Latest => Some(0),
            Selector::ListAll => Some(-1),
            Selector::ByOrdinal(n) => Some(n.saturating_sub(1)),
            Selector::ByName(stem) => match find_by_name(store, stem) {
                NameLookup::Found(ordinal) => i64::try_from(ordinal).ok(),
                NameLookup::NotFound => match self.miss_policy {
                    NameMissPolicy::FallbackToLatest => {
                        tracing::debug!("'{}' not in history, using the most recent file", stem);
                        Some(0)
                    }
                    NameMissPolicy::NoSelection => None,
                },
            },
        }
    }
}

/// Scans the history in order for a file whose stem equals `stem`.
/// Stops at the first empty ordinal.
pub fn find_by_name<S>(store: &S, stem: &str) -> NameLookup
where
    S: RecentStore + ?Sized,
{
    for ordinal in 0..store.capacity() {
        let path = match store.get(ordinal) {
            Ok(Some(path)) => path,
            Ok(None) => break,
            Err(e) => {
                tracing::debug!("Recent history unreadable at {}: {}", ordinal, e);
                break;
            }
        };
        if file_stem(&path) == stem {
            return NameLookup::Found(ordinal);
        }
    }
    NameLookup::NotFound
}

/// Prints the populated history through `logger.always` and returns the
/// number of entries listed.
pub fn render_list<S>(store: &S, logger: &mut Logger) -> usize
where
    S: RecentStore + ?Sized,
{
    // 寬度計算涵蓋所有有值的位置，包含空洞之後的
    let width = (0..store.capacity())
        .filter_map(|ordinal| store.get(ordinal).ok().flatten())
        .map(|path| file_name(&path).chars().count())
        .fold(MIN_NAME_WIDTH, usize::max);

    logger.always(&[&"Recent files:"]);
    let mut listed = 0;
    for ordinal in 0..store.capacity() {
        let Ok(Some(path)) = store.get(ordinal) else {
            break;
        };
        let line = format!(
            "  {:>2}: {:<width$}  {}",
            ordinal + 1,
            file_name(&path),
            directory(&path),
            width = width
        );
        logger.always(&[&line]);
        listed += 1;
    }
    listed
}

fn fetch<S>(store: &S, ordinal: i64) -> ResolvedRecent
where
    S: RecentStore + ?Sized,
{
    let index = usize::try_from(ordinal).ok()?;
    match store.get(index) {
        Ok(path) => path,
        Err(e) => {
            tracing::debug!("Recent history unreadable at {}: {}", index, e);
            None
        }
    }
}

fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn directory(path: &str) -> String {
    Path::new(path)
        .parent()
        .map(|dir| dir.to_string_lossy().into_owned())
        .unwrap_or_default()
}
