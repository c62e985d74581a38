//! Debug utilities for inspecting streams while they are pulled.
//!
//! Output goes through the `log` facade at `trace`/`debug` level, so it costs
//! nothing unless the embedding application installs a logger and enables
//! those levels.

use crate::Stream;
use std::fmt::Debug;

/// How many elements [`Stream::debug_inspect`] logs before going quiet.
const INSPECT_LIMIT: usize = 10;

impl<'a, T: 'a + Debug> Stream<'a, T> {
    /// Log the first few elements passing this point, tagged with `label`.
    #[must_use]
    pub fn debug_inspect(self, label: &str) -> Self {
        let label = label.to_string();
        let mut seen = 0usize;
        self.peek(move |item| {
            if seen < INSPECT_LIMIT {
                log::trace!("[{label}] [{seen}]: {item:?}");
            } else if seen == INSPECT_LIMIT {
                log::trace!("[{label}] ... (further elements not shown)");
            }
            seen += 1;
        })
    }
}

impl<'a, T: 'a> Stream<'a, T> {
    /// Log how many elements passed this point once upstream is exhausted.
    ///
    /// Nothing is logged if a downstream short-circuit stops pulling first.
    #[must_use]
    pub fn debug_count(self, label: &str) -> Self {
        let label = label.to_string();
        let mut inner = self.inner;
        let mut count = 0usize;
        let mut reported = false;
        Self::wrap(std::iter::from_fn(move || match inner.next() {
            Some(item) => {
                count += 1;
                Some(item)
            }
            None => {
                if !reported {
                    reported = true;
                    log::debug!("[{label}] count: {count} elements");
                }
                None
            }
        }))
    }
}
