// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Grouping of consecutive obsolete lines (`#~ `) into obsolete messages.

use crate::catalog::line::LineKind;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum State {
    #[default]
    Outside,
    Inside,
}

#[derive(Debug, Default)]
pub struct ObsoleteRunTracker {
    state: State,
}

impl ObsoleteRunTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next line; return `true` if this line starts a new obsolete run.
    pub fn feed(&mut self, line: &str) -> bool {
        let obsolete = LineKind::of(line) == LineKind::Obsolete;
        match (self.state, obsolete) {
            (State::Outside, true) => {
                self.state = State::Inside;
                true
            }
            (State::Inside, false) => {
                self.state = State::Outside;
                false
            }
            _ => false,
        }
    }
}

/// Return the line numbers (1-based) of the first line of each obsolete run.
#[must_use]
pub fn obsolete_runs<S: AsRef<str>>(lines: &[S]) -> Vec<usize> {
    let mut tracker = ObsoleteRunTracker::new();
    lines
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| tracker.feed(line.as_ref()).then_some(idx + 1))
        .collect()
}
