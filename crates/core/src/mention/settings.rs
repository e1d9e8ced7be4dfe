//! Immutable settings snapshot handed to every trigger/candidate/commit call.

use serde::Serialize;

use crate::links::LinkStyle;

/// Symbol used when a rule or the configuration leaves the symbol blank.
pub const DEFAULT_SYMBOL: &str = "@";

/// Restricts which documents a trigger symbol may link to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ScopeRule {
    /// Vault-relative folder. Empty makes the rule inert.
    pub folder: String,
    /// Trigger symbol this rule applies to. Empty means [`DEFAULT_SYMBOL`].
    pub symbol: String,
    /// Show `folder/name` instead of the bare name for matching documents.
    pub full_path: bool,
}

impl ScopeRule {
    pub fn new(folder: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self { folder: folder.into(), symbol: symbol.into(), full_path: false }
    }

    pub fn with_full_path(mut self, full_path: bool) -> Self {
        self.full_path = full_path;
        self
    }

    pub fn symbol(&self) -> &str {
        if self.symbol.is_empty() { DEFAULT_SYMBOL } else { &self.symbol }
    }

    pub fn is_inert(&self) -> bool {
        self.folder.trim().is_empty()
    }

    /// Directory-prefix match on a vault-relative document path.
    pub fn matches_path(&self, path: &str) -> bool {
        let folder = self.folder.trim().trim_end_matches('/');
        if folder.is_empty() {
            return false;
        }
        path.strip_prefix(folder).is_some_and(|rest| rest.starts_with('/'))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkSettings {
    /// Trigger symbols that exist without any scope rule.
    pub symbols: Vec<String>,
    /// Evaluated in declaration order; the first match wins.
    pub scope_rules: Vec<ScopeRule>,
    /// Prefix the link label with the active symbol.
    pub include_symbol: bool,
    /// Offer a "create new note" candidate for unmatched queries.
    pub show_add_new_note: bool,
    /// Template path without extension. Empty means a blank note.
    pub add_new_note_template: String,
    /// Folder new notes are created in. Empty means the vault root.
    pub add_new_note_directory: String,
    /// Number of spaces a query may contain before the session closes.
    pub leave_open_for_spaces: usize,
    pub link_style: LinkStyle,
    pub default_extension: String,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            symbols: Vec::new(),
            scope_rules: Vec::new(),
            include_symbol: true,
            show_add_new_note: false,
            add_new_note_template: String::new(),
            add_new_note_directory: String::new(),
            leave_open_for_spaces: 0,
            link_style: LinkStyle::default(),
            default_extension: "md".to_string(),
        }
    }
}

impl LinkSettings {
    /// Every configured trigger symbol, longest first.
    ///
    /// Union of the standalone symbols and the rule symbols, deduplicated in
    /// declaration order. Falls back to [`DEFAULT_SYMBOL`] when nothing is
    /// configured. The sort is stable so equal-length symbols keep their order.
    pub fn trigger_symbols(&self) -> Vec<String> {
        let mut symbols: Vec<String> = Vec::new();
        let declared = self
            .symbols
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .chain(self.scope_rules.iter().map(ScopeRule::symbol));
        for symbol in declared {
            if !symbols.iter().any(|s| s == symbol) {
                symbols.push(symbol.to_string());
            }
        }
        if symbols.is_empty() {
            symbols.push(DEFAULT_SYMBOL.to_string());
        }
        symbols.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));
        symbols
    }

    /// Rules that actually restrict `symbol`.
    pub fn active_rules<'a>(&'a self, symbol: &'a str) -> impl Iterator<Item = &'a ScopeRule> {
        self.scope_rules.iter().filter(move |r| !r.is_inert() && r.symbol() == symbol)
    }
}
