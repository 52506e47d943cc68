//! Signal sequence data for datapath macros.
//!
//! This module defines the data model consumed by the playback engine:
//! - [`SignalId`]: an opaque handle to one highlightable diagram element.
//! - [`Cycle`] and [`Sequence`]: the per-cycle signal script of a macro.
//! - [`MacroData`] and [`MacroTable`]: the canned macros, keyed by mnemonic.
//!
//! The bundled LC-3 instruction macros are available through
//! [`lc3_macro_table`]. Tables are constructed once and never mutated by
//! playback.

use std::borrow::Cow;
use std::collections::BTreeSet;

use crate::pseudocode::PseudocodeState;

mod lc3;
pub use lc3::lc3_macro_table;

/// An opaque identifier for one highlightable wire, shape, or label in the
/// datapath diagram (e.g. `"GatePC (shape)"`, `"PC to BUS"`, `"1 (LD.PC)"`).
///
/// The playback engine assumes no internal structure; the identifier is
/// resolved to a visual element by the view. The macro table and the diagram
/// registry must agree on this namespace (see [`crate::diagram`]).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct SignalId(Cow<'static, str>);

impl SignalId {
    /// Gets the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl From<&'static str> for SignalId {
    fn from(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }
}
impl From<String> for SignalId {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}
impl AsRef<str> for SignalId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::fmt::Display for SignalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signals simultaneously active during one clock cycle of a macro.
///
/// Order within a cycle is authoring order; all of a cycle's signals stay lit
/// together until the cycle boundary clears them. An empty cycle is a legal
/// no-op step.
pub type Cycle = Vec<SignalId>;

/// The full multi-cycle signal script for one macro.
///
/// An empty sequence is legal and plays back as nothing.
pub type Sequence = Vec<Cycle>;

/// One macro's worth of visualization data.
#[derive(Clone, PartialEq, Debug)]
pub struct MacroData {
    /// The display label of the macro (e.g. `"ADD (imm)"`).
    pub label: String,
    /// The annotated pseudocode of the macro, if it has any.
    pub pseudocode: Option<PseudocodeState>,
    /// The signal script: one entry per clock cycle.
    pub sequence: Sequence,
}

/// An immutable mapping from macro key (instruction mnemonic) to
/// [`MacroData`], preserving authoring order for enumeration.
///
/// Lookup with an unknown key is a caller mistake, not an error; it simply
/// returns `None` and callers are expected to no-op.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct MacroTable {
    entries: Vec<(Box<str>, MacroData)>,
}

impl MacroTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a macro to the table, replacing any macro with the same key.
    pub fn insert(&mut self, key: impl Into<Box<str>>, data: MacroData) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = data,
            None => self.entries.push((key, data)),
        }
    }

    /// Looks up a macro by key.
    pub fn lookup(&self, key: &str) -> Option<&MacroData> {
        self.entries.iter()
            .find(|(k, _)| &**k == key)
            .map(|(_, data)| data)
    }

    /// Iterates over `(key, data)` pairs in authoring order.
    ///
    /// This is the enumeration used to populate a macro selection control.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MacroData)> {
        self.entries.iter().map(|(k, data)| (&**k, data))
    }

    /// Iterates over macro keys in authoring order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| &**k)
    }

    /// The number of macros in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no macros.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The set of every signal id referenced by any macro in the table.
    ///
    /// Useful for checking the table against a diagram's element registry.
    pub fn signal_ids(&self) -> BTreeSet<&SignalId> {
        self.entries.iter()
            .flat_map(|(_, data)| &data.sequence)
            .flatten()
            .collect()
    }
}

impl FromIterator<(Box<str>, MacroData)> for MacroTable {
    fn from_iter<T: IntoIterator<Item = (Box<str>, MacroData)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (key, data) in iter {
            table.insert(key, data);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram;

    fn data(label: &str, sequence: &[&[&'static str]]) -> MacroData {
        MacroData {
            label: label.to_string(),
            pseudocode: None,
            sequence: sequence.iter()
                .map(|cycle| cycle.iter().copied().map(SignalId::from).collect())
                .collect(),
        }
    }

    #[test]
    fn lookup_hits_and_misses() {
        let mut table = MacroTable::new();
        table.insert("FETCH", data("Fetch", &[&["a", "b"]]));

        assert_eq!(table.lookup("FETCH").map(|m| &*m.label), Some("Fetch"));
        assert_eq!(table.lookup("NONEXISTENT_KEY"), None);
    }

    #[test]
    fn iteration_preserves_authoring_order() {
        let mut table = MacroTable::new();
        table.insert("FETCH", data("Fetch", &[]));
        table.insert("DECODE", data("Decode", &[]));
        table.insert("ADD_REG", data("ADD (reg)", &[]));

        let keys: Vec<_> = table.keys().collect();
        assert_eq!(keys, vec!["FETCH", "DECODE", "ADD_REG"]);
    }

    #[test]
    fn insert_replaces_existing_key_in_place() {
        let mut table = MacroTable::new();
        table.insert("BR", data("BR (taken)", &[]));
        table.insert("JMP", data("JMP", &[]));
        table.insert("BR", data("BR (always)", &[]));

        assert_eq!(table.len(), 2);
        assert_eq!(table.keys().next(), Some("BR"));
        assert_eq!(table.lookup("BR").map(|m| &*m.label), Some("BR (always)"));
    }

    #[test]
    fn lc3_table_has_all_macros() {
        let table = lc3_macro_table();
        let keys: Vec<_> = table.keys().collect();
        assert_eq!(keys, vec![
            "FETCH", "DECODE",
            "ADD_REG", "ADD_IMM", "AND_IMM", "AND_REG", "NOT",
            "LD", "LDI", "LDR", "ST", "STI", "STR", "LEA",
            "BR", "JMP", "JSR", "JSRR", "TRAP",
        ]);
    }

    #[test]
    fn lc3_fetch_structure() {
        let table = lc3_macro_table();
        let fetch = table.lookup("FETCH").expect("FETCH should be defined");

        assert_eq!(fetch.label, "Fetch");
        let cycle_lens: Vec<_> = fetch.sequence.iter().map(Vec::len).collect();
        assert_eq!(cycle_lens, vec![24, 16, 9]);
        assert!(fetch.pseudocode.is_some());
    }

    #[test]
    fn lc3_macros_are_nonempty_and_labeled() {
        let table = lc3_macro_table();
        for (key, data) in table.iter() {
            assert!(!data.label.is_empty(), "{key} has an empty label");
            assert!(!data.sequence.is_empty(), "{key} has no cycles");
            for (i, cycle) in data.sequence.iter().enumerate() {
                assert!(!cycle.is_empty(), "{key} cycle {i} is empty");
            }
        }
    }

    // Macro data and the diagram evolve somewhat independently, so the one
    // contract between them is checked here: every id a macro references
    // must resolve to a real diagram element.
    #[test]
    fn lc3_signal_ids_resolve_to_diagram_elements() {
        let table = lc3_macro_table();
        let unresolved: Vec<_> = table.signal_ids()
            .into_iter()
            .filter(|id| !diagram::is_element(id.as_str()))
            .collect();
        assert!(unresolved.is_empty(), "unresolved signal ids: {unresolved:?}");
    }

    #[test]
    fn lc3_pseudocode_ranges_are_sorted_and_disjoint() {
        let table = lc3_macro_table();
        for (key, data) in table.iter() {
            let Some(pseudocode) = &data.pseudocode else { continue };
            let ok = pseudocode.highlights()
                .windows(2)
                .all(|w| w[0].end <= w[1].start);
            assert!(ok, "{key} has overlapping or unsorted highlights");

            for hl in pseudocode.highlights() {
                assert!(hl.end <= pseudocode.source().len(), "{key} range out of bounds");
            }
        }
    }
}
