//! Annotated pseudocode for macro playback.
//!
//! Each macro can carry a [`PseudocodeState`]: a block of pseudocode text
//! plus a list of [`HighlightRange`]s tying spans of that text to the cycle
//! in which they are "executed". The presentation layer colors each span by
//! its cycle number as playback advances; the playback engine itself never
//! reads this data.
//!
//! States are authored through [`PseudocodeBuilder`], which appends plain
//! text and highlighted spans in document order:
//! ```
//! use lc3_wirevis::pseudocode::{CycleRef, PseudocodeState};
//!
//! let state = PseudocodeState::builder()
//!     .span("IR = ", 2).span("mem[", 1).span("PC", 0).span("]", 1).span(";", 2)
//!     .newline()
//!     .span("PC = PC + 1;", 0)
//!     .build();
//!
//! assert_eq!(state.source(), "IR = mem[PC];\nPC = PC + 1;");
//! assert_eq!(state.highlights()[2].cycle, CycleRef::Cycle(0));
//! ```

/// The cycle a highlighted span belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CycleRef {
    /// The span is live during this cycle index of the macro's sequence.
    Cycle(usize),
    /// The span belongs to a branch this macro variant does not take
    /// (e.g., the immediate arm of ADD in the register variant).
    /// Rendered in a distinct "not taken" style.
    Disabled,
}
impl From<usize> for CycleRef {
    fn from(value: usize) -> Self {
        Self::Cycle(value)
    }
}

/// A half-open index range of the pseudocode source, tagged with its cycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct HighlightRange {
    /// Start of the highlight range.
    pub start: usize,
    /// End of the highlight range (exclusive).
    pub end: usize,
    /// Which cycle this range is tied to.
    pub cycle: CycleRef,
}

/// Pseudocode text with its cycle annotations.
///
/// Invariant: `highlights` is sorted by `start` and pairwise disjoint
/// (adjacent ranges are fine). This holds by construction, since the only way
/// to build a state is by appending segments through [`PseudocodeBuilder`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PseudocodeState {
    source: String,
    highlights: Vec<HighlightRange>,
}

impl PseudocodeState {
    /// Creates a builder for a new pseudocode state.
    pub fn builder() -> PseudocodeBuilder {
        PseudocodeBuilder {
            source: String::new(),
            highlights: Vec::new(),
        }
    }

    /// The pseudocode text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The cycle annotations, sorted by start index.
    pub fn highlights(&self) -> &[HighlightRange] {
        &self.highlights
    }
}

/// Builds a [`PseudocodeState`] by appending segments in document order.
#[derive(Debug)]
pub struct PseudocodeBuilder {
    source: String,
    highlights: Vec<HighlightRange>,
}

impl PseudocodeBuilder {
    /// Appends unhighlighted text.
    pub fn plain(mut self, text: &str) -> Self {
        self.source.push_str(text);
        self
    }

    /// Appends a line break.
    pub fn newline(self) -> Self {
        self.plain("\n")
    }

    /// Appends a highlighted span tied to a cycle.
    ///
    /// Spans may not cross lines; the renderer highlights per line.
    pub fn span(mut self, text: &str, cycle: impl Into<CycleRef>) -> Self {
        debug_assert!(!text.contains('\n'), "highlight spans may not cross lines");

        let start = self.source.len();
        self.source.push_str(text);
        self.highlights.push(HighlightRange {
            start,
            end: self.source.len(),
            cycle: cycle.into(),
        });
        self
    }

    /// Appends a span for a branch this macro variant does not take.
    pub fn disabled(self, text: &str) -> Self {
        self.span(text, CycleRef::Disabled)
    }

    /// Finishes the state.
    pub fn build(self) -> PseudocodeState {
        PseudocodeState {
            source: self.source,
            highlights: self.highlights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranges_sorted_and_disjoint(state: &PseudocodeState) -> bool {
        state.highlights().windows(2).all(|w| w[0].end <= w[1].start)
    }

    #[test]
    fn spans_interleave_with_plain_text() {
        let state = PseudocodeState::builder()
            .plain("if (bit[5] == 0)\n    ")
            .span("DR = SR1 + SR2;", 0)
            .plain("\nelse\n    ")
            .disabled("DR = SR1 + SEXT(imm5);")
            .newline()
            .span("setcc();", 0)
            .build();

        assert_eq!(
            state.source(),
            "if (bit[5] == 0)\n    DR = SR1 + SR2;\nelse\n    DR = SR1 + SEXT(imm5);\nsetcc();"
        );
        assert!(ranges_sorted_and_disjoint(&state));

        let spans: Vec<_> = state.highlights()
            .iter()
            .map(|hl| (&state.source()[hl.start..hl.end], hl.cycle))
            .collect();
        assert_eq!(spans, vec![
            ("DR = SR1 + SR2;", CycleRef::Cycle(0)),
            ("DR = SR1 + SEXT(imm5);", CycleRef::Disabled),
            ("setcc();", CycleRef::Cycle(0)),
        ]);
    }

    #[test]
    fn adjacent_spans_are_allowed() {
        let state = PseudocodeState::builder()
            .span("DR = ", 2)
            .span("mem[", 1)
            .span("PC", 0)
            .span("]", 1)
            .span(";", 2)
            .build();

        assert_eq!(state.source(), "DR = mem[PC];");
        assert_eq!(state.highlights().len(), 5);
        assert!(ranges_sorted_and_disjoint(&state));
    }

    #[test]
    fn empty_builder_is_empty_state() {
        let state = PseudocodeState::builder().build();
        assert_eq!(state.source(), "");
        assert!(state.highlights().is_empty());
    }
}
