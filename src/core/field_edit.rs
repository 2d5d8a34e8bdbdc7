//! Edit state machine for the numeric time fields.
//!
//! The controller owns the displayed draft text and decides when input is
//! committed to the store versus kept as transient typing. It is independent
//! of the UI toolkit: the component layer classifies each change event into
//! an [`EditKind`] (or a dedicated stepper event) before calling in, and
//! executes the returned [`FieldEffect`].

use crate::constants::STEP;
use crate::utils::parse_time_input;

/// Classification of a change event, decided by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// Keystroke-driven insertion. Updates the draft only.
    Insert,
    /// Keystroke-driven deletion. Updates the draft only.
    Delete,
    /// Value injected by something other than typing. Commits immediately.
    Programmatic,
}

/// Classifies a change event by comparing the previous draft with the new
/// field text. Stepper interactions never reach this path; they arrive as
/// explicit [`FieldEditState::step`] calls.
pub fn classify_edit(prev: &str, next: &str) -> EditKind {
    if next.len() < prev.len() {
        EditKind::Delete
    } else {
        EditKind::Insert
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Up,
    Down,
}

/// What the component layer must do after an event: push a raw value into
/// the store, re-select the field contents, and/or drop keyboard focus.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldEffect {
    pub commit: Option<String>,
    pub select_all: bool,
    pub release_focus: bool,
}

impl FieldEffect {
    fn none() -> Self {
        Self::default()
    }
}

/// Draft-vs-committed state for one numeric input.
///
/// Invariant: whenever the field is not being edited (after blur, Escape, or
/// an external committed-value change), `draft == committed.to_string()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEditState {
    committed: i64,
    draft: String,
}

impl FieldEditState {
    pub fn new(committed: i64) -> Self {
        Self {
            committed,
            draft: committed.to_string(),
        }
    }

    /// The text the input currently displays.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn committed(&self) -> i64 {
        self.committed
    }

    /// Reconciles with the store after a commit landed (from this field or
    /// anywhere else). Any change to the committed value replaces the draft,
    /// even mid-edit; an unchanged value leaves in-progress typing alone.
    pub fn sync_committed(&mut self, value: i64) {
        if value == self.committed {
            return;
        }
        self.committed = value;
        self.draft = value.to_string();
    }

    /// A change event from the input, already classified.
    pub fn change(&mut self, kind: EditKind, text: &str) -> FieldEffect {
        match kind {
            EditKind::Programmatic => FieldEffect {
                commit: Some(text.to_string()),
                select_all: true,
                ..FieldEffect::none()
            },
            EditKind::Insert if text.is_empty() => {
                // Composed (IME) input can emit an empty insert; keep the
                // prior draft.
                FieldEffect::none()
            }
            EditKind::Insert | EditKind::Delete => {
                self.draft = text.to_string();
                FieldEffect::none()
            }
        }
    }

    /// Stepper interaction (arrow key or button). Steps the parsed draft if
    /// the user has typed one, otherwise the committed value, and commits
    /// the result immediately.
    pub fn step(&self, direction: StepDirection) -> FieldEffect {
        let base = parse_time_input(&self.draft).unwrap_or(self.committed as f64);
        let next = match direction {
            StepDirection::Up => base + STEP as f64,
            StepDirection::Down => base - STEP as f64,
        };
        FieldEffect {
            commit: Some(next.to_string()),
            select_all: true,
            ..FieldEffect::none()
        }
    }

    /// Focus gained: select the whole content so the next keystroke
    /// replaces it.
    pub fn focus(&self) -> FieldEffect {
        FieldEffect {
            select_all: true,
            ..FieldEffect::none()
        }
    }

    /// Enter pressed. An empty draft restores the committed value instead
    /// of committing; both branches drop focus.
    pub fn submit(&mut self) -> FieldEffect {
        if self.draft.is_empty() {
            self.draft = self.committed.to_string();
            return FieldEffect {
                release_focus: true,
                ..FieldEffect::none()
            };
        }
        FieldEffect {
            commit: Some(self.draft.clone()),
            release_focus: true,
            ..FieldEffect::none()
        }
    }

    /// Escape pressed: discard the draft, revert to the committed value,
    /// and drop focus. The store is never touched.
    pub fn cancel(&mut self) -> FieldEffect {
        self.draft = self.committed.to_string();
        FieldEffect {
            release_focus: true,
            ..FieldEffect::none()
        }
    }

    /// Focus lost by any means other than Enter/Escape (e.g. clicking
    /// away). Uncommitted text is discarded; there is no commit-on-blur.
    pub fn blur(&mut self) {
        self.draft = self.committed.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TimelineStore;

    #[test]
    fn test_typing_updates_draft_without_commit() {
        let mut field = FieldEditState::new(0);
        let effect = field.change(EditKind::Insert, "15");
        assert_eq!(effect, FieldEffect::none());
        assert_eq!(field.draft(), "15");
        assert_eq!(field.committed(), 0);
    }

    #[test]
    fn test_delete_to_empty_keeps_empty_draft() {
        let mut field = FieldEditState::new(400);
        field.change(EditKind::Delete, "");
        assert_eq!(field.draft(), "");
    }

    #[test]
    fn test_empty_insert_is_ignored() {
        let mut field = FieldEditState::new(400);
        field.change(EditKind::Insert, "12");
        let effect = field.change(EditKind::Insert, "");
        assert_eq!(effect, FieldEffect::none());
        assert_eq!(field.draft(), "12");
    }

    #[test]
    fn test_programmatic_change_commits_immediately() {
        let mut field = FieldEditState::new(0);
        let effect = field.change(EditKind::Programmatic, "250");
        assert_eq!(effect.commit.as_deref(), Some("250"));
        assert!(effect.select_all);
        assert!(!effect.release_focus);
    }

    #[test]
    fn test_submit_commits_draft_and_releases_focus() {
        let mut field = FieldEditState::new(0);
        field.change(EditKind::Insert, "1500");
        let effect = field.submit();
        assert_eq!(effect.commit.as_deref(), Some("1500"));
        assert!(effect.release_focus);
    }

    #[test]
    fn test_submit_on_empty_restores_committed() {
        let mut field = FieldEditState::new(700);
        field.change(EditKind::Delete, "");
        let effect = field.submit();
        assert_eq!(effect.commit, None);
        assert!(effect.release_focus);
        assert_eq!(field.draft(), "700");
    }

    #[test]
    fn test_escape_reverts_draft() {
        // Revert law: typed text disappears, nothing is committed.
        let mut field = FieldEditState::new(300);
        field.change(EditKind::Insert, "999");
        let effect = field.cancel();
        assert_eq!(effect.commit, None);
        assert!(effect.release_focus);
        assert_eq!(field.draft(), "300");
        assert_eq!(field.committed(), 300);
    }

    #[test]
    fn test_blur_reverts_draft_without_commit() {
        // Blur law: clicking away discards in-progress typing.
        let mut field = FieldEditState::new(300);
        field.change(EditKind::Insert, "12xyz");
        field.blur();
        assert_eq!(field.draft(), "300");
        assert_eq!(field.committed(), 300);
    }

    #[test]
    fn test_escape_reverts_to_live_committed_value() {
        // The committed value moved mid-edit (e.g. a duration commit clamped
        // the playhead); Escape reverts to the live value, not the value at
        // focus time.
        let mut field = FieldEditState::new(1500);
        field.change(EditKind::Insert, "1800");
        field.sync_committed(1000);
        assert_eq!(field.draft(), "1000");
        field.change(EditKind::Insert, "42");
        field.cancel();
        assert_eq!(field.draft(), "1000");
    }

    #[test]
    fn test_external_change_replaces_draft_mid_edit() {
        let mut field = FieldEditState::new(0);
        field.change(EditKind::Insert, "55");
        field.sync_committed(120);
        assert_eq!(field.draft(), "120");
    }

    #[test]
    fn test_unchanged_sync_preserves_typing() {
        let mut field = FieldEditState::new(120);
        field.change(EditKind::Insert, "55");
        field.sync_committed(120);
        assert_eq!(field.draft(), "55");
    }

    #[test]
    fn test_step_from_committed_value() {
        let mut field = FieldEditState::new(100);
        let effect = field.step(StepDirection::Up);
        assert_eq!(effect.commit.as_deref(), Some("110"));
        assert!(effect.select_all);
        let effect = field.step(StepDirection::Down);
        assert_eq!(effect.commit.as_deref(), Some("90"));
    }

    #[test]
    fn test_step_uses_typed_draft() {
        let mut field = FieldEditState::new(100);
        field.change(EditKind::Insert, "50");
        let effect = field.step(StepDirection::Up);
        assert_eq!(effect.commit.as_deref(), Some("60"));
    }

    #[test]
    fn test_step_from_unparseable_draft_falls_back_to_committed() {
        let mut field = FieldEditState::new(100);
        field.change(EditKind::Insert, "abc");
        let effect = field.step(StepDirection::Down);
        assert_eq!(effect.commit.as_deref(), Some("90"));
    }

    #[test]
    fn test_focus_selects_all() {
        let mut field = FieldEditState::new(0);
        assert!(field.focus().select_all);
    }

    #[test]
    fn test_commit_flow_normalizes_display() {
        // Typed decimal commits through the store and the field re-displays
        // the rounded value.
        let mut store = TimelineStore::new();
        let mut field = FieldEditState::new(store.current_time());
        field.change(EditKind::Insert, "15.7");
        let effect = field.submit();
        store.set_current_time(effect.commit.unwrap());
        field.sync_committed(store.current_time());
        assert_eq!(field.draft(), "20");
    }

    #[test]
    fn test_rejected_commit_reverts_on_blur() {
        // Garbage on Enter: the store no-ops, focus is released, and the
        // blur that follows restores the committed text.
        let mut store = TimelineStore::new();
        store.set_current_time("500");
        let mut field = FieldEditState::new(store.current_time());
        field.change(EditKind::Insert, "12abc");
        let effect = field.submit();
        store.set_current_time(effect.commit.unwrap());
        assert_eq!(store.current_time(), 500);
        field.sync_committed(store.current_time());
        field.blur();
        assert_eq!(field.draft(), "500");
    }

    #[test]
    fn test_classify_edit() {
        assert_eq!(classify_edit("12", "123"), EditKind::Insert);
        assert_eq!(classify_edit("123", "12"), EditKind::Delete);
        assert_eq!(classify_edit("", ""), EditKind::Insert);
        assert_eq!(classify_edit("12", "45"), EditKind::Insert);
    }
}
