//! Controller state and the pure transitions applied after a remote call resolves.

use crate::task::Task;

/// Transient search results laid over the canonical list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchOverlay {
    /// No search in effect; the canonical list is shown.
    #[default]
    Inactive,
    /// Results of the last search, possibly empty.
    Active(Vec<Task>),
}

impl SearchOverlay {
    /// Whether search results are currently shown.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }
}

/// Lifecycle of the controller's task list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Waiting for the initial listing.
    #[default]
    Loading,
    /// The initial listing failed; holds the error message.
    LoadFailed(String),
    /// The list is loaded.
    Ready {
        /// Canonical list in display order.
        tasks: Vec<Task>,
        /// Search overlay, independent of `tasks`.
        overlay: SearchOverlay,
    },
}

/// What the view layer should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Still loading.
    Loading,
    /// Loading failed with this message.
    LoadFailed(String),
    /// The canonical list.
    Tasks(Vec<Task>),
    /// Non-empty search results.
    Hits(Vec<Task>),
    /// A search is active but matched nothing.
    NoMatches,
}

/// State of the task creation form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskForm {
    /// Whether the form is shown.
    pub open: bool,
    /// Title field contents.
    pub title: String,
    /// Description field contents.
    pub description: String,
}

impl ViewState {
    /// A loaded state with no search in effect.
    #[must_use]
    pub fn ready(tasks: Vec<Task>) -> Self {
        Self::Ready { tasks, overlay: SearchOverlay::Inactive }
    }

    /// Whether the list is loaded.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    /// The canonical list, if loaded.
    #[must_use]
    pub fn tasks(&self) -> Option<&[Task]> {
        match self {
            Self::Ready { tasks, .. } => Some(tasks),
            _ => None,
        }
    }

    /// The overlay, if loaded.
    #[must_use]
    pub fn overlay(&self) -> Option<&SearchOverlay> {
        match self {
            Self::Ready { overlay, .. } => Some(overlay),
            _ => None,
        }
    }

    /// Looks up a task in the canonical list.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Task> {
        self.tasks()?.iter().find(|task| task.id == id)
    }

    /// Appends a task confirmed by the store.
    ///
    /// An entry with the same id is replaced in place so ids stay unique.
    pub fn apply_created(&mut self, task: Task) {
        if let Self::Ready { tasks, .. } = self {
            match tasks.iter_mut().find(|existing| existing.id == task.id) {
                Some(existing) => *existing = task,
                None => tasks.push(task),
            }
        }
    }

    /// Sets `completed` on the canonical entry. Returns false if it is gone.
    pub fn apply_completed(&mut self, id: &str, completed: bool) -> bool {
        let Self::Ready { tasks, .. } = self else {
            return false;
        };
        match tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = completed;
                true
            }
            None => false,
        }
    }

    /// Removes the canonical entry. Returns false if it was already gone.
    pub fn apply_deleted(&mut self, id: &str) -> bool {
        let Self::Ready { tasks, .. } = self else {
            return false;
        };
        let before = tasks.len();
        tasks.retain(|task| task.id != id);
        tasks.len() != before
    }

    /// Replaces the overlay. Ignored until the list is loaded.
    pub fn set_overlay(&mut self, next: SearchOverlay) {
        if let Self::Ready { overlay, .. } = self {
            *overlay = next;
        }
    }

    /// Projects the state onto what should be displayed.
    #[must_use]
    pub fn view(&self) -> View {
        match self {
            Self::Loading => View::Loading,
            Self::LoadFailed(message) => View::LoadFailed(message.clone()),
            Self::Ready { tasks, overlay: SearchOverlay::Inactive } => View::Tasks(tasks.clone()),
            Self::Ready { overlay: SearchOverlay::Active(hits), .. } if hits.is_empty() => {
                View::NoMatches
            }
            Self::Ready { overlay: SearchOverlay::Active(hits), .. } => View::Hits(hits.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, completed: bool) -> Task {
        Task {
            id: id.into(),
            title: format!("task {id}"),
            description: String::new(),
            created_at: "2024-03-01T10:00:00Z".into(),
            completed,
        }
    }

    #[test]
    fn created_task_is_appended_in_order() {
        let mut state = ViewState::ready(vec![task("a", false)]);
        state.apply_created(task("b", false));
        let ids: Vec<_> = state.tasks().unwrap().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn created_task_with_known_id_replaces_entry() {
        let mut state = ViewState::ready(vec![task("a", false), task("b", false)]);
        state.apply_created(task("a", true));
        let tasks = state.tasks().unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0], task("a", true));
    }

    #[test]
    fn completion_change_keeps_other_fields() {
        let mut state = ViewState::ready(vec![task("a", false), task("b", false)]);
        assert!(state.apply_completed("b", true));
        assert_eq!(state.tasks().unwrap(), [task("a", false), task("b", true)]);
    }

    #[test]
    fn completion_change_on_missing_task_is_noop() {
        let mut state = ViewState::ready(vec![task("a", false)]);
        assert!(!state.apply_completed("zzz", true));
        assert_eq!(state, ViewState::ready(vec![task("a", false)]));
    }

    #[test]
    fn delete_reports_whether_anything_was_removed() {
        let mut state = ViewState::ready(vec![task("a", false)]);
        assert!(state.apply_deleted("a"));
        assert!(!state.apply_deleted("a"));
    }

    #[test]
    fn transitions_do_nothing_before_load() {
        let mut state = ViewState::Loading;
        state.apply_created(task("a", false));
        state.set_overlay(SearchOverlay::Active(vec![]));
        assert_eq!(state, ViewState::Loading);
        assert!(state.find("a").is_none());
    }

    #[test]
    fn overlay_mutations_leave_canonical_list_alone() {
        let mut state = ViewState::ready(vec![task("a", false)]);
        state.set_overlay(SearchOverlay::Active(vec![task("a", false)]));
        state.apply_completed("a", true);

        assert_eq!(state.overlay(), Some(&SearchOverlay::Active(vec![task("a", false)])));
        assert_eq!(state.find("a").map(|t| t.completed), Some(true));
    }

    #[test]
    fn view_distinguishes_empty_hits_from_inactive() {
        let mut state = ViewState::ready(vec![]);
        assert_eq!(state.view(), View::Tasks(vec![]));

        state.set_overlay(SearchOverlay::Active(vec![]));
        assert_eq!(state.view(), View::NoMatches);

        state.set_overlay(SearchOverlay::Active(vec![task("h", false)]));
        assert_eq!(state.view(), View::Hits(vec![task("h", false)]));

        assert_eq!(ViewState::LoadFailed("down".into()).view(), View::LoadFailed("down".into()));
    }
}
