// To-do store: task list state, operations, persistence triggers

use crate::blob::BlobStore;
use crate::filter::FilterMode;
use crate::models::Task;
use eyre::{Context, Result};
use tracing::{debug, info, warn};

/// Fixed blob-store key the full task list is persisted under
pub const TASKS_KEY: &str = "tasks";

/// To-do list state with a pluggable persistence backend
///
/// `tasks` is the single source of truth; the filtered view and active count
/// are derived on demand and never separately mutated. Every mutating
/// operation rewrites the full serialized list through the blob store.
pub struct TodoStore<B: BlobStore> {
    blob: B,
    tasks: Vec<Task>,
    draft_text: String,
    filter_mode: FilterMode,
    next_id: u64,
}

impl<B: BlobStore> TodoStore<B> {
    /// Load the persisted task list, or start empty if none exists
    ///
    /// A malformed persisted blob is not an error: the store logs a warning
    /// and starts empty rather than propagating a parse failure.
    pub fn load(blob: B) -> Result<Self> {
        let tasks = match blob.get(TASKS_KEY)? {
            Some(json) => match serde_json::from_str::<Vec<Task>>(&json) {
                Ok(tasks) => tasks,
                Err(e) => {
                    warn!(error = ?e, "Persisted task list is malformed, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        // Seed the id counter past every persisted id
        let next_id = tasks.iter().map(|t| t.id).max().map_or(1, |max| max + 1);

        info!(count = tasks.len(), "Loaded task list");

        Ok(Self {
            blob,
            tasks,
            draft_text: String::new(),
            filter_mode: FilterMode::default(),
            next_id,
        })
    }

    /// Append a new task with the trimmed text
    ///
    /// Whitespace-only input is silently ignored. Returns the id of the new
    /// task, or None if nothing was added. Clears the draft text.
    pub fn add_task(&mut self, raw_text: &str) -> Result<Option<u64>> {
        let text = raw_text.trim();
        if text.is_empty() {
            debug!("add_task: ignoring empty text");
            return Ok(None);
        }

        let id = self.next_id;
        self.next_id += 1;

        self.tasks.push(Task::new(id, text));
        self.draft_text.clear();
        self.persist()?;

        Ok(Some(id))
    }

    /// Remove the task with the given id; no-op if absent
    pub fn remove_task(&mut self, id: u64) -> Result<()> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);

        if self.tasks.len() == before {
            debug!(id, "remove_task: no matching task");
            return Ok(());
        }

        self.persist()
    }

    /// Flip the completed flag on the task with the given id; no-op if absent
    pub fn toggle_task(&mut self, id: u64) -> Result<()> {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                self.persist()
            }
            None => {
                debug!(id, "toggle_task: no matching task");
                Ok(())
            }
        }
    }

    /// Set the active filter mode (transient, never persisted)
    pub fn set_filter(&mut self, mode: FilterMode) {
        self.filter_mode = mode;
    }

    pub fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    /// Set the in-progress new-task input (transient, never persisted)
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft_text = text.into();
    }

    pub fn draft(&self) -> &str {
        &self.draft_text
    }

    /// Full task list in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks matching the current filter mode, insertion order preserved
    pub fn filtered_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| self.filter_mode.matches(t))
            .collect()
    }

    /// Number of tasks not yet completed
    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.tasks).context("Failed to serialize task list")?;
        self.blob
            .set(TASKS_KEY, &json)
            .context("Failed to persist task list")?;
        debug!(count = self.tasks.len(), "Persisted task list");
        Ok(())
    }
}
