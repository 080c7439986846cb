//! Service layer for task creation, editing, ordering and snapshot transfer.

use crate::task::{
    codec::{self, ExportError, ImportError},
    domain::{Category, DueDate, OverdueNotice, Priority, Task, TaskDomainError, TaskId, TaskName},
    ports::{TaskStore, TaskStoreError},
    services::DueDateMonitor,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    name: String,
    category: String,
    priority: String,
    due_date: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            priority: priority.into(),
            due_date: None,
        }
    }

    /// Sets the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }
}

/// Requested change to a task's due date.
///
/// Removal is an explicit signal so that "leave it alone" and "remove it"
/// cannot be confused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DueDateChange {
    /// Keep the current due date.
    #[default]
    Keep,
    /// Remove the due date.
    Clear,
    /// Replace the due date with the given value.
    Set(String),
}

/// Request payload for editing a task.
///
/// Fields left unset keep their current values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    id: TaskId,
    name: Option<String>,
    category: Option<String>,
    priority: Option<String>,
    due_date: DueDateChange,
}

impl UpdateTaskRequest {
    /// Creates an edit request that changes nothing yet.
    #[must_use]
    pub fn new(id: TaskId) -> Self {
        Self {
            id,
            name: None,
            category: None,
            priority: None,
            due_date: DueDateChange::Keep,
        }
    }

    /// Sets a new name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a new category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets a new priority.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets a new due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = DueDateChange::Set(due_date.into());
        self
    }

    /// Removes the due date.
    #[must_use]
    pub fn clear_due_date(mut self) -> Self {
        self.due_date = DueDateChange::Clear;
        self
    }
}

/// Validated form of [`UpdateTaskRequest`].
struct TaskEdit {
    name: Option<TaskName>,
    category: Option<Category>,
    priority: Option<Priority>,
    due_date: Option<Option<DueDate>>,
}

impl TaskEdit {
    fn parse(request: UpdateTaskRequest) -> Result<(TaskId, Self), TaskDomainError> {
        let edit = Self {
            name: request.name.map(TaskName::new).transpose()?,
            category: request
                .category
                .as_deref()
                .map(Category::try_from)
                .transpose()?,
            priority: request
                .priority
                .as_deref()
                .map(Priority::try_from)
                .transpose()?,
            due_date: match request.due_date {
                DueDateChange::Keep => None,
                DueDateChange::Clear => Some(None),
                DueDateChange::Set(raw) => Some(Some(DueDate::parse(raw)?)),
            },
        };
        Ok((request.id, edit))
    }

    fn apply(self, task: &mut Task) {
        if let Some(name) = self.name {
            task.rename(name);
        }
        if let Some(category) = self.category {
            task.set_category(category);
        }
        if let Some(priority) = self.priority {
            task.set_priority(priority);
        }
        if let Some(due_date) = self.due_date {
            task.set_due_date(due_date);
        }
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Input failed domain validation.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),
    /// No task has the given identifier.
    #[error("task {0} not found")]
    NotFound(TaskId),
    /// A position lies outside the collection.
    #[error("position {index} is out of range for {len} task(s)")]
    OutOfRange {
        /// Requested position.
        index: usize,
        /// Number of tasks in the collection.
        len: usize,
    },
    /// An import payload was rejected.
    #[error(transparent)]
    MalformedImport(#[from] ImportError),
    /// The snapshot could not be exported.
    #[error(transparent)]
    Export(#[from] ExportError),
    /// The store failed to read or write the snapshot.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Every mutation loads the current snapshot, validates, computes the whole
/// new sequence and hands it to [`TaskStore::replace_all`]. Nothing is
/// written unless every step before the write succeeded.
#[derive(Clone)]
pub struct TaskLifecycleService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> TaskLifecycleService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Reads the snapshot for display at startup.
    ///
    /// Store failures degrade to an empty collection.
    pub async fn load(&self) -> Vec<Task> {
        match self.store.load().await {
            Ok(tasks) => tasks,
            Err(err) => {
                warn!(error = %err, "task snapshot unavailable, starting empty");
                Vec::new()
            }
        }
    }

    /// Returns the current ordered snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Store`] when the snapshot cannot be read.
    pub async fn list(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.store.load().await?)
    }

    /// Returns the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task matches, or
    /// [`TaskLifecycleError::Store`] when the snapshot cannot be read.
    pub async fn get(&self, id: &TaskId) -> TaskLifecycleResult<Task> {
        self.store
            .load()
            .await?
            .into_iter()
            .find(|task| task.id() == id)
            .ok_or_else(|| TaskLifecycleError::NotFound(id.clone()))
    }

    /// Creates a task and appends it to the end of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] when the name is blank or a
    /// field is not a valid value, or [`TaskLifecycleError::Store`] when the
    /// snapshot cannot be read or written.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let name = TaskName::new(request.name)?;
        let category = Category::try_from(request.category.as_str())?;
        let priority = Priority::try_from(request.priority.as_str())?;
        let due_date = request.due_date.map(DueDate::parse).transpose()?;

        let mut tasks = self.store.load().await?;
        let task = Task::new(name, category, priority, due_date);
        tasks.push(task.clone());
        self.store.replace_all(&tasks).await?;

        info!(task_id = %task.id(), position = tasks.len() - 1, "created task");
        Ok(task)
    }

    /// Applies the provided field changes to an existing task.
    ///
    /// The task keeps its identifier and position.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] for invalid field values,
    /// [`TaskLifecycleError::NotFound`] when the task does not exist, or
    /// [`TaskLifecycleError::Store`] on persistence failure.
    pub async fn update(&self, request: UpdateTaskRequest) -> TaskLifecycleResult<Task> {
        let (id, edit) = TaskEdit::parse(request)?;

        let mut tasks = self.store.load().await?;
        let task = tasks
            .iter_mut()
            .find(|task| task.id() == &id)
            .ok_or_else(|| TaskLifecycleError::NotFound(id.clone()))?;
        edit.apply(task);
        let updated = task.clone();
        self.store.replace_all(&tasks).await?;

        info!(task_id = %id, "updated task");
        Ok(updated)
    }

    /// Removes a task permanently.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// or [`TaskLifecycleError::Store`] on persistence failure.
    pub async fn delete(&self, id: &TaskId) -> TaskLifecycleResult<()> {
        let mut tasks = self.store.load().await?;
        let position = position_of(&tasks, id)?;
        tasks.remove(position);
        self.store.replace_all(&tasks).await?;

        info!(task_id = %id, "deleted task");
        Ok(())
    }

    /// Moves a task to `new_index`, shifting the tasks in between by one.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::OutOfRange`] when `new_index` is not a
    /// valid position, [`TaskLifecycleError::NotFound`] when the task does
    /// not exist, or [`TaskLifecycleError::Store`] on persistence failure.
    pub async fn reorder(&self, id: &TaskId, new_index: usize) -> TaskLifecycleResult<()> {
        let mut tasks = self.store.load().await?;
        ensure_in_range(new_index, tasks.len())?;
        let position = position_of(&tasks, id)?;
        self.move_within(&mut tasks, position, new_index).await
    }

    /// Moves the task at position `from` to position `to`.
    ///
    /// This is the shape in which drag-and-drop gestures report a move.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::OutOfRange`] when either position is
    /// invalid, or [`TaskLifecycleError::Store`] on persistence failure.
    pub async fn move_position(&self, from: usize, to: usize) -> TaskLifecycleResult<()> {
        let mut tasks = self.store.load().await?;
        ensure_in_range(from, tasks.len())?;
        ensure_in_range(to, tasks.len())?;
        self.move_within(&mut tasks, from, to).await
    }

    async fn move_within(
        &self,
        tasks: &mut Vec<Task>,
        from: usize,
        to: usize,
    ) -> TaskLifecycleResult<()> {
        if from == to {
            debug!(position = from, "task already in place");
            return Ok(());
        }
        let task = tasks.remove(from);
        let id = task.id().clone();
        tasks.insert(to, task);
        self.store.replace_all(tasks).await?;

        info!(task_id = %id, from, to, "reordered task");
        Ok(())
    }

    /// Serialises the current snapshot in the export format.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Store`] when the snapshot cannot be read,
    /// or [`TaskLifecycleError::Export`] when serialisation fails.
    pub async fn export_snapshot(&self) -> TaskLifecycleResult<Vec<u8>> {
        let tasks = self.store.load().await?;
        Ok(codec::export(&tasks)?)
    }

    /// Replaces the whole collection with the tasks in `bytes`.
    ///
    /// The payload is validated in full before anything is written, so a
    /// rejected import leaves the stored collection untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::MalformedImport`] when the payload is
    /// rejected, or [`TaskLifecycleError::Store`] when the write fails.
    pub async fn import_snapshot(&self, bytes: &[u8]) -> TaskLifecycleResult<Vec<Task>> {
        let tasks = codec::import(bytes)?;
        self.store.replace_all(&tasks).await?;

        info!(count = tasks.len(), "imported task snapshot");
        Ok(tasks)
    }

    /// Scans the current snapshot for tasks that became overdue.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Store`] when the snapshot cannot be read.
    pub async fn check_due_dates(
        &self,
        monitor: &mut DueDateMonitor,
    ) -> TaskLifecycleResult<Vec<OverdueNotice>> {
        let tasks = self.store.load().await?;
        Ok(monitor.scan(&tasks, self.clock.utc()))
    }
}

fn position_of(tasks: &[Task], id: &TaskId) -> TaskLifecycleResult<usize> {
    tasks
        .iter()
        .position(|task| task.id() == id)
        .ok_or_else(|| TaskLifecycleError::NotFound(id.clone()))
}

const fn ensure_in_range(index: usize, len: usize) -> TaskLifecycleResult<()> {
    if index >= len {
        return Err(TaskLifecycleError::OutOfRange { index, len });
    }
    Ok(())
}
