/*
[INPUT]:  Presentation-layer calls (refresh/create/toggle/remove/dismiss) and TaskApi results
[OUTPUT]: Local task collection mirroring the remote service, plus status snapshot
[POS]:    Sync layer - the task synchronizer
[UPDATE]: When adding operations or changing how results are applied
[UPDATE]: Track list/create activity with drop guards so cancelled calls release it
*/

use minitasks_adapter::{Task, TaskApi, TaskId, TasksError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::status::{Activity, Operation, OperationFailed, SyncSnapshot};

#[derive(Debug)]
struct SyncState {
    tasks: Vec<Task>,
    error: Option<OperationFailed>,
    draft: String,
}

impl SyncState {
    fn new() -> Self {
        Self {
            tasks: Vec::new(),
            error: None,
            draft: String::new(),
        }
    }

    fn fail(&mut self, operation: Operation, err: &TasksError) {
        let failure = OperationFailed::new(operation, err);
        warn!(
            %operation,
            status = ?err.status().map(|status| status.as_u16()),
            error = %err,
            "task operation failed"
        );
        self.error = Some(failure);
    }
}

#[derive(Debug, Clone, Copy)]
enum Concern {
    List,
    Create,
}

/// Outstanding list/create calls.
///
/// Kept under a std mutex, apart from the async state lock, so that
/// `InFlight::drop` can release a call synchronously.
#[derive(Debug)]
struct Activities {
    list: Activity,
    create: Activity,
}

impl Activities {
    fn get_mut(&mut self, concern: Concern) -> &mut Activity {
        match concern {
            Concern::List => &mut self.list,
            Concern::Create => &mut self.create,
        }
    }
}

fn lock_activities(activities: &Mutex<Activities>) -> MutexGuard<'_, Activities> {
    activities.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One outstanding call of a concern; finishing happens on drop, so a call
/// whose future is dropped mid-request is released too.
struct InFlight {
    activities: Arc<Mutex<Activities>>,
    concern: Concern,
}

impl InFlight {
    fn begin(activities: &Arc<Mutex<Activities>>, concern: Concern) -> Self {
        lock_activities(activities).get_mut(concern).begin();
        Self {
            activities: Arc::clone(activities),
            concern,
        }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        lock_activities(&self.activities)
            .get_mut(self.concern)
            .finish();
    }
}

/// Keeps a local task list in step with the remote task service.
///
/// Every mutation is applied only after the service confirms it, using the
/// entity the service returned. Operations take `&self` and may overlap;
/// results are matched to local entries by id, never by position. The state
/// lock is never held across a network call.
///
/// Cloning yields another handle onto the same state.
#[derive(Clone)]
pub struct TaskSync {
    api: Arc<dyn TaskApi>,
    state: Arc<RwLock<SyncState>>,
    activities: Arc<Mutex<Activities>>,
}

impl TaskSync {
    /// Start with an empty collection that reports `loading` until the first
    /// refresh resolves
    pub fn new(api: Arc<dyn TaskApi>) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(SyncState::new())),
            activities: Arc::new(Mutex::new(Activities {
                list: Activity::Pending,
                create: Activity::Idle,
            })),
        }
    }

    pub async fn snapshot(&self) -> SyncSnapshot {
        let state = self.state.read().await;
        let activities = lock_activities(&self.activities);
        SyncSnapshot {
            tasks: state.tasks.clone(),
            list: activities.list,
            create: activities.create,
            error: state.error.clone(),
            draft: state.draft.clone(),
        }
    }

    pub async fn tasks(&self) -> Vec<Task> {
        self.state.read().await.tasks.clone()
    }

    pub async fn loading(&self) -> bool {
        lock_activities(&self.activities).list.is_busy()
    }

    pub async fn creating(&self) -> bool {
        lock_activities(&self.activities).create.is_busy()
    }

    pub async fn error(&self) -> Option<OperationFailed> {
        self.state.read().await.error.clone()
    }

    pub async fn draft(&self) -> String {
        self.state.read().await.draft.clone()
    }

    pub async fn set_draft(&self, text: impl Into<String>) {
        self.state.write().await.draft = text.into();
    }

    /// Replace the whole collection with the service's list.
    ///
    /// On failure the previous collection is kept.
    pub async fn refresh(&self) {
        let _in_flight = InFlight::begin(&self.activities, Concern::List);
        self.state.write().await.error = None;

        let result = self.api.list_tasks().await;

        let mut state = self.state.write().await;
        match result {
            Ok(tasks) => {
                debug!(count = tasks.len(), "task list replaced");
                state.tasks = tasks;
            }
            Err(err) => state.fail(Operation::List, &err),
        }
    }

    /// Create a task from `title` and append the service's copy.
    ///
    /// A title that is empty after trimming is ignored: no request, no state
    /// change.
    pub async fn create(&self, title: &str) {
        let title = title.trim();
        if title.is_empty() {
            debug!("ignoring create with blank title");
            return;
        }

        let _in_flight = InFlight::begin(&self.activities, Concern::Create);
        self.state.write().await.error = None;

        let result = self.api.create_task(title).await;

        let mut state = self.state.write().await;
        match result {
            Ok(task) => {
                debug!(id = %task.id, "task created");
                // A refresh that overlapped the create may already list it.
                match state.tasks.iter_mut().find(|existing| existing.id == task.id) {
                    Some(existing) => *existing = task,
                    None => state.tasks.push(task),
                }
                state.draft.clear();
            }
            Err(err) => state.fail(Operation::Create, &err),
        }
    }

    /// Create a task from the current draft
    pub async fn submit_draft(&self) {
        let draft = self.draft().await;
        self.create(&draft).await;
    }

    /// Toggle a task and store the service's version of it in place.
    ///
    /// The done flag is never flipped locally. A stale id still issues the
    /// request; if the task is gone locally the response changes nothing.
    pub async fn toggle(&self, id: TaskId) {
        self.state.write().await.error = None;

        let result = self.api.toggle_task(id).await;

        let mut state = self.state.write().await;
        match result {
            Ok(updated) => match state.tasks.iter_mut().find(|task| task.id == id) {
                Some(task) => {
                    debug!(%id, done = updated.done, "task toggled");
                    *task = updated;
                }
                None => debug!(%id, "toggled task no longer present locally"),
            },
            Err(err) => state.fail(Operation::Toggle, &err),
        }
    }

    /// Delete a task and drop it from the collection by id
    pub async fn remove(&self, id: TaskId) {
        self.state.write().await.error = None;

        let result = self.api.delete_task(id).await;

        let mut state = self.state.write().await;
        match result {
            Ok(()) => {
                debug!(%id, "task deleted");
                state.tasks.retain(|task| task.id != id);
            }
            Err(err) => state.fail(Operation::Delete, &err),
        }
    }

    pub async fn dismiss_error(&self) {
        self.state.write().await.error = None;
    }
}
