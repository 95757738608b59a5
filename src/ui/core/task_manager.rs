use super::actions::Action;
use super::effects::Effect;
use crate::service::Services;
use log::debug;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Runs effects on the tokio runtime and posts their result actions back to
/// the UI loop, which stays the only writer of application state.
pub struct TaskManager {
    services: Services,
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    pending_results: usize,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new(services: Services) -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                services,
                tasks: HashMap::new(),
                next_task_id: 1,
                pending_results: 0,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn an effect. Its result arrives on the action channel.
    pub fn spawn(&mut self, effect: Effect) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let description = effect.describe();
        debug!("TaskManager: spawning task {} ({})", task_id, description);

        let services = self.services.clone();
        let action_sender = self.action_sender.clone();
        let handle = tokio::spawn(async move {
            let action = effect.execute(&services).await;
            let _ = action_sender.send(action);
        });

        self.tasks.insert(
            task_id,
            BackgroundTask {
                id: task_id,
                handle,
                description,
                started_at: std::time::Instant::now(),
            },
        );
        self.pending_results += 1;
        task_id
    }

    /// Record that one result action has been received.
    pub fn result_received(&mut self) {
        self.pending_results = self.pending_results.saturating_sub(1);
    }

    /// Number of spawned effects whose result has not been received yet.
    pub fn pending_results(&self) -> usize {
        self.pending_results
    }

    /// Drop bookkeeping for tasks whose future has completed.
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for task_id in &finished {
            if let Some(task) = self.tasks.remove(task_id) {
                debug!(
                    "TaskManager: task {} ({}) finished after {:?}",
                    task.id,
                    task.description,
                    task.started_at.elapsed()
                );
            }
        }

        finished
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
        self.pending_results = 0;
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
