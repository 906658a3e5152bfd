use crate::teardown::Teardown;
use dioxus::prelude::*;
use std::time::Duration;

pub type Job = Box<dyn FnOnce()>;

/// Runs a job once after a delay.
pub trait Scheduler {
    /// Dropping the returned handle before the delay elapses cancels the job.
    fn schedule(&self, delay: Duration, job: Job) -> Teardown;
}

/// [`Scheduler`] running jobs as tasks on the current component scope.
///
/// Must be used from inside the Dioxus runtime (event handlers, effects).
/// Tasks also die with the scope that spawned them.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskScheduler;

impl Scheduler for TaskScheduler {
    fn schedule(&self, delay: Duration, job: Job) -> Teardown {
        let task = spawn(async move {
            sleep(delay).await;
            job();
        });
        Teardown::new(move || task.cancel())
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(delay: Duration) {
    gloo_timers::future::sleep(delay).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}
