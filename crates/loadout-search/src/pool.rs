// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! A fixed-size worker pool with pollable task handles.
//!
//! The enumeration dispatcher needs two things from its executor: batch
//! results arrive as owned values, and readiness can be checked without
//! blocking so top-K merging never serializes behind the slowest batch.
//! Workers pull boxed jobs from a shared channel; each submitted task
//! delivers its result through a dedicated channel wrapped in a
//! `TaskHandle`, and `TaskHandle::poll` maps straight onto
//! `try_recv`. Jobs run under `catch_unwind` so a panicking task reports
//! `Panicked` instead of wedging the dispatcher.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

type Job = Box<dyn FnOnce() + Send + 'static>;

/// The observable state of a submitted task.
#[derive(Debug)]
pub enum TaskPoll<T> {
    /// The task finished and produced a value.
    Ready(T),
    /// The task has not finished yet.
    Pending,
    /// The task panicked, or the worker executing it disappeared.
    Panicked,
}

/// A handle to one submitted task. Poll it to retrieve the result.
#[derive(Debug)]
pub struct TaskHandle<T> {
    receiver: Receiver<std::thread::Result<T>>,
}

impl<T> TaskHandle<T> {
    /// Checks the task without blocking.
    ///
    /// Returns `Ready` exactly once; polling again after the value was
    /// taken reports `Panicked` (the channel is disconnected).
    pub fn poll(&self) -> TaskPoll<T> {
        match self.receiver.try_recv() {
            Ok(Ok(value)) => TaskPoll::Ready(value),
            Ok(Err(_)) => TaskPoll::Panicked,
            Err(TryRecvError::Empty) => TaskPoll::Pending,
            Err(TryRecvError::Disconnected) => TaskPoll::Panicked,
        }
    }
}

/// A fixed-size pool of worker threads executing submitted tasks.
///
/// Dropping the pool closes the job queue and joins every worker;
/// already-queued jobs still run to completion first.
///
/// # Examples
///
/// ```rust
/// # use loadout_search::pool::{TaskPoll, WorkerPool};
///
/// let pool = WorkerPool::new(2);
/// let handle = pool.submit(|| 6 * 7);
///
/// let answer = loop {
///     match handle.poll() {
///         TaskPoll::Ready(value) => break value,
///         TaskPoll::Pending => std::thread::yield_now(),
///         TaskPoll::Panicked => panic!("task failed"),
///     }
/// };
/// assert_eq!(answer, 42);
/// ```
#[derive(Debug)]
pub struct WorkerPool {
    workers: Vec<JoinHandle<()>>,
    sender: Option<Sender<Job>>,
}

impl WorkerPool {
    /// Spawns a pool with `num_workers` threads.
    ///
    /// # Panics
    ///
    /// Panics if `num_workers` is zero.
    pub fn new(num_workers: usize) -> Self {
        assert!(
            num_workers > 0,
            "called `WorkerPool::new` with zero workers"
        );

        let (sender, receiver) = mpsc::channel::<Job>();
        let receiver = Arc::new(Mutex::new(receiver));

        let workers = (0..num_workers)
            .map(|_| {
                let receiver = Arc::clone(&receiver);
                std::thread::spawn(move || {
                    loop {
                        let job = match receiver.lock() {
                            Ok(guard) => guard.recv(),
                            Err(_) => return,
                        };
                        match job {
                            Ok(job) => job(),
                            Err(_) => return,
                        }
                    }
                })
            })
            .collect();

        Self {
            workers,
            sender: Some(sender),
        }
    }

    /// Returns the number of worker threads.
    #[inline]
    pub fn num_workers(&self) -> usize {
        self.workers.len()
    }

    /// Submits a task and returns a pollable handle to its result.
    pub fn submit<T, F>(&self, task: F) -> TaskHandle<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let (result_sender, result_receiver) = mpsc::channel();

        let job: Job = Box::new(move || {
            let outcome = catch_unwind(AssertUnwindSafe(task));
            // The handle may already be gone; nobody cares about the
            // result then.
            let _ = result_sender.send(outcome);
        });

        self.sender
            .as_ref()
            .expect("worker pool is shutting down")
            .send(job)
            .expect("all worker threads are gone");

        TaskHandle {
            receiver: result_receiver,
        }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        drop(self.sender.take());
        for worker in self.workers.drain(..) {
            let _ = worker.join();
        }
    }
}
