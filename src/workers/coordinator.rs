//! Coordinator - runs one simulation end to end
//!
//! Producers and consumers run on named OS threads sharing one
//! `Arc<QueueMonitor<WorkItem>>`. The coordinator joins every producer,
//! then marks producers done, then joins every consumer. Consumers that
//! already left on idle timeout are expected and not an error; whatever
//! they left behind is reported as undelivered.

use crate::queue::{QueueMonitor, QueueStats, ResizeSink};
use crate::workers::config::SimulationConfig;
use crate::workers::consumer::{ConsumerExit, ConsumerReport, ConsumerWorker};
use crate::workers::error::{WorkerError, WorkerResult};
use crate::workers::item::WorkItem;
use crate::workers::producer::{ProducerReport, ProducerWorker};
use std::fmt;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Outcome of a complete run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub producers: Vec<ProducerReport>,
    pub consumers: Vec<ConsumerReport>,
    /// Monitor snapshot taken after every worker has finished
    pub final_stats: QueueStats,
    pub elapsed: Duration,
}

impl RunReport {
    pub fn total_produced(&self) -> usize {
        self.producers.iter().map(|p| p.produced).sum()
    }

    pub fn total_consumed(&self) -> usize {
        self.consumers.iter().map(|c| c.consumed()).sum()
    }

    /// Items still queued because every consumer left early
    pub fn undelivered(&self) -> usize {
        self.final_stats.len
    }

    pub fn exits(&self, reason: ConsumerExit) -> usize {
        self.consumers.iter().filter(|c| c.exit == reason).count()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Produced {} items with {} producers",
            self.total_produced(),
            self.producers.len()
        )?;
        writeln!(
            f,
            "Consumed {} items with {} consumers ({} end-of-stream, {} idle-timeout)",
            self.total_consumed(),
            self.consumers.len(),
            self.exits(ConsumerExit::EndOfStream),
            self.exits(ConsumerExit::IdleTimeout)
        )?;
        if self.undelivered() > 0 {
            writeln!(f, "Undelivered items: {}", self.undelivered())?;
        }
        write!(
            f,
            "Queue capacity: final {}, peak {}, {} resizes in {:.2?}",
            self.final_stats.capacity,
            self.final_stats.peak_capacity,
            self.final_stats.resizes,
            self.elapsed
        )
    }
}

/// Spawns and joins the workers of one run
#[derive(Debug, Clone)]
pub struct Coordinator {
    config: SimulationConfig,
}

impl Coordinator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Build a monitor reporting resizes to `sink` and run on it
    pub fn run<S>(&self, sink: S) -> WorkerResult<RunReport>
    where
        S: ResizeSink + 'static,
    {
        let monitor = Arc::new(QueueMonitor::new(self.config.initial_capacity, sink)?);
        self.run_with_monitor(monitor)
    }

    /// Run on an existing monitor
    ///
    /// The monitor should be fresh: producers are marked done on it once the
    /// producers finish.
    pub fn run_with_monitor(
        &self,
        monitor: Arc<QueueMonitor<WorkItem>>,
    ) -> WorkerResult<RunReport> {
        let started = Instant::now();
        log::info!(
            "Starting {} producers and {} consumers (initial capacity {}, {} items)",
            self.config.producers,
            self.config.consumers,
            self.config.initial_capacity,
            self.config.total_items()
        );

        let mut producer_handles = Vec::with_capacity(self.config.producers);
        let mut consumer_handles = Vec::with_capacity(self.config.consumers);
        if let Err(e) = self.spawn_all(&monitor, &mut producer_handles, &mut consumer_handles) {
            release_started(&monitor, producer_handles, consumer_handles);
            return Err(e);
        }

        let producers = join_all(producer_handles);
        log::info!("All producers finished");
        let marked = monitor.mark_producers_done();
        let consumers = join_all(consumer_handles);
        marked?;

        let report = RunReport {
            producers: producers?,
            consumers: consumers?,
            final_stats: monitor.stats()?,
            elapsed: started.elapsed(),
        };
        log::info!(
            "Run complete: {} produced, {} consumed, {} undelivered",
            report.total_produced(),
            report.total_consumed(),
            report.undelivered()
        );
        Ok(report)
    }

    fn spawn_all(
        &self,
        monitor: &Arc<QueueMonitor<WorkItem>>,
        producer_handles: &mut Vec<NamedHandle<ProducerReport>>,
        consumer_handles: &mut Vec<NamedHandle<ConsumerReport>>,
    ) -> WorkerResult<()> {
        for producer_id in 0..self.config.producers {
            let worker = ProducerWorker::new(
                producer_id,
                self.config.items_per_producer,
                self.config.producer_pause,
            );
            let monitor = Arc::clone(monitor);
            producer_handles.push(spawn_named(
                format!("producer-{}", producer_id),
                move || worker.run(&monitor),
            )?);
        }

        for consumer_id in 0..self.config.consumers {
            let worker =
                ConsumerWorker::new(consumer_id, self.config.max_idle, self.config.consumer_work);
            let monitor = Arc::clone(monitor);
            consumer_handles.push(spawn_named(
                format!("consumer-{}", consumer_id),
                move || worker.run(&monitor),
            )?);
        }

        Ok(())
    }
}

/// Join every worker that did start, even if the monitor is unusable
fn release_started(
    monitor: &QueueMonitor<WorkItem>,
    producer_handles: Vec<NamedHandle<ProducerReport>>,
    consumer_handles: Vec<NamedHandle<ConsumerReport>>,
) {
    let _ = join_all(producer_handles);
    if let Err(e) = monitor.mark_producers_done() {
        log::error!("Failed to release consumers: {}", e);
    }
    let _ = join_all(consumer_handles);
}

struct NamedHandle<T> {
    name: String,
    handle: JoinHandle<WorkerResult<T>>,
}

fn spawn_named<T, F>(name: String, body: F) -> WorkerResult<NamedHandle<T>>
where
    T: Send + 'static,
    F: FnOnce() -> WorkerResult<T> + Send + 'static,
{
    let handle = thread::Builder::new()
        .name(name.clone())
        .spawn(body)
        .map_err(|source| WorkerError::Spawn {
            worker: name.clone(),
            source,
        })?;
    Ok(NamedHandle { name, handle })
}

/// Join every handle, keeping the first failure
fn join_all<T>(handles: Vec<NamedHandle<T>>) -> WorkerResult<Vec<T>> {
    let mut results = Vec::with_capacity(handles.len());
    let mut first_error = None;

    for NamedHandle { name, handle } in handles {
        let outcome = match handle.join() {
            Ok(result) => result,
            Err(_) => Err(WorkerError::Panicked { worker: name }),
        };
        match outcome {
            Ok(report) => results.push(report),
            Err(e) => {
                log::error!("{}", e);
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(results),
    }
}
