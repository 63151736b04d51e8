//! Streaming workload generator
//!
//! A [`Generator`] binds one distribution to a candidate set and produces an
//! unbounded stream of candidates, each drawn with the weight the distribution
//! assigned to it. Sampling is with replacement.
//!
//! # Lifecycle
//!
//! ```text
//! Created --generator()--> Running --close()--> Stopped
//!    \-------------------close()-----------------/
//! ```
//!
//! - [`Generator::generator`] builds the weight vector and alias table for
//!   the candidates, spawns exactly one producer thread and returns the
//!   receiving end of a bounded channel.
//! - [`Generator::close`] fires the one-shot termination signal. The producer
//!   stops before starting another item and drops its sender, so consumers
//!   observe end-of-stream once the buffered items are drained.
//! - [`Generator::wait`] blocks until the signal has fired and the producer
//!   thread has exited.
//!
//! Starting twice returns [`SamplerError::AlreadyStarted`]; closing twice
//! returns [`SamplerError::AlreadyClosed`].
//!
//! # Backpressure
//!
//! The output channel is bounded (default capacity 10). The producer blocks
//! while the channel is full, waking when the consumer frees a slot or the
//! termination signal fires.
//!
//! # Reproducibility
//!
//! A generator built with a seed derives every random draw (weight variates,
//! alias slots, coin flips) from that seed, so identical configurations
//! over identical candidate sets emit identical streams. Unseeded generators
//! draw their seed from OS entropy.
//!
//! # Example
//!
//! ```
//! use tracegen::generator::Generator;
//!
//! let generator = Generator::with_seed("pareto", &[], 42).unwrap();
//! let stream = generator.generator((0..41).collect::<Vec<u32>>()).unwrap();
//!
//! let first: Vec<u32> = stream.iter().take(100).collect();
//! assert!(first.iter().all(|c| *c < 41));
//!
//! generator.close().unwrap();
//! generator.wait();
//! ```

pub mod observer;

pub use observer::{GeneratorObserver, TracingObserver};

use crate::distribution::Distribution;
use crate::error::SamplerError;
use crate::sampler::{weights::weight_vector, AliasTable};
use crossbeam::channel::{bounded, select, Receiver, Sender, TryRecvError};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::JoinHandle;
use tracing::{debug, error};

/// Output channel capacity when none is configured
pub const DEFAULT_CHANNEL_CAPACITY: usize = 10;

/// Generator lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorState {
    /// Constructed, no stream requested yet
    Created,
    /// Producer thread running
    Running,
    /// Termination signal fired (terminal)
    Stopped,
}

impl fmt::Display for GeneratorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorState::Created => write!(f, "created"),
            GeneratorState::Running => write!(f, "running"),
            GeneratorState::Stopped => write!(f, "stopped"),
        }
    }
}

struct Lifecycle {
    state: GeneratorState,
    /// Dropping this sender is the termination signal; nothing is ever sent
    done_tx: Option<Sender<()>>,
    producer: Option<JoinHandle<()>>,
}

/// Distribution-weighted stream generator
pub struct Generator {
    distribution: Distribution,
    seed: Option<u64>,
    capacity: usize,
    observer: Option<Arc<dyn GeneratorObserver>>,
    rng: Mutex<Xoshiro256PlusPlus>,
    lifecycle: Mutex<Lifecycle>,
    done_rx: Receiver<()>,
    emitted: Arc<AtomicU64>,
}

impl Generator {
    /// Create a generator for a named distribution, seeded from entropy
    ///
    /// See [`Distribution::new`] for naming and parameter rules.
    pub fn new(name: &str, params: &[f64]) -> Result<Self, SamplerError> {
        Ok(Self::from_distribution(Distribution::new(name, params)?, None))
    }

    /// Create a fully reproducible generator
    pub fn with_seed(name: &str, params: &[f64], seed: u64) -> Result<Self, SamplerError> {
        Ok(Self::from_distribution(Distribution::new(name, params)?, Some(seed)))
    }

    /// Create a generator around an already constructed distribution
    pub fn from_distribution(distribution: Distribution, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_entropy(),
        };
        let (done_tx, done_rx) = bounded(0);

        Self {
            distribution,
            seed,
            capacity: DEFAULT_CHANNEL_CAPACITY,
            observer: None,
            rng: Mutex::new(rng),
            lifecycle: Mutex::new(Lifecycle {
                state: GeneratorState::Created,
                done_tx: Some(done_tx),
                producer: None,
            }),
            done_rx,
            emitted: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Set the output channel capacity (minimum 1)
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    /// Attach a lifecycle observer
    pub fn with_observer(mut self, observer: Arc<dyn GeneratorObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }

    pub fn name(&self) -> &'static str {
        self.distribution.name()
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn state(&self) -> GeneratorState {
        self.lifecycle().state
    }

    /// Number of items pushed onto the output channel so far
    pub fn emitted(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }

    /// Draw a normalized weight vector of length `n` from the distribution
    pub fn probs(&self, n: usize) -> Result<Vec<f64>, SamplerError> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        weight_vector(&self.distribution, n, &mut *rng)
    }

    /// Draw a single candidate using a prebuilt table
    ///
    /// `candidates` must be index-aligned with `table`.
    pub fn next<'a, T>(
        &self,
        table: &AliasTable,
        candidates: &'a [T],
    ) -> Result<Option<&'a T>, SamplerError> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        table.choose(&mut *rng, candidates)
    }

    /// Start streaming `candidates`
    ///
    /// Builds the weight vector and alias table for exactly
    /// `candidates.len()` entries, spawns the producer thread and returns the
    /// output stream. An empty candidate set yields a stream that stays empty
    /// until the generator is closed.
    pub fn generator<T>(&self, candidates: Vec<T>) -> Result<Receiver<T>, SamplerError>
    where
        T: Clone + Send + 'static,
    {
        let mut lifecycle = self.lifecycle();
        match lifecycle.state {
            GeneratorState::Created => {}
            GeneratorState::Running => return Err(SamplerError::AlreadyStarted),
            GeneratorState::Stopped => return Err(SamplerError::Stopped),
        }

        let table = AliasTable::new(&self.probs(candidates.len())?)?;
        let producer_rng = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            let mut producer_rng = rng.clone();
            producer_rng.jump();
            rng.long_jump();
            producer_rng
        };

        debug!(
            distribution = %self.distribution,
            candidates = candidates.len(),
            capacity = self.capacity,
            seed = ?self.seed,
            "starting producer"
        );
        let count = candidates.len();
        let (out_tx, out_rx) = bounded(self.capacity);
        let producer = Producer {
            table,
            candidates,
            rng: producer_rng,
            out: out_tx,
            done: self.done_rx.clone(),
            emitted: Arc::clone(&self.emitted),
            observer: self.observer.clone(),
        };
        lifecycle.producer = Some(std::thread::spawn(move || producer.run()));
        lifecycle.state = GeneratorState::Running;
        drop(lifecycle);

        // Observers may call back into the generator
        if let Some(observer) = &self.observer {
            observer.on_start(&self.distribution, count);
        }

        Ok(out_rx)
    }

    /// Fire the termination signal
    ///
    /// Closing is one-shot: a second call returns
    /// [`SamplerError::AlreadyClosed`] instead of being ignored.
    pub fn close(&self) -> Result<(), SamplerError> {
        let mut lifecycle = self.lifecycle();
        match lifecycle.done_tx.take() {
            Some(done_tx) => {
                drop(done_tx);
                lifecycle.state = GeneratorState::Stopped;
                debug!(distribution = %self.distribution, "termination signal fired");
                Ok(())
            }
            None => Err(SamplerError::AlreadyClosed),
        }
    }

    /// Block until the termination signal fires and the producer has exited
    pub fn wait(&self) {
        // Only disconnection ends this recv
        let _ = self.done_rx.recv();

        let producer = self.lifecycle().producer.take();
        if let Some(handle) = producer {
            if handle.join().is_err() {
                error!(distribution = %self.distribution, "producer thread panicked");
            }
        }
    }

    fn lifecycle(&self) -> MutexGuard<'_, Lifecycle> {
        self.lifecycle.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for Generator {
    fn drop(&mut self) {
        let lifecycle = self.lifecycle.get_mut().unwrap_or_else(PoisonError::into_inner);
        lifecycle.done_tx.take();
        if let Some(handle) = lifecycle.producer.take() {
            let _ = handle.join();
        }
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("distribution", &self.distribution)
            .field("seed", &self.seed)
            .field("capacity", &self.capacity)
            .field("state", &self.state())
            .field("emitted", &self.emitted())
            .finish()
    }
}

/// State moved onto the producer thread
struct Producer<T> {
    table: AliasTable,
    candidates: Vec<T>,
    rng: Xoshiro256PlusPlus,
    out: Sender<T>,
    done: Receiver<()>,
    emitted: Arc<AtomicU64>,
    observer: Option<Arc<dyn GeneratorObserver>>,
}

impl<T: Clone> Producer<T> {
    fn run(mut self) {
        let mut emitted = 0u64;

        loop {
            match self.done.try_recv() {
                Err(TryRecvError::Empty) => {}
                _ => break,
            }

            let index = match self.table.sample_index(&mut self.rng) {
                Some(index) => index,
                None => {
                    // Nothing to emit; park until termination
                    let _ = self.done.recv();
                    break;
                }
            };
            let item = self.candidates[index].clone();

            let sent = select! {
                recv(self.done) -> _ => false,
                send(self.out, item) -> res => res.is_ok(),
            };
            if !sent {
                break;
            }
            emitted += 1;
            self.emitted.fetch_add(1, Ordering::Relaxed);
        }

        debug!(emitted, "producer exiting");
        if let Some(observer) = &self.observer {
            observer.on_stop(emitted);
        }
        // `self.out` drops here, closing the stream
    }
}
