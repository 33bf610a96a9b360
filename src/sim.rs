use std::{
    mem,
    sync::mpsc,
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use crate::{Board, BoardError, Cell, Pos};

/// Result of advancing the simulation by one step. Whether `Converged` ends
/// the run is the driver's call, not the engine's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Running,
    Converged,
}

/// The simulation engine. Owns two same-sized boards used as ping-pong
/// buffers: `current` is the authoritative generation, `next` is scratch.
/// Every cell of `next` is derived from `current` alone, so no step ever
/// observes a partially updated grid.
#[derive(Debug)]
pub struct Engine {
    current: Board,
    next: Board,
    generation: u64,
    converged: bool,
}

impl Engine {
    /// Allocates both buffers all-dead and marks the seed positions alive.
    /// Seeds outside the board are rejected, never clamped.
    pub fn new(size: usize, seeds: impl IntoIterator<Item = Pos>) -> Result<Self, BoardError> {
        let mut current = Board::new(size)?;
        let next = current.clone();
        for seed in seeds {
            if !current.contains(seed) {
                return Err(BoardError::OutOfBounds(seed));
            }
            current.set(seed, Cell::alive());
        }
        Ok(Self {
            current,
            next,
            generation: 1,
            converged: false,
        })
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_converged(&self) -> bool {
        self.converged
    }

    /// A read-only copy of the current generation's board.
    pub fn snapshot(&self) -> Board {
        self.current.clone()
    }

    /// Computes the next generation under B3/S23 with bounded, non-wrapping
    /// neighborhoods. If the freshly computed grid equals the pre-step grid
    /// the simulation has reached a fixed point: the buffers keep their
    /// roles, the counter stays put and every later call reports
    /// `Converged` again. Otherwise the buffers swap and the generation
    /// counter increments.
    pub fn step(&mut self) -> StepOutcome {
        if self.converged {
            return StepOutcome::Converged;
        }

        for pos in self.current.positions() {
            let cell = match (
                self.current.get(pos).is_alive(),
                self.current.live_neighbors(pos),
            ) {
                (true, 2 | 3) => Cell::alive(),
                (false, 3) => Cell::alive(),
                _ => Cell::dead(),
            };
            self.next.set(pos, cell);
        }

        if self.next == self.current {
            self.converged = true;
            StepOutcome::Converged
        } else {
            mem::swap(&mut self.current, &mut self.next);
            self.generation += 1;
            StepOutcome::Running
        }
    }
}

/// A stable snapshot handed to renderers. Owned by the reader; never mutated
/// once sent.
#[derive(Debug, Clone)]
pub struct Frame {
    pub board: Board,
    pub generation: u64,
    pub converged: bool,
}

pub enum SimCmd {
    Snapshot(mpsc::Sender<Frame>),
}

pub struct SimHandle {
    sender: mpsc::Sender<SimCmd>,
}

impl SimHandle {
    pub fn new(sender: mpsc::Sender<SimCmd>) -> Self {
        Self { sender }
    }

    pub fn snapshot(&self) -> Frame {
        let (sender, receiver) = mpsc::channel();
        self.sender.send(SimCmd::Snapshot(sender)).unwrap();
        receiver.recv().unwrap()
    }
}

/// The simulation worker: owns the engine exclusively and answers snapshot
/// requests from its loop, so no reader can ever observe a mid-step grid.
pub struct Sim {
    thread: JoinHandle<Engine>,
    sender: mpsc::Sender<SimCmd>,
}

impl Sim {
    pub fn spawn(engine: Engine, tick: Duration, max_generations: u64) -> Self {
        let (sender, receiver) = mpsc::channel();
        let thread = thread::spawn(move || sim_loop(receiver, engine, tick, max_generations));
        Self { thread, sender }
    }

    pub fn handle(&self) -> SimHandle {
        SimHandle::new(self.sender.clone())
    }

    /// Waits for the worker to wind down and returns the engine in its final
    /// state. The loop exits once every handle has been dropped.
    pub fn join(self) -> Engine {
        let Self { thread, sender } = self;
        drop(sender);
        thread.join().unwrap()
    }
}

const EVT_CHECK_TIMEOUT: Duration = Duration::from_millis(10);

fn sim_loop(
    receiver: mpsc::Receiver<SimCmd>,
    mut engine: Engine,
    tick: Duration,
    max_generations: u64,
) -> Engine {
    let mut last_step = Instant::now();

    loop {
        match receiver.try_recv() {
            Ok(SimCmd::Snapshot(sender)) => {
                let frame = Frame {
                    board: engine.snapshot(),
                    generation: engine.generation(),
                    converged: engine.is_converged(),
                };
                let _ = sender.send(frame);
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => break,
        }

        let running = !engine.is_converged() && engine.generation() < max_generations;
        if running && last_step.elapsed() >= tick {
            engine.step();
            last_step = Instant::now();
        }

        thread::sleep(EVT_CHECK_TIMEOUT);
    }

    engine
}
