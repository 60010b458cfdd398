// Cooperative job scheduler with periodic registration
// NOTE: no dynamic allocation; fixed-size queues and a fixed periodic table
//
// Interrupts never touch controller state. They raise wake flags, the
// main loop turns flags into jobs here, and every job runs to completion
// on the main loop. Periodic jobs (the LCD refresh) are registered once
// and pushed by on_tick() whenever their period has elapsed.
use core::fmt;

use crate::Millis;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    /// One loop iteration: sample, detect, pulse, emit.
    Step,
    /// External reset input fired.
    Reset,
    /// Repaint the display if its content changed.
    Refresh,
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Job::Step => write!(f, "Step"),
            Job::Reset => write!(f, "Reset"),
            Job::Refresh => write!(f, "Refresh"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    High = 0,
    Low = 1,
}

impl Job {
    pub const fn priority(&self) -> Priority {
        match self {
            Job::Step | Job::Reset => Priority::High,
            Job::Refresh => Priority::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushError {
    /// Queue for this priority level is full, contains the rejected job
    Full(Job),
    /// Periodic table is full
    NoSlot(Job),
}

impl fmt::Display for PushError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PushError::Full(job) => write!(f, "queue full, rejected {}", job),
            PushError::NoSlot(job) => write!(f, "no periodic slot for {}", job),
        }
    }
}

// ring buffer for jobs
pub struct JobQueue<const N: usize> {
    buf: [Option<Job>; N],
    head: usize, // next to read
    tail: usize, // next to write
    len: usize,
}

impl<const N: usize> JobQueue<N> {
    pub const fn new() -> Self {
        Self {
            buf: [None; N],
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    pub fn push(&mut self, job: Job) -> Result<(), Job> {
        if self.len >= N {
            return Err(job);
        }
        self.buf[self.tail] = Some(job);
        self.tail = (self.tail + 1) % N;
        self.len += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Job> {
        if self.len == 0 {
            return None;
        }
        let job = self.buf[self.head].take();
        self.head = (self.head + 1) % N;
        self.len -= 1;
        job
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn contains(&self, job: &Job) -> bool {
        (0..self.len).any(|k| self.buf[(self.head + k) % N].as_ref() == Some(job))
    }
}

impl<const N: usize> Default for JobQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy)]
struct Periodic {
    job: Job,
    period_ms: Millis,
    next_due: Millis,
}

const MAX_PERIODIC: usize = 4;

pub struct Scheduler {
    high: JobQueue<4>,
    low: JobQueue<4>,
    periodic: [Option<Periodic>; MAX_PERIODIC],
}

impl Scheduler {
    pub const fn new() -> Self {
        Self {
            high: JobQueue::new(),
            low: JobQueue::new(),
            periodic: [None; MAX_PERIODIC],
        }
    }

    fn queue(&mut self, priority: Priority) -> &mut JobQueue<4> {
        match priority {
            Priority::High => &mut self.high,
            Priority::Low => &mut self.low,
        }
    }

    // push a job and returns error with the job if queue is full
    pub fn push(&mut self, job: Job) -> Result<(), PushError> {
        self.queue(job.priority()).push(job).map_err(PushError::Full)
    }

    // Schedule a job only if it's not already queued (dedup that queue).
    pub fn push_unique(&mut self, job: Job) -> Result<(), PushError> {
        let q = self.queue(job.priority());
        if q.contains(&job) {
            return Ok(());
        }
        q.push(job).map_err(PushError::Full)
    }

    /// Run `job` every `period_ms`, first at `now + period_ms`.
    pub fn every(&mut self, job: Job, period_ms: Millis, now: Millis) -> Result<(), PushError> {
        let slot = self
            .periodic
            .iter_mut()
            .find(|s| s.is_none())
            .ok_or(PushError::NoSlot(job))?;
        *slot = Some(Periodic {
            job,
            period_ms: period_ms.max(1),
            next_due: now + period_ms.max(1),
        });
        Ok(())
    }

    /// Queue every periodic job whose deadline has passed. A job that
    /// fell several periods behind runs once, not once per missed period.
    pub fn on_tick(&mut self, now: Millis) {
        for i in 0..MAX_PERIODIC {
            let Some(mut p) = self.periodic[i] else {
                continue;
            };
            if now < p.next_due {
                continue;
            }
            while p.next_due <= now {
                p.next_due += p.period_ms;
            }
            self.periodic[i] = Some(p);
            if let Err(e) = self.push_unique(p.job) {
                log::warn!("sched: {}", e);
            }
        }
    }

    // the next job to execute
    pub fn pop(&mut self) -> Option<Job> {
        self.high.pop().or_else(|| self.low.pop())
    }

    pub fn is_empty(&self) -> bool {
        self.high.is_empty() && self.low.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.high.len() + self.low.len()
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
