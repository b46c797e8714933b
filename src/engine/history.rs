use std::collections::VecDeque;

pub const DEFAULT_CAPACITY: usize = 40;

/// The four bounded metric streams the dashboard keeps history for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Cpu,
    Memory,
    Disk,
    Network,
}

#[derive(Debug, Clone)]
struct Ring {
    samples: VecDeque<f64>,
    capacity: usize,
}

impl Ring {
    fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    fn push(&mut self, value: f64) {
        // NaN/non-finite samples would corrupt sparkline scaling downstream.
        let value = if value.is_finite() { value } else { 0.0 };
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
    }
}

/// Fixed-capacity FIFO history per metric channel.
///
/// Length never exceeds capacity; insertion order is arrival order; the
/// oldest sample is evicted when a new one arrives at capacity. Lives for
/// the engine's lifetime and is never cleared except by eviction.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    cpu: Ring,
    memory: Ring,
    disk: Ring,
    network: Ring,
}

impl HistoryStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            cpu: Ring::new(capacity),
            memory: Ring::new(capacity),
            disk: Ring::new(capacity),
            network: Ring::new(capacity),
        }
    }

    pub fn push(&mut self, channel: Channel, value: f64) {
        self.ring_mut(channel).push(value);
    }

    pub fn len(&self, channel: Channel) -> usize {
        self.ring(channel).samples.len()
    }

    pub fn is_empty(&self, channel: Channel) -> bool {
        self.ring(channel).samples.is_empty()
    }

    /// Read-only copy in arrival order, oldest first.
    pub fn snapshot(&self, channel: Channel) -> Vec<f64> {
        self.ring(channel).samples.iter().copied().collect()
    }

    fn ring(&self, channel: Channel) -> &Ring {
        match channel {
            Channel::Cpu => &self.cpu,
            Channel::Memory => &self.memory,
            Channel::Disk => &self.disk,
            Channel::Network => &self.network,
        }
    }

    fn ring_mut(&mut self, channel: Channel) -> &mut Ring {
        match channel {
            Channel::Cpu => &mut self.cpu,
            Channel::Memory => &mut self.memory,
            Channel::Disk => &mut self.disk,
            Channel::Network => &mut self.network,
        }
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
