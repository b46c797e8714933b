use tracing::warn;

use crate::engine::aggregate::{disk_aggregate, network_aggregate};
use crate::engine::history::{Channel, HistoryStore};
use crate::engine::procs::{ProcessQuery, SortKey, table_view, top_view};
use crate::engine::view::{self, ProcessRow, ViewModel};
use crate::system::snapshot::{MetricsSnapshot, ProcessEntry};
use crate::system::source::{MetricsSource, SourceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollState {
    #[default]
    Idle,
    /// A cycle is in progress.
    Fetching,
}

/// The telemetry aggregation engine: owns all mutable dashboard state and
/// turns backend fetches into immutable [`ViewModel`] emissions.
///
/// All access happens from the single cooperative task context, so there is
/// no locking; a cycle runs to completion before the next tick is considered.
pub struct Engine<S: MetricsSource> {
    source: S,
    state: PollState,
    /// Monotonic cycle counter; stamps each emission so a stale result can
    /// be told apart from a current one.
    cycle: u64,
    history: HistoryStore,
    query: ProcessQuery,
    last_metrics: Option<MetricsSnapshot>,
    last_processes: Vec<ProcessEntry>,
    latest: ViewModel,
}

impl<S: MetricsSource> Engine<S> {
    pub fn new(source: S, history_capacity: usize, sort: SortKey) -> Self {
        Self {
            source,
            state: PollState::Idle,
            cycle: 0,
            history: HistoryStore::new(history_capacity),
            query: ProcessQuery {
                filter: String::new(),
                sort,
            },
            last_metrics: None,
            last_processes: Vec::new(),
            latest: ViewModel::default(),
        }
    }

    /// The latest published view. Stale after a failed cycle, by design.
    pub fn view(&self) -> &ViewModel {
        &self.latest
    }

    pub fn state(&self) -> PollState {
        self.state
    }

    pub fn sort(&self) -> SortKey {
        self.query.sort
    }

    pub fn filter(&self) -> &str {
        &self.query.filter
    }

    /// Run one poll cycle: fetch metrics and the process list, feed history
    /// and aggregates from whatever arrived, and publish a fresh view.
    ///
    /// Each fetch fails independently; a total failure skips the cycle and
    /// leaves the prior view (and all history) untouched. The engine always
    /// returns to `Idle`, whatever the outcome.
    pub fn run_cycle(&mut self) -> bool {
        self.state = PollState::Fetching;
        self.cycle += 1;

        let metrics = self.source.fetch_metrics();
        let processes = self.source.fetch_processes();

        let metrics_ok = match metrics {
            Ok(snapshot) => {
                self.ingest_metrics(snapshot.sanitized());
                true
            }
            Err(err) => {
                warn!(cycle = self.cycle, error = %err, "metrics fetch failed");
                false
            }
        };

        let processes_ok = match processes {
            Ok(list) => {
                self.last_processes = list;
                true
            }
            Err(err) => {
                warn!(cycle = self.cycle, error = %err, "process fetch failed");
                false
            }
        };

        if !metrics_ok && !processes_ok {
            self.state = PollState::Idle;
            return false;
        }

        self.latest = self.compose();
        self.state = PollState::Idle;
        true
    }

    /// Update the name filter and re-run the pipeline against the cached
    /// process list, without waiting for the next poll.
    pub fn set_filter(&mut self, filter: String) {
        self.query.filter = filter;
        self.latest = self.compose();
    }

    /// Update the sort key and re-run the pipeline against the cached list.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.query.sort = sort;
        self.latest = self.compose();
    }

    /// Ask the backend to terminate a process. The outcome goes back to the
    /// caller for user-visible reporting; the cached process list stays as
    /// fetched until the next successful cycle.
    pub fn request_kill(&mut self, pid: u32) -> Result<(), SourceError> {
        self.source.terminate_process(pid)
    }

    pub fn launch_terminal(&mut self) -> Result<(), SourceError> {
        self.source.launch_terminal()
    }

    pub fn launch_file_manager(&mut self) -> Result<(), SourceError> {
        self.source.launch_file_manager()
    }

    fn ingest_metrics(&mut self, snapshot: MetricsSnapshot) {
        self.history.push(Channel::Cpu, snapshot.cpu.total);
        self.history
            .push(Channel::Memory, snapshot.memory.used_percent);
        self.history
            .push(Channel::Disk, disk_aggregate(&snapshot.disks).avg_used_percent);
        self.history.push(
            Channel::Network,
            network_aggregate(&snapshot.networks).history_sample(),
        );
        self.last_metrics = Some(snapshot);
    }

    fn compose(&self) -> ViewModel {
        let mut vm = ViewModel {
            cycle: self.cycle,
            history: view::HistoryView {
                cpu: self.history.snapshot(Channel::Cpu),
                memory: self.history.snapshot(Channel::Memory),
                disk: self.history.snapshot(Channel::Disk),
                network: self.history.snapshot(Channel::Network),
            },
            processes: table_view(&self.last_processes, &self.query)
                .iter()
                .map(ProcessRow::from_entry)
                .collect(),
            top_processes: top_view(&self.last_processes)
                .iter()
                .map(ProcessRow::from_entry)
                .collect(),
            process_count: self.last_processes.len(),
            filter: self.query.filter.clone(),
            sort_label: self.query.sort.label(),
            ..ViewModel::default()
        };

        if let Some(snapshot) = &self.last_metrics {
            vm.cpu = view::cpu_view(snapshot);
            vm.memory = view::memory_view(snapshot);
            vm.disks = snapshot.disks.iter().map(view::disk_view).collect();
            vm.disk_totals = view::disk_totals(&disk_aggregate(&snapshot.disks));
            vm.networks = snapshot.networks.iter().map(view::network_view).collect();
            vm.network_totals = view::network_totals(&network_aggregate(&snapshot.networks));
            vm.system = view::system_view(snapshot);
            vm.battery = view::battery_view(&snapshot.battery);
        }

        vm
    }
}
