use pulsetop::engine::poll::Engine;
use pulsetop::engine::procs::{SortKey, TABLE_LIMIT};
use pulsetop::system::snapshot::{
    CpuMetrics, DiskMetrics, MemoryMetrics, MetricsSnapshot, NetworkMetrics, ProcessEntry,
};
use pulsetop::system::source::{MetricsSource, SourceError};

/// Deterministic source that serves the same snapshot on every cycle.
struct RepeatingSource {
    cpu_total: f64,
    processes: Vec<ProcessEntry>,
}

impl MetricsSource for RepeatingSource {
    fn fetch_metrics(&mut self) -> Result<MetricsSnapshot, SourceError> {
        Ok(MetricsSnapshot {
            cpu: CpuMetrics {
                total: self.cpu_total,
                cores: 8,
                ..CpuMetrics::default()
            },
            memory: MemoryMetrics {
                total: 16 << 30,
                used: 8 << 30,
                used_percent: 50.0,
                ..MemoryMetrics::default()
            },
            disks: vec![
                DiskMetrics {
                    used_percent: 50.0,
                    read_rate: 100.0,
                    write_rate: 200.0,
                    ..DiskMetrics::default()
                },
                DiskMetrics {
                    used_percent: 100.0,
                    read_rate: 300.0,
                    write_rate: 400.0,
                    ..DiskMetrics::default()
                },
            ],
            networks: vec![
                NetworkMetrics {
                    download_rate: 1024.0,
                    upload_rate: 512.0,
                    ..NetworkMetrics::default()
                },
                NetworkMetrics {
                    download_rate: 3072.0,
                    upload_rate: 512.0,
                    ..NetworkMetrics::default()
                },
            ],
            ..MetricsSnapshot::default()
        })
    }

    fn fetch_processes(&mut self) -> Result<Vec<ProcessEntry>, SourceError> {
        Ok(self.processes.clone())
    }

    fn terminate_process(&mut self, pid: u32) -> Result<(), SourceError> {
        Err(SourceError::PermissionDenied(pid))
    }

    fn launch_terminal(&mut self) -> Result<(), SourceError> {
        Ok(())
    }

    fn launch_file_manager(&mut self) -> Result<(), SourceError> {
        Ok(())
    }
}

fn many_processes(count: usize) -> Vec<ProcessEntry> {
    (0..count)
        .map(|i| ProcessEntry {
            pid: i as u32 + 1,
            name: format!("worker-{i:03}"),
            cpu_percent: (count - i) as f64,
            memory_percent: 1.0,
            memory_rss: 10 << 20,
            user: Some("svc".into()),
        })
        .collect()
}

#[test]
fn history_saturates_at_capacity_over_many_cycles() {
    let mut engine = Engine::new(
        RepeatingSource {
            cpu_total: 25.0,
            processes: vec![],
        },
        40,
        SortKey::Cpu,
    );

    for _ in 0..60 {
        assert!(engine.run_cycle());
    }

    let vm = engine.view();
    assert_eq!(vm.cycle, 60);
    assert_eq!(vm.history.cpu.len(), 40);
    assert_eq!(vm.history.memory.len(), 40);
    assert_eq!(vm.history.disk.len(), 40);
    assert_eq!(vm.history.network.len(), 40);
    assert!(vm.history.cpu.iter().all(|&v| v == 25.0));
}

#[test]
fn device_aggregates_average_and_sum_across_devices() {
    let mut engine = Engine::new(
        RepeatingSource {
            cpu_total: 10.0,
            processes: vec![],
        },
        40,
        SortKey::Cpu,
    );
    assert!(engine.run_cycle());

    let vm = engine.view();
    // Disk: used% averaged, rates summed.
    assert_eq!(vm.disk_totals.avg_used_percent, 75.0);
    assert_eq!(vm.history.disk, vec![75.0]);
    // Network: rates summed, history stored in KB/s of the download sum.
    assert_eq!(vm.history.network, vec![4.0]);
    assert_eq!(vm.networks.len(), 2);
}

#[test]
fn table_truncates_while_count_reports_full_list() {
    let mut engine = Engine::new(
        RepeatingSource {
            cpu_total: 10.0,
            processes: many_processes(250),
        },
        40,
        SortKey::Cpu,
    );
    assert!(engine.run_cycle());

    let vm = engine.view();
    assert_eq!(vm.processes.len(), TABLE_LIMIT);
    assert_eq!(vm.process_count, 250);
    assert_eq!(vm.top_processes.len(), 5);
    // Highest CPU first under the default sort.
    assert_eq!(vm.processes[0].name, "worker-000");
}

#[test]
fn filter_and_sort_compose_against_one_cached_fetch() {
    let mut engine = Engine::new(
        RepeatingSource {
            cpu_total: 10.0,
            processes: many_processes(30),
        },
        40,
        SortKey::Cpu,
    );
    assert!(engine.run_cycle());

    engine.set_filter("worker-01".into());
    assert_eq!(engine.view().processes.len(), 10);

    engine.set_sort(SortKey::Name);
    let names: Vec<&str> = engine
        .view()
        .processes
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    // Filter survives the sort change.
    assert_eq!(engine.view().filter, "worker-01");
}
