use std::time::Instant;

use sysinfo::{
    Components, Disks, Networks, Pid, ProcessRefreshKind, ProcessesToUpdate, Signal, System,
    UpdateKind, Users,
};

use super::platform;
use super::snapshot::{
    CpuMetrics, DiskMetrics, MemoryMetrics, MetricsSnapshot, NetworkMetrics, ProcessEntry,
    SystemIdentity,
};
use super::source::{MetricsSource, SourceError};

/// Local sysinfo-backed implementation of [`MetricsSource`].
pub struct Collector {
    sys: System,
    disks: Disks,
    networks: Networks,
    components: Components,
    users: Users,
    last_refresh: Option<Instant>,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_cpu_all();
        sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing()
                .with_memory()
                .with_cpu()
                .with_user(UpdateKind::OnlyIfNotSet),
        );
        Collector {
            sys,
            disks: Disks::new_with_refreshed_list(),
            networks: Networks::new_with_refreshed_list(),
            components: Components::new_with_refreshed_list(),
            users: Users::new_with_refreshed_list(),
            last_refresh: None,
        }
    }

    fn cpu_metrics(&self) -> CpuMetrics {
        let cpus = self.sys.cpus();
        let threads = cpus.len();
        let load = System::load_average();
        CpuMetrics {
            total: self.sys.global_cpu_usage() as f64,
            per_core: cpus.iter().map(|c| c.cpu_usage() as f64).collect(),
            model: cpus
                .first()
                .map(|c| c.brand().to_string())
                .unwrap_or_default(),
            cores: System::physical_core_count().unwrap_or(threads),
            threads,
            frequency_mhz: cpus.first().map(|c| c.frequency()).unwrap_or(0),
            load_avg: [load.one, load.five, load.fifteen],
            temperature: self.cpu_temperature(),
        }
    }

    fn cpu_temperature(&self) -> Option<f64> {
        let mut fallback = None;
        for component in self.components.iter() {
            let temp = match component.temperature() {
                Some(t) if t > 0.0 => t as f64,
                _ => continue,
            };
            let label = component.label().to_lowercase();
            if label.contains("cpu")
                || label.contains("package")
                || label.contains("tctl")
                || label.contains("core")
            {
                return Some(temp);
            }
            fallback.get_or_insert(temp);
        }
        fallback
    }

    fn memory_metrics(&self) -> MemoryMetrics {
        let total = self.sys.total_memory();
        let used = self.sys.used_memory();
        MemoryMetrics {
            total,
            used,
            available: self.sys.available_memory(),
            // sysinfo exposes no cache counter directly; available minus free
            // approximates the reclaimable page cache.
            cached: self
                .sys
                .available_memory()
                .saturating_sub(self.sys.free_memory()),
            used_percent: if total > 0 {
                used as f64 / total as f64 * 100.0
            } else {
                0.0
            },
            swap_total: self.sys.total_swap(),
            swap_used: self.sys.used_swap(),
        }
    }

    fn disk_metrics(&self, elapsed_secs: f64) -> Vec<DiskMetrics> {
        self.disks
            .iter()
            .filter(|d| !d.name().to_string_lossy().starts_with("/dev/loop"))
            .map(|d| {
                let total = d.total_space();
                let free = d.available_space();
                let used = total.saturating_sub(free);
                let io = d.usage();
                let (read_rate, write_rate) = if elapsed_secs > 0.0 {
                    (
                        io.read_bytes as f64 / elapsed_secs,
                        io.written_bytes as f64 / elapsed_secs,
                    )
                } else {
                    (0.0, 0.0)
                };
                DiskMetrics {
                    mount_point: d.mount_point().to_string_lossy().to_string(),
                    device: d.name().to_string_lossy().to_string(),
                    fs_type: d.file_system().to_string_lossy().to_string(),
                    used_percent: if total > 0 {
                        used as f64 / total as f64 * 100.0
                    } else {
                        0.0
                    },
                    used,
                    free,
                    read_rate,
                    write_rate,
                }
            })
            .collect()
    }

    fn network_metrics(&self, elapsed_secs: f64) -> Vec<NetworkMetrics> {
        self.networks
            .iter()
            .filter(|(name, _)| {
                *name != "lo"
                    && !name.starts_with("veth")
                    && !name.starts_with("docker")
                    && !name.starts_with("br-")
            })
            .map(|(name, data)| {
                let (download_rate, upload_rate) = if elapsed_secs > 0.0 {
                    (
                        data.received() as f64 / elapsed_secs,
                        data.transmitted() as f64 / elapsed_secs,
                    )
                } else {
                    (0.0, 0.0)
                };
                NetworkMetrics {
                    name: name.clone(),
                    download_rate,
                    upload_rate,
                    bytes_received: data.total_received(),
                    bytes_sent: data.total_transmitted(),
                }
            })
            .collect()
    }

    fn system_identity(&self) -> SystemIdentity {
        let name = System::name().unwrap_or_else(|| "unknown".to_string());
        let version = System::os_version().unwrap_or_default();
        SystemIdentity {
            hostname: System::host_name().unwrap_or_else(|| "unknown".to_string()),
            platform: if version.is_empty() {
                name
            } else {
                format!("{name} {version}")
            },
            kernel: System::kernel_version().unwrap_or_default(),
            arch: System::cpu_arch(),
            uptime_secs: System::uptime(),
        }
    }
}

impl MetricsSource for Collector {
    fn fetch_metrics(&mut self) -> Result<MetricsSnapshot, SourceError> {
        let now = Instant::now();
        let elapsed_secs = self
            .last_refresh
            .map(|last| now.duration_since(last).as_secs_f64())
            .unwrap_or(0.0);
        self.last_refresh = Some(now);

        self.sys.refresh_memory();
        self.sys.refresh_cpu_all();
        self.disks.refresh(true);
        self.networks.refresh(true);
        self.components.refresh(true);

        let snapshot = MetricsSnapshot {
            cpu: self.cpu_metrics(),
            memory: self.memory_metrics(),
            disks: self.disk_metrics(elapsed_secs),
            networks: self.network_metrics(elapsed_secs),
            system: self.system_identity(),
            battery: platform::battery(),
        };
        Ok(snapshot.sanitized())
    }

    fn fetch_processes(&mut self) -> Result<Vec<ProcessEntry>, SourceError> {
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing()
                .with_memory()
                .with_cpu()
                .with_user(UpdateKind::OnlyIfNotSet),
        );

        let total_memory = self.sys.total_memory().max(1);
        let mut entries: Vec<ProcessEntry> = self
            .sys
            .processes()
            .values()
            .filter(|p| p.thread_kind().is_none())
            .map(|p| {
                let user = p
                    .user_id()
                    .and_then(|uid| self.users.get_user_by_id(uid))
                    .map(|u| u.name().to_string());
                ProcessEntry {
                    pid: p.pid().as_u32(),
                    name: p.name().to_string_lossy().to_string(),
                    cpu_percent: p.cpu_usage() as f64,
                    memory_percent: p.memory() as f64 / total_memory as f64 * 100.0,
                    memory_rss: p.memory(),
                    user,
                }
            })
            .collect();

        // CPU-descending, matching the order the dashboard's top widget
        // expects from the backend.
        entries.sort_by(|a, b| {
            b.cpu_percent
                .partial_cmp(&a.cpu_percent)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(entries)
    }

    fn terminate_process(&mut self, pid: u32) -> Result<(), SourceError> {
        let process = self
            .sys
            .process(Pid::from_u32(pid))
            .ok_or(SourceError::NotFound(pid))?;
        match process.kill_with(Signal::Term) {
            Some(true) => Ok(()),
            Some(false) => Err(SourceError::PermissionDenied(pid)),
            // Signal not supported on this platform, fall back to kill().
            None => {
                if process.kill() {
                    Ok(())
                } else {
                    Err(SourceError::PermissionDenied(pid))
                }
            }
        }
    }

    fn launch_terminal(&mut self) -> Result<(), SourceError> {
        platform::spawn_first(platform::terminal_commands())
    }

    fn launch_file_manager(&mut self) -> Result<(), SourceError> {
        platform::spawn_first(platform::file_manager_commands())
    }
}
