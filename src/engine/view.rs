use crate::engine::aggregate::{DiskAggregate, NetworkAggregate};
use crate::format::{format_bytes, format_rate, format_uptime};
use crate::system::snapshot::{
    BatteryMetrics, DiskMetrics, MetricsSnapshot, NetworkMetrics, ProcessEntry,
};

/// Severity of a load-average reading relative to the core count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadSeverity {
    #[default]
    Nominal,
    Warning,
    Critical,
}

impl LoadSeverity {
    /// load > cores is critical; load > 0.7 x cores is a warning.
    pub fn classify(load: f64, cores: usize) -> Self {
        let cores = cores as f64;
        if load > cores {
            LoadSeverity::Critical
        } else if load > cores * 0.7 {
            LoadSeverity::Warning
        } else {
            LoadSeverity::Nominal
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CpuView {
    pub total_percent: f64,
    pub per_core: Vec<f64>,
    pub model: String,
    pub cores: usize,
    pub threads: usize,
    pub frequency_ghz: f64,
    /// None when the sensor reports nothing (or a non-positive reading).
    pub temperature: Option<f64>,
    pub load_avg: [f64; 3],
    pub load_severity: [LoadSeverity; 3],
}

#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    pub used_percent: f64,
    pub used_text: String,
    pub total_text: String,
    pub available_text: String,
    pub cached_text: String,
    pub swap_used_text: String,
    pub swap_total_text: String,
    pub swap_percent: f64,
}

#[derive(Debug, Clone, Default)]
pub struct DiskView {
    pub mount_point: String,
    pub device: String,
    pub fs_type: String,
    pub used_percent: f64,
    pub used_text: String,
    pub free_text: String,
    pub read_rate_text: String,
    pub write_rate_text: String,
}

#[derive(Debug, Clone, Default)]
pub struct DiskTotals {
    pub avg_used_percent: f64,
    pub read_rate_text: String,
    pub write_rate_text: String,
}

#[derive(Debug, Clone, Default)]
pub struct NetworkView {
    pub name: String,
    pub active: bool,
    pub download_text: String,
    pub upload_text: String,
    pub total_received_text: String,
    pub total_sent_text: String,
}

#[derive(Debug, Clone, Default)]
pub struct NetworkTotals {
    pub download_rate: f64,
    pub upload_rate: f64,
    pub download_text: String,
    pub upload_text: String,
}

#[derive(Debug, Clone, Default)]
pub struct SystemView {
    pub hostname: String,
    pub platform: String,
    pub kernel: String,
    pub arch: String,
    pub uptime_hours: u64,
    pub uptime_minutes: u64,
    pub uptime_text: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BatteryView {
    pub percent: f64,
    pub charging: bool,
}

/// One renderable row of the process table.
#[derive(Debug, Clone, Default)]
pub struct ProcessRow {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub memory_text: String,
    pub user: String,
}

impl ProcessRow {
    pub fn from_entry(entry: &ProcessEntry) -> Self {
        Self {
            pid: entry.pid,
            name: entry.name.clone(),
            cpu_percent: entry.cpu_percent,
            memory_percent: entry.memory_percent,
            memory_text: format_bytes(entry.memory_rss as f64),
            user: entry.user.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Per-channel history copies for sparkline rendering, oldest first.
#[derive(Debug, Clone, Default)]
pub struct HistoryView {
    pub cpu: Vec<f64>,
    pub memory: Vec<f64>,
    pub disk: Vec<f64>,
    pub network: Vec<f64>,
}

/// The composed, renderer-agnostic output of one poll cycle or one
/// filter/sort recomputation. Produced fresh, never mutated after emission.
#[derive(Debug, Clone, Default)]
pub struct ViewModel {
    /// Monotonic poll-cycle counter the emission was composed in.
    pub cycle: u64,
    pub cpu: CpuView,
    pub memory: MemoryView,
    pub disks: Vec<DiskView>,
    pub disk_totals: DiskTotals,
    pub networks: Vec<NetworkView>,
    pub network_totals: NetworkTotals,
    pub system: SystemView,
    pub battery: Option<BatteryView>,
    pub history: HistoryView,
    /// Filtered, sorted, truncated main table.
    pub processes: Vec<ProcessRow>,
    /// Fixed top-processes widget, independent of filter/sort.
    pub top_processes: Vec<ProcessRow>,
    pub process_count: usize,
    pub filter: String,
    pub sort_label: &'static str,
}

pub fn cpu_view(snapshot: &MetricsSnapshot) -> CpuView {
    let cpu = &snapshot.cpu;
    let load_severity = [
        LoadSeverity::classify(cpu.load_avg[0], cpu.cores),
        LoadSeverity::classify(cpu.load_avg[1], cpu.cores),
        LoadSeverity::classify(cpu.load_avg[2], cpu.cores),
    ];
    CpuView {
        total_percent: cpu.total,
        per_core: cpu.per_core.clone(),
        model: cpu.model.clone(),
        cores: cpu.cores,
        threads: cpu.threads,
        frequency_ghz: cpu.frequency_mhz as f64 / 1000.0,
        temperature: cpu.temperature.filter(|t| *t > 0.0),
        load_avg: cpu.load_avg,
        load_severity,
    }
}

pub fn memory_view(snapshot: &MetricsSnapshot) -> MemoryView {
    let mem = &snapshot.memory;
    let swap_percent = if mem.swap_total > 0 {
        mem.swap_used as f64 / mem.swap_total as f64 * 100.0
    } else {
        0.0
    };
    MemoryView {
        used_percent: mem.used_percent,
        used_text: format_bytes(mem.used as f64),
        total_text: format_bytes(mem.total as f64),
        available_text: format_bytes(mem.available as f64),
        cached_text: format_bytes(mem.cached as f64),
        swap_used_text: format_bytes(mem.swap_used as f64),
        swap_total_text: format_bytes(mem.swap_total as f64),
        swap_percent,
    }
}

pub fn disk_view(disk: &DiskMetrics) -> DiskView {
    DiskView {
        mount_point: disk.mount_point.clone(),
        device: disk.device.clone(),
        fs_type: disk.fs_type.clone(),
        used_percent: disk.used_percent,
        used_text: format_bytes(disk.used as f64),
        free_text: format_bytes(disk.free as f64),
        read_rate_text: format_rate(disk.read_rate),
        write_rate_text: format_rate(disk.write_rate),
    }
}

pub fn disk_totals(agg: &DiskAggregate) -> DiskTotals {
    DiskTotals {
        avg_used_percent: agg.avg_used_percent,
        read_rate_text: format_rate(agg.read_rate),
        write_rate_text: format_rate(agg.write_rate),
    }
}

pub fn network_view(net: &NetworkMetrics) -> NetworkView {
    NetworkView {
        name: net.name.clone(),
        active: net.download_rate + net.upload_rate > 0.0,
        download_text: format_rate(net.download_rate),
        upload_text: format_rate(net.upload_rate),
        total_received_text: format_bytes(net.bytes_received as f64),
        total_sent_text: format_bytes(net.bytes_sent as f64),
    }
}

pub fn network_totals(agg: &NetworkAggregate) -> NetworkTotals {
    NetworkTotals {
        download_rate: agg.download_rate,
        upload_rate: agg.upload_rate,
        download_text: format_rate(agg.download_rate),
        upload_text: format_rate(agg.upload_rate),
    }
}

pub fn system_view(snapshot: &MetricsSnapshot) -> SystemView {
    let sys = &snapshot.system;
    SystemView {
        hostname: sys.hostname.clone(),
        platform: sys.platform.clone(),
        kernel: sys.kernel.clone(),
        arch: sys.arch.clone(),
        uptime_hours: sys.uptime_secs / 3600,
        uptime_minutes: (sys.uptime_secs % 3600) / 60,
        uptime_text: format_uptime(sys.uptime_secs),
    }
}

pub fn battery_view(battery: &Option<BatteryMetrics>) -> Option<BatteryView> {
    battery.filter(|b| b.present).map(|b| BatteryView {
        percent: b.percent,
        charging: b.charging,
    })
}
