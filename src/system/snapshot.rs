use serde::{Deserialize, Serialize};

/// One immutable fetch result representing system state at a point in time.
///
/// Every field is defaultable so a backend that omits a section (no battery,
/// no disks enumerated yet) still deserializes to a usable snapshot instead
/// of scattering null-checks through the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsSnapshot {
    pub cpu: CpuMetrics,
    pub memory: MemoryMetrics,
    pub disks: Vec<DiskMetrics>,
    pub networks: Vec<NetworkMetrics>,
    pub system: SystemIdentity,
    pub battery: Option<BatteryMetrics>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CpuMetrics {
    /// Total utilization, 0-100.
    pub total: f64,
    pub per_core: Vec<f64>,
    pub model: String,
    pub cores: usize,
    pub threads: usize,
    /// Base frequency in MHz.
    pub frequency_mhz: u64,
    /// 1/5/15-minute load averages.
    pub load_avg: [f64; 3],
    /// Celsius; `None` or <= 0 means no sensor.
    pub temperature: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryMetrics {
    pub total: u64,
    pub used: u64,
    pub available: u64,
    pub cached: u64,
    pub used_percent: f64,
    pub swap_total: u64,
    pub swap_used: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiskMetrics {
    pub mount_point: String,
    pub device: String,
    pub fs_type: String,
    pub used_percent: f64,
    pub used: u64,
    pub free: u64,
    /// Instantaneous rates in bytes/sec.
    pub read_rate: f64,
    pub write_rate: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkMetrics {
    pub name: String,
    /// Instantaneous rates in bytes/sec.
    pub download_rate: f64,
    pub upload_rate: f64,
    /// Cumulative counters since boot.
    pub bytes_received: u64,
    pub bytes_sent: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemIdentity {
    pub hostname: String,
    pub platform: String,
    pub kernel: String,
    pub arch: String,
    pub uptime_secs: u64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BatteryMetrics {
    pub present: bool,
    /// 0-100.
    pub percent: f64,
    pub charging: bool,
}

/// One row of the process list. The list is replaced wholesale each cycle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessEntry {
    pub pid: u32,
    pub name: String,
    /// May exceed 100 on multi-core hosts.
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub memory_rss: u64,
    pub user: Option<String>,
}

fn clean(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        0.0
    }
}

impl MetricsSnapshot {
    /// Coerce malformed numeric fields (NaN, negatives from counter
    /// wraparound) to 0 instead of propagating them. Applied once at the
    /// data-source boundary.
    pub fn sanitized(mut self) -> Self {
        self.cpu.total = clean(self.cpu.total).min(100.0);
        for core in &mut self.cpu.per_core {
            *core = clean(*core).min(100.0);
        }
        for load in &mut self.cpu.load_avg {
            *load = clean(*load);
        }
        self.memory.used_percent = clean(self.memory.used_percent).min(100.0);
        for disk in &mut self.disks {
            disk.used_percent = clean(disk.used_percent).min(100.0);
            disk.read_rate = clean(disk.read_rate);
            disk.write_rate = clean(disk.write_rate);
        }
        for net in &mut self.networks {
            net.download_rate = clean(net.download_rate);
            net.upload_rate = clean(net.upload_rate);
        }
        if let Some(battery) = &mut self.battery {
            battery.percent = clean(battery.percent).min(100.0);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_coerces_nan_and_negative_fields() {
        let snap = MetricsSnapshot {
            cpu: CpuMetrics {
                total: f64::NAN,
                per_core: vec![50.0, -3.0, 180.0],
                load_avg: [1.0, f64::INFINITY, -0.5],
                ..CpuMetrics::default()
            },
            disks: vec![DiskMetrics {
                used_percent: -20.0,
                read_rate: f64::NAN,
                write_rate: 1024.0,
                ..DiskMetrics::default()
            }],
            networks: vec![NetworkMetrics {
                download_rate: -1.0,
                upload_rate: 2048.0,
                ..NetworkMetrics::default()
            }],
            ..MetricsSnapshot::default()
        }
        .sanitized();

        assert_eq!(snap.cpu.total, 0.0);
        assert_eq!(snap.cpu.per_core, vec![50.0, 0.0, 100.0]);
        assert_eq!(snap.cpu.load_avg, [1.0, 0.0, 0.0]);
        assert_eq!(snap.disks[0].used_percent, 0.0);
        assert_eq!(snap.disks[0].read_rate, 0.0);
        assert_eq!(snap.disks[0].write_rate, 1024.0);
        assert_eq!(snap.networks[0].download_rate, 0.0);
        assert_eq!(snap.networks[0].upload_rate, 2048.0);
    }

    #[test]
    fn partial_toml_snapshot_defaults_missing_sections() {
        // A backend that reports nothing but memory still yields a full value.
        let snap: MetricsSnapshot = toml::from_str(
            r#"
[memory]
total = 1024
used = 512
"#,
        )
        .unwrap();
        assert_eq!(snap.memory.total, 1024);
        assert!(snap.disks.is_empty());
        assert!(snap.networks.is_empty());
        assert!(snap.battery.is_none());
        assert_eq!(snap.system.hostname, "");
    }
}
