use crate::system::snapshot::{DiskMetrics, NetworkMetrics};

/// Summary scalars reduced from the per-disk array of one snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DiskAggregate {
    /// Mean used-percent across all disks; 0 when no disks are present.
    pub avg_used_percent: f64,
    /// Summed instantaneous rates, bytes/sec.
    pub read_rate: f64,
    pub write_rate: f64,
}

/// Summary scalars reduced from the per-interface array of one snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NetworkAggregate {
    /// Summed instantaneous rates, bytes/sec.
    pub download_rate: f64,
    pub upload_rate: f64,
}

pub fn disk_aggregate(disks: &[DiskMetrics]) -> DiskAggregate {
    let mut agg = DiskAggregate::default();
    for disk in disks {
        agg.avg_used_percent += disk.used_percent;
        agg.read_rate += disk.read_rate;
        agg.write_rate += disk.write_rate;
    }
    if !disks.is_empty() {
        agg.avg_used_percent /= disks.len() as f64;
    }
    agg
}

pub fn network_aggregate(networks: &[NetworkMetrics]) -> NetworkAggregate {
    let mut agg = NetworkAggregate::default();
    for net in networks {
        agg.download_rate += net.download_rate;
        agg.upload_rate += net.upload_rate;
    }
    agg
}

impl NetworkAggregate {
    /// Sample recorded on the network history channel. Stored in KB/s so the
    /// channel stays comparable with samples recorded by earlier builds, even
    /// though aggregate totals are reported in raw bytes/sec elsewhere.
    pub fn history_sample(&self) -> f64 {
        self.download_rate / 1024.0
    }
}
