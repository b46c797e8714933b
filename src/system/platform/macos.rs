use std::process::Command;

use super::PlatformExtensions;
use crate::system::snapshot::BatteryMetrics;

pub struct Platform;

impl PlatformExtensions for Platform {
    fn battery() -> Option<BatteryMetrics> {
        // No stable sysfs-equivalent readout without an IOKit binding.
        None
    }

    fn terminal_commands() -> Vec<Command> {
        let mut cmd = Command::new("open");
        cmd.args(["-a", "Terminal"]);
        vec![cmd]
    }

    fn file_manager_commands() -> Vec<Command> {
        let home = dirs::home_dir().unwrap_or_else(|| "/".into());
        let mut cmd = Command::new("open");
        cmd.arg(home);
        vec![cmd]
    }
}
