use std::process::Command;

use super::PlatformExtensions;
use crate::system::snapshot::BatteryMetrics;

pub struct Platform;

impl PlatformExtensions for Platform {
    fn battery() -> Option<BatteryMetrics> {
        None
    }

    fn terminal_commands() -> Vec<Command> {
        let mut cmd = Command::new("cmd");
        cmd.args(["/c", "start", "cmd"]);
        vec![cmd]
    }

    fn file_manager_commands() -> Vec<Command> {
        let home = dirs::home_dir().unwrap_or_else(|| "C:\\".into());
        let mut cmd = Command::new("explorer");
        cmd.arg(home);
        vec![cmd]
    }
}
