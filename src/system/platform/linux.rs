use std::path::Path;
use std::process::Command;

use super::PlatformExtensions;
use crate::system::snapshot::BatteryMetrics;

pub struct Platform;

const BATTERY_PATHS: [&str; 2] = [
    "/sys/class/power_supply/BAT0",
    "/sys/class/power_supply/BAT1",
];

fn read_trimmed(path: &Path) -> Option<String> {
    std::fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
}

impl PlatformExtensions for Platform {
    fn battery() -> Option<BatteryMetrics> {
        let base = BATTERY_PATHS
            .iter()
            .map(Path::new)
            .find(|p| p.exists())?;
        let percent = read_trimmed(&base.join("capacity"))
            .and_then(|s| s.parse::<f64>().ok())
            .unwrap_or(0.0);
        let charging = read_trimmed(&base.join("status"))
            .map(|s| s == "Charging" || s == "Full")
            .unwrap_or(false);
        Some(BatteryMetrics {
            present: true,
            percent,
            charging,
        })
    }

    fn terminal_commands() -> Vec<Command> {
        ["gnome-terminal", "konsole", "xfce4-terminal", "xterm"]
            .into_iter()
            .map(Command::new)
            .collect()
    }

    fn file_manager_commands() -> Vec<Command> {
        let home = dirs::home_dir().unwrap_or_else(|| "/".into());
        let mut cmd = Command::new("xdg-open");
        cmd.arg(home);
        vec![cmd]
    }
}
