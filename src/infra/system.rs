//! Host and process statistics for health and metrics reporting.

use serde::Serialize;
use sysinfo::System;

/// Memory and lifetime figures for the running process.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProcessStats {
    /// Resident set size in bytes.
    pub rss: u64,
    /// Virtual memory size in bytes.
    #[serde(rename = "virtual")]
    pub virtual_memory: u64,
    /// Process start, in seconds since the Unix epoch.
    #[serde(skip)]
    pub start_time: u64,
}

/// Reads the current process's statistics.
pub fn process_stats() -> Result<ProcessStats, String> {
    let pid = sysinfo::get_current_pid().map_err(|e| format!("Unable to read own pid: {}", e))?;

    let mut system = System::new();
    system.refresh_process(pid);
    let process = system
        .process(pid)
        .ok_or_else(|| format!("Process {} not visible", pid))?;

    Ok(ProcessStats {
        rss: process.memory(),
        virtual_memory: process.virtual_memory(),
        start_time: process.start_time(),
    })
}

/// 1, 5 and 15 minute load averages. All zero on platforms without them.
pub fn load_average() -> [f64; 3] {
    let load = System::load_average();
    [load.one, load.five, load.fifteen]
}
