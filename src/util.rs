#[cfg(not(target_os = "linux"))]
pub fn mem_used_peak() -> Option<usize> {
    None
}

// Peak virtual memory of this process in kilobytes, from /proc.
#[cfg(target_os = "linux")]
pub fn mem_used_peak() -> Option<usize> {
    use std::{fs, process};

    let status = fs::read_to_string(format!("/proc/{}/status", process::id())).ok()?;
    let line = status.lines().find(|line| line.starts_with("VmPeak:"))?;
    let mem_kb: String = line.chars().filter(|c| c.is_digit(10)).collect();
    mem_kb.parse().ok()
}
