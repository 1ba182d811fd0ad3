/// Formats elapsed seconds as `m:ss` for the stats line.
pub fn format_time(elapsed_secs: f64) -> String {
    let total = elapsed_secs.floor() as u64;
    let mins = total / 60;
    let secs = total % 60;
    format!("{mins}:{secs:02}")
}

/// Share of the reference text already typed, as a whole percentage.
pub fn progress_percent(typed_len: usize, target_len: usize) -> u32 {
    if target_len == 0 {
        return 0;
    }
    (100.0 * typed_len as f64 / target_len as f64).round() as u32
}
