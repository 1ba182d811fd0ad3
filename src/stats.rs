//! Pure statistics over session state. These are display values only and
//! never feed back into the engine.

/// Count of whitespace-delimited words in the typed input.
///
/// An empty or whitespace-only input counts as zero words. A naive
/// `split(' ')` would report one word for an empty string and inflate the
/// first WPM reading.
pub fn words_typed(input: &str) -> usize {
    input.split_whitespace().count()
}

/// Words per minute, rounded to the nearest whole number. Zero until the
/// clock has started.
pub fn wpm(words: usize, elapsed_secs: f64) -> u32 {
    if elapsed_secs > 0.0 {
        (words as f64 / (elapsed_secs / 60.0)).round() as u32
    } else {
        0
    }
}

/// Percentage of typed characters matching the reference at the same
/// position, rounded. Zero before anything is typed.
pub fn accuracy(typed_len: usize, errors: usize) -> u32 {
    if typed_len > 0 {
        (100.0 * (typed_len - errors) as f64 / typed_len as f64).round() as u32
    } else {
        0
    }
}
