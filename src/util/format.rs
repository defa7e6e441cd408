use std::time::Duration;

/// Renders `elapsed` as `HH:MM:SS`, truncated to whole seconds. Hours keep
/// growing past 24.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let (minutes, seconds) = (total / 60, total % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
