use std::time::Duration;

pub const UNKNOWN_AGE: &str = "<unknown>";

pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{secs}s")
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else if secs < 86400 {
        format!("{}h", secs / 3600)
    } else if secs < 86400 * 365 {
        format!("{}d", secs / 86400)
    } else {
        format!("{}y", secs / (86400 * 365))
    }
}

pub fn format_age(age: Option<Duration>) -> String {
    age.map(format_duration).unwrap_or_else(|| UNKNOWN_AGE.to_string())
}
