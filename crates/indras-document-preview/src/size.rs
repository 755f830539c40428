//! Byte count formatting for card and drawer labels.

/// Kilobytes rounded to one decimal place.
pub fn in_kb(bytes: u64) -> f64 {
    (bytes as f64 / 1024.0 * 10.0).round() / 10.0
}

/// Kilobyte count as shown to the user: `200`, `1.5`, `0`.
pub fn format_kb(bytes: u64) -> String {
    let kb = in_kb(bytes);
    if kb.fract() == 0.0 {
        format!("{}", kb as u64)
    } else {
        format!("{:.1}", kb)
    }
}

/// Card label suffix, e.g. `" (1.5 KB)"`.
///
/// A zero or missing size yields no suffix at all.
pub fn size_suffix(filesize: Option<u64>) -> Option<String> {
    match filesize {
        Some(bytes) if bytes != 0 => Some(format!(" ({} KB)", format_kb(bytes))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_kb() {
        assert_eq!(in_kb(1536), 1.5);
        assert_eq!(in_kb(1024), 1.0);
        assert_eq!(in_kb(0), 0.0);
        assert_eq!(in_kb(204800), 200.0);
        // 1100 / 1024 = 1.074.. -> 1.1
        assert_eq!(in_kb(1100), 1.1);
        // 51 / 1024 * 10 = 0.498.. -> 0.0
        assert_eq!(in_kb(51), 0.0);
    }

    #[test]
    fn test_format_kb() {
        assert_eq!(format_kb(204800), "200");
        assert_eq!(format_kb(1536), "1.5");
        assert_eq!(format_kb(1024), "1");
        assert_eq!(format_kb(0), "0");
        assert_eq!(format_kb(10 * 1024 * 1024), "10240");
    }

    #[test]
    fn test_size_suffix_truthiness() {
        assert_eq!(size_suffix(Some(204800)).as_deref(), Some(" (200 KB)"));
        assert_eq!(size_suffix(Some(0)), None);
        assert_eq!(size_suffix(None), None);
        // Non-zero but rounds to zero still shows.
        assert_eq!(size_suffix(Some(10)).as_deref(), Some(" (0 KB)"));
    }
}
