/// Render seconds as `MM:SS`. Minutes are zero-padded to two digits but not
/// capped, so 6000 seconds reads `100:00`.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::format_clock;

    #[test]
    fn formats_known_values() {
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(301), "05:01");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(59), "00:59");
    }

    #[test]
    fn minutes_are_not_capped() {
        assert_eq!(format_clock(6000), "100:00");
        assert_eq!(format_clock(3601), "60:01");
    }
}
