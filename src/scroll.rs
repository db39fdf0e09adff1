/// How far down the page the reader is, as a percentage in `0.0..=100.0`.
///
/// A page that is no taller than the viewport reports 0.
pub fn progress_percent(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if !scrollable.is_finite() || scrollable <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_midway() {
        assert_eq!(progress_percent(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(progress_percent(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(progress_percent(1000.0, 2000.0, 1000.0), 100.0);
    }

    #[test]
    fn test_progress_clamps_overscroll() {
        // rubber-band scrolling on mobile reports values past either end
        assert_eq!(progress_percent(-40.0, 2000.0, 1000.0), 0.0);
        assert_eq!(progress_percent(1100.0, 2000.0, 1000.0), 100.0);
    }

    #[test]
    fn test_short_page_has_no_progress() {
        assert_eq!(progress_percent(0.0, 800.0, 800.0), 0.0);
        assert_eq!(progress_percent(10.0, 600.0, 800.0), 0.0);
        assert_eq!(progress_percent(f64::NAN, 2000.0, 800.0), 0.0);
    }
}
