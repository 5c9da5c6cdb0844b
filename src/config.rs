use log::LevelFilter;
use std::time::Duration;

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
const DEFAULT_TYPING_SPEED_MS: u64 = 150;
const DEFAULT_TYPING_START_DELAY_MS: u64 = 1_000;
const DEFAULT_TYPING_PAUSE_MS: u64 = 1_000;
const DEFAULT_FOLLOWER_DELAY_MS: u64 = 100;
const DEFAULT_COUNTER_DURATION_MS: u64 = 2_000;
const DEFAULT_COUNTER_FRAME_MS: u64 = 16;
const DEFAULT_PARTICLE_COUNT: usize = 50;
const DEFAULT_MENU_BREAKPOINT_PX: u32 = 768;
const DEFAULT_ACTIVE_LINK_OFFSET_PX: u32 = 100;
const DEFAULT_SCROLL_THROTTLE_MS: u64 = 16;
const DEFAULT_THEME_TRANSITION_MS: u64 = 300;

const TYPING_SPEED_MS_BOUNDS: (u64, u64) = (10, 2_000);
const TYPING_START_DELAY_MS_BOUNDS: (u64, u64) = (0, 10_000);
const TYPING_PAUSE_MS_BOUNDS: (u64, u64) = (0, 10_000);
const FOLLOWER_DELAY_MS_BOUNDS: (u64, u64) = (0, 1_000);
const COUNTER_DURATION_MS_BOUNDS: (u64, u64) = (100, 20_000);
const COUNTER_FRAME_MS_BOUNDS: (u64, u64) = (4, 1_000);
const PARTICLE_COUNT_BOUNDS: (usize, usize) = (0, 500);
const MENU_BREAKPOINT_PX_BOUNDS: (u32, u32) = (320, 4_096);
const ACTIVE_LINK_OFFSET_PX_BOUNDS: (u32, u32) = (0, 1_000);
const SCROLL_THROTTLE_MS_BOUNDS: (u64, u64) = (0, 1_000);
const THEME_TRANSITION_MS_BOUNDS: (u64, u64) = (0, 5_000);

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub log_level: LevelFilter,
    pub typing_speed: Duration,
    pub typing_start_delay: Duration,
    pub typing_pause: Duration,
    pub follower_delay: Duration,
    pub counter_duration: Duration,
    pub counter_frame: Duration,
    pub particle_count: usize,
    pub menu_breakpoint_px: f64,
    pub active_link_offset_px: f64,
    pub scroll_throttle: Duration,
    pub theme_transition: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            typing_speed: Duration::from_millis(DEFAULT_TYPING_SPEED_MS),
            typing_start_delay: Duration::from_millis(DEFAULT_TYPING_START_DELAY_MS),
            typing_pause: Duration::from_millis(DEFAULT_TYPING_PAUSE_MS),
            follower_delay: Duration::from_millis(DEFAULT_FOLLOWER_DELAY_MS),
            counter_duration: Duration::from_millis(DEFAULT_COUNTER_DURATION_MS),
            counter_frame: Duration::from_millis(DEFAULT_COUNTER_FRAME_MS),
            particle_count: DEFAULT_PARTICLE_COUNT,
            menu_breakpoint_px: f64::from(DEFAULT_MENU_BREAKPOINT_PX),
            active_link_offset_px: f64::from(DEFAULT_ACTIVE_LINK_OFFSET_PX),
            scroll_throttle: Duration::from_millis(DEFAULT_SCROLL_THROTTLE_MS),
            theme_transition: Duration::from_millis(DEFAULT_THEME_TRANSITION_MS),
        }
    }
}

impl SiteConfig {
    /// Builds the config from an attribute lookup. `lookup` receives the
    /// attribute name without the `data-` prefix.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let millis = |name: &str, default: u64, bounds: (u64, u64)| {
            Duration::from_millis(parse_with_bounds(&lookup, name, default, bounds))
        };

        Self {
            log_level: parse_log_level(&lookup, "log-level", DEFAULT_LOG_LEVEL),
            typing_speed: millis("typing-speed-ms", DEFAULT_TYPING_SPEED_MS, TYPING_SPEED_MS_BOUNDS),
            typing_start_delay: millis(
                "typing-start-delay-ms",
                DEFAULT_TYPING_START_DELAY_MS,
                TYPING_START_DELAY_MS_BOUNDS,
            ),
            typing_pause: millis("typing-pause-ms", DEFAULT_TYPING_PAUSE_MS, TYPING_PAUSE_MS_BOUNDS),
            follower_delay: millis(
                "follower-delay-ms",
                DEFAULT_FOLLOWER_DELAY_MS,
                FOLLOWER_DELAY_MS_BOUNDS,
            ),
            counter_duration: millis(
                "counter-duration-ms",
                DEFAULT_COUNTER_DURATION_MS,
                COUNTER_DURATION_MS_BOUNDS,
            ),
            counter_frame: millis("counter-frame-ms", DEFAULT_COUNTER_FRAME_MS, COUNTER_FRAME_MS_BOUNDS),
            particle_count: parse_with_bounds(
                &lookup,
                "particle-count",
                DEFAULT_PARTICLE_COUNT,
                PARTICLE_COUNT_BOUNDS,
            ),
            menu_breakpoint_px: f64::from(parse_with_bounds(
                &lookup,
                "menu-breakpoint-px",
                DEFAULT_MENU_BREAKPOINT_PX,
                MENU_BREAKPOINT_PX_BOUNDS,
            )),
            active_link_offset_px: f64::from(parse_with_bounds(
                &lookup,
                "active-link-offset-px",
                DEFAULT_ACTIVE_LINK_OFFSET_PX,
                ACTIVE_LINK_OFFSET_PX_BOUNDS,
            )),
            scroll_throttle: millis(
                "scroll-throttle-ms",
                DEFAULT_SCROLL_THROTTLE_MS,
                SCROLL_THROTTLE_MS_BOUNDS,
            ),
            theme_transition: millis(
                "theme-transition-ms",
                DEFAULT_THEME_TRANSITION_MS,
                THEME_TRANSITION_MS_BOUNDS,
            ),
        }
    }
}

fn parse_non_empty<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_with_bounds<F, T>(lookup: &F, name: &str, default: T, bounds: (T, T)) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + PartialOrd,
{
    parse_non_empty(lookup, name)
        .and_then(|value| value.parse::<T>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_log_level<F>(lookup: &F, name: &str, default: LevelFilter) -> LevelFilter
where
    F: Fn(&str) -> Option<String>,
{
    parse_non_empty(lookup, name)
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> SiteConfig {
        let attributes: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        SiteConfig::from_lookup(|name| attributes.get(name).cloned())
    }

    #[test]
    fn missing_attributes_fall_back_to_defaults() {
        assert_eq!(config_from(&[]), SiteConfig::default());
    }

    #[test]
    fn in_range_values_are_applied() {
        let config = config_from(&[
            ("typing-speed-ms", "80"),
            ("particle-count", " 12 "),
            ("menu-breakpoint-px", "1024"),
            ("scroll-throttle-ms", "0"),
            ("log-level", "DEBUG"),
        ]);

        assert_eq!(config.typing_speed, Duration::from_millis(80));
        assert_eq!(config.particle_count, 12);
        assert_eq!(config.menu_breakpoint_px, 1024.0);
        assert_eq!(config.scroll_throttle, Duration::ZERO);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn out_of_range_or_garbage_values_use_defaults() {
        let config = config_from(&[
            ("typing-speed-ms", "5"),
            ("counter-frame-ms", "fast"),
            ("particle-count", "-3"),
            ("menu-breakpoint-px", "99999"),
            ("log-level", "chatty"),
        ]);

        assert_eq!(config.typing_speed, Duration::from_millis(DEFAULT_TYPING_SPEED_MS));
        assert_eq!(config.counter_frame, Duration::from_millis(DEFAULT_COUNTER_FRAME_MS));
        assert_eq!(config.particle_count, DEFAULT_PARTICLE_COUNT);
        assert_eq!(config.menu_breakpoint_px, f64::from(DEFAULT_MENU_BREAKPOINT_PX));
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }
}
