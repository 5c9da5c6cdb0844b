pub const FLOATING_SELECTOR: &str = ".floating-element";
pub const TECH_PARALLAX_SELECTOR: &str = ".tech-icon, .glow-orb";
pub const TECH_ICON_SELECTOR: &str = ".tech-icon";
pub const DATA_STREAM_SELECTOR: &str = ".data-stream";
pub const DATA_BIT_SELECTOR: &str = ".data-bit";
pub const PARTICLES_SELECTOR: &str = ".particles";
pub const PARTICLE_CLASS: &str = "particle";
pub const PROGRESS_SELECTOR: &str = ".scroll-progress";

const FLOATING_BASE_SPEED: f64 = 0.2;
const FLOATING_SPEED_STEP: f64 = 0.05;
const TECH_PARALLAX_SPEED: f64 = 0.5;
const DATA_BIT_STAGGER_MS: u64 = 200;

pub const TECH_ICON_HOVER_TRANSFORM: &str = "scale(1.3) rotate(10deg)";
pub const TECH_ICON_HOVER_FILTER: &str = "drop-shadow(0 0 25px rgba(99, 102, 241, 0.9))";

pub fn floating_speed(index: usize) -> f64 {
    FLOATING_BASE_SPEED + index as f64 * FLOATING_SPEED_STEP
}

pub fn floating_offset(scroll_y: f64, index: usize) -> f64 {
    scroll_y * floating_speed(index)
}

/// Tech layers drift upward, against the scroll.
pub fn tech_offset(scroll_y: f64) -> f64 {
    -(scroll_y * TECH_PARALLAX_SPEED)
}

pub fn translate_y(offset: f64) -> String {
    format!("translateY({offset}px)")
}

pub fn data_bit_delay(index: usize) -> String {
    format!("{}ms", index as u64 * DATA_BIT_STAGGER_MS)
}

/// Percentage of the scrollable distance already covered, 0 when the page
/// does not scroll.
pub fn scroll_progress_percent(scroll_top: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }

    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TechIconSize {
    pub edge_px: u32,
    pub font_px: u32,
}

pub fn tech_icon_size(viewport_width: f64) -> TechIconSize {
    if viewport_width <= 480.0 {
        TechIconSize {
            edge_px: 30,
            font_px: 14,
        }
    } else if viewport_width <= 768.0 {
        TechIconSize {
            edge_px: 40,
            font_px: 18,
        }
    } else {
        TechIconSize {
            edge_px: 50,
            font_px: 24,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSpec {
    pub left_percent: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl ParticleSpec {
    /// `sample` yields uniform values in `[0, 1)`.
    pub fn sample(sample: &mut impl FnMut() -> f64) -> Self {
        Self {
            left_percent: sample() * 100.0,
            delay_s: sample() * 20.0,
            duration_s: sample() * 10.0 + 15.0,
        }
    }

    pub fn left(&self) -> String {
        format!("{}%", self.left_percent)
    }

    pub fn delay(&self) -> String {
        format!("{}s", self.delay_s)
    }

    pub fn duration(&self) -> String {
        format!("{}s", self.duration_s)
    }
}

pub fn particle_specs(count: usize, mut sample: impl FnMut() -> f64) -> Vec<ParticleSpec> {
    (0..count).map(|_| ParticleSpec::sample(&mut sample)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deeper_floating_layers_move_faster() {
        assert!((floating_offset(100.0, 0) - 20.0).abs() < 1e-9);
        assert!((floating_offset(100.0, 2) - 30.0).abs() < 1e-9);
        assert!(floating_speed(3) > floating_speed(2));
        assert_eq!(translate_y(20.0), "translateY(20px)");
    }

    #[test]
    fn tech_layers_drift_against_the_scroll() {
        assert_eq!(tech_offset(200.0), -100.0);
        assert_eq!(translate_y(tech_offset(200.0)), "translateY(-100px)");
    }

    #[test]
    fn data_bits_are_staggered() {
        assert_eq!(data_bit_delay(0), "0ms");
        assert_eq!(data_bit_delay(3), "600ms");
    }

    #[test]
    fn progress_is_clamped_and_safe_on_short_pages() {
        assert_eq!(scroll_progress_percent(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress_percent(1500.0, 2000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress_percent(0.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn icon_size_follows_breakpoints() {
        assert_eq!(tech_icon_size(375.0).edge_px, 30);
        assert_eq!(tech_icon_size(480.0).font_px, 14);
        assert_eq!(tech_icon_size(768.0).edge_px, 40);
        assert_eq!(tech_icon_size(1280.0), TechIconSize { edge_px: 50, font_px: 24 });
    }

    #[test]
    fn particles_stay_within_their_ranges() {
        let mut extremes = [0.0, 0.999_999].into_iter().cycle();
        let specs = particle_specs(50, || extremes.next().unwrap_or(0.0));

        assert_eq!(specs.len(), 50);
        for spec in &specs {
            assert!((0.0..100.0).contains(&spec.left_percent));
            assert!((0.0..20.0).contains(&spec.delay_s));
            assert!((15.0..25.0).contains(&spec.duration_s));
        }
        assert_eq!(specs[0].left(), "0%");
        assert_eq!(specs[0].duration(), "15s");
    }
}
