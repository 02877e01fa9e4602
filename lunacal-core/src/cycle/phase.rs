//! Phase classification for a cycle day.
//!
//! The boundary rules are evaluated in order; with short cycles some
//! branches can never match, and the later checks still resolve to a
//! usable phase. Ovulation is pinned 14 days before the
//! end of the cycle, with a 7-day fertile window around it.

use crate::cycle::math::DEFAULT_CYCLE_LENGTH;

pub const MENSTRUATION_DAYS: u32 = 5;

const FOLLICULAR_FILL: &str = "#DDE9EF";
const FERTILE_FILL: &str = "#fdfb93";
const FERTILE_PEAK_FILL: &str = "#f9f505";
const LUTEAL_FILL: &str = "#CF90C1";
const PMS_FILL: &str = "#93417A";
const MENSTRUATION_DAY1_FILL: &str = "#882c45";

/// The five phases of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Menstruation,
    Follicular,
    Ovulation,
    Luteal,
    Pms,
}

impl Phase {
    /// Display name, in the taxonomy the rest of the app uses.
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Menstruation => "Menstruation",
            Phase::Follicular => "Folliculaire",
            Phase::Ovulation => "Ovulation",
            Phase::Luteal => "Lutéale",
            Phase::Pms => "SPM",
        }
    }
}

/// Fill for a day wedge or calendar cell. Blends mark the days where
/// one phase hands over to the next; the renderer draws them as a
/// two-stop gradient from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteColor {
    Flat(&'static str),
    Blend {
        from: &'static str,
        to: &'static str,
    },
}

/// Everything the rendering layer needs to draw one cycle day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseInfo {
    pub phase: Phase,
    /// Archetype label ("Lune rouge", "Mère", …).
    pub short_name: &'static str,
    pub color: PaletteColor,
    pub border: &'static str,
    pub text: &'static str,
    pub description: &'static str,
}

impl PhaseInfo {
    pub fn name(&self) -> &'static str {
        self.phase.name()
    }

    pub fn is_gradient(&self) -> bool {
        matches!(self.color, PaletteColor::Blend { .. })
    }
}

// J1 darkest bordeaux, lightening day by day to pale pink.
const MENSTRUATION_RAMP: [(&str, &str, &str); MENSTRUATION_DAYS as usize] = [
    (MENSTRUATION_DAY1_FILL, "#6b2336", "#fff"),
    ("#b3495a", "#882c45", "#fff"),
    ("#df6268", "#b3495a", "#7f1d1d"),
    ("#fa8a8e", "#df6268", "#7f1d1d"),
    ("#f4abb4", "#fa8a8e", "#7f1d1d"),
];

// Fertile window, ovulation-5 .. ovulation+1. The first and last slot
// blend into the surrounding phases, the peak day is a saturated yellow.
const FERTILE_WINDOW: [(PaletteColor, &str, &str); 7] = [
    (
        PaletteColor::Blend { from: FOLLICULAR_FILL, to: FERTILE_FILL },
        "#AACBE0",
        "#164e63",
    ),
    (PaletteColor::Flat(FERTILE_FILL), "#f4f087", "#854d0e"),
    (PaletteColor::Flat(FERTILE_FILL), "#f4f087", "#854d0e"),
    (PaletteColor::Flat(FERTILE_FILL), "#f4f087", "#854d0e"),
    (PaletteColor::Flat(FERTILE_FILL), "#f4f087", "#854d0e"),
    (PaletteColor::Flat(FERTILE_PEAK_FILL), "#e8e404", "#713f12"),
    (
        PaletteColor::Blend { from: FERTILE_FILL, to: LUTEAL_FILL },
        "#CF90C1",
        "#78350f",
    ),
];

/// Classify a cycle day within a cycle of `cycle_length` days.
pub fn phase_info(cycle_day: u32, cycle_length: u32) -> PhaseInfo {
    let cycle_length = if cycle_length == 0 { DEFAULT_CYCLE_LENGTH } else { cycle_length };

    // Signed arithmetic: ovulation_day goes negative for very short
    // lengths, and the window bounds must not wrap.
    let day = i64::from(cycle_day);
    let length = i64::from(cycle_length);
    let ovulation_day = length - 14;

    if (1..=i64::from(MENSTRUATION_DAYS)).contains(&day) {
        let (fill, border, text) = MENSTRUATION_RAMP[(day - 1) as usize];
        return PhaseInfo {
            phase: Phase::Menstruation,
            short_name: "Lune rouge",
            color: PaletteColor::Flat(fill),
            border,
            text,
            description: "Repos, introspection, détoxification",
        };
    }

    if day >= 6 && day < ovulation_day - 5 {
        return PhaseInfo {
            phase: Phase::Follicular,
            short_name: "Jeune Fille",
            color: PaletteColor::Flat(FOLLICULAR_FILL),
            border: "#AACBE0",
            text: "#164e63",
            description: "Créativité, nouveaux projets, brainstorming",
        };
    }

    if day >= ovulation_day - 5 && day <= ovulation_day + 1 {
        // In this branch the offset is 0..=6 at any cycle length.
        let (color, border, text) = FERTILE_WINDOW[(day - (ovulation_day - 5)) as usize];
        return PhaseInfo {
            phase: Phase::Ovulation,
            short_name: "Mère",
            color,
            border,
            text,
            description: "Communication, collaboration, être présente",
        };
    }

    if day == length - 3 {
        return PhaseInfo {
            phase: Phase::Luteal,
            short_name: "Transition",
            color: PaletteColor::Blend { from: LUTEAL_FILL, to: PMS_FILL },
            border: "#a855f7",
            text: "#701a75",
            description: "Intuition, focus, nettoyage",
        };
    }

    if day == length - 2 {
        return PhaseInfo {
            phase: Phase::Pms,
            short_name: "SPM",
            color: PaletteColor::Flat(PMS_FILL),
            border: "#6d2f5a",
            text: "#fff",
            description: "Détails, finition, laisser passer la vague",
        };
    }

    if day >= length - 1 && day <= length {
        return PhaseInfo {
            phase: Phase::Pms,
            short_name: "Transition",
            color: PaletteColor::Blend { from: PMS_FILL, to: MENSTRUATION_DAY1_FILL },
            border: "#6d2f5a",
            text: "#fff",
            description: "Détails, finition, laisser passer la vague",
        };
    }

    PhaseInfo {
        phase: Phase::Luteal,
        short_name: "Enchanteresse",
        color: PaletteColor::Flat(LUTEAL_FILL),
        border: "#a855f7",
        text: "#701a75",
        description: "Intuition, focus, nettoyage",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- boundaries across a 28-day cycle (ovulation on day 14) ---

    #[test]
    fn menstruation_covers_first_five_days() {
        for day in 1..=5 {
            let info = phase_info(day, 28);
            assert_eq!(info.phase, Phase::Menstruation, "day {day}");
            assert_eq!(info.short_name, "Lune rouge");
        }
        assert_ne!(phase_info(6, 28).phase, Phase::Menstruation);
    }

    #[test]
    fn menstruation_ramp_darkest_on_day_one() {
        assert_eq!(phase_info(1, 28).color, PaletteColor::Flat("#882c45"));
        assert_eq!(phase_info(3, 28).color, PaletteColor::Flat("#df6268"));
        assert_eq!(phase_info(5, 28).color, PaletteColor::Flat("#f4abb4"));
        assert_eq!(phase_info(1, 28).text, "#fff");
        assert_eq!(phase_info(5, 28).text, "#7f1d1d");
    }

    #[test]
    fn follicular_runs_up_to_fertile_window() {
        for day in 6..=8 {
            let info = phase_info(day, 28);
            assert_eq!(info.phase, Phase::Follicular, "day {day}");
            assert_eq!(info.short_name, "Jeune Fille");
            assert_eq!(info.color, PaletteColor::Flat("#DDE9EF"));
        }
    }

    #[test]
    fn fertile_window_is_seven_days() {
        // ovulation-5 through ovulation+1
        for day in 9..=15 {
            assert_eq!(phase_info(day, 28).phase, Phase::Ovulation, "day {day}");
        }
        assert_ne!(phase_info(8, 28).phase, Phase::Ovulation);
        assert_ne!(phase_info(16, 28).phase, Phase::Ovulation);
    }

    #[test]
    fn fertile_window_blends_at_both_ends() {
        let start = phase_info(9, 28);
        assert!(start.is_gradient());
        assert_eq!(
            start.color,
            PaletteColor::Blend { from: "#DDE9EF", to: "#fdfb93" }
        );

        let end = phase_info(15, 28);
        assert!(end.is_gradient());
        assert_eq!(
            end.color,
            PaletteColor::Blend { from: "#fdfb93", to: "#CF90C1" }
        );

        // Plain fertile days in between are flat yellow.
        for day in 10..=13 {
            assert_eq!(phase_info(day, 28).color, PaletteColor::Flat("#fdfb93"), "day {day}");
        }
    }

    #[test]
    fn ovulation_peak_is_saturated() {
        let peak = phase_info(14, 28);
        assert_eq!(peak.phase, Phase::Ovulation);
        assert_eq!(peak.color, PaletteColor::Flat("#f9f505"));
        assert!(!peak.is_gradient());
    }

    #[test]
    fn luteal_default_between_window_and_pms() {
        for day in 16..=24 {
            let info = phase_info(day, 28);
            assert_eq!(info.phase, Phase::Luteal, "day {day}");
            assert_eq!(info.short_name, "Enchanteresse");
        }
    }

    #[test]
    fn luteal_transition_three_days_before_end() {
        let info = phase_info(25, 28);
        assert_eq!(info.phase, Phase::Luteal);
        assert_eq!(info.short_name, "Transition");
        assert_eq!(
            info.color,
            PaletteColor::Blend { from: "#CF90C1", to: "#93417A" }
        );
    }

    #[test]
    fn pms_day_then_two_transition_days() {
        let pms = phase_info(26, 28);
        assert_eq!(pms.phase, Phase::Pms);
        assert_eq!(pms.short_name, "SPM");
        assert_eq!(pms.color, PaletteColor::Flat("#93417A"));

        for day in 27..=28 {
            let info = phase_info(day, 28);
            assert_eq!(info.phase, Phase::Pms, "day {day}");
            assert_eq!(info.short_name, "Transition");
            assert_eq!(
                info.color,
                PaletteColor::Blend { from: "#93417A", to: "#882c45" },
                "day {day}"
            );
        }
    }

    // --- blends meet their neighbours ---

    #[test]
    fn blend_stops_match_adjacent_flat_fills() {
        // Day 9 blends from the follicular fill into the fertile fill.
        let (from, to) = blend_stops(phase_info(9, 28));
        assert_eq!(PaletteColor::Flat(from), phase_info(8, 28).color);
        assert_eq!(PaletteColor::Flat(to), phase_info(10, 28).color);

        // Day 15 blends from the fertile fill into the luteal fill.
        let (from, to) = blend_stops(phase_info(15, 28));
        assert_eq!(PaletteColor::Flat(from), phase_info(13, 28).color);
        assert_eq!(PaletteColor::Flat(to), phase_info(16, 28).color);

        // Day 25 blends from the luteal fill into the PMS fill.
        let (from, to) = blend_stops(phase_info(25, 28));
        assert_eq!(PaletteColor::Flat(from), phase_info(24, 28).color);
        assert_eq!(PaletteColor::Flat(to), phase_info(26, 28).color);

        // Days 27-28 blend from the PMS fill into the day-1 fill.
        let (from, to) = blend_stops(phase_info(28, 28));
        assert_eq!(PaletteColor::Flat(from), phase_info(26, 28).color);
        assert_eq!(PaletteColor::Flat(to), phase_info(1, 28).color);
    }

    fn blend_stops(info: PhaseInfo) -> (&'static str, &'static str) {
        match info.color {
            PaletteColor::Blend { from, to } => (from, to),
            PaletteColor::Flat(_) => panic!("expected a blend, got {:?}", info.color),
        }
    }

    // --- other cycle lengths ---

    #[test]
    fn window_follows_ovulation_for_longer_cycles() {
        // 35-day cycle: ovulation on day 21, window 16..=22.
        assert_eq!(phase_info(15, 35).phase, Phase::Follicular);
        for day in 16..=22 {
            assert_eq!(phase_info(day, 35).phase, Phase::Ovulation, "day {day}");
        }
        assert_eq!(phase_info(21, 35).color, PaletteColor::Flat("#f9f505"));
        assert_eq!(phase_info(23, 35).phase, Phase::Luteal);
    }

    #[test]
    fn short_cycle_keeps_every_day_classified() {
        // 21-day cycle: ovulation on day 7, so the fertile window starts
        // inside the menstruation range; the earlier rule wins there.
        for day in 1..=5 {
            assert_eq!(phase_info(day, 21).phase, Phase::Menstruation, "day {day}");
        }
        for day in 6..=8 {
            assert_eq!(phase_info(day, 21).phase, Phase::Ovulation, "day {day}");
        }
        assert_eq!(phase_info(18, 21).short_name, "Transition");
        assert_eq!(phase_info(19, 21).short_name, "SPM");
        assert_eq!(phase_info(20, 21).short_name, "Transition");
        assert_eq!(phase_info(21, 21).short_name, "Transition");
    }

    #[test]
    fn degenerate_lengths_never_panic() {
        for length in 0..=40 {
            for day in 0..=length.max(1) {
                let _ = phase_info(day, length);
            }
        }
    }

    #[test]
    fn names_follow_the_taxonomy() {
        assert_eq!(phase_info(1, 28).name(), "Menstruation");
        assert_eq!(phase_info(7, 28).name(), "Folliculaire");
        assert_eq!(phase_info(14, 28).name(), "Ovulation");
        assert_eq!(phase_info(20, 28).name(), "Lutéale");
        assert_eq!(phase_info(26, 28).name(), "SPM");
    }
}
