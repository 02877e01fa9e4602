//! SVG rendering of the cycle wheel.
//!
//! The geometry (angles, corner points, rotation) comes from
//! lunacal-core; this module only serializes it. Day wedges live in a
//! group rotated so the current day's slice sits under the fixed top
//! marker, while labels are placed at pre-rotated angles and stay
//! upright.

use chrono::NaiveDate;
use lunacal_core::cycle::phase::{PaletteColor, PhaseInfo};
use lunacal_core::moon::MoonInfo;
use lunacal_core::wheel::layout::{ArcSegment, WheelGeometry, WheelRadii, point_at};

/// Everything one wheel render needs.
pub struct WheelPage<'a> {
    pub geometry: &'a WheelGeometry,
    /// Phase info per day, indexed `day - 1`.
    pub phases: &'a [PhaseInfo],
    pub display_day: u32,
    pub display_info: PhaseInfo,
    pub display_date: NaiveDate,
    pub moon: MoonInfo,
}

pub fn wheel_svg(page: &WheelPage) -> String {
    let geometry = page.geometry;
    let center = geometry.center;
    let radii = geometry.radii;
    let size = center.x * 2.0;
    let mid_radius = (radii.outer + radii.inner) / 2.0;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size:.0}\" height=\"{size:.0}\" viewBox=\"0 0 {size:.0} {size:.0}\" font-family=\"sans-serif\">\n"
    ));
    svg.push_str(&format!(
        "  <rect width=\"{size:.0}\" height=\"{size:.0}\" fill=\"#ffffff\"/>\n"
    ));

    // Gradient stops are given in unrotated wheel coordinates; because the
    // defs use userSpaceOnUse, the group rotation carries them along with
    // the wedges they fill.
    svg.push_str("  <defs>\n");
    for seg in &geometry.segments {
        if let PaletteColor::Blend { from, to } = page.phases[(seg.day - 1) as usize].color {
            let a = point_at(center, mid_radius, seg.start_angle);
            let b = point_at(center, mid_radius, seg.end_angle);
            svg.push_str(&format!(
                "    <linearGradient id=\"blend-day-{}\" gradientUnits=\"userSpaceOnUse\" x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\">\n",
                seg.day, a.x, a.y, b.x, b.y
            ));
            svg.push_str(&format!(
                "      <stop offset=\"0%\" stop-color=\"{from}\"/>\n"
            ));
            svg.push_str(&format!(
                "      <stop offset=\"100%\" stop-color=\"{to}\"/>\n"
            ));
            svg.push_str("    </linearGradient>\n");
        }
    }
    svg.push_str("  </defs>\n");

    svg.push_str(&format!(
        "  <g transform=\"rotate({:.4} {:.0} {:.0})\">\n",
        geometry.rotation.to_degrees(),
        center.x,
        center.y
    ));
    for seg in &geometry.segments {
        let info = &page.phases[(seg.day - 1) as usize];
        let fill = match info.color {
            PaletteColor::Flat(hex) => hex.to_string(),
            PaletteColor::Blend { .. } => format!("url(#blend-day-{})", seg.day),
        };
        svg.push_str(&format!(
            "    <path d=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1\"/>\n",
            wedge_path(seg, radii),
            fill,
            info.border
        ));
    }
    svg.push_str("  </g>\n");

    for seg in &geometry.segments {
        let info = &page.phases[(seg.day - 1) as usize];
        let point = geometry.label_point(seg.day, mid_radius);
        let weight = if seg.day == geometry.current_day {
            " font-weight=\"bold\""
        } else {
            ""
        };
        svg.push_str(&format!(
            "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" dominant-baseline=\"central\" font-size=\"11\" fill=\"{}\"{}>{}</text>\n",
            point.x, point.y, info.text, weight, seg.day
        ));
    }

    // Fixed marker above the current day's slice.
    svg.push_str(&format!(
        "  <polygon points=\"{:.0},{:.0} {:.0},{:.0} {:.0},{:.0}\" fill=\"#1f2937\"/>\n",
        center.x - 7.0,
        center.y - radii.outer - 10.0,
        center.x + 7.0,
        center.y - radii.outer - 10.0,
        center.x,
        center.y - radii.outer + 4.0
    ));

    // Center panel with the displayed day's detail.
    svg.push_str(&format!(
        "  <circle cx=\"{:.0}\" cy=\"{:.0}\" r=\"{:.0}\" fill=\"#fffdfd\" stroke=\"#e5e7eb\" stroke-width=\"1\"/>\n",
        center.x,
        center.y,
        radii.inner - 14.0
    ));
    svg.push_str(&format!(
        "  <text x=\"{:.0}\" y=\"{:.0}\" text-anchor=\"middle\" font-size=\"32\" font-weight=\"bold\" fill=\"{}\">J{}</text>\n",
        center.x,
        center.y - 30.0,
        page.display_info.border,
        page.display_day
    ));
    svg.push_str(&format!(
        "  <text x=\"{:.0}\" y=\"{:.0}\" text-anchor=\"middle\" font-size=\"15\" fill=\"#1f2937\">{}</text>\n",
        center.x,
        center.y - 2.0,
        page.display_info.name()
    ));
    svg.push_str(&format!(
        "  <text x=\"{:.0}\" y=\"{:.0}\" text-anchor=\"middle\" font-size=\"12\" fill=\"#6b7280\">{}</text>\n",
        center.x,
        center.y + 18.0,
        page.display_info.short_name
    ));
    svg.push_str(&format!(
        "  <text x=\"{:.0}\" y=\"{:.0}\" text-anchor=\"middle\" font-size=\"11\" fill=\"#9ca3af\">{}</text>\n",
        center.x,
        center.y + 38.0,
        page.display_date
    ));
    svg.push_str(&format!(
        "  <text x=\"{:.0}\" y=\"{:.0}\" text-anchor=\"middle\" font-size=\"12\" fill=\"#374151\">{} {}</text>\n",
        center.x,
        center.y + 58.0,
        page.moon.emoji,
        page.moon.name
    ));

    svg.push_str("</svg>\n");
    svg
}

/// Annular wedge outline: outer arc clockwise, inner arc back.
fn wedge_path(seg: &ArcSegment, radii: WheelRadii) -> String {
    format!(
        "M {:.2} {:.2} A {:.2} {:.2} 0 0 1 {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 0 0 {:.2} {:.2} Z",
        seg.outer_start.x,
        seg.outer_start.y,
        radii.outer,
        radii.outer,
        seg.outer_end.x,
        seg.outer_end.y,
        seg.inner_end.x,
        seg.inner_end.y,
        radii.inner,
        radii.inner,
        seg.inner_start.x,
        seg.inner_start.y
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lunacal_core::cycle::phase::phase_info;
    use lunacal_core::moon::moon_info;
    use lunacal_core::wheel::layout::Point;

    fn render(length: u32) -> String {
        let geometry = WheelGeometry::compute(
            length,
            10,
            WheelRadii {
                outer: 180.0,
                inner: 120.0,
            },
            Point { x: 210.0, y: 210.0 },
        );
        let phases: Vec<PhaseInfo> = (1..=length).map(|d| phase_info(d, length)).collect();
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let page = WheelPage {
            geometry: &geometry,
            phases: &phases,
            display_day: 10,
            display_info: phase_info(10, length),
            display_date: date,
            moon: moon_info(date),
        };
        wheel_svg(&page)
    }

    #[test]
    fn one_wedge_per_day() {
        let svg = render(28);
        assert_eq!(svg.matches("<path ").count(), 28);
    }

    #[test]
    fn blend_days_get_gradient_defs() {
        let svg = render(28);
        assert_eq!(svg.matches("<linearGradient").count(), 5);
        for day in [9, 15, 25, 27, 28] {
            assert!(
                svg.contains(&format!("url(#blend-day-{day})")),
                "day {day} should fill from its gradient"
            );
        }
    }

    #[test]
    fn wedges_rotate_labels_do_not() {
        let svg = render(28);
        assert!(svg.contains("<g transform=\"rotate("));
        let labels = svg.matches("<text ").count();
        // 28 day labels plus the five center lines.
        assert_eq!(labels, 33);
    }

    #[test]
    fn labels_cover_every_day() {
        let svg = render(28);
        for day in 1..=28 {
            assert!(svg.contains(&format!(">{day}</text>")), "missing label {day}");
        }
    }

    #[test]
    fn short_cycles_still_render() {
        let svg = render(21);
        assert_eq!(svg.matches("<path ").count(), 21);
        assert!(svg.ends_with("</svg>\n"));
    }
}
