use std::path::PathBuf;

use anyhow::{Result, bail};
use chrono::Local;
use lunacal_core::cycle::phase::{PhaseInfo, phase_info};
use lunacal_core::moon::moon_info;
use lunacal_core::wheel::layout::{Point, WheelGeometry, WheelRadii};
use lunacal_core::wheel::selection::WheelSelection;
use owo_colors::OwoColorize;

use crate::commands::{load_context, parse_date};
use crate::render::{Render, format_date_fr};
use crate::svg::{WheelPage, wheel_svg};

const WHEEL_CENTER: Point = Point { x: 210.0, y: 210.0 };
const WHEEL_RADII: WheelRadii = WheelRadii {
    outer: 180.0,
    inner: 120.0,
};

pub fn run(day: Option<u32>, date: Option<String>, out: PathBuf) -> Result<()> {
    let anchor = match date {
        Some(raw) => parse_date(&raw)?,
        None => Local::now().date_naive(),
    };
    let (_config, store) = load_context()?;
    let cycle = store.load_cycle_config(anchor);
    let history = store.load_history();

    let length = cycle.effective_length(&history);
    let current_day = cycle.cycle_day_for(anchor, &history);

    let mut selection = WheelSelection::new();
    let display_date = match day {
        Some(day) => {
            if !(1..=length).contains(&day) {
                bail!("Day {} is outside this cycle (1-{})", day, length);
            }
            selection.select(day, anchor, current_day)
        }
        None => anchor,
    };
    let display_day = selection.display_day(current_day);

    let geometry = WheelGeometry::compute(length, current_day, WHEEL_RADII, WHEEL_CENTER);
    let phases: Vec<PhaseInfo> = (1..=length).map(|d| phase_info(d, length)).collect();
    let display_info = phase_info(display_day, length);
    let moon = moon_info(display_date);

    let page = WheelPage {
        geometry: &geometry,
        phases: &phases,
        display_day,
        display_info,
        display_date,
        moon,
    };
    std::fs::write(&out, wheel_svg(&page))?;

    println!("{}", format_date_fr(display_date).bold());
    println!("J{} {}", display_day, display_info.render());
    println!("{}", display_info.description.italic());
    println!("{}", moon.render());
    println!();
    println!("Wheel written to {}", out.display());

    Ok(())
}
