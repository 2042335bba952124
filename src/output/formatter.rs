use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::scoring::{StatsReport, Trend, TREND_WINDOW};

/// The text report shows at most this many courses. Display policy only;
/// the structured output carries every group.
const COURSE_DISPLAY_LIMIT: usize = 3;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Render the report as human-readable text. Sections with no data are
/// omitted entirely rather than shown as empty headers. Deterministic for
/// a given report and color setting.
pub fn render_text(report: &StatsReport, use_colors: bool) -> String {
    let mut lines: Vec<String> = Vec::new();

    let title = "GHIN Golf Statistics Report";
    if use_colors {
        lines.push(title.bold().to_string());
    } else {
        lines.push(title.to_string());
    }
    lines.push("=".repeat(title.len()));
    lines.push(String::new());

    if report.current_handicap.is_some() || report.handicap_trend != Trend::InsufficientData {
        if let Some(index) = report.current_handicap {
            lines.push(format!("Current Handicap: {index:.1}"));
        }
        lines.push(format!(
            "Trend (last {TREND_WINDOW} revisions): {}",
            format_trend(report.handicap_trend, use_colors)
        ));
        lines.push(String::new());
    }

    push_section(&mut lines, "LIFETIME TOTALS", use_colors);
    lines.push(format!("Rounds: {}", report.totals.rounds));
    if let Some(best) = report.totals.best_score {
        lines.push(format!("Best Score: {best}"));
    }
    if let Some(worst) = report.totals.worst_score {
        lines.push(format!("Worst Score: {worst}"));
    }
    lines.push(String::new());

    if !report.best_differentials.is_empty() {
        push_section(&mut lines, "BEST DIFFERENTIALS", use_colors);
        for (i, entry) in report.best_differentials.iter().enumerate() {
            lines.push(format!(
                "{}. {:.1} - {} ({})",
                i + 1,
                entry.differential,
                entry.course,
                entry.date
            ));
        }
        lines.push(String::new());
    }

    if !report.courses.is_empty() {
        push_section(&mut lines, "MOST PLAYED COURSES", use_colors);
        for course in report.courses.iter().take(COURSE_DISPLAY_LIMIT) {
            lines.push(format!(
                "{}: {} rounds (avg {:.1})",
                course.course, course.rounds, course.avg_score
            ));
        }
        lines.push(String::new());
    }

    if !report.yearly_breakdown.is_empty() {
        push_section(&mut lines, "YEARLY BREAKDOWN", use_colors);
        for year in &report.yearly_breakdown {
            lines.push(format!(
                "{}: {} rounds (avg {:.1})",
                year.year, year.rounds, year.avg_score
            ));
        }
        lines.push(String::new());
    }

    if let Some(ref perf) = report.performance {
        if !perf.is_empty() {
            push_section(&mut lines, "PERFORMANCE AVERAGES", use_colors);
            if let Some(v) = perf.par3_avg {
                lines.push(format!("Par 3 Average: {v:.2}"));
            }
            if let Some(v) = perf.par4_avg {
                lines.push(format!("Par 4 Average: {v:.2}"));
            }
            if let Some(v) = perf.par5_avg {
                lines.push(format!("Par 5 Average: {v:.2}"));
            }
            if let Some(v) = perf.gir_pct {
                lines.push(format!("Greens in Regulation: {v:.1}%"));
            }
            if let Some(v) = perf.fairways_pct {
                lines.push(format!("Fairways Hit: {v:.1}%"));
            }
            if let Some(v) = perf.putts_avg {
                lines.push(format!("Average Putts: {v:.1}"));
            }
            lines.push(String::new());
        }
    }

    if let Some(ref range) = report.handicap_range {
        push_section(&mut lines, "HANDICAP RANGE", use_colors);
        lines.push(format!("Lowest: {:.1} ({})", range.low.index, range.low.date));
        lines.push(format!("Highest: {:.1} ({})", range.high.index, range.high.date));
        lines.push(String::new());
    }

    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines.join("\n")
}

fn push_section(lines: &mut Vec<String>, title: &str, use_colors: bool) {
    if use_colors {
        lines.push(title.bold().to_string());
    } else {
        lines.push(title.to_string());
    }
    lines.push("-".repeat(title.len()));
}

fn format_trend(trend: Trend, use_colors: bool) -> String {
    if !use_colors {
        return trend.to_string();
    }
    match trend {
        Trend::Improving => trend.green().to_string(),
        Trend::Declining => trend.red().to_string(),
        Trend::Stable => trend.to_string(),
        Trend::InsufficientData => trend.dimmed().to_string(),
    }
}
