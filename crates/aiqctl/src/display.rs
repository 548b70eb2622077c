//! Terminal rendering for the tracker.
//!
//! All human-facing output goes through here so the commands stay thin.
//! Product strings (ranks, card states, the completion banner) keep the
//! site's Greek wording; tooling chrome is English.

use owo_colors::OwoColorize;

use aiq_core::{
    achievements, path, rank, style, CardState, CompletionNotice, ProgressObserver,
    ProgressRecord, ProgressSnapshot, ProgressUpdate,
};

/// Width of the dashboard bar in glyphs.
const BAR_WIDTH: usize = 30;

/// Render a 0-100 percentage as a filled bar.
pub fn render_bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Full status dashboard.
pub fn print_status(snapshot: &ProgressSnapshot) {
    let record = &snapshot.record;

    println!("{}", "[AI-Q]".bold());
    println!(
        "  Score: {}  {}",
        record.iq.to_string().bold(),
        snapshot.rank.cyan()
    );
    println!(
        "  {}  {:.0}%",
        render_bar(snapshot.bar_percentage, BAR_WIDTH),
        snapshot.bar_percentage
    );

    println!();
    println!("{}", "[PROGRESS]".bold());
    println!(
        "  Completed: {}/{} levels",
        record.completed_levels.len(),
        path::total_levels()
    );
    println!("  Total points: {}", record.total_points);
    if record.provisional_points > 0 {
        println!(
            "  Provisional: {} {}",
            record.provisional_points,
            "(commit to score them)".dimmed()
        );
    } else {
        println!("  Provisional: 0");
    }

    let pen = style::stroke_style(record.iq);
    println!();
    println!("{}", "[STYLE]".bold());
    println!(
        "  Pen: {} (width x{:.1}, opacity {:.1}, glow {})",
        pen.color, pen.width_factor, pen.opacity, pen.glow
    );
    println!("  Typography level: {}", style::typography_level(record.iq));

    println!();
    println!("{}", "[ACHIEVEMENTS]".bold());
    if record.achievements.is_empty() {
        println!("  {}", "none yet".dimmed());
    } else {
        println!("  {} unlocked", record.achievements.len());
    }
}

/// Level cards for the whole learning path.
pub fn print_path(record: &ProgressRecord) {
    println!("{}", "[LEARNING PATH]".bold());
    for info in &path::LEVELS {
        let state = record.card_state(info.level);
        let state_label = match state {
            CardState::Completed => state.to_string().green().to_string(),
            CardState::Unlocked => state.to_string().cyan().to_string(),
            CardState::Locked => state.to_string().dimmed().to_string(),
        };
        println!(
            "  {} {:24} {:12} {}",
            info.icon,
            info.title,
            format!("[{}]", info.level),
            state_label
        );
        if state != CardState::Locked {
            println!(
                "      {} {} · {}",
                info.entry_point.dimmed(),
                info.estimated_time.dimmed(),
                info.difficulty.dimmed()
            );
        }
    }
}

/// Achievement list with catalogue names.
pub fn print_achievements(record: &ProgressRecord) {
    println!("{}", "[ACHIEVEMENTS]".bold());
    if record.achievements.is_empty() {
        println!("  {}", "none yet".dimmed());
        return;
    }
    for entry in &record.achievements {
        let name = achievements::display_name(&entry.id).unwrap_or(entry.id.as_str());
        let when = entry
            .timestamp
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("  {} {:24} {}", "✔".green(), name, when.dimmed());
    }
}

/// One-line summary printed after every mutation.
pub struct UpdateLine;

impl ProgressObserver for UpdateLine {
    fn on_update(&mut self, update: &ProgressUpdate) {
        let mut line = format!(
            "AI-Q {} · {} · {} total points",
            update.iq, update.rank, update.total_points
        );
        if update.provisional_points > 0 {
            line.push_str(&format!(" · {} provisional", update.provisional_points));
        }
        println!("{}", line.dimmed());
    }
}

/// Celebration banner for finalized milestones, with a pointer at the
/// next page to open.
pub struct CompletionBanner;

impl ProgressObserver for CompletionBanner {
    fn on_update(&mut self, _update: &ProgressUpdate) {}

    fn on_completion(&mut self, notice: &CompletionNotice) {
        println!();
        println!("{}", "Συγχαρητήρια!".bold().green());
        println!("Κερδίσατε +{} AI-Q πόντους", notice.points);
        println!(
            "Νέο AI-Q Score: {} ({})",
            notice.new_iq.to_string().bold(),
            rank::current_rank(notice.new_iq)
        );
        if let Some(unlocked) = notice.unlocked {
            let info = path::info(unlocked);
            println!(
                "Ξεκλειδώθηκε: {} {} → {}",
                info.icon,
                info.title.bold(),
                info.entry_point
            );
        }
    }
}
