use aivss_core::RiskCategory;
use owo_colors::{OwoColorize, Style};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

static COLOR: AtomicBool = AtomicBool::new(true);

/// The central theme definition for the AIVSS CLI.
/// Defines the color palette, the severity colors and iconography.
pub struct Theme;

impl Theme {
    /// Turns styling on or off for every helper below, `console` and miette included.
    pub fn set_color(enabled: bool) {
        COLOR.store(enabled, Ordering::Relaxed);
        console::set_colors_enabled(enabled);
        console::set_colors_enabled_stderr(enabled);
    }

    pub fn color_enabled() -> bool {
        COLOR.load(Ordering::Relaxed)
    }

    fn paint(text: impl fmt::Display, style: Style) -> String {
        paint_with(text, style, Self::color_enabled())
    }

    /// Primary color (Cyan): headings, axis names.
    pub fn primary(text: impl fmt::Display) -> String {
        Self::paint(text, Style::new().cyan().bold())
    }

    pub fn bold(text: impl fmt::Display) -> String {
        Self::paint(text, Style::new().bold())
    }

    /// Secondary color (Magenta): option codes, values.
    pub fn secondary(text: impl fmt::Display) -> String {
        Self::paint(text, Style::new().magenta().bold())
    }

    /// Muted/Dimmed color: metadata, timestamps.
    pub fn muted(text: impl fmt::Display) -> String {
        Self::paint(text, Style::new().dimmed())
    }

    /// Severity color of a risk category.
    pub fn category(category: RiskCategory, text: impl fmt::Display) -> String {
        let style = match category {
            RiskCategory::None => Style::new().dimmed(),
            RiskCategory::Low => Style::new().green().bold(),
            RiskCategory::Medium => Style::new().yellow().bold(),
            RiskCategory::High => Style::new().truecolor(255, 140, 0).bold(),
            RiskCategory::Critical => Style::new().red().bold(),
        };
        Self::paint(text, style)
    }

    /// `[ HIGH ]` style badge.
    pub fn badge(category: RiskCategory) -> String {
        badge_with(category, Self::color_enabled())
    }
}

fn paint_with(text: impl fmt::Display, style: Style, color: bool) -> String {
    if color {
        format!("{}", text.style(style))
    } else {
        text.to_string()
    }
}

fn badge_with(category: RiskCategory, color: bool) -> String {
    let text = format!(" {} ", category.label().to_uppercase());
    let style = match category {
        RiskCategory::None => Style::new().black().on_white(),
        RiskCategory::Low => Style::new().black().on_green().bold(),
        RiskCategory::Medium => Style::new().black().on_yellow().bold(),
        RiskCategory::High => Style::new().black().on_truecolor(255, 140, 0).bold(),
        RiskCategory::Critical => Style::new().white().on_red().bold(),
    };
    if color {
        paint_with(text, style, true)
    } else {
        format!("[{}]", text)
    }
}

/// Standardized icons.
/// Usage: `println!("{} Scoring...", Icon::Gauge)`
pub enum Icon {
    Shield,
    Gauge,
    Target,
    Robot,
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = match self {
            Icon::Shield => "🛡️ ",
            Icon::Gauge => "📊",
            Icon::Target => "🎯",
            Icon::Robot => "🤖",
        };
        write!(f, "{}", icon)
    }
}
