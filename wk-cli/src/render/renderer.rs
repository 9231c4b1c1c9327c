use super::theme::OneDark;
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};
use wk_core::{
    WeekView,
    render::{RenderedLine, StatusMarker},
};

const RULE_WIDTH: usize = 50;
const TIME_WIDTH: usize = 23;

#[derive(Clone)]
pub struct RenderOptions {
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: OneDark::default_onedark_skin(),
            opts: config.unwrap_or(RenderOptions { use_color: true }),
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            self.skin.print_text(message);
        } else {
            println!("{message}");
        }
    }

    /// `[a1b2c3] Added: monday 09:00-10:00 deep work [focus]`
    pub fn print_confirmation(&self, id: &str, message: &str) {
        println!("{} {}", self.paint(&format!("[{id}]"), OneDark::COMMENT), message);
    }

    /// Same shape as [`Renderer::print_confirmation`], for destructive changes.
    pub fn print_removal(&self, id: &str, message: &str) {
        println!(
            "{} {}",
            self.paint(&format!("[{id}]"), OneDark::COMMENT),
            self.paint(message, OneDark::RED)
        );
    }

    /// Prints a week the way `wk ls` shows it. Empty days are skipped unless the view
    /// was narrowed to a single day.
    pub fn print_week(&self, view: &WeekView) {
        println!();
        self.print_header(view);
        println!("{}", "─".repeat(RULE_WIDTH));

        for day in &view.days {
            if day.lines.is_empty() && !view.filtered {
                continue;
            }
            println!();
            let heading = format!("{} ({})", day.day.as_ref().to_uppercase(), day.date_label);
            println!("{}", self.paint(&heading, OneDark::YELLOW));
            for line in &day.lines {
                println!("{}", self.format_line(line));
            }
        }
        println!();
    }

    fn print_header(&self, view: &WeekView) {
        if self.opts.use_color {
            self.skin
                .print_text(&format!("**Week {}** *({})*", view.week, view.caption));
        } else {
            println!("Week {} ({})", view.week, view.caption);
        }
    }

    pub fn format_line(&self, line: &RenderedLine) -> String {
        let tags = if line.tags.is_empty() {
            String::new()
        } else {
            format!(" {}", self.paint(&line.tags, OneDark::CYAN))
        };

        if line.is_note {
            return format!(
                "  {} {}{}",
                self.paint(line.status.symbol(), OneDark::PURPLE),
                line.description,
                tags
            );
        }

        let status_color = match line.status {
            StatusMarker::Done => OneDark::GREEN,
            StatusMarker::Unplanned => OneDark::ORANGE,
            StatusMarker::Note => OneDark::PURPLE,
            StatusMarker::Blank => OneDark::FG,
        };
        let time = format!("{:<width$}", line.time, width = TIME_WIDTH);
        format!(
            "  {} {} {} {}{}",
            self.paint(&format!("[{}]", line.id), OneDark::COMMENT),
            self.paint(line.status.symbol(), status_color),
            self.paint(&time, OneDark::BLUE),
            line.description,
            tags
        )
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.opts.use_color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Renderer {
        Renderer::new(Some(RenderOptions { use_color: false }))
    }

    fn line(status: StatusMarker, time: &str, tags: &str) -> RenderedLine {
        RenderedLine {
            id: "a1b2c3".into(),
            status,
            time: time.into(),
            description: "deep work".into(),
            tags: tags.into(),
            is_note: status == StatusMarker::Note,
        }
    }

    #[test]
    fn block_line_pads_the_time_column() {
        let out = plain().format_line(&line(StatusMarker::Blank, "09:00-10:00", ""));
        assert_eq!(out, "  [a1b2c3]   09:00-10:00             deep work");
    }

    #[test]
    fn done_line_with_actual_time_and_tags() {
        let out = plain().format_line(&line(
            StatusMarker::Done,
            "09:00-10:00 → 09:15-10:30",
            "#focus #acme",
        ));
        assert_eq!(
            out,
            "  [a1b2c3] ✓ 09:00-10:00 → 09:15-10:30 deep work #focus #acme"
        );
    }

    #[test]
    fn note_line_has_no_id_or_time() {
        let out = plain().format_line(&line(StatusMarker::Note, "", "#idea"));
        assert_eq!(out, "  • deep work #idea");
    }

    #[test]
    fn colored_output_keeps_the_text() {
        let renderer = Renderer::new(Some(RenderOptions { use_color: true }));
        let out = renderer.format_line(&line(StatusMarker::Unplanned, "08:00-08:30", ""));
        assert!(out.contains("a1b2c3"));
        assert!(out.contains("⚡"));
        assert!(out.contains("08:00-08:30"));
    }
}
