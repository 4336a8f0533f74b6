//! Terminal presentation of messages and side panels.
//!
//! Everything here returns strings so the prompt decides where they are written.
use console::{style, Style};
use quill::formatter::render_inline;
use quill::models::message::Message;
use quill::models::role::Role;
use quill::models::segment::{Segment, SegmentKind};
use quill::session::Theme;

pub const USER_MENU: [&str; 3] = ["👤 Profile", "⚙️ Settings", "🚪 Logout"];

pub struct Palette {
    heading: Style,
    math: Style,
    bold: Style,
    code: Style,
    plain: Style,
    user: Style,
    title: Style,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Palette {
                heading: Style::new().bold().underlined().white(),
                math: Style::new().italic().cyan(),
                bold: Style::new().bold().white(),
                code: Style::new().green().on_color256(236),
                plain: Style::new(),
                user: Style::new().blue().bold(),
                title: Style::new().magenta().dim(),
            },
            Theme::Light => Palette {
                heading: Style::new().bold().underlined().black(),
                math: Style::new().italic().blue(),
                bold: Style::new().bold().black(),
                code: Style::new().color256(22).on_color256(254),
                plain: Style::new(),
                user: Style::new().blue().bold(),
                title: Style::new().magenta(),
            },
        }
    }

    fn style_for(&self, kind: SegmentKind) -> &Style {
        match kind {
            SegmentKind::Heading => &self.heading,
            SegmentKind::Math => &self.math,
            SegmentKind::Bold => &self.bold,
            SegmentKind::Code => &self.code,
            SegmentKind::Plain => &self.plain,
        }
    }
}

pub fn render_segments(segments: &[Segment<'_>], palette: &Palette) -> String {
    segments
        .iter()
        .map(|segment| {
            palette
                .style_for(segment.kind)
                .apply_to(segment.content)
                .to_string()
        })
        .collect()
}

/// Format one answer entry with the inline markup pass
pub fn render_answer(text: &str, theme: Theme) -> String {
    render_segments(&render_inline(text), &Palette::for_theme(theme))
}

pub fn render_message(message: &Message, theme: Theme) -> String {
    match message.role {
        Role::User => {
            let palette = Palette::for_theme(theme);
            format!("{} {}", palette.user.apply_to(">"), message.text)
        }
        Role::Assistant => render_answer(&message.text, theme),
    }
}

/// A titled list, used for the sidebar and the user menu
pub fn render_panel(title: &str, lines: &[String], theme: Theme) -> String {
    let palette = Palette::for_theme(theme);
    let mut out = format!("─── {} ───", palette.title.apply_to(title));
    if lines.is_empty() {
        out.push_str(&format!("\n  {}", style("(empty)").dim()));
    }
    for line in lines {
        out.push_str("\n  ");
        out.push_str(line);
    }
    out
}

/// Sidebar entries: past questions, numbered, one line each
pub fn sidebar_lines<'a>(questions: impl Iterator<Item = &'a str>) -> Vec<String> {
    questions
        .enumerate()
        .map(|(i, question)| {
            let single_line = question.split_whitespace().collect::<Vec<_>>().join(" ");
            format!("{:>2}. {}", i + 1, single_line)
        })
        .collect()
}

pub fn user_menu_lines() -> Vec<String> {
    USER_MENU.iter().map(|entry| entry.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;

    #[test]
    fn test_render_answer_strips_delimiters() {
        for theme in [Theme::Dark, Theme::Light] {
            let out = render_answer("Use **cargo**, `rustc` and $x^2$ daily", theme);
            assert_eq!(strip_ansi_codes(&out), "Use cargo, rustc and x^2 daily");
        }
    }

    #[test]
    fn test_render_heading() {
        let out = render_answer("### Getting started", Theme::Dark);
        assert_eq!(strip_ansi_codes(&out), "Getting started");
    }

    #[test]
    fn test_styles_are_applied_per_segment() {
        let palette = Palette::for_theme(Theme::Dark);
        let code = Style::new().green().on_color256(236).force_styling(true);
        let segments = [Segment::plain("run "), Segment::code("ls")];

        let forced = Palette {
            code: code.clone(),
            ..palette
        };
        let out = render_segments(&segments, &forced);
        assert_eq!(out, format!("run {}", code.apply_to("ls")));
        assert_ne!(out, "run ls");
    }

    #[test]
    fn test_render_message_by_role() {
        let user = render_message(&Message::user("why?"), Theme::Light);
        assert_eq!(strip_ansi_codes(&user), "> why?");

        let assistant = render_message(&Message::assistant("**because**"), Theme::Light);
        assert_eq!(strip_ansi_codes(&assistant), "because");
    }

    #[test]
    fn test_sidebar_lines() {
        let questions = ["first question", "second\nquestion  spread"];
        let lines = sidebar_lines(questions.iter().copied());
        assert_eq!(lines, vec![" 1. first question", " 2. second question spread"]);
    }

    #[test]
    fn test_render_panel() {
        let out = render_panel("Questions", &[" 1. hi".to_string()], Theme::Dark);
        assert_eq!(strip_ansi_codes(&out), "─── Questions ───\n   1. hi");

        let empty = render_panel("Questions", &[], Theme::Dark);
        assert_eq!(strip_ansi_codes(&empty), "─── Questions ───\n  (empty)");
    }

    #[test]
    fn test_user_menu_lines() {
        assert_eq!(user_menu_lines().len(), USER_MENU.len());
        assert!(user_menu_lines()[2].contains("Logout"));
    }
}
