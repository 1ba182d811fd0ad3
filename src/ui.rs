use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::session::Status;
use crate::{util, App};

const HORIZONTAL_MARGIN: u16 = 5;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let session = &self.session;
        let snap = session.snapshot();

        // styles
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let green_bold_style = Style::default().patch(bold_style).fg(Color::Green);
        let red_bold_style = Style::default().patch(bold_style).fg(Color::Red);
        let dim_bold_style = Style::default()
            .patch(bold_style)
            .add_modifier(Modifier::DIM);
        let underlined_dim_bold_style = Style::default()
            .patch(dim_bold_style)
            .add_modifier(Modifier::UNDERLINED);
        let hint_style = Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC);

        match snap.status {
            Status::Paused => {
                let banner = Paragraph::new(Span::styled(
                    "PAUSED - ctrl+p to resume",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD | Modifier::ITALIC),
                ))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });

                banner.render(area, buf);
            }
            Status::Waiting | Status::Playing => {
                let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
                let mut prompt_occupied_lines =
                    ((session.prompt.width() as f64 / max_chars_per_line as f64).ceil() + 1.0)
                        as u16;

                if session.prompt.width() <= max_chars_per_line as usize {
                    prompt_occupied_lines = 1;
                }

                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .horizontal_margin(HORIZONTAL_MARGIN)
                    .constraints(
                        [
                            Constraint::Length(
                                ((area.height.saturating_sub(prompt_occupied_lines)) as f64 / 2.0)
                                    as u16,
                            ),
                            Constraint::Length(1),
                            Constraint::Length(1),
                            Constraint::Length(prompt_occupied_lines),
                            Constraint::Min(1),
                            Constraint::Length(1),
                        ]
                        .as_ref(),
                    )
                    .split(area);

                let stats_line = Paragraph::new(Span::styled(
                    format!(
                        "{} wpm   {}% acc   {}   {} errors",
                        snap.wpm,
                        snap.accuracy,
                        util::format_time(snap.elapsed_secs),
                        snap.errors
                    ),
                    bold_style,
                ))
                .alignment(Alignment::Center);

                stats_line.render(chunks[1], buf);

                let mut spans = session
                    .typed()
                    .iter()
                    .enumerate()
                    .map(|(idx, typed)| {
                        let expected = session.expected_char(idx).unwrap_or(*typed);

                        if *typed == expected {
                            Span::styled(expected.to_string(), green_bold_style)
                        } else {
                            Span::styled(
                                match typed {
                                    ' ' => "·".to_owned(),
                                    c => c.to_string(),
                                },
                                red_bold_style,
                            )
                        }
                    })
                    .collect::<Vec<Span>>();

                if let Some(cursor_char) = session.expected_char(snap.cursor) {
                    spans.push(Span::styled(
                        cursor_char.to_string(),
                        underlined_dim_bold_style,
                    ));

                    let rest: String = (snap.cursor + 1..snap.target_len)
                        .filter_map(|idx| session.expected_char(idx))
                        .collect();
                    spans.push(Span::styled(rest, dim_bold_style));
                }

                let prompt_widget = Paragraph::new(Line::from(spans))
                    .alignment(if prompt_occupied_lines == 1 {
                        // when the prompt is small enough to fit on one line
                        // centering the text gives a nice zen feeling
                        Alignment::Center
                    } else {
                        Alignment::Left
                    })
                    .wrap(Wrap { trim: true });

                prompt_widget.render(chunks[3], buf);

                let hints = Paragraph::new(Span::styled(
                    format!(
                        "{}% done   [{}] backspace {}   ctrl+p pause  ctrl+b backspace  ctrl+d difficulty  esc quit",
                        util::progress_percent(snap.cursor, snap.target_len),
                        self.config.difficulty,
                        if self.config.backspace_enabled {
                            "on"
                        } else {
                            "off"
                        },
                    ),
                    hint_style,
                ))
                .alignment(Alignment::Center);

                hints.render(chunks[5], buf);
            }
            Status::Completed => {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .horizontal_margin(HORIZONTAL_MARGIN)
                    .constraints(
                        [
                            Constraint::Length(area.height.saturating_sub(6) / 2),
                            Constraint::Length(1),
                            Constraint::Length(1),
                            Constraint::Length(1),
                            Constraint::Length(1),
                            Constraint::Min(1),
                        ]
                        .as_ref(),
                    )
                    .split(area);

                let title = Paragraph::new(Span::styled("session complete", bold_style))
                    .alignment(Alignment::Center);
                title.render(chunks[1], buf);

                let summary = Paragraph::new(Span::styled(
                    format!(
                        "{} wpm   {}% acc   {}   {} errors",
                        snap.wpm,
                        snap.accuracy,
                        util::format_time(snap.elapsed_secs),
                        snap.errors
                    ),
                    bold_style,
                ))
                .alignment(Alignment::Center);
                summary.render(chunks[2], buf);

                let hints =
                    Paragraph::new(Span::styled("(r)etry  (n)ew text  (esc)ape", hint_style))
                        .alignment(Alignment::Center);
                hints.render(chunks[4], buf);
            }
        }
    }
}
