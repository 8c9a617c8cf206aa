//! Ratatui-based terminal UI.
//!
//! The TUI provides an input form for the clinical fields and re-derives the
//! assessment on every change (the scoring core is pure, so recomputing is
//! free). The right-hand side shows the comparison chart and the tier
//! recommendations.

use std::io;
use std::time::Duration;

use chrono::Local;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Terminal,
};

use crate::app::pipeline::{run_assessment, AssessmentRun};
use crate::domain::{ClinicalInput, RiskTier};
use crate::error::AppError;

mod plotters_chart;

use plotters_chart::ComparisonChart;

/// Number of editable form fields.
const FIELD_COUNT: usize = 13;

/// Start the TUI.
pub fn run() -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new()?;
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    input: ClinicalInput,
    selected_field: usize,
    status: String,
    run: Option<AssessmentRun>,
}

impl App {
    fn new() -> Result<Self, AppError> {
        let mut app = Self {
            input: default_input(),
            selected_field: 0,
            status: "↑/↓ select a field, ←/→ adjust it.".to_string(),
            run: None,
        };
        app.recompute();
        Ok(app)
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))? {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Up => {
                if self.selected_field > 0 {
                    self.selected_field -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_field < FIELD_COUNT - 1 {
                    self.selected_field += 1;
                }
            }
            KeyCode::Left => self.adjust_field(-1),
            KeyCode::Right => self.adjust_field(1),
            KeyCode::Char('s') => self.save_report(),
            KeyCode::Char('e') => self.save_session(),
            _ => {}
        }
        false
    }

    fn adjust_field(&mut self, delta: i32) {
        let up = delta >= 0;
        match self.selected_field {
            0 => self.input.age = step_u32(self.input.age, delta, 1, 1, 119),
            1 => self.input.sex = self.input.sex.next(),
            2 => {
                self.input.chest_pain = if up {
                    self.input.chest_pain.next()
                } else {
                    self.input.chest_pain.prev()
                };
            }
            3 => self.input.resting_bp = step_u32(self.input.resting_bp, delta, 2, 70, 250),
            4 => self.input.cholesterol = step_u32(self.input.cholesterol, delta, 5, 100, 500),
            5 => self.input.fasting_bs_high = !self.input.fasting_bs_high,
            6 => {
                self.input.resting_ecg = if up {
                    self.input.resting_ecg.next()
                } else {
                    self.input.resting_ecg.prev()
                };
            }
            7 => self.input.max_heart_rate = step_u32(self.input.max_heart_rate, delta, 2, 60, 220),
            8 => self.input.exercise_angina = !self.input.exercise_angina,
            9 => {
                let next = self.input.st_depression + if up { 0.1 } else { -0.1 };
                // Snap to one decimal so repeated stepping stays clean.
                self.input.st_depression = ((next * 10.0).round() / 10.0).clamp(0.0, 6.0);
            }
            10 => {
                self.input.st_slope = if up {
                    self.input.st_slope.next()
                } else {
                    self.input.st_slope.prev()
                };
            }
            11 => {
                self.input.major_vessels = if up {
                    (self.input.major_vessels + 1).min(3)
                } else {
                    self.input.major_vessels.saturating_sub(1)
                };
            }
            12 => {
                self.input.thalassemia = if up {
                    self.input.thalassemia.next()
                } else {
                    self.input.thalassemia.prev()
                };
            }
            _ => {}
        }
        self.recompute();
    }

    fn recompute(&mut self) {
        match run_assessment(&self.input) {
            Ok(run) => {
                self.run = Some(run);
            }
            Err(err) => {
                // Field stepping stays inside the validated ranges, so this
                // only fires if the ranges and `domain::validate` drift apart.
                self.run = None;
                self.status = format!("Invalid input: {err}");
            }
        }
    }

    fn save_report(&mut self) {
        let Some(run) = &self.run else {
            self.status = "No assessment to save.".to_string();
            return;
        };
        let now = Local::now();
        let path = std::path::PathBuf::from(format!(
            "cardio_report_{}.txt",
            now.format("%Y%m%d_%H%M%S")
        ));
        let report = crate::report::format_report(&run.input, &run.assessment, now);
        match crate::io::export::write_report_txt(&path, &report) {
            Ok(()) => self.status = format!("Wrote report: {}", path.display()),
            Err(err) => self.status = format!("Report write failed: {err}"),
        }
    }

    fn save_session(&mut self) {
        let Some(run) = &self.run else {
            self.status = "No assessment to save.".to_string();
            return;
        };
        let now = Local::now();
        let path = std::path::PathBuf::from(format!(
            "cardio_session_{}.json",
            now.format("%Y%m%d_%H%M%S")
        ));
        match crate::io::session::write_session_json(&path, &run.input, &run.assessment, now) {
            Ok(()) => self.status = format!("Wrote session: {}", path.display()),
            Err(err) => self.status = format!("Session write failed: {err}"),
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("cardio", Style::default().fg(Color::Cyan)),
            Span::raw(" - heart disease risk assessment"),
        ]));

        match &self.run {
            Some(run) => {
                lines.push(Line::from(vec![
                    Span::raw(format!("risk score: {}%  ", run.assessment.percentage)),
                    Span::styled(
                        run.assessment.tier.display_name(),
                        Style::default()
                            .fg(tier_color(run.assessment.tier))
                            .add_modifier(Modifier::BOLD),
                    ),
                ]));
            }
            None => {
                lines.push(Line::from(Span::styled(
                    "no assessment",
                    Style::default().fg(Color::Yellow),
                )));
            }
        }

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(38), Constraint::Min(0)])
            .split(area);

        self.draw_form(frame, chunks[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(10)])
            .split(chunks[1]);

        self.draw_chart(frame, right[0]);
        self.draw_recommendations(frame, right[1]);
    }

    fn draw_form(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let i = &self.input;
        let items: Vec<ListItem> = vec![
            ListItem::new(format!("Age: {} years", i.age)),
            ListItem::new(format!("Sex: {}", i.sex.display_name())),
            ListItem::new(format!("Chest pain: {}", i.chest_pain.display_name())),
            ListItem::new(format!("Resting BP: {} mm Hg", i.resting_bp)),
            ListItem::new(format!("Cholesterol: {} mg/dl", i.cholesterol)),
            ListItem::new(format!("Fasting BS > 120: {}", if i.fasting_bs_high { "Yes" } else { "No" })),
            ListItem::new(format!("Resting ECG: {}", i.resting_ecg.display_name())),
            ListItem::new(format!("Max heart rate: {} bpm", i.max_heart_rate)),
            ListItem::new(format!("Exercise angina: {}", if i.exercise_angina { "Yes" } else { "No" })),
            ListItem::new(format!("ST depression: {:.1}", i.st_depression)),
            ListItem::new(format!("ST slope: {}", i.st_slope.display_name())),
            ListItem::new(format!("Major vessels: {}", i.major_vessels)),
            ListItem::new(format!("Thalassemia: {}", i.thalassemia.display_name())),
        ];

        let list = List::new(items)
            .block(Block::default().title("Inputs").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default()
            .title("Vitals vs Healthy Targets")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let Some(run) = &self.run else {
            let msg = Paragraph::new("Waiting for a valid input...")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default());
            frame.render_widget(msg, inner);
            return;
        };

        let widget = ComparisonChart {
            metrics: &run.metrics,
        };
        frame.render_widget(widget, inner);
    }

    fn draw_recommendations(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Recommendations").borders(Borders::ALL);

        let Some(run) = &self.run else {
            frame.render_widget(block, area);
            return;
        };

        let items: Vec<ListItem> = run
            .assessment
            .recommendations
            .iter()
            .enumerate()
            .map(|(i, entry)| ListItem::new(format!("{}. {}", i + 1, entry.title)))
            .collect();

        let list = List::new(items).block(block);
        frame.render_widget(list, area);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ adjust  s save report  e save session  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

/// Middle-of-the-road starting profile for the form.
fn default_input() -> ClinicalInput {
    ClinicalInput {
        age: 50,
        sex: crate::domain::Sex::Female,
        chest_pain: crate::domain::ChestPainType::Asymptomatic,
        resting_bp: 120,
        cholesterol: 200,
        fasting_bs_high: false,
        resting_ecg: crate::domain::RestingEcg::Normal,
        max_heart_rate: 150,
        exercise_angina: false,
        st_depression: 0.0,
        st_slope: crate::domain::StSlope::Upsloping,
        major_vessels: 0,
        thalassemia: crate::domain::Thalassemia::Unset,
    }
}

/// Step a numeric field by `step`, staying within `[min, max]`.
fn step_u32(value: u32, delta: i32, step: u32, min: u32, max: u32) -> u32 {
    let next = if delta >= 0 {
        value.saturating_add(step)
    } else {
        value.saturating_sub(step)
    };
    next.clamp(min, max)
}

fn tier_color(tier: RiskTier) -> Color {
    match tier {
        RiskTier::Low => Color::Green,
        RiskTier::Medium => Color::Yellow,
        RiskTier::High => Color::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_u32_respects_bounds() {
        assert_eq!(step_u32(119, 1, 1, 1, 119), 119);
        assert_eq!(step_u32(1, -1, 1, 1, 119), 1);
        assert_eq!(step_u32(118, 1, 2, 1, 119), 119);
        assert_eq!(step_u32(50, 1, 5, 1, 119), 55);
    }

    #[test]
    fn default_input_produces_an_assessment() {
        let run = run_assessment(&default_input()).unwrap();
        assert!(run.assessment.percentage <= 99);
        assert_eq!(run.metrics.len(), 4);
    }
}
