//! Application state and event loop.

use std::time::Duration;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;

use wavescope::config::{Config, Theme, CONFIG_FILENAME};
use wavescope::export;
use wavescope::session::{Session, SessionFrame};

use crate::ui;

/// Step sizes for the arrow-key parameter nudges.
const FREQ_STEP: f64 = 0.5;
const AMP_STEP: f64 = 0.5;
const OFFSET_STEP: f64 = 0.5;
const DUTY_STEP: f64 = 5.0;
const DURATION_STEP: f64 = 0.5;

/// Which parameter row of the active waveform the arrow keys edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamField {
    Kind,
    Frequency,
    Amplitude,
    Offset,
    DutyCycle,
}

impl ParamField {
    pub const ALL: [ParamField; 5] = [
        ParamField::Kind,
        ParamField::Frequency,
        ParamField::Amplitude,
        ParamField::Offset,
        ParamField::DutyCycle,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ParamField::Kind => "Kind",
            ParamField::Frequency => "Frequency",
            ParamField::Amplitude => "Amplitude",
            ParamField::Offset => "Offset",
            ParamField::DutyCycle => "Duty cycle",
        }
    }

    fn next(self) -> ParamField {
        match self {
            ParamField::Kind => ParamField::Frequency,
            ParamField::Frequency => ParamField::Amplitude,
            ParamField::Amplitude => ParamField::Offset,
            ParamField::Offset => ParamField::DutyCycle,
            ParamField::DutyCycle => ParamField::Kind,
        }
    }

    fn prev(self) -> ParamField {
        match self {
            ParamField::Kind => ParamField::DutyCycle,
            ParamField::Frequency => ParamField::Kind,
            ParamField::Amplitude => ParamField::Frequency,
            ParamField::Offset => ParamField::Amplitude,
            ParamField::DutyCycle => ParamField::Offset,
        }
    }
}

pub struct App {
    pub session: Session,
    pub config: Config,
    /// Latest computation, refreshed on every edit.
    pub frame: SessionFrame,
    pub selected: ParamField,
    pub theme: Theme,
    /// One-line feedback from the last export or save.
    pub status: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let session = config.initial_session();
        let frame = session.compute();
        let theme = config.display.theme;
        Self {
            session,
            config,
            frame,
            selected: ParamField::Kind,
            theme,
            status: None,
            should_quit: false,
        }
    }

    /// Run the UI event loop: draw, poll keys at ~60fps, mutate, repeat.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, self))?;

            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }
        Ok(())
    }

    fn recompute(&mut self) {
        self.frame = self.session.compute();
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('a') => {
                if self.session.add_waveform().is_some() {
                    self.recompute();
                } else {
                    self.status = Some("Waveform limit reached (5)".to_string());
                }
            }
            KeyCode::Char('d') => {
                let id = self.session.active_index;
                if self.session.remove_waveform(id) {
                    self.recompute();
                } else {
                    self.status = Some("At least one waveform is required".to_string());
                }
            }
            KeyCode::Tab => self.session.next_active(),
            KeyCode::Char(' ') => {
                if let Some(active) = self.session.active_mut() {
                    active.enabled = !active.enabled;
                    self.recompute();
                }
            }
            KeyCode::Up => self.selected = self.selected.prev(),
            KeyCode::Down => self.selected = self.selected.next(),
            KeyCode::Left => self.adjust(-1.0),
            KeyCode::Right => self.adjust(1.0),
            KeyCode::Char('m') => {
                self.session.show_max = !self.session.show_max;
                self.recompute();
            }
            KeyCode::Char('n') => {
                self.session.show_min = !self.session.show_min;
                self.recompute();
            }
            KeyCode::Char('r') => {
                self.session.show_rms = !self.session.show_rms;
                self.recompute();
            }
            KeyCode::Char('g') => self.session.show_grid = !self.session.show_grid,
            KeyCode::Char('u') => self.session.auto_scale = !self.session.auto_scale,
            KeyCode::Char('t') => self.theme = self.theme.toggled(),
            KeyCode::Char('[') => {
                self.session
                    .set_duration(self.session.duration() - DURATION_STEP);
                self.recompute();
            }
            KeyCode::Char(']') => {
                self.session
                    .set_duration(self.session.duration() + DURATION_STEP);
                self.recompute();
            }
            KeyCode::Char('c') => self.export_csv(),
            KeyCode::Char('j') => self.export_json(),
            KeyCode::Char('w') => self.save_config(),
            _ => {}
        }
    }

    /// Apply an arrow-key nudge to the selected parameter row.
    fn adjust(&mut self, direction: f64) {
        let selected = self.selected;
        let Some(active) = self.session.active_mut() else {
            return;
        };
        match selected {
            ParamField::Kind => {
                active.kind = if direction > 0.0 {
                    active.kind.next()
                } else {
                    active.kind.prev()
                };
            }
            ParamField::Frequency => active.nudge_frequency(direction * FREQ_STEP),
            ParamField::Amplitude => active.nudge_amplitude(direction * AMP_STEP),
            ParamField::Offset => active.nudge_offset(direction * OFFSET_STEP),
            ParamField::DutyCycle => active.nudge_duty_cycle(direction * DUTY_STEP),
        }
        self.recompute();
    }

    fn export_csv(&mut self) {
        let filename = export::sanitize_filename("wavescope_export", ".csv");
        self.status = Some(
            match export::export_csv(
                &filename,
                &self.frame,
                self.session.sample_rate,
                self.session.duration(),
            ) {
                Ok(()) => format!("Exported {filename}"),
                Err(err) => format!("Export failed: {err}"),
            },
        );
    }

    fn export_json(&mut self) {
        let filename = export::sanitize_filename("wavescope_export", ".json");
        self.status = Some(
            match export::export_json(
                &filename,
                &self.frame,
                self.session.sample_rate,
                self.session.duration(),
            ) {
                Ok(()) => format!("Exported {filename}"),
                Err(err) => format!("Export failed: {err}"),
            },
        );
    }

    /// Persist the current session shape as the startup defaults.
    fn save_config(&mut self) {
        self.config.session.duration = self.session.duration();
        self.config.display.theme = self.theme;
        if let Some(active) = self.session.active() {
            self.config.waveform_defaults.kind = active.kind.name().to_string();
            self.config.waveform_defaults.frequency = active.frequency;
            self.config.waveform_defaults.amplitude = active.amplitude;
            self.config.waveform_defaults.offset = active.offset;
            self.config.waveform_defaults.duty_cycle = active.duty_cycle;
        }
        self.status = Some(match self.config.save(CONFIG_FILENAME) {
            Ok(()) => format!("Saved {CONFIG_FILENAME}"),
            Err(err) => format!("Save failed: {err}"),
        });
    }
}
