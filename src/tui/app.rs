use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::Instant;

use crate::config::Config;
use crate::radar::{to_polar_polygon, PolarVertex};
use crate::scoring::{build_profile, classify, Axis, AxisScores, Profile, ProfileConfig, TypeCode, MAX_SCORE};
use crate::tui::theme::ThemeColors;

const MAX_UNDO: usize = 50;
const FLASH_SECS: u64 = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlashKind {
    Info,
    Success,
    Error,
}

pub struct App {
    pub scores: AxisScores,
    pub initial_scores: AxisScores,
    pub selected: usize,
    pub step: u8,
    pub profile_config: ProfileConfig,
    pub export_path: PathBuf,
    pub input_mode: InputMode,
    pub flash_message: Option<(String, FlashKind, Instant)>,
    pub undo_stack: VecDeque<AxisScores>,
    pub should_quit: bool,
    pub theme: ThemeColors,
}

impl App {
    pub fn new(scores: AxisScores, config: &Config, theme: ThemeColors) -> Self {
        Self {
            scores,
            initial_scores: scores,
            selected: 0,
            step: config.slider_step(),
            profile_config: config.profile(),
            export_path: config.export_path(),
            input_mode: InputMode::Normal,
            flash_message: None,
            undo_stack: VecDeque::new(),
            should_quit: false,
            theme,
        }
    }

    pub fn selected_axis(&self) -> Axis {
        Axis::ALL[self.selected]
    }

    pub fn next_axis(&mut self) {
        self.selected = (self.selected + 1) % Axis::ALL.len();
    }

    pub fn previous_axis(&mut self) {
        self.selected = if self.selected == 0 {
            Axis::ALL.len() - 1
        } else {
            self.selected - 1
        };
    }

    /// Move the selected slider by `delta`, stopping at the 0 and 100 ends.
    pub fn adjust(&mut self, delta: i64) {
        let axis = self.selected_axis();
        let current = i64::from(self.scores.get(axis));
        let target = (current + delta).clamp(0, i64::from(MAX_SCORE));
        self.set_selected(target);
    }

    pub fn increase(&mut self) {
        self.adjust(i64::from(self.step));
    }

    pub fn decrease(&mut self) {
        self.adjust(-i64::from(self.step));
    }

    pub fn set_selected(&mut self, value: i64) {
        let axis = self.selected_axis();
        if i64::from(self.scores.get(axis)) == value {
            return;
        }
        match self.scores.with(axis, value) {
            Ok(updated) => {
                self.push_undo(self.scores);
                self.scores = updated;
            }
            Err(e) => self.show_flash(e.to_string(), FlashKind::Error),
        }
    }

    /// Restore the scores the explorer opened with
    pub fn reset(&mut self) {
        if self.scores != self.initial_scores {
            self.push_undo(self.scores);
            self.scores = self.initial_scores;
            self.show_flash("Reset to initial scores (z to undo)".to_string(), FlashKind::Info);
        }
    }

    pub fn push_undo(&mut self, previous: AxisScores) {
        self.undo_stack.push_front(previous);
        if self.undo_stack.len() > MAX_UNDO {
            self.undo_stack.pop_back();
        }
    }

    pub fn undo_last(&mut self) {
        match self.undo_stack.pop_front() {
            Some(previous) => {
                self.scores = previous;
                self.show_flash("Undone".to_string(), FlashKind::Info);
            }
            None => self.show_flash("Nothing to undo".to_string(), FlashKind::Info),
        }
    }

    pub fn export(&mut self) {
        match crate::output::export_csv(&self.export_path, &self.scores) {
            Ok(path) => self.show_flash(format!("Exported: {}", path.display()), FlashKind::Success),
            Err(e) => {
                tracing::warn!("export failed: {:#}", e);
                self.show_flash(format!("Export failed: {}", e), FlashKind::Error)
            }
        }
    }

    pub fn code(&self) -> TypeCode {
        classify(&self.scores)
    }

    pub fn profile(&self) -> Profile {
        build_profile(&self.scores, &self.profile_config)
    }

    pub fn polygon(&self) -> Vec<PolarVertex> {
        to_polar_polygon(&self.scores)
    }

    pub fn update_flash(&mut self) {
        if let Some((_, _, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= FLASH_SECS {
                self.flash_message = None;
            }
        }
    }

    pub fn show_flash(&mut self, msg: String, kind: FlashKind) {
        self.flash_message = Some((msg, kind, Instant::now()));
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}
