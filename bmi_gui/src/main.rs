//! # BMI Calculator GUI Application
//!
//! Single-window calculator built with Iced. The result is recomputed on
//! every form change once all fields are filled in and valid.
//!
//! ## Usage
//!
//! ```text
//! bmi_gui [history path]
//! ```
//!
//! The history path defaults to `bmi_history.bmi.json` in the working directory.

mod ui;

use std::path::PathBuf;

use iced::widget::{column, container, row, rule, Space};
use iced::{Element, Length, Size, Task, Theme};

use bmi_core::file_io::{load_or_default, save_history, DEFAULT_HISTORY_FILE};
use bmi_core::units::{HeightUnit, WeightUnit};
use bmi_core::{compute_bmi, BmiRecord, BmiResult, CalcError, History, Measurement, MeasurementForm};

pub fn main() -> iced::Result {
    env_logger::init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window_size(Size::new(1100.0, 720.0))
        .run()
}

#[derive(Debug, Clone)]
pub enum Message {
    // Form
    AgeChanged(String),
    HeightChanged(String),
    HeightUnitSelected(HeightUnit),
    WeightChanged(String),
    WeightUnitSelected(WeightUnit),
    ResetForm,

    // History
    RecordReading,
    ClearHistory,

    // Settings
    ToggleSettingsMenu,
    ToggleDarkMode,
    SaveDefaultUnits,
}

pub struct App {
    pub form: MeasurementForm,
    /// Latest valid measurement and its result
    pub result: Option<(Measurement, BmiResult)>,
    /// Problems with the current input, one per field
    pub field_errors: Vec<CalcError>,

    pub history: History,
    pub history_path: PathBuf,
    /// False when the history file exists but could not be read
    pub history_writable: bool,

    pub settings_menu_open: bool,
    pub status: String,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let history_path = std::env::args()
            .nth(1)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY_FILE));

        let (history, history_writable, status) = match load_or_default(&history_path) {
            Ok(history) => {
                let status = format!("{} saved readings", history.record_count());
                (history, true, status)
            }
            Err(e) => {
                log::error!("could not load {}: {}", history_path.display(), e);
                (History::default(), false, format!("History not loaded: {}", e))
            }
        };

        let prefs = history.settings;
        let app = App {
            form: MeasurementForm::with_units(prefs.default_height_unit, prefs.default_weight_unit),
            result: None,
            field_errors: Vec::new(),
            history,
            history_path,
            history_writable,
            settings_menu_open: false,
            status,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        match &self.result {
            Some((_, result)) => format!("BMI Calculator - {} ({})", result.display_value(), result.category),
            None => "BMI Calculator".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        if self.history.settings.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AgeChanged(value) => {
                self.form.age = value;
                self.recalculate();
            }
            Message::HeightChanged(value) => {
                self.form.height = value;
                self.recalculate();
            }
            Message::HeightUnitSelected(unit) => {
                self.form.height_unit = unit;
                self.recalculate();
            }
            Message::WeightChanged(value) => {
                self.form.weight = value;
                self.recalculate();
            }
            Message::WeightUnitSelected(unit) => {
                self.form.weight_unit = unit;
                self.recalculate();
            }
            Message::ResetForm => {
                let prefs = self.history.settings;
                self.form = MeasurementForm::with_units(prefs.default_height_unit, prefs.default_weight_unit);
                self.recalculate();
            }
            Message::RecordReading => {
                if let Some((measurement, result)) = &self.result {
                    let record = BmiRecord::from_calculation(measurement, result, self.history.user_id());
                    let value = record.display_value();
                    self.history.add_record(record);
                    self.persist(format!("Recorded BMI {}", value));
                }
            }
            Message::ClearHistory => {
                self.history.clear();
                self.persist("History cleared".to_string());
            }
            Message::ToggleSettingsMenu => {
                self.settings_menu_open = !self.settings_menu_open;
            }
            Message::ToggleDarkMode => {
                self.history.settings.dark_mode = !self.history.settings.dark_mode;
                self.settings_menu_open = false;
                self.persist("Theme updated".to_string());
            }
            Message::SaveDefaultUnits => {
                self.history.settings.default_height_unit = self.form.height_unit;
                self.history.settings.default_weight_unit = self.form.weight_unit;
                self.settings_menu_open = false;
                self.persist(format!(
                    "Default units set to {} / {}",
                    self.form.height_unit.code(),
                    self.form.weight_unit.code()
                ));
            }
        }
        Task::none()
    }

    /// Re-run validation and the calculation against the current form.
    ///
    /// Empty fields are not reported as errors; the result simply stays
    /// hidden until the form is complete.
    fn recalculate(&mut self) {
        self.field_errors = self
            .form
            .field_errors()
            .into_iter()
            .filter(|e| !matches!(e, CalcError::MissingField { .. }))
            .collect();

        if !self.form.is_complete() || !self.field_errors.is_empty() {
            self.result = None;
            return;
        }

        self.result = match self.form.parse() {
            Ok(measurement) => Some((measurement, compute_bmi(&measurement))),
            Err(e) => {
                log::warn!("form passed field checks but failed to parse: {}", e);
                self.field_errors.push(e);
                None
            }
        };
    }

    /// Save the history, reporting the outcome in the status bar
    fn persist(&mut self, success: String) {
        if !self.history_writable {
            self.status = format!("{} (not saved: history file unreadable)", success);
            return;
        }
        self.status = match save_history(&self.history, &self.history_path) {
            Ok(()) => success,
            Err(e) => {
                log::error!("save failed: {}", e);
                format!("Save failed: {}", e)
            }
        };
    }

    fn view(&self) -> Element<'_, Message> {
        let header = ui::toolbar::view_header();
        let toolbar = ui::toolbar::view_toolbar(
            self.result.is_some(),
            !self.history.records.is_empty(),
            self.settings_menu_open,
        );

        let mut top = column![header, toolbar].spacing(4);
        if self.settings_menu_open {
            top = top.push(row![
                Space::new().width(Length::Fill),
                ui::toolbar::view_settings_menu(self.history.settings.dark_mode),
            ]);
        }

        let panels = row![
            ui::input_panel::view_input_panel(self),
            ui::results_panel::view_results_panel(self),
            ui::reference_panel::view_reference_panel(self),
        ]
        .spacing(10)
        .height(Length::Fill);

        let status_bar = ui::status_bar::view_status_bar(&self.history_path, self.history.record_count(), &self.status);

        container(
            column![top, rule::horizontal(1), panels, rule::horizontal(1), status_bar]
                .spacing(8)
                .padding(10),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}
