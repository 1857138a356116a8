//! Input Panel (Left)
//!
//! Age, height and weight fields with their unit selectors. Each field shows
//! its own validation message underneath while it is invalid.

use iced::widget::{column, container, pick_list, row, scrollable, text, text_input, Column, Space};
use iced::{Alignment, Element, Length};

use bmi_core::units::{HeightUnit, WeightUnit};
use bmi_core::validation::AGE_RANGE;
use bmi_core::CalcError;

use crate::{App, Message};

/// Render the measurement form
pub fn view_input_panel(app: &App) -> Element<'_, Message> {
    let form = &app.form;

    let height_unit = pick_list(&HeightUnit::ALL[..], Some(form.height_unit), Message::HeightUnitSelected)
        .width(Length::Fixed(150.0))
        .text_size(11);

    let weight_unit = pick_list(&WeightUnit::ALL[..], Some(form.weight_unit), Message::WeightUnitSelected)
        .width(Length::Fixed(150.0))
        .text_size(11);

    let age_hint = format!("{}-{}", AGE_RANGE.start(), AGE_RANGE.end());
    let height_hint = match form.height_unit {
        HeightUnit::Centimeters => "e.g. 175",
        HeightUnit::Feet => "e.g. 5.9",
    };
    let weight_hint = match form.weight_unit {
        WeightUnit::Kilograms => "e.g. 70",
        WeightUnit::Pounds => "e.g. 155",
    };

    let panel: Column<'_, Message> = column![
        text("Your Measurements").size(14),
        Space::new().height(8),
        labeled_input("Age:", age_hint, &form.age, Message::AgeChanged),
        field_error(app, "age"),
        Space::new().height(4),
        labeled_input("Height:", height_hint.to_string(), &form.height, Message::HeightChanged),
        row![text("").width(Length::Fixed(80.0)), height_unit].align_y(Alignment::Center),
        field_error(app, "height"),
        Space::new().height(4),
        labeled_input("Weight:", weight_hint.to_string(), &form.weight, Message::WeightChanged),
        row![text("").width(Length::Fixed(80.0)), weight_unit].align_y(Alignment::Center),
        field_error(app, "weight"),
        Space::new().height(15),
        text("Results update as you type.").size(10).color([0.5, 0.5, 0.5]),
    ]
    .spacing(6);

    container(scrollable(panel.padding(8)))
        .width(Length::FillPortion(30))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// Helper to create a labeled text input
fn labeled_input<'a>(
    label: &'a str,
    placeholder: String,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(80.0)),
        text_input(&placeholder, value)
            .on_input(on_change)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Validation message for one field, or nothing
fn field_error<'a>(app: &'a App, field: &str) -> Element<'a, Message> {
    match app.field_errors.iter().find(|e| e.field() == Some(field)) {
        Some(error) => text(error_message(error)).size(10).color([0.8, 0.2, 0.2]).into(),
        None => Space::new().height(0).into(),
    }
}

fn error_message(error: &CalcError) -> String {
    match error {
        CalcError::InvalidInput { reason, .. } => reason.clone(),
        other => other.to_string(),
    }
}
