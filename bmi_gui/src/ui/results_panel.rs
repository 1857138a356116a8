//! Results Panel (Center)
//!
//! Shows the BMI, its category in the category color and the advisory text.
//! Until the form is complete and valid, shows a prompt instead.

use iced::widget::{column, container, scrollable, text, Column, Space};
use iced::{Element, Length};

use bmi_core::reference::row_for;
use bmi_core::{BmiResult, Measurement};

use crate::{App, Message};

/// Render the results panel
pub fn view_results_panel(app: &App) -> Element<'_, Message> {
    let content: Column<'_, Message> = match &app.result {
        Some((measurement, result)) => view_result(measurement, result),
        None if !app.field_errors.is_empty() => column![
            text("Your Result").size(14),
            Space::new().height(8),
            text("Fix the highlighted fields to see your BMI.").size(12).color([0.8, 0.2, 0.2]),
        ],
        None => column![
            text("Your Result").size(14),
            Space::new().height(8),
            text("Enter your age, height and weight to calculate your BMI.")
                .size(12)
                .color([0.5, 0.5, 0.5]),
        ],
    };

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(40))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn view_result<'a>(measurement: &'a Measurement, result: &'a BmiResult) -> Column<'a, Message> {
    let color = result.display_color.rgb();

    column![
        text("Your Result").size(14),
        Space::new().height(12),
        text(result.display_value()).size(48).color(color),
        text(result.category.display_name()).size(20).color(color),
        text(format!("BMI range {}", row_for(result.category).range_label))
            .size(11)
            .color([0.5, 0.5, 0.5]),
        Space::new().height(12),
        text(result.advisory.as_str()).size(12),
        Space::new().height(16),
        text("Based On").size(12),
        text(format!("Age: {} years", measurement.age)).size(11),
        text(format!(
            "Height: {} ({:.2} m)",
            measurement.height_label(),
            measurement.height_meters().value()
        ))
        .size(11),
        text(format!(
            "Weight: {} ({:.1} kg)",
            measurement.weight_label(),
            measurement.weight_kilograms().value()
        ))
        .size(11),
    ]
    .spacing(2)
}
