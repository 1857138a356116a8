//! Reference Panel (Right)
//!
//! Static BMI category table and notes, followed by the most recent saved
//! readings.

use iced::widget::{column, container, row, rule, scrollable, text, Column, Space};
use iced::{Element, Length};

use bmi_core::reference::{CATEGORY_TABLE, NOTES};

use crate::{App, Message};

const RECENT_READINGS: usize = 10;

/// Render the reference panel
pub fn view_reference_panel(app: &App) -> Element<'_, Message> {
    let current = app.result.as_ref().map(|(_, r)| r.category);

    let mut table: Column<'_, Message> = column![].spacing(4);
    for entry in &CATEGORY_TABLE {
        let color = entry.category.display_color().rgb();
        let marker = if current == Some(entry.category) { ">" } else { "" };
        table = table.push(row![
            text(marker).size(11).width(Length::Fixed(12.0)),
            text(entry.category.display_name()).size(11).color(color).width(Length::Fixed(110.0)),
            text(entry.range_label).size(11),
        ]);
    }

    let mut notes: Column<'_, Message> = column![].spacing(2);
    for note in NOTES {
        notes = notes.push(text(format!("- {}", note)).size(10));
    }

    let content = column![
        text("BMI Categories").size(14),
        Space::new().height(8),
        table,
        Space::new().height(12),
        text("About BMI").size(12),
        notes,
        Space::new().height(12),
        rule::horizontal(1),
        Space::new().height(8),
        view_recent_readings(app),
    ]
    .spacing(2);

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(30))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn view_recent_readings(app: &App) -> Column<'_, Message> {
    let mut list: Column<'_, Message> = column![text("Recent Readings").size(12)].spacing(2);

    if app.history.records.is_empty() {
        return list.push(text("No readings recorded yet.").size(10).color([0.5, 0.5, 0.5]));
    }

    for record in app.history.recent(RECENT_READINGS) {
        list = list.push(row![
            text(record.created_at.format("%Y-%m-%d %H:%M").to_string())
                .size(10)
                .width(Length::Fixed(110.0)),
            text(record.display_value()).size(10).width(Length::Fixed(40.0)),
            text(record.category.display_name())
                .size(10)
                .color(record.category.display_color().rgb()),
        ]);
    }
    list
}
