//! Toolbar component
//!
//! Contains the reading actions (Record, Clear History, Reset) and the
//! settings dropdown.

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Render the application header
pub fn view_header() -> Element<'static, Message> {
    row![
        text("BMI Calculator").size(28),
        Space::new().width(Length::Fill),
        text("Body Mass Index").size(14),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Render the toolbar.
///
/// Record is only enabled while there is a result to record, Clear History
/// only while there is something to clear.
pub fn view_toolbar(can_record: bool, has_history: bool, settings_menu_open: bool) -> Element<'static, Message> {
    let actions = row![
        button(text("Record").size(11))
            .on_press_maybe(can_record.then_some(Message::RecordReading))
            .padding(Padding::from([4, 8]))
            .style(button::primary),
        button(text("Clear History").size(11))
            .on_press_maybe(has_history.then_some(Message::ClearHistory))
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
        button(text("Reset").size(11))
            .on_press(Message::ResetForm)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
    ]
    .spacing(4);

    let settings_button_text = if settings_menu_open { "Settings ▲" } else { "Settings ▼" };
    let settings_button = button(text(settings_button_text).size(11))
        .on_press(Message::ToggleSettingsMenu)
        .padding(Padding::from([4, 8]))
        .style(if settings_menu_open { button::primary } else { button::secondary });

    row![
        actions,
        Space::new().width(Length::Fill),
        settings_button,
    ]
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}

/// Render the settings dropdown menu
pub fn view_settings_menu(dark_mode: bool) -> Element<'static, Message> {
    let theme_label = if dark_mode { "Light Mode" } else { "Dark Mode" };

    let dropdown_content = column![
        button(text(theme_label).size(10))
            .on_press(Message::ToggleDarkMode)
            .padding(Padding::from([4, 12]))
            .width(Length::Fill)
            .style(button::secondary),
        button(text("Use Current Units as Default").size(10))
            .on_press(Message::SaveDefaultUnits)
            .padding(Padding::from([4, 12]))
            .width(Length::Fill)
            .style(button::secondary),
    ]
    .spacing(2)
    .width(Length::Fixed(200.0));

    container(dropdown_content)
        .padding(4)
        .style(container::bordered_box)
        .into()
}
