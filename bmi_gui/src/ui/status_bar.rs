//! Status Bar (Bottom)
//!
//! Displays:
//! - History file path
//! - Number of saved readings
//! - Status messages

use std::path::Path;

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(history_path: &'a Path, record_count: usize, status: &'a str) -> Element<'a, Message> {
    row![
        text(history_path.display().to_string()).size(10),
        text(format!("  [{} readings]", record_count)).size(10).color([0.5, 0.5, 0.5]),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
