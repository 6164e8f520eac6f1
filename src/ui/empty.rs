use iced::widget::{button, text, Column};
use iced::{Alignment, Color, Element, Length};

use crate::Message;

/// Empty state shown before any image has been acquired.
///
/// Only the acquisition controls are reachable from here; the tab bar and
/// the previews appear once the collection has at least one image.
pub fn view() -> Element<'static, Message> {
    let title = text("No image yet")
        .size(20.0)
        .color(Color::from_rgb8(0x8e, 0x8e, 0x8e));

    let hint = text("Pick a square image to see how it looks as a profile icon.")
        .size(14.0)
        .color(Color::from_rgb8(0x8e, 0x8e, 0x8e));

    Column::new()
        .spacing(16)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .push(title)
        .push(hint)
        .push(
            button("Choose an image")
                .padding([10.0, 20.0])
                .on_press(Message::PickImage),
        )
        .push(
            button("Choose several…")
                .padding([8.0, 16.0])
                .style(button::secondary)
                .on_press(Message::PickImages),
        )
        .into()
}
