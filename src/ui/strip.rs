use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, column, container, image, scrollable, text, Row};
use iced::{Alignment, Border, Color, Element, Length, Theme};

use crate::state::gallery::Gallery;
use crate::Message;

const THUMB_SIZE: f32 = 56.0;

/// Horizontal strip of every acquired image.
///
/// Tapping a thumbnail selects it for the previews; the button beneath
/// removes it from the collection.
pub fn view(gallery: &Gallery) -> Element<'static, Message> {
    let mut thumbs = Row::new().spacing(8).align_y(Alignment::Start);

    for (index, image_ref) in gallery.iter().enumerate() {
        let is_selected = index == gallery.selected_index();

        let thumb = image(image::Handle::from_path(image_ref.path()))
            .width(Length::Fixed(THUMB_SIZE))
            .height(Length::Fixed(THUMB_SIZE))
            .content_fit(iced::ContentFit::Cover);

        let framed = container(thumb).style(move |_theme: &Theme| container::Style {
            border: Border {
                color: if is_selected {
                    Color::from_rgb8(0x00, 0x7a, 0xff)
                } else {
                    Color::from_rgb8(0xdd, 0xdd, 0xdd)
                },
                width: if is_selected { 2.0 } else { 1.0 },
                radius: 6.0.into(),
            },
            ..container::Style::default()
        });

        thumbs = thumbs.push(
            column![
                button(framed)
                    .padding(0)
                    .style(button::text)
                    .on_press(Message::ImageSelected(index)),
                button(text("✕").size(11.0))
                    .padding([1.0, 6.0])
                    .style(button::text)
                    .on_press(Message::ImageRemoved(index)),
            ]
            .spacing(2)
            .align_x(Alignment::Center),
        );
    }

    scrollable(thumbs)
        .direction(Direction::Horizontal(Scrollbar::new().width(2).scroller_width(2)))
        .width(Length::Fill)
        .into()
}
