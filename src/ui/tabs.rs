use iced::widget::{button, container, text, Row};
use iced::{Alignment, Border, Color, Element, Length, Theme};

use crate::Message;

/// Tab bar over the preview pager.
///
/// Purely a view of the active page index: tapping a label emits
/// [`Message::TabPressed`] and the pager sync decides what happens.
pub fn view(labels: &[&'static str], active: usize) -> Element<'static, Message> {
    let mut bar = Row::new().spacing(0).width(Length::Fill);

    for (index, label) in labels.iter().enumerate() {
        let is_active = index == active;

        let label = text(*label).size(15.0).color(if is_active {
            Color::from_rgb8(0x00, 0x7a, 0xff)
        } else {
            Color::from_rgb8(0x66, 0x66, 0x66)
        });

        bar = bar.push(
            button(container(label).width(Length::Fill).align_x(Alignment::Center))
                .width(Length::Fill)
                .padding([10.0, 0.0])
                .style(move |_theme: &Theme, _status| button::Style {
                    background: None,
                    border: Border {
                        color: if is_active {
                            Color::from_rgb8(0x00, 0x7a, 0xff)
                        } else {
                            Color::TRANSPARENT
                        },
                        width: 2.0,
                        radius: 0.0.into(),
                    },
                    ..button::Style::default()
                })
                .on_press(Message::TabPressed(index)),
        );
    }

    bar.into()
}
