use crate::{component::text, theme, widget::*};
use iced::{Alignment, Length};

/// Transient banner for a successful operation, dismissed by `on_close`.
pub fn success<'a, T: 'a + Clone>(message: String, on_close: T) -> Container<'a, T> {
    banner(
        Row::new().push(text::p1_bold(message)),
        theme::banner::success,
        on_close,
    )
}

/// Transient banner reporting a failed operation, dismissed by `on_close`.
pub fn warning<'a, T: 'a + Clone>(
    message: String,
    detail: Option<String>,
    on_close: T,
) -> Container<'a, T> {
    banner(
        Row::new()
            .spacing(10)
            .align_y(Alignment::Center)
            .push(text::p1_bold(message))
            .push_maybe(detail.map(text::p2_regular)),
        theme::banner::warning,
        on_close,
    )
}

fn banner<'a, T: 'a + Clone>(
    content: Row<'a, T>,
    style: fn(&theme::Theme) -> iced::widget::container::Style,
    on_close: T,
) -> Container<'a, T> {
    Container::new(
        Row::new()
            .align_y(Alignment::Center)
            .push(Container::new(content).width(Length::Fill))
            .push(
                Button::new(text::p1_bold("✕"))
                    .style(theme::button::transparent)
                    .on_press(on_close),
            ),
    )
    .padding(15)
    .width(Length::Fill)
    .style(style)
}
