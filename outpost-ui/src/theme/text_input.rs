use iced::{
    widget::text_input::{Catalog, Status, Style, StyleFn},
    Background, Border, Color,
};

use super::{palette::TextInputPalette, Theme};

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    let c = &theme.colors.text_inputs.primary;
    match status {
        Status::Disabled => styled(&c.disabled),
        _ => styled(&c.active),
    }
}

pub fn invalid(theme: &Theme, status: Status) -> Style {
    let c = &theme.colors.text_inputs.invalid;
    match status {
        Status::Disabled => styled(&c.disabled),
        _ => styled(&c.active),
    }
}

fn styled(p: &TextInputPalette) -> Style {
    Style {
        background: Background::Color(p.background),
        border: border(p.border),
        icon: p.icon,
        placeholder: p.placeholder,
        value: p.value,
        selection: p.selection,
    }
}

fn border(color: Option<Color>) -> Border {
    match color {
        Some(color) => Border {
            radius: 5.0.into(),
            width: 1.0,
            color,
        },
        None => Border::default(),
    }
}
