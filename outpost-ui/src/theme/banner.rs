use iced::widget::container::Style;
use iced::Background;

use super::palette::BannerPalette;
use super::Theme;

fn flat(p: &BannerPalette) -> Style {
    Style {
        background: Some(Background::Color(p.background)),
        text_color: Some(p.text),
        ..Style::default()
    }
}

pub fn success(theme: &Theme) -> Style {
    flat(&theme.colors.banners.success)
}

pub fn warning(theme: &Theme) -> Style {
    flat(&theme.colors.banners.warning)
}
