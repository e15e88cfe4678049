use ratatui::style::Color;

use crate::domain::{conditions::WeatherCategory, snapshot::Units};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    TrueColor,
    Xterm256,
    Basic16,
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub text: Color,
    pub muted_text: Color,
    pub border: Color,
    pub focus_border: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub temp_line: Color,
    pub reference: Color,
    pub rain: Color,
    pub wind: Color,
    pub temp_cold: Color,
    pub temp_mild: Color,
    pub temp_warm: Color,
    pub temp_hot: Color,
}

pub fn detect_color_capability() -> ColorCapability {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorCapability::Basic16;
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return ColorCapability::TrueColor;
    }

    let term = std::env::var("TERM").unwrap_or_default().to_lowercase();
    if term.contains("256color") {
        ColorCapability::Xterm256
    } else {
        ColorCapability::Basic16
    }
}

/// Palette keyed on the current condition; night variants are cooler.
#[must_use]
pub fn theme_for(category: WeatherCategory, is_day: bool, capability: ColorCapability) -> Theme {
    let accent = match (category, is_day) {
        (WeatherCategory::Clear, true) => (255, 215, 117),
        (WeatherCategory::Clear, false) => (173, 216, 255),
        (WeatherCategory::Cloudy, _) => (210, 223, 235),
        (WeatherCategory::Rain, _) => (153, 214, 255),
        (WeatherCategory::Snow, _) => (237, 247, 255),
        (WeatherCategory::Fog, _) => (216, 220, 224),
        (WeatherCategory::Thunder, _) => (255, 223, 112),
        (WeatherCategory::Unknown, _) => (205, 219, 234),
    };
    let border = if is_day {
        (96, 132, 170)
    } else {
        (64, 82, 120)
    };

    let rgb = |(r, g, b): (u8, u8, u8)| quantize(Color::Rgb(r, g, b), capability);
    Theme {
        accent: rgb(accent),
        text: rgb((236, 240, 244)),
        muted_text: rgb((150, 160, 172)),
        border: rgb(border),
        focus_border: rgb(accent),
        success: rgb((120, 220, 140)),
        warning: rgb((250, 200, 80)),
        danger: rgb((240, 100, 100)),
        temp_line: rgb((255, 170, 90)),
        reference: rgb((120, 128, 140)),
        rain: rgb((90, 160, 250)),
        wind: rgb((150, 230, 200)),
        temp_cold: rgb((110, 180, 255)),
        temp_mild: rgb((130, 220, 150)),
        temp_warm: rgb((250, 210, 100)),
        temp_hot: rgb((250, 120, 90)),
    }
}

#[must_use]
pub fn condition_color(theme: &Theme, category: WeatherCategory) -> Color {
    match category {
        WeatherCategory::Clear | WeatherCategory::Thunder => theme.warning,
        WeatherCategory::Cloudy | WeatherCategory::Fog => theme.muted_text,
        WeatherCategory::Rain => theme.rain,
        WeatherCategory::Snow => theme.text,
        WeatherCategory::Unknown => theme.accent,
    }
}

/// Colour band for a temperature expressed in `units`.
#[must_use]
pub fn temp_color(theme: &Theme, temp: f64, units: Units) -> Color {
    let celsius = match units {
        Units::Metric => temp,
        Units::Imperial => (temp - 32.0) * 5.0 / 9.0,
    };
    if celsius <= 2.0 {
        theme.temp_cold
    } else if celsius <= 16.0 {
        theme.temp_mild
    } else if celsius <= 28.0 {
        theme.temp_warm
    } else {
        theme.temp_hot
    }
}

#[must_use]
pub fn quantize(color: Color, capability: ColorCapability) -> Color {
    match (capability, color) {
        (ColorCapability::Xterm256, Color::Rgb(r, g, b)) => {
            let to_cube = |v: u8| -> u8 { (u16::from(v) * 5 / 255) as u8 };
            Color::Indexed(16 + 36 * to_cube(r) + 6 * to_cube(g) + to_cube(b))
        }
        (ColorCapability::Basic16, Color::Rgb(r, g, b)) => basic16_from_rgb(r, g, b),
        (_, c) => c,
    }
}

fn basic16_from_rgb(r: u8, g: u8, b: u8) -> Color {
    let (rf, gf, bf) = (
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
    );
    let max = rf.max(gf.max(bf));
    let min = rf.min(gf.min(bf));
    let delta = max - min;
    let light = (max + min) / 2.0;

    if delta < 0.08 {
        return match light {
            l if l < 0.20 => Color::Black,
            l if l < 0.40 => Color::DarkGray,
            l if l < 0.72 => Color::Gray,
            _ => Color::White,
        };
    }

    let hue = if (max - rf).abs() < f32::EPSILON {
        60.0 * ((gf - bf) / delta).rem_euclid(6.0)
    } else if (max - gf).abs() < f32::EPSILON {
        60.0 * (((bf - rf) / delta) + 2.0)
    } else {
        60.0 * (((rf - gf) / delta) + 4.0)
    };

    let bright = light >= 0.55;
    let (dim, lit) = match hue {
        h if !(30.0..330.0).contains(&h) => (Color::Red, Color::LightRed),
        h if h < 90.0 => (Color::Yellow, Color::LightYellow),
        h if h < 150.0 => (Color::Green, Color::LightGreen),
        h if h < 210.0 => (Color::Cyan, Color::LightCyan),
        h if h < 270.0 => (Color::Blue, Color::LightBlue),
        _ => (Color::Magenta, Color::LightMagenta),
    };
    if bright { lit } else { dim }
}
