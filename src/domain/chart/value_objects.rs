use crate::domain::market_data::IndicatorKind;
use derive_more::Display;
use serde::{Deserialize, Serialize, Serializer};
use strum::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

/// Value Object - Price representation. Exactly one is shown at a time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString, AsRefStr,
    IntoStaticStr,
)]
pub enum ChartType {
    #[default]
    #[display(fmt = "Candlestick")]
    #[strum(serialize = "candlestick")]
    Candlestick,
    #[display(fmt = "Line")]
    #[strum(serialize = "line")]
    Line,
    #[display(fmt = "Area")]
    #[strum(serialize = "area")]
    Area,
}

/// Value Object - Chart size in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartDimensions {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self { width: 800, height: 500 }
    }
}

impl ChartDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Value Object - Color, rendered as a CSS color string
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self::rgba(((hex >> 16) & 0xFF) as u8, ((hex >> 8) & 0xFF) as u8, (hex & 0xFF) as u8, 1.0)
    }

    pub fn to_hex(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub const fn with_alpha(&self, alpha: f32) -> Self {
        Self { a: alpha, ..*self }
    }

    /// `#rrggbb` when opaque, `rgba(r, g, b, a)` otherwise.
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:06x}", self.to_hex())
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }

    pub const BLUE: Color = Color::from_hex(0x2962FF);
    pub const ORANGE: Color = Color::from_hex(0xFF9800);
    pub const TEAL: Color = Color::from_hex(0x26A69A);
    pub const RED: Color = Color::from_hex(0xEF5350);
    pub const WHITE: Color = Color::from_hex(0xFFFFFF);
    pub const BACKGROUND: Color = Color::from_hex(0x1E222D);
    pub const GRID: Color = Color::from_hex(0x2B2B43);
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

/// Kind of display series a style creates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum SeriesKind {
    Candlestick,
    Line,
    Area,
    Histogram,
}

/// Fixed visual style of a display series; the variant selects the series kind.
///
/// Serialises to the option object the chart widget expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SeriesStyle {
    #[serde(rename_all = "camelCase")]
    Candlestick {
        up_color: Color,
        down_color: Color,
        border_visible: bool,
        wick_up_color: Color,
        wick_down_color: Color,
    },
    #[serde(rename_all = "camelCase")]
    Line { color: Color, line_width: u32 },
    #[serde(rename_all = "camelCase")]
    Area { top_color: Color, bottom_color: Color, line_color: Color, line_width: u32 },
    #[serde(rename_all = "camelCase")]
    Histogram { color: Color },
}

impl SeriesStyle {
    pub fn kind(&self) -> SeriesKind {
        match self {
            SeriesStyle::Candlestick { .. } => SeriesKind::Candlestick,
            SeriesStyle::Line { .. } => SeriesKind::Line,
            SeriesStyle::Area { .. } => SeriesKind::Area,
            SeriesStyle::Histogram { .. } => SeriesKind::Histogram,
        }
    }

    pub fn for_price(chart_type: ChartType) -> Self {
        match chart_type {
            ChartType::Candlestick => SeriesStyle::Candlestick {
                up_color: Color::TEAL,
                down_color: Color::RED,
                border_visible: false,
                wick_up_color: Color::TEAL,
                wick_down_color: Color::RED,
            },
            ChartType::Line => SeriesStyle::Line { color: Color::BLUE, line_width: 2 },
            ChartType::Area => SeriesStyle::Area {
                top_color: Color::BLUE.with_alpha(0.3),
                bottom_color: Color::BLUE.with_alpha(0.0),
                line_color: Color::BLUE,
                line_width: 2,
            },
        }
    }

    pub fn for_indicator(kind: IndicatorKind) -> Self {
        match kind {
            IndicatorKind::MovingAverage => SeriesStyle::Line { color: Color::BLUE, line_width: 2 },
            IndicatorKind::Rsi => SeriesStyle::Line { color: Color::ORANGE, line_width: 2 },
            IndicatorKind::Macd => SeriesStyle::Histogram { color: Color::BLUE },
        }
    }
}

/// Crosshair behaviour, numbered as the chart widget numbers it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrosshairMode {
    #[default]
    Normal = 0,
    Magnet = 1,
}

/// Chart-wide colors
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTheme {
    pub background: Color,
    pub text: Color,
    pub grid: Color,
    pub border: Color,
    pub crosshair: CrosshairMode,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background: Color::BACKGROUND,
            text: Color::WHITE,
            grid: Color::GRID,
            border: Color::GRID,
            crosshair: CrosshairMode::Normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_colors() {
        assert_eq!(Color::BLUE.to_css(), "#2962ff");
        assert_eq!(Color::BLUE.with_alpha(0.3).to_css(), "rgba(41, 98, 255, 0.3)");
        assert_eq!(Color::BLUE.with_alpha(0.0).to_css(), "rgba(41, 98, 255, 0)");
        assert_eq!(Color::from(0x26A69A).to_hex(), 0x26A69A);
    }

    #[test]
    fn styles_serialise_as_widget_options() {
        let line = serde_json::to_value(SeriesStyle::for_indicator(IndicatorKind::Rsi)).unwrap();
        assert_eq!(line, serde_json::json!({"color": "#ff9800", "lineWidth": 2}));

        let candles = serde_json::to_value(SeriesStyle::for_price(ChartType::Candlestick)).unwrap();
        assert_eq!(candles["upColor"], "#26a69a");
        assert_eq!(candles["borderVisible"], false);
        assert_eq!(candles["wickDownColor"], "#ef5350");
    }

    #[test]
    fn style_kinds() {
        assert_eq!(SeriesStyle::for_indicator(IndicatorKind::Macd).kind(), SeriesKind::Histogram);
        assert_eq!(SeriesStyle::for_price(ChartType::Area).kind(), SeriesKind::Area);
        assert_eq!(SeriesStyle::for_indicator(IndicatorKind::MovingAverage).kind(), SeriesKind::Line);
    }

    #[test]
    fn chart_type_from_button_id() {
        assert_eq!("area".parse::<ChartType>().unwrap(), ChartType::Area);
        assert_eq!(ChartType::default(), ChartType::Candlestick);
    }
}
