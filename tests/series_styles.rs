use indicator_chart::domain::chart::{ChartType, SeriesStyle};
use indicator_chart::domain::market_data::IndicatorKind;
use insta::assert_json_snapshot;

#[test]
fn candlestick_options() {
    assert_json_snapshot!(SeriesStyle::for_price(ChartType::Candlestick), @r###"
    {
      "upColor": "#26a69a",
      "downColor": "#ef5350",
      "borderVisible": false,
      "wickUpColor": "#26a69a",
      "wickDownColor": "#ef5350"
    }
    "###);
}

#[test]
fn area_options() {
    assert_json_snapshot!(SeriesStyle::for_price(ChartType::Area), @r###"
    {
      "topColor": "rgba(41, 98, 255, 0.3)",
      "bottomColor": "rgba(41, 98, 255, 0)",
      "lineColor": "#2962ff",
      "lineWidth": 2
    }
    "###);
}

#[test]
fn macd_histogram_options() {
    assert_json_snapshot!(SeriesStyle::for_indicator(IndicatorKind::Macd), @r###"
    {
      "color": "#2962ff"
    }
    "###);
}
