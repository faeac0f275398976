//! Declarative ECharts option for the 3D sales bar chart.
//!
//! The option is plain JSON; the tooltip formatter is a callback and is
//! attached by the JS bridge, which calls [`tooltip_text`] with the hovered
//! bar's `value` array.
//!
//! Bars are emitted as `[yearIndex, cityIndex, amount]`, so the x axis
//! carries years and the y axis carries cities.

use serde_json::{json, Value};

use crate::config::{GRID_BOX_HEIGHT, GRID_UNITS_PER_CATEGORY, PALETTE};
use crate::series::{ChartSeries, ValueRange};

/// Build the full chart option for `series`, colored over `range`.
pub fn build_chart_option(series: &ChartSeries, range: ValueRange) -> Value {
    let data: Vec<Value> = series
        .points
        .iter()
        .map(|p| json!({ "value": [p.year_index, p.city_index, p.amount] }))
        .collect();

    json!({
        "tooltip": {
            "trigger": "item",
        },
        "visualMap": {
            "min": range.min,
            "max": range.max,
            "inRange": {
                "color": PALETTE,
            },
        },
        "xAxis3D": {
            "type": "category",
            "data": series.years,
            "name": "Year",
            "axisLabel": { "interval": 0 },
        },
        "yAxis3D": {
            "type": "category",
            "data": series.cities,
            "name": "City",
            "axisLabel": { "interval": 0 },
        },
        "zAxis3D": {
            "type": "value",
            "name": "Sales",
        },
        "grid3D": {
            "boxWidth": series.years.len() * GRID_UNITS_PER_CATEGORY,
            "boxDepth": series.cities.len() * GRID_UNITS_PER_CATEGORY,
            "boxHeight": GRID_BOX_HEIGHT,
            "light": {
                "main": { "intensity": 1.2 },
                "ambient": { "intensity": 0.3 },
            },
        },
        "series": [{
            "type": "bar3D",
            "data": data,
            "shading": "color",
            "label": {
                "show": false,
                "fontSize": 16,
                "borderWidth": 1,
            },
            "itemStyle": { "opacity": 0.4 },
            "emphasis": {
                "label": { "fontSize": 20, "color": "#900" },
                "itemStyle": { "color": "#900" },
            },
        }],
        "textStyle": {
            "fontFamily": "sans-serif",
            "fontSize": 12,
        },
        "axisPointer": {},
    })
}

/// Tooltip sentence for a bar `value` of `[yearIndex, cityIndex, amount]`.
///
/// Returns `None` when the value is malformed or an index is out of range.
pub fn tooltip_text(series: &ChartSeries, value: &[f64]) -> Option<String> {
    let [year_index, city_index, amount] = <[f64; 3]>::try_from(value).ok()?;
    let city = series.city(to_index(city_index)?)?;
    let year = series.year(to_index(year_index)?)?;
    Some(format!(
        "{city} had sales of {} in year {year}",
        format_amount(amount)
    ))
}

fn to_index(raw: f64) -> Option<usize> {
    (raw.is_finite() && raw >= 0.0 && raw.fract() == 0.0).then_some(raw as usize)
}

/// Whole amounts print without a fractional part.
pub fn format_amount(amount: f64) -> String {
    if amount.is_finite() && amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        amount.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{SalesFilter, SalesRecord};
    use crate::series::{transform, value_range};

    fn series() -> ChartSeries {
        let records = vec![
            SalesRecord {
                id: 1,
                year: 2020,
                city_name: "Boston".into(),
                amount: 5.0,
            },
            SalesRecord {
                id: 2,
                year: 2021,
                city_name: "Boston".into(),
                amount: 9.0,
            },
            SalesRecord {
                id: 3,
                year: 2021,
                city_name: "NYC".into(),
                amount: 3.0,
            },
        ];
        transform(&records, &SalesFilter::default())
    }

    #[test]
    fn bars_swap_city_and_year_indices() {
        let series = series();
        let option = build_chart_option(&series, value_range(&series.points).unwrap());
        let data = option["series"][0]["data"].as_array().unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data[2]["value"], json!([1, 1, 3.0]));
        assert_eq!(data[1]["value"], json!([1, 0, 9.0]));
        assert_eq!(option["series"][0]["type"], "bar3D");
    }

    #[test]
    fn axes_and_visual_map_follow_series() {
        let series = series();
        let option = build_chart_option(&series, ValueRange { min: 3.0, max: 9.0 });
        assert_eq!(option["xAxis3D"]["data"], json!([2020, 2021]));
        assert_eq!(option["yAxis3D"]["data"], json!(["Boston", "NYC"]));
        assert_eq!(option["xAxis3D"]["axisLabel"]["interval"], 0);
        assert_eq!(option["yAxis3D"]["axisLabel"]["interval"], 0);
        assert_eq!(option["zAxis3D"]["type"], "value");
        assert_eq!(option["visualMap"]["min"], 3.0);
        assert_eq!(option["visualMap"]["max"], 9.0);
        assert_eq!(option["visualMap"]["inRange"]["color"].as_array().unwrap().len(), 11);
        assert_eq!(option["visualMap"]["inRange"]["color"][0], "#313695");
    }

    #[test]
    fn grid_box_scales_with_categories() {
        let series = series();
        let option = build_chart_option(&series, ValueRange { min: 3.0, max: 9.0 });
        assert_eq!(option["grid3D"]["boxWidth"], 16);
        assert_eq!(option["grid3D"]["boxDepth"], 16);
        assert_eq!(option["grid3D"]["boxHeight"], 60);
    }

    #[test]
    fn tooltip_looks_up_labels_by_index() {
        let series = series();
        assert_eq!(
            tooltip_text(&series, &[1.0, 1.0, 3.0]).as_deref(),
            Some("NYC had sales of 3 in year 2021")
        );
        assert_eq!(
            tooltip_text(&series, &[0.0, 0.0, 5.25]).as_deref(),
            Some("Boston had sales of 5.25 in year 2020")
        );
    }

    #[test]
    fn tooltip_rejects_bad_values() {
        let series = series();
        assert_eq!(tooltip_text(&series, &[5.0, 0.0, 1.0]), None);
        assert_eq!(tooltip_text(&series, &[0.0, 0.0]), None);
        assert_eq!(tooltip_text(&series, &[-1.0, 0.0, 1.0]), None);
    }
}
