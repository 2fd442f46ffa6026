//! Plotly figure types
//!
//! A `Figure` serialises to the JSON shape Plotly's `Plotly.react(el, data,
//! layout)` expects. Only the attributes the dashboard uses are modelled.

use serde::Serialize;

/// A complete chart: traces plus layout
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            data: Vec::new(),
            layout: Layout {
                title: Some(Title::new(title)),
                ..Default::default()
            },
        }
    }

    /// A figure with no traces and no title ("no chart")
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn is_blank(&self) -> bool {
        self.data.is_empty() && self.layout.title.is_none()
    }

    /// Builder method: add a trace
    pub fn trace(mut self, trace: impl Into<Trace>) -> Self {
        self.data.push(trace.into());
        self
    }

    /// Builder method: set axis titles
    pub fn axes(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.layout.xaxis = Some(AxisLayout::titled(x));
        self.layout.yaxis = Some(AxisLayout::titled(y));
        self
    }

    /// Builder method: set how bar traces combine
    pub fn barmode(mut self, mode: BarMode) -> Self {
        self.layout.barmode = Some(mode);
        self
    }

    /// Builder method: set the gap between adjacent bars (0 for histograms)
    pub fn bargap(mut self, gap: f64) -> Self {
        self.layout.bargap = Some(gap);
        self
    }

    /// Builder method: set the legend title
    pub fn legend_title(mut self, title: impl Into<String>) -> Self {
        self.layout.legend = Some(Legend {
            title: Title::new(title),
        });
        self
    }
}

/// One data series
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar(BarTrace),
    Scatter(ScatterTrace),
    Pie(PieTrace),
}

impl From<BarTrace> for Trace {
    fn from(trace: BarTrace) -> Self {
        Trace::Bar(trace)
    }
}

impl From<ScatterTrace> for Trace {
    fn from(trace: ScatterTrace) -> Self {
        Trace::Scatter(trace)
    }
}

impl From<PieTrace> for Trace {
    fn from(trace: PieTrace) -> Self {
        Trace::Pie(trace)
    }
}

/// X-axis values: numeric positions or category labels
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AxisData {
    Numbers(Vec<f64>),
    Labels(Vec<String>),
}

impl AxisData {
    pub fn len(&self) -> usize {
        match self {
            AxisData::Numbers(v) => v.len(),
            AxisData::Labels(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Bar trace; `null` y values render as gaps
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: AxisData,
    pub y: Vec<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

impl BarTrace {
    pub fn new(x: AxisData, y: Vec<Option<f64>>) -> Self {
        Self {
            name: None,
            x,
            y,
            width: None,
            marker: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.marker = Some(Marker {
            color: color.into(),
        });
        self
    }
}

/// Scatter trace drawn as connected lines
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: AxisData,
    pub y: Vec<Option<f64>>,
    pub mode: String,
}

impl ScatterTrace {
    pub fn lines(x: AxisData, y: Vec<Option<f64>>) -> Self {
        Self {
            name: None,
            x,
            y,
            mode: "lines".to_string(),
        }
    }
}

/// Pie trace; Plotly derives the percentages from `values`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarMode {
    /// Side-by-side bars per x value
    Group,
    /// Series stacked on top of each other
    Stack,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLayout {
    pub title: Title,
}

impl AxisLayout {
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            title: Title::new(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<BarMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bargap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<AxisLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<AxisLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_figure_json() {
        let value = serde_json::to_value(Figure::blank()).unwrap();
        assert_eq!(value, json!({"data": [], "layout": {}}));
        assert!(Figure::blank().is_blank());
    }

    #[test]
    fn test_bar_figure_json() {
        let figure = Figure::new("Counts")
            .trace(
                BarTrace::new(
                    AxisData::Labels(vec!["a".into(), "b".into()]),
                    vec![Some(1.0), None],
                )
                .name("series")
                .color("#000"),
            )
            .barmode(BarMode::Group);

        let value = serde_json::to_value(&figure).unwrap();
        assert_eq!(value["data"][0]["type"], "bar");
        assert_eq!(value["data"][0]["x"], json!(["a", "b"]));
        assert_eq!(value["data"][0]["y"], json!([1.0, null]));
        assert_eq!(value["data"][0]["marker"]["color"], "#000");
        assert_eq!(value["layout"]["title"]["text"], "Counts");
        assert_eq!(value["layout"]["barmode"], "group");
        assert!(!figure.is_blank());
    }

    #[test]
    fn test_scatter_and_pie_tags() {
        let line = Trace::from(ScatterTrace::lines(AxisData::Numbers(vec![1.0]), vec![Some(2.0)]));
        let pie = Trace::from(PieTrace {
            labels: vec!["x".into()],
            values: vec![3.0],
        });

        let line = serde_json::to_value(line).unwrap();
        let pie = serde_json::to_value(pie).unwrap();
        assert_eq!(line["type"], "scatter");
        assert_eq!(line["mode"], "lines");
        assert_eq!(pie["type"], "pie");
    }
}
