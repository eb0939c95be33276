//! Chart instances bound to canvases.
//!
//! A chart is built once per canvas. Every later render replaces labels,
//! datasets and the day format on the existing instance and redraws it, so
//! the chart library keeps its animation state and no rendering context is
//! leaked per redraw.

use crate::calendar::DayFormat;
use crate::dataset::ChartFrame;
use serde::Serialize;
use std::collections::HashMap;
use std::rc::Rc;

/// Called with the index of the clicked point.
pub type PointClick = Rc<dyn Fn(usize)>;

/// The rendering backend: the browser chart library, or a recorder in tests.
pub trait ChartSurface {
    /// Live chart bound to one canvas.
    type Handle;

    /// Construct a chart on `canvas_id` showing `frame`. `None` when the
    /// chart library refused; the next render tries again.
    fn create(
        &mut self,
        canvas_id: &str,
        frame: &ChartFrame,
        on_click: PointClick,
    ) -> Option<Self::Handle>;

    /// Replace labels, datasets and day format on `handle`, then redraw.
    fn update(&mut self, handle: &mut Self::Handle, frame: &ChartFrame);
}

/// Whether a render built a chart or reused one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Created,
    Updated,
    /// Construction failed; nothing is bound to the canvas.
    Failed,
}

/// Maps canvas id to its one chart handle.
pub struct ChartRegistry<S: ChartSurface> {
    surface: S,
    handles: HashMap<String, S::Handle>,
}

impl<S: ChartSurface> ChartRegistry<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            handles: HashMap::new(),
        }
    }

    /// Show `frame` on `canvas_id`, constructing the chart on first use only.
    /// `on_click` is only consulted when the chart is constructed.
    pub fn render(&mut self, canvas_id: &str, frame: &ChartFrame, on_click: PointClick) -> RenderOutcome {
        match self.handles.get_mut(canvas_id) {
            Some(handle) => {
                self.surface.update(handle, frame);
                RenderOutcome::Updated
            }
            None => match self.surface.create(canvas_id, frame, on_click) {
                Some(handle) => {
                    self.handles.insert(canvas_id.to_string(), handle);
                    RenderOutcome::Created
                }
                None => RenderOutcome::Failed,
            },
        }
    }
}

/// Static chart options: daily time axis, zero-based linear y axis, lines only.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub x_axis_unit: &'static str,
    pub day_display_format: &'static str,
    pub y_begin_at_zero: bool,
    pub point_radius: u32,
}

impl ChartOptions {
    pub fn for_format(day_format: DayFormat) -> Self {
        Self {
            x_axis_unit: "day",
            day_display_format: day_format.pattern(),
            y_begin_at_zero: true,
            point_radius: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ChartDataset;
    use std::cell::Cell;

    #[derive(Default)]
    struct Recorder {
        created: usize,
        /// Constructions to refuse before succeeding.
        refuse: usize,
        updates: Vec<(usize, DayFormat, usize)>,
    }

    /// The recorder's handle remembers which construction it came from.
    struct RecordedChart {
        id: usize,
        labels: Vec<String>,
        on_click: PointClick,
    }

    impl ChartSurface for Recorder {
        type Handle = RecordedChart;

        fn create(
            &mut self,
            _canvas_id: &str,
            frame: &ChartFrame,
            on_click: PointClick,
        ) -> Option<RecordedChart> {
            if self.refuse > 0 {
                self.refuse -= 1;
                return None;
            }
            self.created += 1;
            Some(RecordedChart {
                id: self.created,
                labels: frame.labels.clone(),
                on_click,
            })
        }

        fn update(&mut self, handle: &mut RecordedChart, frame: &ChartFrame) {
            handle.labels = frame.labels.clone();
            self.updates
                .push((handle.id, frame.day_format, frame.datasets.len()));
        }
    }

    fn frame(labels: &[&str], datasets: usize, day_format: DayFormat) -> ChartFrame {
        let datasets = (0..datasets)
            .map(|i| ChartDataset {
                label: format!("d{}", i),
                data: vec![Some(1.0); labels.len()],
                border_color: String::new(),
                background_color: String::new(),
                border_width: None,
                point_radius: None,
            })
            .collect();
        ChartFrame::new(labels.iter().map(|s| s.to_string()).collect(), datasets, day_format)
    }

    fn ignore_clicks() -> PointClick {
        Rc::new(|_| {})
    }

    #[test]
    fn constructs_once_then_updates_in_place() {
        let mut registry = ChartRegistry::new(Recorder::default());
        let first = registry.render("chart", &frame(&["a"], 2, DayFormat::FullDate), ignore_clicks());
        let second = registry.render("chart", &frame(&["b", "c"], 4, DayFormat::MonthDay), ignore_clicks());
        let third = registry.render("chart", &frame(&["d"], 0, DayFormat::FullDate), ignore_clicks());

        assert_eq!(first, RenderOutcome::Created);
        assert_eq!(second, RenderOutcome::Updated);
        assert_eq!(third, RenderOutcome::Updated);
        assert_eq!(registry.surface.created, 1);
        assert_eq!(
            registry.surface.updates,
            vec![(1, DayFormat::MonthDay, 4), (1, DayFormat::FullDate, 0)]
        );
        assert_eq!(registry.handles["chart"].labels, vec!["d".to_string()]);
    }

    #[test]
    fn one_chart_per_canvas() {
        let mut registry = ChartRegistry::new(Recorder::default());
        registry.render("left", &frame(&["a"], 1, DayFormat::FullDate), ignore_clicks());
        registry.render("right", &frame(&["a"], 1, DayFormat::FullDate), ignore_clicks());
        registry.render("left", &frame(&["a"], 1, DayFormat::FullDate), ignore_clicks());
        assert_eq!(registry.surface.created, 2);
        assert!(registry.handles.contains_key("left") && registry.handles.contains_key("right"));
        assert!(!registry.handles.contains_key("other"));
    }

    #[test]
    fn failed_construction_is_retried_on_next_render() {
        let mut registry = ChartRegistry::new(Recorder {
            refuse: 1,
            ..Recorder::default()
        });
        let first = registry.render("chart", &frame(&["a"], 1, DayFormat::FullDate), ignore_clicks());
        assert_eq!(first, RenderOutcome::Failed);
        assert!(registry.handles.is_empty());

        let second = registry.render("chart", &frame(&["b"], 2, DayFormat::MonthDay), ignore_clicks());
        let third = registry.render("chart", &frame(&["c"], 1, DayFormat::MonthDay), ignore_clicks());
        assert_eq!(second, RenderOutcome::Created);
        assert_eq!(third, RenderOutcome::Updated);
        assert_eq!(registry.surface.created, 1);
        assert_eq!(registry.handles["chart"].labels, vec!["c".to_string()]);
    }

    #[test]
    fn click_handler_from_construction_is_kept() {
        let clicked = Rc::new(Cell::new(None));
        let sink = clicked.clone();
        let mut registry = ChartRegistry::new(Recorder::default());
        registry.render(
            "chart",
            &frame(&["a", "b"], 1, DayFormat::FullDate),
            Rc::new(move |index| sink.set(Some(index))),
        );
        registry.render("chart", &frame(&["a"], 1, DayFormat::FullDate), ignore_clicks());

        (registry.handles["chart"].on_click)(7);
        assert_eq!(clicked.get(), Some(7));
    }

    #[test]
    fn options_start_y_at_zero_without_points() {
        let json = serde_json::to_value(ChartOptions::for_format(DayFormat::MonthDay)).unwrap();
        assert_eq!(json["xAxisUnit"], "day");
        assert_eq!(json["dayDisplayFormat"], "MMM d");
        assert_eq!(json["yBeginAtZero"], true);
        assert_eq!(json["pointRadius"], 0);
    }
}
