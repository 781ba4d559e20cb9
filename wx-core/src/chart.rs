//! Create-or-update controller for the single trend chart.

use crate::render::TrendChart;

/// A charting engine that can draw a [`TrendChart`].
pub trait ChartBackend {
    /// Reference to a live chart instance.
    type Handle;

    /// Whether the charting library is loaded at all.
    fn is_available(&self) -> bool;

    /// Draw a new chart. `None` if the instance could not be created.
    fn create(&mut self, chart: &TrendChart) -> Option<Self::Handle>;

    /// Replace labels and data series of an existing instance and refresh it.
    fn update(&mut self, handle: &mut Self::Handle, chart: &TrendChart);
}

/// What [`ChartController::render`] did.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ChartRender {
    Created,
    Updated,
    Skipped,
}

/// Owns the one chart instance: created lazily, updated in place afterwards.
pub struct ChartController<B: ChartBackend> {
    backend: B,
    instance: Option<B::Handle>,
}

impl<B: ChartBackend> ChartController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            instance: None,
        }
    }

    pub fn render(&mut self, chart: &TrendChart) -> ChartRender {
        if !self.backend.is_available() {
            log::debug!("chart library unavailable, skipping trend chart");
            return ChartRender::Skipped;
        }
        match self.instance.as_mut() {
            Some(handle) => {
                self.backend.update(handle, chart);
                ChartRender::Updated
            }
            None => match self.backend.create(chart) {
                Some(handle) => {
                    self.instance = Some(handle);
                    ChartRender::Created
                }
                None => ChartRender::Skipped,
            },
        }
    }

    pub fn has_instance(&self) -> bool {
        self.instance.is_some()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

/// Backend for callers without a chart (the CLI).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoChart;

impl ChartBackend for NoChart {
    type Handle = ();

    fn is_available(&self) -> bool {
        false
    }

    fn create(&mut self, _chart: &TrendChart) -> Option<()> {
        None
    }

    fn update(&mut self, _handle: &mut (), _chart: &TrendChart) {}
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Records every call so tests can check instance reuse.
    #[derive(Default)]
    pub(crate) struct RecordingChart {
        pub created: usize,
        pub updates: usize,
        pub shown: Option<TrendChart>,
    }

    impl ChartBackend for RecordingChart {
        type Handle = usize;

        fn is_available(&self) -> bool {
            true
        }

        fn create(&mut self, chart: &TrendChart) -> Option<usize> {
            self.created += 1;
            self.shown = Some(chart.clone());
            Some(self.created)
        }

        fn update(&mut self, _handle: &mut usize, chart: &TrendChart) {
            self.updates += 1;
            self.shown = Some(chart.clone());
        }
    }

    fn chart(labels: &[&str]) -> TrendChart {
        TrendChart {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            temperatures: labels.iter().map(|_| 30.0).collect(),
            tooltips: Vec::new(),
        }
    }

    #[test]
    fn test_second_render_updates_in_place() {
        let mut controller = ChartController::new(RecordingChart::default());
        assert_eq!(controller.render(&chart(&["T2"])), ChartRender::Created);
        assert_eq!(controller.render(&chart(&["T3", "T4"])), ChartRender::Updated);
        assert_eq!(controller.backend().created, 1);
        assert_eq!(controller.backend().updates, 1);
        assert_eq!(
            controller.backend().shown.as_ref().unwrap().labels,
            vec!["T3", "T4"]
        );
    }

    #[test]
    fn test_missing_library_is_skipped() {
        let mut controller = ChartController::new(NoChart);
        assert_eq!(controller.render(&chart(&["T2"])), ChartRender::Skipped);
        assert!(!controller.has_instance());
    }
}
