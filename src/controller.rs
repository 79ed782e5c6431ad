use crate::window::{compute_window, covers};
use crate::{
    Axis, Config, Extent, GridError, Measured, RenderOutcome, SizeModel, Surface, TableData,
    measure, render,
};

/// Lifecycle state of a [`ScrollTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TableState {
    /// No data; nothing is rendered.
    Empty,
    Populated,
}

/// A virtualized table mounted into a [`Surface`].
///
/// The controller exclusively owns the size model and the windows. The host forwards three
/// kinds of events to it, each handled synchronously as one complete
/// window → render → measure cycle:
/// - [`Self::on_data_changed`] when the table snapshot is replaced
/// - [`Self::on_viewport_resized`] when the scroll region may have changed size
/// - [`Self::on_scrolled`] when the scroll region was scrolled
///
/// Scroll and resize events are memoized: if the current window still covers the viewport on
/// both axes, the surface is not touched at all.
#[derive(Clone, Debug)]
pub struct ScrollTable<S> {
    surface: S,
    config: Config,
    model: SizeModel,
    state: TableState,
    // Set when a cycle aborted half way; the next event re-renders unconditionally.
    stale: bool,
    render_count: u64,
    last_measured: Measured,
}

impl<S: Surface> ScrollTable<S> {
    /// Mounts the table into `surface` in the `Empty` state.
    pub fn new(mut surface: S, config: Config) -> Self {
        vdebug!(?config, "ScrollTable::new");
        surface.mount();
        let mut table = Self {
            surface,
            model: SizeModel::new(&config),
            config,
            state: TableState::Empty,
            stale: false,
            render_count: 0,
            last_measured: Measured::default(),
        };
        table.clear();
        table
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn model(&self) -> &SizeModel {
        &self.model
    }

    pub fn state(&self) -> TableState {
        self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, e.g. to scroll or resize a headless surface.
    ///
    /// Changing scroll position or size through it has no effect until the matching
    /// handler is called.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Number of completed render cycles (memoized skips and clears not included).
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    /// Estimate growth learned by the most recent render cycle.
    pub fn last_measured(&self) -> Measured {
        self.last_measured
    }

    /// Full virtual extent of the table.
    pub fn content_extent(&self) -> Extent {
        Extent {
            width: self.model.total_size(Axis::Col),
            height: self.model.total_size(Axis::Row),
        }
    }

    /// Handles a replaced table snapshot.
    ///
    /// `None` or a snapshot without rows or columns resets the table to `Empty`. Otherwise new
    /// trailing rows/columns are appended, visibility flags are applied and the table is
    /// re-rendered unconditionally.
    pub fn on_data_changed<D>(
        &mut self,
        data: Option<&D>,
    ) -> Result<RenderOutcome, GridError<D::Error>>
    where
        D: TableData<Target = S::Node> + ?Sized,
    {
        let Some(data) = data.filter(|d| !d.is_empty()) else {
            self.model.reset();
            self.state = TableState::Empty;
            return Ok(self.clear());
        };

        for axis in Axis::ALL {
            self.model.apply_visibilities(axis, data.visibilities(axis));
        }
        vdebug!(
            rows = self.model.len(Axis::Row),
            cols = self.model.len(Axis::Col),
            "on_data_changed"
        );
        self.state = TableState::Populated;
        self.render(data, true)
    }

    /// Handles a possible change of the scroll region's size.
    pub fn on_viewport_resized<D>(
        &mut self,
        data: Option<&D>,
    ) -> Result<RenderOutcome, GridError<D::Error>>
    where
        D: TableData<Target = S::Node> + ?Sized,
    {
        self.on_viewport_changed(data)
    }

    /// Handles a scroll of the scroll region.
    pub fn on_scrolled<D>(&mut self, data: Option<&D>) -> Result<RenderOutcome, GridError<D::Error>>
    where
        D: TableData<Target = S::Node> + ?Sized,
    {
        self.on_viewport_changed(data)
    }

    fn on_viewport_changed<D>(&mut self, data: Option<&D>) -> Result<RenderOutcome, GridError<D::Error>>
    where
        D: TableData<Target = S::Node> + ?Sized,
    {
        if self.state == TableState::Empty {
            return Ok(RenderOutcome::Skipped);
        }
        let Some(data) = data else {
            vwarn!("viewport changed on a populated table without a data snapshot");
            return Ok(RenderOutcome::Skipped);
        };
        let force = self.stale;
        self.render(data, force)
    }

    /// Whether the current windows cover the surface's viewport on both axes.
    pub fn is_viewport_covered(&self) -> bool {
        let viewport = self.surface.viewport();
        Axis::ALL.into_iter().all(|axis| {
            covers(
                self.model.window(axis),
                self.model.len(axis),
                viewport.scroll(axis),
                viewport.extent(axis),
            )
        })
    }

    fn render<D>(&mut self, data: &D, force: bool) -> Result<RenderOutcome, GridError<D::Error>>
    where
        D: TableData<Target = S::Node> + ?Sized,
    {
        if self.model.is_empty() {
            return Ok(self.clear());
        }
        if !force && self.is_viewport_covered() {
            vtrace!("render skipped: window covers viewport");
            return Ok(RenderOutcome::Skipped);
        }

        let viewport = self.surface.viewport();
        for axis in Axis::ALL {
            let next = compute_window(
                self.model.axis(axis),
                viewport.scroll(axis),
                viewport.extent(axis),
                self.config.buffer(axis),
                self.model.window(axis),
            );
            self.model.set_window(axis, next);
        }

        // Mutation phase. An error leaves the surface partially rendered.
        self.stale = true;
        let rendered = render(&mut self.surface, &self.model, &self.config, data)?;
        self.stale = false;

        // Measurement phase: the surface is only reachable through a shared reference.
        let cells = rendered.cells();
        self.last_measured = measure(&self.surface, &mut self.model, rendered);
        self.render_count += 1;

        // Learned sizes grew the totals; resize the content once, after all measurements.
        if self.last_measured != Measured::default() {
            let extent = self.content_extent();
            self.surface.set_content_extent(extent);
        }
        vdebug!(
            cells,
            grown_height = self.last_measured.height,
            grown_width = self.last_measured.width,
            total_height = self.model.total_size(Axis::Row),
            total_width = self.model.total_size(Axis::Col),
            "render cycle complete"
        );
        Ok(RenderOutcome::Rendered { cells })
    }

    fn clear(&mut self) -> RenderOutcome {
        vdebug!("clear");
        self.surface.clear_content();
        self.surface.set_content_extent(Extent::default());
        self.stale = false;
        RenderOutcome::Cleared
    }
}
