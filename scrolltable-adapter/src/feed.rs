use scrolltable::{GridError, RenderOutcome, ScrollTable, Surface, TableData};

/// A pull-on-notify data feed.
///
/// Producers publish snapshots into the feed; the host calls [`Feed::pump`] from its event
/// loop, which hands the latest snapshot to the table once. Snapshots published between two
/// pumps collapse into a single data change (the last one wins).
#[derive(Clone, Debug)]
pub struct Feed<D> {
    current: Option<D>,
    version: u64,
    delivered: u64,
}

impl<D> Default for Feed<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Feed<D> {
    pub fn new() -> Self {
        Self {
            current: None,
            version: 0,
            delivered: 0,
        }
    }

    /// Replaces the snapshot. Returns the new version.
    pub fn publish(&mut self, data: D) -> u64 {
        self.current = Some(data);
        self.bump()
    }

    /// Removes the snapshot; the table will show "no data". Returns the new version.
    pub fn clear(&mut self) -> u64 {
        self.current = None;
        self.bump()
    }

    /// Edits the snapshot in place (e.g. toggling visibility or appending rows).
    ///
    /// Returns the new version, or `None` if there is no snapshot to edit.
    pub fn update(&mut self, f: impl FnOnce(&mut D)) -> Option<u64> {
        f(self.current.as_mut()?);
        Some(self.bump())
    }

    pub fn current(&self) -> Option<&D> {
        self.current.as_ref()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Whether a change has been published since the last [`Feed::pump`].
    pub fn is_pending(&self) -> bool {
        self.version != self.delivered
    }

    fn bump(&mut self) -> u64 {
        self.version = self.version.wrapping_add(1);
        self.version
    }
}

impl<D: TableData> Feed<D> {
    /// Delivers a pending change to `table`. Returns `None` when nothing was pending.
    pub fn pump<S>(
        &mut self,
        table: &mut ScrollTable<S>,
    ) -> Result<Option<RenderOutcome>, GridError<D::Error>>
    where
        S: Surface<Node = D::Target>,
    {
        if !self.is_pending() {
            return Ok(None);
        }
        adebug!(version = self.version, "feed: delivering data change");
        // Mark delivered first: a failed render is not retried with the same snapshot.
        self.delivered = self.version;
        table.on_data_changed(self.current.as_ref()).map(Some)
    }

    /// Forwards a scroll/resize notification, delivering any pending data change first.
    pub fn viewport_changed<S>(
        &mut self,
        table: &mut ScrollTable<S>,
    ) -> Result<RenderOutcome, GridError<D::Error>>
    where
        S: Surface<Node = D::Target>,
    {
        if let Some(outcome) = self.pump(table)? {
            return Ok(outcome);
        }
        table.on_scrolled(self.current.as_ref())
    }
}
