use crate::{
    core::config::LayerOptions,
    layers::base::{LayerId, LayerKind, LayerWrapper},
    prelude::VecDeque,
};

/// An add request captured before the surface existed
#[derive(Debug)]
pub struct PendingRequest {
    pub wrapper: LayerWrapper,
    pub options: LayerOptions,
}

/// Buffers add requests until a rendering surface is attached.
///
/// Map and feature layers queue independently; each sub-queue is FIFO.
#[derive(Debug, Default)]
pub struct PendingQueue {
    map_layers: VecDeque<PendingRequest>,
    feature_layers: VecDeque<PendingRequest>,
}

impl PendingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a request to its kind's sub-queue, returning the queued wrapper.
    pub fn enqueue(&mut self, wrapper: LayerWrapper, options: LayerOptions) -> &mut LayerWrapper {
        let queue = self.queue_mut(wrapper.kind());
        let index = queue.len();
        queue.push_back(PendingRequest { wrapper, options });
        &mut queue[index].wrapper
    }

    /// Empties the sub-queue for `kind`, returning requests in enqueue order.
    pub fn drain(&mut self, kind: LayerKind) -> Vec<PendingRequest> {
        self.queue_mut(kind).drain(..).collect()
    }

    pub fn len(&self, kind: LayerKind) -> usize {
        self.queue(kind).len()
    }

    pub fn is_empty(&self) -> bool {
        self.map_layers.is_empty() && self.feature_layers.is_empty()
    }

    pub fn get_mut(&mut self, id: LayerId) -> Option<&mut LayerWrapper> {
        self.map_layers
            .iter_mut()
            .chain(self.feature_layers.iter_mut())
            .map(|request| &mut request.wrapper)
            .find(|wrapper| wrapper.id() == id)
    }

    /// Position of `id` within its kind's sub-queue.
    pub fn position(&self, kind: LayerKind, id: LayerId) -> Option<usize> {
        self.queue(kind)
            .iter()
            .position(|request| request.wrapper.id() == id)
    }

    /// Panics if `index` is out of bounds, like slice indexing.
    pub fn wrapper_at_mut(&mut self, kind: LayerKind, index: usize) -> &mut LayerWrapper {
        &mut self.queue_mut(kind)[index].wrapper
    }

    pub fn wrappers(&self, kind: LayerKind) -> impl Iterator<Item = &LayerWrapper> {
        self.queue(kind).iter().map(|request| &request.wrapper)
    }

    pub fn wrappers_mut(&mut self, kind: LayerKind) -> impl Iterator<Item = &mut LayerWrapper> {
        self.queue_mut(kind)
            .iter_mut()
            .map(|request| &mut request.wrapper)
    }

    fn queue(&self, kind: LayerKind) -> &VecDeque<PendingRequest> {
        match kind {
            LayerKind::Map => &self.map_layers,
            LayerKind::Feature => &self.feature_layers,
        }
    }

    fn queue_mut(&mut self, kind: LayerKind) -> &mut VecDeque<PendingRequest> {
        match kind {
            LayerKind::Map => &mut self.map_layers,
            LayerKind::Feature => &mut self.feature_layers,
        }
    }
}
