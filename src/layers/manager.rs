use crate::{
    core::config::{LayerManagerConfig, LayerOptions},
    events::{
        manager::EventManager,
        types::{FeatureEdited, LayerAdded, LayerEvent, LayerRemoved},
    },
    layers::{
        active::ActiveLayer,
        base::{LayerId, LayerKind, LayerWrapper, Renderable},
        ids::IdAllocator,
        overlay::{self, OverlayReader, TooltipReader},
        queue::PendingQueue,
        vector::{Feature, FeatureId, VectorLayer},
    },
    prelude::HashMap,
    rendering::surface::Surface,
};

/// Where a feature layer currently lives
#[derive(Debug, Clone, Copy)]
enum Slot {
    Registered(usize),
    Pending(usize),
}

/// Owns every map and feature layer and their lifecycle on the surface.
///
/// Layers added before a surface is attached are queued and replayed, in
/// order, by [`LayerManager::set_surface`]. All mutation goes through this
/// type, and every add or remove is published on its [`EventManager`].
pub struct LayerManager<S: Surface> {
    config: LayerManagerConfig,
    surface: Option<S>,
    ids: IdAllocator,
    queue: PendingQueue,
    /// Registered map layers in insertion order
    map_layers: Vec<LayerWrapper>,
    /// Registered feature layers in insertion order
    feature_layers: Vec<LayerWrapper>,
    /// Kind of every registered layer, by id
    kinds: HashMap<LayerId, LayerKind>,
    active: ActiveLayer,
    overlay_reader: Box<dyn OverlayReader>,
    events: EventManager,
}

impl<S: Surface> LayerManager<S> {
    /// Creates a manager without a surface.
    ///
    /// A config that fails [`LayerManagerConfig::validate`] is replaced by the
    /// default one.
    pub fn new(config: LayerManagerConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                log::warn!("{}, using the default layer manager config", err);
                LayerManagerConfig::default()
            }
        };

        Self {
            config,
            surface: None,
            ids: IdAllocator::new(),
            queue: PendingQueue::new(),
            map_layers: Vec::new(),
            feature_layers: Vec::new(),
            kinds: HashMap::default(),
            active: ActiveLayer::default(),
            overlay_reader: Box::new(TooltipReader),
            events: EventManager::new(),
        }
    }

    /// Replaces the reader used to find feature overlays on layer removal.
    pub fn with_overlay_reader<R>(mut self, reader: R) -> Self
    where
        R: OverlayReader + 'static,
    {
        self.overlay_reader = Box::new(reader);
        self
    }

    pub fn config(&self) -> &LayerManagerConfig {
        &self.config
    }

    pub fn events(&self) -> &EventManager {
        &self.events
    }

    /// Subscribe and unsubscribe listeners through this.
    pub fn events_mut(&mut self) -> &mut EventManager {
        &mut self.events
    }

    //-------------------------------------------
    // Surface
    //-------------------------------------------

    /// Attaches the rendering surface and replays queued layers.
    ///
    /// Map layers are replayed before feature layers, each in enqueue order.
    /// When a surface was already attached, its registered layers and their
    /// feature overlays move to the new one first. Returns the previous surface.
    pub fn set_surface(&mut self, surface: S) -> Option<S> {
        log::info!(
            "attaching surface, replaying {} map layers and {} feature layers",
            self.queue.len(LayerKind::Map),
            self.queue.len(LayerKind::Feature)
        );

        let mut previous = self.surface.replace(surface);
        if let Some(previous) = previous.as_mut() {
            self.move_registered_layers(previous);
        }

        for kind in [LayerKind::Map, LayerKind::Feature] {
            for request in self.queue.drain(kind) {
                self.attach(request.wrapper, request.options);
            }
        }

        previous
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    pub fn pending_count(&self, kind: LayerKind) -> usize {
        self.queue.len(kind)
    }

    //-------------------------------------------
    // Shared
    //-------------------------------------------

    /// Looks up a registered layer of either kind.
    pub fn get(&self, id: LayerId) -> Option<&LayerWrapper> {
        let Some(kind) = self.kinds.get(&id) else {
            log::debug!("no registered layer with id {}", id);
            return None;
        };
        self.layers(*kind).iter().find(|layer| layer.id() == id)
    }

    pub fn get_mut(&mut self, id: LayerId) -> Option<&mut LayerWrapper> {
        let kind = *self.kinds.get(&id)?;
        self.layers_mut(kind).iter_mut().find(|layer| layer.id() == id)
    }

    /// Registered layers of `kind` in insertion order.
    pub fn layers(&self, kind: LayerKind) -> &[LayerWrapper] {
        match kind {
            LayerKind::Map => &self.map_layers,
            LayerKind::Feature => &self.feature_layers,
        }
    }

    /// Removes a registered layer of either kind.
    pub fn remove_layer(&mut self, id: LayerId, silent: bool) -> Option<LayerWrapper> {
        match self.kinds.get(&id).copied() {
            Some(LayerKind::Map) => self.remove_map_layer(id, silent),
            Some(LayerKind::Feature) => self.remove_feature_layer(id, silent),
            None => {
                log::debug!("remove_layer: no registered layer with id {}", id);
                None
            }
        }
    }

    /// Renames a registered or queued layer. Blank names fall back to the default.
    pub fn rename_layer(&mut self, id: LayerId, name: &str) -> bool {
        let name = self.config.validate_name(name);
        let layer = match self.kinds.get(&id).copied() {
            Some(kind) => self.layers_mut(kind).iter_mut().find(|layer| layer.id() == id),
            None => self.queue.get_mut(id),
        };

        match layer {
            Some(layer) => {
                layer.set_name(name);
                true
            }
            None => {
                log::debug!("rename_layer: no layer with id {}", id);
                false
            }
        }
    }

    //-------------------------------------------
    // Map layers
    //-------------------------------------------

    /// Adds a background layer. Queued until a surface is attached.
    pub fn add_map_layer<R>(&mut self, name: &str, renderable: R, options: LayerOptions) -> LayerId
    where
        R: Renderable + 'static,
    {
        self.add_boxed_map_layer(name, Box::new(renderable), options)
    }

    /// Adds several background layers in order with shared options.
    pub fn add_map_layers<I, N>(&mut self, layers: I, options: LayerOptions) -> Vec<LayerId>
    where
        I: IntoIterator<Item = (N, Box<dyn Renderable>)>,
        N: AsRef<str>,
    {
        layers
            .into_iter()
            .map(|(name, renderable)| self.add_boxed_map_layer(name.as_ref(), renderable, options))
            .collect()
    }

    fn add_boxed_map_layer(
        &mut self,
        name: &str,
        renderable: Box<dyn Renderable>,
        options: LayerOptions,
    ) -> LayerId {
        let wrapper = self.create_wrapper(name, LayerKind::Map, renderable);
        log::debug!("add_map_layer {} ({})", wrapper.name(), wrapper.id());
        self.attach(wrapper, options).id()
    }

    pub fn remove_map_layer(&mut self, id: LayerId, silent: bool) -> Option<LayerWrapper> {
        let Some(index) = self.map_layers.iter().position(|layer| layer.id() == id) else {
            log::debug!("remove_map_layer: no map layer with id {}", id);
            return None;
        };

        let wrapper = self.map_layers.remove(index);
        log::debug!("remove_map_layer {} ({})", wrapper.name(), id);
        self.kinds.remove(&id);

        if let Some(surface) = self.surface.as_mut() {
            surface.remove_renderable(&wrapper);
        }

        self.events
            .publish(&LayerEvent::MapLayerRemoved(LayerRemoved {
                layer: &wrapper,
                silent,
            }));

        Some(wrapper)
    }

    pub fn map_layers(&self) -> &[LayerWrapper] {
        &self.map_layers
    }

    /// Renderables of the registered map layers, in insertion order.
    pub fn map_renderables(&self) -> impl Iterator<Item = &dyn Renderable> {
        self.map_layers.iter().map(LayerWrapper::renderable)
    }

    /// Hides every map layer except the earliest added one.
    pub fn set_only_top_map_layer_visible(&mut self) {
        for layer in &mut self.map_layers {
            layer.set_visible(false);
        }

        if let Some(first) = self.map_layers.first_mut() {
            first.set_visible(true);
        }
    }

    pub fn map_layer_count(&self) -> usize {
        self.map_layers.len()
    }

    pub fn is_map_layers_empty(&self) -> bool {
        self.map_layers.is_empty()
    }

    //-------------------------------------------
    // Feature layers
    //-------------------------------------------

    /// Creates an empty vector layer and makes it the active feature layer.
    ///
    /// Blank names are replaced by the configured default name.
    pub fn add_feature_layer(&mut self, name: &str, options: LayerOptions) -> &mut LayerWrapper {
        let wrapper = self.create_wrapper(
            name,
            LayerKind::Feature,
            Box::new(VectorLayer::new(options.visible)),
        );
        log::debug!("add_feature_layer {} ({})", wrapper.name(), wrapper.id());

        self.active.set(wrapper.id());
        self.attach(wrapper, options)
    }

    /// Removes a feature layer along with the overlays of its features.
    pub fn remove_feature_layer(&mut self, id: LayerId, silent: bool) -> Option<LayerWrapper> {
        let Some(index) = self.feature_layers.iter().position(|layer| layer.id() == id) else {
            log::debug!("remove_feature_layer: no feature layer with id {}", id);
            return None;
        };

        let wrapper = self.feature_layers.remove(index);
        log::debug!("remove_feature_layer {} ({})", wrapper.name(), id);
        self.kinds.remove(&id);

        if let Some(surface) = self.surface.as_mut() {
            if let Some(source) = wrapper.source() {
                let detached =
                    overlay::detach_feature_overlays(source, self.overlay_reader.as_ref(), surface);
                log::debug!("detached {} overlays from {}", detached, id);
            }
            surface.remove_renderable(&wrapper);
        }

        self.active.on_removed(id, &self.feature_layers);

        self.events
            .publish(&LayerEvent::FeatureLayerRemoved(LayerRemoved {
                layer: &wrapper,
                silent,
            }));

        Some(wrapper)
    }

    pub fn feature_layers(&self) -> &[LayerWrapper] {
        &self.feature_layers
    }

    /// The layer new features go into, created with `fallback` as name if none exists.
    pub fn active_feature_layer(&mut self, fallback: &str) -> &mut LayerWrapper {
        let slot = self
            .active
            .get()
            .and_then(|id| self.locate_feature_layer(id));
        match slot {
            Some(slot) => self.feature_layer_at_mut(slot),
            None => self.add_feature_layer(fallback, LayerOptions::default()),
        }
    }

    /// The active feature layer's id, without provisioning one.
    pub fn active_feature_layer_id(&self) -> Option<LayerId> {
        self.active.get()
    }

    /// Selects `id` as the active feature layer. Unknown ids are ignored.
    pub fn set_active_feature_layer(&mut self, id: LayerId) -> bool {
        if self.locate_feature_layer(id).is_none() {
            log::debug!("set_active_feature_layer: no feature layer with id {}", id);
            return false;
        }

        self.active.set(id);
        true
    }

    /// Removes the feature from every feature layer holding it.
    pub fn remove_feature_from_layers(&mut self, feature_id: &FeatureId) -> Option<Feature> {
        let mut removed = None;

        let registered = self.feature_layers.iter_mut();
        let pending = self.queue.wrappers_mut(LayerKind::Feature);
        for layer in registered.chain(pending) {
            if let Some(feature) = layer
                .source_mut()
                .and_then(|source| source.remove_feature(feature_id))
            {
                removed = Some(feature);
            }
        }

        if removed.is_none() {
            log::debug!("remove_feature_from_layers: no feature {}", feature_id);
        }
        removed
    }

    /// Swaps an edited feature for its replacement.
    ///
    /// The old feature, when some layer holds it, leaves every layer and its
    /// overlay leaves the surface. `after` always goes into the active feature
    /// layer, provisioned with `fallback` as name if there is none. Returns the
    /// id of that layer, or hands `after` back if the layer holds no features.
    pub fn replace_feature(
        &mut self,
        before: &FeatureId,
        after: Feature,
        fallback: &str,
    ) -> Result<LayerId, Feature> {
        let old = self.remove_feature_from_layers(before);
        if let (Some(old), Some(surface)) = (old.as_ref(), self.surface.as_mut()) {
            overlay::detach_overlay(old, self.overlay_reader.as_ref(), surface);
        }

        let after_id = after.id.clone();
        let layer = self.active_feature_layer(fallback);
        let layer_id = layer.id();
        let Some(source) = layer.source_mut() else {
            log::warn!("feature layer {} has no feature source", layer_id);
            return Err(after);
        };
        source.add_feature(after);

        if let Some(layer) = self.find_feature_layer(layer_id) {
            if let Some(after) = layer.source().and_then(|source| source.get(&after_id)) {
                self.events
                    .publish(&LayerEvent::FeatureEdited(FeatureEdited {
                        layer,
                        before: old.as_ref(),
                        after,
                        silent: false,
                    }));
            }
        }

        Ok(layer_id)
    }

    pub fn feature_layer_count(&self) -> usize {
        self.feature_layers.len()
    }

    pub fn is_feature_layers_empty(&self) -> bool {
        self.feature_layers.is_empty()
    }

    //-------------------------------------------
    // Internals
    //-------------------------------------------

    fn create_wrapper(
        &mut self,
        name: &str,
        kind: LayerKind,
        renderable: Box<dyn Renderable>,
    ) -> LayerWrapper {
        let name = self.config.validate_name(name);
        let base = match kind {
            LayerKind::Map => self.config.map_layer_z_base,
            LayerKind::Feature => self.config.feature_layer_z_base,
        };
        let id = self.ids.next_id();
        LayerWrapper::new(id, name, kind, IdAllocator::z_index_for(base, id), renderable)
    }

    /// Detaches registered layers from `previous` and attaches them to the
    /// current surface, map layers first, each in insertion order.
    fn move_registered_layers(&mut self, previous: &mut S) {
        let Some(current) = self.surface.as_mut() else {
            return;
        };

        log::info!(
            "surface replaced, moving {} map layers and {} feature layers",
            self.map_layers.len(),
            self.feature_layers.len()
        );

        let reader = self.overlay_reader.as_ref();
        for layer in self.map_layers.iter().chain(self.feature_layers.iter()) {
            if let Some(source) = layer.source() {
                overlay::detach_feature_overlays(source, reader, previous);
            }
            previous.remove_renderable(layer);

            current.add_renderable(layer);
            if let Some(source) = layer.source() {
                let attached = overlay::attach_feature_overlays(source, reader, current);
                log::debug!("moved {} and {} overlays", layer.id(), attached);
            }
        }
    }

    /// Registers the wrapper on the surface, or queues it when there is none.
    fn attach(&mut self, wrapper: LayerWrapper, options: LayerOptions) -> &mut LayerWrapper {
        let Some(surface) = self.surface.as_mut() else {
            log::debug!("no surface yet, queueing {}", wrapper.id());
            return self.queue.enqueue(wrapper, options);
        };

        surface.add_renderable(&wrapper);

        let kind = wrapper.kind();
        self.kinds.insert(wrapper.id(), kind);

        let layers = match kind {
            LayerKind::Map => &mut self.map_layers,
            LayerKind::Feature => &mut self.feature_layers,
        };
        let index = layers.len();
        layers.push(wrapper);

        let added = LayerAdded {
            layer: &layers[index],
            silent: options.silent,
            buttons: options.buttons,
        };
        let event = match kind {
            LayerKind::Map => LayerEvent::MapLayerAdded(added),
            LayerKind::Feature => LayerEvent::FeatureLayerAdded(added),
        };
        self.events.publish(&event);

        &mut layers[index]
    }

    fn layers_mut(&mut self, kind: LayerKind) -> &mut Vec<LayerWrapper> {
        match kind {
            LayerKind::Map => &mut self.map_layers,
            LayerKind::Feature => &mut self.feature_layers,
        }
    }

    fn locate_feature_layer(&self, id: LayerId) -> Option<Slot> {
        self.feature_layers
            .iter()
            .position(|layer| layer.id() == id)
            .map(Slot::Registered)
            .or_else(|| {
                self.queue
                    .position(LayerKind::Feature, id)
                    .map(Slot::Pending)
            })
    }

    fn feature_layer_at_mut(&mut self, slot: Slot) -> &mut LayerWrapper {
        match slot {
            Slot::Registered(index) => &mut self.feature_layers[index],
            Slot::Pending(index) => self.queue.wrapper_at_mut(LayerKind::Feature, index),
        }
    }

    fn find_feature_layer(&self, id: LayerId) -> Option<&LayerWrapper> {
        self.feature_layers
            .iter()
            .find(|layer| layer.id() == id)
            .or_else(|| self.queue.wrappers(LayerKind::Feature).find(|w| w.id() == id))
    }
}

impl<S: Surface> Default for LayerManager<S> {
    fn default() -> Self {
        Self::new(LayerManagerConfig::default())
    }
}
