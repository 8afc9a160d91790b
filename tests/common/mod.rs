#![allow(dead_code)]

use std::{cell::RefCell, rc::Rc};

use mapdeck::prelude::*;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// What a listener saw, copied out of the borrowed event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seen {
    pub kind: EventKind,
    pub layer: LayerId,
    pub name: String,
    pub silent: bool,
    pub buttons: Option<LayerButtons>,
}

pub type Recording = Rc<RefCell<Vec<Seen>>>;

pub fn record_events(manager: &mut LayerManager<HeadlessSurface>) -> Recording {
    let seen: Recording = Rc::default();
    let sink = seen.clone();
    manager.events_mut().on_any(move |event| {
        sink.borrow_mut().push(Seen {
            kind: event.kind(),
            layer: event.layer().id(),
            name: event.layer().name().to_string(),
            silent: event.is_silent(),
            buttons: event.buttons(),
        });
        Ok(())
    });
    seen
}

pub fn attached_manager() -> LayerManager<HeadlessSurface> {
    init_logging();
    let mut manager = LayerManager::default();
    manager.set_surface(HeadlessSurface::new());
    manager
}

pub fn names(layers: &[LayerWrapper]) -> Vec<&str> {
    layers.iter().map(LayerWrapper::name).collect()
}
