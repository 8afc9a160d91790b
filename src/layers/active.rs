use crate::layers::base::{LayerId, LayerWrapper};

/// Tracks which feature layer new features are drawn into.
///
/// Holds an id only; the manager owns the layers and keeps this pointing at
/// a live feature layer or at nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct ActiveLayer {
    current: Option<LayerId>,
}

impl ActiveLayer {
    pub fn get(&self) -> Option<LayerId> {
        self.current
    }

    pub fn set(&mut self, id: LayerId) {
        self.current = Some(id);
    }

    /// Re-elects after `removed` left the feature collection.
    ///
    /// Only acts when `removed` was the active layer; the most recently added
    /// of `remaining` takes over.
    pub fn on_removed(&mut self, removed: LayerId, remaining: &[LayerWrapper]) -> Option<LayerId> {
        if self.current == Some(removed) {
            self.current = remaining.last().map(LayerWrapper::id);
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::{base::LayerKind, vector::VectorLayer};

    fn feature_layer(id: u64) -> LayerWrapper {
        LayerWrapper::new(
            LayerId(id),
            format!("layer {id}"),
            LayerKind::Feature,
            10_000 + id as i64,
            Box::new(VectorLayer::new(true)),
        )
    }

    #[test]
    fn test_reelects_most_recent() {
        let mut active = ActiveLayer::default();
        active.set(LayerId(2));

        let remaining = vec![feature_layer(0), feature_layer(1)];
        assert_eq!(active.on_removed(LayerId(2), &remaining), Some(LayerId(1)));
    }

    #[test]
    fn test_removing_inactive_layer_keeps_selection() {
        let mut active = ActiveLayer::default();
        active.set(LayerId(0));

        let remaining = vec![feature_layer(0), feature_layer(2)];
        assert_eq!(active.on_removed(LayerId(1), &remaining), Some(LayerId(0)));
    }

    #[test]
    fn test_empty_when_nothing_remains() {
        let mut active = ActiveLayer::default();
        active.set(LayerId(0));
        assert_eq!(active.on_removed(LayerId(0), &[]), None);
        assert_eq!(active.get(), None);
    }
}
