//! Macros to reduce boilerplate in renderable implementations

/// Implements the visibility and `Any` plumbing of [`Renderable`] for a
/// struct that stores its visibility in a `bool` field.
///
/// Usage:
/// ```ignore
/// impl Renderable for MyLayer {
///     impl_renderable_boilerplate!(visible);
/// }
/// ```
///
/// [`Renderable`]: crate::layers::base::Renderable
#[macro_export]
macro_rules! impl_renderable_boilerplate {
    ($visible_field:ident) => {
        fn is_visible(&self) -> bool {
            self.$visible_field
        }

        fn set_visible(&mut self, visible: bool) {
            self.$visible_field = visible;
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
            self
        }
    };
}
