//! Computed values
//!
//! [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
//! "The computed value is the result of resolving the specified value as
//! defined in the 'Computed Value' line of the property definition table,
//! generally absolutizing it in preparation for inheritance."

pub mod cascade;
mod computed_box;
mod resource_cache;
mod updater;

pub use cascade::{SpecifiedStyle, compute_box};
pub use computed_box::{BoxEdges, ComputedBox};
pub use resource_cache::{CacheConfig, FontMetrics, ResourceCache};
pub use updater::ComputedValuesUpdater;

/// Everything a value needs besides its parent to compute itself.
#[derive(Debug, Clone, Copy)]
pub struct ComputeContext<'a> {
    /// Unit conversion.
    pub cache: &'a ResourceCache,
    /// The element's font size, in pixels.
    pub em_size: f32,
    /// The element's x-height, in pixels.
    pub ex_size: f32,
    /// Whether the containing block's height depends on its content.
    pub containing_block_height_auto: bool,
}

impl<'a> ComputeContext<'a> {
    /// A context using the cache's default font metrics and a containing
    /// block with a definite height.
    #[must_use]
    pub fn new(cache: &'a ResourceCache) -> Self {
        Self::with_metrics(cache, cache.default_metrics())
    }

    /// A context with explicit font metrics.
    #[must_use]
    pub const fn with_metrics(cache: &'a ResourceCache, metrics: FontMetrics) -> Self {
        Self {
            cache,
            em_size: metrics.em_size,
            ex_size: metrics.ex_size,
            containing_block_height_auto: false,
        }
    }

    /// Set whether the containing block's height is `auto`.
    #[must_use]
    pub const fn with_containing_block_height_auto(mut self, auto: bool) -> Self {
        self.containing_block_height_auto = auto;
        self
    }
}
