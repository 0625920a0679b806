//! Composition of sibling views into a container's child list.

use crate::view::View;

/// Collects sibling views in declaration order.
pub struct ViewBuilder;

impl ViewBuilder {
    /// Gather `components` into a child list. Order is kept exactly as given; an empty
    /// sequence is a valid (empty) container.
    pub fn build_block(components: impl IntoIterator<Item = View>) -> Vec<View> {
        components.into_iter().collect()
    }
}

/// Build a [`View::VStack`] from a comma-separated list of views.
///
/// ```
/// use crossui_core::{vstack, View};
///
/// let stack = vstack![View::text("Hello"), View::text("World")];
/// assert_eq!(stack.children().len(), 2);
/// ```
#[macro_export]
macro_rules! vstack {
    ($($child:expr),* $(,)?) => {
        $crate::View::VStack($crate::ViewBuilder::build_block([$($child),*]))
    };
}
