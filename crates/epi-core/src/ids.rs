//! Dense identifiers for agents and lattice cells.
//!
//! Both ids are plain positions in a `Vec`: agents are never removed and the
//! lattice never changes shape, so an id is valid for the whole run once it
//! has been handed out.  `L ≤ 65 535` keeps every cell index inside `u32`.

use std::fmt;

macro_rules! dense_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty), $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Id of the element stored at `index`.
            ///
            /// # Panics
            /// Panics in debug mode if `index` does not fit the id width.
            #[inline]
            pub fn from_index(index: usize) -> Self {
                debug_assert!(index <= <$inner>::MAX as usize, "{} index {index} overflows", $label);
                $name(index as $inner)
            }

            /// Position of this id's element in its backing `Vec`.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} {}", $label, self.0)
            }
        }
    };
}

dense_id! {
    /// Key of an agent in the network's registry.  Assigned sequentially and
    /// never reused.
    pub struct AgentId(u32), "agent";
}

dense_id! {
    /// Flat row-major index of a lattice cell: `row * side + col`.
    pub struct CellId(u32), "cell";
}
