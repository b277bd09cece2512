use crate::graphs::Weight;

/// Tentative distance of a vertex during a search.
///
/// `Finite` is declared first so the derived order puts every finite distance
/// below `Infinite`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance<W> {
    Finite(W),
    Infinite,
}

impl<W: Weight> Distance<W> {
    pub fn finite(self) -> Option<W> {
        match self {
            Distance::Finite(weight) => Some(weight),
            Distance::Infinite => None,
        }
    }

    /// Extends the distance by an edge. `Infinite` stays `Infinite`, `None`
    /// means the finite sum does not fit into `W`.
    pub fn checked_add(self, weight: W) -> Option<Distance<W>> {
        match self {
            Distance::Finite(distance) => distance.checked_add(weight).map(Distance::Finite),
            Distance::Infinite => Some(Distance::Infinite),
        }
    }
}
