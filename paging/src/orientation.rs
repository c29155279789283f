use crate::list::ItemList;
use crate::model::{Edge, PagingState};

/// List orientation policy.
///
/// One switch, consulted by both strategies, decides where the loader or
/// control sits, which edge's distance is compared against the threshold and
/// whether fetched items are prepended or appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// New pages arrive at the bottom.
    #[default]
    Forward,
    /// New pages arrive at the top (history growing upward).
    Reverse,
}

impl Orientation {
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            Orientation::Reverse
        } else {
            Orientation::Forward
        }
    }

    pub fn is_reverse(self) -> bool {
        self == Orientation::Reverse
    }

    /// Edge at which fetched items arrive and the loading affordance renders.
    pub fn arrival_edge(self) -> Edge {
        match self {
            Orientation::Forward => Edge::Bottom,
            Orientation::Reverse => Edge::Top,
        }
    }

    /// Edge whose remaining distance is compared against the threshold.
    pub fn threshold_edge(self) -> Edge {
        self.arrival_edge()
    }

    /// Merge a fetched page into `items` at the arrival edge, keeping the
    /// page's own order.
    pub fn merge<T>(self, items: &mut ItemList<T>, incoming: Vec<T>) {
        match self {
            Orientation::Forward => items.append(incoming),
            Orientation::Reverse => items.prepend(incoming),
        }
    }
}

impl PagingState {
    pub fn orientation(&self) -> Orientation {
        Orientation::from_reverse(self.reverse)
    }
}
