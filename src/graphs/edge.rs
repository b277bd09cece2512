use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
pub struct WeightedEdge<V, W> {
    tail: V,
    head: V,
    weight: W,
}

impl<V, W> WeightedEdge<V, W> {
    pub fn new(tail: V, head: V, weight: W) -> WeightedEdge<V, W> {
        WeightedEdge { tail, head, weight }
    }

    pub fn tail(&self) -> &V {
        &self.tail
    }

    pub fn head(&self) -> &V {
        &self.head
    }

    pub fn weight(&self) -> &W {
        &self.weight
    }
}

impl<V: Clone, W: Clone> WeightedEdge<V, W> {
    pub fn reversed(&self) -> WeightedEdge<V, W> {
        WeightedEdge {
            tail: self.head.clone(),
            head: self.tail.clone(),
            weight: self.weight.clone(),
        }
    }
}

impl<V, W> From<(V, V, W)> for WeightedEdge<V, W> {
    fn from((tail, head, weight): (V, V, W)) -> Self {
        WeightedEdge::new(tail, head, weight)
    }
}
