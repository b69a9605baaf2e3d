use super::VertIdx;

///////////////////////////////////////////////////////////////////////////////
// DirectedIndexEdge

/// Directed edge between two vertex indices.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DirectedIndexEdge {
  pub src: VertIdx,
  pub dst: VertIdx,
}

impl DirectedIndexEdge {
  pub fn new(src: VertIdx, dst: VertIdx) -> DirectedIndexEdge {
    DirectedIndexEdge { src, dst }
  }

  pub fn reverse(self) -> DirectedIndexEdge {
    DirectedIndexEdge::new(self.dst, self.src)
  }
}

///////////////////////////////////////////////////////////////////////////////
// IndexEdge

/// Undirected edge. `IndexEdge::new(a, b) == IndexEdge::new(b, a)`.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexEdge {
  pub min: VertIdx,
  pub max: VertIdx,
}

impl IndexEdge {
  pub fn new(a: VertIdx, b: VertIdx) -> IndexEdge {
    IndexEdge {
      min: std::cmp::min(a, b),
      max: std::cmp::max(a, b),
    }
  }

  pub fn contains(&self, v: VertIdx) -> bool {
    self.min == v || self.max == v
  }
}

impl From<DirectedIndexEdge> for IndexEdge {
  fn from(directed: DirectedIndexEdge) -> IndexEdge {
    IndexEdge::new(directed.src, directed.dst)
  }
}
