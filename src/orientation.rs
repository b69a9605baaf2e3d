#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

impl Orientation {
  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }
}
