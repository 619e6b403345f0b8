/// A metric value tagged with whether it was computed from real inputs or
/// fell back to its fixed default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Estimate<T> {
    Computed(T),
    Defaulted(T),
}

impl<T> Estimate<T> {
    pub fn value(self) -> T {
        match self {
            Estimate::Computed(v) | Estimate::Defaulted(v) => v,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Estimate::Defaulted(_))
    }
}
