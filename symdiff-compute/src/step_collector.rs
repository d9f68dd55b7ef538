/// Receives the steps taken by an algorithm, such as the rewrites made by
/// [`simplify_with`](crate::simplify_with), in the order they happen.
///
/// Implemented for:
///
/// - `()`, which drops every step;
/// - `Vec<S>`, which keeps them;
/// - `usize`, which only counts them.
pub trait StepCollector<S> {
    /// Records one step.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}

impl<S> StepCollector<S> for usize {
    #[inline]
    fn push(&mut self, _: S) {
        *self += 1;
    }
}
