//! The steps taken by the simplifier.

/// A single rewrite performed by [`simplify_with`](super::simplify_with).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// `a+b` with both operands constant.
    FoldAdd,

    /// `a-b` with both operands constant.
    FoldSub,

    /// `a*b` with both operands constant.
    FoldMul,

    /// `a/b` with both operands constant and an integral quotient.
    FoldDiv,

    /// `a^b` with both operands constant and an integral exponent.
    FoldPow,

    /// `ln(1) = 0`
    FoldLn,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `a-0 = a`
    SubZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `a/1 = a`
    DivideOne,

    /// `0/a = 0`
    DivideZero,

    /// `a^1 = a`
    PowerOne,

    /// `a^0 = 1`
    PowerZero,

    /// `1^a = 1`
    PowerOneLeft,

    /// `0^a = 0`
    PowerZeroLeft,
}

impl Step {
    /// Returns a short description of the rewrite, in the notation used by the variant docs.
    pub fn description(&self) -> &'static str {
        match self {
            Self::FoldAdd => "fold constant sum",
            Self::FoldSub => "fold constant difference",
            Self::FoldMul => "fold constant product",
            Self::FoldDiv => "fold constant quotient",
            Self::FoldPow => "fold constant power",
            Self::FoldLn => "ln(1) = 0",
            Self::AddZero => "a+0 = a",
            Self::SubZero => "a-0 = a",
            Self::MultiplyOne => "a*1 = a",
            Self::MultiplyZero => "a*0 = 0",
            Self::DivideOne => "a/1 = a",
            Self::DivideZero => "0/a = 0",
            Self::PowerOne => "a^1 = a",
            Self::PowerZero => "a^0 = 1",
            Self::PowerOneLeft => "1^a = 1",
            Self::PowerZeroLeft => "0^a = 0",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
