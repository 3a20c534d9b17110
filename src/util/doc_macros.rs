//! Macros for reducing doc comment boilerplate.

/// Documents the errors shared by all root finding entry points
macro_rules! errors_no_roots {
    () => {
        r"- `InvalidArgument`: the polynomial has degree 0, or every coefficient above the constant term is zero, so there are no roots to find.
"
    };
}
pub(crate) use errors_no_roots;

/// Documents the soft failure of the iterative root finder
macro_rules! warns_no_converge {
    () => {
        r"Roots that did not converge within the iteration cap are still returned as the best estimate so far. A `log::warn!` message is emitted for each of them.
"
    };
}
pub(crate) use warns_no_converge;
