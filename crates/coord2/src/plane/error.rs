/// Degenerate geometry: the query has no finite answer for these inputs.
///
/// The `Display` text is the diagnostic line printed in lenient mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GeomError {
    /// Both points share an x component.
    #[error("Undefined slope for vertical line.")]
    UndefinedSlope,
    /// Collinear or coincident vertices; the circumcircle does not exist.
    #[error("Area of the triangle is 0. Unable to find the radius.")]
    ZeroAreaTriangle,
}
