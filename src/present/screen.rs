/// Turns a route into a screen handle for the host UI.
///
/// The engine calls `render` at most once per stack entry and reuses the
/// returned handle for as long as that entry stays on the stack. Handles
/// are cloned into every presentation chain, so make them cheap to clone
/// (an `Rc`/`Arc` or a plain id into the host's own widget table).
///
/// Any `FnMut(&R) -> S` closure is a renderer.
pub trait ScreenRenderer<R> {
    /// The host-side screen handle.
    type Screen: Clone;

    fn render(&mut self, route: &R) -> Self::Screen;
}

impl<R, S, F> ScreenRenderer<R> for F
where
    F: FnMut(&R) -> S,
    S: Clone,
{
    type Screen = S;

    fn render(&mut self, route: &R) -> S {
        self(route)
    }
}
