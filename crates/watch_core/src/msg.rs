#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The watcher came up and is about to enter the poll loop.
    Started,
    /// A classification pass over the target page finished.
    PageClassified(crate::Classification),
}
