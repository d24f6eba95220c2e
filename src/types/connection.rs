/// One page of a paginated listing. A `None` next token means the listing
/// is exhausted.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// Token to pass to the next call, if any results remain
    pub next_token: Option<String>,
}
