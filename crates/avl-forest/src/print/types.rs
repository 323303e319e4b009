/// Deferred child renderer: receives the indentation prefix for its own
/// nested children and returns the child's text.
pub type PrintChild<'a> = dyn Fn(&str) -> String + 'a;
