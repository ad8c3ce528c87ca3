/// Priority key. Smaller values are extracted first.
pub type Priority = i32;

/// A heap slot storing an element with its associated priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    pub element: T,
    pub priority: Priority,
}

impl<T> Node<T> {
    pub fn new(element: T, priority: Priority) -> Self {
        Node { element, priority }
    }

    /// Split the node back into its element and priority.
    pub fn into_parts(self) -> (T, Priority) {
        (self.element, self.priority)
    }
}
