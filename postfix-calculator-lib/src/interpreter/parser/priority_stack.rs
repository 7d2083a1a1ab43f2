/// Returns true when the first item should sit below the second one.
pub type LessThan<T> = fn(&T, &T) -> bool;

/// A stack that can optionally keep its items ordered.
///
/// Without an ordering it is a plain LIFO stack. With one, every [`push`](Self::push)
/// moves the new item toward the base while it is strictly less than the item below
/// it, which is an insertion sort of one element per push.
#[derive(Debug, Clone)]
pub struct PriorityStack<T> {
    items: Vec<T>,
    less: Option<LessThan<T>>,
}

impl<T> PriorityStack<T> {
    pub fn new() -> PriorityStack<T> {
        PriorityStack {
            items: Vec::new(),
            less: None,
        }
    }

    pub fn with_ordering(less: LessThan<T>) -> PriorityStack<T> {
        PriorityStack {
            items: Vec::new(),
            less: Some(less),
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        if let Some(less) = self.less {
            let mut index = self.items.len() - 1;
            while index > 0 && less(&self.items[index], &self.items[index - 1]) {
                self.items.swap(index, index - 1);
                index -= 1;
            }
        }
    }

    /// Places the item on top, skipping the ordering pass.
    pub fn push_unordered(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for PriorityStack<T> {
    fn default() -> Self {
        PriorityStack::new()
    }
}
