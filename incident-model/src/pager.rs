/// Cursor over a fixed list that shows one item at a time.
///
/// The cursor is clamped to the list: stepping past either end leaves it
/// where it is. There is no wraparound.
#[derive(Clone, Debug, PartialEq)]
pub struct ResponsePager<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> Default for ResponsePager<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: 0,
        }
    }
}

impl<T> ResponsePager<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, index: 0 }
    }

    /// Swaps in a new list and rewinds to the first item.
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.index = 0;
    }

    pub fn clear(&mut self) {
        self.replace(Vec::new());
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    /// Returns whether the cursor moved.
    pub fn next(&mut self) -> bool {
        if self.index + 1 < self.items.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Returns whether the cursor moved.
    pub fn previous(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.items.len()
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// 1-based position and total, `None` when there is nothing to show.
    pub fn position(&self) -> Option<(usize, usize)> {
        (!self.items.is_empty()).then(|| (self.index + 1, self.items.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_first_item() {
        let pager = ResponsePager::new(vec!["a", "b"]);
        assert_eq!(pager.index(), 0);
        assert_eq!(pager.current(), Some(&"a"));
        assert_eq!(pager.position(), Some((1, 2)));
    }

    #[test]
    fn previous_at_start_is_ignored() {
        let mut pager = ResponsePager::new(vec![1, 2, 3]);
        assert!(!pager.previous());
        assert_eq!(pager.index(), 0);
    }

    #[test]
    fn next_stops_at_last_item() {
        let mut pager = ResponsePager::new(vec![1, 2, 3]);
        assert!(pager.next());
        assert!(pager.next());
        assert!(!pager.next());
        assert_eq!(pager.current(), Some(&3));
        assert!(!pager.has_next());
        assert!(pager.has_previous());
    }

    #[test]
    fn empty_pager_never_moves() {
        let mut pager = ResponsePager::<u8>::default();
        assert!(!pager.next());
        assert!(!pager.previous());
        assert_eq!(pager.index(), 0);
        assert_eq!(pager.current(), None);
        assert_eq!(pager.position(), None);
    }

    #[test]
    fn replace_rewinds() {
        let mut pager = ResponsePager::new(vec![1, 2, 3]);
        pager.next();
        pager.next();
        pager.replace(vec![9, 8]);
        assert_eq!(pager.index(), 0);
        assert_eq!(pager.current(), Some(&9));
        pager.clear();
        assert!(pager.is_empty());
    }
}
