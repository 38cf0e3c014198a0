// ── Pagination state machine ──
//
// Pure navigation state shared by both binaries: current page, page
// size, total pages, and the pending typed page-number buffer. No page
// outside [1, max(total_pages, 1)] is reachable.

/// Allowed page sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageSize {
    Five,
    #[default]
    Ten,
    Twenty,
}

impl PageSize {
    pub fn as_u32(self) -> u32 {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::Twenty => 20,
        }
    }

    /// Parse a size, accepting only the allowed values.
    pub fn from_u32(n: u32) -> Option<Self> {
        match n {
            5 => Some(Self::Five),
            10 => Some(Self::Ten),
            20 => Some(Self::Twenty),
            _ => None,
        }
    }

    /// The next size in the 5 → 10 → 20 → 5 cycle (UI toggle).
    pub fn cycle(self) -> Self {
        match self {
            Self::Five => Self::Ten,
            Self::Ten => Self::Twenty,
            Self::Twenty => Self::Five,
        }
    }
}

/// Pagination controller.
///
/// The `input` buffer holds a page number being typed; `prev`/`next`
/// jump relative to a valid pending number, and `submit_input` commits
/// it. An out-of-range jump leaves the page unchanged and resets the
/// buffer to the current page -- the one silent rejection in the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    page: u32,
    page_size: PageSize,
    total_pages: u32,
    input: String,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Pager {
    pub fn new(total_pages: u32) -> Self {
        Self {
            page: 1,
            page_size: PageSize::default(),
            total_pages,
            input: "1".to_owned(),
        }
    }

    /// Restore a saved position. The page is trusted as-is until the
    /// first fetch reports real bounds via
    /// [`set_total_pages`](Self::set_total_pages).
    pub fn restore(page: u32, page_size: PageSize) -> Self {
        let page = page.max(1);
        Self {
            page,
            page_size,
            total_pages: 0,
            input: page.to_string(),
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// The visible contents of the jump input box.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Navigation bound: zero total pages behaves as one.
    fn effective_total(&self) -> u32 {
        self.total_pages.max(1)
    }

    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self) -> bool {
        self.page < self.effective_total()
    }

    // ── Navigation ───────────────────────────────────────────────────

    pub fn first(&mut self) {
        if self.can_prev() {
            self.page = 1;
            self.reset_input();
        }
    }

    pub fn last(&mut self) {
        if self.can_next() {
            self.page = self.effective_total();
            self.reset_input();
        }
    }

    /// Step back one page, or jump relative to a valid pending number.
    pub fn prev(&mut self) {
        if !self.can_prev() {
            return;
        }
        self.page = match self.pending_input() {
            Some(n) if n > 1 && n <= self.effective_total() => n - 1,
            _ => self.page - 1,
        };
        self.reset_input();
    }

    /// Step forward one page, or jump relative to a valid pending number.
    pub fn next(&mut self) {
        if !self.can_next() {
            return;
        }
        self.page = match self.pending_input() {
            Some(n) if n >= 1 && n < self.effective_total() => n + 1,
            _ => self.page + 1,
        };
        self.reset_input();
    }

    /// Jump to an explicit page. Out-of-range is silently rejected and
    /// the input buffer snaps back to the current page.
    pub fn jump(&mut self, n: u32) {
        if (1..=self.effective_total()).contains(&n) {
            self.page = n;
        }
        self.reset_input();
    }

    /// Commit whatever is in the input buffer as a jump.
    pub fn submit_input(&mut self) {
        match self.pending_input() {
            Some(n) => self.jump(n),
            None => self.reset_input(),
        }
    }

    /// Change the page size; always returns to the first page.
    pub fn set_page_size(&mut self, size: PageSize) {
        self.page_size = size;
        self.page = 1;
        self.reset_input();
    }

    /// Update the total after a fetch, clamping the page into bounds.
    pub fn set_total_pages(&mut self, total_pages: u32) {
        self.total_pages = total_pages;
        let clamped = self.page.clamp(1, self.effective_total());
        if clamped != self.page {
            self.page = clamped;
        }
        self.reset_input();
    }

    // ── Input buffer ─────────────────────────────────────────────────

    /// Append a typed digit to the jump buffer.
    pub fn push_digit(&mut self, c: char) {
        if c.is_ascii_digit() && self.input.len() < 6 {
            // Typing replaces the mirrored page number.
            if self.input == self.page.to_string() {
                self.input.clear();
            }
            self.input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    fn pending_input(&self) -> Option<u32> {
        let pending = self.input.parse().ok()?;
        // The mirrored current page is not a pending jump.
        (pending != self.page).then_some(pending)
    }

    fn reset_input(&mut self) {
        self.input = self.page.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager(page: u32, total: u32) -> Pager {
        let mut p = Pager::new(total);
        p.jump(page);
        p
    }

    #[test]
    fn next_at_last_page_is_a_noop() {
        // {page: 3, pageSize: 10, totalPages: 3} → next() keeps 3.
        let mut p = pager(3, 3);
        p.next();
        assert_eq!(p.page(), 3);
        assert!(!p.can_next());
    }

    #[test]
    fn prev_at_first_page_is_a_noop() {
        let mut p = pager(1, 5);
        p.prev();
        p.first();
        assert_eq!(p.page(), 1);
    }

    #[test]
    fn out_of_range_jump_keeps_page_and_resets_input() {
        // {page: 1, totalPages: 5} → jump(7) keeps 1, input back to "1".
        let mut p = pager(1, 5);
        p.push_digit('7');
        assert_eq!(p.input(), "7");
        p.submit_input();
        assert_eq!(p.page(), 1);
        assert_eq!(p.input(), "1");
    }

    #[test]
    fn jump_zero_is_rejected() {
        let mut p = pager(2, 5);
        p.jump(0);
        assert_eq!(p.page(), 2);
    }

    #[test]
    fn valid_jump_moves_and_mirrors_input() {
        let mut p = pager(1, 9);
        p.jump(4);
        assert_eq!(p.page(), 4);
        assert_eq!(p.input(), "4");
    }

    #[test]
    fn prev_uses_valid_pending_input() {
        let mut p = pager(5, 9);
        p.push_digit('8');
        p.prev();
        assert_eq!(p.page(), 7);
        assert_eq!(p.input(), "7");
    }

    #[test]
    fn next_uses_valid_pending_input() {
        let mut p = pager(5, 9);
        p.push_digit('2');
        p.next();
        assert_eq!(p.page(), 3);
    }

    #[test]
    fn prev_ignores_out_of_range_pending_input() {
        let mut p = pager(5, 9);
        p.push_digit('9');
        p.push_digit('9');
        p.prev();
        assert_eq!(p.page(), 4);
    }

    #[test]
    fn page_size_change_resets_to_first_page() {
        let mut p = pager(4, 9);
        p.set_page_size(PageSize::Twenty);
        assert_eq!(p.page(), 1);
        assert_eq!(p.page_size(), PageSize::Twenty);
    }

    #[test]
    fn zero_total_pages_behaves_as_one() {
        let mut p = Pager::new(0);
        assert!(!p.can_prev());
        assert!(!p.can_next());
        p.next();
        p.last();
        assert_eq!(p.page(), 1);
    }

    #[test]
    fn shrinking_total_clamps_the_page() {
        let mut p = pager(5, 5);
        p.set_total_pages(2);
        assert_eq!(p.page(), 2);
        assert_eq!(p.input(), "2");
    }

    #[test]
    fn typing_replaces_mirrored_page_number() {
        let mut p = pager(3, 9);
        p.push_digit('5');
        assert_eq!(p.input(), "5");
        p.backspace();
        p.push_digit('6');
        p.submit_input();
        assert_eq!(p.page(), 6);
    }

    #[test]
    fn restored_position_survives_matching_bounds() {
        let mut p = Pager::restore(3, PageSize::Twenty);
        assert_eq!(p.page(), 3);
        assert_eq!(p.input(), "3");
        p.set_total_pages(5);
        assert_eq!(p.page(), 3);
        p.set_total_pages(2);
        assert_eq!(p.page(), 2);
    }

    #[test]
    fn page_size_cycle_covers_all_values() {
        assert_eq!(PageSize::Five.cycle(), PageSize::Ten);
        assert_eq!(PageSize::Ten.cycle(), PageSize::Twenty);
        assert_eq!(PageSize::Twenty.cycle(), PageSize::Five);
        assert_eq!(PageSize::from_u32(15), None);
        assert_eq!(PageSize::from_u32(20), Some(PageSize::Twenty));
    }
}
