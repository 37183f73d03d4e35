/// Pages of the app. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Favorites,
    Movie,
}

/// What a page transition asks the caller to do besides showing the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEffect {
    None,
    /// Clear the search input and results.
    ClearSearch,
}

/// Navigation state: the active page plus the single remembered target the
/// movie page's back link returns to.
///
/// There is no history stack. The back target only moves when a reset
/// navigation lands on a non-movie page, so returning from a detail view
/// goes back to wherever the user came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNav {
    active: Page,
    back_target: Page,
}

impl Default for PageNav {
    fn default() -> Self {
        PageNav {
            active: Page::Home,
            back_target: Page::Home,
        }
    }
}

impl PageNav {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Page {
        self.active
    }

    /// Where the movie page's back link currently leads.
    pub fn back_target(&self) -> Page {
        self.back_target
    }

    /// Activate a page.
    ///
    /// Nav menu links pass `reset = true`; in-page navigation (result rows,
    /// the back link) passes `reset = false`. A reset landing on the home
    /// page asks the caller to clear the search state, and a reset landing
    /// on any non-movie page becomes the new back target.
    pub fn activate(&mut self, target: Page, reset: bool) -> NavEffect {
        self.active = target;

        if reset && target != Page::Movie {
            self.back_target = target;
        }

        if reset && target == Page::Home {
            NavEffect::ClearSearch
        } else {
            NavEffect::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let nav = PageNav::new();
        assert_eq!(nav.active(), Page::Home);
        assert_eq!(nav.back_target(), Page::Home);
    }

    #[test]
    fn test_opening_movie_keeps_back_target() {
        let mut nav = PageNav::new();
        nav.activate(Page::Favorites, true);
        let effect = nav.activate(Page::Movie, false);
        assert_eq!(effect, NavEffect::None);
        assert_eq!(nav.active(), Page::Movie);
        assert_eq!(nav.back_target(), Page::Favorites);
    }

    #[test]
    fn test_reset_to_non_home_page_moves_back_target_only() {
        let mut nav = PageNav::new();
        let effect = nav.activate(Page::Favorites, true);
        assert_eq!(effect, NavEffect::None);
        assert_eq!(nav.back_target(), Page::Favorites);
    }

    #[test]
    fn test_reset_to_home_clears_search() {
        let mut nav = PageNav::new();
        nav.activate(Page::Favorites, true);
        let effect = nav.activate(Page::Home, true);
        assert_eq!(effect, NavEffect::ClearSearch);
        assert_eq!(nav.back_target(), Page::Home);
    }

    #[test]
    fn test_reset_on_movie_page_never_moves_back_target() {
        let mut nav = PageNav::new();
        nav.activate(Page::Favorites, true);
        let effect = nav.activate(Page::Movie, true);
        assert_eq!(effect, NavEffect::None);
        assert_eq!(nav.back_target(), Page::Favorites);
    }

    #[test]
    fn test_plain_navigation_changes_active_only() {
        let mut nav = PageNav::new();
        let effect = nav.activate(Page::Favorites, false);
        assert_eq!(effect, NavEffect::None);
        assert_eq!(nav.active(), Page::Favorites);
        assert_eq!(nav.back_target(), Page::Home);
    }
}
