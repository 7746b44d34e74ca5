//! Switch the display between sizes.
use crate::core::{Error, Result, SizeSummary};
use crate::game::FullScreen;

use std::cell::Cell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// A size to switch to.
#[derive(Debug, Clone, PartialEq)]
pub enum SizeRequest {
    /// A configured size, by name.
    Named(String),
    /// An explicit size.
    Summary(SizeSummary),
}

impl From<&str> for SizeRequest {
    fn from(name: &str) -> Self {
        SizeRequest::Named(name.to_owned())
    }
}

impl From<String> for SizeRequest {
    fn from(name: String) -> Self {
        SizeRequest::Named(name)
    }
}

impl From<SizeSummary> for SizeRequest {
    fn from(summary: SizeSummary) -> Self {
        SizeRequest::Summary(summary)
    }
}

/// Resolves size requests and keeps full screen in sync with them.
pub struct SizeChanger {
    sizes: BTreeMap<String, SizeSummary>,
    full_screen: Rc<dyn FullScreen>,
    is_full_screen: Cell<bool>,
}

impl SizeChanger {
    /// Creates a new [`SizeChanger`] knowing the given named sizes.
    pub fn new(sizes: BTreeMap<String, SizeSummary>, full_screen: Rc<dyn FullScreen>) -> Self {
        Self {
            sizes,
            full_screen,
            is_full_screen: Cell::new(false),
        }
    }

    /// Returns whether full screen was requested and not cancelled since.
    pub fn is_full_screen(&self) -> bool {
        self.is_full_screen.get()
    }

    /// Resolves a size request, entering or leaving full screen as needed.
    ///
    /// Returns the size to reset the contents to.
    pub fn set_size(&self, request: impl Into<SizeRequest>) -> Result<SizeSummary> {
        let summary = match request.into() {
            SizeRequest::Named(name) => match self.sizes.get(&name) {
                Some(summary) => *summary,
                None => return Err(Error::UnknownSize(name)),
            },
            SizeRequest::Summary(summary) => summary,
        };

        if summary.full {
            log::info!("requesting full screen");
            self.full_screen.request_full_screen();
            self.is_full_screen.set(true);
        } else if self.is_full_screen.replace(false) {
            log::info!("cancelling full screen");
            self.full_screen.cancel_full_screen();
        }

        Ok(summary)
    }
}

impl fmt::Debug for SizeChanger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SizeChanger")
            .field("sizes", &self.sizes)
            .field("is_full_screen", &self.is_full_screen.get())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dimension;

    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<&'static str>>,
    }

    impl FullScreen for Recorder {
        fn request_full_screen(&self) {
            self.calls.borrow_mut().push("request");
        }

        fn cancel_full_screen(&self) {
            self.calls.borrow_mut().push("cancel");
        }
    }

    fn changer() -> (Rc<Recorder>, SizeChanger) {
        let recorder = Rc::new(Recorder::default());

        let sizes = BTreeMap::from([
            ("Small".to_owned(), SizeSummary::new(490.0, 350.0)),
            (
                "Full".to_owned(),
                SizeSummary::new(Dimension::Fill, Dimension::Fill).full(true),
            ),
        ]);

        (recorder.clone(), SizeChanger::new(sizes, recorder))
    }

    #[test]
    fn unknown_names_are_errors() {
        let (recorder, changer) = changer();

        let error = changer.set_size("Huge").expect_err("Huge is not configured");

        assert_eq!(error.to_string(), "Size 'Huge' does not exist");
        assert!(recorder.calls.borrow().is_empty());
    }

    #[test]
    fn named_sizes_resolve_to_their_summary() {
        let (_recorder, changer) = changer();

        assert_eq!(
            changer.set_size("Small"),
            Ok(SizeSummary::new(490.0, 350.0))
        );
    }

    #[test]
    fn full_screen_is_cancelled_once() {
        let (recorder, changer) = changer();

        let _ = changer.set_size("Full").expect("configured size");
        assert!(changer.is_full_screen());

        let _ = changer.set_size("Small").expect("configured size");
        let _ = changer
            .set_size(SizeSummary::new(100.0, 100.0))
            .expect("explicit sizes always resolve");

        assert!(!changer.is_full_screen());
        assert_eq!(*recorder.calls.borrow(), ["request", "cancel"]);
    }
}
