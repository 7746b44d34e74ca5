//! Create, attach and measure elements on a host surface.
//!
//! A [`Surface`] is whatever the chrome is drawn on: a browser document, a
//! native widget tree, or a headless document used in tests. Elements are
//! opaque handles owned by the surface.
use crate::size::Size;

use std::fmt;
use std::future::Future;
use std::rc::Rc;

/// An inline style property.
pub type StyleProperty = (&'static str, String);

/// The options used to create a new element.
#[derive(Debug, Clone)]
pub struct ElementOptions<Element> {
    /// The class name of the element, if any.
    pub class_name: Option<String>,
    /// The inline style of the element, in order.
    pub style: Vec<StyleProperty>,
    /// The text content of the element, if any.
    pub text_content: Option<String>,
    /// The children of the element, in order.
    pub children: Vec<Element>,
}

impl<Element> ElementOptions<Element> {
    /// Creates empty [`ElementOptions`].
    pub fn new() -> Self {
        Self {
            class_name: None,
            style: Vec::new(),
            text_content: None,
            children: Vec::new(),
        }
    }

    /// Sets the class name.
    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Adds an inline style property.
    #[must_use]
    pub fn style(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.style.push((property, value.into()));
        self
    }

    /// Adds some inline style properties.
    #[must_use]
    pub fn styles(mut self, properties: &[(&'static str, &str)]) -> Self {
        self.style.extend(
            properties
                .iter()
                .map(|(property, value)| (*property, (*value).to_owned())),
        );
        self
    }

    /// Sets the text content.
    #[must_use]
    pub fn text(mut self, text_content: impl Into<String>) -> Self {
        self.text_content = Some(text_content.into());
        self
    }

    /// Adds a child.
    #[must_use]
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Adds some children.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }
}

impl<Element> Default for ElementOptions<Element> {
    fn default() -> Self {
        Self::new()
    }
}

/// A user interaction with an element.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The element was clicked with the primary button.
    Click,
    /// The element was clicked with the secondary button.
    SecondaryClick,
    /// The value of an input element changed.
    Input(String),
}

/// A handler of the [`Event`]s of an element.
pub type Handler = Rc<dyn Fn(&Event)>;

/// A host environment able to create, attach and measure elements.
pub trait Surface {
    /// A handle to an element of the surface.
    type Element: Clone + fmt::Debug + 'static;

    /// Creates a new detached element.
    fn create_element(&self, tag: &str, options: ElementOptions<Self::Element>) -> Self::Element;

    /// Appends `child` as the last child of `parent`.
    fn append_child(&self, parent: &Self::Element, child: &Self::Element);

    /// Inserts `child` into `parent` right before `reference`.
    fn insert_before(
        &self,
        parent: &Self::Element,
        child: &Self::Element,
        reference: &Self::Element,
    );

    /// Removes `child` from `parent`.
    fn remove_child(&self, parent: &Self::Element, child: &Self::Element);

    /// Replaces the class name of an element.
    fn set_class_name(&self, element: &Self::Element, class_name: &str);

    /// Replaces the text content of an element.
    fn set_text_content(&self, element: &Self::Element, text: &str);

    /// Registers a handler for the [`Event`]s of an element.
    fn on_event(&self, element: &Self::Element, handler: Handler);

    /// Returns how much space is available for the contents of `container`.
    fn available_size(&self, container: &Self::Element) -> Size;

    /// Measures the rendered bounding size of an attached element.
    ///
    /// Hosts may need to wait for a layout pass before the size is
    /// trustworthy, hence the future.
    fn measure(&self, element: &Self::Element) -> impl Future<Output = Size>;
}
