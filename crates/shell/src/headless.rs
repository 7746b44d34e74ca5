//! A headless document surface.
//!
//! [`Document`] keeps an element tree in memory, much like a browser
//! document without any rendering. It is used to run displays in tests and
//! in hosts that have nothing to draw on. Layout is not computed: the
//! available size of containers is set by hand, and measurements are
//! answered by a configurable function.
use crate::core::Size;
use crate::core::surface::{ElementOptions, Event, Handler, StyleProperty, Surface};
use crate::futures::futures::future;

use slotmap::{SlotMap, new_key_type};
use std::cell::RefCell;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

new_key_type! {
    /// An element of a [`Document`].
    pub struct Node;
}

/// Measures an attached element of a [`Document`].
pub type Measure = Rc<dyn Fn(&Document, Node) -> Size>;

/// An in-memory element tree.
pub struct Document {
    root: Node,
    nodes: RefCell<SlotMap<Node, NodeData>>,
    measure: RefCell<Measure>,
}

#[derive(Default)]
struct NodeData {
    tag: String,
    class_name: String,
    style: Vec<StyleProperty>,
    text: String,
    parent: Option<Node>,
    children: Vec<Node>,
    handlers: Vec<Handler>,
    available_size: Option<Size>,
}

impl Document {
    /// Creates an empty [`Document`] with a `body` root.
    ///
    /// Every element measures as [`Size::ZERO`] until
    /// [`Document::set_measure`] is called.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(NodeData {
            tag: "body".to_owned(),
            ..NodeData::default()
        });

        Self {
            root,
            nodes: RefCell::new(nodes),
            measure: RefCell::new(Rc::new(|_: &Document, _: Node| Size::ZERO)),
        }
    }

    /// Returns the root of the document.
    pub fn root(&self) -> Node {
        self.root
    }

    /// Replaces the function measuring attached elements.
    pub fn set_measure(&self, measure: impl Fn(&Document, Node) -> Size + 'static) {
        *self.measure.borrow_mut() = Rc::new(measure);
    }

    /// Sets the space available for the contents of `container`.
    pub fn set_available_size(&self, container: Node, size: Size) {
        self.with_element_mut(container, |element| {
            element.available_size = Some(size);
        });
    }

    /// Returns the tag of an element.
    pub fn tag(&self, node: Node) -> Option<String> {
        self.with_element(node, |element| element.tag.clone())
    }

    /// Returns the class name of an element.
    pub fn class_name(&self, node: Node) -> Option<String> {
        self.with_element(node, |element| element.class_name.clone())
    }

    /// Returns whether an element has the given class.
    pub fn has_class(&self, node: Node, class: &str) -> bool {
        self.with_element(node, |element| {
            element.class_name.split_whitespace().any(|name| name == class)
        })
        .unwrap_or(false)
    }

    /// Returns the value of an inline style property of an element.
    pub fn style(&self, node: Node, property: &str) -> Option<String> {
        self.with_element(node, |element| {
            element
                .style
                .iter()
                .rev()
                .find(|(name, _)| *name == property)
                .map(|(_, value)| value.clone())
        })
        .flatten()
    }

    /// Returns the text of an element and of all of its descendants.
    pub fn text_content(&self, node: Node) -> String {
        let nodes = self.nodes.borrow();
        let mut text = String::new();

        gather_text(&nodes, node, &mut text);

        text
    }

    /// Returns the parent of an element.
    pub fn parent(&self, node: Node) -> Option<Node> {
        self.with_element(node, |element| element.parent).flatten()
    }

    /// Returns the children of an element, in order.
    pub fn children(&self, node: Node) -> Vec<Node> {
        self.with_element(node, |element| element.children.clone())
            .unwrap_or_default()
    }

    /// Returns whether an element is part of the tree under the root.
    pub fn is_attached(&self, node: Node) -> bool {
        let nodes = self.nodes.borrow();
        let mut current = Some(node);

        while let Some(node) = current {
            if node == self.root {
                return true;
            }

            current = nodes.get(node).and_then(|element| element.parent);
        }

        false
    }

    /// Returns every attached element with the given class, in tree order.
    pub fn find_by_class(&self, class: &str) -> Vec<Node> {
        let mut found = Vec::new();
        let mut stack = vec![self.root];

        while let Some(node) = stack.pop() {
            if self.has_class(node, class) {
                found.push(node);
            }

            stack.extend(self.children(node).into_iter().rev());
        }

        found
    }

    /// Returns the first attached element with the given class.
    pub fn first_by_class(&self, class: &str) -> Option<Node> {
        self.find_by_class(class).into_iter().next()
    }

    /// Dispatches an [`Event`] to the handlers of an element.
    pub fn dispatch(&self, node: Node, event: &Event) {
        let handlers = self
            .with_element(node, |element| element.handlers.clone())
            .unwrap_or_default();

        for handler in handlers {
            handler(event);
        }
    }

    /// Clicks an element.
    pub fn click(&self, node: Node) {
        self.dispatch(node, &Event::Click);
    }

    /// Clicks an element with the secondary button.
    pub fn secondary_click(&self, node: Node) {
        self.dispatch(node, &Event::SecondaryClick);
    }

    /// Changes the value of an input element.
    pub fn input(&self, node: Node, value: impl Into<String>) {
        self.dispatch(node, &Event::Input(value.into()));
    }

    fn with_element<R>(&self, node: Node, f: impl FnOnce(&NodeData) -> R) -> Option<R> {
        self.nodes.borrow().get(node).map(f)
    }

    fn with_element_mut(&self, node: Node, f: impl FnOnce(&mut NodeData)) {
        if let Some(element) = self.nodes.borrow_mut().get_mut(node) {
            f(element);
        }
    }

    fn detach(&self, child: Node) {
        let mut nodes = self.nodes.borrow_mut();

        let Some(parent) = nodes.get_mut(child).and_then(|element| element.parent.take()) else {
            return;
        };

        if let Some(parent) = nodes.get_mut(parent) {
            parent.children.retain(|node| *node != child);
        }
    }

    fn attach(&self, parent: Node, child: Node, reference: Option<Node>) {
        if parent == child || self.is_ancestor(child, parent) {
            log::warn!("refusing to insert {child:?} inside of itself");
            return;
        }

        self.detach(child);

        let mut nodes = self.nodes.borrow_mut();

        if !nodes.contains_key(child) {
            return;
        }

        let Some(element) = nodes.get_mut(parent) else {
            return;
        };

        let index = reference
            .and_then(|reference| element.children.iter().position(|node| *node == reference))
            .unwrap_or(element.children.len());

        element.children.insert(index, child);

        if let Some(element) = nodes.get_mut(child) {
            element.parent = Some(parent);
        }
    }

    fn is_ancestor(&self, ancestor: Node, node: Node) -> bool {
        let nodes = self.nodes.borrow();
        let mut current = nodes.get(node).and_then(|element| element.parent);

        while let Some(node) = current {
            if node == ancestor {
                return true;
            }

            current = nodes.get(node).and_then(|element| element.parent);
        }

        false
    }
}

fn gather_text(nodes: &SlotMap<Node, NodeData>, node: Node, text: &mut String) {
    let Some(element) = nodes.get(node) else {
        return;
    };

    text.push_str(&element.text);

    for child in &element.children {
        gather_text(nodes, *child, text);
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for Document {
    type Element = Node;

    fn create_element(&self, tag: &str, options: ElementOptions<Node>) -> Node {
        let node = self.nodes.borrow_mut().insert(NodeData {
            tag: tag.to_owned(),
            class_name: options.class_name.unwrap_or_default(),
            style: options.style,
            text: options.text_content.unwrap_or_default(),
            ..NodeData::default()
        });

        for child in options.children {
            self.attach(node, child, None);
        }

        node
    }

    fn append_child(&self, parent: &Node, child: &Node) {
        self.attach(*parent, *child, None);
    }

    fn insert_before(&self, parent: &Node, child: &Node, reference: &Node) {
        self.attach(*parent, *child, Some(*reference));
    }

    fn remove_child(&self, parent: &Node, child: &Node) {
        if self.parent(*child) == Some(*parent) {
            self.detach(*child);
        }
    }

    fn set_class_name(&self, element: &Node, class_name: &str) {
        self.with_element_mut(*element, |element| {
            class_name.clone_into(&mut element.class_name);
        });
    }

    fn set_text_content(&self, element: &Node, text: &str) {
        let children = self.children(*element);

        for child in children {
            self.detach(child);
        }

        self.with_element_mut(*element, |element| {
            text.clone_into(&mut element.text);
        });
    }

    fn on_event(&self, element: &Node, handler: Handler) {
        self.with_element_mut(*element, |element| element.handlers.push(handler));
    }

    fn available_size(&self, container: &Node) -> Size {
        self.with_element(*container, |element| element.available_size)
            .flatten()
            .unwrap_or(Size::ZERO)
    }

    fn measure(&self, element: &Node) -> impl Future<Output = Size> {
        let size = if self.is_attached(*element) {
            let measure = Rc::clone(&self.measure.borrow());
            measure(self, *element)
        } else {
            log::warn!("measuring detached element {element:?}");
            Size::ZERO
        };

        future::ready(size)
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("root", &self.root)
            .field("nodes", &self.nodes.borrow().len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    #[test]
    fn create_element_attaches_children() {
        let document = Document::new();

        let title = document.create_element("h4", ElementOptions::new().text("Options"));
        let menu = document.create_element(
            "div",
            ElementOptions::new()
                .class_name("menu menu-closed")
                .style("flex", "1")
                .child(title),
        );

        assert_eq!(document.parent(title), Some(menu));
        assert_eq!(document.text_content(menu), "Options");
        assert_eq!(document.style(menu, "flex").as_deref(), Some("1"));
        assert!(document.has_class(menu, "menu-closed"));
        assert!(!document.is_attached(menu));

        document.append_child(&document.root(), &menu);

        assert!(document.is_attached(title));
        assert_eq!(document.find_by_class("menu"), [menu]);
    }

    #[test]
    fn insert_before_moves_elements() {
        let document = Document::new();
        let root = document.root();

        let first = document.create_element("div", ElementOptions::new());
        let second = document.create_element("div", ElementOptions::new());

        document.append_child(&root, &first);
        document.insert_before(&root, &second, &first);
        assert_eq!(document.children(root), [second, first]);

        document.append_child(&root, &second);
        assert_eq!(document.children(root), [first, second]);

        document.remove_child(&root, &first);
        assert_eq!(document.children(root), [second]);
        assert_eq!(document.parent(first), None);
    }

    #[test]
    fn elements_cannot_contain_themselves() {
        let document = Document::new();

        let child = document.create_element("div", ElementOptions::new());
        let parent = document.create_element("div", ElementOptions::new().child(child));

        document.append_child(&child, &parent);

        assert_eq!(document.parent(parent), None);
        assert!(document.children(child).is_empty());
    }

    #[test]
    fn events_reach_handlers() {
        let document = Document::new();
        let clicks = Rc::new(Cell::new(0));

        let button = document.create_element("button", ElementOptions::new());
        let counter = Rc::clone(&clicks);
        document.on_event(
            &button,
            Rc::new(move |event: &Event| {
                if *event == Event::Click {
                    counter.set(counter.get() + 1);
                }
            }),
        );

        document.click(button);
        document.secondary_click(button);

        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn only_attached_elements_are_measured() {
        let document = Document::new();
        document.set_measure(|_, _| Size::new(490.0, 350.0));

        let strip = document.create_element("div", ElementOptions::new());
        let detached = futures::executor::block_on(document.measure(&strip));

        document.append_child(&document.root(), &strip);
        let attached = futures::executor::block_on(document.measure(&strip));

        assert_eq!(detached, Size::ZERO);
        assert_eq!(attached, Size::new(490.0, 350.0));
    }
}
