use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
}

/// Event handed to listeners; `target` is the element the event was dispatched on.
pub struct Event {
    pub kind: EventKind,
    pub target: Element,
}

pub type Listener = Rc<dyn Fn(&Event)>;

struct Node {
    tag: String,
    id: Option<String>,
    classes: RefCell<Vec<String>>,
    listeners: RefCell<Vec<(EventKind, Listener)>>,
}

/// Shared handle to a document element. Clones point at the same node.
#[derive(Clone)]
pub struct Element(Rc<Node>);

impl Element {
    pub(crate) fn new(tag: &str, id: Option<&str>, classes: &[&str]) -> Self {
        let element = Element(Rc::new(Node {
            tag: tag.to_ascii_lowercase(),
            id: id.map(str::to_string),
            classes: RefCell::new(Vec::new()),
            listeners: RefCell::new(Vec::new()),
        }));
        for class in classes {
            element.add_class(class);
        }
        element
    }

    pub fn tag(&self) -> &str {
        &self.0.tag
    }

    pub fn id(&self) -> Option<String> {
        self.0.id.clone()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.classes.borrow().iter().any(|c| c == class)
    }

    /// Adds `class` unless already present.
    pub fn add_class(&self, class: &str) {
        let mut classes = self.0.classes.borrow_mut();
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    pub fn remove_class(&self, class: &str) {
        self.0.classes.borrow_mut().retain(|c| c != class);
    }

    /// Returns whether the class is present afterwards.
    pub fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    pub fn class_names(&self) -> Vec<String> {
        self.0.classes.borrow().clone()
    }

    pub fn add_event_listener(&self, kind: EventKind, listener: impl Fn(&Event) + 'static) {
        let listener: Listener = Rc::new(listener);
        self.0.listeners.borrow_mut().push((kind, listener));
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.0.listeners.borrow().iter().filter(|(k, _)| *k == kind).count()
    }

    /// Runs every listener registered for `kind`, in registration order.
    ///
    /// The listener list is snapshotted first, so a listener may register new
    /// listeners (they run on the next dispatch) or touch any class list.
    pub fn dispatch(&self, kind: EventKind) {
        let snapshot: Vec<Listener> = self
            .0
            .listeners
            .borrow()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        let event = Event { kind, target: self.clone() };
        for listener in snapshot {
            listener(&event);
        }
    }

    pub fn click(&self) {
        self.dispatch(EventKind::Click);
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Element {}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.0.tag)?;
        if let Some(id) = &self.0.id {
            write!(f, " id=\"{}\"", id)?;
        }
        let classes = self.0.classes.borrow();
        if !classes.is_empty() {
            write!(f, " class=\"{}\"", classes.join(" "))?;
        }
        write!(f, ">")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn class_list_is_a_set() {
        let el = Element::new("div", None, &["fade", "fade"]);
        assert_eq!(el.class_names(), vec!["fade".to_string()]);

        el.add_class("active");
        el.add_class("active");
        assert_eq!(el.class_names(), vec!["fade".to_string(), "active".to_string()]);

        el.remove_class("active");
        assert!(!el.has_class("active"));
        el.remove_class("active");
        assert!(el.has_class("fade"));

        assert!(el.toggle_class("active"));
        assert!(!el.toggle_class("active"));
    }

    #[test]
    fn click_runs_listeners_in_order() {
        let el = Element::new("button", None, &[]);
        let log = Rc::new(RefCell::new(Vec::new()));

        for n in 0..3 {
            let log = Rc::clone(&log);
            el.add_event_listener(EventKind::Click, move |_| log.borrow_mut().push(n));
        }
        el.click();

        assert_eq!(*log.borrow(), vec![0, 1, 2]);
        assert_eq!(el.listener_count(EventKind::Click), 3);
    }

    #[test]
    fn listener_added_during_dispatch_runs_next_time() {
        let el = Element::new("button", None, &[]);
        let hits = Rc::new(Cell::new(0));

        let hits_outer = Rc::clone(&hits);
        el.add_event_listener(EventKind::Click, move |event| {
            let hits = Rc::clone(&hits_outer);
            event.target.add_event_listener(EventKind::Click, move |_| hits.set(hits.get() + 1));
            event.target.add_class("clicked");
        });

        el.click();
        assert_eq!(hits.get(), 0);
        assert!(el.has_class("clicked"));

        el.click();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = Element::new("div", None, &["fade"]);
        let b = Element::new("div", None, &["fade"]);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_eq!(format!("{:?}", a), "<div class=\"fade\">");
    }
}
