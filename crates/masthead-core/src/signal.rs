use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

pub type SubId = usize;

/// Observable, reactive value.
///
/// Cloning the handle shares the underlying value. Subscribers run after
/// every `set`/`update`, on the same thread, while an immutable borrow of the
/// value is held: a subscriber may read any signal but must not write to or
/// subscribe to the one that is notifying.
#[derive(Clone)]
pub struct Signal<T: 'static>(Rc<RefCell<Inner<T>>>);

struct Inner<T> {
    value: T,
    subs: SmallVec<[Rc<dyn Fn(&T)>; 2]>,
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            subs: SmallVec::new(),
        })))
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().value.clone()
    }

    pub fn set(&self, v: T) {
        self.0.borrow_mut().value = v;
        self.notify();
    }

    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        f(&mut self.0.borrow_mut().value);
        self.notify();
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        let mut inner = self.0.borrow_mut();
        inner.subs.push(Rc::new(f));
        inner.subs.len() - 1
    }

    fn notify(&self) {
        // Snapshot the handles so the subscriber list is not borrowed while
        // callbacks run.
        let subs: SmallVec<[Rc<dyn Fn(&T)>; 2]> = self.0.borrow().subs.clone();
        for s in subs {
            s(&self.0.borrow().value);
        }
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}
