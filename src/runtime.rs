use std::cell::RefCell;
use std::rc::Rc;

use crate::app_core::{AppCore, AppSubscription};
use crate::model::AppSnapshot;
use kazuburokku_core::BoardAction;

#[derive(Clone)]
pub struct ViewHooks {
    pub on_action: Rc<dyn Fn(BoardAction)>,
}

impl ViewHooks {
    pub fn empty() -> Self {
        Self {
            on_action: Rc::new(|_| {}),
        }
    }

    pub fn for_core(core: &Rc<AppCore>) -> Self {
        let core = Rc::clone(core);
        Self {
            on_action: Rc::new(move |action| core.apply_action(action)),
        }
    }
}

pub trait GameView {
    fn init(&mut self, hooks: ViewHooks);
    fn render(&mut self, snapshot: &AppSnapshot);
}

// Wires a view to the core: actions flow in through the hooks,
// snapshots flow back out on every state change.
pub fn attach_view(core: &Rc<AppCore>, view: Rc<RefCell<dyn GameView>>) -> AppSubscription {
    view.borrow_mut().init(ViewHooks::for_core(core));
    let render_core = Rc::clone(core);
    let render_view = Rc::clone(&view);
    let subscription = core.subscribe(Rc::new(move || {
        let snapshot = render_core.snapshot();
        render_view.borrow_mut().render(&snapshot);
    }));
    let snapshot = core.snapshot();
    view.borrow_mut().render(&snapshot);
    subscription
}
