//! Transient success and error notifications.
//!
//! Toasts stack newest first and dismiss themselves after [TOAST_LIFETIME].
//! Anything that needs to tell the user about an outcome goes through the
//! [Notify] trait so it can be exercised without a browser.

use std::rc::Rc;
use std::time::Duration;

use yew::prelude::*;

pub const TOAST_LIFETIME: Duration = Duration::from_millis(2200);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Where user-facing outcome messages are sent.
pub trait Notify {
    fn notify(&self, level: ToastLevel, message: &str);

    fn success(&self, message: &str) {
        self.notify(ToastLevel::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(ToastLevel::Error, message);
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    next_id: u64,
    pub items: Vec<Toast>,
}

pub enum ToastAction {
    Push(ToastLevel, String),
    Dismiss(u64),
}

impl Reducible for Toasts {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(level, message) => {
                next.items.insert(
                    0,
                    Toast {
                        id: next.next_id,
                        level,
                        message,
                    },
                );
                next.next_id += 1;
            }
            ToastAction::Dismiss(id) => next.items.retain(|toast| toast.id != id),
        }
        Rc::new(next)
    }
}

/// Handle to the app-wide toast stack, provided through context.
#[derive(Clone, PartialEq)]
pub struct Notifier(UseReducerDispatcher<Toasts>);

impl Notifier {
    pub fn new(dispatcher: UseReducerDispatcher<Toasts>) -> Self {
        Self(dispatcher)
    }
}

impl Notify for Notifier {
    fn notify(&self, level: ToastLevel, message: &str) {
        self.0.dispatch(ToastAction::Push(level, message.to_string()));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastContainerProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastContainer)]
pub fn toast_container(props: &ToastContainerProps) -> Html {
    html! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 w-72">
            { for props.toasts.iter().map(|toast| html! {
                <ToastCard key={toast.id} toast={toast.clone()} on_dismiss={props.on_dismiss.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastCardProps {
    toast: Toast,
    on_dismiss: Callback<u64>,
}

#[function_component(ToastCard)]
fn toast_card(props: &ToastCardProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id: &u64| {
                let id = *id;
                wasm_bindgen_futures::spawn_local(async move {
                    yew::platform::time::sleep(TOAST_LIFETIME).await;
                    on_dismiss.emit(id);
                });
                || ()
            },
            props.toast.id,
        );
    }

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.toast.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let class = match props.toast.level {
        ToastLevel::Success => "bg-emerald-600",
        ToastLevel::Error => "bg-red-500",
    };

    html! {
        <div {onclick} class={classes!("rounded-[10px]", "shadow-lg", "px-4", "py-3", "text-white", "text-sm", "cursor-pointer", class)}>
            { props.toast.message.clone() }
        </div>
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;

    use super::*;

    /// Collects notifications instead of showing them.
    #[derive(Default)]
    pub struct RecordingNotifier {
        pub messages: RefCell<Vec<(ToastLevel, String)>>,
    }

    impl RecordingNotifier {
        pub fn errors(&self) -> Vec<String> {
            self.with_level(ToastLevel::Error)
        }

        pub fn successes(&self) -> Vec<String> {
            self.with_level(ToastLevel::Success)
        }

        fn with_level(&self, level: ToastLevel) -> Vec<String> {
            self.messages
                .borrow()
                .iter()
                .filter(|(l, _)| *l == level)
                .map(|(_, message)| message.clone())
                .collect()
        }
    }

    impl Notify for RecordingNotifier {
        fn notify(&self, level: ToastLevel, message: &str) {
            self.messages.borrow_mut().push((level, message.to_string()));
        }
    }

    #[test]
    fn newest_toast_is_first() {
        let toasts = Rc::new(Toasts::default())
            .reduce(ToastAction::Push(ToastLevel::Success, "Deleted".into()))
            .reduce(ToastAction::Push(ToastLevel::Error, "Failed to delete".into()));

        let messages: Vec<&str> = toasts.items.iter().map(|t| t.message.as_str()).collect();

        assert_eq!(messages, ["Failed to delete", "Deleted"]);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let toasts = Rc::new(Toasts::default())
            .reduce(ToastAction::Push(ToastLevel::Success, "one".into()))
            .reduce(ToastAction::Push(ToastLevel::Success, "two".into()));
        let first_id = toasts.items[1].id;

        let toasts = toasts.reduce(ToastAction::Dismiss(first_id));

        assert_eq!(toasts.items.len(), 1);
        assert_eq!(toasts.items[0].message, "two");
    }

    #[test]
    fn ids_are_not_reused_after_dismissal() {
        let toasts = Rc::new(Toasts::default())
            .reduce(ToastAction::Push(ToastLevel::Success, "one".into()));
        let id = toasts.items[0].id;
        let toasts = toasts
            .reduce(ToastAction::Dismiss(id))
            .reduce(ToastAction::Push(ToastLevel::Success, "two".into()));

        assert_ne!(toasts.items[0].id, id);
    }
}
