use leptos::prelude::*;

/// Transient notifications: a message signal cleared after a timeout.
/// Screens push messages here instead of owning their own banner state.
#[derive(Clone, Copy)]
pub struct NotificationService {
    message: RwSignal<Option<(String, bool)>>, // (text, is_error)
    generation: RwSignal<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    pub fn info(&self, text: impl Into<String>) {
        self.show(text.into(), false);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(text.into(), true);
    }

    fn show(&self, text: String, is_error: bool) {
        let token = self.post(text, is_error);
        let service = *self;
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            service.expire(token);
        });
    }

    /// Показать сообщение; возвращает токен поколения для expire
    fn post(&self, text: String, is_error: bool) -> u64 {
        let token = self.generation.get_untracked() + 1;
        self.generation.set(token);
        self.message.set(Some((text, is_error)));
        token
    }

    /// Скрыть сообщение, если его не вытеснило более новое
    fn expire(&self, token: u64) {
        if self.generation.get_untracked() == token {
            self.message.set(None);
        }
    }

    pub fn current(&self) -> Option<(String, bool)> {
        self.message.get()
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Достать сервис уведомлений из контекста
pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not found in context")
}

/// Плашка уведомления; рендерится один раз в Shell
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        {move || service.current().map(|(text, is_error)| {
            let class = if is_error {
                "notification notification--error"
            } else {
                "notification notification--info"
            };
            view! { <div class=class>{text}</div> }
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_timer_does_not_clear_newer_message() {
        let service = NotificationService::new();

        let first = service.post("сохранено".to_string(), false);
        let second = service.post("ошибка сохранения".to_string(), true);

        service.expire(first);
        assert_eq!(
            service.message.get_untracked(),
            Some(("ошибка сохранения".to_string(), true))
        );

        service.expire(second);
        assert_eq!(service.message.get_untracked(), None);
    }
}
