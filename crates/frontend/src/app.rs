use crate::routes::routes::AppRoutes;
use crate::shared::notification::NotificationService;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Сервис всплывающих уведомлений доступен всем экранам через контекст
    provide_context(NotificationService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
