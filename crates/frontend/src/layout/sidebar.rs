use crate::routes::screen::{Screen, SCREEN_REGISTRY};
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Боковое меню. Разделы справочников и модераторов видит только
/// администратор — остальным пункты не показываются вовсе.
#[component]
pub fn Sidebar(active: RwSignal<Screen>) -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let admin = Signal::derive(move || {
        auth_state
            .get()
            .user_info
            .map(|u| u.role.is_admin())
            .unwrap_or(false)
    });

    let user_label = move || {
        auth_state
            .get()
            .user_info
            .map(|u| {
                let name = u.full_name.unwrap_or(u.username);
                format!("{} ({})", name, u.role.display_name())
            })
            .unwrap_or_default()
    };

    view! {
        <nav class="sidebar">
            <div class="sidebar__user">{user_label}</div>
            <ul class="sidebar__menu">
                {SCREEN_REGISTRY
                    .iter()
                    .map(|entry| {
                        let screen = entry.screen;
                        let label = entry.label;
                        let admin_only = entry.admin_only;
                        let item_class = move || {
                            if active.get() == screen {
                                "sidebar__item sidebar__item--active"
                            } else {
                                "sidebar__item"
                            }
                        };
                        view! {
                            <Show when=move || !admin_only || admin.get()>
                                <li class=item_class on:click=move |_| active.set(screen)>
                                    {label}
                                </li>
                            </Show>
                        }
                    })
                    .collect_view()}
            </ul>
            <button
                class="sidebar__logout"
                on:click=move |_| {
                    spawn_local(async move {
                        let _ = do_logout(set_auth_state).await;
                    });
                }
            >
                "Выйти"
            </button>
        </nav>
    }
}
