use crate::domain::a001_job_form::ui::list::JobFormList;
use crate::domain::a002_job::ui::details::JobCreate;
use crate::domain::a003_category::ui::list::CategoryList;
use crate::domain::a004_status::ui::list::StatusList;
use crate::domain::a005_application::ui::list::ApplicationList;
use crate::layout::sidebar::Sidebar;
use crate::layout::Shell;
use crate::routes::screen::Screen;
use crate::system::auth::context::{is_admin, use_auth};
use crate::system::pages::login::LoginPage;
use crate::system::users::ModeratorList;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let active = RwSignal::new(Screen::default());
    let admin = is_admin();

    view! {
        <Shell
            left=move || view! { <Sidebar active=active /> }.into_any()
            center=move || {
                // разделы справочников закрыты от не-администраторов и при
                // прямом переключении, не только спрятаны в меню
                match active.get() {
                    Screen::Applications => view! { <ApplicationList /> }.into_any(),
                    Screen::Jobs => view! { <JobCreate /> }.into_any(),
                    Screen::JobForms => view! { <JobFormList /> }.into_any(),
                    Screen::Categories if admin => view! { <CategoryList /> }.into_any(),
                    Screen::Statuses if admin => view! { <StatusList /> }.into_any(),
                    Screen::Moderators if admin => view! { <ModeratorList /> }.into_any(),
                    _ => view! { <div class="page">"Недостаточно прав"</div> }.into_any(),
                }
            }
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
