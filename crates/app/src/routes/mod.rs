pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod register;
pub mod weather;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCloudSun, LdGraduationCap, LdLogOut};
use dioxus_free_icons::Icon;
use shared_types::{AppPath, UserRole};

use crate::auth::{use_logout, use_session};
use crate::guard::{ProtectedRoute, PublicRoute};
use dashboard::instructor::InstructorDashboard;
use dashboard::student::StudentDashboard;
use login::Login;
use not_found::NotFound;
use register::Register;
use weather::Weather;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Root {},
    #[layout(PublicLayout)]
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
    #[end_layout]
    #[layout(StudentLayout)]
        #[route("/dashboard/student")]
        StudentDashboard {},
    #[end_layout]
    #[layout(InstructorLayout)]
        #[route("/dashboard/instructor")]
        InstructorDashboard {},
    #[end_layout]
    #[route("/weather")]
    Weather {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl From<AppPath> for Route {
    fn from(path: AppPath) -> Self {
        match path {
            AppPath::Root => Route::Root {},
            AppPath::Login => Route::Login {},
            AppPath::Register => Route::Register {},
            AppPath::StudentDashboard => Route::StudentDashboard {},
            AppPath::InstructorDashboard => Route::InstructorDashboard {},
            AppPath::Weather => Route::Weather {},
        }
    }
}

/// `/` has no page of its own.
#[component]
fn Root() -> Element {
    navigator().replace(Route::from(client::guard::root()));
    rsx! {}
}

#[component]
fn PublicLayout() -> Element {
    rsx! {
        PublicRoute {
            Outlet::<Route> {}
        }
    }
}

#[component]
fn StudentLayout() -> Element {
    rsx! {
        ProtectedRoute { role: UserRole::Student,
            AppLayout { Outlet::<Route> {} }
        }
    }
}

#[component]
fn InstructorLayout() -> Element {
    rsx! {
        ProtectedRoute { role: UserRole::Instructor,
            AppLayout { Outlet::<Route> {} }
        }
    }
}

/// Top bar shared by the signed-in pages.
#[component]
fn AppLayout(children: Element) -> Element {
    let mut logout = use_logout();
    let session = use_session();
    let name = session
        .as_ref()
        .map(|s| s.display_name().to_string())
        .unwrap_or_default();
    let role = session.as_ref().map(|s| s.role.display_name()).unwrap_or_default();

    rsx! {
        div { class: "app-shell",
            header { class: "app-navbar",
                div { class: "app-brand",
                    Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 20, height: 20 }
                    span { "University Portal" }
                }
                nav { class: "app-nav",
                    Link { to: Route::Weather {}, class: "app-nav-link",
                        Icon::<LdCloudSun> { icon: LdCloudSun, width: 16, height: 16 }
                        span { "Weather" }
                    }
                    span { class: "app-user",
                        "{name}"
                        if !role.is_empty() {
                            span { class: "app-user-role", "{role}" }
                        }
                    }
                    button {
                        class: "app-nav-link app-logout",
                        onclick: move |_| {
                            logout();
                            navigator().replace(Route::Login {});
                        },
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        span { "Logout" }
                    }
                }
            }
            main { class: "app-main", {children} }
        }
    }
}
