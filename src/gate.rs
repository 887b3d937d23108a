// SPDX-FileCopyrightText: 2025-2026 The Medcamp Authors
//
// SPDX-License-Identifier: Apache-2.0

use crate::{
    api::Role,
    route::{self, Access, Route},
    session,
};

/// The rendering outcome of one navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Decision {
    /// Session storage has not been read yet. Nothing data-bearing may
    /// render; the caller finishes initialization and decides again.
    Pending,
    Allow,
    Redirect(String),
    NotFound,
}

/// Decides whether the current session may render a route, and where to send
/// it otherwise. Pure in (session, route); holds no state of its own and is
/// recomputed on every navigation.
///
/// A session with the wrong role is handled exactly like no session at all,
/// except that it is never cleared: the same account may still open the
/// routes its actual role permits. The same policy applies to a session
/// bound to a different camp than the one in the URL.
pub(crate) fn decide(store: &session::Store, route: &Route) -> Decision {
    if !store.is_initialized() {
        return Decision::Pending;
    }

    if let Some(target) = route.forwards_to() {
        return Decision::Redirect(target);
    }

    if let Route::NotFound { .. } = *route {
        return Decision::NotFound;
    }

    match route.access() {
        Access::Public => Decision::Allow,
        Access::Admin => {
            let is_admin = store.user().map_or(false, |user| user.role == Role::Admin);
            if is_admin {
                Decision::Allow
            } else {
                Decision::Redirect(route::ADMIN_LOGIN_PATH.to_owned())
            }
        }
        Access::Staff(roles) => {
            let target = route::login_path(route.camp());
            let Some(user) = store.user() else {
                return Decision::Redirect(target);
            };
            if !roles.contains(&user.role) {
                return Decision::Redirect(target);
            }
            if store.bound_camp() != route.camp() {
                return Decision::Redirect(target);
            }
            Decision::Allow
        }
    }
}

#[cfg(test)]
mod tests {
    use uuid::uuid;

    use crate::{
        api::{Identity, Token},
        route::CampSlug,
        storage,
    };

    use super::*;

    fn staff(role: Role) -> Identity {
        Identity {
            id: uuid!("46640aca-1245-44d2-8ca9-d19750597d6c"),
            name: "Dr. Asha Rao".to_owned(),
            email: "asha@example.org".to_owned(),
            role,
            camp_id: Some(uuid!("0d0b28ba-9012-44ba-94e3-a2b7f2b62b16")),
        }
    }

    fn admin() -> Identity {
        Identity {
            id: uuid!("5e2d0649-8f87-4f44-9a3e-9bce51f1a452"),
            name: "Site Admin".to_owned(),
            email: "root@example.org".to_owned(),
            role: Role::Admin,
            camp_id: None,
        }
    }

    async fn empty_store() -> session::Store {
        let mut store = session::Store::new(Box::new(storage::Memory::<session::Data>::new()));
        store.initialize().await;
        store
    }

    async fn store_with(user: Identity, camp: Option<&str>) -> session::Store {
        let mut store = empty_store().await;
        store
            .sign_in(
                user,
                Token::from("tok123".to_owned()),
                camp.map(CampSlug::new),
            )
            .await;
        store
    }

    #[tokio::test]
    async fn nothing_renders_before_initialization() {
        let store = session::Store::new(Box::new(storage::Memory::<session::Data>::new()));
        assert_eq!(
            decide(&store, &Route::parse("/sunrise-camp/doctor")),
            Decision::Pending
        );
        assert_eq!(
            decide(&store, &Route::parse("/admin/dashboard")),
            Decision::Pending
        );
        // Even the public pages wait: a decision before the storage read
        // could misattribute a known session as anonymous.
        assert_eq!(
            decide(&store, &Route::parse("/sunrise-camp")),
            Decision::Pending
        );
    }

    #[tokio::test]
    async fn anonymous_visitors_reach_the_public_surface() {
        let store = empty_store().await;
        assert_eq!(
            decide(&store, &Route::parse("/sunrise-camp")),
            Decision::Allow
        );
        assert_eq!(
            decide(&store, &Route::parse("/sunrise-camp/login")),
            Decision::Allow
        );
        assert_eq!(decide(&store, &Route::parse("/admin/login")), Decision::Allow);
    }

    #[tokio::test]
    async fn anonymous_tenant_navigation_redirects_to_the_tenant_login() {
        let store = empty_store().await;
        for path in [
            "/sunrise-camp/doctor",
            "/sunrise-camp/doctor/my-patients",
            "/sunrise-camp/camp-head",
            "/sunrise-camp/camp-head/doctors",
            "/sunrise-camp/camp-head/visitors",
        ] {
            assert_eq!(
                decide(&store, &Route::parse(path)),
                Decision::Redirect("/sunrise-camp/login".to_owned()),
                "{path}"
            );
        }
    }

    #[tokio::test]
    async fn anonymous_admin_navigation_redirects_to_the_admin_login() {
        let store = empty_store().await;
        assert_eq!(
            decide(&store, &Route::parse("/admin/dashboard")),
            Decision::Redirect("/admin/login".to_owned())
        );
        assert_eq!(
            decide(&store, &Route::parse("/admin/camps/7281/manage")),
            Decision::Redirect("/admin/login".to_owned())
        );
    }

    #[tokio::test]
    async fn a_doctor_reaches_their_own_console_but_not_the_admin_surface() {
        let store = store_with(staff(Role::Doctor), Some("sunrise-camp")).await;
        assert_eq!(
            decide(&store, &Route::parse("/sunrise-camp/doctor")),
            Decision::Allow
        );
        assert_eq!(
            decide(&store, &Route::parse("/sunrise-camp/doctor/my-patients")),
            Decision::Allow
        );
        // Wrong role for an admin route redirects without clearing the
        // session.
        assert_eq!(
            decide(&store, &Route::parse("/admin/dashboard")),
            Decision::Redirect("/admin/login".to_owned())
        );
        assert!(store.is_authenticated());
    }

    #[tokio::test]
    async fn role_constraints_within_a_camp() {
        let doctor = store_with(staff(Role::Doctor), Some("sunrise-camp")).await;
        // The visitor roster is shared between both staff roles.
        assert_eq!(
            decide(&doctor, &Route::parse("/sunrise-camp/camp-head/visitors")),
            Decision::Allow
        );
        // The rest of the camp-head console is not.
        assert_eq!(
            decide(&doctor, &Route::parse("/sunrise-camp/camp-head")),
            Decision::Redirect("/sunrise-camp/login".to_owned())
        );
        assert_eq!(
            decide(&doctor, &Route::parse("/sunrise-camp/camp-head/doctors")),
            Decision::Redirect("/sunrise-camp/login".to_owned())
        );

        let head = store_with(staff(Role::CampHead), Some("sunrise-camp")).await;
        assert_eq!(
            decide(&head, &Route::parse("/sunrise-camp/camp-head")),
            Decision::Allow
        );
        // Any tenant staff may open the doctor console.
        assert_eq!(
            decide(&head, &Route::parse("/sunrise-camp/doctor")),
            Decision::Allow
        );
    }

    #[tokio::test]
    async fn cross_tenant_navigation_is_rejected_without_signing_out() {
        let store = store_with(staff(Role::Doctor), Some("sunrise-camp")).await;
        assert_eq!(
            decide(&store, &Route::parse("/lakeside-camp/doctor")),
            Decision::Redirect("/lakeside-camp/login".to_owned())
        );
        assert!(store.is_authenticated());
        // The slug comparison is exact; a case variant is another tenant.
        assert_eq!(
            decide(&store, &Route::parse("/Sunrise-Camp/doctor")),
            Decision::Redirect("/Sunrise-Camp/login".to_owned())
        );
    }

    #[tokio::test]
    async fn admins_never_hold_a_tenant_binding() {
        let store = store_with(admin(), None).await;
        assert_eq!(
            decide(&store, &Route::parse("/admin/dashboard")),
            Decision::Allow
        );
        assert_eq!(
            decide(&store, &Route::parse("/admin/camps/7281/manage")),
            Decision::Allow
        );
        // An admin session is not tenant staff.
        assert_eq!(
            decide(&store, &Route::parse("/sunrise-camp/doctor")),
            Decision::Redirect("/sunrise-camp/login".to_owned())
        );
    }

    #[tokio::test]
    async fn index_paths_forward_unconditionally() {
        let store = empty_store().await;
        assert_eq!(
            decide(&store, &Route::parse("/")),
            Decision::Redirect("/admin/login".to_owned())
        );
        assert_eq!(
            decide(&store, &Route::parse("/admin")),
            Decision::Redirect("/admin/dashboard".to_owned())
        );
    }

    #[tokio::test]
    async fn unknown_paths_settle_on_not_found() {
        let store = empty_store().await;
        assert_eq!(
            decide(&store, &Route::parse("/sunrise-camp/pharmacy")),
            Decision::NotFound
        );
    }
}
