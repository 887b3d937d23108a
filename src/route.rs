// SPDX-FileCopyrightText: 2025-2026 The Medcamp Authors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::api::Role;

pub(crate) const ADMIN_LOGIN_PATH: &str = "/admin/login";
pub(crate) const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";

/// A camp's unique path segment. Slugs are opaque, case-sensitive
/// identifiers issued by the server at camp creation; they are carried
/// verbatim, never normalized, and never empty.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub(crate) struct CampSlug(String);

impl CampSlug {
    pub(crate) fn new<S: Into<String>>(slug: S) -> Self {
        Self(slug.into())
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    /// The login entry point for this camp's staff.
    pub(crate) fn login_path(&self) -> String {
        format!("/{}/login", self.0)
    }
}

impl fmt::Display for CampSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where an unauthenticated navigation lands: the tenant's login page when
/// the URL carries a slug, the admin login otherwise.
pub(crate) fn login_path(camp: Option<&CampSlug>) -> String {
    camp.map_or_else(|| ADMIN_LOGIN_PATH.to_owned(), CampSlug::login_path)
}

/// What session state a route family demands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Access {
    Public,
    /// Authenticated staff of the camp named in the URL, holding one of the
    /// listed roles.
    Staff(&'static [Role]),
    /// Authenticated service administrator.
    Admin,
}

const TENANT_STAFF: &[Role] = &[Role::Doctor, Role::CampHead];
const CAMP_HEAD_ONLY: &[Role] = &[Role::CampHead];

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Route {
    Root,
    AdminRoot,
    AdminLogin,
    AdminDashboard,
    AdminCampManage { id: String },
    Registration { camp: CampSlug },
    StaffLogin { camp: CampSlug },
    DoctorConsole { camp: CampSlug },
    MyPatients { camp: CampSlug },
    CampHeadConsole { camp: CampSlug },
    DoctorRoster { camp: CampSlug },
    VisitorRoster { camp: CampSlug },
    NotFound { path: String },
}

impl Route {
    /// Maps a path to its route. `admin` is a reserved first segment and can
    /// never be a camp slug. Query strings and fragments are ignored.
    pub(crate) fn parse(raw: &str) -> Self {
        let path = &raw[..raw.find(['?', '#']).unwrap_or(raw.len())];
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Root,
            ["admin"] => Self::AdminRoot,
            ["admin", "login"] => Self::AdminLogin,
            ["admin", "dashboard"] => Self::AdminDashboard,
            ["admin", "camps", id, "manage"] => Self::AdminCampManage {
                id: (*id).to_owned(),
            },
            ["admin", ..] => Self::NotFound {
                path: path.to_owned(),
            },
            [slug] => Self::Registration {
                camp: CampSlug::new(*slug),
            },
            [slug, "login"] => Self::StaffLogin {
                camp: CampSlug::new(*slug),
            },
            [slug, "doctor"] => Self::DoctorConsole {
                camp: CampSlug::new(*slug),
            },
            [slug, "doctor", "my-patients"] => Self::MyPatients {
                camp: CampSlug::new(*slug),
            },
            [slug, "camp-head"] => Self::CampHeadConsole {
                camp: CampSlug::new(*slug),
            },
            [slug, "camp-head", "doctors"] => Self::DoctorRoster {
                camp: CampSlug::new(*slug),
            },
            [slug, "camp-head", "visitors"] => Self::VisitorRoster {
                camp: CampSlug::new(*slug),
            },
            _ => Self::NotFound {
                path: path.to_owned(),
            },
        }
    }

    /// Tenant resolution: the camp slug the URL addresses, if any.
    pub(crate) fn camp(&self) -> Option<&CampSlug> {
        match *self {
            Self::Registration { ref camp }
            | Self::StaffLogin { ref camp }
            | Self::DoctorConsole { ref camp }
            | Self::MyPatients { ref camp }
            | Self::CampHeadConsole { ref camp }
            | Self::DoctorRoster { ref camp }
            | Self::VisitorRoster { ref camp } => Some(camp),
            Self::Root
            | Self::AdminRoot
            | Self::AdminLogin
            | Self::AdminDashboard
            | Self::AdminCampManage { .. }
            | Self::NotFound { .. } => None,
        }
    }

    /// The permission matrix, as one static table.
    pub(crate) fn access(&self) -> Access {
        match *self {
            Self::Root
            | Self::AdminRoot
            | Self::AdminLogin
            | Self::Registration { .. }
            | Self::StaffLogin { .. }
            | Self::NotFound { .. } => Access::Public,
            Self::AdminDashboard | Self::AdminCampManage { .. } => Access::Admin,
            Self::DoctorConsole { .. } | Self::MyPatients { .. } | Self::VisitorRoster { .. } => {
                Access::Staff(TENANT_STAFF)
            }
            Self::CampHeadConsole { .. } | Self::DoctorRoster { .. } => {
                Access::Staff(CAMP_HEAD_ONLY)
            }
        }
    }

    /// Unconditional forwards baked into the URL surface.
    pub(crate) fn forwards_to(&self) -> Option<String> {
        match *self {
            Self::Root => Some(ADMIN_LOGIN_PATH.to_owned()),
            Self::AdminRoot => Some(ADMIN_DASHBOARD_PATH.to_owned()),
            Self::AdminLogin
            | Self::AdminDashboard
            | Self::AdminCampManage { .. }
            | Self::Registration { .. }
            | Self::StaffLogin { .. }
            | Self::DoctorConsole { .. }
            | Self::MyPatients { .. }
            | Self::CampHeadConsole { .. }
            | Self::DoctorRoster { .. }
            | Self::VisitorRoster { .. }
            | Self::NotFound { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_admin_surface() {
        assert_eq!(Route::parse("/"), Route::Root);
        assert_eq!(Route::parse(""), Route::Root);
        assert_eq!(Route::parse("/admin"), Route::AdminRoot);
        assert_eq!(Route::parse("/admin/login"), Route::AdminLogin);
        assert_eq!(Route::parse("/admin/dashboard"), Route::AdminDashboard);
        assert_eq!(
            Route::parse("/admin/camps/7281/manage"),
            Route::AdminCampManage {
                id: "7281".to_owned()
            }
        );
    }

    #[test]
    fn parses_the_tenant_surface() {
        assert_eq!(
            Route::parse("/sunrise-camp"),
            Route::Registration {
                camp: CampSlug::new("sunrise-camp")
            }
        );
        assert_eq!(
            Route::parse("/sunrise-camp/login"),
            Route::StaffLogin {
                camp: CampSlug::new("sunrise-camp")
            }
        );
        assert_eq!(
            Route::parse("/sunrise-camp/doctor"),
            Route::DoctorConsole {
                camp: CampSlug::new("sunrise-camp")
            }
        );
        assert_eq!(
            Route::parse("/sunrise-camp/doctor/my-patients"),
            Route::MyPatients {
                camp: CampSlug::new("sunrise-camp")
            }
        );
        assert_eq!(
            Route::parse("/sunrise-camp/camp-head"),
            Route::CampHeadConsole {
                camp: CampSlug::new("sunrise-camp")
            }
        );
        assert_eq!(
            Route::parse("/sunrise-camp/camp-head/doctors"),
            Route::DoctorRoster {
                camp: CampSlug::new("sunrise-camp")
            }
        );
        assert_eq!(
            Route::parse("/sunrise-camp/camp-head/visitors"),
            Route::VisitorRoster {
                camp: CampSlug::new("sunrise-camp")
            }
        );
    }

    #[test]
    fn slugs_are_verbatim_and_case_sensitive() {
        let route = Route::parse("/SunRise-Camp/doctor");
        assert_eq!(
            route.camp().map(CampSlug::as_str),
            Some("SunRise-Camp"),
            "slug must not be case-folded"
        );
        assert_ne!(route.camp(), Some(&CampSlug::new("sunrise-camp")));
    }

    #[test]
    fn trailing_slashes_and_queries_do_not_change_the_route() {
        assert_eq!(Route::parse("/admin/dashboard/"), Route::AdminDashboard);
        assert_eq!(
            Route::parse("/sunrise-camp/login?next=%2Fsunrise-camp%2Fdoctor"),
            Route::StaffLogin {
                camp: CampSlug::new("sunrise-camp")
            }
        );
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert!(matches!(
            Route::parse("/sunrise-camp/pharmacy"),
            Route::NotFound { .. }
        ));
        assert!(matches!(
            Route::parse("/sunrise-camp/doctor/queue"),
            Route::NotFound { .. }
        ));
        assert!(matches!(Route::parse("/a/b/c/d"), Route::NotFound { .. }));
    }

    #[test]
    fn admin_is_a_reserved_segment() {
        // A camp can never be provisioned under the "admin" slug, so an
        // unknown admin subpath must not fall through to the tenant surface.
        assert!(matches!(
            Route::parse("/admin/camps"),
            Route::NotFound { .. }
        ));
        assert!(matches!(
            Route::parse("/admin/doctor"),
            Route::NotFound { .. }
        ));
    }

    #[test]
    fn forwards_cover_the_two_index_paths() {
        assert_eq!(
            Route::parse("/").forwards_to().as_deref(),
            Some(ADMIN_LOGIN_PATH)
        );
        assert_eq!(
            Route::parse("/admin").forwards_to().as_deref(),
            Some(ADMIN_DASHBOARD_PATH)
        );
        assert_eq!(Route::parse("/admin/dashboard").forwards_to(), None);
    }

    #[test]
    fn login_path_falls_back_to_admin() {
        let camp = CampSlug::new("sunrise-camp");
        assert_eq!(login_path(Some(&camp)), "/sunrise-camp/login");
        assert_eq!(login_path(None), ADMIN_LOGIN_PATH);
    }
}
