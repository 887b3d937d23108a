// SPDX-FileCopyrightText: 2025-2026 The Medcamp Authors
//
// SPDX-License-Identifier: Apache-2.0

pub(crate) mod admin;
pub(crate) mod camp_head;
pub(crate) mod doctor;
pub(crate) mod login;
pub(crate) mod not_found;
pub(crate) mod registration;

use tabled::{
    settings::{object::Segment, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::{command::Context, error::Result, route::Route};

/// Role-scoped view dispatch: maps an allowed route to exactly one renderer.
/// Returns a follow-on navigation target when the rendered view wants the
/// navigation to continue elsewhere (the login pages do, after a successful
/// sign-in).
pub(crate) async fn render(ctx: &Context, route: &Route) -> Result<Option<String>> {
    match *route {
        Route::Registration { ref camp } => {
            registration::render(ctx, camp).await?;
            Ok(None)
        }
        Route::StaffLogin { ref camp } => login::staff(ctx, camp).await.map(Some),
        Route::AdminLogin => login::admin(ctx).await.map(Some),
        Route::DoctorConsole { ref camp } => {
            doctor::console(ctx, camp).await?;
            Ok(None)
        }
        Route::MyPatients { ref camp } => {
            doctor::my_patients(ctx, camp).await?;
            Ok(None)
        }
        Route::CampHeadConsole { ref camp } => {
            camp_head::console(ctx, camp).await?;
            Ok(None)
        }
        Route::DoctorRoster { ref camp } => {
            camp_head::doctors(ctx, camp).await?;
            Ok(None)
        }
        Route::VisitorRoster { ref camp } => {
            camp_head::visitors(ctx, camp).await?;
            Ok(None)
        }
        Route::AdminDashboard => {
            admin::dashboard(ctx).await?;
            Ok(None)
        }
        Route::AdminCampManage { ref id } => {
            admin::manage(ctx, id).await?;
            Ok(None)
        }
        Route::NotFound { ref path } => {
            not_found::render(path);
            Ok(None)
        }
        // Index routes forward before dispatch ever sees them.
        Route::Root | Route::AdminRoot => Ok(None),
    }
}

/// Shared table dressing for roster and camp listings.
pub(crate) fn table<T: Tabled>(rows: &[T]) -> Table {
    let mut table = Table::new(rows);
    _ = table
        .with(Style::rounded())
        .with(Modify::new(Segment::all()).with(Alignment::left()));
    table
}
