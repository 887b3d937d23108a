// SPDX-FileCopyrightText: 2025-2026 The Medcamp Authors
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;
use log::error;
use uuid::Uuid;

use crate::{
    api::RecordConsultation,
    error::{Error, Result},
    route::{CampSlug, Route},
};

/// Record a consultation for a visitor, as the signed-in doctor.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The camp to record against; defaults to the camp bound to your
    /// session.
    #[clap(long)]
    camp: Option<String>,

    /// The visitor the consultation is for.
    #[clap(long)]
    visitor: Uuid,

    /// The diagnosis reached.
    #[clap(long)]
    diagnosis: String,

    /// The prescription issued, if any.
    #[clap(long)]
    prescription: Option<String>,

    /// Free-form notes for the camp record.
    #[clap(long)]
    notes: Option<String>,
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, ctx: super::Context) -> Result<()> {
        let camp = match self.camp.map(CampSlug::new) {
            Some(camp) => camp,
            None => {
                let mut store = ctx.http.session().lock().await;
                store.initialize().await;
                match store.bound_camp() {
                    Some(camp) => camp.clone(),
                    None => {
                        error!("Your session is not bound to a camp; pass --camp explicitly");
                        return Err(Error::Command);
                    }
                }
            }
        };

        super::authorize(&ctx, &Route::DoctorConsole { camp: camp.clone() }).await?;

        let consultation = ctx
            .http
            .execute(RecordConsultation {
                camp,
                visitor_id: self.visitor,
                diagnosis: self.diagnosis,
                prescription: self.prescription,
                notes: self.notes,
            })
            .await?;

        println!(
            "Recorded consultation {} for {}.",
            consultation.id, consultation.visitor_name
        );
        Ok(())
    }
}
